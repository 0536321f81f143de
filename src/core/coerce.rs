//! Text-to-number coercion for raw form input.
//!
//! Whatever the user typed, the calculator gets a finite number back.
//! Anything that does not read as a number becomes `0.0`.

/// Collapse NaN, infinities and negative zero to `0.0`.
pub fn or_zero(x: f64) -> f64 {
    if x.is_finite() && x != 0.0 {
        x
    } else {
        0.0
    }
}

/// Coerce raw field text into a number.
///
/// Accepts decimal literals (`"12"`, `"-3.5"`, `".5"`, `"1e3"`) and unsigned
/// `0x` / `0o` / `0b` integer literals, with surrounding whitespace ignored.
/// Empty, non-numeric and overflowing input all yield `0.0`.
pub fn to_number(text: &str) -> f64 {
    let s = text.trim();
    if s.is_empty() {
        return 0.0;
    }

    let value = parse_radix(s).or_else(|| parse_decimal(s)).unwrap_or(0.0);
    or_zero(value)
}

fn parse_radix(s: &str) -> Option<f64> {
    let radix = match s.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };

    let digits = &s[2..];
    if digits.is_empty() {
        return None;
    }

    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

fn parse_decimal(s: &str) -> Option<f64> {
    // f64::from_str also takes "inf" and "NaN"; keep to plain literals.
    let plain = s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'));
    if !plain {
        return None;
    }
    s.parse::<f64>().ok()
}
