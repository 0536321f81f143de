use serde::{Deserialize, Serialize};

/// Most fraction digits rendered; larger requests are clamped.
pub const MAX_FRACTION_DIGITS: usize = 100;

/// Grouping and decimal marks for display. Defaults to Thai (`th-TH`)
/// conventions, which share the Western `1,234.56` layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    pub group_separator: String,
    pub decimal_separator: String,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            group_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
        }
    }
}

impl NumberFormat {
    pub fn new(group_separator: &str, decimal_separator: &str) -> Self {
        Self {
            group_separator: group_separator.to_string(),
            decimal_separator: decimal_separator.to_string(),
        }
    }

    /// Render `value` with exactly `decimals` fraction digits.
    ///
    /// Rounds half away from zero on the shortest decimal form of the
    /// value, so `1.005` shows as `1.01` at two places. At most
    /// [`MAX_FRACTION_DIGITS`] places are rendered.
    pub fn format(&self, value: f64, decimals: usize) -> String {
        let decimals = decimals.min(MAX_FRACTION_DIGITS);
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            let inf = if value > 0.0 { "∞" } else { "-∞" };
            return inf.to_string();
        }

        // `{}` on f64 is the shortest round-trip form and never uses an exponent.
        let repr = format!("{}", value.abs());
        let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));
        let (int_digits, frac_digits) = round_half_up(int_part, frac_part, decimals);

        let mut out = String::new();
        if value.is_sign_negative() {
            out.push('-');
        }
        out.push_str(&self.group(&int_digits));
        if decimals > 0 {
            out.push_str(&self.decimal_separator);
            out.push_str(&frac_digits);
        }
        out
    }

    fn group(&self, digits: &str) -> String {
        let len = digits.len();
        let mut out = String::with_capacity(len + len / 3 * self.group_separator.len());
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push_str(&self.group_separator);
            }
            out.push(c);
        }
        out
    }
}

/// Round the digit strings `int.frac` to `decimals` places, returning the
/// new integer and fraction digit strings.
fn round_half_up(int: &str, frac: &str, decimals: usize) -> (String, String) {
    let mut digits: Vec<u8> = int.bytes().chain(frac.bytes()).map(|b| b - b'0').collect();
    let keep = int.len() + decimals;
    if digits.len() < keep {
        digits.resize(keep, 0);
    }

    let round_up = digits.get(keep).is_some_and(|&d| d >= 5);
    digits.truncate(keep);

    if round_up {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == 9 {
                *d = 0;
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }

    let split = digits.len() - decimals;
    let render = |ds: &[u8]| ds.iter().map(|d| char::from(b'0' + d)).collect::<String>();
    (render(&digits[..split]), render(&digits[split..]))
}

/// Format with the default (Thai) conventions.
pub fn to_local_string(value: f64, decimals: usize) -> String {
    NumberFormat::default().format(value, decimals)
}
