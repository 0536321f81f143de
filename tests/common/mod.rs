use position_sizer::models::{FormField, PositionForm};

/// Build a form from (entry, sl, tp, risk, capital) text, as a user would type it.
pub fn make_form(entry: &str, sl: &str, tp: &str, risk: &str, capital: &str) -> PositionForm {
    PositionForm::new().apply([
        (FormField::Entry, entry),
        (FormField::Sl, sl),
        (FormField::Tp, tp),
        (FormField::Risk, risk),
        (FormField::Capital, capital),
    ])
}

pub fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
