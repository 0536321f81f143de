use crate::models::{FormField, PositionForm, PriceSet, RiskInput};

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

/// Long idea: entry 100, stop 90, target 130, risking 1,000 of 50,000.
pub fn long_setup() -> (PriceSet, RiskInput) {
    (
        PriceSet::new(100.0, 90.0, 130.0),
        RiskInput::new(1_000.0, 50_000.0),
    )
}

/// Short idea: entry 100, stop 110, target 70, risking 1,000 of 50,000.
pub fn short_setup() -> (PriceSet, RiskInput) {
    (
        PriceSet::new(100.0, 110.0, 70.0),
        RiskInput::new(1_000.0, 50_000.0),
    )
}

/// The long setup as typed into the form.
pub fn filled_form() -> PositionForm {
    PositionForm::new().apply([
        (FormField::Symbol, "aot"),
        (FormField::Capital, "50000"),
        (FormField::Risk, "1000"),
        (FormField::Entry, "100"),
        (FormField::Sl, "90"),
        (FormField::Tp, "130"),
    ])
}
