use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::coerce::to_number;
use crate::core::sizing::PositionSizer;
use crate::error::SizerError;
use crate::models::{PositionMetrics, PriceSet, RiskInput, SizingStrategy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Symbol,
    Capital,
    Risk,
    Entry,
    Tp,
    Sl,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Symbol,
        FormField::Capital,
        FormField::Risk,
        FormField::Entry,
        FormField::Tp,
        FormField::Sl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Symbol => "symbol",
            FormField::Capital => "capital",
            FormField::Risk => "risk",
            FormField::Entry => "entry",
            FormField::Tp => "tp",
            FormField::Sl => "sl",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FormField {
    type Err = SizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| SizerError::UnknownField(s.to_string()))
    }
}

/// Raw text of every input on the sizing form.
///
/// The form is a value: updates return a fresh copy and leave the
/// original untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PositionForm {
    pub symbol: String,
    pub capital: String,
    pub risk: String,
    pub entry: String,
    pub tp: String,
    pub sl: String,
}

impl PositionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Symbol => &self.symbol,
            FormField::Capital => &self.capital,
            FormField::Risk => &self.risk,
            FormField::Entry => &self.entry,
            FormField::Tp => &self.tp,
            FormField::Sl => &self.sl,
        }
    }

    /// Replace one field. Symbols are stored upper-cased.
    pub fn with(&self, field: FormField, text: &str) -> PositionForm {
        let mut next = self.clone();
        match field {
            FormField::Symbol => next.symbol = text.to_uppercase(),
            FormField::Capital => next.capital = text.to_string(),
            FormField::Risk => next.risk = text.to_string(),
            FormField::Entry => next.entry = text.to_string(),
            FormField::Tp => next.tp = text.to_string(),
            FormField::Sl => next.sl = text.to_string(),
        }
        next
    }

    pub fn apply<'a, I>(&self, updates: I) -> PositionForm
    where
        I: IntoIterator<Item = (FormField, &'a str)>,
    {
        updates
            .into_iter()
            .fold(self.clone(), |form, (field, text)| form.with(field, text))
    }

    pub fn price_set(&self) -> PriceSet {
        PriceSet::new(to_number(&self.entry), to_number(&self.sl), to_number(&self.tp))
    }

    pub fn risk_input(&self) -> RiskInput {
        RiskInput::new(to_number(&self.risk), to_number(&self.capital))
    }

    pub fn evaluate(&self, strategy: SizingStrategy) -> PositionMetrics {
        PositionSizer::new(strategy).calculate(&self.price_set(), &self.risk_input())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{assert_close, filled_form};

    #[test]
    fn field_names_round_trip() {
        for field in FormField::ALL {
            assert_eq!(field.as_str().parse::<FormField>().unwrap(), field);
        }
        assert!(matches!(
            "stop".parse::<FormField>(),
            Err(SizerError::UnknownField(_))
        ));
    }

    #[test]
    fn with_leaves_original_untouched() {
        let blank = PositionForm::new();
        let next = blank.with(FormField::Entry, "101.5");
        assert_eq!(blank.entry, "");
        assert_eq!(next.entry, "101.5");
        assert_eq!(next.get(FormField::Entry), "101.5");
    }

    #[test]
    fn symbol_is_uppercased() {
        let form = PositionForm::new().with(FormField::Symbol, "ptt");
        assert_eq!(form.symbol, "PTT");
    }

    #[test]
    fn apply_folds_updates_in_order() {
        let form = PositionForm::new().apply([
            (FormField::Risk, "100"),
            (FormField::Risk, "250"),
            (FormField::Capital, "10000"),
        ]);
        assert_eq!(form.risk, "250");
        assert_eq!(form.capital, "10000");
        assert_eq!(form.entry, "");
    }

    #[test]
    fn evaluate_coerces_text() {
        let m = filled_form().evaluate(SizingStrategy::Absolute);
        assert_close(m.volume, 100.0);
        assert_close(m.risk_percent, 2.0);
    }

    #[test]
    fn blank_form_is_all_zero() {
        let m = PositionForm::new().evaluate(SizingStrategy::Absolute);
        assert_eq!(m, PositionMetrics::default());
    }

    #[test]
    fn garbage_fields_are_zero() {
        let form = filled_form().with(FormField::Sl, "abc");
        let prices = form.price_set();
        assert_eq!(prices.stop_loss, 0.0);
        let m = form.evaluate(SizingStrategy::Absolute);
        assert_close(m.sl_point, 100.0);
        assert_close(m.volume, 10.0);
    }
}
