use serde::{Deserialize, Serialize};
use crate::core::format::NumberFormat;
use crate::models::{FormField, PositionForm, SizingStrategy};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Form defaults (raw text, coerced like typed input)
    pub default_capital: String,
    pub default_risk: String,

    // Sizing
    pub strategy: SizingStrategy,

    // Display
    pub number_format: NumberFormat,

    // Output
    pub output_dir: String,

    // Logging
    pub log_level: String,

    // Rejected SIZING_STRATEGY, reported once logging is up
    #[serde(skip)]
    pub strategy_error: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_capital: String::new(),
            default_risk: String::new(),
            strategy: SizingStrategy::default(),
            number_format: NumberFormat::default(),
            output_dir: "cards".to_string(),
            log_level: "info".to_string(),
            strategy_error: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; missing keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let env = |key: &str, default: &str| -> String {
            lookup(key).unwrap_or_else(|| default.to_string())
        };

        let (strategy, strategy_error) = match lookup("SIZING_STRATEGY") {
            Some(raw) => match raw.parse::<SizingStrategy>() {
                Ok(s) => (s, None),
                Err(e) => (defaults.strategy, Some(e.to_string())),
            },
            None => (defaults.strategy, None),
        };

        let number_format = NumberFormat::new(
            &env("DISPLAY_GROUP_SEPARATOR", &defaults.number_format.group_separator),
            &env("DISPLAY_DECIMAL_SEPARATOR", &defaults.number_format.decimal_separator),
        );

        Config {
            default_capital: env("DEFAULT_CAPITAL", &defaults.default_capital),
            default_risk: env("DEFAULT_RISK", &defaults.default_risk),
            strategy,
            number_format,
            output_dir: env("OUTPUT_DIR", &defaults.output_dir),
            log_level: env("LOG_LEVEL", &defaults.log_level),
            strategy_error,
        }
    }

    /// A blank form pre-filled with the configured capital and risk.
    pub fn initial_form(&self) -> PositionForm {
        PositionForm::new().apply([
            (FormField::Capital, self.default_capital.as_str()),
            (FormField::Risk, self.default_risk.as_str()),
        ])
    }
}
