use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::core::format::NumberFormat;
use crate::error::Result;
use crate::models::{Direction, PositionForm, PositionMetrics, SizingStrategy};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRow {
    pub title: String,
    pub value: String,
}

impl CardRow {
    fn new(title: &str, value: String) -> Self {
        Self {
            title: title.to_string(),
            value,
        }
    }
}

/// The rendered result of one sizing run: labeled rows ready for display,
/// plus the raw metrics they were built from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultCard {
    pub symbol: String,
    pub strategy: SizingStrategy,
    pub direction: Option<Direction>,
    pub created_at: DateTime<Utc>,
    pub metrics: PositionMetrics,
    pub rows: Vec<CardRow>,
}

impl ResultCard {
    pub fn new(form: &PositionForm, strategy: SizingStrategy, fmt: &NumberFormat) -> Self {
        let metrics = form.evaluate(strategy);
        Self::from_metrics(&form.symbol, strategy, metrics, fmt, Utc::now())
    }

    pub fn from_metrics(
        symbol: &str,
        strategy: SizingStrategy,
        metrics: PositionMetrics,
        fmt: &NumberFormat,
        created_at: DateTime<Utc>,
    ) -> Self {
        let m = &metrics;
        let rows = vec![
            CardRow::new("Stock Symbol", symbol.to_string()),
            CardRow::new(
                "Entry/SL/TP",
                format!(
                    "{}/{}/{}",
                    fmt.format(m.entry, 2),
                    fmt.format(m.stop_loss, 2),
                    fmt.format(m.take_profit, 2)
                ),
            ),
            CardRow::new(
                "Risk Reward Ratio",
                format!("RR:1/{}", fmt.format(m.risk_reward_ratio, 0)),
            ),
            CardRow::new(
                "Loss / Profit (Single stock)",
                format!("{} / {}", fmt.format(m.sl_point, 2), fmt.format(m.tp_point, 2)),
            ),
            CardRow::new(
                "Loss / Profit",
                format!("{} / {}", fmt.format(m.loss, 0), fmt.format(m.profit, 0)),
            ),
            CardRow::new("% Risk", format!("{}%", fmt.format(m.risk_percent, 2))),
            CardRow::new("Position volume", fmt.format(m.volume, 0)),
            CardRow::new("Position amount", fmt.format(m.amount, 2)),
        ];

        Self {
            symbol: symbol.to_string(),
            strategy,
            direction: Direction::from_prices(m.entry, m.stop_loss),
            created_at,
            metrics,
            rows,
        }
    }

    pub fn value(&self, title: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|r| r.title == title)
            .map(|r| r.value.as_str())
    }

    pub fn print_summary(&self) {
        let width = self.rows.iter().map(|r| r.title.len()).max().unwrap_or(0);
        let direction = self.direction.map(|d| d.as_str()).unwrap_or("-");

        println!();
        println!("{}", "=".repeat(50));
        println!("  POSITION SIZING ({} / {})", self.strategy, direction);
        println!("{}", "=".repeat(50));
        for row in &self.rows {
            println!("  {:>width$}  {}", row.title, row.value, width = width);
        }
        println!("{}", "=".repeat(50));
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// `position_<SYMBOL>_<YYYYmmdd_HHMMSS>.json`, symbol omitted when blank.
    pub fn file_name(&self) -> String {
        let stamp = self.created_at.format("%Y%m%d_%H%M%S");
        let symbol: String = self
            .symbol
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
            .collect();
        if symbol.is_empty() {
            format!("position_{}.json", stamp)
        } else {
            format!("position_{}_{}.json", symbol, stamp)
        }
    }

    pub fn save(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let path = dir.join(self.file_name());
        fs::write(&path, self.to_json()?)?;
        info!("Result card saved to {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::filled_form;
    use chrono::TimeZone;

    fn card() -> ResultCard {
        let form = filled_form();
        let metrics = form.evaluate(SizingStrategy::Absolute);
        let at = Utc.with_ymd_and_hms(2024, 3, 8, 9, 30, 5).unwrap();
        ResultCard::from_metrics(
            &form.symbol,
            SizingStrategy::Absolute,
            metrics,
            &NumberFormat::default(),
            at,
        )
    }

    #[test]
    fn rows_in_display_order() {
        let c = card();
        let titles: Vec<&str> = c.rows.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(
            titles,
            [
                "Stock Symbol",
                "Entry/SL/TP",
                "Risk Reward Ratio",
                "Loss / Profit (Single stock)",
                "Loss / Profit",
                "% Risk",
                "Position volume",
                "Position amount",
            ]
        );
    }

    #[test]
    fn row_values_use_local_formatting() {
        let c = card();
        assert_eq!(c.value("Stock Symbol"), Some("AOT"));
        assert_eq!(c.value("Entry/SL/TP"), Some("100.00/90.00/130.00"));
        assert_eq!(c.value("Risk Reward Ratio"), Some("RR:1/4"));
        assert_eq!(c.value("Loss / Profit (Single stock)"), Some("10.00 / 40.00"));
        assert_eq!(c.value("Loss / Profit"), Some("1,000 / 4,000"));
        assert_eq!(c.value("% Risk"), Some("2.00%"));
        assert_eq!(c.value("Position volume"), Some("100"));
        assert_eq!(c.value("Position amount"), Some("10,000.00"));
        assert_eq!(c.direction, Some(Direction::Long));
    }

    #[test]
    fn file_name_from_timestamp() {
        let mut c = card();
        assert_eq!(c.file_name(), "position_AOT_20240308_093005.json");
        c.symbol = "BTC/USD".to_string();
        assert_eq!(c.file_name(), "position_BTC-USD_20240308_093005.json");
        c.symbol.clear();
        assert_eq!(c.file_name(), "position_20240308_093005.json");
    }

    #[test]
    fn json_carries_metrics() {
        let json = card().to_json().unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["strategy"], "absolute");
        assert_eq!(v["direction"], "long");
        assert_eq!(v["metrics"]["volume"], 100.0);
        assert_eq!(v["rows"].as_array().unwrap().len(), 8);
    }
}
