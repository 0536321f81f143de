use serde::{Deserialize, Serialize};

/// The three price levels of one trade idea.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceSet {
    pub entry: f64,
    pub take_profit: f64,
    pub stop_loss: f64,
}

impl PriceSet {
    pub fn new(entry: f64, stop_loss: f64, take_profit: f64) -> Self {
        Self {
            entry,
            take_profit,
            stop_loss,
        }
    }
}

/// Money at stake: what the trader accepts losing, out of what they hold.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RiskInput {
    pub risk_amount: f64,
    pub capital_amount: f64,
}

impl RiskInput {
    pub fn new(risk_amount: f64, capital_amount: f64) -> Self {
        Self {
            risk_amount,
            capital_amount,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PositionMetrics {
    // Echoed prices
    pub entry: f64,
    pub take_profit: f64,
    pub stop_loss: f64,

    // Per-unit distances
    pub sl_point: f64,
    pub tp_point: f64,

    // Ratios
    pub risk_reward_ratio: f64,
    pub risk_percent: f64,

    // Position
    pub volume: f64,
    pub amount: f64,
    pub profit: f64,
    pub loss: f64,
}
