use tracing::debug;

use crate::core::coerce::or_zero;
use crate::models::{Direction, PositionMetrics, PriceSet, RiskInput, SizingStrategy};

/// Units to trade so that a stop-loss hit costs exactly `risk_amount`.
pub fn as_position_size(risk_amount: f64, sl_point: f64) -> f64 {
    or_zero(risk_amount / sl_point)
}

pub fn as_risk_reward_ratio(tp_point: f64, sl_point: f64) -> f64 {
    or_zero(tp_point / sl_point)
}

/// Returns `(profit, loss)` for a position of `volume` units.
pub fn as_profit_loss(volume: f64, tp_point: f64, sl_point: f64) -> (f64, f64) {
    (or_zero(volume * tp_point), or_zero(volume * sl_point))
}

pub fn as_risk_percent(risk_amount: f64, capital_amount: f64) -> f64 {
    or_zero(risk_amount / capital_amount * 100.0)
}

/// Per-unit stop and target distances as `(sl_point, tp_point)`.
pub fn distances(prices: &PriceSet, strategy: SizingStrategy) -> (f64, f64) {
    match strategy {
        SizingStrategy::Absolute => (
            or_zero((prices.entry - prices.stop_loss).abs()),
            or_zero((prices.take_profit - prices.stop_loss).abs()),
        ),
        SizingStrategy::Signed => (
            or_zero(prices.entry - prices.stop_loss),
            or_zero(prices.take_profit - prices.entry),
        ),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PositionSizer {
    pub strategy: SizingStrategy,
}

impl PositionSizer {
    pub fn new(strategy: SizingStrategy) -> Self {
        Self { strategy }
    }

    pub fn calculate(&self, prices: &PriceSet, risk: &RiskInput) -> PositionMetrics {
        let (sl_point, tp_point) = distances(prices, self.strategy);

        if sl_point == 0.0 {
            debug!(
                "Stop-loss sits on entry ({}); position collapses to zero",
                prices.entry
            );
        }

        let volume = as_position_size(risk.risk_amount, sl_point);
        let (profit, loss) = as_profit_loss(volume, tp_point, sl_point);

        PositionMetrics {
            entry: prices.entry,
            take_profit: prices.take_profit,
            stop_loss: prices.stop_loss,
            sl_point,
            tp_point,
            risk_reward_ratio: as_risk_reward_ratio(tp_point, sl_point),
            risk_percent: as_risk_percent(risk.risk_amount, risk.capital_amount),
            volume,
            amount: or_zero(volume * prices.entry),
            profit,
            loss,
        }
    }

    /// Trade side implied by the stop placement.
    pub fn direction(&self, prices: &PriceSet) -> Option<Direction> {
        Direction::from_prices(prices.entry, prices.stop_loss)
    }
}

/// Size a position with the default (absolute) formulas.
pub fn position_sizing_calculator(prices: &PriceSet, risk: &RiskInput) -> PositionMetrics {
    PositionSizer::default().calculate(prices, risk)
}
