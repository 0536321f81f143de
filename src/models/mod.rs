pub mod direction;
pub mod form;
pub mod prices;

pub use direction::*;
pub use form::{FormField, PositionForm};
pub use prices::{PositionMetrics, PriceSet, RiskInput};
