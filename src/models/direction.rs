use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SizerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Long,
    Short,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Long => write!(f, "long"),
            Direction::Short => write!(f, "short"),
        }
    }
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Long => "long",
            Direction::Short => "short",
        }
    }

    /// A stop below entry protects a long, above entry a short.
    /// No direction when the two coincide.
    pub fn from_prices(entry: f64, stop_loss: f64) -> Option<Direction> {
        if stop_loss < entry {
            Some(Direction::Long)
        } else if stop_loss > entry {
            Some(Direction::Short)
        } else {
            None
        }
    }
}

/// Which set of formulas turns prices into distances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizingStrategy {
    /// Unsigned distances: `|entry - sl|` and `|tp - sl|`.
    #[default]
    Absolute,
    /// Signed distances: `entry - sl` and `tp - entry`. Volume goes
    /// negative for shorts.
    Signed,
}

impl fmt::Display for SizingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl SizingStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SizingStrategy::Absolute => "absolute",
            SizingStrategy::Signed => "signed",
        }
    }
}

impl FromStr for SizingStrategy {
    type Err = SizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "absolute" | "long-only" => Ok(SizingStrategy::Absolute),
            "signed" | "directional" => Ok(SizingStrategy::Signed),
            other => Err(SizerError::UnknownStrategy(other.to_string())),
        }
    }
}
