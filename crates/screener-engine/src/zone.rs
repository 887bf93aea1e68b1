//! RSI zones.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// RSI below this is oversold.
pub const OVERSOLD_BELOW: f64 = 30.0;
/// RSI below this (and not oversold) is weak.
pub const WEAK_BELOW: f64 = 40.0;

/// Coarse RSI bucket shown next to a record.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RsiZone {
    /// RSI below 30.
    Oversold,
    /// RSI from 30 up to 40.
    Weak,
    /// RSI 40 or higher.
    Neutral,
}

impl RsiZone {
    /// Bucket an RSI value.
    pub fn from_rsi(rsi: f64) -> Self {
        if rsi < OVERSOLD_BELOW {
            Self::Oversold
        } else if rsi < WEAK_BELOW {
            Self::Weak
        } else {
            Self::Neutral
        }
    }
}
