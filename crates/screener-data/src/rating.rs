//! Analyst rating labels.
//!
//! The data producer ships two sentiment fields per record: a consensus
//! recommendation mean on a 1.0 (strong buy) to 5.0 (strong sell) scale, and
//! a categorical recommendation key such as `"buy"`.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Five-step analyst rating scale.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    /// Consensus mean at or below 1.5
    #[display("Strong Buy")]
    StrongBuy,

    /// Consensus mean at or below 2.5
    #[display("Buy")]
    Buy,

    /// Consensus mean at or below 3.5
    #[display("Hold")]
    Hold,

    /// Consensus mean at or below 4.5
    #[display("Sell")]
    Sell,

    /// Consensus mean above 4.5
    #[display("Strong Sell")]
    StrongSell,
}

impl Rating {
    /// Returns all ratings, most bullish first.
    pub const fn all() -> [Self; 5] {
        [
            Self::StrongBuy,
            Self::Buy,
            Self::Hold,
            Self::Sell,
            Self::StrongSell,
        ]
    }

    /// Bucket a recommendation mean into a rating.
    ///
    /// Bucket upper bounds are inclusive.
    pub fn from_mean(mean: f64) -> Self {
        if mean <= 1.5 {
            Self::StrongBuy
        } else if mean <= 2.5 {
            Self::Buy
        } else if mean <= 3.5 {
            Self::Hold
        } else if mean <= 4.5 {
            Self::Sell
        } else {
            Self::StrongSell
        }
    }

    /// The producer's recommendation key for this rating.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::StrongBuy => "strong_buy",
            Self::Buy => "buy",
            Self::Hold => "hold",
            Self::Sell => "sell",
            Self::StrongSell => "strong_sell",
        }
    }

    /// Parse a producer recommendation key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().into_iter().find(|rating| rating.key() == key)
    }
}

/// Categorical recommendation attached to a record.
///
/// Keys outside the five-step scale (e.g. `"none"`) are preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Recommendation {
    /// One of the five known rating keys.
    Rated(Rating),

    /// Any other key.
    Other(String),
}

impl Recommendation {
    /// Parse a recommendation key. Blank keys mean "no recommendation".
    pub fn parse(key: &str) -> Option<Self> {
        let key = key.trim();
        if key.is_empty() {
            None
        } else {
            Some(Self::from(key.to_string()))
        }
    }

    /// The raw recommendation key.
    pub fn key(&self) -> &str {
        match self {
            Self::Rated(rating) => rating.key(),
            Self::Other(key) => key,
        }
    }

    /// Human readable label.
    pub fn label(&self) -> String {
        match self {
            Self::Rated(rating) => rating.to_string(),
            Self::Other(key) => key.clone(),
        }
    }

    /// The rating, when the key is one of the known five.
    pub const fn rating(&self) -> Option<Rating> {
        match self {
            Self::Rated(rating) => Some(*rating),
            Self::Other(_) => None,
        }
    }
}

impl From<String> for Recommendation {
    fn from(key: String) -> Self {
        Rating::from_key(&key).map_or(Self::Other(key), Self::Rated)
    }
}

impl From<Recommendation> for String {
    fn from(recommendation: Recommendation) -> Self {
        match recommendation {
            Recommendation::Rated(rating) => rating.key().to_string(),
            Recommendation::Other(key) => key,
        }
    }
}

impl From<Rating> for Recommendation {
    fn from(rating: Rating) -> Self {
        Self::Rated(rating)
    }
}
