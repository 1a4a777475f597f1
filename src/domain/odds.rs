//! Odds payload types: outcomes, markets, bookmakers and the per-event root.
//!
//! These mirror the provider's nesting (bookmakers → markets → outcomes)
//! but are provider-agnostic. Wire decoding lives in the adapter layer.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

/// Suffix the provider appends to a market key for its extended-line variant.
pub const ALTERNATE_SUFFIX: &str = "_alternate";

/// Build the alternate market key for a standard market key.
#[must_use]
pub fn alternate_key(key: &str) -> String {
    format!("{key}{ALTERNATE_SUFFIX}")
}

/// A price in American odds.
///
/// Positive values are the profit on a 100 stake; negative values are the
/// stake needed to win 100. Ordering is plain integer ordering, so a higher
/// value is treated as the better price on both sides of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct AmericanOdds(i32);

impl AmericanOdds {
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl From<i32> for AmericanOdds {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for AmericanOdds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 > 0 {
            write!(f, "+{}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Side of an over/under outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Side {
    Over,
    Under,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Over, Side::Under];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Over => "Over",
            Self::Under => "Under",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single priced outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    #[serde(rename = "name")]
    pub side: Side,
    pub point: Decimal,
    pub price: AmericanOdds,
    /// Player the outcome belongs to. Outcomes without one cannot be
    /// attributed and are dropped during normalization.
    pub description: Option<String>,
}

impl Outcome {
    #[must_use]
    pub fn new(
        side: Side,
        point: Decimal,
        price: impl Into<AmericanOdds>,
        description: Option<String>,
    ) -> Self {
        Self {
            side,
            point,
            price: price.into(),
            description,
        }
    }

    /// Two outcomes are the same bet when side, line and player match.
    #[must_use]
    pub fn same_bet(&self, other: &Outcome) -> bool {
        self.side == other.side
            && self.point == other.point
            && self.description == other.description
    }

    #[must_use]
    pub fn player(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// A bettable market and its outcomes.
///
/// The outcome list never holds two outcomes that are the [same bet](Outcome::same_bet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Market {
    pub key: String,
    pub outcomes: Vec<Outcome>,
}

impl Market {
    /// Build a market, dropping repeated outcomes (first occurrence wins).
    #[must_use]
    pub fn new(key: impl Into<String>, outcomes: Vec<Outcome>) -> Self {
        let mut market = Self {
            key: key.into(),
            outcomes: Vec::with_capacity(outcomes.len()),
        };
        market.extend_unique(outcomes);
        market
    }

    #[must_use]
    pub fn contains(&self, outcome: &Outcome) -> bool {
        self.outcomes.iter().any(|o| o.same_bet(outcome))
    }

    /// Append outcomes that are not already present.
    pub fn extend_unique(&mut self, outcomes: impl IntoIterator<Item = Outcome>) {
        for outcome in outcomes {
            if !self.contains(&outcome) {
                self.outcomes.push(outcome);
            }
        }
    }

    /// Stable sort by line, ascending.
    pub fn sort_by_point(&mut self) {
        self.outcomes.sort_by(|a, b| a.point.cmp(&b.point));
    }

    /// Merge another market's outcomes into this one and re-sort by line.
    pub fn merge(&mut self, other: Market) {
        self.extend_unique(other.outcomes);
        self.sort_by_point();
    }

    /// First outcome on the given side, in list order.
    #[must_use]
    pub fn first(&self, side: Side) -> Option<&Outcome> {
        self.outcomes.iter().find(|o| o.side == side)
    }

    /// Outcome on the given side at an exact line.
    #[must_use]
    pub fn at_line(&self, side: Side, point: Decimal) -> Option<&Outcome> {
        self.outcomes
            .iter()
            .find(|o| o.side == side && o.point == point)
    }
}

/// A sportsbook's offering for one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bookmaker {
    pub key: String,
    pub title: String,
    pub last_update: DateTime<Utc>,
    pub markets: Vec<Market>,
}

impl Bookmaker {
    #[must_use]
    pub fn market(&self, key: &str) -> Option<&Market> {
        self.markets.iter().find(|m| m.key == key)
    }
}

/// Per-event odds payload across every bookmaker that returned data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameOdds {
    pub id: Option<String>,
    pub sport_key: Option<String>,
    pub commence_time: Option<DateTime<Utc>>,
    pub home_team: String,
    pub away_team: String,
    pub bookmakers: Vec<Bookmaker>,
}

impl GameOdds {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bookmakers.iter().all(|b| b.markets.is_empty())
    }
}
