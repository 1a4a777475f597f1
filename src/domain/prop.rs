//! Normalized per-player props.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use super::odds::{AmericanOdds, Market};

/// One bookmaker's merged market for a single player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropBook {
    pub key: String,
    pub title: String,
    pub last_update: DateTime<Utc>,
    /// Always a single merged market.
    pub markets: Vec<Market>,
}

impl PropBook {
    #[must_use]
    pub fn market(&self, key: &str) -> Option<&Market> {
        self.markets.iter().find(|m| m.key == key)
    }
}

/// Everything offered on one player for the selected stat type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerProp {
    pub player: String,
    pub team: String,
    pub stat_type: String,
    /// Line of the player's first "Over" outcome, or zero.
    pub line: Decimal,
    pub bookmakers: Vec<PropBook>,
}

impl PlayerProp {
    /// Union of every line offered on this player, ascending.
    #[must_use]
    pub fn lines(&self) -> Vec<Decimal> {
        self.bookmakers
            .iter()
            .flat_map(|book| book.markets.iter())
            .flat_map(|market| market.outcomes.iter().map(|o| o.point))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    #[must_use]
    pub fn book(&self, key: &str) -> Option<&PropBook> {
        self.bookmakers.iter().find(|book| book.key == key)
    }
}

/// The best price found for a side, with where it was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestPrice {
    pub bookmaker: String,
    pub line: Decimal,
    pub price: AmericanOdds,
}
