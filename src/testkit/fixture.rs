//! Builders for domain fixtures.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

use crate::domain::{
    event::Event,
    odds::{Bookmaker, GameOdds, Market, Outcome, Side},
};

/// Fixed timestamp used for every fixture `last_update`.
#[must_use]
pub fn timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

#[must_use]
pub fn over(point: Decimal, price: i32, player: &str) -> Outcome {
    Outcome::new(Side::Over, point, price, Some(player.to_string()))
}

#[must_use]
pub fn under(point: Decimal, price: i32, player: &str) -> Outcome {
    Outcome::new(Side::Under, point, price, Some(player.to_string()))
}

#[must_use]
pub fn market(key: &str, outcomes: Vec<Outcome>) -> Market {
    Market::new(key, outcomes)
}

#[must_use]
pub fn bookmaker(key: &str, markets: Vec<Market>) -> Bookmaker {
    Bookmaker {
        key: key.to_string(),
        title: crate::domain::sportsbook::title(key).to_string(),
        last_update: timestamp(),
        markets,
    }
}

#[must_use]
pub fn game(home: &str, away: &str, bookmakers: Vec<Bookmaker>) -> GameOdds {
    GameOdds {
        id: Some("evt-1".to_string()),
        sport_key: Some("basketball_nba".to_string()),
        commence_time: None,
        home_team: home.to_string(),
        away_team: away.to_string(),
        bookmakers,
    }
}

/// Event starting `hours` after the fixture timestamp (negative for started).
#[must_use]
pub fn event(id: &str, hours: i64) -> Event {
    Event {
        id: id.to_string(),
        home_team: format!("{id} Home"),
        away_team: format!("{id} Away"),
        commence_time: timestamp() + chrono::Duration::hours(hours),
    }
}
