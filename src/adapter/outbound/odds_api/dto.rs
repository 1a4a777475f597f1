//! Wire types for the odds REST wrapper.
//!
//! Required fields carry no serde defaults so that a payload missing them
//! fails to decode. Conversion into domain types rejects outcome names other
//! than `Over`/`Under`.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::{
    event::Event,
    odds::{Bookmaker, GameOdds, Market, Outcome, Side},
};
use crate::error::FetchError;

#[derive(Debug, Clone, Deserialize)]
pub struct EventDto {
    pub id: String,
    pub home_team: String,
    pub away_team: String,
    pub commence_time: DateTime<Utc>,
}

impl From<EventDto> for Event {
    fn from(dto: EventDto) -> Self {
        Self {
            id: dto.id,
            home_team: dto.home_team,
            away_team: dto.away_team,
            commence_time: dto.commence_time,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameOddsDto {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub sport_key: Option<String>,
    #[serde(default)]
    pub commence_time: Option<DateTime<Utc>>,
    pub home_team: String,
    pub away_team: String,
    pub bookmakers: Vec<BookmakerDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookmakerDto {
    pub key: String,
    pub title: String,
    pub last_update: DateTime<Utc>,
    pub markets: Vec<MarketDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MarketDto {
    pub key: String,
    pub outcomes: Vec<OutcomeDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutcomeDto {
    pub name: String,
    pub point: Decimal,
    pub price: i32,
    #[serde(default)]
    pub description: Option<String>,
}

fn parse_side(name: &str) -> Result<Side, FetchError> {
    match name {
        "Over" => Ok(Side::Over),
        "Under" => Ok(Side::Under),
        other => Err(FetchError::Malformed(format!(
            "unexpected outcome name '{other}'"
        ))),
    }
}

impl TryFrom<OutcomeDto> for Outcome {
    type Error = FetchError;

    fn try_from(dto: OutcomeDto) -> Result<Self, Self::Error> {
        Ok(Outcome::new(
            parse_side(&dto.name)?,
            dto.point,
            dto.price,
            dto.description.filter(|d| !d.trim().is_empty()),
        ))
    }
}

impl TryFrom<MarketDto> for Market {
    type Error = FetchError;

    fn try_from(dto: MarketDto) -> Result<Self, Self::Error> {
        let outcomes = dto
            .outcomes
            .into_iter()
            .map(Outcome::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Market::new(dto.key, outcomes))
    }
}

impl TryFrom<BookmakerDto> for Bookmaker {
    type Error = FetchError;

    fn try_from(dto: BookmakerDto) -> Result<Self, Self::Error> {
        let markets = dto
            .markets
            .into_iter()
            .map(Market::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Bookmaker {
            key: dto.key,
            title: dto.title,
            last_update: dto.last_update,
            markets,
        })
    }
}

impl TryFrom<GameOddsDto> for GameOdds {
    type Error = FetchError;

    fn try_from(dto: GameOddsDto) -> Result<Self, Self::Error> {
        let bookmakers = dto
            .bookmakers
            .into_iter()
            .map(Bookmaker::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(GameOdds {
            id: dto.id,
            sport_key: dto.sport_key,
            commence_time: dto.commence_time,
            home_team: dto.home_team,
            away_team: dto.away_team,
            bookmakers,
        })
    }
}

/// Decode an events array.
pub fn decode_events(body: &str) -> Result<Vec<Event>, FetchError> {
    let events: Vec<EventDto> =
        serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))?;
    Ok(events.into_iter().map(Event::from).collect())
}

/// Decode a per-event odds payload.
pub fn decode_game_odds(body: &str) -> Result<GameOdds, FetchError> {
    let dto: GameOddsDto =
        serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))?;
    GameOdds::try_from(dto)
}
