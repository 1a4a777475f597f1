//! Odds provider port.
//!
//! The provider is the thin REST wrapper in front of the upstream odds-data
//! service. Everything it returns has already been schema-decoded into
//! domain types; any decoding failure surfaces as [`FetchError::Malformed`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{event::Event, odds::GameOdds, sport::Sport};
use crate::error::FetchError;

/// Parameters for a single props request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropsRequest {
    pub sport: Sport,
    pub event_id: String,
    /// Market keys requested together (standard and, when offered, alternate).
    pub markets: Vec<String>,
    /// Bookmaker ids to include.
    pub bookmakers: Vec<String>,
}

/// Side-channel metadata the provider returns in response headers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResponseMeta {
    /// Whether the wrapper served the response from its cache.
    pub cache_hit: bool,
    /// When the wrapper last refreshed the data upstream.
    pub last_updated: Option<DateTime<Utc>>,
    /// Upstream quota remaining.
    pub requests_remaining: Option<u32>,
    /// Upstream quota consumed.
    pub requests_used: Option<u32>,
}

/// Decoded odds plus response metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OddsResponse {
    pub odds: GameOdds,
    pub meta: ResponseMeta,
}

/// Source of event schedules and per-event prop odds.
#[async_trait]
pub trait OddsProvider: Send + Sync {
    /// Upcoming events for a sport.
    async fn events(&self, sport: Sport) -> Result<Vec<Event>, FetchError>;

    /// Prop odds for one event across the requested markets and bookmakers.
    async fn props(&self, request: &PropsRequest) -> Result<OddsResponse, FetchError>;

    /// Provider name for logging.
    fn provider_name(&self) -> &'static str;
}
