//! HTTP client for the odds REST wrapper.
//!
//! Two endpoints are used:
//! - `GET {base}/events?sport=<key>` for the schedule
//! - `GET {base}/events/<id>/props?sport=<key>&markets=<k,..>&bookmakers=<b,..>`
//!   for prop odds, with cache and quota metadata in response headers

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use reqwest::Client as HttpClient;
use tokio::time::sleep;
use tracing::{debug, info, warn};
use url::Url;

use super::dto::{decode_events, decode_game_odds};
use super::settings::OddsApiConfig;
use crate::domain::{event::Event, sport::Sport};
use crate::error::{ConfigError, FetchError, Result};
use crate::port::outbound::odds::{OddsProvider, OddsResponse, PropsRequest, ResponseMeta};

const HEADER_CACHE: &str = "x-cache";
const HEADER_LAST_UPDATED: &str = "x-last-updated";
const HEADER_REQUESTS_REMAINING: &str = "x-requests-remaining";
const HEADER_REQUESTS_USED: &str = "x-requests-used";

/// HTTP client for the odds REST wrapper.
pub struct OddsApiClient {
    http: HttpClient,
    base_url: Url,
    retry_max_attempts: u32,
    retry_backoff_ms: u64,
}

impl OddsApiClient {
    /// Create a client with default HTTP settings.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::from_config(&OddsApiConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        })
    }

    pub fn from_config(config: &OddsApiConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidValue {
                field: "base_url",
                reason: format!("'{}' cannot be used as a base URL", config.base_url),
            }
            .into());
        }

        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.http.timeout_ms))
            .connect_timeout(Duration::from_millis(config.http.connect_timeout_ms))
            .build()?;

        Ok(Self {
            http,
            base_url,
            retry_max_attempts: config.http.retry_max_attempts,
            retry_backoff_ms: config.http.retry_backoff_ms,
        })
    }

    /// Base URL with extra path segments appended.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn events_url(&self, sport: Sport) -> Url {
        let mut url = self.endpoint(&["events"]);
        url.query_pairs_mut().append_pair("sport", sport.key());
        url
    }

    fn props_url(&self, request: &PropsRequest) -> Url {
        let mut url = self.endpoint(&["events", &request.event_id, "props"]);
        url.query_pairs_mut()
            .append_pair("sport", request.sport.key())
            .append_pair("markets", &request.markets.join(","))
            .append_pair("bookmakers", &request.bookmakers.join(","));
        url
    }

    /// GET with bounded retries on connect/timeout failures.
    ///
    /// Returns the body text and headers. Non-success statuses are not retried.
    async fn get_with_retry(&self, url: &Url) -> std::result::Result<(String, HeaderMap), FetchError> {
        let mut attempt = 0;
        let max_attempts = self.retry_max_attempts.max(1);

        loop {
            attempt += 1;
            let response = match self.http.get(url.clone()).send().await {
                Ok(response) => response,
                Err(err) => {
                    if attempt >= max_attempts || !Self::should_retry(&err) {
                        return Err(FetchError::Network(err.to_string()));
                    }
                    self.backoff(attempt, max_attempts, &err).await;
                    continue;
                }
            };

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status {
                    status: status.as_u16(),
                    url: url.to_string(),
                });
            }

            let headers = response.headers().clone();
            match response.text().await {
                Ok(body) => return Ok((body, headers)),
                Err(err) => {
                    if attempt >= max_attempts || !Self::should_retry(&err) {
                        return Err(FetchError::Network(err.to_string()));
                    }
                    self.backoff(attempt, max_attempts, &err).await;
                }
            }
        }
    }

    fn should_retry(err: &reqwest::Error) -> bool {
        err.is_timeout() || err.is_connect()
    }

    async fn backoff(&self, attempt: u32, max_attempts: u32, err: &reqwest::Error) {
        warn!(
            attempt,
            max_attempts,
            error = %err,
            "HTTP request failed, retrying"
        );
        if self.retry_backoff_ms > 0 {
            sleep(Duration::from_millis(self.retry_backoff_ms)).await;
        }
    }
}

/// Decode cache and quota metadata from response headers.
///
/// Unparseable values are treated as absent.
pub fn parse_meta(headers: &HeaderMap) -> ResponseMeta {
    let text = |name| header_text(headers, name);

    ResponseMeta {
        cache_hit: text(HEADER_CACHE).is_some_and(|v| v.trim().eq_ignore_ascii_case("HIT")),
        last_updated: text(HEADER_LAST_UPDATED)
            .and_then(|v| DateTime::parse_from_rfc3339(v.trim()).ok())
            .map(|ts| ts.with_timezone(&Utc)),
        requests_remaining: text(HEADER_REQUESTS_REMAINING).and_then(|v| v.trim().parse().ok()),
        requests_used: text(HEADER_REQUESTS_USED).and_then(|v| v.trim().parse().ok()),
    }
}

fn header_text<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

#[async_trait]
impl OddsProvider for OddsApiClient {
    async fn events(&self, sport: Sport) -> std::result::Result<Vec<Event>, FetchError> {
        let url = self.events_url(sport);
        info!(url = %url, sport = %sport, "Fetching events");

        let (body, _) = self.get_with_retry(&url).await?;
        let events = decode_events(&body)?;
        debug!(count = events.len(), "Fetched events");

        Ok(events)
    }

    async fn props(&self, request: &PropsRequest) -> std::result::Result<OddsResponse, FetchError> {
        let url = self.props_url(request);
        info!(
            url = %url,
            event_id = %request.event_id,
            markets = %request.markets.join(","),
            "Fetching props"
        );

        let (body, headers) = self.get_with_retry(&url).await?;
        let odds = decode_game_odds(&body)?;
        let meta = parse_meta(&headers);
        debug!(
            bookmakers = odds.bookmakers.len(),
            cache_hit = meta.cache_hit,
            requests_remaining = ?meta.requests_remaining,
            "Fetched props"
        );

        Ok(OddsResponse { odds, meta })
    }

    fn provider_name(&self) -> &'static str {
        "odds-api"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn client(base: &str) -> OddsApiClient {
        OddsApiClient::new(base).expect("valid base url")
    }

    fn request() -> PropsRequest {
        PropsRequest {
            sport: Sport::Nba,
            event_id: "abc123".into(),
            markets: vec!["player_points".into(), "player_points_alternate".into()],
            bookmakers: vec!["draftkings".into(), "fanduel".into()],
        }
    }

    #[test]
    fn events_url_carries_sport_key() {
        let url = client("http://localhost:3000/api").events_url(Sport::Mlb);
        assert_eq!(
            url.as_str(),
            "http://localhost:3000/api/events?sport=baseball_mlb"
        );
    }

    #[test]
    fn props_url_joins_markets_and_bookmakers() {
        let url = client("http://localhost:3000/api/").props_url(&request());
        assert_eq!(url.path(), "/api/events/abc123/props");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("sport".to_string(), "basketball_nba".to_string()),
                (
                    "markets".to_string(),
                    "player_points,player_points_alternate".to_string()
                ),
                ("bookmakers".to_string(), "draftkings,fanduel".to_string()),
            ]
        );
    }

    #[test]
    fn non_base_url_is_rejected() {
        assert!(OddsApiClient::new("mailto:odds@example.com").is_err());
        assert!(OddsApiClient::new("not a url").is_err());
    }

    #[test]
    fn parse_meta_reads_all_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(HEADER_CACHE, HeaderValue::from_static("HIT"));
        headers.insert(
            HEADER_LAST_UPDATED,
            HeaderValue::from_static("2026-02-28T20:00:00.000Z"),
        );
        headers.insert(HEADER_REQUESTS_REMAINING, HeaderValue::from_static("480"));
        headers.insert(HEADER_REQUESTS_USED, HeaderValue::from_static("20"));

        let meta = parse_meta(&headers);
        assert!(meta.cache_hit);
        assert!(meta.last_updated.is_some());
        assert_eq!(meta.requests_remaining, Some(480));
        assert_eq!(meta.requests_used, Some(20));
    }

    #[test]
    fn parse_meta_treats_other_cache_values_as_miss() {
        let mut headers = HeaderMap::new();
        headers.insert(HEADER_CACHE, HeaderValue::from_static("MISS"));
        headers.insert(HEADER_REQUESTS_REMAINING, HeaderValue::from_static("lots"));

        let meta = parse_meta(&headers);
        assert!(!meta.cache_hit);
        assert_eq!(meta.requests_remaining, None);
        assert_eq!(meta, ResponseMeta::default());
    }

    #[test]
    fn provider_name_is_stable() {
        assert_eq!(client("http://localhost").provider_name(), "odds-api");
    }
}
