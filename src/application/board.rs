//! Prop board session state.
//!
//! [`PropBoard`] owns everything the prop view depends on: the selected
//! event and stat type, the sportsbook selection mirrored from the injected
//! [`PreferenceStore`], the loading flag, the last error and the latest odds
//! snapshot.
//!
//! # Request sequencing
//!
//! Each fetch is issued with a [`FetchTicket`] drawn from a monotonically
//! increasing counter. When a fetch completes, its result is applied only if
//! its ticket is still the latest one issued; anything older is discarded.
//! Changing the sport, event or stat type also retires outstanding tickets,
//! so a slow response for a previous selection can never overwrite the
//! current one.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::normalize::normalize;
use super::preferences::{PreferenceStore, Preferences};
use super::query::{self, PropQuery, SortMode};
use crate::domain::{
    error::DomainError,
    odds::GameOdds,
    prop::PlayerProp,
    sport::{Sport, StatType},
};
use crate::error::FetchError;
use crate::port::outbound::odds::{OddsProvider, OddsResponse, PropsRequest, ResponseMeta};

/// Sequence number of an issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

impl FetchTicket {
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// What happened to a completed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// New odds replaced the snapshot.
    Applied,
    /// A newer fetch was issued in the meantime; the result was dropped.
    Stale,
    /// The fetch failed; previous data is untouched.
    Failed,
    /// The provider had no odds for the event.
    Empty,
}

/// Observable state of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardStatus {
    /// No event selected.
    Idle,
    Loading,
    Ready,
    Empty,
    Failed,
}

#[derive(Debug)]
struct Snapshot {
    odds: GameOdds,
    meta: ResponseMeta,
    props: Vec<PlayerProp>,
}

/// Explicit UI state for one prop comparison view.
pub struct PropBoard {
    provider: Arc<dyn OddsProvider>,
    preferences: Arc<PreferenceStore>,
    preference_rx: watch::Receiver<Preferences>,
    books: Vec<String>,
    sport: Sport,
    event_id: Option<String>,
    stat: &'static StatType,
    issued: u64,
    loading: bool,
    error: Option<FetchError>,
    snapshot: Option<Snapshot>,
    empty: bool,
}

impl PropBoard {
    #[must_use]
    pub fn new(
        provider: Arc<dyn OddsProvider>,
        preferences: Arc<PreferenceStore>,
        sport: Sport,
    ) -> Self {
        let mut preference_rx = preferences.subscribe();
        let books = preference_rx.borrow_and_update().sportsbooks.clone();
        Self {
            provider,
            preferences,
            preference_rx,
            books,
            sport,
            event_id: None,
            stat: sport.default_stat_type(),
            issued: 0,
            loading: false,
            error: None,
            snapshot: None,
            empty: false,
        }
    }

    #[must_use]
    pub fn sport(&self) -> Sport {
        self.sport
    }

    #[must_use]
    pub fn event_id(&self) -> Option<&str> {
        self.event_id.as_deref()
    }

    #[must_use]
    pub fn stat_type(&self) -> &'static StatType {
        self.stat
    }

    /// Sportsbooks currently shown, in display order.
    #[must_use]
    pub fn books(&self) -> &[String] {
        &self.books
    }

    #[must_use]
    pub fn preferences(&self) -> &Arc<PreferenceStore> {
        &self.preferences
    }

    /// Switch sport. Resets the event, the stat type and all loaded data.
    pub fn set_sport(&mut self, sport: Sport) {
        if sport == self.sport {
            return;
        }
        info!(from = %self.sport, to = %sport, "Board sport changed");
        self.sport = sport;
        self.stat = sport.default_stat_type();
        self.event_id = None;
        self.reset();
    }

    /// Select the event whose props are shown. Clears data from the
    /// previous event.
    pub fn set_event(&mut self, event_id: impl Into<String>) {
        let event_id = event_id.into();
        if self.event_id.as_deref() == Some(event_id.as_str()) {
            return;
        }
        debug!(event_id = %event_id, "Board event changed");
        self.event_id = Some(event_id);
        self.reset();
    }

    /// Select a stat type of the current sport.
    ///
    /// The snapshot is kept and re-normalized against the new stat type until
    /// the next fetch lands.
    pub fn set_stat_type(&mut self, key: &str) -> Result<(), DomainError> {
        let stat = self.sport.stat_type(key)?;
        if stat.key == self.stat.key {
            return Ok(());
        }
        debug!(stat = stat.key, "Board stat type changed");
        self.stat = stat;
        self.retire_tickets();
        self.error = None;
        if let Some(snapshot) = self.snapshot.as_mut() {
            snapshot.props = normalize(&snapshot.odds, stat);
        }
        Ok(())
    }

    /// Pick up sportsbook preference changes. Returns whether the selection
    /// changed, in which case a new fetch is due.
    pub fn sync_preferences(&mut self) -> bool {
        if !self.preference_rx.has_changed().unwrap_or(false) {
            return false;
        }
        let books = self.preference_rx.borrow_and_update().sportsbooks.clone();
        if books == self.books {
            return false;
        }
        debug!(books = ?books, "Board sportsbooks changed");
        self.books = books;
        true
    }

    fn reset(&mut self) {
        self.retire_tickets();
        self.error = None;
        self.snapshot = None;
        self.empty = false;
    }

    /// Invalidate every outstanding fetch.
    fn retire_tickets(&mut self) {
        self.issued += 1;
        self.loading = false;
    }

    /// Issue a new fetch for the current selection.
    ///
    /// Returns `None` when no event is selected. The loading flag stays set
    /// until the returned ticket (or a newer one) completes.
    pub fn begin_fetch(&mut self) -> Option<(FetchTicket, PropsRequest)> {
        self.sync_preferences();
        let event_id = self.event_id.clone()?;

        self.issued += 1;
        self.loading = true;
        let ticket = FetchTicket(self.issued);
        let request = PropsRequest {
            sport: self.sport,
            event_id,
            markets: self.stat.market_keys(),
            bookmakers: self.books.clone(),
        };
        debug!(ticket = ticket.0, event_id = %request.event_id, "Fetch issued");
        Some((ticket, request))
    }

    /// Apply the result of a fetch issued by [`begin_fetch`](Self::begin_fetch).
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<OddsResponse, FetchError>,
    ) -> FetchOutcome {
        if ticket.0 != self.issued {
            debug!(
                ticket = ticket.0,
                latest = self.issued,
                "Discarding stale fetch result"
            );
            return FetchOutcome::Stale;
        }
        self.loading = false;

        match result {
            Ok(response) if response.odds.is_empty() => {
                self.mark_empty(Some(response));
                FetchOutcome::Empty
            }
            Ok(response) => {
                let props = normalize(&response.odds, self.stat);
                info!(
                    players = props.len(),
                    bookmakers = response.odds.bookmakers.len(),
                    "Props updated"
                );
                self.error = None;
                self.empty = props.is_empty();
                self.snapshot = Some(Snapshot {
                    odds: response.odds,
                    meta: response.meta,
                    props,
                });
                if self.empty {
                    FetchOutcome::Empty
                } else {
                    FetchOutcome::Applied
                }
            }
            Err(FetchError::Empty) => {
                self.mark_empty(None);
                FetchOutcome::Empty
            }
            Err(err) => {
                warn!(error = %err, "Props fetch failed");
                self.error = Some(err);
                FetchOutcome::Failed
            }
        }
    }

    fn mark_empty(&mut self, response: Option<OddsResponse>) {
        info!(event_id = ?self.event_id, "No props offered");
        self.error = None;
        self.empty = true;
        self.snapshot = response.map(|response| Snapshot {
            odds: response.odds,
            meta: response.meta,
            props: Vec::new(),
        });
    }

    /// Fetch and apply in one step.
    ///
    /// Returns `None` when no event is selected.
    pub async fn refresh(&mut self) -> Option<FetchOutcome> {
        let (ticket, request) = self.begin_fetch()?;
        let result = self.provider.props(&request).await;
        Some(self.complete_fetch(ticket, result))
    }

    /// Provider used by [`refresh`](Self::refresh), for callers that run the
    /// fetch themselves.
    #[must_use]
    pub fn provider(&self) -> Arc<dyn OddsProvider> {
        Arc::clone(&self.provider)
    }

    /// All normalized props from the latest snapshot.
    #[must_use]
    pub fn props(&self) -> &[PlayerProp] {
        self.snapshot
            .as_ref()
            .map(|s| s.props.as_slice())
            .unwrap_or_default()
    }

    /// Filtered and sorted props. Best prices only consider shown books.
    #[must_use]
    pub fn view(&self, search: &str, sort: SortMode) -> Vec<&PlayerProp> {
        query::apply(
            self.props(),
            &PropQuery {
                search,
                sort,
                market_key: self.stat.key,
                selected: Some(self.books.as_slice()),
            },
        )
    }

    #[must_use]
    pub fn odds(&self) -> Option<&GameOdds> {
        self.snapshot.as_ref().map(|s| &s.odds)
    }

    #[must_use]
    pub fn meta(&self) -> Option<&ResponseMeta> {
        self.snapshot.as_ref().map(|s| &s.meta)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn status(&self) -> BoardStatus {
        if self.event_id.is_none() {
            BoardStatus::Idle
        } else if self.loading {
            BoardStatus::Loading
        } else if self.error.is_some() {
            BoardStatus::Failed
        } else if self.empty {
            BoardStatus::Empty
        } else if self.snapshot.is_some() {
            BoardStatus::Ready
        } else {
            BoardStatus::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::odds::Side;
    use crate::testkit::{fixture, ScriptedProvider};
    use rust_decimal_macros::dec;

    fn odds_with(player: &str, price: i32) -> OddsResponse {
        OddsResponse {
            odds: fixture::game(
                "Celtics",
                "Knicks",
                vec![fixture::bookmaker(
                    "draftkings",
                    vec![fixture::market(
                        "player_points",
                        vec![fixture::over(dec!(20.5), price, player)],
                    )],
                )],
            ),
            meta: ResponseMeta::default(),
        }
    }

    fn board(provider: Arc<ScriptedProvider>) -> PropBoard {
        let mut board = PropBoard::new(provider, Arc::new(PreferenceStore::default()), Sport::Nba);
        board.set_event("evt-1");
        board
    }

    #[test]
    fn begin_fetch_requires_an_event() {
        let mut board = PropBoard::new(
            Arc::new(ScriptedProvider::new()),
            Arc::new(PreferenceStore::default()),
            Sport::Nba,
        );
        assert!(board.begin_fetch().is_none());
        assert_eq!(board.status(), BoardStatus::Idle);
    }

    #[test]
    fn request_carries_standard_and_alternate_markets() {
        let mut board = board(Arc::new(ScriptedProvider::new()));
        let (_, request) = board.begin_fetch().unwrap();
        assert_eq!(request.markets, vec!["player_points", "player_points_alternate"]);
        assert_eq!(request.bookmakers, board.books());
        assert_eq!(request.event_id, "evt-1");
    }

    #[test]
    fn stale_result_is_discarded() {
        let mut board = board(Arc::new(ScriptedProvider::new()));
        let (first, _) = board.begin_fetch().unwrap();
        let (second, _) = board.begin_fetch().unwrap();

        assert_eq!(
            board.complete_fetch(second, Ok(odds_with("Newer", 110))),
            FetchOutcome::Applied
        );
        assert_eq!(
            board.complete_fetch(first, Ok(odds_with("Older", 150))),
            FetchOutcome::Stale
        );
        assert_eq!(board.props()[0].player, "Newer");
    }

    #[test]
    fn loading_clears_only_when_latest_completes() {
        let mut board = board(Arc::new(ScriptedProvider::new()));
        let (first, _) = board.begin_fetch().unwrap();
        let (second, _) = board.begin_fetch().unwrap();

        board.complete_fetch(first, Ok(odds_with("A", 100)));
        assert!(board.is_loading());
        board.complete_fetch(second, Ok(odds_with("B", 100)));
        assert!(!board.is_loading());
        assert_eq!(board.status(), BoardStatus::Ready);
    }

    #[test]
    fn failure_keeps_previous_props() {
        let mut board = board(Arc::new(ScriptedProvider::new()));
        let (ticket, _) = board.begin_fetch().unwrap();
        board.complete_fetch(ticket, Ok(odds_with("Kept", 100)));

        let (ticket, _) = board.begin_fetch().unwrap();
        let outcome = board.complete_fetch(ticket, Err(FetchError::Network("timeout".into())));

        assert_eq!(outcome, FetchOutcome::Failed);
        assert_eq!(board.status(), BoardStatus::Failed);
        assert_eq!(board.props()[0].player, "Kept");
        assert!(board.error().unwrap().is_network());
    }

    #[test]
    fn event_change_retires_outstanding_fetch() {
        let mut board = board(Arc::new(ScriptedProvider::new()));
        let (ticket, _) = board.begin_fetch().unwrap();
        board.set_event("evt-2");

        assert_eq!(
            board.complete_fetch(ticket, Ok(odds_with("Wrong game", 100))),
            FetchOutcome::Stale
        );
        assert!(board.props().is_empty());
        assert!(!board.is_loading());
    }

    #[test]
    fn sport_change_resets_stat_type_and_error() {
        let mut board = board(Arc::new(ScriptedProvider::new()));
        board.set_stat_type("player_assists").unwrap();
        let (ticket, _) = board.begin_fetch().unwrap();
        board.complete_fetch(ticket, Err(FetchError::Malformed("bad".into())));

        board.set_sport(Sport::Nhl);
        assert!(board.error().is_none());
        assert!(board.event_id().is_none());
        assert_eq!(board.stat_type().key, Sport::Nhl.default_stat_type().key);
    }

    #[test]
    fn unknown_stat_type_is_rejected() {
        let mut board = board(Arc::new(ScriptedProvider::new()));
        assert!(board.set_stat_type("pitcher_strikeouts").is_err());
        assert_eq!(board.stat_type().key, "player_points");
    }

    #[test]
    fn preference_changes_flow_into_next_request() {
        let store = Arc::new(PreferenceStore::default());
        let mut board = PropBoard::new(
            Arc::new(ScriptedProvider::new()),
            Arc::clone(&store),
            Sport::Nba,
        );
        board.set_event("evt-1");

        store.set_sportsbooks(vec!["fanduel".into()]).unwrap();
        let (_, request) = board.begin_fetch().unwrap();

        assert_eq!(request.bookmakers, vec!["fanduel"]);
        assert!(!board.sync_preferences());
    }

    #[test]
    fn view_uses_selected_books_for_best_over_sort() {
        let mut board = board(Arc::new(ScriptedProvider::new()));
        let (ticket, _) = board.begin_fetch().unwrap();
        let response = OddsResponse {
            odds: fixture::game(
                "Home",
                "Away",
                vec![
                    fixture::bookmaker(
                        "draftkings",
                        vec![fixture::market(
                            "player_points",
                            vec![
                                fixture::over(dec!(10.5), -120, "Alpha"),
                                fixture::over(dec!(12.5), 105, "Beta"),
                            ],
                        )],
                    ),
                    fixture::bookmaker(
                        "bovada",
                        vec![fixture::market(
                            "player_points",
                            vec![fixture::over(dec!(10.5), 400, "Alpha")],
                        )],
                    ),
                ],
            ),
            meta: ResponseMeta::default(),
        };
        board.complete_fetch(ticket, Ok(response));

        // bovada is not in the default selection, so Alpha's +400 is ignored.
        let view = board.view("", SortMode::BestOver);
        let names: Vec<&str> = view.iter().map(|p| p.player.as_str()).collect();
        assert_eq!(names, vec!["Beta", "Alpha"]);
        assert_eq!(board.view("alp", SortMode::Name).len(), 1);
    }

    #[tokio::test]
    async fn refresh_fetches_through_provider() {
        let provider = Arc::new(ScriptedProvider::new());
        provider.push_odds(odds_with("Jayson Tatum", 120).odds);
        let mut board = board(Arc::clone(&provider));

        assert_eq!(board.refresh().await, Some(FetchOutcome::Applied));
        let prop = &board.props()[0];
        assert_eq!(prop.line, dec!(20.5));
        assert_eq!(
            prop.bookmakers[0].markets[0].first(Side::Over).unwrap().price.value(),
            120
        );
        assert_eq!(provider.props_calls().len(), 1);
    }

    #[tokio::test]
    async fn empty_provider_response_is_not_an_error() {
        let provider = Arc::new(ScriptedProvider::new());
        let mut board = board(Arc::clone(&provider));

        assert_eq!(board.refresh().await, Some(FetchOutcome::Empty));
        assert_eq!(board.status(), BoardStatus::Empty);
        assert!(board.error().is_none());
    }
}
