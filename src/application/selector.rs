//! Event selection for a sport.
//!
//! Holds the loaded schedule, its load status and the single selected
//! event. Load failures and empty schedules are recorded as status, never
//! returned as errors; retrying is an explicit call.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, info, warn};

use crate::domain::{
    error::DomainError,
    event::{earliest_upcoming, group_by_date, Event},
    sport::Sport,
};
use crate::error::FetchError;
use crate::port::outbound::odds::OddsProvider;

/// Load status of the schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorStatus {
    /// Nothing loaded for the current sport yet.
    Idle,
    Loading,
    Ready,
    /// The provider returned no games.
    Empty,
    /// The last load failed; [`EventSelector::retry`] re-runs it.
    Failed(FetchError),
}

/// Schedule and selection state for one sport.
#[derive(Debug)]
pub struct EventSelector {
    sport: Sport,
    events: Vec<Event>,
    status: SelectorStatus,
    selected: Option<String>,
}

impl EventSelector {
    #[must_use]
    pub fn new(sport: Sport) -> Self {
        Self {
            sport,
            events: Vec::new(),
            status: SelectorStatus::Idle,
            selected: None,
        }
    }

    #[must_use]
    pub fn sport(&self) -> Sport {
        self.sport
    }

    /// Switch sport. Clears the schedule, the selection and any error.
    ///
    /// Returns whether the sport actually changed.
    pub fn set_sport(&mut self, sport: Sport) -> bool {
        if sport == self.sport {
            return false;
        }
        info!(from = %self.sport, to = %sport, "Sport changed");
        self.sport = sport;
        self.events.clear();
        self.selected = None;
        self.status = SelectorStatus::Idle;
        true
    }

    /// Load the schedule for the current sport.
    ///
    /// On success the events are ordered by start time. A selection missing
    /// from the new schedule is dropped, and with nothing selected the
    /// earliest upcoming event is picked (none when every game has started).
    /// On failure the previously loaded events are left in place.
    pub async fn load<P>(&mut self, provider: &P, now: DateTime<Utc>) -> &SelectorStatus
    where
        P: OddsProvider + ?Sized,
    {
        self.status = SelectorStatus::Loading;
        debug!(sport = %self.sport, "Loading events");

        match provider.events(self.sport).await {
            Ok(events) if events.is_empty() => self.mark_empty(),
            Ok(mut events) => {
                events.sort_by_key(|event| event.commence_time);
                self.events = events;
                self.status = SelectorStatus::Ready;
                if let Some(id) = self.selected.take() {
                    if self.events.iter().any(|event| event.id == id) {
                        self.selected = Some(id);
                    } else {
                        debug!(event_id = %id, "Selected event left the schedule");
                    }
                }
                if self.selected.is_none() {
                    self.selected = earliest_upcoming(&self.events, now).map(|e| e.id.clone());
                    debug!(selected = ?self.selected, "Auto-selected event");
                }
            }
            Err(FetchError::Empty) => self.mark_empty(),
            Err(err) => {
                warn!(sport = %self.sport, error = %err, "Failed to load events");
                self.status = SelectorStatus::Failed(err);
            }
        }

        &self.status
    }

    /// Re-run the load after a failure.
    pub async fn retry<P>(&mut self, provider: &P, now: DateTime<Utc>) -> &SelectorStatus
    where
        P: OddsProvider + ?Sized,
    {
        self.load(provider, now).await
    }

    fn mark_empty(&mut self) {
        info!(sport = %self.sport, "No games scheduled");
        self.events.clear();
        self.selected = None;
        self.status = SelectorStatus::Empty;
    }

    /// Select an event from the loaded schedule.
    pub fn select(&mut self, event_id: &str) -> Result<&Event, DomainError> {
        let index = self
            .events
            .iter()
            .position(|event| event.id == event_id)
            .ok_or_else(|| DomainError::UnknownEvent(event_id.to_string()))?;
        self.selected = Some(event_id.to_string());
        Ok(&self.events[index])
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Event> {
        let id = self.selected.as_deref()?;
        self.events.iter().find(|event| event.id == id)
    }

    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    #[must_use]
    pub fn grouped(&self) -> BTreeMap<NaiveDate, Vec<&Event>> {
        group_by_date(&self.events)
    }

    #[must_use]
    pub fn status(&self) -> &SelectorStatus {
        &self.status
    }

    #[must_use]
    pub fn error(&self) -> Option<&FetchError> {
        match &self.status {
            SelectorStatus::Failed(err) => Some(err),
            _ => None,
        }
    }
}
