//! Scheduled events.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// A scheduled game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub id: String,
    pub home_team: String,
    pub away_team: String,
    pub commence_time: DateTime<Utc>,
}

impl Event {
    /// `Away @ Home`.
    #[must_use]
    pub fn matchup(&self) -> String {
        format!("{} @ {}", self.away_team, self.home_team)
    }

    /// Calendar date (UTC) the event starts on.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.commence_time.date_naive()
    }

    #[must_use]
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.commence_time >= now
    }
}

/// Group events by start date; each day's events are ordered by start time.
#[must_use]
pub fn group_by_date(events: &[Event]) -> BTreeMap<NaiveDate, Vec<&Event>> {
    let mut groups: BTreeMap<NaiveDate, Vec<&Event>> = BTreeMap::new();
    for event in events {
        groups.entry(event.date()).or_default().push(event);
    }
    for day in groups.values_mut() {
        day.sort_by_key(|event| event.commence_time);
    }
    groups
}

/// Earliest event that has not started yet. `None` when every event is
/// already underway.
#[must_use]
pub fn earliest_upcoming(events: &[Event], now: DateTime<Utc>) -> Option<&Event> {
    events
        .iter()
        .filter(|event| event.is_upcoming(now))
        .min_by_key(|event| event.commence_time)
}
