//! `events` command: the schedule for a sport, grouped by date.

use chrono::Utc;
use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::application::selector::{EventSelector, SelectorStatus};
use crate::domain::sport::Sport;
use crate::error::{Error, Result};
use crate::port::outbound::odds::OddsProvider;

/// Load the schedule behind a spinner. Failure is reported with a retry hint
/// and returned; an empty schedule is reported as a note.
pub async fn load_schedule(provider: &dyn OddsProvider, sport: Sport) -> Result<EventSelector> {
    let mut selector = EventSelector::new(sport);
    let pb = output::spinner(&format!("Loading {} events", sport.label()));
    let status = selector.load(provider, Utc::now()).await.clone();

    match status {
        SelectorStatus::Failed(err) => {
            output::spinner_fail(&pb, "Could not load events");
            output::hint("the request can be retried by running the command again");
            Err(Error::Fetch(err))
        }
        SelectorStatus::Empty => {
            pb.finish_and_clear();
            output::note(&format!("No games scheduled for {}", sport.label()));
            Ok(selector)
        }
        _ => {
            output::spinner_success(&pb, &format!("{} events", selector.events().len()));
            Ok(selector)
        }
    }
}

/// Execute `events`.
pub async fn execute(provider: &dyn OddsProvider, sport: Sport) -> Result<()> {
    let selector = load_schedule(provider, sport).await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "events",
            "sport": sport.name(),
            "selected": selector.selected_id(),
            "events": selector.events(),
        }));
        return Ok(());
    }
    if selector.events().is_empty() {
        return Ok(());
    }

    for (date, events) in selector.grouped() {
        output::section(&date.format("%a %b %-d").to_string());
        for event in events {
            let marker = if selector.selected_id() == Some(event.id.as_str()) {
                output::highlight("▸")
            } else {
                " ".to_string()
            };
            output::lines(&format!(
                "{marker} {}  {}  {}",
                event.commence_time.format("%H:%M UTC"),
                event.matchup(),
                output::muted(&event.id)
            ));
        }
    }
    output::hint("pass --event <id> to props to pick a game; ▸ marks the default");
    Ok(())
}
