//! Sport and sportsbook listings.

use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::output;
use crate::application::preferences::PreferenceStore;
use crate::domain::sport::Sport;
use crate::domain::sportsbook::SPORTSBOOKS;
use crate::error::Result;

#[derive(Tabled)]
struct SportRow {
    #[tabled(rename = "Sport")]
    name: &'static str,
    #[tabled(rename = "League")]
    label: &'static str,
    #[tabled(rename = "Provider key")]
    key: &'static str,
    #[tabled(rename = "Stat types")]
    stats: String,
}

#[derive(Tabled)]
struct BookRow {
    #[tabled(rename = "")]
    selected: &'static str,
    #[tabled(rename = "Id")]
    key: &'static str,
    #[tabled(rename = "Sportsbook")]
    title: &'static str,
}

/// List supported sports with their stat types.
pub fn sports() -> Result<()> {
    if output::is_json() {
        let sports: Vec<_> = Sport::ALL
            .iter()
            .map(|sport| {
                json!({
                    "name": sport.name(),
                    "label": sport.label(),
                    "key": sport.key(),
                    "stat_types": sport.stat_types(),
                })
            })
            .collect();
        output::json_output(json!({ "command": "sports", "sports": sports }));
        return Ok(());
    }
    if output::is_quiet() {
        return Ok(());
    }

    output::section("Sports");
    let rows: Vec<SportRow> = Sport::ALL
        .iter()
        .map(|sport| SportRow {
            name: sport.name(),
            label: sport.label(),
            key: sport.key(),
            stats: sport
                .stat_types()
                .iter()
                .map(|stat| {
                    if stat.alternates {
                        format!("{}*", stat.key)
                    } else {
                        stat.key.to_string()
                    }
                })
                .collect::<Vec<_>>()
                .join("\n"),
        })
        .collect();
    output::lines(&Table::new(rows).with(Style::rounded()).to_string());
    output::note("* alternate lines available");
    Ok(())
}

/// List known sportsbooks, marking the current selection.
pub fn books(preferences: &PreferenceStore) -> Result<()> {
    let selected = preferences.sportsbooks();

    if output::is_json() {
        let books: Vec<_> = SPORTSBOOKS
            .iter()
            .map(|book| {
                json!({
                    "key": book.key,
                    "title": book.title,
                    "selected": selected.iter().any(|key| key == book.key),
                })
            })
            .collect();
        output::json_output(json!({
            "command": "books",
            "books": books,
            "selected": selected,
        }));
        return Ok(());
    }
    if output::is_quiet() {
        return Ok(());
    }

    output::section("Sportsbooks");
    let rows: Vec<BookRow> = SPORTSBOOKS
        .iter()
        .map(|book| BookRow {
            selected: if selected.iter().any(|key| key == book.key) {
                "✓"
            } else {
                ""
            },
            key: book.key,
            title: book.title,
        })
        .collect();
    output::lines(&Table::new(rows).with(Style::rounded()).to_string());
    output::hint("set [books] selected in the config file, or pass --books to props");
    Ok(())
}
