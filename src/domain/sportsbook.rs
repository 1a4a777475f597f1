//! Known sportsbooks.

use serde::Serialize;

use super::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sportsbook {
    /// Provider bookmaker id.
    pub key: &'static str,
    pub title: &'static str,
}

pub const SPORTSBOOKS: &[Sportsbook] = &[
    Sportsbook {
        key: "draftkings",
        title: "DraftKings",
    },
    Sportsbook {
        key: "fanduel",
        title: "FanDuel",
    },
    Sportsbook {
        key: "betmgm",
        title: "BetMGM",
    },
    Sportsbook {
        key: "williamhill_us",
        title: "Caesars",
    },
    Sportsbook {
        key: "espnbet",
        title: "ESPN BET",
    },
    Sportsbook {
        key: "fanatics",
        title: "Fanatics",
    },
    Sportsbook {
        key: "betrivers",
        title: "BetRivers",
    },
    Sportsbook {
        key: "hardrockbet",
        title: "Hard Rock Bet",
    },
    Sportsbook {
        key: "ballybet",
        title: "Bally Bet",
    },
    Sportsbook {
        key: "bovada",
        title: "Bovada",
    },
    Sportsbook {
        key: "betonlineag",
        title: "BetOnline.ag",
    },
    Sportsbook {
        key: "mybookieag",
        title: "MyBookie.ag",
    },
];

/// Sportsbooks selected when no preference is configured.
pub const DEFAULT_SELECTION: &[&str] = &["draftkings", "fanduel", "betmgm", "williamhill_us"];

#[must_use]
pub fn find(key: &str) -> Option<&'static Sportsbook> {
    SPORTSBOOKS.iter().find(|book| book.key == key)
}

/// Display title for a bookmaker id, falling back to the id itself.
#[must_use]
pub fn title(key: &str) -> &str {
    find(key).map_or(key, |book| book.title)
}

/// Check that every id in a selection is a known sportsbook.
pub fn validate_selection<S: AsRef<str>>(keys: &[S]) -> Result<(), DomainError> {
    match keys.iter().find(|key| find(key.as_ref()).is_none()) {
        Some(unknown) => Err(DomainError::UnknownSportsbook(unknown.as_ref().to_string())),
        None => Ok(()),
    }
}
