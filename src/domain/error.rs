//! Domain validation errors.
//!
//! Raised when a lookup or selection violates the domain vocabulary: an
//! unknown sport, a stat type the sport does not offer, or an event that is
//! not part of the loaded schedule.
//!
//! # Examples
//!
//! ```
//! use propline::domain::error::DomainError;
//! use propline::domain::sport::Sport;
//!
//! let result = Sport::Nba.stat_type("pitcher_strikeouts");
//! assert!(matches!(result, Err(DomainError::UnknownStatType { .. })));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The sport identifier does not match any supported sport.
    #[error("unknown sport '{0}'")]
    UnknownSport(String),

    /// The sport has no stat type (market) with this key.
    #[error("unknown stat type '{stat}' for {sport}")]
    UnknownStatType {
        /// Sport short name.
        sport: &'static str,
        /// The requested market key.
        stat: String,
    },

    /// The event id is not in the loaded schedule.
    #[error("unknown event '{0}'")]
    UnknownEvent(String),

    /// The sportsbook id is not a known sportsbook.
    #[error("unknown sportsbook '{0}'")]
    UnknownSportsbook(String),
}
