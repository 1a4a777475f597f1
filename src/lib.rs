//! Propline - player prop odds comparison across sportsbooks.
//!
//! Fetches player proposition odds for a sporting event through a thin REST
//! wrapper around an upstream odds provider, reshapes the nested
//! bookmaker → market → outcome payload into one entry per player, and
//! renders a sortable, filterable comparison with the best price per line
//! highlighted.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - [`domain`] - Provider-agnostic types: sports, stat types, odds, props
//! - [`port`] - The [`port::OddsProvider`] trait the application depends on
//! - [`application`] - Normalization, search/sort and session state
//!   ([`application::PropBoard`], [`application::EventSelector`])
//! - [`adapter`] - The HTTP odds client and the command-line front-end
//! - [`infrastructure`] - Configuration, logging and wiring
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `testkit` - Scripted provider and fixture builders for tests
//!
//! # Example
//!
//! ```
//! use propline::application::normalize::{best_price, normalize};
//! use propline::domain::odds::{Bookmaker, GameOdds, Market, Outcome, Side};
//! use propline::domain::sport::Sport;
//! use rust_decimal_macros::dec;
//!
//! let outcome = Outcome::new(Side::Over, dec!(25.5), 120, Some("Jayson Tatum".into()));
//! let odds = GameOdds {
//!     id: None,
//!     sport_key: None,
//!     commence_time: None,
//!     home_team: "Boston Celtics".into(),
//!     away_team: "New York Knicks".into(),
//!     bookmakers: vec![Bookmaker {
//!         key: "draftkings".into(),
//!         title: "DraftKings".into(),
//!         last_update: chrono::Utc::now(),
//!         markets: vec![Market::new("player_points", vec![outcome])],
//!     }],
//! };
//!
//! let stat = Sport::Nba.stat_type("player_points").unwrap();
//! let props = normalize(&odds, stat);
//! let best = best_price(&props[0], stat.key, Side::Over, None).unwrap();
//! assert_eq!(best.price.to_string(), "+120");
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
