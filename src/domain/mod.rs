//! Provider-agnostic odds domain.

pub mod error;
pub mod event;
pub mod odds;
pub mod prop;
pub mod sport;
pub mod sportsbook;

pub use error::DomainError;
pub use event::Event;
pub use odds::{AmericanOdds, Bookmaker, GameOdds, Market, Outcome, Side};
pub use prop::{BestPrice, PlayerProp, PropBook};
pub use sport::{Sport, StatType};
pub use sportsbook::Sportsbook;
