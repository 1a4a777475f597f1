//! Application services (use cases).
//!
//! These services turn provider payloads into the prop comparison view and
//! hold the explicit session state the front-end renders from.

pub mod board;
pub mod normalize;
pub mod preferences;
pub mod query;
pub mod selector;

pub use board::{BoardStatus, FetchOutcome, FetchTicket, PropBoard};
pub use preferences::{PreferenceStore, Preferences};
pub use query::SortMode;
pub use selector::{EventSelector, SelectorStatus};
