//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!        ┌──────────────────────────┐
//!        │       Application        │
//!        │  (normalize, selector,   │
//!        │   board, query)          │
//!        └────────────┬─────────────┘
//!                     │ OddsProvider
//!                     ▼
//!              ┌─────────────┐
//!              │  Odds API   │
//!              │   Adapter   │
//!              └─────────────┘
//! ```

pub mod outbound;

pub use outbound::odds::{OddsProvider, OddsResponse, PropsRequest, ResponseMeta};
