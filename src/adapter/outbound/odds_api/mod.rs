//! Odds REST wrapper integration.

pub mod client;
pub mod dto;
pub mod settings;

pub use client::OddsApiClient;
pub use settings::OddsApiConfig;
