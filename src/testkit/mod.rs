//! Test doubles and fixture builders shared by unit and integration tests.

pub mod fixture;
pub mod provider;

pub use provider::ScriptedProvider;
