//! Implementations of ports (hexagonal adapters).
//!
//! - [`inbound`] - Driving side: the command-line front-end
//! - [`outbound`] - Driven side: the odds REST wrapper client

pub mod inbound;
pub mod outbound;
