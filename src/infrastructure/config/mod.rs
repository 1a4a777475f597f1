//! Infrastructure configuration modules.

pub mod display;
pub mod logging;
pub mod settings;

pub use display::{DisplayConfig, LayoutMode};
pub use logging::LoggingConfig;
pub use settings::Config;
