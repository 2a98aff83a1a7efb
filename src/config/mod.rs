// Display geometry configuration and its validation

mod display_config;

pub use display_config::{ConfigError, DisplayConfig};
