//! Panel configuration
//!
//! [`PanelConfig`] describes the wiring and tuning of one panel. It is
//! parsed from a small TOML file by [`parse_config`] and must pass
//! [`PanelConfig::validate`] before the firmware starts.

mod parse;
mod types;

pub use parse::{parse_config, ParseError};
pub use types::{
    BacklightConfig, ButtonsConfig, ConfigError, PanelConfig, PinClaims, PinConfig, RenderConfig,
    SensorConfig, SensorKind, MAX_GPIO,
};
