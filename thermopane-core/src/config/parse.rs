//! Simple TOML parser for panel configuration
//!
//! This is a minimal TOML parser that handles only the subset needed for
//! the panel configuration. It does NOT support the full TOML spec and
//! needs no allocator.
//!
//! Supported features:
//! - Key = value pairs (string, integer, boolean)
//! - `[buttons]`, `[backlight]`, `[render]` and `[sensor]` section headers
//! - Comments (# ...), including trailing comments
//!
//! Unknown keys are ignored; unknown sections are an error.

use super::types::{PanelConfig, PinConfig, SensorKind};
use crate::line::Page;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Invalid section header
    InvalidSection,
    /// Invalid value type
    InvalidValue,
    /// Invalid pin string
    InvalidPin,
    /// Line is neither a header nor a key = value pair
    Malformed,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Buttons,
    Backlight,
    Render,
    Sensor,
}

/// Parse TOML configuration into a PanelConfig
///
/// Keys that are not present keep their defaults.
pub fn parse_config(input: &str) -> Result<PanelConfig, ParseError> {
    let mut config = PanelConfig::new();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') {
            let header = line
                .split('#')
                .next()
                .map(str::trim)
                .and_then(|h| h.strip_prefix('['))
                .and_then(|h| h.strip_suffix(']'))
                .ok_or(ParseError::InvalidSection)?;
            section = parse_section_header(header)?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::Malformed)?;
        apply_value(section, key, value, &mut config)?;
    }

    Ok(config)
}

/// Parse section header like "buttons"
fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "buttons" => Ok(Section::Buttons),
        "backlight" => Ok(Section::Backlight),
        "render" => Ok(Section::Render),
        "sensor" => Ok(Section::Sensor),
        _ => Err(ParseError::InvalidSection),
    }
}

/// Apply one key to the config
fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut PanelConfig,
) -> Result<(), ParseError> {
    match section {
        Section::Root => {
            if key == "debounce_ms" {
                config.debounce_ms = parse_int(value)?;
            }
        }
        Section::Buttons => {
            let buttons = &mut config.buttons;
            match key {
                "page_1" => buttons.page_1 = parse_pin(value)?,
                "page_2" => buttons.page_2 = parse_pin(value)?,
                "page_3" => buttons.page_3 = parse_pin(value)?,
                "brightness" => buttons.brightness = parse_pin(value)?,
                _ => {}
            }
        }
        Section::Backlight => match key {
            "max_level" => config.backlight.max_level = parse_int(value)?,
            "step" => config.backlight.step = parse_int(value)?,
            _ => {}
        },
        Section::Render => {
            let render = &mut config.render;
            match key {
                "period_ms" => render.period_ms = parse_int(value)?,
                "live_page" => {
                    render.live_page =
                        Page::from_number(parse_int(value)?).ok_or(ParseError::InvalidValue)?
                }
                "width" => render.geometry.width = parse_int(value)?,
                "height" => render.geometry.height = parse_int(value)?,
                "text_x" => render.geometry.text_x = parse_int(value)?,
                "text_y" => render.geometry.text_y = parse_int(value)?,
                _ => {}
            }
        }
        Section::Sensor => match key {
            "kind" => {
                config.sensor.kind = match parse_string(value) {
                    "die" => SensorKind::Die,
                    "ntc100k" => SensorKind::Ntc100k,
                    _ => return Err(ParseError::InvalidValue),
                }
            }
            "pullup_ohms" => config.sensor.pullup_ohms = parse_int(value)?,
            _ => {}
        },
    }
    Ok(())
}

/// Parse a key = value line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    // Remove inline comments
    let value = if let Some(hash_pos) = value.find('#') {
        // Make sure # is not inside a string
        let quote_count = value[..hash_pos].matches('"').count();
        if quote_count % 2 == 0 {
            value[..hash_pos].trim()
        } else {
            value
        }
    } else {
        value
    };

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a string value (removes quotes)
fn parse_string(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

/// Parse an integer value
fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue)
}

/// Parse a pin string like "gpio11", "!gpio12", "^gpio4"
fn parse_pin(value: &str) -> Result<PinConfig, ParseError> {
    let mut s = parse_string(value);
    let mut inverted = false;
    let mut pull_up = false;

    // Check for modifiers
    loop {
        if let Some(rest) = s.strip_prefix('!') {
            inverted = true;
            s = rest;
        } else if let Some(rest) = s.strip_prefix('^') {
            pull_up = true;
            s = rest;
        } else {
            break;
        }
    }

    let pin = s
        .strip_prefix("gpio")
        .ok_or(ParseError::InvalidPin)?
        .parse()
        .map_err(|_| ParseError::InvalidPin)?;

    Ok(PinConfig {
        pin,
        inverted,
        pull_up,
    })
}
