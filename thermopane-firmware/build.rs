//! Build script for thermopane-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates panel.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// GPIOs wired to the display pack (DC, CS, CLK, MOSI, backlight)
const BOARD_PINS: [u32; 5] = [16, 17, 18, 19, 20];

/// Thermistor input used by the ntc100k sensor
const NTC_PIN: u32 = 26;

const BUTTON_KEYS: [&str; 4] = ["page_1", "page_2", "page_3", "brightness"];

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate panel.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=panel.toml");

    let config_path = Path::new("panel.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: panel.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds panel.toml as its configuration.            ║\n\
            ║  Please create one in the thermopane-firmware directory.         ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read panel.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse and validate TOML syntax
    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in panel.toml                        ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    validate_sections(&config, &mut errors);
    validate_buttons(&config, &mut errors);
    validate_backlight(&config, &mut errors);
    validate_render(&config, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid panel configuration                              ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=panel.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            format!("║  {:<64} ║", truncate_line(line))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Cut a line to 64 characters, counting chars so multi-byte text never splits
fn truncate_line(line: &str) -> String {
    if line.chars().count() > 64 {
        format!("{}...", line.chars().take(61).collect::<String>())
    } else {
        line.to_string()
    }
}

/// The firmware parser rejects unknown sections, so do the same here
fn validate_sections(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(table) = config.as_table() else {
        return;
    };
    for (name, value) in table {
        let known = ["buttons", "backlight", "render", "sensor"].contains(&name.as_str());
        if value.is_table() && !known {
            errors.push(format!("Unknown section [{}]", name));
        }
    }
}

/// Pin number from "gpioN" with optional "^" / "!" modifiers
fn parse_pin(value: &str) -> Option<u32> {
    value
        .trim_start_matches(['^', '!'])
        .strip_prefix("gpio")?
        .parse()
        .ok()
}

fn uses_ntc(config: &toml::Value) -> bool {
    config
        .get("sensor")
        .and_then(|s| s.get("kind"))
        .and_then(|k| k.as_str())
        == Some("ntc100k")
}

fn validate_buttons(config: &toml::Value, errors: &mut Vec<String>) {
    let buttons = match config.get("buttons") {
        Some(toml::Value::Table(t)) => t,
        // Defaults apply
        None => return,
        Some(_) => {
            errors.push("[buttons] must be a table".to_string());
            return;
        }
    };

    let mut reserved: Vec<u32> = BOARD_PINS.to_vec();
    if uses_ntc(config) {
        reserved.push(NTC_PIN);
    }

    let mut seen: Vec<u32> = Vec::new();
    for key in BUTTON_KEYS {
        let Some(value) = buttons.get(key) else {
            continue;
        };
        let Some(pin) = value.as_str().and_then(parse_pin) else {
            errors.push(format!("[buttons] {} must be a pin like \"^gpio12\"", key));
            continue;
        };

        if pin > 29 {
            errors.push(format!("[buttons] {} uses gpio{} (valid: 0-29)", key, pin));
        } else if reserved.contains(&pin) {
            errors.push(format!("[buttons] {} uses gpio{}, wired to the board", key, pin));
        } else if seen.contains(&pin) {
            errors.push(format!("[buttons] gpio{} is assigned twice", pin));
        }
        seen.push(pin);
    }
}

fn validate_backlight(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(backlight) = config.get("backlight") else {
        return;
    };

    let max_level = backlight
        .get("max_level")
        .and_then(|v| v.as_integer())
        .unwrap_or(1000);
    let step = backlight.get("step").and_then(|v| v.as_integer()).unwrap_or(100);

    if !(1..=i64::from(u16::MAX)).contains(&max_level) {
        errors.push("[backlight] max_level must be 1-65535".to_string());
        return;
    }
    if step <= 0 || step > max_level {
        errors.push("[backlight] step must be 1..=max_level".to_string());
    } else if max_level % step != 0 {
        errors.push("[backlight] max_level must be a multiple of step".to_string());
    }
}

fn validate_render(config: &toml::Value, errors: &mut Vec<String>) {
    if let Some(render) = config.get("render") {
        if let Some(period) = render.get("period_ms").and_then(|v| v.as_integer()) {
            if period <= 0 {
                errors.push("[render] period_ms must be positive".to_string());
            }
        }

        if let Some(page) = render.get("live_page").and_then(|v| v.as_integer()) {
            if !(1..=3).contains(&page) {
                errors.push("[render] live_page must be 1, 2 or 3".to_string());
            }
        }

        let dim = |key: &str, default: i64| {
            render.get(key).and_then(|v| v.as_integer()).unwrap_or(default)
        };
        let (width, height) = (dim("width", 320), dim("height", 240));
        if !(1..=320).contains(&width) || !(1..=240).contains(&height) {
            errors.push("[render] canvas must fit the 320x240 panel".to_string());
        }
        if dim("text_x", 10) >= width || dim("text_y", 10) >= height {
            errors.push("[render] text origin must lie inside the canvas".to_string());
        }
    }

    if let Some(sensor) = config.get("sensor") {
        if let Some(kind) = sensor.get("kind").and_then(|v| v.as_str()) {
            if !["die", "ntc100k"].contains(&kind) {
                errors.push("[sensor] kind must be 'die' or 'ntc100k'".to_string());
            }
        }
        if let Some(ohms) = sensor.get("pullup_ohms").and_then(|v| v.as_integer()) {
            if ohms <= 0 {
                errors.push("[sensor] pullup_ohms must be positive".to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_line_keeps_multibyte_chars_whole() {
        // 'é' is two bytes, so byte index 61 falls inside a char
        let line = format!("a{}", "é".repeat(70));
        let truncated = truncate_line(&line);
        assert_eq!(truncated.chars().count(), 64);
        assert!(truncated.ends_with("é..."));
    }

    #[test]
    fn test_short_line_is_unchanged() {
        assert_eq!(truncate_line("expected `=`"), "expected `=`");
    }
}
