//! Build script for kairos-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates clock.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

const SCAN_DIRS: &[&str] = &[
    "L2R_U2D", "L2R_D2U", "R2L_U2D", "R2L_D2U", "U2D_L2R", "U2D_R2L", "D2U_L2R", "D2U_R2L",
];

const TIMING_KEYS: &[&str] = &[
    "tick_ms",
    "blink_ms",
    "hold_ms",
    "hold_cap_ms",
    "repeat_ms",
    "alarm_ms",
];

/// Highest scanner index + 1
const MAX_BUTTONS: i64 = 16;

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
    if env::var_os("CARGO_FEATURE_DEFMT").is_some() {
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate clock.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=clock.toml");

    let config_path = Path::new("clock.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: clock.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds clock.toml as its configuration.            ║\n\
            ║  Please create one in the kairos-firmware directory.             ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read clock.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in clock.toml                        ║\n\
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
    validate_timing(&config, &mut errors);
    validate_alarm(&config, &mut errors);
    validate_buttons(&config, &mut errors);
    validate_display(&config, &mut errors);

    if !errors.is_empty() {
        report_errors("clock.toml validation failed", &errors);
    }

    println!("cargo:warning=clock.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn report_errors(title: &str, errors: &[String]) -> ! {
    let body = errors
        .iter()
        .map(|e| format!("• {}", e))
        .collect::<Vec<_>>()
        .join("\n");
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        format_error_lines(&body)
    );
}

/// Only the sections the firmware parser knows are allowed
fn validate_sections(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(table) = config.as_table() else {
        return;
    };
    for (name, value) in table {
        match name.as_str() {
            "timing" | "alarm" | "buttons" | "display" => {
                if !value.is_table() {
                    errors.push(format!("'{}' must be a [section]", name));
                }
            }
            other => errors.push(format!("Unknown section [{}]", other)),
        }
    }
}

/// Read a positive integer, recording an error when present but invalid
fn read_u32(section: &toml::Value, key: &str, path: &str, errors: &mut Vec<String>) -> Option<u32> {
    let value = section.get(key)?;
    match value.as_integer() {
        Some(v) if (0..=i64::from(u32::MAX)).contains(&v) => Some(v as u32),
        _ => {
            errors.push(format!("{}.{} must be a non-negative integer", path, key));
            None
        }
    }
}

fn validate_timing(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(timing) = config.get("timing") else {
        return;
    };

    let mut values = [50, 500, 2000, 60_000, 200, 3000];
    for (slot, key) in values.iter_mut().zip(TIMING_KEYS) {
        if let Some(v) = read_u32(timing, key, "timing", errors) {
            *slot = v;
        }
    }

    let tick = values[0];
    if tick == 0 {
        errors.push("timing.tick_ms must be greater than 0".to_string());
        return;
    }
    for (value, key) in values.iter().zip(TIMING_KEYS).skip(1) {
        if *value == 0 || value % tick != 0 {
            errors.push(format!(
                "timing.{} = {} must be a positive multiple of tick_ms ({})",
                key, value, tick
            ));
        }
    }
    if values[3] < values[2] {
        errors.push("timing.hold_cap_ms must not be below timing.hold_ms".to_string());
    }
}

fn validate_alarm(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(alarm) = config.get("alarm") else {
        return;
    };

    if let Some(enabled) = alarm.get("enabled") {
        if !enabled.is_bool() {
            errors.push("alarm.enabled must be true or false".to_string());
        }
    }

    let Some(time) = alarm.get("time") else {
        return;
    };
    let Some(time) = time.as_str() else {
        errors.push("alarm.time must be a string \"HH:MM:SS\"".to_string());
        return;
    };

    let parts: Vec<Option<u8>> = time.split(':').map(|p| p.trim().parse().ok()).collect();
    let valid = match parts.as_slice() {
        [Some(h), Some(m), Some(s)] => *h <= 23 && *m <= 59 && *s <= 59,
        _ => false,
    };
    if !valid {
        errors.push(format!("alarm.time = \"{}\" is not a valid HH:MM:SS time", time));
    }
}

fn validate_buttons(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(buttons) = config.get("buttons") else {
        return;
    };

    let mut seen: Vec<(&str, i64)> = Vec::new();
    for (key, default) in [("mode", 0), ("up", 1), ("ok", 2)] {
        let index = match buttons.get(key) {
            Some(v) => match v.as_integer() {
                Some(i) => i,
                None => {
                    errors.push(format!("buttons.{} must be an integer", key));
                    continue;
                }
            },
            None => default,
        };
        if !(0..MAX_BUTTONS).contains(&index) {
            errors.push(format!(
                "buttons.{} = {} is out of range (0-{})",
                key,
                index,
                MAX_BUTTONS - 1
            ));
        }
        if let Some((other, _)) = seen.iter().find(|(_, i)| *i == index) {
            errors.push(format!("buttons.{} and buttons.{} share index {}", other, key, index));
        }
        seen.push((key, index));
    }
}

fn validate_display(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(dir) = config.get("display").and_then(|d| d.get("scan_dir")) else {
        return;
    };
    match dir.as_str() {
        Some(name) if SCAN_DIRS.contains(&name) => {}
        _ => errors.push(format!(
            "display.scan_dir must be one of: {}",
            SCAN_DIRS.join(", ")
        )),
    }
}
