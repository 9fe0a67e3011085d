//! Minimal TOML reader for `clock.toml`
//!
//! Handles only the subset the clock configuration uses:
//! - `[section]` headers
//! - `key = value` pairs with integer, boolean or quoted string values
//! - `#` comments, whole-line or trailing
//!
//! Unknown keys are ignored so a newer file still boots older firmware.
//! Unknown sections are an error.

use crate::time::{Alarm, Field};

use super::types::{ClockConfig, ConfigError, ScanDir};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Value has the wrong type or format
    InvalidValue,
    /// The file parsed but the result is inconsistent
    Invalid(ConfigError),
}

impl From<ConfigError> for ParseError {
    fn from(err: ConfigError) -> Self {
        ParseError::Invalid(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Timing,
    Alarm,
    Buttons,
    Display,
}

/// Parse and validate a configuration
///
/// Anything not set in `input` keeps its default.
pub fn parse_config(input: &str) -> Result<ClockConfig, ParseError> {
    let mut config = ClockConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        if let Some((key, value)) = parse_key_value(line) {
            apply_value(section, key, value, &mut config)?;
        }
    }

    config.validate()?;
    Ok(config)
}

fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "timing" => Ok(Section::Timing),
        "alarm" => Ok(Section::Alarm),
        "buttons" => Ok(Section::Buttons),
        "display" => Ok(Section::Display),
        _ => Err(ParseError::InvalidSection),
    }
}

fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut ClockConfig,
) -> Result<(), ParseError> {
    match section {
        Section::Timing => {
            let t = &mut config.timing;
            match key {
                "tick_ms" => t.tick_ms = parse_int(value)?,
                "blink_ms" => t.blink_ms = parse_int(value)?,
                "hold_ms" => t.hold_ms = parse_int(value)?,
                "hold_cap_ms" => t.hold_cap_ms = parse_int(value)?,
                "repeat_ms" => t.repeat_ms = parse_int(value)?,
                "alarm_ms" => t.alarm_ms = parse_int(value)?,
                _ => {}
            }
        }
        Section::Alarm => match key {
            "time" => {
                let enabled = config.alarm.enabled;
                config.alarm = parse_time(parse_string(value)?)?;
                config.alarm.enabled = enabled;
            }
            "enabled" => config.alarm.enabled = parse_bool(value)?,
            _ => {}
        },
        Section::Buttons => {
            let b = &mut config.buttons;
            match key {
                "mode" => b.mode = parse_int(value)?,
                "up" => b.up = parse_int(value)?,
                "ok" => b.ok = parse_int(value)?,
                _ => {}
            }
        }
        Section::Display => {
            if key == "scan_dir" {
                config.display.scan_dir =
                    ScanDir::from_name(parse_string(value)?).ok_or(ParseError::InvalidValue)?;
            }
        }
        Section::Root => {}
    }
    Ok(())
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    let value = match value.find('#') {
        Some(hash_pos) if value[..hash_pos].matches('"').count() % 2 == 0 => {
            value[..hash_pos].trim()
        }
        _ => value,
    };

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn parse_string(value: &str) -> Result<&str, ParseError> {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        Ok(&value[1..value.len() - 1])
    } else {
        Ok(value)
    }
}

fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue)
}

fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue),
    }
}

/// Parse "HH:MM:SS" into a disabled alarm
fn parse_time(value: &str) -> Result<Alarm, ParseError> {
    let mut parts = value.split(':');
    let mut next = |field: Field| -> Result<u8, ParseError> {
        let v: u8 = parse_int(parts.next().ok_or(ParseError::InvalidValue)?.trim())?;
        if field.contains(v) {
            Ok(v)
        } else {
            Err(ParseError::InvalidValue)
        }
    };
    let hour = next(Field::Hour)?;
    let min = next(Field::Min)?;
    let sec = next(Field::Sec)?;
    if parts.next().is_some() {
        return Err(ParseError::InvalidValue);
    }
    Ok(Alarm::new(hour, min, sec))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
# Desk clock
[timing]
tick_ms = 20
blink_ms = 400   # faster blink
hold_ms = 1000
repeat_ms = 100

[alarm]
time = "06:45:30"
enabled = true

[buttons]
mode = 3
up = 4
ok = 5

[display]
scan_dir = "U2D_R2L"
"#;

    #[test]
    fn test_parse_full_file() {
        let config = parse_config(SAMPLE).unwrap();
        assert_eq!(config.timing.tick_ms, 20);
        assert_eq!(config.timing.blink_ms, 400);
        assert_eq!(config.timing.hold_ms, 1000);
        assert_eq!(config.timing.hold_cap_ms, 60_000);
        assert_eq!(config.timing.repeat_ms, 100);
        assert_eq!(
            (config.alarm.hour, config.alarm.min, config.alarm.sec),
            (6, 45, 30)
        );
        assert!(config.alarm.enabled);
        assert_eq!(config.buttons.mode, 3);
        assert_eq!(config.buttons.ok, 5);
        assert_eq!(config.display.scan_dir, ScanDir::U2dR2l);
    }

    #[test]
    fn test_empty_input_gives_defaults() {
        assert_eq!(parse_config("").unwrap(), ClockConfig::default());
    }

    #[test]
    fn test_enabled_before_time_is_kept() {
        let config = parse_config("[alarm]\nenabled = true\ntime = \"08:00:00\"\n").unwrap();
        assert!(config.alarm.enabled);
        assert_eq!(config.alarm.hour, 8);
    }

    #[test]
    fn test_unknown_key_ignored() {
        let config = parse_config("[timing]\nfoo = 1\n").unwrap();
        assert_eq!(config, ClockConfig::default());
    }

    #[test]
    fn test_unknown_section_rejected() {
        assert_eq!(
            parse_config("[heater]\n"),
            Err(ParseError::InvalidSection)
        );
    }

    #[test]
    fn test_bad_values_rejected() {
        assert_eq!(
            parse_config("[timing]\ntick_ms = fast\n"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[alarm]\ntime = \"24:00:00\"\n"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[alarm]\ntime = \"07:00\"\n"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[display]\nscan_dir = \"diagonal\"\n"),
            Err(ParseError::InvalidValue)
        );
    }

    #[test]
    fn test_validation_runs_after_parse() {
        assert_eq!(
            parse_config("[buttons]\nup = 0\n"),
            Err(ParseError::Invalid(ConfigError::DuplicateButton))
        );
    }
}
