use serde::{Deserialize, Serialize};

use crate::error::{Result, SchemaError};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
    Off,
}

impl From<log::LevelFilter> for LogLevel {
    fn from(level: log::LevelFilter) -> Self {
        match level {
            log::LevelFilter::Error => LogLevel::Error,
            log::LevelFilter::Warn => LogLevel::Warn,
            log::LevelFilter::Info => LogLevel::Info,
            log::LevelFilter::Debug => LogLevel::Debug,
            log::LevelFilter::Trace => LogLevel::Trace,
            log::LevelFilter::Off => LogLevel::Off,
        }
    }
}

/// Change the maximum log level at runtime (not persisted).
pub fn set_log_level(level: &str) -> Result<()> {
    let lf = match level.to_lowercase().as_str() {
        "error" => log::LevelFilter::Error,
        "warn" => log::LevelFilter::Warn,
        "info" => log::LevelFilter::Info,
        "debug" => log::LevelFilter::Debug,
        "trace" => log::LevelFilter::Trace,
        "off" => log::LevelFilter::Off,
        other => {
            return Err(SchemaError::InvalidChoice {
                field: "log_level",
                value: other.to_string(),
            });
        }
    };
    log::set_max_level(lf);
    Ok(())
}

/// Current maximum log level.
pub fn get_log_level() -> LogLevel {
    log::max_level().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_round_trips_through_the_facade() {
        let previous = log::max_level();

        set_log_level("WARN").unwrap();
        assert_eq!(get_log_level(), LogLevel::Warn);
        assert!(set_log_level("verbose").is_err());
        assert_eq!(get_log_level(), LogLevel::Warn);

        log::set_max_level(previous);
    }
}
