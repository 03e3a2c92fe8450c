//! terminal logger setup shared by the estimator api and the binary
use crate::numerical::Euler_error::EstimatorError;
use simplelog::*;

/// maps "debug" | "info" | "warn" | "error" | "off" to a level filter
pub fn level_from_str(level: &str) -> LevelFilter {
    match level {
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => panic!("loglevel must be debug, info, warn, error or off"),
    }
}

/// Installs a terminal logger. None or "off" installs nothing.
/// A second call returns an error because the global logger can be set only once.
pub fn init_logger(loglevel: Option<&str>) -> Result<(), EstimatorError> {
    let log_option = match loglevel {
        Some(level) => level_from_str(level),
        None => return Ok(()),
    };
    if log_option == LevelFilter::Off {
        return Ok(());
    }
    CombinedLogger::init(vec![TermLogger::new(
        log_option,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )])
    .map_err(|e| EstimatorError::Logger(e.to_string()))
}
