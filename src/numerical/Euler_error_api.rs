use crate::Utils::logger::init_logger;
use crate::numerical::Euler_error::{EstimatorError, estimate_with_digits};
use crate::numerical::Examples_and_utils::RelaxationProblem;
use log::{info, warn};

/// number of steps used by the binary when nothing else is given
pub const DEFAULT_N: usize = 200000;
pub const DEFAULT_DIGITS: u32 = 6;

#[derive(Debug, Clone, PartialEq)]
pub struct EstimatorConfig {
    pub n: usize,
    pub digits: u32,
    /// "debug" | "info" | "warn" | "error" | "off"; None means no logger is installed
    pub loglevel: Option<String>,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        EstimatorConfig {
            n: DEFAULT_N,
            digits: DEFAULT_DIGITS,
            loglevel: None,
        }
    }
}

impl EstimatorConfig {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_n(mut self, n: usize) -> Self {
        self.n = n;
        self
    }
    pub fn with_digits(mut self, digits: u32) -> Self {
        self.digits = digits;
        self
    }
    pub fn with_loglevel(mut self, loglevel: &str) -> Self {
        self.loglevel = Some(loglevel.to_string());
        self
    }

    /// installs the logger (if asked) and computes the truncated error
    pub fn run(&self) -> Result<f64, EstimatorError> {
        if let Err(e) = init_logger(self.loglevel.as_deref()) {
            // the logger is global, a second run keeps the first one
            warn!("{}", e);
        }
        info!("Program started: {:?}", self);
        let res = estimate_with_digits(&RelaxationProblem, self.n, self.digits)?;
        info!("Program ended");
        Ok(res)
    }
}

#[cfg(test)]
mod tests_euler_error_api {
    use super::*;
    use crate::numerical::Euler_error::estimate;

    #[test]
    fn test_default_config() {
        let config = EstimatorConfig::default();
        assert_eq!(config.n, 200000);
        assert_eq!(config.digits, 6);
        assert_eq!(config.loglevel, None);
        assert_eq!(config, EstimatorConfig::new());
    }

    #[test]
    fn test_run_matches_estimate() {
        let res = EstimatorConfig::new().with_n(1000).run().unwrap();
        assert_eq!(res, estimate(1000));
    }

    #[test]
    fn test_run_with_digits() {
        let res = EstimatorConfig::new()
            .with_n(10)
            .with_digits(3)
            .with_loglevel("off")
            .run()
            .unwrap();
        assert_eq!(res, 0.026);
    }

    #[test]
    fn test_run_with_logger_already_installed() {
        let _ = init_logger(Some("warn"));
        let res = EstimatorConfig::new()
            .with_n(1000)
            .with_loglevel("warn")
            .run();
        assert_eq!(res, Ok(0.000251));
    }

    #[test]
    fn test_run_zero_steps() {
        let res = EstimatorConfig::new().with_n(0).run();
        assert!(matches!(res, Err(EstimatorError::InvalidArgument(_))));
    }
}
