//! Error of the explicit Euler method against the exact solution.
//!
//! The interval of the reference problem is split into `n` equal steps, the Euler
//! solution Y and the exact solution Z are taken at the same `n+1` grid points and
//! the mean relative absolute error
//! ```text
//! E = 1/(n+1) * sum_i |Y[i] - Z[i]| / Z[i]
//! ```
//! is returned truncated (not rounded) to 6 decimals.
//! Example
//! ```
//! use euler_error::numerical::Euler_error::estimate;
//! let err = estimate(1000);
//! assert_eq!(err, 0.000251);
//! ```
use crate::numerical::Examples_and_utils::{ExactSolution, RelaxationProblem};
use crate::numerical::FE::FE;
use log::{debug, info};
use nalgebra::DVector;
use std::fmt;
use std::time::Instant;

/// Error types of the estimator
#[derive(Debug, Clone, PartialEq)]
pub enum EstimatorError {
    InvalidArgument(String),
    Logger(String),
}

impl fmt::Display for EstimatorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EstimatorError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            EstimatorError::Logger(msg) => write!(f, "Logger error: {}", msg),
        }
    }
}

impl std::error::Error for EstimatorError {}

/// grid, both solutions and the resulting error of one estimator run
#[derive(Debug, Clone)]
pub struct EulerErrorReport {
    pub x: DVector<f64>,
    pub y_numerical: DVector<f64>,
    pub y_exact: DVector<f64>,
    pub error: f64,
}

pub fn truncate_to_decimals(value: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits as i32);
    (value * scale).trunc() / scale
}

pub fn truncate_to_6_decimals(value: f64) -> f64 {
    (value * 1_000_000.0).trunc() / 1_000_000.0
}

fn check_n(n: usize) -> Result<(), EstimatorError> {
    if n == 0 {
        return Err(EstimatorError::InvalidArgument(
            "number of steps n must be positive, step size 1/n is undefined for n = 0".to_string(),
        ));
    }
    Ok(())
}

fn euler_for<P: ExactSolution + 'static>(problem: P, n: usize) -> FE {
    let (x0, x_bound) = problem.x_span();
    let y0 = problem.y0();
    let mut solver = FE::new();
    solver.set_initial(
        Box::new(move |x, y| problem.rhs(x, y)),
        y0,
        x0,
        x_bound,
        n,
    );
    solver
}

/// untruncated mean relative error, O(1) memory: each (Y[i], Z[i]) pair is consumed as soon as it is made
pub fn mean_relative_error<P: ExactSolution + Clone + 'static>(
    problem: &P,
    n: usize,
) -> Result<f64, EstimatorError> {
    check_n(n)?;
    let mut solver = euler_for(problem.clone(), n);
    // Y[0] and Z[0] are both the initial value, so the first term is zero
    let mut sum = 0.0;
    while !solver.is_finished() {
        solver.step();
        let z = problem.exact(solver.x);
        sum += (solver.y - z).abs() / z;
    }
    Ok(sum / (n + 1) as f64)
}

/// mean relative error truncated to `digits` decimals
pub fn estimate_with_digits<P: ExactSolution + Clone + 'static>(
    problem: &P,
    n: usize,
    digits: u32,
) -> Result<f64, EstimatorError> {
    let start = Instant::now();
    debug!("estimating Euler error: n = {}, h = {}, digits = {}", n, 1.0 / n as f64, digits);
    let raw = mean_relative_error(problem, n)?;
    let res = truncate_to_decimals(raw, digits);
    info!(
        "Euler error for n = {}: raw {:e}, truncated {} ({} ms)",
        n,
        raw,
        res,
        start.elapsed().as_millis()
    );
    Ok(res)
}

pub fn try_estimate(n: usize) -> Result<f64, EstimatorError> {
    let raw = mean_relative_error(&RelaxationProblem, n)?;
    let res = truncate_to_6_decimals(raw);
    info!("Euler error for n = {}: {}", n, res);
    Ok(res)
}

/// Fatal on invalid input: n = 0 panics
pub fn estimate(n: usize) -> f64 {
    match try_estimate(n) {
        Ok(res) => res,
        Err(e) => panic!("{}", e),
    }
}

/// same value as `estimate`, but keeps the grid and both solutions, O(n) memory
pub fn estimate_with_sequences(n: usize) -> Result<EulerErrorReport, EstimatorError> {
    check_n(n)?;
    let problem = RelaxationProblem;
    let mut solver = euler_for(problem, n);
    debug!("{}", solver);
    solver.solve();
    let (x, y_numerical) = solver.get_result();
    // Z[0] is the initial value
    let y_exact = DVector::from_iterator(
        x.len(),
        x.iter()
            .enumerate()
            .map(|(i, &xi)| if i == 0 { problem.y0() } else { problem.exact(xi) }),
    );
    let sum: f64 = y_numerical
        .iter()
        .zip(y_exact.iter())
        .map(|(y, z)| (y - z).abs() / z)
        .sum();
    let error = truncate_to_6_decimals(sum / (n + 1) as f64);
    debug!("sequences of length {} built for n = {}", x.len(), n);
    Ok(EulerErrorReport {
        x,
        y_numerical,
        y_exact,
        error,
    })
}
