/// exact solutions of test IVPs
pub mod Examples_and_utils;
/// Forward Euler method with a fixed step
pub mod FE;
/// error of the Forward Euler method against the exact solution
/// Example
/// ```
/// use euler_error::numerical::Euler_error::{estimate, try_estimate};
/// assert_eq!(estimate(10), 0.026314);
/// assert!(try_estimate(0).is_err());
/// ```
pub mod Euler_error;
/// configurable entry point: number of steps, decimals and log level
pub mod Euler_error_api;
/// error for a sequence of step counts, pretty-printed as a table
pub mod convergence;
