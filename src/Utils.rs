//! different utility modules used throughout the project
/// terminal logger setup
pub mod logger;
