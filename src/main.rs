#![allow(non_snake_case)]
use euler_error::numerical::Euler_error::estimate;
use euler_error::numerical::Euler_error_api::DEFAULT_N;
use std::env;

/// number of steps from the optional first argument, DEFAULT_N when absent
fn steps_from_arg(arg: Option<String>) -> usize {
    match arg {
        Some(arg) => match arg.parse::<usize>() {
            Ok(n) => n,
            Err(e) => panic!("number of steps must be a non-negative integer, got {}: {}", arg, e),
        },
        None => DEFAULT_N,
    }
}

fn main() {
    let n = steps_from_arg(env::args().nth(1));
    println!("{}", estimate(n));
}
