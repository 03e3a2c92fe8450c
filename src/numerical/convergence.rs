/// error of the Forward Euler method for a growing number of steps
use crate::numerical::Euler_error::{EstimatorError, mean_relative_error, try_estimate};
use crate::numerical::Examples_and_utils::RelaxationProblem;
use log::info;
use tabled::{builder::Builder, settings::Style};

/// (n, truncated error) for every n
pub fn convergence_study(ns: &[usize]) -> Result<Vec<(usize, f64)>, EstimatorError> {
    ns.iter().map(|&n| Ok((n, try_estimate(n)?))).collect()
}

/// observed order of convergence between consecutive rows, p = ln(e1/e2)/ln(n2/n1).
/// Uses untruncated errors, truncation to zero would make the ratio meaningless.
pub fn observed_order(ns: &[usize]) -> Result<Vec<f64>, EstimatorError> {
    let errors = ns
        .iter()
        .map(|&n| mean_relative_error(&RelaxationProblem, n))
        .collect::<Result<Vec<f64>, EstimatorError>>()?;
    let orders = ns
        .windows(2)
        .zip(errors.windows(2))
        .map(|(n, e)| (e[0] / e[1]).ln() / (n[1] as f64 / n[0] as f64).ln())
        .collect();
    Ok(orders)
}

pub fn convergence_table(ns: &[usize]) -> Result<String, EstimatorError> {
    let rows = convergence_study(ns)?;
    let orders = observed_order(ns)?;
    let mut builder = Builder::default();
    builder.push_record(["n", "h", "error", "order"]);
    for (i, (n, err)) in rows.iter().enumerate() {
        let order = if i == 0 {
            "-".to_string()
        } else {
            format!("{:.3}", orders[i - 1])
        };
        builder.push_record([
            n.to_string(),
            format!("{:e}", 1.0 / *n as f64),
            err.to_string(),
            order,
        ]);
    }
    let mut table = builder.build();
    table.with(Style::modern_rounded());
    let table = table.to_string();
    info!("\n \n CONVERGENCE \n \n {}", table);
    Ok(table)
}
