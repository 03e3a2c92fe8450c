/// test problems with known exact solutions, used to measure the error of the fixed-step solvers
//EXAMPLE OF EXACT SOLUTION OF LINEAR IVP
/*
 linear relaxation with exponential forcing:
y' = 2 - exp(-4x) - 2y
With initial condition y(0) = 1
exact solution:
y = 1 + 0.5*exp(-4x) - 0.5*exp(-2x)
*/

/// Trait for an initial value problem y' = f(x, y) with a closed-form solution
pub trait ExactSolution {
    /// right hand side f(x, y)
    fn rhs(&self, x: f64, y: f64) -> f64;
    /// exact solution y(x)
    fn exact(&self, x: f64) -> f64;
    /// initial value y(x0)
    fn y0(&self) -> f64;
    /// integration interval (x0, x_bound)
    fn x_span(&self) -> (f64, f64);
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RelaxationProblem;

impl ExactSolution for RelaxationProblem {
    fn rhs(&self, x: f64, y: f64) -> f64 {
        2.0 - (-4.0 * x).exp() - 2.0 * y
    }
    fn exact(&self, x: f64) -> f64 {
        1.0 + 0.5 * (-4.0 * x).exp() - 0.5 * (-2.0 * x).exp()
    }
    fn y0(&self) -> f64 {
        1.0
    }
    fn x_span(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}
