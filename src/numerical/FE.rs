/// Forward (explicit) Euler method with a fixed step for a scalar ODE y' = f(x, y)
/// y_{k+1} = y_k + h*f(x_k, y_k), x_{k+1} = x_k + h
use core::fmt::Display;
use nalgebra::DVector;

pub struct FE {
    fun: Box<dyn Fn(f64, f64) -> f64>,
    pub x: f64,
    pub y: f64,
    x0: f64,
    y0: f64,
    h: f64,
    n_steps: usize,
    step_counter: usize,
    status: String,
    x_result: DVector<f64>,
    y_result: DVector<f64>,
}

impl Display for FE {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "FE {{ x0: {}, y0: {}, h: {}, n_steps: {}, x: {}, y: {} }}",
            self.x0, self.y0, self.h, self.n_steps, self.x, self.y
        )
    }
}

impl FE {
    pub fn new() -> FE {
        FE {
            fun: Box::new(|_x, _y| 0.0),
            x: 0.0,
            y: 0.0,
            x0: 0.0,
            y0: 0.0,
            h: 0.0,
            n_steps: 0,
            step_counter: 0,
            status: "running".to_string(),
            x_result: DVector::zeros(0),
            y_result: DVector::zeros(0),
        }
    }
    /// interval [x0, x_bound] is split into n_steps equal steps, h = (x_bound - x0)/n_steps
    pub fn set_initial(
        &mut self,
        fun: Box<dyn Fn(f64, f64) -> f64>,
        y0: f64,
        x0: f64,
        x_bound: f64,
        n_steps: usize,
    ) {
        self.fun = fun;
        self.x0 = x0;
        self.y0 = y0;
        self.x = x0;
        self.y = y0;
        self.h = (x_bound - x0) / n_steps as f64;
        self.n_steps = n_steps;
        self.step_counter = 0;
        self.status = "running".to_string();
    }

    pub fn _step_impl(&mut self) {
        let f = (self.fun)(self.x, self.y);
        self.y += f * self.h;
        self.x += self.h;
        self.step_counter += 1;
    }

    /// makes one step and updates status; the grid is counted in steps so that
    /// round-off in the accumulated x never adds or drops a point
    pub fn step(&mut self) -> &str {
        if self.step_counter >= self.n_steps {
            self.status = "finished".to_string();
        } else {
            self._step_impl();
            self.status = if self.step_counter == self.n_steps {
                "finished".to_string()
            } else {
                "running".to_string()
            };
        }
        &self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status == "finished"
    }

    pub fn get_h(&self) -> f64 {
        self.h
    }

    /// integrate over the whole interval storing every grid point, including the initial one
    pub fn solve(&mut self) {
        let mut x: Vec<f64> = Vec::with_capacity(self.n_steps + 1);
        let mut y: Vec<f64> = Vec::with_capacity(self.n_steps + 1);
        x.push(self.x);
        y.push(self.y);
        while !self.is_finished() && self.n_steps > 0 {
            self.step();
            x.push(self.x);
            y.push(self.y);
        }
        self.x_result = DVector::from_vec(x);
        self.y_result = DVector::from_vec(y);
    }

    pub fn get_result(&self) -> (DVector<f64>, DVector<f64>) {
        (self.x_result.clone(), self.y_result.clone())
    }
}

#[cfg(test)]
mod tests_fe {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fe_single_step() {
        let mut solver = FE::new();
        solver.set_initial(Box::new(|_x, y| -y), 1.0, 0.0, 1.0, 1);
        solver.solve();
        let (x, y) = solver.get_result();
        assert_eq!(x.len(), 2);
        assert_eq!(y.len(), 2);
        assert_eq!(y[1], 0.0);
        assert_eq!(x[1], 1.0);
        assert!(solver.is_finished());
    }

    #[test]
    fn test_fe_exponential_decay() {
        let mut solver = FE::new();
        solver.set_initial(Box::new(|_x, y| -y), 1.0, 0.0, 1.0, 100_000);
        solver.solve();
        let (x, y) = solver.get_result();
        assert_eq!(y.len(), 100_001);
        assert_relative_eq!(x[x.len() - 1], 1.0, epsilon = 1e-9);
        assert_relative_eq!(y[y.len() - 1], (-1.0f64).exp(), epsilon = 1e-5);
    }

    #[test]
    fn test_fe_step_after_finish_is_noop() {
        let mut solver = FE::new();
        solver.set_initial(Box::new(|x, _y| x), 0.0, 0.0, 1.0, 2);
        assert_eq!(solver.step(), "running");
        assert_eq!(solver.step(), "finished");
        let y = solver.y;
        assert_eq!(solver.step(), "finished");
        assert_eq!(solver.y, y);
        // y = sum of x_k*h for k = 0, 1
        assert_relative_eq!(y, 0.25, epsilon = 1e-15);
    }

    #[test]
    fn test_fe_display_shows_initial_state() {
        let mut solver = FE::new();
        solver.set_initial(Box::new(|_x, y| -y), 2.5, 0.0, 1.0, 4);
        let shown = format!("{}", solver);
        assert!(shown.contains("x0: 0"));
        assert!(shown.contains("y0: 2.5"));
        assert!(shown.contains("n_steps: 4"));
    }

    #[test]
    fn test_fe_step_size() {
        let mut solver = FE::new();
        solver.set_initial(Box::new(|_x, _y| 1.0), 0.0, 0.0, 2.0, 8);
        assert_eq!(solver.get_h(), 0.25);
        solver.solve();
        assert_relative_eq!(solver.y, 2.0, epsilon = 1e-14);
    }
}
