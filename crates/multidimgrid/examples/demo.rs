//! Discretization of f(x0, x1) = x0 * ln(x1) on [1, 1000]^2 with 10 intervals per axis
//!
//! Three grids are compared:
//! 1. linear x linear, evaluated by a plain function
//! 2. linear x logarithmic, evaluated by a closure
//! 3. logarithmic x logarithmic, evaluated by a method of a stateful model
//!
//! f is linear in x0 and in log10(x1), so the interpolation on the lin-log grid is
//! exact while the other two show a small error. The trapezoidal estimate of the
//! integral is closest on the lin-lin grid.
//!
//! Run with `RUST_LOG=multidimgrid=debug` to see construction events.

use anyhow::Result;
use multidimgrid::{AxisSpacing, CoordinateAxis, Coordinates, GridFunction, GridPoint};
use tracing_subscriber::EnvFilter;

const LOWER: f64 = 1.0;
const UPPER: f64 = 1000.0;
const INTERVALS: usize = 10;

fn x0_ln_x1(x: &Coordinates<2>) -> f64 {
    x[0] * x[1].ln()
}

/// Evaluates f and counts its evaluations.
struct Model {
    evaluations: usize,
}

impl Model {
    fn evaluate(&mut self, x: &Coordinates<2>) -> f64 {
        self.evaluations += 1;
        x0_ln_x1(x)
    }
}

fn integrate(f: &GridFunction<2>) -> Result<f64> {
    let mut integral = 0.0;
    for index in 0..f.point_number() {
        let weights = f.integration_weights_at_index(index)?;
        integral += f.value_at_index(index)? * weights.iter().product::<f64>();
    }
    Ok(integral)
}

/// `RUST_LOG` if it is set and valid, `multidimgrid=info` otherwise.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("multidimgrid=info"))
}

fn main() -> Result<()> {
    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .init();

    let lin = CoordinateAxis::linear(LOWER, UPPER, INTERVALS)?;
    let log = CoordinateAxis::logarithmic(LOWER, UPPER, INTERVALS)?;

    let mut model = Model { evaluations: 0 };
    let closure = |x: &Coordinates<2>| x[0] * x[1].ln();

    let cases = [
        ("lin-lin", GridFunction::from_fn([&lin, &lin], x0_ln_x1)?),
        ("lin-log", GridFunction::from_fn([&lin, &log], closure)?),
        (
            "log-log",
            GridFunction::from_fn([&log, &log], |x| model.evaluate(x))?,
        ),
    ];
    println!("{}", cases[1].1);
    println!("model evaluated {} times", model.evaluations);

    let g: GridPoint<2> = [2, 7];
    let x: Coordinates<2> = [30.0, 650.0];

    println!();
    for (name, f) in &cases {
        let y = f.coordinates(&g)?;
        println!(
            "On the {name} grid the grid point {g:?} has the coordinates ({:e}, {:e}) and the function value {:e}.",
            y[0], y[1], f[g]
        );
    }

    println!();
    for (name, f) in &cases {
        println!(
            "On the {name} grid the interpolated function value at {x:?} is {:e}.",
            f.interpolate(&x)?
        );
    }
    println!("The exact function value at {x:?} is {:e}.", x0_ln_x1(&x));

    let exact = (UPPER * UPPER - LOWER * LOWER) / 2.0
        * (UPPER * UPPER.ln() - LOWER * LOWER.ln() - (UPPER - LOWER));
    println!();
    for (name, f) in &cases {
        println!(
            "On the {name} grid the estimated integral is {:e}.",
            integrate(f)?
        );
    }
    println!("The exact integral is {exact:e}.");

    // Axis-level queries on the second axis of the lin-log grid
    let axis = &cases[1].1.axes()[1];
    println!();
    println!(
        "{axis}: nearest axis points around {} are {} and {}, interpolation weight {:.4}",
        x[1],
        axis.nearest_lower_axis_point(x[1])?,
        axis.nearest_higher_axis_point(x[1])?,
        axis.interpolation_weight(x[1])?
    );

    Ok(())
}
