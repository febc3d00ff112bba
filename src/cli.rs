use clap::{CommandFactory, Parser};
use log::{debug, warn};
use crate::error::{Error, Result};
use crate::solver::Quadratic;

const COEFFICIENTS: [&str; 3] = ["a", "b", "c"];

const EXAMPLES: &str = "\
Examples:
  quadratic -- 1 -10 16
  1.000000x^2 + -10.000000x + 16.000000
  x = 8.000000
  x = 2.000000

  quadratic -v y -- 1 2 3
  1.000000y^2 + 2.000000y + 3.000000
  x = -1.000000 + 1.414214i
  x = -1.000000 + -1.414214i";

/// Finds the zeroes of a quadratic polynomial in form ax^2 + bx + c.
///
/// Put '--' before the coefficients so negative numbers are never read as options.
#[derive(Parser, Debug)]
#[command(name = "quadratic", version, allow_negative_numbers = true, after_help = EXAMPLES)]
pub struct Cli {
    /// The variable to show as being solved for in the quadratic equation
    #[arg(short = 'v', long, value_name = "CHAR", default_value_t = 'x')]
    pub variable: char,

    /// The a, b and c coefficients of the polynomial
    #[arg(value_name = "COEFFICIENT")]
    pub coefficients: Vec<String>,
}

impl Cli {
    /// Reads coefficients `a`, `b` and `c` in order, failing on the first one
    /// that is absent, not a number, or not finite.
    pub fn polynomial(&self) -> Result<Quadratic> {
        let mut values = [0.0f64; 3];
        for (i, &name) in COEFFICIENTS.iter().enumerate() {
            let text = self.coefficients
                .get(i)
                .ok_or(Error::MissingCoefficient { name })?;
            values[i] = text.trim().parse::<f64>().map_err(|source| Error::InvalidCoefficient {
                name,
                value: text.clone(),
                source,
            })?;
            if !values[i].is_finite() {
                return Err(Error::NonFiniteCoefficient { name, value: values[i] });
            }
            debug!("coefficient {} = {}", name, values[i]);
        }

        if self.coefficients.len() > COEFFICIENTS.len() {
            warn!("ignoring extra arguments: {:?}", &self.coefficients[COEFFICIENTS.len()..]);
        }

        let [a, b, c] = values;
        Quadratic::new(a, b, c)
    }
}

pub fn usage() -> String {
    Cli::command().render_usage().to_string()
}
