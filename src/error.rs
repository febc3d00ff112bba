//! Error types for quadratic

use std::num::ParseFloatError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Fewer than three coefficients were given
    #[error("Missing coefficient '{name}'")]
    MissingCoefficient {
        name: &'static str,
    },

    /// A coefficient is not a decimal floating-point literal
    #[error("Invalid coefficient '{name}': {value:?}")]
    InvalidCoefficient {
        name: &'static str,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    /// A coefficient parsed to infinity or NaN
    #[error("Invalid coefficient '{name}': {value} is not finite")]
    NonFiniteCoefficient {
        name: &'static str,
        value: f64,
    },

    /// Leading coefficient is zero, so the equation is at most linear
    #[error("Not a quadratic: coefficient 'a' is {a}")]
    Degenerate {
        a: f64,
    },
}

impl Error {
    /// Whether the error came from how the program was invoked.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Error::MissingCoefficient { .. }
                | Error::InvalidCoefficient { .. }
                | Error::NonFiniteCoefficient { .. }
        )
    }
}
