pub mod complex;
pub mod quadratic;

pub use complex::Complex;
pub use quadratic::Quadratic;
