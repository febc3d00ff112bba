use std::fmt;
use log::debug;
use crate::error::{Error, Result};
use super::Complex;

/// A polynomial of the form ax^2 + bx + c with a != 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadratic {
    a: f64,
    b: f64,
    c: f64,
}

impl Quadratic {
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self> {
        if a == 0.0 {
            return Err(Error::Degenerate { a });
        }

        Ok(Self {
            a,
            b,
            c,
        })
    }

    pub fn coefficients(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }

    pub fn discriminant(&self) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c
    }

    /// Both zeroes from the quadratic formula. A non-negative discriminant gives
    /// two real roots (equal when it is zero), a negative one a conjugate pair
    /// with the positive imaginary part first.
    pub fn roots(&self) -> (Complex, Complex) {
        let discriminant = self.discriminant();
        let denominator = 2.0 * self.a;

        if discriminant >= 0.0 {
            debug!("discriminant {} >= 0, real roots", discriminant);
            let sqrt = discriminant.sqrt();
            return (
                Complex::real((-self.b + sqrt) / denominator),
                Complex::real((-self.b - sqrt) / denominator),
            );
        }

        debug!("discriminant {} < 0, complex conjugate roots", discriminant);
        let re = -self.b / denominator;
        let im = (-discriminant).sqrt() / denominator;
        (Complex::new(re, im), Complex::new(re, -im))
    }

    /// Evaluates the polynomial at `z` by Horner's rule.
    pub fn eval(&self, z: Complex) -> Complex {
        (Complex::real(self.a) * z + Complex::real(self.b)) * z + Complex::real(self.c)
    }

    /// Renders as `{a}{v}^2 + {b}{v} + {c}`.
    pub fn display(&self, variable: char) -> Display<'_> {
        Display {
            poly: self,
            variable,
        }
    }
}

pub struct Display<'a> {
    poly: &'a Quadratic,
    variable: char,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = Complex::PRECISION;
        let v = self.variable;
        let (a, b, c) = self.poly.coefficients();
        write!(f, "{:.*}{}^2 + {:.*}{} + {:.*}", p, a, v, p, b, v, p, c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn residual(poly: &Quadratic, z: Complex) -> f64 {
        poly.eval(z).norm()
    }

    // Scale of the terms being summed, so the tolerance is relative
    fn magnitude(poly: &Quadratic, z: Complex) -> f64 {
        let (a, b, c) = poly.coefficients();
        let r = z.norm();
        a.abs() * r * r + b.abs() * r + c.abs() + 1.0
    }

    #[test]
    fn test_distinct_real_roots() {
        let poly = Quadratic::new(1.0, -10.0, 16.0).unwrap();
        assert_eq!(poly.discriminant(), 36.0);
        assert_eq!(poly.roots(), (Complex::real(8.0), Complex::real(2.0)));
    }

    #[test]
    fn test_repeated_root() {
        let poly = Quadratic::new(1.0, -4.0, 4.0).unwrap();
        assert_eq!(poly.discriminant(), 0.0);
        let (z0, z1) = poly.roots();
        assert_eq!(z0, z1);
        assert_eq!(z0, Complex::real(2.0));
    }

    #[test]
    fn test_conjugate_roots() {
        let poly = Quadratic::new(1.0, 2.0, 3.0).unwrap();
        assert_eq!(poly.discriminant(), -8.0);
        let (z0, z1) = poly.roots();
        assert_eq!(z0.re, -1.0);
        assert_eq!(z0.re, z1.re);
        assert_eq!(z0.im, -z1.im);
        assert!(z0.im > 0.0);
        assert_eq!(z0.to_string(), "-1.000000 + 1.414214i");
        assert_eq!(z1.to_string(), "-1.000000 + -1.414214i");
    }

    #[test]
    fn test_negative_leading_coefficient() {
        // -x^2 + 1: root0 comes out as -1 since the denominator is negative
        let poly = Quadratic::new(-1.0, 0.0, 1.0).unwrap();
        assert_eq!(poly.roots(), (Complex::real(-1.0), Complex::real(1.0)));
    }

    #[test]
    fn test_zero_leading_coefficient_is_rejected() {
        assert!(matches!(Quadratic::new(0.0, 2.0, 1.0), Err(Error::Degenerate { .. })));
        assert!(matches!(Quadratic::new(-0.0, 2.0, 1.0), Err(Error::Degenerate { .. })));
    }

    #[test]
    fn test_display_uses_given_variable() {
        let poly = Quadratic::new(1.0, -10.0, 16.0).unwrap();
        assert_eq!(poly.display('x').to_string(), "1.000000x^2 + -10.000000x + 16.000000");
        assert_eq!(poly.display('y').to_string(), "1.000000y^2 + -10.000000y + 16.000000");
    }

    fn arb_leading() -> impl Strategy<Value = f64> {
        (-100.0f64..100.0).prop_filter("leading coefficient away from zero", |a| a.abs() >= 0.1)
    }

    proptest! {
        #[test]
        fn prop_roots_are_zeroes(a in arb_leading(), b in -100.0f64..100.0, c in -100.0f64..100.0) {
            let poly = Quadratic::new(a, b, c).unwrap();
            let (z0, z1) = poly.roots();
            for z in [z0, z1] {
                prop_assert!(residual(&poly, z) <= 1e-9 * magnitude(&poly, z));
            }
        }

        #[test]
        fn prop_root_shape_follows_discriminant(a in arb_leading(), b in -100.0f64..100.0, c in -100.0f64..100.0) {
            let poly = Quadratic::new(a, b, c).unwrap();
            let d = poly.discriminant();
            let (z0, z1) = poly.roots();
            if d > 0.0 {
                prop_assert!(z0.is_real() && z1.is_real());
                prop_assert_ne!(z0, z1);
            } else if d == 0.0 {
                prop_assert!(z0.is_real());
                prop_assert_eq!(z0, z1);
            } else {
                prop_assert_eq!(z0.re, z1.re);
                prop_assert_eq!(z0.im, -z1.im);
                prop_assert!(!z0.is_real());
            }
        }
    }
}
