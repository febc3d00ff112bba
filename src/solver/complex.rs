use std::fmt;
use std::ops::{Add, Mul};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    /// Digits printed after the decimal point for each component.
    pub const PRECISION: usize = 6;

    pub fn new(re: f64, im: f64) -> Self {
        Self {
            re,
            im,
        }
    }

    pub fn real(re: f64) -> Self {
        Self::new(re, 0.0)
    }

    pub fn is_real(&self) -> bool {
        self.im == 0.0
    }

    /// Modulus |z|.
    pub fn norm(&self) -> f64 {
        self.re.hypot(self.im)
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Mul for Complex {
    type Output = Self;

    // (a + bi)(c + di) = (ac - bd) + (ad + bc)i
    fn mul(self, rhs: Self) -> Self {
        let Complex { re: a, im: b } = self;
        let Complex { re: c, im: d } = rhs;
        Complex::new(a * c - b * d, a * d + b * c)
    }
}

impl fmt::Display for Complex {
    // A negative imaginary part keeps its sign after the plus, e.g. "-1.000000 + -1.414214i"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = Self::PRECISION;
        if self.is_real() {
            return write!(f, "{:.*}", p, self.re);
        }

        write!(f, "{:.*} + {:.*}i", p, self.re, p, self.im)
    }
}
