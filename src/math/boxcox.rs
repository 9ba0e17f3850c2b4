use crate::math::curve::curve::Curve;

/// Negative Box-Cox transform
///
///   B(x, c) = (1 - x^c) / c    for c != 0
///   B(x, 0) = -ln x
///
/// The shape parameter is held in hundredths so that `c = 0` is an exact
/// integer test rather than a floating comparison. Outside its domain it
/// yields NaN or an infinity instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxCox {
    c_hundredths: i32
}

impl BoxCox {
    pub fn new(c_hundredths: i32) -> BoxCox {
        BoxCox { c_hundredths }
    }

    pub fn c(&self) -> f64 {
        self.c_hundredths as f64 / 100.0
    }

    /// `B^-1(t, c) = (1 - c t)^(1/c)`, or `exp(-t)` for `c = 0`.
    pub fn inverse(&self, t: f64) -> f64 {
        if self.c_hundredths != 0 {
            let c = self.c();
            (1.0 - c * t).powf(1.0 / c)
        } else {
            (-t).exp()
        }
    }
}

impl Curve for BoxCox {
    fn value(&self, x: f64) -> f64 {
        if self.c_hundredths != 0 {
            let c = self.c();
            (1.0 - x.powf(c)) / c
        } else {
            -x.ln()
        }
    }
}
