use crate::engine::shapeparameters::ShapeParameters;
use crate::math::boxcox::BoxCox;
use crate::math::curve::curve::Curve;

/// Inverse yield function: the time `t = B(B(y, a), b)` at which size `y`
/// is reached. Non-finite results from either stage pass through.
pub struct YieldCurve {
    inner: BoxCox,
    outer: BoxCox
}

impl YieldCurve {
    pub fn new(parameters: ShapeParameters) -> YieldCurve {
        YieldCurve {
            inner: BoxCox::new(parameters.a_hundredths()),
            outer: BoxCox::new(parameters.b_hundredths())
        }
    }
}

impl Curve for YieldCurve {
    fn value(&self, y: f64) -> f64 {
        self.outer.value(self.inner.value(y))
    }
}
