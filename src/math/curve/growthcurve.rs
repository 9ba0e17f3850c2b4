use std::cmp::Ordering;

use crate::engine::shapeparameters::ShapeParameters;
use crate::math::boxcox::BoxCox;
use crate::math::curve::curve::Curve;

/// Growth rate `dy/dt = y^(1-a) * B(y, a)^(1-b)` as a function of size.
///
/// The raw expression becomes a `0^0`-type indeterminate form on part of the
/// parameter plane. A NaN result is replaced according to where `a*b` sits
/// relative to one, compared exactly on the hundredths product:
///
/// - `a*b < 1`: the rate is 0
/// - `a*b = 1`: the rate is `(-b)^(1-b)`
/// - `a*b > 1`: the rate stays NaN
pub struct GrowthCurve {
    parameters: ShapeParameters,
    transform: BoxCox
}

impl GrowthCurve {
    pub fn new(parameters: ShapeParameters) -> GrowthCurve {
        GrowthCurve {
            parameters,
            transform: BoxCox::new(parameters.a_hundredths())
        }
    }

    fn indeterminate_value(&self) -> f64 {
        let b = self.parameters.b();
        match self.parameters.product_hundredths().cmp(&10_000) {
            Ordering::Less => 0.0,
            Ordering::Equal => (-b).powf(1.0 - b),
            Ordering::Greater => f64::NAN
        }
    }
}

impl Curve for GrowthCurve {
    fn value(&self, y: f64) -> f64 {
        let a = self.parameters.a();
        let b = self.parameters.b();
        let g = y.powf(1.0 - a) * self.transform.value(y).powf(1.0 - b);
        if g.is_nan() {
            self.indeterminate_value()
        } else {
            g
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::GrowthCurve;
    use crate::engine::shapeparameters::ShapeParameters;
    use crate::math::curve::curve::Curve;

    #[test]
    fn unit_boundary_is_constant_one() {
        let curve = GrowthCurve::new(ShapeParameters::new(100, 100));
        for y in [0.0, 0.01, 0.3, 0.5, 0.99, 1.0] {
            assert_relative_eq!(curve.value(y), 1.0);
        }
    }

    #[test]
    fn product_below_one_corrects_to_zero() {
        // 0 * inf at y = 0
        let curve = GrowthCurve::new(ShapeParameters::new(-50, -50));
        assert_eq!(curve.value(0.0), 0.0);
        let curve = GrowthCurve::new(ShapeParameters::new(50, 100));
        assert!(!curve.value(0.0).is_nan());
    }

    #[test]
    fn product_equal_to_one_uses_boundary_formula() {
        // y^2 * (1/y - 1)^2 -> 0 * inf at y = 0, limit (1 - y)^2 = 1
        let curve = GrowthCurve::new(ShapeParameters::new(-100, -100));
        assert_relative_eq!(curve.value(0.0), 1.0);
        assert_relative_eq!(curve.value(0.5), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn product_above_one_stays_undefined() {
        let curve = GrowthCurve::new(ShapeParameters::new(-200, -100));
        assert!(curve.value(0.0).is_nan());
        assert!(curve.value(0.5).is_finite());
    }

    #[test]
    fn logistic_case_matches_closed_form() {
        // a = 1, b = -1: dy/dt = (1 - y)^2
        let curve = GrowthCurve::new(ShapeParameters::new(100, -100));
        assert_relative_eq!(curve.value(0.25), 0.5625, epsilon = 1e-12);
    }
}
