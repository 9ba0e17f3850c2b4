use log::{
    debug,
    warn
};

use crate::engine::shapeparameters::ShapeParameters;
use crate::math::curve::curve::Curve;
use crate::math::curve::growthcurve::GrowthCurve;
use crate::math::curve::yieldcurve::YieldCurve;
use crate::sampling::sampleset::SampleSet;

/// Yield and growth values over a sample set, index-aligned with it.
///
/// Either sequence may contain NaN or infinities.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSample {
    t: Vec<f64>,
    g: Vec<f64>,
    g_max: f64
}

impl CurveSample {
    pub fn t(&self) -> &[f64] {
        &self.t
    }

    pub fn g(&self) -> &[f64] {
        &self.g
    }

    /// Largest finite growth value, or 0 when there is none.
    pub fn g_max(&self) -> f64 {
        self.g_max
    }
}

/// Evaluates both curves at every sample. Pure in its inputs.
pub fn recompute(parameters: ShapeParameters, samples: &SampleSet) -> CurveSample {
    let t = YieldCurve::new(parameters).values(samples.values());
    let g = GrowthCurve::new(parameters).values(samples.values());
    let g_max = g
        .iter()
        .filter(|value| value.is_finite())
        .fold(0.0, |max: f64, &value| max.max(value));
    if g_max == 0.0 {
        warn!(
            "no positive finite growth for a = {}, b = {}; growth axis collapses",
            parameters.a_label(),
            parameters.b_label()
        );
    }
    debug!(
        "recomputed {} samples for a = {}, b = {} (g_max = {})",
        samples.len(),
        parameters.a_label(),
        parameters.b_label(),
        g_max
    );
    CurveSample { t, g, g_max }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::recompute;
    use crate::engine::shapeparameters::ShapeParameters;
    use crate::sampling::sampleset::SampleSet;
    use crate::sampling::spacingmode::SpacingMode;

    #[test]
    fn sequences_follow_the_samples() {
        let samples = SampleSet::new(20, SpacingMode::Eased).unwrap();
        let curve = recompute(ShapeParameters::default(), &samples);
        assert_eq!(curve.t().len(), 20);
        assert_eq!(curve.g().len(), 20);
    }

    #[test]
    fn maximum_ignores_non_finite_values() {
        let samples = SampleSet::new(5, SpacingMode::Uniform).unwrap();
        // a = -2, b = -1: g(0) is NaN, g(y) = y^3 ((y^-2 - 1) / 2)^2 elsewhere
        let curve = recompute(ShapeParameters::new(-200, -100), &samples);
        assert!(curve.g()[0].is_nan());
        let expected = curve.g()[1..]
            .iter()
            .cloned()
            .fold(0.0, f64::max);
        assert_relative_eq!(curve.g_max(), expected);
        assert!(curve.g_max().is_finite());
    }

    #[test]
    fn constant_growth() {
        let samples = SampleSet::new(9, SpacingMode::Uniform).unwrap();
        let curve = recompute(ShapeParameters::new(100, 100), &samples);
        assert_relative_eq!(curve.g_max(), 1.0);
    }

    #[test]
    fn collapsed_growth_axis_is_zero() {
        let samples = SampleSet::new(2, SpacingMode::Uniform).unwrap();
        // g(0) = 0 * B(0, 0.5)^0 = 0, g(1) = 1 * 0^1 = 0
        let curve = recompute(ShapeParameters::new(50, 0), &samples);
        assert_eq!(curve.g_max(), 0.0);
    }

    #[test]
    fn recomputation_is_repeatable() {
        let samples = SampleSet::new(20, SpacingMode::Eased).unwrap();
        let parameters = ShapeParameters::new(-120, 40);
        let first = recompute(parameters, &samples);
        let second = recompute(parameters, &samples);
        assert_eq!(first.t().len(), second.t().len());
        for (lhs, rhs) in first.t().iter().zip(second.t()) {
            assert!(lhs == rhs || (lhs.is_nan() && rhs.is_nan()));
        }
    }
}
