use crate::sampling::spacingmode::SpacingMode;

/// Ordered size values `y[0..n-1]`, with `y[0] = 0` and `y[n-1] = 1`.
///
/// Depends only on the count and spacing, never on the shape parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    values: Vec<f64>,
    spacing: SpacingMode
}

impl SampleSet {
    /// Returns `None` for fewer than two samples.
    pub fn new(count: usize, spacing: SpacingMode) -> Option<SampleSet> {
        if count < 2 {
            return None;
        }
        let denominator = (count - 1) as f64;
        let values = (0..count)
            .map(|i| spacing.map(i as f64 / denominator))
            .collect();
        Some(SampleSet { values, spacing })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn value(&self, index: usize) -> f64 {
        self.values[index]
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn last_index(&self) -> usize {
        self.values.len() - 1
    }

    pub fn spacing(&self) -> SpacingMode {
        self.spacing
    }
}

#[cfg(test)]
mod tests {
    use super::SampleSet;
    use crate::sampling::spacingmode::SpacingMode;

    #[test]
    fn rejects_single_sample() {
        assert!(SampleSet::new(0, SpacingMode::Uniform).is_none());
        assert!(SampleSet::new(1, SpacingMode::Eased).is_none());
    }

    #[test]
    fn ends_are_exact_and_order_is_strict() {
        for spacing in [SpacingMode::Uniform, SpacingMode::Eased] {
            for count in [2, 3, 7, 20, 101, 1000] {
                let samples = SampleSet::new(count, spacing).unwrap();
                assert_eq!(samples.len(), count);
                assert_eq!(samples.value(0), 0.0);
                assert_eq!(samples.value(samples.last_index()), 1.0);
                assert!(samples.values().windows(2).all(|pair| pair[0] < pair[1]));
            }
        }
    }

    #[test]
    fn eased_spacing_is_denser_at_the_ends() {
        let samples = SampleSet::new(20, SpacingMode::Eased).unwrap();
        let values = samples.values();
        let first_step = values[1] - values[0];
        let middle_step = values[10] - values[9];
        let last_step = values[19] - values[18];
        assert!(first_step < middle_step);
        assert!(last_step < middle_step);
    }
}
