use crate::sampling::sampleset::SampleSet;

/// Number of leading samples lying within `cutoff_percent` of `y = 0`.
///
/// This is the smallest index whose size reaches the cutoff, but never less
/// than one so that the `y = 0` sample itself can always be dropped. The same
/// count is reused at the `y = 1` end of the axis.
pub fn skip_count(samples: &SampleSet, cutoff_percent: i32) -> usize {
    let cutoff = cutoff_percent as f64;
    samples
        .values()
        .iter()
        .position(|&y| 100.0 * y >= cutoff)
        .unwrap_or(samples.len())
        .max(1)
}
