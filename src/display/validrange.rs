/// Contiguous span `[first, last]` of sample indices that may be plotted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidRange {
    first: usize,
    last: usize
}

impl ValidRange {
    pub fn new(first: usize, last: usize) -> Option<ValidRange> {
        if first <= last {
            Some(ValidRange { first, last })
        } else {
            None
        }
    }

    /// Trims both ends of `values`.
    ///
    /// A non-finite end value drops `nskip` samples from that end. Trimming
    /// then keeps moving inwards past any end value that is still not
    /// finite. Returns `None` when nothing is left.
    pub fn trim(values: &[f64], nskip: usize) -> Option<ValidRange> {
        let last_index = values.len().checked_sub(1)?;
        let mut first = if values[0].is_finite() { 0 } else { nskip };
        let mut last = if values[last_index].is_finite() {
            last_index
        } else {
            last_index.checked_sub(nskip)?
        };
        while first <= last && !values[first].is_finite() {
            first += 1;
        }
        while last > first && !values[last].is_finite() {
            last -= 1;
        }
        ValidRange::new(first, last)
    }

    pub fn first(&self) -> usize {
        self.first
    }

    pub fn last(&self) -> usize {
        self.last
    }

    pub fn len(&self) -> usize {
        self.last - self.first + 1
    }

    /// Indices valid in both ranges.
    pub fn intersect(&self, other: &ValidRange) -> Option<ValidRange> {
        ValidRange::new(self.first.max(other.first), self.last.min(other.last))
    }
}
