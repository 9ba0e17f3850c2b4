use serde::{
    Deserialize,
    Serialize
};

use crate::engine::shapeparameters::ShapeParameters;

/// Display flags owned by the UI shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayState {
    reverse: bool,
    auto: bool,
    density: bool
}

impl DisplayState {
    pub fn new(reverse: bool, auto: bool, density: bool) -> DisplayState {
        DisplayState { reverse, auto, density }
    }

    pub fn reverse(&self) -> bool {
        self.reverse
    }

    pub fn auto(&self) -> bool {
        self.auto
    }

    pub fn density(&self) -> bool {
        self.density
    }

    pub fn with_reverse(self, reverse: bool) -> DisplayState {
        DisplayState { reverse, ..self }
    }

    pub fn with_density(self, density: bool) -> DisplayState {
        DisplayState { density, ..self }
    }

    /// Flags after the parameters move from `previous` to `next`. Only the
    /// reverse flag can change, and only in auto mode.
    pub fn with_parameter_change(self, previous: ShapeParameters, next: ShapeParameters) -> DisplayState {
        if self.auto && previous != next {
            self.with_reverse(auto_reverse(previous, next))
        } else {
            self
        }
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        DisplayState::new(false, true, false)
    }
}

/// Reverse when that is likely to show an upper asymptote: `b` positive, or
/// `b` just brought to zero from above while `a` is not positive.
pub fn auto_reverse(previous: ShapeParameters, next: ShapeParameters) -> bool {
    let a_new = next.a_hundredths();
    let b_new = next.b_hundredths();
    b_new > 0 || (b_new == 0 && previous.b_hundredths() > 0 && a_new <= 0)
}

#[cfg(test)]
mod tests {
    use super::{
        auto_reverse,
        DisplayState
    };
    use crate::engine::shapeparameters::ShapeParameters;

    #[test]
    fn positive_b_reverses() {
        let previous = ShapeParameters::new(-50, -50);
        assert!(auto_reverse(previous, ShapeParameters::new(30, 1)));
        assert!(!auto_reverse(previous, ShapeParameters::new(30, -1)));
    }

    #[test]
    fn zero_b_depends_on_history_and_a() {
        let from_above = ShapeParameters::new(0, 40);
        let from_below = ShapeParameters::new(0, -40);
        assert!(auto_reverse(from_above, ShapeParameters::new(0, 0)));
        assert!(auto_reverse(from_above, ShapeParameters::new(-120, 0)));
        assert!(!auto_reverse(from_above, ShapeParameters::new(10, 0)));
        assert!(!auto_reverse(from_below, ShapeParameters::new(-120, 0)));
    }

    #[test]
    fn manual_mode_keeps_reverse() {
        let state = DisplayState::new(true, false, false);
        let next = state.with_parameter_change(ShapeParameters::new(0, 10), ShapeParameters::new(0, -10));
        assert!(next.reverse());
    }

    #[test]
    fn auto_mode_updates_reverse_on_change_only() {
        let state = DisplayState::default();
        let unchanged = state.with_parameter_change(ShapeParameters::new(0, 50), ShapeParameters::new(0, 50));
        assert!(!unchanged.reverse());
        let changed = state.with_parameter_change(ShapeParameters::new(0, 10), ShapeParameters::new(0, 50));
        assert!(changed.reverse());
        assert!(changed.auto());
        assert!(!changed.density());
    }
}
