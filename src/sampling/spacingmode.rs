use serde::{
    Deserialize,
    Serialize
};

/// How the size axis `[0, 1]` is divided into sample points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpacingMode {
    Uniform,
    /// `x^2 (3 - 2x)`, the integral of the logistic weight `6x(1 - x)`.
    /// Points bunch together near both ends of the axis.
    #[default]
    Eased
}

impl SpacingMode {
    /// `"uniform"` in any letter case selects uniform spacing; every other
    /// name falls back to eased spacing.
    pub fn from_name(name: &str) -> SpacingMode {
        if name.eq_ignore_ascii_case("uniform") {
            SpacingMode::Uniform
        } else {
            SpacingMode::Eased
        }
    }

    pub fn map(&self, x: f64) -> f64 {
        match self {
            SpacingMode::Uniform => x,
            SpacingMode::Eased => x * x * (3.0 - 2.0 * x)
        }
    }
}
