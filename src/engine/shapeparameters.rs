use serde::{
    Deserialize,
    Serialize
};

use crate::display::format::format_parameter;

/// The two shape parameters `a` and `b`, stored in hundredths.
///
/// Any pair of integers is accepted; numerical trouble is dealt with when
/// the curves are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeParameters {
    a_hundredths: i32,
    b_hundredths: i32
}

impl ShapeParameters {
    pub fn new(a_hundredths: i32, b_hundredths: i32) -> ShapeParameters {
        ShapeParameters { a_hundredths, b_hundredths }
    }

    pub fn a_hundredths(&self) -> i32 {
        self.a_hundredths
    }

    pub fn b_hundredths(&self) -> i32 {
        self.b_hundredths
    }

    pub fn a(&self) -> f64 {
        self.a_hundredths as f64 / 100.0
    }

    pub fn b(&self) -> f64 {
        self.b_hundredths as f64 / 100.0
    }

    /// `a * b` scaled by 10000, exact for every pair of `i32` inputs.
    pub fn product_hundredths(&self) -> i64 {
        self.a_hundredths as i64 * self.b_hundredths as i64
    }

    pub fn a_label(&self) -> String {
        format_parameter(self.a())
    }

    pub fn b_label(&self) -> String {
        format_parameter(self.b())
    }
}

impl Default for ShapeParameters {
    fn default() -> Self {
        ShapeParameters::new(-50, -50)
    }
}
