use serde::{
    Deserialize,
    Serialize
};

use crate::configurationerror::ConfigurationError;

/// Pixel layout of the two graphs.
///
/// The growth graph sits on the left, `growth_width` pixels wide, with its
/// axis running leftwards from the shared origin column. The yield graph
/// fills the rest of `total_width` to the right. Both share a vertical size
/// axis `graph_height` pixels tall, starting `top` pixels below the canvas
/// edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotRegion {
    top: i32,
    graph_height: i32,
    growth_width: i32,
    total_width: i32,
    gap: i32
}

impl PlotRegion {
    pub fn new(top: i32, graph_height: i32, growth_width: i32, total_width: i32, gap: i32) -> PlotRegion {
        PlotRegion { top, graph_height, growth_width, total_width, gap }
    }

    pub fn top(&self) -> i32 {
        self.top
    }

    pub fn graph_height(&self) -> i32 {
        self.graph_height
    }

    pub fn growth_width(&self) -> i32 {
        self.growth_width
    }

    pub fn total_width(&self) -> i32 {
        self.total_width
    }

    /// Margin left at a t-axis end that the curve does not reach.
    pub fn gap(&self) -> i32 {
        self.gap
    }

    pub fn y_origin(&self) -> i32 {
        self.top + self.graph_height - 1
    }

    /// Negative: size grows upwards on screen.
    pub fn y_length(&self) -> i32 {
        1 - self.graph_height
    }

    pub fn t_origin(&self) -> i32 {
        self.growth_width - 1
    }

    pub fn t_length(&self) -> i32 {
        self.total_width - self.growth_width - 1
    }

    pub fn g_origin(&self) -> i32 {
        self.t_origin()
    }

    /// Negative: growth increases leftwards.
    pub fn g_length(&self) -> i32 {
        1 - self.growth_width
    }

    /// Screen row of size `y` in `[0, 1]`.
    pub fn y_pixel(&self, y: f64) -> i32 {
        self.y_origin() + round_pixel(self.y_length() as f64 * y)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.top < 0 {
            return Err(ConfigurationError::InvalidRegionError(format!("negative top margin {}", self.top)));
        }
        if self.graph_height < 2 {
            return Err(ConfigurationError::InvalidRegionError(format!("graph height {} below 2", self.graph_height)));
        }
        if self.top.checked_add(self.graph_height).is_none() {
            return Err(ConfigurationError::InvalidRegionError(format!(
                "top margin {} and graph height {} overflow the canvas",
                self.top,
                self.graph_height
            )));
        }
        if self.growth_width < 2 {
            return Err(ConfigurationError::InvalidRegionError(format!("growth width {} below 2", self.growth_width)));
        }
        if self.gap < 0 {
            return Err(ConfigurationError::InvalidRegionError(format!("negative gap {}", self.gap)));
        }
        let t_length = self.total_width as i64 - self.growth_width as i64 - 1;
        if t_length <= 2 * self.gap as i64 {
            return Err(ConfigurationError::InvalidRegionError(format!(
                "total width {} leaves no room for the yield graph",
                self.total_width
            )));
        }
        Ok(())
    }
}

impl Default for PlotRegion {
    fn default() -> Self {
        PlotRegion::new(15, 150, 150, 610, 15)
    }
}

/// Half-up rounding to a pixel coordinate. Out-of-range values saturate
/// and NaN lands on 0.
pub fn round_pixel(x: f64) -> i32 {
    (x + 0.5).floor() as i32
}

/// Pixel offset from an axis origin. A non-finite offset stays on the
/// origin.
pub fn offset_pixel(x: f64) -> i32 {
    if x.is_finite() {
        round_pixel(x)
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::{
        offset_pixel,
        round_pixel,
        PlotRegion
    };

    #[test]
    fn default_layout() {
        let region = PlotRegion::default();
        assert_eq!(region.y_origin(), 164);
        assert_eq!(region.y_length(), -149);
        assert_eq!(region.t_origin(), 149);
        assert_eq!(region.t_length(), 459);
        assert_eq!(region.g_origin(), 149);
        assert_eq!(region.g_length(), -149);
        assert!(region.validate().is_ok());
    }

    #[test]
    fn size_axis_runs_upwards() {
        let region = PlotRegion::default();
        assert_eq!(region.y_pixel(0.0), 164);
        assert_eq!(region.y_pixel(1.0), 15);
        assert_eq!(region.y_pixel(0.5), 90);
    }

    #[test]
    fn rounds_half_up() {
        assert_eq!(round_pixel(2.5), 3);
        assert_eq!(round_pixel(-2.5), -2);
        assert_eq!(round_pixel(-2.6), -3);
        assert_eq!(round_pixel(f64::NAN), 0);
    }

    #[test]
    fn non_finite_offsets_stay_on_the_origin() {
        assert_eq!(offset_pixel(f64::NEG_INFINITY), 0);
        assert_eq!(offset_pixel(f64::INFINITY), 0);
        assert_eq!(offset_pixel(f64::NAN), 0);
        assert_eq!(offset_pixel(-148.6), -149);
    }

    #[test]
    fn rejects_overflowing_layouts() {
        assert!(PlotRegion::new(i32::MAX - 10, 150, 150, 610, 15).validate().is_err());
        assert!(PlotRegion::new(15, i32::MAX, 150, 610, 15).validate().is_err());
        assert!(PlotRegion::new(15, 150, 150, i32::MIN, 15).validate().is_err());
        assert!(PlotRegion::new(15, 150, 150, 610, i32::MAX).validate().is_err());
    }

    #[test]
    fn rejects_cramped_layouts() {
        assert!(PlotRegion::new(15, 1, 150, 610, 15).validate().is_err());
        assert!(PlotRegion::new(15, 150, 150, 170, 15).validate().is_err());
        assert!(PlotRegion::new(-1, 150, 150, 610, 15).validate().is_err());
    }
}
