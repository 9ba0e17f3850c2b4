use log::{
    debug,
    warn
};
use serde::Serialize;

use crate::display::pixelpolyline::{
    PixelPoint,
    PixelPolyline
};
use crate::display::plotregion::{
    offset_pixel,
    PlotRegion
};
use crate::display::validrange::ValidRange;
use crate::engine::curveengine::CurveSample;
use crate::sampling::sampleset::SampleSet;

/// Polylines produced for one repaint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappedCurves {
    yield_polyline: PixelPolyline,
    growth_polyline: PixelPolyline,
    density_polyline: Option<PixelPolyline>
}

impl MappedCurves {
    pub fn yield_polyline(&self) -> &PixelPolyline {
        &self.yield_polyline
    }

    pub fn growth_polyline(&self) -> &PixelPolyline {
        &self.growth_polyline
    }

    pub fn density_polyline(&self) -> Option<&PixelPolyline> {
        self.density_polyline.as_ref()
    }
}

/// Left and right t-axis margins, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Gaps {
    left: i32,
    right: i32
}

// ─────────────────────────────────────────────
// AxisMapper
// ─────────────────────────────────────────────

/// Maps curve samples into the pixel layout of a `PlotRegion`.
///
/// Holds no state between calls beyond the sample set and skip count it was
/// built with.
pub struct AxisMapper<'a> {
    samples: &'a SampleSet,
    region: &'a PlotRegion,
    nskip: usize
}

impl<'a> AxisMapper<'a> {
    pub fn new(samples: &'a SampleSet, region: &'a PlotRegion, nskip: usize) -> AxisMapper<'a> {
        AxisMapper { samples, region, nskip }
    }

    /// Curves computed over a different sample set map to empty polylines.
    pub fn map_to_pixels(&self, curve: &CurveSample, reverse: bool, want_density: bool) -> MappedCurves {
        if curve.t().len() != self.samples.len() || curve.g().len() != self.samples.len() {
            warn!(
                "curve has {} samples but the axis holds {}; nothing mapped",
                curve.t().len(),
                self.samples.len()
            );
            return MappedCurves {
                yield_polyline: PixelPolyline::new(),
                growth_polyline: PixelPolyline::new(),
                density_polyline: want_density.then(PixelPolyline::new)
            };
        }
        let t_range = ValidRange::trim(curve.t(), self.nskip);
        let g_range = ValidRange::trim(curve.g(), self.nskip);

        let yield_polyline = t_range
            .map(|range| self.map_yield(curve.t(), range, reverse))
            .unwrap_or_default();
        if yield_polyline.is_empty() {
            warn!("yield curve has no finite values to plot");
        }
        let growth_polyline = g_range
            .map(|range| self.map_growth(curve.g(), curve.g_max(), range, reverse))
            .unwrap_or_default();

        let density_polyline = if want_density {
            let overlay = match (t_range, g_range) {
                (Some(t_range), Some(g_range)) => {
                    self.align_density(&yield_polyline, t_range, &growth_polyline, g_range, reverse)
                }
                _ => PixelPolyline::new()
            };
            Some(overlay)
        } else {
            None
        };

        debug!(
            "mapped {} yield, {} growth points (t range {:?}, g range {:?}, reverse = {})",
            yield_polyline.len(),
            growth_polyline.len(),
            t_range,
            g_range,
            reverse
        );
        MappedCurves { yield_polyline, growth_polyline, density_polyline }
    }

    /// Room is left at the far end when the curve meets the axis rather than
    /// an asymptote, and at the near end when it does not start at the
    /// origin. Reversal swaps which index end is near.
    fn gaps(&self, range: ValidRange, reverse: bool) -> Gaps {
        let starts_at_zero = range.first() == 0;
        let ends_at_one = range.last() == self.samples.last_index();
        let gap = self.region.gap();
        let right = if (!reverse && ends_at_one) || (reverse && starts_at_zero) { gap } else { 0 };
        let left = if (!reverse && !starts_at_zero) || (reverse && !ends_at_one) { gap } else { 0 };
        Gaps { left, right }
    }

    /// Screen row of sample `index`, read from the mirrored index when
    /// reversed.
    fn y_pixel(&self, index: usize, reverse: bool) -> i32 {
        let source = if reverse { self.samples.last_index() - index } else { index };
        self.region.y_pixel(self.samples.value(source))
    }

    fn map_yield(&self, t: &[f64], range: ValidRange, reverse: bool) -> PixelPolyline {
        let gaps = self.gaps(range, reverse);
        let span = (self.region.t_length() - gaps.left - gaps.right) as f64;
        let t_first = t[range.first()];
        let t_last = t[range.last()];
        let scale = span / (t_last - t_first);
        let scale = if scale.is_finite() { scale } else { 0.0 };
        let x_start = self.region.t_origin() + gaps.left;

        let mut polyline = PixelPolyline::with_capacity(range.len());
        if !reverse {
            for i in range.first()..=range.last() {
                let x = x_start + offset_pixel(scale * (t[i] - t_first));
                polyline.push(PixelPoint::new(x, self.y_pixel(i, false), i));
            }
        } else {
            for i in (range.first()..=range.last()).rev() {
                let x = x_start + offset_pixel(scale * (t_last - t[i]));
                polyline.push(PixelPoint::new(x, self.y_pixel(i, true), i));
            }
        }
        polyline
    }

    fn map_growth(&self, g: &[f64], g_max: f64, range: ValidRange, reverse: bool) -> PixelPolyline {
        let scale = if g_max > 0.0 { self.region.g_length() as f64 / g_max } else { 0.0 };
        let origin = self.region.g_origin();
        let point = |i: usize| PixelPoint::new(origin + offset_pixel(scale * g[i]), self.y_pixel(i, reverse), i);
        if !reverse {
            (range.first()..=range.last()).map(point).collect()
        } else {
            (range.first()..=range.last()).rev().map(point).collect()
        }
    }

    /// Pairs each yield point with the growth point of the same sample over
    /// the indices valid for both curves. Horizontal positions come from the
    /// yield polyline; vertical ones are the growth pixel shifted down by the
    /// top margin, so the overlay shares the yield graph's rows.
    fn align_density(
        &self,
        yield_polyline: &PixelPolyline,
        t_range: ValidRange,
        growth_polyline: &PixelPolyline,
        g_range: ValidRange,
        reverse: bool
    ) -> PixelPolyline {
        let common = match t_range.intersect(&g_range) {
            Some(common) => common,
            None => return PixelPolyline::new()
        };
        // offsets of the common window in drawing order
        let (t_offset, g_offset) = if !reverse {
            (common.first() - t_range.first(), common.first() - g_range.first())
        } else {
            (t_range.last() - common.last(), g_range.last() - common.last())
        };
        let n = common.len();
        let top = self.region.top();
        yield_polyline.points()[t_offset..t_offset + n]
            .iter()
            .zip(&growth_polyline.points()[g_offset..g_offset + n])
            .map(|(t_point, g_point)| {
                debug_assert_eq!(t_point.sample(), g_point.sample());
                PixelPoint::new(t_point.x(), g_point.x() + top, t_point.sample())
            })
            .collect()
    }
}
