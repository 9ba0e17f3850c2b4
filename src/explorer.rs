use log::debug;
use serde::Serialize;

use crate::configuration::Configuration;
use crate::configurationerror::ConfigurationError;
use crate::display::axismapper::{
    AxisMapper,
    MappedCurves
};
use crate::display::displaystate::DisplayState;
use crate::display::plotregion::PlotRegion;
use crate::engine::curveengine::{
    recompute,
    CurveSample
};
use crate::engine::shapeparameters::ShapeParameters;
use crate::sampling::sampleset::SampleSet;

/// Everything the renderer needs for one repaint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    parameters: ShapeParameters,
    display: DisplayState,
    a_label: String,
    b_label: String,
    g_max: f64,
    curves: MappedCurves
}

impl Frame {
    pub fn parameters(&self) -> ShapeParameters {
        self.parameters
    }

    pub fn display(&self) -> DisplayState {
        self.display
    }

    pub fn a_label(&self) -> &str {
        &self.a_label
    }

    pub fn b_label(&self) -> &str {
        &self.b_label
    }

    pub fn g_max(&self) -> f64 {
        self.g_max
    }

    pub fn curves(&self) -> &MappedCurves {
        &self.curves
    }
}

/// Owns the sample set and layout, and turns parameters plus display flags
/// into frames. Each call is independent of the previous ones.
pub struct GrowthExplorer {
    samples: SampleSet,
    nskip: usize,
    region: PlotRegion
}

impl GrowthExplorer {
    pub fn new(configuration: &Configuration) -> Result<GrowthExplorer, ConfigurationError> {
        let (samples, nskip) = configuration.configure()?;
        debug!(
            "configured {} {:?} samples, skipping {} near asymptotes",
            samples.len(),
            samples.spacing(),
            nskip
        );
        Ok(GrowthExplorer {
            samples,
            nskip,
            region: *configuration.region()
        })
    }

    pub fn samples(&self) -> &SampleSet {
        &self.samples
    }

    pub fn nskip(&self) -> usize {
        self.nskip
    }

    pub fn region(&self) -> &PlotRegion {
        &self.region
    }

    pub fn recompute(&self, parameters: ShapeParameters) -> CurveSample {
        recompute(parameters, &self.samples)
    }

    pub fn map_to_pixels(&self, curve: &CurveSample, reverse: bool, want_density: bool) -> MappedCurves {
        AxisMapper::new(&self.samples, &self.region, self.nskip).map_to_pixels(curve, reverse, want_density)
    }

    pub fn render(&self, parameters: ShapeParameters, display: DisplayState) -> Frame {
        let curve = self.recompute(parameters);
        let curves = self.map_to_pixels(&curve, display.reverse(), display.density());
        Frame {
            parameters,
            display,
            a_label: parameters.a_label(),
            b_label: parameters.b_label(),
            g_max: curve.g_max(),
            curves
        }
    }
}
