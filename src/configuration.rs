use std::fs::File;
use std::io::BufReader;

use serde::Deserialize;

use crate::configurationerror::ConfigurationError;
use crate::display::plotregion::PlotRegion;
use crate::sampling::asymptoteguard::skip_count;
use crate::sampling::sampleset::SampleSet;
use crate::sampling::spacingmode::SpacingMode;

const DEFAULT_SAMPLE_COUNT: usize = 20;
const DEFAULT_CUTOFF_PERCENT: i32 = 3;

#[derive(Deserialize, Default)]
#[serde(default)]
struct PlotRegionJsonProp {
    top: Option<i32>,
    graph_height: Option<i32>,
    growth_width: Option<i32>,
    total_width: Option<i32>,
    gap: Option<i32>
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ConfigurationJsonProp {
    npoints: Option<usize>,
    cutoff: Option<i32>,
    mapping: Option<String>,
    region: Option<PlotRegionJsonProp>
}

/// Sampling and layout settings for a growth-curve explorer.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    sample_count: usize,
    spacing: SpacingMode,
    cutoff_percent: i32,
    region: PlotRegion
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            sample_count: DEFAULT_SAMPLE_COUNT,
            spacing: SpacingMode::Eased,
            cutoff_percent: DEFAULT_CUTOFF_PERCENT,
            region: PlotRegion::default()
        }
    }

    pub fn with_sampling(sample_count: usize, spacing: SpacingMode, cutoff_percent: i32) -> Configuration {
        Configuration {
            sample_count,
            spacing,
            cutoff_percent,
            region: PlotRegion::default()
        }
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    pub fn spacing(&self) -> SpacingMode {
        self.spacing
    }

    pub fn cutoff_percent(&self) -> i32 {
        self.cutoff_percent
    }

    pub fn region(&self) -> &PlotRegion {
        &self.region
    }

    pub fn from_reader(file_path: &str) -> Result<Configuration, ConfigurationError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        Ok(Configuration::from_json_prop(json_prop))
    }

    pub fn from_json_str(json: &str) -> Result<Configuration, ConfigurationError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(json)?;
        Ok(Configuration::from_json_prop(json_prop))
    }

    fn from_json_prop(json_prop: ConfigurationJsonProp) -> Configuration {
        let defaults = PlotRegion::default();
        let region_prop = json_prop.region.unwrap_or_default();
        let graph_height = region_prop.graph_height.unwrap_or(defaults.graph_height());
        let region = PlotRegion::new(
            region_prop.top.unwrap_or(defaults.top()),
            graph_height,
            region_prop.growth_width.unwrap_or(graph_height),
            region_prop.total_width.unwrap_or(defaults.total_width()),
            region_prop.gap.unwrap_or(defaults.gap())
        );
        Configuration {
            sample_count: json_prop.npoints.unwrap_or(DEFAULT_SAMPLE_COUNT),
            spacing: json_prop
                .mapping
                .as_deref()
                .map_or(SpacingMode::Eased, SpacingMode::from_name),
            cutoff_percent: json_prop.cutoff.unwrap_or(DEFAULT_CUTOFF_PERCENT),
            region
        }
    }

    /// Validates the settings and builds the sample set with its asymptote
    /// skip count.
    pub fn configure(&self) -> Result<(SampleSet, usize), ConfigurationError> {
        if !(0..=100).contains(&self.cutoff_percent) {
            return Err(ConfigurationError::InvalidCutoffError(self.cutoff_percent));
        }
        self.region.validate()?;
        let samples = SampleSet::new(self.sample_count, self.spacing)
            .ok_or(ConfigurationError::InvalidSampleCountError(self.sample_count))?;
        let nskip = skip_count(&samples, self.cutoff_percent);
        Ok((samples, nskip))
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}
