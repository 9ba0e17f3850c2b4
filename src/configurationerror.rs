use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("cannot read configuration: {0}")]
    IOError(#[from] std::io::Error),
    #[error("cannot parse configuration: {0}")]
    JsonParseError(#[from] serde_json::Error),
    #[error("sample count must be at least 2, got {0}")]
    InvalidSampleCountError(usize),
    #[error("cutoff percentage must lie in [0, 100], got {0}")]
    InvalidCutoffError(i32),
    #[error("invalid plot region: {0}")]
    InvalidRegionError(String)
}
