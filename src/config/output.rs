//! Output configuration module.

use super::ConfigResult;
use super::Validate;
use serde::{Deserialize, Serialize};

/// How query answers are written.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// One `Yes` or `No` line per query
    #[default]
    YesNo,
    /// One JSON object per line: `{"value": .., "present": ..}`
    Json,
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct OutputConfig {
    /// Answer format
    pub format: OutputFormat,
}

impl Validate for OutputConfig {
    fn validate(&self) -> ConfigResult<()> {
        Ok(())
    }
}
