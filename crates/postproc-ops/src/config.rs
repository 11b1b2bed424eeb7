//! YAML pipeline configuration.
//!
//! Describes a pipeline as data so step parameters can come from a settings
//! file or another process. Reading the text is the caller's job; this module
//! only parses it.
//!
//! ```yaml
//! steps:
//!   - quantize:
//!       bins: 4
//!   - adjust_brightness:
//!       gamma: 2.2
//!       normalization: min_max
//!   - circular_mask:
//!       height: 480
//!       width: 640
//! ```
//!
//! Parameters are not validated while parsing or building; invalid values
//! such as `bins: 0` surface when the pipeline runs, like any other step.
//! Function steps cannot be expressed in configuration.

use crate::brightness::Normalization;
use crate::{AdjustBrightness, MaskStep, OpsResult, Pipeline, ProcessingStep, Quantize};
use postproc_core::circular_mask;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A serializable pipeline description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Steps in execution order, each written as a single-key map.
    #[serde(default, with = "serde_yaml::with::singleton_map_recursive")]
    pub steps: Vec<StepConfig>,
}

/// One configured step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepConfig {
    /// [`Quantize`] with the given bin count.
    Quantize {
        /// Number of bins.
        #[serde(default = "default_bins")]
        bins: u32,
    },
    /// [`AdjustBrightness`] with the given gamma.
    AdjustBrightness {
        /// Gamma value.
        gamma: f64,
        /// Input normalization mode.
        #[serde(default)]
        normalization: Normalization,
    },
    /// [`MaskStep`] with a [`circular_mask`] of the given frame shape.
    CircularMask {
        /// Frame height in pixels.
        height: usize,
        /// Frame width in pixels.
        width: usize,
    },
}

fn default_bins() -> u32 {
    crate::quantize::DEFAULT_BINS
}

impl StepConfig {
    /// Instantiates the step.
    ///
    /// # Errors
    ///
    /// Fails only if a mask cannot be generated for the given shape.
    pub fn build(&self) -> OpsResult<Box<dyn ProcessingStep>> {
        let step: Box<dyn ProcessingStep> = match *self {
            Self::Quantize { bins } => Box::new(Quantize::new(bins)),
            Self::AdjustBrightness { gamma, normalization } => {
                Box::new(AdjustBrightness::new(gamma).with_normalization(normalization))
            }
            Self::CircularMask { height, width } => {
                Box::new(MaskStep::new(circular_mask((height, width))?))
            }
        };
        Ok(step)
    }
}

impl PipelineConfig {
    /// Parses a configuration from YAML text.
    pub fn from_yaml(yaml: &str) -> OpsResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        debug!(steps = config.steps.len(), "Parsed pipeline config");
        Ok(config)
    }

    /// Serializes the configuration to YAML text.
    pub fn to_yaml(&self) -> OpsResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Builds the described pipeline.
    pub fn build(&self) -> OpsResult<Pipeline> {
        self.steps.iter().map(StepConfig::build).collect()
    }
}
