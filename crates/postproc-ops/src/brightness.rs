//! Gamma-based brightness adjustment.
//!
//! Works on the **entire stack at once**, not per frame:
//!
//! 1. Normalize all pixels into `[0, 1]` using the global stack range.
//! 2. Raise every value to `1 / gamma`.
//! 3. Rescale to `[0, 255]` using the global range of the *transformed*
//!    values and truncate to `u8`.
//!
//! `gamma > 1` brightens, `gamma < 1` darkens. Step 3 always stretches the
//! result to fill the full 8-bit range.
//!
//! Constant inputs have no range to normalize against. Instead of producing
//! NaN pixels the step fails with [`OpsError::DegenerateRange`].
//!
//! # Example
//!
//! ```rust
//! use postproc_core::FrameStack;
//! use postproc_ops::{AdjustBrightness, ProcessingStep};
//!
//! let stack = FrameStack::from_shape_vec((1, 1, 3), vec![10, 60, 110]).unwrap();
//! let out = AdjustBrightness::new(1.0).apply(stack).unwrap();
//! assert_eq!(out.as_slice().unwrap(), &[0, 127, 255]);
//! ```

use crate::{OpsError, OpsResult, ProcessingStep};
use postproc_core::{FrameStack, Pixel, pixel_range};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How the input stack is mapped into `[0, 1]` before the gamma curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalization {
    /// `(x - min) / (max - min)` over the whole stack.
    #[default]
    MinMax,
    /// `x / max` over the whole stack; the darkest pixel keeps its offset.
    Peak,
}

/// Gamma correction over the whole frame stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustBrightness {
    gamma: f64,
    normalization: Normalization,
}

impl AdjustBrightness {
    /// Creates a brightness step with min/max normalization.
    pub fn new(gamma: f64) -> Self {
        Self {
            gamma,
            normalization: Normalization::MinMax,
        }
    }

    /// Sets the normalization mode.
    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    /// Gamma value.
    #[inline]
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Normalization mode.
    #[inline]
    pub fn normalization(&self) -> Normalization {
        self.normalization
    }

    fn normalizer(&self, min: Pixel, max: Pixel) -> OpsResult<(f64, f64)> {
        let (lo, hi) = match self.normalization {
            Normalization::MinMax => (f64::from(min), f64::from(max)),
            Normalization::Peak => (0.0, f64::from(max)),
        };
        if hi <= lo {
            return Err(OpsError::DegenerateRange {
                min: lo,
                max: hi,
                stage: "input normalization",
            });
        }
        Ok((lo, hi - lo))
    }
}

impl ProcessingStep for AdjustBrightness {
    fn name(&self) -> &str {
        "adjust_brightness"
    }

    fn apply(&self, stack: FrameStack) -> OpsResult<FrameStack> {
        if !self.gamma.is_finite() || self.gamma <= 0.0 {
            return Err(OpsError::InvalidParameter(format!(
                "gamma must be finite and > 0, got {}",
                self.gamma
            )));
        }

        let Some((min, max)) = pixel_range(&stack) else {
            return Ok(stack);
        };
        let (offset, range) = self.normalizer(min, max)?;
        let exponent = 1.0 / self.gamma;

        debug!(
            gamma = self.gamma,
            normalization = ?self.normalization,
            min,
            max,
            "Adjusting brightness"
        );

        let curved = stack.mapv(|p| ((f64::from(p) - offset) / range).powf(exponent));

        let (new_min, new_max) = curved
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        let new_range = new_max - new_min;
        if new_range <= 0.0 || !new_range.is_finite() {
            return Err(OpsError::DegenerateRange {
                min: new_min,
                max: new_max,
                stage: "output rescale",
            });
        }

        Ok(curved.mapv(|v| ((v - new_min) / new_range * 255.0) as Pixel))
    }
}
