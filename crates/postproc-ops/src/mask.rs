//! Mask application.
//!
//! Multiplies every frame of the stack by a single binary [`Mask`], zeroing
//! pixels outside the selection. The mask is shared with the caller through
//! an [`Arc`] so one mask can feed several steps or pipelines.

use crate::{OpsError, OpsResult, ProcessingStep};
use ndarray::Axis;
use postproc_core::{FrameStack, Mask, frame_shape};
use std::sync::Arc;
use tracing::debug;

/// Zeroes every pixel not selected by the mask, in every frame.
#[derive(Debug, Clone)]
pub struct MaskStep {
    mask: Arc<Mask>,
}

impl MaskStep {
    /// Creates a mask step. The shape is checked against the frames when the
    /// step is applied.
    pub fn new(mask: impl Into<Arc<Mask>>) -> Self {
        Self { mask: mask.into() }
    }

    /// The mask applied by this step.
    pub fn mask(&self) -> &Mask {
        &self.mask
    }
}

impl ProcessingStep for MaskStep {
    fn name(&self) -> &str {
        "mask"
    }

    fn apply(&self, mut stack: FrameStack) -> OpsResult<FrameStack> {
        let expected = frame_shape(&stack);
        if self.mask.shape() != expected {
            return Err(OpsError::ShapeMismatch {
                expected,
                got: self.mask.shape(),
            });
        }

        debug!(rows = expected.0, cols = expected.1, selected = self.mask.count(), "Applying mask");

        let mask = self.mask.view();
        for mut frame in stack.axis_iter_mut(Axis(0)) {
            frame.zip_mut_with(&mask, |p, &m| *p *= m);
        }

        Ok(stack)
    }
}
