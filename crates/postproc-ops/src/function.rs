//! Caller-supplied per-frame transforms.
//!
//! [`FromFunction`] runs an arbitrary function on each 2D frame and writes the
//! returned frame back into the stack. Extra arguments are captured by the
//! closure:
//!
//! ```rust
//! use ndarray::{Array2, ArrayView2};
//! use postproc_core::FrameStack;
//! use postproc_ops::{BoxError, FromFunction, ProcessingStep};
//!
//! fn threshold(frame: ArrayView2<u8>, level: u8) -> Result<Array2<u8>, BoxError> {
//!     Ok(frame.mapv(|p| if p >= level { 255 } else { 0 }))
//! }
//!
//! let step = FromFunction::new("threshold", |f| threshold(f, 128));
//! let out = step.apply(FrameStack::from_elem((2, 4, 4), 200)).unwrap();
//! assert!(out.iter().all(|&p| p == 255));
//! ```
//!
//! The returned frame must have the same shape as the input frame.

use crate::{BoxError, OpsError, OpsResult, ProcessingStep};
use ndarray::{Array2, ArrayView2, Axis};
use postproc_core::{FrameStack, Pixel};
use std::fmt;
use tracing::trace;

type FrameFn = dyn Fn(ArrayView2<'_, Pixel>) -> Result<Array2<Pixel>, BoxError> + Send + Sync;

/// Applies a function independently to every frame.
pub struct FromFunction {
    name: String,
    func: Box<FrameFn>,
}

impl FromFunction {
    /// Wraps `func` as a step named `name`.
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(ArrayView2<'_, Pixel>) -> Result<Array2<Pixel>, BoxError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Box::new(func),
        }
    }

    /// Wraps an infallible function.
    pub fn infallible<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(ArrayView2<'_, Pixel>) -> Array2<Pixel> + Send + Sync + 'static,
    {
        Self::new(name, move |frame| Ok(func(frame)))
    }
}

impl fmt::Debug for FromFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFunction").field("name", &self.name).finish_non_exhaustive()
    }
}

impl ProcessingStep for FromFunction {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, mut stack: FrameStack) -> OpsResult<FrameStack> {
        for (i, mut frame) in stack.axis_iter_mut(Axis(0)).enumerate() {
            trace!(step = %self.name, frame = i, "apply function");

            let result = (self.func)(frame.view()).map_err(|source| OpsError::Function {
                name: self.name.clone(),
                frame: i,
                source,
            })?;

            if result.dim() != frame.dim() {
                return Err(OpsError::ShapeMismatch {
                    expected: frame.dim(),
                    got: result.dim(),
                });
            }
            frame.assign(&result);
        }

        Ok(stack)
    }
}
