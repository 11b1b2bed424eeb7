//! The processing step capability.
//!
//! Every transform a [`Pipeline`](crate::Pipeline) can run implements
//! [`ProcessingStep`]. Steps take the frame stack by value, mutate it in place
//! or build a replacement, and return it. Step configuration is fixed at
//! construction; parameter validation happens in [`ProcessingStep::apply`].
//!
//! # Example
//!
//! ```rust
//! use postproc_core::FrameStack;
//! use postproc_ops::{OpsResult, ProcessingStep};
//!
//! struct Invert;
//!
//! impl ProcessingStep for Invert {
//!     fn name(&self) -> &str {
//!         "invert"
//!     }
//!
//!     fn apply(&self, mut stack: FrameStack) -> OpsResult<FrameStack> {
//!         stack.mapv_inplace(|p| 255 - p);
//!         Ok(stack)
//!     }
//! }
//!
//! let out = Invert.apply(FrameStack::from_elem((1, 2, 2), 5)).unwrap();
//! assert_eq!(out[[0, 0, 0]], 250);
//! ```

use crate::OpsResult;
use postproc_core::FrameStack;

/// A transform over a whole frame stack.
pub trait ProcessingStep: Send + Sync {
    /// Short name used in logs and error context.
    fn name(&self) -> &str;

    /// Applies the step, consuming the input stack and returning the result.
    fn apply(&self, stack: FrameStack) -> OpsResult<FrameStack>;
}

impl<S: ProcessingStep + ?Sized> ProcessingStep for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn apply(&self, stack: FrameStack) -> OpsResult<FrameStack> {
        (**self).apply(stack)
    }
}
