//! Ordered sequences of processing steps.
//!
//! A [`Pipeline`] threads a frame stack through its steps in order. The step
//! list is fixed once the pipeline is built; an empty pipeline returns its
//! input untouched. The first failing step aborts the run and its error is
//! returned wrapped in [`OpsError::Step`].
//!
//! # Example
//!
//! ```rust
//! use postproc_core::{FrameStack, circular_mask};
//! use postproc_ops::{MaskStep, Pipeline, Quantize};
//!
//! let pipeline = Pipeline::builder()
//!     .step(Quantize::new(4))
//!     .step(MaskStep::new(circular_mask((8, 8)).unwrap()))
//!     .build();
//!
//! let out = pipeline.run(FrameStack::from_elem((2, 8, 8), 200)).unwrap();
//! assert_eq!(out.dim(), (2, 8, 8));
//! assert_eq!(out[[0, 0, 0]], 0);
//! ```

use crate::{OpsError, OpsResult, ProcessingStep};
use postproc_core::FrameStack;
use std::fmt;
use tracing::{debug, trace};

/// A fixed, ordered list of processing steps.
#[derive(Default)]
pub struct Pipeline {
    steps: Vec<Box<dyn ProcessingStep>>,
}

impl Pipeline {
    /// Creates a pipeline from an ordered list of steps.
    pub fn new(steps: Vec<Box<dyn ProcessingStep>>) -> Self {
        Self { steps }
    }

    /// Creates a pipeline with no steps.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Starts building a pipeline step by step.
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::default()
    }

    /// Returns `true` if the pipeline has no steps.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of steps.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Step names in execution order.
    pub fn step_names(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(|s| s.name())
    }

    /// Runs every step in order, returning the final stack.
    pub fn run(&self, stack: FrameStack) -> OpsResult<FrameStack> {
        if self.is_empty() {
            return Ok(stack);
        }

        debug!(steps = self.steps.len(), shape = ?stack.dim(), "Running pipeline");

        let mut stack = stack;
        for (index, step) in self.steps.iter().enumerate() {
            trace!(index, step = step.name(), "pipeline step");
            stack = step.apply(stack).map_err(|e| OpsError::Step {
                index,
                name: step.name().to_string(),
                source: Box::new(e),
            })?;
        }

        Ok(stack)
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("steps", &self.step_names().collect::<Vec<_>>())
            .finish()
    }
}

impl FromIterator<Box<dyn ProcessingStep>> for Pipeline {
    fn from_iter<I: IntoIterator<Item = Box<dyn ProcessingStep>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Builder for [`Pipeline`].
#[derive(Default)]
pub struct PipelineBuilder {
    steps: Vec<Box<dyn ProcessingStep>>,
}

impl PipelineBuilder {
    /// Appends a step.
    pub fn step<S: ProcessingStep + 'static>(mut self, step: S) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    /// Appends an already boxed step.
    pub fn boxed(mut self, step: Box<dyn ProcessingStep>) -> Self {
        self.steps.push(step);
        self
    }

    /// Finishes the pipeline.
    pub fn build(self) -> Pipeline {
        Pipeline::new(self.steps)
    }
}
