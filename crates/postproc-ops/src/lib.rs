//! # postproc-ops
//!
//! Processing steps and pipelines for grayscale frame stacks.
//!
//! Every step implements [`ProcessingStep`] and transforms a whole
//! [`FrameStack`](postproc_core::FrameStack). A [`Pipeline`] runs an ordered
//! list of steps, threading the stack from one to the next.
//!
//! # Modules
//!
//! - [`quantize`] - Snap intensities to a fixed number of bins
//! - [`brightness`] - Gamma correction over the whole stack
//! - [`mask`] - Zero pixels outside a binary mask
//! - [`function`] - Arbitrary per-frame transforms
//! - [`pipeline`] - Ordered step sequences
//! - [`config`] - YAML pipeline descriptions
//!
//! # Example
//!
//! ```rust
//! use postproc_core::{FrameStack, circular_mask};
//! use postproc_ops::{AdjustBrightness, MaskStep, Pipeline, Quantize};
//!
//! let stack = FrameStack::from_shape_fn((4, 32, 32), |(f, r, c)| (f * 40 + r + c) as u8);
//!
//! let pipeline = Pipeline::builder()
//!     .step(AdjustBrightness::new(2.2))
//!     .step(Quantize::new(8))
//!     .step(MaskStep::new(circular_mask((32, 32))?))
//!     .build();
//!
//! let processed = pipeline.run(stack)?;
//! assert_eq!(processed.dim(), (4, 32, 32));
//! # Ok::<(), postproc_ops::OpsError>(())
//! ```
//!
//! # Configuration
//!
//! ```rust
//! use postproc_ops::PipelineConfig;
//!
//! let config = PipelineConfig::from_yaml("steps:\n  - quantize: {bins: 4}\n")?;
//! let pipeline = config.build()?;
//! assert_eq!(pipeline.len(), 1);
//! # Ok::<(), postproc_ops::OpsError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod brightness;
pub mod config;
pub mod function;
pub mod mask;
pub mod pipeline;
pub mod quantize;
pub mod step;

pub use brightness::{AdjustBrightness, Normalization};
pub use config::{PipelineConfig, StepConfig};
pub use error::{BoxError, OpsError, OpsResult};
pub use function::FromFunction;
pub use mask::MaskStep;
pub use pipeline::{Pipeline, PipelineBuilder};
pub use quantize::Quantize;
pub use step::ProcessingStep;
