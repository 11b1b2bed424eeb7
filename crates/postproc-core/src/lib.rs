//! # postproc-core
//!
//! Core types for grayscale frame-stack post-processing.
//!
//! This crate provides the data model shared by the processing crates:
//!
//! - [`FrameStack`] - 3D `[frame, row, column]` array of 8-bit intensities
//! - [`Frame`] - a single 2D frame
//! - [`Mask`] - binary selector with the shape of one frame
//! - [`circular_mask`] - filled-circle mask generator
//!
//! ## Crate Structure
//!
//! ```text
//! postproc-core (this crate)
//!    ^
//!    |
//!    +-- postproc-ops (processing steps, pipelines, config)
//!    +-- postproc-bench (criterion benchmarks)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use postproc_core::prelude::*;
//!
//! let stack = FrameStack::from_elem((3, 16, 16), 128);
//! let mask = circular_mask(frame_shape(&stack)).unwrap();
//! assert_eq!(mask.shape(), (16, 16));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod frames;
pub mod mask;

pub use error::*;
pub use frames::*;
pub use mask::*;

/// Prelude module for convenient imports.
///
/// ```
/// use postproc_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::frames::{
        frame_count, frame_shape, pixel_range, stack_from_frames, Frame, FrameStack, Pixel,
    };
    pub use crate::mask::{circular_mask, Mask};
}
