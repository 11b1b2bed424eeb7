//! Frame stack types.
//!
//! A [`FrameStack`] is a 3D array of 8-bit grayscale intensities indexed as
//! `[frame, row, column]`. Frames are stored contiguously in row-major order:
//!
//! ```text
//! frame 0: [p00 p01 p02 ...]  ← row 0
//!          [p10 p11 p12 ...]  ← row 1
//! frame 1: ...
//! ```
//!
//! The caller owns the stack. Processing steps take it by value, mutate or
//! replace it, and hand it back.
//!
//! # Usage
//!
//! ```rust
//! use ndarray::Array2;
//! use postproc_core::{frame_shape, stack_from_frames};
//!
//! let a = Array2::<u8>::from_elem((4, 6), 10);
//! let b = Array2::<u8>::from_elem((4, 6), 20);
//! let stack = stack_from_frames(&[a, b]).unwrap();
//! assert_eq!(stack.dim(), (2, 4, 6));
//! assert_eq!(frame_shape(&stack), (4, 6));
//! ```

use crate::{Error, Result};
use ndarray::{Array2, Array3, ArrayView2, Axis};

/// Pixel intensity type.
pub type Pixel = u8;

/// A single 2D grayscale frame, indexed `[row, column]`.
pub type Frame = Array2<Pixel>;

/// An ordered stack of frames, indexed `[frame, row, column]`.
pub type FrameStack = Array3<Pixel>;

/// Stacks equally-shaped frames along a new leading axis.
///
/// # Errors
///
/// - [`Error::InvalidDimensions`] if `frames` is empty
/// - [`Error::ShapeMismatch`] if any frame differs in shape from the first
pub fn stack_from_frames(frames: &[Frame]) -> Result<FrameStack> {
    let first = frames
        .first()
        .ok_or_else(|| Error::invalid_dimensions(0, 0, "no frames to stack"))?;
    let expected = first.dim();

    for frame in frames {
        if frame.dim() != expected {
            return Err(Error::shape_mismatch(expected, frame.dim()));
        }
    }

    let views: Vec<ArrayView2<'_, Pixel>> = frames.iter().map(|f| f.view()).collect();
    ndarray::stack(Axis(0), &views).map_err(|e| Error::invalid_dimensions(expected.0, expected.1, e.to_string()))
}

/// Returns the `(rows, cols)` shape shared by every frame in the stack.
#[inline]
pub fn frame_shape(stack: &FrameStack) -> (usize, usize) {
    let (_, rows, cols) = stack.dim();
    (rows, cols)
}

/// Returns the number of frames in the stack.
#[inline]
pub fn frame_count(stack: &FrameStack) -> usize {
    stack.len_of(Axis(0))
}

/// Global `(min, max)` over every pixel of every frame.
///
/// Returns `None` for a stack with no pixels.
pub fn pixel_range(stack: &FrameStack) -> Option<(Pixel, Pixel)> {
    stack.iter().fold(None, |acc, &p| match acc {
        None => Some((p, p)),
        Some((lo, hi)) => Some((lo.min(p), hi.max(p))),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_stack_from_frames() {
        let a = array![[1u8, 2], [3, 4]];
        let b = array![[5u8, 6], [7, 8]];
        let stack = stack_from_frames(&[a, b]).unwrap();

        assert_eq!(stack.dim(), (2, 2, 2));
        assert_eq!(stack[[0, 1, 0]], 3);
        assert_eq!(stack[[1, 0, 1]], 6);
        assert_eq!(frame_count(&stack), 2);
    }

    #[test]
    fn test_stack_empty_fails() {
        let err = stack_from_frames(&[]).unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { .. }));
    }

    #[test]
    fn test_stack_shape_mismatch() {
        let a = Frame::zeros((2, 2));
        let b = Frame::zeros((2, 3));
        let err = stack_from_frames(&[a, b]).unwrap_err();
        assert!(matches!(
            err,
            Error::ShapeMismatch { expected: (2, 2), got: (2, 3) }
        ));
    }

    #[test]
    fn test_pixel_range() {
        let stack = array![[[4u8, 9], [1, 7]], [[200, 3], [5, 6]]];
        assert_eq!(pixel_range(&stack), Some((1, 200)));
        assert_eq!(frame_shape(&stack), (2, 2));
    }

    #[test]
    fn test_pixel_range_empty() {
        let stack = FrameStack::zeros((0, 4, 4));
        assert_eq!(pixel_range(&stack), None);
    }
}
