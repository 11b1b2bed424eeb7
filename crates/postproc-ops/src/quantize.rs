//! Intensity quantization.
//!
//! Reduces the number of distinct intensities to a fixed number of bins.
//! The bin width is derived once from the maximum of the **whole stack**:
//!
//! ```text
//! w   = max(stack) / bins
//! out = x - trunc(x - floor(x / w) * w)
//! ```
//!
//! Every frame is then processed independently with that shared width, so
//! two frames with different peaks still snap to the same grid. The
//! remainder is truncated toward zero when cast back to the pixel type,
//! which means values on a non-integer grid snap to the first integer at or
//! above the bin boundary.
//!
//! The remainder is evaluated in integer arithmetic as
//! `((x * bins) mod max) / bins`, which equals `x - floor(x / w) * w` exactly
//! and keeps pixels that sit on a boundary (including the peak) in place even
//! when `w` has no exact binary representation.
//!
//! # Example
//!
//! ```rust
//! use postproc_core::FrameStack;
//! use postproc_ops::{ProcessingStep, Quantize};
//!
//! let stack = FrameStack::from_shape_vec((1, 1, 4), vec![0, 30, 60, 100]).unwrap();
//! let out = Quantize::new(2).apply(stack).unwrap();
//! assert_eq!(out.as_slice().unwrap(), &[0, 0, 50, 100]);
//! ```

use crate::{OpsError, OpsResult, ProcessingStep};
use ndarray::Axis;
use postproc_core::{FrameStack, Pixel, pixel_range};
use tracing::{debug, trace};

/// Default number of bins.
pub const DEFAULT_BINS: u32 = 2;

/// Snaps every pixel down to a grid of `bins` levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantize {
    bins: u32,
}

impl Default for Quantize {
    fn default() -> Self {
        Self { bins: DEFAULT_BINS }
    }
}

impl Quantize {
    /// Creates a quantize step. `bins` is checked when the step is applied.
    pub fn new(bins: u32) -> Self {
        Self { bins }
    }

    /// Number of bins.
    #[inline]
    pub fn bins(&self) -> u32 {
        self.bins
    }
}

impl ProcessingStep for Quantize {
    fn name(&self) -> &str {
        "quantize"
    }

    fn apply(&self, mut stack: FrameStack) -> OpsResult<FrameStack> {
        if self.bins == 0 {
            return Err(OpsError::InvalidParameter("quantize bins must be > 0".into()));
        }

        let max = match pixel_range(&stack) {
            Some((_, max)) if max > 0 => max,
            // Empty or all-zero stacks have no grid to snap to.
            _ => return Ok(stack),
        };

        let width = f64::from(max) / f64::from(self.bins);
        debug!(bins = self.bins, width, frames = stack.len_of(Axis(0)), "Quantizing stack");

        let (max, bins) = (u64::from(max), u64::from(self.bins));
        for (i, mut frame) in stack.axis_iter_mut(Axis(0)).enumerate() {
            trace!(frame = i, "quantize frame");
            frame.mapv_inplace(|p| snap(p, max, bins));
        }

        Ok(stack)
    }
}

/// Snaps one pixel down to the grid `max / bins`.
#[inline]
fn snap(pixel: Pixel, max: u64, bins: u64) -> Pixel {
    let scaled = u64::from(pixel) * bins;
    // Integer division is the truncation of the fractional remainder.
    let remainder = (scaled % max) / bins;
    pixel - remainder as Pixel
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array3, array};

    #[test]
    fn test_boundary_values_unchanged() {
        for bins in [1, 2, 4] {
            let stack = Array3::<u8>::from_elem((2, 4, 4), 100);
            let out = Quantize::new(bins).apply(stack).unwrap();
            assert!(out.iter().all(|&p| p == 100), "bins={}", bins);
        }
    }

    #[test]
    fn test_single_bin_zeroes_below_max() {
        let stack = array![[[0u8, 17, 99], [254, 128, 255]], [[1, 2, 3], [200, 201, 202]]];
        let out = Quantize::new(1).apply(stack).unwrap();
        for (&p, &q) in array![[[0u8, 17, 99], [254, 128, 255]], [[1, 2, 3], [200, 201, 202]]]
            .iter()
            .zip(out.iter())
        {
            if p == 255 {
                assert_eq!(q, 255);
            } else {
                assert_eq!(q, 0);
            }
        }
    }

    #[test]
    fn test_global_max_shared_across_frames() {
        // Frame 1 peaks at 40, but the width comes from frame 0's 200.
        let stack = array![[[200u8, 120]], [[40, 90]]];
        let out = Quantize::new(4).apply(stack).unwrap();
        assert_eq!(out, array![[[200u8, 100]], [[0, 50]]]);
    }

    #[test]
    fn test_non_integer_width_truncates() {
        // w = 100 / 3; 50 -> remainder 16.67 truncated to 16 -> 34
        let stack = array![[[100u8, 50, 10, 70]]];
        let out = Quantize::new(3).apply(stack).unwrap();
        assert_eq!(out, array![[[100u8, 34, 0, 67]]]);
    }

    #[test]
    fn test_peak_stays_on_unrepresentable_width() {
        // Float floor division would give 4 for the peak (3 * fl(5/3) > 5).
        let out = Quantize::new(3).apply(array![[[5u8, 3, 2]]]).unwrap();
        assert_eq!(out, array![[[5u8, 2, 2]]]);

        // Float floor division would give 67 for the peak (3 * fl(100/3) > 100).
        let out = Quantize::new(3).apply(array![[[100u8, 67, 66]]]).unwrap();
        assert_eq!(out, array![[[100u8, 67, 34]]]);
    }

    #[test]
    fn test_idempotent() {
        let stack = Array3::from_shape_fn((3, 8, 8), |(f, r, c)| ((f * 64 + r * 8 + c) * 7 % 256) as u8);
        let step = Quantize::new(5);
        let once = step.apply(stack).unwrap();
        let twice = step.apply(once.clone()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_snap() {
        // max 255, 4 bins -> w = 63.75
        assert_eq!(snap(255, 255, 4), 255);
        assert_eq!(snap(200, 255, 4), 192);
        assert_eq!(snap(128, 255, 4), 128);
        assert_eq!(snap(127, 255, 4), 64);
        assert_eq!(snap(63, 255, 4), 0);
    }

    #[test]
    fn test_zero_bins_fails() {
        let stack = Array3::<u8>::from_elem((1, 2, 2), 10);
        let err = Quantize::new(0).apply(stack).unwrap_err();
        assert!(matches!(err, OpsError::InvalidParameter(_)));
    }

    #[test]
    fn test_all_zero_stack_unchanged() {
        let stack = Array3::<u8>::zeros((2, 3, 3));
        let out = Quantize::new(4).apply(stack.clone()).unwrap();
        assert_eq!(out, stack);
    }
}
