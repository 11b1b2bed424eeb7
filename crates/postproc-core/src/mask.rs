//! Binary masks.
//!
//! A [`Mask`] is a 2D array of `0`/`1` values matching the shape of a single
//! frame. Pixels under a `1` are kept, pixels under a `0` are zeroed when the
//! mask is applied.
//!
//! # Circular masks
//!
//! [`circular_mask`] rasterizes a filled circle centered at `(h/2, w/2)` with
//! radius `h/2`. Pixel `(r, c)` is selected when
//!
//! ```text
//! (r - h/2)^2 + (c - w/2)^2 <= (h/2)^2
//! ```
//!
//! so pixels lying exactly on the boundary are included. Both the center and
//! the radius are evaluated in floating point, which matters for odd sizes.
//!
//! ```rust
//! use postproc_core::circular_mask;
//!
//! let mask = circular_mask((8, 8)).unwrap();
//! assert_eq!(mask.shape(), (8, 8));
//! assert!(mask.is_selected(4, 4));
//! assert!(!mask.is_selected(0, 0));
//! ```

use crate::{Error, Result};
use ndarray::{Array2, ArrayView2};

/// A binary selection mask with the shape of one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    data: Array2<u8>,
}

impl Mask {
    /// Wraps an existing array, checking that every value is 0 or 1.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimensions`] if either dimension is zero
    /// - [`Error::NotBinary`] on the first value that is neither 0 nor 1
    pub fn from_array(data: Array2<u8>) -> Result<Self> {
        let (rows, cols) = data.dim();
        if rows == 0 || cols == 0 {
            return Err(Error::invalid_dimensions(rows, cols, "mask must not be empty"));
        }
        if let Some(((row, col), &value)) = data.indexed_iter().find(|(_, v)| **v > 1) {
            return Err(Error::NotBinary { row, col, value });
        }
        Ok(Self { data })
    }

    /// Builds a mask from a predicate over `(row, col)`.
    pub fn from_fn<F>(shape: (usize, usize), mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> bool,
    {
        let (rows, cols) = shape;
        if rows == 0 || cols == 0 {
            return Err(Error::invalid_dimensions(rows, cols, "mask must not be empty"));
        }
        let data = Array2::from_shape_fn(shape, |(r, c)| u8::from(f(r, c)));
        Ok(Self { data })
    }

    /// A mask that selects every pixel.
    pub fn ones(shape: (usize, usize)) -> Result<Self> {
        Self::from_fn(shape, |_, _| true)
    }

    /// Returns `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Borrow the underlying 0/1 array.
    #[inline]
    pub fn as_array(&self) -> &Array2<u8> {
        &self.data
    }

    /// Borrowed view of the underlying array.
    #[inline]
    pub fn view(&self) -> ArrayView2<'_, u8> {
        self.data.view()
    }

    /// Consumes the mask, returning the underlying array.
    pub fn into_array(self) -> Array2<u8> {
        self.data
    }

    /// Returns `true` if the pixel at `(row, col)` is selected.
    ///
    /// Out-of-range coordinates are reported as not selected.
    #[inline]
    pub fn is_selected(&self, row: usize, col: usize) -> bool {
        self.data.get((row, col)).is_some_and(|&v| v == 1)
    }

    /// Number of selected pixels.
    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&v| v == 1).count()
    }

    /// Returns the complement of this mask.
    pub fn invert(&self) -> Self {
        Self {
            data: self.data.mapv(|v| 1 - v),
        }
    }
}

/// Generates a filled circular mask for frames of the given `(height, width)`.
///
/// # Errors
///
/// Returns [`Error::InvalidDimensions`] if either dimension is zero.
pub fn circular_mask(shape: (usize, usize)) -> Result<Mask> {
    let (height, width) = shape;
    let center_r = height as f64 / 2.0;
    let center_c = width as f64 / 2.0;
    let radius_sq = center_r * center_r;

    Mask::from_fn(shape, |r, c| {
        let dr = r as f64 - center_r;
        let dc = c as f64 - center_c;
        dr * dr + dc * dc <= radius_sq
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_circular_mask_center_selected() {
        for h in (2..=32).step_by(2) {
            for w in [1, 3, 8, 17, 40] {
                let mask = circular_mask((h, w)).unwrap();
                assert_eq!(mask.shape(), (h, w));
                assert!(mask.as_array().iter().all(|&v| v <= 1));
                assert!(mask.is_selected(h / 2, w / 2), "center missing for {}x{}", h, w);
            }
        }
    }

    #[test]
    fn test_circular_mask_4x4() {
        // Center (2, 2), radius 2, boundary inclusive.
        let mask = circular_mask((4, 4)).unwrap();
        let expected = array![
            [0u8, 0, 1, 0],
            [0, 1, 1, 1],
            [1, 1, 1, 1],
            [0, 1, 1, 1],
        ];
        assert_eq!(mask.as_array(), &expected);
        assert_eq!(mask.count(), 11);
    }

    #[test]
    fn test_circular_mask_corners_excluded() {
        let mask = circular_mask((64, 64)).unwrap();
        assert!(!mask.is_selected(0, 0));
        assert!(!mask.is_selected(0, 63));
        assert!(!mask.is_selected(63, 0));
        assert!(!mask.is_selected(63, 63));
        assert!(mask.is_selected(32, 0));
        assert!(mask.is_selected(0, 32));
    }

    #[test]
    fn test_circular_mask_zero_dims() {
        assert!(circular_mask((0, 10)).is_err());
        assert!(circular_mask((10, 0)).is_err());
    }

    #[test]
    fn test_from_array_rejects_non_binary() {
        let err = Mask::from_array(array![[0u8, 1], [2, 1]]).unwrap_err();
        assert!(matches!(err, Error::NotBinary { row: 1, col: 0, value: 2 }));
    }

    #[test]
    fn test_invert() {
        let mask = Mask::from_array(array![[0u8, 1], [1, 1]]).unwrap();
        let inv = mask.invert();
        assert_eq!(inv.as_array(), &array![[1u8, 0], [0, 0]]);
        assert_eq!(mask.count() + inv.count(), 4);
    }

    #[test]
    fn test_ones() {
        let mask = Mask::ones((3, 5)).unwrap();
        assert_eq!(mask.count(), 15);
        assert!(!mask.is_selected(3, 0));
    }
}
