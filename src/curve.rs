//! Checked mapping functions, and a validated curve configuration to run them with.

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::{decode, encode_direct, encode_lut, ORDER_MAX};

/// Indicates which implementation maps coordinates to indices.
///
/// Both produce identical indices; they only differ in how the key of the uniform top levels of
/// the curve is obtained.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash, Default)]
pub enum Encoding {
    /// Closed-form arithmetic, see [`encode_direct`](fn.encode_direct.html).
    Direct,
    /// Precomputed table lookup, see [`encode_lut`](fn.encode_lut.html).
    #[default]
    Lookup,
}

/// A Hilbert curve of a validated order, filling a `2^order` by `2^order` grid.
///
/// Unlike the free functions, every mapping through a `HilbertCurve` checks its arguments and
/// reports out-of-range values as an [`Error`](enum.Error.html).
///
/// # Examples
///
/// Basic usage:
///
/// ```rust
/// use hilbert_index::{Encoding, HilbertCurve};
///
/// let curve = HilbertCurve::new(4)?.with_encoding(Encoding::Direct);
/// let h = curve.encode(3, 7)?;
///
/// assert_eq!(curve.decode(h)?, (3, 7));
/// assert!(curve.encode(16, 0).is_err());
/// # Ok::<(), hilbert_index::Error>(())
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct HilbertCurve {
    order: u32,
    encoding: Encoding,
}

impl HilbertCurve {
    /// Creates a curve of `order`, which must be in the range `1 <= order <= 32`.
    pub fn new(order: u32) -> Result<Self> {
        if order == 0 || order > ORDER_MAX {
            debug!("rejecting Hilbert curve of order {}", order);
            return Err(Error::InvalidOrder { order });
        }
        trace!("Hilbert curve of order {}", order);

        Ok(Self {
            order,
            encoding: Encoding::default(),
        })
    }

    /// Selects the implementation used by [`encode`](#method.encode).
    pub fn with_encoding(self, encoding: Encoding) -> Self {
        Self { encoding, ..self }
    }

    /// Returns the order of the curve.
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Returns the implementation used by [`encode`](#method.encode).
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Returns the number of cells on each side of the grid, `2^order`.
    pub fn side(&self) -> u64 {
        1 << self.order
    }

    /// Returns the number of cells visited by the curve, `4^order`.
    pub fn len(&self) -> u128 {
        1 << (2 * self.order)
    }

    /// Whether `(x, y)` lies on the grid.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        u64::from(x) < self.side() && u64::from(y) < self.side()
    }

    /// Maps from a 2D coordinate to its index on the curve.
    pub fn encode(&self, x: u32, y: u32) -> Result<u64> {
        if !self.contains(x, y) {
            debug!(
                "coordinate ({}, {}) is off the grid of order {}",
                x, y, self.order
            );
            return Err(Error::CoordinateOutOfRange {
                x,
                y,
                order: self.order,
            });
        }

        Ok(match self.encoding {
            Encoding::Direct => encode_direct(x, y, self.order),
            Encoding::Lookup => encode_lut(x, y, self.order),
        })
    }

    /// Maps from an index on the curve to its 2D coordinate.
    pub fn decode(&self, index: u64) -> Result<(u32, u32)> {
        if u128::from(index) >= self.len() {
            debug!("index {} is past the end of order {}", index, self.order);
            return Err(Error::IndexOutOfRange {
                index,
                order: self.order,
            });
        }

        Ok(decode(index, self.order))
    }
}

/// Maps from a 2D coordinate to an 1D index, checking every argument.
///
/// Same as [`encode_lut`](fn.encode_lut.html), but reports an invalid `order` or an off-grid
/// coordinate as an error.
///
/// # Examples
///
/// ```rust
/// use hilbert_index::{try_encode, Error};
///
/// assert_eq!(try_encode(2, 1, 2), Ok(13));
/// assert_eq!(try_encode(2, 1, 0), Err(Error::InvalidOrder { order: 0 }));
/// ```
pub fn try_encode(x: u32, y: u32, order: u32) -> Result<u64> {
    HilbertCurve::new(order)?.encode(x, y)
}

/// Maps from a 1D index to a 2D coordinate, checking every argument.
///
/// Same as [`decode`](fn.decode.html), but reports an invalid `order` or an index past the end of
/// the curve as an error.
///
/// # Examples
///
/// ```rust
/// use hilbert_index::{try_decode, Error};
///
/// assert_eq!(try_decode(7, 2), Ok((1, 2)));
/// assert_eq!(try_decode(16, 2), Err(Error::IndexOutOfRange { index: 16, order: 2 }));
/// ```
pub fn try_decode(index: u64, order: u32) -> Result<(u32, u32)> {
    HilbertCurve::new(order)?.decode(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_bounds() {
        assert_eq!(HilbertCurve::new(0), Err(Error::InvalidOrder { order: 0 }));
        assert_eq!(HilbertCurve::new(33), Err(Error::InvalidOrder { order: 33 }));
        assert_eq!(HilbertCurve::new(1).map(|c| c.order()), Ok(1));
        assert_eq!(HilbertCurve::new(32).map(|c| c.order()), Ok(32));
    }

    #[test]
    fn dimensions() {
        let curve = HilbertCurve::new(3).unwrap();
        assert_eq!(curve.side(), 8);
        assert_eq!(curve.len(), 64);
        assert!(curve.contains(7, 7));
        assert!(!curve.contains(8, 0));
        assert!(!curve.contains(0, 8));

        let curve = HilbertCurve::new(32).unwrap();
        assert_eq!(curve.side(), 1 << 32);
        assert_eq!(curve.len(), 1 << 64);
        assert!(curve.contains(u32::MAX, u32::MAX));
    }

    #[test]
    fn encodings_agree() {
        let direct = HilbertCurve::new(5).unwrap().with_encoding(Encoding::Direct);
        let lookup = direct.with_encoding(Encoding::Lookup);
        assert_eq!(lookup, HilbertCurve::new(5).unwrap());
        for x in 0..32 {
            for y in 0..32 {
                assert_eq!(direct.encode(x, y), lookup.encode(x, y));
            }
        }
    }

    #[test]
    fn rejects_off_grid_arguments() {
        let curve = HilbertCurve::new(4).unwrap();
        assert_eq!(
            curve.encode(16, 3),
            Err(Error::CoordinateOutOfRange { x: 16, y: 3, order: 4 })
        );
        assert_eq!(
            curve.decode(256),
            Err(Error::IndexOutOfRange { index: 256, order: 4 })
        );
        assert_eq!(curve.decode(255), Ok((15, 0)));
        assert_eq!(try_decode(u64::MAX, 32), Ok((u32::MAX, 0)));
        assert_eq!(try_encode(0, 0, 33), Err(Error::InvalidOrder { order: 33 }));
    }
}
