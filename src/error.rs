//! Errors reported by the checked mapping functions.

use thiserror::Error;

/// Represents an argument outside the range a Hilbert curve can map.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash, Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error("curve order {order} is outside the supported range 1..={max}", max = crate::ORDER_MAX)]
    InvalidOrder { order: u32 },

    #[error("coordinate ({x}, {y}) is outside the grid of a curve of order {order}")]
    CoordinateOutOfRange { x: u32, y: u32, order: u32 },

    #[error("index {index} is past the end of a curve of order {order}")]
    IndexOutOfRange { index: u64, order: u32 },
}

/// Result type of the checked mapping functions.
pub type Result<T> = std::result::Result<T, Error>;
