//! Rust functions for mapping between 2D grid coordinates and indices along the Hilbert curve.
//!
//! Coordinates are `u32` and indices are `u64`, so curves of up to order 32 are supported. Use
//! `encode_lut` (or `encode_direct`) and `decode` when the arguments are known to be valid:
//!
//! ```rust
//! use hilbert_index::{decode, encode_lut};
//!
//! let h = encode_lut(3, 7, 4); // 48
//! let (x, y) = decode(h, 4); // (3, 7)
//! ```
//!
//! When the arguments come from outside, use the checked functions, or a [`HilbertCurve`]:
//!
//! ```rust
//! use hilbert_index::{try_encode, HilbertCurve};
//!
//! // A coordinate off the 16x16 grid
//! assert!(try_encode(16, 0, 4).is_err());
//!
//! let curve = HilbertCurve::new(4)?;
//! assert_eq!(curve.decode(48)?, (3, 7));
//! # Ok::<(), hilbert_index::Error>(())
//! ```
//!
//! Both encoders walk the curve with a four-state automaton, one bit of each coordinate per
//! level. The top levels, where the (reflected) coordinates do not yet diverge, are uniform and
//! are settled at once: `encode_direct` computes their key in closed form, while `encode_lut`
//! reads it from a table. The decoder does the same for runs of the top-level key in the index.
//!
//! [`HilbertCurve`]: struct.HilbertCurve.html

#![doc(html_root_url = "https://docs.rs/hilbert_index/0.1.0")]

#[macro_use]
mod bits_macros;

pub mod bits;
mod curve;
mod decode;
mod encode;
pub mod error;
pub mod state;

pub use crate::curve::{try_decode, try_encode, Encoding, HilbertCurve};
pub use crate::decode::decode;
pub use crate::encode::{encode_direct, encode_lut};
pub use crate::error::{Error, Result};
pub use crate::state::State;

/// Highest order of the Hilbert curve that can be calculated, bounded by the bits of a `u64` index
pub const ORDER_MAX: u32 = bits::u64::BITS / 2;
