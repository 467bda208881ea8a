//! Bit-scan primitives over the half-width (coordinate) and full-width (index) integer types.

bits_impl! { "32-bit", u32, 32 }
bits_impl! { "64-bit", u64, 64 }
