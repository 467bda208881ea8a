macro_rules! bits_impl {
    ( $n:literal, $SelfT:ident, $bits:literal ) => {
        #[doc = concat!("Bit-scan helpers for the ", $n, " unsigned integer type.")]
        pub mod $SelfT {
            /// Number of bits in `
            #[doc = stringify!($SelfT)]
            /// `
            pub const BITS: u32 = <$SelfT>::MAX.count_ones();

            /// Returns the zero-based position of the most significant set bit of `n`, or `-1`
            /// if `n` is zero.
            ///
            /// The result is exact over the whole width of `
            #[doc = stringify!($SelfT)]
            /// `.
            ///
            /// # Examples
            ///
            /// Basic usage:
            ///
            /// ```rust
            #[doc = concat!("use hilbert_index::bits::", stringify!($SelfT), "::msb_index;")]
            ///
            /// assert_eq!(msb_index(0), -1);
            /// assert_eq!(msb_index(1), 0);
            /// assert_eq!(msb_index(0b1011), 3);
            /// ```
            #[inline]
            pub const fn msb_index(n: $SelfT) -> i32 {
                if n == 0 {
                    return -1;
                }
                (BITS - 1 - n.leading_zeros()) as i32
            }

            /// Returns a value with the `n` lowest bits set. `n` must be in the range
            /// `0 <= n <= BITS`.
            ///
            /// # Examples
            ///
            /// Basic usage:
            ///
            /// ```rust
            #[doc = concat!("use hilbert_index::bits::", stringify!($SelfT), "::low_ones;")]
            ///
            /// assert_eq!(low_ones(0), 0);
            /// assert_eq!(low_ones(3), 0b111);
            #[doc = concat!("assert_eq!(low_ones(", stringify!($bits), "), ", stringify!($SelfT), "::MAX);")]
            /// ```
            #[inline]
            pub const fn low_ones(n: u32) -> $SelfT {
                debug_assert!(n <= BITS);
                // A full-width shift would overflow
                if n >= BITS {
                    <$SelfT>::MAX
                } else {
                    ((1 as $SelfT) << n) - 1
                }
            }

        }
    };
}
