use core::fmt::Debug;
use core::hash::Hash;
use core::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, Shr,
};

mod sealed {
    pub trait Sealed {}
}

/// An unsigned integer type that can back a [`BitSet`](crate::BitSet).
///
/// Implemented for `u8`, `u16`, `u32` and `u64`. The trait is sealed; the
/// word-to-`u64` conversions below rely on no word being wider than 64 bits.
pub trait Word:
    sealed::Sealed
    + Copy
    + Eq
    + Hash
    + Debug
    + BitAnd<Output = Self>
    + BitAndAssign
    + BitOr<Output = Self>
    + BitOrAssign
    + BitXor<Output = Self>
    + BitXorAssign
    + Not<Output = Self>
    + Shl<usize, Output = Self>
    + Shr<usize, Output = Self>
{
    /// Number of bits in one word.
    const BITS: usize;
    /// The word with no bits set.
    const ZERO: Self;
    /// The word with every bit set.
    const MAX: Self;

    /// Keeps the low `Self::BITS` bits of `value`.
    fn truncate_from(value: u64) -> Self;

    /// Zero-extends the word to 64 bits.
    fn widen(self) -> u64;

    /// Number of set bits in the word.
    fn count_ones(self) -> u32;

    /// Number of unset bits below the lowest set bit.
    fn trailing_zeros(self) -> u32;

    /// The word with only bit `pos` set. `pos` must be below `Self::BITS`.
    #[inline]
    fn bit(pos: usize) -> Self {
        Self::truncate_from(1) << pos
    }
}

macro_rules! impl_word {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Word for $ty {
                const BITS: usize = <$ty>::BITS as usize;
                const ZERO: Self = 0;
                const MAX: Self = <$ty>::MAX;

                #[inline]
                fn truncate_from(value: u64) -> Self {
                    value as $ty
                }

                #[inline]
                fn widen(self) -> u64 {
                    self as u64
                }

                #[inline]
                fn count_ones(self) -> u32 {
                    <$ty>::count_ones(self)
                }

                #[inline]
                fn trailing_zeros(self) -> u32 {
                    <$ty>::trailing_zeros(self)
                }
            }
        )+
    };
}

impl_word!(u8, u16, u32, u64);

/// Computes the number of `W` words needed to store `bit_count` bits.
///
/// It's recommended to inline this call as a const expression into the type
/// annotation generics.
///
/// # Examples
/// ```
/// use packed_bitset::word_count;
///
/// assert_eq!(word_count::<u8>(9), 2);
/// assert_eq!(word_count::<u16>(16), 1);
/// assert_eq!(word_count::<u64>(129), 3);
/// ```
pub const fn word_count<W: Word>(bit_count: usize) -> usize {
    bit_count.div_ceil(W::BITS)
}
