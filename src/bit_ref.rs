use crate::bitset::BitSet;
use crate::word::Word;
use core::fmt::{Debug, Formatter};
use core::ops::Not;

/// A mutable handle to a single bit of a [`BitSet`].
///
/// Rust has no overloadable assignment, so writes go through [`assign`]
/// instead of `=`. The handle borrows the bitset mutably and cannot outlive
/// it.
///
/// Returned by [`BitSet::bit_mut`] and [`BitSet::try_bit_mut`].
///
/// [`assign`]: BitMut::assign
pub struct BitMut<'bitset, const BIT_COUNT: usize, const WORD_COUNT: usize, W: Word> {
    bitset: &'bitset mut BitSet<BIT_COUNT, WORD_COUNT, W>,
    idx: usize,
}

impl<'bitset, const BIT_COUNT: usize, const WORD_COUNT: usize, W: Word>
    BitMut<'bitset, BIT_COUNT, WORD_COUNT, W>
{
    /// `idx` must already be validated against `BIT_COUNT`.
    pub(crate) fn new(bitset: &'bitset mut BitSet<BIT_COUNT, WORD_COUNT, W>, idx: usize) -> Self {
        Self { bitset, idx }
    }

    /// Index of the referenced bit.
    #[inline]
    pub fn index(&self) -> usize {
        self.idx
    }

    /// Returns the current value of the referenced bit.
    #[inline]
    pub fn get(&self) -> bool {
        self.bitset.bit(self.idx)
    }

    /// Sets or clears the referenced bit.
    ///
    /// # Examples
    /// ```
    /// use packed_bitset::{BitSet, word_count};
    ///
    /// let mut bits = BitSet::<4, { word_count::<u8>(4) }>::new();
    /// bits.bit_mut(1).assign(true);
    /// assert!(bits[1]);
    /// ```
    #[inline]
    pub fn assign(&mut self, value: bool) -> &mut Self {
        self.bitset.write_bit(self.idx, value);
        self
    }

    /// Copies the value of another bit handle, possibly of a different
    /// bitset, into the referenced bit.
    ///
    /// # Examples
    /// ```
    /// use packed_bitset::{BitSet, word_count};
    ///
    /// let mut src = BitSet::<4, { word_count::<u8>(4) }>::from_u64(0b0100);
    /// let mut dst = BitSet::<9, { word_count::<u8>(9) }>::new();
    /// dst.bit_mut(8).assign_from(&src.bit_mut(2));
    /// assert!(dst[8]);
    /// ```
    #[inline]
    pub fn assign_from<const B: usize, const C: usize, V: Word>(
        &mut self,
        other: &BitMut<'_, B, C, V>,
    ) -> &mut Self {
        self.assign(other.get())
    }

    /// Toggles the referenced bit.
    #[inline]
    pub fn flip(&mut self) -> &mut Self {
        let value = !self.get();
        self.assign(value)
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize, W: Word>
    From<BitMut<'_, BIT_COUNT, WORD_COUNT, W>> for bool
{
    fn from(bit: BitMut<'_, BIT_COUNT, WORD_COUNT, W>) -> Self {
        bit.get()
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize, W: Word> Not
    for &BitMut<'_, BIT_COUNT, WORD_COUNT, W>
{
    type Output = bool;

    fn not(self) -> bool {
        !self.get()
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize, W: Word> Debug
    for BitMut<'_, BIT_COUNT, WORD_COUNT, W>
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BitMut")
            .field("idx", &self.idx)
            .field("value", &self.get())
            .finish()
    }
}
