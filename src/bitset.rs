use crate::bit_ref::BitMut;
use crate::error::{BitSetError, Result};
use crate::iter::{Iter, IterOnes};
use crate::word::{Word, word_count};
use core::array::from_fn;
use core::hash::{Hash, Hasher};
use core::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Index, Not, Shl, ShlAssign,
    Shr, ShrAssign,
};

/// Odd multiplier of the word fold used by [`BitSet::fingerprint`].
const FINGERPRINT_MUL: u64 = 0x517c_c1b7_2722_0a95;

/// A fixed-capacity sequence of bits packed into an array of words.
///
/// `BIT_COUNT` is the number of usable bits.
/// `WORD_COUNT` is the number of backing words and must be set via const
/// expression with [`word_count`], e.g. `{ word_count::<u32>(BIT_COUNT) }`.
/// `W` is the backing word type, one of `u8` (default), `u16`, `u32`, `u64`.
///
/// Bit 0 is the least significant bit of word 0. Bits of the last word beyond
/// `BIT_COUNT` are always kept unset.
#[derive(PartialEq, Eq, Clone, Copy)]
pub struct BitSet<const BIT_COUNT: usize, const WORD_COUNT: usize, W: Word = u8>(
    pub(crate) [W; WORD_COUNT],
);

impl<const BIT_COUNT: usize, const WORD_COUNT: usize, W: Word> BitSet<BIT_COUNT, WORD_COUNT, W> {
    const PARAMS_OK: () = {
        assert!(BIT_COUNT > 0, "BIT_COUNT must be greater than zero.");
        assert!(
            WORD_COUNT == word_count::<W>(BIT_COUNT),
            "WORD_COUNT must match word_count::<W>(BIT_COUNT)."
        );
    };

    /// Creates a new bitset with all bits unset.
    ///
    /// # Compiler Errors
    /// Prevents compilation if either `BIT_COUNT == 0` or `WORD_COUNT !=
    /// word_count::<W>(BIT_COUNT)`.
    ///
    /// ```compile_fail
    /// use packed_bitset::BitSet;
    ///
    /// let empty = BitSet::<0, 0>::new();
    /// ```
    ///
    /// ```compile_fail
    /// use packed_bitset::BitSet;
    ///
    /// let mismatched = BitSet::<16, 1, u8>::new();
    /// ```
    ///
    /// # Examples
    /// ```
    /// use packed_bitset::{BitSet, word_count};
    ///
    /// let bits = BitSet::<16, { word_count::<u8>(16) }>::new();
    /// assert!(bits.none());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::const_empty()
    }

    /// Creates a new `const` bitset with all bits unset.
    ///
    /// Equivalent to [`new`], but callable in compile-time contexts such as
    /// const initialization.
    ///
    /// # Examples
    /// ```
    /// use packed_bitset::{BitSet, word_count};
    ///
    /// const EMPTY: BitSet<40, { word_count::<u32>(40) }, u32> = BitSet::const_empty();
    /// assert_eq!(EMPTY.count(), 0);
    /// ```
    ///
    /// [`new`]: BitSet::new
    pub const fn const_empty() -> Self {
        let () = Self::PARAMS_OK;
        Self([W::ZERO; WORD_COUNT])
    }

    /// Creates a new bitset with all bits set.
    ///
    /// # Examples
    /// ```
    /// use packed_bitset::{BitSet, word_count};
    ///
    /// let bits = BitSet::<10, { word_count::<u8>(10) }>::with_all_set();
    /// assert_eq!(bits.count(), 10);
    /// ```
    #[inline]
    pub fn with_all_set() -> Self {
        let mut bs = Self::new();
        bs.set_all();
        bs
    }

    /// Creates a bitset from the low bits of `value`.
    ///
    /// Words are filled from the least significant end until either all 64
    /// bits of `value` or all `BIT_COUNT` bits are used. Bits of `value` at or
    /// above `BIT_COUNT` are dropped.
    ///
    /// # Examples
    /// ```
    /// use packed_bitset::{BitSet, word_count};
    ///
    /// let bits = BitSet::<4, { word_count::<u8>(4) }>::from_u64(0b1_0110);
    /// assert_eq!(bits.to_u64(), Ok(0b0110));
    /// ```
    pub fn from_u64(value: u64) -> Self {
        let mut bs = Self::new();
        for (idx, word) in bs.0.iter_mut().enumerate() {
            let shift = idx * W::BITS;
            if shift >= u64::BITS as usize {
                break;
            }
            *word = W::truncate_from(value >> shift);
        }
        bs.clean_unused_bits();
        bs
    }

    /// Constructs a bitset from a boolean slice, where `true` means set and
    /// index 0 of the slice is bit 0.
    ///
    /// # Panics
    /// Panics if the slice length doesn't match `BIT_COUNT`.
    ///
    /// # Examples
    /// ```
    /// use packed_bitset::{BitSet, word_count};
    ///
    /// let bits = BitSet::<4, { word_count::<u8>(4) }>::from_slice(&[true, false, true, false]);
    /// assert_eq!(bits.count(), 2);
    /// ```
    pub fn from_slice(bits: &[bool]) -> Self {
        assert_eq!(bits.len(), BIT_COUNT);
        let mut bs = Self::new();
        for (idx, bit) in bits.iter().enumerate() {
            bs.write_bit(idx, *bit);
        }
        bs
    }

    /// Constructs a bitset by setting only the indices provided in the
    /// iterator.
    ///
    /// # Panics
    /// Panics if any index is out of bounds (i.e., `>= BIT_COUNT`).
    ///
    /// # Examples
    /// ```
    /// use packed_bitset::{BitSet, word_count};
    ///
    /// let bits = BitSet::<5, { word_count::<u16>(5) }, u16>::from_ones_iter([0, 2, 4]);
    /// assert!(bits.get(2));
    /// assert!(!bits.get(3));
    /// ```
    pub fn from_ones_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut bs = Self::new();
        for idx in iter {
            bs.put(idx, true);
        }
        bs
    }

    /// Returns the number of bits, `BIT_COUNT`.
    #[inline]
    pub const fn size(&self) -> usize {
        BIT_COUNT
    }

    /// Returns `true` if the bit at the given index is set.
    ///
    /// This is the unchecked accessor: `idx < BIT_COUNT` is the caller's
    /// contract. Use [`test`] for a fallible lookup.
    ///
    /// # Panics
    /// Panics if `idx >= BIT_COUNT`.
    ///
    /// [`test`]: BitSet::test
    #[inline]
    pub fn get(&self, idx: usize) -> bool {
        assert!(idx < BIT_COUNT, "Bit index {idx} out of bounds");
        self.bit(idx)
    }

    /// Returns whether the bit at the given index is set.
    ///
    /// # Errors
    /// [`BitSetError::OutOfRange`] if `idx >= BIT_COUNT`.
    ///
    /// # Examples
    /// ```
    /// use packed_bitset::{BitSet, BitSetError, word_count};
    ///
    /// let bits = BitSet::<8, { word_count::<u8>(8) }>::from_u64(0b10);
    /// assert_eq!(bits.test(1), Ok(true));
    /// assert_eq!(bits.test(8), Err(BitSetError::OutOfRange { index: 8, bound: 8 }));
    /// ```
    #[inline]
    pub fn test(&self, idx: usize) -> Result<bool> {
        Self::check_index(idx)?;
        Ok(self.bit(idx))
    }

    /// Sets or clears the bit at the given index.
    ///
    /// # Panics
    /// Panics if `idx >= BIT_COUNT`.
    #[inline]
    pub fn put(&mut self, idx: usize, value: bool) {
        assert!(idx < BIT_COUNT, "Bit index {idx} out of bounds");
        self.write_bit(idx, value);
    }

    /// Sets or clears the bit at the given index.
    ///
    /// # Errors
    /// [`BitSetError::OutOfRange`] if `idx >= BIT_COUNT`; the bitset is left
    /// untouched.
    ///
    /// # Examples
    /// ```
    /// use packed_bitset::{BitSet, word_count};
    ///
    /// let mut bits = BitSet::<12, { word_count::<u8>(12) }>::new();
    /// bits.set(3, true)?.set(11, true)?;
    /// assert_eq!(bits.count(), 2);
    /// assert!(bits.set(12, true).is_err());
    /// # Ok::<(), packed_bitset::BitSetError>(())
    /// ```
    #[inline]
    pub fn set(&mut self, idx: usize, value: bool) -> Result<&mut Self> {
        Self::check_index(idx)?;
        self.write_bit(idx, value);
        Ok(self)
    }

    /// Clears the bit at the given index.
    ///
    /// # Errors
    /// [`BitSetError::OutOfRange`] if `idx >= BIT_COUNT`.
    #[inline]
    pub fn reset(&mut self, idx: usize) -> Result<&mut Self> {
        self.set(idx, false)
    }

    /// Toggles the bit at the given index.
    ///
    /// # Errors
    /// [`BitSetError::OutOfRange`] if `idx >= BIT_COUNT`.
    ///
    /// # Examples
    /// ```
    /// use packed_bitset::{BitSet, word_count};
    ///
    /// let mut bits = BitSet::<8, { word_count::<u8>(8) }>::new();
    /// bits.flip(4)?;
    /// assert!(bits.get(4));
    /// bits.flip(4)?;
    /// assert!(!bits.get(4));
    /// # Ok::<(), packed_bitset::BitSetError>(())
    /// ```
    #[inline]
    pub fn flip(&mut self, idx: usize) -> Result<&mut Self> {
        Self::check_index(idx)?;
        let (word_idx, bit_idx) = Self::idxs(idx);
        self.0[word_idx] ^= W::bit(bit_idx);
        Ok(self)
    }

    /// Returns a mutable handle to the bit at the given index.
    ///
    /// # Panics
    /// Panics if `idx >= BIT_COUNT`.
    ///
    /// # Examples
    /// ```
    /// use packed_bitset::{BitSet, word_count};
    ///
    /// let mut bits = BitSet::<8, { word_count::<u8>(8) }>::new();
    /// bits.bit_mut(2).assign(true);
    /// bits.bit_mut(3).flip();
    /// assert_eq!(bits.to_u64(), Ok(0b1100));
    /// ```
    #[inline]
    pub fn bit_mut(&mut self, idx: usize) -> BitMut<'_, BIT_COUNT, WORD_COUNT, W> {
        assert!(idx < BIT_COUNT, "Bit index {idx} out of bounds");
        BitMut::new(self, idx)
    }

    /// Returns a mutable handle to the bit at the given index.
    ///
    /// # Errors
    /// [`BitSetError::OutOfRange`] if `idx >= BIT_COUNT`.
    #[inline]
    pub fn try_bit_mut(&mut self, idx: usize) -> Result<BitMut<'_, BIT_COUNT, WORD_COUNT, W>> {
        Self::check_index(idx)?;
        Ok(BitMut::new(self, idx))
    }

    /// Sets every bit.
    #[inline]
    pub fn set_all(&mut self) -> &mut Self {
        self.0.fill(W::MAX);
        self.clean_unused_bits();
        self
    }

    /// Clears every bit.
    #[inline]
    pub fn reset_all(&mut self) -> &mut Self {
        self.0.fill(W::ZERO);
        self
    }

    /// Toggles every bit.
    ///
    /// # Examples
    /// ```
    /// use packed_bitset::{BitSet, word_count};
    ///
    /// let mut bits = BitSet::<10, { word_count::<u8>(10) }>::from_u64(0b11);
    /// bits.flip_all();
    /// assert_eq!(bits.count(), 8);
    /// assert!(!bits.get(0));
    /// ```
    #[inline]
    pub fn flip_all(&mut self) -> &mut Self {
        for word in &mut self.0 {
            *word = !*word;
        }
        self.clean_unused_bits();
        self
    }

    /// Returns `true` if every bit is set.
    pub fn all(&self) -> bool {
        let (rest, last) = self.0.split_at(WORD_COUNT - 1);
        rest.iter().all(|word| *word == W::MAX) && last[0] == Self::last_word_mask()
    }

    /// Returns `true` if at least one bit is set.
    pub fn any(&self) -> bool {
        let (rest, last) = self.0.split_at(WORD_COUNT - 1);
        rest.iter().any(|word| *word != W::ZERO) || last[0] & Self::last_word_mask() != W::ZERO
    }

    /// Returns `true` if no bit is set.
    #[inline]
    pub fn none(&self) -> bool {
        !self.any()
    }

    /// Returns the number of set bits.
    ///
    /// # Examples
    /// ```
    /// use packed_bitset::{BitSet, word_count};
    ///
    /// let bits = BitSet::<70, { word_count::<u64>(70) }, u64>::from_ones_iter([1, 63, 64, 69]);
    /// assert_eq!(bits.count(), 4);
    /// ```
    #[inline]
    pub fn count(&self) -> usize {
        self.0.iter().map(|word| word.count_ones() as usize).sum()
    }

    /// Returns the index of the first set bit or `None` if all bits are unset.
    ///
    /// Bits are checked in ascending order from least to most significant.
    /// Runs in O(w) where w is the word count.
    pub fn first_set_bit(&self) -> Option<usize> {
        for (i, word) in self.0.iter().enumerate() {
            if *word != W::ZERO {
                let bit = word.trailing_zeros() as usize;
                return Some(i * W::BITS + bit);
            }
        }
        None
    }

    /// Returns an iterator over all bits as `bool`, from least to most
    /// significant.
    ///
    /// # Examples
    /// ```
    /// use packed_bitset::{BitSet, word_count};
    ///
    /// let bits = BitSet::<3, { word_count::<u8>(3) }>::from_u64(0b101);
    /// assert!(bits.iter().eq([true, false, true]));
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, BIT_COUNT, WORD_COUNT, W> {
        Iter::new(&self.0)
    }

    /// Returns an iterator over the indices of all set bits, in ascending
    /// order.
    ///
    /// Iterating through the entire iterator runs in O(max(k, w)) where k is
    /// the number of set bits and w is the word count.
    ///
    /// # Examples
    /// ```
    /// use packed_bitset::{BitSet, word_count};
    ///
    /// let bits = BitSet::<20, { word_count::<u8>(20) }>::from_ones_iter([2, 9, 19]);
    /// assert!(bits.iter_ones().eq([2, 9, 19]));
    /// ```
    #[inline]
    pub fn iter_ones(&self) -> IterOnes<'_, BIT_COUNT, WORD_COUNT, W> {
        IterOnes::new(&self.0)
    }

    /// Returns a new bitset representing the bitwise OR of `self` and `other`.
    #[inline]
    pub fn bit_or(&self, other: &Self) -> Self {
        Self(from_fn(|i| self.0[i] | other.0[i]))
    }

    /// Performs an in-place bitwise OR with another bitset.
    #[inline]
    pub fn in_place_bit_or(&mut self, other: &Self) {
        for (self_word, other_word) in self.0.iter_mut().zip(other.0.iter()) {
            *self_word |= *other_word
        }
    }

    /// Returns a new bitset representing the bitwise AND of `self` and
    /// `other`.
    #[inline]
    pub fn bit_and(&self, other: &Self) -> Self {
        Self(from_fn(|i| self.0[i] & other.0[i]))
    }

    /// Performs an in-place bitwise AND with another bitset.
    #[inline]
    pub fn in_place_bit_and(&mut self, other: &Self) {
        for (self_word, other_word) in self.0.iter_mut().zip(other.0.iter()) {
            *self_word &= *other_word
        }
    }

    /// Returns a new bitset representing the bitwise XOR of `self` and
    /// `other`.
    ///
    /// # Examples
    /// ```
    /// use packed_bitset::{BitSet, word_count};
    ///
    /// type Bits16 = BitSet<16, { word_count::<u8>(16) }>;
    /// let a = Bits16::from_u64(1 | 1 << 8);
    /// let b = Bits16::from_u64(1 << 8);
    /// assert_eq!(a.bit_xor(&b), Bits16::from_u64(1));
    /// ```
    #[inline]
    pub fn bit_xor(&self, other: &Self) -> Self {
        Self(from_fn(|i| self.0[i] ^ other.0[i]))
    }

    /// Performs an in-place bitwise XOR with another bitset.
    #[inline]
    pub fn in_place_bit_xor(&mut self, other: &Self) {
        for (self_word, other_word) in self.0.iter_mut().zip(other.0.iter()) {
            *self_word ^= *other_word
        }
    }

    /// Returns a new bitset with each bit inverted (bitwise NOT).
    #[inline]
    pub fn bit_not(&self) -> Self {
        let mut result = *self;
        result.flip_all();
        result
    }

    /// Does a left shift by `n` positions, filling with unset bits. This means
    /// bits are shifted towards higher bit indices.
    ///
    /// Bits that are shifted beyond `BIT_COUNT` are lost.
    /// If `n >= BIT_COUNT`, the bitset is cleared.
    ///
    /// # Examples
    /// ```
    /// use packed_bitset::{BitSet, word_count};
    ///
    /// let mut bits = BitSet::<12, { word_count::<u8>(12) }>::from_u64(0b1000_0000_0101);
    /// bits.shift_left(3);
    /// assert_eq!(bits.to_u64(), Ok(0b0000_0010_1000));
    /// ```
    pub fn shift_left(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        if n >= BIT_COUNT {
            self.reset_all();
            return;
        }
        let (word_shift, bit_shift) = Self::idxs(n);

        for i in (word_shift..WORD_COUNT).rev() {
            let src = i - word_shift;
            self.0[i] = if bit_shift == 0 {
                self.0[src]
            } else if src == 0 {
                self.0[src] << bit_shift
            } else {
                self.0[src] << bit_shift | self.0[src - 1] >> (W::BITS - bit_shift)
            };
        }
        self.0[..word_shift].fill(W::ZERO);

        self.clean_unused_bits();
    }

    /// Does a right shift by `n` positions, filling with unset bits. This
    /// means bits are shifted towards lower bit indices.
    ///
    /// Bits that are shifted beyond index 0 are lost.
    /// If `n >= BIT_COUNT`, the bitset is cleared.
    ///
    /// # Examples
    /// ```
    /// use packed_bitset::{BitSet, word_count};
    ///
    /// let mut bits = BitSet::<12, { word_count::<u8>(12) }>::from_u64(0b1000_0000_0101);
    /// bits.shift_right(2);
    /// assert_eq!(bits.to_u64(), Ok(0b0010_0000_0001));
    /// ```
    pub fn shift_right(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        if n >= BIT_COUNT {
            self.reset_all();
            return;
        }
        let (word_shift, bit_shift) = Self::idxs(n);
        let kept = WORD_COUNT - word_shift;

        for i in 0..kept {
            let src = i + word_shift;
            self.0[i] = if bit_shift == 0 {
                self.0[src]
            } else if src + 1 == WORD_COUNT {
                self.0[src] >> bit_shift
            } else {
                self.0[src] >> bit_shift | self.0[src + 1] << (W::BITS - bit_shift)
            };
        }
        self.0[kept..].fill(W::ZERO);
    }

    /// Converts the bitset to a `u32`.
    ///
    /// # Errors
    /// [`BitSetError::Overflow`] if any bit at index 32 or above is set.
    pub fn to_u32(&self) -> Result<u32> {
        if self.has_bits_from(u32::BITS as usize) {
            return Err(BitSetError::Overflow { width: u32::BITS });
        }
        Ok(self.low_u64() as u32)
    }

    /// Converts the bitset to a `u64`.
    ///
    /// # Errors
    /// [`BitSetError::Overflow`] if any bit at index 64 or above is set.
    ///
    /// # Examples
    /// ```
    /// use packed_bitset::{BitSet, BitSetError, word_count};
    ///
    /// let mut bits = BitSet::<128, { word_count::<u32>(128) }, u32>::from_u64(u64::MAX);
    /// assert_eq!(bits.to_u64(), Ok(u64::MAX));
    /// bits.set_all();
    /// assert_eq!(bits.to_u64(), Err(BitSetError::Overflow { width: 64 }));
    /// ```
    pub fn to_u64(&self) -> Result<u64> {
        if self.has_bits_from(u64::BITS as usize) {
            return Err(BitSetError::Overflow { width: u64::BITS });
        }
        Ok(self.low_u64())
    }

    /// Returns a 64-bit digest of the bit pattern.
    ///
    /// For `BIT_COUNT < 64` this is the integer value of the bitset. Wider
    /// bitsets fold their words in order, so permuting words or changing any
    /// single word changes the digest with high probability. Equal bitsets
    /// always have equal fingerprints. [`Hash`] is implemented on top of it.
    pub fn fingerprint(&self) -> u64 {
        if BIT_COUNT < u64::BITS as usize {
            return self.low_u64();
        }
        self.0.iter().fold(0, |acc: u64, word| {
            (acc.rotate_left(5) ^ word.widen()).wrapping_mul(FINGERPRINT_MUL)
        })
    }

    #[inline]
    pub(crate) fn bit(&self, idx: usize) -> bool {
        let (word_idx, bit_idx) = Self::idxs(idx);
        self.0[word_idx] & W::bit(bit_idx) != W::ZERO
    }

    #[inline]
    pub(crate) fn write_bit(&mut self, idx: usize, value: bool) {
        let (word_idx, bit_idx) = Self::idxs(idx);
        if value {
            self.0[word_idx] |= W::bit(bit_idx);
        } else {
            self.0[word_idx] &= !W::bit(bit_idx);
        }
    }

    #[inline]
    fn check_index(idx: usize) -> Result<()> {
        if idx < BIT_COUNT {
            Ok(())
        } else {
            Err(BitSetError::OutOfRange {
                index: idx,
                bound: BIT_COUNT,
            })
        }
    }

    #[inline]
    fn idxs(idx: usize) -> (usize, usize) {
        (idx / W::BITS, idx % W::BITS)
    }

    #[inline]
    pub(crate) fn last_word_mask() -> W {
        let bits_in_last = BIT_COUNT % W::BITS;
        if bits_in_last == 0 {
            W::MAX
        } else {
            W::MAX >> (W::BITS - bits_in_last)
        }
    }

    #[inline]
    fn clean_unused_bits(&mut self) {
        self.0[WORD_COUNT - 1] &= Self::last_word_mask();
    }

    /// ORs together every word that starts below bit 64.
    fn low_u64(&self) -> u64 {
        let mut value = 0;
        for (i, word) in self.0.iter().enumerate() {
            let shift = i * W::BITS;
            if shift >= u64::BITS as usize {
                break;
            }
            value |= word.widen() << shift;
        }
        value
    }

    /// Returns `true` if any bit at index `width` or above is set.
    fn has_bits_from(&self, width: usize) -> bool {
        self.0.iter().enumerate().any(|(i, word)| {
            let start = i * W::BITS;
            if start >= width {
                *word != W::ZERO
            } else if start + W::BITS > width {
                word.widen() >> (width - start) != 0
            } else {
                false
            }
        })
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize, W: Word> Default
    for BitSet<BIT_COUNT, WORD_COUNT, W>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize, W: Word> From<u64>
    for BitSet<BIT_COUNT, WORD_COUNT, W>
{
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize, W: Word> Hash
    for BitSet<BIT_COUNT, WORD_COUNT, W>
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.fingerprint());
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize, W: Word> Index<usize>
    for BitSet<BIT_COUNT, WORD_COUNT, W>
{
    type Output = bool;

    fn index(&self, idx: usize) -> &bool {
        if self.get(idx) { &true } else { &false }
    }
}

impl<'bitset, const BIT_COUNT: usize, const WORD_COUNT: usize, W: Word> IntoIterator
    for &'bitset BitSet<BIT_COUNT, WORD_COUNT, W>
{
    type Item = bool;
    type IntoIter = Iter<'bitset, BIT_COUNT, WORD_COUNT, W>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Constructs a bitset from an iterator over `bool`s.
///
/// # Panics
/// Panics if the iterator yields more or fewer than `BIT_COUNT` elements.
impl<const BIT_COUNT: usize, const WORD_COUNT: usize, W: Word> FromIterator<bool>
    for BitSet<BIT_COUNT, WORD_COUNT, W>
{
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        let mut bs = Self::new();
        let mut idx = 0;

        for bit in iter {
            if idx >= BIT_COUNT {
                panic!("Iterator yielded more than {BIT_COUNT} elements");
            }
            bs.write_bit(idx, bit);
            idx += 1;
        }

        if idx != BIT_COUNT {
            panic!("Iterator yielded fewer than {BIT_COUNT} elements");
        }

        bs
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize, W: Word> BitAnd
    for BitSet<BIT_COUNT, WORD_COUNT, W>
{
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.bit_and(&rhs)
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize, W: Word> BitAndAssign
    for BitSet<BIT_COUNT, WORD_COUNT, W>
{
    fn bitand_assign(&mut self, rhs: Self) {
        self.in_place_bit_and(&rhs)
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize, W: Word> BitOr
    for BitSet<BIT_COUNT, WORD_COUNT, W>
{
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.bit_or(&rhs)
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize, W: Word> BitOrAssign
    for BitSet<BIT_COUNT, WORD_COUNT, W>
{
    fn bitor_assign(&mut self, rhs: Self) {
        self.in_place_bit_or(&rhs)
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize, W: Word> BitXor
    for BitSet<BIT_COUNT, WORD_COUNT, W>
{
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.bit_xor(&rhs)
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize, W: Word> BitXorAssign
    for BitSet<BIT_COUNT, WORD_COUNT, W>
{
    fn bitxor_assign(&mut self, rhs: Self) {
        self.in_place_bit_xor(&rhs)
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize, W: Word> Not
    for BitSet<BIT_COUNT, WORD_COUNT, W>
{
    type Output = Self;

    fn not(self) -> Self::Output {
        self.bit_not()
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize, W: Word> Shl<usize>
    for BitSet<BIT_COUNT, WORD_COUNT, W>
{
    type Output = Self;

    fn shl(mut self, rhs: usize) -> Self::Output {
        self.shift_left(rhs);
        self
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize, W: Word> ShlAssign<usize>
    for BitSet<BIT_COUNT, WORD_COUNT, W>
{
    fn shl_assign(&mut self, rhs: usize) {
        self.shift_left(rhs);
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize, W: Word> Shr<usize>
    for BitSet<BIT_COUNT, WORD_COUNT, W>
{
    type Output = Self;

    fn shr(mut self, rhs: usize) -> Self::Output {
        self.shift_right(rhs);
        self
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize, W: Word> ShrAssign<usize>
    for BitSet<BIT_COUNT, WORD_COUNT, W>
{
    fn shr_assign(&mut self, rhs: usize) {
        self.shift_right(rhs);
    }
}
