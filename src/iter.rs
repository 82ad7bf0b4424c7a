use crate::word::Word;
use core::iter::{FusedIterator, Iterator};

/// Iterator over all bits in the bitset as `bool` values.
///
/// Yields `true` for set bits and `false` for unset bits, starting from index 0.
///
/// Returned by [`BitSet::iter()`](crate::BitSet::iter).
#[derive(Clone, Copy)]
pub struct Iter<'bitset, const BIT_COUNT: usize, const WORD_COUNT: usize, W: Word> {
    words: &'bitset [W; WORD_COUNT],
    word_idx: usize,
    bit_idx: usize,
}

impl<'bitset, const BIT_COUNT: usize, const WORD_COUNT: usize, W: Word>
    Iter<'bitset, BIT_COUNT, WORD_COUNT, W>
{
    pub(crate) fn new(words: &'bitset [W; WORD_COUNT]) -> Self {
        Self {
            words,
            word_idx: 0,
            bit_idx: 0,
        }
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize, W: Word> Iterator
    for Iter<'_, BIT_COUNT, WORD_COUNT, W>
{
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        let absolute_idx = self.word_idx * W::BITS + self.bit_idx;
        if absolute_idx >= BIT_COUNT {
            return None;
        }
        let bit = self.words[self.word_idx] & W::bit(self.bit_idx);
        self.bit_idx += 1;
        if self.bit_idx == W::BITS {
            self.bit_idx = 0;
            self.word_idx += 1;
        }
        Some(bit != W::ZERO)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = BIT_COUNT.saturating_sub(self.word_idx * W::BITS + self.bit_idx);
        (left, Some(left))
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize, W: Word> ExactSizeIterator
    for Iter<'_, BIT_COUNT, WORD_COUNT, W>
{
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize, W: Word> FusedIterator
    for Iter<'_, BIT_COUNT, WORD_COUNT, W>
{
}

/// Iterator over the indices of set bits in the bitset.
///
/// Yields the positions of all bits that are set, in ascending order.
///
/// Returned by [`BitSet::iter_ones()`](crate::BitSet::iter_ones).
#[derive(Clone, Copy)]
pub struct IterOnes<'bitset, const BIT_COUNT: usize, const WORD_COUNT: usize, W: Word> {
    words: &'bitset [W; WORD_COUNT],
    word_idx: usize,
    current: W,
    base_bit_idx: usize,
}

impl<'bitset, const BIT_COUNT: usize, const WORD_COUNT: usize, W: Word>
    IterOnes<'bitset, BIT_COUNT, WORD_COUNT, W>
{
    pub(crate) fn new(words: &'bitset [W; WORD_COUNT]) -> Self {
        Self {
            words,
            word_idx: 0,
            current: words[0],
            base_bit_idx: 0,
        }
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize, W: Word> Iterator
    for IterOnes<'_, BIT_COUNT, WORD_COUNT, W>
{
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.word_idx < WORD_COUNT {
            if self.current != W::ZERO {
                let tz = self.current.trailing_zeros() as usize;
                self.current &= !W::bit(tz); // unset LSB
                return Some(self.base_bit_idx + tz);
            }

            self.word_idx += 1;
            self.base_bit_idx += W::BITS;
            self.current = self.words.get(self.word_idx).copied().unwrap_or(W::ZERO);
        }
        None
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize, W: Word> FusedIterator
    for IterOnes<'_, BIT_COUNT, WORD_COUNT, W>
{
}
