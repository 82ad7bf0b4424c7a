//! Digit-string conversions.
//!
//! The textual form is most significant bit first, one character per bit,
//! with no separators and no length prefix.

use crate::bitset::BitSet;
use crate::error::{BitSetError, Result};
use crate::word::Word;
use core::fmt::{self, Debug, Display, Formatter, Write};
use core::str::FromStr;

#[cfg(feature = "alloc")]
use alloc::string::String;

impl<const BIT_COUNT: usize, const WORD_COUNT: usize, W: Word> BitSet<BIT_COUNT, WORD_COUNT, W> {
    /// Parses the window of `len` characters starting at character `pos` of
    /// `s`. `None` (or a length running past the end) means up to the end.
    ///
    /// The last character of the window becomes bit 0. At most `BIT_COUNT`
    /// characters are read, from the right; characters further left are
    /// ignored without being inspected.
    ///
    /// # Errors
    /// - [`BitSetError::OutOfRange`] if `pos` is greater than the number of
    ///   characters in `s`.
    /// - [`BitSetError::InvalidDigit`] if a consulted character is neither
    ///   `zero` nor `one`.
    ///
    /// # Examples
    /// ```
    /// use packed_bitset::{BitSet, word_count};
    ///
    /// type Bits4 = BitSet<4, { word_count::<u8>(4) }>;
    /// let bits = Bits4::from_str_window("..XOXX..", 2, Some(4), 'O', 'X')?;
    /// assert_eq!(bits.to_u64(), Ok(0b1011));
    /// # Ok::<(), packed_bitset::BitSetError>(())
    /// ```
    pub fn from_str_window(
        s: &str,
        pos: usize,
        len: Option<usize>,
        zero: char,
        one: char,
    ) -> Result<Self> {
        let char_count = s.chars().count();
        if pos > char_count {
            return Err(BitSetError::OutOfRange {
                index: pos,
                bound: char_count,
            });
        }
        let available = char_count - pos;
        let len = len.map_or(available, |len| len.min(available));
        let start = byte_offset(s, pos);
        let end = byte_offset(s, pos + len);
        Self::from_digits(s[start..end].chars().rev(), zero, one)
    }

    /// Parses the last `len` characters of a nul-terminated character
    /// sequence. The sequence ends at the first `'\0'` or at the end of `s`.
    /// `None` means the whole sequence; longer lengths are clamped to it.
    ///
    /// # Errors
    /// [`BitSetError::InvalidDigit`] if a consulted character is neither
    /// `zero` nor `one`.
    ///
    /// # Examples
    /// ```
    /// use packed_bitset::{BitSet, word_count};
    ///
    /// type Bits8 = BitSet<8, { word_count::<u8>(8) }>;
    /// let bits = Bits8::from_chars("x101\0garbage", Some(3), '0', '1')?;
    /// assert_eq!(bits.to_u64(), Ok(0b101));
    /// # Ok::<(), packed_bitset::BitSetError>(())
    /// ```
    pub fn from_chars(s: &str, len: Option<usize>, zero: char, one: char) -> Result<Self> {
        let s = s.find('\0').map_or(s, |nul| &s[..nul]);
        let available = s.chars().count();
        let len = len.map_or(available, |len| len.min(available));
        Self::from_digits(s.chars().rev().take(len), zero, one)
    }

    /// `digits` yields characters from least to most significant.
    fn from_digits<I: Iterator<Item = char>>(digits: I, zero: char, one: char) -> Result<Self> {
        let mut bs = Self::new();
        for (idx, digit) in digits.take(BIT_COUNT).enumerate() {
            if digit == one {
                bs.write_bit(idx, true);
            } else if digit != zero {
                return Err(BitSetError::InvalidDigit { digit, zero, one });
            }
        }
        Ok(bs)
    }

    /// Writes the bitset as digits, most significant bit first.
    pub fn write_digits<F: Write + ?Sized>(&self, out: &mut F, zero: char, one: char) -> fmt::Result {
        for idx in (0..BIT_COUNT).rev() {
            out.write_char(if self.bit(idx) { one } else { zero })?;
        }
        Ok(())
    }

    /// Returns the bitset as a string of `BIT_COUNT` digits, most significant
    /// bit first.
    ///
    /// # Examples
    /// ```
    /// use packed_bitset::{BitSet, word_count};
    ///
    /// let bits = BitSet::<6, { word_count::<u8>(6) }>::from_u64(0b110010);
    /// assert_eq!(bits.to_string_with('O', 'X'), "XXOOXO");
    /// ```
    #[cfg(feature = "alloc")]
    pub fn to_string_with(&self, zero: char, one: char) -> String {
        let mut out = String::with_capacity(BIT_COUNT);
        // writing into a String never fails
        let _ = self.write_digits(&mut out, zero, one);
        out
    }
}

/// Char index to byte offset, `s.len()` when past the end.
fn byte_offset(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map_or(s.len(), |(offset, _)| offset)
}

/// Parses a string of `'0'` and `'1'` digits, most significant first.
///
/// # Examples
/// ```
/// use packed_bitset::{BitSet, word_count};
///
/// let bits: BitSet<6, { word_count::<u8>(6) }> = "110010".parse()?;
/// assert!(bits.iter().eq([false, true, false, false, true, true]));
/// # Ok::<(), packed_bitset::BitSetError>(())
/// ```
impl<const BIT_COUNT: usize, const WORD_COUNT: usize, W: Word> FromStr
    for BitSet<BIT_COUNT, WORD_COUNT, W>
{
    type Err = BitSetError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_window(s, 0, None, '0', '1')
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize, W: Word> Display
    for BitSet<BIT_COUNT, WORD_COUNT, W>
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_digits(f, '0', '1')
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize, W: Word> Debug
    for BitSet<BIT_COUNT, WORD_COUNT, W>
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "LSB -> ")?;
        for (i, bit) in self.iter().enumerate() {
            if i % W::BITS == 0 {
                write!(f, "{i}: ")?;
            }
            write!(f, "{}", if bit { '1' } else { '0' })?;
            if i % W::BITS == W::BITS - 1 && i < BIT_COUNT - 1 {
                write!(f, " ")?;
            }
        }
        write!(f, " <- MSB")?;
        Ok(())
    }
}
