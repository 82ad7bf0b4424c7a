use thiserror::Error;

/// Errors reported by the checked operations of [`BitSet`](crate::BitSet).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BitSetError {
    /// A bit index or string offset exceeded its bound.
    #[error("index {index} is out of range for bound {bound}")]
    OutOfRange {
        /// The offending index or offset.
        index: usize,
        /// The exclusive bound for bit indices, inclusive for string offsets.
        bound: usize,
    },

    /// A consulted character was neither the zero nor the one symbol.
    #[error("unexpected character {digit:?} is neither zero ({zero:?}) nor one ({one:?})")]
    InvalidDigit {
        /// The rejected character.
        digit: char,
        /// The configured zero symbol.
        zero: char,
        /// The configured one symbol.
        one: char,
    },

    /// An integer conversion found set bits at or beyond `width`.
    #[error("bitset does not fit in {width} bits")]
    Overflow {
        /// Width of the target integer type.
        width: u32,
    },
}

pub(crate) type Result<T> = core::result::Result<T, BitSetError>;
