//! A fixed-capacity bitset written in pure Rust.
//! `no_std`, no heap, no `unsafe`: bits live inline in an array of words.
//!
//! [`BitSet`] is the main struct in this library. Its [features](#features)
//! are listed below.
//!
//! # Examples
//! ```
//! use packed_bitset::{BitSet, word_count};
//!
//! const BIT_COUNT: usize = 10;
//! let mut bits = BitSet::<BIT_COUNT, { word_count::<u8>(BIT_COUNT) }>::new();
//! assert_eq!(bits.count(), 0);
//! bits.set(3, true)?;
//! assert!(bits.test(3)?);
//! assert_eq!(bits.to_string(), "0000001000");
//! assert!(bits.set(10, true).is_err());
//! # Ok::<(), packed_bitset::BitSetError>(())
//! ```
//!
//! The backing word type is configurable:
//! ```
//! use packed_bitset::{BitSet, word_count};
//!
//! type Flags = BitSet<100, { word_count::<u64>(100) }, u64>;
//! let flags = Flags::from_u64(0xff) << 92;
//! assert_eq!(flags.count(), 8);
//! assert!(flags.to_u64().is_err());
//! ```
//!
//! # Features
//!
//! - `#![no_std]` compatible, `alloc` only for [`BitSet::to_string_with`]
//! - Const-generic API: `BitSet<const BIT_COUNT, const WORD_COUNT, W = u8>`
//!   with `W` one of `u8`, `u16`, `u32`, `u64`
//! - Checked (`test`, `set`, `reset`, `flip`) and panicking (`get`, `put`,
//!   indexing) bit access, plus the [`BitMut`] handle
//! - Whole-set queries: `all`, `any`, `none`, `count`
//! - Support for bitwise ops:
//!   - `&`, `|`, `^`, `!`
//!   - `<<`, `>>`
//!   - `&=`, `|=`, `^=`, `<<=`, `>>=`
//! - Integer conversion with overflow detection: `to_u32`, `to_u64`
//! - Digit strings with configurable symbols: `from_str_window`,
//!   `from_chars`, `FromStr`, `Display`
//! - Hashing through [`BitSet::fingerprint`]

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

mod bit_ref;
mod bitset;
mod error;
mod iter;
mod text;
mod word;

pub use bit_ref::BitMut;
pub use bitset::BitSet;
pub use error::BitSetError;
pub use iter::{Iter, IterOnes};
pub use word::{Word, word_count};
