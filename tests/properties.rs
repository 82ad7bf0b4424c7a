//! Property-based tests for BitSet, checked against a `u128` model.

use packed_bitset::{BitSet, BitSetError, word_count};
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

const BITS: usize = 100;

type Bits8 = BitSet<BITS, { word_count::<u8>(BITS) }, u8>;
type Bits32 = BitSet<BITS, { word_count::<u32>(BITS) }, u32>;
type Bits64 = BitSet<BITS, { word_count::<u64>(BITS) }, u64>;
type Wide = BitSet<128, { word_count::<u64>(128) }, u64>;

const MASK: u128 = (1 << BITS) - 1;

fn model(bits: &Bits32) -> u128 {
    bits.iter_ones().fold(0, |acc, idx| acc | 1 << idx)
}

fn build<const B: usize, const C: usize, W: packed_bitset::Word>(value: u128) -> BitSet<B, C, W> {
    BitSet::from_ones_iter((0..B.min(128)).filter(|idx| value >> idx & 1 == 1))
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

//
// -----------------------------------------------------------------------------
// Bit access
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_set_and_clear_leave_other_bits(value: u128, idx in 0usize..BITS) {
        let mut bits: Bits32 = build(value);
        let before = model(&bits);

        bits.set(idx, true).unwrap();
        prop_assert_eq!(bits.test(idx), Ok(true));
        prop_assert_eq!(model(&bits), before | 1 << idx);

        bits.set(idx, false).unwrap();
        prop_assert_eq!(bits.test(idx), Ok(false));
        prop_assert_eq!(model(&bits), before & !(1 << idx));
    }
}

proptest! {
    #[test]
    fn prop_checked_access_rejects_out_of_range(idx in BITS..10_000usize) {
        let mut bits = Bits8::with_all_set();
        let err = BitSetError::OutOfRange { index: idx, bound: BITS };
        prop_assert_eq!(bits.test(idx), Err(err));
        prop_assert_eq!(bits.set(idx, false).map(|_| ()), Err(err));
        prop_assert_eq!(bits.flip(idx).map(|_| ()), Err(err));
        prop_assert!(bits.all());
    }
}

proptest! {
    #[test]
    fn prop_count_matches_distinct_indices(
        indices in prop::collection::btree_set(0usize..BITS, 0..64)
    ) {
        let bits = Bits64::from_ones_iter(indices.iter().copied());
        prop_assert_eq!(bits.count(), indices.len());
        prop_assert!(bits.iter_ones().eq(indices.iter().copied()));
        prop_assert_eq!(bits.none(), indices.is_empty());
        prop_assert!(!bits.all());
    }
}

//
// -----------------------------------------------------------------------------
// Bulk mutation and bitwise combination
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_flip_all_is_an_involution(value: u128) {
        let original: Bits8 = build(value);
        let mut bits = original;
        bits.flip_all();
        prop_assert_eq!(bits.count(), BITS - original.count());
        bits.flip_all();
        prop_assert_eq!(bits, original);
    }
}

proptest! {
    #[test]
    fn prop_bitwise_ops_match_model(a: u128, b: u128) {
        let (x, y): (Bits32, Bits32) = (build(a), build(b));
        let (a, b) = (a & MASK, b & MASK);
        prop_assert_eq!(model(&(x & y)), a & b);
        prop_assert_eq!(model(&(x | y)), a | b);
        prop_assert_eq!(model(&(x ^ y)), a ^ b);
        prop_assert_eq!(model(&!x), !a & MASK);
    }
}

//
// -----------------------------------------------------------------------------
// Shifts
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_shifts_match_model(value: u128, n in 0usize..2 * BITS) {
        let bits: Bits32 = build(value);
        let value = value & MASK;
        let left = if n >= BITS { 0 } else { (value << n) & MASK };
        let right = if n >= BITS { 0 } else { value >> n };
        prop_assert_eq!(model(&(bits << n)), left);
        prop_assert_eq!(model(&(bits >> n)), right);
    }
}

proptest! {
    #[test]
    fn prop_shift_composition(value: u128, a in 0usize..BITS, b in 0usize..BITS) {
        prop_assume!(a + b < BITS);
        let bits: Bits8 = build(value);
        prop_assert_eq!((bits << a) << b, bits << (a + b));
        prop_assert_eq!((bits >> a) >> b, bits >> (a + b));
        prop_assert_eq!(bits << 0, bits);
        prop_assert!((bits << (BITS + a)).none());
    }
}

proptest! {
    #[test]
    fn prop_word_width_does_not_change_semantics(value: u128, n in 0usize..BITS) {
        let narrow: Bits8 = build(value);
        let wide: Bits64 = build(value);
        prop_assert_eq!((narrow << n).to_string(), (wide << n).to_string());
        prop_assert_eq!((narrow >> n).to_string(), (wide >> n).to_string());
        prop_assert_eq!((!narrow).to_string(), (!wide).to_string());
    }
}

//
// -----------------------------------------------------------------------------
// Conversions, equality and hashing
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_string_roundtrip(value: u128) {
        let bits: Bits32 = build(value);
        let text = bits.to_string();
        prop_assert_eq!(text.len(), BITS);
        prop_assert_eq!(text.parse::<Bits32>(), Ok(bits));

        let alt = bits.to_string_with('O', 'X');
        prop_assert_eq!(Bits32::from_str_window(&alt, 0, None, 'O', 'X'), Ok(bits));
    }
}

proptest! {
    #[test]
    fn prop_to_u64_overflows_iff_high_bits_set(value: u128) {
        let bits: Wide = build(value);
        match u64::try_from(value) {
            Ok(low) => prop_assert_eq!(bits.to_u64(), Ok(low)),
            Err(_) => prop_assert_eq!(bits.to_u64(), Err(BitSetError::Overflow { width: 64 })),
        }
        prop_assert_eq!(Wide::from_u64(value as u64).to_u64(), Ok(value as u64));
    }
}

proptest! {
    #[test]
    fn prop_equal_patterns_hash_equal(value: u128, idx in 0usize..BITS) {
        let from_indices: Bits64 = build(value);
        let from_text: Bits64 = from_indices.to_string().parse().unwrap();
        prop_assert_eq!(from_indices, from_text);
        prop_assert_eq!(hash_of(&from_indices), hash_of(&from_text));
        prop_assert_eq!(from_indices.fingerprint(), from_text.fingerprint());

        let mut other = from_indices;
        other.flip(idx).unwrap();
        prop_assert_ne!(from_indices, other);
    }
}
