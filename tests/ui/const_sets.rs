use packed_bitset::{BitSet, word_count};

const BYTES: BitSet<13, { word_count::<u8>(13) }> = BitSet::const_empty();
const HALVES: BitSet<13, { word_count::<u16>(13) }, u16> = BitSet::const_empty();
const WORDS: BitSet<70, { word_count::<u32>(70) }, u32> = BitSet::const_empty();
const LONGS: BitSet<129, { word_count::<u64>(129) }, u64> = BitSet::const_empty();

fn main() {
    assert!(BYTES.none());
    assert!(HALVES.none());
    assert!(WORDS.none());
    assert!(LONGS.none());
    assert_eq!(LONGS.size(), 129);
}
