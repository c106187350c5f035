//! Vowel argument codec
//!
//! Every instruction ends in a vowel. The vowel's position in [`VOWELS`]
//! selects one of the 36 unordered pairs of distinct slots, enumerated in
//! combination order: `(0,1), (0,2), ..., (0,8), (1,2), ..., (7,8)`.

use crate::store::SLOT_COUNT;

/// Number of vowel symbols, equal to C(9, 2)
pub const VOWEL_COUNT: usize = SLOT_COUNT * (SLOT_COUNT - 1) / 2;

/// The vowel inventory, in identity order.
///
/// Several entries are a base letter followed by a combining mark, so a
/// vowel is a `&str` rather than a `char`.
pub const VOWELS: [&str; VOWEL_COUNT] = [
    // close
    "i", "y", "ɨ", "ʉ", "ɯ", "u",
    // near-close
    "ɪ", "ʏ", "ɪ\u{308}", "ʊ\u{308}", "ɯ\u{33d}", "ʊ",
    // close-mid
    "e", "ø", "ɘ", "ɵ", "ɤ", "o",
    // open-mid
    "ɛ", "œ", "ɜ", "ɞ", "ʌ", "ɔ",
    // near-open
    "æ", "œ\u{31e}", "ɐ", "ɞ\u{31e}", "ʌ\u{31e}", "ɔ\u{31e}",
    // open
    "a", "ɶ", "\u{e4}", "ɒ\u{308}", "ɑ", "ɒ",
];

/// Two distinct slot indices with `low < high`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArgumentPair {
    pub low: usize,
    pub high: usize,
}

impl ArgumentPair {
    /// Create a pair, returning `None` unless `low < high < SLOT_COUNT`
    pub fn new(low: usize, high: usize) -> Option<Self> {
        (low < high && high < SLOT_COUNT).then_some(Self { low, high })
    }
}

/// All pairs, indexed by vowel position
pub const PAIRS: [ArgumentPair; VOWEL_COUNT] = build_pairs();

const fn build_pairs() -> [ArgumentPair; VOWEL_COUNT] {
    let mut pairs = [ArgumentPair { low: 0, high: 0 }; VOWEL_COUNT];
    let mut idx = 0;
    let mut low = 0;
    while low < SLOT_COUNT {
        let mut high = low + 1;
        while high < SLOT_COUNT {
            pairs[idx] = ArgumentPair { low, high };
            idx += 1;
            high += 1;
        }
        low += 1;
    }
    pairs
}

/// Decode a vowel symbol to its argument pair
pub fn decode(vowel: &str) -> Option<ArgumentPair> {
    VOWELS
        .iter()
        .position(|v| *v == vowel)
        .map(|idx| PAIRS[idx])
}

/// Encode an argument pair back to its vowel symbol
pub fn encode(pair: ArgumentPair) -> Option<&'static str> {
    PAIRS
        .iter()
        .position(|p| *p == pair)
        .map(|idx| VOWELS[idx])
}

/// Find the vowel that `text` starts with.
///
/// Returns the vowel's index and its length in bytes. A bare base letter
/// and the same letter carrying a combining mark are both prefixes of the
/// marked form; the longer one is taken.
pub fn match_prefix(text: &str) -> Option<(usize, usize)> {
    VOWELS
        .iter()
        .enumerate()
        .filter(|(_, v)| text.starts_with(**v))
        .max_by_key(|(_, v)| v.len())
        .map(|(idx, v)| (idx, v.len()))
}
