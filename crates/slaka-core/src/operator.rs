//! Operator table
//!
//! Each consonant names an operation. Voicing picks the operand order and
//! aspiration (`ʰ`) picks which slot of the pair receives the result, so a
//! family of four keys covers every combination for one primitive:
//!
//! | Key    | Target | Operands      |
//! |--------|--------|---------------|
//! | `u`    | low    | (low, high)   |
//! | `uʰ`   | high   | (low, high)   |
//! | `v`    | low    | (high, low)   |
//! | `vʰ`   | high   | (high, low)   |
//!
//! The glottal stop is the odd one out: `ʔ` reads a line into the low slot
//! of the pair and `ʔʰ` prints it.

use std::sync::LazyLock;

use crate::primitives::Primitive;
use crate::vowel::ArgumentPair;

/// Aspiration marker appended to a consonant
pub const ASPIRATE: char = 'ʰ';

/// Glottal stop, the I/O consonant
pub const GLOTTAL_STOP: char = 'ʔ';

/// Operator families: (unvoiced, voiced, primitive)
pub const FAMILIES: [(char, char, Primitive); 5] = [
    ('c', 'ɟ', Primitive::Concat),
    ('s', 'z', Primitive::Add),      // sum
    ('t', 'd', Primitive::Subtract), // difference
    ('p', 'b', Primitive::Multiply), // product
    ('q', 'ɢ', Primitive::Divide),   // quotient
];

/// Which slot of the pair an operation writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Low,
    High,
}

/// Order in which the pair's slots are passed to a primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandOrder {
    /// `(low, high)`
    LowHigh,
    /// `(high, low)`
    HighLow,
}

/// What an operator does once its vowel is decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Apply a primitive to two slots and store the result
    Binary {
        primitive: Primitive,
        target: Target,
        order: OperandOrder,
    },
    /// Read a line into a slot
    ReadLine,
    /// Write a slot to output
    Print,
}

impl Operation {
    /// Slot written by a binary operation
    pub fn target_slot(&self, pair: ArgumentPair) -> usize {
        match self {
            Operation::Binary {
                target: Target::High,
                ..
            } => pair.high,
            _ => pair.low,
        }
    }

    /// Slots passed to a binary operation, as `(left, right)`
    pub fn operand_slots(&self, pair: ArgumentPair) -> (usize, usize) {
        match self {
            Operation::Binary {
                order: OperandOrder::HighLow,
                ..
            } => (pair.high, pair.low),
            _ => (pair.low, pair.high),
        }
    }

    /// The single slot used by `ReadLine` and `Print`
    pub fn io_slot(&self, pair: ArgumentPair) -> usize {
        pair.low
    }
}

/// One phoneme key and its operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorEntry {
    pub key: String,
    pub operation: Operation,
}

/// Immutable map from phoneme keys to operations, in construction order
#[derive(Debug, Clone)]
pub struct OperatorTable {
    entries: Vec<OperatorEntry>,
}

static STANDARD_TABLE: LazyLock<OperatorTable> = LazyLock::new(OperatorTable::build);

impl OperatorTable {
    /// The shared table, built on first use
    pub fn standard() -> &'static OperatorTable {
        &STANDARD_TABLE
    }

    fn build() -> Self {
        let mut entries = Vec::with_capacity(2 + FAMILIES.len() * 4);

        entries.push(OperatorEntry {
            key: GLOTTAL_STOP.to_string(),
            operation: Operation::ReadLine,
        });
        entries.push(OperatorEntry {
            key: aspirated(GLOTTAL_STOP),
            operation: Operation::Print,
        });

        for (unvoiced, voiced, primitive) in FAMILIES {
            let variants = [
                (unvoiced.to_string(), Target::Low, OperandOrder::LowHigh),
                (aspirated(unvoiced), Target::High, OperandOrder::LowHigh),
                (voiced.to_string(), Target::Low, OperandOrder::HighLow),
                (aspirated(voiced), Target::High, OperandOrder::HighLow),
            ];
            for (key, target, order) in variants {
                entries.push(OperatorEntry {
                    key,
                    operation: Operation::Binary {
                        primitive,
                        target,
                        order,
                    },
                });
            }
        }

        Self { entries }
    }

    /// Look up the operation for a phoneme key
    pub fn lookup(&self, key: &str) -> Option<&OperatorEntry> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    /// Iterate entries in construction order
    pub fn iter(&self) -> impl Iterator<Item = &OperatorEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn aspirated(consonant: char) -> String {
    let mut key = String::with_capacity(consonant.len_utf8() + ASPIRATE.len_utf8());
    key.push(consonant);
    key.push(ASPIRATE);
    key
}
