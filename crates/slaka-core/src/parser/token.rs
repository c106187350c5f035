//! Token definitions for slaka source

use std::fmt;

use crate::operator::Operation;
use crate::vowel::ArgumentPair;

/// A token with its position in the source
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    /// The kind of token
    pub kind: TokenKind,
    /// The source text for this token
    pub text: &'a str,
    /// Byte offset of the token start
    pub offset: usize,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number in characters (1-indexed)
    pub column: usize,
}

impl<'a> Token<'a> {
    /// Create a new token
    pub fn new(kind: TokenKind, text: &'a str, offset: usize, line: usize, column: usize) -> Self {
        Self {
            kind,
            text,
            offset,
            line,
            column,
        }
    }

    /// Check if this token does anything when executed
    pub fn is_instruction(&self) -> bool {
        matches!(self.kind, TokenKind::Instruction { .. })
    }
}

/// The kind of token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// An operator phoneme followed by a vowel
    Instruction {
        operation: Operation,
        pair: ArgumentPair,
    },
    /// A single character that starts no instruction
    Noise,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Instruction { operation, pair } => match operation {
                Operation::Binary { primitive, .. } => {
                    let (left, right) = operation.operand_slots(*pair);
                    let target = operation.target_slot(*pair);
                    write!(f, "{} := {}({}, {})", target, primitive, left, right)
                }
                Operation::ReadLine => write!(f, "read {}", operation.io_slot(*pair)),
                Operation::Print => write!(f, "print {}", operation.io_slot(*pair)),
            },
            TokenKind::Noise => write!(f, "noise"),
        }
    }
}
