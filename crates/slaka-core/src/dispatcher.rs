//! Instruction dispatch
//!
//! Scans slash-free code left to right and applies each instruction to the
//! interpreter's store as soon as it is recognized. Unrecognized characters
//! are dropped one at a time; there is no such thing as a syntax error.

use std::io::{BufRead, Write};

use tracing::trace;

use crate::interpreter::Interpreter;
use crate::operator::Operation;
use crate::parser::{Lexer, TokenKind};
use crate::primitives::ArithmeticPrimitives;
use crate::vowel::ArgumentPair;
use crate::Result;

impl<R: BufRead, W: Write, P: ArithmeticPrimitives> Interpreter<R, W, P> {
    /// Execute code without looking at slashes.
    ///
    /// `/` is treated like any other unrecognized character. Use
    /// [`Interpreter::run`] for the full language.
    pub fn execute(&mut self, code: &str) -> Result<()> {
        for token in Lexer::with_table(code, self.table) {
            match token.kind {
                TokenKind::Instruction { operation, pair } => {
                    trace!(
                        offset = token.offset,
                        line = token.line,
                        column = token.column,
                        op = %token.kind,
                        "dispatch"
                    );
                    self.apply(operation, pair)?;
                }
                TokenKind::Noise => {
                    trace!(
                        offset = token.offset,
                        line = token.line,
                        column = token.column,
                        text = token.text,
                        "discard"
                    );
                }
            }
        }
        Ok(())
    }

    /// Apply one decoded instruction
    pub fn apply(&mut self, operation: Operation, pair: ArgumentPair) -> Result<()> {
        match operation {
            Operation::Binary { primitive, .. } => {
                let (left, right) = operation.operand_slots(pair);
                let result = self
                    .primitives
                    .apply(primitive, &self.store[left], &self.store[right]);
                self.store.set(operation.target_slot(pair), result);
            }
            Operation::ReadLine => {
                let line = self.read_line();
                self.store.set(operation.io_slot(pair), line);
            }
            Operation::Print => self.print_slot(operation.io_slot(pair))?,
        }
        Ok(())
    }
}
