//! Slash-delimited activation
//!
//! Code containing `/` is cut at every slash. Whatever precedes the first
//! slash and follows the last one never runs. The fragments in between
//! alternate active, inert, active, ... so `/code/comment/code/` runs both
//! `code` parts and skips `comment`. Code without any slash runs as-is.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::interpreter::Interpreter;
use crate::primitives::ArithmeticPrimitives;
use crate::Result;

/// Segment delimiter
pub const DELIMITER: char = '/';

/// Whether a fragment between two slashes is executed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Active,
    Inert,
}

/// Interior fragments of `code`, each tagged with its activation.
///
/// Returns nothing for code with fewer than two slashes.
pub fn fragments(code: &str) -> Vec<(Activation, &str)> {
    let parts: Vec<&str> = code.split(DELIMITER).collect();
    if parts.len() < 3 {
        return Vec::new();
    }

    parts[1..parts.len() - 1]
        .iter()
        .enumerate()
        .map(|(idx, part)| {
            let activation = if idx % 2 == 0 {
                Activation::Active
            } else {
                Activation::Inert
            };
            (activation, *part)
        })
        .collect()
}

impl<R: BufRead, W: Write, P: ArithmeticPrimitives> Interpreter<R, W, P> {
    /// Run a program.
    ///
    /// Program content never produces an error; the only failure is the
    /// output stream refusing a write.
    pub fn run(&mut self, code: &str) -> Result<()> {
        if !code.contains(DELIMITER) {
            return self.execute(code);
        }

        for (idx, (activation, fragment)) in fragments(code).into_iter().enumerate() {
            match activation {
                Activation::Active => {
                    debug!(fragment = idx, len = fragment.len(), "running active fragment");
                    self.run(fragment)?;
                }
                Activation::Inert => {
                    debug!(fragment = idx, len = fragment.len(), "skipping inert fragment");
                }
            }
        }
        Ok(())
    }
}
