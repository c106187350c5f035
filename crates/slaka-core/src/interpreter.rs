//! Interpreter state and I/O
//!
//! An [`Interpreter`] owns the variable store and the line-oriented input and
//! output streams that `ʔ` and `ʔʰ` talk to. Execution itself lives in
//! [`crate::dispatcher`] (scanning and applying instructions) and
//! [`crate::splitter`] (the slash-delimited entry point, [`Interpreter::run`]).

use std::io::{self, BufRead, Read, Stdin, Stdout, Write};

use tracing::{debug, warn};

use crate::operator::OperatorTable;
use crate::primitives::{ArithmeticPrimitives, StandardPrimitives};
use crate::store::VariableStore;
use crate::Result;

/// A slaka interpreter bound to an input and an output stream
pub struct Interpreter<R, W, P = StandardPrimitives> {
    pub(crate) store: VariableStore,
    pub(crate) table: &'static OperatorTable,
    pub(crate) primitives: P,
    input: R,
    output: W,
}

/// Standard input, locked only while a line is being taken from it.
///
/// Each refill moves at most one line out of stdin's shared buffer, so
/// whatever follows stays visible to other stdin readers on the thread,
/// e.g. the REPL's line editor.
#[derive(Debug)]
pub struct SharedStdin {
    stdin: Stdin,
    buf: Vec<u8>,
    pos: usize,
}

impl SharedStdin {
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
            buf: Vec::new(),
            pos: 0,
        }
    }
}

impl Default for SharedStdin {
    fn default() -> Self {
        Self::new()
    }
}

impl Read for SharedStdin {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        let available = self.fill_buf()?;
        let n = available.len().min(out.len());
        out[..n].copy_from_slice(&available[..n]);
        self.consume(n);
        Ok(n)
    }
}

impl BufRead for SharedStdin {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        if self.pos >= self.buf.len() {
            self.buf.clear();
            self.pos = 0;

            let mut lock = self.stdin.lock();
            let available = lock.fill_buf()?;
            let end = available
                .iter()
                .position(|&b| b == b'\n')
                .map_or(available.len(), |idx| idx + 1);
            self.buf.extend_from_slice(&available[..end]);
            lock.consume(end);
        }
        Ok(&self.buf[self.pos..])
    }

    fn consume(&mut self, amt: usize) {
        self.pos = (self.pos + amt).min(self.buf.len());
    }
}

impl Interpreter<SharedStdin, Stdout> {
    /// Create an interpreter reading from stdin and printing to stdout
    pub fn stdio() -> Self {
        Self::with_io(SharedStdin::new(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Interpreter<R, W> {
    /// Create an interpreter with the standard primitives
    pub fn with_io(input: R, output: W) -> Self {
        Self::with_primitives(input, output, StandardPrimitives)
    }
}

impl<R: BufRead, W: Write, P: ArithmeticPrimitives> Interpreter<R, W, P> {
    /// Create an interpreter with a custom primitives provider
    pub fn with_primitives(input: R, output: W, primitives: P) -> Self {
        Self {
            store: VariableStore::new(),
            table: OperatorTable::standard(),
            primitives,
            input,
            output,
        }
    }

    /// Current slot values
    pub fn store(&self) -> &VariableStore {
        &self.store
    }

    /// Mutable access to the slots, e.g. to seed values before a run
    pub fn store_mut(&mut self) -> &mut VariableStore {
        &mut self.store
    }

    /// Clear all slots
    pub fn reset(&mut self) {
        self.store.reset();
    }

    /// Borrow the output stream
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Take the interpreter apart, returning the store and both streams
    pub fn into_parts(self) -> (VariableStore, R, W) {
        (self.store, self.input, self.output)
    }

    /// Read one line, keeping its terminator.
    ///
    /// End of input and read failures both yield the empty string.
    pub(crate) fn read_line(&mut self) -> String {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => {
                debug!("end of input, reading empty line");
                String::new()
            }
            Ok(_) => line,
            Err(e) => {
                warn!(error = %e, "failed to read input line");
                String::new()
            }
        }
    }

    /// Write a slot's value with no separator
    pub(crate) fn print_slot(&mut self, slot: usize) -> Result<()> {
        let value = self.store.get(slot).unwrap_or_default();
        self.output.write_all(value.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }
}
