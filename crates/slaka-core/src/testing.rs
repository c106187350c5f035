//! Test utilities and helper functions for slaka tests
//!
//! This module provides common setup functions to reduce duplication across
//! test suites and make tests more readable.

use std::io::Cursor;

use crate::interpreter::Interpreter;
use crate::store::VariableStore;

/// Interpreter reading from an in-memory string and writing to a buffer
pub type TestInterpreter = Interpreter<Cursor<Vec<u8>>, Vec<u8>>;

/// Create an interpreter whose input is `input` and whose output is captured
///
/// # Examples
/// ```
/// use slaka_core::testing::interpreter_with_input;
///
/// let mut interp = interpreter_with_input("hello\n");
/// interp.run("ʔi ʔʰi").unwrap();
/// assert_eq!(interp.output().as_slice(), b"hello\n");
/// ```
pub fn interpreter_with_input(input: &str) -> TestInterpreter {
    Interpreter::with_io(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

/// Build a store with the given `(slot, value)` pairs set and the rest empty
///
/// # Examples
/// ```
/// use slaka_core::testing::primed_store;
///
/// let store = primed_store(&[(0, "a"), (8, "b")]);
/// assert_eq!(store.get(0), Some("a"));
/// assert_eq!(store.get(4), Some(""));
/// ```
pub fn primed_store(values: &[(usize, &str)]) -> VariableStore {
    let mut store = VariableStore::new();
    for (slot, value) in values {
        store.set(*slot, *value);
    }
    store
}

/// Run `code` against `input` on a fresh interpreter.
///
/// Returns the final store and everything printed.
///
/// # Examples
/// ```
/// use slaka_core::testing::run_program;
///
/// let (store, output) = run_program("ʔi ʔʰi", "x\n");
/// assert_eq!(store.get(0), Some("x\n"));
/// assert_eq!(output, "x\n");
/// ```
pub fn run_program(code: &str, input: &str) -> (VariableStore, String) {
    run_program_with_store(code, input, VariableStore::new())
}

/// Like [`run_program`], starting from an existing store
pub fn run_program_with_store(
    code: &str,
    input: &str,
    store: VariableStore,
) -> (VariableStore, String) {
    let mut interp = interpreter_with_input(input);
    *interp.store_mut() = store;
    interp
        .run(code)
        .expect("writing to an in-memory buffer cannot fail");

    let (store, _, output) = interp.into_parts();
    (store, String::from_utf8_lossy(&output).into_owned())
}
