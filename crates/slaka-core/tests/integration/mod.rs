//! Integration tests for running slaka programs end to end

mod activation_tests;
mod noise_tests;
mod program_tests;

use slaka_core::{Interpreter, VariableStore};
use std::io::Cursor;

/// Run `code` on a fresh interpreter fed with `input`
pub fn run(code: &str, input: &str) -> (VariableStore, String) {
    let mut interp = Interpreter::with_io(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    interp.run(code).unwrap();
    let (store, _, output) = interp.into_parts();
    (store, String::from_utf8(output).unwrap())
}
