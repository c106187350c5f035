//! slaka interpreter engine
//!
//! A slaka program is a string of instructions, each an operator consonant
//! followed by a vowel. The consonant picks an operation, the vowel picks two
//! of nine string slots. Everything else in the source is ignored, and text
//! between slashes alternates between active code and comment.
//!
//! ```
//! use slaka_core::Interpreter;
//!
//! let mut output = Vec::new();
//! let mut interp = Interpreter::with_io(&b"5\n"[..], &mut output);
//! // read into slot 0, add slot 0 into slot 1 twice, print slot 1
//! interp.run("ʔi sʰi sʰi ʔʰɪ\u{308}").unwrap();
//! drop(interp);
//! assert_eq!(output, b"10");
//! ```

pub mod dispatcher;
pub mod interpreter;
pub mod operator;
pub mod parser;
pub mod primitives;
pub mod source;
pub mod splitter;
pub mod store;
pub mod vowel;

// Test utilities (available in tests and when used with the `testing` feature)
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use interpreter::{Interpreter, SharedStdin};
pub use operator::{OperatorEntry, OperatorTable, Operation};
pub use primitives::{ArithmeticPrimitives, Primitive, StandardPrimitives};
pub use store::{VariableStore, SLOT_COUNT};
pub use vowel::ArgumentPair;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read program {}: {source}", .path.display())]
    SourceError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
