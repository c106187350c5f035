//! Source scanning
//!
//! slaka has no grammar beyond single instructions, so "parsing" is a
//! lexer that splits code into instruction and noise tokens.

pub mod lexer;
pub mod token;

pub use lexer::Lexer;
pub use token::{Token, TokenKind};
