//! Lexer for slaka source
//!
//! At every position the lexer tries each operator key in table order. A key
//! only matches when a vowel follows it immediately, which is what keeps `s`
//! from swallowing the start of `sʰ`. Anything that is not the start of an
//! instruction comes out as a one-character [`TokenKind::Noise`] token.

use super::token::{Token, TokenKind};
use crate::operator::OperatorTable;
use crate::vowel::{self, PAIRS};

/// Lazy tokenizer over a code string
pub struct Lexer<'a> {
    input: &'a str,
    table: &'a OperatorTable,
    position: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    /// Create a lexer using the standard operator table
    pub fn new(input: &'a str) -> Self {
        Self::with_table(input, OperatorTable::standard())
    }

    /// Create a lexer using a specific operator table
    pub fn with_table(input: &'a str, table: &'a OperatorTable) -> Self {
        Self {
            input,
            table,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Get the next token, or `None` at end of input
    pub fn next_token(&mut self) -> Option<Token<'a>> {
        if self.is_at_end() {
            return None;
        }

        if let Some(token) = self.lex_instruction() {
            return Some(token);
        }

        Some(self.lex_noise())
    }

    /// Tokenize all remaining input
    pub fn tokenize(&mut self) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens
    }

    fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn lex_instruction(&mut self) -> Option<Token<'a>> {
        let rest = self.rest();
        let table = self.table;

        let (entry, vowel_idx, len) = table.iter().find_map(|entry| {
            let after_key = rest.strip_prefix(entry.key.as_str())?;
            let (vowel_idx, vowel_len) = vowel::match_prefix(after_key)?;
            Some((entry, vowel_idx, entry.key.len() + vowel_len))
        })?;

        let kind = TokenKind::Instruction {
            operation: entry.operation,
            pair: PAIRS[vowel_idx],
        };
        Some(self.make_token(kind, len))
    }

    fn lex_noise(&mut self) -> Token<'a> {
        // position is always on a char boundary, and not at end
        let len = self.rest().chars().next().map_or(1, char::len_utf8);
        self.make_token(TokenKind::Noise, len)
    }

    fn make_token(&mut self, kind: TokenKind, len: usize) -> Token<'a> {
        let start = self.position;
        let text = &self.input[start..start + len];
        let token = Token::new(kind, text, start, self.line, self.column);

        for ch in text.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.position += len;

        token
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
