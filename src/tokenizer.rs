//! Group tokenizer for raw report text.
//!
//! Splits a report into its space-delimited groups and exposes a
//! front-to-back cursor. Groups are never re-ordered and the only
//! lookahead is [`Tokenizer::peek`].

use std::collections::VecDeque;

/// Cursor over the space-delimited groups of a raw report
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    tokens: VecDeque<String>,
}

impl Tokenizer {
    /// Split a raw report on single spaces, dropping the empty groups
    /// produced by repeated, leading or trailing spaces
    pub fn new(raw: &str) -> Self {
        let tokens = raw
            .split(' ')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect();

        Self { tokens }
    }

    /// Next group without consuming it
    pub fn peek(&self) -> Option<&str> {
        self.tokens.front().map(String::as_str)
    }

    /// Consume and return the next group
    pub fn pop(&mut self) -> Option<String> {
        self.tokens.pop_front()
    }

    /// Consume and discard the next group; no-op when empty
    pub fn skip(&mut self) {
        self.tokens.pop_front();
    }

    /// Consume groups up to (not including) the first one matching `predicate`,
    /// or to the end when none matches
    pub fn consume_until<P>(&mut self, mut predicate: P) -> Vec<String>
    where
        P: FnMut(&str) -> bool,
    {
        let count = self
            .tokens
            .iter()
            .position(|token| predicate(token))
            .unwrap_or(self.tokens.len());

        self.tokens.drain(..count).collect()
    }

    /// Consume groups while `predicate` holds, stopping at the first one that fails it
    pub fn consume_while<P>(&mut self, mut predicate: P) -> Vec<String>
    where
        P: FnMut(&str) -> bool,
    {
        self.consume_until(|token| !predicate(token))
    }

    /// Consume and return every remaining group
    pub fn remaining(&mut self) -> Vec<String> {
        self.tokens.drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }
}
