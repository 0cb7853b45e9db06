//! A cursor over string slices with the token bookkeeping of incremental parsers.
use log::trace;

use crate::{Cursor, Span};

/// A [Cursor] over a string slice.
///
/// The cursor follows the conventions of incremental parsing frameworks: a driver calls
/// [StrCursor::begin_token] before a scan call and either [StrCursor::finish_token] or
/// [StrCursor::rewind] after it.
///
/// * `'h` represents the lifetime of the text being scanned.
#[derive(Debug, Clone)]
pub struct StrCursor<'h> {
    input: &'h str,
    // Byte offset of the lookahead character.
    position: usize,
    // Where the current scan call began.
    scan_start: usize,
    // Where the current token begins, moved forward by skipped characters.
    token_start: usize,
    marked_end: Option<usize>,
}

impl<'h> StrCursor<'h> {
    /// Creates a cursor at the start of the input.
    pub fn new(input: &'h str) -> Self {
        Self {
            input,
            position: 0,
            scan_start: 0,
            token_start: 0,
            marked_end: None,
        }
    }

    /// The text being scanned.
    #[inline]
    pub fn input(&self) -> &'h str {
        self.input
    }

    /// The byte offset of the lookahead character.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Starts a new token at the current position.
    pub fn begin_token(&mut self) {
        self.scan_start = self.position;
        self.token_start = self.position;
        self.marked_end = None;
    }

    /// Finishes the token of a successful scan call and returns its span.
    ///
    /// The token ends at the last marked position, or at the current position if no end was
    /// marked. Scanning continues right behind the token.
    pub fn finish_token(&mut self) -> Span {
        let end = self.marked_end.unwrap_or(self.position).max(self.token_start);
        let span = Span::new(self.token_start, end);
        trace!("Finish token {}", span);
        self.position = end;
        span
    }

    /// Returns to the position the last scan call began at.
    pub fn rewind(&mut self) {
        trace!("Rewind from {} to {}", self.position, self.scan_start);
        self.position = self.scan_start;
        self.token_start = self.scan_start;
        self.marked_end = None;
    }

    /// Moves past the lookahead character outside of any token. Drivers use this to hand a
    /// character over to their own tokenization.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.lookahead()?;
        self.position += c.len_utf8();
        self.begin_token();
        Some(c)
    }
}

impl Cursor for StrCursor<'_> {
    #[inline]
    fn lookahead(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    #[inline]
    fn advance(&mut self) {
        if let Some(c) = self.lookahead() {
            self.position += c.len_utf8();
        }
    }

    #[inline]
    fn skip(&mut self) {
        self.advance();
        self.token_start = self.position;
    }

    #[inline]
    fn mark_end(&mut self) {
        self.marked_end = Some(self.position);
    }
}
