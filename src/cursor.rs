//! Module with the cursor abstraction the scanner reads its characters from.

/// A forward-only character stream supplied by the driver.
///
/// The scanner never rewinds a cursor. A token produced by a scan call starts at the position
/// the call began at (moved forward by [Cursor::skip]) and ends at the last [Cursor::mark_end]
/// position, or at the current position if `mark_end` was never called. If a scan call produces
/// no token the driver is responsible for restoring its position.
///
/// The last `mark_end` before a failed closing attempt acts as the checkpoint of a bounded
/// lookahead: whatever the attempt consumed beyond it belongs to the next token.
pub trait Cursor {
    /// The next unconsumed character, `None` at the end of the input.
    fn lookahead(&self) -> Option<char>;

    /// Consumes the lookahead character as part of the current token.
    fn advance(&mut self);

    /// Consumes the lookahead character as insignificant whitespace.
    fn skip(&mut self);

    /// Marks the current position as the end of the token being produced.
    fn mark_end(&mut self);

    /// Returns true if the whole input has been consumed.
    #[inline]
    fn is_eof(&self) -> bool {
        self.lookahead().is_none()
    }

    /// Consumes the lookahead if it equals `c`.
    #[inline]
    fn eat(&mut self, c: char) -> bool {
        if self.lookahead() == Some(c) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes a run of `c` and returns its length.
    #[inline]
    fn eat_run(&mut self, c: char) -> usize {
        let mut count = 0;
        while self.eat(c) {
            count += 1;
        }
        count
    }

    /// Consumes characters while the predicate holds.
    #[inline]
    fn eat_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.lookahead().is_some_and(&predicate) {
            self.advance();
        }
    }

    /// Skips characters while the predicate holds.
    #[inline]
    fn skip_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.lookahead().is_some_and(&predicate) {
            self.skip();
        }
    }
}
