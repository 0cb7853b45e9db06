//! The loop shared by all content recognizers.
use log::trace;

use crate::Cursor;

/// Consumes a body verbatim up to the first `opener` that starts a successful closing sequence.
///
/// Before each closing attempt the token end is marked, so on success the body token ends right
/// before the closing sequence. A failed attempt leaves the characters it consumed in the body.
/// `try_close` must consume `opener` first, otherwise the loop doesn't make progress.
///
/// Returns false if the input ends before a closing sequence was found.
pub(crate) fn scan_body<C, F>(cursor: &mut C, opener: char, mut try_close: F) -> bool
where
    C: Cursor,
    F: FnMut(&mut C) -> bool,
{
    while let Some(c) = cursor.lookahead() {
        if c == opener {
            cursor.mark_end();
            if try_close(cursor) {
                return true;
            }
            trace!("{:?} doesn't close the body, continue", opener);
        } else {
            cursor.advance();
        }
    }
    trace!("Unterminated body");
    false
}
