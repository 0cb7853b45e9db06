//! Recognizers for long brackets, i.e. `[` + `=`×n + `[` ... `]` + `=`×n + `]`.
use log::trace;

use crate::Cursor;

use super::scan_body;

/// Scans a long-bracket opener and returns its level.
///
/// Openers with more than `max_level` level markers are rejected. On failure the consumed
/// characters are not given back.
pub(crate) fn scan_block_start<C: Cursor>(cursor: &mut C, max_level: u8) -> Option<u8> {
    if !cursor.eat('[') {
        return None;
    }
    let level = cursor.eat_run('=');
    if !cursor.eat('[') {
        trace!("No long-bracket opener after {} level markers", level);
        return None;
    }
    match u8::try_from(level) {
        Ok(level) if level <= max_level => Some(level),
        _ => {
            trace!("Long-bracket level {} exceeds {}", level, max_level);
            None
        }
    }
}

/// Scans a long-bracket closer of exactly the given level.
pub(crate) fn scan_block_end<C: Cursor>(cursor: &mut C, level: u8) -> bool {
    cursor.eat(']') && cursor.eat_run('=') == usize::from(level) && cursor.eat(']')
}

/// Scans a long-bracket body up to the closer of the given level.
///
/// Closers of a different level are part of the body. Fails at the end of the input.
pub(crate) fn scan_block_content<C: Cursor>(cursor: &mut C, level: u8) -> bool {
    scan_body(cursor, ']', |cursor| scan_block_end(cursor, level))
}
