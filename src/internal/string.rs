//! Recognizers for quoted and long-bracket strings.
use log::trace;

use crate::{Cursor, ScanContext, ScannerState};

use super::{scan_block_content, scan_block_end, scan_block_start};

/// Scans a string opener, either a quote or a long-bracket opener, and opens the matching
/// context.
pub(crate) fn scan_string_start<C: Cursor>(
    cursor: &mut C,
    state: &mut ScannerState,
    max_level: u8,
) -> bool {
    if let Some(quote @ ('"' | '\'')) = cursor.lookahead() {
        cursor.advance();
        state.open_quote(quote);
        return true;
    }
    match scan_block_start(cursor, max_level) {
        Some(level) => {
            state.open_long_bracket(level);
            true
        }
        None => false,
    }
}

/// Scans the terminator of the open string.
pub(crate) fn scan_string_end<C: Cursor>(cursor: &mut C, state: &ScannerState) -> bool {
    match state.context() {
        ScanContext::QuoteString(quote) => cursor.eat(quote),
        ScanContext::Idle => scan_block_end(cursor, 0),
        ScanContext::LongBracket(level) => scan_block_end(cursor, level),
        ScanContext::InlineEscape(_) => false,
    }
}

/// Scans the body of the open string.
///
/// A quoted body stops before a newline, the terminator or the end of the input and always
/// succeeds, possibly with an empty token. A backslash escapes the following character; with
/// `line_continuation` enabled, `\z` additionally swallows all following whitespace.
///
/// A long-bracket body may span lines and fails if it isn't closed.
pub(crate) fn scan_string_content<C: Cursor>(
    cursor: &mut C,
    state: &ScannerState,
    line_continuation: bool,
) -> bool {
    let Some(quote) = state.quote() else {
        return match state.bracket_level() {
            Some(level) => scan_block_content(cursor, level),
            None => false,
        };
    };

    while let Some(c) = cursor.lookahead() {
        if c == '\n' || c == quote {
            break;
        }
        if cursor.eat('\\') {
            if line_continuation && cursor.eat('z') {
                trace!("Line continuation");
                cursor.eat_while(char::is_whitespace);
                continue;
            }
            if cursor.is_eof() {
                break;
            }
        }
        cursor.advance();
    }
    true
}
