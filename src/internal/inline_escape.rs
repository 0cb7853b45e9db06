//! Recognizers for inline meta escapes, `#[ expr ]#` and `#| name |#`.
use crate::{Cursor, ScannerState, TokenKind, ValidKinds};

use super::scan_body;

/// The end kind belonging to an inline escape closed by `closer`.
pub(crate) fn inline_end_kind(closer: char) -> TokenKind {
    if closer == '|' {
        TokenKind::InlineNameEnd
    } else {
        TokenKind::InlineExprEnd
    }
}

/// Scans the second introducer character of an inline escape, the `#` being consumed already.
///
/// Only forms whose start kind is valid are opened. The start token ends right behind the
/// introducer.
pub(crate) fn scan_inline_start_after_hash<C: Cursor>(
    cursor: &mut C,
    state: &mut ScannerState,
    valid: &ValidKinds,
) -> Option<TokenKind> {
    let (closer, kind) = match cursor.lookahead()? {
        '[' => (']', TokenKind::InlineExprStart),
        '|' => ('|', TokenKind::InlineNameStart),
        _ => return None,
    };
    if !valid.contains(kind) {
        return None;
    }
    cursor.advance();
    cursor.mark_end();
    state.open_inline_escape(closer);
    Some(kind)
}

/// Scans the two-character closer `closer` + `#`.
pub(crate) fn scan_inline_end<C: Cursor>(cursor: &mut C, closer: char) -> bool {
    cursor.eat(closer) && cursor.eat('#')
}

/// Scans the body of the open inline escape up to its closer.
///
/// A closing character not followed by `#` is part of the body. Fails if no inline escape is
/// open or the input ends first.
pub(crate) fn scan_inline_content<C: Cursor>(cursor: &mut C, state: &ScannerState) -> bool {
    match state.inline_closer() {
        Some(closer) => scan_body(cursor, closer, |cursor| scan_inline_end(cursor, closer)),
        None => false,
    }
}
