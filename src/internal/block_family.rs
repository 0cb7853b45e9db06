//! Recognizers for block comments (`--[[ ... ]]`) and block-meta sections (`##[[ ... ]]`).
//!
//! Both families share their body logic and only differ in the marker character that is
//! doubled in front of the long-bracket opener.
use log::trace;

use crate::{Cursor, ScanContext, ScannerState, TokenKind};

use super::{scan_block_content, scan_block_start};

/// A family of long-bracket delimited blocks.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum BlockFamily {
    /// `--[[ ... ]]`
    Comment,
    /// `##[[ ... ]]`
    Meta,
}

impl BlockFamily {
    /// The doubled marker introducing a block of this family.
    pub(crate) fn marker(self) -> char {
        match self {
            BlockFamily::Comment => '-',
            BlockFamily::Meta => '#',
        }
    }

    pub(crate) fn start_kind(self) -> TokenKind {
        match self {
            BlockFamily::Comment => TokenKind::BlockCommentStart,
            BlockFamily::Meta => TokenKind::BlockMetaStart,
        }
    }

    pub(crate) fn content_kind(self) -> TokenKind {
        match self {
            BlockFamily::Comment => TokenKind::BlockCommentContent,
            BlockFamily::Meta => TokenKind::BlockMetaContent,
        }
    }

    pub(crate) fn end_kind(self) -> TokenKind {
        match self {
            BlockFamily::Comment => TokenKind::BlockCommentEnd,
            BlockFamily::Meta => TokenKind::BlockMetaEnd,
        }
    }
}

/// Scans the doubled marker followed by a long-bracket opener and returns the bracket level.
///
/// A doubled marker without an opener is not a block start. It is left to the grammar, e.g. as
/// a line comment.
pub(crate) fn scan_family_start<C: Cursor>(
    cursor: &mut C,
    family: BlockFamily,
    max_level: u8,
) -> Option<u8> {
    if !cursor.eat(family.marker()) {
        return None;
    }
    scan_family_start_after_marker(cursor, family, max_level)
}

/// Same as [scan_family_start] with the first marker already consumed.
pub(crate) fn scan_family_start_after_marker<C: Cursor>(
    cursor: &mut C,
    family: BlockFamily,
    max_level: u8,
) -> Option<u8> {
    if !cursor.eat(family.marker()) {
        return None;
    }
    cursor.mark_end();
    let level = scan_block_start(cursor, max_level);
    match level {
        Some(_) => cursor.mark_end(),
        None => trace!("{:?} marker without long bracket", family),
    }
    level
}

/// Scans the body of an open block.
///
/// A long-bracket body runs up to its closer. A body terminated by a quote character, which
/// only a restored state can hold, runs up to that character and resets the state.
pub(crate) fn scan_family_content<C: Cursor>(cursor: &mut C, state: &mut ScannerState) -> bool {
    match state.context() {
        ScanContext::Idle => scan_block_content(cursor, 0),
        ScanContext::LongBracket(level) => scan_block_content(cursor, level),
        ScanContext::QuoteString(terminator) => {
            while let Some(c) = cursor.lookahead() {
                if c == terminator {
                    state.reset();
                    return true;
                }
                cursor.advance();
            }
            false
        }
        ScanContext::InlineEscape(_) => false,
    }
}
