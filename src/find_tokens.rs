//! A reference driver that runs a scanner over a whole text.
//!
//! The driver stands in for the grammar of a real parser. It is used by
//! [crate::Scanner::find_iter] and by the end-to-end tests.
use log::trace;

use crate::{
    position::LineIndex, Position, PositionProvider, Scanner, StrCursor, Token, TokenKind,
    ValidKinds,
};

/// An iterator over all tokens the scanner produces for a text.
///
/// The iterator plays the role of the grammar driving the scanner. It models only what the
/// grammar knows about this scanner's token families: after a start token the family's
/// content and end kinds are valid, after a content token only the end kind, and everywhere
/// else every start kind. Where the scanner has no opinion the iterator hands one character
/// over to the grammar's own tokenization, i.e. it skips it, and expects a start again.
///
/// * `'h` represents the lifetime of the text being scanned.
///
/// This iterator can be created with the [`crate::Scanner::find_iter`] method.
#[derive(Debug)]
pub struct FindTokens<'h> {
    scanner: Scanner,
    cursor: StrCursor<'h>,
    line_index: LineIndex,
    valid: ValidKinds,
    offset: usize,
}

impl<'h> FindTokens<'h> {
    /// Creates a new `FindTokens` iterator.
    pub(crate) fn new(scanner: Scanner, input: &'h str) -> Self {
        Self {
            scanner,
            cursor: StrCursor::new(input),
            line_index: LineIndex::new(input),
            valid: ValidKinds::from(TokenKind::STARTS),
            offset: 0,
        }
    }

    /// Sets an offset that is added to the start and end of each token.
    /// If the text is a part of a larger document, the offset is the position of the part
    /// within the document.
    pub fn with_offset(self, offset: usize) -> Self {
        Self { offset, ..self }
    }

    /// The scanner driven by the iterator, e.g. to inspect its state between tokens.
    #[inline]
    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }

    /// The kinds the iterator will consider valid on the next scan call.
    #[inline]
    pub fn valid_kinds(&self) -> &ValidKinds {
        &self.valid
    }

    /// The byte offset of the next character to scan, relative to the start of the text.
    #[inline]
    pub fn offset(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the next token, `None` once the text is exhausted.
    pub fn next_token(&mut self) -> Option<Token> {
        loop {
            self.cursor.begin_token();
            if let Some(kind) = self.scanner.scan(&mut self.cursor, &self.valid) {
                let span = self.cursor.finish_token().offset_by(self.offset);
                self.valid = Self::valid_after(kind);
                return Some(Token::new(kind, span));
            }
            self.cursor.rewind();
            let skipped = self.cursor.bump()?;
            trace!("Hand {:?} over to the grammar", skipped);
            self.valid = ValidKinds::from(TokenKind::STARTS);
        }
    }

    /// The kinds the grammar accepts after a token of the given kind.
    fn valid_after(kind: TokenKind) -> ValidKinds {
        use TokenKind::*;
        match kind {
            BlockCommentStart => ValidKinds::from([BlockCommentContent, BlockCommentEnd]),
            BlockCommentContent => ValidKinds::from([BlockCommentEnd]),
            BlockMetaStart => ValidKinds::from([BlockMetaContent, BlockMetaEnd]),
            BlockMetaContent => ValidKinds::from([BlockMetaEnd]),
            InlineExprStart => ValidKinds::from([InlineContent, InlineExprEnd]),
            InlineNameStart => ValidKinds::from([InlineContent, InlineNameEnd]),
            // Both closers are valid after the shared content kind, the scanner picks the one
            // of the open form.
            InlineContent => ValidKinds::from([InlineExprEnd, InlineNameEnd]),
            StringStart => ValidKinds::from([StringContent, StringEnd]),
            StringContent => ValidKinds::from([StringEnd]),
            BlockCommentEnd | BlockMetaEnd | InlineExprEnd | InlineNameEnd | StringEnd => {
                ValidKinds::from(TokenKind::STARTS)
            }
        }
    }
}

impl Iterator for FindTokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl PositionProvider for FindTokens<'_> {
    /// Returns the line and column numbers of the given offset.
    /// The offset is given in the coordinates of the produced tokens, i.e. including the offset
    /// set with [FindTokens::with_offset].
    fn position(&self, offset: usize) -> Position {
        self.line_index.position(
            self.cursor.input(),
            offset.saturating_sub(self.offset),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Span;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    const INPUT: &str = r#"local s = "a" -- line
--[==[ block ]] ]==]
##[[ print(#[x]#) ]]
local #|n|# = [[
two]]"#;

    #[test]
    fn test_find_tokens() {
        init();
        let tokens: Vec<Token> = Scanner::new().find_iter(INPUT).collect();
        let texts: Vec<(TokenKind, &str)> = tokens
            .iter()
            .map(|t| (t.kind(), &INPUT[t.range()]))
            .collect();
        assert_eq!(
            texts,
            vec![
                (TokenKind::StringStart, "\""),
                (TokenKind::StringContent, "a"),
                (TokenKind::StringEnd, "\""),
                (TokenKind::BlockCommentStart, "--[==["),
                (TokenKind::BlockCommentContent, " block ]] "),
                (TokenKind::BlockCommentEnd, "]==]"),
                (TokenKind::BlockMetaStart, "##[["),
                (TokenKind::BlockMetaContent, " print(#[x]#) "),
                (TokenKind::BlockMetaEnd, "]]"),
                (TokenKind::InlineNameStart, "#|"),
                (TokenKind::InlineContent, "n"),
                (TokenKind::InlineNameEnd, "|#"),
                (TokenKind::StringStart, "[["),
                (TokenKind::StringContent, "\ntwo"),
                (TokenKind::StringEnd, "]]"),
            ]
        );
    }

    #[test]
    fn test_with_offset() {
        init();
        let mut iter = Scanner::new().find_iter("x 'y'").with_offset(100);
        assert_eq!(
            iter.next(),
            Some(Token::new(TokenKind::StringStart, Span::new(102, 103)))
        );
        assert_eq!(iter.position(103), Position::new(1, 4));
        assert_eq!(iter.valid_kinds().iter().count(), 2);
        assert_eq!(iter.offset(), 3);
    }

    #[test]
    fn test_offset_and_position_are_distinct() {
        init();
        let input = "a\n'b'";
        let mut iter = Scanner::new().find_iter(input);
        assert_eq!(iter.offset(), 0);
        assert_eq!(iter.next().map(|t| t.kind()), Some(TokenKind::StringStart));
        assert_eq!(iter.offset(), 3);
        assert_eq!(iter.position(iter.offset()), Position::new(2, 2));
    }

    #[test]
    fn test_recovers_after_unterminated_string() {
        init();
        let input = "'abc\n--[[c]]";
        let mut iter = Scanner::new().find_iter(input);
        let kinds: Vec<TokenKind> = iter.by_ref().map(|t| t.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::StringStart,
                TokenKind::StringContent,
                TokenKind::BlockCommentStart,
                TokenKind::BlockCommentContent,
                TokenKind::BlockCommentEnd,
            ]
        );
        assert!(iter.scanner().state().is_idle());
        assert_eq!(iter.offset(), input.len());
    }

    #[test]
    fn test_unterminated_block_comment() {
        init();
        let input = "--[[ never closed";
        let kinds: Vec<TokenKind> = Scanner::new().find_iter(input).map(|t| t.kind()).collect();
        assert_eq!(kinds, vec![TokenKind::BlockCommentStart]);
    }
}
