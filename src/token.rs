use serde::{Deserialize, Serialize};

use crate::{Position, Span, TokenKind};

/// A token produced by the scanner.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The kind of the token.
    kind: TokenKind,
    /// The bytes covered by the token.
    span: Span,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Get the kind of the token.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Get the span of the token.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the start of the token.
    #[inline]
    pub fn start(&self) -> usize {
        self.span.start
    }

    /// Get the end of the token.
    #[inline]
    pub fn end(&self) -> usize {
        self.span.end
    }

    /// Get the span as range
    #[inline]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.span.range()
    }

    /// Check if the token is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }
}

/// A token with start and end positions.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct PositionedToken {
    /// The kind of the token.
    kind: TokenKind,
    /// The bytes covered by the token.
    span: Span,
    /// The position of the start of the token.
    start_location: Position,
    /// The position of the end of the token.
    /// The end position is exclusive.
    end_location: Position,
}

impl PositionedToken {
    pub(crate) fn new(token: Token, start_location: Position, end_location: Position) -> Self {
        Self {
            kind: token.kind(),
            span: token.span(),
            start_location,
            end_location,
        }
    }

    /// Get the kind of the token.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Get the span of the token.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the position of the first character of the token.
    #[inline]
    pub fn start_location(&self) -> Position {
        self.start_location
    }

    /// Get the position right behind the token.
    #[inline]
    pub fn end_location(&self) -> Position {
        self.end_location
    }
}
