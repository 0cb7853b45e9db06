//! Module with the external token kinds and the set of kinds a driver considers valid.
use serde::{Deserialize, Serialize};

use crate::{Result, ScanError, ScanErrorKind};

/// The token kinds produced by the scanner.
///
/// The numbering is part of the driver contract: a driver passes one valid flag per kind, in
/// exactly this order.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(usize)]
pub enum TokenKind {
    /// `--` followed by a long-bracket opener.
    BlockCommentStart = 0,
    /// The body of a block comment.
    BlockCommentContent,
    /// The long-bracket closer of a block comment.
    BlockCommentEnd,
    /// `##` followed by a long-bracket opener.
    BlockMetaStart,
    /// The body of a block-meta section.
    BlockMetaContent,
    /// The long-bracket closer of a block-meta section.
    BlockMetaEnd,
    /// `#[`
    InlineExprStart,
    /// `]#`
    InlineExprEnd,
    /// `#|`
    InlineNameStart,
    /// `|#`
    InlineNameEnd,
    /// The body of an inline meta escape, shared by both forms.
    InlineContent,
    /// A quote or a long-bracket opener starting a string.
    StringStart,
    /// The body of a string.
    StringContent,
    /// The closing quote or long-bracket closer of a string.
    StringEnd,
}

impl TokenKind {
    /// The number of token kinds.
    pub const COUNT: usize = 14;

    /// All token kinds in contract order.
    pub const ALL: [TokenKind; TokenKind::COUNT] = [
        TokenKind::BlockCommentStart,
        TokenKind::BlockCommentContent,
        TokenKind::BlockCommentEnd,
        TokenKind::BlockMetaStart,
        TokenKind::BlockMetaContent,
        TokenKind::BlockMetaEnd,
        TokenKind::InlineExprStart,
        TokenKind::InlineExprEnd,
        TokenKind::InlineNameStart,
        TokenKind::InlineNameEnd,
        TokenKind::InlineContent,
        TokenKind::StringStart,
        TokenKind::StringContent,
        TokenKind::StringEnd,
    ];

    /// The kinds that open a construct.
    pub const STARTS: [TokenKind; 5] = [
        TokenKind::StringStart,
        TokenKind::BlockCommentStart,
        TokenKind::BlockMetaStart,
        TokenKind::InlineExprStart,
        TokenKind::InlineNameStart,
    ];

    /// Get the contract number of the kind.
    #[inline]
    pub fn as_usize(self) -> usize {
        self as usize
    }

    /// The name of the kind as used in grammar descriptions.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::BlockCommentStart => "block_comment_start",
            TokenKind::BlockCommentContent => "block_comment_content",
            TokenKind::BlockCommentEnd => "block_comment_end",
            TokenKind::BlockMetaStart => "block_meta_start",
            TokenKind::BlockMetaContent => "block_meta_content",
            TokenKind::BlockMetaEnd => "block_meta_end",
            TokenKind::InlineExprStart => "inline_expr_start",
            TokenKind::InlineExprEnd => "inline_expr_end",
            TokenKind::InlineNameStart => "inline_name_start",
            TokenKind::InlineNameEnd => "inline_name_end",
            TokenKind::InlineContent => "inline_content",
            TokenKind::StringStart => "string_start",
            TokenKind::StringContent => "string_content",
            TokenKind::StringEnd => "string_end",
        }
    }
}

impl TryFrom<usize> for TokenKind {
    type Error = ScanError;

    fn try_from(value: usize) -> Result<Self> {
        TokenKind::ALL
            .get(value)
            .copied()
            .ok_or_else(|| ScanError::new(ScanErrorKind::UnknownTokenKind(value)))
    }
}

impl From<TokenKind> for usize {
    fn from(kind: TokenKind) -> Self {
        kind.as_usize()
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The set of token kinds the driver considers syntactically possible at the current position.
/// The scanner never reports a kind that is not contained in this set.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct ValidKinds {
    flags: [bool; TokenKind::COUNT],
}

impl ValidKinds {
    /// Creates an empty set.
    pub fn none() -> Self {
        Self::default()
    }

    /// Creates a set with every kind marked valid.
    pub fn all() -> Self {
        Self {
            flags: [true; TokenKind::COUNT],
        }
    }

    /// Creates a set from the raw flags a driver hands over, one per kind in contract order.
    pub fn from_flags(flags: &[bool]) -> Result<Self> {
        let flags: [bool; TokenKind::COUNT] = flags.try_into().map_err(|_| {
            ScanError::new(ScanErrorKind::ValidKindsLength {
                expected: TokenKind::COUNT,
                actual: flags.len(),
            })
        })?;
        Ok(Self { flags })
    }

    /// Marks the given kind as valid.
    pub fn insert(&mut self, kind: TokenKind) {
        self.flags[kind.as_usize()] = true;
    }

    /// Returns true if the given kind is valid.
    #[inline]
    pub fn contains(&self, kind: TokenKind) -> bool {
        self.flags[kind.as_usize()]
    }

    /// Returns true if any of the given kinds is valid.
    #[inline]
    pub fn contains_any(&self, kinds: &[TokenKind]) -> bool {
        kinds.iter().any(|k| self.contains(*k))
    }

    /// Returns true if no kind is valid.
    pub fn is_empty(&self) -> bool {
        !self.flags.iter().any(|f| *f)
    }

    /// Iterates over the valid kinds in contract order.
    pub fn iter(&self) -> impl Iterator<Item = TokenKind> + '_ {
        TokenKind::ALL.into_iter().filter(|k| self.contains(*k))
    }
}

impl FromIterator<TokenKind> for ValidKinds {
    fn from_iter<T: IntoIterator<Item = TokenKind>>(iter: T) -> Self {
        let mut valid = ValidKinds::none();
        for kind in iter {
            valid.insert(kind);
        }
        valid
    }
}

impl<const N: usize> From<[TokenKind; N]> for ValidKinds {
    fn from(kinds: [TokenKind; N]) -> Self {
        kinds.into_iter().collect()
    }
}
