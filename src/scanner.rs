//! The dispatcher that tries the recognizers in a fixed order and owns the scanner state.
use log::trace;

use crate::{
    internal::{
        inline_end_kind, scan_block_end, scan_family_content, scan_family_start,
        scan_family_start_after_marker, scan_inline_content, scan_inline_end,
        scan_inline_start_after_hash, scan_string_content, scan_string_end, scan_string_start,
        BlockFamily,
    },
    Cursor, FindTokens, Result, ScannerConfig, ScannerState, TokenKind, ValidKinds,
};

/// A scanner for long brackets, strings, block comments and meta escapes.
///
/// The scanner complements a grammar with the tokens a context-free grammar can't describe:
/// long brackets with matching level counts, strings whose terminator depends on their opener
/// and the inline meta escapes `#[ ... ]#` and `#| ... |#`.
///
/// A driver calls [Scanner::scan] at every position where one of the scanner's token kinds may
/// occur. Each scanner owns its state, so independent inputs need independent scanners.
///
/// To create a scanner with a non-default configuration use the [crate::ScannerBuilder].
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    state: ScannerState,
    config: ScannerConfig,
}

impl Scanner {
    /// Creates a scanner with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scanner with the given configuration.
    pub fn with_config(config: ScannerConfig) -> Self {
        Self {
            state: ScannerState::default(),
            config,
        }
    }

    /// The current state.
    #[inline]
    pub fn state(&self) -> &ScannerState {
        &self.state
    }

    /// The configuration.
    #[inline]
    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// Clears the state.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Serializes the state. See [ScannerState::serialize].
    pub fn serialize(&self) -> [u8; crate::SERIALIZED_STATE_LEN] {
        self.state.serialize()
    }

    /// Serializes the state into the given buffer. See [ScannerState::serialize_into].
    pub fn serialize_into(&self, buffer: &mut [u8]) -> Result<usize> {
        self.state.serialize_into(buffer)
    }

    /// Restores the state. See [ScannerState::deserialize].
    pub fn deserialize(&mut self, buffer: &[u8]) -> Result<()> {
        self.state.deserialize(buffer)
    }

    /// Returns an iterator over all tokens of the input, driven by a minimal grammar model.
    /// The iterator uses a fresh scanner with this scanner's configuration.
    pub fn find_iter<'h>(&self, input: &'h str) -> FindTokens<'h> {
        FindTokens::new(Scanner::with_config(self.config), input)
    }

    /// Scans the next token.
    ///
    /// Returns the kind of the produced token, its extent is communicated through the cursor.
    /// `None` means the scanner has no opinion at this position and the driver should fall back
    /// to its own tokenization. Only kinds contained in `valid` are ever reported.
    ///
    /// Recognizers of open constructs are tried first, ends before contents. Leading whitespace
    /// is only skipped before the start recognizers.
    pub fn scan<C: Cursor>(&mut self, cursor: &mut C, valid: &ValidKinds) -> Option<TokenKind> {
        let kind = self.scan_open(cursor, valid).or_else(|| {
            cursor.skip_while(char::is_whitespace);
            self.scan_start(cursor, valid)
        });
        match kind {
            Some(kind) => trace!("Scanned {}, state {:?}", kind, self.state),
            None => trace!("No token"),
        }
        kind
    }

    /// Same as [Scanner::scan], with the valid kinds given as raw flags in contract order.
    pub fn scan_flags<C: Cursor>(
        &mut self,
        cursor: &mut C,
        valid_flags: &[bool],
    ) -> Result<Option<TokenKind>> {
        let valid = ValidKinds::from_flags(valid_flags)?;
        Ok(self.scan(cursor, &valid))
    }

    // Tries the recognizers that continue or close an open construct.
    fn scan_open<C: Cursor>(&mut self, cursor: &mut C, valid: &ValidKinds) -> Option<TokenKind> {
        let state = &mut self.state;

        if valid.contains(TokenKind::StringEnd) && scan_string_end(cursor, state) {
            state.reset();
            return Some(TokenKind::StringEnd);
        }

        if valid.contains(TokenKind::StringContent)
            && scan_string_content(cursor, state, self.config.line_continuation)
        {
            return Some(TokenKind::StringContent);
        }

        if let Some(level) = state.bracket_level() {
            // The comment closer takes precedence if both are valid.
            let end = [BlockFamily::Comment, BlockFamily::Meta]
                .into_iter()
                .map(BlockFamily::end_kind)
                .find(|kind| valid.contains(*kind));
            if let Some(end) = end {
                if scan_block_end(cursor, level) {
                    state.reset();
                    return Some(end);
                }
            }
        }

        if !state.in_inline_escape() {
            for family in [BlockFamily::Comment, BlockFamily::Meta] {
                let content = family.content_kind();
                if valid.contains(content) && scan_family_content(cursor, state) {
                    return Some(content);
                }
            }
        }

        if let Some(closer) = state.inline_closer() {
            let end = inline_end_kind(closer);
            if valid.contains(end) && scan_inline_end(cursor, closer) {
                state.reset();
                return Some(end);
            }
        }

        if valid.contains(TokenKind::InlineContent) && scan_inline_content(cursor, state) {
            return Some(TokenKind::InlineContent);
        }

        None
    }

    // Tries the recognizers that open a construct. The starts are told apart by their first
    // character, so a failed attempt never consumes a prefix another start needs.
    fn scan_start<C: Cursor>(&mut self, cursor: &mut C, valid: &ValidKinds) -> Option<TokenKind> {
        let max_level = self.config.max_level;
        match cursor.lookahead()? {
            '"' | '\'' | '[' if valid.contains(TokenKind::StringStart) => {
                scan_string_start(cursor, &mut self.state, max_level)
                    .then_some(TokenKind::StringStart)
            }
            '-' if valid.contains(TokenKind::BlockCommentStart) => {
                self.scan_family_start(cursor, BlockFamily::Comment)
            }
            '#' => self.scan_hash_start(cursor, valid),
            _ => None,
        }
    }

    fn scan_family_start<C: Cursor>(
        &mut self,
        cursor: &mut C,
        family: BlockFamily,
    ) -> Option<TokenKind> {
        let level = scan_family_start(cursor, family, self.config.max_level)?;
        self.state.open_long_bracket(level);
        Some(family.start_kind())
    }

    // `##` opens a block-meta section, `#[` and `#|` open inline escapes.
    fn scan_hash_start<C: Cursor>(
        &mut self,
        cursor: &mut C,
        valid: &ValidKinds,
    ) -> Option<TokenKind> {
        let meta = valid.contains(TokenKind::BlockMetaStart);
        let inline =
            valid.contains_any(&[TokenKind::InlineExprStart, TokenKind::InlineNameStart]);
        if !(meta || inline) || !cursor.eat('#') {
            return None;
        }
        if cursor.lookahead() == Some('#') {
            if !meta {
                return None;
            }
            let level =
                scan_family_start_after_marker(cursor, BlockFamily::Meta, self.config.max_level)?;
            self.state.open_long_bracket(level);
            return Some(TokenKind::BlockMetaStart);
        }
        if inline {
            scan_inline_start_after_hash(cursor, &mut self.state, valid)
        } else {
            None
        }
    }
}
