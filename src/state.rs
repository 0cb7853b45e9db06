//! Module with the scanner state that survives between scan calls.
//!
//! The state consists of three scalar fields which are persisted in this order:
//! * the character that terminates the open quoted string, 0 for a long-bracket body
//! * the level count of the open long bracket
//! * the character that closes the open inline meta escape, 0 if none is open
//!
//! The fields are mutually exclusive. They are only changed through the transitions
//! [ScannerState::open_quote], [ScannerState::open_long_bracket],
//! [ScannerState::open_inline_escape] and [ScannerState::reset], or wholesale by
//! [ScannerState::deserialize].
use log::debug;

use crate::{Result, ScanError, ScanErrorKind};

/// The number of bytes of a serialized state.
pub const SERIALIZED_STATE_LEN: usize = 3;

/// The construct that owns the next content or end token.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ScanContext {
    /// Nothing is open.
    ///
    /// A level-0 long bracket persists as all zero fields, so an idle state also serves as
    /// the context of a level-0 long-bracket body.
    Idle,
    /// A quoted string terminated by the contained quote character.
    QuoteString(char),
    /// A long-bracket body opened with the contained number of level markers.
    LongBracket(u8),
    /// An inline meta escape closed by the contained character followed by `#`.
    InlineEscape(char),
}

/// The durable state of a scanner.
///
/// The state is persisted with [ScannerState::serialize] and restored with
/// [ScannerState::deserialize], which validates every restored byte.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct ScannerState {
    ending_char: u8,
    level_count: u8,
    preproc_end_char: u8,
}

impl ScannerState {
    /// Creates a zero-initialized state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The character terminating the open quoted string or comment body, 0 for a long-bracket
    /// body.
    #[inline]
    pub fn ending_char(&self) -> u8 {
        self.ending_char
    }

    /// The level count of the open long bracket.
    #[inline]
    pub fn level_count(&self) -> u8 {
        self.level_count
    }

    /// The character closing the open inline meta escape, 0 if none is open.
    #[inline]
    pub fn preproc_end_char(&self) -> u8 {
        self.preproc_end_char
    }

    /// Returns true while an inline meta escape is open.
    ///
    /// The flag is derived from the closing character, which is only set between an inline
    /// start and its end. It therefore survives a serialization round trip.
    #[inline]
    pub fn in_inline_escape(&self) -> bool {
        self.preproc_end_char != 0
    }

    /// Returns true if all fields are zero.
    #[inline]
    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }

    /// The tagged view of the state.
    pub fn context(&self) -> ScanContext {
        if self.preproc_end_char != 0 {
            ScanContext::InlineEscape(self.preproc_end_char as char)
        } else if self.ending_char != 0 {
            ScanContext::QuoteString(self.ending_char as char)
        } else if self.level_count != 0 {
            ScanContext::LongBracket(self.level_count)
        } else {
            ScanContext::Idle
        }
    }

    /// The quote character of an open quoted string.
    #[inline]
    pub(crate) fn quote(&self) -> Option<char> {
        match self.context() {
            ScanContext::QuoteString(quote) => Some(quote),
            _ => None,
        }
    }

    /// The level of the long bracket that owns the next body, if any.
    #[inline]
    pub(crate) fn bracket_level(&self) -> Option<u8> {
        match self.context() {
            ScanContext::Idle => Some(0),
            ScanContext::LongBracket(level) => Some(level),
            _ => None,
        }
    }

    /// The closing character of an open inline meta escape.
    #[inline]
    pub(crate) fn inline_closer(&self) -> Option<char> {
        match self.context() {
            ScanContext::InlineEscape(closer) => Some(closer),
            _ => None,
        }
    }

    /// Opens a quoted string terminated by `quote`.
    pub fn open_quote(&mut self, quote: char) {
        debug_assert!(quote == '"' || quote == '\'', "not a quote: {:?}", quote);
        debug!("Open quoted string {:?}", quote);
        *self = Self {
            ending_char: quote as u8,
            ..Self::default()
        };
    }

    /// Opens a long-bracket body with `level` level markers.
    pub fn open_long_bracket(&mut self, level: u8) {
        debug!("Open long bracket of level {}", level);
        *self = Self {
            level_count: level,
            ..Self::default()
        };
    }

    /// Opens an inline meta escape closed by `closer` followed by `#`.
    pub fn open_inline_escape(&mut self, closer: char) {
        debug_assert!(closer == ']' || closer == '|', "not a closer: {:?}", closer);
        debug!("Open inline escape closed by {:?}", closer);
        *self = Self {
            preproc_end_char: closer as u8,
            ..Self::default()
        };
    }

    /// Clears all fields.
    pub fn reset(&mut self) {
        debug!("Reset scanner state");
        *self = Self::default();
    }

    /// Serializes the persisted fields in contract order.
    pub fn serialize(&self) -> [u8; SERIALIZED_STATE_LEN] {
        [self.ending_char, self.level_count, self.preproc_end_char]
    }

    /// Serializes the persisted fields into the given buffer and returns the number of bytes
    /// written.
    pub fn serialize_into(&self, buffer: &mut [u8]) -> Result<usize> {
        let len = buffer.len();
        let target = buffer
            .get_mut(..SERIALIZED_STATE_LEN)
            .ok_or_else(|| ScanError::new(ScanErrorKind::StateBufferTooShort(len)))?;
        target.copy_from_slice(&self.serialize());
        Ok(SERIALIZED_STATE_LEN)
    }

    /// Restores the persisted fields from the given buffer.
    ///
    /// A short buffer only restores the leading fields and leaves the remaining ones untouched,
    /// an empty buffer changes nothing. The buffer is validated as a whole before any field is
    /// restored.
    pub fn deserialize(&mut self, buffer: &[u8]) -> Result<()> {
        if buffer.len() > SERIALIZED_STATE_LEN {
            return Err(ScanError::new(ScanErrorKind::StateBufferTooLong(
                buffer.len(),
            )));
        }
        if let Some(&ending_char) = buffer.first() {
            if !matches!(ending_char, 0 | b'"' | b'\'') {
                return Err(invalid_byte("ending_char", ending_char));
            }
        }
        if let Some(&preproc_end_char) = buffer.get(2) {
            if !matches!(preproc_end_char, 0 | b']' | b'|') {
                return Err(invalid_byte("preproc_end_char", preproc_end_char));
            }
        }

        let mut fields = ScannerState::serialize(self);
        fields[..buffer.len()].copy_from_slice(buffer);
        let [ending_char, level_count, preproc_end_char] = fields;
        *self = Self {
            ending_char,
            level_count,
            preproc_end_char,
        };
        debug!("Restored scanner state {:?} from {:?}", self, buffer);
        Ok(())
    }
}

fn invalid_byte(field: &'static str, value: u8) -> ScanError {
    ScanError::new(ScanErrorKind::InvalidStateByte { field, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions_are_exclusive() {
        let mut state = ScannerState::new();
        assert_eq!(state.context(), ScanContext::Idle);

        state.open_long_bracket(3);
        assert_eq!(state.context(), ScanContext::LongBracket(3));
        assert_eq!(state.bracket_level(), Some(3));

        state.open_quote('\'');
        assert_eq!(state.context(), ScanContext::QuoteString('\''));
        assert_eq!(state.level_count(), 0);
        assert_eq!(state.bracket_level(), None);

        state.open_inline_escape('|');
        assert_eq!(state.context(), ScanContext::InlineEscape('|'));
        assert_eq!(state.ending_char(), 0);
        assert!(state.in_inline_escape());

        state.reset();
        assert!(state.is_idle());
        assert!(!state.in_inline_escape());
    }

    #[test]
    fn test_idle_is_level_zero_bracket() {
        let mut state = ScannerState::new();
        state.open_long_bracket(0);
        assert_eq!(state.context(), ScanContext::Idle);
        assert_eq!(state.bracket_level(), Some(0));
    }

    #[test]
    fn test_serialize_round_trip() {
        let mut state = ScannerState::new();
        state.open_long_bracket(7);
        let bytes = state.serialize();
        assert_eq!(bytes, [0, 7, 0]);

        let mut restored = ScannerState::new();
        restored.deserialize(&bytes).unwrap();
        assert_eq!(restored, state);

        state.open_inline_escape(']');
        let mut buffer = [0xffu8; 8];
        assert_eq!(state.serialize_into(&mut buffer).unwrap(), 3);
        assert_eq!(&buffer[..4], &[0, 0, b']', 0xff]);
        restored.deserialize(&buffer[..3]).unwrap();
        assert!(restored.in_inline_escape());
        assert_eq!(restored.context(), ScanContext::InlineEscape(']'));
    }

    #[test]
    fn test_partial_deserialize() {
        let mut state = ScannerState::new();
        state.deserialize(&[0, 4, b'|']).unwrap();
        state.deserialize(&[b'"']).unwrap();
        assert_eq!(state.ending_char(), b'"');
        assert_eq!(state.level_count(), 4);
        assert_eq!(state.preproc_end_char(), b'|');

        state.deserialize(&[]).unwrap();
        assert_eq!(state.serialize(), [b'"', 4, b'|']);

        state.deserialize(&[0, 2]).unwrap();
        assert_eq!(state.serialize(), [0, 2, b'|']);
    }

    #[test]
    fn test_deserialize_rejects_invalid_buffers() {
        let mut state = ScannerState::new();
        state.open_long_bracket(1);

        let err = state.deserialize(&[0, 0, 0, 0]).unwrap_err();
        assert!(matches!(err.kind(), ScanErrorKind::StateBufferTooLong(4)));

        let err = state.deserialize(&[b'x']).unwrap_err();
        assert!(matches!(
            err.kind(),
            ScanErrorKind::InvalidStateByte {
                field: "ending_char",
                value: b'x'
            }
        ));

        let err = state.deserialize(&[0, 0, b'#']).unwrap_err();
        assert!(matches!(
            err.kind(),
            ScanErrorKind::InvalidStateByte {
                field: "preproc_end_char",
                ..
            }
        ));
        assert_eq!(state.context(), ScanContext::LongBracket(1));

        let err = state.serialize_into(&mut [0u8; 2]).unwrap_err();
        assert!(matches!(err.kind(), ScanErrorKind::StateBufferTooShort(2)));
    }

    #[test]
    fn test_serialize_into_exact_buffer() {
        let mut state = ScannerState::new();
        state.open_quote('"');
        let mut buffer = [0u8; SERIALIZED_STATE_LEN];
        assert_eq!(state.serialize_into(&mut buffer).unwrap(), SERIALIZED_STATE_LEN);
        assert_eq!(buffer, [b'"', 0, 0]);
    }

    #[test]
    fn test_deserialize_through_mutable_reference() {
        // Restoring goes through a `&mut` handle the way a driver holds the state.
        let mut state = ScannerState::new();
        let handle: &mut ScannerState = &mut state;
        handle.deserialize(&[0, 5]).unwrap();
        handle.deserialize(&[b'\'']).unwrap();
        assert_eq!(state.serialize(), [b'\'', 5, 0]);
        assert_eq!(state.context(), ScanContext::QuoteString('\''));
    }
}
