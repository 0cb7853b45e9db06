use std::io::Read;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::Result;

/// The configuration of a scanner.
///
/// The configuration can be deserialized from JSON. Missing fields take their default values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// The maximum number of level markers of a long bracket.
    /// Openers with more markers are not recognized as long brackets.
    pub max_level: u8,
    /// Enables the `\z` escape in quoted strings, which swallows all following whitespace.
    pub line_continuation: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            max_level: u8::MAX,
            line_continuation: true,
        }
    }
}

impl ScannerConfig {
    /// Reads a configuration in JSON format.
    ///
    /// Failing to read is reported as [crate::ScanErrorKind::IoError], malformed JSON as
    /// [crate::ScanErrorKind::JsonError].
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::from_json(&json)
    }

    /// Parses a configuration in JSON format.
    pub fn from_json(json: &str) -> Result<Self> {
        let config = serde_json::from_str(json)?;
        debug!("Read scanner config {:?}", config);
        Ok(config)
    }
}
