use std::io::Read;

use crate::{Result, Scanner, ScannerConfig};

/// A builder for creating a scanner.
#[derive(Debug, Clone, Default)]
pub struct ScannerBuilder {
    config: ScannerConfig,
}

impl ScannerBuilder {
    /// Creates a new scanner builder with the default configuration.
    pub fn new() -> Self {
        Self {
            config: ScannerConfig::default(),
        }
    }

    /// Creates a scanner builder from a configuration in JSON format.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new().config(ScannerConfig::from_json(json)?))
    }

    /// Creates a scanner builder from a reader providing a configuration in JSON format.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(Self::new().config(ScannerConfig::from_reader(reader)?))
    }

    /// Replaces the whole configuration.
    pub fn config(mut self, config: ScannerConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the maximum number of level markers of a long bracket.
    pub fn max_level(mut self, max_level: u8) -> Self {
        self.config.max_level = max_level;
        self
    }

    /// Enables or disables the `\z` escape in quoted strings.
    pub fn line_continuation(mut self, enabled: bool) -> Self {
        self.config.line_continuation = enabled;
        self
    }

    /// Builds a scanner with a zero-initialized state.
    pub fn build(self) -> Scanner {
        Scanner::with_config(self.config)
    }
}
