#![forbid(missing_docs)]
//! # `nelua_scanner`
//! The `nelua_scanner` crate provides the external scanner of a grammar for Nelua-style
//! languages. It recognizes the tokens a context-free grammar can't describe:
//! - long brackets `[==[ ... ]==]` whose closer must repeat the level count of the opener,
//! - strings, quoted or long-bracket delimited, including the `\z` line continuation,
//! - block comments `--[[ ... ]]` and block-meta sections `##[[ ... ]]`,
//! - inline meta escapes `#[ expr ]#` and `#| name |#`.
//!
//! The scanner doesn't parse. A driver that owns the grammar calls [Scanner::scan] at every
//! position where one of the scanner's [TokenKind]s may occur, passing the [ValidKinds] at this
//! position and a [Cursor] over the input. The scanner reports the first matching token kind or
//! `None`, in which case the driver falls back to its own tokenization.
//!
//! The scanner state survives between calls and can be persisted in three bytes with
//! [Scanner::serialize] and restored with [Scanner::deserialize], so an incremental parser can
//! resume scanning inside an open construct.
//!
//! # Example
//! ```rust
//! use nelua_scanner::{Scanner, TokenKind};
//!
//! const INPUT: &str = r#"
//! --[==[ A block comment
//!    with ]] inside ]==]
//! local s = #[ name ]# .. [[raw]]
//! "#;
//!
//! fn main() {
//!     let scanner = Scanner::new();
//!     for token in scanner.find_iter(INPUT) {
//!         println!("{}: {:?}", token.kind(), &INPUT[token.range()]);
//!     }
//!     let kinds: Vec<TokenKind> = scanner.find_iter(INPUT).map(|t| t.kind()).collect();
//!     assert_eq!(kinds.len(), 9);
//! }
//! ```
//! [Scanner::find_iter] uses the reference driver [FindTokens], which models the grammar just
//! enough to exercise the scanner. A real driver implements [Cursor] for its own lexer and
//! calls [Scanner::scan] directly.

/// Module with the cursor trait
mod cursor;
pub use cursor::Cursor;

/// Module with error definitions
mod errors;
pub use errors::{Result, ScanError, ScanErrorKind};

/// Module that provides a FindTokens type
mod find_tokens;
pub use find_tokens::FindTokens;

/// The module with the recognizers.
mod internal;

/// Module that provides a position type
mod position;
pub use position::{Position, PositionProvider};

/// The module with the scanner, i.e. the dispatcher.
mod scanner;
pub use scanner::Scanner;

/// The module with the scanner builder.
mod scanner_builder;
pub use scanner_builder::ScannerBuilder;

/// The module with the scanner configuration.
mod scanner_config;
pub use scanner_config::ScannerConfig;

/// Module that provides a Span type
mod span;
pub use span::Span;

/// Module with the scanner state
mod state;
pub use state::{ScanContext, ScannerState, SERIALIZED_STATE_LEN};

/// Module that provides a cursor over string slices
mod str_cursor;
pub use str_cursor::StrCursor;

/// Module that provides the Token types
mod token;
pub use token::{PositionedToken, Token};

/// Module with the token kinds
mod token_kind;
pub use token_kind::{TokenKind, ValidKinds};

/// Module that provides a WithPositions type
mod with_positions;
pub use with_positions::{TokenExtIterator, WithPositions};
