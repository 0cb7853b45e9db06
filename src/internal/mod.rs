/// Module with the shared body scanning loop.
mod body;
pub(crate) use body::scan_body;

/// Module with the block comment and block-meta recognizers.
mod block_family;
pub(crate) use block_family::{
    scan_family_content, scan_family_start, scan_family_start_after_marker, BlockFamily,
};

/// Module with the inline meta escape recognizers.
mod inline_escape;
pub(crate) use inline_escape::{
    inline_end_kind, scan_inline_content, scan_inline_end, scan_inline_start_after_hash,
};

/// Module with the long-bracket recognizers.
mod long_bracket;
pub(crate) use long_bracket::{scan_block_content, scan_block_end, scan_block_start};

/// Module with the string recognizers.
mod string;
pub(crate) use string::{scan_string_content, scan_string_end, scan_string_start};

/// A minimal cursor over a string used by the recognizer tests.
#[cfg(test)]
pub(crate) mod test_cursor;
