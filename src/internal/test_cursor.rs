use crate::Cursor;

/// Records consumed and marked positions in a char buffer.
#[derive(Debug)]
pub(crate) struct TestCursor {
    chars: Vec<char>,
    pub(crate) pos: usize,
    pub(crate) start: usize,
    pub(crate) marked: Option<usize>,
}

impl TestCursor {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
            start: 0,
            marked: None,
        }
    }

    /// The text of the token as the driver would see it.
    pub(crate) fn token(&self) -> String {
        let end = self.marked.unwrap_or(self.pos);
        self.chars[self.start..end].iter().collect()
    }

    /// The text not yet consumed.
    pub(crate) fn rest(&self) -> String {
        self.chars[self.pos..].iter().collect()
    }
}

impl Cursor for TestCursor {
    fn lookahead(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn advance(&mut self) {
        if self.pos < self.chars.len() {
            self.pos += 1;
        }
    }

    fn skip(&mut self) {
        self.advance();
        self.start = self.pos;
    }

    fn mark_end(&mut self) {
        self.marked = Some(self.pos);
    }
}
