use crate::{Position, PositionProvider, PositionedToken, Token};

/// An iterator over tokens with their line and column positions.
#[derive(Debug)]
pub struct WithPositions<I> {
    iter: I,
}

impl<I> WithPositions<I>
where
    I: Iterator<Item = Token> + PositionProvider + Sized,
{
    /// Create a new `WithPositions` iterator.
    pub(crate) fn new(iter: I) -> Self {
        Self { iter }
    }
}

impl<I> Iterator for WithPositions<I>
where
    I: Iterator<Item = Token> + PositionProvider + Sized,
{
    type Item = PositionedToken;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|t| {
            let start_position = self.iter.position(t.start());
            let end_position = self.iter.position(t.end());
            PositionedToken::new(t, start_position, end_position)
        })
    }
}

/// An extension trait for iterators over tokens.
pub trait TokenExtIterator: Iterator<Item = Token> + PositionProvider + Sized {
    /// An iterator that yields tokens with positions.
    fn with_positions(self) -> WithPositions<Self> {
        WithPositions::new(self)
    }
}

// Implement the trait for all types that implement the required traits.
impl<I: Iterator<Item = Token> + PositionProvider + Sized> TokenExtIterator for I {}

impl<I> PositionProvider for WithPositions<I>
where
    I: Iterator<Item = Token> + PositionProvider,
{
    fn position(&self, offset: usize) -> Position {
        self.iter.position(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Scanner, TokenKind};

    #[test]
    fn test_with_positions() {
        let input = "x = 1\n--[[ a\nb ]]";
        let tokens: Vec<PositionedToken> =
            Scanner::new().find_iter(input).with_positions().collect();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].kind(), TokenKind::BlockCommentStart);
        assert_eq!(tokens[0].start_location(), Position::new(2, 1));
        assert_eq!(tokens[0].end_location(), Position::new(2, 5));
        assert_eq!(tokens[1].start_location(), Position::new(2, 5));
        assert_eq!(tokens[1].end_location(), Position::new(3, 3));
        assert_eq!(tokens[2].kind(), TokenKind::BlockCommentEnd);
        assert_eq!(tokens[2].end_location(), Position::new(3, 5));
    }
}
