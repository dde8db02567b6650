use std::convert::Infallible;

use crate::stream::TokenStream;
use crate::token::Token;

/// Splits text on Unicode whitespace.
///
/// Every token gets position increment 1 and kind `"word"`.
pub struct WhitespaceTokenizer {
    text: String,
    pos: usize,
}

impl WhitespaceTokenizer {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pos: 0,
        }
    }
}

impl TokenStream for WhitespaceTokenizer {
    type Error = Infallible;

    fn next_token(&mut self) -> Result<Option<Token>, Infallible> {
        let rest = &self.text[self.pos..];
        let Some((skip, _)) = rest.char_indices().find(|(_, c)| !c.is_whitespace()) else {
            self.pos = self.text.len();
            return Ok(None);
        };
        let start = self.pos + skip;
        let end = self.text[start..]
            .char_indices()
            .find(|(_, c)| c.is_whitespace())
            .map_or(self.text.len(), |(i, _)| start + i);
        self.pos = end;
        Ok(Some(Token::new(&self.text[start..end], start, end)))
    }

    fn reset(&mut self) {
        self.pos = 0;
    }
}
