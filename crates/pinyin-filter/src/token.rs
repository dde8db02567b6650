use std::borrow::Cow;

use serde::Serialize;

/// Kind assigned by the tokenizer.
pub const WORD_KIND: &str = "word";

/// One unit of analysed text.
///
/// Offsets are byte offsets into the analysed input. A `position_increment`
/// of 0 places the token at the same logical position as the previous one,
/// which is how readings stack on top of their source word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub text: String,
    pub start_offset: usize,
    pub end_offset: usize,
    pub position_increment: u32,
    pub kind: Cow<'static, str>,
}

impl Token {
    pub fn new(text: impl Into<String>, start_offset: usize, end_offset: usize) -> Self {
        Self {
            text: text.into(),
            start_offset,
            end_offset,
            position_increment: 1,
            kind: Cow::Borrowed(WORD_KIND),
        }
    }

    pub fn with_position_increment(mut self, position_increment: u32) -> Self {
        self.position_increment = position_increment;
        self
    }

    pub fn with_kind(mut self, kind: impl Into<Cow<'static, str>>) -> Self {
        self.kind = kind.into();
        self
    }

    /// A token derived from this one: new text and kind, same span.
    pub(crate) fn derive(&self, text: String, kind: &'static str, position_increment: u32) -> Self {
        Self {
            text,
            start_offset: self.start_offset,
            end_offset: self.end_offset,
            position_increment,
            kind: Cow::Borrowed(kind),
        }
    }
}
