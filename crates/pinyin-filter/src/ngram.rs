use std::sync::Arc;

use pinyin_core::unicode::contains_hanzi;
use pinyin_core::NGramConfig;

use crate::stream::TokenStream;
use crate::token::Token;

pub const NGRAM_KIND: &str = "pinyin_ngram";

/// Splits pinyin (or any non-Chinese) tokens into character n-grams so that
/// partial input like "zhongg" matches "zhongguo".
///
/// Tokens containing Chinese characters pass through untouched. Grams are
/// ordered by start position, then by length, share the source's offsets and
/// stack on the source's position.
pub struct PinyinNGramFilter<S> {
    input: S,
    config: Arc<NGramConfig>,
    state: State,
}

enum State {
    Idle,
    Expanding(Expansion),
}

struct Expansion {
    source: Token,
    /// Byte offset of every char boundary in `source.text`, including the end.
    bounds: Vec<usize>,
    passthrough: bool,
    original_done: bool,
    emitted: bool,
    start: usize,
    size: usize,
}

impl Expansion {
    fn new(source: Token, min_gram: usize) -> Self {
        let mut bounds: Vec<usize> = source.text.char_indices().map(|(i, _)| i).collect();
        bounds.push(source.text.len());
        Self {
            passthrough: contains_hanzi(&source.text),
            source,
            bounds,
            original_done: false,
            emitted: false,
            start: 0,
            size: min_gram,
        }
    }

    fn char_len(&self) -> usize {
        self.bounds.len() - 1
    }

    /// Advance the (start, size) cursor to the next gram.
    fn next_gram(&mut self, min: usize, max: usize, skip_whole: bool) -> Option<(usize, usize)> {
        let len = self.char_len();
        while self.start + min <= len {
            let size = self.size;
            if size > max.min(len - self.start) {
                self.start += 1;
                self.size = min;
                continue;
            }
            self.size += 1;
            if skip_whole && self.start == 0 && size == len {
                continue;
            }
            return Some((self.start, size));
        }
        None
    }
}

impl<S: TokenStream> PinyinNGramFilter<S> {
    pub fn new(input: S, config: Arc<NGramConfig>) -> Self {
        Self {
            input,
            config,
            state: State::Idle,
        }
    }

    fn step(&mut self) -> Option<Token> {
        let State::Expanding(exp) = &mut self.state else {
            return None;
        };

        if !exp.original_done {
            exp.original_done = true;
            if exp.passthrough || self.config.emit_original() {
                exp.emitted = true;
                return Some(exp.source.clone());
            }
        }
        if exp.passthrough {
            return None;
        }

        let (start, size) = exp.next_gram(
            self.config.min_gram(),
            self.config.max_gram(),
            self.config.emit_original(),
        )?;
        let text = exp.source.text[exp.bounds[start]..exp.bounds[start + size]].to_string();
        let increment = if exp.emitted {
            0
        } else {
            exp.source.position_increment
        };
        exp.emitted = true;
        Some(exp.source.derive(text, NGRAM_KIND, increment))
    }
}

impl<S: TokenStream> TokenStream for PinyinNGramFilter<S> {
    type Error = S::Error;

    fn next_token(&mut self) -> Result<Option<Token>, S::Error> {
        loop {
            if let State::Idle = self.state {
                match self.input.next_token()? {
                    Some(source) => {
                        self.state =
                            State::Expanding(Expansion::new(source, self.config.min_gram()))
                    }
                    None => return Ok(None),
                }
            }
            if let Some(token) = self.step() {
                return Ok(Some(token));
            }
            self.state = State::Idle;
        }
    }

    fn reset(&mut self) {
        self.input.reset();
        self.state = State::Idle;
    }
}
