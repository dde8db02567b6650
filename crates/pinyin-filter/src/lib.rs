//! Pull-based token streams for pinyin annotation.
//!
//! Every stage implements `TokenStream`: the tokenizer produces word tokens,
//! `PinyinTransformFilter` adds pinyin readings at the same position, and
//! `PinyinNGramFilter` splits pinyin tokens into n-grams. Stages are chained
//! by wrapping one stream in the next and pulling from the outermost.

mod ngram;
mod stream;
#[cfg(test)]
mod tests;
mod token;
mod tokenizer;
mod transform;

pub use ngram::{PinyinNGramFilter, NGRAM_KIND};
pub use stream::{IterSource, TokenIter, TokenStream};
pub use token::{Token, WORD_KIND};
pub use tokenizer::WhitespaceTokenizer;
pub use transform::{PinyinTransformFilter, TransformFactory};
