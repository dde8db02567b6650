//! Pinyin annotation for tokenized Chinese text.
//!
//! `Analyzer` wires the pieces together: whitespace tokenizer, pinyin
//! transform, and optionally the n-gram filter, configured from TOML
//! settings. The building blocks are re-exported for callers that assemble
//! their own chains.

pub mod analyzer;
pub mod trace_init;

pub use analyzer::Analyzer;
pub use pinyin_core::settings::{self, Settings};
pub use pinyin_core::{
    BuiltinLookup, ConfigError, LayeredLookup, LookupError, NGramConfig, OutputMode,
    PhoneticLookup, ReadingCombiner, ReadingSet, TableLookup, TransformConfig,
};
pub use pinyin_filter::{
    IterSource, PinyinNGramFilter, PinyinTransformFilter, Token, TokenIter, TokenStream,
    TransformFactory, WhitespaceTokenizer,
};

pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
