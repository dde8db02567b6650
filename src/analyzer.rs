use std::convert::Infallible;
use std::sync::Arc;

use pinyin_core::settings::Settings;
use pinyin_core::{
    BuiltinLookup, LayeredLookup, NGramConfig, OutputMode, PhoneticLookup, ReadingCombiner,
    ReadingSet, TransformConfig,
};
use pinyin_filter::{PinyinNGramFilter, Token, TokenStream, TransformFactory, WhitespaceTokenizer};
use tracing::debug;

/// Whitespace tokenizer, pinyin transform and optional n-gram filter in one
/// chain. Holds shared, immutable resources; each `stream` call gets fresh
/// filter state.
#[derive(Clone)]
pub struct Analyzer {
    lookup: Arc<dyn PhoneticLookup>,
    transform: TransformFactory,
    ngram: Option<Arc<NGramConfig>>,
}

impl Analyzer {
    pub fn new(
        lookup: Arc<dyn PhoneticLookup>,
        transform: TransformConfig,
        ngram: Option<NGramConfig>,
    ) -> Self {
        Self {
            transform: TransformFactory::new(transform, Arc::clone(&lookup)),
            lookup,
            ngram: ngram.map(Arc::new),
        }
    }

    /// Builtin dictionary with the settings' `[readings]` table on top.
    pub fn from_settings(settings: &Settings) -> Self {
        let mut lookup = LayeredLookup::new(vec![Arc::new(BuiltinLookup::new())]);
        if !settings.readings.is_empty() {
            debug!(symbols = settings.readings.len(), "layering custom readings");
            lookup.push(Arc::new(settings.readings.clone()));
        }
        Self::new(
            Arc::new(lookup),
            settings.transform.clone(),
            settings.ngram.clone(),
        )
    }

    /// Analyzer over the process-wide settings (see `settings::init_custom`).
    pub fn from_global_settings() -> Self {
        Self::from_settings(pinyin_core::settings::settings())
    }

    pub fn transform_config(&self) -> &TransformConfig {
        self.transform.config()
    }

    pub fn ngram_config(&self) -> Option<&NGramConfig> {
        self.ngram.as_deref()
    }

    pub fn stream(&self, text: impl Into<String>) -> Box<dyn TokenStream<Error = Infallible> + Send> {
        let transform = self.transform.create(WhitespaceTokenizer::new(text));
        match &self.ngram {
            Some(config) => Box::new(PinyinNGramFilter::new(transform, Arc::clone(config))),
            None => Box::new(transform),
        }
    }

    pub fn analyze(&self, text: &str) -> Vec<Token> {
        self.stream(text)
            .tokens()
            .map(|r| r.unwrap_or_else(|e| match e {}))
            .collect()
    }

    /// Readings for a single word, ignoring the qualifying-length rule.
    pub fn readings(&self, text: &str, mode: OutputMode) -> ReadingSet {
        ReadingCombiner::new(Arc::clone(&self.lookup))
            .with_max_readings(self.transform_config().max_readings())
            .readings(text, mode)
    }
}
