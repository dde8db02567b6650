use std::collections::HashMap;
use std::sync::Arc;

use pinyin_core::combine::qualifies;
use pinyin_core::{ConfigError, PhoneticLookup, ReadingCombiner, TransformConfig};
use tracing::debug;

use crate::stream::TokenStream;
use crate::token::Token;

/// Builds transform filters that share one configuration and lookup.
///
/// Configuration is validated once here; every stream created afterwards gets
/// its own expansion state.
#[derive(Clone)]
pub struct TransformFactory {
    config: Arc<TransformConfig>,
    lookup: Arc<dyn PhoneticLookup>,
}

impl TransformFactory {
    pub fn new(config: TransformConfig, lookup: Arc<dyn PhoneticLookup>) -> Self {
        Self {
            config: Arc::new(config),
            lookup,
        }
    }

    /// See `TransformConfig::from_args` for the recognised keys.
    pub fn from_args(
        args: HashMap<String, String>,
        lookup: Arc<dyn PhoneticLookup>,
    ) -> Result<Self, ConfigError> {
        Ok(Self::new(TransformConfig::from_args(args)?, lookup))
    }

    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    pub fn create<S: TokenStream>(&self, input: S) -> PinyinTransformFilter<S> {
        PinyinTransformFilter::new(input, Arc::clone(&self.lookup), Arc::clone(&self.config))
    }
}

/// Adds pinyin readings after each token with enough Chinese characters.
///
/// For a qualifying source the filter emits the source (when
/// `emit_original` is set) followed by every reading, one per
/// `next_token` call. The first token emitted for a source keeps the source's
/// position increment; the rest use 0 so they share its position. Readings
/// keep the source's offsets.
pub struct PinyinTransformFilter<S> {
    input: S,
    config: Arc<TransformConfig>,
    combiner: ReadingCombiner,
    state: State,
}

enum State {
    Idle,
    Expanding(Expansion),
}

/// Progress through one source token.
struct Expansion {
    source: Token,
    original_emitted: bool,
    /// Anything emitted for this source yet; later tokens get increment 0.
    emitted: bool,
    /// `None` until the readings have been computed.
    pending: Option<std::vec::IntoIter<String>>,
}

impl Expansion {
    fn new(source: Token) -> Self {
        Self {
            source,
            original_emitted: false,
            emitted: false,
            pending: None,
        }
    }
}

impl<S: TokenStream> PinyinTransformFilter<S> {
    pub fn new(input: S, lookup: Arc<dyn PhoneticLookup>, config: Arc<TransformConfig>) -> Self {
        let combiner = ReadingCombiner::new(lookup).with_max_readings(config.max_readings());
        Self {
            input,
            config,
            combiner,
            state: State::Idle,
        }
    }

    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    /// Produce the next token for the current source, or `None` when the
    /// source is exhausted.
    fn step(&mut self) -> Option<Token> {
        let State::Expanding(exp) = &mut self.state else {
            return None;
        };

        if self.config.emit_original() && !exp.original_emitted && exp.pending.is_none() {
            exp.original_emitted = true;
            exp.emitted = true;
            return Some(exp.source.clone());
        }

        if exp.pending.is_none() {
            let text = exp.source.text.as_str();
            if !qualifies(text, self.config.min_qualifying_length()) {
                return None;
            }
            let readings = self.combiner.readings(text, self.config.output_mode());
            debug!(text, readings = readings.len(), "expanding");
            exp.pending = Some(readings.into_iter());
        }

        let reading = exp.pending.as_mut()?.next()?;
        let increment = if exp.emitted {
            0
        } else {
            exp.source.position_increment
        };
        exp.emitted = true;
        Some(
            exp.source
                .derive(reading, self.config.output_mode().kind_tag(), increment),
        )
    }
}

impl<S: TokenStream> TokenStream for PinyinTransformFilter<S> {
    type Error = S::Error;

    fn next_token(&mut self) -> Result<Option<Token>, S::Error> {
        loop {
            if let State::Idle = self.state {
                match self.input.next_token()? {
                    Some(source) => self.state = State::Expanding(Expansion::new(source)),
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
