//! Filter configuration records.
//!
//! `TransformConfig` drives the pinyin transform state machine and
//! `NGramConfig` the n-gram filter. Both are validated once at construction
//! and are read-only afterwards, so a single instance can be shared (behind an
//! `Arc`) by every stream built from it.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_EMIT_ORIGINAL: bool = true;
pub const DEFAULT_OUTPUT_MODE: OutputMode = OutputMode::Both;
pub const DEFAULT_MIN_QUALIFYING_LENGTH: usize = 2;
pub const DEFAULT_MIN_GRAM: usize = 1;
pub const DEFAULT_MAX_GRAM: usize = 20;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unknown output mode {0:?} (expected \"full\", \"short\" or \"both\")")]
    UnknownOutputMode(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("unknown parameters: {}", .0.join(", "))]
    UnknownParameters(Vec<String>),
    #[error("settings already initialized")]
    AlreadyInitialized,
}

impl ConfigError {
    fn invalid(field: &str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

/// Which reading sets the transform emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputMode {
    /// Whole readings concatenated: 中国 → "zhongguo".
    Full,
    /// First symbol of every reading: 中国 → "zg".
    Abbreviated,
    /// Abbreviations first, then full readings.
    #[default]
    Both,
}

impl OutputMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Abbreviated => "short",
            Self::Both => "both",
        }
    }

    /// Token kind attached to every reading emitted under this mode.
    pub fn kind_tag(self) -> &'static str {
        match self {
            Self::Full => "full_pinyin",
            Self::Abbreviated => "short_pinyin",
            Self::Both => "both_pinyin",
        }
    }
}

impl FromStr for OutputMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(Self::Full),
            "short" => Ok(Self::Abbreviated),
            "both" => Ok(Self::Both),
            other => Err(ConfigError::UnknownOutputMode(other.to_string())),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformConfig {
    emit_original: bool,
    output_mode: OutputMode,
    min_qualifying_length: usize,
    max_readings: Option<usize>,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_EMIT_ORIGINAL,
            DEFAULT_OUTPUT_MODE,
            DEFAULT_MIN_QUALIFYING_LENGTH,
        )
    }
}

impl TransformConfig {
    /// `min_qualifying_length` below 1 is clamped to 1.
    pub fn new(emit_original: bool, output_mode: OutputMode, min_qualifying_length: usize) -> Self {
        Self {
            emit_original,
            output_mode,
            min_qualifying_length: min_qualifying_length.max(1),
            max_readings: None,
        }
    }

    /// Cap the number of readings computed per source token.
    ///
    /// The cross-product grows multiplicatively with word length, so long
    /// words made of polyphonic characters can otherwise produce thousands of
    /// readings. `0` is rejected.
    pub fn with_max_readings(mut self, max_readings: usize) -> Result<Self, ConfigError> {
        if max_readings == 0 {
            return Err(ConfigError::invalid("max_readings", "must be positive"));
        }
        self.max_readings = Some(max_readings);
        Ok(self)
    }

    /// Build from string parameters, consuming the recognised keys.
    ///
    /// Keys: `emit_original`, `output_mode`, `min_qualifying_length`,
    /// `max_readings`. Any key left over is reported as unknown.
    pub fn from_args(mut args: HashMap<String, String>) -> Result<Self, ConfigError> {
        let emit_original = take_bool(&mut args, "emit_original", DEFAULT_EMIT_ORIGINAL)?;
        let output_mode = match args.remove("output_mode") {
            Some(v) => v.parse()?,
            None => DEFAULT_OUTPUT_MODE,
        };
        let min_len = take_int(
            &mut args,
            "min_qualifying_length",
            DEFAULT_MIN_QUALIFYING_LENGTH as i64,
        )?;
        let max_readings = take_opt_usize(&mut args, "max_readings")?;
        reject_leftovers(args)?;

        // Negative lengths clamp like zero does.
        let config = Self::new(emit_original, output_mode, min_len.max(1) as usize);
        match max_readings {
            Some(n) => config.with_max_readings(n),
            None => Ok(config),
        }
    }

    pub fn emit_original(&self) -> bool {
        self.emit_original
    }

    pub fn output_mode(&self) -> OutputMode {
        self.output_mode
    }

    pub fn min_qualifying_length(&self) -> usize {
        self.min_qualifying_length
    }

    pub fn max_readings(&self) -> Option<usize> {
        self.max_readings
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NGramConfig {
    min_gram: usize,
    max_gram: usize,
    emit_original: bool,
}

impl Default for NGramConfig {
    fn default() -> Self {
        Self {
            min_gram: DEFAULT_MIN_GRAM,
            max_gram: DEFAULT_MAX_GRAM,
            emit_original: true,
        }
    }
}

impl NGramConfig {
    pub fn new(min_gram: usize, max_gram: usize, emit_original: bool) -> Result<Self, ConfigError> {
        if min_gram == 0 {
            return Err(ConfigError::invalid("min_gram", "must be positive"));
        }
        if max_gram < min_gram {
            return Err(ConfigError::invalid(
                "max_gram",
                format!("must be >= min_gram ({min_gram})"),
            ));
        }
        Ok(Self {
            min_gram,
            max_gram,
            emit_original,
        })
    }

    /// Keys: `min_gram`, `max_gram`, `emit_original`.
    pub fn from_args(mut args: HashMap<String, String>) -> Result<Self, ConfigError> {
        let min_gram = take_int(&mut args, "min_gram", DEFAULT_MIN_GRAM as i64)?;
        let max_gram = take_int(&mut args, "max_gram", DEFAULT_MAX_GRAM as i64)?;
        let emit_original = take_bool(&mut args, "emit_original", true)?;
        reject_leftovers(args)?;
        if min_gram < 1 {
            return Err(ConfigError::invalid("min_gram", "must be positive"));
        }
        Self::new(min_gram as usize, max_gram.max(0) as usize, emit_original)
    }

    pub fn min_gram(&self) -> usize {
        self.min_gram
    }

    pub fn max_gram(&self) -> usize {
        self.max_gram
    }

    pub fn emit_original(&self) -> bool {
        self.emit_original
    }
}

fn take_bool(
    args: &mut HashMap<String, String>,
    key: &str,
    default: bool,
) -> Result<bool, ConfigError> {
    match args.remove(key) {
        Some(v) => v
            .trim()
            .parse()
            .map_err(|_| ConfigError::invalid(key, format!("expected true or false, got {v:?}"))),
        None => Ok(default),
    }
}

fn take_int(
    args: &mut HashMap<String, String>,
    key: &str,
    default: i64,
) -> Result<i64, ConfigError> {
    match args.remove(key) {
        Some(v) => v
            .trim()
            .parse()
            .map_err(|_| ConfigError::invalid(key, format!("expected an integer, got {v:?}"))),
        None => Ok(default),
    }
}

fn take_opt_usize(
    args: &mut HashMap<String, String>,
    key: &str,
) -> Result<Option<usize>, ConfigError> {
    args.remove(key)
        .map(|v| {
            v.trim().parse().map_err(|_| {
                ConfigError::invalid(key, format!("expected a non-negative integer, got {v:?}"))
            })
        })
        .transpose()
}

fn reject_leftovers(args: HashMap<String, String>) -> Result<(), ConfigError> {
    if args.is_empty() {
        return Ok(());
    }
    let mut keys: Vec<String> = args.into_keys().collect();
    keys.sort();
    Err(ConfigError::UnknownParameters(keys))
}
