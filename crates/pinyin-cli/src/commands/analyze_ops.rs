use std::path::Path;

use serde::Serialize;

use pinyin_engine::settings::{self, Settings};
use pinyin_engine::{Analyzer, ConfigError, NGramConfig, OutputMode, Token, TransformConfig};

/// Command-line overrides applied on top of the loaded settings.
#[derive(Debug, Default)]
pub struct AnalyzeOptions {
    pub settings: Option<String>,
    pub mode: Option<String>,
    pub min_length: Option<usize>,
    pub no_original: bool,
    pub ngram: Option<(usize, usize)>,
    pub json: bool,
}

#[derive(Serialize)]
struct TokenLine<'a> {
    position: u32,
    #[serde(flatten)]
    token: &'a Token,
}

fn load_settings(path: Option<&str>) -> Settings {
    match path {
        Some(p) => die!(
            settings::load_settings_file(Path::new(p)),
            "Error loading {p}: {}"
        ),
        None => settings::settings().clone(),
    }
}

fn apply_overrides(mut s: Settings, opts: &AnalyzeOptions) -> Result<Settings, ConfigError> {
    let base = &s.transform;
    let mode = match &opts.mode {
        Some(m) => m.parse::<OutputMode>()?,
        None => base.output_mode(),
    };
    let mut transform = TransformConfig::new(
        base.emit_original() && !opts.no_original,
        mode,
        opts.min_length.unwrap_or(base.min_qualifying_length()),
    );
    if let Some(max) = base.max_readings() {
        transform = transform.with_max_readings(max)?;
    }
    s.transform = transform;

    if let Some((min, max)) = opts.ngram {
        s.ngram = Some(NGramConfig::new(min, max, true)?);
    }
    Ok(s)
}

/// `position[start,end] (kind) text`
pub fn format_token(position: u32, token: &Token) -> String {
    format!(
        "{position}[{},{}] ({}) {}",
        token.start_offset, token.end_offset, token.kind, token.text
    )
}

/// Pair every token with its absolute position (running sum of increments).
pub fn with_positions(tokens: &[Token]) -> Vec<(u32, &Token)> {
    let mut position = 0;
    tokens
        .iter()
        .map(|t| {
            position += t.position_increment;
            (position, t)
        })
        .collect()
}

pub fn analyze(text: &str, opts: &AnalyzeOptions) {
    let s = load_settings(opts.settings.as_deref());
    let s = die!(apply_overrides(s, opts), "Error: {}");
    let analyzer = Analyzer::from_settings(&s);
    let tokens = analyzer.analyze(text);

    for (position, token) in with_positions(&tokens) {
        if opts.json {
            let line = TokenLine { position, token };
            println!(
                "{}",
                die!(serde_json::to_string(&line), "Error serializing token: {}")
            );
        } else {
            println!("{}", format_token(position, token));
        }
    }
}

pub fn readings(text: &str, mode: Option<&str>, settings_file: Option<&str>) {
    let s = load_settings(settings_file);
    let mode = match mode {
        Some(m) => die!(m.parse::<OutputMode>(), "Error: {}"),
        None => s.transform.output_mode(),
    };
    let analyzer = Analyzer::from_settings(&s);
    let set = analyzer.readings(text, mode);
    if set.is_empty() {
        eprintln!("No readings for {text}");
        std::process::exit(1);
    }
    for reading in &set {
        println!("{reading}");
    }
}
