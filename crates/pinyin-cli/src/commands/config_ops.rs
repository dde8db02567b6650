use std::fs;

use pinyin_engine::settings;

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    let ngram = match &s.ngram {
        Some(n) => format!("{}..={}", n.min_gram(), n.max_gram()),
        None => "off".to_string(),
    };
    println!(
        "OK: transform.output_mode={}, transform.emit_original={}, transform.min_qualifying_length={}, ngram={}, readings={}",
        s.transform.output_mode(),
        s.transform.emit_original(),
        s.transform.min_qualifying_length(),
        ngram,
        s.readings.len()
    );
}
