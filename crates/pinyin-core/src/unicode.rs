//! Character-level Unicode classification for Chinese text.

/// CJK Unified Ideographs plus Extensions A and B.
///
/// Compatibility ideographs (U+F900..U+FAFF) are left out: the phonetic tables
/// key on the unified code points, so counting them would qualify tokens that
/// can never produce a reading.
pub fn is_hanzi(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || ('\u{3400}'..='\u{4DBF}').contains(&c)
        || ('\u{20000}'..='\u{2A6DF}').contains(&c)
}

/// Number of Chinese ideographs in `s`.
pub fn hanzi_count(s: &str) -> usize {
    s.chars().filter(|&c| is_hanzi(c)).count()
}

pub fn contains_hanzi(s: &str) -> bool {
    s.chars().any(is_hanzi)
}

/// The leading symbol of a reading as a subslice, or `None` for an empty reading.
pub fn first_symbol(reading: &str) -> Option<&str> {
    reading.chars().next().map(|c| &reading[..c.len_utf8()])
}
