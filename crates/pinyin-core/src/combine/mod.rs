//! Word-level reading expansion.
//!
//! A word's readings are the cross-product of its characters' readings:
//! 重量 with 重 ∈ {zhong, chong} and 量 ∈ {liang} yields {zhongliang,
//! chongliang}. Characters without a reading contribute nothing, so mixed
//! text like "A股" still expands to the readings of 股.

mod reading_set;
#[cfg(test)]
mod tests;

use std::sync::Arc;

use tracing::{debug, debug_span};

use crate::config::OutputMode;
use crate::lookup::PhoneticLookup;
use crate::unicode::{first_symbol, hanzi_count};

pub use reading_set::ReadingSet;

/// Whether `text` holds at least `min_len` Chinese ideographs.
pub fn qualifies(text: &str, min_len: usize) -> bool {
    hanzi_count(text) >= min_len
}

fn whole(reading: &str) -> Option<&str> {
    Some(reading)
}

pub struct ReadingCombiner {
    lookup: Arc<dyn PhoneticLookup>,
    max_readings: Option<usize>,
}

impl ReadingCombiner {
    pub fn new(lookup: Arc<dyn PhoneticLookup>) -> Self {
        Self {
            lookup,
            max_readings: None,
        }
    }

    /// Stop growing a reading set once it holds `limit` readings.
    ///
    /// The cap applies to each computed set, so `OutputMode::Both` can emit up
    /// to twice the limit.
    pub fn with_max_readings(mut self, limit: Option<usize>) -> Self {
        self.max_readings = limit;
        self
    }

    /// Concatenated full readings, e.g. 中国 → {"zhongguo"}.
    pub fn full_readings(&self, text: &str) -> ReadingSet {
        self.combine(text, whole)
    }

    /// Concatenated leading symbols, e.g. 中国 → {"zg"}.
    pub fn abbrev_readings(&self, text: &str) -> ReadingSet {
        self.combine(text, first_symbol)
    }

    /// Readings for `mode`. `Both` puts abbreviations ahead of full readings.
    pub fn readings(&self, text: &str, mode: OutputMode) -> ReadingSet {
        match mode {
            OutputMode::Full => self.full_readings(text),
            OutputMode::Abbreviated => self.abbrev_readings(text),
            OutputMode::Both => {
                let mut set = self.abbrev_readings(text);
                set.extend(self.full_readings(text));
                set
            }
        }
    }

    /// Per-symbol candidates after `project`, deduplicated.
    ///
    /// Lookup errors and readings that project to nothing are dropped here;
    /// the symbol then simply contributes fewer (or no) candidates.
    fn candidates<'r>(
        &self,
        symbol: char,
        readings: &'r [String],
        project: fn(&str) -> Option<&str>,
    ) -> Vec<&'r str> {
        let mut out: Vec<&str> = Vec::with_capacity(readings.len());
        for reading in readings {
            match project(reading) {
                Some(p) if !p.is_empty() => {
                    if !out.contains(&p) {
                        out.push(p);
                    }
                }
                _ => debug!(%symbol, reading = reading.as_str(), "skipping malformed reading"),
            }
        }
        out
    }

    fn combine(&self, text: &str, project: fn(&str) -> Option<&str>) -> ReadingSet {
        let _span = debug_span!("combine", text).entered();
        let mut acc = ReadingSet::new();

        for symbol in text.chars() {
            let readings = match self.lookup.readings_for(symbol) {
                Ok(r) => r,
                Err(e) => {
                    debug!(%symbol, "lookup failed, symbol skipped: {e}");
                    continue;
                }
            };
            let candidates = self.candidates(symbol, &readings, project);
            if candidates.is_empty() {
                continue;
            }

            if acc.is_empty() {
                for c in &candidates {
                    if self.at_limit(acc.len()) {
                        break;
                    }
                    acc.insert(c.to_string());
                }
                continue;
            }

            let capacity = acc
                .len()
                .saturating_mul(candidates.len())
                .min(self.max_readings.unwrap_or(usize::MAX));
            let mut next = ReadingSet::with_capacity(capacity);
            'prefixes: for prefix in acc.iter() {
                for c in &candidates {
                    if self.at_limit(next.len()) {
                        debug!(limit = next.len(), "reading cap reached");
                        break 'prefixes;
                    }
                    let mut reading = String::with_capacity(prefix.len() + c.len());
                    reading.push_str(prefix);
                    reading.push_str(c);
                    next.insert(reading);
                }
            }
            acc = next;
        }

        debug!(readings = acc.len());
        acc
    }

    fn at_limit(&self, len: usize) -> bool {
        self.max_readings.is_some_and(|max| len >= max)
    }
}
