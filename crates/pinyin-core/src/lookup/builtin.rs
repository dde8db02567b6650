use pinyin::ToPinyinMulti;

use super::{LookupError, PhoneticLookup};

/// Readings from the `pinyin` crate's embedded table.
///
/// Readings are lowercase and toneless. Heteronyms that only differ by tone
/// collapse into one reading, so 和 yields `he`, `huo`, `hu` rather than one
/// entry per tone.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinLookup;

impl BuiltinLookup {
    pub fn new() -> Self {
        Self
    }
}

impl PhoneticLookup for BuiltinLookup {
    fn readings_for(&self, symbol: char) -> Result<Vec<String>, LookupError> {
        let Some(multi) = symbol.to_pinyin_multi() else {
            return Ok(Vec::new());
        };
        let mut readings: Vec<String> = Vec::with_capacity(multi.count());
        for i in 0..multi.count() {
            let plain = multi.get(i).plain();
            if plain.is_empty() {
                return Err(LookupError::Malformed {
                    symbol,
                    reading: plain.to_string(),
                });
            }
            if !readings.iter().any(|r| r == plain) {
                readings.push(plain.to_string());
            }
        }
        Ok(readings)
    }
}
