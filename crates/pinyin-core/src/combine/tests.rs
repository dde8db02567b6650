use std::collections::BTreeSet;
use std::sync::Arc;

use super::{qualifies, ReadingCombiner, ReadingSet};
use crate::config::OutputMode;
use crate::lookup::{LookupError, PhoneticLookup, TableLookup};

fn combiner(pairs: &[(char, &[&str])]) -> ReadingCombiner {
    let mut table = TableLookup::new();
    for (c, readings) in pairs {
        table.insert(*c, readings.iter().copied());
    }
    ReadingCombiner::new(Arc::new(table))
}

fn set(readings: &ReadingSet) -> BTreeSet<&str> {
    readings.iter().map(String::as_str).collect()
}

/// Fails for one symbol, delegates everything else.
struct FlakyLookup {
    inner: TableLookup,
    broken: char,
}

impl PhoneticLookup for FlakyLookup {
    fn readings_for(&self, symbol: char) -> Result<Vec<String>, LookupError> {
        if symbol == self.broken {
            return Err(LookupError::Unavailable("table offline".to_string()));
        }
        self.inner.readings_for(symbol)
    }
}

#[test]
fn test_full_single_readings() {
    let c = combiner(&[('和', &["he"]), ('平', &["ping"])]);
    assert_eq!(set(&c.full_readings("和平")), BTreeSet::from(["heping"]));
}

#[test]
fn test_abbrev_single_readings() {
    let c = combiner(&[('和', &["he"]), ('平', &["ping"])]);
    assert_eq!(set(&c.abbrev_readings("和平")), BTreeSet::from(["hp"]));
}

#[test]
fn test_full_cross_product() {
    let c = combiner(&[('中', &["zhong", "chong"]), ('国', &["guo", "kuo"])]);
    assert_eq!(
        set(&c.full_readings("中国")),
        BTreeSet::from(["zhongguo", "zhongkuo", "chongguo", "chongkuo"])
    );
}

#[test]
fn test_abbrev_distinct_initials() {
    let c = combiner(&[('中', &["zhong", "chong"]), ('国', &["guo", "kuo"])]);
    assert_eq!(
        set(&c.abbrev_readings("中国")),
        BTreeSet::from(["zg", "zk", "cg", "ck"])
    );
}

#[test]
fn test_abbrev_collisions_collapse() {
    let c = combiner(&[('中', &["zhong", "zhang"]), ('国', &["guo", "gui"])]);
    assert_eq!(set(&c.abbrev_readings("中国")), BTreeSet::from(["zg"]));
}

#[test]
fn test_cross_product_size() {
    let c = combiner(&[
        ('还', &["hai", "huan"]),
        ('乐', &["le", "yue", "lao"]),
        ('家', &["jia"]),
    ]);
    assert_eq!(c.full_readings("还乐家").len(), 2 * 3 * 1);
}

#[test]
fn test_unknown_symbols_skipped() {
    let c = combiner(&[('和', &["he"]), ('平', &["ping"])]);
    assert_eq!(set(&c.full_readings("A和-平x")), BTreeSet::from(["heping"]));
    assert_eq!(set(&c.full_readings("和?")), BTreeSet::from(["he"]));
}

#[test]
fn test_nothing_contributes_is_empty() {
    let c = combiner(&[('和', &["he"])]);
    assert!(c.full_readings("and").is_empty());
    assert!(c.abbrev_readings("").is_empty());
    assert!(c.full_readings("中国").is_empty());
}

#[test]
fn test_lookup_error_swallowed() {
    let mut inner = TableLookup::new();
    inner.insert('和', ["he"]);
    inner.insert('平', ["ping"]);
    inner.insert('坏', ["huai"]);
    let c = ReadingCombiner::new(Arc::new(FlakyLookup { inner, broken: '坏' }));
    assert_eq!(set(&c.full_readings("和坏平")), BTreeSet::from(["heping"]));
}

#[test]
fn test_empty_reading_swallowed() {
    let mut table = TableLookup::new();
    table.insert('和', ["he"]);
    table.insert('空', [""]);
    let c = ReadingCombiner::new(Arc::new(table));
    assert_eq!(set(&c.full_readings("和空")), BTreeSet::from(["he"]));
    assert_eq!(set(&c.abbrev_readings("和空")), BTreeSet::from(["h"]));
}

#[test]
fn test_both_puts_abbreviations_first() {
    let c = combiner(&[('和', &["he"]), ('平', &["ping"])]);
    let both = c.readings("和平", OutputMode::Both);
    assert_eq!(both.as_slice(), ["hp", "heping"]);
}

#[test]
fn test_both_dedups_across_sets() {
    let c = combiner(&[('饿', &["e"])]);
    let both = c.readings("饿饿", OutputMode::Both);
    assert_eq!(both.as_slice(), ["ee"]);
}

#[test]
fn test_mode_dispatch() {
    let c = combiner(&[('中', &["zhong"]), ('国', &["guo"])]);
    assert_eq!(c.readings("中国", OutputMode::Full).as_slice(), ["zhongguo"]);
    assert_eq!(c.readings("中国", OutputMode::Abbreviated).as_slice(), ["zg"]);
}

#[test]
fn test_repeated_calls_identical() {
    let c = combiner(&[
        ('长', &["chang", "zhang"]),
        ('行', &["xing", "hang"]),
        ('重', &["zhong", "chong"]),
    ]);
    let first = c.full_readings("长行重");
    for _ in 0..5 {
        let again = c.full_readings("长行重");
        assert_eq!(again.as_slice(), first.as_slice());
        assert_eq!(again, first);
    }
}

#[test]
fn test_max_readings_caps_set() {
    let c = combiner(&[
        ('长', &["chang", "zhang"]),
        ('行', &["xing", "hang"]),
        ('重', &["zhong", "chong"]),
    ])
    .with_max_readings(Some(3));
    let capped = c.full_readings("长行重");
    assert_eq!(capped.len(), 3);
    assert!(capped.contains("changxingzhong"));
}

#[test]
fn test_max_readings_caps_seed() {
    let c = combiner(&[('和', &["he", "huo", "hu"])]).with_max_readings(Some(2));
    assert_eq!(c.full_readings("和").as_slice(), ["he", "huo"]);
}

#[test]
fn test_qualifies() {
    assert!(qualifies("和平", 2));
    assert!(!qualifies("和", 2));
    assert!(qualifies("和", 1));
    assert!(!qualifies("and", 1));
    assert!(qualifies("A股市场", 3));
}
