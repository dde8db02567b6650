
use std::fmt::Debug;
use std::sync::Arc;

use pinyin_core::{PhoneticLookup, TableLookup};

use crate::{Token, TokenStream};

/// Readings used throughout the stream tests. No reading is a prefix of
/// another, so concatenations never collide.
pub(super) const TABLE: &[(char, &[&str])] = &[
    ('和', &["he"]),
    ('平', &["ping"]),
    ('重', &["zhong", "chong"]),
    ('量', &["liang"]),
    ('中', &["zhong"]),
    ('国', &["guo"]),
    ('乐', &["le", "yue"]),
];

pub(super) fn table_lookup(pairs: &[(char, &[&str])]) -> Arc<dyn PhoneticLookup> {
    let mut table = TableLookup::new();
    for (c, readings) in pairs {
        table.insert(*c, readings.iter().copied());
    }
    Arc::new(table)
}

pub(super) fn collect<S>(stream: S) -> Vec<Token>
where
    S: TokenStream,
    S::Error: Debug,
{
    stream.tokens().collect::<Result<Vec<_>, _>>().unwrap()
}

pub(super) fn texts(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

pub(super) fn kinds(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.kind.as_ref()).collect()
}

pub(super) fn increments(tokens: &[Token]) -> Vec<u32> {
    tokens.iter().map(|t| t.position_increment).collect()
}

/// Absolute positions, counting from 1 like a downstream indexer would.
pub(super) fn positions(tokens: &[Token]) -> Vec<u32> {
    let mut pos = 0;
    tokens
        .iter()
        .map(|t| {
            pos += t.position_increment;
            pos
        })
        .collect()
}
