use std::collections::HashSet;

/// Insertion-ordered set of readings.
///
/// Duplicates collapse on insert. Iteration follows first-insertion order, so
/// repeated expansion of the same word always yields the same sequence.
#[derive(Debug, Clone, Default)]
pub struct ReadingSet {
    items: Vec<String>,
    seen: HashSet<String>,
}

impl ReadingSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            seen: HashSet::with_capacity(capacity),
        }
    }

    /// Returns `true` if the reading was not present yet.
    pub fn insert(&mut self, reading: String) -> bool {
        if self.seen.contains(&reading) {
            return false;
        }
        self.seen.insert(reading.clone());
        self.items.push(reading);
        true
    }

    pub fn contains(&self, reading: &str) -> bool {
        self.seen.contains(reading)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }
}

impl PartialEq for ReadingSet {
    /// Set equality; insertion order is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.seen == other.seen
    }
}

impl Eq for ReadingSet {}

impl Extend<String> for ReadingSet {
    fn extend<T: IntoIterator<Item = String>>(&mut self, iter: T) {
        for reading in iter {
            self.insert(reading);
        }
    }
}

impl FromIterator<String> for ReadingSet {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl IntoIterator for ReadingSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a ReadingSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
