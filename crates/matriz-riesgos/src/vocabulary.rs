//! Bucket mapping tables and keyword sets shared by every domain.
//!
//! Tables are `const` data owned by each domain module. A lookup never fails:
//! an unmapped bucket resolves to the table's documented default so records
//! carrying labels invented after training still encode.

use tracing::debug;

/// Folding applied to free text before comparison: trim, drop zero-width
/// characters, collapse inner whitespace, lowercase.
pub fn fold(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_lowercase()
}

/// How a table compares incoming buckets against its keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMatch {
    /// Bucket must equal the key verbatim (range buckets such as `"26-50%"`).
    Exact,
    /// Bucket is folded first; keys are stored already folded.
    Folded,
}

/// Immutable bucket → representative value table with an explicit default.
#[derive(Debug, Clone, Copy)]
pub struct MappingTable {
    name: &'static str,
    entries: &'static [(&'static str, f64)],
    default: f64,
    matching: KeyMatch,
}

impl MappingTable {
    pub const fn exact(
        name: &'static str,
        entries: &'static [(&'static str, f64)],
        default: f64,
    ) -> Self {
        Self {
            name,
            entries,
            default,
            matching: KeyMatch::Exact,
        }
    }

    pub const fn folded(
        name: &'static str,
        entries: &'static [(&'static str, f64)],
        default: f64,
    ) -> Self {
        Self {
            name,
            entries,
            default,
            matching: KeyMatch::Folded,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn default_value(&self) -> f64 {
        self.default
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    /// Known value for `bucket`, if any, without falling back.
    pub fn get(&self, bucket: &str) -> Option<f64> {
        match self.matching {
            KeyMatch::Exact => self.find(bucket),
            KeyMatch::Folded => self.find(&fold(bucket)),
        }
    }

    pub fn contains(&self, bucket: &str) -> bool {
        self.get(bucket).is_some()
    }

    /// Representative value for `bucket`, or the table default when unmapped.
    pub fn lookup(&self, bucket: &str) -> f64 {
        match self.get(bucket) {
            Some(value) => value,
            None => {
                debug!(
                    table = self.name,
                    bucket,
                    default = self.default,
                    "unmapped bucket resolved to default"
                );
                self.default
            }
        }
    }

    fn find(&self, key: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, value)| *value)
    }
}

/// Lowercase keywords tested against free text fields.
#[derive(Debug, Clone, Copy)]
pub struct KeywordSet {
    name: &'static str,
    keywords: &'static [&'static str],
}

impl KeywordSet {
    pub const fn new(name: &'static str, keywords: &'static [&'static str]) -> Self {
        Self { name, keywords }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        self.keywords
    }

    /// True when any keyword occurs as a substring of the folded text.
    pub fn contains_keyword(&self, text: &str) -> bool {
        let folded = fold(text);
        self.keywords.iter().any(|keyword| folded.contains(keyword))
    }

    /// True when the whole folded text equals one of the keywords.
    pub fn contains_term(&self, text: &str) -> bool {
        let folded = fold(text);
        self.keywords.iter().any(|keyword| *keyword == folded)
    }
}

/// Free-function form of [`KeywordSet::contains_keyword`].
pub fn contains_keyword(set: &KeywordSet, text: &str) -> bool {
    set.contains_keyword(text)
}

/// Free-function form of [`MappingTable::lookup`].
pub fn lookup(table: &MappingTable, bucket: &str) -> f64 {
    table.lookup(bucket)
}
