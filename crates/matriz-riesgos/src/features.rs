//! Feature layouts and encoded vectors.
//!
//! A layout is the ordered list of feature names a domain's classifier was
//! trained on. Encoders and models are both checked against it, so changing
//! the order or the set of names here invalidates every trained model of
//! that domain.

use serde::Serialize;

/// Authoritative, ordered feature names for one domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureLayout {
    names: &'static [&'static str],
}

impl FeatureLayout {
    pub const fn new(names: &'static [&'static str]) -> Self {
        Self { names }
    }

    pub const fn len(&self) -> usize {
        self.names.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &'static [&'static str] {
        self.names
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|candidate| *candidate == name)
    }

    /// Whether externally declared names (e.g. from a model file) match.
    pub fn matches<S: AsRef<str>>(&self, names: &[S]) -> bool {
        names.len() == self.names.len()
            && names
                .iter()
                .zip(self.names)
                .all(|(left, right)| left.as_ref() == *right)
    }
}

/// Numeric encoding of one record, in layout order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureVector {
    #[serde(skip)]
    layout: FeatureLayout,
    values: Vec<f64>,
}

impl FeatureVector {
    /// Builds a vector from exactly `layout.len()` values.
    pub(crate) fn from_array<const N: usize>(layout: FeatureLayout, values: [f64; N]) -> Self {
        debug_assert_eq!(layout.len(), N, "encoder width differs from layout");
        Self {
            layout,
            values: values.to_vec(),
        }
    }

    pub fn layout(&self) -> FeatureLayout {
        self.layout
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.layout
            .index_of(name)
            .and_then(|index| self.values.get(index).copied())
    }

    pub fn named(&self) -> Vec<NamedFeature> {
        self.layout
            .names()
            .iter()
            .zip(&self.values)
            .map(|(name, value)| NamedFeature {
                name: name.to_string(),
                value: *value,
            })
            .collect()
    }
}

/// Name/value pair for API and CLI output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedFeature {
    pub name: String,
    pub value: f64,
}

pub(crate) fn indicator(condition: bool) -> f64 {
    if condition {
        1.0
    } else {
        0.0
    }
}
