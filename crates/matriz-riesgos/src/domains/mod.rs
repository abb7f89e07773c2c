//! The eight establishment domains.
//!
//! Every domain module follows the same shape: `tables` holds the shared
//! mapping tables and keyword sets, the module root extracts a typed profile
//! and the derived `Signals`, `rules` runs the priority cascade and
//! `encoder` builds the feature vector. Both `rules` and `encoder` read the
//! same `Signals`, so a predicate is written exactly once.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::features::{FeatureLayout, FeatureVector};
use crate::record::{EncodingError, RawAttributeRecord};
use crate::vocabulary::fold;

pub mod assembly;
pub mod commerce;
pub mod education;
pub mod health;
pub mod industrial;
pub mod lodging;
pub mod offices;
pub mod warehouse;

/// Regulatory sub-code such as `"8.3"` or `"I-4"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegulatoryLabel(&'static str);

impl RegulatoryLabel {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for RegulatoryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Serialize for RegulatoryLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown domain '{0}'")]
pub struct UnknownDomain(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Domain {
    Health,
    Assembly,
    Lodging,
    Education,
    Industrial,
    Offices,
    Commerce,
    Warehouse,
}

impl Domain {
    pub const ALL: [Domain; 8] = [
        Domain::Health,
        Domain::Assembly,
        Domain::Lodging,
        Domain::Education,
        Domain::Industrial,
        Domain::Offices,
        Domain::Commerce,
        Domain::Warehouse,
    ];

    /// Position in [`Domain::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Identifier used in routes, CLI arguments and model file names.
    pub const fn slug(&self) -> &'static str {
        match self {
            Domain::Health => "salud",
            Domain::Assembly => "encuentro",
            Domain::Lodging => "hospedaje",
            Domain::Education => "educacion",
            Domain::Industrial => "industrial",
            Domain::Offices => "oficinas",
            Domain::Commerce => "comercio",
            Domain::Warehouse => "almacen",
        }
    }

    pub const fn english_name(&self) -> &'static str {
        match self {
            Domain::Health => "health",
            Domain::Assembly => "assembly",
            Domain::Lodging => "lodging",
            Domain::Education => "education",
            Domain::Industrial => "industrial",
            Domain::Offices => "offices",
            Domain::Commerce => "commerce",
            Domain::Warehouse => "warehouse",
        }
    }

    /// Accepts the slug or the English name, case-insensitively.
    pub fn from_slug(value: &str) -> Option<Domain> {
        let folded = fold(value);
        let folded = match folded.as_str() {
            "almacén" => "almacen",
            "educación" => "educacion",
            other => other,
        };
        Domain::ALL
            .into_iter()
            .find(|domain| domain.slug() == folded || domain.english_name() == folded)
    }

    pub fn model_file_name(&self) -> String {
        format!("rf_{}.json", self.slug())
    }

    pub fn feature_layout(&self) -> FeatureLayout {
        match self {
            Domain::Health => health::LAYOUT,
            Domain::Assembly => assembly::LAYOUT,
            Domain::Lodging => lodging::LAYOUT,
            Domain::Education => education::LAYOUT,
            Domain::Industrial => industrial::LAYOUT,
            Domain::Offices => offices::LAYOUT,
            Domain::Commerce => commerce::LAYOUT,
            Domain::Warehouse => warehouse::LAYOUT,
        }
    }

    pub fn labels(&self) -> &'static [RegulatoryLabel] {
        match self {
            Domain::Health => &health::LABELS,
            Domain::Assembly => &assembly::LABELS,
            Domain::Lodging => &lodging::LABELS,
            Domain::Education => &education::LABELS,
            Domain::Industrial => &industrial::LABELS,
            Domain::Offices => &offices::LABELS,
            Domain::Commerce => &commerce::LABELS,
            Domain::Warehouse => &warehouse::LABELS,
        }
    }

    /// Resolves a label code (e.g. from a model file) within this domain.
    pub fn parse_label(&self, code: &str) -> Option<RegulatoryLabel> {
        let code = code.trim();
        self.labels()
            .iter()
            .copied()
            .find(|label| label.as_str() == code)
    }

    pub fn encode(&self, record: &RawAttributeRecord) -> Result<FeatureVector, EncodingError> {
        match self {
            Domain::Health => health::encode(record),
            Domain::Assembly => assembly::encode(record),
            Domain::Lodging => lodging::encode(record),
            Domain::Education => education::encode(record),
            Domain::Industrial => industrial::encode(record),
            Domain::Offices => offices::encode(record),
            Domain::Commerce => commerce::encode(record),
            Domain::Warehouse => warehouse::encode(record),
        }
    }

    pub fn derive_label(
        &self,
        record: &RawAttributeRecord,
    ) -> Result<RegulatoryLabel, EncodingError> {
        match self {
            Domain::Health => health::derive_label(record),
            Domain::Assembly => assembly::derive_label(record),
            Domain::Lodging => lodging::derive_label(record),
            Domain::Education => education::derive_label(record),
            Domain::Industrial => industrial::derive_label(record),
            Domain::Offices => offices::derive_label(record),
            Domain::Commerce => commerce::derive_label(record),
            Domain::Warehouse => warehouse::derive_label(record),
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Domain {
    type Err = UnknownDomain;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Domain::from_slug(value).ok_or_else(|| UnknownDomain(value.to_string()))
    }
}

impl Serialize for Domain {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.slug())
    }
}
