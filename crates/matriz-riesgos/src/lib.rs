//! Regulatory sub-function classification for building establishments.
//!
//! Records of loosely typed attributes are encoded into fixed per-domain
//! feature vectors, labelled by the regulation's own rule cascade, and
//! classified by a pre-trained tree ensemble.

pub mod batch;
pub mod classification;
pub mod config;
pub mod domains;
pub mod error;
pub mod features;
pub mod model;
pub mod record;
pub mod router;
pub mod telemetry;
pub mod vocabulary;

pub use classification::{
    ClassificationError, ClassificationResponse, ClassificationResult, ClassificationService,
};
pub use domains::{Domain, RegulatoryLabel, UnknownDomain};
pub use features::{FeatureLayout, FeatureVector, NamedFeature};
pub use model::{Classifier, ForestModel, ModelError, ModelRegistry};
pub use record::{AttributeValue, EncodingError, RawAttributeRecord};
pub use router::classification_router;
