//! Trained classifiers and the registry that owns them.

mod forest;
mod registry;

use std::path::PathBuf;

use crate::domains::{Domain, RegulatoryLabel};
use crate::features::FeatureVector;

pub use forest::{DecisionTree, ForestDocument, ForestModel, TreeNode};
pub use registry::{ModelInfo, ModelRegistry, ModelRegistryBuilder};

/// A trained model for one domain, used as a black box.
pub trait Classifier: Send + Sync {
    /// Labels in the order `predict_proba` reports them.
    fn classes(&self) -> &[RegulatoryLabel];

    /// Probability per class, aligned with [`Classifier::classes`].
    fn predict_proba(&self, features: &FeatureVector) -> Vec<f64>;

    /// Number of trees, for models that are ensembles.
    fn estimators(&self) -> usize {
        1
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("model for {domain} not found at {}", path.display())]
    Missing { domain: Domain, path: PathBuf },
    #[error("failed to read model {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("model {} is not valid JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("model for {domain} is invalid: {reason}")]
    Invalid { domain: Domain, reason: String },
    #[error("no model registered for {0}")]
    Unregistered(Domain),
}

impl ModelError {
    pub(crate) fn invalid(domain: Domain, reason: impl Into<String>) -> Self {
        Self::Invalid {
            domain,
            reason: reason.into(),
        }
    }
}
