//! Classification facade: encode, predict, pick the most probable label.

use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use crate::domains::{Domain, RegulatoryLabel};
use crate::features::FeatureVector;
use crate::model::{Classifier, ModelInfo, ModelRegistry};
use crate::record::{EncodingError, RawAttributeRecord};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub label: RegulatoryLabel,
    /// Probability of `label`, in `[0, 1]`.
    pub confidence: f64,
}

/// Wire shape returned by the per-domain classify endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResponse {
    pub label: RegulatoryLabel,
    pub confidence_percent: f64,
    pub latency_ms: f64,
}

impl ClassificationResponse {
    pub fn new(result: ClassificationResult, elapsed: Duration) -> Self {
        Self {
            label: result.label,
            confidence_percent: round2(result.confidence * 100.0),
            latency_ms: round2(elapsed.as_secs_f64() * 1000.0),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClassificationError {
    #[error(transparent)]
    Encoding(#[from] EncodingError),
    #[error("classifier for {0} returned no probabilities")]
    EmptyPrediction(Domain),
}

#[derive(Clone, Debug)]
pub struct ClassificationService {
    registry: ModelRegistry,
}

impl ClassificationService {
    pub fn new(registry: ModelRegistry) -> Self {
        Self { registry }
    }

    pub fn classify(
        &self,
        domain: Domain,
        record: &RawAttributeRecord,
    ) -> Result<ClassificationResult, ClassificationError> {
        let features = domain.encode(record)?;
        let classifier = self.registry.classifier(domain);
        let result = most_probable(classifier, &features)
            .ok_or(ClassificationError::EmptyPrediction(domain))?;

        debug!(
            domain = %domain,
            label = %result.label,
            confidence = result.confidence,
            "classified record"
        );
        Ok(result)
    }

    /// Label the regulation itself assigns, without consulting the model.
    pub fn derive_label(
        &self,
        domain: Domain,
        record: &RawAttributeRecord,
    ) -> Result<RegulatoryLabel, EncodingError> {
        domain.derive_label(record)
    }

    pub fn encode(
        &self,
        domain: Domain,
        record: &RawAttributeRecord,
    ) -> Result<FeatureVector, EncodingError> {
        domain.encode(record)
    }

    pub fn model_info(&self, domain: Domain) -> &ModelInfo {
        self.registry.info(domain)
    }
}

/// Arg-max over the class probabilities; the first of equal maxima wins.
fn most_probable(
    classifier: &dyn Classifier,
    features: &FeatureVector,
) -> Option<ClassificationResult> {
    let probabilities = classifier.predict_proba(features);
    classifier
        .classes()
        .iter()
        .zip(probabilities)
        .fold(None, |best: Option<ClassificationResult>, (label, probability)| {
            match best {
                Some(current) if probability <= current.confidence => Some(current),
                _ => Some(ClassificationResult {
                    label: *label,
                    confidence: probability,
                }),
            }
        })
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
