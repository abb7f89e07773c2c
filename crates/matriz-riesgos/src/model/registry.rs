use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use super::{Classifier, ForestModel, ModelError};
use crate::domains::{Domain, RegulatoryLabel};

/// Provenance of a loaded classifier.
#[derive(Debug, Clone, Serialize)]
pub struct ModelInfo {
    pub domain: Domain,
    pub source: Option<PathBuf>,
    pub classes: Vec<RegulatoryLabel>,
    pub trees: usize,
    pub loaded_at: DateTime<Utc>,
}

struct Entry {
    classifier: Arc<dyn Classifier>,
    info: ModelInfo,
}

/// One classifier per domain, loaded once and read-only afterwards.
#[derive(Clone)]
pub struct ModelRegistry {
    /// Indexed by [`Domain::index`]; complete by construction.
    entries: Arc<Vec<Entry>>,
}

impl ModelRegistry {
    /// Loads `rf_<slug>.json` for every domain. Any missing or invalid file
    /// aborts the whole load.
    pub fn load(dir: &Path) -> Result<Self, ModelError> {
        let mut builder = ModelRegistry::builder();
        for domain in Domain::ALL {
            let path = dir.join(domain.model_file_name());
            let model = ForestModel::load(domain, &path)?;
            info!(
                domain = %domain,
                path = %path.display(),
                trees = model.estimators(),
                classes = model.classes().len(),
                "loaded classifier"
            );
            builder = builder.with_source(domain, Arc::new(model), Some(path));
        }
        builder.build()
    }

    pub fn builder() -> ModelRegistryBuilder {
        ModelRegistryBuilder::default()
    }

    pub fn classifier(&self, domain: Domain) -> &dyn Classifier {
        self.entries[domain.index()].classifier.as_ref()
    }

    pub fn info(&self, domain: Domain) -> &ModelInfo {
        &self.entries[domain.index()].info
    }

    pub fn infos(&self) -> impl Iterator<Item = &ModelInfo> + '_ {
        self.entries.iter().map(|entry| &entry.info)
    }
}

impl std::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelRegistry")
            .field(
                "domains",
                &self.entries.iter().map(|entry| entry.info.domain).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Assembles a registry from injected classifiers. `build` insists on full
/// domain coverage, the same as loading from disk.
#[derive(Default)]
pub struct ModelRegistryBuilder {
    entries: BTreeMap<Domain, Entry>,
}

impl ModelRegistryBuilder {
    pub fn with(self, domain: Domain, classifier: Arc<dyn Classifier>) -> Self {
        self.with_source(domain, classifier, None)
    }

    fn with_source(
        mut self,
        domain: Domain,
        classifier: Arc<dyn Classifier>,
        source: Option<PathBuf>,
    ) -> Self {
        let info = ModelInfo {
            domain,
            source,
            classes: classifier.classes().to_vec(),
            trees: classifier.estimators(),
            loaded_at: Utc::now(),
        };
        self.entries.insert(domain, Entry { classifier, info });
        self
    }

    pub fn build(mut self) -> Result<ModelRegistry, ModelError> {
        let mut ordered = Vec::with_capacity(Domain::ALL.len());
        for domain in Domain::ALL {
            let Some(entry) = self.entries.remove(&domain) else {
                return Err(ModelError::Unregistered(domain));
            };
            if let Some(foreign) = entry
                .info
                .classes
                .iter()
                .find(|label| domain.parse_label(label.as_str()).is_none())
            {
                return Err(ModelError::invalid(
                    domain,
                    format!("class '{foreign}' is not a {domain} label"),
                ));
            }
            if entry.info.classes.is_empty() {
                return Err(ModelError::invalid(domain, "no classes declared"));
            }
            ordered.push(entry);
        }

        Ok(ModelRegistry {
            entries: Arc::new(ordered),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::FeatureVector;
    use crate::model::{DecisionTree, TreeNode};

    struct Uniform(Vec<RegulatoryLabel>);

    impl Classifier for Uniform {
        fn classes(&self) -> &[RegulatoryLabel] {
            &self.0
        }

        fn predict_proba(&self, _features: &FeatureVector) -> Vec<f64> {
            vec![1.0 / self.0.len() as f64; self.0.len()]
        }
    }

    fn warehouse_labels() -> Vec<RegulatoryLabel> {
        Domain::Warehouse.labels().to_vec()
    }

    fn uniform(domain: Domain) -> Arc<dyn Classifier> {
        Arc::new(Uniform(domain.labels().to_vec()))
    }

    fn single_leaf_forest(domain: Domain) -> ForestModel {
        let classes = domain.labels().to_vec();
        let mut weights = vec![0.0; classes.len()];
        weights[0] = 1.0;
        ForestModel::new(
            domain,
            classes,
            vec![DecisionTree::new(vec![TreeNode::Leaf { value: weights }])],
        )
        .expect("valid forest")
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "matriz-riesgos-{name}-{}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).expect("create scratch dir");
        dir
    }

    #[test]
    fn builder_requires_every_domain() {
        let mut builder = ModelRegistry::builder();
        for domain in Domain::ALL.into_iter().filter(|d| *d != Domain::Lodging) {
            builder = builder.with(domain, uniform(domain));
        }
        let err = builder.build().expect_err("lodging missing");
        assert!(matches!(err, ModelError::Unregistered(Domain::Lodging)));
    }

    #[test]
    fn builder_rejects_classifiers_with_foreign_labels() {
        let mut builder = ModelRegistry::builder();
        for domain in Domain::ALL {
            builder = builder.with(domain, uniform(domain));
        }
        let builder = builder.with(Domain::Offices, uniform(Domain::Commerce));
        let err = builder.build().expect_err("foreign labels");
        assert!(matches!(err, ModelError::Invalid { domain: Domain::Offices, .. }));
    }

    #[test]
    fn loads_every_domain_from_directory() {
        let dir = scratch_dir("registry-load");
        for domain in Domain::ALL {
            let document = single_leaf_forest(domain).to_document();
            let json = serde_json::to_string(&document).expect("serialize");
            std::fs::write(dir.join(domain.model_file_name()), json).expect("write model");
        }

        let registry = ModelRegistry::load(&dir).expect("loads");
        assert_eq!(registry.infos().count(), 8);
        let info = registry.info(Domain::Health);
        assert_eq!(info.domain, Domain::Health);
        assert_eq!(info.trees, 1);
        assert_eq!(info.source, Some(dir.join("rf_salud.json")));
        assert_eq!(
            registry.classifier(Domain::Warehouse).classes(),
            &warehouse_labels()
        );

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn one_missing_model_fails_the_whole_load() {
        let dir = scratch_dir("registry-missing");
        for domain in Domain::ALL.into_iter().filter(|d| *d != Domain::Commerce) {
            let document = single_leaf_forest(domain).to_document();
            let json = serde_json::to_string(&document).expect("serialize");
            std::fs::write(dir.join(domain.model_file_name()), json).expect("write model");
        }

        let err = ModelRegistry::load(&dir).expect_err("commerce missing");
        assert!(matches!(err, ModelError::Missing { domain: Domain::Commerce, .. }));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn corrupt_model_is_a_parse_error() {
        let dir = scratch_dir("registry-corrupt");
        for domain in Domain::ALL {
            let json = if domain == Domain::Health {
                "{not json".to_string()
            } else {
                serde_json::to_string(&single_leaf_forest(domain).to_document())
                    .expect("serialize")
            };
            std::fs::write(dir.join(domain.model_file_name()), json).expect("write model");
        }

        let err = ModelRegistry::load(&dir).expect_err("corrupt");
        assert!(matches!(err, ModelError::Parse { .. }));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
