use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Classifier, ModelError};
use crate::domains::{Domain, RegulatoryLabel};
use crate::features::FeatureVector;

/// On-disk form of a random forest exported for one domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForestDocument {
    pub domain: String,
    pub classes: Vec<String>,
    pub feature_names: Vec<String>,
    pub trees: Vec<DecisionTree>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

/// Splits send a sample left when `features[feature] <= threshold`. Leaves
/// carry per-class weights (sample counts or fractions) in class order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: Vec<f64>,
    },
}

impl DecisionTree {
    pub fn new(nodes: Vec<TreeNode>) -> Self {
        Self { nodes }
    }

    fn leaf_for(&self, values: &[f64]) -> Option<&[f64]> {
        let mut index = 0;
        loop {
            match self.nodes.get(index)? {
                TreeNode::Leaf { value } => return Some(value),
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let x = values.get(*feature).copied().unwrap_or(f64::NAN);
                    index = if x <= *threshold { *left } else { *right };
                }
            }
        }
    }
}

/// Validated tree ensemble. Probabilities are the mean of each tree's
/// normalised leaf distribution.
#[derive(Debug, Clone)]
pub struct ForestModel {
    domain: Domain,
    classes: Vec<RegulatoryLabel>,
    trees: Vec<DecisionTree>,
}

impl ForestModel {
    pub fn new(
        domain: Domain,
        classes: Vec<RegulatoryLabel>,
        trees: Vec<DecisionTree>,
    ) -> Result<Self, ModelError> {
        if classes.is_empty() {
            return Err(ModelError::invalid(domain, "no classes declared"));
        }
        for (index, class) in classes.iter().enumerate() {
            if domain.parse_label(class.as_str()).is_none() {
                return Err(ModelError::invalid(
                    domain,
                    format!("class '{class}' is not a {domain} label"),
                ));
            }
            if classes[index + 1..].contains(class) {
                return Err(ModelError::invalid(domain, format!("class '{class}' repeated")));
            }
        }
        if trees.is_empty() {
            return Err(ModelError::invalid(domain, "forest has no trees"));
        }

        let width = domain.feature_layout().len();
        for (tree_index, tree) in trees.iter().enumerate() {
            validate_tree(tree, width, classes.len())
                .map_err(|reason| ModelError::invalid(domain, format!("tree {tree_index}: {reason}")))?;
        }

        Ok(Self {
            domain,
            classes,
            trees,
        })
    }

    pub fn from_document(domain: Domain, document: ForestDocument) -> Result<Self, ModelError> {
        match Domain::from_slug(&document.domain) {
            Some(declared) if declared == domain => {}
            _ => {
                return Err(ModelError::invalid(
                    domain,
                    format!("file declares domain '{}'", document.domain),
                ))
            }
        }

        let layout = domain.feature_layout();
        if !layout.matches(&document.feature_names) {
            return Err(ModelError::invalid(
                domain,
                format!(
                    "feature names {:?} differ from layout {:?}",
                    document.feature_names,
                    layout.names()
                ),
            ));
        }

        let classes = document
            .classes
            .iter()
            .map(|code| {
                domain.parse_label(code).ok_or_else(|| {
                    ModelError::invalid(domain, format!("class '{code}' is not a {domain} label"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(domain, classes, document.trees)
    }

    pub fn load(domain: Domain, path: &Path) -> Result<Self, ModelError> {
        let raw = fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => ModelError::Missing {
                domain,
                path: path.to_path_buf(),
            },
            _ => ModelError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;
        let document: ForestDocument =
            serde_json::from_str(&raw).map_err(|source| ModelError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_document(domain, document)
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn to_document(&self) -> ForestDocument {
        ForestDocument {
            domain: self.domain.slug().to_string(),
            classes: self
                .classes
                .iter()
                .map(|label| label.as_str().to_string())
                .collect(),
            feature_names: self
                .domain
                .feature_layout()
                .names()
                .iter()
                .map(|name| name.to_string())
                .collect(),
            trees: self.trees.clone(),
        }
    }
}

impl Classifier for ForestModel {
    fn classes(&self) -> &[RegulatoryLabel] {
        &self.classes
    }

    fn predict_proba(&self, features: &FeatureVector) -> Vec<f64> {
        let mut totals = vec![0.0; self.classes.len()];
        let mut voters = 0usize;

        for tree in &self.trees {
            let Some(leaf) = tree.leaf_for(features.values()) else {
                continue;
            };
            let weight: f64 = leaf.iter().sum();
            if weight <= 0.0 {
                continue;
            }
            for (total, value) in totals.iter_mut().zip(leaf) {
                *total += value / weight;
            }
            voters += 1;
        }

        if voters > 0 {
            for total in &mut totals {
                *total /= voters as f64;
            }
        }
        totals
    }

    fn estimators(&self) -> usize {
        self.trees.len()
    }
}

fn validate_tree(tree: &DecisionTree, width: usize, classes: usize) -> Result<(), String> {
    let count = tree.nodes.len();
    if count == 0 {
        return Err("no nodes".to_string());
    }

    for (index, node) in tree.nodes.iter().enumerate() {
        match node {
            TreeNode::Split {
                feature,
                threshold,
                left,
                right,
            } => {
                if *feature >= width {
                    return Err(format!("node {index} splits on feature {feature} of {width}"));
                }
                if !threshold.is_finite() {
                    return Err(format!("node {index} has a non-finite threshold"));
                }
                for child in [left, right] {
                    if *child <= index || *child >= count {
                        return Err(format!("node {index} points to invalid child {child}"));
                    }
                }
            }
            TreeNode::Leaf { value } => {
                if value.len() != classes {
                    return Err(format!(
                        "leaf {index} has {} weights for {classes} classes",
                        value.len()
                    ));
                }
                if value.iter().any(|weight| !weight.is_finite() || *weight < 0.0) {
                    return Err(format!("leaf {index} has a negative or non-finite weight"));
                }
                if value.iter().sum::<f64>() <= 0.0 {
                    return Err(format!("leaf {index} has no weight"));
                }
            }
        }
    }

    Ok(())
}
