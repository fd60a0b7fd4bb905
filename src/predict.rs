//! Predict
//!
//! Exact-path and missing-value aware classification over a trained tree.
use crate::errors::TreeError;
use crate::example::Example;
use crate::node::Node;
use crate::tree::{ClassLabel, DecisionTree};
use crate::utils::Tally;
use rayon::prelude::*;

/// Result of a probabilistic classification.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification<C> {
    /// The most probable class.
    pub label: C,
    /// Normalized class probabilities, in the order the classes were reached.
    pub distribution: Vec<(C, f64)>,
}

impl<C: PartialEq> Classification<C> {
    /// Probability assigned to `label`, 0 if it was never reached.
    pub fn probability(&self, label: &C) -> f64 {
        self.distribution
            .iter()
            .find(|(c, _)| c == label)
            .map(|(_, p)| *p)
            .unwrap_or(0.0)
    }
}

impl<C: ClassLabel> DecisionTree<C> {
    /// Classify an example, descending into every branch of a split whose
    /// value is unknown and weighting each branch by its missing-value weight.
    pub fn classify(&self, example: &Example<C>) -> Result<Classification<C>, TreeError> {
        self.classify_from(0, example)
    }

    /// Classify an example by following its exact path.
    ///
    /// If a value on the path is unknown, the probabilistic descent takes over
    /// from that node and its top class is returned.
    pub fn classify_known(&self, example: &Example<C>) -> Result<C, TreeError> {
        let mut node_idx = 0;
        loop {
            let node = match &self.nodes[node_idx] {
                Node::Leaf(n) => return Ok(n.classification.clone()),
                Node::Decision(n) => n,
            };
            let Some(attr) = node.split_attribute.as_ref() else {
                return Ok(node.majority_class.clone());
            };
            match example.value_index(attr) {
                Some(v) => {
                    node_idx = *node.children.get(v).ok_or_else(|| TreeError::UnknownSplitValue {
                        attribute: attr.name().to_string(),
                        value: v,
                    })?;
                }
                None => return self.classify_from(node_idx, example).map(|c| c.label),
            }
        }
    }

    /// Classify many examples, in parallel if requested. Output order follows the input.
    pub fn classify_batch(&self, examples: &[Example<C>], parallel: bool) -> Result<Vec<Classification<C>>, TreeError> {
        if parallel {
            examples.par_iter().map(|e| self.classify(e)).collect()
        } else {
            examples.iter().map(|e| self.classify(e)).collect()
        }
    }

    fn classify_from(&self, start: usize, example: &Example<C>) -> Result<Classification<C>, TreeError> {
        let mut weights = Tally::new();
        self.accumulate_weights(start, example, &mut weights)?;
        normalize(weights)
    }

    /// Add the path weight reaching each leaf below `start` to `weights`.
    ///
    /// Leaves are visited depth first with children in domain order, so the
    /// tally lists classes in the order they are first reached.
    pub(crate) fn accumulate_weights(
        &self,
        start: usize,
        example: &Example<C>,
        weights: &mut Tally<C>,
    ) -> Result<(), TreeError> {
        let mut stack = vec![(start, 1.0_f64)];
        while let Some((node_idx, path_weight)) = stack.pop() {
            let node = match &self.nodes[node_idx] {
                Node::Leaf(n) => {
                    weights.add(n.classification.clone(), path_weight);
                    continue;
                }
                Node::Decision(n) => n,
            };
            let Some(attr) = node.split_attribute.as_ref() else {
                weights.add(node.majority_class.clone(), path_weight);
                continue;
            };
            match example.value_index(attr) {
                Some(v) => {
                    let child = *node.children.get(v).ok_or_else(|| TreeError::UnknownSplitValue {
                        attribute: attr.name().to_string(),
                        value: v,
                    })?;
                    stack.push((child, path_weight));
                }
                None => {
                    for &child in node.children.iter().rev() {
                        stack.push((child, path_weight * self.nodes[child].missing_value_weight()));
                    }
                }
            }
        }
        Ok(())
    }
}

fn normalize<C: ClassLabel>(weights: Tally<C>) -> Result<Classification<C>, TreeError> {
    let total = weights.total();
    if total <= 0.0 || total.is_nan() {
        return Err(TreeError::DegenerateNormalization);
    }
    let distribution: Vec<(C, f64)> = weights.into_entries().into_iter().map(|(c, w)| (c, w / total)).collect();

    let mut label: Option<&C> = None;
    let mut max_prob = 0.0;
    for (c, p) in &distribution {
        if *p > max_prob {
            max_prob = *p;
            label = Some(c);
        }
    }
    let label = label.cloned().ok_or(TreeError::DegenerateNormalization)?;
    Ok(Classification { label, distribution })
}
