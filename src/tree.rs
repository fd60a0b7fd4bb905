use crate::attribute::Attribute;
use crate::config::TreeConfig;
use crate::errors::TreeError;
use crate::example::Example;
use crate::node::{DecisionNode, LeafNode, Node};
use crate::splitter::best_split;
use crate::utils::{majority_class, Tally};
use log::{debug, info};
use std::cmp::max;
use std::fmt::{self, Debug, Display};
use std::hash::Hash;
use std::time::Instant;

/// Bounds required of a classification label.
pub trait ClassLabel: Clone + Eq + Hash + Debug + Send + Sync {}

impl<T: Clone + Eq + Hash + Debug + Send + Sync> ClassLabel for T {}

/// An ID3 decision tree over categorical attributes.
///
/// The tree keeps its training examples; every node records the indices of
/// the examples that reached it. Node 0 is the root.
#[derive(Debug, Clone)]
pub struct DecisionTree<C> {
    pub(crate) cfg: TreeConfig,
    pub(crate) examples: Vec<Example<C>>,
    pub(crate) nodes: Vec<Node<C>>,
    pub(crate) depth: usize,
    pub(crate) n_leaves: usize,
}

impl<C: ClassLabel> DecisionTree<C> {
    /// Train a tree with the default configuration.
    ///
    /// * `examples` - The labeled training examples.
    /// * `attributes` - Candidate split attributes, in scan order.
    pub fn fit(examples: Vec<Example<C>>, attributes: &[Attribute]) -> Result<Self, TreeError> {
        Self::fit_with_config(examples, attributes, TreeConfig::default())
    }

    /// Train a tree.
    ///
    /// Nodes still to be split are kept on a stack. Each split removes its
    /// attribute from the candidates of the children, so the depth never
    /// exceeds the number of attributes.
    pub fn fit_with_config(
        examples: Vec<Example<C>>,
        attributes: &[Attribute],
        cfg: TreeConfig,
    ) -> Result<Self, TreeError> {
        cfg.validate()?;
        let start = Instant::now();
        if examples.is_empty() {
            return Err(TreeError::EmptyTrainingSet);
        }
        let index: Vec<usize> = (0..examples.len()).collect();
        let root_majority = majority_class(&examples, &index).ok_or(TreeError::NoLabeledExamples(examples.len()))?;

        let pool = match cfg.num_threads {
            Some(num_threads) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(num_threads)
                    .build()
                    .map_err(|e| TreeError::ThreadPool(e.to_string()))?,
            ),
            None => None,
        };

        let root = create_node(&examples, 0, 0, index, attributes.to_vec(), &root_majority, 1.0);
        let mut growable: Vec<usize> = Vec::new();
        if !root.is_leaf() {
            growable.push(0);
        }
        let mut nodes = vec![root];
        let mut depth = 0;

        while let Some(n_idx) = growable.pop() {
            let node = match &nodes[n_idx] {
                Node::Decision(n) => n,
                Node::Leaf(_) => continue,
            };
            let Some(mut split) = best_split(&examples, &node.index, &node.attributes, pool.as_ref()) else {
                continue;
            };
            let remaining = node.remaining_attributes(split.attribute_position);
            let parent_majority = node.majority_class.clone();
            let n_parent = node.index.len() as f64;
            let child_depth = node.depth + 1;

            if cfg.log_splits {
                info!(
                    "node {}, depth {}, split on {}, gain {:.4}, examples {}, missing {}",
                    node.num,
                    node.depth,
                    node.attributes[split.attribute_position].name(),
                    split.split_gain,
                    node.index.len(),
                    split.partition.missing.len(),
                );
            }

            let subsets = std::mem::take(&mut split.partition.subsets);
            let mut children = Vec::with_capacity(subsets.len());
            for subset in subsets {
                let missing_value_weight = subset.len() as f64 / n_parent;
                let num = nodes.len();
                let child = create_node(
                    &examples,
                    num,
                    child_depth,
                    subset,
                    remaining.clone(),
                    &parent_majority,
                    missing_value_weight,
                );
                if !child.is_leaf() {
                    growable.push(num);
                }
                depth = max(depth, child_depth);
                children.push(num);
                nodes.push(child);
            }

            if let Node::Decision(node) = &mut nodes[n_idx] {
                node.make_parent_node(&split, children);
            }
        }

        let n_leaves = nodes.iter().filter(|n| n.is_leaf()).count();
        if cfg.log_splits {
            info!(
                "Finished training a decision tree with {} nodes, {} leaves and depth {} in {} ms.",
                nodes.len(),
                n_leaves,
                depth,
                start.elapsed().as_millis()
            );
        }

        Ok(DecisionTree {
            cfg,
            examples,
            nodes,
            depth,
            n_leaves,
        })
    }

    pub fn root(&self) -> &Node<C> {
        &self.nodes[0]
    }

    pub fn node(&self, num: usize) -> Option<&Node<C>> {
        self.nodes.get(num)
    }

    pub fn nodes(&self) -> &[Node<C>] {
        &self.nodes
    }

    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn n_leaves(&self) -> usize {
        self.n_leaves
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn config(&self) -> &TreeConfig {
        &self.cfg
    }

    /// The retained training examples.
    pub fn examples(&self) -> &[Example<C>] {
        &self.examples
    }

    /// Training examples that reached node `num`.
    pub fn node_examples(&self, num: usize) -> Option<Vec<&Example<C>>> {
        self.nodes
            .get(num)
            .map(|n| n.index().iter().map(|&i| &self.examples[i]).collect())
    }
}

/// Create the node for a set of examples.
///
/// A node becomes a leaf when it has no examples, when all of them share one
/// classification, or when no candidate attribute is left. Leaves without a
/// usable label of their own take `fallback`, the parent's majority class.
fn create_node<C: ClassLabel>(
    examples: &[Example<C>],
    num: usize,
    depth: usize,
    index: Vec<usize>,
    attributes: Vec<Attribute>,
    fallback: &C,
    missing_value_weight: f64,
) -> Node<C> {
    let leaf = |index: Vec<usize>, classification: C| {
        Node::Leaf(LeafNode {
            num,
            depth,
            index,
            classification,
            missing_value_weight,
        })
    };

    if index.is_empty() {
        debug!("node {} has no examples, using the parent majority", num);
        return leaf(index, fallback.clone());
    }

    let mut classes = Tally::new();
    for &i in &index {
        classes.add(examples[i].classification(), 1.0);
    }
    if classes.len() == 1 {
        let classification = examples[index[0]].classification().unwrap_or(fallback).clone();
        debug!("node {} is pure with {} examples", num, index.len());
        return leaf(index, classification);
    }

    if attributes.is_empty() {
        debug!("node {} has no attributes left, using the parent majority", num);
        return leaf(index, fallback.clone());
    }

    let majority_class = majority_class(examples, &index).unwrap_or_else(|| fallback.clone());
    Node::Decision(DecisionNode {
        num,
        depth,
        index,
        attributes,
        split_attribute: None,
        split_gain: 0.0,
        children: Vec::new(),
        majority_class,
        missing_value_weight,
    })
}

impl<C: ClassLabel + Display> Display for DecisionTree<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut print_buffer: Vec<(usize, Option<String>)> = vec![(0, None)];
        let mut r = String::new();
        while let Some((idx, branch)) = print_buffer.pop() {
            let node = &self.nodes[idx];
            r += "      ".repeat(node.depth()).as_str();
            if let Some(b) = branch {
                r += format!("{} -> ", b).as_str();
            }
            r += format!("{}\n", node).as_str();
            if let Some(attr) = node.split_attribute() {
                for (value, &child) in attr.values().iter().zip(node.children()).rev() {
                    print_buffer.push((child, Some(format!("{}={}", attr.name(), value))));
                }
            }
        }
        write!(f, "{}", r)
    }
}
