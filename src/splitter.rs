//! Splitter
//!
//! Partitioning of a node's examples on a categorical attribute and the
//! missing-value aware information gain used to choose the split attribute.
use crate::attribute::Attribute;
use crate::example::Example;
use crate::tree::ClassLabel;
use crate::utils::entropy;
use rayon::prelude::*;
use rayon::ThreadPool;

/// Examples of one node divided by their value for a single attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    /// One subset of example indices per legal value, in domain order.
    pub subsets: Vec<Vec<usize>>,
    /// Examples whose value for the attribute is unknown.
    pub missing: Vec<usize>,
}

impl Partition {
    /// Divide the indexed examples by their value for `attribute`.
    pub fn new<C>(examples: &[Example<C>], index: &[usize], attribute: &Attribute) -> Self {
        let mut subsets = vec![Vec::new(); attribute.n_values()];
        let mut missing = Vec::new();
        for &i in index {
            match examples[i].value_index(attribute) {
                Some(v) => subsets[v].push(i),
                None => missing.push(i),
            }
        }
        Partition { subsets, missing }
    }

    /// Total number of examples the partition was built from.
    pub fn n_examples(&self) -> usize {
        self.subsets.iter().map(Vec::len).sum::<usize>() + self.missing.len()
    }

    /// Share of all examples that took each value.
    pub fn pure_frequencies(&self) -> Vec<f64> {
        let n = self.n_examples() as f64;
        self.subsets.iter().map(|s| s.len() as f64 / n).collect()
    }

    /// Share of all examples credited to each value once the missing ones
    /// are spread over the values in proportion to their pure frequency.
    pub fn value_frequencies(&self) -> Vec<f64> {
        let n = self.n_examples() as f64;
        let n_missing = self.missing.len() as f64;
        self.subsets
            .iter()
            .zip(self.pure_frequencies())
            .map(|(s, pure)| (s.len() as f64 + n_missing * pure) / n)
            .collect()
    }
}

/// Information gain of a partition relative to the node it was built from.
///
/// Clamped at zero.
pub fn information_gain<C: ClassLabel>(examples: &[Example<C>], partition: &Partition, node_entropy: f64) -> f64 {
    if partition.n_examples() == 0 {
        return 0.0;
    }
    let mut gain = node_entropy;
    for (subset, freq) in partition.subsets.iter().zip(partition.value_frequencies()) {
        gain -= entropy(examples, subset) * freq;
    }
    if gain < 0.0 {
        0.0
    } else {
        gain
    }
}

/// The chosen split of a node.
#[derive(Debug, Clone)]
pub struct SplitInfo {
    /// Position of the split attribute among the node's candidates.
    pub attribute_position: usize,
    pub split_gain: f64,
    pub partition: Partition,
}

/// Find the best split over the candidate attributes.
///
/// Gains are compared with `>=` starting from zero, so among equal gains the
/// attribute listed last wins. When a pool is given, the gains are evaluated on
/// it and then scanned in candidate order, which gives the same choice as the
/// sequential path. Returns `None` only when there are no candidates.
pub fn best_split<C: ClassLabel>(
    examples: &[Example<C>],
    index: &[usize],
    attributes: &[Attribute],
    pool: Option<&ThreadPool>,
) -> Option<SplitInfo> {
    let node_entropy = entropy(examples, index);
    let evaluate = |attribute: &Attribute| {
        let partition = Partition::new(examples, index, attribute);
        let gain = information_gain(examples, &partition, node_entropy);
        (gain, partition)
    };

    let candidates: Vec<(f64, Partition)> = match pool {
        Some(pool) => pool.install(|| attributes.par_iter().map(evaluate).collect()),
        None => attributes.iter().map(evaluate).collect(),
    };

    let mut best: Option<SplitInfo> = None;
    let mut max_gain = 0.0;
    for (position, (gain, partition)) in candidates.into_iter().enumerate() {
        if gain >= max_gain {
            max_gain = gain;
            best = Some(SplitInfo {
                attribute_position: position,
                split_gain: gain,
                partition,
            });
        }
    }
    best
}
