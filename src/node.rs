use crate::attribute::Attribute;
use crate::splitter::SplitInfo;
use std::fmt;

/// An internal node of the tree, split on one attribute.
#[derive(Debug, Clone)]
pub struct DecisionNode<C> {
    pub num: usize,
    pub depth: usize,
    /// Indices of the training examples that reached this node.
    pub index: Vec<usize>,
    /// Candidate attributes not yet used on the path from the root.
    pub attributes: Vec<Attribute>,
    /// `None` until the node has been split.
    pub split_attribute: Option<Attribute>,
    pub split_gain: f64,
    /// Arena index of the child for each legal value of the split attribute.
    pub children: Vec<usize>,
    pub majority_class: C,
    /// Share of the parent's examples that reached this node through a known value.
    pub missing_value_weight: f64,
}

/// A terminal node carrying a single classification.
#[derive(Debug, Clone)]
pub struct LeafNode<C> {
    pub num: usize,
    pub depth: usize,
    pub index: Vec<usize>,
    pub classification: C,
    pub missing_value_weight: f64,
}

#[derive(Debug, Clone)]
pub enum Node<C> {
    Decision(DecisionNode<C>),
    Leaf(LeafNode<C>),
}

impl<C> DecisionNode<C> {
    /// Record the chosen split and the arena indices of the children.
    ///
    /// The split's partition is consumed by the caller while creating the
    /// children, only the attribute and gain are kept here.
    pub fn make_parent_node(&mut self, split: &SplitInfo, children: Vec<usize>) {
        self.split_attribute = Some(self.attributes[split.attribute_position].clone());
        self.split_gain = split.split_gain;
        self.children = children;
    }

    /// Candidates left for the children once `position` is used.
    pub fn remaining_attributes(&self, position: usize) -> Vec<Attribute> {
        let mut remaining = self.attributes.clone();
        remaining.remove(position);
        remaining
    }
}

impl<C> Node<C> {
    pub fn num(&self) -> usize {
        match self {
            Node::Decision(n) => n.num,
            Node::Leaf(n) => n.num,
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            Node::Decision(n) => n.depth,
            Node::Leaf(n) => n.depth,
        }
    }

    pub fn index(&self) -> &[usize] {
        match self {
            Node::Decision(n) => &n.index,
            Node::Leaf(n) => &n.index,
        }
    }

    pub fn missing_value_weight(&self) -> f64 {
        match self {
            Node::Decision(n) => n.missing_value_weight,
            Node::Leaf(n) => n.missing_value_weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Majority class of a decision node, or the classification of a leaf.
    pub fn class(&self) -> &C {
        match self {
            Node::Decision(n) => &n.majority_class,
            Node::Leaf(n) => &n.classification,
        }
    }

    pub fn split_attribute(&self) -> Option<&Attribute> {
        match self {
            Node::Decision(n) => n.split_attribute.as_ref(),
            Node::Leaf(_) => None,
        }
    }

    pub fn children(&self) -> &[usize] {
        match self {
            Node::Decision(n) => &n.children,
            Node::Leaf(_) => &[],
        }
    }
}

impl<C: fmt::Display> fmt::Display for Node<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Node::Decision(n) => {
                let attr = n.split_attribute.as_ref().map(|a| a.name()).unwrap_or("?");
                write!(
                    f,
                    "{}:[{}] majority={}, gain={:.4}, weight={:.4}, examples={}",
                    n.num,
                    attr,
                    n.majority_class,
                    n.split_gain,
                    n.missing_value_weight,
                    n.index.len()
                )
            }
            Node::Leaf(n) => write!(
                f,
                "{}:leaf={}, weight={:.4}, examples={}",
                n.num,
                n.classification,
                n.missing_value_weight,
                n.index.len()
            ),
        }
    }
}
