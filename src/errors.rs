//! Errors
//!
//! Custom error types used throughout the `sylva` crate.
use thiserror::Error;

/// Errors that can occur while building attributes, examples or trees.
#[derive(Debug, Error, PartialEq)]
pub enum TreeError {
    /// A value outside the attribute's legal domain was assigned to an example.
    #[error("Unsupported value '{value}' for attribute {attribute}, supported values are: {supported}")]
    InvalidValue {
        attribute: String,
        value: String,
        supported: String,
    },
    /// An attribute was declared without any legal values.
    #[error("Attribute {0} must declare at least one legal value.")]
    EmptyDomain(String),
    /// An attribute listed the same value twice.
    #[error("Attribute {0} lists the value '{1}' more than once.")]
    DuplicateValue(String, String),
    /// An attribute tried to use the missing marker as a legal value.
    #[error("Attribute {0} cannot use the missing marker '{1}' as a legal value.")]
    ReservedValue(String, String),
    /// A known value has no trained branch at a decision node.
    #[error("Value index {value} of attribute {attribute} has no trained branch.")]
    UnknownSplitValue { attribute: String, value: usize },
    /// The class weights collected during a missing-value descent summed to zero.
    #[error("Class weights summed to zero, the class distribution cannot be normalized.")]
    DegenerateNormalization,
    /// Training was requested without any examples.
    #[error("Unable to train a tree on an empty set of examples.")]
    EmptyTrainingSet,
    /// No training example carries a classification.
    #[error("None of the {0} training examples carry a classification.")]
    NoLabeledExamples(usize),
    /// First value is the name of the parameter, second is expected, third is what was passed.
    #[error("Invalid parameter value passed for {0}, expected {1} but {2} provided.")]
    InvalidParameter(String, String, String),
    /// Unable to write the configuration.
    #[error("Unable to write config: {0}")]
    UnableToWrite(String),
    /// Unable to read the configuration.
    #[error("Unable to read config: {0}")]
    UnableToRead(String),
    /// The rayon pool used for parallel gain evaluation could not be built.
    #[error("Unable to build a thread pool: {0}")]
    ThreadPool(String),
}
