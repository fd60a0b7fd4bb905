//! Example
//!
//! One labeled (or unlabeled) record: a classification plus a partial
//! assignment of attribute values. Values are validated against their
//! attribute's domain as they are assigned.
use crate::attribute::Attribute;
use crate::constants::MISSING_VALUE;
use crate::errors::TreeError;
use hashbrown::HashMap;
use std::fmt;

#[derive(Debug, Clone)]
pub struct Example<C> {
    classification: Option<C>,
    // Domain position of each assigned value, `None` for an explicit missing value.
    values: HashMap<Attribute, Option<usize>>,
}

impl<C> Example<C> {
    /// Create an example with a known classification.
    pub fn new(classification: C) -> Self {
        Example {
            classification: Some(classification),
            values: HashMap::new(),
        }
    }

    /// Create an example whose classification is unknown, e.g. for inference.
    pub fn unlabeled() -> Self {
        Example {
            classification: None,
            values: HashMap::new(),
        }
    }

    /// Assign a value for `attribute`, consuming and returning the example for chaining.
    ///
    /// The missing marker is accepted and recorded as an unknown value.
    pub fn with_value(mut self, attribute: &Attribute, value: &str) -> Result<Self, TreeError> {
        self.set_value(attribute, value)?;
        Ok(self)
    }

    /// Assign a value for `attribute`.
    pub fn set_value(&mut self, attribute: &Attribute, value: &str) -> Result<&mut Self, TreeError> {
        let index = if value == MISSING_VALUE {
            None
        } else {
            let index = attribute.value_index(value).ok_or_else(|| TreeError::InvalidValue {
                attribute: attribute.name().to_string(),
                value: value.to_string(),
                supported: attribute.supported_values(),
            })?;
            Some(index)
        };
        self.values.insert(attribute.clone(), index);
        Ok(self)
    }

    /// Mark the value of `attribute` as unknown.
    pub fn set_missing(&mut self, attribute: &Attribute) -> &mut Self {
        self.values.insert(attribute.clone(), None);
        self
    }

    pub fn classification(&self) -> Option<&C> {
        self.classification.as_ref()
    }

    /// The value for `attribute`, or `None` if it is missing or was never set.
    pub fn value<'a>(&self, attribute: &'a Attribute) -> Option<&'a str> {
        self.value_index(attribute).and_then(|i| attribute.value_at(i))
    }

    /// Domain position of the value for `attribute`, `None` when unknown.
    pub fn value_index(&self, attribute: &Attribute) -> Option<usize> {
        self.values.get(attribute).copied().flatten()
    }

    pub fn is_missing(&self, attribute: &Attribute) -> bool {
        self.value_index(attribute).is_none()
    }

    /// Number of attributes with an explicit assignment, missing ones included.
    pub fn n_assigned(&self) -> usize {
        self.values.len()
    }
}

impl<C: fmt::Display> fmt::Display for Example<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut assigned: Vec<(&str, &str)> = self
            .values
            .iter()
            .map(|(attr, idx)| {
                let v = idx.and_then(|i| attr.value_at(i)).unwrap_or(MISSING_VALUE);
                (attr.name(), v)
            })
            .collect();
        assigned.sort();
        let values: Vec<String> = assigned.iter().map(|(n, v)| format!("{}: {}", n, v)).collect();
        match &self.classification {
            Some(c) => write!(f, "Example({{{}}}, {})", values.join(", "), c),
            None => write!(f, "Example({{{}}}, {})", values.join(", "), MISSING_VALUE),
        }
    }
}
