//! Attribute
//!
//! A named, finite domain of legal values for one categorical feature.
//! Attributes are shared handles: cloning one yields the same domain, and two
//! attributes built from identical arguments are still distinct.
use crate::constants::MISSING_VALUE;
use crate::errors::TreeError;
use crate::utils::items_to_strings;
use hashbrown::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

#[derive(Debug)]
struct Domain {
    name: String,
    values: Vec<String>,
}

/// Handle to a categorical attribute domain, compared by identity.
#[derive(Debug, Clone)]
pub struct Attribute {
    domain: Arc<Domain>,
}

impl Attribute {
    /// Create a new attribute domain.
    ///
    /// * `name` - Name of the attribute, used for display and error messages.
    /// * `values` - The ordered, distinct legal values. The missing marker is not allowed.
    pub fn new<S, I, V>(name: S, values: I) -> Result<Self, TreeError>
    where
        S: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let name = name.into();
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return Err(TreeError::EmptyDomain(name));
        }
        {
            // `seen` borrows `values`, so it must be gone before `values` moves.
            let mut seen = HashSet::with_capacity(values.len());
            for v in &values {
                if v == MISSING_VALUE {
                    return Err(TreeError::ReservedValue(name, v.clone()));
                }
                if !seen.insert(v.as_str()) {
                    return Err(TreeError::DuplicateValue(name, v.clone()));
                }
            }
        }
        Ok(Attribute {
            domain: Arc::new(Domain { name, values }),
        })
    }

    pub fn name(&self) -> &str {
        &self.domain.name
    }

    /// The legal values, in declaration order.
    pub fn values(&self) -> &[String] {
        &self.domain.values
    }

    pub fn n_values(&self) -> usize {
        self.domain.values.len()
    }

    /// Position of `value` in the domain, if it is legal.
    pub fn value_index(&self, value: &str) -> Option<usize> {
        self.domain.values.iter().position(|v| v == value)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.value_index(value).is_some()
    }

    /// Value at a given domain position.
    pub fn value_at(&self, index: usize) -> Option<&str> {
        self.domain.values.get(index).map(String::as_str)
    }

    pub(crate) fn supported_values(&self) -> String {
        items_to_strings(self.domain.values.iter().map(String::as_str).collect())
    }
}

impl PartialEq for Attribute {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.domain, &other.domain)
    }
}

impl Eq for Attribute {}

impl Hash for Attribute {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Arc::as_ptr(&self.domain) as usize).hash(state);
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Attribute({}: [{}])", self.name(), self.domain.values.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_values() {
        let education = Attribute::new("Education", ["High", "Moderate", "None"]).unwrap();
        assert_eq!(education.name(), "Education");
        assert_eq!(education.n_values(), 3);
        assert_eq!(education.value_index("Moderate"), Some(1));
        assert_eq!(education.value_at(2), Some("None"));
        assert!(!education.contains("Low"));
        assert!(!education.contains(MISSING_VALUE));
        assert_eq!(education.to_string(), "Attribute(Education: [High, Moderate, None])");
    }

    #[test]
    fn test_attribute_identity() {
        let a = Attribute::new("Gender", ["M", "F"]).unwrap();
        let b = Attribute::new("Gender", ["M", "F"]).unwrap();
        let a2 = a.clone();
        assert_eq!(a, a2);
        assert_ne!(a, b);

        let set: HashSet<Attribute> = [a.clone(), a2, b].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_attribute_owns_its_values() {
        let values = vec!["R".to_string(), "M".to_string(), "P".to_string()];
        let status = Attribute::new("FinancialStatus", values.clone()).unwrap();
        drop(values);
        assert_eq!(status.values(), ["R", "M", "P"]);
        assert_eq!(status.supported_values(), "R, M, P");
    }

    #[test]
    fn test_attribute_invalid_domains() {
        let empty: [&str; 0] = [];
        assert_eq!(
            Attribute::new("Empty", empty).unwrap_err(),
            TreeError::EmptyDomain("Empty".to_string())
        );
        assert_eq!(
            Attribute::new("Dup", ["a", "b", "a"]).unwrap_err(),
            TreeError::DuplicateValue("Dup".to_string(), "a".to_string())
        );
        assert_eq!(
            Attribute::new("Reserved", ["a", MISSING_VALUE]).unwrap_err(),
            TreeError::ReservedValue("Reserved".to_string(), MISSING_VALUE.to_string())
        );
    }
}
