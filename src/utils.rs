use crate::example::Example;
use hashbrown::HashMap;
use std::hash::Hash;

/// Create a string of all available items.
pub fn items_to_strings(items: Vec<&str>) -> String {
    let mut s = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            s.push_str(", ");
        }
        s.push_str(item);
    }
    s
}

/// Round a float to a given number of decimal places.
pub fn precision_round(n: f64, precision: i32) -> f64 {
    let p = (10.0_f64).powi(precision);
    (n * p).round() / p
}

/// Weighted counter that remembers the order in which keys were first seen.
///
/// Iteration and tie-breaking both follow that order, which keeps every
/// arg-max over a tally deterministic.
#[derive(Debug, Clone)]
pub struct Tally<K> {
    index: HashMap<K, usize>,
    entries: Vec<(K, f64)>,
}

impl<K> Default for Tally<K> {
    fn default() -> Self {
        Tally {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<K: Clone + Eq + Hash> Tally<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `weight` to `key`, creating the entry if it is absent.
    pub fn add(&mut self, key: K, weight: f64) {
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 += weight,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, weight));
            }
        }
    }

    pub fn get(&self, key: &K) -> Option<f64> {
        self.index.get(key).map(|&i| self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(K, f64)> {
        self.entries.iter()
    }

    /// The first key holding the largest weight.
    pub fn argmax(&self) -> Option<&K> {
        let mut best: Option<&(K, f64)> = None;
        for entry in &self.entries {
            match best {
                Some(b) if entry.1 <= b.1 => {}
                _ => best = Some(entry),
            }
        }
        best.map(|(k, _)| k)
    }

    pub fn into_entries(self) -> Vec<(K, f64)> {
        self.entries
    }
}

/// Shannon entropy (base 2) of the classifications of the indexed examples.
///
/// Unknown classifications count as a class of their own. The entropy of an
/// empty set is 0.
pub fn entropy<C: Clone + Eq + Hash>(examples: &[Example<C>], index: &[usize]) -> f64 {
    if index.is_empty() {
        return 0.0;
    }
    let mut counts = Tally::new();
    for &i in index {
        counts.add(examples[i].classification(), 1.0);
    }
    let n = index.len() as f64;
    counts
        .iter()
        .map(|(_, count)| {
            let p = count / n;
            -p * p.log2()
        })
        .sum()
}

/// Most frequent known classification among the indexed examples.
///
/// Ties go to the label encountered first. Returns `None` when no indexed
/// example is labeled.
pub fn majority_class<C: Clone + Eq + Hash>(examples: &[Example<C>], index: &[usize]) -> Option<C> {
    let mut counts = Tally::new();
    for &i in index {
        if let Some(c) = examples[i].classification() {
            counts.add(c, 1.0);
        }
    }
    counts.argmax().map(|c| (*c).clone())
}
