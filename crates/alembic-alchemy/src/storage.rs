//! # Storage Module
//!
//! Provides [`Storage`], an append-ordered multiset of elements, and the
//! [`ElementStore`] contract shared by every container in this crate.
//!
//! ## The ElementStore Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        ElementStore                                 │
//! │                                                                     │
//! │   add(element)      insert; containers may react on insert         │
//! │   pop(name)         remove most recent element with that name      │
//! │   extract()         drain everything, insertion order preserved    │
//! │   summary()         per-name counts, sorted by name                │
//! │                                                                     │
//! │   Implementors:  Storage (plain append)                            │
//! │                  Cauldron (combines on insert)                     │
//! │                  Purifier (decomposes on insert)                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;
use std::mem;

use crate::element::Element;

// =============================================================================
// ElementStore Trait
// =============================================================================

/// Common contract of every element container.
///
/// [`Cauldron`](crate::Cauldron) and [`Purifier`](crate::Purifier) share
/// this interface with the plain [`Storage`]; only their `add` behavior
/// differs.
pub trait ElementStore {
    /// Inserts an element. Specialized containers may react on insert.
    fn add(&mut self, element: Element);

    /// Removes and returns the most recently added element with the given
    /// name, scanning back-to-front. Returns `None` when no element
    /// matches; removes exactly one element even when names repeat.
    fn pop(&mut self, name: &str) -> Option<Element>;

    /// Returns all elements in insertion order and leaves the container
    /// empty. A second call yields an empty vec.
    fn extract(&mut self) -> Vec<Element>;

    /// Returns a human-readable overview of the contents.
    ///
    /// One `* <Name> x <Count>` line per distinct name, sorted
    /// lexicographically ascending, or the `Empty.` sentinel:
    ///
    /// ```text
    /// Content:
    ///  * Fire x 1
    ///  * Water x 2
    /// ```
    fn summary(&self) -> String;

    /// Returns the number of stored elements.
    fn len(&self) -> usize;

    /// Returns true if nothing is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// Storage
// =============================================================================

/// An append-ordered multiset of elements.
///
/// Insertion order is preserved for [`ElementStore::extract`]; order is
/// irrelevant for [`ElementStore::summary`]. A `Storage` is owned
/// exclusively by whichever container holds it.
#[derive(Debug, Clone, Default)]
pub struct Storage {
    /// Elements in insertion order, most recent last.
    pub(crate) elements: Vec<Element>,
}

impl Storage {
    /// Creates an empty storage.
    pub fn new() -> Self {
        Storage::default()
    }
}

impl ElementStore for Storage {
    fn add(&mut self, element: Element) {
        self.elements.push(element);
    }

    fn pop(&mut self, name: &str) -> Option<Element> {
        let idx = self.elements.iter().rposition(|el| el.name() == name)?;
        Some(self.elements.remove(idx))
    }

    fn extract(&mut self) -> Vec<Element> {
        mem::take(&mut self.elements)
    }

    fn summary(&self) -> String {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for element in &self.elements {
            *counts.entry(element.name()).or_insert(0) += 1;
        }

        let mut out = String::from("Content:\n ");
        if counts.is_empty() {
            out.push_str("Empty.");
        } else {
            let lines: Vec<String> = counts
                .iter()
                .map(|(name, count)| format!("* {name} x {count}"))
                .collect();
            out.push_str(&lines.join("\n "));
        }
        out
    }

    fn len(&self) -> usize {
        self.elements.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_len() {
        let mut storage = Storage::new();
        assert!(storage.is_empty());

        storage.add(Element::new("Water"));
        storage.add(Element::new("Fire"));
        assert_eq!(storage.len(), 2);
    }

    #[test]
    fn test_pop_removes_most_recent_match() {
        let mut storage = Storage::new();
        storage.add(Element::new("Water"));
        storage.add(Element::catalyst("Water", 1));
        storage.add(Element::new("Fire"));

        // The catalyst was the most recently added "Water"
        let popped = storage.pop("Water").unwrap();
        assert!(popped.is_catalyst());
        assert_eq!(storage.len(), 2);

        // The plain one is still there
        let popped = storage.pop("Water").unwrap();
        assert!(!popped.is_catalyst());

        assert_eq!(storage.pop("Water"), None);
    }

    #[test]
    fn test_extract_drains_in_insertion_order() {
        let mut storage = Storage::new();
        storage.add(Element::new("Water"));
        storage.add(Element::new("Fire"));

        let drained = storage.extract();
        let names: Vec<&str> = drained.iter().map(Element::name).collect();
        assert_eq!(names, ["Water", "Fire"]);

        // Second extraction yields nothing
        assert!(storage.extract().is_empty());
    }

    #[test]
    fn test_summary_sorted_by_name() {
        let mut storage = Storage::new();
        storage.add(Element::new("Water"));
        storage.add(Element::new("Fire"));
        storage.add(Element::new("Water"));

        assert_eq!(storage.summary(), "Content:\n * Fire x 1\n * Water x 2");
    }

    #[test]
    fn test_summary_empty_sentinel() {
        let storage = Storage::new();
        assert_eq!(storage.summary(), "Content:\n Empty.");
    }
}
