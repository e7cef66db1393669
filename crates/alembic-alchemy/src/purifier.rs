//! # Purifier Module
//!
//! Provides the [`Purifier`], a container that auto-decomposes known
//! products into their components on insertion — the [`Cauldron`] run in
//! reverse.
//!
//! ## Decomposition Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Purifier::add(element)                         │
//! │                                                                     │
//! │   "Steam" a known product? ── no ──► store directly                │
//! │        │ yes                                                        │
//! │        ▼                                                            │
//! │   replace by components: "Water", "Fire"                           │
//! │   (first component expands fully before the second)               │
//! │        │                                                            │
//! │        ▼                                                            │
//! │   components that are themselves products cascade further          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`Cauldron`]: crate::Cauldron

use std::sync::Arc;

use tracing::{debug, warn};

use crate::element::Element;
use crate::recipes::RecipeBook;
use crate::storage::{ElementStore, Storage};

/// Upper bound on decomposition steps for a single `add`.
///
/// The recipe book does not rule out cross-recipe cycles (A decomposes to
/// B, B back to A); the budget keeps such a book from spinning forever.
const DECOMPOSITION_STEP_LIMIT: usize = 10_000;

// =============================================================================
// Purifier
// =============================================================================

/// A storage that decomposes known products as they are added.
///
/// Decomposition is by name only: a catalyst whose name happens to be a
/// registered product is broken down like any other element.
#[derive(Debug, Clone)]
pub struct Purifier {
    recipes: Arc<RecipeBook>,
    storage: Storage,
}

impl Purifier {
    /// Creates an empty purifier over the given recipe book.
    pub fn new(recipes: Arc<RecipeBook>) -> Self {
        Purifier {
            recipes,
            storage: Storage::new(),
        }
    }

    /// Returns the recipe book driving this purifier.
    pub fn recipes(&self) -> &RecipeBook {
        &self.recipes
    }
}

impl ElementStore for Purifier {
    /// Adds an element, decomposing it into components while its name is a
    /// registered product.
    ///
    /// Runs as an explicit LIFO work-list that reproduces the recursive
    /// order exactly: the first component is fully expanded before the
    /// second is touched. When the step budget trips, the remaining work
    /// is stored undecomposed.
    ///
    /// ## Example
    /// ```rust
    /// use std::sync::Arc;
    /// use alembic_alchemy::{Element, ElementStore, Purifier, RecipeBook};
    ///
    /// let mut book = RecipeBook::new();
    /// book.add_recipe("Water", "Fire", "Steam")?;
    ///
    /// let mut purifier = Purifier::new(Arc::new(book));
    /// purifier.add(Element::new("Steam"));
    ///
    /// assert_eq!(purifier.summary(), "Content:\n * Fire x 1\n * Water x 1");
    /// # Ok::<(), alembic_alchemy::AlchemyError>(())
    /// ```
    fn add(&mut self, element: Element) {
        let mut pending = vec![element];
        let mut steps = 0usize;

        while let Some(element) = pending.pop() {
            if steps >= DECOMPOSITION_STEP_LIMIT {
                warn!(
                    element = %element.name(),
                    limit = DECOMPOSITION_STEP_LIMIT,
                    "decomposition budget exhausted, storing undecomposed"
                );
                self.storage.elements.push(element);
                continue;
            }

            match self.recipes.components_of(element.name()) {
                Some((first, second)) => {
                    debug!(
                        element = %element.name(),
                        first = %first,
                        second = %second,
                        "decomposing product"
                    );
                    steps += 1;
                    // LIFO: push the second component first so the first
                    // one is expanded before it.
                    let (first, second) = (Element::new(first), Element::new(second));
                    pending.push(second);
                    pending.push(first);
                }
                None => self.storage.elements.push(element),
            }
        }
    }

    fn pop(&mut self, name: &str) -> Option<Element> {
        self.storage.pop(name)
    }

    fn extract(&mut self) -> Vec<Element> {
        self.storage.extract()
    }

    fn summary(&self) -> String {
        self.storage.summary()
    }

    fn len(&self) -> usize {
        self.storage.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn book(recipes: &[(&str, &str, &str)]) -> Arc<RecipeBook> {
        let mut book = RecipeBook::new();
        for (a, b, p) in recipes {
            book.add_recipe(a, b, p).unwrap();
        }
        Arc::new(book)
    }

    #[test]
    fn test_unknown_element_is_stored_directly() {
        let mut purifier = Purifier::new(book(&[("Water", "Fire", "Steam")]));
        purifier.add(Element::new("Water"));

        assert_eq!(purifier.summary(), "Content:\n * Water x 1");
    }

    #[test]
    fn test_product_decomposes_in_component_order() {
        let mut purifier = Purifier::new(book(&[("Water", "Fire", "Steam")]));
        purifier.add(Element::new("Steam"));

        // Components come out in recipe registration order
        let contents = purifier.extract();
        let names: Vec<&str> = contents.iter().map(Element::name).collect();
        assert_eq!(names, ["Water", "Fire"]);
    }

    #[test]
    fn test_nested_decomposition_cascades() {
        let mut purifier = Purifier::new(book(&[
            ("Water", "Fire", "Steam"),
            ("Steam", "Wind", "Mist"),
        ]));
        purifier.add(Element::new("Mist"));

        // Mist -> (Steam, Wind); Steam expands fully before Wind is touched
        let contents = purifier.extract();
        let names: Vec<&str> = contents.iter().map(Element::name).collect();
        assert_eq!(names, ["Water", "Fire", "Wind"]);
    }

    #[test]
    fn test_catalyst_with_product_name_decomposes() {
        let mut purifier = Purifier::new(book(&[("Water", "Fire", "Steam")]));
        purifier.add(Element::catalyst("Steam", 3));

        // Decomposition is by name; the components come out plain
        let contents = purifier.extract();
        assert!(contents.iter().all(|el| !el.is_catalyst()));
    }

    #[test]
    fn test_decomposition_cycle_terminates() {
        // Ember decomposes to Ash + Spark, Ash back to Ember + Soot: the
        // expansion regenerates itself forever without the step budget.
        let mut purifier = Purifier::new(book(&[
            ("Ash", "Spark", "Ember"),
            ("Ember", "Soot", "Ash"),
        ]));
        purifier.add(Element::new("Ember"));

        // Reaching this point at all proves termination; the leftovers of
        // the cycle are stored rather than dropped.
        assert!(!purifier.is_empty());
        assert!(purifier.summary().contains("Spark"));
    }
}
