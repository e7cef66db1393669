//! # Cauldron Module
//!
//! Provides the [`Cauldron`], a container that auto-combines reacting
//! elements on insertion.
//!
//! ## Reaction Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Cauldron::add(element)                         │
//! │                                                                     │
//! │   work-list: [element]                                              │
//! │        │                                                            │
//! │        ▼                                                            │
//! │   inert catalyst? ──────────► append, done                         │
//! │        │                                                            │
//! │        ▼                                                            │
//! │   scan storage newest → oldest, skipping inert catalysts           │
//! │        │                                                            │
//! │        ├── partner found:                                           │
//! │        │     catalyst partner    → spend one use, keep in place    │
//! │        │     catalyst newcomer   → spend one use, push to storage  │
//! │        │     non-catalyst partner → consume (remove at position)   │
//! │        │     product ──► back onto the work-list (cascade)         │
//! │        │                                                            │
//! │        └── no partner: append as-is                                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! One insertion triggers at most one reaction per work-list step; chains
//! happen because each product re-enters the work-list. The fold always
//! terminates: every reaction either consumes a stored non-catalyst or
//! spends a finite catalyst use.

use std::sync::Arc;

use tracing::debug;

use crate::element::Element;
use crate::recipes::RecipeBook;
use crate::storage::{ElementStore, Storage};

// =============================================================================
// Cauldron
// =============================================================================

/// A storage that combines reacting elements as they are added.
///
/// The recipe book is shared: the same `Arc<RecipeBook>` can drive a
/// cauldron and a [`Purifier`](crate::Purifier) at once.
#[derive(Debug, Clone)]
pub struct Cauldron {
    recipes: Arc<RecipeBook>,
    storage: Storage,
}

impl Cauldron {
    /// Creates an empty cauldron over the given recipe book.
    pub fn new(recipes: Arc<RecipeBook>) -> Self {
        Cauldron {
            recipes,
            storage: Storage::new(),
        }
    }

    /// Returns the recipe book driving this cauldron.
    pub fn recipes(&self) -> &RecipeBook {
        &self.recipes
    }

    /// Finds the reaction partner for `element`: the most recently added,
    /// non-inert element whose name pairs with it in the recipe book.
    /// Returns the partner's position and the product name.
    fn find_partner(&self, element: &Element) -> Option<(usize, String)> {
        for idx in (0..self.storage.elements.len()).rev() {
            let partner = &self.storage.elements[idx];
            if partner.is_inert() {
                continue;
            }
            if let Some(product) = self.recipes.product_name(element.name(), partner.name()) {
                return Some((idx, product.to_string()));
            }
        }
        None
    }
}

impl ElementStore for Cauldron {
    /// Adds an element, combining it with stored elements while recipes
    /// apply.
    ///
    /// The recursive formulation ("add the product, which may react again")
    /// runs here as an explicit LIFO work-list so that pathological recipe
    /// chains cannot grow the call stack; the order of operations is
    /// identical.
    ///
    /// ## Example
    /// ```rust
    /// use std::sync::Arc;
    /// use alembic_alchemy::{Cauldron, Element, ElementStore, RecipeBook};
    ///
    /// let mut book = RecipeBook::new();
    /// book.add_recipe("Water", "Wind", "Ice")?;
    ///
    /// let mut cauldron = Cauldron::new(Arc::new(book));
    /// cauldron.add(Element::new("Water"));
    /// cauldron.add(Element::new("Wind"));
    ///
    /// let names: Vec<String> = cauldron
    ///     .extract()
    ///     .iter()
    ///     .map(|el| el.name().to_string())
    ///     .collect();
    /// assert_eq!(names, ["Ice"]);
    /// # Ok::<(), alembic_alchemy::AlchemyError>(())
    /// ```
    fn add(&mut self, element: Element) {
        let mut pending = vec![element];

        while let Some(mut element) = pending.pop() {
            // A depleted catalyst is permanently inert: it goes straight
            // into storage and is skipped by every future partner search.
            if element.is_inert() {
                self.storage.elements.push(element);
                continue;
            }

            let Some((idx, product)) = self.find_partner(&element) else {
                self.storage.elements.push(element);
                continue;
            };

            debug!(
                element = %element.name(),
                partner = %self.storage.elements[idx].name(),
                product = %product,
                "combining elements"
            );

            // A catalyst partner spends one use and stays in place; a
            // non-catalyst partner is consumed below.
            let partner_is_catalyst = self.storage.elements[idx].is_catalyst();
            if partner_is_catalyst {
                self.storage.elements[idx].spend_use();
            }

            // A catalyst newcomer is likewise retained, one use poorer.
            if element.is_catalyst() {
                element.spend_use();
                self.storage.elements.push(element);
            }

            if !partner_is_catalyst {
                self.storage.elements.remove(idx);
            }

            // The product may itself react; at most one reaction per step,
            // the work-list handles the chaining.
            pending.push(Element::new(product));
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
