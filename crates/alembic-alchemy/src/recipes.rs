//! # Recipe Book Module
//!
//! Provides the [`RecipeBook`], a bidirectional lookup between unordered
//! component pairs and product names.
//!
//! ## Lookup Directions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         RecipeBook                                  │
//! │                                                                     │
//! │   forward:  (Water, Wind) ──► "Ice"      used by the Cauldron      │
//! │   reverse:  "Ice" ──► (Water, Wind)      used by the Purifier      │
//! │                                                                     │
//! │   Pairs are unordered: (Wind, Water) and (Water, Wind) are the     │
//! │   same key. Both maps are kept in lockstep by add_recipe.          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use alembic_alchemy::RecipeBook;
//!
//! let mut book = RecipeBook::new();
//! book.add_recipe("Water", "Wind", "Ice")?;
//!
//! assert_eq!(book.product_name("Wind", "Water"), Some("Ice"));
//! assert_eq!(book.components_of("Ice"), Some(("Water", "Wind")));
//! assert_eq!(book.product_name("Fire", "Water"), None);
//!
//! // Components come back in registration order
//! book.add_recipe("Fire", "Earth", "Lava")?;
//! assert_eq!(book.components_of("Lava"), Some(("Fire", "Earth")));
//! # Ok::<(), alembic_alchemy::AlchemyError>(())
//! ```

use std::collections::HashMap;

use crate::error::{AlchemyError, AlchemyResult};

// =============================================================================
// Component Pair
// =============================================================================

/// An unordered pair of component names, normalized so the
/// lexicographically smaller name comes first.
///
/// Normalization makes the pair usable as a map key that is insensitive to
/// argument order: `ComponentPair::new("Wind", "Water")` and
/// `ComponentPair::new("Water", "Wind")` are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentPair {
    first: String,
    second: String,
}

impl ComponentPair {
    /// Creates a normalized pair from two component names.
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        let (a, b) = (a.into(), b.into());
        if a <= b {
            ComponentPair { first: a, second: b }
        } else {
            ComponentPair { first: b, second: a }
        }
    }

    /// The lexicographically smaller component name.
    #[inline]
    pub fn first(&self) -> &str {
        &self.first
    }

    /// The lexicographically larger component name.
    #[inline]
    pub fn second(&self) -> &str {
        &self.second
    }
}

// =============================================================================
// Recipe Book
// =============================================================================

/// Registry of pairwise combination rules.
///
/// ## Invariants
/// - Each unordered component pair maps to at most one product.
/// - Each product name maps to at most one originating pair.
/// - A recipe's two component names and its product name are pairwise
///   distinct.
///
/// All three are enforced at insertion by [`RecipeBook::add_recipe`]; a
/// failed insertion leaves the book unchanged.
#[derive(Debug, Clone, Default)]
pub struct RecipeBook {
    /// Forward mapping: unordered component pair -> product name.
    recipes: HashMap<ComponentPair, String>,

    /// Reverse mapping: product name -> components, in the order the
    /// recipe was registered with.
    reverse: HashMap<String, (String, String)>,
}

impl RecipeBook {
    /// Creates an empty recipe book.
    pub fn new() -> Self {
        RecipeBook::default()
    }

    /// Registers a combination rule: `first + second -> product`.
    ///
    /// ## Errors
    /// - [`AlchemyError::DuplicateRecipeNames`] if any two of the three
    ///   names are equal.
    /// - [`AlchemyError::RecipeOverlap`] if the unordered pair already has
    ///   a registered product.
    ///
    /// ## Example
    /// ```rust
    /// use alembic_alchemy::{AlchemyError, RecipeBook};
    ///
    /// let mut book = RecipeBook::new();
    /// book.add_recipe("Water", "Wind", "Ice")?;
    ///
    /// // Same pair, any order: rejected
    /// let err = book.add_recipe("Wind", "Water", "Sleet").unwrap_err();
    /// assert!(matches!(err, AlchemyError::RecipeOverlap { .. }));
    /// # Ok::<(), alembic_alchemy::AlchemyError>(())
    /// ```
    pub fn add_recipe(&mut self, first: &str, second: &str, product: &str) -> AlchemyResult<()> {
        if first == second || first == product || second == product {
            return Err(AlchemyError::DuplicateRecipeNames {
                first: first.to_string(),
                second: second.to_string(),
                product: product.to_string(),
            });
        }

        let pair = ComponentPair::new(first, second);
        if let Some(existing) = self.recipes.get(&pair) {
            return Err(AlchemyError::RecipeOverlap {
                first: first.to_string(),
                second: second.to_string(),
                product: existing.clone(),
            });
        }

        self.reverse
            .insert(product.to_string(), (first.to_string(), second.to_string()));
        self.recipes.insert(pair, product.to_string());
        Ok(())
    }

    /// Looks up the product for two component names, in either order.
    pub fn product_name(&self, a: &str, b: &str) -> Option<&str> {
        self.recipes
            .get(&ComponentPair::new(a, b))
            .map(String::as_str)
    }

    /// Looks up the originating components of a product, in the order the
    /// recipe was registered with.
    pub fn components_of(&self, product: &str) -> Option<(&str, &str)> {
        self.reverse
            .get(product)
            .map(|(a, b)| (a.as_str(), b.as_str()))
    }

    /// Returns true if the unordered pair has a registered product.
    pub fn contains(&self, a: &str, b: &str) -> bool {
        self.recipes.contains_key(&ComponentPair::new(a, b))
    }

    /// Returns the number of registered recipes.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Returns true if no recipes are registered.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_is_order_insensitive() {
        assert_eq!(
            ComponentPair::new("Wind", "Water"),
            ComponentPair::new("Water", "Wind")
        );
        assert_eq!(ComponentPair::new("Wind", "Water").first(), "Water");
    }

    #[test]
    fn test_lookup_both_orders() {
        let mut book = RecipeBook::new();
        book.add_recipe("Water", "Wind", "Ice").unwrap();

        assert_eq!(book.product_name("Water", "Wind"), Some("Ice"));
        assert_eq!(book.product_name("Wind", "Water"), Some("Ice"));
        assert_eq!(book.product_name("Fire", "Water"), None);

        book.add_recipe("Water", "Fire", "Steam").unwrap();
        assert_eq!(book.product_name("Fire", "Water"), Some("Steam"));
    }

    #[test]
    fn test_components_of_keeps_registration_order() {
        let mut book = RecipeBook::new();
        book.add_recipe("Wind", "Water", "Ice").unwrap();

        assert_eq!(book.components_of("Ice"), Some(("Wind", "Water")));
        assert_eq!(book.components_of("Steam"), None);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut book = RecipeBook::new();

        for (a, b, p) in [
            ("Water", "Water", "Ice"),
            ("Water", "Wind", "Water"),
            ("Water", "Wind", "Wind"),
        ] {
            let err = book.add_recipe(a, b, p).unwrap_err();
            assert!(matches!(err, AlchemyError::DuplicateRecipeNames { .. }));
        }
        assert!(book.is_empty());
    }

    #[test]
    fn test_overlap_rejected_and_book_unchanged() {
        let mut book = RecipeBook::new();
        book.add_recipe("Water", "Wind", "Ice").unwrap();

        let err = book.add_recipe("Wind", "Water", "Sleet").unwrap_err();
        assert_eq!(
            err,
            AlchemyError::RecipeOverlap {
                first: "Wind".to_string(),
                second: "Water".to_string(),
                product: "Ice".to_string(),
            }
        );

        // The original recipe is intact, the rejected one left no trace
        assert_eq!(book.len(), 1);
        assert_eq!(book.product_name("Water", "Wind"), Some("Ice"));
        assert_eq!(book.components_of("Sleet"), None);
    }

    #[test]
    fn test_contains() {
        let mut book = RecipeBook::new();
        book.add_recipe("Water", "Wind", "Ice").unwrap();

        assert!(book.contains("Wind", "Water"));
        assert!(!book.contains("Fire", "Water"));
    }
}
