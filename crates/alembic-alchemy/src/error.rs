//! # Error Types
//!
//! Domain-specific error types for alembic-alchemy.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the offending names)
//! 3. Errors are enum variants, never String
//!
//! Soft "not found" conditions are not errors:
//! [`crate::ElementStore::pop`] returns `Option`, and so do the
//! [`crate::RecipeBook`] lookups.

use thiserror::Error;

// =============================================================================
// Alchemy Error
// =============================================================================

/// Errors raised while registering recipes.
///
/// Both variants abort the insertion with the recipe book unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlchemyError {
    /// A recipe's component and product names must be pairwise distinct.
    #[error("recipe names must be distinct: {first} + {second} -> {product}")]
    DuplicateRecipeNames {
        first: String,
        second: String,
        product: String,
    },

    /// The unordered component pair is already registered.
    ///
    /// Duplicate pairs fail at insertion; there is no last-written-wins.
    #[error("components {first} + {second} already produce {product}")]
    RecipeOverlap {
        first: String,
        second: String,
        /// The product the existing recipe yields.
        product: String,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with AlchemyError.
pub type AlchemyResult<T> = Result<T, AlchemyError>;

// =============================================================================
// Unit Tests
// =============================================================================
