//! # alembic-alchemy: Element Combination Engine
//!
//! An in-memory simulation of alchemical reactions: named elements are
//! dropped into containers and react pairwise into products according to a
//! caller-supplied recipe table.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        alembic-alchemy                              │
//! │                                                                     │
//! │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐      │
//! │   │  element  │  │  recipes  │  │  cauldron │  │  purifier │      │
//! │   │  Element  │  │ RecipeBook│  │ combines  │  │decomposes │      │
//! │   │  Catalyst │  │ pair↔prod │  │ on insert │  │ on insert │      │
//! │   └───────────┘  └───────────┘  └───────────┘  └───────────┘      │
//! │                                                                     │
//! │   NO I/O • NO GLOBALS • SINGLE-THREADED • PURE FUNCTIONS           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`element`] - The [`Element`] token, with an optional catalyst counter
//! - [`recipes`] - The [`RecipeBook`] pair ↔ product lookup
//! - [`storage`] - The [`Storage`] container and the [`ElementStore`] contract
//! - [`cauldron`] - A container that auto-combines reacting elements
//! - [`purifier`] - A container that auto-decomposes known products
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use alembic_alchemy::{Cauldron, Element, ElementStore, RecipeBook};
//!
//! let mut book = RecipeBook::new();
//! book.add_recipe("Water", "Wind", "Ice")?;
//!
//! let mut cauldron = Cauldron::new(Arc::new(book));
//! cauldron.add(Element::new("Water"));
//! cauldron.add(Element::new("Wind"));
//!
//! let brewed = cauldron.extract();
//! assert_eq!(brewed.len(), 1);
//! assert_eq!(brewed[0].name(), "Ice");
//! # Ok::<(), alembic_alchemy::AlchemyError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cauldron;
pub mod element;
pub mod error;
pub mod purifier;
pub mod recipes;
pub mod storage;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use alembic_alchemy::Cauldron` instead of
// `use alembic_alchemy::cauldron::Cauldron`

pub use cauldron::Cauldron;
pub use element::Element;
pub use error::{AlchemyError, AlchemyResult};
pub use purifier::Purifier;
pub use recipes::{ComponentPair, RecipeBook};
pub use storage::{ElementStore, Storage};
