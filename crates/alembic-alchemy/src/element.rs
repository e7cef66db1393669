//! # Element Module
//!
//! Provides the [`Element`] type, the atomic unit of the simulation.
//!
//! An element is a named token. A *catalyst* is an element that carries a
//! remaining-uses counter: it participates in reactions without being
//! consumed, spending one use per reaction, and becomes permanently inert
//! once the counter reaches zero.
//!
//! ## Usage
//! ```rust
//! use alembic_alchemy::Element;
//!
//! let water = Element::new("Water");
//! assert!(!water.is_catalyst());
//!
//! let stone = Element::catalyst("Philosophers Stone", 3);
//! assert_eq!(stone.remaining_uses(), Some(3));
//! assert!(!stone.is_inert());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Element Type
// =============================================================================

/// A named alchemical token.
///
/// ## Design Decisions
/// - **Single type, optional counter**: the catalyst variant is a
///   discriminant field (`catalyst_uses`), not a subtype. `None` means a
///   plain element; `Some(n)` means a catalyst with `n` uses left.
/// - **Immutable name**: once created, an element never changes its name.
///   Only the catalyst counter ever moves, and only downward.
/// - **Matching is by name**: containers compare elements by `name()` when
///   searching for reaction partners; full value equality is only used by
///   tests and callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Element name, e.g. `"Water"`.
    name: String,

    /// Remaining catalyst uses. `None` for plain elements.
    catalyst_uses: Option<u32>,
}

impl Element {
    /// Creates a plain element.
    ///
    /// ## Example
    /// ```rust
    /// use alembic_alchemy::Element;
    ///
    /// let fire = Element::new("Fire");
    /// assert_eq!(fire.name(), "Fire");
    /// assert_eq!(fire.remaining_uses(), None);
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Element {
            name: name.into(),
            catalyst_uses: None,
        }
    }

    /// Creates a catalyst with the given number of reaction uses.
    ///
    /// A catalyst created with zero uses is inert from the start: it can be
    /// stored but never reacts.
    pub fn catalyst(name: impl Into<String>, uses: u32) -> Self {
        Element {
            name: name.into(),
            catalyst_uses: Some(uses),
        }
    }

    /// Returns the element name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if this element is a catalyst (regardless of uses left).
    #[inline]
    pub fn is_catalyst(&self) -> bool {
        self.catalyst_uses.is_some()
    }

    /// Returns the remaining catalyst uses, or `None` for plain elements.
    #[inline]
    pub fn remaining_uses(&self) -> Option<u32> {
        self.catalyst_uses
    }

    /// Returns true if this element can no longer react.
    ///
    /// Only a depleted catalyst is inert. Plain elements always react;
    /// depleted catalysts stay in storage but are skipped by every partner
    /// search.
    #[inline]
    pub fn is_inert(&self) -> bool {
        self.catalyst_uses == Some(0)
    }

    /// Spends one catalyst use. No-op on plain elements.
    ///
    /// Callers must check [`Element::is_inert`] first; the counter
    /// saturates at zero.
    pub(crate) fn spend_use(&mut self) {
        if let Some(uses) = self.catalyst_uses.as_mut() {
            *uses = uses.saturating_sub(1);
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the name, with the remaining uses for catalysts.
///
/// `Water` for a plain element, `Quicksilver (2 uses)` for a catalyst.
impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.catalyst_uses {
            Some(uses) => write!(f, "{} ({} uses)", self.name, uses),
            None => write!(f, "{}", self.name),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_element() {
        let water = Element::new("Water");
        assert_eq!(water.name(), "Water");
        assert!(!water.is_catalyst());
        assert!(!water.is_inert());
        assert_eq!(water.remaining_uses(), None);
    }

    #[test]
    fn test_catalyst_counter() {
        let mut stone = Element::catalyst("Stone", 2);
        assert!(stone.is_catalyst());
        assert!(!stone.is_inert());

        stone.spend_use();
        assert_eq!(stone.remaining_uses(), Some(1));

        stone.spend_use();
        assert_eq!(stone.remaining_uses(), Some(0));
        assert!(stone.is_inert());

        // Saturates at zero
        stone.spend_use();
        assert_eq!(stone.remaining_uses(), Some(0));
    }

    #[test]
    fn test_zero_use_catalyst_is_inert_from_start() {
        let dud = Element::catalyst("Dud", 0);
        assert!(dud.is_catalyst());
        assert!(dud.is_inert());
    }

    #[test]
    fn test_spend_use_is_noop_on_plain_element() {
        let mut fire = Element::new("Fire");
        fire.spend_use();
        assert_eq!(fire.remaining_uses(), None);
        assert!(!fire.is_inert());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Element::new("Water")), "Water");
        assert_eq!(
            format!("{}", Element::catalyst("Quicksilver", 2)),
            "Quicksilver (2 uses)"
        );
    }
}
