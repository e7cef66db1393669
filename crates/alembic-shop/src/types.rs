//! # Domain Types
//!
//! Catalog items and purchase log entries.
//!
//! Both are plain immutable values: an [`Item`] is configured once when
//! the caller builds the catalog, a [`PurchaseLog`] is minted by a basket
//! at purchase time and then only ever read.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ShopError, ShopResult};
use crate::money::Money;
use crate::TIMESTAMP_FORMAT;

// =============================================================================
// Item
// =============================================================================

/// A priced catalog entry.
///
/// Immutable once created; the price is validated at construction and
/// never changes. Baskets and the stock ledger match items by value
/// (name and price).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    name: String,
    price: Money,
}

impl Item {
    /// Creates a catalog item.
    ///
    /// ## Errors
    /// [`ShopError::NegativePrice`] if the price is below zero. A price of
    /// zero is allowed (free items).
    ///
    /// ## Example
    /// ```rust
    /// use alembic_shop::{Item, Money};
    ///
    /// let tea = Item::new("Tea", Money::from_cents(250))?;
    /// assert_eq!(tea.name(), "Tea");
    ///
    /// assert!(Item::new("Scam", Money::from_cents(-1)).is_err());
    /// # Ok::<(), alembic_shop::ShopError>(())
    /// ```
    pub fn new(name: impl Into<String>, price: Money) -> ShopResult<Self> {
        let name = name.into();
        if price.is_negative() {
            return Err(ShopError::NegativePrice { name, price });
        }
        Ok(Item { name, price })
    }

    /// Returns the item name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.price)
    }
}

// =============================================================================
// Purchase Log
// =============================================================================

/// One entry in a purchase history: when, and what.
///
/// The timestamp is formatted `DD/MM/YYYY HH:MM`
/// ([`crate::TIMESTAMP_FORMAT`]); the item summary is a comma-joined
/// `"<name> x <quantity>"` list in basket line order, e.g.
/// `"Tea x 2, Honey x 1"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseLog {
    timestamp: String,
    items: String,
}

impl PurchaseLog {
    /// Creates a log entry from an already-formatted timestamp and item
    /// summary.
    pub(crate) fn new(timestamp: String, items: String) -> Self {
        PurchaseLog { timestamp, items }
    }

    /// Returns the formatted purchase timestamp.
    #[inline]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Returns the item summary line.
    #[inline]
    pub fn items(&self) -> &str {
        &self.items
    }

    /// Parses the timestamp back into a sortable instant.
    ///
    /// Entries are always minted through [`crate::Basket`], so the parse
    /// only fails for hand-built history; such entries sort to the far
    /// past rather than poisoning the ordering.
    pub(crate) fn sort_key(&self) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&self.timestamp, TIMESTAMP_FORMAT)
            .unwrap_or(NaiveDateTime::MIN)
    }
}

impl fmt::Display for PurchaseLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.timestamp, self.items)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
