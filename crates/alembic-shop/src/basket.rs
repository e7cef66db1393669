//! # Basket Module
//!
//! A customer's in-progress cart: insertion-ordered lines of items and
//! quantities.
//!
//! ## Invariants
//! - One line per distinct item; adding the same item again accumulates
//!   its quantity
//! - Quantities never go negative; a line may reach zero but stays
//!   tracked until [`Basket::clear`]
//! - Line order is insertion order, and it is the order used in purchase
//!   log summaries

use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::error::{ShopError, ShopResult};
use crate::money::Money;
use crate::types::{Item, PurchaseLog};
use crate::TIMESTAMP_FORMAT;

// =============================================================================
// Basket Line
// =============================================================================

/// One line of a basket: an item and how many of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasketLine {
    /// The catalog item.
    pub item: Item,

    /// Quantity in the basket, never negative.
    pub quantity: i64,
}

impl BasketLine {
    /// Calculates the line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.item.price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Basket
// =============================================================================

/// An in-progress cart, owned by one customer at a time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Basket {
    lines: Vec<BasketLine>,
}

impl Basket {
    /// Creates an empty basket.
    pub fn new() -> Self {
        Basket::default()
    }

    /// Adds an amount of an item, accumulating into an existing line.
    ///
    /// An amount of zero is allowed and still creates the line.
    ///
    /// ## Errors
    /// [`ShopError::NegativeAmount`] if `amount < 0`.
    ///
    /// ## Example
    /// ```rust
    /// use alembic_shop::{Basket, Item, Money};
    ///
    /// let tea = Item::new("Tea", Money::from_cents(250))?;
    /// let mut basket = Basket::new();
    /// basket.add_item(&tea, 2)?;
    /// basket.add_item(&tea, 3)?;
    ///
    /// assert_eq!(basket.total_quantity(), 5);
    /// assert_eq!(basket.cost(), Money::from_cents(1250));
    /// # Ok::<(), alembic_shop::ShopError>(())
    /// ```
    pub fn add_item(&mut self, item: &Item, amount: i64) -> ShopResult<()> {
        if amount < 0 {
            return Err(ShopError::NegativeAmount { amount });
        }

        if let Some(line) = self.lines.iter_mut().find(|line| line.item == *item) {
            line.quantity += amount;
        } else {
            self.lines.push(BasketLine {
                item: item.clone(),
                quantity: amount,
            });
        }
        Ok(())
    }

    /// Removes an amount of an item.
    ///
    /// The line is kept even when its quantity reaches zero; only
    /// [`Basket::clear`] drops lines.
    ///
    /// ## Errors
    /// - [`ShopError::NegativeAmount`] if `amount < 0`
    /// - [`ShopError::ItemNotInBasket`] if no line tracks the item
    /// - [`ShopError::RemoveExceedsQuantity`] if `amount` exceeds the
    ///   line's quantity (which is left unchanged)
    pub fn remove_item(&mut self, item: &Item, amount: i64) -> ShopResult<()> {
        if amount < 0 {
            return Err(ShopError::NegativeAmount { amount });
        }

        let line = self
            .lines
            .iter_mut()
            .find(|line| line.item == *item)
            .ok_or_else(|| ShopError::ItemNotInBasket {
                name: item.name().to_string(),
            })?;

        if line.quantity < amount {
            return Err(ShopError::RemoveExceedsQuantity {
                name: item.name().to_string(),
                available: line.quantity,
                requested: amount,
            });
        }

        line.quantity -= amount;
        Ok(())
    }

    /// Returns true if no lines are tracked.
    ///
    /// A zeroed line still counts as tracked.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns true if a line tracks the item.
    pub fn contains(&self, item: &Item) -> bool {
        self.lines.iter().any(|line| line.item == *item)
    }

    /// Returns the number of distinct lines.
    pub fn item_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Calculates the total cost of the basket.
    pub fn cost(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(), |acc, line| acc + line.line_total())
    }

    /// Drops all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Returns the lines in insertion order.
    pub fn lines(&self) -> &[BasketLine] {
        &self.lines
    }

    /// Builds a purchase log entry for the current contents.
    ///
    /// The timestamp comes from the given clock, formatted
    /// `DD/MM/YYYY HH:MM`; the summary joins `"<name> x <quantity>"` per
    /// line, in line order.
    pub fn purchase_log_entry(&self, clock: &dyn Clock) -> PurchaseLog {
        let timestamp = clock.now().format(TIMESTAMP_FORMAT).to_string();
        let items = self
            .lines
            .iter()
            .map(|line| format!("{} x {}", line.item.name(), line.quantity))
            .collect::<Vec<_>>()
            .join(", ");
        PurchaseLog::new(timestamp, items)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{TimeZone, Utc};

    fn item(name: &str, cents: i64) -> Item {
        Item::new(name, Money::from_cents(cents)).unwrap()
    }

    #[test]
    fn test_cost_sums_lines() {
        let mut basket = Basket::new();
        basket.add_item(&item("Herb", 2), 5).unwrap();
        basket.add_item(&item("Elixir", 1000), 2).unwrap();

        assert_eq!(basket.cost(), Money::from_cents(2010));
    }

    #[test]
    fn test_add_accumulates_existing_line() {
        let tea = item("Tea", 250);
        let mut basket = Basket::new();
        basket.add_item(&tea, 2).unwrap();
        basket.add_item(&tea, 3).unwrap();

        assert_eq!(basket.item_count(), 1);
        assert_eq!(basket.total_quantity(), 5);
    }

    #[test]
    fn test_add_negative_amount_rejected() {
        let mut basket = Basket::new();
        let err = basket.add_item(&item("Tea", 250), -1).unwrap_err();
        assert_eq!(err, ShopError::NegativeAmount { amount: -1 });
        assert!(basket.is_empty());
    }

    #[test]
    fn test_zero_amount_still_creates_line() {
        let tea = item("Tea", 250);
        let mut basket = Basket::new();
        basket.add_item(&tea, 0).unwrap();

        assert!(!basket.is_empty());
        assert!(basket.contains(&tea));
        assert_eq!(basket.total_quantity(), 0);
    }

    #[test]
    fn test_remove_more_than_present_leaves_quantity_unchanged() {
        let tea = item("Tea", 250);
        let mut basket = Basket::new();
        basket.add_item(&tea, 2).unwrap();

        let err = basket.remove_item(&tea, 3).unwrap_err();
        assert_eq!(
            err,
            ShopError::RemoveExceedsQuantity {
                name: "Tea".to_string(),
                available: 2,
                requested: 3,
            }
        );
        assert_eq!(basket.total_quantity(), 2);
    }

    #[test]
    fn test_remove_absent_item_rejected() {
        let mut basket = Basket::new();
        let err = basket.remove_item(&item("Tea", 250), 1).unwrap_err();
        assert!(matches!(err, ShopError::ItemNotInBasket { .. }));
    }

    #[test]
    fn test_removed_to_zero_keeps_line() {
        let tea = item("Tea", 250);
        let mut basket = Basket::new();
        basket.add_item(&tea, 2).unwrap();
        basket.remove_item(&tea, 2).unwrap();

        assert!(!basket.is_empty());
        assert!(basket.contains(&tea));
        assert_eq!(basket.cost(), Money::zero());
    }

    #[test]
    fn test_clear_drops_lines() {
        let mut basket = Basket::new();
        basket.add_item(&item("Tea", 250), 2).unwrap();
        basket.clear();
        assert!(basket.is_empty());
    }

    #[test]
    fn test_purchase_log_entry_format() {
        let clock = FixedClock::at(Utc.with_ymd_and_hms(2024, 3, 2, 14, 30, 0).unwrap());

        let mut basket = Basket::new();
        basket.add_item(&item("Tea", 250), 2).unwrap();
        basket.add_item(&item("Honey", 400), 1).unwrap();

        let log = basket.purchase_log_entry(&clock);
        assert_eq!(log.timestamp(), "02/03/2024 14:30");
        assert_eq!(log.items(), "Tea x 2, Honey x 1");
    }
}
