//! # Store Module
//!
//! The store owns the authoritative stock ledger, the registered
//! customers, and the per-customer purchase history. Customer baskets are
//! transient working state; the store only touches them through the
//! purchase orchestration.
//!
//! ## Purchase Orchestration
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Store::make_purchase(id)                         │
//! │                                                                     │
//! │   1. snapshot the basket lines                                      │
//! │   2. check EVERY line against stock  ── insufficient? fail,        │
//! │                                          nothing has changed       │
//! │   3. run the customer purchase       ── no funds? fail, stock      │
//! │                                          still untouched           │
//! │   4. decrement stock per line                                       │
//! │   5. record the log entry in the store's purchase history          │
//! │                                                                     │
//! │   The check-before-mutate order is the contract: no partial        │
//! │   mutation ever escapes a failed purchase.                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::customer::{Customer, CustomerId};
use crate::error::{ShopError, ShopResult};
use crate::money::Money;
use crate::types::{Item, PurchaseLog};

// =============================================================================
// Stock Line
// =============================================================================

/// One line of the stock ledger.
#[derive(Debug, Clone)]
struct StockLine {
    item: Item,
    quantity: i64,
}

// =============================================================================
// Store
// =============================================================================

/// A store: stock ledger, customer registry, purchase history.
#[derive(Debug)]
pub struct Store {
    /// Stock ledger in catalog registration order.
    stock: Vec<StockLine>,

    /// Registered customers, in registration order.
    customers: Vec<Customer>,

    /// Purchase log entries per customer, in purchase order.
    purchases: HashMap<CustomerId, Vec<PurchaseLog>>,

    /// Next id handed out by [`Store::add_customer`].
    next_customer_id: CustomerId,

    /// Timestamp source for purchase logs.
    clock: Arc<dyn Clock>,
}

impl Store {
    /// Creates an empty store on the system clock.
    pub fn new() -> Self {
        Store::with_clock(Arc::new(SystemClock))
    }

    /// Creates an empty store on the given clock.
    ///
    /// ## Example
    /// ```rust
    /// use std::sync::Arc;
    /// use alembic_shop::{FixedClock, Store};
    /// use chrono::{TimeZone, Utc};
    ///
    /// let clock = Arc::new(FixedClock::at(
    ///     Utc.with_ymd_and_hms(2024, 3, 2, 14, 30, 0).unwrap(),
    /// ));
    /// let store = Store::with_clock(clock);
    /// assert!(store.customers().is_empty());
    /// ```
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Store {
            stock: Vec::new(),
            customers: Vec::new(),
            purchases: HashMap::new(),
            next_customer_id: 0,
            clock,
        }
    }

    // =========================================================================
    // Customer Registry
    // =========================================================================

    /// Registers a new customer and returns their id.
    ///
    /// Ids are assigned sequentially starting at 0.
    ///
    /// ## Errors
    /// [`ShopError::NegativeBalance`] if the opening balance is below
    /// zero; the registry is unchanged and no id is consumed.
    pub fn add_customer(&mut self, balance: Money, gold: bool) -> ShopResult<CustomerId> {
        let customer = Customer::new(self.next_customer_id, balance, gold)?;
        let id = customer.id();
        self.customers.push(customer);
        self.next_customer_id += 1;

        debug!(customer = id, balance = %balance, gold, "customer registered");
        Ok(id)
    }

    /// Returns the registered customers in registration order.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Looks up a customer by id.
    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id() == id)
    }

    /// Looks up a customer by id, mutably (to fill their basket).
    pub fn customer_mut(&mut self, id: CustomerId) -> Option<&mut Customer> {
        self.customers.iter_mut().find(|c| c.id() == id)
    }

    // =========================================================================
    // Stock Ledger
    // =========================================================================

    /// Adds quantity of an item to the stock ledger.
    ///
    /// ## Errors
    /// [`ShopError::NegativeAmount`] if `quantity < 0`.
    pub fn restock(&mut self, item: &Item, quantity: i64) -> ShopResult<()> {
        if quantity < 0 {
            return Err(ShopError::NegativeAmount { amount: quantity });
        }

        if let Some(line) = self.stock.iter_mut().find(|line| line.item == *item) {
            line.quantity += quantity;
        } else {
            self.stock.push(StockLine {
                item: item.clone(),
                quantity,
            });
        }

        debug!(item = %item.name(), quantity, "stock added");
        Ok(())
    }

    /// Returns the stock quantity of an item (0 for unknown items).
    pub fn stock_of(&self, item: &Item) -> i64 {
        self.stock
            .iter()
            .find(|line| line.item == *item)
            .map_or(0, |line| line.quantity)
    }

    /// Returns true if at least `count` of the item is in stock.
    pub fn in_stock(&self, item: &Item, count: i64) -> bool {
        self.stock_of(item) >= count
    }

    // =========================================================================
    // Purchase Orchestration
    // =========================================================================

    /// Has a customer purchase their basket contents.
    ///
    /// Every distinct basket line is validated against current stock
    /// before anything mutates; only then does the customer purchase run
    /// (a funds failure still leaves stock untouched). On success the
    /// stock is decremented per line and the log entry is appended to the
    /// store's purchase history for that customer.
    ///
    /// ## Errors
    /// - [`ShopError::CustomerNotFound`] for an unregistered id
    /// - [`ShopError::InsufficientStock`] if any line exceeds stock
    /// - [`ShopError::InsufficientFunds`] from the customer purchase
    pub fn make_purchase(&mut self, id: CustomerId) -> ShopResult<PurchaseLog> {
        let idx = self
            .customers
            .iter()
            .position(|c| c.id() == id)
            .ok_or(ShopError::CustomerNotFound { id })?;

        // Snapshot the lines: the stock check and the later decrement must
        // see the same quantities.
        let requested: Vec<(Item, i64)> = self.customers[idx]
            .basket()
            .lines()
            .iter()
            .map(|line| (line.item.clone(), line.quantity))
            .collect();

        for (item, quantity) in &requested {
            let available = self.stock_of(item);
            if available < *quantity {
                return Err(ShopError::InsufficientStock {
                    name: item.name().to_string(),
                    available,
                    requested: *quantity,
                });
            }
        }

        let clock = Arc::clone(&self.clock);
        let log = self.customers[idx].make_purchase(clock.as_ref())?;

        for (item, quantity) in &requested {
            if let Some(line) = self.stock.iter_mut().find(|line| line.item == *item) {
                line.quantity -= quantity;
            }
        }

        self.purchases.entry(id).or_default().push(log.clone());

        debug!(customer = id, items = %log.items(), "store purchase recorded");
        Ok(log)
    }

    /// Returns the purchase log entries recorded for a customer, in
    /// purchase order. Empty for unknown or quiet customers.
    pub fn purchase_history(&self, id: CustomerId) -> &[PurchaseLog] {
        self.purchases.get(&id).map_or(&[], Vec::as_slice)
    }
}

impl Default for Store {
    fn default() -> Self {
        Store::new()
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

    fn test_store() -> (Store, Arc<FixedClock>) {
        let clock = Arc::new(FixedClock::at(
            Utc.with_ymd_and_hms(2024, 3, 2, 14, 30, 0).unwrap(),
        ));
        (Store::with_clock(clock.clone()), clock)
    }

    #[test]
    fn test_customer_ids_are_sequential_from_zero() {
        let (mut store, _) = test_store();
        let first = store.add_customer(Money::from_cents(1000), false).unwrap();
        let second = store.add_customer(Money::from_cents(2000), true).unwrap();

        assert_eq!((first, second), (0, 1));
        assert_eq!(store.customers().len(), 2);
        assert!(store.customer(1).unwrap().is_gold());
    }

    #[test]
    fn test_add_customer_rejects_negative_balance() {
        let (mut store, _) = test_store();
        let err = store.add_customer(Money::from_cents(-1), false).unwrap_err();
        assert!(matches!(err, ShopError::NegativeBalance { .. }));

        // No id consumed by the failed registration
        assert_eq!(store.add_customer(Money::zero(), false).unwrap(), 0);
    }

    #[test]
    fn test_stock_bookkeeping() {
        let (mut store, _) = test_store();
        let tea = item("Tea", 250);

        assert_eq!(store.stock_of(&tea), 0);
        assert!(store.in_stock(&tea, 0));
        assert!(!store.in_stock(&tea, 1));

        store.restock(&tea, 5).unwrap();
        store.restock(&tea, 3).unwrap();
        assert_eq!(store.stock_of(&tea), 8);
        assert!(store.in_stock(&tea, 8));

        let err = store.restock(&tea, -1).unwrap_err();
        assert_eq!(err, ShopError::NegativeAmount { amount: -1 });
    }

    #[test]
    fn test_purchase_happy_path() {
        let (mut store, _) = test_store();
        let tea = item("Tea", 250);
        store.restock(&tea, 10).unwrap();

        let id = store.add_customer(Money::from_cents(2000), false).unwrap();
        store
            .customer_mut(id)
            .unwrap()
            .basket_mut()
            .add_item(&tea, 2)
            .unwrap();

        let log = store.make_purchase(id).unwrap();
        assert_eq!(log.items(), "Tea x 2");
        assert_eq!(log.timestamp(), "02/03/2024 14:30");

        assert_eq!(store.stock_of(&tea), 8);
        assert_eq!(store.purchase_history(id), [log]);

        let customer = store.customer(id).unwrap();
        assert_eq!(customer.balance(), Money::from_cents(1500));
        assert!(customer.basket().is_empty());
    }

    #[test]
    fn test_insufficient_stock_fails_before_any_mutation() {
        let (mut store, _) = test_store();
        let tea = item("Tea", 250);
        store.restock(&tea, 1).unwrap();

        let id = store.add_customer(Money::from_cents(2000), false).unwrap();
        store
            .customer_mut(id)
            .unwrap()
            .basket_mut()
            .add_item(&tea, 2)
            .unwrap();

        let err = store.make_purchase(id).unwrap_err();
        assert_eq!(
            err,
            ShopError::InsufficientStock {
                name: "Tea".to_string(),
                available: 1,
                requested: 2,
            }
        );

        // Neither stock nor customer money/history changed
        assert_eq!(store.stock_of(&tea), 1);
        let customer = store.customer(id).unwrap();
        assert_eq!(customer.balance(), Money::from_cents(2000));
        assert!(customer.history().is_empty());
        assert!(store.purchase_history(id).is_empty());
    }

    #[test]
    fn test_insufficient_funds_leaves_stock_untouched() {
        let (mut store, _) = test_store();
        let elixir = item("Elixir", 100_000);
        store.restock(&elixir, 5).unwrap();

        let id = store.add_customer(Money::from_cents(100), false).unwrap();
        store
            .customer_mut(id)
            .unwrap()
            .basket_mut()
            .add_item(&elixir, 1)
            .unwrap();

        let err = store.make_purchase(id).unwrap_err();
        assert!(matches!(err, ShopError::InsufficientFunds { .. }));

        assert_eq!(store.stock_of(&elixir), 5);
        assert!(store.purchase_history(id).is_empty());
    }

    #[test]
    fn test_unknown_customer_rejected() {
        let (mut store, _) = test_store();
        let err = store.make_purchase(42).unwrap_err();
        assert_eq!(err, ShopError::CustomerNotFound { id: 42 });
    }

    #[test]
    fn test_gold_discount_applies_through_store() {
        let (mut store, _) = test_store();
        let elixir = item("Elixir", 1000);
        store.restock(&elixir, 2).unwrap();

        let id = store.add_customer(Money::from_cents(20_000), true).unwrap();
        store
            .customer_mut(id)
            .unwrap()
            .basket_mut()
            .add_item(&elixir, 2)
            .unwrap();

        store.make_purchase(id).unwrap();

        // $20.00 basket, gold pays $18.00
        assert_eq!(
            store.customer(id).unwrap().balance(),
            Money::from_cents(18_200)
        );
        assert_eq!(store.stock_of(&elixir), 0);
    }

    #[test]
    fn test_purchase_history_accumulates_in_order() {
        let (mut store, clock) = test_store();
        let tea = item("Tea", 250);
        store.restock(&tea, 10).unwrap();

        let id = store.add_customer(Money::from_cents(5000), false).unwrap();

        store
            .customer_mut(id)
            .unwrap()
            .basket_mut()
            .add_item(&tea, 1)
            .unwrap();
        store.make_purchase(id).unwrap();

        clock.set(Utc.with_ymd_and_hms(2024, 3, 5, 9, 0, 0).unwrap());
        store
            .customer_mut(id)
            .unwrap()
            .basket_mut()
            .add_item(&tea, 2)
            .unwrap();
        store.make_purchase(id).unwrap();

        let history = store.purchase_history(id);
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].timestamp(), "02/03/2024 14:30");
        assert_eq!(history[1].timestamp(), "05/03/2024 09:00");
    }
}
