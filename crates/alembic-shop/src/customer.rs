//! # Customer Module
//!
//! Account state for one registered customer: balance, gold status, the
//! owned basket and the purchase history.
//!
//! ## Purchase Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                   Customer::make_purchase                           │
//! │                                                                     │
//! │   basket cost ──► gold? apply 10% discount ──► affordable?         │
//! │                                                     │               │
//! │                no ──► InsufficientFunds (nothing changes)          │
//! │                                                     │ yes           │
//! │                                                     ▼               │
//! │   deduct balance ──► log entry ──► history ──► clear basket        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::basket::Basket;
use crate::clock::Clock;
use crate::error::{ShopError, ShopResult};
use crate::money::Money;
use crate::types::PurchaseLog;
use crate::GOLD_DISCOUNT_BPS;

/// Identifier of a registered customer, assigned sequentially from 0 by
/// the store.
pub type CustomerId = u64;

// =============================================================================
// Customer
// =============================================================================

/// A customer account.
///
/// The basket is working state owned by the customer; it is cleared, not
/// destroyed, after each purchase. History entries are append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    balance: Money,
    gold: bool,
    basket: Basket,
    history: Vec<PurchaseLog>,
}

impl Customer {
    /// Creates a customer account.
    ///
    /// ## Errors
    /// [`ShopError::NegativeBalance`] if the opening balance is below
    /// zero.
    pub fn new(id: CustomerId, balance: Money, gold: bool) -> ShopResult<Self> {
        if balance.is_negative() {
            return Err(ShopError::NegativeBalance { balance });
        }
        Ok(Customer {
            id,
            balance,
            gold,
            basket: Basket::new(),
            history: Vec::new(),
        })
    }

    /// Returns the customer id.
    #[inline]
    pub fn id(&self) -> CustomerId {
        self.id
    }

    /// Returns the current balance.
    #[inline]
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Returns true for gold customers (entitled to a 10% discount).
    #[inline]
    pub fn is_gold(&self) -> bool {
        self.gold
    }

    /// Returns the customer's basket.
    pub fn basket(&self) -> &Basket {
        &self.basket
    }

    /// Returns the customer's basket for filling and emptying.
    pub fn basket_mut(&mut self) -> &mut Basket {
        &mut self.basket
    }

    /// Returns the purchase history, most recent first.
    ///
    /// Entries are ordered by parsed timestamp descending; entries sharing
    /// a timestamp keep their insertion order. The history itself is not
    /// touched, so repeated calls return the same sequence.
    pub fn history(&self) -> Vec<&PurchaseLog> {
        let mut entries: Vec<&PurchaseLog> = self.history.iter().collect();
        entries.sort_by(|a, b| b.sort_key().cmp(&a.sort_key()));
        entries
    }

    /// Purchases the current basket contents.
    ///
    /// Computes the basket cost, applies the gold discount where due, and
    /// checks the balance. On success the cost is deducted, a log entry is
    /// appended to the history and the basket is cleared.
    ///
    /// ## Errors
    /// [`ShopError::InsufficientFunds`] if the (discounted) cost exceeds
    /// the balance; the balance, history and basket are left untouched.
    pub fn make_purchase(&mut self, clock: &dyn Clock) -> ShopResult<PurchaseLog> {
        let mut cost = self.basket.cost();
        if self.gold {
            cost = cost.apply_percentage_discount(GOLD_DISCOUNT_BPS);
        }

        if self.balance < cost {
            return Err(ShopError::InsufficientFunds {
                balance: self.balance,
                cost,
            });
        }

        self.balance -= cost;

        let log = self.basket.purchase_log_entry(clock);
        self.history.push(log.clone());
        self.basket.clear();

        debug!(
            customer = self.id,
            cost = %cost,
            balance = %self.balance,
            "purchase completed"
        );
        Ok(log)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
