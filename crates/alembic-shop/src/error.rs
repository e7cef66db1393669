//! # Error Types
//!
//! Domain-specific error types for alembic-shop.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (names, quantities, balances)
//! 3. Errors are enum variants, never String
//! 4. A failed operation leaves every container untouched
//!
//! Soft "not found" lookups ([`crate::Store::customer`],
//! [`crate::Store::stock_of`]) return `Option`/defaults, not errors.

use thiserror::Error;

use crate::customer::CustomerId;
use crate::money::Money;

// =============================================================================
// Shop Error
// =============================================================================

/// Business rule violations in the retail model.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShopError {
    /// Catalog items cannot carry a negative price.
    #[error("item {name} cannot have a negative price: {price}")]
    NegativePrice { name: String, price: Money },

    /// Basket and stock quantities move by non-negative amounts.
    #[error("amount cannot be negative: {amount}")]
    NegativeAmount { amount: i64 },

    /// Customers cannot open an account in debt.
    #[error("opening balance cannot be negative: {balance}")]
    NegativeBalance { balance: Money },

    /// The basket has no line for this item.
    #[error("item not in basket: {name}")]
    ItemNotInBasket { name: String },

    /// Removing more of an item than the basket holds.
    #[error("cannot remove {requested} x {name}: only {available} in basket")]
    RemoveExceedsQuantity {
        name: String,
        available: i64,
        requested: i64,
    },

    /// The (discounted) basket cost exceeds the customer's balance.
    #[error("insufficient funds: balance {balance}, cost {cost}")]
    InsufficientFunds { balance: Money, cost: Money },

    /// The store cannot cover a basket line from stock.
    #[error("insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// No customer registered under this id.
    #[error("customer not found: {id}")]
    CustomerNotFound { id: CustomerId },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ShopError.
pub type ShopResult<T> = Result<T, ShopError>;

// =============================================================================
// Unit Tests
// =============================================================================
