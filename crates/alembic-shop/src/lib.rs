//! # alembic-shop: Retail Transaction Model
//!
//! An in-memory simulation of a small shop: priced catalog items, customer
//! accounts with baskets and purchase history, and a store that owns the
//! authoritative stock ledger and orchestrates purchases.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         alembic-shop                                │
//! │                                                                     │
//! │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────┐          │
//! │   │  money   │  │  basket  │  │ customer │  │  store   │          │
//! │   │  Money   │  │  Basket  │  │ Customer │  │  Store   │          │
//! │   │  cents   │  │  lines   │  │ history  │  │  stock   │          │
//! │   └──────────┘  └──────────┘  └──────────┘  └──────────┘          │
//! │                                                                     │
//! │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`clock`] - The clock seam ([`Clock`], [`SystemClock`], [`FixedClock`])
//! - [`types`] - Catalog items and purchase log entries
//! - [`basket`] - A customer's in-progress cart
//! - [`customer`] - Account state, history, purchase
//! - [`store`] - Stock ledger and purchase orchestration
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Integer Money**: All monetary values are in cents (i64) to avoid
//!    float errors
//! 2. **Explicit Errors**: All errors are typed, never strings or panics
//! 3. **Check before mutate**: A failed operation leaves every container
//!    untouched
//! 4. **Clock as a seam**: Timestamps enter through [`Clock`], never from
//!    globals
//!
//! ## Example Usage
//!
//! ```rust
//! use alembic_shop::{Item, Money, Store};
//!
//! let mut store = Store::new();
//! let tea = Item::new("Tea", Money::from_cents(250))?;
//! store.restock(&tea, 10)?;
//!
//! let customer_id = store.add_customer(Money::from_cents(2000), false)?;
//! store
//!     .customer_mut(customer_id)
//!     .unwrap()
//!     .basket_mut()
//!     .add_item(&tea, 2)?;
//!
//! let log = store.make_purchase(customer_id)?;
//! assert_eq!(log.items(), "Tea x 2");
//! assert_eq!(store.stock_of(&tea), 8);
//! # Ok::<(), alembic_shop::ShopError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod basket;
pub mod clock;
pub mod customer;
pub mod error;
pub mod money;
pub mod store;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use alembic_shop::Money` instead of
// `use alembic_shop::money::Money`

pub use basket::{Basket, BasketLine};
pub use clock::{Clock, FixedClock, SystemClock};
pub use customer::{Customer, CustomerId};
pub use error::{ShopError, ShopResult};
pub use money::Money;
pub use store::Store;
pub use types::{Item, PurchaseLog};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Gold customer discount in basis points (1000 = 10%).
pub const GOLD_DISCOUNT_BPS: u32 = 1000;

/// Timestamp pattern of purchase log entries: `DD/MM/YYYY HH:MM`.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M";
