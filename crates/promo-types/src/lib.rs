//! Promo Types
//!
//! This crate defines the core types and data structures shared across the
//! Promo pricing pipeline (currently `promo-core` and `promo-adjusters`).
//! Keeping the cart snapshot and rule model here lets the transform crate and
//! the processor crate depend on the same types without a dependency cycle.

#![deny(warnings)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
#![deny(clippy::cargo)]
#![deny(missing_docs)]

mod types;
pub use types::{
    ApplyFirstTo, Cart, CartItem, CommonRule, EvaluationContext, Package, PackageRule, Rule,
    RuleId,
};
