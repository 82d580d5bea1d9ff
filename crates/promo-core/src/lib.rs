#![deny(warnings)]
#![allow(missing_docs)]
//! Core functionality for the Promo rule preparation pipeline.
//!
//! This crate wires pre-apply rule transforms into a host pricing engine's
//! evaluation flow. The engine hands each rule and a cart snapshot to the
//! [`RuleProcessor`] immediately before applying the rule, and receives back
//! the (possibly rewritten) rule. Transforms are registered explicitly at
//! process wiring time; registration order is execution order.

use tracing::{debug, instrument};

/// Structured error types for pipeline operations
pub mod error;
/// Rule preparation pipeline and processor statistics
pub mod processor;
/// JSON (de)serialization of rule and cart definitions
pub mod serialization;

pub use error::{PromoError, PromoResult};
pub use processor::{ProcessorStats, RuleProcessor};
pub use serialization::{cart_from_json, rules_from_json, rules_to_json};

// Re-export the extension point and model types for host wiring
pub use promo_adjusters::{BogoRatioAdjuster, RuleTransform, TransformError, TransformRegistry};
pub use promo_types::{
    ApplyFirstTo, Cart, CartItem, CommonRule, EvaluationContext, Package, PackageRule, Rule,
    RuleId,
};

/// Initialize the pipeline components
#[instrument]
pub fn init() -> anyhow::Result<()> {
    debug!("Initializing Promo rule pipeline");
    Ok(())
}
