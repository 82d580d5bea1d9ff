//! JSON (de)serialization for rule and cart definitions
//!
//! Hosts deliver rule definitions and cart snapshots as JSON; the `kind` tag
//! on each rule selects the variant.

use crate::error::PromoResult;
use promo_types::{Cart, Rule};
use tracing::debug;

/// Parse a JSON array of rule definitions.
pub fn rules_from_json(json: &str) -> PromoResult<Vec<Rule>> {
    let rules: Vec<Rule> = serde_json::from_str(json)?;
    debug!(rule_count = rules.len(), "Deserialized rule definitions");
    Ok(rules)
}

/// Serialize rules back to JSON, e.g. for audit logs.
pub fn rules_to_json(rules: &[Rule]) -> PromoResult<String> {
    Ok(serde_json::to_string(rules)?)
}

/// Parse a cart snapshot.
pub fn cart_from_json(json: &str) -> PromoResult<Cart> {
    Ok(serde_json::from_str(json)?)
}
