//! BOGO Ratio Adjuster
//!
//! By default the engine divides the sorted cart into fixed-size bundles, so
//! a "Buy One Get One" rule does not necessarily give away the cheapest
//! items. This transform rewrites the rule so the whole cart is treated as a
//! single pool: with a configured free:paid ratio of f:p and a cart of n
//! units, floor(n * f / (f + p)) units are marked free and ceil(n * p /
//! (f + p)) paid. The engine has already sorted the items, so the discount
//! lands on the cheap end.
//!
//! E.g. a 1-1 ratio over a 9-unit cart frees 4 units; a buy-2-get-1 ratio
//! over the same cart frees 3.
//!
//! Applies only to package rules titled exactly "BOGO"; everything else
//! passes through untouched. A matching rule without both a free and a paid
//! package is rejected as invalid.

use crate::error::TransformError;
use crate::transform::{RuleTransform, TransformResult};
use promo_types::{ApplyFirstTo, Cart, EvaluationContext, Rule};
use tracing::{debug, info};

/// Title a package rule must carry, exactly and case-sensitively, to opt in.
pub const BOGO_TITLE: &str = "BOGO";

#[derive(Debug, Default)]
pub struct BogoRatioAdjuster;

impl RuleTransform for BogoRatioAdjuster {
    fn name(&self) -> &str {
        "bogo_ratio"
    }

    fn apply(&self, rule: Rule, ctx: &EvaluationContext, cart: &Cart) -> TransformResult {
        let mut rule = match rule {
            Rule::Package(rule) if rule.title == BOGO_TITLE => rule,
            other => {
                debug!(rule_id = other.id(), "not a BOGO package rule, passing through");
                return Ok(other);
            }
        };

        if rule.packages.len() < 2 {
            return Err(TransformError::InvalidRule {
                message: format!(
                    "rule {} needs a free and a paid package, found {}",
                    rule.id,
                    rule.packages.len()
                ),
            });
        }

        let (free_idx, paid_idx) = match rule.apply_first_to {
            ApplyFirstTo::Cheapest => (0, 1),
            ApplyFirstTo::MostExpensive => (1, 0),
        };

        let free_share = u64::from(rule.packages[free_idx].quantity);
        let paid_share = u64::from(rule.packages[paid_idx].quantity);
        let denominator = free_share + paid_share;
        if denominator == 0 {
            return Err(TransformError::Configuration {
                message: format!("rule {} has a 0:0 free/paid ratio", rule.id),
            });
        }

        // floor(n * f / d) and ceil(n * p / d), in exact integer arithmetic.
        let cart_size = cart.total_quantity();
        let free_qty = cart_size * free_share / denominator;
        let paid_qty = (cart_size * paid_share).div_ceil(denominator);

        info!(
            evaluation_id = %ctx.evaluation_id,
            rule_id = rule.id,
            cart_size,
            free_qty,
            paid_qty,
            "redistributed BOGO packages over the whole cart"
        );

        let free = &mut rule.packages[free_idx];
        free.quantity = saturate(free_qty);
        free.quantity_end = saturate(free_qty);

        // Only the upper bound of the paid package is recomputed; its
        // configured lower bound survives. TODO: confirm with merchandising
        // whether the lower bound should track the computed paid quantity
        // too, like the free package does.
        rule.packages[paid_idx].quantity_end = saturate(paid_qty);

        Ok(Rule::Package(rule))
    }
}

fn saturate(quantity: u64) -> u32 {
    u32::try_from(quantity).unwrap_or(u32::MAX)
}
