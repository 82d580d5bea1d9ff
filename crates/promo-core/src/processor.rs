//! Rule preparation pipeline
//!
//! The processor owns an ordered list of pre-apply transforms and threads
//! each rule through them immediately before the host engine applies it to
//! the cart. A fresh processor is created per pricing evaluation; it holds no
//! state shared across evaluations, so hosts may evaluate carts on multiple
//! threads with independent processors.

use crate::error::{PromoError, PromoResult};
use promo_adjusters::{RuleTransform, TransformRegistry};
use promo_types::{Cart, EvaluationContext, Rule};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Counters for prepared rules and executed transforms
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ProcessorStats {
    pub rules_prepared: usize,
    pub transforms_run: usize,
}

/// Runs registered transforms over rules ahead of application
pub struct RuleProcessor {
    registry: TransformRegistry,
    context: EvaluationContext,
    stats: ProcessorStats,
}

impl Default for RuleProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleProcessor {
    /// Create a processor with no transforms registered
    #[instrument]
    pub fn new() -> Self {
        debug!("Creating rule processor");

        Self {
            registry: TransformRegistry::new(),
            context: EvaluationContext::new(),
            stats: ProcessorStats::default(),
        }
    }

    /// Create a processor from an explicit transform list, in execution order
    pub fn with_transforms(transforms: Vec<Box<dyn RuleTransform>>) -> Self {
        let mut processor = Self::new();
        for transform in transforms {
            processor.register_transform(transform);
        }
        processor
    }

    /// Append a transform; it runs after everything already registered
    pub fn register_transform(&mut self, transform: Box<dyn RuleTransform>) {
        info!(transform = transform.name(), "Registering pre-apply transform");
        self.registry.register(transform);
    }

    /// Run every registered transform over the rule, in registration order.
    ///
    /// The returned rule is what the host engine must apply to the cart. A
    /// failing transform aborts preparation of this rule; the error carries
    /// the transform name and rule id.
    #[instrument(skip(self, rule, cart), fields(evaluation_id = %self.context.evaluation_id))]
    pub fn prepare_rule(&mut self, rule: Rule, cart: &Cart) -> PromoResult<Rule> {
        let rule_id = rule.id();
        debug!(rule_id, cart_size = cart.total_quantity(), "Preparing rule");

        let mut current = rule;
        let mut transforms_run = 0;
        for transform in self.registry.iter() {
            current = transform.apply(current, &self.context, cart).map_err(|err| {
                PromoError::transform(err.to_string(), transform.name(), rule_id)
            })?;
            transforms_run += 1;
        }

        self.stats.transforms_run += transforms_run;
        self.stats.rules_prepared += 1;
        Ok(current)
    }

    /// Prepare a batch of rules against the same cart snapshot
    #[instrument(skip(self, rules, cart))]
    pub fn prepare_rules(&mut self, rules: Vec<Rule>, cart: &Cart) -> PromoResult<Vec<Rule>> {
        info!(rule_count = rules.len(), "Preparing rules");

        rules.into_iter().map(|rule| self.prepare_rule(rule, cart)).collect()
    }

    /// The evaluation this processor is scoped to
    pub fn context(&self) -> &EvaluationContext {
        &self.context
    }

    /// Counters accumulated so far
    pub fn stats(&self) -> ProcessorStats {
        self.stats
    }

    /// Number of registered transforms
    pub fn transform_count(&self) -> usize {
        self.registry.len()
    }
}
