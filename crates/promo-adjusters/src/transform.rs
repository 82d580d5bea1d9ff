use crate::error::TransformError;
use promo_types::{Cart, EvaluationContext, Rule};

/// Result of running a single transform over a rule.
pub type TransformResult = Result<Rule, TransformError>;

/// A trait for pre-apply rule transforms.
/// Transforms are stateless and thread-safe.
///
/// The processor hands each transform the rule by value together with the
/// evaluation context and the cart snapshot, and threads the returned rule to
/// the next transform. A transform that does not recognize the rule must
/// return it unchanged; non-matching rules are the steady state, not an
/// error.
pub trait RuleTransform: Send + Sync {
    /// The name of the transform, used in logs and error context.
    fn name(&self) -> &str;

    /// Rewrites the rule ahead of application.
    fn apply(&self, rule: Rule, ctx: &EvaluationContext, cart: &Cart) -> TransformResult;
}
