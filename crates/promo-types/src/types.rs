use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single line of a cart snapshot.
///
/// The pipeline only ever reads quantities; item identity and pricing stay
/// with the host engine, which has already sorted the cart before handing it
/// over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Number of units of this item in the cart.
    pub quantity: u32,
}

impl CartItem {
    /// Create a cart line with the given unit count.
    #[must_use]
    pub const fn new(quantity: u32) -> Self {
        Self { quantity }
    }
}

/// Read-only snapshot of the cart a rule is about to be applied to.
///
/// Owned by the host engine for the duration of a single pricing evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    /// Cart lines in the order the host engine sorted them.
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Create a cart snapshot from its lines.
    #[must_use]
    pub const fn new(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    /// Total number of units across all lines. An empty cart counts as 0.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }
}

/// A quantity-bounded subgroup of a package rule.
///
/// `quantity` is the lower bound and `quantity_end` the upper bound of the
/// group; equal bounds mean "exactly N items".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Minimum number of items assigned to this group.
    pub quantity: u32,
    /// Maximum number of items assigned to this group.
    pub quantity_end: u32,
}

impl Package {
    /// Create a package covering the `[quantity, quantity_end]` range.
    #[must_use]
    pub const fn new(quantity: u32, quantity_end: u32) -> Self {
        Self { quantity, quantity_end }
    }

    /// Create a single-value package holding exactly `quantity` items.
    #[must_use]
    pub const fn exactly(quantity: u32) -> Self {
        Self { quantity, quantity_end: quantity }
    }
}

/// Which end of the sorted cart the engine hands the first package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplyFirstTo {
    /// The first package receives the cheapest matching items.
    Cheapest,
    /// The first package receives the most expensive matching items.
    MostExpensive,
}

/// Unique identifier for rules, assigned by the host.
pub type RuleId = u64;

/// A pricing rule, tagged by kind.
///
/// Hosts deliver rule definitions as JSON with a `kind` tag; transforms match
/// on the variant instead of inspecting runtime type identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rule {
    /// Splits matched cart items into quantity-bounded packages, each with
    /// its own discount treatment.
    Package(PackageRule),
    /// Ordinary per-item discount rule. The pipeline passes these through.
    Common(CommonRule),
}

impl Rule {
    /// The host-assigned rule identifier.
    #[must_use]
    pub const fn id(&self) -> RuleId {
        match self {
            Self::Package(rule) => rule.id,
            Self::Common(rule) => rule.id,
        }
    }

    /// The merchant-facing rule title.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Package(rule) => &rule.title,
            Self::Common(rule) => &rule.title,
        }
    }
}

/// A package-based pricing rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRule {
    /// Host-assigned identifier.
    pub id: RuleId,
    /// Merchant-facing title.
    pub title: String,
    /// Which end of the sorted cart the first package is filled from.
    pub apply_first_to: ApplyFirstTo,
    /// Subgroups the matched items are divided into, in engine order.
    pub packages: Vec<Package>,
}

/// An ordinary discount rule with no package structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonRule {
    /// Host-assigned identifier.
    pub id: RuleId,
    /// Merchant-facing title.
    pub title: String,
}

/// Per-evaluation correlation data the processor threads through every
/// transform. Transforms are free to ignore it; it mainly keys log lines to
/// a single pricing evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationContext {
    /// Correlation id for this evaluation.
    pub evaluation_id: Uuid,
    /// When the evaluation started.
    pub started_at: DateTime<Utc>,
}

impl EvaluationContext {
    /// Create a fresh context for one pricing evaluation.
    #[must_use]
    pub fn new() -> Self {
        Self { evaluation_id: Uuid::new_v4(), started_at: Utc::now() }
    }
}

impl Default for EvaluationContext {
    fn default() -> Self {
        Self::new()
    }
}
