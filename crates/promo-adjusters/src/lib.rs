#![deny(warnings)]
//! The transform ecosystem for the Promo pricing pipeline.
//!
//! This crate provides the `RuleTransform` trait and the `TransformRegistry`
//! for hooking custom rule rewrites into the processor immediately before a
//! rule is applied to a cart, plus the built-in transforms shipped with the
//! pipeline.

pub mod built_in;
pub mod error;
pub mod registry;
pub mod transform;

// Re-export transform implementations
pub use built_in::bogo_ratio::BogoRatioAdjuster;
pub use error::TransformError;
pub use registry::TransformRegistry;
pub use transform::{RuleTransform, TransformResult};
