//! Built-in transforms shipped with the pipeline.

pub mod bogo_ratio;
