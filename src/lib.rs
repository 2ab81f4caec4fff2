//! Nested Report Studio
//!
//! Hierarchical build-quality report model: a tree of items, each
//! carrying a keyed numeric result map, with aggregation, stable-key
//! lookup, percentage distributions, and trend-over-builds series
//! reconstruction.
//!
//! The crate is the core behind the `nested-report` CLI tool; host
//! integrations (CI history iteration, HTML rendering) stay outside
//! and consume the serializable models this crate produces.

pub mod aggregator;
pub mod charts;
pub mod color;
pub mod commands;
pub mod model;
pub mod output;
pub mod trend;
pub mod utils;
