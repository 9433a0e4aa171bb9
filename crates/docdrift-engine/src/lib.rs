//! Drift-classification engine.
//!
//! Takes code-side and doc-side signatures and produces an ordered
//! [`IssueSet`](docdrift_core::issues::IssueSet):
//! - resolver: exclude/ignore patterns and comparison keys
//! - matcher: exact pairing by key, optional fuzzy fallback
//! - differ: raw discrepancies per pair
//! - classifier: severity, message, suggestion, dedup and ordering
//!
//! [`DriftEngine`] wires the stages together. The engine does no I/O.

pub mod types;
pub mod resolver;
pub mod similarity;
pub mod matcher;
pub mod differ;
pub mod suggestions;
pub mod classifier;
pub mod engine;

pub use engine::DriftEngine;
pub use similarity::{NoSimilarity, Similarity, TokenSimilarity};
