//! Core types and configuration for docdrift.
//!
//! This crate provides the data model shared by every docdrift crate:
//! - [`types`]: the signature model both extraction sides produce
//! - [`issues`]: issue kinds, severities, and the [`IssueSet`](issues::IssueSet) result
//! - [`config`]: engine configuration and `.docdrift.json` loading
//! - [`error`]: engine and config error types

pub mod config;
pub mod error;
pub mod issues;
pub mod types;
