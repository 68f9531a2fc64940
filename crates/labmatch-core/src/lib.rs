//! Labmatch Core Library
//!
//! Reconciles free-text lab-test names extracted from external documents
//! (scanned reports, intake forms) against a reference catalog of test
//! definitions.
//!
//! # Architecture
//!
//! ```text
//! catalog directory (*.csv)
//!          │
//!          ▼
//!   Catalog Loader ──► Catalog (in-memory, read-only after load)
//!                           │
//! extracted name ──► Matcher │ per-candidate tiers:
//!                           ▼   1. exact   (100)
//!                     MatchResult  2. partial (85)
//!                     or no match  3. synonym (75)
//! ```
//!
//! # Core Principle
//!
//! **Loading never fails and matching has no error path.** A broken source
//! file means fewer rows; a name nothing matches means `None`. The caller
//! (dashboard, review queue) always stays usable.
//!
//! # Modules
//!
//! - [`catalog`]: tabular catalog loading into the in-memory collection
//! - [`models`]: domain types ([`TestDefinition`], [`MatchResult`])
//! - [`resolver`]: tiered match engine ([`Matcher`])

pub mod catalog;
pub mod models;
pub mod resolver;

// Re-export commonly used types
pub use catalog::{Catalog, LoadError};
pub use models::{MatchResult, MatchType, TestDefinition};
pub use resolver::{normalize, AbbreviationTable, Matcher};
