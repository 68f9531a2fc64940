//! In-memory reference catalog and its tabular loader.
//!
//! The catalog is built once (at startup or on demand) and is read-only
//! afterwards; it is rebuilt only by running the load again.

mod loader;

pub use loader::*;

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::models::TestDefinition;

/// Loader errors.
///
/// These never escape [`Catalog::load`]: load-time data problems degrade to
/// "fewer rows loaded" so the surrounding application stays usable. The type
/// is public because the fallible helpers ([`list_catalog_files`],
/// [`load_file`]) are usable on their own.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read catalog directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read catalog file {path}: {source}")]
    FileRead { path: PathBuf, source: csv::Error },
}

pub type LoadResult<T> = Result<T, LoadError>;

/// The full in-memory collection of test definitions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    /// Loaded definitions, in file-then-row order. Duplicates across files
    /// are kept; both stay matchable.
    pub tests: Vec<TestDefinition>,
}

impl Catalog {
    /// Build a catalog from every `.csv` file in `dir`.
    ///
    /// Never fails: an unreadable directory yields an empty catalog, and an
    /// unreadable file is skipped while the remaining files still load.
    pub fn load(dir: &Path) -> Self {
        let files = match list_catalog_files(dir) {
            Ok(files) => files,
            Err(e) => {
                warn!(error = %e, "catalog directory unreadable, starting with empty catalog");
                return Self::default();
            }
        };

        let mut tests = Vec::new();
        for path in files {
            match load_file(&path) {
                Ok(rows) => {
                    info!(file = %path.display(), tests = rows.len(), "loaded catalog file");
                    tests.extend(rows);
                }
                Err(e) => {
                    warn!(error = %e, "skipping unreadable catalog file");
                }
            }
        }

        info!(total = tests.len(), "catalog load complete");
        Self { tests }
    }

    /// Build a catalog directly from definitions (mainly for tests).
    pub fn from_tests(tests: Vec<TestDefinition>) -> Self {
        Self { tests }
    }

    /// Number of loaded definitions.
    pub fn len(&self) -> usize {
        self.tests.len()
    }

    /// Whether the catalog holds no definitions.
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }
}
