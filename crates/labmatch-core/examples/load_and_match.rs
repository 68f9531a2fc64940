//! Load a catalog directory and reconcile names given on the command line.
//!
//! ```sh
//! cargo run --example load_and_match -- ./catalog "Free T4" TSH "vitamin d"
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context};
use labmatch_core::{Catalog, Matcher};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let dir: PathBuf = args
        .next()
        .context("usage: load_and_match <catalog-dir> <name>...")?
        .into();
    let names: Vec<String> = args.collect();
    if names.is_empty() {
        bail!("no extracted names given");
    }

    let catalog = Catalog::load(&dir);
    println!("catalog: {} definitions from {}", catalog.len(), dir.display());

    let matcher = Matcher::new();
    for name in &names {
        match matcher.find_best_match(name, &catalog.tests) {
            Some(result) => println!(
                "{name:>24} -> {} ({:?}, confidence {})",
                result.test.test_name, result.match_type, result.confidence
            ),
            None => println!("{name:>24} -> no match"),
        }
    }

    Ok(())
}
