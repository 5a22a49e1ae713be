//! List command: show stored executables
//!
//! judgeseed list [--json]

use crate::config::Config;
use crate::store::Store;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub fn run(store_flag: Option<PathBuf>, json: bool) -> Result<()> {
    let config = Config::load()?;
    let store_root = super::resolve_store_root(store_flag, &config);

    let store = Store::open(&store_root)
        .with_context(|| format!("Failed to open store at {}", store_root.display()))?;
    let executables = store.list()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&executables)?);
        return Ok(());
    }

    if executables.is_empty() {
        println!("No executables stored.");
        println!("Run: judgeseed seed");
        return Ok(());
    }

    println!("Stored executables:");
    for exec in &executables {
        println!(
            "  {} ({})  {}",
            exec.execid, exec.exec_type, exec.description
        );
    }

    Ok(())
}
