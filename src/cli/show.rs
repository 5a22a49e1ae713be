//! Show command: details for one stored executable
//!
//! judgeseed show <execid> [--json]

use crate::config::Config;
use crate::store::Store;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub fn run(store_flag: Option<PathBuf>, execid: &str, json: bool) -> Result<()> {
    let config = Config::load()?;
    let store_root = super::resolve_store_root(store_flag, &config);

    let store = Store::open(&store_root)
        .with_context(|| format!("Failed to open store at {}", store_root.display()))?;
    let exec = store.get(execid)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&exec)?);
        return Ok(());
    }

    println!("{}", exec.execid);
    println!("  description: {}", exec.description);
    println!("  type:        {}", exec.exec_type);
    println!("  digest:      {}", exec.immutable.digest);
    println!("  files:");
    for file in &exec.immutable.files {
        let marker = if file.executable { "*" } else { " " };
        println!(
            "    {:>3} {} {}  {}",
            file.rank,
            marker,
            &file.digest[..12],
            file.filename
        );
    }

    Ok(())
}
