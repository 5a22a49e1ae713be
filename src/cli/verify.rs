//! Verify command: re-hash stored bundle payloads
//!
//! judgeseed verify [execid]

use crate::config::Config;
use crate::store::Store;
use crate::util::ui;
use anyhow::{bail, Context, Result};
use std::path::PathBuf;

pub fn run(store_flag: Option<PathBuf>, execid: Option<&str>) -> Result<()> {
    let config = Config::load()?;
    let store_root = super::resolve_store_root(store_flag, &config);

    let store = Store::open(&store_root)
        .with_context(|| format!("Failed to open store at {}", store_root.display()))?;

    let targets: Vec<String> = match execid {
        Some(id) => vec![id.to_string()],
        None => store.list()?.into_iter().map(|e| e.execid).collect(),
    };

    if targets.is_empty() {
        println!("Nothing to verify.");
        return Ok(());
    }

    let mut failures = 0;
    for id in &targets {
        match store.verify(id) {
            Ok(()) => ui::success(&format!("{} verified", id)),
            Err(e) => {
                ui::error(&format!("{}: {}", id, e));
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{} executable(s) failed verification", failures);
    }
    Ok(())
}
