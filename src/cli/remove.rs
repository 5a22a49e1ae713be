//! Remove command: delete a stored executable
//!
//! judgeseed remove <execid>

use crate::config::Config;
use crate::store::Store;
use crate::util::ui;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub fn run(store_flag: Option<PathBuf>, execid: &str) -> Result<()> {
    let config = Config::load()?;
    let store_root = super::resolve_store_root(store_flag, &config);

    let mut store = Store::open(&store_root)
        .with_context(|| format!("Failed to open store at {}", store_root.display()))?;
    store.remove(execid)?;

    ui::success(&format!("Removed {}", execid));
    Ok(())
}
