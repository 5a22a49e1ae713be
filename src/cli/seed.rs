//! Seed command: run the example executable fixture
//!
//! judgeseed seed [--base-dir DIR] [--store DIR]

use crate::config::Config;
use crate::fixture::{self, ExecutableFixture};
use crate::ingest::HashingIngestor;
use crate::store::Store;
use crate::util::ui;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub fn run(base_dir: Option<PathBuf>, store_flag: Option<PathBuf>) -> Result<()> {
    let config = Config::load()?;

    let base_dir = match base_dir.or_else(|| config.fixtures_base_dir().map(|p| p.to_path_buf())) {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };
    let store_root = super::resolve_store_root(store_flag, &config);

    ui::info(&format!(
        "Seeding example executables from {}...",
        fixture::examples_dir(&base_dir).display()
    ));

    let mut store = Store::open(&store_root)
        .with_context(|| format!("Failed to open store at {}", store_root.display()))?;

    let refs = ExecutableFixture::new(&base_dir).load(&mut store, &HashingIngestor)?;

    for name in [
        fixture::BOOLFIND_CMP_REFERENCE,
        fixture::BOOLFIND_RUN_REFERENCE,
    ] {
        let exec = refs.get(name).expect("loader registers both references");
        ui::success(&format!(
            "{} -> {} ({}, {} file(s))",
            name,
            exec.execid,
            exec.exec_type,
            exec.immutable.file_count()
        ));
    }
    ui::dim(&format!(
        "{} executable(s) committed to {}",
        refs.len(),
        store.root().display()
    ));

    Ok(())
}
