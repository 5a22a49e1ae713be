//! Config command: view or set persistent defaults
//!
//! judgeseed config [--store-dir DIR] [--base-dir DIR]

use crate::config::Config;
use crate::paths;
use crate::util::ui;
use anyhow::Result;
use std::path::PathBuf;

pub fn run(store_dir: Option<PathBuf>, base_dir: Option<PathBuf>) -> Result<()> {
    let mut config = Config::load()?;

    // No flags: print the effective configuration
    if store_dir.is_none() && base_dir.is_none() {
        println!("Config file: {}", paths::config_file().display());
        match config.store_dir() {
            Some(dir) => println!("  store dir:         {}", dir.display()),
            None => println!(
                "  store dir:         {} (default)",
                paths::store_dir().display()
            ),
        }
        match config.fixtures_base_dir() {
            Some(dir) => println!("  fixtures base dir: {}", dir.display()),
            None => println!("  fixtures base dir: current directory (default)"),
        }
        return Ok(());
    }

    if let Some(dir) = store_dir {
        config.store.dir = Some(dir);
    }
    if let Some(dir) = base_dir {
        config.fixtures.base_dir = Some(dir);
    }
    config.save()?;

    ui::success("Configuration saved");
    Ok(())
}
