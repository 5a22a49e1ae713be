//! Directory structure helpers for judgeseed
//!
//! ~/.judgeseed/
//! ├── store/
//! │   ├── executables/    # manifests
//! │   └── bundles/        # content-addressed payloads
//! └── config.toml         # global config

use std::path::PathBuf;

/// Get the judgeseed home directory (~/.judgeseed)
pub fn judgeseed_dir() -> PathBuf {
    dirs::home_dir()
        .expect("Could not determine home directory")
        .join(".judgeseed")
}

/// Get the default store root (~/.judgeseed/store)
pub fn store_dir() -> PathBuf {
    judgeseed_dir().join("store")
}

/// Get the config file path (~/.judgeseed/config.toml)
pub fn config_file() -> PathBuf {
    judgeseed_dir().join("config.toml")
}
