//! Domain model for judge executables
//!
//! An `Executable` is a named, typed program artifact (comparator, run
//! script, ...) backed by exactly one `ImmutableExecutable`: a
//! content-addressed, unmodifiable bundle of files derived from a zip
//! archive. Manifests serialize everything except file bytes; the raw
//! bytes live in the store's bundle directory.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of executable known to the judge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecType {
    /// Output validator comparing team output against the jury answer
    Compare,
    /// Compile script for a submission language
    Compile,
    /// Debug helper executed on demand
    Debug,
    /// Run script wrapping submission execution (interactive problems)
    Run,
}

impl ExecType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecType::Compare => "compare",
            ExecType::Compile => "compile",
            ExecType::Debug => "debug",
            ExecType::Run => "run",
        }
    }
}

impl fmt::Display for ExecType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One file inside an immutable bundle.
///
/// `bytes` is only populated on freshly ingested bundles; manifests
/// loaded back from disk carry the digest and leave `bytes` empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutableFile {
    /// Path of the file inside the archive
    pub filename: String,
    /// Position within the bundle (archive order)
    pub rank: usize,
    /// Lowercase hex sha256 of the file contents
    pub digest: String,
    /// Whether the executable bit was set in the archive
    pub executable: bool,
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

/// A content-derived, unmodifiable bundle of files.
///
/// The bundle digest is derived from the ordered (filename, digest)
/// pairs, so two archives with identical contents share a digest and
/// the store can deduplicate their payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImmutableExecutable {
    /// Lowercase hex sha256 identifying the bundle
    pub digest: String,
    pub files: Vec<ExecutableFile>,
}

impl ImmutableExecutable {
    /// Number of files in the bundle
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

/// A named, typed executable record.
///
/// Construction requires the backing bundle, so an `Executable`
/// without one cannot exist, let alone reach the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Executable {
    /// Unique identifier (e.g. `boolfind_cmp`)
    pub execid: String,
    /// Human-readable description
    pub description: String,
    #[serde(rename = "type")]
    pub exec_type: ExecType,
    pub immutable: ImmutableExecutable,
}

impl Executable {
    pub fn new(
        execid: impl Into<String>,
        description: impl Into<String>,
        exec_type: ExecType,
        immutable: ImmutableExecutable,
    ) -> Self {
        Self {
            execid: execid.into(),
            description: description.into(),
            exec_type,
            immutable,
        }
    }
}
