//! Archive ingestion: turning validated archive contents into an
//! immutable executable bundle
//!
//! The `Ingestor` trait is the seam between the fixture loader and the
//! bundle construction rules, so tests can substitute a fake without
//! real zip files.

use crate::archive::ArchiveContents;
use crate::executable::{ExecutableFile, ImmutableExecutable};
use sha2::{Digest, Sha256};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("archive contains no files")]
    EmptyArchive,

    #[error("archive has no entrypoint: expected a top-level `build` or `run` script")]
    MissingEntrypoint,
}

/// Turns archive contents into an immutable executable bundle.
pub trait Ingestor {
    fn create_immutable_executable(
        &self,
        contents: &ArchiveContents,
    ) -> Result<ImmutableExecutable, IngestError>;
}

/// Production ingestor: validates the entrypoint requirement, hashes
/// every file, and derives the bundle digest from the ordered
/// (filename, digest) pairs.
pub struct HashingIngestor;

impl Ingestor for HashingIngestor {
    fn create_immutable_executable(
        &self,
        contents: &ArchiveContents,
    ) -> Result<ImmutableExecutable, IngestError> {
        if contents.is_empty() {
            return Err(IngestError::EmptyArchive);
        }

        // A bundle must be runnable: either it ships a `run` script or
        // a `build` script that produces one.
        let has_entrypoint = contents
            .entries
            .iter()
            .any(|entry| entry.name == "build" || entry.name == "run");
        if !has_entrypoint {
            return Err(IngestError::MissingEntrypoint);
        }

        let files: Vec<ExecutableFile> = contents
            .entries
            .iter()
            .enumerate()
            .map(|(rank, entry)| ExecutableFile {
                filename: entry.name.clone(),
                rank,
                digest: sha256_hex(&entry.bytes),
                executable: entry.executable,
                bytes: entry.bytes.clone(),
            })
            .collect();

        let digest = bundle_digest(&files);
        Ok(ImmutableExecutable { digest, files })
    }
}

/// Lowercase hex sha256 of a byte slice
fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

/// Bundle digest over the ordered (filename, file digest) pairs, so
/// identical contents always hash identically regardless of timestamps
/// or zip metadata.
fn bundle_digest(files: &[ExecutableFile]) -> String {
    let mut hasher = Sha256::new();
    for file in files {
        hasher.update(file.filename.as_bytes());
        hasher.update([0u8]);
        hasher.update(file.digest.as_bytes());
        hasher.update([b'\n']);
    }
    format!("{:x}", hasher.finalize())
}
