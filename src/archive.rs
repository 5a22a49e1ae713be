//! Zip archive opening with consistency validation
//!
//! Reads every entry to EOF so the zip reader verifies each entry's
//! CRC; a mismatch or truncated stream surfaces as a hard
//! `ArchiveError::Corrupt`, never a silent skip. The result is an
//! in-memory `ArchiveContents` so ingestion never touches the zip
//! reader directly.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;
use zip::ZipArchive;

/// Bundle files are scripts and small binaries; refuse anything larger.
const MAX_ENTRY_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("failed to open archive {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corrupt archive {}: {reason}", .path.display())]
    Corrupt { path: PathBuf, reason: String },

    #[error("archive entry {name} exceeds the {limit} byte limit")]
    EntryTooLarge { name: String, limit: u64 },
}

/// One file entry read out of an archive
#[derive(Debug, Clone)]
pub struct ArchiveEntry {
    pub name: String,
    pub bytes: Vec<u8>,
    pub executable: bool,
}

/// Full contents of a validated archive, in archive order
#[derive(Debug, Clone, Default)]
pub struct ArchiveContents {
    pub entries: Vec<ArchiveEntry>,
}

impl ArchiveContents {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Open a zip archive and validate its internal consistency.
///
/// Fails if the file is missing, is not a zip archive, or any entry
/// fails its CRC check. Directory entries are skipped.
pub fn open_checked(path: &Path) -> Result<ArchiveContents, ArchiveError> {
    let file = File::open(path).map_err(|source| ArchiveError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut zip = ZipArchive::new(BufReader::new(file)).map_err(|e| ArchiveError::Corrupt {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut entries = Vec::new();
    for index in 0..zip.len() {
        let mut entry = zip.by_index(index).map_err(|e| ArchiveError::Corrupt {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        if entry.is_dir() {
            continue;
        }

        let name = entry.name().to_string();
        // Reject names that would escape the extraction root
        if entry.enclosed_name().is_none() {
            return Err(ArchiveError::Corrupt {
                path: path.to_path_buf(),
                reason: format!("unsafe entry name {}", name),
            });
        }
        if entry.size() > MAX_ENTRY_BYTES {
            return Err(ArchiveError::EntryTooLarge {
                name,
                limit: MAX_ENTRY_BYTES,
            });
        }

        // Execute permission from the archive's unix mode, if recorded
        let executable = entry
            .unix_mode()
            .map(|mode| mode & 0o111 != 0)
            .unwrap_or(false);

        // Cap the read even if the declared size lies; reading to EOF
        // within the cap is what triggers the CRC verification.
        let mut bytes = Vec::new();
        let mut limited = (&mut entry).take(MAX_ENTRY_BYTES + 1);
        limited
            .read_to_end(&mut bytes)
            .map_err(|e| ArchiveError::Corrupt {
                path: path.to_path_buf(),
                reason: format!("entry {}: {}", name, e),
            })?;
        if bytes.len() as u64 > MAX_ENTRY_BYTES {
            return Err(ArchiveError::EntryTooLarge {
                name,
                limit: MAX_ENTRY_BYTES,
            });
        }

        entries.push(ArchiveEntry {
            name,
            bytes,
            executable,
        });
    }

    Ok(ArchiveContents { entries })
}
