//! On-disk executable store
//!
//! Layout under the store root:
//!
//! ```text
//! <root>/
//! ├── executables/<execid>.toml   # manifest per executable
//! └── bundles/<digest>/           # content-addressed bundle payloads
//! ```
//!
//! Writes are staged with `persist` and committed in one batch by
//! `flush`. Uniqueness of every staged id is validated against both
//! the batch and disk before anything is written, so a duplicate fails
//! the whole batch with the store untouched.

use crate::executable::{Executable, ImmutableExecutable};
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("duplicate executable id: {execid}")]
    DuplicateId { execid: String },

    #[error("executable not found: {execid}")]
    NotFound { execid: String },

    #[error("invalid executable id: {execid:?}")]
    InvalidId { execid: String },

    #[error("bundle payload missing for {execid}: {}", .path.display())]
    MissingPayload { execid: String, path: PathBuf },

    #[error("digest mismatch in {execid}: {filename}")]
    DigestMismatch { execid: String, filename: String },

    #[error("failed to parse manifest {}", .path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to encode manifest for {execid}")]
    Encode {
        execid: String,
        #[source]
        source: toml::ser::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Store handle with a staging area for batched writes
pub struct Store {
    root: PathBuf,
    staged: Vec<Executable>,
}

impl Store {
    /// Open (creating if needed) a store rooted at `root`
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(root.join("executables"))?;
        fs::create_dir_all(root.join("bundles"))?;
        Ok(Self {
            root,
            staged: Vec::new(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Stage an executable for the next `flush`
    pub fn persist(&mut self, executable: Executable) {
        self.staged.push(executable);
    }

    /// Commit all staged executables in one batch.
    ///
    /// Validates id uniqueness across the batch and disk first; on a
    /// duplicate nothing is written. Bundle payloads are written before
    /// manifests so a manifest never references a missing payload.
    pub fn flush(&mut self) -> Result<(), StoreError> {
        let mut seen = HashSet::new();
        for exec in &self.staged {
            check_execid(&exec.execid)?;
            if !seen.insert(exec.execid.clone()) || self.manifest_path(&exec.execid).exists() {
                return Err(StoreError::DuplicateId {
                    execid: exec.execid.clone(),
                });
            }
        }

        for exec in &self.staged {
            self.write_bundle(&exec.immutable)?;
        }
        for exec in &self.staged {
            let manifest = toml::to_string_pretty(exec).map_err(|source| StoreError::Encode {
                execid: exec.execid.clone(),
                source,
            })?;
            fs::write(self.manifest_path(&exec.execid), manifest)?;
        }

        self.staged.clear();
        Ok(())
    }

    /// List all stored executables, sorted by id
    pub fn list(&self) -> Result<Vec<Executable>, StoreError> {
        let mut executables = Vec::new();
        for entry in fs::read_dir(self.root.join("executables"))? {
            let path = entry?.path();
            if path.extension().map(|e| e == "toml").unwrap_or(false) {
                executables.push(read_manifest(&path)?);
            }
        }
        executables.sort_by(|a, b| a.execid.cmp(&b.execid));
        Ok(executables)
    }

    /// Load one executable by id
    pub fn get(&self, execid: &str) -> Result<Executable, StoreError> {
        check_execid(execid)?;
        let path = self.manifest_path(execid);
        if !path.exists() {
            return Err(StoreError::NotFound {
                execid: execid.to_string(),
            });
        }
        read_manifest(&path)
    }

    /// Remove an executable.
    ///
    /// The bundle payload is deleted only when no remaining manifest
    /// references the same digest.
    pub fn remove(&mut self, execid: &str) -> Result<(), StoreError> {
        let exec = self.get(execid)?;
        fs::remove_file(self.manifest_path(execid))?;

        let still_referenced = self
            .list()?
            .iter()
            .any(|other| other.immutable.digest == exec.immutable.digest);
        if !still_referenced {
            let dir = self.bundle_dir(&exec.immutable.digest);
            if dir.exists() {
                fs::remove_dir_all(dir)?;
            }
        }
        Ok(())
    }

    /// Re-hash an executable's bundle payload against its manifest
    pub fn verify(&self, execid: &str) -> Result<(), StoreError> {
        let exec = self.get(execid)?;
        let bundle_dir = self.bundle_dir(&exec.immutable.digest);

        for file in &exec.immutable.files {
            let path = bundle_dir.join(&file.filename);
            if !path.exists() {
                return Err(StoreError::MissingPayload {
                    execid: execid.to_string(),
                    path,
                });
            }

            let payload = File::open(&path)?;
            let mut reader = BufReader::new(payload);
            let mut hasher = Sha256::new();
            io::copy(&mut reader, &mut hasher)?;
            let actual = format!("{:x}", hasher.finalize());

            if actual != file.digest {
                return Err(StoreError::DigestMismatch {
                    execid: execid.to_string(),
                    filename: file.filename.clone(),
                });
            }
        }
        Ok(())
    }

    fn manifest_path(&self, execid: &str) -> PathBuf {
        self.root
            .join("executables")
            .join(format!("{}.toml", execid))
    }

    fn bundle_dir(&self, digest: &str) -> PathBuf {
        self.root.join("bundles").join(digest)
    }

    fn write_bundle(&self, bundle: &ImmutableExecutable) -> Result<(), StoreError> {
        let final_dir = self.bundle_dir(&bundle.digest);
        // Content-addressed: an identical bundle is already on disk
        if final_dir.exists() {
            return Ok(());
        }

        // Build the payload in a sibling directory and rename into
        // place, so a reused bundle directory is never half-written.
        let tmp_dir = self.root.join("bundles").join(format!(".tmp-{}", bundle.digest));
        if tmp_dir.exists() {
            fs::remove_dir_all(&tmp_dir)?;
        }
        fs::create_dir_all(&tmp_dir)?;

        for file in &bundle.files {
            let dest = tmp_dir.join(&file.filename);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&dest, &file.bytes)?;

            #[cfg(unix)]
            if file.executable {
                use std::os::unix::fs::PermissionsExt;
                fs::set_permissions(&dest, fs::Permissions::from_mode(0o755))?;
            }
        }

        fs::rename(&tmp_dir, &final_dir)?;
        Ok(())
    }
}

fn read_manifest(path: &Path) -> Result<Executable, StoreError> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|source| StoreError::Manifest {
        path: path.to_path_buf(),
        source,
    })
}

/// Ids become file names; keep them to a safe character set
fn check_execid(execid: &str) -> Result<(), StoreError> {
    let ok = !execid.is_empty()
        && execid
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if ok {
        Ok(())
    } else {
        Err(StoreError::InvalidId {
            execid: execid.to_string(),
        })
    }
}
