//! Example executable fixture
//!
//! Seeds the two boolfind example executables (a comparator and a run
//! script) from fixed zip archives under
//! `{base_dir}/files/examples/` into a store. One flush commits both
//! records, so a failure anywhere leaves the store untouched.

use crate::archive::{self, ArchiveError};
use crate::executable::{ExecType, Executable, ImmutableExecutable};
use crate::ingest::{IngestError, Ingestor};
use crate::store::{Store, StoreError};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Reference name for the seeded comparator
pub const BOOLFIND_CMP_REFERENCE: &str = "boolfind-cmp";
/// Reference name for the seeded run script
pub const BOOLFIND_RUN_REFERENCE: &str = "boolfind-run";

/// Loader failures are the collaborators' own errors, unchanged
#[derive(Error, Debug)]
pub enum FixtureError {
    #[error(transparent)]
    Archive(#[from] ArchiveError),

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Named handles to the executables created by one `load` call.
///
/// Owned by the caller; nothing here outlives the setup run or leaks
/// into global state.
#[derive(Debug, Default)]
pub struct FixtureRefs {
    refs: HashMap<String, Executable>,
}

impl FixtureRefs {
    pub fn get(&self, name: &str) -> Option<&Executable> {
        self.refs.get(name)
    }

    pub fn len(&self) -> usize {
        self.refs.len()
    }

    fn add(&mut self, name: &str, executable: Executable) {
        self.refs.insert(name.to_string(), executable);
    }
}

/// Seeds the boolfind example executables
pub struct ExecutableFixture {
    base_dir: PathBuf,
}

impl ExecutableFixture {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Ingest both example archives, commit both records in one
    /// flush, and return the named references.
    pub fn load(
        &self,
        store: &mut Store,
        ingestor: &dyn Ingestor,
    ) -> Result<FixtureRefs, FixtureError> {
        let boolfind_cmp = Executable::new(
            "boolfind_cmp",
            "boolfind comparator",
            ExecType::Compare,
            self.ingest_example(ingestor, "boolfind_cmp.zip")?,
        );

        let boolfind_run = Executable::new(
            "boolfind_run",
            "boolfind run script",
            ExecType::Run,
            self.ingest_example(ingestor, "boolfind_run.zip")?,
        );

        store.persist(boolfind_cmp.clone());
        store.persist(boolfind_run.clone());
        store.flush()?;

        let mut refs = FixtureRefs::default();
        refs.add(BOOLFIND_CMP_REFERENCE, boolfind_cmp);
        refs.add(BOOLFIND_RUN_REFERENCE, boolfind_run);
        Ok(refs)
    }

    fn ingest_example(
        &self,
        ingestor: &dyn Ingestor,
        filename: &str,
    ) -> Result<ImmutableExecutable, FixtureError> {
        let path = self.example_path(filename);
        let contents = archive::open_checked(&path)?;
        Ok(ingestor.create_immutable_executable(&contents)?)
    }

    fn example_path(&self, filename: &str) -> PathBuf {
        self.base_dir.join("files").join("examples").join(filename)
    }
}

/// The example archives live under `files/examples/`
pub fn examples_dir(base_dir: &Path) -> PathBuf {
    base_dir.join("files").join("examples")
}
