//! Directory-backed artifact store.

use std::fs;
use std::path::{Path, PathBuf};

use weft_core::Trajectory;
use weft_rules::RuleTable;

use crate::codec::{decode_table, decode_trajectory, encode_table, encode_trajectory};
use crate::error::StoreError;

/// Stores rule tables and trajectories as files under one root
/// directory, keyed by opaque id strings.
///
/// Tables land in `<root>/<id>.rule`, trajectories in `<root>/<id>.traj`.
/// The id is treated as a plain file stem; pair with
/// [`artifact_id`](crate::artifact_id) to mint fresh ones.
///
/// # Examples
///
/// ```no_run
/// use weft_rules::RuleSpace;
/// use weft_store::Store;
///
/// let store = Store::open("data/rules")?;
/// let table = RuleSpace::elementary().table_at(&90u64.into()).unwrap();
/// store.save_table("L2I5ZK", &table)?;
/// assert_eq!(store.load_table("L2I5ZK")?, table);
/// # Ok::<(), weft_store::StoreError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    /// Open a store rooted at `root`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the directory cannot be created.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// The store's root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn table_path(&self, id: &str) -> PathBuf {
        self.root.join(format!("{id}.rule"))
    }

    fn trajectory_path(&self, id: &str) -> PathBuf {
        self.root.join(format!("{id}.traj"))
    }

    /// Save a rule table under `id`, overwriting any previous record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file cannot be written.
    pub fn save_table(&self, id: &str, table: &RuleTable) -> Result<(), StoreError> {
        let mut buf = Vec::new();
        encode_table(&mut buf, table)?;
        fs::write(self.table_path(id), buf)?;
        Ok(())
    }

    /// Load the rule table stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file is missing or unreadable,
    /// or a decode error if the record is corrupt.
    pub fn load_table(&self, id: &str) -> Result<RuleTable, StoreError> {
        let bytes = fs::read(self.table_path(id))?;
        decode_table(&mut bytes.as_slice())
    }

    /// Save a trajectory under `id`, overwriting any previous record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file cannot be written.
    pub fn save_trajectory(&self, id: &str, trajectory: &Trajectory) -> Result<(), StoreError> {
        let mut buf = Vec::new();
        encode_trajectory(&mut buf, trajectory)?;
        fs::write(self.trajectory_path(id), buf)?;
        Ok(())
    }

    /// Load the trajectory stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file is missing or unreadable,
    /// or a decode error if the record is corrupt.
    pub fn load_trajectory(&self, id: &str) -> Result<Trajectory, StoreError> {
        let bytes = fs::read(self.trajectory_path(id))?;
        decode_trajectory(&mut bytes.as_slice())
    }
}
