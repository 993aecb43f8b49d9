mod lmdb;

pub use lmdb::*;

use thiserror::Error;
use userpref_types::UserRecord;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("LMDB error: {0}")]
    Lmdb(#[from] heed::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Single-slot storage for the user record.
///
/// `read` never fails: missing or unreadable keys fall back to their
/// defaults. `write` replaces every field in one transaction.
pub trait PreferenceStore {
    fn read(&self) -> UserRecord;
    fn write(&self, record: &UserRecord) -> Result<(), StoreError>;
}
