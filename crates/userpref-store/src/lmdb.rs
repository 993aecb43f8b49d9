use std::path::Path;

use heed::types::*;
use heed::{Database, Env, EnvOpenOptions, RoTxn, RwTxn};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info, warn};
use userpref_types::*;

use crate::{PreferenceStore, StoreError};

pub struct LmdbPreferences {
    env: Env,
    db: Database<Str, Str>,
}

impl LmdbPreferences {
    pub fn open(path: &Path, map_size: u64) -> Result<Self, StoreError> {
        std::fs::create_dir_all(path)?;

        let env = unsafe {
            EnvOpenOptions::new()
                .map_size(map_size as usize)
                .max_dbs(1)
                .open(path)?
        };

        let mut wtxn = env.write_txn()?;
        let db = env.create_database(&mut wtxn, None)?;
        wtxn.commit()?;

        info!("Opened preference store at {}", path.display());
        Ok(Self { env, db })
    }

    pub fn len(&self) -> u64 {
        self.env
            .read_txn()
            .and_then(|rtxn| self.db.len(&rtxn))
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get<V>(&self, rtxn: &RoTxn, key: &str) -> Option<V>
    where
        V: DeserializeOwned,
    {
        let value_str = self.db.get(rtxn, key).ok()??;
        match serde_json::from_str(value_str) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring unreadable value for {}: {}", key, e);
                None
            }
        }
    }

    fn put<V>(&self, wtxn: &mut RwTxn, key: &str, value: &V) -> Result<(), StoreError>
    where
        V: Serialize,
    {
        let value_str = serde_json::to_string(value)?;
        self.db.put(wtxn, key, &value_str)?;
        Ok(())
    }

    fn put_opt(
        &self,
        wtxn: &mut RwTxn,
        key: &str,
        value: Option<&String>,
    ) -> Result<(), StoreError> {
        match value {
            Some(value) => self.put(wtxn, key, value),
            None => {
                self.db.delete(wtxn, key)?;
                Ok(())
            }
        }
    }
}

impl PreferenceStore for LmdbPreferences {
    fn read(&self) -> UserRecord {
        let Ok(rtxn) = self.env.read_txn() else {
            warn!("Could not open read transaction, returning blank record");
            return UserRecord::blank();
        };

        UserRecord {
            name: Some(self.get(&rtxn, KEY_NAME).unwrap_or_default()),
            email: Some(self.get(&rtxn, KEY_EMAIL).unwrap_or_default()),
            age: self.get(&rtxn, KEY_AGE).unwrap_or(0),
            phone_number: Some(self.get(&rtxn, KEY_PHONE).unwrap_or_default()),
            likes_subject: self.get(&rtxn, KEY_LIKES_SUBJECT).unwrap_or(false),
        }
    }

    fn write(&self, record: &UserRecord) -> Result<(), StoreError> {
        // Dropping the txn on an early return aborts it, so either every
        // key is updated or none is.
        let mut wtxn = self.env.write_txn()?;
        self.put_opt(&mut wtxn, KEY_NAME, record.name.as_ref())?;
        self.put_opt(&mut wtxn, KEY_EMAIL, record.email.as_ref())?;
        self.put(&mut wtxn, KEY_AGE, &record.age)?;
        self.put_opt(&mut wtxn, KEY_PHONE, record.phone_number.as_ref())?;
        self.put(&mut wtxn, KEY_LIKES_SUBJECT, &record.likes_subject)?;
        wtxn.commit()?;

        debug!("Wrote user record");
        Ok(())
    }
}
