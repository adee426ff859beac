//! In-memory users table.

use std::path::Path;

use async_trait::async_trait;

use crate::config::DatastoreConfig;
use crate::datastore::query::{
    Datastore, DatastoreError, Param, Statement, UserRecord, USER_BY_NAME,
};

/// In-memory implementation of [`Datastore`].
///
/// Seeded from built-in rows or a JSON seed file. Lookups compare the
/// bound parameter against stored names byte-for-byte, so query
/// metacharacters in a parameter have no control meaning.
pub struct MemoryDatastore {
    users: Vec<UserRecord>,
}

impl MemoryDatastore {
    /// Open the store, loading the seed file when one is configured.
    pub fn open(config: &DatastoreConfig) -> Result<Self, DatastoreError> {
        let users = match &config.seed_path {
            Some(path) => Self::load_seed(path)?,
            None => Self::default_rows(),
        };

        tracing::info!(rows = users.len(), "Datastore ready");
        Ok(Self { users })
    }

    fn load_seed(path: &Path) -> Result<Vec<UserRecord>, DatastoreError> {
        let bytes = std::fs::read(path)?;
        let users: Vec<UserRecord> = serde_json::from_slice(&bytes)?;
        Ok(users)
    }

    fn default_rows() -> Vec<UserRecord> {
        vec![
            UserRecord {
                name: "alice".to_string(),
                data: "engineering".to_string(),
            },
            UserRecord {
                name: "bob".to_string(),
                data: "operations".to_string(),
            },
        ]
    }
}

#[async_trait]
impl Datastore for MemoryDatastore {
    async fn fetch(&self, stmt: Statement) -> Result<Vec<UserRecord>, DatastoreError> {
        // Dispatch on statement identity, not on anything request-derived.
        if stmt.text() != USER_BY_NAME {
            return Err(DatastoreError::UnknownStatement(stmt.text()));
        }

        let name = match stmt.params() {
            [Param::Text(name)] => name,
            _ => return Err(DatastoreError::ParamMismatch(stmt.text())),
        };

        Ok(self
            .users
            .iter()
            .filter(|u| u.name == *name)
            .cloned()
            .collect())
    }
}
