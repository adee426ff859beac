//! Parameterized statements and the datastore trait.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// Statement text for the users-by-name lookup.
pub const USER_BY_NAME: &str = "SELECT name, data FROM users WHERE name = ?";

/// A value bound to a statement placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    Text(String),
    Int(i64),
}

/// A query with fixed text and positional bound parameters.
///
/// The constructor takes `&'static str` so statement text is always a
/// compile-time constant; request data can only ride in `params`.
#[derive(Debug, Clone)]
pub struct Statement {
    text: &'static str,
    params: Vec<Param>,
}

impl Statement {
    pub fn new(text: &'static str, params: Vec<Param>) -> Self {
        Self { text, params }
    }

    pub fn text(&self) -> &'static str {
        self.text
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }
}

/// The users lookup. The only place its statement is written.
pub fn user_by_name(name: &str) -> Statement {
    Statement::new(USER_BY_NAME, vec![Param::Text(name.to_string())])
}

/// A row from the users table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserRecord {
    pub name: String,
    pub data: String,
}

/// Errors from datastore operations.
#[derive(Debug, Error)]
pub enum DatastoreError {
    /// Seed file could not be read.
    #[error("seed read failed: {0}")]
    Seed(#[from] std::io::Error),

    /// Seed file was not valid against the schema.
    #[error("seed format invalid: {0}")]
    SeedFormat(#[from] serde_json::Error),

    /// Statement text is not one this store knows how to execute.
    #[error("unknown statement: {0}")]
    UnknownStatement(&'static str),

    /// Parameter count or types did not match the statement.
    #[error("parameter mismatch for statement: {0}")]
    ParamMismatch(&'static str),
}

/// Execution seam for user lookups.
#[async_trait]
pub trait Datastore: Send + Sync {
    /// Execute a parameterized statement, returning matching rows.
    async fn fetch(&self, stmt: Statement) -> Result<Vec<UserRecord>, DatastoreError>;
}
