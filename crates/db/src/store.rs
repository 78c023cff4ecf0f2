//! The `Store` facade over the `usuario` repository.
//!
//! There is no pool: every operation opens its own SQLite connection,
//! runs its statement(s) and closes the connection again, on success and
//! on error alike.  Write serialization is left to SQLite.

use std::path::{Path, PathBuf};

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, Connection, SqliteConnection};
use tracing::{debug, info, warn};

use crate::{
    DbError,
    models::{NewUsuario, Usuario, UsuarioPatch},
    repository::usuarios as repo,
};

/// Handle to the backing database file.  Cheap to clone.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
    options: SqliteConnectOptions,
}

impl Store {
    /// Point a store at `path`.  The file is created on first connect.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true);
        Self { path, options }
    }

    /// Location of the backing database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the `usuario` table if absent.  Safe to call on every startup.
    pub async fn ensure_schema(&self) -> Result<(), DbError> {
        info!("Ensuring schema at {}", self.path.display());
        let mut conn = self.connect().await?;
        let result = repo::create_table(&mut conn).await;
        release(conn, result).await
    }

    /// All users ordered by descending id, optionally filtered by a
    /// substring of name or phone.  An empty filter means no filter.
    pub async fn list(&self, filter: Option<&str>) -> Result<Vec<Usuario>, DbError> {
        let filter = filter.filter(|f| !f.is_empty());
        let mut conn = self.connect().await?;
        let result = repo::list_usuarios(&mut conn, filter).await;
        if let Ok(rows) = &result {
            debug!(?filter, count = rows.len(), "Listed usuarios");
        }
        release(conn, result).await
    }

    /// Fetch one user; `DbError::NotFound` if the id is unknown.
    pub async fn get(&self, id: i64) -> Result<Usuario, DbError> {
        let mut conn = self.connect().await?;
        let result = repo::get_usuario(&mut conn, id).await;
        release(conn, result).await
    }

    /// Validate and insert a new user, returning it with its assigned id.
    pub async fn create(&self, input: NewUsuario) -> Result<Usuario, DbError> {
        let input = input.validate()?;
        let mut conn = self.connect().await?;
        let result = repo::insert_usuario(&mut conn, &input).await;
        if let Ok(row) = &result {
            info!(id = row.id, "Created usuario");
        }
        release(conn, result).await
    }

    /// Validate and apply a partial update, returning the full row.
    pub async fn update(&self, id: i64, patch: UsuarioPatch) -> Result<Usuario, DbError> {
        let patch = patch.validate()?;
        let mut conn = self.connect().await?;
        let result = repo::update_usuario(&mut conn, id, &patch).await;
        if result.is_ok() {
            info!(id, "Updated usuario");
        }
        release(conn, result).await
    }

    /// Delete a user; `DbError::NotFound` if the id is unknown.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let mut conn = self.connect().await?;
        let result = repo::delete_usuario(&mut conn, id).await;
        if result.is_ok() {
            info!(id, "Deleted usuario");
        }
        release(conn, result).await
    }

    async fn connect(&self) -> Result<SqliteConnection, DbError> {
        Ok(self.options.connect().await?)
    }
}

/// Close `conn` and hand back the operation's result.
///
/// A failed close is logged; the result of the statement already ran wins.
async fn release<T>(conn: SqliteConnection, result: Result<T, DbError>) -> Result<T, DbError> {
    if let Err(err) = conn.close().await {
        warn!(error = %err, "Failed to close SQLite connection");
    }
    result
}
