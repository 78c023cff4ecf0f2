//! Repository functions — one function per database operation.
//!
//! Every function takes a `&mut SqliteConnection` and returns a
//! `Result<T, DbError>`.  No connection management, just SQL.

pub mod usuarios;
