//! `db` crate — persistence layer for the `usuario` table.
//!
//! Provides typed row/request structs, repository functions for every
//! statement the service issues, and the [`Store`] facade that opens one
//! SQLite connection per operation.  No HTTP concerns live here.

pub mod error;
pub mod models;
pub mod repository;
pub mod store;

pub use error::DbError;
pub use models::{NewUsuario, Usuario, UsuarioPatch};
pub use store::Store;
