//! Row and request structs for the `usuario` table.
//!
//! [`Usuario`] maps 1-to-1 onto a table row.  [`NewUsuario`] and
//! [`UsuarioPatch`] are the typed inputs for create and partial update;
//! both are validated before any SQL runs.

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

use crate::DbError;

// ---------------------------------------------------------------------------
// usuario
// ---------------------------------------------------------------------------

/// A persisted user row.
///
/// The on-disk columns are `nome` / `telefone`; they are exposed as
/// `name` / `phone`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Usuario {
    pub id: i64,
    #[sqlx(rename = "nome")]
    pub name: String,
    #[sqlx(rename = "telefone")]
    pub phone: Option<String>,
}

// ---------------------------------------------------------------------------
// create
// ---------------------------------------------------------------------------

/// Fields accepted when creating a user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewUsuario {
    #[serde(alias = "nome")]
    pub name: String,
    #[serde(default, alias = "telefone")]
    pub phone: Option<String>,
}

impl NewUsuario {
    pub fn new(name: impl Into<String>, phone: Option<String>) -> Self {
        Self {
            name: name.into(),
            phone,
        }
    }

    /// Trim the name and reject it if nothing is left.
    pub fn validate(self) -> Result<Self, DbError> {
        let name = non_empty_name(&self.name)?;
        Ok(Self {
            name,
            phone: self.phone,
        })
    }
}

// ---------------------------------------------------------------------------
// update
// ---------------------------------------------------------------------------

/// A partial update: only the fields that are `Some` are written.
///
/// `phone: Some(None)` clears the phone, `phone: None` leaves it alone.
/// An explicit JSON `null` for `name` deserializes to an empty name so it
/// fails validation instead of being silently ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UsuarioPatch {
    #[serde(default, alias = "nome", deserialize_with = "null_as_empty")]
    pub name: Option<String>,
    #[serde(default, alias = "telefone", deserialize_with = "present")]
    pub phone: Option<Option<String>>,
}

impl UsuarioPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none()
    }

    /// Reject empty patches and blank names; trims the name.
    pub fn validate(self) -> Result<Self, DbError> {
        if self.is_empty() {
            return Err(DbError::Validation("nothing to update".into()));
        }
        let name = self.name.as_deref().map(non_empty_name).transpose()?;
        Ok(Self {
            name,
            phone: self.phone,
        })
    }
}

fn non_empty_name(raw: &str) -> Result<String, DbError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(DbError::Validation("'name' must not be empty".into()));
    }
    Ok(name.to_string())
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Some(Option::<String>::deserialize(deserializer)?.unwrap_or_default()))
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_usuario_name_is_trimmed() {
        let input = NewUsuario::new("  Ana  ", Some("123".into()));
        let valid = input.validate().unwrap();
        assert_eq!(valid.name, "Ana");
        assert_eq!(valid.phone.as_deref(), Some("123"));
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = NewUsuario::new(" \t ", None).validate().unwrap_err();
        assert!(matches!(err, DbError::Validation(_)));
    }

    #[test]
    fn patch_distinguishes_absent_and_null_phone() {
        let absent: UsuarioPatch = serde_json::from_value(json!({"name": "Ana"})).unwrap();
        assert_eq!(absent.phone, None);

        let cleared: UsuarioPatch = serde_json::from_value(json!({"phone": null})).unwrap();
        assert_eq!(cleared.phone, Some(None));
        assert!(cleared.validate().is_ok());
    }

    #[test]
    fn patch_with_null_name_fails_validation() {
        let patch: UsuarioPatch = serde_json::from_value(json!({"name": null})).unwrap();
        assert!(matches!(patch.validate(), Err(DbError::Validation(_))));
    }

    #[test]
    fn empty_patch_fails_validation() {
        let patch: UsuarioPatch = serde_json::from_value(json!({"other": 1})).unwrap();
        assert!(patch.is_empty());
        assert!(matches!(patch.validate(), Err(DbError::Validation(_))));
    }

    #[test]
    fn portuguese_keys_are_accepted() {
        let input: NewUsuario =
            serde_json::from_value(json!({"nome": "Ana", "telefone": "123"})).unwrap();
        assert_eq!(input, NewUsuario::new("Ana", Some("123".into())));
    }
}
