//! `usuario` table repository functions.

use sqlx::{QueryBuilder, Sqlite, SqliteConnection};

use crate::{
    DbError,
    models::{NewUsuario, Usuario, UsuarioPatch},
};

/// Create the `usuario` table if it does not exist yet.
///
/// AUTOINCREMENT keeps ids from being reused after deletes.
pub async fn create_table(conn: &mut SqliteConnection) -> Result<(), DbError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS usuario (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nome TEXT NOT NULL,
            telefone TEXT
        )
        "#,
    )
    .execute(&mut *conn)
    .await?;

    Ok(())
}

/// Return all users, newest id first.
///
/// With a `filter`, only rows whose name or phone contains it are returned.
/// Matching uses `LIKE`, so it is ASCII case-insensitive; wildcard
/// characters in the filter are escaped and match literally.
pub async fn list_usuarios(
    conn: &mut SqliteConnection,
    filter: Option<&str>,
) -> Result<Vec<Usuario>, DbError> {
    let rows = match filter {
        Some(filter) => {
            let pattern = format!("%{}%", escape_like(filter));
            sqlx::query_as::<_, Usuario>(
                r#"
                SELECT id, nome, telefone FROM usuario
                WHERE nome LIKE ?1 ESCAPE '\' OR telefone LIKE ?1 ESCAPE '\'
                ORDER BY id DESC
                "#,
            )
            .bind(pattern)
            .fetch_all(&mut *conn)
            .await?
        }
        None => {
            sqlx::query_as::<_, Usuario>("SELECT id, nome, telefone FROM usuario ORDER BY id DESC")
                .fetch_all(&mut *conn)
                .await?
        }
    };

    Ok(rows)
}

/// Fetch a single user by its primary key.
pub async fn get_usuario(conn: &mut SqliteConnection, id: i64) -> Result<Usuario, DbError> {
    let row = sqlx::query_as::<_, Usuario>("SELECT id, nome, telefone FROM usuario WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or(DbError::NotFound)?;

    Ok(row)
}

/// Insert a new user and return the stored row.
///
/// `input` is expected to be validated already.
pub async fn insert_usuario(
    conn: &mut SqliteConnection,
    input: &NewUsuario,
) -> Result<Usuario, DbError> {
    let row = sqlx::query_as::<_, Usuario>(
        r#"
        INSERT INTO usuario (nome, telefone)
        VALUES (?, ?)
        RETURNING id, nome, telefone
        "#,
    )
    .bind(&input.name)
    .bind(&input.phone)
    .fetch_one(&mut *conn)
    .await?;

    Ok(row)
}

/// Apply the supplied fields of `patch` and return the updated row.
///
/// Returns `DbError::NotFound` if no row matched.  `patch` must be
/// non-empty; the caller validates it.
pub async fn update_usuario(
    conn: &mut SqliteConnection,
    id: i64,
    patch: &UsuarioPatch,
) -> Result<Usuario, DbError> {
    let mut query = QueryBuilder::<Sqlite>::new("UPDATE usuario SET ");
    let mut assignments = query.separated(", ");
    if let Some(name) = &patch.name {
        assignments.push("nome = ");
        assignments.push_bind_unseparated(name.clone());
    }
    if let Some(phone) = &patch.phone {
        assignments.push("telefone = ");
        assignments.push_bind_unseparated(phone.clone());
    }
    query
        .push(" WHERE id = ")
        .push_bind(id)
        .push(" RETURNING id, nome, telefone");

    let row = query
        .build_query_as::<Usuario>()
        .fetch_optional(&mut *conn)
        .await?
        .ok_or(DbError::NotFound)?;

    Ok(row)
}

/// Permanently delete a user by its primary key.
///
/// Returns `DbError::NotFound` if no row was deleted.
pub async fn delete_usuario(conn: &mut SqliteConnection, id: i64) -> Result<(), DbError> {
    let result = sqlx::query("DELETE FROM usuario WHERE id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::NotFound);
    }

    Ok(())
}

fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::escape_like;

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("50%_a\\b"), "50\\%\\_a\\\\b");
        assert_eq!(escape_like("Ana"), "Ana");
    }
}
