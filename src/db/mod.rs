pub mod roles;

pub use crate::db::roles::{BindingChange, RoleRegistry};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::error::Result;

pub(crate) const CREATE_ROLES_TABLE: &str =
    "CREATE TABLE IF NOT EXISTS roles (guild INTEGER PRIMARY KEY, role INTEGER NOT NULL)";

/// Opens the bot database and makes sure the schema exists.
pub async fn connect(database_path: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .filename(database_path)
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;
    sqlx::query(CREATE_ROLES_TABLE).execute(&pool).await?;

    Ok(pool)
}
