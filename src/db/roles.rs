use serenity::model::id::{GuildId, RoleId};
use sqlx::SqlitePool;

use crate::error::Result;

/// Which kind of write the upsert performed. Only affects reply wording.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum BindingChange {
    Created,
    Updated,
}

/// One moderator role per guild, granted read access to every new ticket.
#[derive(Debug, Clone)]
pub struct RoleRegistry {
    pool: SqlitePool,
}

impl RoleRegistry {
    pub fn new(pool: SqlitePool) -> Self {
        RoleRegistry { pool }
    }

    pub async fn get(&self, guild_id: GuildId) -> Result<Option<RoleId>> {
        let role: Option<i64> = sqlx::query_scalar("SELECT role FROM roles WHERE guild = ?")
            .bind(guild_id.get() as i64)
            .fetch_optional(&self.pool)
            .await?;

        Ok(role.map(|id| RoleId::new(id as u64)))
    }

    /// Inserts the binding or replaces the existing one. The read and the
    /// write share a transaction, so concurrent setups for the same guild
    /// cannot produce duplicate rows or lost updates.
    pub async fn set(&self, guild_id: GuildId, role_id: RoleId) -> Result<BindingChange> {
        let mut tx = self.pool.begin().await?;

        let existing: Option<i64> = sqlx::query_scalar("SELECT role FROM roles WHERE guild = ?")
            .bind(guild_id.get() as i64)
            .fetch_optional(&mut *tx)
            .await?;

        let change = match existing {
            Some(_) => {
                sqlx::query("UPDATE roles SET role = ? WHERE guild = ?")
                    .bind(role_id.get() as i64)
                    .bind(guild_id.get() as i64)
                    .execute(&mut *tx)
                    .await?;
                BindingChange::Updated
            }
            None => {
                sqlx::query("INSERT INTO roles (guild, role) VALUES (?, ?)")
                    .bind(guild_id.get() as i64)
                    .bind(role_id.get() as i64)
                    .execute(&mut *tx)
                    .await?;
                BindingChange::Created
            }
        };
        tx.commit().await?;

        Ok(change)
    }
}

#[cfg(test)]
mod tests {
    use serenity::model::id::{GuildId, RoleId};
    use sqlx::SqlitePool;

    use crate::db::roles::{BindingChange, RoleRegistry};

    async fn get_registry() -> RoleRegistry {
        let pool = SqlitePool::connect("sqlite::memory:").await.unwrap();
        sqlx::query(crate::db::CREATE_ROLES_TABLE)
            .execute(&pool)
            .await
            .unwrap();
        RoleRegistry::new(pool)
    }

    #[tokio::test]
    async fn test_get_returns_none_for_unbound_guild() {
        let registry = get_registry().await;

        let result = registry.get(GuildId::new(1)).await.unwrap();
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_set_creates_the_first_binding() {
        let registry = get_registry().await;

        let change = registry
            .set(GuildId::new(1), RoleId::new(10))
            .await
            .unwrap();
        assert_eq!(change, BindingChange::Created);
        assert_eq!(
            registry.get(GuildId::new(1)).await.unwrap(),
            Some(RoleId::new(10))
        );
    }

    #[tokio::test]
    async fn test_set_twice_keeps_exactly_one_binding_with_the_second_value() {
        let registry = get_registry().await;

        registry
            .set(GuildId::new(1), RoleId::new(10))
            .await
            .unwrap();
        let change = registry
            .set(GuildId::new(1), RoleId::new(20))
            .await
            .unwrap();

        assert_eq!(change, BindingChange::Updated);
        assert_eq!(
            registry.get(GuildId::new(1)).await.unwrap(),
            Some(RoleId::new(20))
        );
    }

    #[tokio::test]
    async fn test_bindings_are_independent_between_guilds() {
        let registry = get_registry().await;

        registry
            .set(GuildId::new(1), RoleId::new(10))
            .await
            .unwrap();
        registry
            .set(GuildId::new(2), RoleId::new(20))
            .await
            .unwrap();

        assert_eq!(
            registry.get(GuildId::new(1)).await.unwrap(),
            Some(RoleId::new(10))
        );
        assert_eq!(
            registry.get(GuildId::new(2)).await.unwrap(),
            Some(RoleId::new(20))
        );
    }
}
