use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::accounts::repo_types::{Account, Role};

impl Account {
    /// Find an account by email.
    pub async fn find_by_email(db: &PgPool, email: &str) -> anyhow::Result<Option<Account>> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, name, email, password_hash, role, score, availability, created_at, updated_at
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(account)
    }

    /// Find an account by id.
    pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Account>> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, name, email, password_hash, role, score, availability, created_at, updated_at
            FROM accounts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(account)
    }

    /// Create a new account with a hashed password.
    pub async fn create(
        db: &PgPool,
        name: &str,
        email: &str,
        password_hash: &str,
        role: Role,
        score: i32,
    ) -> anyhow::Result<Account> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (name, email, password_hash, role, score)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, password_hash, role, score, availability, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(role)
        .bind(score)
        .fetch_one(db)
        .await?;
        Ok(account)
    }

    /// All professionals, best score first. Ties keep insertion order.
    pub async fn list_professionals(db: &PgPool) -> anyhow::Result<Vec<Account>> {
        let rows = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, name, email, password_hash, role, score, availability, created_at, updated_at
            FROM accounts
            WHERE role = $1
            ORDER BY score DESC, created_at ASC
            "#,
        )
        .bind(Role::Professional)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    /// Replace the account's slot list wholesale, returning the stored list.
    pub async fn set_availability(
        db: &PgPool,
        id: Uuid,
        slots: &[OffsetDateTime],
    ) -> anyhow::Result<Vec<OffsetDateTime>> {
        let (stored,): (Vec<OffsetDateTime>,) = sqlx::query_as(
            r#"
            UPDATE accounts
            SET availability = $2, updated_at = now()
            WHERE id = $1
            RETURNING availability
            "#,
        )
        .bind(id)
        .bind(slots.to_vec())
        .fetch_one(db)
        .await?;
        Ok(stored)
    }
}
