use chrono::{DateTime, Utc};
use registrar_core::{
    Credential, Email, PendingUser, User, UserId, UserName, UserStore, UserStoreError,
};
use secrecy::{ExposeSecret, Secret};
use sqlx::{PgPool, Row, migrate::Migrator, postgres::PgRow};
use uuid::Uuid;

/// Migrations creating the `users` table, including the unique index on `email`.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

#[derive(Clone)]
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresUserStore { pool }
    }
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "Retrieving user from PostgreSQL", skip_all)]
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError> {
        let row = sqlx::query(
            r#"
                SELECT id, email, name, password_hash, created_at
                FROM users
                WHERE email = $1
            "#,
        )
        .bind(email.as_ref().expose_secret())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        row.map(user_from_row).transpose()
    }

    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn save(&self, user: PendingUser) -> Result<User, UserStoreError> {
        let id = UserId::new();

        sqlx::query(
            r#"
                INSERT INTO users (id, email, name, password_hash, created_at)
                VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(id.as_uuid())
        .bind(user.email().as_ref().expose_secret())
        .bind(user.name().as_str())
        .bind(user.credential().as_ref().expose_secret())
        .bind(user.created_at())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return UserStoreError::UserAlreadyExists;
                }
            }
            UserStoreError::UnexpectedError(e.to_string())
        })?;

        Ok(user.into_user(id))
    }
}

fn user_from_row(row: PgRow) -> Result<User, UserStoreError> {
    let unexpected = |e: sqlx::Error| UserStoreError::UnexpectedError(e.to_string());

    let id: Uuid = row.try_get("id").map_err(unexpected)?;
    let email: String = row.try_get("email").map_err(unexpected)?;
    let name: String = row.try_get("name").map_err(unexpected)?;
    let password_hash: String = row.try_get("password_hash").map_err(unexpected)?;
    let created_at: DateTime<Utc> = row.try_get("created_at").map_err(unexpected)?;

    let email = Email::try_from(Secret::new(email))
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
    let name =
        UserName::try_from(name).map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

    Ok(User::from_parts(
        UserId::from(id),
        name,
        email,
        Credential::new(Secret::new(password_hash)),
        created_at,
    ))
}
