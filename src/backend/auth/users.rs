//! User Model and Credential-Store Operations
//!
//! The [`User`] row and the sqlx queries that back registration, login, and
//! identity lookup. Users are created once and only read afterwards; nothing
//! in this scope updates or deletes them.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::shared::{Role, UserProfile};

/// A user record as stored in the credential store
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID
    pub id: Uuid,
    /// Email address, unique and case-sensitive as stored
    pub email: String,
    /// bcrypt hash; never serialized or returned
    pub password_hash: String,
    /// Optional display name
    pub name: Option<String>,
    /// Role, `USER` by default
    pub role: Role,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// The public projection of this user: everything except the hash.
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id.to_string(),
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role,
            created_at: self.created_at,
        }
    }
}

/// Insert a new user with the default role.
pub async fn create_user(
    pool: &SqlitePool,
    email: &str,
    password_hash: &str,
    name: Option<&str>,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, email, password_hash, name, role, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, email, password_hash, name, role, created_at
        "#,
    )
    .bind(id)
    .bind(email)
    .bind(password_hash)
    .bind(name)
    .bind(Role::default())
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Look up a user by exact email match.
pub async fn get_user_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, name, role, created_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Look up a user by id.
pub async fn get_user_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, name, role, created_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}
