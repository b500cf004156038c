use anyhow::{Context, Result};
use models_lending::user::User;
use sqlx::SqlitePool;

pub async fn get_user_by_email(db: &SqlitePool, email: &str) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, name, email, password_hash FROM users WHERE email = ?1",
    )
    .bind(email)
    .fetch_optional(db)
    .await
    .context("unable to look up user by email")?;

    Ok(user)
}
