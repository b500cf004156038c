use anyhow::{Context, Result};
use models_lending::user::User;
use sqlx::SqlitePool;

pub async fn get_user(db: &SqlitePool, user_id: i64) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, name, email, password_hash FROM users WHERE id = ?1",
    )
    .bind(user_id)
    .fetch_optional(db)
    .await
    .context("unable to look up user")?;

    Ok(user)
}
