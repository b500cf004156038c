use anyhow::{Context, Result};
use models_lending::user::User;
use sqlx::SqlitePool;

#[derive(Debug)]
pub struct UpdateProfileOptions {
    pub name: String,
    pub email: String,
}

/// Update the member's editable fields. Returns `None` when the member row
/// no longer exists.
pub async fn update_profile(
    db: &SqlitePool,
    user_id: i64,
    options: UpdateProfileOptions,
) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        r#"
        UPDATE users
        SET name = ?1, email = ?2
        WHERE id = ?3
        RETURNING id, name, email, password_hash
        "#,
    )
    .bind(&options.name)
    .bind(&options.email)
    .bind(user_id)
    .fetch_optional(db)
    .await
    .context("unable to update profile")?;

    Ok(user)
}
