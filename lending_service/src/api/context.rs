use axum_macros::FromRef;
use lending_auth::token::JwtKeys;
use sqlx::SqlitePool;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub db: SqlitePool,
    pub jwt_keys: JwtKeys,
}
