use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A member row as stored in the database.
///
/// This type deliberately does not implement `Serialize`: the password hash
/// must never reach a response body. API-facing code converts to
/// [`UserProfile`].
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// The API-facing view of a member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// Identity attached to the request by the auth middleware.
#[derive(Debug, Clone)]
pub struct UserContext {
    /// The id of the authenticated member
    pub user_id: i64,
}
