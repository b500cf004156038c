use crate::common::{create_full_app, create_member_with_token, register_and_login, test_jwt_keys};
use axum::http::StatusCode;
use axum_test::TestServer;
use lending_db_client::paths;
use models_lending::user::UserProfile;
use sqlx::SqlitePool;

#[sqlx::test(migrations = "../lending_db_client/migrations")]
async fn test_register_creates_member(pool: SqlitePool) -> sqlx::Result<()> {
    let server = TestServer::new(create_full_app(pool)).unwrap();

    let response = server
        .post(paths::REGISTER)
        .json(&serde_json::json!({
            "name": "Claire Fontaine",
            "email": "claire@mediatheque.example",
            "password": "motdepasse",
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body: serde_json::Value = response.json();
    assert_eq!(body["user"]["name"], "Claire Fontaine");
    assert_eq!(body["user"]["email"], "claire@mediatheque.example");
    assert!(body["user"]["id"].as_i64().unwrap() > 0);
    // The password must not appear in the response in any form
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("password_hash").is_none());
    Ok(())
}

#[sqlx::test(migrations = "../lending_db_client/migrations")]
async fn test_register_duplicate_email_conflicts(pool: SqlitePool) -> sqlx::Result<()> {
    let server = TestServer::new(create_full_app(pool)).unwrap();

    let request = serde_json::json!({
        "name": "Claire Fontaine",
        "email": "claire@mediatheque.example",
        "password": "motdepasse",
    });

    let first = server.post(paths::REGISTER).json(&request).await;
    first.assert_status(StatusCode::CREATED);

    let second = server.post(paths::REGISTER).json(&request).await;
    second.assert_status(StatusCode::CONFLICT);
    Ok(())
}

#[sqlx::test(migrations = "../lending_db_client/migrations")]
async fn test_register_validates_input(pool: SqlitePool) -> sqlx::Result<()> {
    let server = TestServer::new(create_full_app(pool)).unwrap();

    // Not an email address
    let response = server
        .post(paths::REGISTER)
        .json(&serde_json::json!({
            "name": "Claire",
            "email": "not-an-email",
            "password": "motdepasse",
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    // Password too short
    let response = server
        .post(paths::REGISTER)
        .json(&serde_json::json!({
            "name": "Claire",
            "email": "claire@mediatheque.example",
            "password": "abc",
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    // Missing fields are rejected by deserialization
    let response = server
        .post(paths::REGISTER)
        .json(&serde_json::json!({ "name": "Claire" }))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    Ok(())
}

#[sqlx::test(migrations = "../lending_db_client/migrations")]
async fn test_login_returns_valid_token(pool: SqlitePool) -> sqlx::Result<()> {
    let server = TestServer::new(create_full_app(pool)).unwrap();

    let token = register_and_login(&server, "claire@mediatheque.example").await;

    let claims = test_jwt_keys()
        .validate_access_token(&token)
        .expect("login token validates");
    assert!(claims.sub > 0);
    Ok(())
}

#[sqlx::test(migrations = "../lending_db_client/migrations")]
async fn test_login_rejects_bad_credentials(pool: SqlitePool) -> sqlx::Result<()> {
    let server = TestServer::new(create_full_app(pool)).unwrap();

    server
        .post(paths::REGISTER)
        .json(&serde_json::json!({
            "name": "Claire Fontaine",
            "email": "claire@mediatheque.example",
            "password": "motdepasse",
        }))
        .await
        .assert_status(StatusCode::CREATED);

    // Wrong password
    let response = server
        .post(paths::LOGIN)
        .json(&serde_json::json!({
            "email": "claire@mediatheque.example",
            "password": "wrong_password",
        }))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    // Unknown email answers the same
    let response = server
        .post(paths::LOGIN)
        .json(&serde_json::json!({
            "email": "nobody@mediatheque.example",
            "password": "motdepasse",
        }))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    Ok(())
}

#[sqlx::test(migrations = "../lending_db_client/migrations")]
async fn test_profile_requires_authentication(pool: SqlitePool) -> sqlx::Result<()> {
    let server = TestServer::new(create_full_app(pool)).unwrap();

    let response = server.get(paths::PROFILE).await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    // A token signed with another secret is rejected too
    let forged = lending_auth::token::JwtKeys::new("another_secret")
        .issue_access_token(1)
        .unwrap();
    let response = server
        .get(paths::PROFILE)
        .authorization_bearer(&forged)
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    Ok(())
}

#[sqlx::test(migrations = "../lending_db_client/migrations")]
async fn test_profile_round_trip(pool: SqlitePool) -> sqlx::Result<()> {
    let server = TestServer::new(create_full_app(pool.clone())).unwrap();
    let (user_id, token) = create_member_with_token(&pool, "claire@mediatheque.example").await;

    let response = server.get(paths::PROFILE).authorization_bearer(&token).await;
    response.assert_status_ok();
    let profile: UserProfile = response.json();
    assert_eq!(profile.id, user_id);
    assert_eq!(profile.email, "claire@mediatheque.example");

    let response = server
        .put(paths::PROFILE)
        .authorization_bearer(&token)
        .json(&serde_json::json!({
            "name": "Claire Deneuve",
            "email": "claire.deneuve@mediatheque.example",
        }))
        .await;
    response.assert_status_ok();
    let updated: UserProfile = response.json();
    assert_eq!(updated.name, "Claire Deneuve");
    assert_eq!(updated.email, "claire.deneuve@mediatheque.example");

    // The update is visible on the next read
    let response = server.get(paths::PROFILE).authorization_bearer(&token).await;
    let profile: UserProfile = response.json();
    assert_eq!(profile.name, "Claire Deneuve");
    Ok(())
}

#[sqlx::test(migrations = "../lending_db_client/migrations")]
async fn test_update_profile_validates_input(pool: SqlitePool) -> sqlx::Result<()> {
    let server = TestServer::new(create_full_app(pool.clone())).unwrap();
    let (_, token) = create_member_with_token(&pool, "claire@mediatheque.example").await;

    let response = server
        .put(paths::PROFILE)
        .authorization_bearer(&token)
        .json(&serde_json::json!({
            "name": "",
            "email": "claire@mediatheque.example",
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server
        .put(paths::PROFILE)
        .authorization_bearer(&token)
        .json(&serde_json::json!({
            "name": "Claire",
            "email": "not-an-email",
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    Ok(())
}
