use axum_test::TestServer;
use lending_db_client::paths;
use lending_service::api::health::{HealthResponse, router};

#[tokio::test]
async fn test_health_endpoint() {
    let server = TestServer::new(router()).unwrap();

    let response = server.get(paths::HEALTH).await;
    response.assert_status_ok();

    let body: HealthResponse = response.json();
    assert_eq!(body.status, "healthy");
    assert_eq!(body.service, "lending");
    assert!(body.timestamp.timestamp() > 0);
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let server = TestServer::new(router()).unwrap();

    let response = server.get(paths::HEALTH).await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();

    assert!(body.get("status").is_some());
    assert!(body.get("service").is_some());
    assert!(body.get("timestamp").is_some());

    assert!(body["status"].is_string());
    assert!(body["service"].is_string());
    assert!(body["timestamp"].is_string());
}
