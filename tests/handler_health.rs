mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::{Router, routing::get};
use axum_test::TestServer;
use camp_registration::api::handlers::health_handler;
use camp_registration::routes::app_router;
use common::{Behavior, Scenario};
use tower::ServiceExt;

fn server(scenario: Scenario) -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(common::create_test_state(scenario));

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_all_healthy_returns_200() {
    let response = server(Scenario::default()).get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "healthy");
    assert_eq!(json["checks"]["payments"]["status"], "healthy");
    assert_eq!(json["checks"]["email"]["status"], "healthy");
    assert_eq!(json["checks"]["system"]["status"], "healthy");
    assert_eq!(json["checks"]["system"]["uptime"], "1d 0h 0m");
}

#[tokio::test]
async fn test_response_structure() {
    let json = server(Scenario::default())
        .get("/health")
        .await
        .json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json["timestamp"].as_str().unwrap().ends_with('Z'));

    let checks = json["checks"].as_object().unwrap();
    assert_eq!(checks.len(), 4);
    for name in ["database", "payments", "email", "system"] {
        assert!(checks[name].get("responseTimeMs").is_some(), "{name}");
        assert!(checks[name].get("errorMessage").is_none(), "{name}");
    }
    assert!(checks["system"].get("memoryUsagePercent").is_some());
    assert!(checks["payments"]["providers"].get("stripe").is_some());
}

#[tokio::test]
async fn test_storage_failure_returns_503() {
    let response = server(Scenario {
        storage: Behavior::Failing,
        ..Scenario::default()
    })
    .get("/health")
    .await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "unhealthy");
    assert_eq!(json["checks"]["database"]["status"], "unhealthy");
    assert_eq!(
        json["checks"]["database"]["errorMessage"],
        "storage connectivity failed"
    );
}

#[tokio::test]
async fn test_payment_provider_timeout_is_degraded_200() {
    let response = server(Scenario {
        paypal: Behavior::Hanging,
        ..Scenario::default()
    })
    .get("/health")
    .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["payments"]["status"], "degraded");
    assert_eq!(
        json["checks"]["payments"]["errorMessage"],
        "some payment services unavailable"
    );
    assert_eq!(
        json["checks"]["payments"]["providers"]["paypal"]["errorMessage"],
        "paypal check timeout"
    );
    assert_eq!(json["checks"]["payments"]["providers"]["stripe"]["status"], "healthy");
}

#[tokio::test]
async fn test_missing_email_config_is_degraded_200() {
    let response = server(Scenario {
        email_configured: false,
        ..Scenario::default()
    })
    .get("/health")
    .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["email"]["status"], "degraded");
    assert_eq!(
        json["checks"]["email"]["errorMessage"],
        "email service not configured"
    );
}

#[tokio::test]
async fn test_memory_pressure_returns_503() {
    let response = server(Scenario {
        memory_percent: 97,
        ..Scenario::default()
    })
    .get("/health")
    .await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "unhealthy");
    assert_eq!(json["checks"]["system"]["status"], "unhealthy");
    assert_eq!(json["checks"]["system"]["memoryUsagePercent"], 97);
    assert_eq!(json["checks"]["database"]["status"], "healthy");
}

#[tokio::test]
async fn test_hanging_storage_answers_within_deadline() {
    let started = std::time::Instant::now();

    let response = server(Scenario {
        storage: Behavior::Hanging,
        stripe: Behavior::Hanging,
        paypal: Behavior::Hanging,
        ..Scenario::default()
    })
    .get("/health")
    .await;

    assert!(started.elapsed() < std::time::Duration::from_secs(2));
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["checks"]["database"]["errorMessage"], "database check timeout");
    assert_eq!(json["checks"]["payments"]["status"], "degraded");
}

#[tokio::test]
async fn test_concurrent_requests_are_independent() {
    let healthy = server(Scenario::default());
    let broken = server(Scenario {
        storage: Behavior::Failing,
        ..Scenario::default()
    });

    let (a, b, c) = tokio::join!(
        healthy.get("/health").into_future(),
        broken.get("/health").into_future(),
        healthy.get("/health").into_future(),
    );

    a.assert_status_ok();
    b.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    c.assert_status_ok();

    let a = a.json::<serde_json::Value>();
    let c = c.json::<serde_json::Value>();
    assert_eq!(a["status"], c["status"]);
    assert_eq!(a["checks"]["database"]["status"], "healthy");
}

#[tokio::test]
async fn test_app_router_serves_liveness_and_trailing_slash() {
    let app = app_router(common::create_test_state(Scenario {
        storage: Behavior::Failing,
        ..Scenario::default()
    }));

    let live = app
        .clone()
        .oneshot(Request::get("/health/live").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(live.status(), StatusCode::OK);

    let health = app
        .oneshot(Request::get("/health/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(health.status(), StatusCode::SERVICE_UNAVAILABLE);
}
