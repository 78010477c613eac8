use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use rstest::{fixture, rstest};
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

use crate::modules::employees::adapters::outbound::employee_repository_in_memory::InMemoryEmployeeRepository;
use crate::modules::employees::use_cases::get_employee_by_id::handler::GetEmployeeByIdHandler;
use crate::shell::build_state;
use crate::shell::config::AppConfig;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::employees::make_ada;

#[fixture]
fn app() -> Router {
    let repository = InMemoryEmployeeRepository::with_employees([make_ada()]);
    router(AppState {
        get_employee_by_id: Arc::new(GetEmployeeByIdHandler::new(
            Arc::new(repository),
            Duration::from_millis(200),
        )),
    })
}

async fn get(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = router
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, json)
}

#[rstest]
#[tokio::test]
async fn it_should_return_the_stored_employee_wrapped_in_the_envelope(app: Router) {
    let (status, json) = get(app, "/rest/api/employee/list/11").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({
            "status": "OK",
            "data": { "id": 11, "name": "Ada", "department": { "id": 1, "name": "Engineering" } },
            "errorMessage": null
        })
    );
}

#[rstest]
#[tokio::test]
async fn it_should_return_a_not_found_envelope_naming_the_missing_id(app: Router) {
    let (status, json) = get(app, "/rest/api/employee/list/99").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["status"], "ERROR");
    assert_eq!(json["data"], serde_json::Value::Null);
    let message = json["errorMessage"].as_str().unwrap();
    assert!(message.contains("1001"));
    assert!(message.contains("99"));
}

#[rstest]
#[tokio::test]
async fn it_should_answer_health_checks(app: Router) {
    let (status, body) = get(app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("ok"));
}

#[rstest]
#[tokio::test]
async fn it_should_404_on_unknown_routes(app: Router) {
    let (status, _) = get(app, "/rest/api/employee/11").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test]
async fn it_should_serve_the_bundled_seed() {
    let config = AppConfig {
        employee_seed_path: PathBuf::from("data/employees.json"),
        ..AppConfig::from_lookup(|_| None).unwrap()
    };
    let state = build_state(&config).await.expect("build_state failed");

    let (status, json) = get(router(state.clone()), "/rest/api/employee/list/21").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["name"], "Katherine");
    assert_eq!(json["data"]["department"]["name"], "Research");

    let (status, _) = get(router(state), "/rest/api/employee/list/11").await;
    assert_eq!(status, StatusCode::OK);
}

#[rstest]
#[tokio::test]
async fn it_should_answer_1001_for_every_id_when_the_seed_is_missing() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        employee_seed_path: dir.path().join("employees.json"),
        ..AppConfig::from_lookup(|_| None).unwrap()
    };
    let state = build_state(&config).await.expect("build_state failed");

    let (status, json) = get(router(state), "/rest/api/employee/list/11").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["errorMessage"], "[1001] Record Not Found : 11");
}
