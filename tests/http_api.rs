use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use payment_workflow::clients::mock::{MockBehavior, MockFraudGateway, MockTicketManager};
use payment_workflow::decision::ScriptedDecisionSource;
use payment_workflow::domain::context::{parse_traceparent, TRACEPARENT};
use payment_workflow::domain::payment::SUSPECTED_FRAUD_REASON;
use payment_workflow::http::routes::{auth_router, fraud_router, payment_router, ticket_router};
use payment_workflow::service::auth_service::AuthService;
use payment_workflow::service::fraud_service::FraudService;
use payment_workflow::service::payment_service::PaymentService;
use payment_workflow::telemetry::ServiceInfo;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

#[tokio::test]
async fn pay_settles_with_200() {
    let app = payments(ScriptedDecisionSource::settle(), MockFraudGateway::verdict(false));

    let (status, body) = post(app, "/pay", json!({"customer_id": "cust_1", "bank_id": "bank_x", "amount": 100})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert_eq!(body["status"], "settled");
    assert_eq!(body["bank_id"], "bank_x");
    assert_eq!(body["bank_name"], "bank_x");
    assert!(body["payment_id"].as_str().is_some());
}

#[tokio::test]
async fn fraud_failure_returns_502_with_payment_id() {
    let app = payments(
        ScriptedDecisionSource::escalate_with_verdict(false),
        MockFraudGateway::failing(MockBehavior::Unreachable),
    );

    let (status, body) = post(app, "/pay", json!({"customer_id": "cust_1", "bank_id": "citi", "amount": 10.5})).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "payment_failed");
    assert_eq!(body["reason"], SUSPECTED_FRAUD_REASON);
    assert!(body["payment_id"].as_str().is_some());
}

#[tokio::test]
async fn invalid_amount_is_400() {
    let app = payments(ScriptedDecisionSource::settle(), MockFraudGateway::verdict(false));

    let (status, body) = post(app, "/pay", json!({"customer_id": "cust_1", "bank_id": "citi", "amount": 0})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_request");
}

#[tokio::test]
async fn malformed_body_never_reaches_orchestrator() {
    let app = payments(ScriptedDecisionSource::settle(), MockFraudGateway::verdict(false));

    let resp = app
        .oneshot(
            Request::post("/pay")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"customer_id": "cust_1"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(resp.status().is_client_error());
}

#[tokio::test]
async fn banks_are_listed() {
    let app = payments(ScriptedDecisionSource::settle(), MockFraudGateway::verdict(false));

    let resp = app
        .oneshot(Request::get("/banks").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    let banks = body["banks"].as_array().unwrap();
    assert!(banks.iter().any(|b| b["id"] == "citi" && b["name"] == "Citibank"));
}

#[tokio::test]
async fn inbound_traceparent_is_continued() {
    let app = payments(ScriptedDecisionSource::settle(), MockFraudGateway::verdict(false));
    let inbound = "00-4bf92f3577b34da6a3ce929d0e0e4736-00f067aa0ba902b7-01";

    let resp = app
        .oneshot(
            Request::get("/health")
                .header(TRACEPARENT, inbound)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let echoed = resp.headers().get(TRACEPARENT).unwrap().to_str().unwrap();
    assert_eq!(parse_traceparent(echoed), Some("4bf92f3577b34da6a3ce929d0e0e4736"));
    assert_ne!(echoed, inbound);
}

#[tokio::test]
async fn requests_without_traceparent_get_distinct_traces() {
    let app = payments(ScriptedDecisionSource::settle(), MockFraudGateway::verdict(false));

    let mut traces = Vec::new();
    for _ in 0..2 {
        let resp = app
            .clone()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let header = resp.headers().get(TRACEPARENT).unwrap().to_str().unwrap().to_string();
        traces.push(parse_traceparent(&header).unwrap().to_string());
    }
    assert_ne!(traces[0], traces[1]);
}

#[tokio::test]
async fn fraud_check_endpoint_returns_verdict() {
    let tickets = Arc::new(MockTicketManager::new(MockBehavior::Succeed, MockBehavior::Unreachable));
    let app = fraud_router(
        FraudService {
            decisions: Arc::new(ScriptedDecisionSource::escalate_with_verdict(true)),
            tickets: tickets.clone(),
        },
        info(),
    );

    let (status, body) = post(
        app,
        "/check",
        json!({
            "trace_id": "4bf92f3577b34da6a3ce929d0e0e4736",
            "payment_id": uuid::Uuid::new_v4(),
            "customer_id": "cust_1",
            "bank_id": "citi",
            "amount": 100,
            "issue_key": "PER-7"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fraudulent"], true);
    assert_eq!(body["comment"], "Confirmed fraudulent activity. Please escalate to Product Team");
    assert_eq!(tickets.calls().len(), 1);
}

#[tokio::test]
async fn ticket_endpoints_map_error_taxonomy() {
    let missing = ticket_router(
        Arc::new(MockTicketManager::new(MockBehavior::ConfigMissing, MockBehavior::Reject)),
        info(),
    );
    let create = json!({
        "trace_id": "t",
        "payment_id": uuid::Uuid::new_v4(),
        "customer_id": "cust_1",
        "bank_id": "citi",
        "amount": 100,
        "reason": SUSPECTED_FRAUD_REASON
    });

    let (status, body) = post(missing.clone(), "/jira/create_suspected_fraud", create.clone()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "config_missing");

    let (status, _) = post(missing, "/jira/comment", json!({"issue_key": "PER-1", "comment": "x"})).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);

    let ok = ticket_router(Arc::new(MockTicketManager::succeeding()), info());
    let (status, body) = post(ok.clone(), "/jira/create_suspected_fraud", create).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["issue_key"], "PER-1");

    let (status, body) = post(ok, "/jira/comment", json!({"issue_key": "PER-1", "comment": "x"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
}

#[tokio::test]
async fn login_outcomes() {
    let accept = auth_router(
        AuthService {
            decisions: Arc::new(ScriptedDecisionSource::settle()),
        },
        info(),
    );
    let (status, body) = post(accept, "/auth/login", json!({"username": "alice", "password": "pw"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["customer_id"], "cust_2bd806c97f");

    let reject = auth_router(
        AuthService {
            decisions: Arc::new(ScriptedDecisionSource {
                auth_failure: Some("Incorrect password".to_string()),
                ..ScriptedDecisionSource::default()
            }),
        },
        info(),
    );
    let (status, body) = post(reject, "/auth/login", json!({"username": "alice", "password": "pw"})).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "auth_error");
    assert_eq!(body["reason"], "Incorrect password");
    assert_eq!(body["customer_id"], "cust_2bd806c97f");
}

fn info() -> ServiceInfo {
    ServiceInfo {
        service: "test".to_string(),
        env: "test".to_string(),
        version: "0.0.0".to_string(),
    }
}

fn payments(decisions: ScriptedDecisionSource, fraud: MockFraudGateway) -> Router {
    payment_router(
        PaymentService {
            tickets: Arc::new(MockTicketManager::succeeding()),
            fraud: Arc::new(fraud),
            decisions: Arc::new(decisions),
        },
        info(),
    )
}

async fn post(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let resp = app
        .oneshot(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = resp.status();
    (status, read_json(resp).await)
}

async fn read_json(resp: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
