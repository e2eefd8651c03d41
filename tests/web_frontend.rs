mod common;

use common::{dead_url, info, spawn};
use payment_workflow::clients::mock::{MockFraudGateway, MockTicketManager};
use payment_workflow::decision::ScriptedDecisionSource;
use payment_workflow::http::routes::{auth_router, frontend_router, payment_router};
use payment_workflow::service::auth_service::AuthService;
use payment_workflow::service::frontend::FrontendService;
use payment_workflow::service::payment_service::PaymentService;
use payment_workflow::service::session::SessionStore;
use reqwest::header::{COOKIE, SET_COOKIE};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

async fn auth_upstream(auth_failure: Option<&str>) -> String {
    spawn(auth_router(
        AuthService {
            decisions: Arc::new(ScriptedDecisionSource {
                auth_failure: auth_failure.map(str::to_string),
                ..ScriptedDecisionSource::default()
            }),
        },
        info("auth-service"),
    ))
    .await
}

async fn payment_upstream(decisions: ScriptedDecisionSource) -> String {
    spawn(payment_router(
        PaymentService {
            tickets: Arc::new(MockTicketManager::succeeding()),
            fraud: Arc::new(MockFraudGateway::verdict(false)),
            decisions: Arc::new(decisions),
        },
        info("payment-service"),
    ))
    .await
}

async fn frontend(auth_url: String, payment_url: String, sessions: SessionStore) -> String {
    spawn(frontend_router(
        FrontendService::new(auth_url, payment_url, Duration::from_secs(5), sessions),
        info("web-frontend"),
    ))
    .await
}

async fn login(base: &str) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("{base}/api/login"))
        .json(&json!({"username": "alice", "password": "pw"}))
        .send()
        .await
        .unwrap()
}

async fn pay(base: &str, cookie: Option<&str>) -> reqwest::Response {
    let mut req = reqwest::Client::new()
        .post(format!("{base}/api/pay"))
        .json(&json!({"bank_id": "citi", "amount": 75.25}));
    if let Some(cookie) = cookie {
        req = req.header(COOKIE, cookie);
    }
    req.send().await.unwrap()
}

/// `name=value` part of the Set-Cookie header.
fn cookie_pair(resp: &reqwest::Response) -> String {
    let raw = resp.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
    raw.split(';').next().unwrap().to_string()
}

#[tokio::test]
async fn login_then_pay_relays_settlement() {
    let sessions = SessionStore::new();
    let base = frontend(
        auth_upstream(None).await,
        payment_upstream(ScriptedDecisionSource::settle()).await,
        sessions.clone(),
    )
    .await;

    let resp = login(&base).await;
    assert_eq!(resp.status().as_u16(), 200);
    let cookie = cookie_pair(&resp);
    assert!(cookie.starts_with("session_id="));
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["customer_id"], "cust_2bd806c97f");
    assert_eq!(sessions.active_count(), 1);

    let resp = pay(&base, Some(&cookie)).await;
    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "settled");
    assert_eq!(body["bank_name"], "Citibank");
}

#[tokio::test]
async fn rejected_login_is_relayed_without_session() {
    let sessions = SessionStore::new();
    let base = frontend(
        auth_upstream(Some("Account locked")).await,
        dead_url().await,
        sessions.clone(),
    )
    .await;

    let resp = login(&base).await;
    assert_eq!(resp.status().as_u16(), 401);
    assert!(resp.headers().get(SET_COOKIE).is_none());
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["reason"], "Account locked");
    assert_eq!(sessions.active_count(), 0);
}

#[tokio::test]
async fn pay_without_session_is_401() {
    let base = frontend(dead_url().await, dead_url().await, SessionStore::new()).await;

    for cookie in [None, Some("session_id=unknown")] {
        let resp = pay(&base, cookie).await;
        assert_eq!(resp.status().as_u16(), 401);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["error"], "not_authenticated");
    }
}

#[tokio::test]
async fn payment_failure_status_is_relayed() {
    let sessions = SessionStore::new();
    let sid = sessions.create("cust_1");
    let base = frontend(
        dead_url().await,
        payment_upstream(ScriptedDecisionSource::decline("Card expired")).await,
        sessions,
    )
    .await;

    let resp = pay(&base, Some(&format!("session_id={sid}"))).await;
    assert_eq!(resp.status().as_u16(), 502);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "payment_failed");
    assert_eq!(body["reason"], "Card expired");
}

#[tokio::test]
async fn unreachable_upstreams_map_to_labelled_502() {
    let sessions = SessionStore::new();
    let sid = sessions.create("cust_1");
    let base = frontend(dead_url().await, dead_url().await, sessions).await;

    let resp = login(&base).await;
    assert_eq!(resp.status().as_u16(), 502);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "auth_upstream_error");

    let resp = pay(&base, Some(&format!("session_id={sid}"))).await;
    assert_eq!(resp.status().as_u16(), 502);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "payment_upstream_error");
}

#[tokio::test]
async fn frontend_serves_bank_list() {
    let base = frontend(dead_url().await, dead_url().await, SessionStore::new()).await;

    let body: Value = reqwest::get(format!("{base}/api/banks")).await.unwrap().json().await.unwrap();
    assert_eq!(body["banks"].as_array().unwrap().len(), 6);
}
