// =====================================================
// 통합 테스트 공통 헬퍼
// =====================================================
// 목적: 모든 통합 테스트에서 공통으로 사용하는 셋업 함수 제공
//
// 사용법:
// ```rust
// mod common;
// use common::*;
//
// #[tokio::test]
// async fn test_something() {
//     let ctx = setup_test();
//     let (status, body) = send(&ctx, Method::GET, "/api/wallet", None).await;
// }
// ```
//
// PostgreSQL 없이 InMemoryStore로 모든 저장소를 대체합니다.
// =====================================================
#![allow(dead_code)]

use std::str::FromStr;
use std::sync::Arc;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use rust_decimal::Decimal;
use serde_json::Value;
use tower::ServiceExt;
use portfolio_api::routes::{create_app, create_router};
use portfolio_api::shared::database::InMemoryStore;
use portfolio_api::shared::services::AppState;

pub struct TestContext {
    pub store: Arc<InMemoryStore>,
    pub state: AppState,
}

/// 테스트 전 초기화
///
/// 빈 메모리 저장소와 그 위의 AppState를 생성합니다.
pub fn setup_test() -> TestContext {
    let store = Arc::new(InMemoryStore::new());
    let state = AppState::with_repositories(store.clone(), store.clone(), store.clone());
    TestContext { store, state }
}

/// 실제 라우터 (CORS / Trace 레이어 포함)
pub fn app(ctx: &TestContext) -> Router {
    create_app(create_router(), ctx.state.clone())
}

/// 요청 한 번 보내고 (상태 코드, JSON 본문) 반환
/// 본문이 비었거나 JSON이 아니면 Value::Null
pub async fn send(
    ctx: &TestContext,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    send_request(ctx, request).await
}

/// 원본 문자열 본문 전송 (잘못된 JSON 테스트용)
pub async fn send_raw(ctx: &TestContext, method: Method, uri: &str, raw: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(raw.to_string()))
        .unwrap();

    send_request(ctx, request).await
}

async fn send_request(ctx: &TestContext, request: Request<Body>) -> (StatusCode, Value) {
    let response = app(ctx).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

/// JSON 값(문자열 또는 숫자)을 Decimal로 변환
pub fn dec(value: &Value) -> Decimal {
    match value {
        Value::String(s) => Decimal::from_str(s).unwrap(),
        Value::Number(n) => Decimal::from_str(&n.to_string()).unwrap(),
        other => panic!("expected a decimal, got {other}"),
    }
}

pub fn d(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// 지갑에 초기 잔액 입금
pub async fn fund_wallet(ctx: &TestContext, amount: &str) {
    ctx.state
        .wallet_state
        .wallet_service
        .deposit(d(amount))
        .await
        .unwrap();
}
