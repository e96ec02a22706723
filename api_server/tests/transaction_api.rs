// =====================================================
// Transaction / Asset API 통합 테스트 (HTTP)
// =====================================================

mod common;
use common::*;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

fn buy_body() -> serde_json::Value {
    json!({ "symbol": "aapl", "name": "Apple Inc.", "quantity": "2", "price": "150.25" })
}

/// 테스트: 매수 → 200, 지갑 차감, 조회 가능
#[tokio::test]
async fn test_buy_then_read_back() {
    let ctx = setup_test();
    fund_wallet(&ctx, "1000").await;

    let (status, created) =
        send(&ctx, Method::POST, "/api/transactions/buy", Some(buy_body())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["type"], "buy");
    assert_eq!(created["symbol"], "AAPL");
    assert_eq!(created["name"], "Apple Inc.");
    assert_eq!(dec(&created["totalAmount"]), d("300.5"));

    let id = created["id"].as_u64().unwrap();
    let asset_id = created["assetId"].as_u64().unwrap();

    let (status, fetched) = send(&ctx, Method::GET, &format!("/api/transactions/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (_, all) = send(&ctx, Method::GET, "/api/transactions", None).await;
    assert_eq!(all.as_array().unwrap().len(), 1);

    let (_, by_asset) =
        send(&ctx, Method::GET, &format!("/api/transactions/asset/{asset_id}"), None).await;
    assert_eq!(by_asset.as_array().unwrap().len(), 1);

    let (_, by_symbol) = send(&ctx, Method::GET, "/api/transactions/symbol/aapl", None).await;
    assert_eq!(by_symbol.as_array().unwrap().len(), 1);

    let (_, wallet) = send(&ctx, Method::GET, "/api/wallet", None).await;
    assert_eq!(dec(&wallet["balance"]), d("699.5"));
}

/// 테스트: 매수 필수 필드 누락 → 400 + 필드명
#[tokio::test]
async fn test_buy_missing_field_names_the_field() {
    let ctx = setup_test();
    fund_wallet(&ctx, "1000").await;

    for field in ["symbol", "name", "quantity", "price"] {
        let mut body = buy_body();
        body.as_object_mut().unwrap().remove(field);

        let (status, response) = send(&ctx, Method::POST, "/api/transactions/buy", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["error"], format!("Missing required field: {field}"));
    }
}

/// 테스트: 숫자 형식 오류 → 400
#[tokio::test]
async fn test_buy_with_bad_number_is_bad_request() {
    let ctx = setup_test();
    fund_wallet(&ctx, "1000").await;

    let body = json!({ "symbol": "AAPL", "name": "Apple", "quantity": "two", "price": "1" });
    let (status, response) = send(&ctx, Method::POST, "/api/transactions/buy", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(response["error"].as_str().unwrap().starts_with("Invalid request body"));
}

/// 테스트: 잔액 부족 매수 → 400, 기록 없음
#[tokio::test]
async fn test_buy_without_funds_is_bad_request() {
    let ctx = setup_test();
    fund_wallet(&ctx, "100").await;

    let (status, response) =
        send(&ctx, Method::POST, "/api/transactions/buy", Some(buy_body())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(response["error"].as_str().unwrap().contains("Insufficient wallet balance"));

    let (_, all) = send(&ctx, Method::GET, "/api/transactions", None).await;
    assert_eq!(all, json!([]));
}

/// 테스트: 매도 (name 없이) → 200, 지갑 입금
#[tokio::test]
async fn test_sell_credits_wallet() {
    let ctx = setup_test();

    let body = json!({ "symbol": "MSFT", "quantity": 3, "price": 410.5 });
    let (status, created) = send(&ctx, Method::POST, "/api/transactions/sell", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["type"], "sell");

    let (_, wallet) = send(&ctx, Method::GET, "/api/wallet", None).await;
    assert_eq!(dec(&wallet["balance"]), d("1231.5"));
}

/// 테스트: 일반 거래 생성
#[tokio::test]
async fn test_create_transaction_for_existing_asset() {
    let ctx = setup_test();
    fund_wallet(&ctx, "1000").await;
    let (_, bought) = send(&ctx, Method::POST, "/api/transactions/buy", Some(buy_body())).await;

    let body = json!({ "assetId": bought["assetId"], "type": "sell", "quantity": "1", "price": "160" });
    let (status, created) = send(&ctx, Method::POST, "/api/transactions", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["type"], "sell");
    assert_eq!(created["symbol"], "AAPL");

    let body = json!({ "assetId": 999, "type": "buy", "quantity": "1", "price": "1" });
    let (status, _) = send(&ctx, Method::POST, "/api/transactions", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let body = json!({ "assetId": bought["assetId"], "quantity": "1", "price": "1" });
    let (status, response) = send(&ctx, Method::POST, "/api/transactions", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "Missing required field: type");
}

/// 테스트: 존재하지 않는 거래 조회 → 404
#[tokio::test]
async fn test_unknown_transaction_is_not_found() {
    let ctx = setup_test();

    let (status, body) = send(&ctx, Method::GET, "/api/transactions/77", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

/// 테스트: 삭제는 항상 204
#[tokio::test]
async fn test_delete_is_always_no_content() {
    let ctx = setup_test();
    fund_wallet(&ctx, "1000").await;
    let (_, bought) = send(&ctx, Method::POST, "/api/transactions/buy", Some(buy_body())).await;
    let id = bought["id"].as_u64().unwrap();

    let (status, _) = send(&ctx, Method::DELETE, &format!("/api/transactions/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&ctx, Method::DELETE, &format!("/api/transactions/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&ctx, Method::GET, &format!("/api/transactions/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// 테스트: 자산 목록 / 조회
#[tokio::test]
async fn test_assets_are_registered_by_trades() {
    let ctx = setup_test();
    fund_wallet(&ctx, "1000").await;
    send(&ctx, Method::POST, "/api/transactions/buy", Some(buy_body())).await;
    send(
        &ctx,
        Method::POST,
        "/api/transactions/sell",
        Some(json!({ "symbol": "GOOG", "quantity": 1, "price": 1 })),
    )
    .await;

    let (status, assets) = send(&ctx, Method::GET, "/api/assets", None).await;
    assert_eq!(status, StatusCode::OK);
    let symbols: Vec<_> = assets
        .as_array()
        .unwrap()
        .iter()
        .map(|asset| asset["symbol"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(symbols, ["AAPL", "GOOG"]);

    let id = assets[0]["id"].as_u64().unwrap();
    let (status, asset) = send(&ctx, Method::GET, &format!("/api/assets/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(asset["name"], "Apple Inc.");

    let (status, _) = send(&ctx, Method::GET, "/api/assets/404", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// 테스트: 모든 출처에서 CORS 허용
#[tokio::test]
async fn test_cors_allows_any_origin() {
    let ctx = setup_test();

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/transactions")
        .header(header::ORIGIN, "http://example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = app(&ctx).oneshot(request).await.unwrap();

    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

/// 테스트: quantity × price가 Decimal 범위를 넘으면 400 (매수/매도)
#[tokio::test]
async fn test_oversized_amounts_are_bad_request() {
    let ctx = setup_test();
    fund_wallet(&ctx, "1000").await;
    let huge = "79228162514264337593543950335";

    let body = json!({ "symbol": "AAPL", "name": "Apple", "quantity": huge, "price": "2" });
    let (status, response) = send(&ctx, Method::POST, "/api/transactions/buy", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "Amount too large");

    let body = json!({ "symbol": "AAPL", "quantity": huge, "price": "2" });
    let (status, response) = send(&ctx, Method::POST, "/api/transactions/sell", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "Amount too large");

    let (_, all) = send(&ctx, Method::GET, "/api/transactions", None).await;
    assert_eq!(all, json!([]));
    let (_, wallet) = send(&ctx, Method::GET, "/api/wallet", None).await;
    assert_eq!(dec(&wallet["balance"]), d("1000"));
}

/// 테스트: 매도 대금 입금 후 잔액이 범위를 넘으면 400
#[tokio::test]
async fn test_sell_that_would_overflow_the_wallet_is_rejected() {
    let ctx = setup_test();
    fund_wallet(&ctx, "79228162514264337593543950335").await;

    let body = json!({ "symbol": "AAPL", "quantity": "1", "price": "1" });
    let (status, response) = send(&ctx, Method::POST, "/api/transactions/sell", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "Amount too large");
    assert_eq!(ctx.store.transaction_count(), 0);
}

/// 테스트: assetId는 숫자 문자열도 허용
#[tokio::test]
async fn test_create_transaction_accepts_string_asset_id() {
    let ctx = setup_test();
    fund_wallet(&ctx, "1000").await;
    let (_, bought) = send(&ctx, Method::POST, "/api/transactions/buy", Some(buy_body())).await;
    let asset_id = bought["assetId"].as_u64().unwrap().to_string();

    let body = json!({ "assetId": asset_id, "type": "buy", "quantity": "1", "price": "2" });
    let (status, created) = send(&ctx, Method::POST, "/api/transactions", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["assetId"], bought["assetId"]);
    assert_eq!(dec(&created["totalAmount"]), d("2"));

    let body = json!({ "assetId": "one", "type": "buy", "quantity": "1", "price": "2" });
    let (status, response) = send(&ctx, Method::POST, "/api/transactions", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(response["error"].as_str().unwrap().starts_with("Invalid request body"));
}
