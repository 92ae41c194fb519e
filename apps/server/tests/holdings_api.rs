mod common;

use serde_json::json;

#[tokio::test]
async fn add_list_update_and_remove_holding() {
    let app = common::test_app(common::test_state());

    let (status, created) = common::send(
        &app,
        "POST",
        "/api/v1/holdings",
        Some(json!({ "tokenId": " Bitcoin ", "amount": 0.5, "purchasePrice": 40000.0 })),
    )
    .await;
    assert_eq!(status, 201);
    assert_eq!(created["token"]["id"], "bitcoin");
    assert_eq!(created["token"]["category"], "BTC");
    assert_eq!(created["value"], 25_000.0);
    assert_eq!(created["percentage"], 100.0);
    assert_eq!(created["roi"], 25.0);

    let (status, _) = common::send(
        &app,
        "POST",
        "/api/v1/holdings",
        Some(json!({ "tokenId": "usd-coin", "amount": 25000.0 })),
    )
    .await;
    assert_eq!(status, 201);

    let (status, list) = common::send(&app, "GET", "/api/v1/holdings", None).await;
    assert_eq!(status, 200);
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["percentage"], 50.0);
    assert_eq!(list[1]["token"]["category"], "STABLECOINS");
    assert!(list[1].get("roi").is_none());

    let (status, updated) = common::send(
        &app,
        "PUT",
        "/api/v1/holdings/bitcoin",
        Some(json!({ "amount": 1.5 })),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(updated["value"], 75_000.0);
    assert_eq!(updated["percentage"], 75.0);

    let (status, body) = common::send(&app, "DELETE", "/api/v1/holdings/bitcoin", None).await;
    assert_eq!(status, 204);
    assert!(body.is_null());

    let (_, list) = common::send(&app, "GET", "/api/v1/holdings", None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["percentage"], 100.0);
}

#[tokio::test]
async fn unknown_token_is_not_found() {
    let app = common::test_app(common::test_state());

    let (status, body) = common::send(
        &app,
        "POST",
        "/api/v1/holdings",
        Some(json!({ "tokenId": "unknown-token-xyz", "amount": 1.0 })),
    )
    .await;

    assert_eq!(status, 404);
    assert_eq!(body["code"], 404);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("Token 'unknown-token-xyz' not found"));
}

#[tokio::test]
async fn duplicate_holding_is_conflict() {
    let app = common::test_app(common::test_state());
    let new_holding = json!({ "tokenId": "ethereum", "amount": 2.0 });

    let (status, _) = common::send(&app, "POST", "/api/v1/holdings", Some(new_holding.clone())).await;
    assert_eq!(status, 201);
    let (status, body) = common::send(&app, "POST", "/api/v1/holdings", Some(new_holding)).await;

    assert_eq!(status, 409);
    assert_eq!(body["code"], 409);
}

#[tokio::test]
async fn negative_amount_is_bad_request() {
    let app = common::test_app(common::test_state());

    let (status, body) = common::send(
        &app,
        "POST",
        "/api/v1/holdings",
        Some(json!({ "tokenId": "ethereum", "amount": -1.0 })),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn missing_holding_update_and_delete_are_not_found() {
    let app = common::test_app(common::test_state());

    let (status, _) = common::send(
        &app,
        "PUT",
        "/api/v1/holdings/solana",
        Some(json!({ "amount": 3.0 })),
    )
    .await;
    assert_eq!(status, 404);

    let (status, _) = common::send(&app, "DELETE", "/api/v1/holdings/solana", None).await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn overrides_apply_and_refresh_reprices() {
    let app = common::test_app(common::test_state());

    let (status, created) = common::send(
        &app,
        "POST",
        "/api/v1/holdings",
        Some(json!({
            "tokenId": "uniswap",
            "amount": 100.0,
            "purchasePrice": 10.0,
            "currentPrice": 8.0,
            "category": "ETH_BLUECHIPS",
            "transactionLink": "https://etherscan.io/tx/0xabc"
        })),
    )
    .await;
    assert_eq!(status, 201);
    assert_eq!(created["token"]["category"], "ETH_BLUECHIPS");
    assert_eq!(created["value"], 800.0);
    assert_eq!(created["roi"], -20.0);
    assert_eq!(created["transactionLink"], "https://etherscan.io/tx/0xabc");

    let (status, body) =
        common::send(&app, "POST", "/api/v1/holdings/refresh-prices", None).await;
    assert_eq!(status, 200);
    assert_eq!(body["updated"], 1);

    let (_, list) = common::send(&app, "GET", "/api/v1/holdings", None).await;
    assert_eq!(list[0]["token"]["currentPrice"], 20.0);
    assert_eq!(list[0]["value"], 2000.0);
    assert_eq!(list[0]["roi"], 100.0);
}
