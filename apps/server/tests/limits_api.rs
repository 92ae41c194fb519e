mod common;

use serde_json::{json, Value};

fn band(category: &str, min: f64, max: f64) -> Value {
    json!({ "category": category, "minPercentage": min, "maxPercentage": max, "enabled": true })
}

fn profile(min: f64, max: f64) -> Value {
    json!([
        band("BTC", min, max),
        band("ETH_BLUECHIPS", min, max),
        band("STABLECOINS", min, max),
        band("DEFI_ALTCOINS", min, max),
    ])
}

#[tokio::test]
async fn lists_builtin_presets() {
    let app = common::test_app(common::test_state());

    let (status, presets) = common::send(&app, "GET", "/api/v1/limits/presets", None).await;

    assert_eq!(status, 200);
    let ids: Vec<&str> = presets
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(
        ids,
        vec!["conservative", "balanced", "aggressive", "defi-focused", "stable-focused"]
    );
}

#[tokio::test]
async fn matches_preset_by_dominance() {
    let app = common::test_app(common::test_state());

    let (_, preset) = common::send(
        &app,
        "GET",
        "/api/v1/limits/presets/match?btcDominance=55",
        None,
    )
    .await;
    assert_eq!(preset["id"], "conservative");

    let (_, preset) = common::send(
        &app,
        "GET",
        "/api/v1/limits/presets/match?btcDominance=45",
        None,
    )
    .await;
    assert_eq!(preset["id"], "balanced");

    // Fallback snapshot dominance is 52.5
    let (status, preset) =
        common::send(&app, "GET", "/api/v1/limits/presets/match", None).await;
    assert_eq!(status, 200);
    assert_eq!(preset["id"], "conservative");
}

#[tokio::test]
async fn validates_limit_profiles() {
    let app = common::test_app(common::test_state());

    let (status, body) = common::send(
        &app,
        "POST",
        "/api/v1/limits/validate",
        Some(profile(20.0, 30.0)),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["valid"], true);
    assert!(body["errors"].as_array().unwrap().is_empty());

    let (status, body) = common::send(
        &app,
        "POST",
        "/api/v1/limits/validate",
        Some(profile(30.0, 40.0)),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["valid"], false);
    assert_eq!(body["errors"].as_array().unwrap().len(), 1);

    let (_, body) = common::send(
        &app,
        "POST",
        "/api/v1/limits/validate",
        Some(profile(10.0, 20.0)),
    )
    .await;
    assert_eq!(body["valid"], false);
}

#[tokio::test]
async fn creates_and_lists_custom_presets() {
    let app = common::test_app(common::test_state());

    let (status, preset) = common::send(
        &app,
        "POST",
        "/api/v1/limits/presets/custom",
        Some(json!({
            "name": "  Mine ",
            "description": "My own bands",
            "allocation": { "BTC": 25.0, "ETH_BLUECHIPS": 25.0, "STABLECOINS": 25.0, "DEFI_ALTCOINS": 25.0 },
            "categoryLimits": profile(15.0, 35.0)
        })),
    )
    .await;
    assert_eq!(status, 201);
    assert_eq!(preset["name"], "Mine");
    assert!(preset["id"].as_str().unwrap().starts_with("custom-"));
    assert_eq!(preset["btcDominanceRange"]["min"], 0.0);
    assert_eq!(preset["btcDominanceRange"]["max"], 100.0);

    let (_, presets) = common::send(&app, "GET", "/api/v1/limits/presets", None).await;
    let presets = presets.as_array().unwrap();
    assert_eq!(presets.len(), 6);
    assert_eq!(presets[5]["name"], "Mine");
}

#[tokio::test]
async fn custom_presets_get_unique_ids() {
    let app = common::test_app(common::test_state());
    let mut ids = Vec::new();

    for name in ["First", "Second", "Third"] {
        let (status, preset) = common::send(
            &app,
            "POST",
            "/api/v1/limits/presets/custom",
            Some(json!({
                "name": name,
                "allocation": { "BTC": 25.0, "ETH_BLUECHIPS": 25.0, "STABLECOINS": 25.0, "DEFI_ALTCOINS": 25.0 },
                "categoryLimits": profile(15.0, 35.0)
            })),
        )
        .await;
        assert_eq!(status, 201);
        ids.push(preset["id"].as_str().unwrap().to_string());
    }

    assert_ne!(ids[0], ids[1]);
    assert_ne!(ids[1], ids[2]);
    assert_ne!(ids[0], ids[2]);
}

#[tokio::test]
async fn rejects_invalid_custom_presets() {
    let app = common::test_app(common::test_state());
    let allocation = json!({ "BTC": 25.0, "ETH_BLUECHIPS": 25.0, "STABLECOINS": 25.0, "DEFI_ALTCOINS": 25.0 });

    let (status, body) = common::send(
        &app,
        "POST",
        "/api/v1/limits/presets/custom",
        Some(json!({ "name": " ", "allocation": allocation, "categoryLimits": profile(20.0, 30.0) })),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["code"], 400);

    let (status, _) = common::send(
        &app,
        "POST",
        "/api/v1/limits/presets/custom",
        Some(json!({ "name": "Broken", "allocation": allocation, "categoryLimits": profile(40.0, 50.0) })),
    )
    .await;
    assert_eq!(status, 400);

    let (_, presets) = common::send(&app, "GET", "/api/v1/limits/presets", None).await;
    assert_eq!(presets.as_array().unwrap().len(), 5);
}
