//! Quote API end to end, through the client SDK.

use sdk_rust::{EstimatorClient, QuoteRequest};

mod common;

#[tokio::test]
async fn test_health() {
    let (url, _shutdown) = common::start_estimator().await;
    let client = EstimatorClient::new(&url);

    let resp = client.health().await.unwrap();
    assert_eq!(resp.status(), 200);
    assert!(resp.headers().contains_key("x-request-id"));
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_catalog_groups() {
    let (url, _shutdown) = common::start_estimator().await;
    let client = EstimatorClient::new(&url);

    let catalog = client.catalog("website").await.unwrap();
    assert_eq!(catalog["form"], "website");
    let groups = catalog["groups"].as_array().unwrap();
    let names: Vec<_> = groups.iter().map(|g| g["category"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Website Size", "Timeline", "Features", "Marketing"]);
    assert_eq!(groups[0]["options"][2]["id"], "medium-website");
    assert_eq!(groups[0]["options"][2]["amount"]["value"], 1400);

    assert!(client.catalog("video").await.is_err());
}

#[tokio::test]
async fn test_website_quote() {
    let (url, _shutdown) = common::start_estimator().await;
    let client = EstimatorClient::new(&url);

    let quote = client
        .quote(
            "website",
            &QuoteRequest {
                base: Some("medium-website".into()),
                timeline: Some("priority-delivery".into()),
                addons: vec!["advanced-seo".into()],
            },
        )
        .await
        .unwrap();

    assert_eq!(quote.form, "website");
    assert_eq!(quote.quote.total, 2_560);
    assert_eq!(quote.quote.timeline_multiplier, 1.4);
    assert_eq!(quote.display_total, "$2,560");
    assert_eq!(quote.total_field, "2560");
    assert_eq!(quote.phase, "quoted");
    let keys: Vec<_> = quote.breakdown.iter().map(|b| b["key"].as_str().unwrap()).collect();
    assert_eq!(keys, vec!["website-core", "website-priority", "website-advanced-seo"]);
}

#[tokio::test]
async fn test_design_and_photo_quotes() {
    let (url, _shutdown) = common::start_estimator().await;
    let client = EstimatorClient::new(&url);

    let design = client
        .quote(
            "design",
            &QuoteRequest {
                timeline: Some("express-delivery".into()),
                addons: vec!["logo-design".into(), "business-cards".into()],
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(design.quote.total, 1_440);
    assert_eq!(design.quote.addon_total, 0);

    let photo = client
        .quote(
            "photo",
            &QuoteRequest {
                base: Some("product-photography".into()),
                addons: vec!["studio-half-day".into()],
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(photo.quote.total, 950);
    assert_eq!(photo.quote.timeline_multiplier, 1.0);
}

#[tokio::test]
async fn test_empty_selection_is_idle() {
    let (url, _shutdown) = common::start_estimator().await;
    let client = EstimatorClient::new(&url);

    let quote = client
        .quote(
            "website",
            &QuoteRequest {
                timeline: Some("rush-delivery".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(quote.quote.total, 0);
    assert_eq!(quote.display_total, "$0");
    assert_eq!(quote.phase, "idle");
    assert!(quote.breakdown.is_empty());
}

#[tokio::test]
async fn test_error_statuses() {
    let (url, _shutdown) = common::start_estimator().await;
    let client = EstimatorClient::new(&url);

    let resp = client.post_quote("video", &QuoteRequest::default()).await.unwrap();
    assert_eq!(resp.status(), 404);

    let resp = client
        .post_quote(
            "design",
            &QuoteRequest {
                base: Some("logo-design".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), 422);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(
        body["error"],
        "option `logo-design` is not a base option of the design form"
    );
}
