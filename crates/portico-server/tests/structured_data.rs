// Copyright 2026 The Portico Authors
// SPDX-License-Identifier: AGPL-3.0-only

//! Structured-data behavior of the public pages, plus determinism checks on
//! the renderer itself.

use portico_server::ServerConfig;
use portico_server::config::SiteIdentity;
use portico_server::ui::structured::{Organization, structured_data};
use proptest::prelude::*;
use serde_json::{Value, json};

mod common;
use common::spawn_server;

const LD_JSON_OPEN: &str = r#"<script type="application/ld+json">"#;

fn extract_ld_json(body: &str) -> &str {
    let start = body.find(LD_JSON_OPEN).expect("structured data block present") + LD_JSON_OPEN.len();
    let end = body[start..].find("</script>").expect("script element closed") + start;
    &body[start..end]
}

fn acme_config() -> ServerConfig {
    ServerConfig {
        site: Some(SiteIdentity {
            name: "Acme".to_string(),
            url: "https://acme.example".to_string(),
        }),
        ..ServerConfig::default()
    }
}

#[tokio::test]
async fn home_without_identity_carries_no_structured_data() {
    let (base, _server) = spawn_server(ServerConfig::default()).await;

    let body = reqwest::get(&base).await.expect("request").text().await.expect("body");
    assert_eq!(
        body.matches(LD_JSON_OPEN).count(),
        0,
        "absent identity must not leave even an empty script element"
    );
}

#[tokio::test]
async fn home_with_identity_carries_exactly_one_block() {
    let (base, _server) = spawn_server(acme_config()).await;

    let body = reqwest::get(&base).await.expect("request").text().await.expect("body");
    assert_eq!(body.matches(LD_JSON_OPEN).count(), 1);

    let parsed: Value = serde_json::from_str(extract_ld_json(&body)).expect("valid JSON");
    assert_eq!(
        parsed,
        json!({
            "@context": "https://schema.org",
            "@type": "Organization",
            "name": "Acme",
            "url": "https://acme.example",
        })
    );
}

#[tokio::test]
async fn structured_data_is_pretty_printed() {
    let (base, _server) = spawn_server(acme_config()).await;

    let body = reqwest::get(&base).await.expect("request").text().await.expect("body");
    let block = extract_ld_json(&body);
    assert!(
        block.starts_with("{\n  \"@context\""),
        "expected 2-space indentation, got: {block}"
    );
}

proptest! {
    /// Rendering the same payload twice yields byte-identical output that
    /// still parses back to the input.
    #[test]
    fn rendering_is_deterministic(name in "\\PC{0,40}", url in "\\PC{0,40}") {
        let org = Organization::new(name.clone(), url.clone());

        let first = structured_data(Some(&org)).unwrap().unwrap();
        let second = structured_data(Some(&org)).unwrap().unwrap();
        prop_assert_eq!(&first, &second);

        let body = first
            .strip_prefix(LD_JSON_OPEN)
            .and_then(|rest| rest.strip_suffix("</script>"))
            .expect("single script element");
        let parsed: Value = serde_json::from_str(body).expect("valid JSON");
        prop_assert_eq!(parsed["name"].as_str(), Some(name.as_str()));
        prop_assert_eq!(parsed["url"].as_str(), Some(url.as_str()));
    }
}
