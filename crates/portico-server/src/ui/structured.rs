// Copyright 2026 The Portico Authors
// SPDX-License-Identifier: AGPL-3.0-only

//! Structured data (JSON-LD) rendering
//!
//! Search engine crawlers read `<script type="application/ld+json">` blocks
//! for rich-result rendering; browsers never display them. This module turns
//! an optional serializable payload into such a block.

use serde::Serialize;

/// `schema.org` Organization payload carried by public pages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Organization {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: String,
    pub url: String,
}

impl Organization {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            context: "https://schema.org",
            schema_type: "Organization",
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Render an optional payload as a JSON-LD script element.
///
/// `None` produces no output at all, not even an empty element; that is the
/// defined empty case, not an error. `Some` produces exactly one script
/// element whose body is the pretty-printed (2-space indented) serialization
/// of the payload. Serialization failures propagate unchanged; there is no
/// fallback output.
///
/// The body is inserted into the page as raw markup, not escaped text, so
/// that crawlers receive valid JSON. Callers must only pass site-controlled
/// payloads (configuration-derived metadata); user-influenced values do not
/// belong here.
pub fn structured_data<T: Serialize>(
    payload: Option<&T>,
) -> Result<Option<String>, serde_json::Error> {
    let Some(payload) = payload else {
        return Ok(None);
    };

    let json = serde_json::to_string_pretty(payload)?;
    Ok(Some(format!(
        r#"<script type="application/ld+json">{json}</script>"#
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    /// Strips the script element wrapper, returning the raw body.
    fn script_body(rendered: &str) -> &str {
        rendered
            .strip_prefix(r#"<script type="application/ld+json">"#)
            .and_then(|rest| rest.strip_suffix("</script>"))
            .expect("rendered block should be a single script element")
    }

    #[test]
    fn absent_payload_produces_no_output() {
        let rendered = structured_data::<Value>(None).expect("absent payload is not an error");
        assert_eq!(rendered, None);
    }

    #[test]
    fn payload_round_trips_through_the_script_body() {
        let payload = json!({"@type": "Organization", "name": "Acme"});
        let rendered = structured_data(Some(&payload)).unwrap().unwrap();

        let parsed: Value = serde_json::from_str(script_body(&rendered)).expect("valid JSON");
        assert_eq!(parsed, payload);
    }

    #[test]
    fn serialization_is_pretty_printed_with_two_spaces() {
        let org = Organization::new("Acme", "https://acme.example");
        let rendered = structured_data(Some(&org)).unwrap().unwrap();
        let body = script_body(&rendered);

        assert!(body.starts_with("{\n  \"@context\""), "unexpected body: {body}");
        assert!(!body.contains("\n    \""), "top-level keys must use 2-space indent");
    }

    #[test]
    fn rendering_twice_is_byte_identical() {
        let org = Organization::new("Acme", "https://acme.example");
        let first = structured_data(Some(&org)).unwrap().unwrap();
        let second = structured_data(Some(&org)).unwrap().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn organization_serializes_with_schema_org_keys() {
        let org = Organization::new("Acme", "https://acme.example");
        let value = serde_json::to_value(&org).unwrap();

        assert_eq!(value["@context"], "https://schema.org");
        assert_eq!(value["@type"], "Organization");
        assert_eq!(value["name"], "Acme");
        assert_eq!(value["url"], "https://acme.example");
    }

    /// Stand-in for a payload that cannot be serialized (the analog of a
    /// cyclic object graph).
    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            Err(serde::ser::Error::custom("cyclic structure"))
        }
    }

    #[test]
    fn unserializable_payload_propagates_the_error() {
        let result = structured_data(Some(&Unserializable));
        assert!(result.is_err(), "failure must surface, not render malformed output");
    }
}
