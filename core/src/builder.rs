#![deny(missing_docs)]

//! # Api Builder
//!
//! The accumulating builder that callers drive directly.
//!
//! Construction seeds an internal buffer with the rendered preamble
//! and each registered endpoint appends one fragment. `code` hands the
//! buffer back verbatim. The builder never fails and never inspects
//! what it has accumulated.

use crate::endpoint::EndpointDescriptor;
use crate::flask::{quote_url, render_endpoint, render_preamble};

/// Accumulates generated Flask source for one API wrapper.
#[derive(Debug, Clone)]
pub struct ApiBuilder {
    /// Human-readable name of the wrapper, surfaced in status output.
    name: String,
    /// The quoted URL literal shared by the preamble and every
    /// fragment, frozen at construction.
    url_literal: String,
    /// The output buffer. Preamble first, then fragments in
    /// registration order.
    code: String,
}

impl ApiBuilder {
    /// Creates a builder for the given wrapper name and upstream base
    /// URL. The preamble is rendered immediately.
    pub fn new(name: impl Into<String>, base_url: &str) -> Self {
        let url_literal = quote_url(base_url);
        let code = render_preamble(&url_literal);
        ApiBuilder {
            name: name.into(),
            url_literal,
            code,
        }
    }

    /// The wrapper name given at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renders the endpoint and appends its fragment to the buffer.
    ///
    /// Endpoints whose shape has no rendering append nothing; the
    /// buffer is untouched.
    pub fn add_endpoint(&mut self, endpoint: &EndpointDescriptor) {
        if let Some(fragment) = render_endpoint(endpoint, &self.url_literal) {
            self.code.push_str(&fragment);
        }
    }

    /// Reserved registration hook for named return types.
    ///
    /// Accepted for interface stability; currently records nothing and
    /// has no effect on the output.
    pub fn create_return_type(&mut self, _name: &str, _spec: &serde_json::Value) {}

    /// The accumulated source. Reading does not mutate; repeated calls
    /// return identical text.
    pub fn code(&self) -> &str {
        &self.code
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::{HttpVerb, ReturnShape};
    use indexmap::IndexMap;

    #[test]
    fn test_new_builder_is_preamble_only() {
        let builder = ApiBuilder::new("petstore", "https://example.com");
        let expected = "\
from flask import Flask
import requests
from json import loads
from typing import TypeAlias

app: Flask = Flask(__name__)
BASE_URL: str = 'https://example.com'
";
        assert_eq!(builder.code(), expected);
        assert!(!builder.code().contains("def "));
    }

    #[test]
    fn test_add_endpoint_appends_fragment() {
        let mut builder = ApiBuilder::new("petstore", "https://example.com");
        builder.add_endpoint(&EndpointDescriptor::new(
            "get_pets",
            HttpVerb::Get,
            ReturnShape::Structured,
        ));
        assert!(builder.code().contains("def get_pets() -> json:"));
        assert!(builder
            .code()
            .contains("return requests.get('https://example.com').json()"));
    }

    #[test]
    fn test_code_is_idempotent() {
        let mut builder = ApiBuilder::new("petstore", "https://example.com");
        builder.add_endpoint(&EndpointDescriptor::new(
            "get_pets",
            HttpVerb::Get,
            ReturnShape::Structured,
        ));
        let first = builder.code().to_string();
        let second = builder.code().to_string();
        assert_eq!(first, second);
    }

    #[test]
    fn test_registration_order_is_preserved() {
        let mut builder = ApiBuilder::new("petstore", "https://example.com");
        builder.add_endpoint(&EndpointDescriptor::new(
            "first",
            HttpVerb::Get,
            ReturnShape::Structured,
        ));
        builder.add_endpoint(&EndpointDescriptor::new(
            "second",
            HttpVerb::Post,
            ReturnShape::Structured,
        ));
        let code = builder.code();
        let first_at = code.find("def first").unwrap();
        let second_at = code.find("def second").unwrap();
        assert!(first_at < second_at);
    }

    #[test]
    fn test_overloaded_endpoint_is_a_no_op() {
        let mut builder = ApiBuilder::new("petstore", "https://example.com");
        let before = builder.code().to_string();
        builder.add_endpoint(&EndpointDescriptor::new(
            "poly",
            HttpVerb::Get,
            ReturnShape::Overloaded(IndexMap::new()),
        ));
        assert_eq!(builder.code(), before);
    }

    #[test]
    fn test_create_return_type_is_a_no_op() {
        let mut builder = ApiBuilder::new("petstore", "https://example.com");
        let before = builder.code().to_string();
        builder.create_return_type("Pet", &serde_json::json!({ "id": "int" }));
        assert_eq!(builder.code(), before);
    }

    #[test]
    fn test_every_fragment_shares_the_url_literal() {
        let mut builder = ApiBuilder::new("petstore", "https://example.com");
        builder.add_endpoint(&EndpointDescriptor::new(
            "a",
            HttpVerb::Get,
            ReturnShape::Structured,
        ));
        builder.add_endpoint(&EndpointDescriptor::new(
            "b",
            HttpVerb::Post,
            ReturnShape::scalar("str"),
        ));
        let hits = builder.code().matches("'https://example.com'").count();
        // Preamble binding plus one per fragment.
        assert_eq!(hits, 3);
    }

    #[test]
    fn test_name_accessor() {
        let builder = ApiBuilder::new("petstore", "https://example.com");
        assert_eq!(builder.name(), "petstore");
    }
}
