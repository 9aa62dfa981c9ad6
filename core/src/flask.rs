#![deny(missing_docs)]

//! # Flask Rendering
//!
//! Template constants and the rendering functions that turn endpoint
//! descriptors into Python/Flask source text.
//!
//! Everything here is pure string assembly. The output is Python for
//! some other process to run; nothing on this side parses or executes
//! it, and nothing checks that interpolated values keep it well formed.

use crate::endpoint::{EndpointDescriptor, ReturnShape};

/// Module header shared by every generated application.
///
/// Imports first, then the Flask application object. The `loads` and
/// `TypeAlias` imports are part of the stable output surface even
/// though the emitted views do not reference them yet.
const PREAMBLE: &str = "\
from flask import Flask
import requests
from json import loads
from typing import TypeAlias

app: Flask = Flask(__name__)
";

/// Wraps a base URL in single quotes for embedding in Python source.
///
/// No escaping is applied: a URL containing a single quote produces
/// corrupt Python. Callers own the input.
pub fn quote_url(base_url: &str) -> String {
    format!("'{}'", base_url)
}

/// Renders the module preamble with the quoted base URL bound at the
/// end, so generated files carry the URL they were built against.
pub fn render_preamble(url_literal: &str) -> String {
    format!("{}BASE_URL: str = {}\n", PREAMBLE, url_literal)
}

/// Renders one endpoint into a Flask view function fragment.
///
/// The fragment starts with a blank separator line and ends with a
/// trailing newline, so fragments concatenate cleanly after the
/// preamble. Returns `None` for shapes with no rendering
/// (`Overloaded`); the caller appends nothing in that case.
pub fn render_endpoint(endpoint: &EndpointDescriptor, url_literal: &str) -> Option<String> {
    let annotation = endpoint.return_shape.annotation()?;

    let call = format!(
        "requests.{}({})",
        endpoint.verb.requests_method(),
        url_literal
    );
    let return_expr = match &endpoint.return_shape {
        ReturnShape::Structured => format!("{}.json()", call),
        ReturnShape::Scalar(kind) => format!("{}({}.text)", kind, call),
        ReturnShape::Overloaded(_) => return None,
    };

    let mut code = String::new();
    code.push_str(&format!("\ndef {}() -> {}:\n", endpoint.name, annotation));
    if let Some(extra) = &endpoint.extra_source {
        // Indent only the first line; callers own multi-line layout.
        if !extra.is_empty() {
            code.push_str(&format!("    {}\n", extra));
        }
    }
    code.push_str(&format!("    return {}\n", return_expr));

    Some(code)
}
