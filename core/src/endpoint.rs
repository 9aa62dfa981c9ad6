#![deny(missing_docs)]

//! # Endpoint Descriptors
//!
//! The intermediate representation consumed by the rendering layer.
//!
//! A descriptor carries everything needed to emit one Flask view
//! function: the Python identifier to define, the HTTP verb used for
//! the upstream call, the shape of the value the view returns, and an
//! optional block of caller-supplied source.
//!
//! Descriptors are plain data. Nothing here validates that `name` is a
//! legal Python identifier or that `extra_source` parses; callers own
//! that contract and malformed input flows straight into the output.

use std::str::FromStr;

use indexmap::IndexMap;

use crate::error::AppError;

/// The HTTP verb an endpoint uses when calling the upstream service.
///
/// Only the verbs the generated `requests` call supports are
/// representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpVerb {
    /// Maps to `requests.get`.
    Get,
    /// Maps to `requests.post`.
    Post,
}

impl HttpVerb {
    /// The `requests` module method name for this verb.
    pub fn requests_method(&self) -> &'static str {
        match self {
            HttpVerb::Get => "get",
            HttpVerb::Post => "post",
        }
    }
}

impl FromStr for HttpVerb {
    type Err = AppError;

    /// Parses a verb case-insensitively, so manifests may spell it
    /// `GET`, `get` or `Get`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "get" => Ok(HttpVerb::Get),
            "post" => Ok(HttpVerb::Post),
            other => Err(AppError::Manifest(format!(
                "Unsupported HTTP method '{}'",
                other
            ))),
        }
    }
}

/// The shape of the value an endpoint returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnShape {
    /// Parsed JSON: the upstream response is run through `.json()`.
    Structured,
    /// A single scalar: the response text is wrapped in the named
    /// Python constructor, e.g. `str` or `int`.
    ///
    /// The kind is emitted verbatim as both the return annotation and
    /// the conversion call. No check is made that it names a real
    /// Python callable.
    Scalar(String),
    /// Reserved for per-variant dispatch on response content. Keyed by
    /// variant label, in declaration order.
    ///
    /// Rendering for this shape is not implemented; endpoints carrying
    /// it are accepted and silently skipped.
    Overloaded(IndexMap<String, ReturnShape>),
}

impl ReturnShape {
    /// Convenience constructor for the scalar shape.
    pub fn scalar(kind: impl Into<String>) -> Self {
        ReturnShape::Scalar(kind.into())
    }

    /// The Python return annotation for this shape, or `None` when the
    /// shape has no rendering.
    pub fn annotation(&self) -> Option<&str> {
        match self {
            ReturnShape::Structured => Some("json"),
            ReturnShape::Scalar(kind) => Some(kind),
            ReturnShape::Overloaded(_) => None,
        }
    }
}

/// One endpoint to render into the generated Flask application.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointDescriptor {
    /// Python function name for the view. Emitted verbatim.
    pub name: String,
    /// Verb for the upstream `requests` call.
    pub verb: HttpVerb,
    /// Shape of the returned value.
    pub return_shape: ReturnShape,
    /// Caller-supplied statements inserted before the return statement,
    /// verbatim. `None` and `Some("")` render identically.
    pub extra_source: Option<String>,
}

impl EndpointDescriptor {
    /// Creates a descriptor with no extra source.
    pub fn new(name: impl Into<String>, verb: HttpVerb, return_shape: ReturnShape) -> Self {
        EndpointDescriptor {
            name: name.into(),
            verb,
            return_shape,
            extra_source: None,
        }
    }

    /// Attaches caller-supplied source to insert before the return
    /// statement.
    pub fn with_extra_source(mut self, source: impl Into<String>) -> Self {
        self.extra_source = Some(source.into());
        self
    }
}
