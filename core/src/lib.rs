#![deny(missing_docs)]

//! # apiwrap-core
//!
//! Core library for generating Python/Flask wrappers around upstream
//! HTTP APIs.
//!
//! The crate produces source text only. Nothing here performs network
//! calls or executes the generated Python, and caller-supplied input
//! is embedded without validation. Programmatic use drives
//! [`ApiBuilder`] directly; declarative use parses a manifest with
//! [`parse_manifest`] and converts it with [`Manifest::to_builder`].

/// Unified error type and result alias.
pub mod error;

/// Endpoint descriptors: verbs, return shapes, extra source.
pub mod endpoint;

/// Template constants and rendering of the Python/Flask output.
pub mod flask;

/// The accumulating builder.
pub mod builder;

/// YAML/JSON manifest parsing and conversion to descriptors.
pub mod manifest;

pub use builder::ApiBuilder;
pub use endpoint::{EndpointDescriptor, HttpVerb, ReturnShape};
pub use error::{AppError, AppResult};
pub use flask::{quote_url, render_endpoint, render_preamble};
pub use manifest::{parse_manifest, Manifest, ManifestEndpoint, ReturnsSpec};
