#![deny(missing_docs)]

//! # Endpoint Manifests
//!
//! Declarative wrapper descriptions, parsed from YAML (or JSON, which
//! YAML subsumes) into endpoint descriptors and fed through the
//! builder.
//!
//! The manifest layer is the only place input is checked at all, and
//! it checks exactly one thing: the HTTP method must be one the
//! rendering supports. Names, return kinds and extra code pass through
//! untouched.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::builder::ApiBuilder;
use crate::endpoint::{EndpointDescriptor, HttpVerb, ReturnShape};
use crate::error::{AppError, AppResult};

/// A complete wrapper description: one upstream service, any number of
/// endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Manifest {
    /// Wrapper name, surfaced in status output.
    pub name: String,
    /// Upstream base URL, embedded into the generated source unescaped.
    pub base_url: String,
    /// Endpoints in declaration order. Optional; an empty manifest
    /// still generates the preamble.
    #[serde(default)]
    pub endpoints: Vec<ManifestEndpoint>,
}

/// One endpoint entry as written in the manifest.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ManifestEndpoint {
    /// Python function name, emitted verbatim.
    pub name: String,
    /// HTTP method, any casing.
    pub method: String,
    /// Declared return kind.
    pub returns: ReturnsSpec,
    /// Statements to insert before the return statement, verbatim.
    #[serde(default)]
    pub extra_code: Option<String>,
}

/// The `returns` field accepts either a single kind name or a mapping
/// of variant labels to kind names.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ReturnsSpec {
    /// A single kind name; `json` selects the structured shape, any
    /// other name becomes a scalar kind emitted verbatim.
    Single(String),
    /// The mapping form resolves to the reserved overloaded shape,
    /// which currently renders nothing.
    Overloaded(IndexMap<String, String>),
}

/// Resolves a manifest kind name to a return shape.
fn shape_from_name(kind: &str) -> ReturnShape {
    if kind == "json" {
        ReturnShape::Structured
    } else {
        ReturnShape::scalar(kind)
    }
}

impl ReturnsSpec {
    /// Resolves the declaration to the shape the renderer consumes.
    pub fn to_shape(&self) -> ReturnShape {
        match self {
            ReturnsSpec::Single(kind) => shape_from_name(kind),
            ReturnsSpec::Overloaded(variants) => ReturnShape::Overloaded(
                variants
                    .iter()
                    .map(|(label, kind)| (label.clone(), shape_from_name(kind)))
                    .collect(),
            ),
        }
    }
}

impl ManifestEndpoint {
    /// Converts the entry into a descriptor, rejecting unsupported
    /// HTTP methods.
    pub fn to_descriptor(&self) -> AppResult<EndpointDescriptor> {
        let verb: HttpVerb = self.method.parse()?;
        let mut descriptor =
            EndpointDescriptor::new(self.name.clone(), verb, self.returns.to_shape());
        if let Some(extra) = &self.extra_code {
            descriptor = descriptor.with_extra_source(extra.clone());
        }
        Ok(descriptor)
    }
}

impl Manifest {
    /// Builds an `ApiBuilder` with every endpoint registered in
    /// declaration order.
    pub fn to_builder(&self) -> AppResult<ApiBuilder> {
        let mut builder = ApiBuilder::new(self.name.clone(), &self.base_url);
        for endpoint in &self.endpoints {
            let descriptor = endpoint.to_descriptor()?;
            builder.add_endpoint(&descriptor);
        }
        Ok(builder)
    }
}

/// Parses manifest text into a `Manifest`.
pub fn parse_manifest(content: &str) -> AppResult<Manifest> {
    serde_yaml::from_str(content)
        .map_err(|e| AppError::Manifest(format!("Failed to parse manifest: {}", e)))
}
