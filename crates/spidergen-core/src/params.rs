//! Parameter model for a single spider rendering pass.

use serde::Serialize;

/// Start location used when the caller does not supply one.
pub const DEFAULT_URL: &str = "www.example.com";

/// The three values substituted into the spider template.
///
/// Construction stores the raw strings verbatim: no trimming, no escaping,
/// no normalization. The record is immutable once built and is consumed by a
/// single rendering pass.
///
/// `name` must be non-empty for rendering to succeed; the check happens in
/// [`crate::SpiderRenderer::render`], not here.
#[derive(Debug, Clone, Serialize)]
pub struct SpiderParams {
    /// Spider name, embedded as an identifier token in the generated source
    pub name: String,
    /// Free-form description placed in the generated docstring; may be empty
    pub doc: String,
    /// Start location embedded verbatim into the generated start_urls list
    pub url: String,
}

impl SpiderParams {
    /// Build the record from three raw strings.
    pub fn new(
        name: impl Into<String>,
        doc: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            doc: doc.into(),
            url: url.into(),
        }
    }
}
