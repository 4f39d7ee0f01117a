//! Command infrastructure for handlers.
//!
//! `CommandMetadata` carries correlation context through command processing
//! so that every log line of one purchase can be tied together.

use serde::{Deserialize, Serialize};

use super::RequestId;

/// Metadata context for command handlers.
///
/// # Example
///
/// ```ignore
/// let metadata = CommandMetadata::new()
///     .with_request_id(request_id)
///     .with_source("box-office");
///
/// handler.handle(cmd, metadata).await?;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMetadata {
    /// Links every log line of a single purchase.
    /// Generated by the handler if not provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    request_id: Option<RequestId>,

    /// Source of this command (e.g., "api", "box-office", "test").
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
}

impl CommandMetadata {
    /// Creates empty metadata; a request ID is generated on first use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: Use a caller-supplied request ID.
    pub fn with_request_id(mut self, id: RequestId) -> Self {
        self.request_id = Some(id);
        self
    }

    /// Builder: Add source identifier.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Returns the request ID, generating one if not set.
    pub fn request_id(&self) -> RequestId {
        self.request_id.unwrap_or_default()
    }

    /// Returns the source if set.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

#[cfg(test)]
impl CommandMetadata {
    /// Creates a test fixture with a fixed source.
    ///
    /// Only available in test builds.
    pub fn test_fixture() -> Self {
        Self::new().with_source("test")
    }
}
