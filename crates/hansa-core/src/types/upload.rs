//! Binary upload payload type.

/// A binary payload for document and recording uploads.
///
/// The content is sent as the raw request body with its own media type as
/// `Content-Type`; the original filename is surfaced to the service via the
/// `X-Content-Description` header.
#[derive(Debug, Clone)]
pub struct Upload {
    name: String,
    media_type: String,
    content: Vec<u8>,
}

impl Upload {
    /// Create a new upload payload.
    ///
    /// # Arguments
    ///
    /// * `name` - The original filename (e.g. "avatar.png")
    /// * `media_type` - The payload's MIME type (e.g. "image/png")
    /// * `content` - The raw bytes
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            content,
        }
    }

    /// Returns the original filename.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the payload's MIME type.
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// Returns the raw bytes.
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Consumes the payload, returning the raw bytes.
    pub fn into_content(self) -> Vec<u8> {
        self.content
    }
}
