//! Document Source
//!
//! The uploaded document as an immutable value: base64-encoded bytes plus the
//! declared media type. Created once per session and discarded on reset; the
//! payload is never transformed after construction.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Media type used when the upload did not declare one
pub const DEFAULT_MEDIA_TYPE: &str = "application/octet-stream";

/// Media types the analyzer accepts (PDF and plain text uploads)
pub const SUPPORTED_MEDIA_TYPES: &[&str] = &["application/pdf", "text/plain"];

/// An uploaded document: base64 payload + declared media type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSource {
    /// Base64-encoded file content, exactly as uploaded
    pub data: String,
    /// Declared media type of the upload
    #[serde(rename = "mimeType")]
    pub mime_type: String,
}

impl DocumentSource {
    /// Create a document source from an already-encoded payload.
    ///
    /// An empty media type falls back to [`DEFAULT_MEDIA_TYPE`].
    pub fn new(data: impl Into<String>, mime_type: impl Into<String>) -> Self {
        let mime_type = mime_type.into();
        Self {
            data: data.into(),
            mime_type: if mime_type.is_empty() {
                DEFAULT_MEDIA_TYPE.to_string()
            } else {
                mime_type
            },
        }
    }

    /// Create a document source by encoding raw file bytes.
    pub fn from_bytes(bytes: &[u8], mime_type: impl Into<String>) -> Self {
        Self::new(BASE64.encode(bytes), mime_type)
    }

    /// Estimated decoded size of the payload in bytes.
    ///
    /// Derived from the base64 length without decoding; used for the upload
    /// size ceiling check.
    pub fn decoded_len(&self) -> usize {
        let len = self.data.len();
        let padding = self.data.bytes().rev().take_while(|b| *b == b'=').count();
        ((len / 4) * 3).saturating_sub(padding)
    }

    /// Whether the declared media type is one the analyzer accepts.
    pub fn is_supported_media_type(&self) -> bool {
        SUPPORTED_MEDIA_TYPES.contains(&self.mime_type.as_str())
    }
}
