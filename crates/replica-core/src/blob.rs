//! Binary blobs

/// Immutable byte payload tagged with a content type
#[derive(Debug)]
pub struct JsBlob {
    bytes: Vec<u8>,
    content_type: String,
}

impl JsBlob {
    /// Create a blob
    ///
    /// The content type is lowercased; a type containing anything other than
    /// printable ASCII is dropped and becomes empty.
    pub fn new(bytes: impl Into<Vec<u8>>, content_type: &str) -> Self {
        let content_type = if content_type.bytes().all(|b| (0x20..=0x7E).contains(&b)) {
            content_type.to_ascii_lowercase()
        } else {
            String::new()
        };
        Self {
            bytes: bytes.into(),
            content_type,
        }
    }

    /// Size in bytes
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Content type tag
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Payload
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_normalized() {
        assert_eq!(JsBlob::new(vec![1], "Text/Plain").content_type(), "text/plain");
        assert_eq!(JsBlob::new(vec![1], "bad\u{7}").content_type(), "");
    }

    #[test]
    fn test_size() {
        assert_eq!(JsBlob::new(b"abc".to_vec(), "").size(), 3);
    }
}
