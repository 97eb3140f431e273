use bytes::Bytes;

/// One encoded image, ready to be sent to a client as-is.
#[derive(Debug, Clone)]
pub struct Frame {
    pub data: Bytes,
    pub content_type: &'static str,
}

impl Frame {
    /// Wrap an already-encoded JPEG buffer.
    pub fn jpeg(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            content_type: "image/jpeg",
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
