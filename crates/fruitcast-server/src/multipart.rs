//! Framing for `multipart/x-mixed-replace` streaming responses.
//!
//! Browsers render each part as a replacement for the previous one, which is
//! what turns a sequence of JPEGs into a live `<img>` feed.

use bytes::{Bytes, BytesMut};
use fruitcast_media::Frame;

/// Boundary token shared by the response header and every part.
pub const BOUNDARY: &str = "frame";

/// Value for the response `Content-Type` header.
pub fn content_type() -> String {
    format!("multipart/x-mixed-replace; boundary={BOUNDARY}")
}

/// Encode one frame as a complete multipart part.
pub fn encode_part(frame: &Frame) -> Bytes {
    let mut part = BytesMut::with_capacity(frame.len() + 128);
    part.extend_from_slice(b"--");
    part.extend_from_slice(BOUNDARY.as_bytes());
    part.extend_from_slice(b"\r\n");
    part.extend_from_slice(format!("Content-Type: {}\r\n", frame.content_type).as_bytes());
    part.extend_from_slice(format!("Content-Length: {}\r\n\r\n", frame.len()).as_bytes());
    part.extend_from_slice(&frame.data);
    part.extend_from_slice(b"\r\n");
    part.freeze()
}
