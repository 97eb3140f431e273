use crate::frame::Frame;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MediaError {
    #[error("capture source unavailable: {0}")]
    ResourceUnavailable(String),

    #[error("frame stream interrupted: {0}")]
    StreamInterrupted(String),
}

/// A blocking producer of encoded frames.
///
/// Implementations own whatever underlying resource they capture from and
/// release it on drop. A source is exclusive to one session; it is never
/// shared or reused across connections.
pub trait FrameSource: Send {
    /// Produce the next encoded frame, blocking until one is available.
    ///
    /// Returning an error ends the session that owns this source.
    fn next_frame(&mut self) -> Result<Frame, MediaError>;
}

/// Factory that opens a fresh, exclusively owned frame source per session.
///
/// `open` performs the actual resource acquisition, so it may block and it
/// may fail with [`MediaError::ResourceUnavailable`].
pub trait SourceProvider: Send + Sync {
    fn open(&self) -> Result<Box<dyn FrameSource>, MediaError>;
}
