//! Media plumbing for Fruitcast
//!
//! This crate provides everything the server streams from:
//! - The frame source contract implemented by capture backends
//! - Per-connection sessions bridging a blocking source to an async stream
//! - A synthetic test pattern source for running without capture hardware

pub mod frame;
pub mod pattern;
pub mod session;
pub mod source;

pub use frame::Frame;
pub use pattern::{PatternConfig, PatternProvider, PatternSource};
pub use session::{FrameStream, Session};
pub use source::{FrameSource, MediaError, SourceProvider};
