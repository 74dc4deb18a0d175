//! Frame delivery for crawl results
//!
//! A crawl writes [`Frame`]s to a [`FrameSink`]. The streaming endpoint uses
//! a [`ChannelSink`] whose receiver becomes the SSE body; the batch endpoint
//! buffers into a [`CollectingSink`].

// Sub-modules
pub mod errors;
pub mod sink;
pub mod streaming;
pub mod types;

// Re-exports for public API
pub use errors::ChannelClosed;
pub use sink::{ChannelSink, CollectingSink, FrameSink};
pub use streaming::{frame_stream, frame_to_event};
pub use types::Frame;
