//! Error types for frame delivery

/// The consumer of the frame channel is gone (client disconnected)
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Frame channel closed by consumer")]
pub struct ChannelClosed;
