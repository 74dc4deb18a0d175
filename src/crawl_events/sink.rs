//! Destinations for crawl frames

use async_trait::async_trait;
use std::sync::{Mutex, PoisonError};
use tokio::sync::mpsc;

use super::errors::ChannelClosed;
use super::types::Frame;
use crate::page_extractor::ScrapeResult;

/// Where a crawl writes its frames
#[async_trait]
pub trait FrameSink: Send + Sync {
    /// Deliver one frame, failing once the consumer is gone
    async fn emit(&self, frame: Frame) -> Result<(), ChannelClosed>;

    /// Resolves when the consumer is gone; never resolves otherwise
    async fn closed(&self);
}

/// Bounded channel feeding an SSE response
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::Sender<Frame>,
}

impl ChannelSink {
    /// Create a sink and the receiver the response stream reads from
    #[must_use]
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<Frame>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self { tx }, rx)
    }
}

#[async_trait]
impl FrameSink for ChannelSink {
    async fn emit(&self, frame: Frame) -> Result<(), ChannelClosed> {
        self.tx.send(frame).await.map_err(|_| ChannelClosed)
    }

    async fn closed(&self) {
        self.tx.closed().await;
    }
}

/// Buffers frames in memory for the non-streaming endpoint
#[derive(Debug, Default)]
pub struct CollectingSink {
    frames: Mutex<Vec<Frame>>,
}

impl CollectingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every frame received so far, in order
    #[must_use]
    pub fn frames(&self) -> Vec<Frame> {
        self.frames
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Result frames only, in order
    #[must_use]
    pub fn results(&self) -> Vec<ScrapeResult> {
        self.frames()
            .into_iter()
            .filter_map(|frame| match frame {
                Frame::Result(result) => Some(result),
                _ => None,
            })
            .collect()
    }

    /// First crawl-level error frame, if any
    #[must_use]
    pub fn error(&self) -> Option<(String, String)> {
        self.frames().into_iter().find_map(|frame| match frame {
            Frame::Error { error, details } => Some((error, details)),
            _ => None,
        })
    }
}

#[async_trait]
impl FrameSink for CollectingSink {
    async fn emit(&self, frame: Frame) -> Result<(), ChannelClosed> {
        self.frames
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(frame);
        Ok(())
    }

    async fn closed(&self) {
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn channel_sink_fails_after_receiver_drop() {
        let (sink, mut rx) = ChannelSink::channel(4);
        sink.emit(Frame::Progress(50)).await.unwrap();
        assert_eq!(rx.recv().await, Some(Frame::Progress(50)));

        drop(rx);
        assert_eq!(sink.emit(Frame::Close).await, Err(ChannelClosed));
        // resolves immediately once the receiver is gone
        sink.closed().await;
    }

    #[tokio::test]
    async fn collecting_sink_keeps_results_in_order() {
        let sink = CollectingSink::new();
        sink.emit(Frame::Result(ScrapeResult::failure("https://a.test/1", "x")))
            .await
            .unwrap();
        sink.emit(Frame::Progress(50)).await.unwrap();
        sink.emit(Frame::Result(ScrapeResult::failure("https://a.test/2", "y")))
            .await
            .unwrap();
        sink.emit(Frame::Close).await.unwrap();

        let urls: Vec<_> = sink.results().iter().map(|r| r.url().to_string()).collect();
        assert_eq!(urls, ["https://a.test/1", "https://a.test/2"]);
        assert_eq!(sink.frames().len(), 4);
        assert!(sink.error().is_none());
    }
}
