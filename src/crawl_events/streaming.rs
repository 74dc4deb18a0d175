//! Conversion of the frame channel into an SSE event stream

use axum::response::sse::Event;
use futures::Stream;
use std::convert::Infallible;
use tokio::sync::mpsc;

use super::types::Frame;

/// SSE event for one frame
///
/// Fields are written in call order, so the `event:` line goes first.
#[must_use]
pub fn frame_to_event(frame: &Frame) -> Event {
    let event = match frame.event_name() {
        Some(name) => Event::default().event(name),
        None => Event::default(),
    };
    event.data(frame.data())
}

/// Stream the receiver's frames as SSE events, ending after the close frame
pub fn frame_stream(rx: mpsc::Receiver<Frame>) -> impl Stream<Item = Result<Event, Infallible>> {
    futures::stream::unfold((rx, false), |(mut rx, done)| async move {
        if done {
            return None;
        }
        let frame = rx.recv().await?;
        let done = frame.is_close();
        Some((Ok(frame_to_event(&frame)), (rx, done)))
    })
}
