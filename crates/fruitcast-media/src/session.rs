use crate::frame::Frame;
use crate::source::{FrameSource, MediaError, SourceProvider};
use futures_util::Stream;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::task::{Context, Poll};
use std::thread;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use uuid::Uuid;

/// Frames buffered between the capture thread and the consumer.
/// Small to avoid serving stale frames to a slow client.
const CHANNEL_DEPTH: usize = 2;

/// A per-connection capture session.
///
/// Opening a session acquires a fresh source from the provider and moves it
/// into a dedicated capture thread. The source lives on that thread for the
/// whole session and is dropped when the loop exits, so release happens
/// exactly once no matter how the session ends.
pub struct Session {
    id: Uuid,
    stop: Arc<AtomicBool>,
    rx: mpsc::Receiver<Frame>,
}

impl Session {
    /// Acquire a source from `provider` and start capturing.
    ///
    /// `frame_interval` paces the capture loop; a source that blocks at its
    /// native rate simply makes the remaining sleep zero.
    pub fn open(
        provider: &dyn SourceProvider,
        frame_interval: Duration,
    ) -> Result<Self, MediaError> {
        let source = provider.open()?;
        let id = Uuid::new_v4();
        let stop = Arc::new(AtomicBool::new(false));
        let (tx, rx) = mpsc::channel(CHANNEL_DEPTH);

        let stop_flag = stop.clone();
        thread::spawn(move || capture_loop(id, source, tx, stop_flag, frame_interval));

        tracing::info!("session {} opened", id);
        Ok(Self { id, stop, rx })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Turn the session into its frame stream.
    ///
    /// The stream is not restartable. Dropping it stops the capture thread,
    /// which releases the underlying source.
    pub fn into_frames(self) -> FrameStream {
        FrameStream {
            id: self.id,
            inner: ReceiverStream::new(self.rx),
            stop: self.stop,
            delivered: 0,
        }
    }
}

fn capture_loop(
    id: Uuid,
    mut source: Box<dyn FrameSource>,
    tx: mpsc::Sender<Frame>,
    stop: Arc<AtomicBool>,
    frame_interval: Duration,
) {
    let started = Instant::now();
    let mut produced: u64 = 0;

    while !stop.load(Ordering::SeqCst) {
        let frame_start = Instant::now();

        match source.next_frame() {
            Ok(frame) => {
                // Consumer gone means the connection closed; stop capturing.
                if tx.blocking_send(frame).is_err() {
                    break;
                }
                produced += 1;
                if produced % 300 == 0 {
                    let fps = produced as f64 / started.elapsed().as_secs_f64();
                    tracing::debug!("session {}: {} frames, {:.1} fps", id, produced, fps);
                }
            }
            Err(e) => {
                tracing::warn!("session {}: frame production failed: {}", id, e);
                break;
            }
        }

        // Sleep to maintain frame rate
        let elapsed = frame_start.elapsed();
        if elapsed < frame_interval {
            thread::sleep(frame_interval - elapsed);
        }
    }

    drop(source);
    tracing::info!("session {} closed after {} frames", id, produced);
}

/// Pull side of a [`Session`].
pub struct FrameStream {
    id: Uuid,
    inner: ReceiverStream<Frame>,
    stop: Arc<AtomicBool>,
    delivered: u64,
}

impl FrameStream {
    pub fn id(&self) -> Uuid {
        self.id
    }
}

impl Stream for FrameStream {
    type Item = Frame;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let polled = Pin::new(&mut self.inner).poll_next(cx);
        if let Poll::Ready(Some(_)) = polled {
            self.delivered += 1;
        }
        polled
    }
}

impl Drop for FrameStream {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        tracing::debug!(
            "session {} stream dropped after {} frames",
            self.id,
            self.delivered
        );
    }
}
