#![cfg(feature = "std")]

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{timeout, Duration};

use crate::domain::ProgressRecord;
use crate::protocol::ProgressSink;

/// Default window within which successive snapshots collapse into one write.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Fire-and-forget, debounced persistence of solve-state snapshots.
///
/// `submit` never waits on the sink. A background task keeps only the most
/// recent snapshot and writes it once no newer one has arrived for the
/// debounce window. Failed writes are logged and dropped; the in-memory
/// session stays authoritative.
pub struct ProgressWriter {
    tx: mpsc::UnboundedSender<ProgressRecord>,
    handle: JoinHandle<usize>,
}

impl ProgressWriter {
    /// Start the writer task. Must be called from within a tokio runtime.
    pub fn spawn(sink: Arc<dyn ProgressSink>, debounce: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(run(sink, rx, debounce));
        Self { tx, handle }
    }

    /// Queue a snapshot for writing.
    pub fn submit(&self, record: ProgressRecord) {
        if self.tx.send(record).is_err() {
            log::warn!("progress writer stopped, snapshot dropped");
        }
    }

    /// Flush any pending snapshot and stop the task. Returns the number of
    /// write attempts made.
    pub async fn finish(self) -> usize {
        drop(self.tx);
        match self.handle.await {
            Ok(attempts) => attempts,
            Err(e) => {
                log::warn!("progress writer task failed: {}", e);
                0
            }
        }
    }
}

async fn run(
    sink: Arc<dyn ProgressSink>,
    mut rx: mpsc::UnboundedReceiver<ProgressRecord>,
    debounce: Duration,
) -> usize {
    let mut attempts = 0;
    while let Some(mut pending) = rx.recv().await {
        let mut closed = false;
        loop {
            match timeout(debounce, rx.recv()).await {
                Ok(Some(newer)) => pending = newer,
                Ok(None) => {
                    closed = true;
                    break;
                }
                Err(_) => break,
            }
        }

        attempts += 1;
        match sink.save_progress(&pending).await {
            Ok(()) => log::debug!(
                "saved {} solved words for player {} puzzle {}",
                pending.guessed_words.len(),
                pending.player,
                pending.puzzle
            ),
            Err(e) => log::warn!(
                "failed to save progress for player {}: {}",
                pending.player,
                e
            ),
        }

        if closed {
            break;
        }
    }
    attempts
}
