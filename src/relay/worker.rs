use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

use super::{AssistanceRelay, ChatMessage, RelayContext, RelayError};

/// Runs relay requests off the UI thread, one at a time.
pub struct RelayWorker {
    relay: Arc<dyn AssistanceRelay>,
    pending: Option<Receiver<Result<String, RelayError>>>,
}

impl RelayWorker {
    pub fn new(relay: Arc<dyn AssistanceRelay>) -> Self {
        RelayWorker {
            relay,
            pending: None,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn request(
        &mut self,
        history: Vec<ChatMessage>,
        context: RelayContext,
    ) -> Result<(), RelayError> {
        if self.pending.is_some() {
            return Err(RelayError::Busy);
        }

        let relay = Arc::clone(&self.relay);
        let (tx, rx) = mpsc::channel();
        thread::Builder::new()
            .name("relay".to_string())
            .spawn(move || {
                let result = relay.reply(&history, &context);
                if let Err(e) = &result {
                    warn!(error = %e, "relay request failed");
                }
                // The receiver is gone when the app is shutting down.
                let _ = tx.send(result);
            })
            .map_err(|e| RelayError::Unavailable(e.to_string()))?;

        debug!("relay request sent");
        self.pending = Some(rx);
        Ok(())
    }

    /// Forget any request in flight. Its reply, if one arrives, is dropped.
    pub fn reset(&mut self) {
        if self.pending.take().is_some() {
            debug!("discarded in-flight relay request");
        }
    }

    /// Non-blocking check for a finished reply.
    pub fn poll(&mut self) -> Option<Result<String, RelayError>> {
        self.poll_timeout(Duration::ZERO)
    }

    pub fn poll_timeout(&mut self, timeout: Duration) -> Option<Result<String, RelayError>> {
        let rx = self.pending.as_ref()?;
        let result = match rx.recv_timeout(timeout) {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => return None,
            // Sender dropped without a reply: the worker thread panicked.
            Err(RecvTimeoutError::Disconnected) => Err(RelayError::WorkerGone),
        };
        self.pending = None;
        Some(result.and_then(|reply| {
            if reply.trim().is_empty() {
                Err(RelayError::EmptyReply)
            } else {
                Ok(reply)
            }
        }))
    }
}
