//! Delayed delivery of the computer's turn.
//!
//! The session hands out an [`AiTicket`] when the computer is due to move.
//! [`AiScheduler`] holds on to it for the configured pause, then sends it to
//! the UI loop, which redeems it with [`GameSession::play_ai_move`].
//!
//! [`GameSession::play_ai_move`]: crate::GameSession::play_ai_move

use crate::games::tictactoe::AiTicket;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, instrument};

/// Sends tickets back after a fixed delay. At most one is in flight.
#[derive(Debug)]
pub struct AiScheduler {
    delay: Duration,
    tx: mpsc::UnboundedSender<AiTicket>,
    pending: Option<JoinHandle<()>>,
}

impl AiScheduler {
    /// Creates a scheduler and the receiver its tickets arrive on.
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<AiTicket>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let scheduler = Self {
            delay,
            tx,
            pending: None,
        };
        (scheduler, rx)
    }

    /// Delivers `ticket` after the delay, replacing anything still pending.
    ///
    /// Must be called from within a tokio runtime.
    #[instrument(skip(self), fields(delay_ms = self.delay.as_millis() as u64))]
    pub fn schedule(&mut self, ticket: AiTicket) {
        self.cancel();
        let tx = self.tx.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            sleep(delay).await;
            if tx.send(ticket).is_err() {
                debug!("Receiver gone, dropping computer move");
            }
        }));
    }

    /// Aborts the pending delivery, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            debug!("Cancelling pending computer move");
            handle.abort();
        }
    }

    /// True while a delivery has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for AiScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
