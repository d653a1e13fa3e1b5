//! Cancellable one-shot timer for the "copied" revert.
//!
//! At most one timer is armed. Scheduling a new one cancels the previous
//! one, so only the most recent copy can clear the flag.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Default)]
pub struct ResetTimer {
    pending: Option<CancellationToken>,
}

impl ResetTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sends `event` on `tx` after `after`, unless cancelled or replaced first.
    pub fn schedule<E>(&mut self, after: Duration, tx: UnboundedSender<E>, event: E)
    where
        E: Send + 'static,
    {
        self.cancel_pending();

        let cancel = CancellationToken::new();
        let token = cancel.clone();
        tokio::spawn(async move {
            tokio::select! {
                () = token.cancelled() => {}
                () = tokio::time::sleep(after) => {
                    let _ = tx.send(event);
                }
            }
        });
        self.pending = Some(cancel);
    }

    pub fn cancel_pending(&mut self) {
        if let Some(cancel) = self.pending.take() {
            cancel.cancel();
        }
    }

    /// True while a timer is armed and has not been cancelled.
    #[cfg(test)]
    fn is_scheduled(&self) -> bool {
        self.pending.as_ref().is_some_and(|c| !c.is_cancelled())
    }
}

impl Drop for ResetTimer {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
