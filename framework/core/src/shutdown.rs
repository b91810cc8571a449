use tokio::sync::watch::{Receiver, Sender};

/// Raises the shutdown signal for a suite run.
///
/// Scenarios are never interrupted part way through. Listeners check the signal between
/// scenarios and stop starting new work once it has been raised.
#[derive(Debug, Clone)]
pub struct ShutdownHandle {
    sender: Sender<bool>,
}

impl Default for ShutdownHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl ShutdownHandle {
    pub fn new() -> Self {
        Self {
            sender: tokio::sync::watch::channel(false).0,
        }
    }

    pub fn shutdown(&self) {
        // `send_replace` keeps the value even when nobody is subscribed yet.
        let previous = self.sender.send_replace(true);
        if previous {
            log::debug!("Shutdown signal was already raised");
        }
    }

    pub fn is_shutdown(&self) -> bool {
        *self.sender.borrow()
    }

    pub fn new_listener(&self) -> ShutdownListener {
        ShutdownListener {
            receiver: self.sender.subscribe(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ShutdownListener {
    receiver: Receiver<bool>,
}

impl ShutdownListener {
    /// Point in time check of the shutdown signal.
    pub fn should_shutdown(&self) -> bool {
        *self.receiver.borrow()
    }

    /// Wait until the shutdown signal is raised, or until the handle is dropped.
    pub async fn wait_for_shutdown(&mut self) {
        if self.receiver.wait_for(|raised| *raised).await.is_err() {
            log::trace!("Shutdown handle dropped while waiting for shutdown");
        }
    }
}
