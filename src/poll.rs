use crate::error::WizardError;
use std::future::Future;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{info, warn};

/// Handle to a running poll loop. Dropping it closes the stop channel,
/// which ends the loop after the tick in progress.
pub struct PollHandle {
    stop_tx: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl PollHandle {
    pub fn stop(&self) {
        let _ = self.stop_tx.send(true);
    }

    /// Stops the loop and waits for the task to finish.
    pub async fn shutdown(self) {
        let _ = self.stop_tx.send(true);
        let _ = self.handle.await;
    }
}

/// Spawns a fixed-interval poll loop. One tick is awaited to completion
/// before the next interval starts, so ticks never overlap their
/// predecessor. Tick errors are logged and polling continues.
pub fn spawn_poller<F, Fut>(name: &'static str, interval: Duration, mut tick: F) -> PollHandle
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = Result<(), WizardError>> + Send,
{
    let (stop_tx, mut stop_rx) = watch::channel(false);

    let handle = tokio::spawn(async move {
        info!("starting {} poller (every {:?})", name, interval);
        loop {
            if *stop_rx.borrow() {
                break;
            }

            if let Err(e) = tick().await {
                warn!("{} poll tick failed: {}", name, e);
            }

            tokio::select! {
                _ = sleep(interval) => {}
                res = stop_rx.changed() => {
                    // A closed channel means the handle is gone: stop
                    // rather than spin through the sleep arm.
                    if res.is_err() || *stop_rx.borrow() {
                        break;
                    }
                }
            }
        }
        info!("{} poller stopped", name);
    });

    PollHandle { stop_tx, handle }
}
