use crate::errors::{AppError, AppResult};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::trace;

/// Background thread calling a closure at a fixed cadence.
///
/// The first call happens right away. Cancelled by `stop()` or on drop.
pub struct Ticker {
    cancel: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn spawn<F>(interval: Duration, mut on_tick: F) -> AppResult<Self>
    where
        F: FnMut() + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<()>();

        let handle = thread::Builder::new()
            .name("rdaylog-ticker".into())
            .spawn(move || {
                loop {
                    on_tick();
                    match rx.recv_timeout(interval) {
                        Err(RecvTimeoutError::Timeout) => continue,
                        // explicit cancel or sender dropped
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
                trace!("ticker stopped");
            })?;

        Ok(Self {
            cancel: Some(tx),
            handle: Some(handle),
        })
    }

    /// Cancel and wait for the thread; no tick is delivered afterwards.
    pub fn stop(mut self) -> AppResult<()> {
        self.shutdown()
    }

    fn shutdown(&mut self) -> AppResult<()> {
        if let Some(tx) = self.cancel.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            handle
                .join()
                .map_err(|_| AppError::Other("ticker thread panicked".into()))?;
        }
        Ok(())
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        let _ = self.shutdown();
    }
}
