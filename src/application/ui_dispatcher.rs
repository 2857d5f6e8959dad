//! UI dispatcher
//!
//! Prompts must not run on the caller's thread: decoding happens on worker
//! threads that cannot block on an operator. Tasks are posted to a single
//! dispatcher thread and run there in order.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc;
use std::thread::{self, JoinHandle};

use parking_lot::Mutex;
use thiserror::Error;

pub type UiTask = Box<dyn FnOnce() + Send + 'static>;

/// Runs tasks on the thread that owns operator interaction.
pub trait UiDispatcher: Send + Sync {
    /// Queue `task`. Returns immediately; a rejected task is dropped.
    fn post(&self, task: UiTask) -> Result<(), DispatchError>;
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DispatchError {
    #[error("UI dispatcher is shut down")]
    Closed,
}

/// Dispatcher backed by one named thread.
///
/// A task that panics is logged and does not stop the thread.
pub struct ThreadDispatcher {
    sender: Mutex<Option<mpsc::Sender<UiTask>>>,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl ThreadDispatcher {
    pub fn spawn(name: &str) -> std::io::Result<Self> {
        let (sender, receiver) = mpsc::channel::<UiTask>();
        let worker = thread::Builder::new()
            .name(name.to_string())
            .spawn(move || {
                for task in receiver {
                    if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(task)) {
                        tracing::error!(panic = %panic_message(&*payload), "UI task panicked");
                    }
                }
                tracing::trace!("UI dispatcher stopped");
            })?;

        Ok(Self {
            sender: Mutex::new(Some(sender)),
            worker: Mutex::new(Some(worker)),
        })
    }

    /// Block until every task posted before this call has run.
    pub fn flush(&self) -> Result<(), DispatchError> {
        let (done, wait) = mpsc::channel();
        self.post(Box::new(move || {
            let _ = done.send(());
        }))?;
        wait.recv().map_err(|_| DispatchError::Closed)
    }

    /// Stop accepting tasks, run the queued ones and join the thread.
    pub fn shutdown(&self) {
        self.sender.lock().take();
        let worker = self.worker.lock().take();
        if let Some(worker) = worker {
            if worker.join().is_err() {
                tracing::warn!("UI dispatcher thread ended abnormally");
            }
        }
    }
}

impl UiDispatcher for ThreadDispatcher {
    fn post(&self, task: UiTask) -> Result<(), DispatchError> {
        let sender = self.sender.lock();
        let sender = sender.as_ref().ok_or(DispatchError::Closed)?;
        sender.send(task).map_err(|_| DispatchError::Closed)
    }
}

impl Drop for ThreadDispatcher {
    fn drop(&mut self) {
        // Detach: a prompt may still be waiting on the operator.
        self.sender.lock().take();
    }
}

/// Best-effort text of a panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
