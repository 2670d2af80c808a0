//! Background execution of a bleed for hosts that must not block.
//!
//! The core is synchronous; [`BleedTask`] moves one call onto a worker thread
//! and delivers the result over a channel. A host loop polls with
//! [`BleedTask::try_result`] or blocks with [`BleedTask::wait`]. Cancelling
//! simply drops the receiving end: the worker finishes its current call and
//! the result is discarded, never half-applied.
//!
//! [`BleedSession`] keeps at most one task in flight and can be reset at any
//! time.

use crate::bleed::EdgeBleeder;
use crate::error::Result;
use crate::image::ImageRgba;
use log::debug;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread::{self, JoinHandle};

/// A single bleed running on its own thread.
pub struct BleedTask {
    receiver: Receiver<Result<ImageRgba>>,
    handle: Option<JoinHandle<()>>,
}

impl BleedTask {
    /// Start bleeding `source` against `mask` at `width × height`.
    ///
    /// Buffers are moved into the task and owned exclusively by it until the
    /// result is delivered.
    pub fn spawn(
        bleeder: EdgeBleeder,
        source: ImageRgba,
        mask: ImageRgba,
        width: usize,
        height: usize,
    ) -> Self {
        let (sender, receiver) = mpsc::channel();
        let handle = thread::spawn(move || {
            let result = bleeder.process(&source, &mask, width, height);
            // A closed channel means the task was cancelled.
            if sender.send(result).is_err() {
                debug!("BleedTask: result discarded after cancel");
            }
        });
        Self {
            receiver,
            handle: Some(handle),
        }
    }

    /// Poll for the result without blocking. Returns `None` while running.
    ///
    /// Panics raised on the worker are resumed on the caller.
    pub fn try_result(&mut self) -> Option<Result<ImageRgba>> {
        match self.receiver.try_recv() {
            Ok(result) => {
                self.join();
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.join();
                unreachable!("bleed worker exited without sending a result")
            }
        }
    }

    /// Block until the result is available.
    pub fn wait(mut self) -> Result<ImageRgba> {
        match self.receiver.recv() {
            Ok(result) => {
                self.join();
                result
            }
            Err(_) => {
                self.join();
                unreachable!("bleed worker exited without sending a result")
            }
        }
    }

    /// Abandon the task. The worker is detached and its result dropped.
    pub fn cancel(self) {
        debug!("BleedTask: cancelled");
    }

    fn join(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Err(payload) = handle.join() {
                std::panic::resume_unwind(payload);
            }
        }
    }
}

/// Outcome of polling a [`BleedSession`].
#[derive(Debug)]
pub enum SessionPoll {
    /// No task has been submitted (or the last result was already taken).
    Idle,
    /// A task is still running.
    Pending,
    /// The task finished.
    Ready(Result<ImageRgba>),
}

/// Single-flight driver: at most one bleed in progress per session.
#[derive(Default)]
pub struct BleedSession {
    bleeder: EdgeBleeder,
    task: Option<BleedTask>,
}

impl BleedSession {
    pub fn new(bleeder: EdgeBleeder) -> Self {
        Self {
            bleeder,
            task: None,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.task.is_some()
    }

    /// Start a bleed unless one is already running. Returns whether it started.
    pub fn submit(
        &mut self,
        source: ImageRgba,
        mask: ImageRgba,
        width: usize,
        height: usize,
    ) -> bool {
        if self.task.is_some() {
            debug!("BleedSession: submit ignored, task in flight");
            return false;
        }
        self.task = Some(BleedTask::spawn(
            self.bleeder.clone(),
            source,
            mask,
            width,
            height,
        ));
        true
    }

    /// Check on the running task, taking its result once it is ready.
    pub fn poll(&mut self) -> SessionPoll {
        let Some(task) = self.task.as_mut() else {
            return SessionPoll::Idle;
        };
        match task.try_result() {
            Some(result) => {
                self.task = None;
                SessionPoll::Ready(result)
            }
            None => SessionPoll::Pending,
        }
    }

    /// Drop any in-flight task and return to idle.
    pub fn reset(&mut self) {
        if let Some(task) = self.task.take() {
            task.cancel();
        }
    }
}
