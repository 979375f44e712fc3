//! Background Scheduling
//!
//! Low-priority work (material pre-warming) is handed to a
//! [`BackgroundScheduler`] instead of running on the render loop. The backend
//! decides *when* it runs:
//!
//! - [`ImmediateScheduler`]: runs the task inline. Useful in tests and tools.
//! - [`IdleQueueScheduler`]: queues the task until the host calls
//!   [`IdleQueueScheduler::run_idle`] from an idle slot between frames.
//! - [`WorkerScheduler`]: a single background thread fed by a channel.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::thread::JoinHandle;

/// A unit of deferred work.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Capability to run work outside the render loop's hot path.
pub trait BackgroundScheduler: Send + Sync {
    fn schedule(&self, task: Task);

    /// Backend name, for logging.
    fn name(&self) -> &'static str;
}

fn run_guarded(task: Task, backend: &str) {
    if catch_unwind(AssertUnwindSafe(task)).is_err() {
        log::warn!("{backend}: background task panicked");
    }
}

// ============================================================================
// Immediate
// ============================================================================

#[derive(Debug, Default, Clone, Copy)]
pub struct ImmediateScheduler;

impl BackgroundScheduler for ImmediateScheduler {
    fn schedule(&self, task: Task) {
        run_guarded(task, self.name());
    }

    fn name(&self) -> &'static str {
        "immediate"
    }
}

// ============================================================================
// Idle queue
// ============================================================================

/// Deferred queue drained from the host's idle callback.
pub struct IdleQueueScheduler {
    sender: flume::Sender<Task>,
    receiver: flume::Receiver<Task>,
}

impl Default for IdleQueueScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl IdleQueueScheduler {
    #[must_use]
    pub fn new() -> Self {
        let (sender, receiver) = flume::unbounded();
        Self { sender, receiver }
    }

    /// Runs up to `max_tasks` queued tasks and returns how many ran.
    pub fn run_idle(&self, max_tasks: usize) -> usize {
        let mut ran = 0;
        while ran < max_tasks {
            match self.receiver.try_recv() {
                Ok(task) => {
                    run_guarded(task, self.name());
                    ran += 1;
                }
                Err(_) => break,
            }
        }
        ran
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.receiver.len()
    }
}

impl BackgroundScheduler for IdleQueueScheduler {
    fn schedule(&self, task: Task) {
        // Both ends live in `self`, so the channel cannot be disconnected here.
        let _ = self.sender.send(task);
    }

    fn name(&self) -> &'static str {
        "idle-queue"
    }
}

// ============================================================================
// Worker thread
// ============================================================================

/// One background thread draining a task channel.
pub struct WorkerScheduler {
    sender: Option<flume::Sender<Task>>,
    handle: Option<JoinHandle<()>>,
}

impl Default for WorkerScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkerScheduler {
    #[must_use]
    pub fn new() -> Self {
        let (sender, receiver) = flume::unbounded::<Task>();
        let handle = std::thread::Builder::new()
            .name("drape-background".into())
            .spawn(move || {
                while let Ok(task) = receiver.recv() {
                    run_guarded(task, "worker");
                }
            });

        let handle = match handle {
            Ok(handle) => Some(handle),
            Err(err) => {
                log::warn!("worker: failed to spawn background thread ({err}), tasks will run inline");
                None
            }
        };

        Self {
            sender: handle.as_ref().map(|_| sender),
            handle,
        }
    }

    /// Finishes every queued task, then stops the thread.
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        self.sender.take();
        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            log::warn!("worker: background thread terminated abnormally");
        }
    }
}

impl BackgroundScheduler for WorkerScheduler {
    fn schedule(&self, task: Task) {
        match &self.sender {
            Some(sender) => {
                if let Err(flume::SendError(task)) = sender.send(task) {
                    run_guarded(task, self.name());
                }
            }
            None => run_guarded(task, self.name()),
        }
    }

    fn name(&self) -> &'static str {
        "worker"
    }
}

impl Drop for WorkerScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}
