//! Cancellable, fire-once deferred callbacks.
//!
//! The page view never touches a clock directly; it asks a [`Scheduler`]
//! for a timer and keeps the returned handle so teardown can cancel it.
//! Three schedulers exist:
//!
//! - [`ManualScheduler`] - virtual clock advanced by hand (tests, dry runs)
//! - [`TokioScheduler`] - `tokio::time::sleep` on a `LocalSet` (feature `tokio`)
//! - the browser scheduler in the CSR app (`set_timeout_with_handle`)
//!
//! Tasks are `FnOnce` without `Send`: everything runs on one thread.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

/// Boxed deferred task.
pub type Task = Box<dyn FnOnce() + 'static>;

/// Handle to a scheduled task.
pub trait TimerHandle {
    /// Prevent the task from running. No-op if it already ran.
    fn cancel(&mut self);
}

/// Something that can run a task after a delay.
pub trait Scheduler {
    /// Handle returned for each scheduled task.
    type Handle: TimerHandle;

    /// Run `task` once after `delay`.
    fn schedule(&self, delay: Duration, task: Task) -> Self::Handle;
}

// ============================================================================
// Manual (virtual clock)
// ============================================================================

struct ManualTask {
    id: u64,
    due: Duration,
    task: Task,
}

#[derive(Default)]
struct ManualInner {
    now: Duration,
    next_id: u64,
    queue: Vec<ManualTask>,
}

/// Scheduler driven by [`ManualScheduler::advance`].
///
/// Cloning shares the clock. Tasks due at the same instant run in the
/// order they were scheduled.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Rc<RefCell<ManualInner>>,
}

impl ManualScheduler {
    /// Clock at zero, no tasks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation.
    pub fn now(&self) -> Duration {
        self.inner.borrow().now
    }

    /// Number of tasks still waiting.
    pub fn pending(&self) -> usize {
        self.inner.borrow().queue.len()
    }

    /// Move the clock forward, running every task that falls due.
    ///
    /// Tasks scheduled by a running task are honored if they fall inside
    /// the same window.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        while let Some(task) = self.pop_due(target) {
            (task.task)();
        }
        self.inner.borrow_mut().now = target;
    }

    fn pop_due(&self, target: Duration) -> Option<ManualTask> {
        let mut inner = self.inner.borrow_mut();
        let idx = inner
            .queue
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= target)
            .min_by_key(|(_, t)| (t.due, t.id))
            .map(|(idx, _)| idx)?;
        let task = inner.queue.remove(idx);
        inner.now = task.due;
        Some(task)
    }
}

impl std::fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualScheduler")
            .field("now", &self.now())
            .field("pending", &self.pending())
            .finish()
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule(&self, delay: Duration, task: Task) -> ManualHandle {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        let due = inner.now + delay;
        inner.queue.push(ManualTask { id, due, task });
        ManualHandle {
            id,
            inner: Rc::downgrade(&self.inner),
        }
    }
}

/// Handle for a [`ManualScheduler`] task.
#[derive(Debug)]
pub struct ManualHandle {
    id: u64,
    inner: Weak<RefCell<ManualInner>>,
}

impl TimerHandle for ManualHandle {
    fn cancel(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.borrow_mut().queue.retain(|t| t.id != self.id);
        }
    }
}

// ============================================================================
// Tokio
// ============================================================================

#[cfg(feature = "tokio")]
pub use self::tokio_impl::{TokioHandle, TokioScheduler};

#[cfg(feature = "tokio")]
mod tokio_impl {
    use super::{Scheduler, Task, TimerHandle};
    use std::time::Duration;
    use tokio::task::JoinHandle;

    /// Real-time scheduler backed by `tokio::time::sleep_until`.
    ///
    /// The deadline is fixed when `schedule` is called, not when the
    /// spawned task is first polled. Tasks are spawned with `spawn_local`,
    /// so scheduling must happen inside a `tokio::task::LocalSet`.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct TokioScheduler;

    impl Scheduler for TokioScheduler {
        type Handle = TokioHandle;

        fn schedule(&self, delay: Duration, task: Task) -> TokioHandle {
            let deadline = tokio::time::Instant::now() + delay;
            let join = tokio::task::spawn_local(async move {
                tokio::time::sleep_until(deadline).await;
                task();
            });
            TokioHandle(Some(join))
        }
    }

    /// Handle for a [`TokioScheduler`] task; cancelling aborts it.
    #[derive(Debug)]
    pub struct TokioHandle(Option<JoinHandle<()>>);

    impl TimerHandle for TokioHandle {
        fn cancel(&mut self) {
            if let Some(join) = self.0.take() {
                join.abort();
            }
        }
    }
}
