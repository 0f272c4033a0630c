use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    rc::{Rc, Weak},
    time::Duration,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(pub u64);

/// Host timer service. Implementations run `task` once, after `delay`.
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Option<TaskHandle>;
    fn cancel(&self, handle: TaskHandle);
}

struct ScopeInner {
    scheduler: Rc<dyn Scheduler>,
    alive: Cell<bool>,
    next_id: Cell<u64>,
    pending: RefCell<HashMap<u64, TaskHandle>>,
}

/// One cancellation token per component instance.
///
/// Every timeout spawned through a scope is tracked until it fires. Calling
/// [`TaskScope::cancel`] clears all of them with the scheduler, and any task
/// that still gets invoked afterwards is a no-op.
#[derive(Clone)]
pub struct TaskScope {
    inner: Rc<ScopeInner>,
}

impl TaskScope {
    pub fn new(scheduler: Rc<dyn Scheduler>) -> Self {
        Self {
            inner: Rc::new(ScopeInner {
                scheduler,
                alive: Cell::new(true),
                next_id: Cell::new(0),
                pending: RefCell::new(HashMap::new()),
            }),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.inner.alive.get()
    }

    pub fn pending(&self) -> usize {
        self.inner.pending.borrow().len()
    }

    pub fn spawn_after(&self, delay: Duration, task: impl FnOnce() + 'static) {
        if !self.is_alive() {
            return;
        }
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);

        let weak: Weak<ScopeInner> = Rc::downgrade(&self.inner);
        let guarded = Box::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            if !inner.alive.get() {
                return;
            }
            inner.pending.borrow_mut().remove(&id);
            task();
        });

        if let Some(handle) = self.inner.scheduler.schedule(delay, guarded) {
            if self.is_alive() {
                self.inner.pending.borrow_mut().insert(id, handle);
            }
        } else {
            log::warn!("scheduler refused a task ({delay:?})");
        }
    }

    pub fn cancel(&self) {
        if !self.inner.alive.replace(false) {
            return;
        }
        let pending = std::mem::take(&mut *self.inner.pending.borrow_mut());
        for handle in pending.into_values() {
            self.inner.scheduler.cancel(handle);
        }
    }
}

impl std::fmt::Debug for TaskScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskScope")
            .field("alive", &self.is_alive())
            .field("pending", &self.pending())
            .finish()
    }
}

/// Deterministic scheduler driven by [`ManualScheduler::advance`].
#[cfg(test)]
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<Duration>,
    next_handle: Cell<u64>,
    queue: RefCell<Vec<(Duration, u64, Box<dyn FnOnce()>)>>,
}

#[cfg(test)]
impl ManualScheduler {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn now(&self) -> Duration {
        self.now.get()
    }

    pub fn queued(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Moves the clock forward, running every task that falls due in order.
    pub fn advance(&self, by: Duration) {
        let target = self.now.get() + by;
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                let due = queue
                    .iter()
                    .enumerate()
                    .filter(|(_, (at, _, _))| *at <= target)
                    .min_by_key(|(_, (at, handle, _))| (*at, *handle))
                    .map(|(i, _)| i);
                due.map(|i| queue.remove(i))
            };
            match next {
                Some((at, _, task)) => {
                    self.now.set(at);
                    task();
                }
                None => break,
            }
        }
        self.now.set(target);
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }
}

#[cfg(test)]
impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Option<TaskHandle> {
        let handle = self.next_handle.get();
        self.next_handle.set(handle + 1);
        self.queue
            .borrow_mut()
            .push((self.now.get() + delay, handle, task));
        Some(TaskHandle(handle))
    }

    fn cancel(&self, handle: TaskHandle) {
        self.queue.borrow_mut().retain(|(_, h, _)| *h != handle.0);
    }
}
