// Tue Aug 04 2026 - Alex

use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct PoolTask {
    id: u64,
    name: String,
    job: Box<dyn FnOnce() + Send + 'static>,
}

impl PoolTask {
    pub fn new<F>(id: u64, name: impl Into<String>, job: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            id,
            name: name.into(),
            job: Box::new(job),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn execute(self) {
        (self.job)();
    }
}

// Bounded-concurrency pool driven by a single monitor thread. Each pass
// reaps finished workers from the active set, then promotes pending tasks
// into fresh worker threads until the set reaches max_workers. Completion
// is declared exactly when a pass observes pending and active both empty.
// Everything sleeps on a fixed interval; archive scans dominate it.
pub struct WorkerPool {
    inner: Arc<PoolInner>,
}

struct PoolInner {
    max_workers: usize,
    poll_interval: Duration,
    pending: Mutex<VecDeque<PoolTask>>,
    active: Mutex<Vec<ActiveWorker>>,
    done: AtomicBool,
    monitor_running: AtomicBool,
}

struct ActiveWorker {
    task_id: u64,
    task_name: String,
    handle: thread::JoinHandle<()>,
}

impl WorkerPool {
    pub fn new(max_workers: usize) -> Self {
        Self::with_poll_interval(max_workers, DEFAULT_POLL_INTERVAL)
    }

    pub fn with_poll_interval(max_workers: usize, poll_interval: Duration) -> Self {
        Self {
            inner: Arc::new(PoolInner {
                max_workers: max_workers.max(1),
                poll_interval,
                pending: Mutex::new(VecDeque::new()),
                active: Mutex::new(Vec::new()),
                done: AtomicBool::new(true),
                monitor_running: AtomicBool::new(false),
            }),
        }
    }

    pub fn submit(&self, tasks: Vec<PoolTask>) {
        let spawn_monitor = {
            // Holding the pending lock here pairs with try_finish, which
            // clears monitor_running under the same lock: a batch can never
            // land between the monitor's last emptiness check and its exit.
            let mut pending = self.inner.pending.lock();
            pending.extend(tasks);
            self.inner.done.store(false, Ordering::SeqCst);
            self.inner
                .monitor_running
                .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
                .is_ok()
        };

        if spawn_monitor {
            let inner = Arc::clone(&self.inner);
            thread::spawn(move || inner.monitor_loop());
        }
    }

    pub fn wait_until_done(&self) {
        while !self.inner.done.load(Ordering::SeqCst) {
            thread::sleep(self.inner.poll_interval);
        }
    }

    pub fn is_done(&self) -> bool {
        self.inner.done.load(Ordering::SeqCst)
    }

    pub fn pending_count(&self) -> usize {
        self.inner.pending.lock().len()
    }

    pub fn active_count(&self) -> usize {
        self.inner.active.lock().len()
    }

    pub fn max_workers(&self) -> usize {
        self.inner.max_workers
    }
}

impl PoolInner {
    fn monitor_loop(self: Arc<Self>) {
        loop {
            self.reap_finished();
            self.promote_pending();
            if self.try_finish() {
                break;
            }
            thread::sleep(self.poll_interval);
        }
    }

    fn reap_finished(&self) {
        let finished: Vec<ActiveWorker> = {
            let mut active = self.active.lock();
            let mut remaining = Vec::with_capacity(active.len());
            let mut finished = Vec::new();
            for worker in active.drain(..) {
                if worker.handle.is_finished() {
                    finished.push(worker);
                } else {
                    remaining.push(worker);
                }
            }
            *active = remaining;
            finished
        };

        for worker in finished {
            if worker.handle.join().is_err() {
                log::warn!(
                    "Worker for task #{} ({}) panicked",
                    worker.task_id,
                    worker.task_name
                );
            }
        }
    }

    fn promote_pending(&self) {
        loop {
            {
                let active = self.active.lock();
                if active.len() >= self.max_workers {
                    return;
                }
            }
            let task = self.pending.lock().pop_front();
            let Some(task) = task else {
                return;
            };

            let task_id = task.id;
            let task_name = task.name.clone();
            log::debug!("Starting task #{} ({})", task_id, task_name);
            let handle = thread::spawn(move || task.execute());
            self.active.lock().push(ActiveWorker {
                task_id,
                task_name,
                handle,
            });
        }
    }

    fn try_finish(&self) -> bool {
        let pending = self.pending.lock();
        let active = self.active.lock();
        if pending.is_empty() && active.is_empty() {
            self.done.store(true, Ordering::SeqCst);
            self.monitor_running.store(false, Ordering::SeqCst);
            true
        } else {
            false
        }
    }
}
