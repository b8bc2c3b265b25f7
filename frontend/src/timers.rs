use gloo_timers::callback::Timeout;
use std::time::Duration;

/// Holds at most one pending timeout. Scheduling replaces, and thereby
/// cancels, whatever was pending.
#[derive(Default)]
pub struct ScheduledTask {
    pending: Option<Timeout>,
}

impl ScheduledTask {
    pub fn schedule<F>(&mut self, delay: Duration, callback: F)
    where
        F: FnOnce() + 'static,
    {
        self.cancel();
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        self.pending = Some(Timeout::new(millis, callback));
    }

    pub fn cancel(&mut self) {
        if let Some(timeout) = self.pending.take() {
            timeout.cancel();
        }
    }
}

/// Runs only the last of a burst of calls, `delay` after the burst ends.
pub struct Debouncer {
    delay: Duration,
    task: ScheduledTask,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Debouncer {
            delay,
            task: ScheduledTask::default(),
        }
    }

    pub fn call<F>(&mut self, callback: F)
    where
        F: FnOnce() + 'static,
    {
        self.task.schedule(self.delay, callback);
    }

    pub fn cancel(&mut self) {
        self.task.cancel();
    }
}
