//! Transient notification banners.
//!
//! FIFO queue rendered into a fixed slot, auto-expiring per level.
//! One reconciled policy across all views: success/info banners live
//! 3 s, warning/error banners 5 s. The queue itself is pure; `Notifier`
//! wraps it in a signal and schedules the expiry timers.

use leptos::prelude::*;
use leptos::task::spawn_local;

use gloo_timers::future::TimeoutFuture;

pub const SUCCESS_TIMEOUT_MS: u32 = 3_000;
pub const ERROR_TIMEOUT_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Info,
    Warning,
    Error,
}

impl Level {
    pub fn timeout_ms(&self) -> u32 {
        match self {
            Level::Success | Level::Info => SUCCESS_TIMEOUT_MS,
            Level::Warning | Level::Error => ERROR_TIMEOUT_MS,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Level::Success => "notification success",
            Level::Info => "notification info",
            Level::Warning => "notification warning",
            Level::Error => "notification error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub level: Level,
    pub message: String,
}

/// Pure FIFO queue; newest banners append at the end. No bound is
/// enforced, matching the stacked rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Queue {
    items: Vec<Notification>,
    next_id: u64,
}

impl Queue {
    pub fn push(&mut self, level: Level, message: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notification { id, level, message });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }
}

/// Handle shared through `AppContext`. Cloning is cheap; all clones
/// feed the same banner slot.
#[derive(Clone, Copy)]
pub struct Notifier {
    queue: RwSignal<Queue>,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier {
    pub fn new() -> Self {
        Self { queue: RwSignal::new(Queue::default()) }
    }

    pub fn queue(&self) -> RwSignal<Queue> {
        self.queue
    }

    pub fn notify(&self, level: Level, message: impl Into<String>) {
        let id = self
            .queue
            .try_update(|q| q.push(level, message.into()))
            .unwrap_or_default();
        let queue = self.queue;
        spawn_local(async move {
            TimeoutFuture::new(level.timeout_ms()).await;
            queue.update(|q| q.dismiss(id));
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(Level::Success, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notify(Level::Info, message);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.notify(Level::Warning, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(Level::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banners_render_fifo() {
        let mut queue = Queue::default();
        queue.push(Level::Success, "first".into());
        queue.push(Level::Error, "second".into());
        let messages: Vec<_> = queue.items().iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let mut queue = Queue::default();
        let a = queue.push(Level::Info, "a".into());
        let b = queue.push(Level::Info, "b".into());
        queue.dismiss(a);
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].id, b);
        // Dismissing an expired id is a no-op.
        queue.dismiss(a);
        assert_eq!(queue.items().len(), 1);
    }

    #[test]
    fn expiry_policy_by_level() {
        assert_eq!(Level::Success.timeout_ms(), 3_000);
        assert_eq!(Level::Info.timeout_ms(), 3_000);
        assert_eq!(Level::Warning.timeout_ms(), 5_000);
        assert_eq!(Level::Error.timeout_ms(), 5_000);
    }
}
