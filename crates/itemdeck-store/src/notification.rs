//! Transient user-facing messages.
//!
//! At most one notification is visible. Showing a new one replaces the old
//! one, and every show returns a [`NotificationHandle`] carrying a fresh
//! generation number. Dismissal is always by handle, so the timer of a
//! replaced notification cannot clear the one that replaced it.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

pub const DEFAULT_NOTIFICATION_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

/// Identifies one call to `show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationHandle {
    generation: u64,
}

#[derive(Debug)]
struct Shown {
    notification: Notification,
    handle: NotificationHandle,
    shown_at: Instant,
}

/// Single-slot notification state with generation-tracked dismissal.
#[derive(Debug)]
pub struct NotificationChannel {
    shown: Option<Shown>,
    next_generation: u64,
    timeout: Duration,
}

impl NotificationChannel {
    pub fn new(timeout: Duration) -> Self {
        Self {
            shown: None,
            next_generation: 0,
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn show(&mut self, message: impl Into<String>, kind: NotificationKind) -> NotificationHandle {
        self.show_at(message, kind, Instant::now())
    }

    /// Like [`show`](Self::show) with an explicit clock reading.
    pub fn show_at(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
        now: Instant,
    ) -> NotificationHandle {
        self.next_generation += 1;
        let handle = NotificationHandle {
            generation: self.next_generation,
        };
        let notification = Notification {
            message: message.into(),
            kind,
        };
        tracing::debug!(kind = %kind, generation = handle.generation, "notification shown");
        self.shown = Some(Shown {
            notification,
            handle,
            shown_at: now,
        });
        handle
    }

    pub fn current(&self) -> Option<&Notification> {
        self.shown.as_ref().map(|shown| &shown.notification)
    }

    pub fn is_current(&self, handle: NotificationHandle) -> bool {
        self.shown.as_ref().is_some_and(|shown| shown.handle == handle)
    }

    /// Clear the notification if `handle` is still the visible one.
    pub fn dismiss(&mut self, handle: NotificationHandle) -> bool {
        if !self.is_current(handle) {
            return false;
        }
        self.shown = None;
        true
    }

    /// Clear the visible notification once its timeout has elapsed at `now`.
    pub fn expire(&mut self, now: Instant) -> bool {
        let expired = self
            .shown
            .as_ref()
            .is_some_and(|shown| now.saturating_duration_since(shown.shown_at) >= self.timeout);
        if expired {
            self.shown = None;
        }
        expired
    }
}

impl Default for NotificationChannel {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFICATION_TIMEOUT)
    }
}

/// Anything workflows can report an outcome to.
pub trait Notifier {
    fn notify(&mut self, message: String, kind: NotificationKind) -> NotificationHandle;
}

impl Notifier for NotificationChannel {
    fn notify(&mut self, message: String, kind: NotificationKind) -> NotificationHandle {
        self.show(message, kind)
    }
}

/// Thread-safe channel whose notifications dismiss themselves on a tokio timer.
#[derive(Debug, Clone)]
pub struct SharedNotifications {
    inner: Arc<Mutex<NotificationChannel>>,
}

impl SharedNotifications {
    pub fn new(timeout: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(NotificationChannel::new(timeout))),
        }
    }

    fn lock(&self) -> MutexGuard<'_, NotificationChannel> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn current(&self) -> Option<Notification> {
        self.lock().current().cloned()
    }

    pub fn dismiss(&self, handle: NotificationHandle) -> bool {
        self.lock().dismiss(handle)
    }

    /// Show a notification and schedule its dismissal after the timeout.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn show_with_auto_dismiss(
        &self,
        message: impl Into<String>,
        kind: NotificationKind,
    ) -> NotificationHandle {
        let (handle, timeout) = {
            let mut channel = self.lock();
            (channel.show(message, kind), channel.timeout())
        };
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            tokio::time::sleep(timeout).await;
            let dismissed = inner
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .dismiss(handle);
            tracing::trace!(generation = handle.generation, dismissed, "auto-dismiss fired");
        });
        handle
    }
}

impl Default for SharedNotifications {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFICATION_TIMEOUT)
    }
}

impl Notifier for SharedNotifications {
    /// Auto-dismisses when a tokio runtime is available, otherwise the
    /// notification stays until replaced or dismissed.
    fn notify(&mut self, message: String, kind: NotificationKind) -> NotificationHandle {
        if tokio::runtime::Handle::try_current().is_ok() {
            self.show_with_auto_dismiss(message, kind)
        } else {
            self.lock().show(message, kind)
        }
    }
}
