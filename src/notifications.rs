//! Transient toast notifications.
//!
//! Every recoverable failure in the engine (rejected upload, document load
//! error) surfaces as a toast; the embedder drains the manager and renders
//! them however it likes. Toasts expire on their own and are pruned lazily.

use std::time::{Duration, Instant};

/// Severity of a toast notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastVariant {
    /// How long a toast of this severity stays visible by default.
    pub fn default_duration(&self) -> Duration {
        match self {
            ToastVariant::Info | ToastVariant::Success => Duration::from_secs(3),
            ToastVariant::Warning => Duration::from_secs(4),
            ToastVariant::Error => Duration::from_secs(5),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastVariant::Success => "✓",
            ToastVariant::Error => "✗",
            ToastVariant::Info => "ℹ",
            ToastVariant::Warning => "⚠",
        }
    }
}

/// One transient notification.
#[derive(Clone, Debug)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub variant: ToastVariant,
    pub duration: Duration,
    created: Instant,
}

impl Toast {
    fn new(message: impl Into<String>, variant: ToastVariant) -> Self {
        Self {
            id: 0,
            message: message.into(),
            variant,
            duration: variant.default_duration(),
            created: Instant::now(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Error)
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.created.elapsed() >= self.duration
    }
}

/// Owns the queue of live toasts.
#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mut toast: Toast) {
        toast.id = self.next_id;
        self.next_id += 1;
        self.toasts.push(toast);
    }

    pub fn remove(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Drop expired toasts; call once per frame or poll.
    pub fn prune(&mut self) {
        self.toasts.retain(|t| !t.is_expired());
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn count(&self) -> usize {
        self.toasts.len()
    }
}
