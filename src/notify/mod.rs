//! Transient user-facing notifications ("toasts").
//!
//! A loading toast stays up until it is closed; success and error toasts are
//! fire-and-forget. [`console::ConsoleNotifier`] renders them in a terminal,
//! [`recording::RecordingNotifier`] keeps them for assertions.

pub mod console;
pub mod recording;

use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub title: String,
    pub description: String,
}

impl Toast {
    pub fn loading(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_level(ToastLevel::Loading, title, description)
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_level(ToastLevel::Success, title, description)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_level(ToastLevel::Error, title, description)
    }

    fn with_level(level: ToastLevel, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Handle for closing a toast that was shown earlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(pub u64);

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn show(&self, toast: Toast) -> ToastId;
    /// Close a toast. Closing an unknown or already-closed id is a no-op.
    async fn close(&self, id: ToastId);
}
