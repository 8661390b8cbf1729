use std::sync::Mutex;

use async_trait::async_trait;

use super::{Notifier, Toast, ToastId, ToastLevel};

/// Keeps every toast in memory. Meant for tests.
#[derive(Default)]
pub struct RecordingNotifier {
    shown: Mutex<Vec<Toast>>,
    closed: Mutex<Vec<ToastId>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All toasts in the order they were shown.
    pub fn shown(&self) -> Vec<Toast> {
        self.shown.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn closed(&self) -> Vec<ToastId> {
        self.closed.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Titles of toasts shown at `level`.
    pub fn titles(&self, level: ToastLevel) -> Vec<String> {
        self.shown()
            .into_iter()
            .filter(|t| t.level == level)
            .map(|t| t.title)
            .collect()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn show(&self, toast: Toast) -> ToastId {
        let mut shown = match self.shown.lock() {
            Ok(shown) => shown,
            Err(poisoned) => poisoned.into_inner(),
        };
        shown.push(toast);
        ToastId(shown.len() as u64 - 1)
    }

    async fn close(&self, id: ToastId) {
        if let Ok(mut closed) = self.closed.lock() {
            closed.push(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_in_order() {
        let notifier = RecordingNotifier::new();
        let first = notifier.show(Toast::loading("Updating", "...")).await;
        notifier.show(Toast::success("Success", "ok")).await;
        notifier.close(first).await;

        assert_eq!(notifier.shown().len(), 2);
        assert_eq!(notifier.closed(), vec![first]);
        assert_eq!(notifier.titles(ToastLevel::Success), vec!["Success"]);
    }
}
