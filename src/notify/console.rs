//! Terminal rendering of toasts. Loading toasts animate on stderr so they
//! never mix with stdout output.

use std::collections::HashMap;
use std::io::Write;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::{Notifier, Toast, ToastId, ToastLevel};

const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const INTERVAL: Duration = Duration::from_millis(80);

/// A running loading indicator.
struct Indicator {
    handle: JoinHandle<()>,
    stop: watch::Sender<bool>,
}

impl Indicator {
    fn spawn(line: String) -> Self {
        let (stop, mut stopped) = watch::channel(false);
        let handle = tokio::spawn(async move {
            for frame in FRAMES.iter().cycle() {
                // \x1b[2K clears the line, \r returns to its start
                eprint!("\x1b[2K\r{frame} {line}");
                let _ = std::io::stderr().flush();
                tokio::select! {
                    _ = tokio::time::sleep(INTERVAL) => {}
                    _ = stopped.changed() => break,
                }
            }
            eprint!("\x1b[2K\r");
            let _ = std::io::stderr().flush();
        });
        Self { handle, stop }
    }

    async fn finish(self) {
        let _ = self.stop.send(true);
        let _ = self.handle.await;
    }
}

/// Prints toasts to the terminal.
#[derive(Default)]
pub struct ConsoleNotifier {
    next_id: AtomicU64,
    loading: Mutex<HashMap<ToastId, Indicator>>,
}

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self::default()
    }
}

fn render(toast: &Toast) -> String {
    let mark = match toast.level {
        ToastLevel::Loading => "…",
        ToastLevel::Success => "✓",
        ToastLevel::Error => "✗",
    };
    format!("  {mark} {}: {}", toast.title, toast.description)
}

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn show(&self, toast: Toast) -> ToastId {
        let id = ToastId(self.next_id.fetch_add(1, Ordering::SeqCst));
        match toast.level {
            ToastLevel::Loading => {
                let indicator = Indicator::spawn(format!("{}: {}", toast.title, toast.description));
                if let Ok(mut loading) = self.loading.lock() {
                    loading.insert(id, indicator);
                }
            }
            ToastLevel::Success => println!("{}", render(&toast)),
            ToastLevel::Error => eprintln!("{}", render(&toast)),
        }
        id
    }

    async fn close(&self, id: ToastId) {
        let indicator = match self.loading.lock() {
            Ok(mut loading) => loading.remove(&id),
            Err(_) => None,
        };
        if let Some(indicator) = indicator {
            indicator.finish().await;
        }
    }
}
