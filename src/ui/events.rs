use crossterm::event::{self, Event, KeyEvent};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

pub enum AppEvent {
    Key(KeyEvent),
    Resize,
}

/// Reads terminal events on a background thread.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
    stop: Arc<AtomicBool>,
}

impl EventHandler {
    pub fn new(poll_interval: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);

        thread::spawn(move || {
            while !stop_flag.load(Ordering::Relaxed) {
                let ready = match event::poll(poll_interval) {
                    Ok(ready) => ready,
                    Err(err) => {
                        tracing::error!(error = %err, "Failed to poll terminal events");
                        break;
                    }
                };
                if !ready {
                    continue;
                }

                let app_event = match event::read() {
                    Ok(Event::Key(key)) => AppEvent::Key(key),
                    Ok(Event::Resize(..)) => AppEvent::Resize,
                    Ok(_) => continue,
                    Err(err) => {
                        tracing::error!(error = %err, "Failed to read terminal event");
                        break;
                    }
                };
                if tx.send(app_event).is_err() {
                    break;
                }
            }
        });

        Self { rx, stop }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}
