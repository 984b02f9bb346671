use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use log::{debug, info};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::{self, JoinHandle};

/// Somewhere key presses come from.
pub trait KeySource: Send + 'static {
    /// Waits up to `timeout` for input to become available.
    fn poll(&mut self, timeout: Duration) -> Result<bool>;
    /// Consumes the next event, yielding it only if it was a key press.
    fn read_key(&mut self) -> Result<Option<KeyEvent>>;
}

/// Keys from the real terminal.
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn poll(&mut self, timeout: Duration) -> Result<bool> {
        event::poll(timeout).context("Error polling input.")
    }

    fn read_key(&mut self) -> Result<Option<KeyEvent>> {
        match event::read().context("Error reading input.")? {
            Event::Key(ev) => Ok(Some(ev)),
            _ => Ok(None),
        }
    }
}

/// Background task forwarding key presses to the game loop.
pub struct InputPoller {
    stop: Arc<AtomicBool>,
    handle: JoinHandle<Result<()>>,
}

impl InputPoller {
    pub fn spawn<S: KeySource>(source: S, interval: Duration) -> (Self, UnboundedReceiver<KeyEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);

        let handle = task::spawn_blocking(move || forward_keys(source, &tx, &flag, interval));
        (InputPoller { stop, handle }, rx)
    }

    /// Signals the poller to stop and waits for it to finish.
    pub async fn shutdown(self) -> Result<()> {
        self.stop.store(true, Ordering::Relaxed);
        let res = self.handle.await.context("Input poller panicked.")?;
        info!("input poller stopped");
        res
    }
}

fn forward_keys<S: KeySource>(
    mut source: S,
    tx: &UnboundedSender<KeyEvent>,
    stop: &AtomicBool,
    interval: Duration,
) -> Result<()> {
    while !stop.load(Ordering::Relaxed) {
        if !source.poll(interval)? {
            continue;
        }

        if let Some(key) = source.read_key()? {
            if tx.send(key).is_err() {
                debug!("key receiver gone, stopping poller");
                break;
            }
        }
    }

    Ok(())
}

pub fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
