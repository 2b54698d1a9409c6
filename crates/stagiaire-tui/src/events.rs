//! Terminal input pump. Crossterm is polled on a tokio task and the results
//! are fed to the app loop through a channel.

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind};
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};

pub const TICK_RATE: Duration = Duration::from_millis(50);

#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    Resize,
    Tick,
}

pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    shutdown: Option<oneshot::Sender<()>>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let (shutdown, mut shutdown_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let mut ticks = tokio::time::interval(tick_rate);
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    _ = ticks.tick() => {
                        let event = read_pending().unwrap_or(Event::Tick);
                        if tx.send(event).is_err() {
                            break;
                        }
                    }
                }
            }
            tracing::debug!("Input pump stopped");
        });

        Self {
            rx,
            shutdown: Some(shutdown),
        }
    }

    /// Events supplied by the caller instead of the terminal.
    pub fn from_channel(rx: mpsc::UnboundedReceiver<Event>) -> Self {
        Self { rx, shutdown: None }
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }

    pub fn stop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(TICK_RATE)
    }
}

// Release and repeat events are dropped; some terminals report all three.
fn read_pending() -> Option<Event> {
    if !event::poll(Duration::ZERO).unwrap_or(false) {
        return None;
    }
    match event::read().ok()? {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        CrosstermEvent::Resize(..) => Some(Event::Resize),
        _ => None,
    }
}

/// `q` outside of text entry.
pub fn is_quit_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
}
