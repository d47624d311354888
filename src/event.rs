use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use tracing::warn;

use crate::game::Msg;

/// Turns a raw terminal event into a game message, if the game cares about it.
pub fn translate(event: Event) -> Option<Msg> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(Msg::Key(key)),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(Msg::PointerMove {
                column: mouse.column,
            }),
            MouseEventKind::Down(MouseButton::Left) => Some(Msg::PointerClick),
            _ => None,
        },
        Event::Resize(columns, rows) => Some(Msg::Resize { columns, rows }),
        _ => None,
    }
}

/// Serializes terminal input and timer ticks into one queue.
pub struct EventHandler {
    tx: mpsc::Sender<Msg>,
    rx: mpsc::Receiver<Msg>,
}

impl EventHandler {
    /// Starts the background reader for terminal input.
    pub fn new() -> Self {
        let handler = Self::detached();
        let tx = handler.tx.clone();

        thread::spawn(move || loop {
            let event = match event::read() {
                Ok(event) => event,
                Err(err) => {
                    warn!(%err, "terminal input reader stopped");
                    return;
                }
            };
            if let Some(msg) = translate(event) {
                if tx.send(msg).is_err() {
                    return;
                }
            }
        });

        handler
    }

    /// A queue with no terminal reader attached; only `send` and
    /// `schedule_tick` feed it.
    pub fn detached() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }

    /// Queues a tick after `delay`. Each call delivers exactly one tick.
    pub fn schedule_tick(&self, delay: Duration) {
        let tx = self.tx.clone();
        thread::spawn(move || {
            thread::sleep(delay);
            let _ = tx.send(Msg::Tick);
        });
    }

    pub fn send(&self, msg: Msg) {
        let _ = self.tx.send(msg);
    }

    pub fn next(&self) -> io::Result<Msg> {
        self.rx
            .recv()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
    }
}
