use crossterm::event::{self, Event as CrosstermEvent, KeyEventKind};
use tokio::sync::mpsc;

use crate::action::InputEvent;

/// Reads crossterm events on a blocking task and forwards key presses and
/// resizes. The channel closing means the terminal's event source is gone,
/// which the main loop treats as fatal.
pub fn spawn_input_reader() -> mpsc::UnboundedReceiver<InputEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                if tx.send(InputEvent::Key(key)).is_err() {
                    break;
                }
            }
            Ok(CrosstermEvent::Resize(w, h)) => {
                if tx.send(InputEvent::Resize(w, h)).is_err() {
                    break;
                }
            }
            Ok(_) => {}
            Err(_) => break,
        }
    });

    rx
}
