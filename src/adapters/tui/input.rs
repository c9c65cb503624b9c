//! Crossterm events to browser events.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

use crate::application::browser::{BrowserEvent, Key};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

pub fn map_key(key: KeyEvent) -> Option<Key> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let mapped = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Key::CtrlC,
        KeyCode::Char(_) if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            return None
        }
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Tab => Key::Tab,
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        _ => return None,
    };
    Some(mapped)
}

pub fn map_event(event: Event) -> Option<BrowserEvent> {
    match event {
        Event::Key(key) => map_key(key).map(BrowserEvent::Key),
        Event::Resize(_, _) => Some(BrowserEvent::Resize),
        _ => None,
    }
}

/// Read terminal events on a blocking thread until the receiver is gone
pub fn spawn_key_reader(tx: UnboundedSender<BrowserEvent>) -> JoinHandle<()> {
    thread::spawn(move || {
        while !tx.is_closed() {
            match event::poll(POLL_INTERVAL) {
                Ok(true) => match event::read() {
                    Ok(ev) => {
                        if let Some(browser_event) = map_event(ev) {
                            if tx.send(browser_event).is_err() {
                                break;
                            }
                        }
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to read terminal event");
                        break;
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    tracing::error!(error = %e, "Failed to poll terminal events");
                    break;
                }
            }
        }
        tracing::debug!("Key reader stopped");
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_map_plain_keys() {
        assert_eq!(map_key(press(KeyCode::Char('q'))), Some(Key::Char('q')));
        assert_eq!(map_key(press(KeyCode::Tab)), Some(Key::Tab));
        assert_eq!(map_key(press(KeyCode::Enter)), Some(Key::Enter));
        assert_eq!(map_key(press(KeyCode::Left)), Some(Key::Left));
        assert_eq!(map_key(press(KeyCode::Right)), Some(Key::Right));
        assert_eq!(map_key(press(KeyCode::Backspace)), Some(Key::Backspace));
        assert_eq!(map_key(press(KeyCode::F(1))), None);
    }

    #[test]
    fn test_map_ctrl_c() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), Some(Key::CtrlC));

        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), None);
    }

    #[test]
    fn test_shifted_chars_are_typed() {
        let key = KeyEvent::new(KeyCode::Char('E'), KeyModifiers::SHIFT);
        assert_eq!(map_key(key), Some(Key::Char('E')));
    }

    #[test]
    fn test_release_events_ignored() {
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(key), None);
    }

    #[test]
    fn test_map_event() {
        assert_eq!(map_event(Event::Resize(80, 24)), Some(BrowserEvent::Resize));
        assert_eq!(
            map_event(Event::Key(press(KeyCode::Char('r')))),
            Some(BrowserEvent::Key(Key::Char('r')))
        );
        assert_eq!(map_event(Event::FocusGained), None);
    }
}
