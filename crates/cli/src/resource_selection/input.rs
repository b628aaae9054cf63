use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use qkk_core::selection::Key;

/// Maps a terminal key event to the key category the session understands.
///
/// Release events are dropped so that terminals reporting both press and
/// release do not move the cursor twice.
#[must_use]
pub fn classify_key_event(key_event: KeyEvent) -> Option<Key> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }

    Some(Key::from_name(&key_name(key_event)))
}

/// The conventional name of a key press, e.g. `"ctrl+c"`, `"up"` or `"j"`.
fn key_name(key_event: KeyEvent) -> String {
    let base = match key_event.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Esc => "esc".to_string(),
        other => format!("{other:?}").to_lowercase(),
    };

    if key_event.modifiers.contains(KeyModifiers::CONTROL) {
        format!("ctrl+{base}")
    } else if key_event.modifiers.contains(KeyModifiers::ALT) {
        format!("alt+{base}")
    } else {
        base
    }
}
