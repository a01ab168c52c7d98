//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    CursorUp,
    CursorDown,
    ToggleRow,
    PrevPage,
    NextPage,
    FirstPage,
    LastPage,
    CycleRows,
    ToggleOverlay,
    CloseOverlay,
    SubmitOverlay,
    InputChar(char),
    InputBackspace,
    InputDelete,
    InputLeft,
    InputRight,
    InputHome,
    InputEnd,
}

/// Maps a key event to an action.
///
/// While the row-count overlay is open it captures typing; only `Ctrl+C`
/// escapes it without closing it first.
pub fn action_for(key: &KeyEvent, overlay_open: bool) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if overlay_open {
        return match key.code {
            KeyCode::Enter => Some(Action::SubmitOverlay),
            KeyCode::Esc => Some(Action::CloseOverlay),
            KeyCode::Backspace => Some(Action::InputBackspace),
            KeyCode::Delete => Some(Action::InputDelete),
            KeyCode::Left => Some(Action::InputLeft),
            KeyCode::Right => Some(Action::InputRight),
            KeyCode::Home => Some(Action::InputHome),
            KeyCode::End => Some(Action::InputEnd),
            KeyCode::Char(c) => Some(Action::InputChar(c)),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::CursorUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::CursorDown),
        KeyCode::Char(' ') => Some(Action::ToggleRow),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::PrevPage),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::NextPage),
        KeyCode::Home => Some(Action::FirstPage),
        KeyCode::End => Some(Action::LastPage),
        KeyCode::Char('r') => Some(Action::CycleRows),
        KeyCode::Char('s') => Some(Action::ToggleOverlay),
        _ => None,
    }
}
