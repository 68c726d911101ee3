use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::state::InputMode;

pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    ToggleSelect,
    Kill,
    Refresh,
    FilterStart,
    FilterInput(char),
    FilterBackspace,
    FilterClear,
    FilterDone,
}

/// Map a key event to an action based on the current input mode.
pub fn map_key_to_action(key: KeyEvent, mode: &InputMode) -> Option<Action> {
    // Only handle key press events to avoid duplicate events
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match mode {
        InputMode::Normal => map_normal_key(key),
        InputMode::Filter => map_filter_key(key),
    }
}

fn map_normal_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Char(' ') => Some(Action::ToggleSelect),
        KeyCode::Enter | KeyCode::Char('x') => Some(Action::Kill),
        KeyCode::Char('r') => Some(Action::Refresh),
        KeyCode::Char('/') => Some(Action::FilterStart),
        _ => None,
    }
}

fn map_filter_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc => Some(Action::FilterClear),
        KeyCode::Enter => Some(Action::FilterDone),
        KeyCode::Backspace => Some(Action::FilterBackspace),
        KeyCode::Up => Some(Action::MoveUp),
        KeyCode::Down => Some(Action::MoveDown),
        KeyCode::Char(c) => Some(Action::FilterInput(c)),
        _ => None,
    }
}
