use crate::app::View;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    Quit,
    DismissError,
    ToggleTheme,
    Refresh,
    SwitchView,
    ShowView(View),
    MoveUp,
    MoveDown,
    None,
}

/// Captures the UI state needed to interpret a key press.
#[derive(Debug, Clone, Default)]
pub struct InputContext {
    pub has_error: bool,
    pub is_loading: bool,
}

pub fn map_key(key: KeyEvent, ctx: &InputContext) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::None;
    }

    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Esc => {
            if ctx.has_error {
                Action::DismissError
            } else {
                Action::Quit
            }
        }
        KeyCode::Char('t') => Action::ToggleTheme,
        KeyCode::Char('r') if !ctx.is_loading => Action::Refresh,
        KeyCode::Tab | KeyCode::BackTab => Action::SwitchView,
        KeyCode::Char('1') => Action::ShowView(View::Home),
        KeyCode::Char('2') => Action::ShowView(View::Runs),
        KeyCode::Up | KeyCode::Char('k') => Action::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => Action::MoveDown,
        _ => Action::None,
    }
}
