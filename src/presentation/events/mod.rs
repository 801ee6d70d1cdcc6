//! Key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Panel that receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Regions,
    Departments,
    Search,
}

impl Focus {
    /// Next list panel in Tab order; search is left via Tab too.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Regions => Self::Departments,
            Self::Departments | Self::Search => Self::Regions,
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Regions => "REGIONES",
            Self::Departments => "DEPARTAMENTOS",
            Self::Search => "BUSCAR",
        }
    }
}

/// What a key press asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    FocusNext,
    FocusSearch,
    LeaveSearch,
    CursorUp,
    CursorDown,
    Activate,
    ToggleTheme,
    OpenFlag,
    SearchInput(char),
    SearchBackspace,
    Ignored,
}

/// Terminal key mapper.
pub struct EventHandler;

impl EventHandler {
    /// Maps a key press to an action given the focused panel.
    #[must_use]
    pub fn map_key(key: &KeyEvent, focus: Focus) -> KeyAction {
        if key.kind == KeyEventKind::Release {
            return KeyAction::Ignored;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return KeyAction::Quit;
        }

        if focus == Focus::Search {
            return match key.code {
                KeyCode::Esc => KeyAction::LeaveSearch,
                KeyCode::Tab | KeyCode::BackTab => KeyAction::FocusNext,
                KeyCode::Enter | KeyCode::Down => KeyAction::LeaveSearch,
                KeyCode::Backspace => KeyAction::SearchBackspace,
                KeyCode::Char(c) => KeyAction::SearchInput(c),
                _ => KeyAction::Ignored,
            };
        }

        if Self::is_quit_event(key) {
            return KeyAction::Quit;
        }

        match key.code {
            KeyCode::Tab | KeyCode::BackTab => KeyAction::FocusNext,
            KeyCode::Char('/') => KeyAction::FocusSearch,
            KeyCode::Up | KeyCode::Char('k') => KeyAction::CursorUp,
            KeyCode::Down | KeyCode::Char('j') => KeyAction::CursorDown,
            KeyCode::Enter | KeyCode::Char(' ') => KeyAction::Activate,
            KeyCode::Char('t') => KeyAction::ToggleTheme,
            KeyCode::Char('f') => KeyAction::OpenFlag,
            _ => KeyAction::Ignored,
        }
    }

    /// Checks if key is a quit event outside the search box.
    #[must_use]
    pub fn is_quit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('q'),
                modifiers: KeyModifiers::NONE,
                ..
            } | KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } | KeyEvent {
                code: KeyCode::Esc,
                modifiers: KeyModifiers::NONE,
                ..
            }
        )
    }
}
