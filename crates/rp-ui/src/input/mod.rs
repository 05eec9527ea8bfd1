//! Input handling
//!
//! Maps key presses to UI actions. The mapping is pure; `PageView` turns the
//! actions into page events.

use crate::app::AppMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Overlay currently covering the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    /// Failure message that any key dismisses
    Alert,
    /// Sign-in prompt for guests
    SignIn,
}

/// What a key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    Quit,
    ShowHelp,
    /// Dismiss help or an alert
    CloseOverlay,
    /// Close control of the sign-in prompt
    CloseSignIn,
    /// Click inside the sign-in prompt
    SignInSurface,
    /// Move the star hover one step left
    StarLeft,
    /// Move the star hover one step right
    StarRight,
    /// Commit the hovered star
    SelectStar,
    SubmitRating,
    CommentDown,
    CommentUp,
    /// Reply to the highlighted comment
    Reply,
    /// Drop the reply target; the next post is top-level
    CancelReply,
    StartEditing,
    StopEditing,
    SubmitComment,
    InsertChar(char),
    Backspace,
    CursorLeft,
    CursorRight,
}

/// Map `key` to an action for the current mode and overlay
pub fn map_key(mode: AppMode, overlay: Overlay, key: KeyEvent) -> Option<UiAction> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(UiAction::Quit);
    }

    match overlay {
        Overlay::Alert => return Some(UiAction::CloseOverlay),
        Overlay::SignIn => {
            return match key.code {
                KeyCode::Esc => Some(UiAction::CloseSignIn),
                KeyCode::Char('q') => Some(UiAction::Quit),
                _ => Some(UiAction::SignInSurface),
            }
        }
        Overlay::None => {}
    }

    match mode {
        AppMode::Help => Some(UiAction::CloseOverlay),
        AppMode::Insert => match key.code {
            KeyCode::Esc => Some(UiAction::StopEditing),
            KeyCode::Enter => Some(UiAction::SubmitComment),
            KeyCode::Backspace => Some(UiAction::Backspace),
            KeyCode::Left => Some(UiAction::CursorLeft),
            KeyCode::Right => Some(UiAction::CursorRight),
            KeyCode::Char(c) => Some(UiAction::InsertChar(c)),
            _ => None,
        },
        AppMode::Normal => match key.code {
            KeyCode::Char('q') => Some(UiAction::Quit),
            KeyCode::Char('?') => Some(UiAction::ShowHelp),
            KeyCode::Char('h') | KeyCode::Left => Some(UiAction::StarLeft),
            KeyCode::Char('l') | KeyCode::Right => Some(UiAction::StarRight),
            KeyCode::Enter => Some(UiAction::SelectStar),
            KeyCode::Char('s') => Some(UiAction::SubmitRating),
            KeyCode::Char('j') | KeyCode::Down => Some(UiAction::CommentDown),
            KeyCode::Char('k') | KeyCode::Up => Some(UiAction::CommentUp),
            KeyCode::Char('r') => Some(UiAction::Reply),
            KeyCode::Esc => Some(UiAction::CancelReply),
            KeyCode::Char('i') | KeyCode::Char('c') => Some(UiAction::StartEditing),
            _ => None,
        },
    }
}
