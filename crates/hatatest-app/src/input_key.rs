//! Backend-agnostic key representation
//!
//! The TUI layer converts crossterm key events into this enum so the
//! handlers (and their tests) never touch the terminal library.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    Char(char),
    CharCtrl(char),
    Enter,
    Esc,
    Tab,
    BackTab,
    Backspace,
    Delete,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
}
