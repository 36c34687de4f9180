//! Input Module - crossterm bridge
//!
//! Converts crossterm key events into [`KeyPress`] values and keeps the live
//! key state in step with them.
//!
//! # API
//!
//! - `convert_modifiers` - Convert crossterm KeyModifiers to our ModifierKeys
//! - `convert_key_code` - Key code for a crossterm KeyEvent
//! - `convert_key_event` - Convert crossterm KeyEvent to a KeyPress
//! - `apply_key_event` - Update a KeyboardState from a KeyEvent
//! - `track_event` - Update the live state, return the key press if any
//! - `poll_key_press` - Non-blocking read with timeout
//! - `read_key_press` - Blocking read
//!
//! Release events only arrive when the terminal supports the keyboard
//! enhancement protocol (`PushKeyboardEnhancementFlags` with
//! `REPORT_EVENT_TYPES`). Without it keys stay marked as held until
//! `reset_live_state` is called.
//!
//! # Example
//!
//! ```ignore
//! use spark_keys::{state::input::poll_key_press, KeyPress};
//! use std::time::Duration;
//!
//! let save = KeyPress::create_from_description("ctrl + s");
//!
//! loop {
//!     if let Ok(Some(key)) = poll_key_press(Duration::from_millis(16)) {
//!         if key == save {
//!             // ...
//!         }
//!     }
//! }
//! ```

use crossterm::event::{
    Event as CrosstermEvent,
    KeyCode, KeyEventKind, KeyEventState, KeyModifiers, MediaKeyCode,
    KeyEvent as CrosstermKeyEvent,
    poll, read,
};
use std::time::Duration;

use tracing::debug;

use super::key_state::{update_live_state, KeyboardState};
use crate::error::KeyConversionError;
use crate::keys::{KeyPress, ModifierKeys};

// =============================================================================
// MODIFIER CONVERSION
// =============================================================================

/// Convert crossterm KeyModifiers to our ModifierKeys.
///
/// Super and meta both map to command.
pub fn convert_modifiers(mods: KeyModifiers) -> ModifierKeys {
    let mut result = ModifierKeys::NONE;

    if mods.contains(KeyModifiers::SHIFT) {
        result |= ModifierKeys::SHIFT;
    }
    if mods.contains(KeyModifiers::CONTROL) {
        result |= ModifierKeys::CTRL;
    }
    if mods.contains(KeyModifiers::ALT) {
        result |= ModifierKeys::ALT;
    }
    if mods.intersects(KeyModifiers::SUPER | KeyModifiers::META) {
        result |= ModifierKeys::COMMAND;
    }

    result
}

// =============================================================================
// KEY EVENT CONVERSION
// =============================================================================

/// Key code for a crossterm KeyEvent.
///
/// ASCII letters are upper-cased, matching what `create_from_description`
/// produces. Keypad characters map to the numpad codes.
pub fn convert_key_code(event: &CrosstermKeyEvent) -> Result<i32, KeyConversionError> {
    let code = match event.code {
        KeyCode::Char(c) if event.state.contains(KeyEventState::KEYPAD) => keypad_code(c),
        KeyCode::Char(c) => c.to_ascii_uppercase() as i32,
        KeyCode::Enter => KeyPress::RETURN_KEY,
        KeyCode::Tab | KeyCode::BackTab => KeyPress::TAB_KEY,
        KeyCode::Backspace => KeyPress::BACKSPACE_KEY,
        KeyCode::Delete => KeyPress::DELETE_KEY,
        KeyCode::Esc => KeyPress::ESCAPE_KEY,
        KeyCode::Up => KeyPress::UP_KEY,
        KeyCode::Down => KeyPress::DOWN_KEY,
        KeyCode::Left => KeyPress::LEFT_KEY,
        KeyCode::Right => KeyPress::RIGHT_KEY,
        KeyCode::Home => KeyPress::HOME_KEY,
        KeyCode::End => KeyPress::END_KEY,
        KeyCode::PageUp => KeyPress::PAGE_UP_KEY,
        KeyCode::PageDown => KeyPress::PAGE_DOWN_KEY,
        KeyCode::Insert => KeyPress::INSERT_KEY,
        KeyCode::F(n @ 1..=16) => KeyPress::F1_KEY + i32::from(n) - 1,
        KeyCode::F(n) => return Err(KeyConversionError::FunctionKeyOutOfRange(n)),
        KeyCode::Media(MediaKeyCode::Play) => KeyPress::PLAY_KEY,
        KeyCode::Media(MediaKeyCode::Stop) => KeyPress::STOP_KEY,
        KeyCode::Media(MediaKeyCode::FastForward) => KeyPress::FAST_FORWARD_KEY,
        KeyCode::Media(MediaKeyCode::Rewind) => KeyPress::REWIND_KEY,
        other => return Err(KeyConversionError::UnsupportedKey(format!("{other:?}"))),
    };

    Ok(code)
}

fn keypad_code(c: char) -> i32 {
    match c {
        '0'..='9' => KeyPress::NUMBER_PAD_0 + (c as i32 - '0' as i32),
        '*' => KeyPress::NUMBER_PAD_MULTIPLY,
        '+' => KeyPress::NUMBER_PAD_ADD,
        ',' => KeyPress::NUMBER_PAD_SEPARATOR,
        '-' => KeyPress::NUMBER_PAD_SUBTRACT,
        '.' => KeyPress::NUMBER_PAD_DECIMAL_POINT,
        '/' => KeyPress::NUMBER_PAD_DIVIDE,
        _ => c.to_ascii_uppercase() as i32,
    }
}

/// Convert crossterm KeyEvent to a KeyPress.
///
/// Character keys carry the typed character; BackTab becomes shift + tab.
pub fn convert_key_event(event: &CrosstermKeyEvent) -> Result<KeyPress, KeyConversionError> {
    let key_code = convert_key_code(event)?;
    let mut modifiers = convert_modifiers(event.modifiers);

    if event.code == KeyCode::BackTab {
        modifiers |= ModifierKeys::SHIFT;
    }

    let text_character = match event.code {
        KeyCode::Char(c) => c,
        _ => '\0',
    };

    Ok(KeyPress::new(key_code, modifiers, text_character))
}

// =============================================================================
// STATE TRACKING
// =============================================================================

/// Update `state` from a key event.
///
/// Press and repeat mark the key held, release clears it. Modifiers are taken
/// from every event. Keys without a key code only update the modifiers.
pub fn apply_key_event(state: &mut KeyboardState, event: &CrosstermKeyEvent) {
    state.set_modifiers(convert_modifiers(event.modifiers));

    let Ok(key_code) = convert_key_code(event) else {
        return;
    };

    match event.kind {
        KeyEventKind::Press | KeyEventKind::Repeat => state.press(key_code),
        KeyEventKind::Release => state.release(key_code),
    }
}

/// Feed a terminal event into the live key state.
///
/// Returns the key press for press and repeat events, `None` for releases,
/// unsupported keys and non-key events.
pub fn track_event(event: &CrosstermEvent) -> Option<KeyPress> {
    let CrosstermEvent::Key(key) = event else {
        return None;
    };

    update_live_state(|state| apply_key_event(state, key));

    if key.kind == KeyEventKind::Release {
        return None;
    }

    match convert_key_event(key) {
        Ok(press) => Some(press),
        Err(err) => {
            debug!(%err, "skipping key event");
            None
        }
    }
}

// =============================================================================
// EVENT POLLING
// =============================================================================

/// Poll for a key press with timeout.
/// Returns None if no event arrives within the timeout, or if the event
/// was not a key press.
pub fn poll_key_press(timeout: Duration) -> std::io::Result<Option<KeyPress>> {
    if poll(timeout)? {
        read_key_press()
    } else {
        Ok(None)
    }
}

/// Read the next event (blocking) and track it.
pub fn read_key_press() -> std::io::Result<Option<KeyPress>> {
    Ok(track_event(&read()?))
}

// =============================================================================
// TESTS
// =============================================================================
