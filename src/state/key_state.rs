//! Key State Module - Which keys are held right now
//!
//! [`KeyPress::is_currently_down`](crate::KeyPress::is_currently_down) needs to
//! know which keys and modifiers are held. That knowledge comes from whatever
//! reads input, through the [`KeyStateSource`] trait.
//!
//! # API
//!
//! - `KeyStateSource` - Collaborator trait queried by `is_currently_down_in`
//! - `KeyboardState` - Owned set of held keys plus current modifiers
//! - `LiveKeyState` - The thread's live state, fed by the input module
//! - `update_live_state` / `reset_live_state` - Mutate the live state
//! - `is_key_currently_down` / `current_modifiers` - Query the live state
//!
//! The live state is thread-local: the thread that reads input is the one
//! that asks whether keys are down.

use std::cell::RefCell;
use std::collections::HashSet;

use crate::keys::{ModifierKeys, fold_key_code};

// =============================================================================
// TYPES
// =============================================================================

/// Source of live key and modifier state.
pub trait KeyStateSource {
    /// True if the key with this code is held.
    fn is_key_down(&self, key_code: i32) -> bool;

    /// Modifiers held right now.
    fn current_modifiers(&self) -> ModifierKeys;
}

/// Held keys and modifiers.
///
/// Codes below 256 are case-folded, so `'a'` and `'A'` name the same key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyboardState {
    down: HashSet<i32>,
    modifiers: ModifierKeys,
}

impl KeyboardState {
    /// Create an empty state: nothing held.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a key as held.
    pub fn press(&mut self, key_code: i32) {
        self.down.insert(fold_key_code(key_code));
    }

    /// Mark a key as released.
    pub fn release(&mut self, key_code: i32) {
        self.down.remove(&fold_key_code(key_code));
    }

    pub fn set_modifiers(&mut self, modifiers: ModifierKeys) {
        self.modifiers = modifiers;
    }

    /// Release everything.
    pub fn clear(&mut self) {
        self.down.clear();
        self.modifiers = ModifierKeys::NONE;
    }

    /// Number of keys held.
    pub fn held_count(&self) -> usize {
        self.down.len()
    }
}

impl KeyStateSource for KeyboardState {
    fn is_key_down(&self, key_code: i32) -> bool {
        self.down.contains(&fold_key_code(key_code))
    }

    fn current_modifiers(&self) -> ModifierKeys {
        self.modifiers
    }
}

// =============================================================================
// LIVE STATE
// =============================================================================

thread_local! {
    static LIVE_STATE: RefCell<KeyboardState> = RefCell::new(KeyboardState::new());
}

/// The thread's live key state. Every query reads the current value.
#[derive(Clone, Copy, Debug, Default)]
pub struct LiveKeyState;

impl KeyStateSource for LiveKeyState {
    fn is_key_down(&self, key_code: i32) -> bool {
        is_key_currently_down(key_code)
    }

    fn current_modifiers(&self) -> ModifierKeys {
        current_modifiers()
    }
}

/// Check whether a key is held, according to the live state.
pub fn is_key_currently_down(key_code: i32) -> bool {
    LIVE_STATE.with(|state| state.borrow().is_key_down(key_code))
}

/// Modifiers held right now, according to the live state.
pub fn current_modifiers() -> ModifierKeys {
    LIVE_STATE.with(|state| state.borrow().current_modifiers())
}

/// Copy of the live state.
pub fn live_key_state() -> KeyboardState {
    LIVE_STATE.with(|state| state.borrow().clone())
}

/// Mutate the live state.
///
/// `f` works on a copy, stored back once it returns, so it may query the
/// live state. Those queries see the state from before the update.
pub fn update_live_state<R>(f: impl FnOnce(&mut KeyboardState) -> R) -> R {
    let mut next = live_key_state();
    let result = f(&mut next);
    LIVE_STATE.with(|state| *state.borrow_mut() = next);
    result
}

/// Reset live state (for testing, or when input focus is lost)
pub fn reset_live_state() {
    update_live_state(KeyboardState::clear);
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KeyPress;

    fn setup() {
        reset_live_state();
    }

    #[test]
    fn test_initial_state() {
        setup();
        assert!(!is_key_currently_down('A' as i32));
        assert_eq!(current_modifiers(), ModifierKeys::NONE);
        assert_eq!(live_key_state().held_count(), 0);
    }

    #[test]
    fn test_press_and_release() {
        let mut state = KeyboardState::new();
        state.press(KeyPress::HOME_KEY);
        assert!(state.is_key_down(KeyPress::HOME_KEY));

        state.release(KeyPress::HOME_KEY);
        assert!(!state.is_key_down(KeyPress::HOME_KEY));
    }

    #[test]
    fn test_letters_are_case_folded() {
        let mut state = KeyboardState::new();
        state.press('a' as i32);
        assert!(state.is_key_down('A' as i32));
        assert_eq!(state.held_count(), 1);

        state.press('A' as i32);
        assert_eq!(state.held_count(), 1);

        state.release('A' as i32);
        assert!(!state.is_key_down('a' as i32));
    }

    #[test]
    fn test_clear() {
        let mut state = KeyboardState::new();
        state.press('x' as i32);
        state.set_modifiers(ModifierKeys::ALT);
        state.clear();
        assert_eq!(state, KeyboardState::new());
    }

    #[test]
    fn test_live_state_updates() {
        setup();

        update_live_state(|state| {
            state.press(KeyPress::UP_KEY);
            state.set_modifiers(ModifierKeys::SHIFT);
        });

        assert!(is_key_currently_down(KeyPress::UP_KEY));
        assert_eq!(current_modifiers(), ModifierKeys::SHIFT);
        assert!(LiveKeyState.is_key_down(KeyPress::UP_KEY));

        let shift_up = KeyPress::new(KeyPress::UP_KEY, ModifierKeys::SHIFT, '\0');
        assert!(shift_up.is_currently_down());
        assert!(!KeyPress::from_key_code(KeyPress::UP_KEY).is_currently_down());

        reset_live_state();
        assert!(!shift_up.is_currently_down());
    }

    #[test]
    fn test_live_queries_inside_update() {
        setup();

        let shift_up = KeyPress::new(KeyPress::UP_KEY, ModifierKeys::SHIFT, '\0');
        let was_down = update_live_state(|state| {
            state.press(KeyPress::UP_KEY);
            state.set_modifiers(ModifierKeys::SHIFT);
            shift_up.is_currently_down()
        });

        assert!(!was_down);
        assert!(shift_up.is_currently_down());

        let nested = update_live_state(|state| {
            state.release(KeyPress::UP_KEY);
            (
                is_key_currently_down(KeyPress::UP_KEY),
                current_modifiers(),
                live_key_state().held_count(),
            )
        });
        assert_eq!(nested, (true, ModifierKeys::SHIFT, 1));
        assert!(!is_key_currently_down(KeyPress::UP_KEY));

        reset_live_state();
    }
}
