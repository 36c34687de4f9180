//! KeyPress - A key code plus modifiers
//!
//! The value a shortcut is registered as, and the value a typed key is
//! matched against.
//!
//! # Matching
//!
//! `==` is deliberately loose so a typed key can be compared against a
//! registered shortcut:
//!
//! - modifiers must match exactly,
//! - an unset text character (`'\0'`) on either side matches any character,
//! - key codes below 256 compare case-insensitively.
//!
//! Because of the text-character wildcard this is not an equivalence relation:
//! `a == c` and `c == b` does not imply `a == b`. `KeyPress` therefore
//! implements `PartialEq` but neither `Eq` nor `Hash`.

use super::codes::{fold_key_code, is_navigation_key};
use super::modifiers::ModifierKeys;
use crate::state::{KeyStateSource, LiveKeyState};

// =============================================================================
// TYPES
// =============================================================================

/// A key combination: key code, modifiers and the character it produces.
///
/// The default value is the "no key" sentinel.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeyPress {
    key_code: i32,
    modifiers: ModifierKeys,
    text_character: char,
}

impl KeyPress {
    /// Create a key press.
    ///
    /// `text_character` is the character the combination types, or `'\0'`
    /// if it is unknown or irrelevant.
    pub const fn new(key_code: i32, modifiers: ModifierKeys, text_character: char) -> Self {
        Self {
            key_code,
            modifiers,
            text_character,
        }
    }

    /// Create a key press with no modifiers and no text character.
    pub const fn from_key_code(key_code: i32) -> Self {
        Self::new(key_code, ModifierKeys::NONE, '\0')
    }

    /// The key code: a Unicode scalar or one of the `*_KEY` constants.
    #[inline]
    pub const fn key_code(&self) -> i32 {
        self.key_code
    }

    #[inline]
    pub const fn modifiers(&self) -> ModifierKeys {
        self.modifiers
    }

    /// The character this combination types, `'\0'` if unset.
    #[inline]
    pub const fn text_character(&self) -> char {
        self.text_character
    }

    /// False for the "no key" sentinel.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.key_code != 0
    }

    /// Compare the key code only, ignoring modifiers and character.
    #[inline]
    pub const fn is_key_code(&self, key_code: i32) -> bool {
        self.key_code == key_code
    }

    /// Check whether this combination is held down right now, according to
    /// the thread's live key state.
    pub fn is_currently_down(&self) -> bool {
        self.is_currently_down_in(&LiveKeyState)
    }

    /// Check whether this combination is held down according to `source`.
    ///
    /// Shift only counts for navigation and function keys. For character
    /// keys shift is already reflected in which character is typed.
    pub fn is_currently_down_in<S: KeyStateSource + ?Sized>(&self, source: &S) -> bool {
        let mask = modifier_mask(self.key_code);

        source.is_key_down(self.key_code)
            && (source.current_modifiers().raw_flags() & mask) == (self.modifiers.raw_flags() & mask)
    }
}

impl From<i32> for KeyPress {
    fn from(key_code: i32) -> Self {
        Self::from_key_code(key_code)
    }
}

// =============================================================================
// MATCHING
// =============================================================================

impl PartialEq for KeyPress {
    fn eq(&self, other: &Self) -> bool {
        self.modifiers.raw_flags() == other.modifiers.raw_flags()
            && (self.text_character == other.text_character
                || self.text_character == '\0'
                || other.text_character == '\0')
            && (self.key_code == other.key_code
                || key_codes_match_ignoring_case(self.key_code, other.key_code))
    }
}

/// Modifier bits compared by `is_currently_down_in` for this key.
fn modifier_mask(key_code: i32) -> u32 {
    let mut mask = ModifierKeys::COMMAND | ModifierKeys::CTRL | ModifierKeys::ALT;

    if is_navigation_key(key_code) {
        mask |= ModifierKeys::SHIFT;
    }

    mask.raw_flags()
}

/// Both codes in `0..256` and equal once case-folded.
fn key_codes_match_ignoring_case(a: i32, b: i32) -> bool {
    (0..256).contains(&a) && (0..256).contains(&b) && fold_key_code(a) == fold_key_code(b)
}

// =============================================================================
// TESTS
// =============================================================================
