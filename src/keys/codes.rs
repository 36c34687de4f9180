//! Key Codes - Named constants for non-character keys
//!
//! Character keys use their Unicode scalar as the key code. Everything else
//! lives above the character range, flagged with [`EXTENDED_KEY_FLAG`], except
//! the few control characters that double as keys (space, return, escape,
//! backspace, tab). Media keys sit in their own block.
//!
//! F1..F16 and numpad 0..9 are contiguous, so `F1_KEY + n - 1` and
//! `NUMBER_PAD_0 + n` are valid ways to name them.

use super::key_press::KeyPress;

/// Marks codes that are not characters.
pub const EXTENDED_KEY_FLAG: i32 = 0x10000;

const MEDIA_KEY_BASE: i32 = 0x30000;

const fn extended(code: i32) -> i32 {
    code | EXTENDED_KEY_FLAG
}

impl KeyPress {
    pub const SPACE_KEY: i32 = 0x20;
    pub const RETURN_KEY: i32 = 0x0d;
    pub const ESCAPE_KEY: i32 = 0x1b;
    pub const BACKSPACE_KEY: i32 = 0x08;
    pub const TAB_KEY: i32 = 0x09;

    pub const PAGE_UP_KEY: i32 = extended(0x21);
    pub const PAGE_DOWN_KEY: i32 = extended(0x22);
    pub const END_KEY: i32 = extended(0x23);
    pub const HOME_KEY: i32 = extended(0x24);
    pub const LEFT_KEY: i32 = extended(0x25);
    pub const UP_KEY: i32 = extended(0x26);
    pub const RIGHT_KEY: i32 = extended(0x27);
    pub const DOWN_KEY: i32 = extended(0x28);
    pub const INSERT_KEY: i32 = extended(0x2d);
    pub const DELETE_KEY: i32 = extended(0x2e);

    pub const NUMBER_PAD_0: i32 = extended(0x60);
    pub const NUMBER_PAD_1: i32 = extended(0x61);
    pub const NUMBER_PAD_2: i32 = extended(0x62);
    pub const NUMBER_PAD_3: i32 = extended(0x63);
    pub const NUMBER_PAD_4: i32 = extended(0x64);
    pub const NUMBER_PAD_5: i32 = extended(0x65);
    pub const NUMBER_PAD_6: i32 = extended(0x66);
    pub const NUMBER_PAD_7: i32 = extended(0x67);
    pub const NUMBER_PAD_8: i32 = extended(0x68);
    pub const NUMBER_PAD_9: i32 = extended(0x69);
    pub const NUMBER_PAD_MULTIPLY: i32 = extended(0x6a);
    pub const NUMBER_PAD_ADD: i32 = extended(0x6b);
    pub const NUMBER_PAD_SEPARATOR: i32 = extended(0x6c);
    pub const NUMBER_PAD_SUBTRACT: i32 = extended(0x6d);
    pub const NUMBER_PAD_DECIMAL_POINT: i32 = extended(0x6e);
    pub const NUMBER_PAD_DIVIDE: i32 = extended(0x6f);

    pub const F1_KEY: i32 = extended(0x70);
    pub const F2_KEY: i32 = extended(0x71);
    pub const F3_KEY: i32 = extended(0x72);
    pub const F4_KEY: i32 = extended(0x73);
    pub const F5_KEY: i32 = extended(0x74);
    pub const F6_KEY: i32 = extended(0x75);
    pub const F7_KEY: i32 = extended(0x76);
    pub const F8_KEY: i32 = extended(0x77);
    pub const F9_KEY: i32 = extended(0x78);
    pub const F10_KEY: i32 = extended(0x79);
    pub const F11_KEY: i32 = extended(0x7a);
    pub const F12_KEY: i32 = extended(0x7b);
    pub const F13_KEY: i32 = extended(0x7c);
    pub const F14_KEY: i32 = extended(0x7d);
    pub const F15_KEY: i32 = extended(0x7e);
    pub const F16_KEY: i32 = extended(0x7f);

    pub const PLAY_KEY: i32 = MEDIA_KEY_BASE;
    pub const STOP_KEY: i32 = MEDIA_KEY_BASE + 1;
    pub const FAST_FORWARD_KEY: i32 = MEDIA_KEY_BASE + 2;
    pub const REWIND_KEY: i32 = MEDIA_KEY_BASE + 3;
}

/// True for F1..F16.
#[inline]
pub fn is_function_key(key_code: i32) -> bool {
    (KeyPress::F1_KEY..=KeyPress::F16_KEY).contains(&key_code)
}

/// True for numpad 0..9 (not the numpad operators).
#[inline]
pub fn is_number_pad_digit(key_code: i32) -> bool {
    (KeyPress::NUMBER_PAD_0..=KeyPress::NUMBER_PAD_9).contains(&key_code)
}

/// Keys whose meaning changes with shift, so shift has to match exactly
/// when checking whether they are held.
pub fn is_navigation_key(key_code: i32) -> bool {
    matches!(
        key_code,
        KeyPress::DOWN_KEY
            | KeyPress::UP_KEY
            | KeyPress::LEFT_KEY
            | KeyPress::RIGHT_KEY
            | KeyPress::DELETE_KEY
            | KeyPress::BACKSPACE_KEY
            | KeyPress::RETURN_KEY
            | KeyPress::ESCAPE_KEY
            | KeyPress::HOME_KEY
            | KeyPress::END_KEY
            | KeyPress::PAGE_UP_KEY
            | KeyPress::PAGE_DOWN_KEY
    ) || is_function_key(key_code)
}

// =============================================================================
// CASE MAPPING
// =============================================================================

/// Upper-case a character, keeping it unchanged when the mapping is not a
/// single character.
pub(crate) fn to_upper_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Lower-case a character, keeping it unchanged when the mapping is not a
/// single character.
pub(crate) fn to_lower_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Case-folded key code. Codes in `0..256` read as Latin-1 characters and
/// fold to lower case; everything else is returned as is.
pub(crate) fn fold_key_code(key_code: i32) -> i32 {
    match u8::try_from(key_code) {
        Ok(byte) => to_lower_char(char::from(byte)) as i32,
        Err(_) => key_code,
    }
}

// =============================================================================
// TESTS
// =============================================================================
