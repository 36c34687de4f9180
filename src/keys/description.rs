//! Key Descriptions - Human-readable text for key presses
//!
//! Converts between [`KeyPress`] values and text such as `"ctrl + shift + F3"`.
//!
//! # API
//!
//! - `KeyPress::create_from_description` - Best-effort parse, never fails
//! - `KeyPress::text_description` - Format for the current platform
//! - `KeyPress::text_description_with` - Format with an explicit [`DescriptionStyle`]
//!
//! # Example
//!
//! ```
//! use spark_keys::{DescriptionStyle, KeyPress, ModifierKeys};
//!
//! let key = KeyPress::create_from_description("ctrl + shift + F3");
//! assert_eq!(key.key_code(), KeyPress::F3_KEY);
//! assert_eq!(key.modifiers(), ModifierKeys::CTRL | ModifierKeys::SHIFT);
//!
//! assert_eq!(
//!     key.text_description_with(DescriptionStyle::Generic),
//!     "ctrl + shift + F3"
//! );
//! ```

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use tracing::trace;

use super::codes::{is_function_key, is_number_pad_digit, to_upper_char};
use super::key_press::KeyPress;
use super::modifiers::ModifierKeys;

// =============================================================================
// NAME TABLE
// =============================================================================

/// Canonical names of the named keys, in lookup order.
pub const KEY_NAMES: &[(&str, i32)] = &[
    ("spacebar", KeyPress::SPACE_KEY),
    ("return", KeyPress::RETURN_KEY),
    ("escape", KeyPress::ESCAPE_KEY),
    ("backspace", KeyPress::BACKSPACE_KEY),
    ("cursor left", KeyPress::LEFT_KEY),
    ("cursor right", KeyPress::RIGHT_KEY),
    ("cursor up", KeyPress::UP_KEY),
    ("cursor down", KeyPress::DOWN_KEY),
    ("page up", KeyPress::PAGE_UP_KEY),
    ("page down", KeyPress::PAGE_DOWN_KEY),
    ("home", KeyPress::HOME_KEY),
    ("end", KeyPress::END_KEY),
    ("delete", KeyPress::DELETE_KEY),
    ("insert", KeyPress::INSERT_KEY),
    ("tab", KeyPress::TAB_KEY),
    ("play", KeyPress::PLAY_KEY),
    ("stop", KeyPress::STOP_KEY),
    ("fast forward", KeyPress::FAST_FORWARD_KEY),
    ("rewind", KeyPress::REWIND_KEY),
];

const MODIFIER_WORDS: &[(&[&str], ModifierKeys)] = &[
    (&["ctrl", "control", "ctl"], ModifierKeys::CTRL),
    (&["shift", "shft"], ModifierKeys::SHIFT),
    (&["alt", "option"], ModifierKeys::ALT),
    (&["command", "cmd"], ModifierKeys::COMMAND),
];

const NUMBER_PAD_PREFIX: &str = "numpad ";

/// Function keys the parser recognises by name. Formatting covers F1..F16.
const PARSED_FUNCTION_KEYS: i32 = 12;

/// Look up the canonical name of a key code.
pub fn key_name(key_code: i32) -> Option<&'static str> {
    KEY_NAMES
        .iter()
        .find(|(_, code)| *code == key_code)
        .map(|(name, _)| *name)
}

// =============================================================================
// STYLE
// =============================================================================

/// How modifiers are spelled when formatting a description.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DescriptionStyle {
    /// `ctrl`, `shift`, `command`, `option`.
    Mac,
    /// `ctrl`, `shift`, `alt`. Command is not shown since it shares a key with ctrl.
    #[default]
    Generic,
}

impl DescriptionStyle {
    /// The style of the platform we are running on.
    pub fn native() -> Self {
        if cfg!(target_os = "macos") {
            Self::Mac
        } else {
            Self::Generic
        }
    }
}

// =============================================================================
// PARSING
// =============================================================================

impl KeyPress {
    /// Build a key press from text like `"ctrl + shift + F3"`.
    ///
    /// Never fails: text that names no known key resolves to its last
    /// character, upper-cased. The result never carries a text character.
    pub fn create_from_description(text: &str) -> Self {
        let modifiers = MODIFIER_WORDS
            .iter()
            .filter(|(words, _)| {
                words
                    .iter()
                    .any(|word| contains_whole_word_ignore_case(text, word))
            })
            .fold(ModifierKeys::NONE, |mods, (_, flag)| mods | *flag);

        let key_code = named_key(text)
            .or_else(|| number_pad_key(text))
            .or_else(|| function_key(text))
            .or_else(|| hex_key(text))
            .unwrap_or_else(|| {
                let code = last_character_key(text);
                trace!(text, code, "no key name found, using last character");
                code
            });

        Self::new(key_code, modifiers, '\0')
    }
}

impl FromStr for KeyPress {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::create_from_description(s))
    }
}

fn named_key(text: &str) -> Option<i32> {
    let (name, code) = KEY_NAMES
        .iter()
        .find(|(name, _)| contains_whole_word_ignore_case(text, name))?;
    trace!(text, name, "matched named key");
    Some(*code)
}

fn number_pad_key(text: &str) -> Option<i32> {
    // Later digits win when several are present
    let code = (0..10)
        .filter(|digit| contains_whole_word_ignore_case(text, &format!("{NUMBER_PAD_PREFIX}{digit}")))
        .last()
        .map(|digit| KeyPress::NUMBER_PAD_0 + digit)?;
    trace!(text, code, "matched numpad key");
    Some(code)
}

fn function_key(text: &str) -> Option<i32> {
    let code = (1..=PARSED_FUNCTION_KEYS)
        .filter(|n| contains_whole_word_ignore_case(text, &format!("f{n}")))
        .last()
        .map(|n| KeyPress::F1_KEY + n - 1)?;
    trace!(text, code, "matched function key");
    Some(code)
}

/// `#<hex>` after the last `#`. Non-hex characters are skipped and the value
/// wraps at 32 bits.
fn hex_key(text: &str) -> Option<i32> {
    let (_, hex) = text.rsplit_once('#')?;
    let value = hex
        .chars()
        .filter_map(|c| c.to_ascii_lowercase().to_digit(16))
        .fold(0u32, |acc, digit| (acc << 4) | digit) as i32;

    (value > 0).then(|| {
        trace!(text, code = value, "using hex key code");
        value
    })
}

fn last_character_key(text: &str) -> i32 {
    text.chars().last().map_or(0, |c| to_upper_char(c) as i32)
}

/// Whole-word, ASCII case-insensitive search. A word boundary is any
/// non-alphanumeric character or either end of the text.
pub(crate) fn contains_whole_word_ignore_case(text: &str, word: &str) -> bool {
    let text: Vec<char> = text.chars().collect();
    let word: Vec<char> = word.chars().collect();

    if word.is_empty() || word.len() > text.len() {
        return false;
    }

    (0..=text.len() - word.len()).any(|start| {
        let end = start + word.len();
        text[start..end]
            .iter()
            .zip(&word)
            .all(|(a, b)| a.eq_ignore_ascii_case(b))
            && (start == 0 || !text[start - 1].is_alphanumeric())
            && text.get(end).is_none_or(|c| !c.is_alphanumeric())
    })
}

// =============================================================================
// FORMATTING
// =============================================================================

impl KeyPress {
    /// Describe this key press for the current platform.
    pub fn text_description(&self) -> String {
        self.text_description_with(DescriptionStyle::native())
    }

    /// Describe this key press, e.g. `"ctrl + shift + F3"`.
    ///
    /// Returns an empty string for the "no key" sentinel and negative codes.
    pub fn text_description_with(&self, style: DescriptionStyle) -> String {
        let mut desc = String::new();
        let key_code = self.key_code();

        if key_code <= 0 {
            return desc;
        }

        let mods = self.modifiers();

        if mods.is_ctrl_down() {
            desc.push_str("ctrl + ");
        }

        if mods.is_shift_down() {
            desc.push_str("shift + ");
        }

        match style {
            DescriptionStyle::Mac => {
                if mods.is_command_down() {
                    desc.push_str("command + ");
                }
                if mods.is_alt_down() {
                    desc.push_str("option + ");
                }
            }
            DescriptionStyle::Generic => {
                if mods.is_alt_down() {
                    desc.push_str("alt + ");
                }
            }
        }

        // Table names take precedence over the range checks below
        if let Some(name) = key_name(key_code) {
            desc.push_str(name);
            return desc;
        }

        if is_function_key(key_code) {
            desc.push_str(&format!("F{}", 1 + key_code - KeyPress::F1_KEY));
        } else if is_number_pad_digit(key_code) {
            desc.push_str(&format!("{NUMBER_PAD_PREFIX}{}", key_code - KeyPress::NUMBER_PAD_0));
        } else if let Some(c) = printable_character(key_code) {
            desc.push(to_upper_char(c));
        } else {
            desc.push_str(&format!("#{key_code:x}"));
        }

        desc
    }
}

fn printable_character(key_code: i32) -> Option<char> {
    if (33..176).contains(&key_code) {
        char::from_u32(key_code as u32)
    } else {
        None
    }
}

impl fmt::Display for KeyPress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text_description())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> KeyPress {
        KeyPress::create_from_description(text)
    }

    #[test]
    fn test_whole_word_matching() {
        assert!(contains_whole_word_ignore_case("ctrl + a", "ctrl"));
        assert!(contains_whole_word_ignore_case("CTRL+A", "ctrl"));
        assert!(contains_whole_word_ignore_case("page up", "page up"));
        assert!(!contains_whole_word_ignore_case("ctrlx", "ctrl"));
        assert!(!contains_whole_word_ignore_case("xctrl", "ctrl"));
        assert!(!contains_whole_word_ignore_case("f10", "f1"));
        assert!(!contains_whole_word_ignore_case("", "ctrl"));
        assert!(!contains_whole_word_ignore_case("ctrl", ""));
    }

    #[test]
    fn test_parse_modifiers() {
        assert_eq!(parse("ctrl + a").modifiers(), ModifierKeys::CTRL);
        assert_eq!(parse("control + a").modifiers(), ModifierKeys::CTRL);
        assert_eq!(parse("ctl+a").modifiers(), ModifierKeys::CTRL);
        assert_eq!(parse("shft a").modifiers(), ModifierKeys::SHIFT);
        assert_eq!(parse("option + a").modifiers(), ModifierKeys::ALT);
        assert_eq!(parse("Alt + A").modifiers(), ModifierKeys::ALT);
        assert_eq!(parse("cmd + a").modifiers(), ModifierKeys::COMMAND);
        assert_eq!(
            parse("Command + Shift + Alt + Ctrl + a").modifiers(),
            ModifierKeys::all()
        );
    }

    #[test]
    fn test_parse_function_key_with_modifiers() {
        let key = parse("ctrl + shift + F3");
        assert_eq!(key.key_code(), KeyPress::F3_KEY);
        assert_eq!(key.modifiers(), ModifierKeys::CTRL | ModifierKeys::SHIFT);
        assert_eq!(key.text_character(), '\0');
    }

    #[test]
    fn test_parse_function_keys_stop_at_twelve() {
        assert_eq!(parse("F12").key_code(), KeyPress::F12_KEY);
        // F13 is not probed, so it falls through to the last character
        assert_eq!(parse("F13").key_code(), '3' as i32);
    }

    #[test]
    fn test_parse_number_pad() {
        assert_eq!(parse("numpad 5").key_code(), KeyPress::NUMBER_PAD_0 + 5);
        assert_eq!(parse("NUMPAD 0").key_code(), KeyPress::NUMBER_PAD_0);
        assert_eq!(parse("numpad 5").modifiers(), ModifierKeys::NONE);
    }

    #[test]
    fn test_parse_later_numpad_digit_wins() {
        assert_eq!(parse("numpad 7 numpad 2").key_code(), KeyPress::NUMBER_PAD_7);
    }

    #[test]
    fn test_named_keys_take_table_order() {
        // "home" comes before "end" in the table
        assert_eq!(parse("end home").key_code(), KeyPress::HOME_KEY);
        // named keys beat function keys
        assert_eq!(parse("f1 tab").key_code(), KeyPress::TAB_KEY);
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse("#41").key_code(), 0x41);
        assert_eq!(parse("ctrl + #1F").key_code(), 0x1f);
        assert_eq!(parse("#12 #30000").key_code(), KeyPress::PLAY_KEY);
    }

    #[test]
    fn test_parse_later_function_key_wins() {
        assert_eq!(parse("f1 f2").key_code(), KeyPress::F2_KEY);
        assert_eq!(parse("F12 + F3").key_code(), KeyPress::F12_KEY);
    }

    #[test]
    fn test_parse_negative_hex_falls_back_to_last_character() {
        // 0xffffffff wraps to -1, which is not a key code
        let key = parse("ctrl + #ffffffff");
        assert_eq!(key.key_code(), 'F' as i32);
        assert_eq!(key.modifiers(), ModifierKeys::CTRL);
    }

    #[test]
    fn test_parse_zero_hex_falls_back_to_last_character() {
        assert_eq!(parse("#0").key_code(), '0' as i32);
        assert_eq!(parse("#zz").key_code(), 'Z' as i32);
    }

    #[test]
    fn test_parse_last_character_fallback() {
        assert_eq!(parse("Q").key_code(), 'Q' as i32);
        assert_eq!(parse("q").key_code(), 'Q' as i32);
        assert_eq!(parse("ctrl + q").key_code(), 'Q' as i32);
        assert_eq!(parse("").key_code(), 0);
    }

    #[test]
    fn test_from_str() {
        let key: KeyPress = "alt + escape".parse().unwrap();
        assert_eq!(key.key_code(), KeyPress::ESCAPE_KEY);
        assert_eq!(key.modifiers(), ModifierKeys::ALT);
    }

    #[test]
    fn test_format_empty_for_no_key() {
        assert_eq!(KeyPress::default().text_description(), "");
        assert_eq!(KeyPress::from_key_code(-5).text_description(), "");
        assert_eq!(
            KeyPress::new(0, ModifierKeys::CTRL, 'a').text_description_with(DescriptionStyle::Mac),
            ""
        );
    }

    #[test]
    fn test_format_generic_modifiers() {
        let key = KeyPress::new('s' as i32, ModifierKeys::all(), '\0');
        assert_eq!(
            key.text_description_with(DescriptionStyle::Generic),
            "ctrl + shift + alt + S"
        );
    }

    #[test]
    fn test_format_mac_modifiers() {
        let key = KeyPress::new('s' as i32, ModifierKeys::all(), '\0');
        assert_eq!(
            key.text_description_with(DescriptionStyle::Mac),
            "ctrl + shift + command + option + S"
        );
    }

    #[test]
    fn test_format_named_key_keeps_modifiers() {
        let key = KeyPress::new(KeyPress::PAGE_DOWN_KEY, ModifierKeys::SHIFT, '\0');
        assert_eq!(
            key.text_description_with(DescriptionStyle::Generic),
            "shift + page down"
        );
    }

    #[test]
    fn test_format_ranges() {
        let generic = |code| KeyPress::from_key_code(code).text_description_with(DescriptionStyle::Generic);

        assert_eq!(generic(KeyPress::F1_KEY), "F1");
        assert_eq!(generic(KeyPress::F16_KEY), "F16");
        assert_eq!(generic(KeyPress::NUMBER_PAD_9), "numpad 9");
        assert_eq!(generic('a' as i32), "A");
        assert_eq!(generic('!' as i32), "!");
        assert_eq!(generic(KeyPress::NUMBER_PAD_ADD), "#1006b");
        assert_eq!(generic(0x1f600), "#1f600");
        assert_eq!(generic(176), "#b0");
    }

    #[test]
    fn test_every_named_key_round_trips() {
        for &(name, code) in KEY_NAMES {
            let key = KeyPress::from_key_code(code);
            assert_eq!(key.text_description_with(DescriptionStyle::Generic), name);
            assert_eq!(parse(name).key_code(), code, "{name}");
        }
    }

    #[test]
    fn test_hex_fallback_round_trips() {
        let key = KeyPress::new(KeyPress::NUMBER_PAD_DIVIDE, ModifierKeys::CTRL, '\0');
        let text = key.text_description_with(DescriptionStyle::Generic);
        assert_eq!(text, "ctrl + #1006f");
        assert_eq!(parse(&text), key);
    }

    #[test]
    fn test_native_style() {
        let expected = if cfg!(target_os = "macos") {
            DescriptionStyle::Mac
        } else {
            DescriptionStyle::Generic
        };
        assert_eq!(DescriptionStyle::native(), expected);
    }
}
