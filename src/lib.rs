//! # spark-keys
//!
//! Keyboard shortcuts for Spark.
//!
//! A [`KeyPress`] is a key code, a set of [`ModifierKeys`] and optionally the
//! character the combination types. Key presses compare loosely so a typed
//! key can be matched against a registered shortcut, can check whether they
//! are held right now, and convert to and from text like `"ctrl + shift + F3"`.
//!
//! ## Modules
//!
//! - [`keys`] - Key codes, modifiers, `KeyPress`, descriptions
//! - [`state`] - Live key state and the crossterm input bridge
//! - [`error`] - Conversion errors
//!
//! ## Features
//!
//! - `serde` - Serialize key presses as their description text

pub mod error;
pub mod keys;
pub mod state;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-export commonly used items
pub use keys::{
    DescriptionStyle, EXTENDED_KEY_FLAG, KEY_NAMES, KeyPress, ModifierKeys,
    is_function_key, is_navigation_key, is_number_pad_digit, key_name,
};

pub use state::{
    KeyStateSource, KeyboardState, LiveKeyState,
    current_modifiers, is_key_currently_down, live_key_state, reset_live_state,
    update_live_state,
};

pub use error::KeyConversionError;
