//! Error types
//!
//! Parsing and formatting key descriptions never fail. Errors only come from
//! terminal key events that have no key code.

use thiserror::Error;

/// A terminal key event that cannot be represented as a [`KeyPress`](crate::KeyPress).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyConversionError {
    /// The key has no key code (caps lock, bare modifiers, most media keys, ...).
    #[error("unsupported key: {0}")]
    UnsupportedKey(String),

    /// Function key outside F1..F16.
    #[error("function key F{0} is out of range")]
    FunctionKeyOutOfRange(u8),
}
