//! Keys Module - Key press values
//!
//! - **Codes** - Named key-code constants
//! - **Modifiers** - Ctrl/shift/alt/command bitset
//! - **KeyPress** - Key code plus modifiers, shortcut matching
//! - **Description** - Parsing and formatting `"ctrl + shift + F3"` style text

mod codes;
mod description;
mod key_press;
mod modifiers;

pub use codes::*;
pub(crate) use codes::fold_key_code;
pub use description::*;
pub use key_press::*;
pub use modifiers::*;
