//! State Module - Live keyboard state
//!
//! - **Key State** - Held keys and modifiers, the collaborator behind `is_currently_down`
//! - **Input** - crossterm bridge feeding the live state

pub mod input;
mod key_state;

pub use key_state::*;
