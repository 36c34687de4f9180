//! Modifier Keys - Bitset of held modifier keys
//!
//! Ctrl, shift, alt and command as flags in a single word.
//! Equality is raw-flag equality; undefined bits are dropped on construction.

bitflags::bitflags! {
    /// Modifier keys held alongside a primary key.
    ///
    /// Combine with bitwise OR: `ModifierKeys::CTRL | ModifierKeys::SHIFT`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModifierKeys: u32 {
        const NONE = 0;
        const SHIFT = 1 << 0;
        const CTRL = 1 << 1;
        const ALT = 1 << 2;
        const COMMAND = 1 << 3;
    }
}

impl ModifierKeys {
    /// Build from raw flags, keeping only the defined bits.
    pub const fn from_raw_flags(flags: u32) -> Self {
        Self::from_bits_truncate(flags)
    }

    /// The raw flag word.
    #[inline]
    pub const fn raw_flags(&self) -> u32 {
        self.bits()
    }

    #[inline]
    pub fn is_shift_down(&self) -> bool {
        self.contains(Self::SHIFT)
    }

    #[inline]
    pub fn is_ctrl_down(&self) -> bool {
        self.contains(Self::CTRL)
    }

    #[inline]
    pub fn is_alt_down(&self) -> bool {
        self.contains(Self::ALT)
    }

    #[inline]
    pub fn is_command_down(&self) -> bool {
        self.contains(Self::COMMAND)
    }

    /// True if any modifier is held.
    #[inline]
    pub fn is_any_modifier_down(&self) -> bool {
        !self.is_empty()
    }
}

// =============================================================================
// TESTS
// =============================================================================
