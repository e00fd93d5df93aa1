//! Declaration modifier bitset.
//!
//! The bit values follow the checker's combined modifier flags. The
//! translation layer never interprets them beyond the constructor parameter
//! property rule; the renderer decides how to draw them.

use serde::{Deserialize, Serialize};

/// Opaque set of declaration modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModifierFlags(u32);

impl ModifierFlags {
    pub const NONE: Self = Self(0);
    pub const EXPORT: Self = Self(1 << 0);
    pub const AMBIENT: Self = Self(1 << 1);
    pub const PUBLIC: Self = Self(1 << 2);
    pub const PRIVATE: Self = Self(1 << 3);
    pub const PROTECTED: Self = Self(1 << 4);
    pub const STATIC: Self = Self(1 << 5);
    pub const READONLY: Self = Self(1 << 6);
    pub const ACCESSOR: Self = Self(1 << 7);
    pub const ABSTRACT: Self = Self(1 << 8);
    pub const ASYNC: Self = Self(1 << 9);
    pub const DEFAULT: Self = Self(1 << 10);
    pub const CONST: Self = Self(1 << 11);
    pub const OVERRIDE: Self = Self(1 << 14);

    /// Modifiers that turn a constructor parameter into a property.
    pub const PARAMETER_PROPERTY: Self =
        Self(Self::PUBLIC.0 | Self::PRIVATE.0 | Self::PROTECTED.0 | Self::READONLY.0);

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if every flag in `other` is set.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if any flag in `other` is set.
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Whether a constructor parameter with these modifiers declares a property.
    pub const fn is_parameter_property(self) -> bool {
        self.intersects(Self::PARAMETER_PROPERTY)
    }
}

impl std::ops::BitOr for ModifierFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for ModifierFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl std::ops::BitAnd for ModifierFlags {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}
