//! Component selection mask for the URL serializers.

use std::ops::{BitOr, BitOrAssign};

/// A bit set selecting which URL components a serializer emits.
///
/// Components are always emitted in canonical order (scheme, user info,
/// host, port, path, query, fragment) regardless of how the mask was
/// assembled. The default mask selects everything.
///
/// # Examples
///
/// ```
/// use urlkit::{Components, Url};
///
/// let url = Url::parse("http://example.com:8080/a?x=1").unwrap();
/// let mask = Components::HOST | Components::PORT;
/// assert_eq!(url.to_string_with(mask), "example.com:8080");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Components(u8);

impl Components {
    /// The scheme component, emitted with a trailing `://`.
    pub const SCHEME: Self = Self(1);
    /// The user-info component, emitted with a trailing `@`.
    pub const USER_INFO: Self = Self(1 << 1);
    /// The host component, re-bracketed for IPv6 literals.
    pub const HOST: Self = Self(1 << 2);
    /// The port component, emitted with a leading `:`.
    pub const PORT: Self = Self(1 << 3);
    /// The path component; emits at least `/` whenever selected.
    pub const PATH: Self = Self(1 << 4);
    /// The query component, emitted with a leading `?`.
    pub const QUERY: Self = Self(1 << 5);
    /// The fragment component, emitted with a leading `#`.
    pub const FRAGMENT: Self = Self(1 << 6);
    /// All seven components.
    pub const ALL: Self = Self(0x7f);

    /// Returns a mask selecting nothing.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Returns a mask from raw bits, ignoring bits outside the seven
    /// defined components.
    #[must_use]
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & Self::ALL.0)
    }

    /// Returns true if no component is selected.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if every component in `other` is also selected here.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the union of the two masks.
    #[must_use]
    pub const fn with(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns this mask with the components in `other` removed.
    #[must_use]
    pub const fn without(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }
}

impl Default for Components {
    fn default() -> Self {
        Self::ALL
    }
}

impl BitOr for Components {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.with(rhs)
    }
}

impl BitOrAssign for Components {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.with(rhs);
    }
}
