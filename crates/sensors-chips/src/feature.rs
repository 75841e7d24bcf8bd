//! Feature entries and their access modes.

use std::fmt;

/// Access mode declared for a feature register.
///
/// The catalog records the mode as metadata only. Callers check it before
/// issuing a write transaction on the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessMode {
    /// Register may be read but not written.
    ReadOnly,
    /// Register may be read and written.
    ReadWrite,
    /// Register is part of the layout but this chip revision exposes no
    /// access to it (GL518SM rev 0x00 voltage inputs).
    NoAccess,
}

impl AccessMode {
    /// Whether a read transaction is permitted.
    #[must_use]
    pub const fn is_readable(self) -> bool {
        matches!(self, Self::ReadOnly | Self::ReadWrite)
    }

    /// Whether a write transaction is permitted.
    #[must_use]
    pub const fn is_writable(self) -> bool {
        matches!(self, Self::ReadWrite)
    }

    /// Short tag: `R`, `RW` or `-`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ReadOnly => "R",
            Self::ReadWrite => "RW",
            Self::NoAccess => "-",
        }
    }
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named quantity exposed by a chip.
///
/// The register ID only has meaning inside the owning chip model; the same
/// number on another chip is assigned independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feature {
    name: &'static str,
    id: u32,
    access: AccessMode,
}

impl Feature {
    /// Declare a feature with an explicit access mode.
    #[must_use]
    pub const fn new(name: &'static str, id: u32, access: AccessMode) -> Self {
        Self { name, id, access }
    }

    /// Read-only feature.
    #[must_use]
    pub const fn ro(name: &'static str, id: u32) -> Self {
        Self::new(name, id, AccessMode::ReadOnly)
    }

    /// Read-write feature.
    #[must_use]
    pub const fn rw(name: &'static str, id: u32) -> Self {
        Self::new(name, id, AccessMode::ReadWrite)
    }

    /// Feature the hardware does not let us touch.
    #[must_use]
    pub const fn no_access(name: &'static str, id: u32) -> Self {
        Self::new(name, id, AccessMode::NoAccess)
    }

    /// Symbolic name, e.g. `FAN1_MIN`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Register ID, unique within the owning chip.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Declared access mode.
    #[must_use]
    pub const fn access(&self) -> AccessMode {
        self.access
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_mode_permissions() {
        assert!(AccessMode::ReadOnly.is_readable());
        assert!(!AccessMode::ReadOnly.is_writable());
        assert!(AccessMode::ReadWrite.is_readable());
        assert!(AccessMode::ReadWrite.is_writable());
        assert!(!AccessMode::NoAccess.is_readable());
        assert!(!AccessMode::NoAccess.is_writable());
    }

    #[test]
    fn access_mode_display() {
        assert_eq!(AccessMode::ReadOnly.to_string(), "R");
        assert_eq!(AccessMode::ReadWrite.to_string(), "RW");
        assert_eq!(AccessMode::NoAccess.to_string(), "-");
    }

    #[test]
    fn constructors_set_access() {
        assert_eq!(Feature::ro("IN0", 1).access(), AccessMode::ReadOnly);
        assert_eq!(Feature::rw("IN0_MIN", 11).access(), AccessMode::ReadWrite);
        assert_eq!(Feature::no_access("VDD", 1).access(), AccessMode::NoAccess);
        assert_eq!(Feature::rw("IN0_MIN", 11).id(), 11);
        assert_eq!(Feature::rw("IN0_MIN", 11).name(), "IN0_MIN");
    }
}
