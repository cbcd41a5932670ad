use core::fmt::{Display, Formatter, Write};

/// Represents a `FIRMWARE_TABLE_PROVIDER` signature.
///
/// The responder accepts any value; the named constants exist for callers and diagnostics.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Provider(u32);

impl Provider {
    pub const ACPI: Self = Self::from_tag(*b"ACPI");
    pub const FIRM: Self = Self::from_tag(*b"FIRM");
    pub const RSMB: Self = Self::from_tag(*b"RSMB");

    pub const fn new(v: u32) -> Self {
        Self(v)
    }

    /// Builds a signature from its four-character tag, first character in the most significant
    /// byte (`'RSMB'` is `0x52534D42`).
    pub const fn from_tag(tag: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(tag))
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    pub const fn tag(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }
}

impl From<u32> for Provider {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

impl Display for Provider {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let tag = self.tag();

        if !tag.iter().all(|c| c.is_ascii_graphic()) {
            return write!(f, "{:#010x}", self.0);
        }

        for c in tag {
            f.write_char(c.into())?;
        }

        Ok(())
    }
}

/// Represents a `FIRMWARE_TABLE_ID`.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(u32);

impl TableId {
    pub const fn new(v: u32) -> Self {
        Self(v)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for TableId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

impl Display for TableId {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
