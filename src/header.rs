use crate::FirmwareTableError;
use core::fmt::{Display, Formatter};

/// Represents the fixed part of a `RawSMBIOSData` record.
///
/// The record is never overlaid on the destination memory. [`RawSmbiosHeader::write_to()`] and
/// [`RawSmbiosHeader::parse()`] work on explicit offsets with little-endian encoding of the length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSmbiosHeader {
    used_20_calling_method: u8,
    version: SmbiosVersion,
    dmi_revision: u8,
    length: u32,
}

impl RawSmbiosHeader {
    pub const SIZE: usize = 8;

    pub const fn new(version: SmbiosVersion, length: u32) -> Self {
        Self {
            used_20_calling_method: 0,
            version,
            dmi_revision: 0,
            length,
        }
    }

    /// Reads a header from the start of `data`.
    ///
    /// The declared length must fit in the bytes following the header.
    pub fn parse(data: &[u8]) -> Result<Self, FirmwareTableError> {
        let (hdr, rest) = match data.split_first_chunk::<{ RawSmbiosHeader::SIZE }>() {
            Some(v) => v,
            None => return Err(FirmwareTableError::Truncated { len: data.len() }),
        };

        let length = u32::from_le_bytes([hdr[4], hdr[5], hdr[6], hdr[7]]);

        if length as usize > rest.len() {
            return Err(FirmwareTableError::LengthMismatch {
                declared: length,
                available: rest.len(),
            });
        }

        Ok(Self {
            used_20_calling_method: hdr[0],
            version: SmbiosVersion::new(hdr[1], hdr[2]),
            dmi_revision: hdr[3],
            length,
        })
    }

    /// Writes the header into the first [`RawSmbiosHeader::SIZE`] bytes of `dst`.
    ///
    /// # Panics
    /// If `dst` is shorter than [`RawSmbiosHeader::SIZE`].
    pub fn write_to(&self, dst: &mut [u8]) {
        let dst = &mut dst[..Self::SIZE];

        dst[0] = self.used_20_calling_method;
        dst[1] = self.version.major();
        dst[2] = self.version.minor();
        dst[3] = self.dmi_revision;
        dst[4..].copy_from_slice(&self.length.to_le_bytes());
    }

    pub fn used_20_calling_method(&self) -> bool {
        self.used_20_calling_method != 0
    }

    pub fn version(&self) -> SmbiosVersion {
        self.version
    }

    pub fn dmi_revision(&self) -> u8 {
        self.dmi_revision
    }

    /// Length of the table data that follows the header.
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Total size of the record, header included.
    pub fn record_size(&self) -> usize {
        Self::SIZE + self.length as usize
    }
}

/// SMBIOS major and minor version reported to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SmbiosVersion {
    major: u8,
    minor: u8,
}

impl SmbiosVersion {
    pub const V0_0: Self = Self::new(0, 0);
    pub const V2_7: Self = Self::new(2, 7);

    pub const fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }

    pub const fn major(self) -> u8 {
        self.major
    }

    pub const fn minor(self) -> u8 {
        self.minor
    }
}

impl Display for SmbiosVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}
