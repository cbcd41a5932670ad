use crate::{decode_hex_pairs, FirmwareTableError, RawSmbiosHeader, SmbiosVersion, StopReason};
use alloc::borrow::Cow;
use bitflags::bitflags;

/// Hexadecimal source of the realistic profile. A captured `RSMB` dump can be placed here; the
/// payload is zero-filled while it is empty.
pub const REALISTIC_TABLE_HEX: &str = "";

/// Length of the table data declared by [`TableProfile::realistic()`].
pub const REALISTIC_TABLE_LENGTH: u32 = 2320;

/// Table data of [`TableProfile::minimal()`].
pub const MINIMAL_TABLE_DATA: &[u8] = &[0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];

/// Describes the record a [`crate::FirmwareTableResponder`] writes.
///
/// The declared length is fixed by the profile. The source only decides the content; a source
/// shorter than the declared length leaves a tail that is handled according to [`FillFlags`] and a
/// longer one is cut at the declared length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableProfile {
    version: SmbiosVersion,
    length: u32,
    source: TableSource,
    flags: FillFlags,
}

impl TableProfile {
    /// SMBIOS 0.0 with eight bytes of `0..=7`.
    pub fn minimal() -> Self {
        Self {
            version: SmbiosVersion::V0_0,
            length: MINIMAL_TABLE_DATA.len() as u32,
            source: TableSource::Bytes(Cow::Borrowed(MINIMAL_TABLE_DATA)),
            flags: FillFlags::default(),
        }
    }

    /// SMBIOS 2.7 with [`REALISTIC_TABLE_LENGTH`] bytes decoded from [`REALISTIC_TABLE_HEX`].
    pub fn realistic() -> Self {
        Self {
            version: SmbiosVersion::V2_7,
            length: REALISTIC_TABLE_LENGTH,
            source: TableSource::Hex(Cow::Borrowed(REALISTIC_TABLE_HEX)),
            flags: FillFlags::default(),
        }
    }

    pub fn custom(
        version: SmbiosVersion,
        length: u32,
        source: TableSource,
    ) -> Result<Self, FirmwareTableError> {
        if length > u32::MAX - RawSmbiosHeader::SIZE as u32 {
            return Err(FirmwareTableError::PayloadTooLarge {
                len: length as usize,
            });
        }

        Ok(Self {
            version,
            length,
            source,
            flags: FillFlags::default(),
        })
    }

    pub fn with_flags(mut self, flags: FillFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn version(&self) -> SmbiosVersion {
        self.version
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn source(&self) -> &TableSource {
        &self.source
    }

    pub fn flags(&self) -> FillFlags {
        self.flags
    }

    pub fn header(&self) -> RawSmbiosHeader {
        RawSmbiosHeader::new(self.version, self.length)
    }

    /// Total number of bytes a fill writes.
    pub fn record_size(&self) -> usize {
        RawSmbiosHeader::SIZE + self.length as usize
    }

    /// Checks the part of the source that a fill would consume.
    ///
    /// Only fails with [`FillFlags::STRICT_DECODE`]. Pairs past the declared length are never
    /// looked at.
    pub fn check(&self) -> Result<(), FirmwareTableError> {
        if !self.flags.contains(FillFlags::STRICT_DECODE) {
            return Ok(());
        }

        let source = match &self.source {
            TableSource::Hex(v) => v,
            TableSource::Bytes(_) => return Ok(()),
        };

        let mut pairs = decode_hex_pairs(source);

        for _ in pairs.by_ref().take(self.length as usize) {}

        match pairs.stop_reason() {
            Some(StopReason::Invalid { offset }) => Err(FirmwareTableError::InvalidHex { offset }),
            _ => Ok(()),
        }
    }

    /// Writes the table data into `dst`, which must be exactly [`TableProfile::length()`] bytes.
    ///
    /// Returns the number of bytes that came from the source.
    pub(crate) fn fill_payload(&self, dst: &mut [u8]) -> usize {
        let filled = match &self.source {
            TableSource::Bytes(v) => {
                let n = v.len().min(dst.len());
                dst[..n].copy_from_slice(&v[..n]);
                n
            }
            TableSource::Hex(v) => {
                let mut n = 0;

                for (d, b) in dst.iter_mut().zip(decode_hex_pairs(v)) {
                    *d = b;
                    n += 1;
                }

                n
            }
        };

        if self.flags.contains(FillFlags::ZERO_FILL) {
            dst[filled..].fill(0);
        }

        filled
    }
}

impl Default for TableProfile {
    fn default() -> Self {
        Self::minimal()
    }
}

/// Content of the table data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSource {
    /// Raw bytes, e.g. from [`crate::hex!`].
    Bytes(Cow<'static, [u8]>),
    /// Two-digit hexadecimal pairs decoded at fill time.
    Hex(Cow<'static, str>),
}

bitflags! {
    /// Flags to control how the table data is produced.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FillFlags: u32 {
        /// Zero the table data that the source does not cover. Without it those bytes keep
        /// whatever the destination already contained.
        const ZERO_FILL = 0x00000001;
        /// Fail the call when the hexadecimal source contains an invalid pair instead of stopping
        /// the decoding there.
        const STRICT_DECODE = 0x00000002;
    }
}

impl Default for FillFlags {
    fn default() -> Self {
        Self::ZERO_FILL
    }
}
