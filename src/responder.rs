use crate::record::record;
use crate::{Event, FirmwareTableError, Provider, RawSmbiosHeader, Recorder, TableId, TableProfile};
use core::ffi::c_void;
use core::slice::from_raw_parts_mut;

/// Answers `GetSystemFirmwareTable` with the record described by a [`TableProfile`].
///
/// A call either writes the whole record and returns its size, or writes nothing and returns the
/// size that is required. Callers usually probe with an empty buffer first. The provider and the
/// table identifier are accepted as-is; every request receives the same record.
///
/// The responder holds no mutable state so it can be shared between threads when `R` allows it.
#[derive(Debug, Clone)]
pub struct FirmwareTableResponder<R = ()> {
    profile: TableProfile,
    recorder: R,
}

impl FirmwareTableResponder {
    pub fn new(profile: TableProfile) -> Self {
        Self {
            profile,
            recorder: (),
        }
    }
}

impl<R: Recorder> FirmwareTableResponder<R> {
    /// Replaces the recorder that receives diagnostic events.
    pub fn with_recorder<T: Recorder>(self, recorder: T) -> FirmwareTableResponder<T> {
        FirmwareTableResponder {
            profile: self.profile,
            recorder,
        }
    }

    pub fn profile(&self) -> &TableProfile {
        &self.profile
    }

    pub fn recorder(&self) -> &R {
        &self.recorder
    }

    /// Returns the size a call with a too small buffer reports.
    pub fn required_size(&self) -> usize {
        self.profile.record_size()
    }

    /// Fills `dst` and returns the number of bytes written or the size that is required.
    ///
    /// Returns zero if the profile rejects its own source (see
    /// [`crate::FillFlags::STRICT_DECODE`]).
    pub fn get_firmware_table(
        &self,
        provider: impl Into<Provider>,
        id: impl Into<TableId>,
        dst: &mut [u8],
    ) -> u32 {
        match self.try_fill(provider, id, dst) {
            // The size always fit in a u32 since TableProfile checked it.
            Ok(v) => v as u32,
            Err(FirmwareTableError::InsufficientBuffer { required, .. }) => required as u32,
            Err(_) => 0,
        }
    }

    /// Fills `dst` with the record.
    ///
    /// Nothing is written if this method returns an error.
    pub fn try_fill(
        &self,
        provider: impl Into<Provider>,
        id: impl Into<TableId>,
        dst: &mut [u8],
    ) -> Result<usize, FirmwareTableError> {
        let provider = provider.into();
        let id = id.into();
        let required = self.required_size();

        record!(
            &self.recorder,
            Event::Enter,
            "provider" = provider,
            "id" = id,
            "buffer" = dst.as_ptr(),
            "size" = dst.len(),
        );

        if dst.len() < required {
            record!(
                &self.recorder,
                Event::InsufficientBuffer,
                "size" = dst.len(),
                "required" = required,
            );

            return Err(FirmwareTableError::InsufficientBuffer {
                required,
                capacity: dst.len(),
            });
        }

        if let Err(e) = self.profile.check() {
            if let FirmwareTableError::InvalidHex { offset } = e {
                record!(&self.recorder, Event::InvalidSource, "offset" = offset);
            }

            return Err(e);
        }

        // Write the header then the table data right after it.
        let (hdr, data) = dst[..required].split_at_mut(RawSmbiosHeader::SIZE);

        self.profile.header().write_to(hdr);
        self.profile.fill_payload(data);

        Ok(required)
    }

    /// Pointer form of [`FirmwareTableResponder::get_firmware_table()`] for a host that forwards
    /// the guest arguments unchanged.
    ///
    /// A null `buffer` is treated as a probe regardless of `size`.
    ///
    /// # Safety
    /// If `buffer` is not null it must be valid for writes of `size` bytes and must not be
    /// accessed through any other pointer for the duration of the call.
    pub unsafe fn get_firmware_table_raw(
        &self,
        provider: u32,
        id: u32,
        buffer: *mut c_void,
        size: u32,
    ) -> u32 {
        let dst: &mut [u8] = if buffer.is_null() {
            &mut []
        } else {
            // SAFETY: The caller guarantees the buffer is valid for `size` bytes.
            unsafe { from_raw_parts_mut(buffer.cast(), size as usize) }
        };

        self.get_firmware_table(provider, id, dst)
    }
}

impl Default for FirmwareTableResponder {
    fn default() -> Self {
        Self::new(TableProfile::default())
    }
}
