use crate::{FillFlags, FirmwareTableError, SmbiosVersion, TableProfile, TableSource};
use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;
use serde::Deserialize;
use thiserror::Error;

impl TableProfile {
    /// Loads a profile from a TOML document.
    ///
    /// ```toml
    /// variant = "realistic"    # "minimal", "realistic" or "custom" (default)
    /// major_version = 2
    /// minor_version = 7
    /// table_length = 2320      # defaults to the length of the source for "custom"
    /// table_hex = "0a1b..."    # or table_bytes = [0, 1, 2]
    /// zero_fill = true
    /// strict_decode = false
    /// ```
    ///
    /// Keys that are present override the preset selected by `variant`.
    pub fn from_toml(doc: &str) -> Result<Self, ConfigError> {
        let conf: ProfileConfig = toml::from_str(doc)?;

        conf.build()
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ProfileConfig {
    #[serde(default)]
    variant: Variant,
    major_version: Option<u8>,
    minor_version: Option<u8>,
    table_length: Option<u32>,
    table_hex: Option<String>,
    table_bytes: Option<Vec<u8>>,
    zero_fill: Option<bool>,
    strict_decode: Option<bool>,
}

impl ProfileConfig {
    fn build(self) -> Result<TableProfile, ConfigError> {
        // Get the preset.
        let base = match self.variant {
            Variant::Minimal => Some(TableProfile::minimal()),
            Variant::Realistic => Some(TableProfile::realistic()),
            Variant::Custom => None,
        };

        // Resolve the source.
        let source = match (self.table_hex, self.table_bytes) {
            (Some(_), Some(_)) => return Err(ConfigError::ConflictingSources),
            (Some(v), None) => Some(TableSource::Hex(Cow::Owned(v))),
            (None, Some(v)) => Some(TableSource::Bytes(Cow::Owned(v))),
            (None, None) => None,
        };

        let source = match (source, &base) {
            (Some(v), _) => v,
            (None, Some(b)) => b.source().clone(),
            (None, None) => TableSource::Bytes(Cow::Borrowed(&[])),
        };

        // Resolve the length.
        let length = match (self.table_length, &base) {
            (Some(v), _) => v,
            (None, Some(b)) => b.length(),
            (None, None) => source_len(&source)?,
        };

        // Resolve the version.
        let version = base.as_ref().map_or(SmbiosVersion::V0_0, |b| b.version());
        let version = SmbiosVersion::new(
            self.major_version.unwrap_or(version.major()),
            self.minor_version.unwrap_or(version.minor()),
        );

        // Resolve flags.
        let mut flags = base.as_ref().map_or_else(FillFlags::default, |b| b.flags());

        if let Some(v) = self.zero_fill {
            flags.set(FillFlags::ZERO_FILL, v);
        }

        if let Some(v) = self.strict_decode {
            flags.set(FillFlags::STRICT_DECODE, v);
        }

        Ok(TableProfile::custom(version, length, source)?.with_flags(flags))
    }
}

#[derive(Deserialize, Default, Clone, Copy)]
#[serde(rename_all = "lowercase")]
enum Variant {
    Minimal,
    Realistic,
    #[default]
    Custom,
}

fn source_len(source: &TableSource) -> Result<u32, ConfigError> {
    let len = match source {
        TableSource::Bytes(v) => v.len(),
        TableSource::Hex(v) => v.len() / 2,
    };

    if len == 0 {
        return Err(ConfigError::MissingLength);
    }

    u32::try_from(len).map_err(|_| FirmwareTableError::PayloadTooLarge { len }.into())
}

/// Represents an error when [`TableProfile::from_toml()`] is failed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot parse the profile")]
    Parse(#[from] toml::de::Error),

    #[error("table_hex and table_bytes cannot be used together")]
    ConflictingSources,

    #[error("a custom profile without table data must specify table_length")]
    MissingLength,

    #[error("invalid profile")]
    Table(#[from] FirmwareTableError),
}
