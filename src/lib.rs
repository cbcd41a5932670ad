//! Safe responder for `GetSystemFirmwareTable` in a Windows compatibility layer.
//!
//! The host intercepts the guest call, forwards the arguments to
//! [`FirmwareTableResponder::get_firmware_table()`] (or the pointer form) and hands the return
//! value back unchanged. The guest receives a `RawSMBIOSData` record built from a
//! [`TableProfile`] instead of an unimplemented-function failure.
#![no_std]

#[cfg(feature = "config")]
pub use self::config::*;
pub use self::error::*;
pub use self::header::*;
pub use self::hex::*;
pub use self::profile::*;
pub use self::provider::*;
pub use self::record::{Event, Line, LogRecorder, Recorder, Value, WriteRecorder};
pub use self::responder::*;
pub use fwtable_macros::*;

#[cfg(feature = "config")]
mod config;
mod error;
mod header;
mod hex;
mod profile;
mod provider;
mod record;
mod responder;

extern crate alloc;
