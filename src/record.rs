use crate::{Provider, TableId};
use core::cell::RefCell;
use core::fmt::{Display, Formatter, Write};

/// Records an event on a [`Recorder`], with `key = value` fields.
///
/// Nothing is evaluated when the recorder is disabled.
macro_rules! record {
    ($recorder:expr, $event:expr $(, $key:literal = $value:expr)* $(,)?) => {
        if $crate::Recorder::enabled($recorder) {
            $crate::Recorder::record($recorder, $event, &[$(($key, $crate::Value::from($value))),*]);
        }
    };
}

pub(crate) use record;

/// A collaborator that receives diagnostic events from [`crate::FirmwareTableResponder`].
///
/// The responder calls [`Recorder::record()`] on entry and when the buffer is too small. `()` is
/// the disabled recorder.
pub trait Recorder {
    fn record(&self, event: Event, fields: &[(&'static str, Value)]);

    /// Returns `false` if [`Recorder::record()`] would discard everything.
    fn enabled(&self) -> bool {
        true
    }
}

impl Recorder for () {
    fn record(&self, _: Event, _: &[(&'static str, Value)]) {}

    fn enabled(&self) -> bool {
        false
    }
}

impl<R: Recorder + ?Sized> Recorder for &R {
    fn record(&self, event: Event, fields: &[(&'static str, Value)]) {
        (**self).record(event, fields)
    }

    fn enabled(&self) -> bool {
        (**self).enabled()
    }
}

/// Events emitted by [`crate::FirmwareTableResponder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A call was received.
    Enter,
    /// The buffer is smaller than the record; the required size is being returned.
    InsufficientBuffer,
    /// The source has an invalid pair and strict decoding is enabled.
    InvalidSource,
}

impl Event {
    pub fn name(self) -> &'static str {
        match self {
            Self::Enter => "enter",
            Self::InsufficientBuffer => "insufficient_buffer",
            Self::InvalidSource => "invalid_source",
        }
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Value of an event field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    Provider(Provider),
    TableId(TableId),
    Size(usize),
    Address(usize),
}

impl From<Provider> for Value {
    fn from(v: Provider) -> Self {
        Self::Provider(v)
    }
}

impl From<TableId> for Value {
    fn from(v: TableId) -> Self {
        Self::TableId(v)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Self::Size(v)
    }
}

impl<T> From<*const T> for Value {
    fn from(v: *const T) -> Self {
        Self::Address(v as usize)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Provider(v) => v.fmt(f),
            Self::TableId(v) => v.fmt(f),
            Self::Size(v) => v.fmt(f),
            Self::Address(v) => write!(f, "{v:#x}"),
        }
    }
}

/// Formats an event as `name key=value key=value`.
pub struct Line<'a> {
    event: Event,
    fields: &'a [(&'static str, Value)],
}

impl<'a> Line<'a> {
    pub fn new(event: Event, fields: &'a [(&'static str, Value)]) -> Self {
        Self { event, fields }
    }
}

impl<'a> Display for Line<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        self.event.fmt(f)?;

        for (k, v) in self.fields {
            write!(f, " {k}={v}")?;
        }

        Ok(())
    }
}

/// A recorder that forwards events to the [`log`] facade at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogRecorder;

impl Recorder for LogRecorder {
    fn record(&self, event: Event, fields: &[(&'static str, Value)]) {
        log::debug!(target: "fwtable", "{}", Line::new(event, fields));
    }

    fn enabled(&self) -> bool {
        log::log_enabled!(target: "fwtable", log::Level::Debug)
    }
}

/// A recorder that writes one line per event to a [`Write`].
///
/// Write errors are discarded; a broken writer never fails the call being recorded.
pub struct WriteRecorder<W> {
    writer: RefCell<W>,
}

impl<W: Write> WriteRecorder<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: RefCell::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write> Recorder for WriteRecorder<W> {
    fn record(&self, event: Event, fields: &[(&'static str, Value)]) {
        // Skip the event if a recursive call is already writing.
        let mut w = match self.writer.try_borrow_mut() {
            Ok(v) => v,
            Err(_) => return,
        };

        let _ = writeln!(w, "{}", Line::new(event, fields));
    }
}
