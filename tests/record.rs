use fwtable::{
    Event, FirmwareTableResponder, Provider, Recorder, TableProfile, Value, WriteRecorder,
};
use std::cell::RefCell;

#[derive(Default)]
struct Events(RefCell<Vec<(Event, Vec<(&'static str, Value)>)>>);

impl Recorder for Events {
    fn record(&self, event: Event, fields: &[(&'static str, Value)]) {
        self.0.borrow_mut().push((event, fields.to_vec()));
    }
}

#[test]
fn enter_and_insufficient() {
    let events = Events::default();
    let responder = FirmwareTableResponder::new(TableProfile::realistic()).with_recorder(&events);

    responder.get_firmware_table(Provider::RSMB, 0u32, &mut []);
    drop(responder);

    let events = events.0.into_inner();

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].0, Event::Enter);
    assert_eq!(events[0].1[0], ("provider", Value::Provider(Provider::RSMB)));
    assert_eq!(events[0].1[3], ("size", Value::Size(0)));
    assert_eq!(events[1].0, Event::InsufficientBuffer);
    assert_eq!(events[1].1[1], ("required", Value::Size(2328)));
}

#[test]
fn enter_only() {
    let events = Events::default();
    let responder = FirmwareTableResponder::new(TableProfile::minimal()).with_recorder(&events);
    let mut buf = [0u8; 16];

    responder.get_firmware_table(Provider::RSMB, 0u32, &mut buf);
    drop(responder);

    let events = events.0.into_inner();

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].0, Event::Enter);
}

#[test]
fn write_recorder_output() {
    let recorder = WriteRecorder::new(String::new());
    let responder = FirmwareTableResponder::new(TableProfile::minimal()).with_recorder(&recorder);

    responder.get_firmware_table(Provider::RSMB, 7u32, &mut [0u8; 4]);
    drop(responder);

    let out = recorder.into_inner();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("enter provider=RSMB id=0x7 buffer=0x"));
    assert!(lines[0].ends_with(" size=4"));
    assert_eq!(lines[1], "insufficient_buffer size=4 required=16");
}

#[test]
fn log_recorder_without_logger() {
    use fwtable::LogRecorder;

    let responder = FirmwareTableResponder::new(TableProfile::minimal()).with_recorder(LogRecorder);
    let mut buf = [0u8; 16];

    assert_eq!(responder.recorder().enabled(), false);
    assert_eq!(responder.get_firmware_table(Provider::RSMB, 0u32, &mut buf), 16);
}
