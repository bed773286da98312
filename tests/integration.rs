//! Integration tests: raw interrupt-transfer buffers in, synthesized
//! key events out, through the public `DeviceSession` API.

use keymode::hid::keycodes::{KEY_B, KEY_LEFT_ALT, KEY_LEFT_CTRL, KEY_Q, KEY_SPACE, KEY_T};
use keymode::{DeviceSession, Error, KeySink, Mode};

const KEY_A: u8 = 0x04;

/// Records every event and sync the session emits.
#[derive(Default)]
struct RecordingSink {
    events: Vec<(u8, bool)>,
    syncs: usize,
}

impl KeySink for RecordingSink {
    fn report_key(&mut self, keycode: u8, pressed: bool) {
        self.events.push((keycode, pressed));
    }

    fn sync(&mut self) {
        self.syncs += 1;
    }
}

/// Build an 8-byte boot report with the given keycode slots down.
fn report(keys: &[u8]) -> [u8; 8] {
    let mut buf = [0u8; 8];
    for (i, &k) in keys.iter().enumerate() {
        buf[2 + i] = k;
    }
    buf
}

fn deliver(session: &mut DeviceSession, sink: &mut RecordingSink, keys: &[u8]) {
    session
        .handle_transfer(0, &report(keys), sink)
        .expect("transfer should succeed");
}

#[test]
fn normal_mode_pass_through() {
    let mut session = DeviceSession::new();
    let mut sink = RecordingSink::default();

    deliver(&mut session, &mut sink, &[KEY_A]);
    deliver(&mut session, &mut sink, &[]);

    assert_eq!(sink.events, vec![(KEY_A, true), (KEY_A, false)]);
    assert_eq!(session.mode(), Mode::Normal);
}

#[test]
fn one_sync_per_report() {
    let mut session = DeviceSession::new();
    let mut sink = RecordingSink::default();

    deliver(&mut session, &mut sink, &[KEY_A]);
    deliver(&mut session, &mut sink, &[KEY_A, KEY_B]);
    deliver(&mut session, &mut sink, &[]);

    assert_eq!(sink.syncs, 3);
}

#[test]
fn repeated_identical_reports_emit_nothing_new() {
    let mut session = DeviceSession::new();
    let mut sink = RecordingSink::default();

    deliver(&mut session, &mut sink, &[KEY_A]);
    let after_first = sink.events.clone();
    deliver(&mut session, &mut sink, &[KEY_A]);
    deliver(&mut session, &mut sink, &[KEY_A]);

    assert_eq!(sink.events, after_first);
    assert_eq!(sink.syncs, 3);
}

#[test]
fn ctrl_space_toggle_from_raw_reports() {
    let mut session = DeviceSession::new();
    let mut sink = RecordingSink::default();

    deliver(&mut session, &mut sink, &[KEY_LEFT_CTRL]);
    deliver(&mut session, &mut sink, &[KEY_LEFT_CTRL, KEY_SPACE]);

    assert_eq!(session.mode(), Mode::Command);
    // Ctrl passed through before the chord completed; Space consumed.
    assert_eq!(sink.events, vec![(KEY_LEFT_CTRL, true)]);
}

#[test]
fn open_terminal_macro_from_raw_reports() {
    let mut session = DeviceSession::new();
    let mut sink = RecordingSink::default();

    deliver(&mut session, &mut sink, &[KEY_LEFT_CTRL, KEY_SPACE]);
    deliver(&mut session, &mut sink, &[]);
    assert_eq!(session.mode(), Mode::Command);
    sink.events.clear();

    deliver(&mut session, &mut sink, &[KEY_B]);

    assert_eq!(
        sink.events,
        vec![
            (KEY_LEFT_CTRL, true),
            (KEY_LEFT_ALT, true),
            (KEY_T, true),
            (KEY_T, false),
            (KEY_LEFT_ALT, false),
            (KEY_LEFT_CTRL, false),
            (KEY_B, false),
        ]
    );
    assert_eq!(session.mode(), Mode::Command);
}

#[test]
fn exit_command_mode_from_raw_reports() {
    let mut session = DeviceSession::new();
    let mut sink = RecordingSink::default();

    deliver(&mut session, &mut sink, &[KEY_LEFT_CTRL, KEY_SPACE]);
    deliver(&mut session, &mut sink, &[]);
    sink.events.clear();

    deliver(&mut session, &mut sink, &[KEY_Q]);

    assert_eq!(session.mode(), Mode::Normal);
    assert_eq!(sink.events, vec![(KEY_Q, false)]);

    // Back in Normal mode, keys pass through again.
    sink.events.clear();
    deliver(&mut session, &mut sink, &[KEY_Q, KEY_A]);
    assert_eq!(sink.events, vec![(KEY_A, true)]);
}

#[test]
fn failed_transfer_drops_the_report() {
    let mut session = DeviceSession::new();
    let mut sink = RecordingSink::default();

    // URB-style negative status: report dropped whole, no sync.
    let result = session.handle_transfer(-71, &report(&[KEY_A]), &mut sink);
    assert_eq!(result, Err(Error::Transport(-71)));
    assert!(sink.events.is_empty());
    assert_eq!(sink.syncs, 0);

    // The next good transfer still sees the old previous set.
    deliver(&mut session, &mut sink, &[KEY_A]);
    assert_eq!(sink.events, vec![(KEY_A, true)]);
}

#[test]
fn short_buffer_drops_the_report() {
    let mut session = DeviceSession::new();
    let mut sink = RecordingSink::default();

    let result = session.handle_transfer(0, &[0x00, 0x00, KEY_A], &mut sink);
    assert_eq!(result, Err(Error::ReportTooShort { len: 3 }));
    assert!(sink.events.is_empty());
    assert_eq!(sink.syncs, 0);
}

#[test]
fn oversized_transfer_buffer_is_accepted() {
    let mut session = DeviceSession::new();
    let mut sink = RecordingSink::default();

    // Device max-packet-size larger than the boot layout.
    let mut buf = [0u8; 16];
    buf[2] = KEY_A;
    session
        .handle_transfer(0, &buf, &mut sink)
        .expect("transfer should succeed");
    assert_eq!(sink.events, vec![(KEY_A, true)]);
}

#[test]
fn out_of_range_slot_does_not_disturb_the_batch() {
    let mut session = DeviceSession::new();
    let mut sink = RecordingSink::default();

    deliver(&mut session, &mut sink, &[0xFF, KEY_A]);
    assert_eq!(sink.events, vec![(KEY_A, true)]);
    assert_eq!(sink.syncs, 1);
}

#[test]
fn sessions_do_not_share_diff_state() {
    // Two keyboards attached at once: key state must not leak between
    // their sessions.
    let mut first = DeviceSession::new();
    let mut second = DeviceSession::new();
    let mut sink_a = RecordingSink::default();
    let mut sink_b = RecordingSink::default();

    deliver(&mut first, &mut sink_a, &[KEY_A]);
    // Same key reported on the second device is a fresh press there,
    // not a no-op inherited from the first device's previous set.
    deliver(&mut second, &mut sink_b, &[KEY_A]);
    assert_eq!(sink_b.events, vec![(KEY_A, true)]);

    // Releasing on the second device must not release on the first.
    deliver(&mut second, &mut sink_b, &[]);
    assert_eq!(sink_a.events, vec![(KEY_A, true)]);
    deliver(&mut first, &mut sink_a, &[]);
    assert_eq!(sink_a.events, vec![(KEY_A, true), (KEY_A, false)]);
}

#[test]
fn mode_does_not_persist_across_sessions() {
    let mut session = DeviceSession::new();
    let mut sink = RecordingSink::default();

    deliver(&mut session, &mut sink, &[KEY_LEFT_CTRL, KEY_SPACE]);
    assert_eq!(session.mode(), Mode::Command);

    // Reattach: a fresh session starts over in Normal mode.
    let replacement = DeviceSession::new();
    assert_eq!(replacement.mode(), Mode::Normal);
}
