mod common;

use common::{started, Event, LinkError, Log};
use serlcd_core::render::{INIT_SETTLE_MS, SCROLL_SETTLE_MS, SCROLL_STEP_MS};
use serlcd_core::{
    AddressingMode, CursorPosition, Display, DisplayGeometry, Error, RenderOptions, SessionState,
};
use serlcd_protocol::Command;

#[test]
fn test_startup_sequence() {
    let log = Log::default();
    let display = Display::start(log.link(), log.delay(), DisplayGeometry::DEFAULT).unwrap();

    assert_eq!(
        log.take(),
        [
            Event::Write(Command::Init),
            Event::Flush,
            Event::Delay(INIT_SETTLE_MS),
            Event::Write(Command::Clear),
            Event::Write(Command::move_to(0, 0)),
        ]
    );
    assert_eq!(display.state(), SessionState::Ready);
    assert_eq!(display.cursor(), CursorPosition::ORIGIN);
}

#[test]
fn test_startup_failure_is_fatal() {
    for k in 1..=3 {
        let log = Log::default();
        log.fail_at(k);
        let result = Display::start(log.link(), log.delay(), DisplayGeometry::DEFAULT);
        assert_eq!(result.err(), Some(Error::Transport(LinkError)));
        assert_eq!(log.attempts(), k);
        assert!(log.closed());
    }
}

#[test]
fn test_print_hello_world() {
    let (mut display, log) = started(2, 16);
    display
        .print("Hello, World!", RenderOptions::default())
        .unwrap();

    assert_eq!(
        log.take(),
        [
            Event::Write(Command::SetCursorVisible(false)),
            Event::Write(Command::move_to(0, 0)),
            Event::Write(Command::print(b"Hello, World!   ")),
        ]
    );
    assert_eq!(display.cursor(), CursorPosition::ORIGIN);
}

#[test]
fn test_print_long_message_scrolls() {
    let text = "This is a very long message";
    let (mut display, log) = started(2, 16);
    display.print(text, RenderOptions::default()).unwrap();

    let events = log.take();
    assert_eq!(events[0], Event::Write(Command::SetCursorVisible(false)));
    assert_eq!(events[1], Event::Write(Command::move_to(0, 0)));
    assert_eq!(events[2], Event::Write(Command::print(b"This is a very ")));
    assert_eq!(events[3], Event::Flush);
    assert_eq!(events[4], Event::Delay(SCROLL_SETTLE_MS));

    let frames = &events[5..];
    assert_eq!(frames.len(), 4 * (text.len() - 16));
    for (i, frame) in frames.chunks(4).enumerate() {
        let offset = i + 1;
        assert_eq!(frame[0], Event::Write(Command::move_to(0, 0)));
        assert_eq!(frame[1], Event::Flush);
        assert_eq!(frame[2], Event::Delay(SCROLL_STEP_MS));
        assert_eq!(
            frame[3],
            Event::Write(Command::print(&text.as_bytes()[offset..offset + 16]))
        );
    }
    assert_eq!(
        events.last(),
        Some(&Event::Write(Command::print(b"ery long message")))
    );
    assert_eq!(display.cursor(), CursorPosition::ORIGIN);
}

#[test]
fn test_print_overflow_trace() {
    let (mut display, log) = started(2, 16);
    display
        .print("Row0\nRow1\nRow2", RenderOptions::default().with_scroll(false))
        .unwrap();

    let moves_and_prints: Vec<_> = log
        .commands()
        .into_iter()
        .filter(|c| !matches!(c, Command::SetCursorVisible(_)))
        .collect();
    assert_eq!(
        moves_and_prints,
        [
            Command::move_to(0, 0),
            Command::print(b"Row0            "),
            Command::move_to(0, 1),
            Command::print(b"Row1            "),
            Command::move_to(0, 0),
            Command::print(b"Row1            "),
            Command::move_to(0, 1),
            Command::print(b"Row2            "),
        ]
    );
    assert_eq!(display.cursor(), CursorPosition::new(0, 1));
}

#[test]
fn test_print_with_cursor_shown() {
    let (mut display, log) = started(2, 16);
    display
        .print("x", RenderOptions::default().with_cursor(true))
        .unwrap();
    assert_eq!(log.commands()[0], Command::SetCursorVisible(true));
}

#[test]
fn test_print_rejects_nul_without_io() {
    let (mut display, log) = started(2, 16);
    assert_eq!(
        display.print("a\0b", RenderOptions::default()),
        Err(Error::InvalidText)
    );
    assert_eq!(log.attempts(), 0);
}

#[test]
fn test_failure_mid_print_keeps_cursor() {
    let (mut display, log) = started(2, 16);
    display.move_to(3, 1).unwrap();
    log.take();

    // visibility, move, print, move, print, ...; fail on the second row's print
    log.fail_at(5);
    let result = display.print("first\nsecond\nthird", RenderOptions::default());

    assert_eq!(result, Err(Error::Transport(LinkError)));
    assert_eq!(log.attempts(), 5);
    assert_eq!(log.commands().len(), 4);
    assert_eq!(display.cursor(), CursorPosition::new(3, 1));
    assert_eq!(display.state(), SessionState::Ready);
}

#[test]
fn test_failure_during_scroll_stops_animation() {
    let (mut display, log) = started(2, 4);
    log.fail_at(4);
    let result = display.print("abcdefgh", RenderOptions::default());

    assert_eq!(result, Err(Error::Transport(LinkError)));
    // visibility, move, first frame, settle delay; the failed MOVE is not followed by its delay
    assert_eq!(
        log.take(),
        [
            Event::Write(Command::SetCursorVisible(false)),
            Event::Write(Command::move_to(0, 0)),
            Event::Write(Command::print(b"abc")),
            Event::Flush,
            Event::Delay(SCROLL_SETTLE_MS),
        ]
    );
}

#[test]
fn test_every_pause_waits_for_drain() {
    let log = Log::default();
    let mut display = Display::start(log.link(), log.delay(), DisplayGeometry::DEFAULT).unwrap();
    display
        .print("This is a very long message", RenderOptions::default())
        .unwrap();

    let events = log.take();
    let delays: Vec<_> = events
        .iter()
        .enumerate()
        .filter(|(_, e)| matches!(e, Event::Delay(_)))
        .map(|(i, _)| i)
        .collect();
    // Startup settle, scroll settle, then one per window step
    assert_eq!(delays.len(), 13);
    for i in delays {
        assert_eq!(events[i - 1], Event::Flush, "delay at {i} not preceded by a flush");
    }
}

#[test]
fn test_single_column_scroll_never_shows_first_byte() {
    let (mut display, log) = started(2, 1);
    display.print("abc", RenderOptions::default()).unwrap();

    assert_eq!(
        log.printed(),
        [b"".to_vec(), b"b".to_vec(), b"c".to_vec()]
    );
    assert_eq!(display.cursor(), CursorPosition::ORIGIN);
}

#[test]
fn test_session_usable_after_write_failure() {
    let (mut display, log) = started(2, 16);
    log.fail_at(1);
    assert!(display.clear().is_err());

    log.take();
    display.print("ok", RenderOptions::default()).unwrap();
    assert_eq!(log.printed(), [b"ok              ".to_vec()]);
}

#[test]
fn test_move_in_bounds() {
    let (mut display, log) = started(2, 16);
    display.move_to(15, 1).unwrap();
    assert_eq!(log.commands(), [Command::move_to(15, 1)]);
    assert_eq!(display.cursor(), CursorPosition::new(15, 1));
}

#[test]
fn test_move_out_of_bounds_rejected_without_io() {
    let (mut display, log) = started(2, 16);
    assert_eq!(
        display.move_to(16, 0),
        Err(Error::OutOfBounds { column: 16, row: 0 })
    );
    assert_eq!(
        display.move_to(0, 2),
        Err(Error::OutOfBounds { column: 0, row: 2 })
    );
    assert_eq!(log.attempts(), 0);
    assert_eq!(display.cursor(), CursorPosition::ORIGIN);
}

#[test]
fn test_failed_move_keeps_cursor() {
    let (mut display, log) = started(2, 16);
    log.fail_at(1);
    assert!(display.move_to(5, 1).is_err());
    assert_eq!(display.cursor(), CursorPosition::ORIGIN);
}

#[test]
fn test_clear_resets_cursor() {
    let (mut display, log) = started(4, 20);
    display.move_to(7, 3).unwrap();
    log.take();

    display.clear().unwrap();
    assert_eq!(log.commands(), [Command::Clear]);
    assert_eq!(display.cursor(), CursorPosition::ORIGIN);
}

#[test]
fn test_cursor_visibility_leaves_position() {
    let (mut display, log) = started(2, 16);
    display.move_to(2, 1).unwrap();
    log.take();

    display.cursor_on().unwrap();
    display.cursor_off().unwrap();
    assert_eq!(
        log.commands(),
        [
            Command::SetCursorVisible(true),
            Command::SetCursorVisible(false)
        ]
    );
    assert_eq!(display.cursor(), CursorPosition::new(2, 1));
}

#[test]
fn test_cursor_relative_print_continues() {
    let (mut display, log) = started(2, 16);
    let options = RenderOptions::default().with_addressing(AddressingMode::CursorRelative);

    display.print("abc", options).unwrap();
    display.print("def", options).unwrap();

    assert_eq!(log.printed(), [b"abc".to_vec(), b"def".to_vec()]);
    assert!(log.commands().contains(&Command::move_to(3, 0)));
    assert_eq!(display.cursor(), CursorPosition::new(6, 0));
}

#[test]
fn test_plan_is_a_dry_run() {
    let (display, log) = started(2, 16);
    let steps: Vec<_> = display
        .plan("Hello", RenderOptions::default())
        .unwrap()
        .collect();
    assert_eq!(steps.len(), 3);
    assert_eq!(log.attempts(), 0);
}

#[test]
fn test_disconnect_is_idempotent() {
    let (mut display, log) = started(2, 16);
    display.disconnect();
    display.disconnect();

    assert!(log.closed());
    assert_eq!(display.state(), SessionState::Closed);
    assert!(display.link().is_none());
}

#[test]
fn test_operations_after_disconnect_fail() {
    let (mut display, log) = started(2, 16);
    display.disconnect();

    assert_eq!(display.clear(), Err(Error::NotReady));
    assert_eq!(display.move_to(0, 0), Err(Error::NotReady));
    assert_eq!(
        display.print("late", RenderOptions::default()),
        Err(Error::NotReady)
    );
    assert_eq!(display.cursor_on(), Err(Error::NotReady));
    assert_eq!(log.attempts(), 0);
}
