mod common;
use common::{at, controller_at};

use rhourlog::cli::repl::SessionCommand;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rhourlog::cli::session::{Flow, KeyOutcome, LineEditor, handle_line, run_lines, status_line};
use rhourlog::core::timer::{Stopwatch, TimerState};
use rhourlog::errors::AppError;
use rhourlog::models::elapsed::Elapsed;

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_str(editor: &mut LineEditor, text: &str) {
    for c in text.chars() {
        assert_eq!(editor.on_key(press(KeyCode::Char(c))), KeyOutcome::Pending);
    }
}

#[test]
fn test_parse_session_commands() {
    assert_eq!(SessionCommand::parse("stop").unwrap(), SessionCommand::Stop);
    assert_eq!(SessionCommand::parse("  S ").unwrap(), SessionCommand::Stop);
    assert_eq!(
        SessionCommand::parse("m 07:45").unwrap(),
        SessionCommand::Manual(Some("07:45".into()))
    );
    assert_eq!(
        SessionCommand::parse("negative").unwrap(),
        SessionCommand::Negative(None)
    );
    assert_eq!(
        SessionCommand::parse("edit 3 01/02/2024 08:00").unwrap(),
        SessionCommand::Edit {
            id: Some(3),
            date: "01/02/2024".into(),
            hours: "08:00".into(),
        }
    );
    assert_eq!(
        SessionCommand::parse("e").unwrap(),
        SessionCommand::Edit {
            id: None,
            date: String::new(),
            hours: String::new(),
        }
    );
    assert_eq!(SessionCommand::parse("").unwrap(), SessionCommand::Nothing);
    assert_eq!(SessionCommand::parse("q").unwrap(), SessionCommand::Quit);

    assert!(matches!(
        SessionCommand::parse("dance"),
        Err(AppError::UnknownCommand(_))
    ));
    assert!(matches!(
        SessionCommand::parse("edit x"),
        Err(AppError::InvalidRecordId(_))
    ));
}

#[test]
fn test_extra_words_are_rejected() {
    for line in [
        "manual 07:45 extra",
        "n 01:00 02:00",
        "stop now",
        "edit 1 01/02/2024 08:00 again",
        "view all",
    ] {
        assert!(
            matches!(
                SessionCommand::parse(line),
                Err(AppError::UnexpectedArgument(_))
            ),
            "{line:?} should be rejected"
        );
    }

    let mut c = controller_at("session_extra_words", at(2024, 8, 5, 18, 0));
    assert_eq!(handle_line(&mut c, "manual 07:45 extra"), Flow::Continue);
    assert!(c.store().list_all().unwrap().is_empty());
}

#[test]
fn test_handle_line_keeps_session_alive_after_errors() {
    let mut c = controller_at("session_errors", at(2024, 8, 1, 18, 0));

    assert_eq!(handle_line(&mut c, "manual nonsense"), Flow::Continue);
    assert_eq!(handle_line(&mut c, "frobnicate"), Flow::Continue);
    assert_eq!(handle_line(&mut c, "edit"), Flow::Continue);
    assert!(c.store().list_all().unwrap().is_empty());

    assert_eq!(handle_line(&mut c, "manual 08:00"), Flow::Continue);
    assert_eq!(handle_line(&mut c, "manual 08:00"), Flow::Continue);
    assert_eq!(c.store().list_all().unwrap().len(), 1);

    assert_eq!(handle_line(&mut c, "quit"), Flow::Quit);
}

#[test]
fn test_stop_line_saves_and_stops_timer() {
    let mut c = controller_at("session_stop", at(2024, 8, 2, 18, 0));
    for _ in 0..90 {
        c.tick();
    }

    handle_line(&mut c, "stop");

    let all = c.store().list_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].hours_str(), "-08:58");
    assert_eq!(c.stopwatch().state(), TimerState::Stopped);
    assert_eq!(c.stopwatch().elapsed().to_string(), "00:00:00");
}

#[test]
fn test_cancelled_prompt_is_a_no_op() {
    let mut c = controller_at("session_cancel", at(2024, 8, 3, 18, 0));
    assert_eq!(handle_line(&mut c, "manual"), Flow::Continue);
    assert_eq!(handle_line(&mut c, "n"), Flow::Continue);
    assert!(c.store().list_all().unwrap().is_empty());
}

#[test]
fn test_view_and_refresh_lines_fill_the_browser() {
    let mut c = controller_at("session_view", at(2024, 8, 4, 18, 0));
    handle_line(&mut c, "manual 07:45");
    handle_line(&mut c, "view");

    assert!(c.view().opened);
    assert_eq!(c.view().summary.as_deref(), Some("Total hours: 07:45"));

    handle_line(&mut c, "edit 1 03/08/2024 06:00");
    handle_line(&mut c, "refresh");
    assert_eq!(c.view().records[0].date_str(), "03/08/2024");
    assert_eq!(c.view().summary.as_deref(), Some("Total hours: 06:00"));
}

#[test]
fn test_view_then_manual_redraws_the_open_browser() {
    let mut c = controller_at("session_view_then_manual", at(2024, 8, 6, 18, 0));

    handle_line(&mut c, "view");
    assert!(c.view().opened);
    assert!(c.view().records.is_empty());
    let after_view = c.view().refreshes;

    handle_line(&mut c, "manual 07:45");

    assert_eq!(c.view().refreshes, after_view + 1);
    assert_eq!(c.view().records.len(), 1);
    assert_eq!(c.view().records[0].hours_str(), "07:45");
    assert_eq!(c.view().summary.as_deref(), Some("Total hours: 07:45"));
}

#[test]
fn test_line_editor_keeps_typed_input_until_enter() {
    let mut editor = LineEditor::default();

    type_str(&mut editor, "manual 07:4x");
    assert_eq!(editor.on_key(press(KeyCode::Backspace)), KeyOutcome::Pending);
    type_str(&mut editor, "5");
    assert_eq!(editor.buffer(), "manual 07:45");

    assert_eq!(
        editor.on_key(press(KeyCode::Enter)),
        KeyOutcome::Submit("manual 07:45".into())
    );
    assert_eq!(editor.buffer(), "");
}

#[test]
fn test_line_editor_escape_release_and_quit_keys() {
    let mut editor = LineEditor::default();

    type_str(&mut editor, "stop");
    editor.on_key(press(KeyCode::Esc));
    assert_eq!(editor.buffer(), "");

    let release = KeyEvent::new_with_kind(
        KeyCode::Char('x'),
        KeyModifiers::NONE,
        KeyEventKind::Release,
    );
    assert_eq!(editor.on_key(release), KeyOutcome::Pending);
    assert_eq!(editor.buffer(), "");

    type_str(&mut editor, "v");
    let ctrl_d = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL);
    assert_eq!(editor.on_key(ctrl_d), KeyOutcome::Pending);
    assert_eq!(editor.buffer(), "v");

    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(editor.on_key(ctrl_c), KeyOutcome::Quit);

    let mut empty = LineEditor::default();
    assert_eq!(empty.on_key(ctrl_d), KeyOutcome::Quit);
}

#[test]
fn test_status_line_shows_timer_and_pending_input() {
    let running = Stopwatch::running_from(Elapsed::new(1, 2, 3));
    let line = status_line(&running, "manu");
    assert!(line.contains("01:02:03"));
    assert!(line.contains("running"));
    assert!(line.ends_with("> manu"));

    let mut stopped = Stopwatch::new();
    stopped.stop();
    assert!(status_line(&stopped, "").contains("stopped"));
}

#[test]
fn test_run_lines_stops_at_quit() {
    let mut c = controller_at("session_run_lines", at(2024, 8, 7, 18, 0));
    let input = "manual 07:45\nquit\nnegative 01:00\n".as_bytes();

    run_lines(&mut c, input).unwrap();

    let all = c.store().list_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].hours, 7.75);
}
