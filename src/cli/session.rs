//! Interactive stopwatch session.
//!
//! On a terminal, one loop drives both the one-second tick and the keyboard:
//! `event::poll` waits at most until the next tick, keys edit a line buffer
//! that the status line redraws together with the timer. With piped input the
//! lines are read in order and the stopwatch is advanced by the wall-clock
//! seconds that passed in between.

use crate::cli::repl::{HELP, SessionCommand};
use crate::core::controller::Controller;
use crate::core::timer::{Stopwatch, TimerState};
use crate::core::view::View;
use crate::errors::AppResult;
use crate::ui::messages::{info, report, success};
use crossterm::cursor::MoveToColumn;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::queue;
use std::io::{self, BufRead, IsTerminal, Write};
use std::time::{Duration, Instant};

const TICK: Duration = Duration::from_secs(1);

#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    Pending,
    Submit(String),
    Quit,
}

/// The command line being typed under the running timer.
#[derive(Debug, Default)]
pub struct LineEditor {
    buffer: String,
}

impl LineEditor {
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn on_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.kind != KeyEventKind::Press {
            return KeyOutcome::Pending;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => return KeyOutcome::Quit,
            KeyCode::Char('d') if ctrl && self.buffer.is_empty() => return KeyOutcome::Quit,
            KeyCode::Char(_) if ctrl => {}
            KeyCode::Char(c) => self.buffer.push(c),
            KeyCode::Backspace => {
                self.buffer.pop();
            }
            KeyCode::Esc => self.buffer.clear(),
            KeyCode::Enter => return KeyOutcome::Submit(std::mem::take(&mut self.buffer)),
            _ => {}
        }

        KeyOutcome::Pending
    }
}

/// Timer reading, run state and the pending input, on one line.
pub fn status_line(stopwatch: &Stopwatch, input: &str) -> String {
    let state = match stopwatch.state() {
        TimerState::Running => "▶ running",
        TimerState::Stopped => "■ stopped",
    };
    format!("⏱  {}  {}  > {}", stopwatch.elapsed(), state, input)
}

fn draw_status<W: Write>(out: &mut W, stopwatch: &Stopwatch, input: &str) -> io::Result<()> {
    queue!(
        out,
        MoveToColumn(0),
        Clear(ClearType::CurrentLine),
        Print(status_line(stopwatch, input))
    )?;
    out.flush()
}

/// Run one user command against the controller.
pub fn execute<V: View>(controller: &mut Controller<V>, cmd: SessionCommand) -> AppResult<Flow> {
    match cmd {
        SessionCommand::Stop => {
            let saved = controller.stop_and_save()?;
            success(saved);
        }
        SessionCommand::Manual(Some(hours)) => {
            let saved = controller.manual_entry(&hours)?;
            success(saved);
        }
        SessionCommand::Negative(Some(hours)) => {
            let saved = controller.negative_entry(&hours)?;
            success(saved);
        }
        SessionCommand::Manual(None) | SessionCommand::Negative(None) => {
            info("Nothing entered, cancelled.");
        }
        SessionCommand::Visualize => controller.visualize_data()?,
        SessionCommand::Edit { id, date, hours } => {
            controller.edit_record(id, &date, &hours)?;
            success("Record updated successfully!");
        }
        SessionCommand::Refresh => controller.refresh_view()?,
        SessionCommand::Help => println!("{HELP}"),
        SessionCommand::Quit => return Ok(Flow::Quit),
        SessionCommand::Nothing => {}
    }

    Ok(Flow::Continue)
}

/// Parse and run one input line. Errors are reported, never propagated:
/// the session stays usable after any failed action.
pub fn handle_line<V: View>(controller: &mut Controller<V>, line: &str) -> Flow {
    let outcome = SessionCommand::parse(line).and_then(|cmd| execute(controller, cmd));

    match outcome {
        Ok(flow) => flow,
        Err(e) => {
            report(&e);
            Flow::Continue
        }
    }
}

/// Run the lines of `input` in order until `quit` or end of input.
pub fn run_lines<V: View, R: BufRead>(controller: &mut Controller<V>, input: R) -> AppResult<()> {
    let mut last_tick = Instant::now();

    for line in input.lines() {
        let line = line?;

        let whole = last_tick.elapsed().as_secs();
        for _ in 0..whole {
            controller.tick();
        }
        last_tick += Duration::from_secs(whole);

        if handle_line(controller, &line) == Flow::Quit {
            break;
        }
    }

    Ok(())
}

/// Leaves raw mode when dropped, whatever way the loop exits.
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(RawMode)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

fn run_terminal<V: View>(controller: &mut Controller<V>) -> AppResult<()> {
    let mut out = io::stdout();
    let mut editor = LineEditor::default();
    let mut next_tick = Instant::now() + TICK;
    let _raw = RawMode::enable()?;

    loop {
        while Instant::now() >= next_tick {
            controller.tick();
            next_tick += TICK;
        }
        draw_status(&mut out, controller.stopwatch(), editor.buffer())?;

        if !event::poll(next_tick.saturating_duration_since(Instant::now()))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };

        match editor.on_key(key) {
            KeyOutcome::Pending => {}
            KeyOutcome::Quit => break,
            KeyOutcome::Submit(line) => {
                // Command output is plain line-oriented text.
                terminal::disable_raw_mode()?;
                println!();
                let flow = handle_line(controller, &line);
                terminal::enable_raw_mode()?;

                if flow == Flow::Quit {
                    break;
                }
            }
        }
    }

    queue!(out, Print("\r\n"))?;
    out.flush()?;
    Ok(())
}

/// Drive the session until `quit`, Ctrl-C or end of input.
pub fn run_session<V: View>(controller: &mut Controller<V>) -> AppResult<()> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        run_terminal(controller)
    } else {
        run_lines(controller, stdin.lock())
    }
}
