//!
//! Spinbox demo. Ctrl-Q quits.
//!

use anyhow::anyhow;
use crossterm::cursor::{DisableBlinking, EnableBlinking, SetCursorStyle};
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use log::debug;
use rat_event::{HandleEvent, Outcome, Regular};
use rat_focus::{Focus, FocusBuilder};
use rat_spinbox::event::SpinboxOutcome;
use rat_spinbox::range::SpinRange;
use rat_spinbox::spinbox::{Spinbox, SpinboxState};
use rat_spinbox::{HasScreenCursor, SpinControls};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::{Block, StatefulWidget, Widget};
use ratatui::{Frame, Terminal};
use std::cmp::max;
use std::fs;
use std::io::{stdout, Stdout};
use std::time::Duration;

fn main() -> Result<(), anyhow::Error> {
    setup_logging()?;

    let mut state = State {
        amount: SpinboxState::new_range(SpinRange::new(0.0, 10.0, 2.0).digits(2)),
        level: SpinboxState::new_range(SpinRange::new(-5.0, 5.0, 1.0)),
        rate: SpinboxState::new_range(SpinRange::new(0.0, 100.0, 5.0)),
        status: "Ctrl-Q to quit.".into(),
    };
    state.amount.set_value(4.0);
    state.rate.set_value(50.0);

    focus(&state).first();

    run_ui(&mut state)
}

struct State {
    amount: SpinboxState,
    level: SpinboxState,
    rate: SpinboxState,
    status: String,
}

fn focus(state: &State) -> Focus {
    let mut fb = FocusBuilder::default();
    fb.widget(&state.amount)
        .widget(&state.level)
        .widget(&state.rate);
    fb.build()
}

fn repaint(frame: &mut Frame<'_>, area: Rect, state: &mut State) {
    let l1 = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    let l2 = Layout::horizontal([
        Constraint::Length(15),
        Constraint::Length(20),
        Constraint::Fill(1),
    ])
    .split(area);

    Line::from("amount").render(Rect::new(l2[0].x, l1[1].y, l2[0].width, 1), frame.buffer_mut());
    Spinbox::new()
        .style(Style::default().black().on_gray())
        .focus_style(Style::default().white().on_dark_gray())
        .select_style(Style::default().black().on_yellow())
        .invalid_style(Style::default().red())
        .render(
            Rect::new(l2[1].x, l1[1].y, l2[1].width, 1),
            frame.buffer_mut(),
            &mut state.amount,
        );

    Line::from("level").render(Rect::new(l2[0].x, l1[2].y + 1, l2[0].width, 1), frame.buffer_mut());
    Spinbox::new()
        .controls(SpinControls::Stacked)
        .block(Block::bordered())
        .style(Style::default().black().on_gray())
        .focus_style(Style::default().white().on_dark_gray())
        .select_style(Style::default().black().on_yellow())
        .invalid_style(Style::default().red())
        .placeholder("level?")
        .render(
            Rect::new(l2[1].x, l1[2].y, l2[1].width, 3),
            frame.buffer_mut(),
            &mut state.level,
        );

    Line::from("rate").render(Rect::new(l2[0].x, l1[3].y, l2[0].width, 1), frame.buffer_mut());
    Spinbox::new()
        .controls(SpinControls::None)
        .align(Alignment::Right)
        .format_with(&fmt_percent)
        .style(Style::default().black().on_gray())
        .focus_style(Style::default().white().on_dark_gray())
        .select_style(Style::default().black().on_yellow())
        .invalid_style(Style::default().red())
        .render(
            Rect::new(l2[1].x, l1[3].y, l2[1].width, 1),
            frame.buffer_mut(),
            &mut state.rate,
        );

    if let Some((cx, cy)) = state
        .amount
        .screen_cursor()
        .or_else(|| state.level.screen_cursor())
        .or_else(|| state.rate.screen_cursor())
    {
        frame.set_cursor_position((cx, cy));
    }

    Line::from(state.status.as_str())
        .style(Style::default().white().on_blue())
        .render(l1[5], frame.buffer_mut());
}

fn fmt_percent(value: f64) -> String {
    format!("{:.0}%", value)
}

fn handle(event: &crossterm::event::Event, state: &mut State) -> Outcome {
    let f = focus(state).handle(event, Regular);

    // every spinbox sees every event, the commit on focus-lost
    // happens inside handle().
    let r1: Outcome = match state.amount.handle(event, Regular) {
        SpinboxOutcome::Value(source) => {
            state.status = format!("amount {:?} -> {:?}", source, state.amount.value());
            Outcome::Changed
        }
        r => r.into(),
    };
    let r2: Outcome = match state.level.handle(event, Regular) {
        SpinboxOutcome::Value(source) => {
            state.status = format!("level {:?} -> {:?}", source, state.level.value());
            Outcome::Changed
        }
        r => r.into(),
    };
    let r3: Outcome = match state.rate.handle(event, Regular) {
        SpinboxOutcome::Value(source) => {
            state.status = format!("rate {:?} -> {:?}", source, state.rate.value());
            Outcome::Changed
        }
        r => r.into(),
    };

    let r = max(f, max(r1, max(r2, r3)));
    debug!("handle {:?}", r);
    r
}

fn run_ui(state: &mut State) -> Result<(), anyhow::Error> {
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableMouseCapture)?;
    stdout().execute(EnableBlinking)?;
    stdout().execute(SetCursorStyle::BlinkingBar)?;
    enable_raw_mode()?;

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    repaint_ui(&mut terminal, state)?;

    let r = 'l: loop {
        let o = match crossterm::event::poll(Duration::from_millis(10)) {
            Ok(true) => {
                let event = match crossterm::event::read() {
                    Ok(v) => v,
                    Err(e) => break 'l Err(anyhow!(e)),
                };
                match &event {
                    crossterm::event::Event::Key(KeyEvent {
                        code: KeyCode::Char('q'),
                        modifiers: KeyModifiers::CONTROL,
                        kind: KeyEventKind::Press,
                        ..
                    }) => break 'l Ok(()),
                    crossterm::event::Event::Resize(_, _) => Outcome::Changed,
                    _ => handle(&event, state),
                }
            }
            Ok(false) => continue,
            Err(e) => break 'l Err(anyhow!(e)),
        };

        if o == Outcome::Changed {
            repaint_ui(&mut terminal, state)?;
        }
    };

    disable_raw_mode()?;
    stdout().execute(SetCursorStyle::DefaultUserShape)?;
    stdout().execute(DisableBlinking)?;
    stdout().execute(DisableMouseCapture)?;
    stdout().execute(LeaveAlternateScreen)?;

    r
}

fn repaint_ui(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    state: &mut State,
) -> Result<(), anyhow::Error> {
    terminal.hide_cursor()?;
    _ = terminal.draw(|frame| {
        let area = frame.area();
        repaint(frame, area, state);
    });
    Ok(())
}

fn setup_logging() -> Result<(), anyhow::Error> {
    _ = fs::remove_file("log.log");
    fern::Dispatch::new()
        .format(|out, message, _record| out.finish(format_args!("{}", message)))
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file("log.log")?)
        .apply()?;
    Ok(())
}
