use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use rat_spinbox::event::{ChangeSource, ConsumedEvent, SpinboxOutcome};
use rat_spinbox::range::SpinRange;
use rat_spinbox::spinbox::{handle_events, Spinbox, SpinboxState};
use rat_spinbox::SpinControls;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::StatefulWidget;

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn typed(c: char) -> Event {
    key(KeyCode::Char(c))
}

fn mouse(kind: MouseEventKind, x: u16, y: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    })
}

// min=0, max=10, step=2, digits=2, value=4
fn sample() -> SpinboxState {
    let mut state = SpinboxState::new_range(SpinRange::new(0.0, 10.0, 2.0).digits(2));
    state.set_value(4.0);
    state
}

fn buf_line(buf: &Buffer, y: u16) -> String {
    let area = buf.area;
    (area.left()..area.right())
        .map(|x| buf.cell((x, y)).expect("cell").symbol())
        .collect()
}

#[test]
fn test_seed_on_focus() {
    let mut state = sample();
    assert!(!state.is_editing());

    let r = handle_events(&mut state, true, &key(KeyCode::Right));
    assert!(r.is_consumed());
    assert!(state.is_editing());
    assert_eq!(state.edit_text(), "4.00");
}

#[test]
fn test_commit_on_blur() {
    let mut state = sample();
    handle_events(&mut state, true, &key(KeyCode::Right));
    state.text.select_all();
    handle_events(&mut state, true, &typed('7'));
    assert_eq!(state.edit_text(), "7");

    let r = handle_events(&mut state, false, &key(KeyCode::Tab));
    assert_eq!(r, SpinboxOutcome::Value(ChangeSource::Commit));
    assert!(!state.is_editing());
    assert_eq!(state.value(), Some(7.0));
    assert_eq!(state.format_value(), "7.00");
}

#[test]
fn test_no_value_for_noop_commit() {
    let mut state = sample();
    handle_events(&mut state, true, &key(KeyCode::Right));
    let r = handle_events(&mut state, false, &key(KeyCode::Tab));
    // repaint yes, change notification no.
    assert_eq!(r, SpinboxOutcome::Changed);
    assert_eq!(state.value(), Some(4.0));
}

#[test]
fn test_filter_while_typing() {
    let mut state = sample();
    handle_events(&mut state, true, &key(KeyCode::Right));
    for c in "xyz".chars() {
        handle_events(&mut state, true, &typed(c));
    }
    // nothing of it sticks
    assert_eq!(state.edit_text(), "4.00");
}

#[test]
fn test_revert_on_blur() {
    let mut state = sample();
    handle_events(&mut state, true, &key(KeyCode::Right));
    state.text.select_all();
    // a lone sign passes the filter but doesn't parse
    handle_events(&mut state, true, &typed('-'));
    assert_eq!(state.edit_text(), "-");
    assert!(state.invalid());

    let r = handle_events(&mut state, false, &key(KeyCode::Tab));
    assert_eq!(r, SpinboxOutcome::Changed);
    assert_eq!(state.value(), Some(4.0));
    assert_eq!(state.format_value(), "4.00");
    assert!(!state.invalid());
}

#[test]
fn test_empty_clears() {
    let mut state = sample();
    handle_events(&mut state, true, &key(KeyCode::Right));
    state.text.select_all();
    handle_events(&mut state, true, &key(KeyCode::Backspace));
    assert_eq!(state.edit_text(), "");

    let r = handle_events(&mut state, false, &key(KeyCode::Tab));
    assert_eq!(r, SpinboxOutcome::Value(ChangeSource::Commit));
    assert_eq!(state.value(), None);
    assert_eq!(state.format_value(), "");
}

#[test]
fn test_increment() {
    let mut state = sample();
    assert!(state.increment());
    assert_eq!(state.value(), Some(6.0));
    assert_eq!(state.format_value(), "6.00");
}

#[test]
fn test_step_at_bounds() {
    let mut state = sample();
    state.set_value(10.0);
    assert!(!state.can_increment());
    assert!(!state.increment());
    assert_eq!(state.value(), Some(10.0));
    assert!(state.can_decrement());

    state.set_value(0.0);
    assert!(!state.can_decrement());
    assert!(!state.decrement());
    assert_eq!(state.value(), Some(0.0));
    assert!(state.can_increment());
}

#[test]
fn test_up_down_keys() {
    let mut state = sample();
    handle_events(&mut state, true, &key(KeyCode::Right));

    let r = handle_events(&mut state, true, &key(KeyCode::Up));
    assert_eq!(r, SpinboxOutcome::Value(ChangeSource::Increment));
    assert_eq!(state.value(), Some(6.0));
    assert_eq!(state.edit_text(), "6.00");

    let r = handle_events(&mut state, true, &key(KeyCode::Down));
    assert_eq!(r, SpinboxOutcome::Value(ChangeSource::Decrement));
    assert_eq!(state.value(), Some(4.0));
}

#[test]
fn test_up_key_at_max() {
    let mut state = sample();
    state.set_value(10.0);
    handle_events(&mut state, true, &key(KeyCode::Right));
    let r = handle_events(&mut state, true, &key(KeyCode::Up));
    assert_eq!(r, SpinboxOutcome::Unchanged);
    assert_eq!(state.value(), Some(10.0));
}

#[test]
fn test_enter_commits() {
    let mut state = sample();
    handle_events(&mut state, true, &key(KeyCode::Right));
    state.text.select_all();
    handle_events(&mut state, true, &typed('8'));

    let r = handle_events(&mut state, true, &key(KeyCode::Enter));
    assert_eq!(r, SpinboxOutcome::Value(ChangeSource::Commit));
    assert_eq!(state.value(), Some(8.0));
    // stays in editing, re-seeded
    assert!(state.is_editing());
    assert_eq!(state.edit_text(), "8.00");

    // same value again: no second notification
    let r = handle_events(&mut state, true, &key(KeyCode::Enter));
    assert_eq!(r, SpinboxOutcome::Unchanged);
}

#[test]
fn test_step_from_pending_text() {
    let mut state = sample();
    handle_events(&mut state, true, &key(KeyCode::Right));
    state.text.select_all();
    handle_events(&mut state, true, &typed('7'));

    let r = handle_events(&mut state, true, &key(KeyCode::Up));
    assert_eq!(r, SpinboxOutcome::Value(ChangeSource::Increment));
    assert_eq!(state.value(), Some(9.0));
    assert_eq!(state.edit_text(), "9.00");
}

#[test]
fn test_out_of_range_commit_flags() {
    let mut state = sample();
    handle_events(&mut state, true, &key(KeyCode::Right));
    state.text.select_all();
    handle_events(&mut state, true, &typed('9'));
    handle_events(&mut state, true, &typed('9'));
    assert_eq!(state.edit_text(), "99");
    // typing is never blocked, only flagged
    assert!(state.invalid());

    let r = handle_events(&mut state, false, &key(KeyCode::Tab));
    assert_eq!(r, SpinboxOutcome::Value(ChangeSource::Commit));
    // committed as is, still flagged
    assert_eq!(state.value(), Some(99.0));
    assert!(state.invalid());
}

#[test]
fn test_render_sides() {
    let mut state = sample();
    state.set_value(6.0);
    let mut buf = Buffer::empty(Rect::new(0, 0, 14, 1));
    Spinbox::new().render(Rect::new(0, 0, 14, 1), &mut buf, &mut state);

    assert_eq!(state.area, Rect::new(0, 0, 14, 1));
    assert_eq!(state.dec_area, Rect::new(0, 0, 3, 1));
    assert_eq!(state.inc_area, Rect::new(11, 0, 3, 1));
    assert_eq!(state.text_area, Rect::new(3, 0, 8, 1));

    let line = buf_line(&buf, 0);
    assert!(line.contains("6.00"));
    assert!(line.contains('-'));
    assert!(line.contains('+'));
}

#[test]
fn test_render_stacked() {
    let mut state = sample();
    let mut buf = Buffer::empty(Rect::new(0, 0, 14, 1));
    Spinbox::new()
        .controls(SpinControls::Stacked)
        .render(Rect::new(0, 0, 14, 1), &mut buf, &mut state);

    assert_eq!(state.dec_area, Rect::new(13, 0, 1, 1));
    assert_eq!(state.inc_area, Rect::new(12, 0, 1, 1));
    assert_eq!(state.text_area, Rect::new(0, 0, 12, 1));

    let line = buf_line(&buf, 0);
    assert!(line.contains("4.00"));
    assert!(line.contains('\u{25B2}'));
    assert!(line.contains('\u{25BC}'));
}

#[test]
fn test_render_placeholder() {
    let mut state = SpinboxState::new();
    let mut buf = Buffer::empty(Rect::new(0, 0, 14, 1));
    Spinbox::new()
        .controls(SpinControls::None)
        .placeholder("a number")
        .render(Rect::new(0, 0, 14, 1), &mut buf, &mut state);

    let line = buf_line(&buf, 0);
    assert!(line.contains("a number"));
}

#[test]
fn test_mouse_controls() {
    let mut state = sample();
    let mut buf = Buffer::empty(Rect::new(0, 0, 14, 1));
    Spinbox::new().render(Rect::new(0, 0, 14, 1), &mut buf, &mut state);

    let r = handle_events(
        &mut state,
        false,
        &mouse(MouseEventKind::Down(MouseButton::Left), 12, 0),
    );
    assert_eq!(r, SpinboxOutcome::Changed);
    assert!(state.inc_armed);

    let r = handle_events(
        &mut state,
        false,
        &mouse(MouseEventKind::Up(MouseButton::Left), 12, 0),
    );
    assert_eq!(r, SpinboxOutcome::Value(ChangeSource::Increment));
    assert!(!state.inc_armed);
    assert_eq!(state.value(), Some(6.0));

    // release outside just disarms
    handle_events(
        &mut state,
        false,
        &mouse(MouseEventKind::Down(MouseButton::Left), 1, 0),
    );
    assert!(state.dec_armed);
    let r = handle_events(
        &mut state,
        false,
        &mouse(MouseEventKind::Up(MouseButton::Left), 7, 0),
    );
    assert_eq!(r, SpinboxOutcome::Changed);
    assert_eq!(state.value(), Some(6.0));
}

#[test]
fn test_mouse_at_bound() {
    let mut state = sample();
    state.set_value(10.0);
    let mut buf = Buffer::empty(Rect::new(0, 0, 14, 1));
    Spinbox::new().render(Rect::new(0, 0, 14, 1), &mut buf, &mut state);

    handle_events(
        &mut state,
        false,
        &mouse(MouseEventKind::Down(MouseButton::Left), 12, 0),
    );
    let r = handle_events(
        &mut state,
        false,
        &mouse(MouseEventKind::Up(MouseButton::Left), 12, 0),
    );
    // no step over the bound
    assert_eq!(r, SpinboxOutcome::Changed);
    assert_eq!(state.value(), Some(10.0));
}

#[test]
fn test_scroll_wheel() {
    let mut state = sample();
    let mut buf = Buffer::empty(Rect::new(0, 0, 14, 1));
    Spinbox::new().render(Rect::new(0, 0, 14, 1), &mut buf, &mut state);

    let r = handle_events(&mut state, false, &mouse(MouseEventKind::ScrollUp, 6, 0));
    assert_eq!(r, SpinboxOutcome::Value(ChangeSource::Increment));
    assert_eq!(state.value(), Some(6.0));

    let r = handle_events(&mut state, false, &mouse(MouseEventKind::ScrollDown, 6, 0));
    assert_eq!(r, SpinboxOutcome::Value(ChangeSource::Decrement));
    assert_eq!(state.value(), Some(4.0));
}

#[test]
fn test_disabled() {
    let mut state = sample();
    let mut buf = Buffer::empty(Rect::new(0, 0, 14, 1));
    Spinbox::new()
        .disabled(true)
        .render(Rect::new(0, 0, 14, 1), &mut buf, &mut state);
    assert!(state.disabled);

    let r = handle_events(&mut state, true, &key(KeyCode::Up));
    assert_eq!(r, SpinboxOutcome::Continue);
    assert_eq!(state.value(), Some(4.0));
}

#[test]
fn test_readonly() {
    let mut state = sample();
    let mut buf = Buffer::empty(Rect::new(0, 0, 14, 1));
    Spinbox::new()
        .readonly(true)
        .render(Rect::new(0, 0, 14, 1), &mut buf, &mut state);
    assert!(state.readonly);

    handle_events(&mut state, true, &key(KeyCode::Right));
    let r = handle_events(&mut state, true, &key(KeyCode::Up));
    assert_eq!(r, SpinboxOutcome::Unchanged);
    assert_eq!(state.value(), Some(4.0));

    handle_events(&mut state, true, &typed('9'));
    assert_eq!(state.edit_text(), "4.00");
}

#[test]
fn test_conformance() {
    let widget = Spinbox::default();
    let widget = widget.clone();
    let _ = format!("{:?}", widget);

    let mut state = SpinboxState::default();
    let mut buf = Buffer::default();
    widget.render(Rect::new(0, 0, 0, 0), &mut buf, &mut state);
    assert_eq!(state.area, Rect::new(0, 0, 0, 0));

    let mut state = SpinboxState::default();
    let mut buf = Buffer::empty(Rect::new(5, 5, 15, 15));
    Spinbox::default().render(Rect::new(5, 5, 15, 15), &mut buf, &mut state);
    assert_eq!(state.area, Rect::new(5, 5, 15, 15));
}
