//!
//! Number input widget.
//!
//! An editable text field with increment/decrement controls.
//!
//! While the widget has the focus it shows the plain edit text and
//! filters out everything that can't occur in a numeric literal.
//! The text is converted back to a value when the focus is lost or
//! Enter is pressed. Without focus it shows the formatted value.
//!
//! Event handling by calling the freestanding fn [handle_events].
//! There's [handle_mouse_events] if you want to override the default
//! key bindings but keep the mouse behaviour.
//!
//! The commit runs when the widget sees the first event after the
//! focus went away. Feed it every event, even ones that look like
//! they concern some other widget.
//!

use crate::_private::NonExhaustive;
use crate::event::{ChangeSource, SpinboxOutcome};
use crate::number;
use crate::range::SpinRange;
use crate::util::revert_style;
use crate::{SpinControls, SpinboxStyle};
#[allow(unused_imports)]
use log::debug;
use rat_event::{ct_event, ConsumedEvent, HandleEvent, MouseOnly, Regular};
use rat_focus::{FocusBuilder, FocusFlag, HasFocus, Navigation};
use rat_reloc::{relocate_area, RelocatableState};
use rat_text::event::ReadOnly;
use rat_text::text_input::{TextInput, TextInputState};
use rat_text::{HasScreenCursor, TextStyle};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::BlockExt;
use ratatui::style::{Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::{Block, StatefulWidget, Widget};
use std::borrow::Cow;
use std::cmp::{max, min};
use std::fmt::{Debug, Formatter};
use unicode_width::UnicodeWidthStr;

/// Number input widget.
///
/// # Stateful
/// This widget implements [`StatefulWidget`], you can use it with
/// [`SpinboxState`] to handle common actions.
#[derive(Clone)]
pub struct Spinbox<'a> {
    text: TextInput<'a>,

    style: Style,
    button_style: Option<Style>,
    armed_style: Option<Style>,
    inert_style: Option<Style>,
    invalid_style: Option<Style>,
    block: Option<Block<'a>>,

    controls: SpinControls,
    sides_marks: (&'a str, &'a str),
    stacked_marks: (&'a str, &'a str),

    align: Alignment,
    placeholder: Option<Cow<'a, str>>,
    format: Option<&'a dyn Fn(f64) -> String>,

    range: Option<SpinRange>,
    step: Option<f64>,
    digits: Option<u8>,

    disabled: bool,
    readonly: bool,
}

/// State & event handling.
#[derive(Debug)]
pub struct SpinboxState {
    /// Total area.
    /// __read only__. renewed for each render.
    pub area: Rect,
    /// Area inside the block.
    /// __read only__. renewed for each render.
    pub inner: Rect,
    /// Area of the text field.
    /// __read only__. renewed for each render.
    pub text_area: Rect,
    /// Area of the decrement control.
    /// __read only__. renewed for each render.
    pub dec_area: Rect,
    /// Area of the increment control.
    /// __read only__. renewed for each render.
    pub inc_area: Rect,

    /// Inner editor. Holds the edit text while the spinbox
    /// has the focus.
    pub text: TextInputState,

    /// Value.
    /// __read only__ use [set_value](SpinboxState::set_value)
    pub value: Option<f64>,
    /// Bounds, step width and decimal digits.
    pub range: SpinRange,

    /// In editing state.
    /// __read only__ synced from the focus flag.
    pub editing: bool,
    /// Decrement control has been clicked but not released yet.
    /// __used for mouse interaction__
    pub dec_armed: bool,
    /// Increment control has been clicked but not released yet.
    /// __used for mouse interaction__
    pub inc_armed: bool,

    /// Widget is disabled.
    /// __read only__. renewed for each render.
    pub disabled: bool,
    /// Widget is readonly.
    /// __read only__. renewed for each render.
    pub readonly: bool,

    pub non_exhaustive: NonExhaustive,
}

impl Default for Spinbox<'_> {
    fn default() -> Self {
        Self {
            text: Default::default(),
            style: Default::default(),
            button_style: None,
            armed_style: None,
            inert_style: None,
            invalid_style: None,
            block: None,
            controls: Default::default(),
            sides_marks: ("-", "+"),
            stacked_marks: ("\u{25B2}", "\u{25BC}"),
            align: Alignment::Left,
            placeholder: None,
            format: None,
            range: None,
            step: None,
            digits: None,
            disabled: false,
            readonly: false,
        }
    }
}

impl Debug for Spinbox<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Spinbox")
            .field("text", &self.text)
            .field("style", &self.style)
            .field("button_style", &self.button_style)
            .field("armed_style", &self.armed_style)
            .field("inert_style", &self.inert_style)
            .field("invalid_style", &self.invalid_style)
            .field("block", &self.block)
            .field("controls", &self.controls)
            .field("sides_marks", &self.sides_marks)
            .field("stacked_marks", &self.stacked_marks)
            .field("align", &self.align)
            .field("placeholder", &self.placeholder)
            .field("format", &self.format.map(|_| ".."))
            .field("range", &self.range)
            .field("step", &self.step)
            .field("digits", &self.digits)
            .field("disabled", &self.disabled)
            .field("readonly", &self.readonly)
            .finish()
    }
}

impl<'a> Spinbox<'a> {
    /// New widget.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the combined style.
    #[inline]
    pub fn styles_opt(self, styles: Option<SpinboxStyle>) -> Self {
        if let Some(styles) = styles {
            self.styles(styles)
        } else {
            self
        }
    }

    /// Set the combined style.
    #[inline]
    pub fn styles(mut self, styles: SpinboxStyle) -> Self {
        self.style = styles.style;
        if styles.button.is_some() {
            self.button_style = styles.button;
        }
        if styles.armed.is_some() {
            self.armed_style = styles.armed;
        }
        if styles.inert.is_some() {
            self.inert_style = styles.inert;
        }
        if styles.invalid.is_some() {
            self.invalid_style = styles.invalid;
        }
        if let Some(marks) = styles.sides_marks {
            self.sides_marks = marks;
        }
        if let Some(marks) = styles.stacked_marks {
            self.stacked_marks = marks;
        }
        self.text = self.text.styles(TextStyle {
            style: styles.style,
            focus: styles.focus,
            select: styles.select,
            invalid: styles.invalid,
            ..Default::default()
        });
        if styles.block.is_some() {
            self.block = styles.block;
        }
        self.block = self.block.map(|v| v.style(self.style));
        self
    }

    /// Base style.
    #[inline]
    pub fn style(mut self, style: impl Into<Style>) -> Self {
        self.style = style.into();
        self.text = self.text.style(self.style);
        self.block = self.block.map(|v| v.style(self.style));
        self
    }

    /// Style when focused.
    #[inline]
    pub fn focus_style(mut self, style: impl Into<Style>) -> Self {
        self.text = self.text.focus_style(style);
        self
    }

    /// Style for the selection.
    #[inline]
    pub fn select_style(mut self, style: impl Into<Style>) -> Self {
        self.text = self.text.select_style(style);
        self
    }

    /// Style for the invalid indicator.
    #[inline]
    pub fn invalid_style(mut self, style: impl Into<Style>) -> Self {
        let style = style.into();
        self.invalid_style = Some(style);
        self.text = self.text.invalid_style(style);
        self
    }

    /// Style for the spin controls.
    #[inline]
    pub fn button_style(mut self, style: impl Into<Style>) -> Self {
        self.button_style = Some(style.into());
        self
    }

    /// Style for a pressed spin control.
    #[inline]
    pub fn armed_style(mut self, style: impl Into<Style>) -> Self {
        self.armed_style = Some(style.into());
        self
    }

    /// Style for a spin control that can't step any further.
    #[inline]
    pub fn inert_style(mut self, style: impl Into<Style>) -> Self {
        self.inert_style = Some(style.into());
        self
    }

    /// Block.
    #[inline]
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self.block = self.block.map(|v| v.style(self.style));
        self
    }

    /// Placement of the spin controls.
    #[inline]
    pub fn controls(mut self, controls: SpinControls) -> Self {
        self.controls = controls;
        self
    }

    /// Control marks for [SpinControls::Sides]. (decrement, increment)
    #[inline]
    pub fn sides_marks(mut self, marks: (&'a str, &'a str)) -> Self {
        self.sides_marks = marks;
        self
    }

    /// Control marks for [SpinControls::Stacked]. (increment, decrement)
    #[inline]
    pub fn stacked_marks(mut self, marks: (&'a str, &'a str)) -> Self {
        self.stacked_marks = marks;
        self
    }

    /// Overrides the range of the state.
    #[inline]
    pub fn range(mut self, range: SpinRange) -> Self {
        self.range = Some(range);
        self
    }

    /// Overrides the step width of the state.
    #[inline]
    pub fn step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    /// Overrides the decimal digits of the state.
    #[inline]
    pub fn digits(mut self, digits: u8) -> Self {
        self.digits = Some(digits);
        self
    }

    /// Alignment for the idle display.
    ///
    /// The text shown while editing is always left aligned.
    #[inline]
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Placeholder text, shown when there is no value and no focus.
    #[inline]
    pub fn placeholder(mut self, placeholder: impl Into<Cow<'a, str>>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Custom display format for the idle display.
    ///
    /// Editing always starts from the value at the configured
    /// precision, not from this text.
    #[inline]
    pub fn format_with(mut self, format: &'a dyn Fn(f64) -> String) -> Self {
        self.format = Some(format);
        self
    }

    /// Inactive widget. Takes no events, renders inert.
    #[inline]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Value can't be changed, but the text can be navigated
    /// and copied.
    #[inline]
    pub fn readonly(mut self, readonly: bool) -> Self {
        self.readonly = readonly;
        self
    }

    /// Inherent width.
    pub fn width(&self) -> u16 {
        let controls = match self.controls {
            SpinControls::Sides => {
                self.sides_marks.0.width() as u16 + self.sides_marks.1.width() as u16 + 4
            }
            SpinControls::Stacked => {
                self.stacked_marks.0.width() as u16 + self.stacked_marks.1.width() as u16
            }
            SpinControls::None => 0,
        };
        controls + crate::util::block_size(&self.block).width
    }

    /// Inherent height.
    pub fn height(&self) -> u16 {
        1 + crate::util::block_size(&self.block).height
    }

    // layout
    fn layout(&self, area: Rect, state: &mut SpinboxState) {
        state.area = area;
        state.inner = self.block.inner_if_some(area);
        state.disabled = self.disabled;
        state.readonly = self.readonly;

        if let Some(range) = self.range {
            state.range = range;
        }
        if let Some(step) = self.step {
            state.range.step = step;
        }
        if let Some(digits) = self.digits {
            state.range.digits = digits;
        }

        let inner = state.inner;
        match self.controls {
            SpinControls::Sides => {
                let dec_w = min(self.sides_marks.0.width() as u16 + 2, inner.width);
                let inc_w = min(
                    self.sides_marks.1.width() as u16 + 2,
                    inner.width.saturating_sub(dec_w),
                );
                state.dec_area = Rect::new(inner.x, inner.y, dec_w, inner.height);
                state.inc_area = Rect::new(
                    inner.right().saturating_sub(inc_w),
                    inner.y,
                    inc_w,
                    inner.height,
                );
                state.text_area = Rect::new(
                    inner.x + dec_w,
                    inner.y,
                    inner.width.saturating_sub(dec_w + inc_w),
                    inner.height,
                );
            }
            SpinControls::Stacked => {
                if inner.height >= 2 {
                    let w = min(
                        max(self.stacked_marks.0.width(), self.stacked_marks.1.width()) as u16,
                        inner.width,
                    );
                    let half = inner.height / 2;
                    state.inc_area =
                        Rect::new(inner.right().saturating_sub(w), inner.y, w, half);
                    state.dec_area = Rect::new(
                        inner.right().saturating_sub(w),
                        inner.y + half,
                        w,
                        inner.height - half,
                    );
                    state.text_area = Rect::new(
                        inner.x,
                        inner.y,
                        inner.width.saturating_sub(w),
                        inner.height,
                    );
                } else {
                    let dec_w = min(self.stacked_marks.1.width() as u16, inner.width);
                    let inc_w = min(
                        self.stacked_marks.0.width() as u16,
                        inner.width.saturating_sub(dec_w),
                    );
                    state.dec_area = Rect::new(
                        inner.right().saturating_sub(dec_w),
                        inner.y,
                        dec_w,
                        inner.height,
                    );
                    state.inc_area = Rect::new(
                        inner.right().saturating_sub(dec_w + inc_w),
                        inner.y,
                        inc_w,
                        inner.height,
                    );
                    state.text_area = Rect::new(
                        inner.x,
                        inner.y,
                        inner.width.saturating_sub(dec_w + inc_w),
                        inner.height,
                    );
                }
            }
            SpinControls::None => {
                state.dec_area = Rect::default();
                state.inc_area = Rect::default();
                state.text_area = inner;
            }
        }
    }
}

impl<'a> StatefulWidget for &Spinbox<'a> {
    type State = SpinboxState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        render_spinbox(self.clone(), area, buf, state);
    }
}

impl StatefulWidget for Spinbox<'_> {
    type State = SpinboxState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        render_spinbox(self, area, buf, state);
    }
}

fn render_spinbox(widget: Spinbox<'_>, area: Rect, buf: &mut Buffer, state: &mut SpinboxState) {
    widget.layout(area, state);

    // the focus may have arrived without an event in between.
    if state.text.focus.get() && !state.editing && !state.disabled {
        state.begin_edit();
    }

    let style = widget.style;

    if let Some(block) = &widget.block {
        block.render(area, buf);
    } else {
        buf.set_style(area, style);
    }

    // spin controls
    let button_style = widget.button_style.unwrap_or(style);
    let armed_style = widget
        .armed_style
        .unwrap_or_else(|| revert_style(button_style));
    let inert_style = widget.inert_style.unwrap_or_else(|| button_style.dim());

    let inert = state.disabled || state.readonly;
    let (dec_mark, inc_mark) = match widget.controls {
        SpinControls::Sides => (widget.sides_marks.0, widget.sides_marks.1),
        SpinControls::Stacked => (widget.stacked_marks.1, widget.stacked_marks.0),
        SpinControls::None => ("", ""),
    };

    let dec_style = if inert || !state.can_decrement() {
        button_style.patch(inert_style)
    } else if state.dec_armed {
        button_style.patch(armed_style)
    } else {
        button_style
    };
    let inc_style = if inert || !state.can_increment() {
        button_style.patch(inert_style)
    } else if state.inc_armed {
        button_style.patch(armed_style)
    } else {
        button_style
    };
    render_mark(dec_mark, dec_style, state.dec_area, buf);
    render_mark(inc_mark, inc_style, state.inc_area, buf);

    // text field
    if state.editing {
        widget.text.render(state.text_area, buf, &mut state.text);
    } else {
        let text_style = if state.disabled {
            style.patch(inert_style)
        } else if state.text.invalid {
            style.patch(widget.invalid_style.unwrap_or_else(|| Style::new().red()))
        } else {
            style
        };
        buf.set_style(state.text_area, text_style);

        let display = match state.value {
            Some(value) => match widget.format {
                Some(format) => format(value),
                None => number::format_fixed(value, state.range.digits),
            },
            None => String::new(),
        };

        if display.is_empty() {
            if let Some(placeholder) = &widget.placeholder {
                Line::from(placeholder.as_ref())
                    .style(text_style.dim())
                    .alignment(widget.align)
                    .render(state.text_area, buf);
            }
        } else {
            Line::from(display)
                .style(text_style)
                .alignment(widget.align)
                .render(state.text_area, buf);
        }
    }
}

fn render_mark(mark: &str, style: Style, area: Rect, buf: &mut Buffer) {
    if area.is_empty() {
        return;
    }
    buf.set_style(area, style);
    let y = area.y + area.height.saturating_sub(1) / 2;
    Line::from(mark)
        .centered()
        .style(style)
        .render(Rect::new(area.x, y, area.width, 1), buf);
}

impl Clone for SpinboxState {
    fn clone(&self) -> Self {
        Self {
            area: self.area,
            inner: self.inner,
            text_area: self.text_area,
            dec_area: self.dec_area,
            inc_area: self.inc_area,
            text: self.text.clone(),
            value: self.value,
            range: self.range,
            editing: self.editing,
            dec_armed: self.dec_armed,
            inc_armed: self.inc_armed,
            disabled: self.disabled,
            readonly: self.readonly,
            non_exhaustive: NonExhaustive,
        }
    }
}

impl Default for SpinboxState {
    fn default() -> Self {
        Self {
            area: Default::default(),
            inner: Default::default(),
            text_area: Default::default(),
            dec_area: Default::default(),
            inc_area: Default::default(),
            text: Default::default(),
            value: None,
            range: Default::default(),
            editing: false,
            dec_armed: false,
            inc_armed: false,
            disabled: false,
            readonly: false,
            non_exhaustive: NonExhaustive,
        }
    }
}

impl HasFocus for SpinboxState {
    fn build(&self, builder: &mut FocusBuilder) {
        builder.leaf_widget(self);
    }

    #[inline]
    fn focus(&self) -> FocusFlag {
        self.text.focus.clone()
    }

    #[inline]
    fn area(&self) -> Rect {
        self.area
    }

    fn navigable(&self) -> Navigation {
        if self.disabled {
            Navigation::None
        } else {
            Navigation::Regular
        }
    }
}

impl HasScreenCursor for SpinboxState {
    /// The current text cursor as an absolute screen position.
    #[inline]
    fn screen_cursor(&self) -> Option<(u16, u16)> {
        if self.editing {
            self.text.screen_cursor()
        } else {
            None
        }
    }
}

impl RelocatableState for SpinboxState {
    fn relocate(&mut self, shift: (i16, i16), clip: Rect) {
        self.area = relocate_area(self.area, shift, clip);
        self.inner = relocate_area(self.inner, shift, clip);
        self.text_area = relocate_area(self.text_area, shift, clip);
        self.dec_area = relocate_area(self.dec_area, shift, clip);
        self.inc_area = relocate_area(self.inc_area, shift, clip);
        self.text.relocate(shift, clip);
    }
}

impl SpinboxState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: &str) -> Self {
        Self {
            text: TextInputState::named(name),
            ..Default::default()
        }
    }

    /// New state with the given range.
    pub fn new_range(range: SpinRange) -> Self {
        Self {
            range,
            ..Default::default()
        }
    }

    /// Current value.
    #[inline]
    pub fn value(&self) -> Option<f64> {
        self.value
    }

    /// Set the value.
    ///
    /// Rounded to the configured digits, but not clamped. A value
    /// outside the bounds shows the invalid indicator. Refreshes the
    /// edit text if the widget is currently being edited.
    pub fn set_value(&mut self, value: impl Into<Option<f64>>) -> bool {
        let old = self.value;
        self.value = value.into().map(|v| self.range.round(v));
        if self.editing {
            self.seed_edit_text();
        }
        self.update_invalid();
        old != self.value
    }

    /// Clear the value.
    #[inline]
    pub fn clear(&mut self) -> bool {
        self.set_value(None)
    }

    /// Bounds, step width and decimal digits.
    #[inline]
    pub fn range(&self) -> SpinRange {
        self.range
    }

    /// Set the bounds, step width and decimal digits.
    ///
    /// Will be overridden when set with the widget.
    #[inline]
    pub fn set_range(&mut self, range: SpinRange) {
        self.range = range;
        self.update_invalid();
    }

    /// Current edit text.
    #[inline]
    pub fn edit_text(&self) -> &str {
        self.text.text()
    }

    /// Shows the invalid indicator?
    ///
    /// Set when the edit text doesn't parse or the value lies
    /// outside the bounds. Purely visual, never blocks typing.
    #[inline]
    pub fn invalid(&self) -> bool {
        self.text.invalid
    }

    /// In editing state?
    #[inline]
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// The formatted value for the idle display.
    ///
    /// Empty for an unset value. A custom format set on the widget
    /// replaces this during rendering.
    pub fn format_value(&self) -> String {
        match self.value {
            Some(value) => number::format_fixed(value, self.range.digits),
            None => String::new(),
        }
    }
}

impl SpinboxState {
    /// Enter the editing state.
    ///
    /// Seeds the editor with the value at the configured precision
    /// and puts the cursor at the end. Called automatically when the
    /// focus arrives.
    pub fn begin_edit(&mut self) {
        self.editing = true;
        self.seed_edit_text();
        self.update_invalid();
    }

    /// Leave the editing state and convert the edit text.
    ///
    /// Empty text clears the value, text that doesn't parse leaves
    /// the previous value untouched. Called automatically when the
    /// focus goes away.
    ///
    /// Returns true if the value changed.
    pub fn commit(&mut self) -> bool {
        let prev = self.value;
        self.value = self.edit_basis().map(|v| self.range.round(v));
        self.editing = false;
        self.update_invalid();
        self.value != prev
    }

    /// One step up. Clamps into the bounds and rounds to the
    /// configured digits. Pending edit text is taken as the basis
    /// for the step.
    ///
    /// Returns true if the value changed.
    pub fn increment(&mut self) -> bool {
        let next = self.range.step_up(self.edit_basis());
        self.apply_step(next)
    }

    /// One step down. Clamps into the bounds and rounds to the
    /// configured digits. Pending edit text is taken as the basis
    /// for the step.
    ///
    /// Returns true if the value changed.
    pub fn decrement(&mut self) -> bool {
        let next = self.range.step_down(self.edit_basis());
        self.apply_step(next)
    }

    /// Would a step up change the value?
    ///
    /// The increment control renders inert while this is false.
    pub fn can_increment(&self) -> bool {
        Some(self.range.step_up(self.edit_basis())) != self.value
    }

    /// Would a step down change the value?
    ///
    /// The decrement control renders inert while this is false.
    pub fn can_decrement(&self) -> bool {
        Some(self.range.step_down(self.edit_basis())) != self.value
    }

    // Value the next step starts from. Pending edit text counts,
    // so stepping mid-edit behaves like commit + step.
    fn edit_basis(&self) -> Option<f64> {
        if self.editing {
            number::parse_commit(
                number::filter_edit_text(self.text.text()).as_ref(),
                self.value,
            )
        } else {
            self.value
        }
    }

    fn apply_step(&mut self, next: f64) -> bool {
        if Some(next) != self.value {
            self.value = Some(next);
            if self.editing {
                self.seed_edit_text();
            }
            self.update_invalid();
            true
        } else {
            false
        }
    }

    fn seed_edit_text(&mut self) {
        match self.value {
            Some(value) => self
                .text
                .set_text(number::format_fixed(value, self.range.digits)),
            None => self.text.set_text(""),
        }
        self.text.move_to_line_end(false);
    }

    // Re-apply the edit filter after a text change.
    // Keeps the cursor position as far as possible.
    fn filter_text(&mut self) {
        let filtered = number::filter_edit_text(self.text.text()).into_owned();
        if filtered != self.text.text() {
            let cursor = self.text.cursor();
            self.text.set_text(filtered);
            let cursor = min(cursor, self.text.len());
            self.text.set_cursor(cursor, false);
        }
    }

    fn update_invalid(&mut self) {
        let invalid = if self.editing {
            let text = self.text.text();
            if text.trim().is_empty() {
                false
            } else {
                match number::parse_commit(text, None) {
                    Some(value) => !self.range.contains(value),
                    None => true,
                }
            }
        } else {
            match self.value {
                Some(value) => !self.range.contains(value),
                None => false,
            }
        };
        self.text.set_invalid(invalid);
    }

    // Keep the editing state in sync with the focus. The focus
    // transfer itself happens outside this widget, the next event
    // sees the changed flag.
    fn sync_edit(&mut self) -> SpinboxOutcome {
        if self.text.focus.get() && !self.editing {
            self.begin_edit();
            SpinboxOutcome::Changed
        } else if !self.text.focus.get() && self.editing {
            if self.commit() {
                SpinboxOutcome::Value(ChangeSource::Commit)
            } else {
                SpinboxOutcome::Changed
            }
        } else {
            SpinboxOutcome::Continue
        }
    }
}

impl HandleEvent<crossterm::event::Event, Regular, SpinboxOutcome> for SpinboxState {
    fn handle(&mut self, event: &crossterm::event::Event, _keymap: Regular) -> SpinboxOutcome {
        if self.disabled {
            return SpinboxOutcome::Continue;
        }

        let sync = self.sync_edit();

        let mut r = if self.is_focused() {
            match event {
                ct_event!(keycode press Up) => {
                    if !self.readonly && self.increment() {
                        SpinboxOutcome::Value(ChangeSource::Increment)
                    } else {
                        SpinboxOutcome::Unchanged
                    }
                }
                ct_event!(keycode press Down) => {
                    if !self.readonly && self.decrement() {
                        SpinboxOutcome::Value(ChangeSource::Decrement)
                    } else {
                        SpinboxOutcome::Unchanged
                    }
                }
                ct_event!(keycode press Enter) => {
                    if self.readonly {
                        SpinboxOutcome::Unchanged
                    } else {
                        let committed = self.commit();
                        self.begin_edit();
                        if committed {
                            SpinboxOutcome::Value(ChangeSource::Commit)
                        } else {
                            SpinboxOutcome::Unchanged
                        }
                    }
                }
                _ => {
                    if self.readonly {
                        self.text.handle(event, ReadOnly).into()
                    } else {
                        let r: SpinboxOutcome = self.text.handle(event, Regular).into();
                        if r == SpinboxOutcome::TextChanged {
                            self.filter_text();
                            self.update_invalid();
                        }
                        r
                    }
                }
            }
        } else {
            SpinboxOutcome::Continue
        };

        if !r.is_consumed() {
            r = HandleEvent::handle(self, event, MouseOnly);
        }

        max(sync, r)
    }
}

impl HandleEvent<crossterm::event::Event, ReadOnly, SpinboxOutcome> for SpinboxState {
    fn handle(&mut self, event: &crossterm::event::Event, _keymap: ReadOnly) -> SpinboxOutcome {
        if self.disabled {
            return SpinboxOutcome::Continue;
        }

        let sync = self.sync_edit();

        let mut r: SpinboxOutcome = if self.is_focused() {
            self.text.handle(event, ReadOnly).into()
        } else {
            SpinboxOutcome::Continue
        };
        if !r.is_consumed() {
            r = self.text.handle(event, MouseOnly).into();
        }

        max(sync, r)
    }
}

impl HandleEvent<crossterm::event::Event, MouseOnly, SpinboxOutcome> for SpinboxState {
    fn handle(&mut self, event: &crossterm::event::Event, _keymap: MouseOnly) -> SpinboxOutcome {
        if self.disabled {
            return SpinboxOutcome::Continue;
        }

        let r = match event {
            ct_event!(mouse down Left for x, y) => {
                if !self.readonly && self.dec_area.contains((*x, *y).into()) {
                    self.dec_armed = true;
                    SpinboxOutcome::Changed
                } else if !self.readonly && self.inc_area.contains((*x, *y).into()) {
                    self.inc_armed = true;
                    SpinboxOutcome::Changed
                } else {
                    SpinboxOutcome::Continue
                }
            }
            ct_event!(mouse up Left for x, y) => {
                if self.inc_armed {
                    self.inc_armed = false;
                    if self.inc_area.contains((*x, *y).into()) && self.increment() {
                        SpinboxOutcome::Value(ChangeSource::Increment)
                    } else {
                        SpinboxOutcome::Changed
                    }
                } else if self.dec_armed {
                    self.dec_armed = false;
                    if self.dec_area.contains((*x, *y).into()) && self.decrement() {
                        SpinboxOutcome::Value(ChangeSource::Decrement)
                    } else {
                        SpinboxOutcome::Changed
                    }
                } else {
                    SpinboxOutcome::Continue
                }
            }
            ct_event!(scroll up for x, y) => {
                if !self.readonly && self.inner.contains((*x, *y).into()) {
                    if self.increment() {
                        SpinboxOutcome::Value(ChangeSource::Increment)
                    } else {
                        SpinboxOutcome::Unchanged
                    }
                } else {
                    SpinboxOutcome::Continue
                }
            }
            ct_event!(scroll down for x, y) => {
                if !self.readonly && self.inner.contains((*x, *y).into()) {
                    if self.decrement() {
                        SpinboxOutcome::Value(ChangeSource::Decrement)
                    } else {
                        SpinboxOutcome::Unchanged
                    }
                } else {
                    SpinboxOutcome::Continue
                }
            }
            _ => SpinboxOutcome::Continue,
        };

        r.or_else(|| self.text.handle(event, MouseOnly).into())
    }
}

/// Handle all events.
/// Text events are only processed if focus is true.
/// Mouse events are processed if they are in range.
pub fn handle_events(
    state: &mut SpinboxState,
    focus: bool,
    event: &crossterm::event::Event,
) -> SpinboxOutcome {
    state.text.focus.set(focus);
    HandleEvent::handle(state, event, Regular)
}

/// Handle only navigation events.
/// Text events are only processed if focus is true.
/// Mouse events are processed if they are in range.
pub fn handle_readonly_events(
    state: &mut SpinboxState,
    focus: bool,
    event: &crossterm::event::Event,
) -> SpinboxOutcome {
    state.text.focus.set(focus);
    state.handle(event, ReadOnly)
}

/// Handle only mouse-events.
pub fn handle_mouse_events(
    state: &mut SpinboxState,
    event: &crossterm::event::Event,
) -> SpinboxOutcome {
    HandleEvent::handle(state, event, MouseOnly)
}
