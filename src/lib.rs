#![doc = include_str!("../readme.md")]

use crate::_private::NonExhaustive;
use ratatui::style::Style;
use ratatui::widgets::Block;

pub mod number;
pub mod range;
pub mod spinbox;

mod util;

pub use rat_text::HasScreenCursor;

pub mod event {
    //!
    //! Event-handler traits and Keybindings.
    //!
    pub use rat_event::*;
    pub use rat_text::event::{ReadOnly, TextOutcome};

    /// Where a value change originated.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    pub enum ChangeSource {
        /// Increment control, Up key or scroll-wheel.
        Increment,
        /// Decrement control, Down key or scroll-wheel.
        Decrement,
        /// Edit text committed on focus-lost or Enter.
        Commit,
    }

    /// Result of event handling.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    pub enum SpinboxOutcome {
        /// The given event has not been used at all.
        Continue,
        /// The event has been recognized, but the result was nil.
        /// Further processing for this event may stop.
        Unchanged,
        /// The event has been recognized and there is some change
        /// due to it.
        /// Further processing for this event may stop.
        /// Rendering the ui is advised.
        Changed,
        /// The edit text has changed, the value has not been
        /// committed yet.
        TextChanged,
        /// The value has changed.
        Value(ChangeSource),
    }

    impl ConsumedEvent for SpinboxOutcome {
        fn is_consumed(&self) -> bool {
            *self != SpinboxOutcome::Continue
        }
    }

    // Useful for converting most navigation/edit results.
    impl From<bool> for SpinboxOutcome {
        fn from(value: bool) -> Self {
            if value {
                SpinboxOutcome::Changed
            } else {
                SpinboxOutcome::Unchanged
            }
        }
    }

    impl From<Outcome> for SpinboxOutcome {
        fn from(value: Outcome) -> Self {
            match value {
                Outcome::Continue => SpinboxOutcome::Continue,
                Outcome::Unchanged => SpinboxOutcome::Unchanged,
                Outcome::Changed => SpinboxOutcome::Changed,
            }
        }
    }

    impl From<SpinboxOutcome> for Outcome {
        fn from(value: SpinboxOutcome) -> Self {
            match value {
                SpinboxOutcome::Continue => Outcome::Continue,
                SpinboxOutcome::Unchanged => Outcome::Unchanged,
                SpinboxOutcome::Changed => Outcome::Changed,
                SpinboxOutcome::TextChanged => Outcome::Changed,
                SpinboxOutcome::Value(_) => Outcome::Changed,
            }
        }
    }

    impl From<TextOutcome> for SpinboxOutcome {
        fn from(value: TextOutcome) -> Self {
            match value {
                TextOutcome::Continue => SpinboxOutcome::Continue,
                TextOutcome::Unchanged => SpinboxOutcome::Unchanged,
                TextOutcome::Changed => SpinboxOutcome::Changed,
                TextOutcome::TextChanged => SpinboxOutcome::TextChanged,
            }
        }
    }
}

/// Placement of the spin controls.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SpinControls {
    /// Decrement left of the field, increment right of it.
    #[default]
    Sides,
    /// Both controls at the right edge. Rendered as a vertical pair
    /// if the widget is high enough, side by side otherwise.
    Stacked,
    /// No controls. Keyboard and scroll-wheel still step.
    None,
}

/// Combined style for the widget.
#[derive(Debug, Clone)]
pub struct SpinboxStyle {
    /// Base style.
    pub style: Style,
    /// Style when focused.
    pub focus: Option<Style>,
    /// Style for the text selection.
    pub select: Option<Style>,
    /// Style for the invalid indicator.
    pub invalid: Option<Style>,
    /// Style for the spin controls.
    pub button: Option<Style>,
    /// Style for a pressed spin control.
    pub armed: Option<Style>,
    /// Style for a spin control that can't step any further.
    pub inert: Option<Style>,
    /// Control marks for [SpinControls::Sides]. (decrement, increment)
    pub sides_marks: Option<(&'static str, &'static str)>,
    /// Control marks for [SpinControls::Stacked]. (increment, decrement)
    pub stacked_marks: Option<(&'static str, &'static str)>,
    /// Border
    pub block: Option<Block<'static>>,

    pub non_exhaustive: NonExhaustive,
}

impl Default for SpinboxStyle {
    fn default() -> Self {
        Self {
            style: Default::default(),
            focus: None,
            select: None,
            invalid: None,
            button: None,
            armed: None,
            inert: None,
            sides_marks: None,
            stacked_marks: None,
            block: None,
            non_exhaustive: NonExhaustive,
        }
    }
}

mod _private {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct NonExhaustive;
}
