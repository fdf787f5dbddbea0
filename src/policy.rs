//! Capability interfaces consulted per date: veto and highlight.
//!
//! Both are supplied externally per picker instance and evaluated
//! synchronously, up to once per grid cell plus once for the today
//! affordance on every rebuild. Implementations are expected to be fast
//! and side-effect free.

use crate::types::{CalendarDate, PickerSettings};

/// Rule making specific dates unselectable.
///
/// A vetoed date cannot become selected and is rendered disabled.
pub trait VetoPolicy {
    fn is_vetoed(&self, date: CalendarDate) -> bool;
}

/// Rule marking specific dates for visual emphasis.
///
/// Returning `Some("")` highlights without tooltip text; any other
/// `Some(text)` highlights with `text` as the tooltip. Veto takes
/// precedence in the grid: a vetoed date is never shown as highlighted.
pub trait HighlightPolicy {
    fn highlight_text(&self, date: CalendarDate) -> Option<String>;
}

impl<F> VetoPolicy for F
where
    F: Fn(CalendarDate) -> bool,
{
    fn is_vetoed(&self, date: CalendarDate) -> bool {
        self(date)
    }
}

impl<F> HighlightPolicy for F
where
    F: Fn(CalendarDate) -> Option<String>,
{
    fn highlight_text(&self, date: CalendarDate) -> Option<String> {
        self(date)
    }
}

impl PickerSettings {
    /// True if the active veto policy rejects `date`. With no policy
    /// configured, no date is vetoed.
    pub fn is_vetoed(&self, date: CalendarDate) -> bool {
        self.veto_policy.as_deref().is_some_and(|p| p.is_vetoed(date))
    }

    /// Raw highlight lookup under the active policy. With no policy
    /// configured, no date is highlighted. Callers that render cells apply
    /// veto precedence on top of this.
    pub fn highlight_text(&self, date: CalendarDate) -> Option<String> {
        self.highlight_policy
            .as_deref()
            .and_then(|p| p.highlight_text(date))
    }
}
