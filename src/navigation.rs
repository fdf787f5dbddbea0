//! Displayed-period and selection state, with pure transition functions.

use log::debug;

use crate::error::DateError;
use crate::types::{CalendarDate, PickerSettings, YEAR_MENU_RADIUS, YearMonth};

/// The displayed year-month and selected date owned by one picker
/// instance.
///
/// Transitions return a new state instead of mutating shared fields, so a
/// picker holds exactly one current value and rebuilds its grid from it.
/// Navigation is never blocked by a veto policy; browsing a month that
/// contains only vetoed dates is always permitted. Only [`select`] checks
/// the policy.
///
/// [`select`]: NavigationState::select
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    displayed: YearMonth,
    selected: Option<CalendarDate>,
}

/// Outcome of a selection attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Selection {
    /// The selection was applied; this is the resulting state.
    Applied(NavigationState),
    /// The date was vetoed; the previous state stands.
    Rejected,
}

impl NavigationState {
    /// Open on today's month with nothing selected.
    pub fn new(settings: &PickerSettings) -> Self {
        Self::at(settings.today.year_month())
    }

    /// Open on a specific month with nothing selected.
    pub fn at(displayed: YearMonth) -> Self {
        NavigationState {
            displayed,
            selected: None,
        }
    }

    pub fn displayed(self) -> YearMonth {
        self.displayed
    }

    pub fn selected(self) -> Option<CalendarDate> {
        self.selected
    }

    pub fn next_month(self) -> Self {
        NavigationState {
            displayed: self.displayed.plus_months(1),
            ..self
        }
    }

    pub fn previous_month(self) -> Self {
        NavigationState {
            displayed: self.displayed.minus_months(1),
            ..self
        }
    }

    pub fn next_year(self) -> Self {
        NavigationState {
            displayed: self.displayed.plus_years(1),
            ..self
        }
    }

    pub fn previous_year(self) -> Self {
        NavigationState {
            displayed: self.displayed.minus_years(1),
            ..self
        }
    }

    /// Keep the year, show another month.
    pub fn jump_to_month(self, month: u32) -> Result<Self, DateError> {
        Ok(NavigationState {
            displayed: self.displayed.with_month(month)?,
            ..self
        })
    }

    /// Keep the month, show another year.
    pub fn jump_to_year(self, year: i32) -> Self {
        NavigationState {
            displayed: self.displayed.with_year(year),
            ..self
        }
    }

    /// Apply a selection. A vetoed date is rejected and nothing changes.
    /// A non-vetoed date becomes selected and the displayed month follows
    /// it. Selecting `None` clears the selection and returns the view to
    /// today's month.
    pub fn select(self, date: Option<CalendarDate>, settings: &PickerSettings) -> Selection {
        if let Some(date) = date
            && settings.is_vetoed(date)
        {
            debug!("selection of {date} rejected by veto policy");
            return Selection::Rejected;
        }
        let displayed = match date {
            Some(date) => date.year_month(),
            None => settings.today.year_month(),
        };
        Selection::Applied(NavigationState {
            displayed,
            selected: date,
        })
    }

    /// Year choices for the year menu: [`YEAR_MENU_RADIUS`] years either
    /// side of the displayed year. Crosses year zero without special
    /// casing.
    pub fn year_menu(self) -> Vec<i32> {
        let year = self.displayed.year();
        (year - YEAR_MENU_RADIUS..=year + YEAR_MENU_RADIUS).collect()
    }
}
