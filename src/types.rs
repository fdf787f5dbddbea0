//! Core value types for the calendar grid engine.

use std::fmt;

use chrono::Datelike;
pub use chrono::Weekday;

use crate::error::DateError;
use crate::labels::{LabelProvider, default_labels};
use crate::policy::{HighlightPolicy, VetoPolicy};

/// A year and month pair in the proleptic Gregorian calendar.
///
/// Negative and zero years are valid; leap-year rules apply uniformly on
/// both sides of the epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Create a year-month, failing on a month outside 1-12.
    pub fn new(year: i32, month: u32) -> Result<Self, DateError> {
        if !(1..=12).contains(&month) {
            return Err(DateError::InvalidMonth(month));
        }
        Ok(YearMonth { year, month })
    }

    /// Month already known to be in 1-12.
    pub(crate) fn from_parts(year: i32, month: u32) -> Self {
        YearMonth { year, month }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    /// Zero-based month index, as label lookups expect (0 = January).
    pub fn month0(self) -> usize {
        (self.month - 1) as usize
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// A concrete day in the proleptic Gregorian calendar.
///
/// Construction validates the day against the month length, so a value of
/// this type always names a real date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    /// Create a date, failing on an out-of-range month or a day the month
    /// does not have (e.g. February 31st).
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        let year_month = YearMonth::new(year, month)?;
        if day == 0 || day > year_month.days_in_month() {
            return Err(DateError::InvalidDate { year, month, day });
        }
        Ok(CalendarDate { year, month, day })
    }

    /// Day already known to exist in the month.
    pub(crate) fn from_ym(year_month: YearMonth, day: u32) -> Self {
        CalendarDate {
            year: year_month.year,
            month: year_month.month,
            day,
        }
    }

    /// The current calendar date, respecting the DATEPICKER_TEST_TODAY
    /// environment variable (`%Y-%m-%d`) for testing.
    pub fn today() -> Self {
        if let Ok(test_today) = std::env::var("DATEPICKER_TEST_TODAY")
            && let Ok(date) = chrono::NaiveDate::parse_from_str(&test_today, "%Y-%m-%d")
        {
            return CalendarDate {
                year: date.year(),
                month: date.month(),
                day: date.day(),
            };
        }
        let now = chrono::Local::now().date_naive();
        CalendarDate {
            year: now.year(),
            month: now.month(),
            day: now.day(),
        }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    pub fn day(self) -> u32 {
        self.day
    }

    /// The month this date falls in.
    pub fn year_month(self) -> YearMonth {
        YearMonth {
            year: self.year,
            month: self.month,
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// One of the 42 grid positions, row-major over 6 rows of 7 columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    /// Day number within the displayed month; `None` for the blank filler
    /// cells before the month starts and after it ends.
    pub day_of_month: Option<u32>,
    /// True when the selected date falls on this cell.
    pub is_selected: bool,
    /// True when the veto policy rejects this date; rendered disabled.
    pub is_vetoed: bool,
    /// Highlight annotation. `None` = not highlighted, `Some("")` =
    /// highlighted without tooltip, otherwise the tooltip text. Never set
    /// on a vetoed cell: veto wins over highlight.
    pub highlight_text: Option<String>,
    /// True when this cell is the current calendar date.
    pub is_today: bool,
}

impl GridCell {
    pub(crate) fn blank() -> Self {
        GridCell {
            day_of_month: None,
            is_selected: false,
            is_vetoed: false,
            highlight_text: None,
            is_today: false,
        }
    }

    /// True for lead-in and trail-out filler cells.
    pub fn is_blank(&self) -> bool {
        self.day_of_month.is_none()
    }
}

/// Immutable snapshot of one displayed month, rebuilt in full on every
/// navigation or selection change. Equivalent inputs always yield an equal
/// grid, so a renderer may diff consecutive snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    /// The displayed month.
    pub year_month: YearMonth,
    /// Localized "month year" header text.
    pub header: String,
    /// Weekday column labels, ordered to match the configured week start.
    pub weekday_labels: [String; 7],
    /// Exactly [`CELLS_PER_MONTH`] cells, row-major.
    pub cells: Vec<GridCell>,
}

impl CalendarGrid {
    /// The six rows of seven cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }
}

/// Per-picker configuration supplied by the embedding widget.
pub struct PickerSettings {
    /// First day of the week; determines grid column ordering.
    pub first_day_of_week: Weekday,
    /// Today's date, used for the today marker and the today affordance.
    pub today: CalendarDate,
    /// Rule making specific dates unselectable, if any.
    pub veto_policy: Option<Box<dyn VetoPolicy>>,
    /// Rule marking specific dates for emphasis, if any.
    pub highlight_policy: Option<Box<dyn HighlightPolicy>>,
    /// Source of localized month names and weekday abbreviations.
    pub labels: Box<dyn LabelProvider>,
}

impl PickerSettings {
    /// Monday week start, system today, no policies, default labels.
    pub fn new() -> Self {
        PickerSettings {
            first_day_of_week: Weekday::Mon,
            today: CalendarDate::today(),
            veto_policy: None,
            highlight_policy: None,
            labels: default_labels(),
        }
    }
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self::new()
    }
}

// Constants for grid construction
pub const CELLS_PER_MONTH: usize = 42; // 6 weeks × 7 days
pub const DAYS_PER_WEEK: usize = 7;

// Years offered either side of the displayed year in the year menu
pub const YEAR_MENU_RADIUS: i32 = 11;
