//! Error taxonomy for malformed calendar inputs.

/// Invalid input to a date constructor.
///
/// Both variants indicate a programming error in the caller and surface
/// immediately; no partial value is ever produced. A selection attempt on a
/// vetoed date is not an error and is reported through
/// [`Selection`](crate::navigation::Selection) instead.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateError {
    /// Month outside 1-12.
    #[error("month {0} is out of range 1-12")]
    InvalidMonth(u32),
    /// Day that does not exist in the given month.
    #[error("no day {day} in {year:04}-{month:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
}
