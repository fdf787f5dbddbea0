//! Date arithmetic for the proleptic Gregorian calendar, using Zeller's
//! algorithm for day-of-week.

use chrono::Weekday;

use crate::error::DateError;
use crate::types::{CalendarDate, DAYS_PER_WEEK, YearMonth};

/// Gregorian leap-year rule: divisible by 4, except centuries unless
/// divisible by 400. Applies uniformly to positive, zero and negative
/// years; there is no special casing at the BC/AD boundary.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

impl YearMonth {
    pub fn days_in_month(self) -> u32 {
        match self.month() {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if is_leap_year(self.year()) => 29,
            _ => 28,
        }
    }

    /// Day 1 of this month.
    pub fn first_day(self) -> CalendarDate {
        CalendarDate::from_ym(self, 1)
    }

    /// The last day of this month.
    pub fn last_day(self) -> CalendarDate {
        CalendarDate::from_ym(self, self.days_in_month())
    }

    /// Step forward by `months`, carrying into the year as needed. Negative
    /// arguments step backward.
    pub fn plus_months(self, months: i64) -> Self {
        let total = self.year() as i64 * 12 + (self.month() as i64 - 1) + months;
        Self::from_parts(total.div_euclid(12) as i32, (total.rem_euclid(12) + 1) as u32)
    }

    pub fn minus_months(self, months: i64) -> Self {
        self.plus_months(-months)
    }

    /// Step forward by `years`, month unchanged.
    pub fn plus_years(self, years: i32) -> Self {
        Self::from_parts(self.year() + years, self.month())
    }

    pub fn minus_years(self, years: i32) -> Self {
        self.plus_years(-years)
    }

    /// Same year, another month.
    pub fn with_month(self, month: u32) -> Result<Self, DateError> {
        Self::new(self.year(), month)
    }

    /// Same month, another year.
    pub fn with_year(self, year: i32) -> Self {
        Self::from_parts(year, self.month())
    }
}

impl CalendarDate {
    /// Day of the week by Zeller's congruence. Euclidean division keeps the
    /// congruence exact for zero and negative years.
    pub fn weekday(self) -> Weekday {
        let (m, y) = if self.month() < 3 {
            (self.month() + 12, self.year() - 1)
        } else {
            (self.month(), self.year())
        };
        let q = self.day() as i32;
        let k = y.rem_euclid(100);
        let j = y.div_euclid(100);

        let h = (q + (13 * (m as i32 + 1)) / 5 + k + k / 4 + j.div_euclid(4) - 2 * j).rem_euclid(7);
        // h: 0=Sat, 1=Sun, 2=Mon, 3=Tue, 4=Wed, 5=Thu, 6=Fri
        match h {
            0 => Weekday::Sat,
            1 => Weekday::Sun,
            2 => Weekday::Mon,
            3 => Weekday::Tue,
            4 => Weekday::Wed,
            5 => Weekday::Thu,
            _ => Weekday::Fri,
        }
    }
}

/// The seven weekdays starting at `first_day_of_week` and wrapping around,
/// e.g. a Wednesday start yields Wed, Thu, Fri, Sat, Sun, Mon, Tue.
pub fn weekday_order(first_day_of_week: Weekday) -> [Weekday; 7] {
    let mut order = [first_day_of_week; DAYS_PER_WEEK];
    for i in 1..DAYS_PER_WEEK {
        order[i] = order[i - 1].succ();
    }
    order
}
