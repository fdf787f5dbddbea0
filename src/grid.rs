//! Grid construction: the 42-cell month snapshot a renderer consumes.

use log::debug;

use crate::calendar::weekday_order;
use crate::types::{
    CELLS_PER_MONTH, CalendarDate, CalendarGrid, DAYS_PER_WEEK, GridCell, PickerSettings,
    YearMonth,
};

impl CalendarGrid {
    /// Build the snapshot for one displayed month.
    ///
    /// Cells run row-major through six weeks: blank lead-in cells up to the
    /// column holding day 1, then one cell per day of the month, then blank
    /// trail-out cells padding to 42. The worst case fits: a 31-day month
    /// starting on the last column needs 6 + 31 = 37 cells.
    ///
    /// Pure function of its inputs; building twice from equivalent values
    /// yields equal grids.
    pub fn build(
        settings: &PickerSettings,
        year_month: YearMonth,
        selected: Option<CalendarDate>,
    ) -> CalendarGrid {
        let last_day = year_month.days_in_month();
        let first_weekday = year_month.first_day().weekday();
        let order = weekday_order(settings.first_day_of_week);

        // Lead-in length: column distance from the week start to day 1.
        let offset = (first_weekday.num_days_from_monday() + 7
            - settings.first_day_of_week.num_days_from_monday()) as usize
            % DAYS_PER_WEEK;

        let mut cells = Vec::with_capacity(CELLS_PER_MONTH);
        for _ in 0..offset {
            cells.push(GridCell::blank());
        }
        for day in 1..=last_day {
            let date = CalendarDate::from_ym(year_month, day);
            let is_vetoed = settings.is_vetoed(date);
            // Veto wins over highlight.
            let highlight_text = if is_vetoed {
                None
            } else {
                settings.highlight_text(date)
            };
            cells.push(GridCell {
                day_of_month: Some(day),
                is_selected: selected == Some(date),
                is_vetoed,
                highlight_text,
                is_today: date == settings.today,
            });
        }
        while cells.len() < CELLS_PER_MONTH {
            cells.push(GridCell::blank());
        }

        let weekday_labels = order.map(|weekday| settings.labels.weekday_abbrev(weekday));
        let header = format!(
            "{} {}",
            settings.labels.month_name(year_month.month0()),
            year_month.year()
        );

        debug!("built grid for {year_month}: {last_day} days, lead-in {offset}");

        CalendarGrid {
            year_month,
            header,
            weekday_labels,
            cells,
        }
    }
}

/// State of the today and clear affordances below the grid.
///
/// The rendering layer formats these raw values into localized label text;
/// the engine never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterAffordances {
    /// The current calendar date at evaluation time.
    pub today: CalendarDate,
    /// True when the veto policy rejects today. The affordance is shown
    /// disabled but stays visible.
    pub today_vetoed: bool,
    /// Clearing the selection is always permitted.
    pub clear_enabled: bool,
}

impl FooterAffordances {
    pub fn resolve(settings: &PickerSettings) -> Self {
        FooterAffordances {
            today: settings.today,
            today_vetoed: settings.is_vetoed(settings.today),
            clear_enabled: true,
        }
    }
}
