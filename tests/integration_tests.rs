//! Integration tests driving full picker sessions: navigation, selection,
//! and grid rebuilds working together.

use chrono::Weekday;

use datepicker_core::grid::FooterAffordances;
use datepicker_core::labels::EnglishLabels;
use datepicker_core::navigation::{NavigationState, Selection};
use datepicker_core::types::{
    CELLS_PER_MONTH, CalendarDate, CalendarGrid, PickerSettings, YearMonth,
};

fn date(year: i32, month: u32, day: u32) -> CalendarDate {
    CalendarDate::new(year, month, day).unwrap()
}

fn ym(year: i32, month: u32) -> YearMonth {
    YearMonth::new(year, month).unwrap()
}

fn test_settings() -> PickerSettings {
    PickerSettings {
        first_day_of_week: Weekday::Mon,
        today: date(2026, 2, 18),
        veto_policy: None,
        highlight_policy: None,
        labels: Box::new(EnglishLabels),
    }
}

/// Weekends are vetoed, the 14th carries a tooltip.
fn office_settings() -> PickerSettings {
    PickerSettings {
        veto_policy: Some(Box::new(|d: CalendarDate| {
            matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
        })),
        highlight_policy: Some(Box::new(|d: CalendarDate| {
            (d.day() == 14).then(|| "Team day".to_string())
        })),
        ..test_settings()
    }
}

fn rebuild(nav: NavigationState, settings: &PickerSettings) -> CalendarGrid {
    CalendarGrid::build(settings, nav.displayed(), nav.selected())
}

#[test]
fn opening_the_picker_shows_todays_month() {
    let settings = test_settings();
    let nav = NavigationState::new(&settings);
    let grid = rebuild(nav, &settings);

    assert_eq!(grid.year_month, ym(2026, 2));
    assert_eq!(grid.header, "February 2026");
    let today_cell = grid.cells.iter().find(|c| c.is_today).unwrap();
    assert_eq!(today_cell.day_of_month, Some(18));
}

#[test]
fn browse_select_and_return() {
    let settings = test_settings();
    let nav = NavigationState::new(&settings);

    // Browse back three months, then select the 14th of the shown month.
    let nav = nav.previous_month().previous_month().previous_month();
    assert_eq!(nav.displayed(), ym(2025, 11));

    let nav = match nav.select(Some(date(2025, 11, 14)), &settings) {
        Selection::Applied(next) => next,
        Selection::Rejected => panic!("weekday selection should apply"),
    };
    let grid = rebuild(nav, &settings);
    let selected = grid.cells.iter().find(|c| c.is_selected).unwrap();
    assert_eq!(selected.day_of_month, Some(14));

    // Navigating away keeps the selection but shows no selected cell.
    let away = nav.next_year();
    let away_grid = rebuild(away, &settings);
    assert_eq!(away.selected(), Some(date(2025, 11, 14)));
    assert!(away_grid.cells.iter().all(|c| !c.is_selected));

    // Coming back shows it again.
    let back = away.previous_year();
    assert_eq!(rebuild(back, &settings), grid);
}

#[test]
fn vetoed_selection_leaves_everything_unchanged() {
    let settings = office_settings();
    let nav = NavigationState::at(ym(2026, 2));
    let before = rebuild(nav, &settings);

    // 2026-02-21 is a Saturday.
    let outcome = nav.select(Some(date(2026, 2, 21)), &settings);
    assert_eq!(outcome, Selection::Rejected);

    // The picker stays fully usable on the same state.
    assert_eq!(rebuild(nav, &settings), before);
    let nav = nav.next_month();
    assert_eq!(nav.displayed(), ym(2026, 3));
}

#[test]
fn grid_annotations_follow_the_policies() {
    let settings = office_settings();
    let nav = NavigationState::at(ym(2026, 2));
    let grid = rebuild(nav, &settings);

    for cell in &grid.cells {
        let Some(day) = cell.day_of_month else {
            continue;
        };
        let weekend = matches!(
            date(2026, 2, day).weekday(),
            Weekday::Sat | Weekday::Sun
        );
        assert_eq!(cell.is_vetoed, weekend, "day {day}");
        if day == 14 {
            // 2026-02-14 is a Saturday: vetoed, so the highlight is dropped.
            assert_eq!(cell.highlight_text, None);
        }
    }

    // In March the 14th falls on a Saturday too; check a month where it
    // does not. 2026-05-14 is a Thursday.
    let may = rebuild(NavigationState::at(ym(2026, 5)), &settings);
    let cell = may
        .cells
        .iter()
        .find(|c| c.day_of_month == Some(14))
        .unwrap();
    assert!(!cell.is_vetoed);
    assert_eq!(cell.highlight_text.as_deref(), Some("Team day"));
}

#[test]
fn clearing_resets_to_today() {
    let settings = test_settings();
    let nav = NavigationState::at(ym(1999, 7));
    let nav = match nav.select(Some(date(1999, 7, 20)), &settings) {
        Selection::Applied(next) => next,
        Selection::Rejected => panic!("selection should apply"),
    };

    let nav = match nav.select(None, &settings) {
        Selection::Applied(next) => next,
        Selection::Rejected => panic!("clearing is never vetoed"),
    };
    assert_eq!(nav.displayed(), ym(2026, 2));
    assert_eq!(nav.selected(), None);
    assert!(rebuild(nav, &settings).cells.iter().all(|c| !c.is_selected));
}

#[test]
fn today_affordance_disabled_under_weekend_veto() {
    // 2026-02-21 is a Saturday, so "today" itself is vetoed.
    let settings = PickerSettings {
        today: date(2026, 2, 21),
        ..office_settings()
    };
    let footer = FooterAffordances::resolve(&settings);
    assert_eq!(footer.today, date(2026, 2, 21));
    assert!(footer.today_vetoed);
    assert!(footer.clear_enabled);

    // The vetoed today must not be selectable either.
    let nav = NavigationState::new(&settings);
    assert_eq!(
        nav.select(Some(settings.today), &settings),
        Selection::Rejected
    );
}

#[test]
fn a_year_of_grids_stays_consistent() {
    let settings = test_settings();
    let mut nav = NavigationState::at(ym(2024, 1));
    let mut total_days = 0;

    for _ in 0..12 {
        let grid = rebuild(nav, &settings);
        assert_eq!(grid.cells.len(), CELLS_PER_MONTH);

        let days: Vec<u32> = grid.cells.iter().filter_map(|c| c.day_of_month).collect();
        assert_eq!(days.len() as u32, nav.displayed().days_in_month());
        assert_eq!(days.first(), Some(&1));
        total_days += days.len();

        nav = nav.next_month();
    }

    // 2024 is a leap year.
    assert_eq!(total_days, 366);
    assert_eq!(nav.displayed(), ym(2025, 1));
}

#[test]
fn jumping_through_the_year_menu() {
    let settings = test_settings();
    let nav = NavigationState::new(&settings);
    let years = nav.year_menu();
    assert_eq!(years.len(), 23);

    // Jump to the first offered year and rebuild.
    let nav = nav.jump_to_year(years[0]);
    assert_eq!(nav.displayed(), ym(2015, 2));
    let grid = rebuild(nav, &settings);
    assert_eq!(grid.header, "February 2015");
}

#[test]
fn month_with_28_days_and_monday_alignment_fills_one_row_less() {
    // February 2021: the 1st is a Monday and the month has 28 days, so the
    // grid is four full weeks followed by two blank rows.
    let settings = test_settings();
    let grid = rebuild(NavigationState::at(ym(2021, 2)), &settings);
    assert_eq!(grid.cells[0].day_of_month, Some(1));
    assert_eq!(grid.cells[27].day_of_month, Some(28));
    for index in 28..42 {
        assert!(grid.cells[index].is_blank(), "cell {index}");
    }
}
