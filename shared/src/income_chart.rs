//! # Income Chart
//!
//! Windowing and selection logic behind the employee income chart.
//!
//! The chart shows at most [`WINDOW_SIZE`] consecutive months out of the full
//! history. Without a selection the window covers the most recent months; a
//! year/month selection moves the window so it starts at the chosen month.
//! Bar heights are normalised against the visible window only.

use std::collections::BTreeSet;

use crate::formatting::{format_currency, format_hours, join_or_dash, PLACEHOLDER};
use crate::models::MonthSummary;

/// Number of months rendered at once.
pub const WINDOW_SIZE: usize = 6;

/// Height of a zero-income bar, in percent.
pub const BAR_FLOOR_PERCENT: f64 = 30.0;

/// Extra height given to the tallest bar on top of the floor, in percent.
pub const BAR_SPAN_PERCENT: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthSelection {
    pub year: i32,
    pub month: u32,
}

/// Index of the first visible month.
pub fn window_start(months: &[MonthSummary], selection: Option<MonthSelection>) -> usize {
    selection
        .and_then(|selected| {
            months
                .iter()
                .position(|m| m.year == selected.year && m.month == selected.month)
        })
        .unwrap_or_else(|| months.len().saturating_sub(WINDOW_SIZE))
}

/// The contiguous run of months currently rendered, in original order.
pub fn visible_window(months: &[MonthSummary], selection: Option<MonthSelection>) -> &[MonthSummary] {
    let start = window_start(months, selection);
    let end = (start + WINDOW_SIZE).min(months.len());
    &months[start..end]
}

/// `30 + income / max(max_income, 1) * 60`, so bars span 30%..90%.
pub fn bar_height_percent(income: f64, max_income: f64) -> f64 {
    BAR_FLOOR_PERCENT + (income / max_income.max(1.0)) * BAR_SPAN_PERCENT
}

/// Detail shown in the popup for one month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthPopup {
    pub title: String,
    pub salary: String,
    pub hours: String,
    pub penalties: String,
    pub absences: String,
}

impl From<&MonthSummary> for MonthPopup {
    fn from(month: &MonthSummary) -> Self {
        Self {
            title: format!("{} {}", month.full_name, month.year),
            salary: month
                .salary
                .map(|salary| format_currency(Some(salary)))
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            hours: format_hours(month.hours),
            penalties: join_or_dash(&month.penalties),
            absences: join_or_dash(&month.absences),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    pub key: String,
    pub label: String,
    pub value_label: String,
    pub height_percent: f64,
    pub year: i32,
    pub month: u32,
    pub popup: MonthPopup,
}

/// Everything the chart component needs to render one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct IncomeChartView {
    pub bars: Vec<ChartBar>,
    /// Full name of the last visible month, or the placeholder.
    pub active_label: String,
    /// Popup shown before any interaction: the last visible month.
    pub default_popup: Option<MonthPopup>,
}

impl IncomeChartView {
    pub fn build(months: &[MonthSummary], selection: Option<MonthSelection>) -> Self {
        let visible = visible_window(months, selection);

        let max_income = visible
            .iter()
            .map(|m| m.income.unwrap_or(0.0))
            .fold(1.0_f64, f64::max);

        let bars: Vec<ChartBar> = visible
            .iter()
            .map(|m| {
                let income = m.income.unwrap_or(0.0);
                ChartBar {
                    key: m.key.clone(),
                    label: m.short.clone(),
                    value_label: format_currency(Some(income)),
                    height_percent: bar_height_percent(income, max_income),
                    year: m.year,
                    month: m.month,
                    popup: MonthPopup::from(m),
                }
            })
            .collect();

        match visible.last() {
            Some(last) => Self {
                active_label: last.full_name.clone(),
                default_popup: Some(MonthPopup::from(last)),
                bars,
            },
            None => Self {
                bars,
                active_label: PLACEHOLDER.to_string(),
                default_popup: None,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthOption {
    pub month: u32,
    pub label: String,
}

/// Year/month selector kept in sync with the month history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncomeSelector {
    pub years: Vec<i32>,
    pub year: Option<i32>,
    pub month_options: Vec<MonthOption>,
    pub month: Option<u32>,
}

impl IncomeSelector {
    /// Initial selector: points at the first month of the default window.
    pub fn from_months(months: &[MonthSummary]) -> Self {
        let Some(start) = months.get(months.len().saturating_sub(WINDOW_SIZE)) else {
            return Self::default();
        };

        let years: BTreeSet<i32> = months.iter().map(|m| m.year).collect();
        let mut selector = Self {
            years: years.into_iter().collect(),
            year: Some(start.year),
            ..Self::default()
        };
        selector.rebuild_month_options(months, Some(start.month));
        selector
    }

    /// Switch year. The chosen month survives if the new year has it,
    /// otherwise the year's first available month is picked.
    pub fn select_year(&mut self, months: &[MonthSummary], year: i32) {
        let previous_month = self.month;
        self.year = Some(year);
        self.rebuild_month_options(months, previous_month);
    }

    /// Pick a month of the current year. Months absent from the options are
    /// ignored.
    pub fn select_month(&mut self, month: u32) {
        if self.month_options.iter().any(|option| option.month == month) {
            self.month = Some(month);
        }
    }

    pub fn selection(&self) -> Option<MonthSelection> {
        Some(MonthSelection {
            year: self.year?,
            month: self.month?,
        })
    }

    fn rebuild_month_options(&mut self, months: &[MonthSummary], preferred: Option<u32>) {
        let year = self.year;
        self.month_options = months
            .iter()
            .filter(|m| Some(m.year) == year)
            .map(|m| MonthOption {
                month: m.month,
                label: m.short.clone(),
            })
            .collect();

        self.month = preferred
            .filter(|month| self.month_options.iter().any(|option| option.month == *month))
            .or_else(|| self.month_options.first().map(|option| option.month));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(year: i32, month: u32, income: f64) -> MonthSummary {
        MonthSummary {
            key: format!("{}-{:02}", year, month),
            short: format!("m{}", month),
            full_name: format!("Месяц {}", month),
            year,
            month,
            income: Some(income),
            ..Default::default()
        }
    }

    /// Consecutive months starting at the given year/month.
    fn series(start_year: i32, start_month: u32, count: usize) -> Vec<MonthSummary> {
        (0..count)
            .map(|i| {
                let offset = start_month as usize - 1 + i;
                let year = start_year + (offset / 12) as i32;
                let month_number = (offset % 12) as u32 + 1;
                month(year, month_number, 1000.0 * (i + 1) as f64)
            })
            .collect()
    }

    fn keys(months: &[MonthSummary]) -> Vec<String> {
        months.iter().map(|m| m.key.clone()).collect()
    }

    #[test]
    fn test_short_series_is_fully_visible() {
        for count in 0..=WINDOW_SIZE {
            let months = series(2024, 1, count);
            assert_eq!(visible_window(&months, None), months.as_slice());
        }
    }

    #[test]
    fn test_long_series_shows_last_six_in_order() {
        let months = series(2023, 5, 14);
        let visible = visible_window(&months, None);
        assert_eq!(keys(visible), keys(&months[8..]));
    }

    #[test]
    fn test_selection_moves_window_start() {
        let months = series(2023, 10, 12);
        let selection = Some(MonthSelection { year: 2024, month: 3 });

        let visible = visible_window(&months, selection);
        assert_eq!(visible[0].key, "2024-03");
        assert_eq!(visible.len(), WINDOW_SIZE);
    }

    #[test]
    fn test_selection_near_end_yields_shorter_window() {
        let months = series(2024, 1, 8);
        let visible = visible_window(&months, Some(MonthSelection { year: 2024, month: 7 }));
        assert_eq!(keys(visible), vec!["2024-07", "2024-08"]);
    }

    #[test]
    fn test_unknown_selection_falls_back_to_last_six() {
        let months = series(2024, 1, 9);
        let visible = visible_window(&months, Some(MonthSelection { year: 2019, month: 1 }));
        assert_eq!(keys(visible), keys(&months[3..]));
    }

    #[test]
    fn test_bar_heights_for_all_zero_window() {
        let months: Vec<MonthSummary> = (1..=4).map(|m| month(2024, m, 0.0)).collect();
        let view = IncomeChartView::build(&months, None);
        assert!(view.bars.iter().all(|bar| bar.height_percent == 30.0));
    }

    #[test]
    fn test_single_bar_at_max_is_ninety_percent() {
        let months = vec![month(2024, 5, 85_000.0)];
        let view = IncomeChartView::build(&months, None);
        assert_eq!(view.bars.len(), 1);
        assert_eq!(view.bars[0].height_percent, 90.0);
    }

    #[test]
    fn test_heights_normalised_within_window_only() {
        let mut months = series(2024, 1, 8);
        months[0].income = Some(1_000_000.0);

        let view = IncomeChartView::build(&months, None);
        let tallest = view
            .bars
            .iter()
            .map(|bar| bar.height_percent)
            .fold(f64::MIN, f64::max);
        assert_eq!(tallest, 90.0);
        assert_eq!(bar_height_percent(4000.0, 8000.0), 60.0);
    }

    #[test]
    fn test_missing_income_counts_as_zero() {
        let mut months = vec![month(2024, 1, 2000.0), month(2024, 2, 0.0)];
        months[1].income = None;

        let view = IncomeChartView::build(&months, None);
        assert_eq!(view.bars[1].height_percent, 30.0);
        assert_eq!(view.bars[1].value_label, "0 ₽");
    }

    #[test]
    fn test_default_popup_is_last_visible_month() {
        let mut months = series(2024, 1, 3);
        months[2].salary = Some(74_300.0);
        months[2].hours = Some(128.0);
        months[2].penalties = vec!["Штрафов: 1".to_string(), "Прогулы: 0".to_string()];

        let view = IncomeChartView::build(&months, None);
        assert_eq!(view.active_label, "Месяц 3");

        let popup = view.default_popup.unwrap();
        assert_eq!(popup.title, "Месяц 3 2024");
        assert_eq!(popup.salary, "74\u{a0}300 ₽");
        assert_eq!(popup.hours, "128 ч");
        assert_eq!(popup.penalties, "Штрафов: 1; Прогулы: 0");
        assert_eq!(popup.absences, "—");
    }

    #[test]
    fn test_empty_series_clears_label_and_popup() {
        let view = IncomeChartView::build(&[], None);
        assert!(view.bars.is_empty());
        assert_eq!(view.active_label, "—");
        assert!(view.default_popup.is_none());
        assert_eq!(IncomeSelector::from_months(&[]), IncomeSelector::default());
    }

    #[test]
    fn test_selector_starts_at_default_window() {
        let months = series(2023, 9, 9);
        let selector = IncomeSelector::from_months(&months);

        assert_eq!(selector.years, vec![2023, 2024]);
        assert_eq!(selector.year, Some(2023));
        assert_eq!(selector.month, Some(12));
        assert_eq!(
            selector.month_options.iter().map(|o| o.month).collect::<Vec<_>>(),
            vec![9, 10, 11, 12]
        );
        assert_eq!(
            window_start(&months, selector.selection()),
            window_start(&months, None)
        );
    }

    #[test]
    fn test_select_year_keeps_month_when_present() {
        let months = series(2023, 1, 15);
        let mut selector = IncomeSelector::from_months(&months);
        selector.select_year(&months, 2023);
        selector.select_month(2);

        selector.select_year(&months, 2024);
        assert_eq!(selector.month, Some(2));
        assert_eq!(selector.selection(), Some(MonthSelection { year: 2024, month: 2 }));
    }

    #[test]
    fn test_select_year_defaults_to_first_available_month() {
        let months = series(2023, 1, 15);
        let mut selector = IncomeSelector::from_months(&months);
        selector.select_year(&months, 2023);
        selector.select_month(11);

        selector.select_year(&months, 2024);
        assert_eq!(selector.month, Some(1));
        assert_eq!(
            selector.month_options.iter().map(|o| o.month).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_select_month_ignores_unknown_month() {
        let months = series(2024, 1, 3);
        let mut selector = IncomeSelector::from_months(&months);
        selector.select_month(9);
        assert_eq!(selector.month, Some(1));
    }
}
