use shared::{IncomeChartView, IncomeSelector, MonthPopup, MonthSummary};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IncomeChartProps {
    /// Full month history, chronological.
    pub months: Vec<MonthSummary>,
    /// Receives the label of the last visible month whenever it changes.
    pub on_active_label: Callback<String>,
}

pub enum Msg {
    SelectYear(i32),
    SelectMonth(u32),
    ShowMonth(MonthPopup),
}

pub struct IncomeChart {
    selector: IncomeSelector,
    /// Popup picked by hover or tap; `None` falls back to the last visible month.
    popup: Option<MonthPopup>,
    coarse_pointer: bool,
    last_label: Option<String>,
}

/// Touch devices get tap instead of hover.
fn is_coarse_pointer() -> bool {
    gloo::utils::window()
        .match_media("(pointer: coarse)")
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

impl IncomeChart {
    fn chart_view(&self, months: &[MonthSummary]) -> IncomeChartView {
        IncomeChartView::build(months, self.selector.selection())
    }

    fn render_popup(popup: &MonthPopup) -> Html {
        html! {
            <div class="month-popup">
                <h4 class="month-popup-title">{&popup.title}</h4>
                <dl>
                    <dt>{"Зарплата"}</dt>
                    <dd>{&popup.salary}</dd>
                    <dt>{"Часы"}</dt>
                    <dd>{&popup.hours}</dd>
                    <dt>{"Штрафы"}</dt>
                    <dd>{&popup.penalties}</dd>
                    <dt>{"Отсутствия"}</dt>
                    <dd>{&popup.absences}</dd>
                </dl>
            </div>
        }
    }
}

impl Component for IncomeChart {
    type Message = Msg;
    type Properties = IncomeChartProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            selector: IncomeSelector::from_months(&ctx.props().months),
            popup: None,
            coarse_pointer: is_coarse_pointer(),
            last_label: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SelectYear(year) => {
                self.selector.select_year(&ctx.props().months, year);
                self.popup = None;
                true
            }
            Msg::SelectMonth(month) => {
                self.selector.select_month(month);
                self.popup = None;
                true
            }
            Msg::ShowMonth(popup) => {
                let changed = self.popup.as_ref() != Some(&popup);
                self.popup = Some(popup);
                changed
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        // New history: start over from the default window
        if ctx.props().months != old_props.months {
            self.selector = IncomeSelector::from_months(&ctx.props().months);
            self.popup = None;
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        let label = self.chart_view(&ctx.props().months).active_label;
        if self.last_label.as_ref() != Some(&label) {
            self.last_label = Some(label.clone());
            ctx.props().on_active_label.emit(label);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let chart = self.chart_view(&ctx.props().months);
        let popup = self.popup.clone().or_else(|| chart.default_popup.clone());

        let on_year_change = link.batch_callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            select.value().parse().ok().map(Msg::SelectYear)
        });
        let on_month_change = link.batch_callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            select.value().parse().ok().map(Msg::SelectMonth)
        });

        html! {
            <section class="income-chart-container">
                <div class="chart-title-header">
                    <h3 class="chart-title">{"Доход по месяцам"}</h3>
                    <span class="income-active-label">{&chart.active_label}</span>
                    <div class="income-selectors">
                        <select class="income-year-select" onchange={on_year_change}>
                            {for self.selector.years.iter().map(|year| html! {
                                <option value={year.to_string()} selected={Some(*year) == self.selector.year}>
                                    {year.to_string()}
                                </option>
                            })}
                        </select>
                        <select class="income-month-select" onchange={on_month_change}>
                            {for self.selector.month_options.iter().map(|option| html! {
                                <option value={option.month.to_string()} selected={Some(option.month) == self.selector.month}>
                                    {&option.label}
                                </option>
                            })}
                        </select>
                    </div>
                </div>

                <div class="income-chart">
                    {for chart.bars.iter().map(|bar| {
                        let popup = bar.popup.clone();
                        let show = link.callback(move |_: MouseEvent| Msg::ShowMonth(popup.clone()));
                        let (onclick, onmouseenter) = if self.coarse_pointer {
                            (Some(show), None)
                        } else {
                            (None, Some(show))
                        };
                        html! {
                            <div
                                key={bar.key.clone()}
                                class="income-bar"
                                style={format!("height: {:.1}%;", bar.height_percent)}
                                data-label={bar.label.clone()}
                                data-value={bar.value_label.clone()}
                                {onclick}
                                {onmouseenter}
                            >
                                <span class="income-bar-label">{&bar.label}</span>
                            </div>
                        }
                    })}
                </div>

                {if let Some(popup) = popup.as_ref() {
                    Self::render_popup(popup)
                } else { html! {} }}
            </section>
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    fn month(year: i32, month: u32, income: f64) -> MonthSummary {
        MonthSummary {
            key: format!("{}-{:02}", year, month),
            short: format!("{:02}", month),
            full_name: format!("месяц {}", month),
            year,
            month,
            income: Some(income),
            ..Default::default()
        }
    }

    #[wasm_bindgen_test]
    fn test_pointer_detection_runs_in_browser() {
        // Headless browsers report a fine pointer, but the query must not fail
        let _ = is_coarse_pointer();
    }

    #[wasm_bindgen_test]
    fn test_chart_view_follows_selector() {
        let months: Vec<MonthSummary> = (1..=9).map(|m| month(2024, m, m as f64 * 1000.0)).collect();
        let mut chart = IncomeChart {
            selector: IncomeSelector::from_months(&months),
            popup: None,
            coarse_pointer: false,
            last_label: None,
        };

        let view = chart.chart_view(&months);
        assert_eq!(view.bars.len(), 6);
        assert_eq!(view.bars[0].month, 4);
        assert_eq!(view.active_label, "месяц 9");

        chart.selector.select_month(2);
        let view = chart.chart_view(&months);
        assert_eq!(view.bars[0].month, 2);
        assert_eq!(view.active_label, "месяц 7");
    }
}
