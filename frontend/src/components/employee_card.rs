use shared::{CardField, CardView};
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::hooks::use_employee_card::{EmployeeCardState, UseEmployeeCardActions};

#[derive(Properties, PartialEq)]
pub struct EmployeeCardProps {
    pub state: EmployeeCardState,
    pub actions: UseEmployeeCardActions,
}

fn fact(label: &'static str, value: &str) -> Html {
    html! {
        <div class="card-fact">
            <span class="card-fact-label">{label}</span>
            <span class="card-fact-value">{value}</span>
        </div>
    }
}

#[function_component(EmployeeCard)]
pub fn employee_card(props: &EmployeeCardProps) -> Html {
    let editor = &props.state.editor;
    let controls = editor.controls();
    let draft = editor.draft();

    let editable = |field: CardField, label: &'static str, rows: u32| {
        let set_field = props.actions.set_field.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            set_field.emit((field, input.value()));
        });
        html! {
            <div class="form-group">
                <label>{label}</label>
                <textarea
                    rows={rows.to_string()}
                    value={draft.get(field).to_string()}
                    {oninput}
                    disabled={!controls.fields_enabled}
                />
            </div>
        }
    };

    let on_edit = {
        let begin_edit = props.actions.begin_edit.clone();
        Callback::from(move |_: MouseEvent| begin_edit.emit(()))
    };
    let on_save = {
        let save = props.actions.save.clone();
        Callback::from(move |_: MouseEvent| save.emit(()))
    };
    let on_cancel = {
        let cancel = props.actions.cancel.clone();
        Callback::from(move |_: MouseEvent| cancel.emit(()))
    };

    let Some(view) = props.state.view.as_ref() else {
        return html! {
            <section class="employee-card">
                {match editor.error() {
                    Some(error) => html! { <div class="form-message error">{error}</div> },
                    None => html! { <div class="loading">{"Загрузка карточки..."}</div> },
                }}
            </section>
        };
    };

    html! {
        <section class="employee-card">
            <div class="card-header">
                <h3>{"Карточка сотрудника"}</h3>
                <span class={classes!("mode-tag", (!controls.edit_visible).then_some("editing"))}>
                    {editor.mode().tag()}
                </span>
                {if props.state.loading {
                    html! { <span class="muted">{"Обновление..."}</span> }
                } else { html! {} }}
            </div>

            <div class="card-facts">
                {fact("ФИО", &view.full_name)}
                {fact("Должность", &view.position)}
                {fact("Отдел", &view.department)}
                {fact("Склад", &view.warehouse)}
                {fact("Смена", &view.shift_role)}
                {fact("Ставка", &view.rate)}
                {fact("Стаж", &view.experience)}
                {fact("График", &view.schedule)}
                {fact("Последняя смена статуса", &view.last_status_change)}
            </div>

            <div class="card-editable">
                {editable(CardField::Status, "Статус", 2)}
                {editable(CardField::Responsibilities, "Обязанности (по одной в строке)", 4)}
                {editable(CardField::Skills, "Навыки (по одному в строке)", 4)}
                {editable(CardField::Roles, "Роли (по одной в строке)", 3)}
            </div>

            {if let Some(error) = editor.error() {
                html! { <div class="form-message error">{error}</div> }
            } else { html! {} }}

            <div class="card-actions">
                {if controls.edit_visible {
                    html! { <button class="btn-secondary" onclick={on_edit}>{"Редактировать"}</button> }
                } else { html! {} }}
                {if controls.save_visible {
                    html! {
                        <button class="btn-primary" onclick={on_save} disabled={!controls.save_enabled}>
                            {if editor.is_saving() { "Сохраняем..." } else { "Сохранить" }}
                        </button>
                    }
                } else { html! {} }}
                {if controls.cancel_visible {
                    html! { <button class="btn-secondary" onclick={on_cancel}>{"Отмена"}</button> }
                } else { html! {} }}
            </div>

            <div class="card-history">
                <h4>{"История изменений"}</h4>
                {if view.history.is_empty() {
                    html! { <p class="muted">{CardView::empty_history_message()}</p> }
                } else {
                    html! {
                        <ul class="history-list">
                            {for view.history.iter().map(|row| html! {
                                <li class="history-item">
                                    <span class="history-time">{&row.timestamp}</span>
                                    <span class="history-field">{&row.field}</span>
                                    <span class="history-change">{format!("{} → {}", row.old, row.new)}</span>
                                </li>
                            })}
                        </ul>
                    }
                }}
            </div>
        </section>
    }
}
