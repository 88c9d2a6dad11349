use shared::formatting::shift_role_label;
use shared::KeyedSingleFlight;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_admin::EmployeeList;

#[derive(Properties, PartialEq)]
pub struct EmployeeTableProps {
    pub list: EmployeeList,
    pub selected_id: Option<i64>,
    /// Rows whose shift update is still in flight.
    pub shift_updates: KeyedSingleFlight<i64>,
    pub on_select: Callback<i64>,
    pub on_toggle_shift: Callback<(i64, bool)>,
    pub on_refresh: Callback<()>,
}

#[function_component(EmployeeTable)]
pub fn employee_table(props: &EmployeeTableProps) -> Html {
    let on_refresh = {
        let on_refresh = props.on_refresh.clone();
        Callback::from(move |_: MouseEvent| on_refresh.emit(()))
    };

    let rows = match (&props.list, props.list.message()) {
        (_, Some(message)) => html! {
            <tr><td class="muted" colspan="4">{message}</td></tr>
        },
        (EmployeeList::Loaded(employees), None) => html! {
            <>{for employees.iter().map(|employee| {
                let id = employee.id;
                let onclick = {
                    let on_select = props.on_select.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(id))
                };
                // The checkbox must not select the row
                let on_shift_click = Callback::from(|e: MouseEvent| e.stop_propagation());
                let on_shift_change = {
                    let on_toggle_shift = props.on_toggle_shift.clone();
                    Callback::from(move |e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        on_toggle_shift.emit((id, input.checked()));
                    })
                };
                let selected = props.selected_id == Some(id);

                html! {
                    <tr key={id.to_string()} class={classes!("employee-row", selected.then_some("selected"))} {onclick}>
                        <td>{&employee.name}</td>
                        <td>{&employee.position}</td>
                        <td>{shift_role_label(employee.shift_role.as_deref())}</td>
                        <td class="shift-cell">
                            <input
                                type="checkbox"
                                checked={employee.on_shift}
                                disabled={props.shift_updates.is_busy(&id)}
                                onclick={on_shift_click}
                                onchange={on_shift_change}
                            />
                        </td>
                    </tr>
                }
            })}</>
        },
        _ => html! {},
    };

    html! {
        <section class="employee-list">
            <div class="section-header">
                <h2>{"Сотрудники"}</h2>
                <button class="btn-secondary" onclick={on_refresh}>{"Обновить"}</button>
            </div>
            <div class="table-container">
                <table class="employees-table">
                    <thead>
                        <tr>
                            <th>{"Имя"}</th>
                            <th>{"Должность"}</th>
                            <th>{"Смена"}</th>
                            <th>{"На смене"}</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
        </section>
    }
}
