use shared::LedgerView;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LedgerTableProps {
    pub ledger: LedgerView,
    /// Adds a delete column when present (admin only).
    #[prop_or_default]
    pub on_delete: Option<Callback<i64>>,
    /// Disables the delete buttons while a deletion is running.
    #[prop_or_default]
    pub deleting: bool,
}

#[function_component(LedgerTable)]
pub fn ledger_table(props: &LedgerTableProps) -> Html {
    let columns = if props.on_delete.is_some() { 5 } else { 4 };

    let body = match &props.ledger {
        LedgerView::Rows(rows) => html! {
            <>{for rows.iter().map(|row| {
                let amount_class = if row.is_deduction { "amount negative" } else { "amount positive" };
                let delete_cell = props.on_delete.as_ref().map(|on_delete| {
                    let on_delete = on_delete.clone();
                    let id = row.id;
                    let onclick = Callback::from(move |_: MouseEvent| on_delete.emit(id));
                    html! {
                        <td class="actions">
                            <button class="btn-delete" title="Удалить" {onclick} disabled={props.deleting}>
                                {"×"}
                            </button>
                        </td>
                    }
                });
                html! {
                    <tr key={row.id.to_string()}>
                        <td class="date">{&row.created_at}</td>
                        <td class="kind">{row.kind_label}</td>
                        <td class={amount_class}>{&row.amount}</td>
                        <td class="description">{&row.comment}</td>
                        {delete_cell.unwrap_or_default()}
                    </tr>
                }
            })}</>
        },
        other => html! {
            <tr>
                <td class="muted" colspan={columns.to_string()}>
                    {other.message().unwrap_or_default()}
                </td>
            </tr>
        },
    };

    html! {
        <div class="table-container">
            <table class="transactions-table">
                <thead>
                    <tr>
                        <th>{"Дата"}</th>
                        <th>{"Тип"}</th>
                        <th>{"Сумма"}</th>
                        <th>{"Комментарий"}</th>
                        {if props.on_delete.is_some() { html! { <th></th> } } else { html! {} }}
                    </tr>
                </thead>
                <tbody>
                    {body}
                </tbody>
            </table>
        </div>
    }
}
