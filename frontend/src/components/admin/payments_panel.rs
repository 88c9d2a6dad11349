use shared::formatting::extract_signed_digits;
use shared::PaymentKind;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::ledger_table::LedgerTable;
use crate::hooks::use_payments::{PaymentsState, UsePaymentsActions, NO_SELECTION_MESSAGE};

#[derive(Properties, PartialEq)]
pub struct PaymentsPanelProps {
    pub state: PaymentsState,
    pub actions: UsePaymentsActions,
}

#[function_component(PaymentsPanel)]
pub fn payments_panel(props: &PaymentsPanelProps) -> Html {
    let draft = &props.state.draft;
    let has_selection = props.state.ledger.is_some();

    let on_kind_change = {
        let set_kind = props.actions.set_kind.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            set_kind.emit(select.value());
        })
    };

    let on_amount_input = {
        let set_amount = props.actions.set_amount.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let amount = extract_signed_digits(&input.value());
            input.set_value(&amount);
            set_amount.emit(amount);
        })
    };

    let on_comment_input = {
        let set_comment = props.actions.set_comment.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_comment.emit(input.value());
        })
    };

    let onsubmit = {
        let add = props.actions.add.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            add.emit(());
        })
    };

    let on_reload = {
        let reload = props.actions.reload.clone();
        Callback::from(move |_: MouseEvent| reload.emit(()))
    };

    html! {
        <section class="payments-panel">
            <div class="section-header">
                <h2>{"Начисления и удержания"}</h2>
                <button class="btn-secondary" onclick={on_reload} disabled={!has_selection}>{"Обновить"}</button>
            </div>

            <form class="payment-form" {onsubmit}>
                <select onchange={on_kind_change}>
                    {for PaymentKind::SELECTABLE.iter().map(|kind| html! {
                        <option value={kind.as_str()} selected={*kind == draft.kind}>{kind.label()}</option>
                    })}
                </select>
                <input
                    type="text"
                    placeholder="Сумма"
                    value={draft.amount.clone()}
                    oninput={on_amount_input}
                />
                <input
                    type="text"
                    placeholder="Комментарий"
                    value={draft.comment.clone()}
                    oninput={on_comment_input}
                />
                <button type="submit" class="btn-primary" disabled={props.state.adding || !has_selection}>
                    {if props.state.adding { "Добавляем..." } else { "Добавить" }}
                </button>
            </form>

            {match props.state.ledger.as_ref() {
                Some(ledger) => html! {
                    <LedgerTable
                        ledger={ledger.clone()}
                        on_delete={Some(props.actions.delete.clone())}
                        deleting={props.state.deleting}
                    />
                },
                None => html! { <p class="muted">{NO_SELECTION_MESSAGE}</p> },
            }}
        </section>
    }
}
