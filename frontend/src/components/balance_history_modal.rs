use yew::prelude::*;

use super::ledger_table::LedgerTable;
use crate::hooks::use_balance_history::BalanceHistoryState;

#[derive(Properties, PartialEq)]
pub struct BalanceHistoryModalProps {
    pub state: BalanceHistoryState,
    pub on_close: Callback<()>,
}

#[function_component(BalanceHistoryModal)]
pub fn balance_history_modal(props: &BalanceHistoryModalProps) -> Html {
    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    if !props.state.open {
        return html! {};
    }

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal balance-history-modal" onclick={on_modal_click}>
                <div class="modal-header">
                    <h2>{&props.state.title}</h2>
                    <button class="modal-close" onclick={on_close_click}>{"×"}</button>
                </div>
                <div class="modal-body">
                    <LedgerTable ledger={props.state.ledger.clone()} />
                </div>
            </div>
        </div>
    }
}
