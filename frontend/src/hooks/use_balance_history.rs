use shared::payments::balance_history_title;
use shared::{Credentials, LedgerView, SingleFlight};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::use_shared_state::use_shared_state;
use crate::services::api::ApiClient;
use crate::services::Logger;

const COMPONENT: &str = "balance_history";

#[derive(Clone, PartialEq)]
pub struct BalanceHistoryState {
    pub open: bool,
    pub title: String,
    pub ledger: LedgerView,
}

pub struct UseBalanceHistoryResult {
    pub state: BalanceHistoryState,
    pub actions: UseBalanceHistoryActions,
}

#[derive(Clone, PartialEq)]
pub struct UseBalanceHistoryActions {
    /// Open the modal for the given active chart month
    pub open: Callback<String>,
    pub close: Callback<()>,
}

struct HistoryStore {
    open: bool,
    title: String,
    ledger: LedgerView,
    fetch_guard: SingleFlight,
}

#[hook]
pub fn use_balance_history(api_client: &ApiClient, credentials: &Credentials) -> UseBalanceHistoryResult {
    let store = use_shared_state(|| HistoryStore {
        open: false,
        title: String::new(),
        ledger: LedgerView::Loading,
        fetch_guard: SingleFlight::default(),
    });

    let open = {
        let api_client = api_client.clone();
        let credentials = credentials.clone();
        let store = store.clone();

        use_callback(credentials.clone(), move |active_month: String, _| {
            let started = store.update(|s| {
                s.open = true;
                s.title = balance_history_title(&active_month);
                let started = s.fetch_guard.begin().is_ok();
                if started {
                    s.ledger = LedgerView::Loading;
                }
                started
            });
            if !started {
                return;
            }

            let api_client = api_client.clone();
            let credentials = credentials.clone();
            let store = store.clone();
            spawn_local(async move {
                let ledger = match api_client.employee_payments(&credentials).await {
                    Ok(entries) => LedgerView::from_entries(&entries),
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("failed to load balance history: {:?}", e));
                        LedgerView::Failed(e.to_string())
                    }
                };
                store.update(|s| {
                    s.fetch_guard.finish();
                    s.ledger = ledger;
                });
            });
        })
    };

    let close = {
        let store = store.clone();
        use_callback((), move |_: (), _| {
            store.update(|s| s.open = false);
        })
    };

    let state = {
        let s = store.read();
        BalanceHistoryState {
            open: s.open,
            title: s.title.clone(),
            ledger: s.ledger.clone(),
        }
    };

    UseBalanceHistoryResult {
        state,
        actions: UseBalanceHistoryActions { open, close },
    }
}
