use gloo::dialogs::{alert, confirm};
use shared::{Credentials, LedgerMutation, LedgerView, PaymentDraft, PaymentError, Refresh, SingleFlight};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::use_shared_state::use_shared_state;
use crate::services::api::ApiClient;
use crate::services::Logger;

const COMPONENT: &str = "payments";

/// Shown while no employee is selected
pub const NO_SELECTION_MESSAGE: &str = "Выберите сотрудника";

#[derive(Clone, PartialEq)]
pub struct PaymentsState {
    /// `None` while no employee is selected.
    pub ledger: Option<LedgerView>,
    pub draft: PaymentDraft,
    pub adding: bool,
    pub deleting: bool,
}

pub struct UsePaymentsResult {
    pub state: PaymentsState,
    pub actions: UsePaymentsActions,
}

#[derive(Clone, PartialEq)]
pub struct UsePaymentsActions {
    pub reload: Callback<()>,
    pub set_kind: Callback<String>,
    pub set_amount: Callback<String>,
    pub set_comment: Callback<String>,
    pub add: Callback<()>,
    pub delete: Callback<i64>,
}

#[derive(Default)]
struct PaymentsStore {
    ledger: Option<LedgerView>,
    draft: PaymentDraft,
    add_guard: SingleFlight,
    delete_guard: SingleFlight,
}

/// Payment ledger of the employee selected in the admin dashboard.
///
/// Every completed add or delete reloads the list and asks the owner to
/// reload the employee record through `on_record_refresh`.
#[hook]
pub fn use_payments(
    api_client: &ApiClient,
    admin: &Credentials,
    selected_id: Option<i64>,
    on_record_refresh: &Callback<i64>,
) -> UsePaymentsResult {
    let store = use_shared_state(PaymentsStore::default);

    let load = {
        let api_client = api_client.clone();
        let admin = admin.clone();
        let store = store.clone();

        use_callback(admin.clone(), move |id: i64, _| {
            let api_client = api_client.clone();
            let admin = admin.clone();
            let store = store.clone();

            store.update(|s| s.ledger = Some(LedgerView::Loading));
            spawn_local(async move {
                let ledger = match api_client.list_payments(&admin, id).await {
                    Ok(entries) => LedgerView::from_entries(&entries),
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("failed to load payments for {}: {:?}", id, e));
                        LedgerView::Failed(e.to_string())
                    }
                };
                store.update(|s| s.ledger = Some(ledger));
            });
        })
    };

    let after_mutation = {
        let load = load.clone();
        use_callback(on_record_refresh.clone(), move |(id, mutation): (i64, LedgerMutation), on_record_refresh| {
            for refresh in mutation.refreshes() {
                match refresh {
                    Refresh::Payments => load.emit(id),
                    Refresh::Record => on_record_refresh.emit(id),
                }
            }
        })
    };

    let reload = {
        let load = load.clone();
        use_callback(selected_id, move |_: (), selected_id| {
            if let Some(id) = *selected_id {
                load.emit(id);
            }
        })
    };

    let set_kind = {
        let store = store.clone();
        use_callback((), move |value: String, _| {
            store.update(|s| s.draft.set_kind(&value));
        })
    };

    let set_amount = {
        let store = store.clone();
        use_callback((), move |value: String, _| {
            store.update(|s| s.draft.set_amount(&value));
        })
    };

    let set_comment = {
        let store = store.clone();
        use_callback((), move |value: String, _| {
            store.update(|s| s.draft.set_comment(value));
        })
    };

    let add = {
        let api_client = api_client.clone();
        let admin = admin.clone();
        let store = store.clone();
        let after_mutation = after_mutation.clone();

        use_callback((admin.clone(), selected_id), move |_: (), (_, selected_id)| {
            let Some(id) = *selected_id else {
                Logger::warn_with_component(COMPONENT, &PaymentError::NoEmployeeSelected.to_string());
                alert(&PaymentError::NoEmployeeSelected.to_string());
                return;
            };
            if store.read().add_guard.is_busy() {
                return;
            }
            let request = match store.read().draft.to_request() {
                Ok(request) => request,
                Err(e) => {
                    Logger::warn_with_component(COMPONENT, &e.to_string());
                    alert(&e.to_string());
                    return;
                }
            };
            if store.update(|s| s.add_guard.begin()).is_err() {
                return;
            }

            let api_client = api_client.clone();
            let admin = admin.clone();
            let store = store.clone();
            let after_mutation = after_mutation.clone();
            spawn_local(async move {
                let result = api_client.add_payment(&admin, id, &request).await;
                store.update(|s| {
                    s.add_guard.finish();
                    if result.is_ok() {
                        s.draft.clear();
                    }
                });

                match result {
                    Ok(()) => after_mutation.emit((id, LedgerMutation::Added)),
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("failed to add payment: {:?}", e));
                        alert(&e.with_context("Ошибка добавления операции"));
                    }
                }
            });
        })
    };

    let delete = {
        let api_client = api_client.clone();
        let admin = admin.clone();
        let store = store.clone();
        let after_mutation = after_mutation.clone();

        use_callback((admin.clone(), selected_id), move |payment_id: i64, (_, selected_id)| {
            let Some(id) = *selected_id else {
                return;
            };
            if store.read().delete_guard.is_busy() || !confirm("Удалить эту операцию?") {
                return;
            }
            if store.update(|s| s.delete_guard.begin()).is_err() {
                return;
            }

            let api_client = api_client.clone();
            let admin = admin.clone();
            let store = store.clone();
            let after_mutation = after_mutation.clone();
            spawn_local(async move {
                let result = api_client.delete_payment(&admin, id, payment_id).await;
                store.update(|s| s.delete_guard.finish());

                match result {
                    Ok(()) => after_mutation.emit((id, LedgerMutation::Deleted)),
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("failed to delete payment {}: {:?}", payment_id, e));
                        alert(&e.with_context("Ошибка удаления операции"));
                    }
                }
            });
        })
    };

    // Follow the selected employee; no selection clears the panel
    use_effect_with(selected_id, {
        let store = store.clone();
        let load = load.clone();
        move |selected_id| {
            match *selected_id {
                Some(id) => load.emit(id),
                None => store.update(|s| s.ledger = None),
            }
            || ()
        }
    });

    let state = {
        let s = store.read();
        PaymentsState {
            ledger: s.ledger.clone(),
            draft: s.draft.clone(),
            adding: s.add_guard.is_busy(),
            deleting: s.delete_guard.is_busy(),
        }
    };

    let actions = UsePaymentsActions {
        reload,
        set_kind,
        set_amount,
        set_comment,
        add,
        delete,
    };

    UsePaymentsResult { state, actions }
}
