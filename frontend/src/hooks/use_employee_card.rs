use shared::{CardEditor, CardField, CardView, Credentials, EmployeeRecord};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::use_shared_state::use_shared_state;
use crate::services::api::ApiClient;
use crate::services::Logger;

const COMPONENT: &str = "employee_card";

#[derive(Clone, PartialEq)]
pub struct EmployeeCardState {
    pub editor: CardEditor,
    /// `None` until the first card arrives.
    pub view: Option<CardView>,
    pub loading: bool,
}

pub struct UseEmployeeCardResult {
    pub state: EmployeeCardState,
    pub actions: UseEmployeeCardActions,
}

#[derive(Clone, PartialEq)]
pub struct UseEmployeeCardActions {
    pub reload: Callback<()>,
    pub begin_edit: Callback<()>,
    pub set_field: Callback<(CardField, String)>,
    pub save: Callback<()>,
    pub cancel: Callback<()>,
}

#[derive(Default)]
struct CardStore {
    editor: CardEditor,
    record: Option<EmployeeRecord>,
    loading: bool,
}

impl CardStore {
    fn apply(&mut self, record: EmployeeRecord) {
        self.editor.load(&record);
        self.record = Some(record);
    }
}

/// Card editing for the logged-in employee. Every record received from the
/// backend is also handed to `on_record` so the stored session stays current.
#[hook]
pub fn use_employee_card(
    api_client: &ApiClient,
    credentials: &Credentials,
    on_record: &Callback<EmployeeRecord>,
) -> UseEmployeeCardResult {
    let store = use_shared_state(CardStore::default);

    let reload = {
        let api_client = api_client.clone();
        let credentials = credentials.clone();
        let store = store.clone();

        use_callback((credentials.clone(), on_record.clone()), move |_: (), (_, on_record)| {
            let api_client = api_client.clone();
            let credentials = credentials.clone();
            let store = store.clone();
            let on_record = on_record.clone();

            store.update(|s| s.loading = true);
            spawn_local(async move {
                let result = api_client.employee_card(&credentials).await;
                store.update(|s| s.loading = false);
                match result {
                    Ok(record) => {
                        store.update(|s| s.apply(record.clone()));
                        on_record.emit(record);
                    }
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("card load error: {:?}", e));
                        let message = e.with_context("Не удалось загрузить карточку");
                        store.update(|s| s.editor.load_failed(message));
                    }
                }
            });
        })
    };

    let begin_edit = {
        let store = store.clone();
        use_callback((), move |_: (), _| {
            store.update(|s| s.editor.begin_edit());
        })
    };

    let set_field = {
        let store = store.clone();
        use_callback((), move |(field, value): (CardField, String), _| {
            store.update(|s| s.editor.set_field(field, value));
        })
    };

    let save = {
        let api_client = api_client.clone();
        let credentials = credentials.clone();
        let store = store.clone();

        use_callback((credentials.clone(), on_record.clone()), move |_: (), (_, on_record)| {
            let request = match store.update(|s| s.editor.begin_save(&credentials)) {
                Ok(request) => request,
                Err(e) => {
                    Logger::warn_with_component(COMPONENT, &format!("save ignored: {}", e));
                    return;
                }
            };

            let api_client = api_client.clone();
            let store = store.clone();
            let on_record = on_record.clone();
            spawn_local(async move {
                match api_client.update_employee_card(&request).await {
                    Ok(record) => {
                        log::info!(target: COMPONENT, "card saved");
                        store.update(|s| {
                            s.editor.save_succeeded(&record);
                            s.record = Some(record.clone());
                        });
                        on_record.emit(record);
                    }
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("card save failed: {:?}", e));
                        let message = e.with_context("Не удалось сохранить карточку");
                        store.update(|s| s.editor.save_failed(message.clone()));
                        gloo::dialogs::alert(&message);
                    }
                }
            });
        })
    };

    let cancel = {
        let store = store.clone();
        use_callback(reload.clone(), move |_: (), reload| {
            store.update(|s| s.editor.cancel(s.record.as_ref()));
            reload.emit(());
        })
    };

    // Load the card for the current credentials
    use_effect_with(credentials.clone(), {
        let reload = reload.clone();
        move |_| {
            reload.emit(());
            || ()
        }
    });

    let state = {
        let s = store.read();
        EmployeeCardState {
            editor: s.editor.clone(),
            view: s.record.as_ref().map(CardView::from_record),
            loading: s.loading,
        }
    };

    let actions = UseEmployeeCardActions {
        reload,
        begin_edit,
        set_field,
        save,
        cancel,
    };

    UseEmployeeCardResult { state, actions }
}
