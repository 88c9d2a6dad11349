use gloo::dialogs::{alert, confirm};
use shared::{
    AdminEditor, Credentials, EmployeeSummary, FormError, FormField, KeyedSingleFlight,
    SingleFlight,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::File;
use yew::prelude::*;

use super::use_shared_state::use_shared_state;
use crate::services::api::ApiClient;
use crate::services::download::{export_file_name, save_bytes};
use crate::services::Logger;

const COMPONENT: &str = "admin";

/// What the employee table shows
#[derive(Debug, Clone, PartialEq)]
pub enum EmployeeList {
    Loading,
    Failed(String),
    Loaded(Vec<EmployeeSummary>),
}

impl EmployeeList {
    /// Single-row message shown instead of employees, if any
    pub fn message(&self) -> Option<&'static str> {
        match self {
            EmployeeList::Loading => Some("Загрузка..."),
            EmployeeList::Failed(_) => Some("Ошибка загрузки списка"),
            EmployeeList::Loaded(rows) if rows.is_empty() => Some("Пока нет сотрудников"),
            EmployeeList::Loaded(_) => None,
        }
    }

    fn set_on_shift(&mut self, id: i64, on_shift: bool) {
        if let EmployeeList::Loaded(rows) = self {
            if let Some(row) = rows.iter_mut().find(|row| row.id == id) {
                row.on_shift = on_shift;
            }
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct AdminState {
    pub list: EmployeeList,
    pub editor: AdminEditor,
    pub saving: bool,
    pub deleting: bool,
    pub uploading: bool,
    pub shift_updates: KeyedSingleFlight<i64>,
}

pub struct UseAdminResult {
    pub state: AdminState,
    pub actions: UseAdminActions,
}

#[derive(Clone, PartialEq)]
pub struct UseAdminActions {
    pub refresh_list: Callback<()>,
    pub select: Callback<i64>,
    pub new_employee: Callback<()>,
    pub reload_record: Callback<i64>,
    pub set_field: Callback<(FormField, String)>,
    pub set_on_shift: Callback<bool>,
    pub save: Callback<()>,
    pub delete: Callback<()>,
    pub export: Callback<()>,
    pub upload_photo: Callback<Option<File>>,
    pub clear_photo: Callback<()>,
    pub toggle_shift: Callback<(i64, bool)>,
}

struct AdminStore {
    list: EmployeeList,
    editor: AdminEditor,
    save_guard: SingleFlight,
    delete_guard: SingleFlight,
    photo_guard: SingleFlight,
    shift_guards: KeyedSingleFlight<i64>,
}

impl Default for AdminStore {
    fn default() -> Self {
        Self {
            list: EmployeeList::Loading,
            editor: AdminEditor::default(),
            save_guard: SingleFlight::default(),
            delete_guard: SingleFlight::default(),
            photo_guard: SingleFlight::default(),
            shift_guards: KeyedSingleFlight::default(),
        }
    }
}

/// Alert and log a client-side rejection
fn reject(message: &str) {
    Logger::warn_with_component(COMPONENT, message);
    alert(message);
}

#[hook]
pub fn use_admin(
    api_client: &ApiClient,
    admin: &Credentials,
    selected_id: Option<i64>,
    on_select: &Callback<Option<i64>>,
) -> UseAdminResult {
    let store = use_shared_state(AdminStore::default);

    let refresh_list = {
        let api_client = api_client.clone();
        let admin = admin.clone();
        let store = store.clone();

        use_callback(admin.clone(), move |_: (), _| {
            let api_client = api_client.clone();
            let admin = admin.clone();
            let store = store.clone();

            store.update(|s| s.list = EmployeeList::Loading);
            spawn_local(async move {
                let list = match api_client.list_employees(&admin).await {
                    Ok(rows) => EmployeeList::Loaded(rows),
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("failed to load employees: {:?}", e));
                        EmployeeList::Failed(e.to_string())
                    }
                };
                store.update(|s| s.list = list);
            });
        })
    };

    let reload_record = {
        let api_client = api_client.clone();
        let admin = admin.clone();
        let store = store.clone();

        use_callback(admin.clone(), move |id: i64, _| {
            let api_client = api_client.clone();
            let admin = admin.clone();
            let store = store.clone();

            spawn_local(async move {
                match api_client.get_employee(&admin, id).await {
                    Ok(record) => store.update(|s| s.editor.load(&record)),
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("failed to load employee {}: {:?}", id, e));
                        alert(&e.with_context("Ошибка загрузки сотрудника"));
                    }
                }
            });
        })
    };

    let select = use_callback(on_select.clone(), move |id: i64, on_select| {
        on_select.emit(Some(id));
    });

    let new_employee = {
        let store = store.clone();
        use_callback(on_select.clone(), move |_: (), on_select| {
            store.update(|s| s.editor.reset());
            on_select.emit(None);
        })
    };

    let set_field = {
        let store = store.clone();
        use_callback((), move |(field, value): (FormField, String), _| {
            store.update(|s| s.editor.set_field(field, value));
        })
    };

    let set_on_shift = {
        let store = store.clone();
        use_callback((), move |on_shift: bool, _| {
            store.update(|s| s.editor.set_on_shift(on_shift));
        })
    };

    let save = {
        let api_client = api_client.clone();
        let admin = admin.clone();
        let store = store.clone();
        let on_select = on_select.clone();
        let refresh_list = refresh_list.clone();

        use_callback((admin.clone(), on_select.clone()), move |_: (), _| {
            if store.read().save_guard.is_busy() {
                return;
            }
            let (target, payload) = match store.read().editor.submission() {
                Ok(submission) => submission,
                Err(e) => {
                    reject(&e.to_string());
                    return;
                }
            };
            if store.update(|s| s.save_guard.begin()).is_err() {
                return;
            }

            let api_client = api_client.clone();
            let admin = admin.clone();
            let store = store.clone();
            let on_select = on_select.clone();
            let refresh_list = refresh_list.clone();
            spawn_local(async move {
                let result = api_client.save_employee(&admin, target, &payload).await;
                store.update(|s| s.save_guard.finish());

                match result {
                    Ok(record) => {
                        log::info!(target: COMPONENT, "employee {:?} saved", record.id);
                        store.update(|s| s.editor.load(&record));
                        if record.id.is_some() {
                            on_select.emit(record.id);
                        }
                        alert("Сотрудник сохранён");
                        refresh_list.emit(());
                    }
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("save failed: {:?}", e));
                        alert(&e.with_context("Ошибка сохранения"));
                    }
                }
            });
        })
    };

    let delete = {
        let api_client = api_client.clone();
        let admin = admin.clone();
        let store = store.clone();
        let on_select = on_select.clone();
        let refresh_list = refresh_list.clone();

        use_callback((admin.clone(), on_select.clone()), move |_: (), _| {
            let id = match store.read().editor.selected_id() {
                Ok(id) => id,
                Err(_) => {
                    reject("Выберите сотрудника для удаления");
                    return;
                }
            };
            if store.read().delete_guard.is_busy() || !confirm("Точно удалить этого сотрудника?") {
                return;
            }
            if store.update(|s| s.delete_guard.begin()).is_err() {
                return;
            }

            let api_client = api_client.clone();
            let admin = admin.clone();
            let store = store.clone();
            let on_select = on_select.clone();
            let refresh_list = refresh_list.clone();
            spawn_local(async move {
                let result = api_client.delete_employee(&admin, id).await;
                store.update(|s| s.delete_guard.finish());

                match result {
                    Ok(()) => {
                        log::info!(target: COMPONENT, "employee {} deleted", id);
                        store.update(|s| s.editor.reset());
                        on_select.emit(None);
                        refresh_list.emit(());
                    }
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("delete failed: {:?}", e));
                        alert(&e.with_context("Ошибка удаления"));
                    }
                }
            });
        })
    };

    let export = {
        let api_client = api_client.clone();
        let admin = admin.clone();
        let store = store.clone();

        use_callback(admin.clone(), move |_: (), _| {
            let id = match store.read().editor.selected_id() {
                Ok(id) => id,
                Err(_) => {
                    reject("Выберите сотрудника для экспорта");
                    return;
                }
            };

            let api_client = api_client.clone();
            let admin = admin.clone();
            spawn_local(async move {
                match api_client.export_employee(&admin, id).await {
                    Ok(bytes) => {
                        if let Err(e) = save_bytes(&bytes, &export_file_name(id)) {
                            Logger::error_with_component(COMPONENT, &format!("download failed: {:?}", e));
                            alert("Не удалось сохранить файл");
                        }
                    }
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("export failed: {:?}", e));
                        alert(&e.with_context("Ошибка экспорта"));
                    }
                }
            });
        })
    };

    let upload_photo = {
        let api_client = api_client.clone();
        let admin = admin.clone();
        let store = store.clone();

        use_callback(admin.clone(), move |file: Option<File>, _| {
            let id = match store.read().editor.selected_id() {
                Ok(id) => id,
                Err(e) => {
                    reject(&e.to_string());
                    return;
                }
            };
            let Some(file) = file else {
                reject(&FormError::NoFileChosen.to_string());
                return;
            };
            if store.update(|s| s.photo_guard.begin()).is_err() {
                return;
            }

            let api_client = api_client.clone();
            let admin = admin.clone();
            let store = store.clone();
            spawn_local(async move {
                let result = api_client.upload_photo(&admin, id, &file).await;
                store.update(|s| s.photo_guard.finish());

                match result {
                    Ok(uploaded) => {
                        store.update(|s| s.editor.photo_uploaded(uploaded.photo_url));
                        alert("Фото обновлено");
                    }
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("photo upload failed: {:?}", e));
                        alert(&e.with_context("Ошибка загрузки фото"));
                    }
                }
            });
        })
    };

    let clear_photo = {
        let store = store.clone();
        use_callback((), move |_: (), _| {
            store.update(|s| s.editor.clear_photo());
        })
    };

    // Optimistic: the row flips at once and flips back if the backend refuses
    let toggle_shift = {
        let api_client = api_client.clone();
        let admin = admin.clone();
        let store = store.clone();

        use_callback(admin.clone(), move |(id, on_shift): (i64, bool), _| {
            let started = store.update(|s| {
                if s.shift_guards.begin(id).is_err() {
                    return false;
                }
                s.list.set_on_shift(id, on_shift);
                true
            });
            if !started {
                return;
            }

            let api_client = api_client.clone();
            let admin = admin.clone();
            let store = store.clone();
            spawn_local(async move {
                let result = api_client.set_on_shift(&admin, id, on_shift).await;
                store.update(|s| {
                    s.shift_guards.finish(&id);
                    if result.is_err() {
                        s.list.set_on_shift(id, !on_shift);
                    }
                });

                if let Err(e) = result {
                    Logger::error_with_component(COMPONENT, &format!("shift update for {} failed: {:?}", id, e));
                    alert(&e.with_context("Не удалось обновить смену"));
                }
            });
        })
    };

    // Initial list
    use_effect_with(admin.clone(), {
        let refresh_list = refresh_list.clone();
        move |_| {
            refresh_list.emit(());
            || ()
        }
    });

    // Follow the selected employee
    use_effect_with(selected_id, {
        let store = store.clone();
        let reload_record = reload_record.clone();
        move |selected_id| {
            match *selected_id {
                Some(id) => reload_record.emit(id),
                None => store.update(|s| s.editor.reset()),
            }
            || ()
        }
    });

    let state = {
        let s = store.read();
        AdminState {
            list: s.list.clone(),
            editor: s.editor.clone(),
            saving: s.save_guard.is_busy(),
            deleting: s.delete_guard.is_busy(),
            uploading: s.photo_guard.is_busy(),
            shift_updates: s.shift_guards.clone(),
        }
    };

    let actions = UseAdminActions {
        refresh_list,
        select,
        new_employee,
        reload_record,
        set_field,
        set_on_shift,
        save,
        delete,
        export,
        upload_photo,
        clear_photo,
        toggle_shift,
    };

    UseAdminResult { state, actions }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    fn row(id: i64, on_shift: bool) -> EmployeeSummary {
        EmployeeSummary {
            id,
            on_shift,
            ..Default::default()
        }
    }

    #[wasm_bindgen_test]
    fn test_list_messages() {
        assert_eq!(EmployeeList::Loading.message(), Some("Загрузка..."));
        assert_eq!(EmployeeList::Loaded(vec![]).message(), Some("Пока нет сотрудников"));
        assert_eq!(
            EmployeeList::Failed("HTTP 500".to_string()).message(),
            Some("Ошибка загрузки списка")
        );
        assert_eq!(EmployeeList::Loaded(vec![row(1, false)]).message(), None);
    }

    #[wasm_bindgen_test]
    fn test_shift_flip_and_rollback_touch_one_row() {
        let mut list = EmployeeList::Loaded(vec![row(1, false), row(2, true)]);

        list.set_on_shift(1, true);
        list.set_on_shift(1, false);
        list.set_on_shift(3, true);

        assert_eq!(list, EmployeeList::Loaded(vec![row(1, false), row(2, true)]));
    }
}
