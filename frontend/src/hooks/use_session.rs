use shared::{Credentials, EmployeeRecord, LoginRequest, Role, Session, SingleFlight};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::use_shared_state::use_shared_state;
use crate::services::api::ApiClient;
use crate::services::storage;
use crate::services::Logger;

const COMPONENT: &str = "session";

/// Raw login form input
#[derive(Debug, Clone, PartialEq)]
pub struct LoginInput {
    pub role: Role,
    pub login: String,
    pub password: String,
}

#[derive(Clone, PartialEq)]
pub struct SessionState {
    pub session: Option<Session>,
    pub login_error: Option<String>,
    pub logging_in: bool,
}

pub struct UseSessionResult {
    pub state: SessionState,
    pub actions: UseSessionActions,
}

#[derive(Clone, PartialEq)]
pub struct UseSessionActions {
    pub login: Callback<LoginInput>,
    pub logout: Callback<()>,
    pub replace_record: Callback<EmployeeRecord>,
    pub select_employee: Callback<Option<i64>>,
}

struct SessionStore {
    session: Option<Session>,
    login_error: Option<String>,
    login_guard: SingleFlight,
}

#[hook]
pub fn use_session(api_client: &ApiClient) -> UseSessionResult {
    let store = use_shared_state(|| SessionStore {
        session: storage::load_session(),
        login_error: None,
        login_guard: SingleFlight::default(),
    });

    let login = {
        let api_client = api_client.clone();
        let store = store.clone();

        use_callback((), move |input: LoginInput, _| {
            let credentials = match Credentials::from_input(&input.login, &input.password) {
                Ok(credentials) => credentials,
                Err(e) => {
                    Logger::warn_with_component(COMPONENT, &format!("login rejected locally: {}", e));
                    store.update(|s| s.login_error = Some(e.to_string()));
                    return;
                }
            };

            if let Err(e) = store.update(|s| s.login_guard.begin()) {
                Logger::debug_with_component(COMPONENT, &e.to_string());
                return;
            }
            store.update(|s| s.login_error = None);

            let api_client = api_client.clone();
            let store = store.clone();
            spawn_local(async move {
                let request = LoginRequest {
                    role: input.role,
                    login: credentials.login.clone(),
                    password: credentials.password.clone(),
                };

                let outcome = match api_client.login(&request).await {
                    Ok(response) => Session::from_login(credentials, response),
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("login failed: {:?}", e));
                        Err(e.login_error())
                    }
                };

                store.update(|s| {
                    s.login_guard.finish();
                    match outcome {
                        Ok(session) => {
                            log::info!(target: COMPONENT, "logged in as {} ({})", session.credentials.login, session.role.as_str());
                            storage::save_session(&session);
                            s.session = Some(session);
                        }
                        Err(e) => s.login_error = Some(e.to_string()),
                    }
                });
            });
        })
    };

    let logout = {
        let store = store.clone();
        use_callback((), move |_: (), _| {
            storage::clear_session();
            store.update(|s| {
                s.session = None;
                s.login_error = None;
            });
            log::info!(target: COMPONENT, "logged out");
        })
    };

    let replace_record = {
        let store = store.clone();
        use_callback((), move |record: EmployeeRecord, _| {
            store.update(|s| {
                if let Some(session) = s.session.as_mut() {
                    session.replace_record(record);
                    storage::save_session(session);
                }
            });
        })
    };

    let select_employee = {
        let store = store.clone();
        use_callback((), move |id: Option<i64>, _| {
            store.update(|s| {
                if let Some(session) = s.session.as_mut() {
                    session.select_employee(id);
                }
            });
        })
    };

    let state = {
        let s = store.read();
        SessionState {
            session: s.session.clone(),
            login_error: s.login_error.clone(),
            logging_in: s.login_guard.is_busy(),
        }
    };

    let actions = UseSessionActions {
        login,
        logout,
        replace_record,
        select_employee,
    };

    UseSessionResult { state, actions }
}
