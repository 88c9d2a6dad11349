mod components;
mod hooks;
mod services;

use yew::prelude::*;

use components::{AdminDashboard, EmployeeLayout, LoginForm};
use hooks::use_session;
use services::api::ApiClient;
use services::Logger;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| {
        let client = ApiClient::new();
        Logger::info_with_component("app", &format!("backend base: '{}'", client.base_url()));
        client
    });
    let session = use_session(&api_client);

    let Some(current) = session.state.session.as_ref() else {
        return html! {
            <div class="app login-page">
                <LoginForm
                    error={session.state.login_error.clone()}
                    logging_in={session.state.logging_in}
                    on_submit={session.actions.login.clone()}
                />
            </div>
        };
    };

    if current.is_admin() {
        return html! {
            <div class="app admin-page">
                <AdminDashboard
                    api_client={(*api_client).clone()}
                    admin={current.credentials.clone()}
                    selected_id={current.selected_employee_id}
                    on_select={session.actions.select_employee.clone()}
                    on_logout={session.actions.logout.clone()}
                />
            </div>
        };
    }

    match current.record.as_ref() {
        Some(record) => html! {
            <div class="app employee-page">
                <EmployeeLayout
                    api_client={(*api_client).clone()}
                    credentials={current.credentials.clone()}
                    record={record.clone()}
                    on_record={session.actions.replace_record.clone()}
                    on_logout={session.actions.logout.clone()}
                />
            </div>
        },
        // An employee session always carries its record; fall back to login otherwise
        None => html! {
            <div class="app login-page">
                <LoginForm
                    error={session.state.login_error.clone()}
                    logging_in={session.state.logging_in}
                    on_submit={session.actions.login.clone()}
                />
            </div>
        },
    }
}

fn main() {
    Logger::init();
    yew::Renderer::<App>::new().render();
}
