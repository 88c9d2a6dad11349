pub mod employee_form;
pub mod employee_table;
pub mod payments_panel;

use shared::Credentials;
use yew::prelude::*;

use super::header::Header;
use crate::hooks::{use_admin, use_payments};
use crate::services::api::ApiClient;
use employee_form::EmployeeForm;
use employee_table::EmployeeTable;
use payments_panel::PaymentsPanel;

#[derive(Properties, PartialEq)]
pub struct AdminDashboardProps {
    pub api_client: ApiClient,
    pub admin: Credentials,
    pub selected_id: Option<i64>,
    pub on_select: Callback<Option<i64>>,
    pub on_logout: Callback<()>,
}

/// Admin page: employee list, editor and the selected employee's payments.
#[function_component(AdminDashboard)]
pub fn admin_dashboard(props: &AdminDashboardProps) -> Html {
    let admin = use_admin(&props.api_client, &props.admin, props.selected_id, &props.on_select);
    let payments = use_payments(
        &props.api_client,
        &props.admin,
        props.selected_id,
        &admin.actions.reload_record,
    );

    html! {
        <>
            <Header
                title="Панель администратора"
                subtitle="Управление сотрудниками, начислениями и штрафами."
                user_info={html! { <span>{format!("Вы вошли как администратор {}", props.admin.login)}</span> }}
                on_logout={props.on_logout.clone()}
            />

            <main class="main">
                <div class="container admin-layout">
                    <EmployeeTable
                        list={admin.state.list.clone()}
                        selected_id={props.selected_id}
                        shift_updates={admin.state.shift_updates.clone()}
                        on_select={admin.actions.select.clone()}
                        on_toggle_shift={admin.actions.toggle_shift.clone()}
                        on_refresh={admin.actions.refresh_list.clone()}
                    />
                    <div class="admin-detail">
                        <EmployeeForm
                            editor={admin.state.editor.clone()}
                            saving={admin.state.saving}
                            deleting={admin.state.deleting}
                            uploading={admin.state.uploading}
                            actions={admin.actions.clone()}
                        />
                        <PaymentsPanel state={payments.state} actions={payments.actions} />
                    </div>
                </div>
            </main>
        </>
    }
}
