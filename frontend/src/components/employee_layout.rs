use shared::{Credentials, EmployeeRecord, WalletView};
use yew::prelude::*;

use super::balance_history_modal::BalanceHistoryModal;
use super::employee_card::EmployeeCard;
use super::header::Header;
use super::income_chart::IncomeChart;
use super::wallet_summary::WalletSummary;
use crate::hooks::{use_balance_history, use_employee_card};
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct EmployeeLayoutProps {
    pub api_client: ApiClient,
    pub credentials: Credentials,
    /// Record received at login.
    pub record: EmployeeRecord,
    /// Receives fresher copies of the record fetched by the card.
    pub on_record: Callback<EmployeeRecord>,
    pub on_logout: Callback<()>,
}

/// Employee wallet page: summary, income chart, card and balance history.
#[function_component(EmployeeLayout)]
pub fn employee_layout(props: &EmployeeLayoutProps) -> Html {
    let card = use_employee_card(&props.api_client, &props.credentials, &props.on_record);
    let history = use_balance_history(&props.api_client, &props.credentials);
    let active_month = use_state(String::new);

    let wallet = use_memo(props.record.clone(), |record| WalletView::from_record(record));

    let on_active_label = {
        let active_month = active_month.clone();
        Callback::from(move |label: String| active_month.set(label))
    };

    let open_history = {
        let open = history.actions.open.clone();
        let active_month = active_month.clone();
        Callback::from(move |_: ()| open.emit((*active_month).clone()))
    };

    html! {
        <>
            <Header
                title="Кошелёк сотрудника"
                subtitle="Всё о зарплате, времени и дисциплине."
                user_info={html! { <span>{props.record.display_name()}</span> }}
                balance={Some(wallet.balance.clone())}
                on_balance_click={Some(open_history.clone())}
                on_logout={props.on_logout.clone()}
            />

            <main class="main">
                <div class="container">
                    <WalletSummary wallet={(*wallet).clone()} on_salary_click={open_history} />
                    <IncomeChart months={props.record.months.clone()} {on_active_label} />
                    <EmployeeCard state={card.state} actions={card.actions} />
                </div>
            </main>

            <BalanceHistoryModal state={history.state} on_close={history.actions.close} />
        </>
    }
}
