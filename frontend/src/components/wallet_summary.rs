use shared::WalletView;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WalletSummaryProps {
    pub wallet: WalletView,
    /// Clicking the salary card opens the balance history.
    pub on_salary_click: Callback<()>,
}

fn line_list(lines: &[String]) -> Html {
    if lines.is_empty() {
        return html! { <p class="muted">{"—"}</p> };
    }
    html! {
        <ul class="info-list">
            {for lines.iter().map(|line| html! { <li>{line}</li> })}
        </ul>
    }
}

#[function_component(WalletSummary)]
pub fn wallet_summary(props: &WalletSummaryProps) -> Html {
    let wallet = &props.wallet;
    let on_salary_click = {
        let on_salary_click = props.on_salary_click.clone();
        Callback::from(move |_: MouseEvent| on_salary_click.emit(()))
    };

    html! {
        <section class="wallet-summary">
            <div class="profile-card">
                <div class="avatar">{&wallet.initials}</div>
                <div class="profile-info">
                    <h2 class="profile-name">{&wallet.name}</h2>
                    <p class="profile-position">{&wallet.position}</p>
                    <dl class="profile-facts">
                        <dt>{"Ставка"}</dt>
                        <dd>{&wallet.rate}</dd>
                        <dt>{"Стаж"}</dt>
                        <dd>{&wallet.experience}</dd>
                        <dt>{"Статус"}</dt>
                        <dd>{&wallet.status}</dd>
                    </dl>
                </div>
            </div>

            <div class="info-card salary-card" onclick={on_salary_click}>
                <h3>{"Зарплата"}</h3>
                <p class="info-value">{&wallet.salary}</p>
                <p class="info-hint">{"Нажмите, чтобы открыть историю баланса"}</p>
            </div>

            <div class="info-card">
                <h3>{"Отработано"}</h3>
                <p class="info-value">{&wallet.hours}</p>
                <p class="info-hint">{&wallet.hours_detail}</p>
            </div>

            <div class="info-card">
                <h3>{"Штрафы и замечания"}</h3>
                {line_list(&wallet.penalties)}
            </div>

            <div class="info-card">
                <h3>{"Отсутствия"}</h3>
                {line_list(&wallet.absences)}
            </div>

            {if wallet.error_text.is_empty() {
                html! {}
            } else {
                html! { <div class="form-message error">{&wallet.error_text}</div> }
            }}
        </section>
    }
}
