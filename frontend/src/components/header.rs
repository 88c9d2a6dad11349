use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    pub user_info: Html,
    /// Balance shown on the right; employees only.
    #[prop_or_default]
    pub balance: Option<String>,
    #[prop_or_default]
    pub on_balance_click: Option<Callback<()>>,
    pub on_logout: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| on_logout.emit(()))
    };

    html! {
        <header class="header">
            <div class="container">
                <div class="header-left">
                    <h1 id="page-title">{props.title.clone()}</h1>
                    <p id="page-subtitle">{props.subtitle.clone()}</p>
                </div>
                <div class="header-right">
                    {if let Some(balance) = props.balance.as_ref() {
                        let onclick = props.on_balance_click.clone().map(|on_click| {
                            Callback::from(move |_: MouseEvent| on_click.emit(()))
                        });
                        html! {
                            <div class="balance-display" {onclick}>
                                <span class="balance-label">{"Баланс"}</span>
                                <span class="balance-amount">{balance}</span>
                            </div>
                        }
                    } else { html! {} }}
                    <div class="top-user-info">{props.user_info.clone()}</div>
                    <button class="btn-secondary logout-btn" onclick={on_logout}>{"Выйти"}</button>
                </div>
            </div>
        </header>
    }
}
