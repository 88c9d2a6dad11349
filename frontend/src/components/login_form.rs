use shared::Role;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::use_session::LoginInput;

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    pub error: Option<String>,
    pub logging_in: bool,
    pub on_submit: Callback<LoginInput>,
}

#[function_component(LoginForm)]
pub fn login_form(props: &LoginFormProps) -> Html {
    let role = use_state(|| Role::Employee);
    let login = use_state(String::new);
    let password = use_state(String::new);

    let on_role_change = {
        let role = role.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            role.set(if select.value() == Role::Admin.as_str() {
                Role::Admin
            } else {
                Role::Employee
            });
        })
    };

    let on_login_input = {
        let login = login.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            login.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        let role = role.clone();
        let login = login.clone();
        let password = password.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(LoginInput {
                role: *role,
                login: (*login).clone(),
                password: (*password).clone(),
            });
        })
    };

    html! {
        <section class="login-block">
            <h1 class="login-title">{"Кошелёк сотрудника"}</h1>
            <form class="login-form" {onsubmit}>
                <div class="form-group">
                    <label for="role">{"Роль"}</label>
                    <select id="role" onchange={on_role_change} disabled={props.logging_in}>
                        {for [Role::Employee, Role::Admin].iter().map(|option| html! {
                            <option value={option.as_str()} selected={*option == *role}>
                                {option.label()}
                            </option>
                        })}
                    </select>
                </div>

                <div class="form-group">
                    <label for="login">{"Логин"}</label>
                    <input
                        type="text"
                        id="login"
                        autocomplete="username"
                        value={(*login).clone()}
                        oninput={on_login_input}
                        disabled={props.logging_in}
                    />
                </div>

                <div class="form-group">
                    <label for="password">{"Пароль"}</label>
                    <input
                        type="password"
                        id="password"
                        autocomplete="current-password"
                        value={(*password).clone()}
                        oninput={on_password_input}
                        disabled={props.logging_in}
                    />
                </div>

                {if let Some(error) = props.error.as_ref() {
                    html! { <div class="form-message error login-error">{error}</div> }
                } else { html! {} }}

                <button type="submit" class="btn-primary" disabled={props.logging_in}>
                    {if props.logging_in { "Входим..." } else { "Войти" }}
                </button>
            </form>
        </section>
    }
}
