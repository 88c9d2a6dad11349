use shared::formatting::extract_digits;
use shared::{AdminEditor, EditorTarget, FormField};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::hooks::use_admin::UseAdminActions;

#[derive(Properties, PartialEq)]
pub struct EmployeeFormProps {
    pub editor: AdminEditor,
    pub saving: bool,
    pub deleting: bool,
    pub uploading: bool,
    pub actions: UseAdminActions,
}

#[derive(Clone, Copy)]
enum Control {
    Text,
    Password,
    Number,
    Area(u32),
}

const SHIFT_ROLES: [(&str, &str); 3] = [("", "Не назначена"), ("receiver", "Приёмщик"), ("loader", "Кладовщик")];

#[function_component(EmployeeForm)]
pub fn employee_form(props: &EmployeeFormProps) -> Html {
    let file_input = use_node_ref();
    let form = &props.editor.form;
    let is_new = props.editor.target == EditorTarget::New;

    let field = |field: FormField, label: &'static str, control: Control| {
        let set_field = props.actions.set_field.clone();
        let value = form.get(field).to_string();
        let input = match control {
            Control::Area(rows) => {
                let oninput = Callback::from(move |e: InputEvent| {
                    let area: HtmlTextAreaElement = e.target_unchecked_into();
                    set_field.emit((field, area.value()));
                });
                html! { <textarea rows={rows.to_string()} {value} {oninput} /> }
            }
            Control::Number => {
                // Controlled inputs keep stray characters unless the DOM value is reset
                let oninput = Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    let digits = extract_digits(&input.value());
                    input.set_value(&digits);
                    set_field.emit((field, digits));
                });
                html! { <input type="text" inputmode="numeric" {value} {oninput} /> }
            }
            Control::Text | Control::Password => {
                let kind = if matches!(control, Control::Password) { "password" } else { "text" };
                let oninput = Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    set_field.emit((field, input.value()));
                });
                html! { <input type={kind} {value} {oninput} /> }
            }
        };
        html! {
            <div class="form-group">
                <label>{label}</label>
                {input}
            </div>
        }
    };

    let on_shift_role_change = {
        let set_field = props.actions.set_field.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            set_field.emit((FormField::ShiftRole, select.value()));
        })
    };

    let on_shift_change = {
        let set_on_shift = props.actions.set_on_shift.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_on_shift.emit(input.checked());
        })
    };

    let on_upload = {
        let upload_photo = props.actions.upload_photo.clone();
        let file_input = file_input.clone();
        Callback::from(move |_: MouseEvent| {
            let file = file_input
                .cast::<HtmlInputElement>()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            upload_photo.emit(file);
        })
    };

    let on_clear_photo = {
        let clear_photo = props.actions.clear_photo.clone();
        Callback::from(move |_: MouseEvent| clear_photo.emit(()))
    };

    let onsubmit = {
        let save = props.actions.save.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            save.emit(());
        })
    };

    let on_new = {
        let new_employee = props.actions.new_employee.clone();
        Callback::from(move |_: MouseEvent| new_employee.emit(()))
    };
    let on_delete = {
        let delete = props.actions.delete.clone();
        Callback::from(move |_: MouseEvent| delete.emit(()))
    };
    let on_export = {
        let export = props.actions.export.clone();
        Callback::from(move |_: MouseEvent| export.emit(()))
    };

    let penalty_preview = form.penalty_lines().join("; ");

    html! {
        <section class="employee-editor">
            <div class="section-header">
                <h2>{props.editor.title()}</h2>
                <span class="mode-tag">{props.editor.mode_label()}</span>
            </div>

            <form class="employee-form" {onsubmit}>
                <fieldset>
                    <legend>{"Доступ"}</legend>
                    {field(FormField::Login, "Логин", Control::Text)}
                    {field(
                        FormField::Password,
                        if is_new { "Пароль" } else { "Новый пароль (пусто = без изменений)" },
                        Control::Password,
                    )}
                </fieldset>

                <fieldset>
                    <legend>{"Профиль"}</legend>
                    {field(FormField::Initials, "Инициалы", Control::Text)}
                    {field(FormField::Name, "Имя", Control::Text)}
                    {field(FormField::Position, "Должность", Control::Text)}
                    {field(FormField::Department, "Отдел", Control::Text)}
                    {field(FormField::Rate, "Ставка, ₽/ч", Control::Number)}
                    {field(FormField::Experience, "Стаж", Control::Text)}
                    {field(FormField::Status, "Статус", Control::Text)}
                    {field(FormField::Warehouse, "Склад", Control::Text)}
                </fieldset>

                <fieldset>
                    <legend>{"Смена"}</legend>
                    <div class="form-group">
                        <label>{"Роль на смене"}</label>
                        <select onchange={on_shift_role_change}>
                            {for SHIFT_ROLES.iter().map(|(value, label)| html! {
                                <option value={*value} selected={form.shift_role == *value}>{*label}</option>
                            })}
                        </select>
                    </div>
                    {field(FormField::ShiftRate, "Ставка за смену, ₽", Control::Number)}
                    <div class="form-group checkbox">
                        <label>
                            <input type="checkbox" checked={form.on_shift} onchange={on_shift_change} />
                            {" На смене"}
                        </label>
                    </div>
                </fieldset>

                <fieldset>
                    <legend>{"Зарплата и часы"}</legend>
                    {field(FormField::Salary, "Зарплата, ₽", Control::Number)}
                    {field(FormField::Hours, "Часы", Control::Number)}
                    {field(FormField::Overtime, "Переработка, ч", Control::Number)}
                    {field(FormField::NightHours, "Ночные, ч", Control::Number)}
                    <p class="form-hint">{form.hours_detail().encode()}</p>
                </fieldset>

                <fieldset>
                    <legend>{"Дисциплина"}</legend>
                    {field(FormField::Fines, "Штрафов", Control::Number)}
                    {field(FormField::AbsenceCount, "Прогулы", Control::Number)}
                    {field(FormField::PenaltyComment, "Замечания", Control::Area(2))}
                    <p class="form-hint">{penalty_preview}</p>
                    {field(FormField::Absences, "Отсутствия (по одному в строке)", Control::Area(3))}
                    {field(FormField::ErrorText, "Сообщение об ошибке", Control::Area(2))}
                </fieldset>

                <fieldset>
                    <legend>{"Фото"}</legend>
                    {if form.photo_url.is_empty() {
                        html! { <p class="muted">{"Фото не загружено"}</p> }
                    } else {
                        html! { <img class="photo-preview" src={form.photo_url.clone()} alt="Фото сотрудника" /> }
                    }}
                    {field(FormField::PhotoUrl, "Ссылка на фото", Control::Text)}
                    <input type="file" accept="image/*" ref={file_input} />
                    <div class="form-actions">
                        <button type="button" class="btn-secondary" onclick={on_upload} disabled={props.uploading}>
                            {if props.uploading { "Загружаем..." } else { "Загрузить фото" }}
                        </button>
                        <button type="button" class="btn-secondary" onclick={on_clear_photo}>
                            {"Убрать фото"}
                        </button>
                    </div>
                </fieldset>

                <div class="form-actions">
                    <button type="submit" class="btn-primary" disabled={props.saving}>
                        {if props.saving { "Сохраняем..." } else { "Сохранить" }}
                    </button>
                    <button type="button" class="btn-secondary" onclick={on_new}>{"Новый сотрудник"}</button>
                    <button type="button" class="btn-secondary" onclick={on_export} disabled={is_new}>
                        {"Экспорт"}
                    </button>
                    <button type="button" class="btn-danger" onclick={on_delete} disabled={is_new || props.deleting}>
                        {"Удалить"}
                    </button>
                </div>
            </form>
        </section>
    }
}
