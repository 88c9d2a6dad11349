//! # Admin Record Editor
//!
//! Bidirectional mapping between the flat admin form and an employee record.
//!
//! Two record fields are packed text that the backend stores verbatim and
//! employees read as-is:
//!
//! - `hours_detail`: `Переработка: {overtime} ч · Ночные: {night} ч.`
//! - `penalties`: a list whose structured lines are `Штрафов: N`,
//!   `Прогулы: N` and `Замечания: text`. Other lines are carried through
//!   untouched.
//!
//! Decoding never fails: anything that does not match the templates decodes
//! to zero / empty.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::formatting::{extract_digits, join_lines, split_lines};
use crate::models::{EmployeePayload, EmployeeRecord};

pub const DEFAULT_STATUS: &str = "Активен · Основное место";
pub const DEFAULT_WAREHOUSE: &str = "Челябинск · Склад №1";

const FINES_PREFIX: &str = "Штрафов";
const ABSENCES_PREFIX: &str = "Прогулы";
const COMMENT_PREFIX: &str = "Замечания";

static OVERTIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Переработка:\s*([0-9]+)").expect("overtime pattern is valid"));
static NIGHT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Ночные:\s*([0-9]+)").expect("night pattern is valid"));
static FINES_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Штрафов:\s*([0-9]+)").expect("fines pattern is valid"));
static ABSENCES_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Прогулы:\s*([0-9]+)").expect("absences pattern is valid"));
static COMMENT_LEAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Замечания:\s*").expect("comment pattern is valid"));

/// Digit run to counter. Empty is zero; a run too large for `u32` saturates
/// instead of collapsing to zero.
fn count_from_digits(digits: &str) -> u32 {
    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(u32::MAX)
}

fn capture_count(pattern: &Regex, text: &str) -> u32 {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|digits| count_from_digits(digits.as_str()))
        .unwrap_or(0)
}

/// Parse a form counter; blank or garbage counts as zero.
fn parse_counter(text: &str) -> u32 {
    count_from_digits(&extract_digits(text))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoursDetail {
    pub overtime: u32,
    pub night: u32,
}

impl HoursDetail {
    pub fn encode(&self) -> String {
        format!("Переработка: {} ч · Ночные: {} ч.", self.overtime, self.night)
    }

    pub fn decode(text: &str) -> Self {
        Self {
            overtime: capture_count(&OVERTIME_PATTERN, text),
            night: capture_count(&NIGHT_PATTERN, text),
        }
    }
}

/// Structured part of the penalties list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PenaltySummary {
    pub fines: u32,
    pub absences: u32,
    pub comment: String,
}

impl PenaltySummary {
    /// Split a penalties list into its structured summary and the lines that
    /// are not recognised.
    pub fn decode<S: AsRef<str>>(lines: &[S]) -> (Self, Vec<String>) {
        let mut summary = Self::default();
        let mut other = Vec::new();

        for line in lines.iter().map(AsRef::as_ref) {
            if line.starts_with(FINES_PREFIX) {
                summary.fines = capture_count(&FINES_PATTERN, line);
            } else if line.starts_with(ABSENCES_PREFIX) {
                summary.absences = capture_count(&ABSENCES_PATTERN, line);
            } else if line.starts_with(COMMENT_PREFIX) {
                summary.comment = COMMENT_LEAD.replace(line, "").into_owned();
            } else {
                other.push(line.to_string());
            }
        }

        (summary, other)
    }

    /// Fines and absences lines always; the comment line only when non-blank.
    pub fn encode(&self) -> Vec<String> {
        let mut lines = vec![
            format!("{}: {}", FINES_PREFIX, self.fines),
            format!("{}: {}", ABSENCES_PREFIX, self.absences),
        ];
        let comment = self.comment.trim();
        if !comment.is_empty() {
            lines.push(format!("{}: {}", COMMENT_PREFIX, comment));
        }
        lines
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Для нового сотрудника обязательно укажите логин и пароль")]
    MissingCredentials,
    #[error("Сначала выберите сотрудника")]
    NoEmployeeSelected,
    #[error("Выберите файл для загрузки")]
    NoFileChosen,
}

/// Text inputs of the admin form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Login,
    Password,
    Initials,
    Name,
    Position,
    Department,
    Rate,
    Experience,
    Status,
    Salary,
    Hours,
    Overtime,
    NightHours,
    Fines,
    AbsenceCount,
    PenaltyComment,
    Absences,
    ErrorText,
    PhotoUrl,
    Warehouse,
    ShiftRole,
    ShiftRate,
}

impl FormField {
    /// Inputs that only ever hold digits.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            FormField::Rate
                | FormField::Salary
                | FormField::Hours
                | FormField::Overtime
                | FormField::NightHours
                | FormField::Fines
                | FormField::AbsenceCount
                | FormField::ShiftRate
        )
    }
}

/// Flat form state. Values are kept as the user typed them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminForm {
    pub login: String,
    pub password: String,
    pub initials: String,
    pub name: String,
    pub position: String,
    pub department: String,
    pub rate: String,
    pub experience: String,
    pub status: String,
    pub salary: String,
    pub hours: String,
    pub overtime: String,
    pub night_hours: String,
    pub fines: String,
    pub absence_count: String,
    pub penalty_comment: String,
    /// Penalty lines that are not part of the structured summary.
    pub other_penalties: Vec<String>,
    pub absences: String,
    pub error_text: String,
    pub photo_url: String,
    pub warehouse: String,
    pub shift_role: String,
    pub shift_rate: String,
    pub on_shift: bool,
}

impl Default for AdminForm {
    fn default() -> Self {
        Self {
            login: String::new(),
            password: String::new(),
            initials: String::new(),
            name: String::new(),
            position: String::new(),
            department: String::new(),
            rate: String::new(),
            experience: String::new(),
            status: DEFAULT_STATUS.to_string(),
            salary: String::new(),
            hours: String::new(),
            overtime: "0".to_string(),
            night_hours: "0".to_string(),
            fines: "0".to_string(),
            absence_count: "0".to_string(),
            penalty_comment: String::new(),
            other_penalties: Vec::new(),
            absences: String::new(),
            error_text: String::new(),
            photo_url: String::new(),
            warehouse: DEFAULT_WAREHOUSE.to_string(),
            shift_role: String::new(),
            shift_rate: String::new(),
            on_shift: false,
        }
    }
}

impl AdminForm {
    /// Fill the form from a stored record. The password is never prefilled.
    pub fn from_record(record: &EmployeeRecord) -> Self {
        let hours = HoursDetail::decode(record.hours_detail.as_deref().unwrap_or_default());
        let (penalties, other_penalties) = PenaltySummary::decode(&record.penalties);

        Self {
            login: record.login.clone(),
            password: String::new(),
            initials: record.initials.clone(),
            name: record.name.clone(),
            position: record.position.clone(),
            department: record.department.clone().unwrap_or_default(),
            rate: extract_digits(record.rate.as_deref().unwrap_or_default()),
            experience: record.experience.clone().unwrap_or_default(),
            status: record
                .status
                .clone()
                .filter(|status| !status.is_empty())
                .unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            salary: extract_digits(record.salary.as_deref().unwrap_or_default()),
            hours: extract_digits(record.hours.as_deref().unwrap_or_default()),
            overtime: hours.overtime.to_string(),
            night_hours: hours.night.to_string(),
            fines: penalties.fines.to_string(),
            absence_count: penalties.absences.to_string(),
            penalty_comment: penalties.comment,
            other_penalties,
            absences: join_lines(&record.absences),
            error_text: record.error_text.clone().unwrap_or_default(),
            photo_url: record.photo_url.clone().unwrap_or_default(),
            warehouse: record
                .warehouse
                .clone()
                .filter(|warehouse| !warehouse.is_empty())
                .unwrap_or_else(|| DEFAULT_WAREHOUSE.to_string()),
            shift_role: record.shift_role.clone().unwrap_or_default(),
            shift_rate: record.shift_rate.map(|rate| rate.to_string()).unwrap_or_default(),
            on_shift: record.on_shift,
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Login => &self.login,
            FormField::Password => &self.password,
            FormField::Initials => &self.initials,
            FormField::Name => &self.name,
            FormField::Position => &self.position,
            FormField::Department => &self.department,
            FormField::Rate => &self.rate,
            FormField::Experience => &self.experience,
            FormField::Status => &self.status,
            FormField::Salary => &self.salary,
            FormField::Hours => &self.hours,
            FormField::Overtime => &self.overtime,
            FormField::NightHours => &self.night_hours,
            FormField::Fines => &self.fines,
            FormField::AbsenceCount => &self.absence_count,
            FormField::PenaltyComment => &self.penalty_comment,
            FormField::Absences => &self.absences,
            FormField::ErrorText => &self.error_text,
            FormField::PhotoUrl => &self.photo_url,
            FormField::Warehouse => &self.warehouse,
            FormField::ShiftRole => &self.shift_role,
            FormField::ShiftRate => &self.shift_rate,
        }
    }

    /// Store a keystroke. Numeric inputs are reduced to digits on the spot.
    pub fn set(&mut self, field: FormField, value: String) {
        let value = if field.is_numeric() { extract_digits(&value) } else { value };
        let slot = match field {
            FormField::Login => &mut self.login,
            FormField::Password => &mut self.password,
            FormField::Initials => &mut self.initials,
            FormField::Name => &mut self.name,
            FormField::Position => &mut self.position,
            FormField::Department => &mut self.department,
            FormField::Rate => &mut self.rate,
            FormField::Experience => &mut self.experience,
            FormField::Status => &mut self.status,
            FormField::Salary => &mut self.salary,
            FormField::Hours => &mut self.hours,
            FormField::Overtime => &mut self.overtime,
            FormField::NightHours => &mut self.night_hours,
            FormField::Fines => &mut self.fines,
            FormField::AbsenceCount => &mut self.absence_count,
            FormField::PenaltyComment => &mut self.penalty_comment,
            FormField::Absences => &mut self.absences,
            FormField::ErrorText => &mut self.error_text,
            FormField::PhotoUrl => &mut self.photo_url,
            FormField::Warehouse => &mut self.warehouse,
            FormField::ShiftRole => &mut self.shift_role,
            FormField::ShiftRate => &mut self.shift_rate,
        };
        *slot = value;
    }

    pub fn hours_detail(&self) -> HoursDetail {
        HoursDetail {
            overtime: parse_counter(&self.overtime),
            night: parse_counter(&self.night_hours),
        }
    }

    pub fn penalty_summary(&self) -> PenaltySummary {
        PenaltySummary {
            fines: parse_counter(&self.fines),
            absences: parse_counter(&self.absence_count),
            comment: self.penalty_comment.trim().to_string(),
        }
    }

    /// Full penalties list as it will be sent: structured lines first, then
    /// the preserved unrecognised lines.
    pub fn penalty_lines(&self) -> Vec<String> {
        let mut lines = self.penalty_summary().encode();
        lines.extend(self.other_penalties.iter().cloned());
        lines
    }

    /// Build the request body for `target`.
    ///
    /// New records need a login and a password. On existing records a blank
    /// password means "keep the current one" and is left out of the payload.
    pub fn to_payload(&self, target: EditorTarget) -> Result<EmployeePayload, FormError> {
        let login = self.login.trim().to_lowercase();
        let password = self.password.trim();

        if target == EditorTarget::New && (login.is_empty() || password.is_empty()) {
            return Err(FormError::MissingCredentials);
        }

        let shift_rate = self.shift_rate.trim();

        Ok(EmployeePayload {
            login,
            initials: self.initials.trim().to_string(),
            name: self.name.trim().to_string(),
            position: self.position.trim().to_string(),
            department: self.department.trim().to_string(),
            rate: self.rate.trim().to_string(),
            experience: self.experience.trim().to_string(),
            status: self.status.trim().to_string(),
            salary: self.salary.trim().to_string(),
            hours: self.hours.trim().to_string(),
            hours_detail: self.hours_detail().encode(),
            penalties: self.penalty_lines(),
            absences: split_lines(&self.absences),
            error_text: self.error_text.trim().to_string(),
            photo_url: self.photo_url.trim().to_string(),
            warehouse: self.warehouse.trim().to_string(),
            shift_role: self.shift_role.clone(),
            on_shift: self.on_shift,
            shift_rate: if shift_rate.is_empty() { None } else { shift_rate.parse().ok() },
            password: (!password.is_empty()).then(|| password.to_string()),
        })
    }
}

/// Whether the editor is drafting a new employee or editing a stored one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditorTarget {
    #[default]
    New,
    Existing(i64),
}

impl EditorTarget {
    pub fn id(&self) -> Option<i64> {
        match self {
            EditorTarget::New => None,
            EditorTarget::Existing(id) => Some(*id),
        }
    }
}

/// Admin editor state: the record being edited plus its form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminEditor {
    pub target: EditorTarget,
    pub form: AdminForm,
}

impl AdminEditor {
    pub fn title(&self) -> &'static str {
        match self.target {
            EditorTarget::New => "Новый сотрудник",
            EditorTarget::Existing(_) => "Редактирование сотрудника",
        }
    }

    pub fn mode_label(&self) -> String {
        match self.target {
            EditorTarget::New => "создание".to_string(),
            EditorTarget::Existing(id) => format!("#{}", id),
        }
    }

    /// Start a fresh draft.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Show a record fetched from the backend.
    pub fn load(&mut self, record: &EmployeeRecord) {
        self.target = record.id.map(EditorTarget::Existing).unwrap_or_default();
        self.form = AdminForm::from_record(record);
    }

    pub fn set_field(&mut self, field: FormField, value: String) {
        self.form.set(field, value);
    }

    pub fn set_on_shift(&mut self, on_shift: bool) {
        self.form.on_shift = on_shift;
    }

    pub fn submission(&self) -> Result<(EditorTarget, EmployeePayload), FormError> {
        Ok((self.target, self.form.to_payload(self.target)?))
    }

    /// Employee a side-channel request (photo, export, payments) applies to.
    pub fn selected_id(&self) -> Result<i64, FormError> {
        self.target.id().ok_or(FormError::NoEmployeeSelected)
    }

    /// A photo upload succeeded; only the URL field changes.
    pub fn photo_uploaded(&mut self, photo_url: Option<String>) {
        if let Some(url) = photo_url.filter(|url| !url.is_empty()) {
            self.form.photo_url = url;
        }
    }

    pub fn clear_photo(&mut self) {
        self.form.photo_url.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn stored_record() -> EmployeeRecord {
        serde_json::from_value(json!({
            "id": 1,
            "login": "ivan",
            "initials": "ИИ",
            "name": "Иванов Иван Иванович",
            "position": "Водитель",
            "rate": "1 850 ₽/смена",
            "experience": "4 года 7 мес.",
            "status": "Активен · Основное место",
            "salary": "92 430 ₽",
            "hours": "152 ч",
            "hours_detail": "Переработка: 18 ч · Ночные: 12 ч.",
            "penalties": [
                "Штрафов: 1 — превышение времени стоянки",
                "Прогулы: нет",
                "Замечания: опоздание на планёрку",
                "Предупреждение от 12.02"
            ],
            "absences": ["Больничные: 3 дня", "Отпуск: 14/28 дней"],
            "error_text": "",
            "photo_url": null,
            "warehouse": "Челябинск · Склад №2",
            "shift_role": "loader",
            "shift_rate": 2100,
            "on_shift": true
        }))
        .unwrap()
    }

    #[test]
    fn test_hours_detail_round_trip() {
        for (overtime, night) in [(0, 0), (18, 12), (1, 999), (240, 0)] {
            let detail = HoursDetail { overtime, night };
            assert_eq!(HoursDetail::decode(&detail.encode()), detail);
        }
    }

    #[test]
    fn test_oversized_counters_saturate() {
        let mut form = AdminForm::default();
        form.set(FormField::Overtime, "99999999999".to_string());
        form.set(FormField::Fines, "42949672960".to_string());

        assert_eq!(form.hours_detail().overtime, u32::MAX);
        assert_eq!(form.penalty_summary().fines, u32::MAX);
        assert_eq!(
            HoursDetail::decode("Переработка: 99999999999 ч · Ночные: 3 ч."),
            HoursDetail { overtime: u32::MAX, night: 3 }
        );
        assert_eq!(parse_counter(""), 0);
    }

    #[test]
    fn test_hours_detail_template() {
        let detail = HoursDetail { overtime: 6, night: 4 };
        assert_eq!(detail.encode(), "Переработка: 6 ч · Ночные: 4 ч.");
    }

    #[test]
    fn test_unrecognised_hours_detail_decodes_to_zero() {
        assert_eq!(HoursDetail::decode(""), HoursDetail::default());
        assert_eq!(HoursDetail::decode("много часов"), HoursDetail::default());
        assert_eq!(
            HoursDetail::decode("Ночные: 7 ч."),
            HoursDetail { overtime: 0, night: 7 }
        );
    }

    #[test]
    fn test_penalties_decode_structured_and_other_lines() {
        let (summary, other) = PenaltySummary::decode(&[
            "Штрафов: 2",
            "Прогулы: нет",
            "Замечания:   опоздание",
            "Предупреждение",
        ]);
        assert_eq!(summary.fines, 2);
        assert_eq!(summary.absences, 0);
        assert_eq!(summary.comment, "опоздание");
        assert_eq!(other, vec!["Предупреждение"]);
    }

    #[test]
    fn test_penalties_encode_omits_blank_comment() {
        let summary = PenaltySummary {
            fines: 1,
            absences: 3,
            comment: "  ".to_string(),
        };
        assert_eq!(summary.encode(), vec!["Штрафов: 1", "Прогулы: 3"]);
    }

    #[test]
    fn test_penalties_round_trip() {
        let summary = PenaltySummary {
            fines: 4,
            absences: 1,
            comment: "нарушение ТБ".to_string(),
        };
        let (decoded, other) = PenaltySummary::decode(&summary.encode());
        assert_eq!(decoded, summary);
        assert!(other.is_empty());
    }

    #[test]
    fn test_form_decodes_record() {
        let form = AdminForm::from_record(&stored_record());

        assert_eq!(form.rate, "1850");
        assert_eq!(form.salary, "92430");
        assert_eq!(form.hours, "152");
        assert_eq!(form.overtime, "18");
        assert_eq!(form.night_hours, "12");
        assert_eq!(form.fines, "1");
        assert_eq!(form.absence_count, "0");
        assert_eq!(form.penalty_comment, "опоздание на планёрку");
        assert_eq!(form.other_penalties, vec!["Предупреждение от 12.02"]);
        assert_eq!(form.absences, "Больничные: 3 дня\nОтпуск: 14/28 дней");
        assert_eq!(form.shift_rate, "2100");
        assert!(form.on_shift);
        assert!(form.password.is_empty());
    }

    #[test]
    fn test_form_defaults_for_missing_fields() {
        let form = AdminForm::from_record(&EmployeeRecord::default());
        assert_eq!(form.status, DEFAULT_STATUS);
        assert_eq!(form.warehouse, DEFAULT_WAREHOUSE);
        assert_eq!(form.overtime, "0");
        assert_eq!(form.fines, "0");
        assert_eq!(form.shift_rate, "");
    }

    #[test]
    fn test_numeric_fields_are_sanitised_on_input() {
        let mut form = AdminForm::default();
        form.set(FormField::Salary, "92 430 ₽".to_string());
        form.set(FormField::Overtime, "1a2".to_string());
        form.set(FormField::Name, "Иван 2".to_string());

        assert_eq!(form.salary, "92430");
        assert_eq!(form.get(FormField::Overtime), "12");
        assert_eq!(form.name, "Иван 2");
    }

    #[test]
    fn test_existing_record_with_blank_password_omits_field() {
        let form = AdminForm::from_record(&stored_record());
        let payload = form.to_payload(EditorTarget::Existing(1)).unwrap();

        assert_eq!(payload.password, None);
        let body = serde_json::to_value(&payload).unwrap();
        assert!(body.get("password").is_none());
        assert!(body.get("photo_url").is_some());
    }

    #[test]
    fn test_new_record_requires_login_and_password() {
        let mut form = AdminForm::default();
        form.set(FormField::Login, "petr".to_string());
        assert_eq!(
            form.to_payload(EditorTarget::New),
            Err(FormError::MissingCredentials)
        );

        form.set(FormField::Login, "  ".to_string());
        form.set(FormField::Password, "secret".to_string());
        assert_eq!(
            form.to_payload(EditorTarget::New),
            Err(FormError::MissingCredentials)
        );
    }

    #[test]
    fn test_new_record_payload() {
        let mut form = AdminForm::default();
        form.set(FormField::Login, " Petr ".to_string());
        form.set(FormField::Password, "secret".to_string());
        form.set(FormField::Overtime, "5".to_string());
        form.set(FormField::Fines, "2".to_string());
        form.set(FormField::Absences, "Отпуск: 7 дней\n\n".to_string());

        let payload = form.to_payload(EditorTarget::New).unwrap();
        assert_eq!(payload.login, "petr");
        assert_eq!(payload.password.as_deref(), Some("secret"));
        assert_eq!(payload.hours_detail, "Переработка: 5 ч · Ночные: 0 ч.");
        assert_eq!(payload.penalties, vec!["Штрафов: 2", "Прогулы: 0"]);
        assert_eq!(payload.absences, vec!["Отпуск: 7 дней"]);
        assert_eq!(payload.shift_rate, None);
        assert_eq!(payload.salary, "");

        let body = serde_json::to_value(&payload).unwrap();
        assert_eq!(body["shift_rate"], serde_json::Value::Null);
        assert_eq!(body["error_text"], "");
    }

    #[test]
    fn test_record_survives_decode_encode() {
        let record = stored_record();
        let payload = AdminForm::from_record(&record)
            .to_payload(EditorTarget::Existing(1))
            .unwrap();

        assert_eq!(payload.hours_detail, record.hours_detail.clone().unwrap());
        assert_eq!(
            payload.penalties,
            vec![
                "Штрафов: 1",
                "Прогулы: 0",
                "Замечания: опоздание на планёрку",
                "Предупреждение от 12.02"
            ]
        );
        assert_eq!(payload.absences, record.absences);
        assert_eq!(payload.shift_rate, Some(2100));
    }

    #[test]
    fn test_editor_titles_and_targets() {
        let mut editor = AdminEditor::default();
        assert_eq!(editor.title(), "Новый сотрудник");
        assert_eq!(editor.mode_label(), "создание");
        assert_eq!(editor.selected_id(), Err(FormError::NoEmployeeSelected));

        editor.load(&stored_record());
        assert_eq!(editor.title(), "Редактирование сотрудника");
        assert_eq!(editor.mode_label(), "#1");
        assert_eq!(editor.selected_id(), Ok(1));

        editor.reset();
        assert_eq!(editor.target, EditorTarget::New);
        assert_eq!(editor.form, AdminForm::default());
    }

    #[test]
    fn test_photo_upload_only_touches_url() {
        let mut editor = AdminEditor::default();
        editor.load(&stored_record());
        let before = editor.form.clone();

        editor.photo_uploaded(Some("/static/photos/1.jpg".to_string()));
        assert_eq!(editor.form.photo_url, "/static/photos/1.jpg");
        assert_eq!(
            AdminForm { photo_url: before.photo_url.clone(), ..editor.form.clone() },
            before
        );

        editor.photo_uploaded(None);
        assert_eq!(editor.form.photo_url, "/static/photos/1.jpg");

        editor.clear_photo();
        assert!(editor.form.photo_url.is_empty());
    }
}
