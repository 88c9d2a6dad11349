use serde::{Deserialize, Deserializer, Serialize};

use crate::session::Role;

/// Treat an explicit JSON `null` the same as a missing field.
///
/// The backend emits `null` for unset strings and lists, and every field below
/// already falls back to `Default` when absent.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Canonical employee record as held by the backend.
///
/// The same shape is returned by the login endpoint (`data`), the employee
/// card endpoints and the admin detail endpoint; each of them fills a
/// different subset of the fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeRecord {
    #[serde(alias = "employee_id")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "nullable")]
    pub login: String,
    #[serde(deserialize_with = "nullable")]
    pub initials: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    pub full_name: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub position: String,
    pub department: Option<String>,
    pub warehouse: Option<String>,
    pub shift_role: Option<String>,
    pub rate: Option<String>,
    pub experience: Option<String>,
    pub schedule: Option<String>,
    pub status: Option<String>,
    pub salary: Option<String>,
    pub hours: Option<String>,
    #[serde(alias = "hoursDetail")]
    pub hours_detail: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub penalties: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub absences: Vec<String>,
    #[serde(alias = "errorText")]
    pub error_text: Option<String>,
    pub photo_url: Option<String>,
    pub shift_rate: Option<i64>,
    #[serde(deserialize_with = "nullable")]
    pub on_shift: bool,
    #[serde(deserialize_with = "nullable")]
    pub is_active: bool,
    #[serde(deserialize_with = "nullable")]
    pub responsibilities: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub roles: Vec<String>,
    /// Status changes, oldest first. The last entry is the current status.
    #[serde(deserialize_with = "nullable")]
    pub history: Vec<HistoryEntry>,
    /// Month summaries in chronological order, exactly as received.
    #[serde(deserialize_with = "nullable")]
    pub months: Vec<MonthSummary>,
}

impl EmployeeRecord {
    /// Name shown on the card: `full_name` when the backend provides one.
    pub fn display_name(&self) -> &str {
        match self.full_name.as_deref() {
            Some(full_name) if !full_name.is_empty() => full_name,
            _ => &self.name,
        }
    }

    /// Timestamp of the most recent status change, if any.
    pub fn last_status_change(&self) -> Option<&str> {
        self.history
            .last()
            .map(|entry| entry.timestamp.as_str())
            .filter(|timestamp| !timestamp.is_empty())
    }
}

/// One recorded change of a card field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryEntry {
    #[serde(deserialize_with = "nullable")]
    pub timestamp: String,
    #[serde(deserialize_with = "nullable")]
    pub field: String,
    pub old: Option<String>,
    pub new: Option<String>,
}

/// Aggregated income, hours and discipline data for one calendar month.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonthSummary {
    #[serde(deserialize_with = "nullable")]
    pub key: String,
    #[serde(deserialize_with = "nullable")]
    pub short: String,
    #[serde(rename = "fullName", alias = "full_name", deserialize_with = "nullable")]
    pub full_name: String,
    pub year: i32,
    /// Calendar month, 1-based.
    pub month: u32,
    pub income: Option<f64>,
    pub salary: Option<f64>,
    pub hours: Option<f64>,
    #[serde(deserialize_with = "nullable")]
    pub penalties: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub absences: Vec<String>,
}

/// Row of the admin employee list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeSummary {
    pub id: i64,
    #[serde(deserialize_with = "nullable")]
    pub login: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub position: String,
    pub shift_role: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub on_shift: bool,
    #[serde(deserialize_with = "nullable")]
    pub is_active: bool,
    pub photo_url: Option<String>,
}

/// Kind of a ledger operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentKind {
    Salary,
    Bonus,
    Advance,
    Fine,
    Deduction,
    #[serde(other)]
    Other,
}

impl PaymentKind {
    /// Kinds an admin can pick when adding an operation.
    pub const SELECTABLE: [PaymentKind; 5] = [
        PaymentKind::Salary,
        PaymentKind::Bonus,
        PaymentKind::Advance,
        PaymentKind::Fine,
        PaymentKind::Deduction,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentKind::Salary => "salary",
            PaymentKind::Bonus => "bonus",
            PaymentKind::Advance => "advance",
            PaymentKind::Fine => "fine",
            PaymentKind::Deduction => "deduction",
            PaymentKind::Other => "other",
        }
    }

    pub fn from_value(value: &str) -> Self {
        Self::SELECTABLE
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .unwrap_or(PaymentKind::Other)
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentKind::Salary => "Зарплата",
            PaymentKind::Bonus => "Премия",
            PaymentKind::Advance => "Аванс",
            PaymentKind::Fine => "Штраф",
            PaymentKind::Deduction => "Удержание",
            PaymentKind::Other => "Операция",
        }
    }

    /// Deduction kinds lower the balance; the rest are accruals.
    pub fn is_deduction(&self) -> bool {
        matches!(
            self,
            PaymentKind::Advance | PaymentKind::Fine | PaymentKind::Deduction
        )
    }
}

/// Ledger entry. Created and deleted by an admin, never edited in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentEntry {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: PaymentKind,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddPaymentRequest {
    #[serde(rename = "type")]
    pub kind: PaymentKind,
    pub amount: i64,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub role: Role,
    pub login: String,
    pub password: String,
}

/// Response of `/api/login`. `data` holds the employee record for employees
/// and a small profile object for admins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub role: Role,
    pub login: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

/// Fields the employee may change on their own card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardUpdateRequest {
    pub login: String,
    pub password: String,
    pub responsibilities: Vec<String>,
    pub skills: Vec<String>,
    pub roles: Vec<String>,
    pub status: Option<String>,
}

/// Body of admin create/update calls.
///
/// Every field is always sent; only `password` is omitted when the admin left
/// it blank on an existing record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeePayload {
    pub login: String,
    pub initials: String,
    pub name: String,
    pub position: String,
    pub department: String,
    pub rate: String,
    pub experience: String,
    pub status: String,
    pub salary: String,
    pub hours: String,
    pub hours_detail: String,
    pub penalties: Vec<String>,
    pub absences: Vec<String>,
    pub error_text: String,
    pub photo_url: String,
    pub warehouse: String,
    pub shift_role: String,
    pub on_shift: bool,
    pub shift_rate: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftUpdate {
    pub on_shift: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhotoUploadResponse {
    #[serde(default)]
    pub photo_url: Option<String>,
}

/// Error body of a rejected request (`{"detail": ...}`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorDetail {
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::Null => None,
            serde_json::Value::String(text) => Some(text.clone()),
            other => Some(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_accepts_nulls_and_camel_case_aliases() {
        let record: EmployeeRecord = serde_json::from_value(json!({
            "initials": "ИИ",
            "name": "Иванов Иван Иванович",
            "position": null,
            "rate": "1 850 ₽/смена",
            "hoursDetail": "Переработка: 18 ч · Ночные: 12 ч.",
            "errorText": "",
            "penalties": null,
            "photo_url": null
        }))
        .unwrap();

        assert_eq!(record.position, "");
        assert_eq!(
            record.hours_detail.as_deref(),
            Some("Переработка: 18 ч · Ночные: 12 ч.")
        );
        assert_eq!(record.error_text.as_deref(), Some(""));
        assert!(record.penalties.is_empty());
        assert!(record.months.is_empty());
    }

    #[test]
    fn test_record_display_name_prefers_full_name() {
        let mut record = EmployeeRecord {
            name: "Иван".to_string(),
            ..Default::default()
        };
        assert_eq!(record.display_name(), "Иван");

        record.full_name = Some("Иванов Иван Иванович".to_string());
        assert_eq!(record.display_name(), "Иванов Иван Иванович");
    }

    #[test]
    fn test_last_status_change_uses_final_history_entry() {
        let record: EmployeeRecord = serde_json::from_value(json!({
            "history": [
                {"timestamp": "2024-01-10 09:00", "field": "status", "old": null, "new": "Активен"},
                {"timestamp": "2024-02-01 12:30", "field": "status", "old": "Активен", "new": "Отпуск"}
            ]
        }))
        .unwrap();

        assert_eq!(record.last_status_change(), Some("2024-02-01 12:30"));
        assert_eq!(EmployeeRecord::default().last_status_change(), None);
    }

    #[test]
    fn test_month_summary_uses_camel_case_full_name() {
        let month: MonthSummary = serde_json::from_value(json!({
            "key": "2024-03",
            "short": "мар",
            "fullName": "Март",
            "year": 2024,
            "month": 3,
            "income": 91000,
            "salary": null,
            "hours": 152
        }))
        .unwrap();

        assert_eq!(month.full_name, "Март");
        assert_eq!(month.income, Some(91000.0));
        assert_eq!(month.salary, None);

        let value = serde_json::to_value(&month).unwrap();
        assert_eq!(value["fullName"], "Март");
    }

    #[test]
    fn test_payment_kind_wire_names() {
        let entry: PaymentEntry = serde_json::from_value(json!({
            "id": 7,
            "type": "bonus",
            "amount": 5000,
            "comment": "Премия за квартал",
            "created_at": "2024-03-05T12:30:00"
        }))
        .unwrap();
        assert_eq!(entry.kind, PaymentKind::Bonus);

        let unknown: PaymentEntry =
            serde_json::from_value(json!({"id": 8, "type": "refund", "amount": 10})).unwrap();
        assert_eq!(unknown.kind, PaymentKind::Other);

        let request = AddPaymentRequest {
            kind: PaymentKind::Fine,
            amount: -500,
            comment: String::new(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"type": "fine", "amount": -500, "comment": ""})
        );
    }

    #[test]
    fn test_payment_kind_from_value() {
        assert_eq!(PaymentKind::from_value("advance"), PaymentKind::Advance);
        assert_eq!(PaymentKind::from_value("nonsense"), PaymentKind::Other);
        assert!(PaymentKind::Fine.is_deduction());
        assert!(!PaymentKind::Salary.is_deduction());
    }

    #[test]
    fn test_error_detail_message() {
        let text: ErrorDetail = serde_json::from_value(json!({"detail": "Логин уже занят"})).unwrap();
        assert_eq!(text.message().as_deref(), Some("Логин уже занят"));

        let missing: ErrorDetail = serde_json::from_value(json!({})).unwrap();
        assert_eq!(missing.message(), None);

        let structured: ErrorDetail =
            serde_json::from_value(json!({"detail": [{"msg": "field required"}]})).unwrap();
        assert!(structured.message().unwrap().contains("field required"));
    }
}
