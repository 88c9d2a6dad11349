//! Employee wallet summary shown beside the income chart.

use crate::formatting::PLACEHOLDER;
use crate::models::EmployeeRecord;

const INITIALS_FALLBACK: &str = "••";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletView {
    pub initials: String,
    pub name: String,
    pub position: String,
    pub rate: String,
    pub experience: String,
    pub status: String,
    pub salary: String,
    /// Balance in the page header; the salary string or the placeholder.
    pub balance: String,
    pub hours: String,
    pub hours_detail: String,
    pub penalties: Vec<String>,
    pub absences: Vec<String>,
    pub error_text: String,
}

fn text_or(value: Option<&str>, fallback: &str) -> String {
    match value {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => fallback.to_string(),
    }
}

impl WalletView {
    pub fn from_record(record: &EmployeeRecord) -> Self {
        Self {
            initials: text_or(Some(&record.initials), INITIALS_FALLBACK),
            name: record.name.clone(),
            position: record.position.clone(),
            rate: text_or(record.rate.as_deref(), ""),
            experience: text_or(record.experience.as_deref(), ""),
            status: text_or(record.status.as_deref(), ""),
            salary: text_or(record.salary.as_deref(), PLACEHOLDER),
            balance: text_or(record.salary.as_deref(), PLACEHOLDER),
            hours: text_or(record.hours.as_deref(), PLACEHOLDER),
            hours_detail: text_or(record.hours_detail.as_deref(), PLACEHOLDER),
            penalties: record.penalties.clone(),
            absences: record.absences.clone(),
            error_text: text_or(record.error_text.as_deref(), ""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wallet_view_from_full_record() {
        let record: EmployeeRecord = serde_json::from_value(json!({
            "initials": "ИИ",
            "name": "Иванов Иван Иванович",
            "position": "Водитель",
            "salary": "92 430 ₽",
            "hours": "152 ч",
            "hoursDetail": "Переработка: 18 ч · Ночные: 12 ч.",
            "penalties": ["Штрафов: 1"],
            "errorText": "Проверьте табель за март"
        }))
        .unwrap();

        let view = WalletView::from_record(&record);
        assert_eq!(view.initials, "ИИ");
        assert_eq!(view.balance, "92 430 ₽");
        assert_eq!(view.hours_detail, "Переработка: 18 ч · Ночные: 12 ч.");
        assert_eq!(view.penalties, vec!["Штрафов: 1"]);
        assert_eq!(view.error_text, "Проверьте табель за март");
    }

    #[test]
    fn test_wallet_view_fallbacks() {
        let view = WalletView::from_record(&EmployeeRecord::default());
        assert_eq!(view.initials, "••");
        assert_eq!(view.salary, "—");
        assert_eq!(view.balance, "—");
        assert_eq!(view.hours, "—");
        assert_eq!(view.rate, "");
        assert!(view.absences.is_empty());
    }
}
