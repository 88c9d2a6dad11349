//! Payment ledger rules shared by the admin panel and the employee's
//! balance history.

use thiserror::Error;

use crate::formatting::{extract_signed_digits, format_currency, format_timestamp, PLACEHOLDER};
use crate::models::{AddPaymentRequest, PaymentEntry, PaymentKind};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    #[error("Сначала выберите сотрудника")]
    NoEmployeeSelected,
    #[error("Укажите сумму операции")]
    MissingAmount,
}

/// Add-payment form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentDraft {
    pub kind: PaymentKind,
    pub amount: String,
    pub comment: String,
}

impl Default for PaymentDraft {
    fn default() -> Self {
        Self {
            kind: PaymentKind::Salary,
            amount: String::new(),
            comment: String::new(),
        }
    }
}

impl PaymentDraft {
    pub fn set_kind(&mut self, value: &str) {
        self.kind = PaymentKind::from_value(value);
    }

    /// Amount input keeps digits and an optional leading minus for corrections.
    pub fn set_amount(&mut self, value: &str) {
        self.amount = extract_signed_digits(value);
    }

    pub fn set_comment(&mut self, value: String) {
        self.comment = value;
    }

    pub fn to_request(&self) -> Result<AddPaymentRequest, PaymentError> {
        let amount: i64 = self.amount.trim().parse().unwrap_or(0);
        if amount == 0 {
            return Err(PaymentError::MissingAmount);
        }
        Ok(AddPaymentRequest {
            kind: self.kind,
            amount,
            comment: self.comment.trim().to_string(),
        })
    }

    /// Clear amount and comment after a successful add; the kind is kept.
    pub fn clear(&mut self) {
        self.amount.clear();
        self.comment.clear();
    }
}

/// Completed change to a ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerMutation {
    Added,
    Deleted,
}

/// Data that has to be fetched again after a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    Payments,
    Record,
}

impl LedgerMutation {
    /// The aggregate salary on the record may depend on the payment totals,
    /// so both the list and the record are reloaded.
    pub fn refreshes(&self) -> [Refresh; 2] {
        match self {
            LedgerMutation::Added | LedgerMutation::Deleted => [Refresh::Payments, Refresh::Record],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRow {
    pub id: i64,
    pub created_at: String,
    pub kind_label: &'static str,
    pub amount: String,
    pub comment: String,
    pub is_deduction: bool,
}

impl From<&PaymentEntry> for PaymentRow {
    fn from(entry: &PaymentEntry) -> Self {
        let comment = entry
            .comment
            .as_deref()
            .map(str::trim)
            .filter(|comment| !comment.is_empty())
            .unwrap_or(PLACEHOLDER);

        Self {
            id: entry.id,
            created_at: format_timestamp(&entry.created_at),
            kind_label: entry.kind.label(),
            amount: format_currency(Some(entry.amount)),
            comment: comment.to_string(),
            is_deduction: entry.kind.is_deduction() || entry.amount < 0.0,
        }
    }
}

/// What a payments table shows.
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerView {
    Loading,
    Empty,
    Failed(String),
    Rows(Vec<PaymentRow>),
}

impl LedgerView {
    pub fn from_entries(entries: &[PaymentEntry]) -> Self {
        if entries.is_empty() {
            LedgerView::Empty
        } else {
            LedgerView::Rows(entries.iter().map(PaymentRow::from).collect())
        }
    }

    /// Single-row message shown instead of entries, if any.
    pub fn message(&self) -> Option<String> {
        match self {
            LedgerView::Loading => Some("Загрузка...".to_string()),
            LedgerView::Empty => Some("Операций пока нет".to_string()),
            LedgerView::Failed(error) => Some(format!("Ошибка загрузки: {}", error)),
            LedgerView::Rows(_) => None,
        }
    }
}

/// Title of the employee's balance history modal.
pub fn balance_history_title(active_month: &str) -> String {
    if active_month.is_empty() || active_month == PLACEHOLDER {
        "История баланса".to_string()
    } else {
        format!("История баланса · {}", active_month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, kind: PaymentKind, amount: f64, comment: Option<&str>) -> PaymentEntry {
        PaymentEntry {
            id,
            kind,
            amount,
            comment: comment.map(str::to_string),
            created_at: "2024-03-05T12:30:00".to_string(),
        }
    }

    #[test]
    fn test_draft_rejects_missing_amount() {
        let mut draft = PaymentDraft::default();
        assert_eq!(draft.to_request(), Err(PaymentError::MissingAmount));

        draft.set_amount("0");
        assert_eq!(draft.to_request(), Err(PaymentError::MissingAmount));

        draft.set_amount("руб.");
        assert_eq!(draft.amount, "");
        assert_eq!(draft.to_request(), Err(PaymentError::MissingAmount));
    }

    #[test]
    fn test_draft_keeps_negative_amount() {
        let mut draft = PaymentDraft::default();
        draft.set_kind("deduction");
        draft.set_amount("-500");
        assert_eq!(draft.amount, "-500");
        assert_eq!(draft.to_request().unwrap().amount, -500);

        draft.set_amount("-");
        assert_eq!(draft.to_request(), Err(PaymentError::MissingAmount));

        draft.set_amount("-0");
        assert_eq!(draft.to_request(), Err(PaymentError::MissingAmount));
    }

    #[test]
    fn test_draft_builds_request() {
        let mut draft = PaymentDraft::default();
        draft.set_kind("bonus");
        draft.set_amount("5 000 ₽");
        draft.set_comment("  Премия за март ".to_string());

        let request = draft.to_request().unwrap();
        assert_eq!(request.kind, PaymentKind::Bonus);
        assert_eq!(request.amount, 5000);
        assert_eq!(request.comment, "Премия за март");

        draft.clear();
        assert_eq!(draft.kind, PaymentKind::Bonus);
        assert!(draft.amount.is_empty());
        assert!(draft.comment.is_empty());
    }

    #[test]
    fn test_every_mutation_refreshes_payments_and_record() {
        for mutation in [LedgerMutation::Added, LedgerMutation::Deleted] {
            let refreshes = mutation.refreshes();
            assert!(refreshes.contains(&Refresh::Payments));
            assert!(refreshes.contains(&Refresh::Record));
        }
    }

    #[test]
    fn test_payment_row_formatting() {
        let row = PaymentRow::from(&entry(3, PaymentKind::Fine, -1500.0, Some("  ")));
        assert_eq!(row.id, 3);
        assert_eq!(row.created_at, "05.03.2024, 12:30");
        assert_eq!(row.kind_label, "Штраф");
        assert_eq!(row.amount, "-1\u{a0}500 ₽");
        assert_eq!(row.comment, "—");
        assert!(row.is_deduction);

        let row = PaymentRow::from(&entry(4, PaymentKind::Salary, 45000.0, Some("Аванс учтён")));
        assert_eq!(row.comment, "Аванс учтён");
        assert!(!row.is_deduction);
    }

    #[test]
    fn test_ledger_view_states() {
        assert_eq!(LedgerView::from_entries(&[]), LedgerView::Empty);
        assert_eq!(
            LedgerView::Empty.message().as_deref(),
            Some("Операций пока нет")
        );
        assert_eq!(LedgerView::Loading.message().as_deref(), Some("Загрузка..."));
        assert!(LedgerView::Failed("HTTP 500".to_string())
            .message()
            .unwrap()
            .contains("HTTP 500"));

        let view = LedgerView::from_entries(&[entry(1, PaymentKind::Bonus, 100.0, None)]);
        assert!(view.message().is_none());
        match view {
            LedgerView::Rows(rows) => assert_eq!(rows.len(), 1),
            other => panic!("expected rows, got {:?}", other),
        }
    }

    #[test]
    fn test_balance_history_title() {
        assert_eq!(balance_history_title("—"), "История баланса");
        assert_eq!(balance_history_title("март 2024"), "История баланса · март 2024");
    }
}
