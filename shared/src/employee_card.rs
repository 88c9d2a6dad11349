//! # Employee Card
//!
//! View/edit state machine for the self-service card, plus the read-only
//! projection of a record into display strings.
//!
//! The card always (re)enters [`CardMode::View`] when a record arrives from
//! the backend. Editing is user-initiated; a save keeps the card in edit mode
//! until the backend confirms, and only one save may be outstanding.

use thiserror::Error;

use crate::formatting::{join_lines, or_dash, shift_role_label, split_lines, PLACEHOLDER};
use crate::models::{CardUpdateRequest, EmployeeRecord, HistoryEntry};
use crate::session::Credentials;
use crate::single_flight::{AlreadyInFlight, SingleFlight};

const DEFAULT_SCHEDULE: &str = "По данным системы";
const EMPTY_HISTORY: &str = "Изменения пока не зафиксированы";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardMode {
    #[default]
    View,
    Edit,
}

impl CardMode {
    pub fn tag(&self) -> &'static str {
        match self {
            CardMode::View => "Просмотр",
            CardMode::Edit => "Редактирование",
        }
    }
}

/// Fields an employee may change on their own card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardField {
    Status,
    Responsibilities,
    Skills,
    Roles,
}

/// Local, not yet saved values of the editable fields. List fields hold the
/// raw textarea text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardDraft {
    pub status: String,
    pub responsibilities: String,
    pub skills: String,
    pub roles: String,
}

impl CardDraft {
    pub fn from_record(record: &EmployeeRecord) -> Self {
        Self {
            status: record.status.clone().unwrap_or_default(),
            responsibilities: join_lines(&record.responsibilities),
            skills: join_lines(&record.skills),
            roles: join_lines(&record.roles),
        }
    }

    pub fn get(&self, field: CardField) -> &str {
        match field {
            CardField::Status => &self.status,
            CardField::Responsibilities => &self.responsibilities,
            CardField::Skills => &self.skills,
            CardField::Roles => &self.roles,
        }
    }

    fn set(&mut self, field: CardField, value: String) {
        match field {
            CardField::Status => self.status = value,
            CardField::Responsibilities => self.responsibilities = value,
            CardField::Skills => self.skills = value,
            CardField::Roles => self.roles = value,
        }
    }

    fn to_request(&self, credentials: &Credentials) -> CardUpdateRequest {
        let status = self.status.trim();
        CardUpdateRequest {
            login: credentials.login.clone(),
            password: credentials.password.clone(),
            responsibilities: split_lines(&self.responsibilities),
            skills: split_lines(&self.skills),
            roles: split_lines(&self.roles),
            status: (!status.is_empty()).then(|| status.to_string()),
        }
    }
}

/// Which controls are shown and enabled in the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardControls {
    pub fields_enabled: bool,
    pub edit_visible: bool,
    pub save_visible: bool,
    pub cancel_visible: bool,
    pub save_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("Карточка не в режиме редактирования")]
    NotEditing,
    #[error(transparent)]
    InFlight(#[from] AlreadyInFlight),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardEditor {
    mode: CardMode,
    draft: CardDraft,
    save_guard: SingleFlight,
    error: Option<String>,
}

impl CardEditor {
    pub fn loaded(record: &EmployeeRecord) -> Self {
        let mut editor = Self::default();
        editor.load(record);
        editor
    }

    /// Apply a record fresh from the backend. Always returns to view mode.
    pub fn load(&mut self, record: &EmployeeRecord) {
        self.mode = CardMode::View;
        self.draft = CardDraft::from_record(record);
        self.error = None;
    }

    pub fn mode(&self) -> CardMode {
        self.mode
    }

    pub fn draft(&self) -> &CardDraft {
        &self.draft
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_saving(&self) -> bool {
        self.save_guard.is_busy()
    }

    pub fn begin_edit(&mut self) {
        self.mode = CardMode::Edit;
        self.error = None;
    }

    /// Update a field. Returns `false` (and changes nothing) in view mode.
    pub fn set_field(&mut self, field: CardField, value: String) -> bool {
        if self.mode != CardMode::Edit {
            return false;
        }
        self.draft.set(field, value);
        true
    }

    pub fn controls(&self) -> CardControls {
        let editing = self.mode == CardMode::Edit;
        CardControls {
            fields_enabled: editing,
            edit_visible: !editing,
            save_visible: editing,
            cancel_visible: editing,
            save_enabled: editing && !self.save_guard.is_busy(),
        }
    }

    /// Serialize the draft for sending and mark the save as in flight.
    pub fn begin_save(&mut self, credentials: &Credentials) -> Result<CardUpdateRequest, CardError> {
        if self.mode != CardMode::Edit {
            return Err(CardError::NotEditing);
        }
        self.save_guard.begin()?;
        self.error = None;
        Ok(self.draft.to_request(credentials))
    }

    /// The backend accepted the save and returned the updated record.
    pub fn save_succeeded(&mut self, record: &EmployeeRecord) {
        self.save_guard.finish();
        self.load(record);
    }

    /// Fetching the card failed. Mode and draft are left as they were.
    pub fn load_failed(&mut self, message: String) {
        self.error = Some(message);
    }

    /// The save failed: stay in edit mode with the draft untouched.
    pub fn save_failed(&mut self, message: String) {
        self.save_guard.finish();
        self.error = Some(message);
    }

    /// Drop local edits. The caller re-fetches the authoritative record.
    pub fn cancel(&mut self, last_loaded: Option<&EmployeeRecord>) {
        self.mode = CardMode::View;
        self.error = None;
        if let Some(record) = last_loaded {
            self.draft = CardDraft::from_record(record);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    pub timestamp: String,
    pub field: String,
    pub old: String,
    pub new: String,
}

impl From<&HistoryEntry> for HistoryRow {
    fn from(entry: &HistoryEntry) -> Self {
        Self {
            timestamp: entry.timestamp.clone(),
            field: entry.field.clone(),
            old: entry.old.clone().unwrap_or_else(|| PLACEHOLDER.to_string()),
            new: entry.new.clone().unwrap_or_else(|| PLACEHOLDER.to_string()),
        }
    }
}

/// Read-only projection of a record onto the card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub full_name: String,
    pub position: String,
    pub department: String,
    pub warehouse: String,
    pub shift_role: String,
    pub rate: String,
    pub experience: String,
    pub schedule: String,
    pub status: String,
    pub last_status_change: String,
    /// Newest first.
    pub history: Vec<HistoryRow>,
}

impl CardView {
    pub fn from_record(record: &EmployeeRecord) -> Self {
        Self {
            full_name: record.display_name().to_string(),
            position: record.position.clone(),
            department: or_dash(record.department.as_deref()),
            warehouse: or_dash(record.warehouse.as_deref()),
            shift_role: shift_role_label(record.shift_role.as_deref()),
            rate: or_dash(record.rate.as_deref()),
            experience: or_dash(record.experience.as_deref()),
            schedule: match record.schedule.as_deref() {
                Some(schedule) if !schedule.is_empty() => schedule.to_string(),
                _ => DEFAULT_SCHEDULE.to_string(),
            },
            status: or_dash(record.status.as_deref()),
            last_status_change: or_dash(record.last_status_change()),
            history: record.history.iter().rev().map(HistoryRow::from).collect(),
        }
    }

    pub fn empty_history_message() -> &'static str {
        EMPTY_HISTORY
    }
}
