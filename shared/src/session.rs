//! Authenticated identity for the lifetime of the tab.
//!
//! A [`Session`] is created on login and dropped on logout. The only other
//! way to obtain one is [`Session::rehydrate`], which restores an employee
//! from the entry persisted in local storage. Admin sessions are never
//! persisted.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{EmployeeRecord, LoginResponse};

/// Local-storage key of the persisted employee.
pub const STORAGE_KEY: &str = "lw_user";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Employee,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "employee",
            Role::Admin => "admin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Employee => "Сотрудник",
            Role::Admin => "Администратор",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Введите логин и пароль")]
    MissingCredentials,
    #[error("Неверный логин или пароль")]
    InvalidCredentials,
    #[error("Ошибка авторизации")]
    Rejected,
    #[error("Не удалось связаться с сервером")]
    Unreachable,
    #[error("Некорректный ответ сервера")]
    MalformedProfile,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub login: String,
    pub password: String,
}

impl Credentials {
    /// Normalise raw login-form input. Logins are case-insensitive.
    pub fn from_input(login: &str, password: &str) -> Result<Self, LoginError> {
        let login = login.trim().to_lowercase();
        if login.is_empty() || password.is_empty() {
            return Err(LoginError::MissingCredentials);
        }
        Ok(Self {
            login,
            password: password.to_string(),
        })
    }
}

/// Shape of the persisted entry: the login response plus the secret.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredUser {
    pub role: Role,
    pub login: String,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub data: EmployeeRecord,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub role: Role,
    pub credentials: Credentials,
    /// Employee being edited in the admin dashboard.
    pub selected_employee_id: Option<i64>,
    /// Last record received for the logged-in employee.
    pub record: Option<EmployeeRecord>,
}

impl Session {
    pub fn employee(credentials: Credentials, record: EmployeeRecord) -> Self {
        Self {
            role: Role::Employee,
            credentials,
            selected_employee_id: None,
            record: Some(record),
        }
    }

    pub fn admin(credentials: Credentials) -> Self {
        Self {
            role: Role::Admin,
            credentials,
            selected_employee_id: None,
            record: None,
        }
    }

    /// Build a session from a successful login. The role comes from the
    /// backend, not from what the user picked in the form.
    pub fn from_login(credentials: Credentials, response: LoginResponse) -> Result<Self, LoginError> {
        match response.role {
            Role::Admin => Ok(Self::admin(credentials)),
            Role::Employee => {
                let record: EmployeeRecord = serde_json::from_value(response.data)
                    .map_err(|_| LoginError::MalformedProfile)?;
                Ok(Self::employee(credentials, record))
            }
        }
    }

    /// Restore an employee from local storage. Admin entries and entries
    /// without a secret are ignored.
    pub fn rehydrate(stored: StoredUser) -> Option<Self> {
        if stored.role != Role::Employee {
            return None;
        }
        let password = stored.password.filter(|password| !password.is_empty())?;
        Some(Self::employee(
            Credentials {
                login: stored.login,
                password,
            },
            stored.data,
        ))
    }

    /// Entry to persist, if this kind of session is persisted at all.
    pub fn to_stored(&self) -> Option<StoredUser> {
        if self.role != Role::Employee {
            return None;
        }
        Some(StoredUser {
            role: self.role,
            login: self.credentials.login.clone(),
            password: Some(self.credentials.password.clone()),
            data: self.record.clone().unwrap_or_default(),
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn select_employee(&mut self, id: Option<i64>) {
        self.selected_employee_id = id;
    }

    /// Overwrite the cached record wholesale with a fresh backend copy.
    pub fn replace_record(&mut self, record: EmployeeRecord) {
        self.record = Some(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn credentials() -> Credentials {
        Credentials::from_input("ivan", "1234").unwrap()
    }

    #[test]
    fn test_credentials_are_normalised() {
        let credentials = Credentials::from_input("  IVAN ", "1234").unwrap();
        assert_eq!(credentials.login, "ivan");
        assert_eq!(credentials.password, "1234");
    }

    #[test]
    fn test_blank_credentials_are_rejected() {
        assert_eq!(
            Credentials::from_input("   ", "1234"),
            Err(LoginError::MissingCredentials)
        );
        assert_eq!(
            Credentials::from_input("ivan", ""),
            Err(LoginError::MissingCredentials)
        );
    }

    #[test]
    fn test_employee_login_parses_record() {
        let response: LoginResponse = serde_json::from_value(json!({
            "role": "employee",
            "login": "ivan",
            "data": {"name": "Иванов Иван Иванович", "salary": "92 430 ₽"}
        }))
        .unwrap();

        let session = Session::from_login(credentials(), response).unwrap();
        assert_eq!(session.role, Role::Employee);
        assert_eq!(session.record.unwrap().salary.as_deref(), Some("92 430 ₽"));
    }

    #[test]
    fn test_admin_login_is_not_persisted() {
        let response: LoginResponse = serde_json::from_value(json!({
            "role": "admin",
            "login": "admin",
            "data": {"name": "Администратор системы"}
        }))
        .unwrap();

        let session = Session::from_login(credentials(), response).unwrap();
        assert!(session.is_admin());
        assert!(session.record.is_none());
        assert!(session.to_stored().is_none());
    }

    #[test]
    fn test_employee_session_round_trips_through_storage() {
        let record = EmployeeRecord {
            name: "Иванов Иван".to_string(),
            ..Default::default()
        };
        let session = Session::employee(credentials(), record);

        let stored = session.to_stored().unwrap();
        let json = serde_json::to_string(&stored).unwrap();
        let restored: StoredUser = serde_json::from_str(&json).unwrap();

        assert_eq!(Session::rehydrate(restored), Some(session));
    }

    #[test]
    fn test_rehydrate_ignores_admin_and_passwordless_entries() {
        let admin = StoredUser {
            role: Role::Admin,
            login: "admin".to_string(),
            password: Some("admin123".to_string()),
            data: EmployeeRecord::default(),
        };
        assert!(Session::rehydrate(admin).is_none());

        let without_secret: StoredUser =
            serde_json::from_value(json!({"role": "employee", "login": "ivan"})).unwrap();
        assert!(Session::rehydrate(without_secret).is_none());
    }

    #[test]
    fn test_replace_record_overwrites_cache() {
        let mut session = Session::employee(credentials(), EmployeeRecord::default());
        let fresh = EmployeeRecord {
            status: Some("Отпуск".to_string()),
            ..Default::default()
        };
        session.replace_record(fresh.clone());
        assert_eq!(session.record, Some(fresh));
    }
}
