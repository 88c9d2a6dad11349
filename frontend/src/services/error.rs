//! Backend call errors

use shared::LoginError;
use thiserror::Error;

/// Why a backend call failed
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Не удалось связаться с сервером")]
    Network(String),

    /// 401 from the backend
    #[error("Неверный логин или пароль")]
    Unauthorized,

    /// Any other non-2xx status
    #[error("{}", rejected_message(.status, .detail))]
    Rejected { status: u16, detail: Option<String> },

    /// Body missing or not in the expected shape
    #[error("Некорректный ответ сервера: {0}")]
    Malformed(String),

    /// Request body could not be built
    #[error("Не удалось сформировать запрос: {0}")]
    Serialization(String),
}

fn rejected_message(status: &u16, detail: &Option<String>) -> String {
    match detail {
        Some(detail) if !detail.is_empty() => detail.clone(),
        _ => format!("HTTP {}", status),
    }
}

/// Result type for backend calls
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Message shown after a context prefix, e.g. `Ошибка сохранения: ...`.
    pub fn with_context(&self, context: &str) -> String {
        format!("{}: {}", context, self)
    }

    /// Classify a failed login for the login form.
    pub fn login_error(&self) -> LoginError {
        match self {
            ApiError::Network(_) => LoginError::Unreachable,
            ApiError::Unauthorized => LoginError::InvalidCredentials,
            ApiError::Rejected { .. } | ApiError::Serialization(_) => LoginError::Rejected,
            ApiError::Malformed(_) => LoginError::MalformedProfile,
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_rejected_message_prefers_detail() {
        let with_detail = ApiError::Rejected {
            status: 400,
            detail: Some("Логин уже занят".to_string()),
        };
        assert_eq!(with_detail.to_string(), "Логин уже занят");
        assert_eq!(
            with_detail.with_context("Ошибка сохранения"),
            "Ошибка сохранения: Логин уже занят"
        );

        let bare = ApiError::Rejected { status: 500, detail: None };
        assert_eq!(bare.to_string(), "HTTP 500");
    }

    #[wasm_bindgen_test]
    fn test_login_error_mapping() {
        assert_eq!(ApiError::Unauthorized.login_error(), LoginError::InvalidCredentials);
        assert_eq!(
            ApiError::Network("TypeError".to_string()).login_error(),
            LoginError::Unreachable
        );
        assert_eq!(
            ApiError::Rejected { status: 500, detail: None }.login_error(),
            LoginError::Rejected
        );
    }
}
