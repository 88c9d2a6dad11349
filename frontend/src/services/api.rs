use gloo::net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::{File, FormData};

use shared::admin_form::EditorTarget;
use shared::config::resolve_api_base;
use shared::{
    AddPaymentRequest, CardUpdateRequest, Credentials, EmployeePayload, EmployeeRecord,
    EmployeeSummary, ErrorDetail, LoginRequest, LoginResponse, PaymentEntry,
    PhotoUploadResponse, ShiftUpdate,
};

use super::error::{ApiError, ApiResult};

const ADMIN_LOGIN_HEADER: &str = "X-Admin-Login";
const ADMIN_PASSWORD_HEADER: &str = "X-Admin-Password";

/// API client for communicating with the wallet backend
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a client for the backend that belongs to the current page
    pub fn new() -> Self {
        let hostname = gloo::utils::window()
            .location()
            .hostname()
            .unwrap_or_default();
        Self::with_base_url(resolve_api_base(&hostname, option_env!("WALLET_API_BASE")))
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Admin endpoints authenticate through headers on every call
    fn as_admin(builder: RequestBuilder, admin: &Credentials) -> RequestBuilder {
        builder
            .header(ADMIN_LOGIN_HEADER, &admin.login)
            .header(ADMIN_PASSWORD_HEADER, &admin.password)
    }

    fn with_json<B: Serialize + ?Sized>(builder: RequestBuilder, body: &B) -> ApiResult<Request> {
        builder
            .json(body)
            .map_err(|e| ApiError::Serialization(e.to_string()))
    }

    /// Turn a transport result into a response with a 2xx status
    async fn checked(result: Result<Response, gloo::net::Error>) -> ApiResult<Response> {
        let response = result.map_err(|e| ApiError::Network(e.to_string()))?;
        if response.ok() {
            return Ok(response);
        }

        let status = response.status();
        if status == 401 {
            return Err(ApiError::Unauthorized);
        }

        let detail = response
            .json::<ErrorDetail>()
            .await
            .ok()
            .and_then(|body| body.message());
        Err(ApiError::Rejected { status, detail })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Malformed(e.to_string()))
    }

    async fn send_json<T: DeserializeOwned>(request: Request) -> ApiResult<T> {
        let response = Self::checked(request.send().await).await?;
        Self::decode(response).await
    }

    // ========== Auth & employee self-service ==========

    /// Authenticate; the backend decides the role
    pub async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse> {
        let request = Self::with_json(Request::post(&self.url("/api/login")), request)?;
        Self::send_json(request).await
    }

    /// Fetch the logged-in employee's card
    pub async fn employee_card(&self, credentials: &Credentials) -> ApiResult<EmployeeRecord> {
        let request = Self::with_json(Request::post(&self.url("/api/employee/card")), credentials)?;
        Self::send_json(request).await
    }

    /// Persist the employee-editable card fields; returns the updated card
    pub async fn update_employee_card(&self, update: &CardUpdateRequest) -> ApiResult<EmployeeRecord> {
        let request = Self::with_json(Request::post(&self.url("/api/employee/card/update")), update)?;
        Self::send_json(request).await
    }

    /// The employee's own payment history
    pub async fn employee_payments(&self, credentials: &Credentials) -> ApiResult<Vec<PaymentEntry>> {
        let request = Self::with_json(Request::post(&self.url("/api/employee/payments")), credentials)?;
        Self::send_json(request).await
    }

    // ========== Admin: employees ==========

    pub async fn list_employees(&self, admin: &Credentials) -> ApiResult<Vec<EmployeeSummary>> {
        let builder = Self::as_admin(Request::get(&self.url("/api/employees")), admin);
        let response = Self::checked(builder.send().await).await?;
        Self::decode(response).await
    }

    pub async fn get_employee(&self, admin: &Credentials, id: i64) -> ApiResult<EmployeeRecord> {
        let builder = Self::as_admin(Request::get(&self.url(&format!("/api/employees/{}", id))), admin);
        let response = Self::checked(builder.send().await).await?;
        Self::decode(response).await
    }

    /// Create (`POST`) or update (`PUT`) depending on the editor target
    pub async fn save_employee(
        &self,
        admin: &Credentials,
        target: EditorTarget,
        payload: &EmployeePayload,
    ) -> ApiResult<EmployeeRecord> {
        let builder = match target {
            EditorTarget::New => Request::post(&self.url("/api/employees")),
            EditorTarget::Existing(id) => Request::put(&self.url(&format!("/api/employees/{}", id))),
        };
        let request = Self::with_json(Self::as_admin(builder, admin), payload)?;
        Self::send_json(request).await
    }

    /// Flip the on-shift flag without touching the rest of the record
    pub async fn set_on_shift(&self, admin: &Credentials, id: i64, on_shift: bool) -> ApiResult<()> {
        let builder = Self::as_admin(Request::put(&self.url(&format!("/api/employees/{}", id))), admin);
        let request = Self::with_json(builder, &ShiftUpdate { on_shift })?;
        Self::checked(request.send().await).await.map(|_| ())
    }

    pub async fn delete_employee(&self, admin: &Credentials, id: i64) -> ApiResult<()> {
        let builder = Self::as_admin(Request::delete(&self.url(&format!("/api/employees/{}", id))), admin);
        Self::checked(builder.send().await).await.map(|_| ())
    }

    /// Multipart upload of a new avatar, field `file`
    pub async fn upload_photo(&self, admin: &Credentials, id: i64, file: &File) -> ApiResult<PhotoUploadResponse> {
        let form = FormData::new().map_err(|e| ApiError::Serialization(format!("{:?}", e)))?;
        form.append_with_blob("file", file)
            .map_err(|e| ApiError::Serialization(format!("{:?}", e)))?;

        let builder = Self::as_admin(
            Request::post(&self.url(&format!("/api/employees/{}/photo", id))),
            admin,
        );
        let request = builder
            .body(form)
            .map_err(|e| ApiError::Serialization(e.to_string()))?;
        Self::send_json(request).await
    }

    /// Spreadsheet export of one employee card, as raw bytes
    pub async fn export_employee(&self, admin: &Credentials, id: i64) -> ApiResult<Vec<u8>> {
        let builder = Self::as_admin(
            Request::get(&self.url(&format!("/api/employees/{}/export", id))),
            admin,
        );
        let response = Self::checked(builder.send().await).await?;
        response
            .binary()
            .await
            .map_err(|e| ApiError::Malformed(e.to_string()))
    }

    // ========== Admin: payments ==========

    pub async fn list_payments(&self, admin: &Credentials, id: i64) -> ApiResult<Vec<PaymentEntry>> {
        let builder = Self::as_admin(
            Request::get(&self.url(&format!("/api/employees/{}/payments", id))),
            admin,
        );
        let response = Self::checked(builder.send().await).await?;
        Self::decode(response).await
    }

    pub async fn add_payment(&self, admin: &Credentials, id: i64, payment: &AddPaymentRequest) -> ApiResult<()> {
        let builder = Self::as_admin(
            Request::post(&self.url(&format!("/api/employees/{}/payments", id))),
            admin,
        );
        let request = Self::with_json(builder, payment)?;
        Self::checked(request.send().await).await.map(|_| ())
    }

    pub async fn delete_payment(&self, admin: &Credentials, id: i64, payment_id: i64) -> ApiResult<()> {
        let builder = Self::as_admin(
            Request::delete(&self.url(&format!("/api/employees/{}/payments/{}", id, payment_id))),
            admin,
        );
        Self::checked(builder.send().await).await.map(|_| ())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_urls_are_joined_to_base() {
        let client = ApiClient::with_base_url("http://127.0.0.1:8000".to_string());
        assert_eq!(client.url("/api/login"), "http://127.0.0.1:8000/api/login");

        let same_origin = ApiClient::with_base_url(String::new());
        assert_eq!(same_origin.url("/api/employees"), "/api/employees");
    }
}
