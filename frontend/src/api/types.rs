use leptos::*;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const GENERIC_TRANSPORT_MESSAGE: &str =
    "No response from server. Please check your connection.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub role: String,
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmployeeStatus {
    #[default]
    Available,
    NotAvailable,
}

impl EmployeeStatus {
    pub const ALL: [EmployeeStatus; 2] = [EmployeeStatus::Available, EmployeeStatus::NotAvailable];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Available => "AVAILABLE",
            EmployeeStatus::NotAvailable => "NOT_AVAILABLE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EmployeeStatus::Available => "Available",
            EmployeeStatus::NotAvailable => "Not Available",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

/// Employee record as returned by both the HR listing and the profile
/// endpoint. The profile endpoint capitalises its keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(alias = "Id", deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, alias = "Name")]
    pub name: Option<String>,
    #[serde(default, alias = "Email", deserialize_with = "string_or_empty")]
    pub email: String,
    #[serde(default, alias = "Department")]
    pub department: Option<String>,
    #[serde(default, alias = "Status", deserialize_with = "status_or_default")]
    pub status: EmployeeStatus,
}

impl Employee {
    pub fn display_name(&self) -> String {
        non_blank(self.name.as_deref()).unwrap_or("N/A").to_string()
    }

    pub fn department_label(&self) -> String {
        non_blank(self.department.as_deref())
            .unwrap_or("Not Assigned")
            .to_string()
    }

    pub fn initial(&self) -> String {
        non_blank(self.name.as_deref())
            .or_else(|| non_blank(Some(self.email.as_str())))
            .and_then(|source| source.chars().next())
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "PENDING",
            LeaveStatus::Approved => "APPROVED",
            LeaveStatus::Rejected => "REJECTED",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, LeaveStatus::Pending)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveEmployee {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub employee: Option<LeaveEmployee>,
    #[serde(default)]
    pub from_date: Option<String>,
    #[serde(default)]
    pub to_date: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    pub status: LeaveStatus,
}

impl LeaveRequest {
    pub fn employee_label(&self) -> String {
        self.employee
            .as_ref()
            .and_then(|emp| non_blank(emp.name.as_deref()).or(non_blank(emp.email.as_deref())))
            .unwrap_or("Unknown")
            .to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub password: String,
    pub department: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLeaveRequest {
    pub from_date: String,
    pub to_date: String,
    pub reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveAction {
    Approve,
    Reject,
}

impl LeaveAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveAction::Approve => "approve",
            LeaveAction::Reject => "reject",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    Validation,
    Unauthorized,
    Server,
    Transport,
    Decode,
    Storage,
}

impl ApiErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            ApiErrorKind::Validation => "VALIDATION_ERROR",
            ApiErrorKind::Unauthorized => "UNAUTHORIZED",
            ApiErrorKind::Server => "SERVER_ERROR",
            ApiErrorKind::Transport => "REQUEST_FAILED",
            ApiErrorKind::Decode => "DECODE_ERROR",
            ApiErrorKind::Storage => "STORAGE_ERROR",
        }
    }
}

/// Normalized failure of any client operation. `message` is always fit for
/// display; `server_message` is set only when the response body carried one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
    pub status: Option<u16>,
    pub server_message: Option<String>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.message
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.message.into_view()
    }
}

impl ApiError {
    fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            server_message: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Validation, msg)
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Transport, msg)
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Decode, msg)
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Storage, msg)
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Unauthorized, msg)
    }

    /// Builds the error for a non-2xx response from its status and raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let kind = if status == 401 || status == 403 {
            ApiErrorKind::Unauthorized
        } else {
            ApiErrorKind::Server
        };
        let server_message = extract_error_message(body);
        let message = server_message
            .clone()
            .unwrap_or_else(|| format!("Request failed with status {}", status));
        Self {
            kind,
            message,
            status: Some(status),
            server_message,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.kind == ApiErrorKind::Unauthorized
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Text to show the user: the server's own message when it sent one,
    /// the connectivity hint for transport failures, the error's own text
    /// for client-side checks and local session rejections, `fallback`
    /// otherwise.
    pub fn describe(&self, fallback: &str) -> String {
        if let Some(message) = &self.server_message {
            return message.clone();
        }
        match self.kind {
            ApiErrorKind::Transport => GENERIC_TRANSPORT_MESSAGE.to_string(),
            _ if self.is_client_side() => self.message.clone(),
            _ => fallback.to_string(),
        }
    }

    /// Raised in the browser without a server round trip: failed form checks
    /// and locally ended sessions.
    pub fn is_client_side(&self) -> bool {
        match self.kind {
            ApiErrorKind::Validation => true,
            ApiErrorKind::Unauthorized => self.status.is_none(),
            _ => false,
        }
    }
}

/// Pulls a human-readable message out of an error body: a JSON string, then
/// `.message`, then `.error`, then the raw text when it is not JSON at all.
pub fn extract_error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::String(text)) => non_blank(Some(text.as_str())).map(str::to_string),
        Ok(Value::Object(map)) => ["message", "error"]
            .iter()
            .filter_map(|key| map.get(*key).and_then(|v| v.as_str()))
            .find_map(|text| non_blank(Some(text)))
            .map(str::to_string),
        Ok(_) => None,
        Err(_) => Some(trimmed.to_string()),
    }
}

/// Message field of an otherwise free-form success body, if any.
pub fn success_message(body: &str) -> Option<String> {
    match serde_json::from_str::<Value>(body.trim()) {
        Ok(Value::Object(map)) => map
            .get("message")
            .and_then(|v| v.as_str())
            .and_then(|text| non_blank(Some(text)))
            .map(str::to_string),
        Ok(Value::String(text)) => non_blank(Some(text.as_str())).map(str::to_string),
        _ => None,
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {}",
            other
        ))),
    }
}

fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn status_or_default<'de, D>(deserializer: D) -> Result<EmployeeStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .and_then(EmployeeStatus::parse)
        .unwrap_or_default())
}
