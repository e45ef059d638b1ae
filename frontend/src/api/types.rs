use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::state::session::Role;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub role: Option<String>,
}

impl LoginResponse {
    pub fn role(&self) -> Option<Role> {
        self.role.as_deref().and_then(Role::parse)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub sur_name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub rg: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub credentials_non_expired: bool,
    #[serde(default)]
    pub account_non_locked: bool,
    #[serde(default)]
    pub account_non_expired: bool,
    #[serde(default)]
    pub enabled: bool,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.sur_name).trim().to_string()
    }

    pub fn role_label(&self) -> &'static str {
        match Role::parse(&self.role) {
            Some(Role::Admin) => Role::Admin.label(),
            _ => Role::User.label(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub name: String,
    pub sur_name: String,
    pub rg: String,
    pub phone: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    pub name: String,
    pub sur_name: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub credentials_non_expired: bool,
    pub account_non_locked: bool,
    pub account_non_expired: bool,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visitor {
    pub id: i64,
    pub name: String,
    pub sur_name: String,
    #[serde(default)]
    pub rg: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub photo: Option<String>,
}

impl Visitor {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.sur_name).trim().to_string()
    }
}

/// Just enough of a visitor to seed a visit form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorRef {
    pub id: i64,
    pub name: String,
    pub sur_name: String,
}

impl VisitorRef {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.sur_name).trim().to_string()
    }
}

impl From<&Visitor> for VisitorRef {
    fn from(visitor: &Visitor) -> Self {
        Self {
            id: visitor.id,
            name: visitor.name.clone(),
            sur_name: visitor.sur_name.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitorPayload {
    pub name: String,
    pub sur_name: String,
    pub rg: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl From<&Visitor> for VisitorPayload {
    fn from(visitor: &Visitor) -> Self {
        Self {
            name: visitor.name.clone(),
            sur_name: visitor.sur_name.clone(),
            rg: visitor.rg.clone(),
            phone: visitor.phone.clone(),
            photo: visitor.photo.clone(),
        }
    }
}

pub const MISSING_REASON: &str = "Motivo não informado";
pub const MISSING_SECTOR: &str = "Setor não informado";
pub const MISSING_RESPONSIBLE: &str = "Responsável não informado";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawVisit")]
pub struct Visit {
    pub id: i64,
    pub visit_reason: String,
    pub sector: String,
    pub visit_date: String,
    pub visitor_id: i64,
    pub responsible_name: String,
}

#[derive(Debug, Default, Deserialize)]
struct EmbeddedVisitor {
    #[serde(default)]
    id: Option<i64>,
}

/// Visits come back either with a flat `visitorId` or a nested `visitor` object,
/// and with any text field possibly missing.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawVisit {
    id: Option<i64>,
    visit_reason: Option<String>,
    sector: Option<String>,
    visit_date: Option<String>,
    visitor_id: Option<i64>,
    visitor: Option<EmbeddedVisitor>,
    responsible_name: Option<String>,
}

fn text_or(value: Option<String>, fallback: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

impl From<RawVisit> for Visit {
    fn from(raw: RawVisit) -> Self {
        Self {
            id: raw.id.unwrap_or_default(),
            visit_reason: text_or(raw.visit_reason, MISSING_REASON),
            sector: text_or(raw.sector, MISSING_SECTOR),
            visit_date: raw.visit_date.unwrap_or_default(),
            visitor_id: raw
                .visitor
                .and_then(|v| v.id)
                .or(raw.visitor_id)
                .unwrap_or_default(),
            responsible_name: text_or(raw.responsible_name, MISSING_RESPONSIBLE),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVisit {
    pub visit_reason: String,
    pub sector: String,
    pub visit_date: String,
    pub visitor_id: i64,
    pub responsible_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

pub const CONNECTION_ERROR_MESSAGE: &str = "Erro de conexão com o servidor. Tente novamente.";
pub const FORBIDDEN_MESSAGE: &str = "Acesso negado. Verifique suas permissões.";
pub const NOT_AUTHENTICATED_MESSAGE: &str = "Usuário não autenticado. Faça login novamente.";

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "VALIDATION_ERROR")
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNKNOWN")
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REQUEST_FAILED")
    }

    pub fn connection() -> Self {
        Self::request_failed(CONNECTION_ERROR_MESSAGE)
    }

    pub fn not_authenticated() -> Self {
        Self::with_code(NOT_AUTHENTICATED_MESSAGE, "NOT_AUTHENTICATED")
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNAUTHORIZED")
    }

    pub fn forbidden() -> Self {
        Self::with_code(FORBIDDEN_MESSAGE, "FORBIDDEN")
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "HTTP_ERROR")
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "DECODE_ERROR")
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn is_forbidden(&self) -> bool {
        self.code == "FORBIDDEN"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn employee_reads_camel_case_and_defaults_flags() {
        let employee: Employee = serde_json::from_value(json!({
            "id": 7,
            "name": "Ana",
            "surName": "Souza",
            "username": "ana",
            "rg": "123",
            "phone": "7999",
            "email": "ana@example.com",
            "role": "ROLE_ADMIN"
        }))
        .unwrap();
        assert_eq!(employee.full_name(), "Ana Souza");
        assert_eq!(employee.role_label(), "Administrador");
        assert!(!employee.enabled);
    }

    #[test]
    fn visit_accepts_nested_visitor_and_fills_missing_text() {
        let visit: Visit = serde_json::from_value(json!({
            "id": 3,
            "visitDate": "2025-03-01T14:05:00-03:00",
            "visitor": { "id": 42 },
            "sector": ""
        }))
        .unwrap();
        assert_eq!(visit.visitor_id, 42);
        assert_eq!(visit.sector, MISSING_SECTOR);
        assert_eq!(visit.visit_reason, MISSING_REASON);
        assert_eq!(visit.responsible_name, MISSING_RESPONSIBLE);
    }

    #[test]
    fn visit_prefers_flat_visitor_id_when_nested_is_missing() {
        let visit: Visit = serde_json::from_value(json!({
            "id": 4,
            "visitReason": "Entrega",
            "sector": "TI",
            "visitDate": "2025-03-01T10:00:00",
            "visitorId": 9,
            "responsibleName": "Carlos"
        }))
        .unwrap();
        assert_eq!(visit.visitor_id, 9);
        assert_eq!(visit.visit_reason, "Entrega");

        let back: Visit = serde_json::from_value(serde_json::to_value(&visit).unwrap()).unwrap();
        assert_eq!(back, visit);
    }

    #[test]
    fn visitor_payload_omits_missing_photo() {
        let payload = VisitorPayload {
            name: "João".into(),
            sur_name: "Lima".into(),
            rg: "1".into(),
            phone: "2".into(),
            photo: None,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["surName"], json!("Lima"));
        assert!(value.get("photo").is_none());
    }

    #[test]
    fn login_response_parses_known_roles_only() {
        let response: LoginResponse =
            serde_json::from_value(json!({"token": "t", "role": "ROLE_USER"})).unwrap();
        assert_eq!(response.role(), Some(Role::User));
        let response: LoginResponse = serde_json::from_value(json!({"token": "t"})).unwrap();
        assert_eq!(response.role(), None);
    }
}
