use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::envelope::RequestEnvelope;
use crate::utils::{de_flag, de_opt_text};

/// Login request (`login.php`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    pub officecode: String,
}

impl From<&LoginRequest> for RequestEnvelope {
    fn from(req: &LoginRequest) -> Self {
        RequestEnvelope::new()
            .field("username", &req.username)
            .field("password", &req.password)
            .field("officecode", &req.officecode)
    }
}

/// Change password request (`changepassword.php`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChangePasswordRequest {
    pub username: String,
    pub password: String,
    pub officecode: String,
    pub officeid: String,
}

impl From<&ChangePasswordRequest> for RequestEnvelope {
    fn from(req: &ChangePasswordRequest) -> Self {
        RequestEnvelope::new()
            .field("username", &req.username)
            .field("password", &req.password)
            .field("officecode", &req.officecode)
            .field("officeid", &req.officeid)
    }
}

/// Login reply.
///
/// `employee` is kept as a raw record: its field names differ between
/// deployments (`empname` vs `employee_name`, `empid` vs `employeeid`) and are
/// resolved by the session layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    #[serde(default, deserialize_with = "de_flag")]
    pub flag: bool,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub msg: Option<String>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub error: Option<String>,
    #[serde(default)]
    pub employee: Option<Map<String, Value>>,
}

impl LoginResponse {
    /// The employee record, if present and non-empty.
    pub fn credentials(&self) -> Option<&Map<String, Value>> {
        self.employee.as_ref().filter(|e| !e.is_empty())
    }

    /// `msg`, then `error`.
    pub fn message(&self) -> Option<&str> {
        self.msg.as_deref().or(self.error.as_deref())
    }
}

/// Authenticated identity, persisted as JSON under the `auth_user` key.
///
/// Serialized field names match the records earlier clients wrote, so an
/// existing stored session keeps loading.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    #[serde(rename = "userid")]
    pub user_id: String,
    pub username: String,
    #[serde(rename = "officeid")]
    pub office_id: String,
    #[serde(rename = "officecode", default)]
    pub office_code: String,
    #[serde(rename = "employee_name", default)]
    pub display_name: String,
    #[serde(rename = "officename", default)]
    pub office_name: String,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "financialyearid", default, skip_serializing_if = "Option::is_none")]
    pub financial_year_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(rename = "sessionid", default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_login_response_tolerates_numeric_msg_and_missing_fields() {
        let resp: LoginResponse =
            serde_json::from_value(json!({"flag": true, "msg": 200})).unwrap();
        assert!(resp.flag);
        assert_eq!(resp.message(), Some("200"));
        assert!(resp.credentials().is_none());
    }

    #[test]
    fn test_login_response_empty_employee_is_not_credentials() {
        let resp: LoginResponse =
            serde_json::from_value(json!({"flag": true, "employee": {}})).unwrap();
        assert!(resp.credentials().is_none());
    }

    #[test]
    fn test_session_uses_legacy_storage_keys() {
        let session = Session {
            user_id: "4".to_string(),
            username: "Admin".to_string(),
            office_id: "1".to_string(),
            office_code: "WF01".to_string(),
            token: Some("tok-123".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&session).unwrap();
        assert_eq!(value["userid"], "4");
        assert_eq!(value["officecode"], "WF01");
        assert!(value.get("sessionid").is_none());

        let back: Session = serde_json::from_value(value).unwrap();
        assert_eq!(back, session);
    }
}
