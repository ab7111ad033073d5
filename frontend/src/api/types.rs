use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Access level attached to a session. Anything the backend reports that
/// is not recognizably an admin normalizes to `User`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("admin") {
            Self::Admin
        } else {
            Self::User
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Review state of a leave request or timesheet. Replaces the legacy
/// submitted/approved booleans the backend still speaks on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.eq_ignore_ascii_case("approved") {
            Self::Approved
        } else if value.eq_ignore_ascii_case("rejected") {
            Self::Rejected
        } else {
            Self::Pending
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: i64,
    pub user_id: String,
    pub email: String,
    pub date: String,
    pub leave_type: String,
    pub reason: String,
    pub status: ApprovalStatus,
    pub approved_by: Option<String>,
    pub approval_comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timesheet {
    pub id: i64,
    pub user_id: String,
    pub email: String,
    pub date: String,
    pub from_time: Option<String>,
    pub to_time: Option<String>,
    pub task_summary: Option<String>,
    pub hours: f64,
    pub description: String,
    pub status: ApprovalStatus,
    pub approved_by: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailRecord {
    pub id: i64,
    pub sender: String,
    pub recipient: String,
    pub subject: String,
    pub message: String,
    pub kind: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: i64,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub priority: String,
    pub status: String,
}

/// Payload for a new timesheet entry. `submitted`/`approved_by` are fixed
/// by the client; review happens in the admin panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTimesheet {
    pub user_id: String,
    pub email: String,
    pub date: String,
    pub from_time: String,
    pub to_time: String,
    pub task_summary: String,
    pub hours: f64,
    pub description: String,
    pub submitted: bool,
    pub approved_by: Option<String>,
}

/// All four admin collections fetched in one refresh.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminData {
    pub leaves: Vec<LeaveRequest>,
    pub timesheets: Vec<Timesheet>,
    pub emails: Vec<EmailRecord>,
    pub tasks: Vec<TaskRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatSender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub text: String,
    pub sender: ChatSender,
    pub timestamp: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub text: Option<String>,
}

/// Raw backend shapes. The HRMS API predates the status enum and still
/// mixes field conventions between records; conversion into the canonical
/// types above is the single place that tolerates them.
pub(crate) mod wire {
    use serde::Deserialize;
    use serde_json::Value;

    #[derive(Debug, Clone, Deserialize)]
    pub struct Leave {
        pub id: i64,
        #[serde(default)]
        pub user_id: String,
        #[serde(default)]
        pub email: String,
        #[serde(default)]
        pub date: String,
        #[serde(default)]
        pub leave_type: String,
        #[serde(default)]
        pub reason: String,
        #[serde(default)]
        pub status: Option<String>,
        #[serde(default)]
        pub approved_by: Option<String>,
        #[serde(default)]
        pub approval_comment: Option<String>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct Timesheet {
        pub id: i64,
        #[serde(default)]
        pub user_id: String,
        #[serde(default)]
        pub email: String,
        #[serde(default)]
        pub date: String,
        #[serde(default)]
        pub from_time: Option<String>,
        #[serde(default)]
        pub to_time: Option<String>,
        #[serde(default)]
        pub task_summary: Option<String>,
        // Arrives as a JSON number or a stringified number depending on
        // which write path created the row.
        #[serde(default)]
        pub hours: Value,
        #[serde(default)]
        pub description: String,
        #[serde(default)]
        pub submitted: bool,
        #[serde(default)]
        pub status: Option<String>,
        #[serde(default)]
        pub approved_by: Option<String>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct Email {
        pub id: i64,
        #[serde(default)]
        pub user_id: Option<String>,
        #[serde(default)]
        pub from_user: Option<String>,
        #[serde(default)]
        pub recipient: Option<String>,
        #[serde(default)]
        pub to_user: Option<String>,
        #[serde(default)]
        pub email: Option<String>,
        #[serde(default)]
        pub subject: String,
        #[serde(default)]
        pub message: String,
        #[serde(default, rename = "type")]
        pub kind: Option<String>,
        #[serde(default)]
        pub status: Option<String>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct Task {
        pub id: i64,
        #[serde(default)]
        pub user_id: String,
        #[serde(default)]
        pub title: String,
        #[serde(default)]
        pub description: String,
        #[serde(default)]
        pub priority: Option<String>,
        #[serde(default)]
        pub status: Option<String>,
    }
}

impl From<wire::Leave> for LeaveRequest {
    fn from(raw: wire::Leave) -> Self {
        let status = raw
            .status
            .as_deref()
            .map(ApprovalStatus::parse)
            .unwrap_or(ApprovalStatus::Pending);
        Self {
            id: raw.id,
            user_id: raw.user_id,
            email: raw.email,
            date: raw.date,
            leave_type: raw.leave_type,
            reason: raw.reason,
            status,
            approved_by: raw.approved_by,
            approval_comment: raw.approval_comment,
        }
    }
}

impl From<wire::Timesheet> for Timesheet {
    fn from(raw: wire::Timesheet) -> Self {
        // An explicit rejection marker wins over the legacy submitted flag.
        let status = match raw.status.as_deref().map(ApprovalStatus::parse) {
            Some(ApprovalStatus::Rejected) => ApprovalStatus::Rejected,
            _ if raw.submitted => ApprovalStatus::Approved,
            _ => ApprovalStatus::Pending,
        };
        let hours = match &raw.hours {
            Value::Number(n) => n.as_f64().unwrap_or(0.0),
            Value::String(s) => s.trim().parse().unwrap_or(0.0),
            _ => 0.0,
        };
        Self {
            id: raw.id,
            user_id: raw.user_id,
            email: raw.email,
            date: raw.date,
            from_time: raw.from_time,
            to_time: raw.to_time,
            task_summary: raw.task_summary,
            hours,
            description: raw.description,
            status,
            approved_by: raw.approved_by,
        }
    }
}

impl From<wire::Email> for EmailRecord {
    fn from(raw: wire::Email) -> Self {
        let sender = raw
            .user_id
            .or(raw.from_user)
            .unwrap_or_default();
        let recipient = raw
            .recipient
            .or(raw.to_user)
            .or(raw.email)
            .unwrap_or_default();
        Self {
            id: raw.id,
            sender,
            recipient,
            subject: raw.subject,
            message: raw.message,
            kind: raw.kind.unwrap_or_default(),
            status: raw.status.unwrap_or_default(),
        }
    }
}

impl From<wire::Task> for TaskRecord {
    fn from(raw: wire::Task) -> Self {
        Self {
            id: raw.id,
            user_id: raw.user_id,
            title: raw.title,
            description: raw.description,
            priority: raw.priority.unwrap_or_else(|| "Medium".to_string()),
            status: raw.status.unwrap_or_else(|| "Pending".to_string()),
        }
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn login_request_serializes_expected_fields() {
        let raw = serde_json::to_value(LoginRequest {
            username: "alice".into(),
            password: "secret".into(),
        })
        .unwrap();
        assert_eq!(raw["username"], "alice");
        assert_eq!(raw["password"], "secret");
    }
}
