use super::client::ApiClient;
use super::error::ApiError;
use super::types::{
    wire, AdminData, ApprovalStatus, EmailRecord, LeaveRequest, NewTimesheet, TaskRecord, Timesheet,
};

impl ApiClient {
    pub async fn list_leaves(&self) -> Result<Vec<LeaveRequest>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/leaves/", base_url))
                    .headers(self.bearer_headers()),
            )
            .await?;
        if response.status().is_success() {
            let raw: Vec<wire::Leave> = Self::parse_json(response).await?;
            Ok(raw.into_iter().map(LeaveRequest::from).collect())
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    pub async fn list_timesheets(&self) -> Result<Vec<Timesheet>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/timesheets/", base_url))
                    .headers(self.bearer_headers()),
            )
            .await?;
        if response.status().is_success() {
            let raw: Vec<wire::Timesheet> = Self::parse_json(response).await?;
            Ok(raw.into_iter().map(Timesheet::from).collect())
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    pub async fn list_emails(&self) -> Result<Vec<EmailRecord>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/emails/", base_url))
                    .headers(self.bearer_headers()),
            )
            .await?;
        if response.status().is_success() {
            let raw: Vec<wire::Email> = Self::parse_json(response).await?;
            Ok(raw.into_iter().map(EmailRecord::from).collect())
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    pub async fn list_tasks(&self) -> Result<Vec<TaskRecord>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/tasks/", base_url))
                    .headers(self.bearer_headers()),
            )
            .await?;
        if response.status().is_success() {
            let raw: Vec<wire::Task> = Self::parse_json(response).await?;
            Ok(raw.into_iter().map(TaskRecord::from).collect())
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    /// One admin refresh: all four collections in flight at once, and any
    /// single failure fails the whole snapshot.
    pub async fn fetch_admin_data(&self) -> Result<AdminData, ApiError> {
        let (leaves, timesheets, emails, tasks) = futures::try_join!(
            self.list_leaves(),
            self.list_timesheets(),
            self.list_emails(),
            self.list_tasks(),
        )?;
        Ok(AdminData {
            leaves,
            timesheets,
            emails,
            tasks,
        })
    }

    pub async fn update_leave_status(
        &self,
        id: i64,
        status: ApprovalStatus,
        approver: &str,
        comment: &str,
    ) -> Result<LeaveRequest, ApiError> {
        let base_url = self.resolved_base_url().await;
        let body = serde_json::json!({
            "status": status,
            "approved_by": approver,
            "approval_comment": comment,
        });
        let response = self
            .send(
                self.http_client()
                    .put(format!("{}/leaves/{}", base_url, id))
                    .headers(self.bearer_headers())
                    .json(&body),
            )
            .await?;
        if response.status().is_success() {
            let raw: wire::Leave = Self::parse_json(response).await?;
            Ok(LeaveRequest::from(raw))
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    pub async fn approve_timesheet(&self, id: i64, approver: &str) -> Result<Timesheet, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/timesheets/{}/approve", base_url, id))
                    .query(&[("approver", approver)])
                    .headers(self.bearer_headers()),
            )
            .await?;
        if response.status().is_success() {
            let raw: wire::Timesheet = Self::parse_json(response).await?;
            Ok(Timesheet::from(raw))
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    /// The backend has no reject route for timesheets; clearing the legacy
    /// flag and stamping a rejection marker is the established convention.
    /// The response body is not relied upon.
    pub async fn reject_timesheet(&self, id: i64, approver: &str) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let body = serde_json::json!({
            "submitted": false,
            "status": "rejected",
            "approved_by": approver,
        });
        let response = self
            .send(
                self.http_client()
                    .put(format!("{}/timesheets/{}", base_url, id))
                    .headers(self.bearer_headers())
                    .json(&body),
            )
            .await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    pub async fn create_timesheet(&self, entry: NewTimesheet) -> Result<Timesheet, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/timesheets/", base_url))
                    .headers(self.bearer_headers())
                    .json(&entry),
            )
            .await?;
        if response.status().is_success() {
            let raw: wire::Timesheet = Self::parse_json(response).await?;
            Ok(Timesheet::from(raw))
        } else {
            Err(Self::error_from_response(response).await)
        }
    }
}
