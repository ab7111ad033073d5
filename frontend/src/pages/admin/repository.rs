use std::rc::Rc;

use crate::api::{AdminData, ApiClient, ApiError, ApprovalStatus, LeaveRequest, Timesheet};

#[derive(Clone)]
pub struct AdminRepository {
    client: Rc<ApiClient>,
}

impl AdminRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_admin_data(&self) -> Result<AdminData, ApiError> {
        self.client.fetch_admin_data().await
    }

    pub async fn update_leave_status(
        &self,
        id: i64,
        status: ApprovalStatus,
        approver: &str,
        comment: &str,
    ) -> Result<LeaveRequest, ApiError> {
        self.client
            .update_leave_status(id, status, approver, comment)
            .await
    }

    pub async fn approve_timesheet(&self, id: i64, approver: &str) -> Result<Timesheet, ApiError> {
        self.client.approve_timesheet(id, approver).await
    }

    pub async fn reject_timesheet(&self, id: i64, approver: &str) -> Result<(), ApiError> {
        self.client.reject_timesheet(id, approver).await
    }
}
