use std::rc::Rc;

use crate::api::{ApiClient, ApiError, NewTimesheet, Timesheet};

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl DashboardRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> Rc<ApiClient> {
        self.client.clone()
    }

    pub async fn create_timesheet(&self, entry: NewTimesheet) -> Result<Timesheet, ApiError> {
        self.client.create_timesheet(entry).await
    }
}
