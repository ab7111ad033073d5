use std::rc::Rc;

use crate::api::{ApiClient, ApiError, HealthResponse, RegisterRequest, RegisterResponse};

#[derive(Clone)]
pub struct LoginRepository {
    client: Rc<ApiClient>,
}

impl LoginRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<RegisterResponse, ApiError> {
        self.client.register(request).await
    }

    pub async fn health(&self) -> Result<HealthResponse, ApiError> {
        self.client.health_check().await
    }
}
