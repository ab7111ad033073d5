use reqwest::StatusCode;

use super::client::ApiClient;
use super::error::ApiError;
use super::types::{HealthResponse, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};

impl ApiClient {
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/auth/login", base_url))
                    .json(&request),
            )
            .await?;

        match response.status() {
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
            status if status.is_success() => Self::parse_json(response).await,
            _ => Err(Self::error_from_response(response).await),
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<RegisterResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/auth/register", base_url))
                    .json(&request),
            )
            .await?;

        match response.status() {
            // The backend reports a taken username as a plain 400.
            StatusCode::BAD_REQUEST => Err(ApiError::DuplicateUser),
            status if status.is_success() => Self::parse_json(response).await,
            _ => Err(Self::error_from_response(response).await),
        }
    }

    pub async fn health_check(&self) -> Result<HealthResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/health", base_url)))
            .await?;

        if response.status().is_success() {
            Self::parse_json(response).await
        } else {
            Err(Self::error_from_response(response).await)
        }
    }
}
