use leptos::*;

use crate::api::{ApiError, HealthResponse, LoginRequest, RegisterRequest};

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub username: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl LoginFormState {
    pub fn new() -> Self {
        Self {
            username: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }

    pub fn to_payload(&self) -> Result<LoginRequest, ApiError> {
        let username = self.username.get_untracked().trim().to_string();
        let password = self.password.get_untracked();
        if username.is_empty() || password.is_empty() {
            return Err(ApiError::validation(
                "Username and password are required.",
            ));
        }
        Ok(LoginRequest { username, password })
    }

    pub fn reset(&self) {
        self.username.set(String::new());
        self.password.set(String::new());
    }
}

#[derive(Clone, Copy)]
pub struct RegisterFormState {
    pub username: RwSignal<String>,
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub role: RwSignal<String>,
}

impl RegisterFormState {
    pub fn new() -> Self {
        Self {
            username: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            role: create_rw_signal("user".to_string()),
        }
    }

    pub fn to_payload(&self) -> Result<RegisterRequest, ApiError> {
        let username = self.username.get_untracked().trim().to_string();
        let email = self.email.get_untracked().trim().to_string();
        let password = self.password.get_untracked();
        let role = self.role.get_untracked();
        if username.is_empty() || email.is_empty() || password.is_empty() {
            return Err(ApiError::validation("All fields are required."));
        }
        if !email.contains('@') {
            return Err(ApiError::validation("Enter a valid email address."));
        }
        Ok(RegisterRequest {
            username,
            password,
            email,
            role,
        })
    }

    pub fn reset(&self) {
        self.username.set(String::new());
        self.email.set(String::new());
        self.password.set(String::new());
        self.role.set("user".to_string());
    }
}

/// Reachability of the HRMS backend, shown as a dot next to the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendStatus {
    Checking,
    Connected,
    Disconnected,
}

impl BackendStatus {
    pub fn from_resource(value: Option<Result<HealthResponse, ApiError>>) -> Self {
        match value {
            None => Self::Checking,
            Some(Ok(health)) if health.status.eq_ignore_ascii_case("healthy") => Self::Connected,
            Some(Ok(_)) => Self::Disconnected,
            Some(Err(_)) => Self::Disconnected,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Checking => "Checking backend...",
            Self::Connected => "Backend connected",
            Self::Disconnected => "Backend unreachable",
        }
    }

    pub fn dot_class(&self) -> &'static str {
        match self {
            Self::Checking => "h-2 w-2 rounded-full bg-status-warning-border",
            Self::Connected => "h-2 w-2 rounded-full bg-status-success-border",
            Self::Disconnected => "h-2 w-2 rounded-full bg-status-error-border",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::create_runtime;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    #[test]
    fn login_form_requires_both_fields() {
        with_runtime(|| {
            let form = LoginFormState::new();
            assert!(form.to_payload().unwrap_err().is_validation());

            form.username.set("alice".into());
            assert!(form.to_payload().unwrap_err().is_validation());

            form.password.set("secret".into());
            let payload = form.to_payload().unwrap();
            assert_eq!(payload.username, "alice");
        });
    }

    #[test]
    fn login_form_trims_username() {
        with_runtime(|| {
            let form = LoginFormState::new();
            form.username.set("  alice  ".into());
            form.password.set("secret".into());
            assert_eq!(form.to_payload().unwrap().username, "alice");
        });
    }

    #[test]
    fn register_form_validates_fields_and_email() {
        with_runtime(|| {
            let form = RegisterFormState::new();
            assert!(form.to_payload().unwrap_err().is_validation());

            form.username.set("bob".into());
            form.email.set("not-an-email".into());
            form.password.set("secret".into());
            assert_eq!(
                form.to_payload().unwrap_err(),
                ApiError::validation("Enter a valid email address.")
            );

            form.email.set("bob@example.com".into());
            let payload = form.to_payload().unwrap();
            assert_eq!(payload.role, "user");
        });
    }

    #[test]
    fn backend_status_maps_resource_states() {
        assert_eq!(BackendStatus::from_resource(None), BackendStatus::Checking);
        assert_eq!(
            BackendStatus::from_resource(Some(Ok(HealthResponse {
                status: "healthy".into(),
                timestamp: None
            }))),
            BackendStatus::Connected
        );
        assert_eq!(
            BackendStatus::from_resource(Some(Ok(HealthResponse {
                status: "degraded".into(),
                timestamp: None
            }))),
            BackendStatus::Disconnected
        );
        assert_eq!(
            BackendStatus::from_resource(Some(Err(ApiError::Timeout))),
            BackendStatus::Disconnected
        );
    }
}
