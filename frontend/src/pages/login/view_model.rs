use std::rc::Rc;

use leptos::*;

use super::repository::LoginRepository;
use super::utils::{LoginFormState, RegisterFormState};
use crate::api::{
    ApiClient, ApiError, HealthResponse, LoginRequest, RegisterRequest, RegisterResponse,
};
use crate::state::session::{self, use_session};

#[derive(Clone)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub register_form: RegisterFormState,
    pub show_register: RwSignal<bool>,
    pub login_error: RwSignal<Option<ApiError>>,
    pub register_error: RwSignal<Option<ApiError>>,
    pub register_notice: RwSignal<Option<String>>,
    pub login_action: Action<LoginRequest, Result<(), ApiError>>,
    pub register_action: Action<RegisterRequest, Result<RegisterResponse, ApiError>>,
    pub health_resource: Resource<u32, Result<HealthResponse, ApiError>>,
    pub recheck_health: RwSignal<u32>,
}

pub fn use_login_view_model() -> LoginViewModel {
    let (session, _) = use_session();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = LoginRepository::new_with_client(Rc::new(api));

    // An authenticated visit to the login route hands off to the dashboard.
    create_effect(move |_| {
        if session.get().authenticated {
            if let Some(win) = web_sys::window() {
                let _ = win.location().set_href("/dashboard");
            }
        }
    });

    let form = LoginFormState::new();
    let register_form = RegisterFormState::new();
    let show_register = create_rw_signal(false);

    let login_action = session::use_login_action();
    let login_error = create_rw_signal(None::<ApiError>);
    create_effect(move |_| {
        if let Some(Err(error)) = login_action.value().get() {
            login_error.set(Some(error));
        }
    });

    let register_error = create_rw_signal(None::<ApiError>);
    let register_notice = create_rw_signal(None::<String>);
    let repo_register = repo.clone();
    let register_action = create_action(move |request: &RegisterRequest| {
        let repo = repo_register.clone();
        let payload = request.clone();
        async move { repo.register(payload).await }
    });
    create_effect(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(response) => {
                    register_error.set(None);
                    register_notice.set(Some(response.message));
                    register_form.reset();
                    show_register.set(false);
                }
                Err(error) => register_error.set(Some(error)),
            }
        }
    });

    let recheck_health = create_rw_signal(0u32);
    let repo_health = repo.clone();
    let health_resource = create_resource(
        move || recheck_health.get(),
        move |_| {
            let repo = repo_health.clone();
            async move { repo.health().await }
        },
    );

    LoginViewModel {
        form,
        register_form,
        show_register,
        login_error,
        register_error,
        register_notice,
        login_action,
        register_action,
        health_resource,
        recheck_health,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::provide_session;
    use crate::test_support::ssr::render_to_string;
    use httpmock::prelude::*;

    #[test]
    fn view_model_initializes_with_defaults() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/health");
            then.status(200).json_body(serde_json::json!({ "status": "healthy" }));
        });

        let html = render_to_string(move || {
            provide_session(Default::default());
            provide_context(ApiClient::new_with_base_url(server.base_url()));
            let vm = use_login_view_model();
            assert!(!vm.show_register.get_untracked());
            assert!(vm.login_error.get_untracked().is_none());
            assert!(vm.register_notice.get_untracked().is_none());
            view! { <div>{vm.form.username.get_untracked()}</div> }
        });
        assert!(html.contains("div"));
    }
}
