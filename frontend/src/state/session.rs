use leptos::*;
use serde::{Deserialize, Serialize};

use crate::api::{ApiClient, ApiError, LoginRequest, Role};
use crate::utils::storage;

pub const SESSION_KEY: &str = "portal_session";

type SessionContext = (ReadSignal<Session>, WriteSignal<Session>);

/// The only source of truth for route gating. Storage is written through
/// `login`/`logout` and read once at provider mount.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub authenticated: bool,
    pub role: Role,
    pub token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SessionRecord {
    token: String,
    role: Role,
}

fn decode_session(raw: &str) -> Session {
    serde_json::from_str::<SessionRecord>(raw)
        .map(|record| Session {
            authenticated: true,
            role: record.role,
            token: Some(record.token),
        })
        .unwrap_or_default()
}

/// Restore is synchronous; a missing or malformed record yields the
/// unauthenticated default.
fn load_session() -> Session {
    match storage::get_item(SESSION_KEY) {
        Ok(Some(raw)) => decode_session(&raw),
        _ => Session::default(),
    }
}

fn persist_session(token: &str, role: Role) {
    let record = SessionRecord {
        token: token.to_string(),
        role,
    };
    match serde_json::to_string(&record) {
        Ok(raw) => {
            if let Err(err) = storage::set_item(SESSION_KEY, &raw) {
                log::warn!("failed to persist session: {}", err);
            }
        }
        Err(err) => log::warn!("failed to encode session: {}", err),
    }
}

/// Token for the Authorization header, read from the persisted record so
/// the gateway never needs the reactive context.
pub fn stored_token() -> Option<String> {
    storage::get_item(SESSION_KEY)
        .ok()
        .flatten()
        .and_then(|raw| serde_json::from_str::<SessionRecord>(&raw).ok())
        .map(|record| record.token)
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let ctx = create_signal(load_session());
    provide_context::<SessionContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| create_signal(Session::default()))
}

pub fn login(set_session: WriteSignal<Session>, role: Role, token: String) {
    persist_session(&token, role);
    set_session.set(Session {
        authenticated: true,
        role,
        token: Some(token),
    });
}

pub fn logout(set_session: WriteSignal<Session>) {
    if let Err(err) = storage::remove_item(SESSION_KEY) {
        log::warn!("failed to clear session: {}", err);
    }
    set_session.set(Session::default());
}

/// A failed login must leave the session untouched; only success mutates
/// state or storage.
pub async fn login_request(
    request: LoginRequest,
    api: &ApiClient,
    set_session: WriteSignal<Session>,
) -> Result<(), ApiError> {
    let response = api.login(request).await?;
    login(set_session, Role::parse(&response.role), response.access_token);
    Ok(())
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_session, set_session) = use_session();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let api = api.clone();
        async move { login_request(payload, &api, set_session).await }
    })
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
    fn use_session_returns_default_without_context() {
        with_runtime(|| {
            let (session, _set_session) = use_session();
            let snapshot = session.get();
            assert!(!snapshot.authenticated);
            assert_eq!(snapshot.role, Role::User);
            assert!(snapshot.token.is_none());
        });
    }

    #[test]
    fn malformed_record_restores_unauthenticated() {
        assert_eq!(decode_session("not json"), Session::default());
        assert_eq!(decode_session("{\"token\":42}"), Session::default());
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn login_persists_and_logout_clears() {
        let runtime = create_runtime();
        let (session, set_session) = create_signal(Session::default());

        login(set_session, Role::Admin, "tok-77".into());
        let snapshot = session.get();
        assert!(snapshot.authenticated);
        assert_eq!(snapshot.role, Role::Admin);
        assert_eq!(stored_token().as_deref(), Some("tok-77"));
        assert_eq!(load_session(), snapshot);

        logout(set_session);
        assert_eq!(session.get(), Session::default());
        assert_eq!(stored_token(), None);
        assert_eq!(load_session(), Session::default());
        runtime.dispose();
    }

    #[tokio::test]
    async fn successful_login_updates_session_with_role() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/auth/login");
            then.status(200).json_body(json!({
                "access_token": "tok-1",
                "token_type": "bearer",
                "role": "admin"
            }));
        });

        let runtime = create_runtime();
        let (session, set_session) = create_signal(Session::default());
        let api = ApiClient::new_with_base_url(server.base_url());

        login_request(
            LoginRequest {
                username: "alice".into(),
                password: "secret".into(),
            },
            &api,
            set_session,
        )
        .await
        .unwrap();

        let snapshot = session.get();
        assert!(snapshot.authenticated);
        assert_eq!(snapshot.role, Role::Admin);
        assert_eq!(snapshot.token.as_deref(), Some("tok-1"));

        logout(set_session);
        runtime.dispose();
    }

    #[tokio::test]
    async fn rejected_login_leaves_session_unauthenticated() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/auth/login");
            then.status(401).json_body(json!({ "detail": "bad credentials" }));
        });

        let runtime = create_runtime();
        let (session, set_session) = create_signal(Session::default());
        let api = ApiClient::new_with_base_url(server.base_url());

        let error = login_request(
            LoginRequest {
                username: "alice".into(),
                password: "wrong".into(),
            },
            &api,
            set_session,
        )
        .await
        .unwrap_err();

        assert_eq!(error, ApiError::Unauthorized);
        let snapshot = session.get();
        assert!(!snapshot.authenticated);
        assert!(snapshot.token.is_none());
        assert_eq!(stored_token(), None);
        runtime.dispose();
    }
}
