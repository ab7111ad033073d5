use leptos::*;

use crate::api::Role;
use crate::state::session::{use_session, Session};

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (session, _) = use_session();
    let allowed = create_memo(move |_| session.get().authenticated);
    create_effect(move |_| {
        if let Some(target) = redirect_target_for_auth(&session.get()) {
            navigate_to(target);
        }
    });
    view! {
        <Show when=move || allowed.get() fallback=|| ()>
            {children()}
        </Show>
    }
}

#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (session, _) = use_session();
    let allowed = create_memo(move |_| is_admin_session(&session.get()));
    create_effect(move |_| {
        if let Some(target) = redirect_target_for_admin(&session.get()) {
            navigate_to(target);
        }
    });
    view! {
        <Show when=move || allowed.get() fallback=|| ()>
            {children()}
        </Show>
    }
}

pub fn is_admin_session(session: &Session) -> bool {
    session.authenticated && session.role == Role::Admin
}

pub fn redirect_target_for_auth(session: &Session) -> Option<&'static str> {
    (!session.authenticated).then_some("/")
}

pub fn redirect_target_for_admin(session: &Session) -> Option<&'static str> {
    if !session.authenticated {
        Some("/")
    } else if session.role != Role::Admin {
        Some("/dashboard")
    } else {
        None
    }
}

fn navigate_to(target: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.location().set_href(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(authenticated: bool, role: Role) -> Session {
        Session {
            authenticated,
            role,
            token: authenticated.then(|| "tok".to_string()),
        }
    }

    #[test]
    fn auth_guard_redirects_unauthenticated_to_login() {
        assert_eq!(
            redirect_target_for_auth(&session(false, Role::User)),
            Some("/")
        );
        assert_eq!(redirect_target_for_auth(&session(true, Role::User)), None);
        assert_eq!(redirect_target_for_auth(&session(true, Role::Admin)), None);
    }

    #[test]
    fn admin_guard_requires_admin_role() {
        assert!(!is_admin_session(&session(false, Role::Admin)));
        assert!(!is_admin_session(&session(true, Role::User)));
        assert!(is_admin_session(&session(true, Role::Admin)));
    }

    #[test]
    fn admin_guard_redirect_targets() {
        assert_eq!(
            redirect_target_for_admin(&session(false, Role::User)),
            Some("/")
        );
        assert_eq!(
            redirect_target_for_admin(&session(true, Role::User)),
            Some("/dashboard")
        );
        assert_eq!(redirect_target_for_admin(&session(true, Role::Admin)), None);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::{RequireAdmin, RequireAuth};
    use crate::test_support::helpers::{admin_session, provide_session, user_session};
    use crate::test_support::ssr::render_to_string;
    use leptos::*;

    #[test]
    fn require_auth_renders_children_when_authenticated() {
        let html = render_to_string(move || {
            provide_session(user_session());
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(html.contains("protected-content"));
    }

    #[test]
    fn require_auth_hides_children_when_unauthenticated() {
        let html = render_to_string(move || {
            provide_session(Default::default());
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(!html.contains("protected-content"));
    }

    #[test]
    fn require_admin_renders_children_for_admins() {
        let html = render_to_string(move || {
            provide_session(admin_session());
            view! {
                <RequireAdmin>
                    {|| view! { <div>"admin-protected"</div> }}
                </RequireAdmin>
            }
        });
        assert!(html.contains("admin-protected"));
    }

    #[test]
    fn require_admin_hides_children_for_regular_users() {
        let html = render_to_string(move || {
            provide_session(user_session());
            view! {
                <RequireAdmin>
                    {|| view! { <div>"admin-protected"</div> }}
                </RequireAdmin>
            }
        });
        assert!(!html.contains("admin-protected"));
    }
}
