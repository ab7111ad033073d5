use leptos::*;
use leptos_router::*;

use crate::{
    components::guard::{RequireAdmin, RequireAuth},
    pages::{admin::AdminPage, dashboard::DashboardPage, login::LoginPage},
    state::session::SessionProvider,
};

pub const ROUTE_PATHS: &[&str] = &["/", "/dashboard", "/admin"];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &["/dashboard", "/admin"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/"];

pub const ADMIN_ROUTE_PATHS: &[&str] = &["/admin"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    view! {
        <SessionProvider>
            <Router>
                <Routes>
                    <Route path="/" view=LoginPage/>
                    <Route path="/dashboard" view=ProtectedDashboard/>
                    <Route path="/admin" view=ProtectedAdmin/>
                </Routes>
            </Router>
        </SessionProvider>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><DashboardPage/></RequireAuth> }
}

#[component]
fn ProtectedAdmin() -> impl IntoView {
    view! {
        <RequireAuth>
            <RequireAdmin>
                <AdminPage/>
            </RequireAdmin>
        </RequireAuth>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn login_is_the_only_public_route() {
        assert_eq!(PUBLIC_ROUTE_PATHS, &["/"]);
    }

    #[test]
    fn protected_routes_are_subset_of_all() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        for path in PROTECTED_ROUTE_PATHS {
            assert!(
                all.contains(path),
                "protected path missing from ROUTE_PATHS: {}",
                path
            );
        }
    }

    #[test]
    fn admin_routes_are_subset_of_protected() {
        let protected: HashSet<&str> = PROTECTED_ROUTE_PATHS.iter().copied().collect();
        for path in ADMIN_ROUTE_PATHS {
            assert!(protected.contains(path));
        }
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }

    #[test]
    fn every_route_is_public_or_protected() {
        let mut covered: HashSet<&str> = PUBLIC_ROUTE_PATHS.iter().copied().collect();
        covered.extend(PROTECTED_ROUTE_PATHS.iter().copied());
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(covered, all);
    }
}
