mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

use leptos::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    let vm = view_model::use_login_view_model();
    view! { <panel::LoginPanel vm=vm /> }
}
