pub mod components;
mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

use leptos::*;

use crate::components::layout::Layout;

#[component]
pub fn AdminPage() -> impl IntoView {
    let vm = view_model::use_admin_view_model();
    view! {
        <Layout>
            <panel::AdminPanel vm=vm />
        </Layout>
    }
}
