pub mod components;
mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

use leptos::*;

use crate::components::layout::Layout;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = view_model::use_dashboard_view_model();
    view! {
        <Layout>
            <panel::DashboardPanel vm=vm />
        </Layout>
    }
}
