use leptos::*;

use super::components::chat::ChatPanel;
use super::components::timesheet_form::TimesheetForm;
use super::view_model::DashboardViewModel;

#[component]
pub fn DashboardPanel(vm: DashboardViewModel) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6 px-4">
            <ChatPanel chat=vm.chat input=vm.chat_input send_action=vm.send_action />
            <TimesheetForm
                form=vm.form
                submit_action=vm.submit_action
                submit_error=vm.submit_error
                submit_notice=vm.submit_notice
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::pages::dashboard::view_model::use_dashboard_view_model;
    use crate::test_support::helpers::{provide_session, user_session};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn dashboard_panel_renders_chat_and_form() {
        let html = render_to_string(move || {
            provide_session(user_session());
            provide_context(ApiClient::new_with_base_url("http://127.0.0.1:1"));
            let vm = use_dashboard_view_model();
            view! { <DashboardPanel vm=vm /> }
        });
        assert!(html.contains("HR Assistant"));
        assert!(html.contains("Submit Timesheet"));
    }
}
