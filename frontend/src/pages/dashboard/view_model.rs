use std::rc::Rc;

use leptos::*;

use super::repository::DashboardRepository;
use super::utils::TimesheetFormState;
use crate::api::{ApiClient, ApiError, NewTimesheet, Timesheet};
use crate::state::chat::{self, ChatStore};

#[derive(Clone)]
pub struct DashboardViewModel {
    pub chat: ChatStore,
    pub chat_input: RwSignal<String>,
    pub send_action: Action<String, ()>,
    pub form: TimesheetFormState,
    pub submit_action: Action<NewTimesheet, Result<Timesheet, ApiError>>,
    pub submit_error: RwSignal<Option<ApiError>>,
    pub submit_notice: RwSignal<Option<String>>,
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = DashboardRepository::new_with_client(Rc::new(api));

    let chat = ChatStore::new();
    let chat_input = create_rw_signal(String::new());

    let chat_client = repo.client();
    let send_action = create_action(move |text: &String| {
        let api = chat_client.clone();
        let text = text.clone();
        async move { chat::relay(&api, chat, text).await }
    });

    let form = TimesheetFormState::new();
    let submit_error = create_rw_signal(None::<ApiError>);
    let submit_notice = create_rw_signal(None::<String>);

    let repo_submit = repo.clone();
    let submit_action = create_action(move |entry: &NewTimesheet| {
        let repo = repo_submit.clone();
        let entry = entry.clone();
        async move { repo.create_timesheet(entry).await }
    });
    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(_) => {
                    submit_error.set(None);
                    submit_notice.set(Some("Timesheet submitted for approval.".to_string()));
                    form.reset();
                }
                Err(error) => {
                    submit_notice.set(None);
                    submit_error.set(Some(error));
                }
            }
        }
    });

    DashboardViewModel {
        chat,
        chat_input,
        send_action,
        form,
        submit_action,
        submit_error,
        submit_notice,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{provide_session, user_session};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn view_model_seeds_chat_and_empty_form() {
        let html = render_to_string(move || {
            provide_session(user_session());
            provide_context(ApiClient::new_with_base_url("http://127.0.0.1:1"));
            let vm = use_dashboard_view_model();
            vm.chat.clear();
            assert_eq!(vm.chat.messages().get_untracked().len(), 1);
            assert!(vm.chat_input.get_untracked().is_empty());
            assert!(vm.form.to_payload().is_err());
            view! { <div>"ok"</div> }
        });
        assert!(html.contains("ok"));
    }
}
