use std::rc::Rc;

use leptos::*;

use super::repository::AdminRepository;
use super::utils::{AdminTab, ApprovalFlow, Decision, EntityKind, PendingAction};
use crate::api::{AdminData, ApiClient, ApiError};
use crate::components::guard::is_admin_session;
use crate::state::session::use_session;

/// Stamped into `approved_by` on every decision taken from this panel.
const APPROVER: &str = "admin";

#[derive(Clone)]
pub struct AdminViewModel {
    pub data_resource: Resource<(bool, u32), Result<AdminData, ApiError>>,
    pub reload: RwSignal<u32>,
    pub active_tab: RwSignal<AdminTab>,
    pub flow: RwSignal<ApprovalFlow>,
    pub comment: RwSignal<String>,
    pub action: Action<PendingAction, Result<(), ApiError>>,
    pub action_error: RwSignal<Option<ApiError>>,
}

async fn submit_decision(
    repo: &AdminRepository,
    action: &PendingAction,
    comment: &str,
) -> Result<(), ApiError> {
    match (action.kind, action.decision) {
        (EntityKind::Leave, decision) => {
            repo.update_leave_status(action.id, decision.status(), APPROVER, comment)
                .await?;
            Ok(())
        }
        (EntityKind::Timesheet, Decision::Approve) => {
            repo.approve_timesheet(action.id, APPROVER).await?;
            Ok(())
        }
        (EntityKind::Timesheet, Decision::Reject) => {
            repo.reject_timesheet(action.id, APPROVER).await
        }
    }
}

pub fn use_admin_view_model() -> AdminViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = AdminRepository::new_with_client(Rc::new(api));

    let (session, _) = use_session();
    let admin_allowed = create_memo(move |_| is_admin_session(&session.get()));

    let reload = create_rw_signal(0u32);
    let active_tab = create_rw_signal(AdminTab::default());
    let flow = create_rw_signal(ApprovalFlow::default());
    let comment = create_rw_signal(String::new());
    let action_error = create_rw_signal(None::<ApiError>);

    let repo_fetch = repo.clone();
    let data_resource = create_resource(
        move || (admin_allowed.get(), reload.get()),
        move |(allowed, _)| {
            let repo = repo_fetch.clone();
            async move {
                if allowed {
                    repo.fetch_admin_data().await
                } else {
                    Ok(AdminData::default())
                }
            }
        },
    );

    let repo_action = repo;
    let action = create_action(move |pending: &PendingAction| {
        let repo = repo_action.clone();
        let pending = pending.clone();
        let comment_text = comment.get_untracked();
        async move { submit_decision(&repo, &pending, &comment_text).await }
    });
    create_effect(move |_| {
        if let Some(result) = action.value().get() {
            flow.update(|flow| flow.finish());
            match result {
                Ok(()) => {
                    action_error.set(None);
                    comment.set(String::new());
                    // full refetch keeps the tab counts in sync
                    reload.update(|n| *n += 1);
                }
                Err(error) => action_error.set(Some(error)),
            }
        }
    });

    AdminViewModel {
        data_resource,
        reload,
        active_tab,
        flow,
        comment,
        action,
        action_error,
    }
}
