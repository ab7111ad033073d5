use leptos::*;

use super::components::tables::{EmailTable, LeaveTable, TaskTable, TimesheetTable};
use super::utils::{
    leaves_with_status, timesheets_with_status, AdminTab, Decision, EntityKind, PendingAction,
};
use super::view_model::AdminViewModel;
use crate::api::{AdminData, ApprovalStatus};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::error::InlineErrorMessage;
use crate::components::layout::{ErrorMessage, LoadingSpinner};

fn tab_count(data: &AdminData, tab: AdminTab) -> usize {
    match tab {
        AdminTab::PendingLeaves => leaves_with_status(&data.leaves, ApprovalStatus::Pending).len(),
        AdminTab::ApprovedLeaves => {
            leaves_with_status(&data.leaves, ApprovalStatus::Approved).len()
        }
        AdminTab::PendingTimesheets => {
            timesheets_with_status(&data.timesheets, ApprovalStatus::Pending).len()
        }
        AdminTab::ApprovedTimesheets => {
            timesheets_with_status(&data.timesheets, ApprovalStatus::Approved).len()
        }
        AdminTab::Emails => data.emails.len(),
        AdminTab::Tasks => data.tasks.len(),
    }
}

#[component]
pub fn AdminPanel(vm: AdminViewModel) -> impl IntoView {
    let data_resource = vm.data_resource;
    let reload = vm.reload;
    let active_tab = vm.active_tab;
    let flow = vm.flow;
    let comment = vm.comment;
    let action = vm.action;
    let action_error = vm.action_error;

    let data = create_memo(move |_| {
        data_resource
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default()
    });
    let load_error = create_memo(move |_| data_resource.get().and_then(|result| result.err()));
    let loading = move || data_resource.loading().get();

    let on_decide = Callback::new(move |pending: PendingAction| {
        action_error.set(None);
        flow.update(|flow| {
            flow.begin(pending);
        });
    });

    let dialog_open = Signal::derive(move || flow.get().pending().is_some());
    let dialog_title = Signal::derive(move || {
        flow.get()
            .pending()
            .map(|pending| format!("{} {}", pending.decision.verb(), pending.summary))
            .unwrap_or_default()
    });
    let dialog_message = Signal::derive(move || {
        flow.get()
            .pending()
            .map(|pending| match pending.decision {
                Decision::Approve => {
                    format!("Approve {}? This is recorded immediately.", pending.summary)
                }
                Decision::Reject => {
                    format!("Reject {}? This is recorded immediately.", pending.summary)
                }
            })
            .unwrap_or_default()
    });
    let dialog_destructive = Signal::derive(move || {
        matches!(flow.get().pending().map(|p| p.decision), Some(Decision::Reject))
    });
    let dialog_busy = Signal::derive(move || flow.get().is_submitting());
    let comment_applies = Signal::derive(move || {
        matches!(flow.get().pending().map(|p| p.kind), Some(EntityKind::Leave))
    });

    let on_confirm = Callback::new(move |_| {
        let mut current = flow.get_untracked();
        if let Some(pending) = current.confirm() {
            flow.set(current);
            action.dispatch(pending);
        }
    });
    let on_cancel = Callback::new(move |_| {
        flow.update(|flow| flow.cancel());
        comment.set(String::new());
    });

    view! {
        <div class="space-y-4 px-4">
            <div class="flex items-center justify-between">
                <h1 class="text-xl font-semibold text-fg">"Admin Panel"</h1>
                <button
                    type="button"
                    class="rounded-md border border-border px-3 py-1.5 text-sm text-fg-muted hover:text-fg"
                    on:click=move |_| reload.update(|n| *n += 1)
                >
                    "Refresh"
                </button>
            </div>

            {move || load_error.get().map(|error| view! { <ErrorMessage message=error.to_string() /> })}
            <InlineErrorMessage error={action_error.into()} />

            <div class="flex flex-wrap gap-2 border-b border-border pb-2">
                {AdminTab::ALL
                    .iter()
                    .map(|tab| {
                        let tab = *tab;
                        let selected = move || active_tab.get() == tab;
                        view! {
                            <button
                                type="button"
                                class=move || {
                                    if selected() {
                                        "rounded-md bg-action-primary-bg text-action-primary-text px-3 py-1.5 text-sm font-semibold"
                                    } else {
                                        "rounded-md px-3 py-1.5 text-sm text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                                    }
                                }
                                on:click=move |_| active_tab.set(tab)
                            >
                                {move || format!("{} ({})", tab.label(), tab_count(&data.get(), tab))}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <Show when=move || loading()>
                <LoadingSpinner />
            </Show>

            <section class="bg-surface-elevated rounded-lg shadow-md border border-border">
                {move || match active_tab.get() {
                    AdminTab::PendingLeaves => {
                        let rows = Signal::derive(move || {
                            leaves_with_status(&data.get().leaves, ApprovalStatus::Pending)
                        });
                        view! { <LeaveTable rows=rows reviewable=true on_decide=on_decide /> }
                            .into_view()
                    }
                    AdminTab::ApprovedLeaves => {
                        let rows = Signal::derive(move || {
                            leaves_with_status(&data.get().leaves, ApprovalStatus::Approved)
                        });
                        view! { <LeaveTable rows=rows /> }.into_view()
                    }
                    AdminTab::PendingTimesheets => {
                        let rows = Signal::derive(move || {
                            timesheets_with_status(&data.get().timesheets, ApprovalStatus::Pending)
                        });
                        view! { <TimesheetTable rows=rows reviewable=true on_decide=on_decide /> }
                            .into_view()
                    }
                    AdminTab::ApprovedTimesheets => {
                        let rows = Signal::derive(move || {
                            timesheets_with_status(&data.get().timesheets, ApprovalStatus::Approved)
                        });
                        view! { <TimesheetTable rows=rows /> }.into_view()
                    }
                    AdminTab::Emails => {
                        let rows = Signal::derive(move || data.get().emails);
                        view! { <EmailTable rows=rows /> }.into_view()
                    }
                    AdminTab::Tasks => {
                        let rows = Signal::derive(move || data.get().tasks);
                        view! { <TaskTable rows=rows /> }.into_view()
                    }
                }}
            </section>

            <ConfirmDialog
                is_open=dialog_open
                title=dialog_title
                message=dialog_message
                on_confirm=on_confirm
                on_cancel=on_cancel
                confirm_disabled=dialog_busy
                destructive=dialog_destructive
            >
                {move || {
                    view! {
                        <Show when=move || comment_applies.get()>
                            <textarea
                                class="w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg"
                                rows=2
                                placeholder="Approval comment (optional)"
                                prop:value=move || comment.get()
                                on:input=move |ev| comment.set(event_target_value(&ev))
                            ></textarea>
                        </Show>
                    }
                }}
            </ConfirmDialog>
        </div>
    }
}
