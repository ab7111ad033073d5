use leptos::*;

use crate::api::{ApprovalStatus, EmailRecord, LeaveRequest, TaskRecord, Timesheet};
use crate::pages::admin::utils::{Decision, EntityKind, PendingAction};

const TH: &str = "px-3 py-2 text-left text-xs font-semibold uppercase tracking-wide text-fg-muted";
const TD: &str = "px-3 py-2 text-sm text-fg";

fn status_badge(status: ApprovalStatus) -> impl IntoView {
    let class = match status {
        ApprovalStatus::Pending => "inline-block rounded-full px-2 py-0.5 text-xs bg-status-warning-bg text-status-warning-text",
        ApprovalStatus::Approved => "inline-block rounded-full px-2 py-0.5 text-xs bg-status-success-bg text-status-success-text",
        ApprovalStatus::Rejected => "inline-block rounded-full px-2 py-0.5 text-xs bg-status-danger-bg text-status-danger-text",
    };
    view! { <span class=class>{status.label()}</span> }
}

fn decision_buttons(
    kind: EntityKind,
    id: i64,
    summary: String,
    on_decide: Callback<PendingAction>,
) -> impl IntoView {
    let approve_summary = summary.clone();
    let reject_summary = summary;
    view! {
        <div class="flex gap-2">
            <button
                type="button"
                class="rounded-md bg-action-primary-bg text-action-primary-text px-2 py-1 text-xs font-semibold hover:bg-action-primary-bg-hover"
                on:click=move |_| {
                    on_decide.call(PendingAction {
                        kind,
                        id,
                        summary: approve_summary.clone(),
                        decision: Decision::Approve,
                    })
                }
            >
                "Approve"
            </button>
            <button
                type="button"
                class="rounded-md bg-action-danger-bg text-action-danger-text px-2 py-1 text-xs font-semibold hover:bg-action-danger-bg-hover"
                on:click=move |_| {
                    on_decide.call(PendingAction {
                        kind,
                        id,
                        summary: reject_summary.clone(),
                        decision: Decision::Reject,
                    })
                }
            >
                "Reject"
            </button>
        </div>
    }
}

fn empty_row(colspan: u32) -> impl IntoView {
    view! {
        <tr>
            <td class="px-3 py-6 text-center text-sm text-fg-muted" colspan=colspan>
                "No records."
            </td>
        </tr>
    }
}

#[component]
pub fn LeaveTable(
    rows: Signal<Vec<LeaveRequest>>,
    #[prop(optional)] reviewable: bool,
    #[prop(optional)] on_decide: Option<Callback<PendingAction>>,
) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-border">
                <thead>
                    <tr>
                        <th class=TH>"Employee"</th>
                        <th class=TH>"Date"</th>
                        <th class=TH>"Type"</th>
                        <th class=TH>"Reason"</th>
                        <th class=TH>"Status"</th>
                        <th class=TH>{if reviewable { "Actions" } else { "Approved by" }}</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    {move || {
                        let rows = rows.get();
                        if rows.is_empty() {
                            return vec![empty_row(6).into_view()];
                        }
                        rows.into_iter()
                            .map(|leave| {
                                let last_cell = if reviewable {
                                    match on_decide {
                                        Some(on_decide) => decision_buttons(
                                            EntityKind::Leave,
                                            leave.id,
                                            format!("leave request #{}", leave.id),
                                            on_decide,
                                        )
                                        .into_view(),
                                        None => ().into_view(),
                                    }
                                } else {
                                    leave.approved_by.clone().unwrap_or_default().into_view()
                                };
                                view! {
                                    <tr>
                                        <td class=TD>{leave.user_id.clone()}</td>
                                        <td class=TD>{leave.date.clone()}</td>
                                        <td class=TD>{leave.leave_type.clone()}</td>
                                        <td class=TD>{leave.reason.clone()}</td>
                                        <td class=TD>{status_badge(leave.status)}</td>
                                        <td class=TD>{last_cell}</td>
                                    </tr>
                                }
                                .into_view()
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[component]
pub fn TimesheetTable(
    rows: Signal<Vec<Timesheet>>,
    #[prop(optional)] reviewable: bool,
    #[prop(optional)] on_decide: Option<Callback<PendingAction>>,
) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-border">
                <thead>
                    <tr>
                        <th class=TH>"Employee"</th>
                        <th class=TH>"Date"</th>
                        <th class=TH>"Hours"</th>
                        <th class=TH>"Summary"</th>
                        <th class=TH>"Status"</th>
                        <th class=TH>{if reviewable { "Actions" } else { "Approved by" }}</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    {move || {
                        let rows = rows.get();
                        if rows.is_empty() {
                            return vec![empty_row(6).into_view()];
                        }
                        rows.into_iter()
                            .map(|entry| {
                                let last_cell = if reviewable {
                                    match on_decide {
                                        Some(on_decide) => decision_buttons(
                                            EntityKind::Timesheet,
                                            entry.id,
                                            format!("timesheet #{}", entry.id),
                                            on_decide,
                                        )
                                        .into_view(),
                                        None => ().into_view(),
                                    }
                                } else {
                                    entry.approved_by.clone().unwrap_or_default().into_view()
                                };
                                view! {
                                    <tr>
                                        <td class=TD>{entry.user_id.clone()}</td>
                                        <td class=TD>{entry.date.clone()}</td>
                                        <td class=TD>{format!("{:.1}", entry.hours)}</td>
                                        <td class=TD>{entry.task_summary.clone().unwrap_or_default()}</td>
                                        <td class=TD>{status_badge(entry.status)}</td>
                                        <td class=TD>{last_cell}</td>
                                    </tr>
                                }
                                .into_view()
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[component]
pub fn EmailTable(rows: Signal<Vec<EmailRecord>>) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-border">
                <thead>
                    <tr>
                        <th class=TH>"From"</th>
                        <th class=TH>"To"</th>
                        <th class=TH>"Subject"</th>
                        <th class=TH>"Type"</th>
                        <th class=TH>"Status"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    {move || {
                        let rows = rows.get();
                        if rows.is_empty() {
                            return vec![empty_row(5).into_view()];
                        }
                        rows.into_iter()
                            .map(|email| {
                                view! {
                                    <tr>
                                        <td class=TD>{email.sender.clone()}</td>
                                        <td class=TD>{email.recipient.clone()}</td>
                                        <td class=TD>{email.subject.clone()}</td>
                                        <td class=TD>{email.kind.clone()}</td>
                                        <td class=TD>{email.status.clone()}</td>
                                    </tr>
                                }
                                .into_view()
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[component]
pub fn TaskTable(rows: Signal<Vec<TaskRecord>>) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-border">
                <thead>
                    <tr>
                        <th class=TH>"Employee"</th>
                        <th class=TH>"Title"</th>
                        <th class=TH>"Priority"</th>
                        <th class=TH>"Status"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    {move || {
                        let rows = rows.get();
                        if rows.is_empty() {
                            return vec![empty_row(4).into_view()];
                        }
                        rows.into_iter()
                            .map(|task| {
                                view! {
                                    <tr>
                                        <td class=TD>{task.user_id.clone()}</td>
                                        <td class=TD>{task.title.clone()}</td>
                                        <td class=TD>{task.priority.clone()}</td>
                                        <td class=TD>{task.status.clone()}</td>
                                    </tr>
                                }
                                .into_view()
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    fn leave(id: i64, status: ApprovalStatus) -> LeaveRequest {
        LeaveRequest {
            id,
            user_id: format!("emp-{}", id),
            email: format!("emp-{}@example.com", id),
            date: "2025-06-01".to_string(),
            leave_type: "annual".to_string(),
            reason: "family trip".to_string(),
            status,
            approved_by: (status == ApprovalStatus::Approved).then(|| "admin".to_string()),
            approval_comment: None,
        }
    }

    #[test]
    fn pending_leave_table_offers_decisions() {
        let html = render_to_string(move || {
            let rows = Signal::derive(|| vec![leave(1, ApprovalStatus::Pending)]);
            view! {
                <LeaveTable
                    rows=rows
                    reviewable=true
                    on_decide=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("emp-1"));
        assert!(html.contains("family trip"));
        assert!(html.contains("Approve"));
        assert!(html.contains("Reject"));
    }

    #[test]
    fn approved_leave_table_shows_approver_instead_of_actions() {
        let html = render_to_string(move || {
            let rows = Signal::derive(|| vec![leave(2, ApprovalStatus::Approved)]);
            view! { <LeaveTable rows=rows /> }
        });
        assert!(html.contains("Approved by"));
        assert!(html.contains("admin"));
        assert!(!html.contains("Reject"));
    }

    #[test]
    fn empty_table_renders_placeholder_row() {
        let html = render_to_string(move || {
            let rows = Signal::derive(Vec::<TaskRecord>::new);
            view! { <TaskTable rows=rows /> }
        });
        assert!(html.contains("No records."));
    }
}
