use leptos::*;

use crate::api::{ApiError, NewTimesheet, Timesheet};
use crate::components::error::InlineErrorMessage;
use crate::components::layout::SuccessMessage;
use crate::pages::dashboard::utils::TimesheetFormState;

#[component]
pub fn TimesheetForm(
    form: TimesheetFormState,
    submit_action: Action<NewTimesheet, Result<Timesheet, ApiError>>,
    submit_error: RwSignal<Option<ApiError>>,
    submit_notice: RwSignal<Option<String>>,
) -> impl IntoView {
    let pending = submit_action.pending();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.to_payload() {
            Ok(entry) => {
                submit_error.set(None);
                submit_action.dispatch(entry);
            }
            Err(error) => {
                submit_notice.set(None);
                submit_error.set(Some(error));
            }
        }
    };

    view! {
        <section class="bg-surface-elevated rounded-lg shadow-md border border-border p-4 space-y-4">
            <h2 class="text-lg font-semibold text-fg">"Submit Timesheet"</h2>
            {move || submit_notice.get().map(|notice| view! { <SuccessMessage message=notice /> })}
            <InlineErrorMessage error={submit_error.into()} />
            <form class="grid grid-cols-1 sm:grid-cols-2 gap-4" on:submit=on_submit>
                <div>
                    <label class="block text-sm font-medium text-fg-muted mb-1">"Employee ID"</label>
                    <input
                        type="text"
                        class="w-full rounded-md border border-border bg-surface px-3 py-2 text-fg"
                        prop:value=move || form.user_id.get()
                        on:input=move |ev| form.user_id.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg-muted mb-1">"Email"</label>
                    <input
                        type="email"
                        class="w-full rounded-md border border-border bg-surface px-3 py-2 text-fg"
                        prop:value=move || form.email.get()
                        on:input=move |ev| form.email.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg-muted mb-1">"Date"</label>
                    <input
                        type="date"
                        class="w-full rounded-md border border-border bg-surface px-3 py-2 text-fg"
                        prop:value=move || form.date.get()
                        on:input=move |ev| form.date.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg-muted mb-1">"Hours"</label>
                    <input
                        type="text"
                        class="w-full rounded-md border border-border bg-surface px-3 py-2 text-fg"
                        prop:value=move || form.hours.get()
                        on:input=move |ev| form.hours.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg-muted mb-1">"From"</label>
                    <input
                        type="time"
                        class="w-full rounded-md border border-border bg-surface px-3 py-2 text-fg"
                        prop:value=move || form.from_time.get()
                        on:input=move |ev| form.from_time.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg-muted mb-1">"To"</label>
                    <input
                        type="time"
                        class="w-full rounded-md border border-border bg-surface px-3 py-2 text-fg"
                        prop:value=move || form.to_time.get()
                        on:input=move |ev| form.to_time.set(event_target_value(&ev))
                    />
                </div>
                <div class="sm:col-span-2">
                    <label class="block text-sm font-medium text-fg-muted mb-1">"Task summary"</label>
                    <input
                        type="text"
                        class="w-full rounded-md border border-border bg-surface px-3 py-2 text-fg"
                        prop:value=move || form.task_summary.get()
                        on:input=move |ev| form.task_summary.set(event_target_value(&ev))
                    />
                </div>
                <div class="sm:col-span-2">
                    <label class="block text-sm font-medium text-fg-muted mb-1">"Description"</label>
                    <textarea
                        class="w-full rounded-md border border-border bg-surface px-3 py-2 text-fg"
                        rows=3
                        prop:value=move || form.description.get()
                        on:input=move |ev| form.description.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="sm:col-span-2">
                    <button
                        type="submit"
                        class="rounded-md bg-action-primary-bg text-action-primary-text px-4 py-2 text-sm font-semibold hover:bg-action-primary-bg-hover disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Submitting..." } else { "Submit timesheet" }}
                    </button>
                </div>
            </form>
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn timesheet_form_renders_all_fields() {
        let html = render_to_string(move || {
            let form = TimesheetFormState::new();
            let submit_action =
                create_action(|_: &NewTimesheet| async { Err(ApiError::Timeout) });
            let submit_error = create_rw_signal(None);
            let submit_notice = create_rw_signal(None);
            view! {
                <TimesheetForm
                    form=form
                    submit_action=submit_action
                    submit_error=submit_error
                    submit_notice=submit_notice
                />
            }
        });
        assert!(html.contains("Submit Timesheet"));
        assert!(html.contains("Employee ID"));
        assert!(html.contains("Hours"));
        assert!(html.contains("Task summary"));
    }
}
