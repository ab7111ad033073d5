use leptos::*;

use crate::api::ChatSender;
use crate::pages::dashboard::utils::QUICK_QUESTIONS;
use crate::state::chat::ChatStore;

#[component]
pub fn ChatPanel(
    chat: ChatStore,
    input: RwSignal<String>,
    send_action: Action<String, ()>,
) -> impl IntoView {
    let pending = send_action.pending();
    let messages = chat.messages();

    let submit = move || {
        let text = input.get_untracked().trim().to_string();
        if text.is_empty() || pending.get_untracked() {
            return;
        }
        input.set(String::new());
        send_action.dispatch(text);
    };
    let submit_on_click = submit.clone();
    let submit_on_enter = submit;

    view! {
        <section class="bg-surface-elevated rounded-lg shadow-md border border-border flex flex-col">
            <div class="flex items-center justify-between px-4 py-3 border-b border-border">
                <h2 class="text-lg font-semibold text-fg">"HR Assistant"</h2>
                <button
                    type="button"
                    class="text-sm text-fg-muted hover:text-fg"
                    on:click=move |_| chat.clear()
                >
                    "Clear conversation"
                </button>
            </div>
            <div class="flex-1 overflow-y-auto p-4 space-y-3 min-h-[320px]">
                <For
                    each=move || messages.get().into_iter().enumerate()
                    key=|(index, _)| *index
                    children=move |(_, message)| {
                        let row_class = if message.sender == ChatSender::User {
                            "flex justify-end"
                        } else {
                            "flex justify-start"
                        };
                        let bubble_class = if message.sender == ChatSender::User {
                            "max-w-[75%] rounded-lg px-3 py-2 text-sm bg-action-primary-bg text-action-primary-text"
                        } else {
                            "max-w-[75%] rounded-lg px-3 py-2 text-sm bg-surface-muted text-fg"
                        };
                        view! {
                            <div class=row_class>
                                <div class=bubble_class>
                                    <p>{message.text.clone()}</p>
                                    <p class="text-xs opacity-60 mt-1">{message.timestamp.clone()}</p>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
            <div class="px-4 py-2 flex flex-wrap gap-2 border-t border-border">
                {QUICK_QUESTIONS
                    .iter()
                    .map(|question| {
                        let text = *question;
                        view! {
                            <button
                                type="button"
                                class="text-xs rounded-full border border-border px-3 py-1 text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                                on:click=move |_| {
                                    if !pending.get_untracked() {
                                        send_action.dispatch(text.to_string());
                                    }
                                }
                            >
                                {text}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="p-4 border-t border-border flex gap-2">
                <input
                    type="text"
                    class="flex-1 rounded-md border border-border bg-surface px-3 py-2 text-fg"
                    placeholder="Ask the assistant..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit_on_enter();
                        }
                    }
                />
                <button
                    type="button"
                    class="rounded-md bg-action-primary-bg text-action-primary-text px-4 py-2 text-sm font-semibold hover:bg-action-primary-bg-hover disabled:opacity-50"
                    disabled=move || pending.get()
                    on:click=move |_| submit_on_click()
                >
                    {move || if pending.get() { "Sending..." } else { "Send" }}
                </button>
            </div>
        </section>
    }
}
