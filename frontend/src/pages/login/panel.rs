use leptos::*;

use super::utils::BackendStatus;
use super::view_model::LoginViewModel;
use crate::components::error::InlineErrorMessage;
use crate::components::layout::SuccessMessage;

#[component]
pub fn LoginPanel(vm: LoginViewModel) -> impl IntoView {
    let form = vm.form;
    let register_form = vm.register_form;
    let show_register = vm.show_register;
    let login_error = vm.login_error;
    let register_error = vm.register_error;
    let register_notice = vm.register_notice;
    let login_action = vm.login_action;
    let register_action = vm.register_action;
    let health_resource = vm.health_resource;
    let recheck_health = vm.recheck_health;

    let login_pending = login_action.pending();
    let register_pending = register_action.pending();

    let backend_status =
        Signal::derive(move || BackendStatus::from_resource(health_resource.get()));

    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.to_payload() {
            Ok(payload) => {
                login_error.set(None);
                login_action.dispatch(payload);
            }
            Err(error) => login_error.set(Some(error)),
        }
    };

    let on_register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match register_form.to_payload() {
            Ok(payload) => {
                register_error.set(None);
                register_action.dispatch(payload);
            }
            Err(error) => register_error.set(Some(error)),
        }
    };

    view! {
        <div class="min-h-screen bg-surface flex items-center justify-center p-4">
            <div class="w-full max-w-md bg-surface-elevated rounded-lg shadow-md border border-border p-8 space-y-6">
                <div class="space-y-1">
                    <h1 class="text-2xl font-semibold text-fg">"AI Assistant Portal"</h1>
                    <div class="flex items-center gap-2 text-sm text-fg-muted">
                        <span class=move || backend_status.get().dot_class()></span>
                        <span>{move || backend_status.get().label()}</span>
                        <button
                            type="button"
                            class="underline hover:text-fg"
                            on:click=move |_| recheck_health.update(|n| *n += 1)
                        >
                            "Recheck"
                        </button>
                    </div>
                </div>

                {move || register_notice.get().map(|notice| view! { <SuccessMessage message=notice /> })}

                <Show
                    when=move || !show_register.get()
                    fallback=move || view! {
                        <form class="space-y-4" on:submit=on_register>
                            <InlineErrorMessage error={register_error.into()} />
                            <div>
                                <label class="block text-sm font-medium text-fg-muted mb-1">"Username"</label>
                                <input
                                    type="text"
                                    class="w-full rounded-md border border-border bg-surface px-3 py-2 text-fg"
                                    prop:value=move || register_form.username.get()
                                    on:input=move |ev| register_form.username.set(event_target_value(&ev))
                                />
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-fg-muted mb-1">"Email"</label>
                                <input
                                    type="email"
                                    class="w-full rounded-md border border-border bg-surface px-3 py-2 text-fg"
                                    prop:value=move || register_form.email.get()
                                    on:input=move |ev| register_form.email.set(event_target_value(&ev))
                                />
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-fg-muted mb-1">"Password"</label>
                                <input
                                    type="password"
                                    class="w-full rounded-md border border-border bg-surface px-3 py-2 text-fg"
                                    prop:value=move || register_form.password.get()
                                    on:input=move |ev| register_form.password.set(event_target_value(&ev))
                                />
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-fg-muted mb-1">"Role"</label>
                                <select
                                    class="w-full rounded-md border border-border bg-surface px-3 py-2 text-fg"
                                    on:change=move |ev| register_form.role.set(event_target_value(&ev))
                                >
                                    <option value="user" selected=move || register_form.role.get() == "user">"Employee"</option>
                                    <option value="admin" selected=move || register_form.role.get() == "admin">"Administrator"</option>
                                </select>
                            </div>
                            <button
                                type="submit"
                                class="w-full rounded-md bg-action-primary-bg text-action-primary-text px-4 py-2 text-sm font-semibold hover:bg-action-primary-bg-hover disabled:opacity-50"
                                disabled=move || register_pending.get()
                            >
                                {move || if register_pending.get() { "Creating account..." } else { "Create account" }}
                            </button>
                            <button
                                type="button"
                                class="w-full text-sm text-fg-muted hover:text-fg"
                                on:click=move |_| show_register.set(false)
                            >
                                "Back to sign in"
                            </button>
                        </form>
                    }
                >
                    <form class="space-y-4" on:submit=on_login>
                        <InlineErrorMessage error={login_error.into()} />
                        <div>
                            <label class="block text-sm font-medium text-fg-muted mb-1">"Username"</label>
                            <input
                                type="text"
                                class="w-full rounded-md border border-border bg-surface px-3 py-2 text-fg"
                                prop:value=move || form.username.get()
                                on:input=move |ev| form.username.set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label class="block text-sm font-medium text-fg-muted mb-1">"Password"</label>
                            <input
                                type="password"
                                class="w-full rounded-md border border-border bg-surface px-3 py-2 text-fg"
                                prop:value=move || form.password.get()
                                on:input=move |ev| form.password.set(event_target_value(&ev))
                            />
                        </div>
                        <button
                            type="submit"
                            class="w-full rounded-md bg-action-primary-bg text-action-primary-text px-4 py-2 text-sm font-semibold hover:bg-action-primary-bg-hover disabled:opacity-50"
                            disabled=move || login_pending.get()
                        >
                            {move || if login_pending.get() { "Signing in..." } else { "Sign in" }}
                        </button>
                        <button
                            type="button"
                            class="w-full text-sm text-fg-muted hover:text-fg"
                            on:click=move |_| show_register.set(true)
                        >
                            "Need an account? Register"
                        </button>
                    </form>
                </Show>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::pages::login::view_model::use_login_view_model;
    use crate::test_support::helpers::provide_session;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn login_panel_renders_sign_in_form() {
        let html = render_to_string(move || {
            provide_session(Default::default());
            provide_context(ApiClient::new_with_base_url("http://127.0.0.1:1"));
            let vm = use_login_view_model();
            view! { <LoginPanel vm=vm /> }
        });
        assert!(html.contains("Sign in"));
        assert!(html.contains("AI Assistant Portal"));
        assert!(html.contains("Need an account? Register"));
    }
}
