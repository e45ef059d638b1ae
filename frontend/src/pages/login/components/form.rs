use crate::{
    api::ApiError,
    components::{common::Button, error::InlineErrorMessage},
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginForm(
    username: Signal<String>,
    password: Signal<String>,
    error: Signal<Option<ApiError>>,
    pending: Signal<bool>,
    on_username_input: Callback<String>,
    on_password_input: Callback<String>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8 rounded-lg bg-surface-elevated border border-border shadow p-8">
                <h2 class="text-center text-3xl font-extrabold text-fg">{"Login"}</h2>
                <form class="space-y-6" on:submit=move |ev| on_submit.call(ev)>
                    <div class="space-y-4">
                        <div>
                            <label for="username" class="block text-sm font-medium text-fg">{"Usuário:"}</label>
                            <input
                                id="username"
                                name="username"
                                type="text"
                                autocomplete="username"
                                required
                                class="mt-1 w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg"
                                prop:value=move || username.get()
                                on:input=move |ev| on_username_input.call(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label for="password" class="block text-sm font-medium text-fg">{"Senha:"}</label>
                            <input
                                id="password"
                                name="password"
                                type="password"
                                autocomplete="current-password"
                                required
                                class="mt-1 w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg"
                                prop:value=move || password.get()
                                on:input=move |ev| on_password_input.call(event_target_value(&ev))
                            />
                        </div>
                    </div>
                    <InlineErrorMessage error=error />
                    <Button class="w-full" loading=pending attr:type="submit">
                        {"Entrar"}
                    </Button>
                </form>
            </div>
            <a href="/funcionarios" class="mt-6 text-sm font-medium text-fg-muted hover:text-fg underline">
                {"Área do gestor"}
            </a>
        </div>
    }
}
