use crate::{api::ApiError, components::error::InlineErrorMessage};
use leptos::ev::KeyboardEvent;
use leptos::*;

/// Yes/no confirmation. Rendered inside the shell modal, so it only draws the
/// dialog body; `error` shows a failed confirm without closing.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] message: MaybeSignal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] confirm_label: Option<String>,
    #[prop(optional, into)] cancel_label: Option<String>,
    #[prop(optional, into)] pending: MaybeSignal<bool>,
    #[prop(optional, into)] error: Option<Signal<Option<ApiError>>>,
    #[prop(optional)] destructive: bool,
) -> impl IntoView {
    let confirm_button_class = if destructive {
        "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover disabled:opacity-50"
    } else {
        "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
    };
    let confirm_label = confirm_label
        .filter(|l| !l.trim().is_empty())
        .unwrap_or_else(|| "Confirmar".to_string());
    let cancel_label = cancel_label
        .filter(|l| !l.trim().is_empty())
        .unwrap_or_else(|| "Cancelar".to_string());
    let error = error.unwrap_or_else(|| Signal::derive(|| None));

    view! {
        <div
            class="space-y-4"
            role="alertdialog"
            tabindex="-1"
            on:keydown=move |ev: KeyboardEvent| {
                if ev.key() == "Escape" {
                    ev.prevent_default();
                    on_cancel.call(());
                }
            }
        >
            <h2 class="text-lg font-semibold text-fg">{move || title.get()}</h2>
            <p class="text-sm text-fg-muted">{move || message.get()}</p>
            <InlineErrorMessage error=error />
            <div class="flex justify-end gap-2">
                <button
                    type="button"
                    class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated"
                    on:click=move |_| on_cancel.call(())
                >
                    {cancel_label}
                </button>
                <button
                    type="button"
                    class=confirm_button_class
                    disabled=move || pending.get()
                    on:click=move |_| on_confirm.call(())
                >
                    {confirm_label}
                </button>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn confirm_dialog_renders_with_default_labels() {
        let html = render_to_string(move || {
            view! {
                <ConfirmDialog
                    title="Confirmar Exclusão"
                    message="Tem certeza de que deseja excluir o funcionário Ana Souza?"
                    on_confirm=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("role=\"alertdialog\""));
        assert!(html.contains("Ana Souza"));
        assert!(html.contains("Confirmar"));
        assert!(html.contains("Cancelar"));
    }

    #[test]
    fn confirm_dialog_uses_custom_labels_and_shows_error() {
        let html = render_to_string(move || {
            let error = create_rw_signal(Some(ApiError::forbidden()));
            view! {
                <ConfirmDialog
                    title="Confirmar Exclusão"
                    message="?"
                    confirm_label="Excluir"
                    on_confirm=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                    error=Signal::from(error)
                    destructive=true
                />
            }
        });
        assert!(html.contains("Excluir"));
        assert!(html.contains("bg-action-danger-bg"));
        assert!(html.contains(crate::api::FORBIDDEN_MESSAGE));
    }
}
