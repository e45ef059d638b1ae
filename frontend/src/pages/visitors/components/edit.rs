use crate::{
    api::{Visitor, VisitorPayload},
    components::{
        common::Button,
        error::InlineErrorMessage,
        layout::{LoadingSpinner, SuccessMessage},
    },
    pages::visitors::{
        components::fields::VisitorFields,
        utils::{VisitorFormState, UPDATED_MESSAGE},
        view_model::use_visitors_repository,
    },
    state::roster::use_roster,
    utils::messages::MessageState,
};
use leptos::{ev::SubmitEvent, *};

/// Loads the visitor fresh from the server; a newly captured photo replaces the stored one.
#[component]
pub fn EditVisitorForm(visitor_id: i64) -> impl IntoView {
    let roster = use_roster::<Visitor>();
    let repository = use_visitors_repository();
    let form = create_rw_signal(VisitorFormState::default());
    let messages = create_rw_signal(MessageState::default());
    let loaded = create_rw_signal(false);

    let repo_for_resource = repository.clone();
    let visitor_resource = create_resource(
        move || visitor_id,
        move |id| {
            let repo = repo_for_resource.clone();
            async move { repo.fetch_visitor(id).await }
        },
    );

    create_effect(move |_| match visitor_resource.get() {
        Some(Ok(visitor)) => {
            form.set(VisitorFormState::from_visitor(&visitor));
            loaded.set(true);
        }
        Some(Err(err)) => {
            log::error!("Failed to load visitor {}: {}", visitor_id, err);
            messages.update(|state| state.set_error(err));
        }
        None => {}
    });

    let repo_for_update = repository;
    let update_action = create_action(move |payload: &VisitorPayload| {
        let repo = repo_for_update.clone();
        let payload = payload.clone();
        async move {
            let result = repo.update_visitor(visitor_id, payload).await;
            match &result {
                Ok(Some(visitor)) => roster.upsert(visitor.clone()),
                Ok(None) => roster.invalidate(),
                Err(_) => {}
            }
            result
        }
    });
    let pending = update_action.pending();

    create_effect(move |_| {
        if let Some(result) = update_action.value().get() {
            match result {
                Ok(_) => messages.update(|state| state.set_success(UPDATED_MESSAGE)),
                Err(err) => {
                    log::error!("Failed to update visitor {}: {}", visitor_id, err);
                    messages.update(|state| state.set_error(err));
                }
            }
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        match form.with_untracked(VisitorFormState::to_request) {
            Ok(payload) => {
                messages.update(MessageState::clear);
                update_action.dispatch(payload);
            }
            Err(err) => messages.update(|state| state.set_error(err)),
        }
    };

    let error = Signal::derive(move || messages.with(|state| state.error.clone()));
    let success = move || messages.with(|state| state.success.clone());

    view! {
        <div class="space-y-4">
            <InlineErrorMessage error=error />
            {move || success().map(|message| view! { <SuccessMessage message=message /> })}
            <Show when=move || loaded.get() fallback=|| view! { <LoadingSpinner /> }>
                <form class="space-y-4" on:submit=on_submit>
                    <VisitorFields form=form />
                    <div class="flex justify-end">
                        <Button loading=pending attr:type="submit">{"Salvar Alterações"}</Button>
                    </div>
                </form>
            </Show>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn edit_form_waits_for_the_visitor() {
        let html = render_to_string(move || view! { <EditVisitorForm visitor_id=4 /> });
        assert!(html.contains("animate-spin"));
        assert!(!html.contains("Salvar Alterações"));
    }
}
