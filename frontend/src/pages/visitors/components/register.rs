use crate::{
    api::{ApiError, Visitor, VisitorPayload, VisitorRef},
    components::{common::Button, error::InlineErrorMessage},
    pages::visitors::{
        components::fields::VisitorFields,
        utils::{VisitorFormState, REGISTERED_MESSAGE},
        view_model::use_visitors_repository,
    },
    state::{
        roster::use_roster,
        shell::{use_shell, ModalOutcome, ModalTicket},
    },
};
use leptos::{ev::SubmitEvent, *};

/// On success the modal hands off to visit scheduling for the new visitor.
#[component]
pub fn RegisterVisitorForm() -> impl IntoView {
    let shell = use_shell();
    let roster = use_roster::<Visitor>();
    let repository = use_visitors_repository();
    let form = create_rw_signal(VisitorFormState::default());
    let error = create_rw_signal(None::<ApiError>);

    let register_action = create_action(
        move |(payload, ticket): &(VisitorPayload, ModalTicket)| {
            let repo = repository.clone();
            let payload = payload.clone();
            let ticket = *ticket;
            async move {
                let result = repo.register_visitor(payload).await;
                match &result {
                    Ok(Some(visitor)) => {
                        log::info!("{} ({})", REGISTERED_MESSAGE, visitor.id);
                        roster.upsert(visitor.clone());
                        shell.chain_modal_if(
                            ticket,
                            ModalOutcome::VisitorRegistered(VisitorRef::from(visitor)),
                        );
                    }
                    Ok(None) => {
                        log::warn!("Visitor created without a response body; not chaining a visit");
                        roster.invalidate();
                        shell.close_modal_if(ticket);
                    }
                    Err(_) => {}
                }
                result
            }
        },
    );
    let pending = register_action.pending();

    create_effect(move |_| {
        if let Some(Err(err)) = register_action.value().get() {
            log::error!("Failed to register visitor: {}", err);
            error.set(Some(err));
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        match form.with_untracked(VisitorFormState::to_request) {
            Ok(payload) => {
                error.set(None);
                register_action.dispatch((payload, shell.ticket()));
            }
            Err(err) => error.set(Some(err)),
        }
    };

    view! {
        <form class="space-y-4" on:submit=on_submit>
            <InlineErrorMessage error=error.into() />
            <VisitorFields form=form />
            <div class="flex justify-end">
                <Button loading=pending attr:type="submit">{"Cadastrar"}</Button>
            </div>
        </form>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::shell::{provide_shell, ShellState};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn register_form_renders_fields_camera_and_submit() {
        let html = render_to_string(move || {
            provide_shell(ShellState::default());
            view! { <RegisterVisitorForm /> }
        });
        assert!(html.contains("field-surName"));
        assert!(html.contains("Foto"));
        assert!(html.contains("Cadastrar"));
    }
}
