use crate::{
    api::{ApiError, NewVisit, Visit, VisitorRef},
    components::{
        common::{Button, TextField},
        error::InlineErrorMessage,
    },
    pages::visits::{
        utils::VisitFormState,
        view_model::{use_visits_reload, use_visits_repository},
    },
    state::shell::{use_shell, ModalTicket},
    utils::time::{display_parts, now_in_app_tz, visit_timestamp},
};
use leptos::{ev::SubmitEvent, *};

/// Visit scheduling for one visitor, stamped with the current time in the
/// application zone.
#[component]
pub fn ScheduleVisitForm(visitor: VisitorRef) -> impl IntoView {
    let shell = use_shell();
    let reload = use_visits_reload();
    let repository = use_visits_repository();
    let form = create_rw_signal(VisitFormState::default());
    let error = create_rw_signal(None::<ApiError>);
    let now = display_parts(now_in_app_tz());
    let visitor_id = visitor.id;

    let schedule_action = create_action(
        move |(payload, ticket): &(NewVisit, ModalTicket)| {
            let repo = repository.clone();
            let payload = payload.clone();
            let ticket = *ticket;
            async move {
                let result: Result<Option<Visit>, ApiError> = repo.schedule_visit(payload).await;
                if result.is_ok() {
                    reload.bump();
                    shell.close_modal_if(ticket);
                }
                result
            }
        },
    );
    let pending = schedule_action.pending();

    create_effect(move |_| {
        if let Some(Err(err)) = schedule_action.value().get() {
            log::error!("Failed to schedule visit: {}", err);
            error.set(Some(err));
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let visit_date = visit_timestamp(now_in_app_tz());
        match form.with_untracked(|state| state.to_request(visitor_id, visit_date)) {
            Ok(payload) => {
                error.set(None);
                schedule_action.dispatch((payload, shell.ticket()));
            }
            Err(err) => error.set(Some(err)),
        }
    };

    view! {
        <div class="space-y-4">
            <div>
                <h3 class="text-sm font-medium text-fg-muted">{"Criar Visita para"}</h3>
                <p class="text-xl font-semibold text-fg">{visitor.full_name()}</p>
            </div>
            <InlineErrorMessage error=error.into() />
            <form class="space-y-4" on:submit=on_submit>
                <div class="flex gap-6 text-sm text-fg">
                    <p><span class="font-medium">{"Data: "}</span>{now.date}</p>
                    <p><span class="font-medium">{"Hora: "}</span>{now.time}</p>
                </div>
                <TextField
                    label="Setor:"
                    name="sector"
                    value=Signal::derive(move || form.with(|s| s.sector.clone()))
                    on_input=Callback::new(move |value: String| form.update(|s| s.sector = value))
                    required=true
                />
                <TextField
                    label="Responsável:"
                    name="responsibleName"
                    placeholder="Nome do responsável"
                    value=Signal::derive(move || form.with(|s| s.responsible_name.clone()))
                    on_input=Callback::new(move |value: String| form.update(|s| s.responsible_name = value))
                    required=true
                />
                <div>
                    <label for="field-visitReason" class="block text-sm font-medium text-fg">
                        {"Motivo da Visita:"}
                    </label>
                    <textarea
                        id="field-visitReason"
                        name="visitReason"
                        required
                        class="mt-1 w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg"
                        prop:value=move || form.with(|s| s.visit_reason.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|s| s.visit_reason = value);
                        }
                    ></textarea>
                </div>
                <div class="flex justify-end">
                    <Button loading=pending attr:type="submit">
                        {move || if pending.get() { "Enviando..." } else { "Criar Visita" }}
                    </Button>
                </div>
            </form>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::shell::{provide_shell, ShellState};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn form_names_the_visitor_and_shows_current_time() {
        let html = render_to_string(move || {
            provide_shell(ShellState::default());
            let visitor = VisitorRef {
                id: 7,
                name: "Maria".into(),
                sur_name: "Oliveira".into(),
            };
            view! { <ScheduleVisitForm visitor=visitor /> }
        });
        assert!(html.contains("Criar Visita para"));
        assert!(html.contains("Maria Oliveira"));
        assert!(html.contains("Data: "));
        assert!(html.contains("Hora: "));
        assert!(html.contains("Nome do responsável"));
        assert!(html.contains("Criar Visita"));
    }
}
