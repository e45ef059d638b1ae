use crate::{
    api::{ApiError, Employee, EmployeeUpdate},
    components::{
        common::{Button, TextField},
        error::InlineErrorMessage,
    },
    pages::employees::{
        utils::{AccountFlag, EmployeeEditState, UPDATED_MESSAGE},
        view_model::use_employees_repository,
    },
    state::{
        roster::use_roster,
        shell::{use_shell, ModalTicket},
    },
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn EditEmployeeForm(employee: Employee) -> impl IntoView {
    let shell = use_shell();
    let roster = use_roster::<Employee>();
    let repository = use_employees_repository();
    let form = create_rw_signal(EmployeeEditState::from_employee(&employee));
    let error = create_rw_signal(None::<ApiError>);
    let employee_id = employee.id;
    let original = store_value(employee.clone());

    let update_action = create_action(
        move |(payload, expected, ticket): &(EmployeeUpdate, Employee, ModalTicket)| {
            let repo = repository.clone();
            let payload = payload.clone();
            let expected = expected.clone();
            let ticket = *ticket;
            async move {
                let result = repo.update_employee(employee_id, payload).await;
                if let Ok(echoed) = &result {
                    log::info!("{} ({})", UPDATED_MESSAGE, employee_id);
                    roster.upsert(echoed.clone().unwrap_or(expected));
                    shell.close_modal_if(ticket);
                }
                result
            }
        },
    );
    let pending = update_action.pending();

    create_effect(move |_| {
        if let Some(Err(err)) = update_action.value().get() {
            log::error!("Failed to update employee {}: {}", employee_id, err);
            error.set(Some(err));
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let prepared = form.with_untracked(|state| {
            state
                .to_request()
                .map(|payload| (payload, original.with_value(|e| state.apply_to(e))))
        });
        match prepared {
            Ok((payload, expected)) => {
                error.set(None);
                update_action.dispatch((payload, expected, shell.ticket()));
            }
            Err(err) => error.set(Some(err)),
        }
    };

    view! {
        <form class="space-y-4" on:submit=on_submit>
            <h3 class="text-base font-semibold text-fg">
                {format!("Editar Funcionário: {}", employee.name)}
            </h3>
            <InlineErrorMessage error=error.into() />
            <div class="grid gap-4 md:grid-cols-2">
                <TextField
                    label="Nome"
                    name="name"
                    value=Signal::derive(move || form.with(|s| s.name.clone()))
                    on_input=Callback::new(move |value: String| form.update(|s| s.name = value))
                    required=true
                />
                <TextField
                    label="Sobrenome"
                    name="surName"
                    value=Signal::derive(move || form.with(|s| s.sur_name.clone()))
                    on_input=Callback::new(move |value: String| form.update(|s| s.sur_name = value))
                    required=true
                />
                <TextField
                    label="Username"
                    name="username"
                    value=Signal::derive(move || form.with(|s| s.username.clone()))
                    on_input=Callback::new(move |value: String| form.update(|s| s.username = value))
                    required=true
                />
                <TextField
                    label="Senha"
                    name="password"
                    input_type="password"
                    placeholder="Deixe em branco para manter a atual"
                    value=Signal::derive(move || form.with(|s| s.password.clone()))
                    on_input=Callback::new(move |value: String| form.update(|s| s.password = value))
                />
            </div>
            <fieldset class="grid gap-2 md:grid-cols-2">
                {AccountFlag::ALL
                    .into_iter()
                    .map(|flag| {
                        let id = format!("flag-{}", flag.key());
                        view! {
                            <label for=id.clone() class="flex items-center gap-2 text-sm text-fg">
                                <input
                                    id=id
                                    type="checkbox"
                                    class="h-4 w-4 rounded border-form-control-border"
                                    prop:checked=move || form.with(|s| s.flag(flag))
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        form.update(|s| s.set_flag(flag, checked));
                                    }
                                />
                                {flag.label()}
                            </label>
                        }
                    })
                    .collect_view()}
            </fieldset>
            <div class="flex justify-end">
                <Button loading=pending attr:type="submit">{"Salvar"}</Button>
            </div>
        </form>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::Role;
    use crate::test_support::{helpers::employee, ssr::render_to_string};

    #[test]
    fn edit_form_prefills_and_lists_account_flags() {
        let html = render_to_string(move || {
            view! { <EditEmployeeForm employee=employee(3, "Ana", Role::Admin) /> }
        });
        assert!(html.contains("Editar Funcionário: Ana"));
        assert!(html.contains("Conta Não Bloqueada"));
        assert!(html.contains("flag-enabled"));
        assert!(html.contains("Salvar"));
    }
}
