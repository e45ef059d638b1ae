use crate::{
    api::{Employee, NewEmployee},
    components::{
        common::{Button, TextField},
        error::InlineErrorMessage,
        layout::SuccessMessage,
    },
    pages::employees::{
        utils::{EmployeeFormState, REGISTERED_MESSAGE},
        view_model::use_employees_repository,
    },
    state::roster::use_roster,
    utils::messages::MessageState,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn RegisterEmployeeForm() -> impl IntoView {
    let roster = use_roster::<Employee>();
    let repository = use_employees_repository();
    let form = create_rw_signal(EmployeeFormState::default());
    let messages = create_rw_signal(MessageState::default());

    let register_action = create_action(move |payload: &NewEmployee| {
        let repo = repository.clone();
        let payload = payload.clone();
        async move {
            let result = repo.register_employee(payload).await;
            match &result {
                Ok(Some(employee)) => roster.upsert(employee.clone()),
                Ok(None) => roster.invalidate(),
                Err(_) => {}
            }
            result
        }
    });
    let pending = register_action.pending();

    create_effect(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(_) => {
                    messages.update(|state| state.set_success(REGISTERED_MESSAGE));
                    form.update(EmployeeFormState::reset);
                }
                Err(err) => {
                    log::error!("Failed to register employee: {}", err);
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
        match form.with_untracked(EmployeeFormState::to_request) {
            Ok(payload) => {
                messages.update(MessageState::clear);
                register_action.dispatch(payload);
            }
            Err(err) => messages.update(|state| state.set_error(err)),
        }
    };

    let error = Signal::derive(move || messages.with(|state| state.error.clone()));
    let success = move || messages.with(|state| state.success.clone());

    view! {
        <form class="space-y-4" on:submit=on_submit>
            <InlineErrorMessage error=error />
            {move || success().map(|message| view! { <SuccessMessage message=message /> })}
            <div class="grid gap-4 md:grid-cols-2">
                <TextField
                    label="Nome"
                    name="name"
                    placeholder="Nome"
                    value=Signal::derive(move || form.with(|s| s.name.clone()))
                    on_input=Callback::new(move |value: String| form.update(|s| s.name = value))
                    required=true
                />
                <TextField
                    label="Sobrenome"
                    name="surName"
                    placeholder="Sobrenome"
                    value=Signal::derive(move || form.with(|s| s.sur_name.clone()))
                    on_input=Callback::new(move |value: String| form.update(|s| s.sur_name = value))
                    required=true
                />
                <TextField
                    label="RG"
                    name="rg"
                    placeholder="RG"
                    value=Signal::derive(move || form.with(|s| s.rg.clone()))
                    on_input=Callback::new(move |value: String| form.update(|s| s.rg = value))
                />
                <TextField
                    label="Telefone"
                    name="phone"
                    input_type="tel"
                    placeholder="Telefone"
                    value=Signal::derive(move || form.with(|s| s.phone.clone()))
                    on_input=Callback::new(move |value: String| form.update(|s| s.phone = value))
                />
                <TextField
                    label="E-mail"
                    name="email"
                    input_type="email"
                    placeholder="E-mail"
                    value=Signal::derive(move || form.with(|s| s.email.clone()))
                    on_input=Callback::new(move |value: String| form.update(|s| s.email = value))
                    required=true
                />
                <TextField
                    label="Senha"
                    name="password"
                    input_type="password"
                    placeholder="Senha"
                    value=Signal::derive(move || form.with(|s| s.password.clone()))
                    on_input=Callback::new(move |value: String| form.update(|s| s.password = value))
                    required=true
                />
            </div>
            <div class="flex justify-end">
                <Button loading=pending attr:type="submit">
                    {move || if pending.get() { "Cadastrando..." } else { "Cadastrar" }}
                </Button>
            </div>
        </form>
    }
}
