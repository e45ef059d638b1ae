use crate::{
    api::{ApiError, Employee},
    components::confirm_dialog::ConfirmDialog,
    pages::employees::{utils::delete_prompt, view_model::use_employees_repository},
    state::{
        roster::use_roster,
        shell::{use_shell, ModalTicket},
    },
};
use leptos::*;

#[component]
pub fn DeleteEmployeeConfirm(employee: Employee) -> impl IntoView {
    let shell = use_shell();
    let roster = use_roster::<Employee>();
    let repository = use_employees_repository();
    let error = create_rw_signal(None::<ApiError>);
    let employee_id = employee.id;

    let delete_action = create_action(move |ticket: &ModalTicket| {
        let repo = repository.clone();
        let ticket = *ticket;
        async move {
            let result = repo.delete_employee(employee_id).await;
            if result.is_ok() {
                log::info!("Employee {} deleted", employee_id);
                roster.remove(employee_id);
                shell.close_modal_if(ticket);
            }
            result
        }
    });
    let pending = delete_action.pending();

    create_effect(move |_| {
        if let Some(Err(err)) = delete_action.value().get() {
            log::error!("Failed to delete employee {}: {}", employee_id, err);
            error.set(Some(err));
        }
    });

    let on_confirm = Callback::new(move |_: ()| {
        if pending.get_untracked() {
            return;
        }
        error.set(None);
        delete_action.dispatch(shell.ticket());
    });
    let on_cancel = Callback::new(move |_: ()| shell.close_modal());

    view! {
        <ConfirmDialog
            title="Confirmar Exclusão"
            message=delete_prompt(&employee)
            confirm_label="Excluir"
            on_confirm=on_confirm
            on_cancel=on_cancel
            pending=pending
            error=Signal::from(error)
            destructive=true
        />
    }
}
