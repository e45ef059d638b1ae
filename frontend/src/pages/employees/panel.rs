use super::{components::list::EmployeeTable, view_model::use_employee_list_view_model};
use crate::{
    api::Employee,
    components::{empty_state::EmptyState, error::InlineErrorMessage, layout::LoadingSpinner},
    state::shell::{use_shell, ModalView},
};
use leptos::*;

#[component]
pub fn EmployeeListPanel() -> impl IntoView {
    let shell = use_shell();
    let vm = use_employee_list_view_model();
    let loading = vm.employees_resource.loading();
    let filtered: Signal<Vec<Employee>> = vm.filtered.into();

    // Rows may lag behind flag-only edits; open modals on the roster's copy.
    let latest = move |employee: Employee| {
        vm.roster
            .items()
            .with_untracked(|list| list.iter().find(|e| e.id == employee.id).cloned())
            .unwrap_or(employee)
    };
    let on_details = Callback::new(move |employee: Employee| {
        shell.open_modal(ModalView::EmployeeDetails(latest(employee)))
    });
    let on_edit = Callback::new(move |employee: Employee| {
        shell.open_modal(ModalView::EditEmployee(latest(employee)))
    });
    let on_delete = Callback::new(move |employee: Employee| {
        shell.open_modal(ModalView::DeleteEmployee(latest(employee)))
    });

    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div class="flex flex-col gap-3 md:flex-row md:items-center md:justify-between">
                <h2 class="text-2xl font-bold text-fg">{"Lista de Funcionários"}</h2>
                <input
                    type="search"
                    class="w-full md:w-80 rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg"
                    placeholder="Pesquisar Funcionários"
                    prop:value=move || vm.search.get()
                    on:input=move |ev| vm.search.set(event_target_value(&ev))
                />
            </div>
            <InlineErrorMessage error=vm.fetch_error />
            <Show when=move || loading.get() && !vm.roster.is_loaded()>
                <LoadingSpinner />
            </Show>
            <Show when=move || vm.roster.is_loaded() && filtered.with(Vec::is_empty)>
                <EmptyState title="Nenhum funcionário encontrado." />
            </Show>
            <Show when=move || !filtered.with(Vec::is_empty)>
                <EmployeeTable
                    employees=filtered
                    on_details=on_details
                    on_edit=on_edit
                    on_delete=on_delete
                />
            </Show>
        </section>
    }
}
