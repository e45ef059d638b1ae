use crate::api::Employee;
use leptos::*;

const HEADERS: [&str; 7] = ["Nome", "Username", "RG", "Telefone", "Email", "Cargo", "Detalhes"];

/// Rows re-render when any displayed field changes, not only on new ids.
fn row_key(employee: &Employee) -> (i64, String, String, String, String, String, &'static str) {
    (
        employee.id,
        employee.full_name(),
        employee.username.clone(),
        employee.rg.clone(),
        employee.phone.clone(),
        employee.email.clone(),
        employee.role_label(),
    )
}

#[component]
pub fn EmployeeTable(
    #[prop(into)] employees: Signal<Vec<Employee>>,
    on_details: Callback<Employee>,
    on_edit: Callback<Employee>,
    on_delete: Callback<Employee>,
) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-border">
                <thead>
                    <tr>
                        {HEADERS
                            .iter()
                            .map(|header| {
                                view! {
                                    <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">
                                        {*header}
                                    </th>
                                }
                            })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody class="bg-surface-elevated divide-y divide-border">
                    <For
                        each=move || employees.get()
                        key=row_key
                        children=move |employee: Employee| {
                            let details = employee.clone();
                            let edit = employee.clone();
                            let delete = employee.clone();
                            view! {
                                <tr class="hover:bg-surface-muted">
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">{employee.full_name()}</td>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">{employee.username.clone()}</td>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">{employee.rg.clone()}</td>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">{employee.phone.clone()}</td>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">{employee.email.clone()}</td>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">{employee.role_label()}</td>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm space-x-2">
                                        <button
                                            type="button"
                                            class="text-action-primary-bg hover:underline"
                                            on:click=move |_| on_details.call(details.clone())
                                        >
                                            {"Ver detalhes"}
                                        </button>
                                        <button
                                            type="button"
                                            class="text-fg-muted hover:underline"
                                            on:click=move |_| on_edit.call(edit.clone())
                                        >
                                            {"Editar"}
                                        </button>
                                        <button
                                            type="button"
                                            class="text-status-error-text hover:underline"
                                            on:click=move |_| on_delete.call(delete.clone())
                                        >
                                            {"Excluir"}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::Role;
    use crate::test_support::{helpers::employee, ssr::render_to_string};

    #[test]
    fn table_shows_role_label_and_actions() {
        let html = render_to_string(move || {
            let employees = vec![employee(1, "Ana", Role::Admin)];
            view! {
                <EmployeeTable
                    employees=Signal::derive(move || employees.clone())
                    on_details=Callback::new(|_| {})
                    on_edit=Callback::new(|_| {})
                    on_delete=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Ana Santos"));
        assert!(html.contains("ana@example.com"));
        assert!(html.contains("Administrador"));
        assert!(html.contains("Excluir"));
    }
}
