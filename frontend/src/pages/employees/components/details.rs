use crate::api::Employee;
use leptos::*;

#[component]
pub fn EmployeeDetails(employee: Employee) -> impl IntoView {
    let rows = [
        ("Nome", employee.full_name()),
        ("Username", employee.username.clone()),
        ("RG", employee.rg.clone()),
        ("Telefone", employee.phone.clone()),
        ("Email", employee.email.clone()),
        ("Cargo", employee.role_label().to_string()),
    ];

    view! {
        <dl class="grid grid-cols-1 gap-3 text-sm">
            {rows
                .into_iter()
                .map(|(label, value)| {
                    view! {
                        <div>
                            <dt class="font-medium text-fg-muted">{label}</dt>
                            <dd class="text-fg">{value}</dd>
                        </div>
                    }
                })
                .collect_view()}
        </dl>
    }
}
