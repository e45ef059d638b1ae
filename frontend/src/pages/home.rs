use crate::state::session::use_session;
use leptos::*;

pub fn greeting(username: Option<&str>) -> String {
    match username.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => format!("Bem-vindo, {}!", name),
        None => "Bem-vindo!".to_string(),
    }
}

#[component]
pub fn HomePanel() -> impl IntoView {
    let username = use_session().user().and_then(|user| user.username);

    view! {
        <section class="rounded-lg bg-surface-elevated shadow p-8 space-y-3">
            <h2 class="text-2xl font-bold text-fg">{greeting(username.as_deref())}</h2>
            <p class="text-fg-muted">
                {"Use o menu para cadastrar visitantes, agendar visitas e consultar os registros da portaria."}
            </p>
        </section>
    }
}
