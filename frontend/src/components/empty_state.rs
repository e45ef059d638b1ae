use leptos::*;

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
) -> impl IntoView {
    view! {
        <div class="text-center py-10 px-4 rounded-lg border-2 border-dashed border-border-strong bg-surface-muted">
            <svg class="mx-auto h-10 w-10 text-fg-muted" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M21 21l-4.35-4.35M11 18a7 7 0 100-14 7 7 0 000 14z" />
            </svg>
            <p class="mt-2 text-sm font-semibold text-fg">{title}</p>
            {description.map(|desc| view! { <p class="mt-1 text-sm text-fg-muted">{desc}</p> })}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_title_and_optional_description() {
        let html = render_to_string(|| {
            view! { <EmptyState title="Não existem visitas cadastradas." description="Cadastre um visitante para começar." /> }
        });
        assert!(html.contains("Não existem visitas cadastradas."));
        assert!(html.contains("Cadastre um visitante"));

        let html = render_to_string(|| view! { <EmptyState title="Nada aqui" /> });
        assert!(html.contains("Nada aqui"));
    }
}
