use leptos::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface px-4">
            <div class="text-center space-y-3">
                <h1 class="text-3xl font-bold text-fg">"404 - Página não encontrada"</h1>
                <p class="text-fg-muted">"A página que você está procurando não existe."</p>
                <a href="/login" class="text-action-primary-bg hover:underline">"Voltar ao início"</a>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_404_message() {
        let html = render_to_string(move || view! { <NotFoundPage /> });
        assert!(html.contains("404 - Página não encontrada"));
        assert!(html.contains("href=\"/login\""));
    }
}
