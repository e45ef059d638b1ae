use crate::{api::Visitor, utils::photo::photo_src};
use leptos::*;

#[component]
pub fn VisitorDetails(visitor: Visitor) -> impl IntoView {
    let photo = visitor.photo.as_deref().and_then(photo_src);

    view! {
        <dl class="grid grid-cols-1 gap-3 text-sm">
            <div>
                <dt class="font-medium text-fg-muted">{"Nome"}</dt>
                <dd class="text-fg">{visitor.full_name()}</dd>
            </div>
            <div>
                <dt class="font-medium text-fg-muted">{"RG"}</dt>
                <dd class="text-fg">{visitor.rg.clone()}</dd>
            </div>
            <div>
                <dt class="font-medium text-fg-muted">{"Telefone"}</dt>
                <dd class="text-fg">{visitor.phone.clone()}</dd>
            </div>
            <div>
                {match photo {
                    Some(src) => view! {
                        <img src=src alt="Foto do visitante" class="h-48 w-48 rounded-md object-cover border border-border" />
                    }
                    .into_view(),
                    None => view! { <p class="text-fg-muted">{"Foto: Não disponível"}</p> }.into_view(),
                }}
            </div>
        </dl>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::visitor, ssr::render_to_string};

    #[test]
    fn details_without_photo_say_so() {
        let html = render_to_string(move || {
            view! { <VisitorDetails visitor=visitor(1, "Maria", "Oliveira") /> }
        });
        assert!(html.contains("Maria Oliveira"));
        assert!(html.contains("Foto: Não disponível"));
    }

    #[test]
    fn details_render_stored_photo() {
        let html = render_to_string(move || {
            let mut with_photo = visitor(2, "João", "Lima");
            with_photo.photo = Some("data:image/png;base64,AAAA".into());
            view! { <VisitorDetails visitor=with_photo /> }
        });
        assert!(html.contains("data:image/png;base64,AAAA"));
        assert!(!html.contains("Não disponível"));
    }
}
