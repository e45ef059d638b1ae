use super::{repository::VisitorsRepository, utils::filter_visitors};
use crate::{
    api::{ApiError, Visitor},
    state::{
        auth::use_api_client,
        roster::{use_roster, Roster},
    },
};
use leptos::*;
use std::rc::Rc;

pub fn use_visitors_repository() -> VisitorsRepository {
    VisitorsRepository::new_with_client(Rc::new(use_api_client()))
}

#[derive(Clone, Copy)]
pub struct VisitorListViewModel {
    pub search: RwSignal<String>,
    pub roster: Roster<Visitor>,
    pub visitors_resource: Resource<u32, Result<Vec<Visitor>, ApiError>>,
    pub filtered: Memo<Vec<Visitor>>,
    pub fetch_error: Signal<Option<ApiError>>,
}

pub fn use_visitor_list_view_model() -> VisitorListViewModel {
    let repository = use_visitors_repository();
    let roster = use_roster::<Visitor>();
    let search = create_rw_signal(String::new());

    let visitors_resource = create_resource(
        move || roster.revision(),
        move |_| {
            let repo = repository.clone();
            async move { repo.fetch_visitors().await }
        },
    );

    create_effect(move |_| match visitors_resource.get() {
        Some(Ok(list)) => roster.replace(list),
        Some(Err(err)) => log::error!("Failed to load visitors: {}", err),
        None => {}
    });

    let fetch_error =
        Signal::derive(move || visitors_resource.get().and_then(|result| result.err()));
    let items = roster.items();
    let filtered =
        create_memo(move |_| search.with(|query| items.with(|list| filter_visitors(list, query))));

    VisitorListViewModel {
        search,
        roster,
        visitors_resource,
        filtered,
        fetch_error,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::roster::provide_roster;
    use crate::test_support::{helpers::visitor, ssr::with_runtime};

    #[test]
    fn filtered_list_follows_roster_and_search() {
        with_runtime(|| {
            leptos_reactive::suppress_resource_load(true);
            let roster = provide_roster::<Visitor>();
            roster.replace(vec![visitor(1, "Maria", "Oliveira"), visitor(2, "João", "Lima")]);
            let vm = use_visitor_list_view_model();
            assert_eq!(vm.filtered.get_untracked().len(), 2);

            vm.search.set("lima".into());
            let filtered = vm.filtered.get_untracked();
            assert_eq!(filtered.len(), 1);
            assert_eq!(filtered[0].id, 2);
            leptos_reactive::suppress_resource_load(false);
        });
    }
}
