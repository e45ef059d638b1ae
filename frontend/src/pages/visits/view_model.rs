use super::{
    repository::VisitsRepository,
    utils::{filter_visits, VisitRow},
};
use crate::{api::ApiError, state::auth::use_api_client};
use leptos::*;
use std::rc::Rc;

/// Bumped after a visit is scheduled so an open visit list refetches.
#[derive(Clone, Copy)]
pub struct VisitsReload(RwSignal<u32>);

impl VisitsReload {
    pub fn get(&self) -> u32 {
        self.0.get()
    }

    pub fn bump(&self) {
        self.0.update(|value| *value = value.wrapping_add(1));
    }
}

pub fn provide_visits_reload() -> VisitsReload {
    let reload = VisitsReload(create_rw_signal(0));
    provide_context(reload);
    reload
}

pub fn use_visits_reload() -> VisitsReload {
    use_context::<VisitsReload>().unwrap_or_else(provide_visits_reload)
}

pub fn use_visits_repository() -> VisitsRepository {
    VisitsRepository::new_with_client(Rc::new(use_api_client()))
}

#[derive(Clone, Copy)]
pub struct VisitListViewModel {
    pub search: RwSignal<String>,
    pub rows_resource: Resource<u32, Result<Vec<VisitRow>, ApiError>>,
    pub rows: Signal<Vec<VisitRow>>,
    pub filtered: Memo<Vec<VisitRow>>,
    pub fetch_error: Signal<Option<ApiError>>,
}

pub fn use_visit_list_view_model() -> VisitListViewModel {
    let repository = use_visits_repository();
    let reload = use_visits_reload();
    let search = create_rw_signal(String::new());

    let rows_resource = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repository.clone();
            async move {
                let result = repo.fetch_rows().await;
                if let Err(err) = &result {
                    log::error!("Failed to load visits: {}", err);
                }
                result
            }
        },
    );

    let rows = Signal::derive(move || {
        rows_resource
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default()
    });
    let fetch_error = Signal::derive(move || rows_resource.get().and_then(|result| result.err()));
    let filtered = create_memo(move |_| search.with(|query| filter_visits(&rows.get(), query)));

    VisitListViewModel {
        search,
        rows_resource,
        rows,
        filtered,
        fetch_error,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn view_model_starts_empty_with_blank_search() {
        with_runtime(|| {
            leptos_reactive::suppress_resource_load(true);
            let vm = use_visit_list_view_model();
            assert!(vm.search.get_untracked().is_empty());
            assert!(vm.rows.get_untracked().is_empty());
            assert!(vm.fetch_error.get_untracked().is_none());
            leptos_reactive::suppress_resource_load(false);
        });
    }

    #[test]
    fn reload_bumps_are_shared_through_context() {
        with_runtime(|| {
            let reload = provide_visits_reload();
            use_visits_reload().bump();
            assert_eq!(reload.0.get_untracked(), 1);
        });
    }
}
