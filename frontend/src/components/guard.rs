use crate::{
    config,
    state::session::{use_session, Role, Session},
    utils::navigation::{self, LOGIN_ROUTE},
};
use leptos::*;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationRequest {
    pub target: String,
    pub allowed_roles: Vec<Role>,
    pub redirect_to: Option<String>,
}

impl NavigationRequest {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            ..Self::default()
        }
    }

    pub fn with_roles(mut self, roles: impl IntoIterator<Item = Role>) -> Self {
        self.allowed_roles = roles.into_iter().collect();
        self
    }

    pub fn redirect_to(mut self, path: impl Into<String>) -> Self {
        self.redirect_to = Some(path.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(String),
}

/// Decides against the configured fallback route.
pub fn evaluate(request: &NavigationRequest, session: &Session) -> GuardDecision {
    evaluate_with_fallback(request, session, &config::fallback_route())
}

pub fn evaluate_with_fallback(
    request: &NavigationRequest,
    session: &Session,
    fallback: &str,
) -> GuardDecision {
    if !session.is_authenticated() {
        return GuardDecision::Redirect(LOGIN_ROUTE.to_string());
    }
    if request.allowed_roles.is_empty() {
        return GuardDecision::Allow;
    }
    match session.role {
        Some(role) if request.allowed_roles.contains(&role) => GuardDecision::Allow,
        _ => GuardDecision::Redirect(
            request
                .redirect_to
                .clone()
                .unwrap_or_else(|| fallback.to_string()),
        ),
    }
}

/// Renders `children` only when the stored session passes the guard; otherwise
/// replaces the current location with the redirect target.
#[component]
pub fn RequireSession(
    #[prop(into)] target: String,
    #[prop(optional)] allowed_roles: Vec<Role>,
    #[prop(optional, into)] redirect_to: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = use_session();
    let mut request = NavigationRequest::new(target).with_roles(allowed_roles);
    if let Some(path) = redirect_to {
        request = request.redirect_to(path);
    }

    match evaluate(&request, &session.snapshot()) {
        GuardDecision::Allow => children().into_view(),
        GuardDecision::Redirect(path) => {
            log::info!("Guard redirected {} to {}", request.target, path);
            create_effect(move |_| navigation::replace_with(&path));
            ().into_view()
        }
    }
}
