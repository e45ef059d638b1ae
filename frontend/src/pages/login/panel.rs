use crate::{
    api::ApiError,
    pages::login::{components::form::LoginForm, utils},
    state::auth::{self, AFTER_LOGIN_ROUTE},
    utils::navigation,
};
use leptos::{ev::SubmitEvent, Callback, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);

    let login_action = auth::use_login_action();
    let pending = login_action.pending();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(role) => {
                    log::info!("Signed in as {:?}", role);
                    error.set(None);
                    set_password.set(String::new());
                    navigation::navigate_to(AFTER_LOGIN_ROUTE);
                }
                Err(err) => {
                    log::error!("Login failed: {}", err);
                    error.set(Some(err));
                }
            }
        }
    });

    let handle_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        match utils::validate_credentials(&username.get_untracked(), &password.get_untracked()) {
            Ok(request) => {
                error.set(None);
                login_action.dispatch(request);
            }
            Err(err) => error.set(Some(err)),
        }
    });

    view! {
        <LoginForm
            username=username.into()
            password=password.into()
            error=error.into()
            pending=pending.into()
            on_username_input=Callback::new(move |value: String| set_username.set(value))
            on_password_input=Callback::new(move |value: String| set_password.set(value))
            on_submit=handle_submit
        />
    }
}
