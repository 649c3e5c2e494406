use dioxus::{prelude::*, signals::Signal};

use crate::{
    domain::{AppState, Variant},
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{BoardPage, SettingsPage},
        shell::Shell,
    },
    util::{
        assets,
        persistence::{load_board, load_preferences, save_preferences},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Dashboard {},
    #[route("/settings")]
    Settings {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(|| AppState::new(load_preferences(), load_board()));
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    rsx! {
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

/// Writes the current preferences to disk, reporting failures as a toast.
pub fn persist_preferences(state: &Signal<AppState>, toasts: Signal<Vec<ToastMessage>>) -> bool {
    let snapshot = state.with(|st| st.preferences.clone());
    match save_preferences(&snapshot) {
        Ok(()) => true,
        Err(err) => {
            tracing::error!(%err, "failed to persist preferences");
            push_toast(
                toasts,
                ToastKind::Error,
                format!("Failed to save preferences: {err}"),
            );
            false
        }
    }
}

pub fn set_density(
    mut state: Signal<AppState>,
    toasts: Signal<Vec<ToastMessage>>,
    density: Option<Variant>,
) {
    tracing::debug!(?density, "density changed");
    state.with_mut(|st| st.preferences.density = density);
    persist_preferences(&state, toasts);
}

#[component]
pub fn Dashboard() -> Element {
    rsx! { Shell { BoardPage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}
