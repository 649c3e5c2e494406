use dioxus::prelude::*;

use crate::{
    app::persist_preferences,
    domain::{format_number, locale::PRESETS, AppState, Board, NumberLocale},
    ui::components::toast::{push_toast, ToastKind, ToastMessage},
    util::persistence::{board_path, load_board},
};

const PREVIEW_NUMBER: f64 = 1234567.891;

#[component]
pub fn SettingsPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let selected = state.with(|st| st.preferences.locale.clone().unwrap_or_default());
    let active = state.with(|st| st.locale());
    let system = NumberLocale::current();
    let preview = format_number(PREVIEW_NUMBER, &active);
    let board_source = board_path()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "an unavailable config directory".to_string());

    let on_locale = move |evt: FormEvent| {
        let value = evt.value();
        let locale = (!value.is_empty()).then_some(value);
        tracing::debug!(?locale, "locale changed");
        state.with_mut(|st| st.preferences.locale = locale);
        if persist_preferences(&state, toasts) {
            push_toast(toasts, ToastKind::Success, "Updated number locale.");
        }
    };

    let on_reload = move |_| {
        let board = load_board();
        let count = board.cards.len();
        state.with_mut(|st| st.board = board);
        push_toast(
            toasts,
            ToastKind::Info,
            format!("Loaded board with {count} cards."),
        );
    };

    let on_sample = move |_| {
        state.with_mut(|st| st.board = Board::sample());
        push_toast(toasts, ToastKind::Info, "Restored the sample board.");
    };

    rsx! {
        section { class: "space-y-6",
            h2 { class: "text-2xl font-semibold tracking-tight", "Settings" }

            div { class: "rounded-xl border p-6 space-y-3",
                label {
                    class: "text-xs font-semibold uppercase tracking-wide text-muted-foreground",
                    r#for: "locale",
                    "Number locale"
                }
                select {
                    id: "locale",
                    class: "select",
                    onchange: on_locale,
                    option { value: "", selected: selected.is_empty(), "System ({system.tag})" }
                    for preset in PRESETS.iter() {
                        option {
                            key: "{preset.tag}",
                            value: "{preset.tag}",
                            selected: selected.eq_ignore_ascii_case(preset.tag),
                            "{preset.tag}"
                        }
                    }
                }
                p { class: "text-sm text-muted-foreground", "Preview: {preview}" }
            }

            div { class: "rounded-xl border p-6 space-y-3",
                h3 { class: "text-base font-semibold", "Board" }
                p { class: "text-sm text-muted-foreground", "Cards are read from {board_source}." }
                div { class: "flex gap-2",
                    button { class: "chip", onclick: on_reload, "Reload from disk" }
                    button { class: "chip", onclick: on_sample, "Restore sample board" }
                }
            }
        }
    }
}
