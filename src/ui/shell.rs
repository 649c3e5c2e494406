use dioxus::prelude::*;

use crate::app::{set_density, Route};
use crate::domain::{AppState, Variant};
use crate::ui::components::toast::ToastMessage;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    let density = state.with(|st| st.preferences.density);
    let version = version_label();

    rsx! {
        div { class: "dark",
            div { class: "min-h-screen",
                header { class: "border-b px-6 py-4",
                    div { class: "mx-auto flex max-w-6xl items-center justify-between gap-4",
                        h1 { class: "text-xl font-semibold tracking-tight", "{APP_NAME}" }

                        // Density override for every card on the board
                        div { class: "flex gap-2",
                            ChipButton {
                                active: density.is_none(),
                                onclick: move |_| set_density(state, toasts, None),
                                label: "Auto",
                            }
                            for variant in Variant::ALL {
                                ChipButton {
                                    key: "{variant.name()}",
                                    active: density == Some(variant),
                                    onclick: move |_| set_density(state, toasts, Some(variant)),
                                    label: variant.name(),
                                }
                            }
                        }

                        nav { class: "flex gap-2 justify-end",
                            ChipButton {
                                active: matches!(current_route, Route::Dashboard {}),
                                onclick: move |_| { nav.push(Route::Dashboard {}); },
                                label: "Board",
                            }
                            ChipButton {
                                active: matches!(current_route, Route::Settings {}),
                                onclick: move |_| { nav.push(Route::Settings {}); },
                                label: "Settings",
                            }
                        }
                    }
                }
                main { class: "mx-auto max-w-6xl px-6 py-10",
                    {children}
                }
                footer { class: "mx-auto max-w-6xl px-6 py-4 text-xs text-muted-foreground",
                    "{APP_NAME} {version}"
                }
            }
        }
    }
}

#[component]
fn ChipButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    let class = if active { "chip chip-active" } else { "chip" };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
