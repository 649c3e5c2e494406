use dioxus::prelude::*;

use crate::domain::{format_value, AppState, MetricCardInput, NumberLocale};
use crate::ui::components::toast::{push_toast, ToastKind, ToastMessage};
use crate::ui::components::MetricCard;

#[component]
pub fn BoardPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let (title, cards, locale) = state.with(|st| {
        let cards = st
            .board
            .cards
            .iter()
            .map(|card| card.clone().with_variant(st.variant_for(card)))
            .collect::<Vec<_>>();
        (st.board.title.clone(), cards, st.locale())
    });
    let count = cards.len();

    rsx! {
        section { class: "space-y-6",
            div { class: "flex items-baseline justify-between",
                h2 { class: "text-2xl font-semibold tracking-tight", "{title}" }
                p { class: "text-sm text-muted-foreground", "{count} metrics · {locale.tag}" }
            }
            if count == 0 {
                p { class: "text-sm text-muted-foreground", "This board has no cards yet." }
            }
            div { class: "grid grid-cols-1 gap-4 md:grid-cols-2 lg:grid-cols-3",
                for (idx, card) in cards.into_iter().enumerate() {
                    BoardCard { key: "{idx}", card, locale, toasts }
                }
            }
        }
    }
}

#[component]
fn BoardCard(
    card: MetricCardInput,
    locale: NumberLocale,
    toasts: Signal<Vec<ToastMessage>>,
) -> Element {
    let summary = format!("{}: {}", card.title, format_value(&card.value, &locale));

    rsx! {
        MetricCard {
            title: card.title,
            description: card.description,
            value: card.value,
            change: card.change,
            variant: card.variant,
            status: card.status,
            class: card.class,
            locale,
            onclick: Some(EventHandler::new(move |_: MouseEvent| {
                push_toast(toasts, ToastKind::Info, summary.clone());
            })),
        }
    }
}
