//! Card container primitives. Each merges its base classes with the caller's.

use dioxus::prelude::*;

use crate::ui::classes::merge_classes;

const CARD: &str = "rounded-lg border bg-card text-card-foreground shadow-sm";
const CARD_HEADER: &str = "flex flex-col space-y-1.5 p-6";
const CARD_TITLE: &str = "text-2xl font-semibold leading-none tracking-tight";
const CARD_DESCRIPTION: &str = "text-sm text-muted-foreground";
const CARD_CONTENT: &str = "p-6 pt-0";

fn with_base(base: &str, class: Option<String>) -> String {
    merge_classes(&[base, class.as_deref().unwrap_or_default()])
}

#[component]
pub fn Card(
    class: Option<String>,
    id: Option<String>,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let class = with_base(CARD, class);
    let clickable = onclick.is_some();

    rsx! {
        div {
            class: "{class}",
            id,
            role: if clickable { Some("button") } else { None },
            onclick: move |evt| {
                if let Some(ref handler) = onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn CardHeader(class: Option<String>, children: Element) -> Element {
    let class = with_base(CARD_HEADER, class);
    rsx! {
        div { class: "{class}", {children} }
    }
}

#[component]
pub fn CardTitle(class: Option<String>, children: Element) -> Element {
    let class = with_base(CARD_TITLE, class);
    rsx! {
        h3 { class: "{class}", {children} }
    }
}

#[component]
pub fn CardDescription(class: Option<String>, children: Element) -> Element {
    let class = with_base(CARD_DESCRIPTION, class);
    rsx! {
        p { class: "{class}", {children} }
    }
}

#[component]
pub fn CardContent(class: Option<String>, children: Element) -> Element {
    let class = with_base(CARD_CONTENT, class);
    rsx! {
        div { class: "{class}", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_class_wins_over_base() {
        assert_eq!(
            with_base(CARD_CONTENT, Some("pt-0".into())),
            "p-6 pt-0"
        );
        assert_eq!(
            with_base(CARD_TITLE, Some("text-sm".into())),
            "font-semibold leading-none tracking-tight text-sm"
        );
        assert_eq!(
            with_base(CARD_DESCRIPTION, Some("text-xs".into())),
            "text-muted-foreground text-xs"
        );
    }

    #[test]
    fn missing_class_keeps_base() {
        assert_eq!(with_base(CARD, None), CARD);
        assert_eq!(with_base(CARD_HEADER, Some(String::new())), CARD_HEADER);
    }

    #[test]
    fn status_tint_replaces_card_background() {
        let merged = with_base(
            CARD,
            Some("transition-all duration-200 p-6 border-red-200 bg-red-50/50".into()),
        );
        assert!(!merged.split_whitespace().any(|c| c == "bg-card"));
        let tokens: Vec<&str> = merged.split_whitespace().collect();
        assert!(tokens.contains(&"border"));
        assert!(tokens.contains(&"border-red-200"));
        assert!(merged.ends_with("bg-red-50/50"));
    }
}
