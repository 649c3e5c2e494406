//! Variant and status class tables for metric cards.
//!
//! The two axes are independent: variants only ever touch spacing, statuses
//! only ever touch border and background tint.

use crate::domain::{Status, Variant};
use crate::ui::classes::merge_classes;

// ============================================
// CONTAINER
// ============================================

pub const CARD_BASE: &str = "transition-all duration-200";

pub fn variant_classes(variant: Variant) -> &'static str {
    match variant {
        Variant::Default => "p-6",
        Variant::Compact => "p-4",
        Variant::Detailed => "p-6 space-y-4",
    }
}

pub fn status_classes(status: Status) -> &'static str {
    match status {
        Status::Success => "border-green-200 bg-green-50/50 dark:border-green-800 dark:bg-green-950/50",
        Status::Warning => "border-yellow-200 bg-yellow-50/50 dark:border-yellow-800 dark:bg-yellow-950/50",
        Status::Error => "border-red-200 bg-red-50/50 dark:border-red-800 dark:bg-red-950/50",
        Status::Info => "border-blue-200 bg-blue-50/50 dark:border-blue-800 dark:bg-blue-950/50",
        Status::Neutral => "",
    }
}

/// Container classes for a card; `extra` overrides the computed defaults.
pub fn card_classes(variant: Variant, status: Status, extra: Option<&str>) -> String {
    merge_classes(&[
        CARD_BASE,
        variant_classes(variant),
        status_classes(status),
        extra.unwrap_or_default(),
    ])
}

// ============================================
// HEADER
// ============================================

pub fn header_classes(variant: Variant) -> &'static str {
    match variant {
        Variant::Compact => "flex flex-row items-center justify-between space-y-0 pb-2",
        Variant::Default | Variant::Detailed => {
            "flex flex-row items-center justify-between space-y-0"
        }
    }
}

pub fn title_classes(variant: Variant) -> &'static str {
    match variant {
        Variant::Compact => "text-sm",
        Variant::Default | Variant::Detailed => "text-base",
    }
}

pub fn description_classes(variant: Variant) -> &'static str {
    match variant {
        Variant::Compact => "text-xs",
        Variant::Default | Variant::Detailed => "",
    }
}

// ============================================
// BODY
// ============================================

pub fn content_classes(variant: Variant) -> &'static str {
    match variant {
        Variant::Compact => "pt-0",
        Variant::Default | Variant::Detailed => "",
    }
}

pub fn value_classes(variant: Variant) -> &'static str {
    match variant {
        Variant::Compact => "font-bold text-xl",
        Variant::Default | Variant::Detailed => "font-bold text-2xl lg:text-3xl",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn padding_tokens(classes: &str) -> Vec<&str> {
        classes
            .split_whitespace()
            .filter(|c| c.starts_with('p') || c.starts_with("space-"))
            .collect()
    }

    fn tint_tokens(classes: &str) -> Vec<&str> {
        classes
            .split_whitespace()
            .filter(|c| c.contains("border-") || c.contains("bg-"))
            .collect()
    }

    #[test]
    fn base_transition_always_present() {
        for variant in Variant::ALL {
            for status in Status::ALL {
                let classes = card_classes(variant, status, None);
                assert!(classes.starts_with(CARD_BASE), "{classes}");
            }
        }
    }

    #[test]
    fn resolution_is_deterministic() {
        for variant in Variant::ALL {
            for status in Status::ALL {
                assert_eq!(
                    card_classes(variant, status, Some("shadow-lg")),
                    card_classes(variant, status, Some("shadow-lg"))
                );
            }
        }
    }

    #[test]
    fn status_never_changes_padding() {
        for variant in Variant::ALL {
            let reference = card_classes(variant, Status::Neutral, None);
            for status in Status::ALL {
                let classes = card_classes(variant, status, None);
                assert_eq!(padding_tokens(&classes), padding_tokens(&reference));
            }
        }
    }

    #[test]
    fn variant_never_changes_tint() {
        for status in Status::ALL {
            let reference = card_classes(Variant::Default, status, None);
            for variant in Variant::ALL {
                let classes = card_classes(variant, status, None);
                assert_eq!(tint_tokens(&classes), tint_tokens(&reference));
            }
        }
    }

    #[test]
    fn error_status_is_red_for_every_variant() {
        for variant in Variant::ALL {
            let classes = card_classes(variant, Status::Error, None);
            assert!(classes.contains("border-red-200"));
            assert!(classes.contains("bg-red-50/50"));
            assert!(classes.contains("dark:border-red-800"));
            assert!(classes.contains("dark:bg-red-950/50"));
        }
    }

    #[test]
    fn neutral_status_adds_no_tint() {
        assert_eq!(
            card_classes(Variant::Default, Status::Neutral, None),
            "transition-all duration-200 p-6"
        );
    }

    #[test]
    fn detailed_adds_vertical_spacing() {
        assert_eq!(
            card_classes(Variant::Detailed, Status::Neutral, None),
            "transition-all duration-200 p-6 space-y-4"
        );
    }

    #[test]
    fn caller_classes_override_defaults() {
        let classes = card_classes(Variant::Default, Status::Success, Some("p-2 bg-white"));
        assert!(!classes.contains("p-6"));
        assert!(!classes.split_whitespace().any(|c| c == "bg-green-50/50"));
        assert!(classes.contains("dark:bg-green-950/50"));
        assert!(classes.ends_with("p-2 bg-white"));
    }

    #[test]
    fn compact_layout_differs_from_default() {
        assert_ne!(header_classes(Variant::Compact), header_classes(Variant::Default));
        assert_ne!(content_classes(Variant::Compact), content_classes(Variant::Default));
        assert_ne!(title_classes(Variant::Compact), title_classes(Variant::Default));
        assert_ne!(value_classes(Variant::Compact), value_classes(Variant::Default));
        assert!(header_classes(Variant::Compact).contains("pb-2"));
        assert_eq!(content_classes(Variant::Compact), "pt-0");
    }
}
