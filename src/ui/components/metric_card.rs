use dioxus::prelude::*;

use crate::domain::{
    format_change_amount, format_value, MetricCardInput, MetricChange, MetricValue, NumberLocale,
    Status, Variant,
};
use crate::ui::classes::merge_classes;
use crate::ui::components::card::{Card, CardContent, CardDescription, CardHeader, CardTitle};
use crate::ui::components::trend_icon::TrendIcon;
use crate::ui::theme;
use crate::ui::trend::{trend_color, trend_icon, TrendIconSpec};

const TREND_BASE: &str = "flex items-center gap-1 text-sm";
const PERIOD_CLASS: &str = "text-muted-foreground";

/// The change indicator next to the value: icon, magnitude, and period.
///
/// `class` carries the trend color for the icon and magnitude; the period
/// label is always muted.
#[derive(Clone, Debug, PartialEq)]
pub struct TrendSegment {
    pub icon: TrendIconSpec,
    pub class: String,
    pub amount: String,
    pub period: String,
}

impl TrendSegment {
    pub fn resolve(change: &MetricChange) -> Self {
        Self {
            icon: trend_icon(change.trend),
            class: merge_classes(&[TREND_BASE, trend_color(change.trend)]),
            amount: format_change_amount(change.value),
            period: change.period.clone(),
        }
    }
}

/// Everything a metric card draws, resolved from its input in one pass.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricCardView {
    pub container_class: String,
    pub header_class: &'static str,
    pub title: String,
    pub title_class: &'static str,
    pub description: Option<String>,
    pub description_class: &'static str,
    pub content_class: &'static str,
    pub value: String,
    pub value_class: &'static str,
    pub trend: Option<TrendSegment>,
}

impl MetricCardView {
    pub fn resolve(input: &MetricCardInput, locale: &NumberLocale) -> Self {
        let variant = input.variant;
        Self {
            container_class: theme::card_classes(variant, input.status, input.class.as_deref()),
            header_class: theme::header_classes(variant),
            title: input.title.clone(),
            title_class: theme::title_classes(variant),
            description: input.description.clone(),
            description_class: theme::description_classes(variant),
            content_class: theme::content_classes(variant),
            value: format_value(&input.value, locale),
            value_class: theme::value_classes(variant),
            trend: input.change.as_ref().map(TrendSegment::resolve),
        }
    }
}

/// A labeled value with optional description and trend indicator.
///
/// `class`, `id`, and `onclick` go to the outer card untouched, except that
/// `class` is merged over the resolved variant and status classes.
#[component]
pub fn MetricCard(
    #[props(into)] title: String,
    description: Option<String>,
    #[props(into)] value: MetricValue,
    change: Option<MetricChange>,
    #[props(default)] variant: Variant,
    #[props(default)] status: Status,
    class: Option<String>,
    id: Option<String>,
    onclick: Option<EventHandler<MouseEvent>>,
    #[props(default = NumberLocale::current())] locale: NumberLocale,
) -> Element {
    let input = MetricCardInput {
        title,
        description,
        value,
        change,
        variant,
        status,
        class,
    };
    let view = MetricCardView::resolve(&input, &locale);

    rsx! {
        Card {
            class: Some(view.container_class),
            id,
            onclick,
            CardHeader { class: Some(view.header_class.to_string()),
                div { class: "space-y-1",
                    CardTitle { class: Some(view.title_class.to_string()), "{view.title}" }
                    if let Some(description) = view.description {
                        CardDescription { class: Some(view.description_class.to_string()), "{description}" }
                    }
                }
            }
            CardContent { class: Some(view.content_class.to_string()),
                div { class: "flex items-baseline gap-2",
                    div { class: "{view.value_class}", "{view.value}" }
                    if let Some(segment) = view.trend {
                        TrendIndicator { segment }
                    }
                }
            }
        }
    }
}

#[component]
fn TrendIndicator(segment: TrendSegment) -> Element {
    rsx! {
        div { class: "{segment.class}",
            TrendIcon { spec: segment.icon }
            span { class: "font-medium", "{segment.amount}" }
            span { class: PERIOD_CLASS, "{segment.period}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::locale::EN_US;
    use crate::domain::Trend;
    use crate::ui::trend::IconKind;

    fn revenue() -> MetricCardInput {
        MetricCardInput::new("Revenue", 125000.0).with_change(MetricChange::new(
            -3.2,
            "vs last month",
            Trend::Down,
        ))
    }

    #[test]
    fn revenue_card_shows_grouped_value_and_red_down_trend() {
        let view = MetricCardView::resolve(&revenue(), &EN_US);

        assert_eq!(view.title, "Revenue");
        assert_eq!(view.value, "125,000");

        let trend = view.trend.expect("trend segment");
        assert_eq!(trend.icon.kind, IconKind::TrendingDown);
        assert_eq!(trend.amount, "3.2%");
        assert_eq!(trend.period, "vs last month");
        assert!(trend.class.contains("text-red-600"));
        assert!(trend.class.contains("text-sm"));
        assert!(trend.icon.class.contains("text-red-600"));
    }

    #[test]
    fn trend_segment_reuses_the_selected_icon() {
        for trend in Trend::ALL {
            let segment = TrendSegment::resolve(&MetricChange::new(1.0, "vs last week", trend));
            assert_eq!(segment.icon, trend_icon(trend));
            assert!(segment.class.contains(trend_color(trend)));
        }
    }

    #[test]
    fn period_label_is_not_trend_colored() {
        assert_eq!(PERIOD_CLASS, "text-muted-foreground");
        let down = TrendSegment::resolve(&MetricChange::new(-3.2, "vs last month", Trend::Down));
        assert!(down.class.contains("text-red-600"));
        assert!(!down.class.contains(PERIOD_CLASS));
    }

    #[test]
    fn missing_change_omits_trend_segment() {
        let input = MetricCardInput::new("Revenue", 125000.0);
        let view = MetricCardView::resolve(&input, &EN_US);
        assert!(view.trend.is_none());
    }

    #[test]
    fn compact_padding_differs_from_default() {
        let default = MetricCardView::resolve(&revenue(), &EN_US);
        let compact = MetricCardView::resolve(&revenue().with_variant(Variant::Compact), &EN_US);

        assert_ne!(default.header_class, compact.header_class);
        assert_ne!(default.content_class, compact.content_class);
        assert_ne!(default.container_class, compact.container_class);
        assert!(compact.container_class.contains("p-4"));
        assert!(default.container_class.contains("p-6"));
        assert_eq!(compact.title_class, "text-sm");
        assert_eq!(compact.description_class, "text-xs");
    }

    #[test]
    fn error_status_tints_every_variant_red() {
        for variant in Variant::ALL {
            let input = revenue()
                .with_variant(variant)
                .with_status(Status::Error);
            let view = MetricCardView::resolve(&input, &EN_US);
            assert!(view.container_class.contains("border-red-200"));
            assert!(view.container_class.contains("bg-red-50/50"));
        }
    }

    #[test]
    fn textual_value_is_shown_verbatim() {
        let input = MetricCardInput::new("Uptime", "99.95%");
        let view = MetricCardView::resolve(&input, &EN_US);
        assert_eq!(view.value, "99.95%");
    }

    #[test]
    fn value_follows_locale() {
        let de = NumberLocale::lookup("de-DE").unwrap();
        let view = MetricCardView::resolve(&revenue(), &de);
        assert_eq!(view.value, "125.000");
    }

    #[test]
    fn contradictory_sign_and_trend_render_as_given() {
        let input = MetricCardInput::new("Churn", 4.0).with_change(MetricChange::new(
            -1.5,
            "vs last week",
            Trend::Up,
        ));
        let trend = MetricCardView::resolve(&input, &EN_US).trend.unwrap();
        assert_eq!(trend.amount, "1.5%");
        assert_eq!(trend.icon.kind, IconKind::TrendingUp);
        assert!(trend.class.contains("text-green-600"));
    }

    #[test]
    fn caller_class_is_merged_last() {
        let input = revenue().with_class("p-2 shadow-lg");
        let view = MetricCardView::resolve(&input, &EN_US);
        assert!(view.container_class.ends_with("p-2 shadow-lg"));
        assert!(!view.container_class.contains("p-6"));
    }
}
