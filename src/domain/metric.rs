#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// Direction of a metric's change over its comparison period.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

impl Trend {
    pub const ALL: [Trend; 3] = [Trend::Up, Trend::Down, Trend::Neutral];
}

/// Display density of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Default,
    Compact,
    Detailed,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Default, Variant::Compact, Variant::Detailed];

    pub fn name(&self) -> &'static str {
        match self {
            Variant::Default => "Default",
            Variant::Compact => "Compact",
            Variant::Detailed => "Detailed",
        }
    }
}

/// Semantic category that tints a card's border and background.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Warning,
    Error,
    Info,
    #[default]
    Neutral,
}

impl Status {
    pub const ALL: [Status; 5] = [
        Status::Success,
        Status::Warning,
        Status::Error,
        Status::Info,
        Status::Neutral,
    ];
}

/// The headline value of a card. Numbers get locale formatting, text is shown as-is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        MetricValue::Number(value)
    }
}

impl From<i64> for MetricValue {
    fn from(value: i64) -> Self {
        MetricValue::Number(value as f64)
    }
}

impl From<&str> for MetricValue {
    fn from(value: &str) -> Self {
        MetricValue::Text(value.to_string())
    }
}

impl From<String> for MetricValue {
    fn from(value: String) -> Self {
        MetricValue::Text(value)
    }
}

/// Relative change shown next to the value.
///
/// Only the magnitude of `value` is displayed; `trend` alone decides icon and
/// color, so a negative value with an upward trend is rendered as given.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricChange {
    pub value: f64,
    pub period: String,
    pub trend: Trend,
}

impl MetricChange {
    pub fn new(value: f64, period: impl Into<String>, trend: Trend) -> Self {
        Self {
            value,
            period: period.into(),
            trend,
        }
    }
}

/// Everything a single metric card render needs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricCardInput {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub value: MetricValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change: Option<MetricChange>,
    #[serde(default)]
    pub variant: Variant,
    #[serde(default)]
    pub status: Status,
    /// Extra classes for the outer container; they win over computed ones.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

impl MetricCardInput {
    pub fn new(title: impl Into<String>, value: impl Into<MetricValue>) -> Self {
        Self {
            title: title.into(),
            description: None,
            value: value.into(),
            change: None,
            variant: Variant::default(),
            status: Status::default(),
            class: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_change(mut self, change: MetricChange) -> Self {
        self.change = Some(change);
        self
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_card_with_defaults() {
        let json = r#"{ "title": "Revenue", "value": 125000 }"#;
        let card: MetricCardInput = serde_json::from_str(json).unwrap();

        assert_eq!(card.title, "Revenue");
        assert_eq!(card.value, MetricValue::Number(125000.0));
        assert_eq!(card.variant, Variant::Default);
        assert_eq!(card.status, Status::Neutral);
        assert!(card.change.is_none());
        assert!(card.description.is_none());
    }

    #[test]
    fn deserializes_textual_value_and_change() {
        let json = r#"{
            "title": "Uptime",
            "value": "99.9%",
            "variant": "compact",
            "status": "success",
            "change": { "value": -3.2, "period": "vs last month", "trend": "down" }
        }"#;
        let card: MetricCardInput = serde_json::from_str(json).unwrap();

        assert_eq!(card.value, MetricValue::Text("99.9%".into()));
        assert_eq!(card.variant, Variant::Compact);
        assert_eq!(card.status, Status::Success);
        assert_eq!(
            card.change,
            Some(MetricChange::new(-3.2, "vs last month", Trend::Down))
        );
    }

    #[test]
    fn rejects_unknown_trend() {
        let json = r#"{ "value": 1, "period": "p", "trend": "sideways" }"#;
        assert!(serde_json::from_str::<MetricChange>(json).is_err());
    }

    #[test]
    fn builder_sets_fields() {
        let card = MetricCardInput::new("Orders", 42_i64)
            .with_description("Last 24h")
            .with_variant(Variant::Detailed)
            .with_status(Status::Info)
            .with_class("col-span-2");

        assert_eq!(card.value, MetricValue::Number(42.0));
        assert_eq!(card.description.as_deref(), Some("Last 24h"));
        assert_eq!(card.variant, Variant::Detailed);
        assert_eq!(card.status, Status::Info);
        assert_eq!(card.class.as_deref(), Some("col-span-2"));
    }
}
