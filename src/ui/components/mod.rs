pub mod card;
pub mod metric_card;
pub mod toast;
pub mod trend_icon;

pub use metric_card::MetricCard;
