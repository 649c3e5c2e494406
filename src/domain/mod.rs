//! Metric data, locale rules, and value formatting live here.

pub mod app_state;
pub mod board;
pub mod format;
pub mod locale;
pub mod metric;

pub use app_state::{AppState, Preferences};
pub use board::Board;
pub use format::{format_change_amount, format_number, format_value};
pub use locale::NumberLocale;
pub use metric::{MetricCardInput, MetricChange, MetricValue, Status, Trend, Variant};
