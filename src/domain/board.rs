use serde::{Deserialize, Serialize};

use super::metric::{MetricCardInput, MetricChange, Status, Trend, Variant};

/// A titled grid of metric cards, as stored in `board.json`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub cards: Vec<MetricCardInput>,
}

fn default_title() -> String {
    "Metrics".to_string()
}

impl Default for Board {
    fn default() -> Self {
        Self::sample()
    }
}

impl Board {
    /// Built-in board used when no board file exists.
    pub fn sample() -> Self {
        Self {
            title: "Monthly overview".to_string(),
            cards: vec![
                MetricCardInput::new("Revenue", 125000.0)
                    .with_description("Gross revenue across all regions")
                    .with_change(MetricChange::new(-3.2, "vs last month", Trend::Down)),
                MetricCardInput::new("Active users", 48213.0)
                    .with_change(MetricChange::new(12.5, "vs last month", Trend::Up))
                    .with_status(Status::Success),
                MetricCardInput::new("Error rate", "0.42%")
                    .with_description("5xx responses")
                    .with_change(MetricChange::new(0.8, "vs last week", Trend::Up))
                    .with_status(Status::Error),
                MetricCardInput::new("Queue depth", 1532.0)
                    .with_status(Status::Warning)
                    .with_variant(Variant::Compact),
                MetricCardInput::new("Avg. response", "184 ms")
                    .with_change(MetricChange::new(0.0, "vs yesterday", Trend::Neutral))
                    .with_status(Status::Info),
                MetricCardInput::new("Conversion", 3.4817)
                    .with_description("Checkout completions per visit, in percent")
                    .with_change(MetricChange::new(1.1, "vs last quarter", Trend::Up))
                    .with_variant(Variant::Detailed),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_parses_to_empty_board() {
        let board: Board = serde_json::from_str("{}").unwrap();
        assert_eq!(board.title, "Metrics");
        assert!(board.cards.is_empty());
    }

    #[test]
    fn sample_board_round_trips_through_json() {
        let sample = Board::sample();
        let json = serde_json::to_string(&sample).unwrap();
        let parsed: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample);
    }

    #[test]
    fn sample_covers_every_trend() {
        let sample = Board::sample();
        for trend in Trend::ALL {
            assert!(
                sample
                    .cards
                    .iter()
                    .any(|card| card.change.as_ref().map(|c| c.trend) == Some(trend)),
                "no sample card for {trend:?}"
            );
        }
        assert!(sample.cards.iter().any(|card| card.change.is_none()));
    }
}
