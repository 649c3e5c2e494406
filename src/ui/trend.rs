use crate::domain::Trend;

/// One stroke of a 24x24 icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconShape {
    Polyline(&'static str),
    Path(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    TrendingUp,
    TrendingDown,
    Minus,
}

impl IconKind {
    pub fn name(&self) -> &'static str {
        match self {
            IconKind::TrendingUp => "trending-up",
            IconKind::TrendingDown => "trending-down",
            IconKind::Minus => "minus",
        }
    }

    pub fn shapes(&self) -> &'static [IconShape] {
        match self {
            IconKind::TrendingUp => &[
                IconShape::Polyline("22 7 13.5 15.5 8.5 10.5 2 17"),
                IconShape::Polyline("16 7 22 7 22 13"),
            ],
            IconKind::TrendingDown => &[
                IconShape::Polyline("22 17 13.5 8.5 8.5 13.5 2 7"),
                IconShape::Polyline("16 17 22 17 22 11"),
            ],
            IconKind::Minus => &[IconShape::Path("M5 12h14")],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrendIconSpec {
    pub kind: IconKind,
    pub class: &'static str,
}

pub fn trend_icon(trend: Trend) -> TrendIconSpec {
    match trend {
        Trend::Up => TrendIconSpec {
            kind: IconKind::TrendingUp,
            class: "h-4 w-4 text-green-600 dark:text-green-400",
        },
        Trend::Down => TrendIconSpec {
            kind: IconKind::TrendingDown,
            class: "h-4 w-4 text-red-600 dark:text-red-400",
        },
        Trend::Neutral => TrendIconSpec {
            kind: IconKind::Minus,
            class: "h-4 w-4 text-muted-foreground",
        },
    }
}

/// Text color of the trend icon and percentage. The period label stays muted.
pub fn trend_color(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "text-green-600 dark:text-green-400",
        Trend::Down => "text-red-600 dark:text-red-400",
        Trend::Neutral => "text-muted-foreground",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ICON_SIZE: &str = "h-4 w-4";

    #[test]
    fn every_trend_has_icon_and_color() {
        for trend in Trend::ALL {
            let icon = trend_icon(trend);
            assert!(!icon.class.is_empty());
            assert!(!icon.kind.shapes().is_empty());
            assert!(!trend_color(trend).is_empty());
        }
    }

    #[test]
    fn icons_are_distinct() {
        assert_eq!(trend_icon(Trend::Up).kind, IconKind::TrendingUp);
        assert_eq!(trend_icon(Trend::Down).kind, IconKind::TrendingDown);
        assert_eq!(trend_icon(Trend::Neutral).kind, IconKind::Minus);
    }

    #[test]
    fn icon_is_sized_and_colored_like_text() {
        for trend in Trend::ALL {
            let icon = trend_icon(trend);
            assert_eq!(icon.class, format!("{ICON_SIZE} {}", trend_color(trend)));
        }
    }

    #[test]
    fn down_is_red_and_up_is_green() {
        assert!(trend_color(Trend::Down).contains("text-red-600"));
        assert!(trend_color(Trend::Up).contains("text-green-600"));
        assert_eq!(trend_color(Trend::Neutral), "text-muted-foreground");
    }
}
