use serde::{Deserialize, Serialize};

use super::board::Board;
use super::locale::NumberLocale;
use super::metric::{MetricCardInput, Variant};

/// User choices that survive restarts.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Locale tag; `None` follows the environment.
    #[serde(default)]
    pub locale: Option<String>,
    /// Forces every card on the board into one density.
    #[serde(default)]
    pub density: Option<Variant>,
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub preferences: Preferences,
    pub board: Board,
}

impl AppState {
    pub fn new(preferences: Preferences, board: Board) -> Self {
        Self { preferences, board }
    }

    pub fn locale(&self) -> NumberLocale {
        match &self.preferences.locale {
            Some(tag) => NumberLocale::resolve(tag),
            None => NumberLocale::current(),
        }
    }

    /// Variant a card is drawn with once the density preference is applied.
    pub fn variant_for(&self, card: &MetricCardInput) -> Variant {
        self.preferences.density.unwrap_or(card.variant)
    }
}
