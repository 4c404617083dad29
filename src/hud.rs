//! HUD text drawn over the playfield

use std::fmt;

use serde::Serialize;

use crate::sim::GameState;

/// Prompt shown while no mode is picked
pub const MENU_PROMPT: &str = "Choose a mode: Easy or Difficult";

/// Text the renderer puts on screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hud {
    /// "Easy", "Difficult" or the menu prompt
    pub title: String,
    /// "Hits: N" (empty on the menu)
    pub hits: String,
    /// "Avg: 3.5 s" / "Avg: --" (empty on the menu)
    pub average: String,
}

impl Hud {
    pub fn from_state(state: &GameState) -> Self {
        if !state.mode.is_playing() {
            return Self {
                title: MENU_PROMPT.to_string(),
                hits: String::new(),
                average: String::new(),
            };
        }

        Self {
            title: state.mode.as_str().to_string(),
            hits: format!("Hits: {}", state.score.hits),
            average: format!("Avg: {}", state.score.average_text()),
        }
    }

    /// Non-empty lines, top to bottom
    pub fn lines(&self) -> Vec<&str> {
        [&self.title, &self.hits, &self.average]
            .into_iter()
            .map(String::as_str)
            .filter(|line| !line.is_empty())
            .collect()
    }
}

impl fmt::Display for Hud {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().join(" | "))
    }
}
