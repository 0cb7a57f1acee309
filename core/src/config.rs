/*
config.rs

Copyright 2025 Hervé Quatremain

This file is part of Classify Cats.

Classify Cats is free software: you can redistribute it and/or modify it under
the terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Classify Cats is distributed in the hope that it will be useful, but WITHOUT
ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Classify Cats. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Session parameters.

use serde::Deserialize;

/// Durations, in seconds, and scoring parameters of a session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Countdown before the first puzzle.
    pub lead_in: u32,

    /// Countdown before the following puzzles.
    pub round_lead_in: u32,

    /// Time to solve a puzzle.
    pub puzzle: u32,

    /// Time the verdict stays on screen.
    pub result: u32,

    /// Number of puzzles in a session.
    pub max_puzzles: u32,

    /// Points for a solved puzzle, before the reaction bonus.
    pub round_bonus: i64,

    /// Points removed at the end of the session when the last puzzle is failed.
    pub game_over_penalty: i64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            lead_in: 5,
            round_lead_in: 3,
            puzzle: 15,
            result: 3,
            max_puzzles: 10,
            round_bonus: 20,
            game_over_penalty: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config() {
        let config: GameConfig =
            serde_json::from_str(r#"{"max_puzzles": 5, "puzzle": 20}"#).expect("valid config");

        assert_eq!(config.max_puzzles, 5);
        assert_eq!(config.puzzle, 20);
        assert_eq!(config.lead_in, 5);
        assert_eq!(config.round_bonus, 20);
    }
}
