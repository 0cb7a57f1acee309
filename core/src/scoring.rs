/*
scoring.rs

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

//! Score computation and high score update.
//!
//! Scores can be negative.

use log::{debug, warn};

use crate::config::GameConfig;
use crate::evaluation::Verdict;
use crate::saver::HighScoreStore;

/// Points earned by a puzzle.
///
/// A solved puzzle earns the round bonus plus the seconds that were left when the player
/// answered. A failed puzzle earns nothing.
pub fn round_points(config: &GameConfig, verdict: Verdict, reaction_bonus: u32) -> i64 {
    if verdict.is_win() {
        config.round_bonus + i64::from(reaction_bonus)
    } else {
        0
    }
}

/// Score at the end of the session: the penalty applies when the last puzzle is failed.
pub fn final_score(config: &GameConfig, score: i64, last_win: bool) -> i64 {
    if last_win {
        score
    } else {
        score - config.game_over_penalty
    }
}

/// Save the score if it beats the stored high score, and return the high score.
///
/// Errors are logged and the stored high score then defaults to 0.
pub fn update_high_score(store: &mut dyn HighScoreStore, score: i64) -> i64 {
    let stored: i64 = match store.read_high_score() {
        Ok(Some(s)) => s,
        Ok(None) => {
            debug!("No high score saved yet");
            0
        }
        Err(error) => {
            warn!("Cannot read the high score: {error}");
            0
        }
    };

    if score > stored {
        debug!("New high score: {score} (was {stored})");
        if let Err(error) = store.write_high_score(score) {
            warn!("Cannot save the high score: {error}");
        }
        score
    } else {
        stored
    }
}
