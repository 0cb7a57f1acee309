/*
lib.rs

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

//! Game logic of Classify Cats.
//!
//! The player classifies cats by the parity of their count:
//!
//! * In the divided screen game, the player drags each cat to the half of the screen that
//!   matches the parity of the number of cats of its kind.
//! * In the rows game, the player clicks the half that matches the parity of the number of
//!   cats.
//! * In the choose game, the player clicks the kind of cat whose count has the requested
//!   parity.
//!
//! The crate does not depend on any toolkit.
//! The host provides the drawing primitives ([`Canvas`]), the timer service ([`Host`]), and
//! the high score storage ([`HighScoreStore`]), and forwards the pointer events to the
//! [`GameArea`] controller.

pub mod cat;
pub mod config;
pub mod evaluation;
pub mod game_area;
pub mod generator;
pub mod geometry;
pub mod interaction;
pub mod levels;
pub mod phase;
pub mod render;
pub mod round;
pub mod saver;
pub mod scoring;
pub mod sides;
pub mod timer;

pub use config::GameConfig;
pub use game_area::GameArea;
pub use levels::{GameType, Level, Levels, LevelsError};
pub use phase::Phase;
pub use render::{Canvas, Rgb, TextExtents};
pub use saver::{HighScoreStore, SaverHighScore};
pub use timer::{Host, TICK_INTERVAL, TimerHandle};
