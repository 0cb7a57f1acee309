/*
round.rs

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

//! State of the puzzle being played, and the pointer interactions with it.

use log::debug;

use crate::cat::Cat;
use crate::evaluation::{self, Verdict};
use crate::generator::Puzzle;
use crate::geometry::Surface;
use crate::interaction;
use crate::levels::{GameType, Level};
use crate::sides::{Side, Sides};

/// Answer the player considers or gives in the rows and choose games.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Choice {
    /// Rows game: parity of the number of cats.
    Side(Side),

    /// Choose game: kind of the option cat.
    Kind(u8),
}

/// One puzzle.
///
/// The round is rebuilt for every puzzle.
#[derive(Debug, Clone)]
pub struct Round {
    /// Number of the level being played.
    pub number: u32,
    pub level: Level,

    /// Parities assigned to the left and right halves.
    pub sides: Sides,

    /// Cats, front to back.
    pub cats: Vec<Cat>,

    /// Option cats of the choose game.
    pub options: Vec<Cat>,
    pub choose_target_kind: Option<u8>,

    /// Index of the cat under the pointer.
    pub hover_cat: Option<usize>,

    /// Index of the cat the player is dragging.
    pub selected_cat: Option<usize>,

    pub hover_choice: Option<Choice>,
    pub selected_choice: Option<Choice>,

    /// Last pointer position while a button is pressed.
    pub press: Option<(f64, f64)>,

    /// Whether the player already committed an answer (rows and choose games).
    pub answered: bool,
}

impl Round {
    /// Create a [`Round`] object from a generated puzzle.
    pub fn new(number: u32, level: Level, sides: Sides, puzzle: Puzzle) -> Self {
        Self {
            number,
            level,
            sides,
            cats: puzzle.cats,
            options: puzzle.options,
            choose_target_kind: puzzle.choose_target_kind,
            hover_cat: None,
            selected_cat: None,
            hover_choice: None,
            selected_choice: None,
            press: None,
            answered: false,
        }
    }

    pub fn game_type(&self) -> GameType {
        self.level.game_type
    }

    /// Process a pointer move. Return whether the surface must be redrawn.
    pub fn pointer_motion(&mut self, x: f64, y: f64, surface: Surface) -> bool {
        match self.level.game_type {
            GameType::DividedScreen => {
                if let Some(index) = self.selected_cat {
                    let anchor_x: f64 = self.press.map_or(x, |(px, _)| px);
                    let cat: &mut Cat = &mut self.cats[index];
                    (cat.x, cat.y) = interaction::drag_position(cat, x, y, anchor_x, surface);
                    cat.dragged = true;
                    self.press = Some((x, y));
                    true
                } else {
                    let hover: Option<usize> = interaction::hit_test(&self.cats, x, y);
                    let changed: bool = hover != self.hover_cat;
                    self.hover_cat = hover;
                    changed
                }
            }
            GameType::Rows => {
                if self.answered {
                    return false;
                }
                let hover: Option<Choice> =
                    interaction::hover_half(surface, x).map(|half| Choice::Side(self.sides.at(half)));
                let changed: bool = hover != self.hover_choice;
                self.hover_choice = hover;
                changed
            }
            GameType::Choose => {
                if self.answered {
                    return false;
                }
                let hover: Option<Choice> = interaction::hover_option(&self.options, x, y)
                    .map(|index| Choice::Kind(self.options[index].kind));
                let changed: bool = hover != self.hover_choice;
                self.hover_choice = hover;
                changed
            }
        }
    }

    /// Process a button press. Return whether the surface must be redrawn.
    pub fn pointer_press(&mut self, x: f64, y: f64) -> bool {
        self.press = Some((x, y));
        match self.level.game_type {
            GameType::DividedScreen => match self.hover_cat {
                Some(index) if index < self.cats.len() => {
                    let front: usize = interaction::bring_to_front(&mut self.cats, index);
                    self.selected_cat = Some(front);
                    self.hover_cat = Some(front);
                    true
                }
                _ => false,
            },
            GameType::Rows | GameType::Choose => {
                if !self.answered {
                    self.selected_choice = self.hover_choice;
                }
                false
            }
        }
    }

    /// Process a button release.
    ///
    /// Return `true` when the release commits the answer of a rows or choose puzzle, which
    /// ends the round.
    pub fn pointer_release(&mut self) -> bool {
        self.press = None;
        self.selected_cat = None;
        match self.level.game_type {
            GameType::DividedScreen => false,
            GameType::Rows | GameType::Choose => {
                if self.answered || self.selected_choice.is_none() {
                    return false;
                }
                debug!("Answer committed: {:?}", self.selected_choice);
                self.answered = true;
                true
            }
        }
    }

    /// Evaluate the puzzle.
    pub fn evaluate(&self, surface: Surface) -> Verdict {
        match self.level.game_type {
            GameType::DividedScreen => {
                evaluation::evaluate_divided_screen(&self.cats, self.sides, surface)
            }
            GameType::Rows => {
                let side: Option<Side> = match self.selected_choice {
                    Some(Choice::Side(side)) => Some(side),
                    _ => None,
                };
                evaluation::evaluate_rows(self.cats.len(), side)
            }
            GameType::Choose => {
                let kind: Option<u8> = match self.selected_choice {
                    Some(Choice::Kind(kind)) => Some(kind),
                    _ => None,
                };
                evaluation::evaluate_choose(self.choose_target_kind, kind)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn surface() -> Surface {
        Surface::new(1000.0, 700.0)
    }

    fn new_round(game_type: GameType, count: usize, seed: u64) -> Round {
        let mut rng = StdRng::seed_from_u64(seed);
        let level = Level { game_type, count };
        let puzzle = generator::generate(&level, surface(), Side::Odd, &mut rng).expect("puzzle");
        Round::new(1, level, Sides::new(Side::Even), puzzle)
    }

    #[test]
    fn test_drag_cat_to_front() {
        let mut round = new_round(GameType::DividedScreen, 3, 1);
        let last = round.cats[2].clone();

        // Put the last cat away from the others
        round.cats[2].x = 10.0;
        round.cats[2].y = 10.0;
        for cat in round.cats.iter_mut().take(2) {
            cat.x = 700.0;
        }

        assert!(round.pointer_motion(20.0, 20.0, surface()));
        assert_eq!(round.hover_cat, Some(2));
        assert!(round.pointer_press(20.0, 20.0));
        assert_eq!(round.selected_cat, Some(0));
        assert_eq!(round.cats[0].kind, last.kind);

        assert!(round.pointer_motion(100.0, 200.0, surface()));
        assert_eq!((round.cats[0].x, round.cats[0].y), (40.0, 140.0));
        assert!(round.cats[0].dragged);

        assert!(!round.pointer_release());
        assert_eq!(round.selected_cat, None);
        assert_eq!(round.press, None);
    }

    #[test]
    fn test_rows_answer() {
        let mut round = new_round(GameType::Rows, 5, 2);

        // Dead zone
        round.pointer_motion(500.0, 300.0, surface());
        assert_eq!(round.hover_choice, None);
        round.pointer_press(500.0, 300.0);
        assert!(!round.pointer_release());

        // Right half is odd
        assert!(round.pointer_motion(800.0, 300.0, surface()));
        assert_eq!(round.hover_choice, Some(Choice::Side(Side::Odd)));
        round.pointer_press(800.0, 300.0);
        assert!(round.pointer_release());
        assert!(round.answered);
        assert_eq!(round.evaluate(surface()), Verdict::SelectedRight);

        // Input is locked after the answer
        round.pointer_motion(100.0, 300.0, surface());
        round.pointer_press(100.0, 300.0);
        assert!(!round.pointer_release());
        assert_eq!(round.selected_choice, Some(Choice::Side(Side::Odd)));
    }

    #[test]
    fn test_choose_answer() {
        let mut round = new_round(GameType::Choose, 9, 3);
        let target = round.choose_target_kind.expect("target kind");
        let option = round
            .options
            .iter()
            .find(|o| o.kind == target)
            .expect("option")
            .clone();
        let (x, y) = (option.x + 5.0, option.y + 5.0);

        assert_eq!(round.evaluate(surface()), Verdict::NoChoice);
        assert!(round.pointer_motion(x, y, surface()));
        round.pointer_press(x, y);
        assert!(round.pointer_release());
        assert_eq!(round.evaluate(surface()), Verdict::ChoseRight);
    }
}
