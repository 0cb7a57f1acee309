/*
evaluation.rs

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

//! Decide whether the player solved the puzzle.

use crate::cat::{Cat, NUM_KINDS};
use crate::geometry::Surface;
use crate::sides::{Side, Sides};

/// Outcome of a puzzle.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Divided screen: every cat is on the correct half.
    Placed,
    /// Divided screen: at least one cat is on the wrong half.
    Misplaced,

    /// Rows: the player selected the parity of the number of cats.
    SelectedRight,
    SelectedWrong,
    NoSelection,

    /// Choose: the player chose the kind of cats with the requested parity.
    ChoseRight,
    ChoseWrong,
    NoChoice,
}

impl Verdict {
    pub fn is_win(self) -> bool {
        matches!(
            self,
            Verdict::Placed | Verdict::SelectedRight | Verdict::ChoseRight
        )
    }

    /// Untranslated message displayed on the result screen.
    pub fn msgid(self) -> &'static str {
        match self {
            Verdict::Placed => "You correctly placed the cats!",
            Verdict::Misplaced => "You failed to place the cats correctly",
            Verdict::SelectedRight => "You selected correctly!",
            Verdict::SelectedWrong => "You selected wrong",
            Verdict::NoSelection => "You should have selected an option",
            Verdict::ChoseRight => "You chose correctly!",
            Verdict::ChoseWrong => "You chose wrong",
            Verdict::NoChoice => "You should have chosen an option",
        }
    }
}

/// Number of cats of each kind. Index 0 is for kind 1.
pub fn kind_counts(cats: &[Cat]) -> [usize; NUM_KINDS] {
    let mut counts: [usize; NUM_KINDS] = [0; NUM_KINDS];
    for cat in cats {
        counts[cat.kind_index()] += 1;
    }
    counts
}

/// Whether the cat is on the half assigned to the parity of the number of cats of its kind.
fn is_correctly_placed(cat: &Cat, counts: &[usize; NUM_KINDS], sides: Sides, surface: Surface) -> bool {
    let expected: Side = Side::of_count(counts[cat.kind_index()]);
    sides.at(surface.half_of(cat.center_x())) == expected
}

/// Evaluate a divided screen puzzle.
///
/// The rule applies to every cat: all the cats of a kind go to the half of the parity of
/// that kind's count.
pub fn evaluate_divided_screen(cats: &[Cat], sides: Sides, surface: Surface) -> Verdict {
    let counts: [usize; NUM_KINDS] = kind_counts(cats);

    if cats
        .iter()
        .all(|cat| is_correctly_placed(cat, &counts, sides, surface))
    {
        Verdict::Placed
    } else {
        Verdict::Misplaced
    }
}

/// Evaluate a rows puzzle.
pub fn evaluate_rows(cat_count: usize, selected: Option<Side>) -> Verdict {
    match selected {
        None => Verdict::NoSelection,
        Some(side) if side.matches(cat_count) => Verdict::SelectedRight,
        Some(_) => Verdict::SelectedWrong,
    }
}

/// Evaluate a choose puzzle.
pub fn evaluate_choose(target_kind: Option<u8>, selected_kind: Option<u8>) -> Verdict {
    match selected_kind {
        None => Verdict::NoChoice,
        Some(kind) if Some(kind) == target_kind => Verdict::ChoseRight,
        Some(_) => Verdict::ChoseWrong,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cat::LARGE_CAT_SIZE;
    use crate::generator;
    use crate::levels::{GameType, Level};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn surface() -> Surface {
        Surface::new(1000.0, 700.0)
    }

    fn cat_on_half(kind: u8, half: usize, surface: Surface) -> Cat {
        let mut cat = Cat::new(kind, LARGE_CAT_SIZE, LARGE_CAT_SIZE);
        cat.x = if half == 0 { 50.0 } else { surface.band_right() + 50.0 };
        cat.y = 100.0;
        cat
    }

    /// Move every cat to the half of its kind's count parity.
    fn solve(cats: &mut [Cat], sides: Sides, surface: Surface) {
        let counts = kind_counts(cats);
        for cat in cats.iter_mut() {
            let half = sides.half_of(Side::of_count(counts[cat.kind_index()]));
            *cat = Cat {
                dragged: true,
                ..cat_on_half(cat.kind, half, surface)
            };
        }
    }

    #[test]
    fn test_divided_screen_per_kind_rule() {
        let surface = surface();
        let sides = Sides::new(Side::Odd);
        // Three cats of kind 1 (odd, left) and two cats of kind 2 (even, right)
        let mut cats = vec![
            cat_on_half(1, 0, surface),
            cat_on_half(1, 0, surface),
            cat_on_half(1, 0, surface),
            cat_on_half(2, 1, surface),
            cat_on_half(2, 1, surface),
        ];
        assert_eq!(evaluate_divided_screen(&cats, sides, surface), Verdict::Placed);

        // A single instance on the wrong half is enough to lose
        cats[4] = cat_on_half(2, 0, surface);
        assert_eq!(evaluate_divided_screen(&cats, sides, surface), Verdict::Misplaced);
    }

    #[test]
    fn test_generated_divided_screen_solved() {
        let mut rng = StdRng::seed_from_u64(21);
        let surface = surface();
        let level = Level {
            game_type: GameType::DividedScreen,
            count: 9,
        };

        for _ in 0..30 {
            let mut sides = Sides::default();
            sides.shuffle(&mut rng);
            let mut puzzle =
                generator::generate(&level, surface, Side::Odd, &mut rng).expect("puzzle");
            let counts = kind_counts(&puzzle.cats);
            for cat in &puzzle.cats {
                let parity = Side::of_count(counts[cat.kind_index()]);
                assert!(sides.left() == parity || sides.right() == parity);
                assert_ne!(sides.left(), sides.right());
            }
            solve(&mut puzzle.cats, sides, surface);
            assert!(evaluate_divided_screen(&puzzle.cats, sides, surface).is_win());
        }
    }

    #[test]
    fn test_rows() {
        assert_eq!(evaluate_rows(5, Some(Side::Odd)), Verdict::SelectedRight);
        assert_eq!(evaluate_rows(5, Some(Side::Even)), Verdict::SelectedWrong);
        assert_eq!(evaluate_rows(8, Some(Side::Even)), Verdict::SelectedRight);
        assert_eq!(evaluate_rows(8, None), Verdict::NoSelection);
        assert!(!Verdict::NoSelection.is_win());
    }

    #[test]
    fn test_choose() {
        assert_eq!(evaluate_choose(Some(3), Some(3)), Verdict::ChoseRight);
        assert_eq!(evaluate_choose(Some(3), Some(1)), Verdict::ChoseWrong);
        assert_eq!(evaluate_choose(Some(3), None), Verdict::NoChoice);
        assert!(Verdict::ChoseRight.is_win());
        assert!(!Verdict::ChoseWrong.is_win());
    }
}
