/*
generator.rs

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

//! Generate random puzzles.
//!
//! A puzzle is generated from a [`Level`] and the size of the surface:
//!
//! * For the divided screen game, each cat gets a random kind and a random position in one of
//!   the two halves of the screen.
//!   Cats never straddle the dividing line.
//! * For the rows game, cats get a random kind and are laid out in rows of five and four cats,
//!   alternately.
//! * For the choose game, the number of cats is split in four groups, one per kind, where
//!   exactly one group has a different parity than the three others (see [`partition`]).
//!   The cats are shuffled and laid out in rows, and four option cats, one per kind, are
//!   placed at the top of the screen.

use log::{Level as LogLevel, debug, log_enabled};
use rand::Rng;
use rand::seq::SliceRandom;
use std::error::Error;
use std::fmt;

use crate::cat::{Cat, LARGE_CAT_SIZE, NUM_KINDS, SMALL_CAT_SIZE};
use crate::geometry::Surface;
use crate::levels::{GameType, Level};
use crate::sides::Side;

/// Smallest number of cats for the choose game: one cat in the odd group and two cats in each
/// even group.
pub const MIN_CHOOSE_COUNT: usize = 7;

/// Horizontal space between two cats in a row.
const ROW_SPACE: f64 = 50.0;

/// Y coordinate of the choose options.
const OPTIONS_Y: f64 = 30.0;

/// Type of errors.
#[derive(Debug, PartialEq, Eq)]
pub enum PartitionError {
    /// Not enough cats to have at least one cat of each kind with the required parities.
    TooSmall(usize),

    /// Four groups where exactly one has a different parity always sum to an odd number.
    EvenCount(usize),
}

impl fmt::Display for PartitionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PartitionError::TooSmall(count) => write!(
                f,
                "{count} cats cannot be split in {NUM_KINDS} groups (minimum is {MIN_CHOOSE_COUNT})"
            ),
            PartitionError::EvenCount(count) => write!(
                f,
                "{count} cats cannot be split in {NUM_KINDS} groups where only one group has a \
                 different parity"
            ),
        }
    }
}

impl Error for PartitionError {}

/// A generated puzzle.
#[derive(Debug, Clone, Default)]
pub struct Puzzle {
    /// The cats to classify.
    pub cats: Vec<Cat>,

    /// One cat per kind that the player clicks to answer (choose game only).
    pub options: Vec<Cat>,

    /// Kind of the cats whose count has the requested parity (choose game only).
    pub choose_target_kind: Option<u8>,
}

/// Generate a puzzle for the given level.
///
/// `choose_parity` is the parity the player must find in the choose game. It is ignored by
/// the other games.
///
/// # Errors
///
/// For the choose game, the method returns an error when the number of cats cannot be
/// partitioned (see [`partition`]).
pub fn generate<R: Rng + ?Sized>(
    level: &Level,
    surface: Surface,
    choose_parity: Side,
    rng: &mut R,
) -> Result<Puzzle, PartitionError> {
    debug!(
        "Generating a {} puzzle with {} cats on a {}x{} surface",
        level.game_type, level.count, surface.width, surface.height
    );
    let puzzle: Puzzle = match level.game_type {
        GameType::DividedScreen => Puzzle {
            cats: divided_screen_cats(level.count, surface, rng),
            ..Default::default()
        },
        GameType::Rows => {
            let kinds: Vec<u8> = (0..level.count).map(|_| random_kind(rng)).collect();
            Puzzle {
                cats: layout_rows(&kinds, surface),
                ..Default::default()
            }
        }
        GameType::Choose => {
            let target_kind: u8 = random_kind(rng);
            let buckets: [usize; NUM_KINDS] =
                partition(level.count, target_kind, choose_parity, rng)?;
            let kinds: Vec<u8> = shuffled_kinds(&buckets, rng);
            Puzzle {
                cats: layout_rows(&kinds, surface),
                options: choose_options(surface),
                choose_target_kind: Some(target_kind),
            }
        }
    };
    Ok(puzzle)
}

/// Random kind between 1 and [`NUM_KINDS`].
fn random_kind<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.random_range(1..=NUM_KINDS as u8)
}

/// Create the cats for the divided screen game at random positions.
fn divided_screen_cats<R: Rng + ?Sized>(count: usize, surface: Surface, rng: &mut R) -> Vec<Cat> {
    let mut cats: Vec<Cat> = Vec::with_capacity(count);

    for _ in 0..count {
        let mut cat: Cat = Cat::new(random_kind(rng), LARGE_CAT_SIZE, LARGE_CAT_SIZE);
        (cat.x, cat.y) = random_position(&cat, surface, rng);
        cats.push(cat);
    }
    cats
}

/// Random position for the cat, fully inside one of the two halves.
///
/// Both halves have the same width, so picking a half first and then a position in that half
/// keeps the positions uniformly distributed.
fn random_position<R: Rng + ?Sized>(cat: &Cat, surface: Surface, rng: &mut R) -> (f64, f64) {
    let center: f64 = surface.center_x();
    let left_max: f64 = (center - cat.width).floor();
    let right_min: f64 = center.ceil();
    let right_max: f64 = (surface.width - cat.width).floor();
    let left_fits: bool = left_max >= 0.0;
    let right_fits: bool = right_max >= right_min;

    let x: f64 = match (left_fits, right_fits) {
        (true, true) => {
            if rng.random_bool(0.5) {
                rng.random_range(0..=left_max as u32) as f64
            } else {
                rng.random_range(right_min as u32..=right_max as u32) as f64
            }
        }
        (true, false) => rng.random_range(0..=left_max as u32) as f64,
        (false, true) => rng.random_range(right_min as u32..=right_max as u32) as f64,
        // The surface is too narrow for the cat
        (false, false) => 0.0,
    };
    let y_max: f64 = (surface.playfield_bottom() - cat.height).floor().max(0.0);
    let y: f64 = rng.random_range(0..=y_max as u32) as f64;
    (x, y)
}

/// Number of cats in each row: rows of five and four cats, alternately.
pub fn row_lengths(count: usize) -> Vec<usize> {
    let mut rows: Vec<usize> = Vec::new();
    let mut placed: usize = 0;
    let mut capacity: usize = 0;

    while placed < count {
        capacity = if capacity == 5 { 4 } else { 5 };
        let n: usize = capacity.min(count - placed);
        rows.push(n);
        placed += n;
    }
    rows
}

/// Lay out the cats of the given kinds in rows.
///
/// Each row is centered horizontally, and the block of rows is centered vertically.
fn layout_rows(kinds: &[u8], surface: Surface) -> Vec<Cat> {
    let step: f64 = SMALL_CAT_SIZE + ROW_SPACE;
    let rows: Vec<usize> = row_lengths(kinds.len());
    let top: f64 = surface.height / 2.0 - rows.len() as f64 * SMALL_CAT_SIZE / 2.0;
    let mut cats: Vec<Cat> = Vec::with_capacity(kinds.len());
    let mut kind_iter = kinds.iter();

    for (row, &length) in rows.iter().enumerate() {
        let left: f64 = surface.width / 2.0 - length as f64 * step / 2.0 + ROW_SPACE / 2.0;
        for column in 0..length {
            if let Some(&kind) = kind_iter.next() {
                let mut cat: Cat = Cat::new(kind, SMALL_CAT_SIZE, SMALL_CAT_SIZE);
                cat.x = left + column as f64 * step;
                cat.y = top + row as f64 * SMALL_CAT_SIZE;
                cats.push(cat);
            }
        }
    }
    cats
}

/// Return the four option cats of the choose game, one per kind, at the top of the surface.
pub fn choose_options(surface: Surface) -> Vec<Cat> {
    let x_pad: f64 = (surface.width / 10.0).floor();
    let x_step: f64 = ((surface.width - 2.0 * x_pad) / NUM_KINDS as f64).floor();

    (1..=NUM_KINDS as u8)
        .map(|kind| {
            let mut cat: Cat = Cat::new(kind, SMALL_CAT_SIZE, SMALL_CAT_SIZE);
            cat.x = x_pad + f64::from(kind - 1) * x_step + x_pad;
            cat.y = OPTIONS_Y;
            cat
        })
        .collect()
}

/// Split `count` cats in one group per kind.
///
/// The group of `target_kind` has the `target_parity` parity, and the three other groups have
/// the opposite parity. All the groups have at least one cat.
///
/// Every group starts with the smallest size for its parity (one cat for odd, two for even),
/// and the remaining cats are then added to random groups by pairs, which keeps the parities.
///
/// # Errors
///
/// The method returns an error when `count` is lower than [`MIN_CHOOSE_COUNT`], or when
/// `count` is even.
pub fn partition<R: Rng + ?Sized>(
    count: usize,
    target_kind: u8,
    target_parity: Side,
    rng: &mut R,
) -> Result<[usize; NUM_KINDS], PartitionError> {
    if count < MIN_CHOOSE_COUNT {
        return Err(PartitionError::TooSmall(count));
    }
    if count.is_multiple_of(2) {
        return Err(PartitionError::EvenCount(count));
    }

    let target_index: usize = usize::from(target_kind.clamp(1, NUM_KINDS as u8) - 1);
    let smallest = |parity: Side| -> usize {
        match parity {
            Side::Odd => 1,
            Side::Even => 2,
        }
    };
    let mut buckets: [usize; NUM_KINDS] = [smallest(target_parity.opposite()); NUM_KINDS];
    buckets[target_index] = smallest(target_parity);

    let base: usize = buckets.iter().sum();
    for _ in 0..(count - base) / 2 {
        buckets[rng.random_range(0..NUM_KINDS)] += 2;
    }

    if log_enabled!(LogLevel::Debug) {
        debug!("Partition of {count} cats:");
        debug!("      target kind = {target_kind}");
        debug!("    target parity = {target_parity}");
        debug!("          buckets = {buckets:?}");
    }
    Ok(buckets)
}

/// Flatten the groups into a shuffled list of kinds, so that the display order does not
/// reveal the groups.
pub fn shuffled_kinds<R: Rng + ?Sized>(buckets: &[usize; NUM_KINDS], rng: &mut R) -> Vec<u8> {
    let mut kinds: Vec<u8> = buckets
        .iter()
        .enumerate()
        .flat_map(|(i, &n)| std::iter::repeat_n(i as u8 + 1, n))
        .collect();
    kinds.shuffle(rng);
    kinds
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn surface() -> Surface {
        Surface::new(1200.0, 800.0)
    }

    fn assert_one_opposite(buckets: &[usize; NUM_KINDS], target_kind: u8, parity: Side) {
        for (i, &n) in buckets.iter().enumerate() {
            assert!(n >= 1, "empty bucket in {buckets:?}");
            if i == usize::from(target_kind - 1) {
                assert!(parity.matches(n), "target bucket in {buckets:?}");
            } else {
                assert!(parity.opposite().matches(n), "other bucket in {buckets:?}");
            }
        }
    }

    #[test]
    fn test_partition_properties() {
        let mut rng = StdRng::seed_from_u64(42);

        for count in (MIN_CHOOSE_COUNT..=41).step_by(2) {
            for target_kind in 1..=NUM_KINDS as u8 {
                for parity in [Side::Odd, Side::Even] {
                    let buckets = partition(count, target_kind, parity, &mut rng)
                        .expect("valid partition");
                    assert_eq!(buckets.iter().sum::<usize>(), count);
                    assert_one_opposite(&buckets, target_kind, parity);
                }
            }
        }
    }

    #[test]
    fn test_partition_odd_target() {
        let mut rng = StdRng::seed_from_u64(3);
        let buckets = partition(11, 2, Side::Odd, &mut rng).expect("valid partition");

        assert_eq!(buckets.iter().sum::<usize>(), 11);
        assert_eq!(buckets.iter().filter(|n| *n % 2 == 1).count(), 1);
        assert_eq!(buckets.iter().filter(|n| *n % 2 == 0).count(), 3);
        assert_eq!(buckets[1] % 2, 1);
    }

    #[test]
    fn test_partition_rejects_impossible_counts() {
        let mut rng = StdRng::seed_from_u64(3);

        assert_eq!(
            partition(10, 1, Side::Odd, &mut rng),
            Err(PartitionError::EvenCount(10))
        );
        assert_eq!(
            partition(5, 1, Side::Even, &mut rng),
            Err(PartitionError::TooSmall(5))
        );
        assert_eq!(
            partition(0, 1, Side::Odd, &mut rng),
            Err(PartitionError::TooSmall(0))
        );
    }

    #[test]
    fn test_shuffled_kinds_keep_counts() {
        let mut rng = StdRng::seed_from_u64(11);
        let kinds = shuffled_kinds(&[3, 2, 4, 2], &mut rng);

        assert_eq!(kinds.len(), 11);
        for kind in 1..=4u8 {
            let n = kinds.iter().filter(|k| **k == kind).count();
            assert_eq!(n, [3, 2, 4, 2][usize::from(kind - 1)]);
        }
    }

    #[test]
    fn test_row_lengths_alternate() {
        assert_eq!(row_lengths(0), Vec::<usize>::new());
        assert_eq!(row_lengths(3), vec![3]);
        assert_eq!(row_lengths(5), vec![5]);
        assert_eq!(row_lengths(8), vec![5, 3]);
        assert_eq!(row_lengths(14), vec![5, 4, 5]);
        assert_eq!(row_lengths(16), vec![5, 4, 5, 2]);
    }

    #[test]
    fn test_rows_layout_centered() {
        let mut rng = StdRng::seed_from_u64(5);
        let level = Level {
            game_type: GameType::Rows,
            count: 9,
        };
        let puzzle = generate(&level, surface(), Side::Odd, &mut rng).expect("puzzle");

        assert_eq!(puzzle.cats.len(), 9);
        assert!(puzzle.options.is_empty());
        assert_eq!(puzzle.choose_target_kind, None);

        // First row: five cats centered around the middle of the surface
        let first_row: Vec<&Cat> = puzzle.cats.iter().take(5).collect();
        let left = first_row[0].x;
        let right = first_row[4].x + first_row[4].width;
        assert!(((left + right) / 2.0 - 600.0).abs() < 1e-9);

        // Two rows, vertically centered
        let top = puzzle.cats[0].y;
        let bottom = puzzle.cats[8].y + puzzle.cats[8].height;
        assert!(((top + bottom) / 2.0 - 400.0).abs() < 1e-9);
        assert!(puzzle.cats.iter().all(|c| (1..=4).contains(&c.kind)));
    }

    #[test]
    fn test_divided_screen_cats_never_straddle() {
        let mut rng = StdRng::seed_from_u64(9);
        let level = Level {
            game_type: GameType::DividedScreen,
            count: 8,
        };
        let surface = surface();

        for _ in 0..50 {
            let puzzle = generate(&level, surface, Side::Odd, &mut rng).expect("puzzle");
            assert_eq!(puzzle.cats.len(), 8);
            for cat in &puzzle.cats {
                assert!(cat.x >= 0.0 && cat.x + cat.width <= surface.width);
                assert!(cat.y >= 0.0 && cat.y + cat.height <= surface.playfield_bottom());
                assert!(
                    cat.x + cat.width <= surface.center_x() || cat.x >= surface.center_x(),
                    "cat straddles the line: {cat:?}"
                );
                assert!(!cat.dragged);
            }
        }
    }

    #[test]
    fn test_choose_puzzle() {
        let mut rng = StdRng::seed_from_u64(13);
        let level = Level {
            game_type: GameType::Choose,
            count: 11,
        };
        let puzzle = generate(&level, surface(), Side::Even, &mut rng).expect("puzzle");
        let target = puzzle.choose_target_kind.expect("target kind");

        assert_eq!(puzzle.cats.len(), 11);
        assert_eq!(puzzle.options.len(), NUM_KINDS);
        let n = puzzle.cats.iter().filter(|c| c.kind == target).count();
        assert!(Side::Even.matches(n) && n >= 2);
        for kind in (1..=NUM_KINDS as u8).filter(|k| *k != target) {
            let n = puzzle.cats.iter().filter(|c| c.kind == kind).count();
            assert!(Side::Odd.matches(n));
        }
    }

    #[test]
    fn test_choose_options_layout() {
        let options = choose_options(Surface::new(1000.0, 600.0));

        assert_eq!(options.len(), 4);
        assert_eq!(options[0].x, 200.0);
        assert_eq!(options[1].x, 400.0);
        assert_eq!(options[3].x, 800.0);
        assert!(options.iter().all(|o| o.y == OPTIONS_Y));
    }
}
