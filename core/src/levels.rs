/*
levels.rs

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

//! Level definitions.
//!
//! The levels are loaded once, at startup, from a JSON object that maps the level numbers to
//! the game type and the number of cats to place:
//!
//! ```json
//! {
//!     "1": { "type": 1, "cats": 5 },
//!     "2": { "type": 0, "cats": 4 },
//!     "3": { "type": 2, "cats": 7 }
//! }
//! ```
//!
//! Game types are `0` (divided screen), `1` (rows), and `2` (choose).
//! The `count` key is accepted as an alias of `cats`.
//!
//! Level numbers must be contiguous and start at 1.

use log::debug;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use strum_macros::FromRepr;

use crate::generator::MIN_CHOOSE_COUNT;

/// Levels shipped with the game.
pub const DEFAULT_LEVELS: &str = include_str!("../data/levels.json");

/// Kind of puzzle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr)]
#[repr(u8)]
pub enum GameType {
    /// The player drags each cat to the half of the screen that matches the parity of the
    /// number of cats of its kind.
    DividedScreen = 0,

    /// The player tells whether the total number of cats is even or odd.
    Rows = 1,

    /// The player picks the kind of cat whose count has the requested parity.
    Choose = 2,
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameType::DividedScreen => write!(f, "divided screen"),
            GameType::Rows => write!(f, "rows"),
            GameType::Choose => write!(f, "choose"),
        }
    }
}

/// One level.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Level {
    pub game_type: GameType,

    /// Number of cats to place.
    pub count: usize,
}

/// Level as written in the level file.
#[derive(Deserialize, Debug)]
struct RawLevel {
    #[serde(rename = "type")]
    game_type: u8,
    #[serde(alias = "count")]
    cats: usize,
}

/// Type of errors.
#[derive(Debug)]
pub enum LevelsError {
    /// The level file cannot be read.
    Io(std::io::Error),

    /// The level file is not valid JSON or does not have the expected structure.
    Parse(serde_json::Error),

    /// The level file does not define any level.
    NoLevels,

    /// A key is not a positive level number.
    InvalidNumber(String),

    /// The level numbers are not contiguous from 1.
    MissingLevel(u32),

    /// Unknown game type.
    UnknownType { level: u32, value: u8 },

    /// A level has no cat.
    NoCats(u32),

    /// A choose level has a number of cats that cannot be split in four groups where exactly
    /// one group has a different parity.
    InvalidChooseCount { level: u32, count: usize },
}

impl fmt::Display for LevelsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LevelsError::Io(error) => write!(f, "cannot read the levels: {error}"),
            LevelsError::Parse(error) => write!(f, "cannot parse the levels: {error}"),
            LevelsError::NoLevels => write!(f, "no level defined"),
            LevelsError::InvalidNumber(key) => write!(f, "invalid level number `{key}`"),
            LevelsError::MissingLevel(level) => write!(f, "level {level} is missing"),
            LevelsError::UnknownType { level, value } => {
                write!(f, "level {level}: unknown game type {value}")
            }
            LevelsError::NoCats(level) => write!(f, "level {level}: no cat to place"),
            LevelsError::InvalidChooseCount { level, count } => write!(
                f,
                "level {level}: a choose level needs an odd number of cats, at least \
                 {MIN_CHOOSE_COUNT} (got {count})"
            ),
        }
    }
}

impl Error for LevelsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LevelsError::Io(error) => Some(error),
            LevelsError::Parse(error) => Some(error),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LevelsError {
    fn from(error: std::io::Error) -> Self {
        LevelsError::Io(error)
    }
}

impl From<serde_json::Error> for LevelsError {
    fn from(error: serde_json::Error) -> Self {
        LevelsError::Parse(error)
    }
}

/// Ordered list of the levels. Level numbers start at 1.
#[derive(Debug, Clone)]
pub struct Levels {
    levels: Vec<Level>,
}

impl Default for Levels {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Levels {
    /// Levels shipped with the game.
    pub fn builtin() -> Self {
        Self::from_json(DEFAULT_LEVELS).expect("The built-in level definitions have an error")
    }

    /// Parse and validate the levels from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, LevelsError> {
        let raw: BTreeMap<String, RawLevel> = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    /// Parse and validate the levels from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LevelsError> {
        let raw: BTreeMap<String, RawLevel> = serde_json::from_reader(reader)?;
        Self::from_raw(raw)
    }

    /// Parse and validate the levels from a file.
    pub fn from_file(path: &Path) -> Result<Self, LevelsError> {
        debug!("Loading levels from {path:?}");
        let file: File = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    fn from_raw(raw: BTreeMap<String, RawLevel>) -> Result<Self, LevelsError> {
        if raw.is_empty() {
            return Err(LevelsError::NoLevels);
        }

        // The map is sorted by string, so sort again by level number
        let mut numbered: Vec<(u32, RawLevel)> = Vec::with_capacity(raw.len());
        for (key, level) in raw {
            match key.trim().parse::<u32>() {
                Ok(n) if n > 0 => numbered.push((n, level)),
                _ => return Err(LevelsError::InvalidNumber(key)),
            }
        }
        numbered.sort_by_key(|(n, _)| *n);

        let mut levels: Vec<Level> = Vec::with_capacity(numbered.len());
        for (i, (number, raw_level)) in numbered.into_iter().enumerate() {
            let expected: u32 = i as u32 + 1;
            if number != expected {
                return Err(LevelsError::MissingLevel(expected));
            }
            let game_type: GameType =
                GameType::from_repr(raw_level.game_type).ok_or(LevelsError::UnknownType {
                    level: number,
                    value: raw_level.game_type,
                })?;
            if raw_level.cats == 0 {
                return Err(LevelsError::NoCats(number));
            }
            if game_type == GameType::Choose
                && (raw_level.cats < MIN_CHOOSE_COUNT || raw_level.cats.is_multiple_of(2))
            {
                return Err(LevelsError::InvalidChooseCount {
                    level: number,
                    count: raw_level.cats,
                });
            }
            levels.push(Level {
                game_type,
                count: raw_level.cats,
            });
        }
        debug!("{} levels loaded", levels.len());
        Ok(Self { levels })
    }

    /// Number of levels.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Return the level with the given number (starting at 1).
    pub fn get(&self, number: u32) -> Option<&Level> {
        match number {
            0 => None,
            n => self.levels.get(n as usize - 1),
        }
    }

    /// Iterate over the levels with their number.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &Level)> {
        self.levels
            .iter()
            .enumerate()
            .map(|(i, level)| (i as u32 + 1, level))
    }

    /// Return the level that follows `current`.
    ///
    /// The player moves to the next level after a win. After the last level, or after a loss,
    /// the player goes back to level 1.
    pub fn next_level(&self, current: u32, win: bool) -> u32 {
        if !win {
            return 1;
        }
        let next: u32 = current + 1;
        if next as usize > self.levels.len() {
            1
        } else {
            next
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_levels_are_valid() {
        let levels = Levels::builtin();

        assert!(!levels.is_empty());
        for (number, level) in levels.iter() {
            assert!(level.count > 0, "level {number} has no cat");
        }
    }

    #[test]
    fn test_parse_levels_sorted_by_number() {
        let levels = Levels::from_json(
            r#"{"10": {"type": 0, "cats": 3},
                "1": {"type": 1, "cats": 5},
                "2": {"type": 2, "count": 9},
                "3": {"type": 1, "cats": 2},
                "4": {"type": 1, "cats": 2},
                "5": {"type": 1, "cats": 2},
                "6": {"type": 1, "cats": 2},
                "7": {"type": 1, "cats": 2},
                "8": {"type": 1, "cats": 2},
                "9": {"type": 1, "cats": 2}}"#,
        )
        .expect("valid levels");

        assert_eq!(levels.len(), 10);
        assert_eq!(
            levels.get(1),
            Some(&Level {
                game_type: GameType::Rows,
                count: 5
            })
        );
        assert_eq!(levels.get(2).map(|l| l.count), Some(9));
        assert_eq!(
            levels.get(10).map(|l| l.game_type),
            Some(GameType::DividedScreen)
        );
        assert_eq!(levels.get(0), None);
        assert_eq!(levels.get(11), None);
    }

    #[test]
    fn test_reject_gap() {
        let ret = Levels::from_json(r#"{"1": {"type": 1, "cats": 5}, "3": {"type": 1, "cats": 5}}"#);
        assert!(matches!(ret, Err(LevelsError::MissingLevel(2))));
    }

    #[test]
    fn test_reject_bad_definitions() {
        assert!(matches!(
            Levels::from_json("{}"),
            Err(LevelsError::NoLevels)
        ));
        assert!(matches!(
            Levels::from_json(r#"{"one": {"type": 1, "cats": 5}}"#),
            Err(LevelsError::InvalidNumber(_))
        ));
        assert!(matches!(
            Levels::from_json(r#"{"1": {"type": 7, "cats": 5}}"#),
            Err(LevelsError::UnknownType { level: 1, value: 7 })
        ));
        assert!(matches!(
            Levels::from_json(r#"{"1": {"type": 0, "cats": 0}}"#),
            Err(LevelsError::NoCats(1))
        ));
        assert!(matches!(
            Levels::from_json(r#"{"1": {"type": 2, "cats": 10}}"#),
            Err(LevelsError::InvalidChooseCount { level: 1, count: 10 })
        ));
        assert!(matches!(
            Levels::from_json(r#"{"1": {"type": 2, "cats": 5}}"#),
            Err(LevelsError::InvalidChooseCount { level: 1, count: 5 })
        ));
        assert!(matches!(
            Levels::from_json("[1, 2]"),
            Err(LevelsError::Parse(_))
        ));
    }

    #[test]
    fn test_next_level() {
        let levels = Levels::from_json(
            r#"{"1": {"type": 1, "cats": 5}, "2": {"type": 0, "cats": 4}, "3": {"type": 1, "cats": 6}}"#,
        )
        .expect("valid levels");

        assert_eq!(levels.next_level(1, true), 2);
        assert_eq!(levels.next_level(2, true), 3);
        assert_eq!(levels.next_level(3, true), 1);
        assert_eq!(levels.next_level(2, false), 1);
    }
}
