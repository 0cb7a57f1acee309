/*
sides.rs

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

//! Even and odd classification outcomes, and their assignment to the screen halves.

use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;

/// Parity of a number of cats.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Side {
    Even,
    Odd,
}

impl Side {
    /// Parity of the given count.
    pub fn of_count(count: usize) -> Self {
        if count.is_multiple_of(2) {
            Side::Even
        } else {
            Side::Odd
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Side::Even => Side::Odd,
            Side::Odd => Side::Even,
        }
    }

    /// Whether the count has this parity.
    pub fn matches(self, count: usize) -> bool {
        Side::of_count(count) == self
    }

    /// Untranslated label drawn on the half of the screen that collects this parity.
    pub fn label_msgid(self) -> &'static str {
        match self {
            Side::Even => "Even cats",
            Side::Odd => "Odd cats",
        }
    }

    /// Pick a parity at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            Side::Odd
        } else {
            Side::Even
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Side::Even => write!(f, "even"),
            Side::Odd => write!(f, "odd"),
        }
    }
}

/// Assignment of the two parities to the left (index 0) and right (index 1) halves.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Sides([Side; 2]);

impl Default for Sides {
    fn default() -> Self {
        Self([Side::Even, Side::Odd])
    }
}

impl Sides {
    pub fn new(left: Side) -> Self {
        Self([left, left.opposite()])
    }

    pub fn left(&self) -> Side {
        self.0[0]
    }

    pub fn right(&self) -> Side {
        self.0[1]
    }

    /// Parity assigned to the half with the given index.
    pub fn at(&self, half: usize) -> Side {
        self.0[half.min(1)]
    }

    /// Index of the half that collects the given parity.
    pub fn half_of(&self, side: Side) -> usize {
        if self.0[0] == side { 0 } else { 1 }
    }

    /// Randomly swap the halves.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.0.shuffle(rng);
    }
}
