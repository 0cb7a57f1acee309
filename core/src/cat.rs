/*
cat.rs

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

//! Cat icons.

use crate::geometry::Rect;

/// Number of cat kinds. Kinds are numbered from 1 to [`NUM_KINDS`].
pub const NUM_KINDS: usize = 4;

/// Size of the cats in the divided screen game.
pub const LARGE_CAT_SIZE: f64 = 120.0;

/// Size of the cats in the rows and choose games, and of the choose options.
pub const SMALL_CAT_SIZE: f64 = 60.0;

/// A cat icon on the game surface.
///
/// The icon image itself is owned by the renderer, which selects it from [`Cat::kind`] and
/// scales it to the cat size.
#[derive(Debug, Clone, PartialEq)]
pub struct Cat {
    /// Kind of cat, between 1 and [`NUM_KINDS`].
    pub kind: u8,

    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,

    /// Whether the player moved the cat away from its initial position.
    pub dragged: bool,
}

impl Cat {
    /// Create a [`Cat`] object.
    ///
    /// The cat starts outside the surface until the generator gives it a position.
    pub fn new(kind: u8, width: f64, height: f64) -> Self {
        Self {
            kind,
            x: -100.0,
            y: -100.0,
            width,
            height,
            dragged: false,
        }
    }

    /// Bounding box of the cat.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// X coordinate of the middle of the cat.
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Index of the kind in per-kind arrays.
    pub fn kind_index(&self) -> usize {
        usize::from(self.kind.saturating_sub(1)).min(NUM_KINDS - 1)
    }
}
