/*
geometry.rs

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

//! Surface geometry shared by the generator, the pointer handling, and the rendering.

/// Width of the line that divides the screen in two halves.
pub const LINE_WIDTH: f64 = 10.0;

/// Space kept free at the bottom of the surface for the remaining time message.
pub const BOTTOM_MARGIN: f64 = 25.0;

/// Size of the drawing surface, in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
}

impl Surface {
    /// Create a [`Surface`] object.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// X coordinate of the dividing line.
    pub fn center_x(&self) -> f64 {
        self.width / 2.0
    }

    /// Left edge of the band around the dividing line.
    pub fn band_left(&self) -> f64 {
        self.center_x() - LINE_WIDTH / 2.0
    }

    /// Right edge of the band around the dividing line.
    pub fn band_right(&self) -> f64 {
        self.center_x() + LINE_WIDTH / 2.0
    }

    /// Lowest Y coordinate a cat can reach.
    pub fn playfield_bottom(&self) -> f64 {
        self.height - BOTTOM_MARGIN
    }

    /// Index of the half that contains the given X coordinate: 0 for the left half, 1 for
    /// the right half.
    pub fn half_of(&self, x: f64) -> usize {
        if x < self.center_x() { 0 } else { 1 }
    }
}

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the point is inside the rectangle, borders included.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }

    /// Whether the point is inside the rectangle, borders excluded.
    pub fn contains_strict(&self, x: f64, y: f64) -> bool {
        x > self.x && x < self.x + self.width && y > self.y && y < self.y + self.height
    }

    /// Return a copy of the rectangle grown by `margin` on every side.
    pub fn inflate(&self, margin: f64) -> Self {
        Self {
            x: self.x - margin,
            y: self.y - margin,
            width: self.width + 2.0 * margin,
            height: self.height + 2.0 * margin,
        }
    }
}
