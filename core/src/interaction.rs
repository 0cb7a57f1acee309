/*
interaction.rs

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

//! Hit-testing and dragging helpers.
//!
//! The cat lists are ordered front to back: the first cat is drawn last, over the others,
//! and is the first candidate for hit-testing.

use crate::cat::Cat;
use crate::geometry::Surface;

/// Return the index of the front-most cat under the pointer, borders included.
pub fn hit_test(cats: &[Cat], x: f64, y: f64) -> Option<usize> {
    cats.iter().position(|cat| cat.rect().contains(x, y))
}

/// Return the index of the option cat under the pointer, borders excluded.
pub fn hover_option(options: &[Cat], x: f64, y: f64) -> Option<usize> {
    options
        .iter()
        .position(|cat| cat.rect().contains_strict(x, y))
}

/// Return the index of the half under the pointer, or `None` when the pointer is over the
/// band around the dividing line.
pub fn hover_half(surface: Surface, x: f64) -> Option<usize> {
    if x <= surface.band_left() {
        Some(0)
    } else if x >= surface.band_right() {
        Some(1)
    } else {
        None
    }
}

/// Move the cat at `index` to the front of the list, and return its new index.
pub fn bring_to_front(cats: &mut [Cat], index: usize) -> usize {
    if index < cats.len() {
        cats[..=index].rotate_right(1);
    }
    0
}

/// Compute the position of a dragged cat.
///
/// The cat is centered on the pointer and kept inside the surface, above the bottom margin.
/// A cat that would overlap the band around the dividing line is pushed out of the band, on
/// the side of `anchor_x`, the previous X coordinate of the pointer.
pub fn drag_position(
    cat: &Cat,
    pointer_x: f64,
    pointer_y: f64,
    anchor_x: f64,
    surface: Surface,
) -> (f64, f64) {
    let max_x: f64 = (surface.width - cat.width).max(0.0);
    let max_y: f64 = (surface.playfield_bottom() - cat.height).max(0.0);
    let mut x: f64 = (pointer_x - cat.width / 2.0).clamp(0.0, max_x);
    let y: f64 = (pointer_y - cat.height / 2.0).clamp(0.0, max_y);

    let band_left: f64 = surface.band_left();
    let band_right: f64 = surface.band_right();
    if x < band_right && x + cat.width > band_left {
        x = if anchor_x < surface.center_x() {
            band_left - cat.width
        } else {
            band_right
        };
    }
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cat::{LARGE_CAT_SIZE, SMALL_CAT_SIZE};

    fn cat_at(kind: u8, x: f64, y: f64) -> Cat {
        let mut cat = Cat::new(kind, SMALL_CAT_SIZE, SMALL_CAT_SIZE);
        cat.x = x;
        cat.y = y;
        cat
    }

    #[test]
    fn test_hit_test_front_to_back() {
        let cats = vec![cat_at(1, 0.0, 0.0), cat_at(2, 30.0, 30.0), cat_at(3, 200.0, 0.0)];

        assert_eq!(hit_test(&cats, 40.0, 40.0), Some(0));
        assert_eq!(hit_test(&cats, 80.0, 80.0), Some(1));
        assert_eq!(hit_test(&cats, 260.0, 60.0), Some(2));
        assert_eq!(hit_test(&cats, 150.0, 150.0), None);
    }

    #[test]
    fn test_hover_option_excludes_borders() {
        let options = vec![cat_at(1, 100.0, 30.0), cat_at(2, 300.0, 30.0)];

        assert_eq!(hover_option(&options, 130.0, 60.0), Some(0));
        assert_eq!(hover_option(&options, 100.0, 60.0), None);
        assert_eq!(hover_option(&options, 330.0, 89.0), Some(1));
        assert_eq!(hover_option(&options, 200.0, 60.0), None);
    }

    #[test]
    fn test_hover_half_dead_zone() {
        let surface = Surface::new(800.0, 600.0);

        assert_eq!(hover_half(surface, 395.0), Some(0));
        assert_eq!(hover_half(surface, 400.0), None);
        assert_eq!(hover_half(surface, 405.0), Some(1));
    }

    #[test]
    fn test_bring_to_front() {
        let mut cats = vec![cat_at(1, 0.0, 0.0), cat_at(2, 0.0, 0.0), cat_at(3, 0.0, 0.0)];

        assert_eq!(bring_to_front(&mut cats, 2), 0);
        let kinds: Vec<u8> = cats.iter().map(|c| c.kind).collect();
        assert_eq!(kinds, vec![3, 1, 2]);
    }

    #[test]
    fn test_drag_clamped_to_surface() {
        let surface = Surface::new(800.0, 600.0);
        let cat = Cat::new(1, LARGE_CAT_SIZE, LARGE_CAT_SIZE);

        assert_eq!(drag_position(&cat, 10.0, 10.0, 10.0, surface), (0.0, 0.0));
        assert_eq!(
            drag_position(&cat, 790.0, 590.0, 790.0, surface),
            (680.0, 455.0)
        );
    }

    #[test]
    fn test_drag_snaps_out_of_band() {
        let surface = Surface::new(800.0, 600.0);
        let cat = Cat::new(1, LARGE_CAT_SIZE, LARGE_CAT_SIZE);

        // Coming from the left half
        let (x, _) = drag_position(&cat, 420.0, 300.0, 380.0, surface);
        assert_eq!(x, 395.0 - LARGE_CAT_SIZE);

        // Coming from the right half
        let (x, _) = drag_position(&cat, 380.0, 300.0, 420.0, surface);
        assert_eq!(x, 405.0);

        // Far enough from the band
        let (x, _) = drag_position(&cat, 200.0, 300.0, 210.0, surface);
        assert_eq!(x, 140.0);
    }
}
