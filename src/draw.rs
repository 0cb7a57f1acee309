/*
draw.rs

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

//! Draw the game screens with Cairo.

use gettextrs::gettext;
use log::{debug, warn};
use std::path::Path;

use gtk::cairo::{Context, Error, Format, ImageSurface};
use gtk::gdk;
use gtk::gdk::prelude::TextureExt;

use classify_cats_core::cat::{Cat, NUM_KINDS};
use classify_cats_core::geometry::Rect;
use classify_cats_core::{Canvas, Rgb, TextExtents};

/// Colors of the placeholders that replace the cat images that cannot be loaded.
const PLACEHOLDER_COLORS: [Rgb; NUM_KINDS] = [
    Rgb::new(0.96, 0.62, 0.26),
    Rgb::new(0.45, 0.45, 0.45),
    Rgb::new(0.87, 0.87, 0.82),
    Rgb::new(0.35, 0.22, 0.12),
];

/// Cat image, at its natural size.
#[derive(Debug)]
struct CatImage {
    surface: ImageSurface,
    width: f64,
    height: f64,
}

/// Images of the cat kinds.
#[derive(Debug)]
pub struct CatImages {
    /// Image of each kind. `None` when the image file cannot be loaded.
    images: Vec<Option<CatImage>>,
}

impl CatImages {
    /// Load the `catN.svg` images from the given directory.
    pub fn load(dir: &Path) -> Self {
        let images: Vec<Option<CatImage>> = (1..=NUM_KINDS)
            .map(|kind| {
                let path = dir.join(format!("cat{kind}.svg"));
                match Self::load_image(&path) {
                    Ok(image) => {
                        debug!(
                            "Loaded {} ({}x{})",
                            path.display(),
                            image.width,
                            image.height
                        );
                        Some(image)
                    }
                    Err(error) => {
                        warn!("Cannot load {}: {error}", path.display());
                        None
                    }
                }
            })
            .collect();
        Self { images }
    }

    /// Load an image file and store it in a Cairo surface.
    fn load_image(path: &Path) -> Result<CatImage, Box<dyn std::error::Error>> {
        let texture: gdk::Texture = gdk::Texture::from_filename(path)?;
        let texture_downloader: gdk::TextureDownloader = gdk::TextureDownloader::new(&texture);
        let (data, stride) = texture_downloader.download_bytes();
        let width: i32 = texture.width();
        let height: i32 = texture.height();
        let surface: ImageSurface = ImageSurface::create_for_data(
            data.into_data(),
            Format::ARgb32,
            width,
            height,
            stride as i32,
        )?;

        Ok(CatImage {
            surface,
            width: width as f64,
            height: height as f64,
        })
    }

    fn get(&self, cat: &Cat) -> Option<&CatImage> {
        self.images.get(cat.kind_index()).and_then(Option::as_ref)
    }
}

/// [`Canvas`] implementation that draws in a Cairo context.
pub struct CairoCanvas<'a> {
    ctx: &'a Context,
    images: Option<&'a CatImages>,
}

impl<'a> CairoCanvas<'a> {
    pub fn new(ctx: &'a Context, images: Option<&'a CatImages>) -> Self {
        Self { ctx, images }
    }

    fn set_color(&self, color: Rgb) {
        self.ctx.set_source_rgb(color.red, color.green, color.blue);
    }

    /// Paint the image scaled to the cat size.
    fn paint_image(&self, image: &CatImage, cat: &Cat) -> Result<(), Error> {
        self.ctx.save()?;
        self.ctx.translate(cat.x, cat.y);
        self.ctx.scale(cat.width / image.width, cat.height / image.height);
        self.ctx.set_source_surface(&image.surface, 0.0, 0.0)?;
        self.ctx.paint()?;
        self.ctx.restore()
    }

    /// Paint a colored box with the kind number.
    fn paint_placeholder(&mut self, cat: &Cat) -> Result<(), Error> {
        self.ctx.save()?;
        self.set_color(PLACEHOLDER_COLORS[cat.kind_index()]);
        self.ctx.rectangle(cat.x, cat.y, cat.width, cat.height);
        self.ctx.fill()?;
        self.ctx.restore()?;

        let text: String = cat.kind.to_string();
        let font_size: f64 = cat.height / 2.0;
        let extents: TextExtents = self.measure_text(&text, font_size);
        self.draw_text(
            &text,
            cat.x + (cat.width - extents.width) / 2.0,
            cat.y + (cat.height + extents.height) / 2.0,
            font_size,
            Rgb::new(1.0, 1.0, 1.0),
        );
        Ok(())
    }

    fn report(operation: &str, result: Result<(), Error>) {
        if let Err(error) = result {
            debug!("Cairo error in {operation}: {error}");
        }
    }
}

impl Canvas for CairoCanvas<'_> {
    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        self.set_color(color);
        self.ctx.rectangle(rect.x, rect.y, rect.width, rect.height);
        Self::report("fill_rect", self.ctx.fill());
    }

    fn draw_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Rgb) {
        self.set_color(color);
        self.ctx.set_line_width(width);
        self.ctx.move_to(from.0, from.1);
        self.ctx.line_to(to.0, to.1);
        Self::report("draw_line", self.ctx.stroke());
    }

    fn measure_text(&mut self, text: &str, font_size: f64) -> TextExtents {
        self.ctx.set_font_size(font_size);
        match self.ctx.text_extents(text) {
            Ok(extents) => TextExtents {
                width: extents.width(),
                height: extents.height(),
            },
            Err(error) => {
                debug!("Cannot measure \"{text}\": {error}");
                TextExtents::default()
            }
        }
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, font_size: f64, color: Rgb) {
        self.set_color(color);
        self.ctx.set_font_size(font_size);
        self.ctx.move_to(x, y);
        Self::report("draw_text", self.ctx.show_text(text));
    }

    fn draw_cat(&mut self, cat: &Cat) {
        let image: Option<&CatImage> = self.images.and_then(|images| images.get(cat));
        let result: Result<(), Error> = match image {
            Some(image) => self.paint_image(image, cat),
            None => self.paint_placeholder(cat),
        };
        Self::report("draw_cat", result);
    }

    fn translate(&self, msgid: &str) -> String {
        gettext(msgid)
    }
}
