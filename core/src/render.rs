/*
render.rs

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

//! Draw the screens of the game.
//!
//! The drawing primitives are provided by the host through the [`Canvas`] trait.
//! Messages are centered horizontally, and their vertical position is an offset from the
//! middle of the surface.

use formatx::formatx;
use std::fmt::{Debug, Display};

use crate::cat::Cat;
use crate::evaluation::Verdict;
use crate::geometry::{LINE_WIDTH, Rect, Surface};
use crate::levels::GameType;
use crate::round::{Choice, Round};
use crate::sides::Side;

/// Smallest font size used when shrinking a message that does not fit the surface width.
pub const MIN_FONT_SIZE: f64 = 5.0;

/// Font size decrement when shrinking a message.
const FONT_STEP: f64 = 5.0;

/// Margin around the highlighted option in the choose game.
const OPTION_MARGIN: f64 = 10.0;

/// RGB color, with components between 0.0 and 1.0.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rgb {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Rgb {
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }
}

pub const BACKGROUND: Rgb = Rgb::new(1.0, 1.0, 1.0);
pub const FOREGROUND: Rgb = Rgb::new(0.0, 0.0, 0.0);
pub const HIGHLIGHT: Rgb = Rgb::new(0.9, 0.9, 0.9);

/// Size of a text.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct TextExtents {
    pub width: f64,
    pub height: f64,
}

/// Drawing primitives provided by the host.
pub trait Canvas {
    fn fill_rect(&mut self, rect: Rect, color: Rgb);

    fn draw_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Rgb);

    fn measure_text(&mut self, text: &str, font_size: f64) -> TextExtents;

    /// Draw the text. `(x, y)` is the position of the left end of the baseline.
    fn draw_text(&mut self, text: &str, x: f64, y: f64, font_size: f64, color: Rgb);

    /// Draw the image of the cat kind, scaled to the cat size, at the cat position.
    fn draw_cat(&mut self, cat: &Cat);

    /// Return the translation of the message.
    fn translate(&self, msgid: &str) -> String;
}

/// What the surface displays.
#[derive(Debug)]
pub enum Screen<'a> {
    /// No session in progress.
    Welcome,

    /// Lead-in before a puzzle.
    Countdown {
        seconds: u32,
        next: GameType,
        parity: Side,
    },

    Playing {
        round: &'a Round,
        seconds: u32,
    },

    Result {
        verdict: Verdict,
        seconds: u32,
        next: GameType,
        parity: Side,
        score: i64,
        bonus: u32,
    },

    GameOver {
        score: i64,
        high_score: i64,
    },
}

/// Draw the screen.
pub fn draw_screen(canvas: &mut dyn Canvas, surface: Surface, screen: &Screen) {
    canvas.fill_rect(
        Rect::new(0.0, 0.0, surface.width, surface.height),
        BACKGROUND,
    );

    match *screen {
        Screen::Welcome => draw_welcome(canvas, surface),
        Screen::Countdown {
            seconds,
            next,
            parity,
        } => {
            let text: String =
                format_number(canvas, "The game will start in {seconds} seconds", "seconds", seconds);
            let y: f64 = show_message(canvas, surface, &text, 40.0, 0.0);
            draw_help(canvas, surface, next, parity, y + 30.0);
        }
        Screen::Playing { round, seconds } => draw_playing(canvas, surface, round, seconds),
        Screen::Result {
            verdict,
            seconds,
            next,
            parity,
            score,
            bonus,
        } => {
            let text: String = canvas.translate(verdict.msgid());
            let y: f64 = show_message(canvas, surface, &text, 40.0, -50.0);
            let text: String = format_number(
                canvas,
                "The game will restart in {seconds} seconds",
                "seconds",
                seconds,
            );
            let y: f64 = show_message(canvas, surface, &text, 30.0, y + 40.0);
            draw_help(canvas, surface, next, parity, y + 60.0);

            if verdict.is_win() {
                let text: String = format_number(canvas, "Your Score: {score}", "score", score);
                show_message(canvas, surface, &text, 40.0, -100.0);
                if bonus != 0 {
                    let text: String = format_number(canvas, "Bonus +{bonus}", "bonus", bonus);
                    show_message(canvas, surface, &text, 30.0, -140.0);
                }
            }
        }
        Screen::GameOver { score, high_score } => {
            let text: String = canvas.translate("Game Over");
            show_message(canvas, surface, &text, 124.0, -100.0);
            let text: String = format_number(canvas, "Your Score: {score}", "score", score);
            show_message(canvas, surface, &text, 60.0, 50.0);
            let text: String =
                format_number(canvas, "High Score: {score}", "score", high_score);
            show_message(canvas, surface, &text, 60.0, 150.0);
            let text: String = canvas.translate("Click on the star to start the game.");
            show_message(canvas, surface, &text, 30.0, 250.0);
        }
    }
}

/// Translate the message and replace the named placeholder.
///
/// A translation with a broken placeholder is displayed as is.
fn format_number<T: Display + Debug>(
    canvas: &dyn Canvas,
    msgid: &str,
    key: &str,
    value: T,
) -> String {
    let template: String = canvas.translate(msgid);
    let result = match key {
        "seconds" => formatx!(template.clone(), seconds = value),
        "score" => formatx!(template.clone(), score = value),
        "bonus" => formatx!(template.clone(), bonus = value),
        _ => return template,
    };
    result.unwrap_or(template)
}

/// Draw a message centered horizontally, `y` pixels below the middle of the surface.
///
/// The font shrinks until the message fits the surface width, down to [`MIN_FONT_SIZE`].
/// Return `y` plus the height of the message.
pub fn show_message(
    canvas: &mut dyn Canvas,
    surface: Surface,
    text: &str,
    font_size: f64,
    y: f64,
) -> f64 {
    let mut size: f64 = font_size;
    let mut extents: TextExtents = canvas.measure_text(text, size);

    while extents.width > surface.width && size > MIN_FONT_SIZE {
        size = (size - FONT_STEP).max(MIN_FONT_SIZE);
        extents = canvas.measure_text(text, size);
    }
    canvas.draw_text(
        text,
        surface.width / 2.0 - extents.width / 2.0,
        surface.height / 2.0 + y,
        size,
        FOREGROUND,
    );
    y + extents.height
}

fn draw_welcome(canvas: &mut dyn Canvas, surface: Surface) {
    let text: String = canvas.translate("Click on the star to start the game.");
    let y: f64 = show_message(canvas, surface, &text, 64.0, 0.0);
    let text: String = canvas.translate("(And click the star again to stop it)");
    show_message(canvas, surface, &text, 24.0, y);
}

/// Describe the task of the next puzzle.
fn draw_help(canvas: &mut dyn Canvas, surface: Surface, next: GameType, parity: Side, y: f64) {
    let msgid: &str = match (next, parity) {
        (GameType::DividedScreen, _) => "Classify each kind of cat as even or odd",
        (GameType::Rows, _) => "Is the amount of cats on the screen even or odd?",
        (GameType::Choose, Side::Odd) => "Choose the cat which has an odd count",
        (GameType::Choose, Side::Even) => "Choose the cat which has an even count",
    };
    let text: String = canvas.translate(msgid);
    show_message(canvas, surface, &text, 50.0, y);
}

fn draw_playing(canvas: &mut dyn Canvas, surface: Surface, round: &Round, seconds: u32) {
    match round.game_type() {
        GameType::DividedScreen => {
            canvas.draw_line(
                (surface.center_x(), 0.0),
                (surface.center_x(), surface.playfield_bottom()),
                LINE_WIDTH,
                FOREGROUND,
            );
            draw_side_labels(canvas, surface, round, 4.0);
        }
        GameType::Rows => {
            if let Some(Choice::Side(side)) = round.hover_choice {
                let x: f64 = if round.sides.half_of(side) == 0 {
                    0.0
                } else {
                    surface.band_right()
                };
                canvas.fill_rect(
                    Rect::new(x, 0.0, surface.band_left(), surface.height),
                    HIGHLIGHT,
                );
            }
            draw_side_labels(canvas, surface, round, 6.0);
        }
        GameType::Choose => {
            if let Some(Choice::Kind(kind)) = round.hover_choice {
                if let Some(option) = round.options.iter().find(|o| o.kind == kind) {
                    canvas.fill_rect(option.rect().inflate(OPTION_MARGIN), HIGHLIGHT);
                }
            }
            for option in &round.options {
                canvas.draw_cat(option);
            }
        }
    }

    let text: String = format_number(canvas, "You have {seconds} seconds left", "seconds", seconds);
    show_message(canvas, surface, &text, 20.0, surface.height / 2.0 - 5.0);

    // Back to front
    for cat in round.cats.iter().rev() {
        canvas.draw_cat(cat);
    }
}

/// Draw the "Even cats" and "Odd cats" labels, centered on `width / divisor` from each side.
fn draw_side_labels(canvas: &mut dyn Canvas, surface: Surface, round: &Round, divisor: f64) {
    let centers: [f64; 2] = [
        surface.width / divisor,
        surface.width - surface.width / divisor,
    ];

    for (half, center) in centers.into_iter().enumerate() {
        let text: String = canvas.translate(round.sides.at(half).label_msgid());
        let extents: TextExtents = canvas.measure_text(&text, 20.0);
        canvas.draw_text(
            &text,
            center - extents.width / 2.0,
            surface.height / 2.0 + extents.height / 2.0,
            20.0,
            FOREGROUND,
        );
    }
}
