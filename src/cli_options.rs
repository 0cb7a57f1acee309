/*
cli_options.rs

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

//! Process command-line options.
//!
//! Most options are intended for educators and developers who write their own level files.
//!
//! # Examples
//!
//! List the levels of a level file:
//!
//! ```
//! $ classify-cats --levels my_levels.json --ls
//!  1  rows             5 cats
//!  2  divided screen   3 cats
//!  3  choose           7 cats
//! ```
//!
//! Play sessions of five puzzles:
//!
//! ```
//! $ classify-cats --puzzles 5
//! ```

use clap::Parser;
use log::debug;
use std::env;
use std::path::PathBuf;

use classify_cats_core::{GameConfig, Levels};
use gtk::glib;

use crate::config::COPYRIGHT_NOTICE;

/// Classify cats by the parity of their count.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// List the levels and exit
    #[arg(short, long, default_value_t = false)]
    ls: bool,

    /// JSON file with the level definitions (the built-in levels by default)
    #[arg(short = 'L', long)]
    levels: Option<PathBuf>,

    /// Number of puzzles in a session
    #[arg(short, long, default_value_t = GameConfig::default().max_puzzles,
          value_parser = clap::value_parser!(u32).range(1..))]
    puzzles: u32,

    /// Seconds to solve a puzzle
    #[arg(short = 't', long, default_value_t = GameConfig::default().puzzle,
          value_parser = clap::value_parser!(u32).range(1..))]
    puzzle_time: u32,

    /// Directory where the high score is saved
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Settings for the application, collected from the command line.
pub struct Options {
    pub levels: Levels,
    pub config: GameConfig,
    pub data_dir: PathBuf,
}

/// Parse and process command-line options.
///
/// Return the [`Options`] object, or the exit code when the program must stop.
pub fn parse() -> Result<Options, u8> {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let levels: Levels = match &args.levels {
        Some(path) => match Levels::from_file(path) {
            Ok(l) => l,
            Err(error) => {
                eprintln!("Error: {}: {error}", path.display());
                return Err(1);
            }
        },
        None => Levels::builtin(),
    };

    //
    // List the levels
    //
    if args.ls {
        for (number, level) in levels.iter() {
            println!(
                "{number:>2}  {:<15}  {} cats",
                level.game_type.to_string(),
                level.count
            );
        }
        return Err(0);
    }

    let config: GameConfig = GameConfig {
        max_puzzles: args.puzzles,
        puzzle: args.puzzle_time,
        ..Default::default()
    };
    let data_dir: PathBuf = args
        .data_dir
        .unwrap_or_else(|| glib::user_data_dir().join("classify-cats"));
    debug!("Game configuration: {config:?}");

    Ok(Options {
        levels,
        config,
        data_dir,
    })
}
