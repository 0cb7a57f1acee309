/*
saver.rs

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

//! Save and restore the high score.
//!
//! The high score file contains a single integer, serialized in JSON format by using
//! [`serde_json`].

use log::debug;
use std::error::Error;
use std::fs::{File, create_dir_all, remove_file};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

/// Storage of the high score.
pub trait HighScoreStore {
    /// Return the stored high score, or `None` when no high score was ever saved.
    fn read_high_score(&self) -> Result<Option<i64>, Box<dyn Error>>;

    /// Replace the stored high score.
    fn write_high_score(&mut self, score: i64) -> Result<(), Box<dyn Error>>;
}

/// Object to save and restore the high score in a file.
pub struct SaverHighScore {
    /// Absolute path to the save file.
    save_file: PathBuf,
}

impl SaverHighScore {
    /// Create a [`SaverHighScore`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the high score must be saved.
    pub fn new(mut data_dir: PathBuf) -> Self {
        data_dir.push("highscore");
        debug!("High score file: {data_dir:?}");
        Self {
            save_file: data_dir,
        }
    }

    /// Delete the high score file.
    pub fn delete_save(&self) {
        let _ = remove_file(&self.save_file);
    }
}

impl HighScoreStore for SaverHighScore {
    fn read_high_score(&self) -> Result<Option<i64>, Box<dyn Error>> {
        let file: File;
        match File::open(&self.save_file) {
            Ok(f) => file = f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        }
        let reader: BufReader<File> = BufReader::new(file);
        let score: i64 = serde_json::from_reader(reader)?;
        Ok(Some(score))
    }

    fn write_high_score(&mut self, score: i64) -> Result<(), Box<dyn Error>> {
        if let Some(dir) = self.save_file.parent() {
            create_dir_all(dir)?;
        }
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer(&mut writer, &score)?;
        writer.flush()?;
        Ok(())
    }
}

/// High score kept in memory.
#[derive(Debug, Default)]
pub struct MemoryHighScore {
    pub score: Option<i64>,

    /// Number of writes, for checking that equal or lower scores are not saved.
    pub writes: usize,
}

impl HighScoreStore for MemoryHighScore {
    fn read_high_score(&self) -> Result<Option<i64>, Box<dyn Error>> {
        Ok(self.score)
    }

    fn write_high_score(&mut self, score: i64) -> Result<(), Box<dyn Error>> {
        self.score = Some(score);
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_dir(name: &str) -> PathBuf {
        let mut dir = std::env::temp_dir();
        dir.push(format!("classify-cats-{name}-{}", std::process::id()));
        dir
    }

    #[test]
    fn test_missing_file() {
        let saver = SaverHighScore::new(temp_dir("missing"));

        assert_eq!(saver.read_high_score().expect("no error"), None);
    }

    #[test]
    fn test_save_and_read() {
        let dir = temp_dir("save");
        let mut saver = SaverHighScore::new(dir.clone());

        saver.write_high_score(125).expect("saved");
        assert_eq!(saver.read_high_score().expect("no error"), Some(125));
        assert_eq!(
            fs::read_to_string(dir.join("highscore")).expect("readable"),
            "125"
        );

        saver.delete_save();
        assert_eq!(saver.read_high_score().expect("no error"), None);
        let _ = fs::remove_dir(&dir);
    }

    #[test]
    fn test_malformed_file() {
        let dir = temp_dir("malformed");
        fs::create_dir_all(&dir).expect("directory created");
        fs::write(dir.join("highscore"), "not a number").expect("written");
        let saver = SaverHighScore::new(dir.clone());

        assert!(saver.read_high_score().is_err());
        saver.delete_save();
        let _ = fs::remove_dir(&dir);
    }

    #[test]
    fn test_plain_integer_with_newline() {
        let dir = temp_dir("newline");
        fs::create_dir_all(&dir).expect("directory created");
        fs::write(dir.join("highscore"), "42\n").expect("written");
        let saver = SaverHighScore::new(dir.clone());

        assert_eq!(saver.read_high_score().expect("no error"), Some(42));
        saver.delete_save();
        let _ = fs::remove_dir(&dir);
    }
}
