/*
config.rs

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

//! Build-time constants.
//!
//! Packagers override the installation directories by setting the `CLASSIFY_CATS_LOCALEDIR`
//! and `CLASSIFY_CATS_PKGDATADIR` environment variables when building.

/// Unwrap an `option_env!()` value in a constant context.
macro_rules! env_or {
    ($name:literal, $default:expr) => {
        match option_env!($name) {
            Some(value) => value,
            None => $default,
        }
    };
}

pub const APPLICATION_ID: &str = "io.github.herve4m.ClassifyCats";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GETTEXT_PACKAGE: &str = "classify-cats";
pub const LOCALEDIR: &str = env_or!("CLASSIFY_CATS_LOCALEDIR", "/usr/share/locale");
pub const PKGDATADIR: &str = env_or!(
    "CLASSIFY_CATS_PKGDATADIR",
    concat!(env!("CARGO_MANIFEST_DIR"), "/data")
);
pub const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "
Copyright (C) 2025 Hervé Quatremain
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law."
);
