/*
main.rs

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

mod application;
mod cli_options;
mod config;
mod draw;
mod widgets;

use self::application::ClassifyCatsApplication;

use config::{GETTEXT_PACKAGE, LOCALEDIR};
use gettextrs::{bind_textdomain_codeset, bindtextdomain, textdomain};
use gtk::glib;
use gtk::prelude::*;

fn main() -> glib::ExitCode {
    // Classify Cats does not use the option parsing feature provided by GApplication. Clap is
    // used instead.
    let options: cli_options::Options = match cli_options::parse() {
        Ok(o) => o,
        Err(ret) => return glib::ExitCode::from(ret),
    };

    // Set up gettext translations
    bindtextdomain(GETTEXT_PACKAGE, LOCALEDIR).expect("Unable to bind the text domain");
    bind_textdomain_codeset(GETTEXT_PACKAGE, "UTF-8")
        .expect("Unable to set the text domain encoding");
    textdomain(GETTEXT_PACKAGE).expect("Unable to switch to the text domain");

    let app: ClassifyCatsApplication = ClassifyCatsApplication::new(options);

    // Because the arguments are processed by Clap, pass an empty argument list to the GApplication
    let args: Vec<String> = Vec::new();
    app.run_with_args(&args)
}
