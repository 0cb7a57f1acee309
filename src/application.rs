/*
application.rs

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

use gettextrs::gettext;
use log::debug;

use adw::prelude::*;
use adw::subclass::prelude::*;
use glib::WeakRef;
use gtk::{gio, glib};

use classify_cats_core::{GameArea, SaverHighScore};

use crate::cli_options::Options;
use crate::config;
use crate::widgets::window::ClassifyCatsWindow;

mod imp {
    use super::*;
    use std::cell::{OnceCell, RefCell};

    #[derive(Default)]
    pub struct ClassifyCatsApplication {
        /// The [`ClassifyCatsWindow`] object.
        pub window: OnceCell<WeakRef<ClassifyCatsWindow>>,

        /// Command-line options. They are consumed when the window is created.
        pub options: RefCell<Option<Options>>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for ClassifyCatsApplication {
        const NAME: &'static str = "ClassifyCatsApplication";
        type Type = super::ClassifyCatsApplication;
        type ParentType = adw::Application;
    }

    impl ApplicationImpl for ClassifyCatsApplication {
        // Also called when a second instance is launched
        fn activate(&self) {
            debug!("In activate()");
            if let Some(window) = self.obj().main_window() {
                window.present();
            }
        }

        // The window is created once, with the game built from the command-line options
        fn startup(&self) {
            self.parent_startup();

            let application = self.obj();
            application.setup_gactions();
            application.set_accels_for_action("app.quit", &["<Primary>q"]);
            application.set_accels_for_action("win.toggle-game", &["space"]);

            let options: Options = self
                .options
                .take()
                .expect("Cannot retrieve the command-line options");
            debug!("Creating the game area with {} levels", options.levels.len());
            let game: GameArea = GameArea::new(
                options.levels,
                options.config,
                Box::new(SaverHighScore::new(options.data_dir)),
            );

            let window: ClassifyCatsWindow = ClassifyCatsWindow::new(&*application, game);
            self.window
                .set(window.downgrade())
                .expect("Failed to initialize the application window");
        }
    }

    impl ObjectImpl for ClassifyCatsApplication {}
    impl GtkApplicationImpl for ClassifyCatsApplication {}
    impl AdwApplicationImpl for ClassifyCatsApplication {}
}

glib::wrapper! {
    pub struct ClassifyCatsApplication(ObjectSubclass<imp::ClassifyCatsApplication>)
        @extends gio::Application, gtk::Application, adw::Application,
        @implements gio::ActionGroup, gio::ActionMap;
}

impl ClassifyCatsApplication {
    /// Create a [`ClassifyCatsApplication`] object.
    pub fn new(options: Options) -> Self {
        let app: Self = glib::Object::builder()
            .property("application-id", config::APPLICATION_ID)
            .build();
        app.imp().options.replace(Some(options));
        app
    }

    fn setup_gactions(&self) {
        let actions = [
            gio::ActionEntryBuilder::new("about")
                .activate(|app: &Self, _, _| app.show_about())
                .build(),
            gio::ActionEntryBuilder::new("quit")
                .activate(|app: &Self, _, _| app.quit())
                .build(),
        ];

        self.add_action_entries(actions);
    }

    fn main_window(&self) -> Option<ClassifyCatsWindow> {
        self.imp().window.get().and_then(|w| w.upgrade())
    }

    fn show_about(&self) {
        let window: Option<gtk::Window> = self.active_window();
        let about: adw::AboutDialog = adw::AboutDialog::builder()
            .application_name(gettext("Classify Cats"))
            .application_icon(config::APPLICATION_ID)
            .developer_name("Hervé Quatremain")
            .version(config::VERSION)
            .developers(vec!["Hervé Quatremain"])
            // Translators: Replace "translator-credits" with your name/username, and optionally
            // an email or URL.
            .translator_credits(gettext("translator-credits"))
            .copyright("© 2025 Hervé Quatremain")
            .license_type(gtk::License::Gpl30)
            .comments(gettext("Classify the cats by the parity of their count"))
            .build();
        about.present(window.as_ref());
    }
}
