/*
window.rs

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

//! Classify Cats main window.
//!
//! The header bar holds the star button that starts and stops the game, and the main menu.
//! The rest of the window is the drawing area where the game is played.

use gettextrs::gettext;
use log::debug;

use adw::subclass::prelude::*;
use glib::clone;
use adw::prelude::*;
use gtk::{gio, glib};

use classify_cats_core::GameArea;

use super::drawing_area::ClassifyCatsDrawingArea;

mod imp {
    use super::*;
    use std::cell::OnceCell;

    #[derive(Debug, Default)]
    pub struct ClassifyCatsWindow {
        pub drawing_area: OnceCell<ClassifyCatsDrawingArea>,
        pub start_button: OnceCell<gtk::ToggleButton>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for ClassifyCatsWindow {
        const NAME: &'static str = "ClassifyCatsWindow";
        type Type = super::ClassifyCatsWindow;
        type ParentType = adw::ApplicationWindow;
    }

    impl ObjectImpl for ClassifyCatsWindow {}
    impl WidgetImpl for ClassifyCatsWindow {}
    impl WindowImpl for ClassifyCatsWindow {}
    impl ApplicationWindowImpl for ClassifyCatsWindow {}
    impl AdwApplicationWindowImpl for ClassifyCatsWindow {}
}

glib::wrapper! {
    pub struct ClassifyCatsWindow(ObjectSubclass<imp::ClassifyCatsWindow>)
        @extends gtk::Widget, gtk::Window, gtk::ApplicationWindow, adw::ApplicationWindow,
        @implements gio::ActionGroup, gio::ActionMap, gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::ShortcutManager, gtk::Root, gtk::Native;
}

impl ClassifyCatsWindow {
    /// Create the window.
    pub fn new<P: IsA<gtk::Application>>(application: &P, game: GameArea) -> Self {
        debug!("In new()");
        let obj: ClassifyCatsWindow = glib::Object::builder()
            .property("application", application)
            .property("title", gettext("Classify Cats"))
            .property("default-width", 1024)
            .property("default-height", 768)
            .build();
        let imp: &imp::ClassifyCatsWindow = obj.imp();

        let start_button: gtk::ToggleButton = gtk::ToggleButton::builder()
            .icon_name("starred-symbolic")
            .tooltip_text(gettext("Start"))
            .build();
        start_button.connect_toggled(clone!(
            #[weak(rename_to = mself)]
            obj,
            move |button| mself.start_button_toggled(button)
        ));

        let menu: gio::Menu = gio::Menu::new();
        menu.append(Some(&gettext("_About Classify Cats")), Some("app.about"));
        menu.append(Some(&gettext("_Quit")), Some("app.quit"));
        let menu_button: gtk::MenuButton = gtk::MenuButton::builder()
            .icon_name("open-menu-symbolic")
            .menu_model(&menu)
            .primary(true)
            .tooltip_text(gettext("Main Menu"))
            .build();

        let header_bar: adw::HeaderBar = adw::HeaderBar::new();
        header_bar.pack_start(&start_button);
        header_bar.pack_end(&menu_button);

        let drawing_area: ClassifyCatsDrawingArea = ClassifyCatsDrawingArea::new(game);
        drawing_area.connect_running_notify(clone!(
            #[weak(rename_to = mself)]
            obj,
            move |area| mself.running_changed(area.running())
        ));

        let toolbar_view: adw::ToolbarView = adw::ToolbarView::new();
        toolbar_view.add_top_bar(&header_bar);
        toolbar_view.set_content(Some(&drawing_area));
        obj.set_content(Some(&toolbar_view));

        obj.add_action_entries([gio::ActionEntryBuilder::new("toggle-game")
            .activate(|win: &Self, _, _| win.toggle_game())
            .build()]);

        imp.start_button
            .set(start_button)
            .expect("Cannot store the start button into the object");
        imp.drawing_area
            .set(drawing_area)
            .expect("Cannot store the drawing area into the object");
        debug!("End new()");
        obj
    }

    fn drawing_area(&self) -> &ClassifyCatsDrawingArea {
        self.imp()
            .drawing_area
            .get()
            .expect("Cannot retrieve the drawing area from the object")
    }

    fn start_button(&self) -> &gtk::ToggleButton {
        self.imp()
            .start_button
            .get()
            .expect("Cannot retrieve the start button from the object")
    }

    /// Start or stop the game from the star button.
    fn start_button_toggled(&self, button: &gtk::ToggleButton) {
        let active: bool = button.is_active();

        Self::set_tooltip(button, active);
        let drawing_area: &ClassifyCatsDrawingArea = self.drawing_area();
        if active == drawing_area.running() {
            return;
        }
        if active {
            drawing_area.start();
        } else {
            drawing_area.stop();
        }
    }

    /// Synchronize the star button when the game ends on its own.
    fn running_changed(&self, running: bool) {
        let button: &gtk::ToggleButton = self.start_button();

        if button.is_active() != running {
            button.set_active(running);
        }
        Self::set_tooltip(button, running);
    }

    fn toggle_game(&self) {
        let button: &gtk::ToggleButton = self.start_button();
        button.set_active(!button.is_active());
    }

    fn set_tooltip(button: &gtk::ToggleButton, running: bool) {
        if running {
            button.set_tooltip_text(Some(&gettext("Stop")));
        } else {
            button.set_tooltip_text(Some(&gettext("Start")));
        }
    }
}
