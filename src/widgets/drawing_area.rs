/*
drawing_area.rs

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

//! Manage drawings, timers, and pointer events in the drawing area.
//!
//! The game logic lives in [`GameArea`]. The drawing area forwards the pointer events and the
//! size changes to it, runs its timers with the GLib main loop, and renders it with Cairo.

use log::{Level, debug, log_enabled};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;
use std::time::Duration;

use adw::prelude::*;
use adw::subclass::prelude::*;
use glib::{Properties, clone};
use gtk::glib;

use classify_cats_core::{GameArea, Host, TimerHandle};

use crate::config::PKGDATADIR;
use crate::draw::{CairoCanvas, CatImages};

/// Position where the current drag operation started.
#[derive(Debug, Copy, Clone, Default)]
struct Drag {
    start_x: f64,
    start_y: f64,
}

mod imp {
    use super::*;
    use std::cell::{Cell, OnceCell};

    #[derive(Default, Properties)]
    #[properties(wrapper_type = super::ClassifyCatsDrawingArea)]
    pub struct ClassifyCatsDrawingArea {
        pub game: OnceCell<Rc<RefCell<GameArea>>>,
        pub images: OnceCell<CatImages>,
        pub drag: Cell<Drag>,

        /// Running GLib timers, by handle.
        pub timers: RefCell<HashMap<u64, glib::SourceId>>,
        pub next_timer: Cell<u64>,

        /// Whether a game session is in progress.
        #[property(get, set)]
        pub running: Cell<bool>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for ClassifyCatsDrawingArea {
        const NAME: &'static str = "ClassifyCatsDrawingArea";
        type Type = super::ClassifyCatsDrawingArea;
        type ParentType = gtk::DrawingArea;
    }

    #[glib::derived_properties]
    impl ObjectImpl for ClassifyCatsDrawingArea {
        fn constructed(&self) {
            self.parent_constructed();

            debug!("In constructed()");
            let obj = self.obj();
            obj.set_hexpand(true);
            obj.set_vexpand(true);

            let images: CatImages = CatImages::load(&Path::new(PKGDATADIR).join("images"));
            let _ = self.images.set(images);

            obj.set_draw_func(clone!(
                #[weak(rename_to = mself)]
                self,
                move |_da, ctx, w, h| mself.obj().draw(ctx, w, h)
            ));

            let motion: gtk::EventControllerMotion = gtk::EventControllerMotion::new();
            motion.connect_motion(clone!(
                #[weak(rename_to = mself)]
                self,
                move |_controller, x, y| mself.obj().motion_cb(x, y)
            ));
            obj.add_controller(motion);

            let drag: gtk::GestureDrag = gtk::GestureDrag::new();
            drag.set_button(gtk::gdk::BUTTON_PRIMARY);
            drag.connect_drag_begin(clone!(
                #[weak(rename_to = mself)]
                self,
                move |_gesture, x, y| mself.obj().drag_begin_cb(x, y)
            ));
            drag.connect_drag_update(clone!(
                #[weak(rename_to = mself)]
                self,
                move |_gesture, offset_x, offset_y| mself.obj().drag_update_cb(offset_x, offset_y)
            ));
            drag.connect_drag_end(clone!(
                #[weak(rename_to = mself)]
                self,
                move |_gesture, offset_x, offset_y| mself.obj().drag_end_cb(offset_x, offset_y)
            ));
            obj.add_controller(drag);
        }

        fn dispose(&self) {
            for (_, source) in self.timers.borrow_mut().drain() {
                source.remove();
            }
        }
    }

    impl WidgetImpl for ClassifyCatsDrawingArea {}

    impl DrawingAreaImpl for ClassifyCatsDrawingArea {
        fn resize(&self, width: i32, height: i32) {
            self.parent_resize(width, height);
            debug!("Drawing area resized to {width}x{height}");
            if let Some(game) = self.game.get() {
                game.borrow_mut().resize(width as f64, height as f64);
            }
        }
    }
}

glib::wrapper! {
    pub struct ClassifyCatsDrawingArea(ObjectSubclass<imp::ClassifyCatsDrawingArea>)
        @extends gtk::Widget, gtk::DrawingArea,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget;
}

/// [`Host`] implementation that runs the game timers with the GLib main loop.
struct AreaHost<'a> {
    area: &'a ClassifyCatsDrawingArea,
}

impl Host for AreaHost<'_> {
    fn schedule_recurring(&mut self, interval: Duration) -> TimerHandle {
        let imp: &imp::ClassifyCatsDrawingArea = self.area.imp();
        let id: u64 = imp.next_timer.get() + 1;
        imp.next_timer.set(id);

        let area: ClassifyCatsDrawingArea = self.area.clone();
        let source: glib::SourceId = glib::timeout_add_local(
            interval,
            clone!(
                #[weak]
                area,
                #[upgrade_or]
                glib::ControlFlow::Break,
                move || {
                    if !area.imp().timers.borrow().contains_key(&id) {
                        return glib::ControlFlow::Break;
                    }
                    area.tick(TimerHandle(id));
                    glib::ControlFlow::Continue
                }
            ),
        );
        imp.timers.borrow_mut().insert(id, source);
        debug!("Timer {id} scheduled every {interval:?}");
        TimerHandle(id)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        let source: Option<glib::SourceId> = self.area.imp().timers.borrow_mut().remove(&handle.0);
        if let Some(source) = source {
            debug!("Timer {} cancelled", handle.0);
            source.remove();
        }
    }

    fn request_redraw(&mut self) {
        self.area.queue_draw();
    }
}

impl ClassifyCatsDrawingArea {
    /// Create the drawing area for the given game.
    pub fn new(game: GameArea) -> Self {
        let obj: ClassifyCatsDrawingArea = glib::Object::new();

        obj.imp()
            .game
            .set(Rc::new(RefCell::new(game)))
            .expect("Cannot store the game data into the object");
        obj
    }

    fn game(&self) -> &Rc<RefCell<GameArea>> {
        self.imp()
            .game
            .get()
            .expect("Cannot retrieve the game data from the object")
    }

    /// Run an operation on the game, and then publish the running state.
    ///
    /// The game is released before the `running` property changes, so that the handlers of the
    /// property notification can call back into the drawing area.
    fn with_game<F>(&self, f: F)
    where
        F: FnOnce(&mut GameArea, &mut AreaHost),
    {
        let running: bool = {
            let mut game = self.game().borrow_mut();
            let mut host: AreaHost = AreaHost { area: self };
            f(&mut game, &mut host);
            game.is_running()
        };
        if running != self.running() {
            debug!("Game running: {running}");
            self.set_running(running);
        }
    }

    /// Start a new game session.
    pub fn start(&self) {
        debug!("Start the game");
        self.with_game(|game, host| game.start(host));
    }

    /// Stop the game session and go back to the welcome screen.
    pub fn stop(&self) {
        debug!("Stop the game");
        self.with_game(|game, host| game.stop(host));
    }

    fn tick(&self, handle: TimerHandle) {
        self.with_game(|game, host| game.tick(handle, host));
        if log_enabled!(Level::Debug) {
            let game = self.game().borrow();
            debug!(
                "Tick: phase = {}, remaining = {:?}, score = {}",
                game.phase(),
                game.remaining_seconds(),
                game.score()
            );
        }
    }

    fn draw(&self, ctx: &gtk::cairo::Context, w: i32, h: i32) {
        let imp: &imp::ClassifyCatsDrawingArea = self.imp();
        let game = self.game().borrow();

        // The first draw can happen before the first resize
        if w > 0 && h > 0 {
            let mut canvas: CairoCanvas = CairoCanvas::new(ctx, imp.images.get());
            game.render(&mut canvas);
        }
    }

    // Callback for the pointer motion event
    fn motion_cb(&self, x: f64, y: f64) {
        self.with_game(|game, host| game.pointer_motion(x, y, host));
    }

    // Callback for drag begin event
    fn drag_begin_cb(&self, x: f64, y: f64) {
        self.imp().drag.set(Drag {
            start_x: x,
            start_y: y,
        });
        self.with_game(|game, host| game.pointer_press(x, y, host));
    }

    // Callback for drag update event
    fn drag_update_cb(&self, offset_x: f64, offset_y: f64) {
        let drag: Drag = self.imp().drag.get();

        self.with_game(|game, host| {
            game.pointer_motion(drag.start_x + offset_x, drag.start_y + offset_y, host)
        });
    }

    // Callback for drag end event
    fn drag_end_cb(&self, offset_x: f64, offset_y: f64) {
        let drag: Drag = self.imp().drag.get();

        self.with_game(|game, host| {
            game.pointer_release(drag.start_x + offset_x, drag.start_y + offset_y, host)
        });
    }
}
