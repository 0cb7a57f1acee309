/*
timer.rs

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

//! Countdown driven by a one-second recurring timer provided by the host.
//!
//! At most one timer runs at a time.
//! The host calls back [`crate::GameArea::tick`] with the handle it returned from
//! [`Host::schedule_recurring`], and ticks with any other handle are ignored.

use log::debug;
use std::time::Duration;

/// Interval between two ticks.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Identifier of a timer, allocated by the host.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub u64);

/// Services the host provides to the game area.
pub trait Host {
    /// Start a recurring timer that calls [`crate::GameArea::tick`] at every interval, until
    /// it is cancelled.
    fn schedule_recurring(&mut self, interval: Duration) -> TimerHandle;

    /// Stop the timer.
    fn cancel(&mut self, handle: TimerHandle);

    /// Ask for the surface to be redrawn. The host can merge several requests.
    fn request_redraw(&mut self);
}

/// Remaining seconds of the current phase.
#[derive(Debug, Default)]
pub struct Countdown {
    handle: Option<TimerHandle>,
    remaining: Option<u32>,
}

impl Countdown {
    /// Start counting down from `seconds`.
    ///
    /// When a countdown is already running, the method does nothing unless `force` is set, in
    /// which case the running countdown is cancelled first.
    /// Return whether a new countdown started.
    pub fn start(&mut self, seconds: u32, force: bool, host: &mut dyn Host) -> bool {
        if let Some(handle) = self.handle {
            if !force {
                debug!("Countdown already running ({handle:?}): ignoring the new one");
                return false;
            }
            host.cancel(handle);
        }
        self.remaining = Some(seconds);
        let handle: TimerHandle = host.schedule_recurring(TICK_INTERVAL);
        debug!("Countdown of {seconds} seconds started ({handle:?})");
        self.handle = Some(handle);
        host.request_redraw();
        true
    }

    /// Process a tick from the host.
    ///
    /// Return `true` when the countdown reaches zero. The timer is then cancelled, and the
    /// method returns `true` only once per countdown.
    pub fn tick(&mut self, handle: TimerHandle, host: &mut dyn Host) -> bool {
        if self.handle != Some(handle) {
            debug!("Ignoring a tick from a stale timer ({handle:?})");
            return false;
        }
        let remaining: u32 = self.remaining.unwrap_or(0).saturating_sub(1);
        host.request_redraw();
        if remaining > 0 {
            self.remaining = Some(remaining);
            return false;
        }
        host.cancel(handle);
        self.handle = None;
        self.remaining = None;
        true
    }

    /// Stop the countdown.
    pub fn cancel(&mut self, host: &mut dyn Host) {
        if let Some(handle) = self.handle.take() {
            host.cancel(handle);
        }
        self.remaining = None;
    }

    /// Remaining seconds, or `None` when no countdown is running.
    pub fn remaining(&self) -> Option<u32> {
        self.remaining
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    /// Set the remaining time to zero so that the next tick ends the countdown.
    ///
    /// Return the seconds that were remaining.
    pub fn expire_now(&mut self) -> Option<u32> {
        if self.handle.is_none() {
            return None;
        }
        self.remaining.replace(0)
    }
}
