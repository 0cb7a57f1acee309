/*
phase.rs

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

//! Phases of a game session.
//!
//! ```text
//!            start                 0 s                  0 s
//!   Idle ----------> Countdown ----------> Playing ----------> Result
//!                       ^                    |                   |
//!                       |                    | 0 s, last puzzle  |
//!                       |                    v                   |
//!                       |                 GameOver               |
//!                       +----------------------------------------+
//!                                            0 s
//! ```
//!
//! `stop` brings every phase back to `Idle`, and `start` restarts the session from any phase.

use strum_macros::Display;

/// Phase of the session.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Display)]
pub enum Phase {
    /// No game in progress: the welcome screen is displayed.
    #[default]
    Idle,

    /// Lead-in before a puzzle.
    Countdown,

    /// The player solves the puzzle.
    Playing,

    /// The verdict of the last puzzle is displayed.
    Result,

    /// The session reached the maximum number of puzzles.
    GameOver,
}

/// Event that drives the phase changes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PhaseEvent {
    /// The player starts a new session.
    Start,

    /// The player stops the session.
    Stop,

    /// The countdown of the current phase reached zero.
    Elapsed {
        /// The puzzle that just ended is the last one of the session.
        cap_reached: bool,
    },
}

/// Action to run when entering the next phase.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Reset the score, the puzzle count, and the level, then start the first lead-in.
    ResetSession,

    /// Generate the puzzle for the current level and start the puzzle countdown.
    BeginPuzzle,

    /// Evaluate the puzzle, update the score, and start the result countdown.
    EndRound,

    /// Evaluate the last puzzle, apply the final score, and save the high score.
    EndGame,

    /// Discard the puzzle and start the lead-in for the next one.
    BeginLeadIn,

    /// Cancel the countdown and discard the puzzle.
    Clear,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Transition {
    pub next: Phase,
    pub effect: Option<Effect>,
}

impl Transition {
    fn to(next: Phase, effect: Effect) -> Self {
        Self {
            next,
            effect: Some(effect),
        }
    }

    fn stay(phase: Phase) -> Self {
        Self {
            next: phase,
            effect: None,
        }
    }
}

/// Return the transition for the event in the given phase.
pub fn transition(phase: Phase, event: PhaseEvent) -> Transition {
    match (phase, event) {
        (_, PhaseEvent::Start) => Transition::to(Phase::Countdown, Effect::ResetSession),
        (_, PhaseEvent::Stop) => Transition::to(Phase::Idle, Effect::Clear),
        (Phase::Countdown, PhaseEvent::Elapsed { .. }) => {
            Transition::to(Phase::Playing, Effect::BeginPuzzle)
        }
        (Phase::Playing, PhaseEvent::Elapsed { cap_reached: false }) => {
            Transition::to(Phase::Result, Effect::EndRound)
        }
        (Phase::Playing, PhaseEvent::Elapsed { cap_reached: true }) => {
            Transition::to(Phase::GameOver, Effect::EndGame)
        }
        (Phase::Result, PhaseEvent::Elapsed { .. }) => {
            Transition::to(Phase::Countdown, Effect::BeginLeadIn)
        }
        // No countdown runs in these phases
        (Phase::Idle | Phase::GameOver, PhaseEvent::Elapsed { .. }) => Transition::stay(phase),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Phase; 5] = [
        Phase::Idle,
        Phase::Countdown,
        Phase::Playing,
        Phase::Result,
        Phase::GameOver,
    ];

    #[test]
    fn test_stop_from_any_phase() {
        for phase in ALL {
            assert_eq!(
                transition(phase, PhaseEvent::Stop),
                Transition::to(Phase::Idle, Effect::Clear)
            );
        }
    }

    #[test]
    fn test_start_from_any_phase() {
        for phase in ALL {
            assert_eq!(
                transition(phase, PhaseEvent::Start).next,
                Phase::Countdown
            );
        }
    }

    #[test]
    fn test_session_cycle() {
        let elapsed = PhaseEvent::Elapsed { cap_reached: false };

        assert_eq!(transition(Phase::Countdown, elapsed).next, Phase::Playing);
        assert_eq!(transition(Phase::Playing, elapsed).next, Phase::Result);
        assert_eq!(transition(Phase::Result, elapsed).next, Phase::Countdown);
        assert_eq!(
            transition(Phase::Playing, PhaseEvent::Elapsed { cap_reached: true }),
            Transition::to(Phase::GameOver, Effect::EndGame)
        );
        assert_eq!(transition(Phase::GameOver, elapsed).effect, None);
        assert_eq!(transition(Phase::Idle, elapsed).effect, None);
    }
}
