/*
game_area.rs

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

//! Game controller.
//!
//! The [`GameArea`] object owns the whole game state.
//! The host forwards the pointer events, the timer ticks, and the draw requests to it.

use log::{Level as LogLevel, debug, log_enabled, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::GameConfig;
use crate::evaluation::Verdict;
use crate::generator::{self, Puzzle};
use crate::geometry::Surface;
use crate::levels::{GameType, Level, Levels};
use crate::phase::{self, Effect, Phase, PhaseEvent, Transition};
use crate::render::{self, Canvas, Screen};
use crate::round::Round;
use crate::saver::HighScoreStore;
use crate::scoring;
use crate::sides::{Side, Sides};
use crate::timer::{Countdown, Host, TimerHandle};

pub struct GameArea {
    config: GameConfig,
    levels: Levels,
    store: Box<dyn HighScoreStore>,
    rng: StdRng,
    surface: Surface,

    phase: Phase,
    countdown: Countdown,

    /// Puzzle being played, or the last one played while the verdict is displayed.
    round: Option<Round>,

    /// Parities of the left and right halves. Shuffled before every divided screen puzzle.
    sides: Sides,

    /// Number of the current level, or of the next one during the lead-in.
    level: u32,

    /// Number of puzzles started in the session.
    puzzle_index: u32,

    score: i64,

    /// Verdict of the last puzzle.
    verdict: Option<Verdict>,

    /// Seconds that were left when the player answered the last puzzle.
    reaction_bonus: u32,

    /// Parity to find in the next choose puzzle.
    next_parity: Side,

    /// High score displayed on the game over screen.
    high_score: i64,
}

impl GameArea {
    /// Create a [`GameArea`] object.
    pub fn new(levels: Levels, config: GameConfig, store: Box<dyn HighScoreStore>) -> Self {
        Self::with_rng(levels, config, store, StdRng::from_rng(&mut rand::rng()))
    }

    /// Create a [`GameArea`] object that uses the provided random generator.
    pub fn with_rng(
        levels: Levels,
        config: GameConfig,
        store: Box<dyn HighScoreStore>,
        rng: StdRng,
    ) -> Self {
        Self {
            config,
            levels,
            store,
            rng,
            surface: Surface::default(),
            phase: Phase::Idle,
            countdown: Countdown::default(),
            round: None,
            sides: Sides::default(),
            level: 1,
            puzzle_index: 0,
            score: 0,
            verdict: None,
            reaction_bonus: 0,
            next_parity: Side::Odd,
            high_score: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Remaining seconds of the current phase, or `None` when no countdown runs.
    pub fn remaining_seconds(&self) -> Option<u32> {
        self.countdown.remaining()
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn puzzle_index(&self) -> u32 {
        self.puzzle_index
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    pub fn reaction_bonus(&self) -> u32 {
        self.reaction_bonus
    }

    pub fn high_score(&self) -> i64 {
        self.high_score
    }

    pub fn levels(&self) -> &Levels {
        &self.levels
    }

    /// Whether a session is in progress.
    pub fn is_running(&self) -> bool {
        !matches!(self.phase, Phase::Idle | Phase::GameOver)
    }

    /// Record the new size of the drawing surface.
    pub fn resize(&mut self, width: f64, height: f64) {
        debug!("Surface resized to {width}x{height}");
        self.surface = Surface::new(width, height);
    }

    /// Start a new session.
    pub fn start(&mut self, host: &mut dyn Host) {
        self.dispatch(PhaseEvent::Start, host);
    }

    /// Stop the session and go back to the welcome screen.
    pub fn stop(&mut self, host: &mut dyn Host) {
        self.dispatch(PhaseEvent::Stop, host);
    }

    /// Start counting down from `seconds`.
    ///
    /// When a countdown is already running, the method does nothing unless `force` is set.
    /// Return whether a new countdown started.
    pub fn start_timeout(&mut self, seconds: u32, force: bool, host: &mut dyn Host) -> bool {
        self.countdown.start(seconds, force, host)
    }

    /// Process a tick of the timer identified by `handle`.
    pub fn tick(&mut self, handle: TimerHandle, host: &mut dyn Host) {
        if self.countdown.tick(handle, host) {
            let cap_reached: bool =
                self.phase == Phase::Playing && self.puzzle_index >= self.config.max_puzzles;
            self.dispatch(PhaseEvent::Elapsed { cap_reached }, host);
        }
    }

    pub fn pointer_motion(&mut self, x: f64, y: f64, host: &mut dyn Host) {
        let surface: Surface = self.surface;
        if let Some(round) = self.active_round() {
            if round.pointer_motion(x, y, surface) {
                host.request_redraw();
            }
        }
    }

    pub fn pointer_press(&mut self, x: f64, y: f64, host: &mut dyn Host) {
        if let Some(round) = self.active_round() {
            if round.pointer_press(x, y) {
                host.request_redraw();
            }
        }
    }

    /// Process a button release. An answer in the rows and choose games ends the puzzle at
    /// the next tick.
    pub fn pointer_release(&mut self, _x: f64, _y: f64, host: &mut dyn Host) {
        let answered: bool = match self.active_round() {
            Some(round) => round.pointer_release(),
            None => return,
        };
        if answered {
            self.reaction_bonus = self.countdown.expire_now().unwrap_or(0);
            debug!("Reaction bonus: {}", self.reaction_bonus);
        }
        host.request_redraw();
    }

    /// Draw the current screen.
    pub fn render(&self, canvas: &mut dyn Canvas) {
        let seconds: u32 = self.countdown.remaining().unwrap_or(0);
        let next: GameType = self
            .levels
            .get(self.level)
            .map_or(GameType::DividedScreen, |l| l.game_type);

        let screen: Screen = match (self.phase, self.round.as_ref(), self.verdict) {
            (Phase::Countdown, _, _) => Screen::Countdown {
                seconds,
                next,
                parity: self.next_parity,
            },
            (Phase::Playing, Some(round), _) => Screen::Playing { round, seconds },
            (Phase::Result, _, Some(verdict)) => Screen::Result {
                verdict,
                seconds,
                next,
                parity: self.next_parity,
                score: self.score,
                bonus: self.reaction_bonus,
            },
            (Phase::GameOver, _, _) => Screen::GameOver {
                score: self.score,
                high_score: self.high_score,
            },
            _ => Screen::Welcome,
        };
        render::draw_screen(canvas, self.surface, &screen);
    }

    /// Round that accepts pointer input.
    fn active_round(&mut self) -> Option<&mut Round> {
        if self.phase == Phase::Playing {
            self.round.as_mut()
        } else {
            None
        }
    }

    fn dispatch(&mut self, event: PhaseEvent, host: &mut dyn Host) {
        let transition: Transition = phase::transition(self.phase, event);

        debug!("Phase {} -> {} on {event:?}", self.phase, transition.next);
        self.phase = transition.next;
        if let Some(effect) = transition.effect {
            self.apply(effect, host);
        }
        host.request_redraw();
    }

    fn apply(&mut self, effect: Effect, host: &mut dyn Host) {
        match effect {
            Effect::ResetSession => {
                self.score = 0;
                self.puzzle_index = 0;
                self.level = 1;
                self.verdict = None;
                self.reaction_bonus = 0;
                self.round = None;
                self.next_parity = Side::random(&mut self.rng);
                self.start_timeout(self.config.lead_in, true, host);
            }
            Effect::BeginPuzzle => self.begin_puzzle(host),
            Effect::EndRound => {
                self.end_round();
                self.next_parity = Side::random(&mut self.rng);
                self.start_timeout(self.config.result, true, host);
            }
            Effect::EndGame => {
                let win: bool = self.end_round();
                self.score = scoring::final_score(&self.config, self.score, win);
                self.high_score = scoring::update_high_score(self.store.as_mut(), self.score);
                self.round = None;
                debug!("Game over: score {}, high score {}", self.score, self.high_score);
            }
            Effect::BeginLeadIn => {
                self.round = None;
                self.start_timeout(self.config.round_lead_in, true, host);
            }
            Effect::Clear => {
                self.countdown.cancel(host);
                self.round = None;
            }
        }
    }

    fn begin_puzzle(&mut self, host: &mut dyn Host) {
        let level: Level = match self.levels.get(self.level) {
            Some(l) => *l,
            None => {
                self.level = 1;
                match self.levels.get(1) {
                    Some(l) => *l,
                    None => return,
                }
            }
        };

        if level.game_type == GameType::DividedScreen {
            self.sides.shuffle(&mut self.rng);
        }
        let puzzle: Puzzle =
            match generator::generate(&level, self.surface, self.next_parity, &mut self.rng) {
                Ok(p) => p,
                Err(error) => {
                    warn!("Cannot generate the puzzle for level {}: {error}", self.level);
                    self.dispatch(PhaseEvent::Stop, host);
                    return;
                }
            };

        self.puzzle_index += 1;
        self.reaction_bonus = 0;
        self.verdict = None;
        self.round = Some(Round::new(self.level, level, self.sides, puzzle));

        if log_enabled!(LogLevel::Debug) {
            debug!("Puzzle {}/{}:", self.puzzle_index, self.config.max_puzzles);
            debug!("      level = {}", self.level);
            debug!("       type = {}", level.game_type);
            debug!("       cats = {}", level.count);
            debug!("      sides = {:?}", self.sides);
        }
        self.start_timeout(self.config.puzzle, true, host);
    }

    /// Evaluate the puzzle, update the score, and move to the next level.
    ///
    /// Return whether the player solved the puzzle.
    fn end_round(&mut self) -> bool {
        let verdict: Verdict = match &self.round {
            Some(round) => round.evaluate(self.surface),
            None => return false,
        };
        let win: bool = verdict.is_win();

        self.verdict = Some(verdict);
        self.score += scoring::round_points(&self.config, verdict, self.reaction_bonus);
        self.level = self.levels.next_level(self.level, win);
        debug!(
            "Verdict: {verdict:?}, score: {}, next level: {}",
            self.score, self.level
        );
        win
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::RecordingCanvas;
    use crate::round::Choice;
    use crate::saver::MemoryHighScore;
    use crate::timer::tests::FakeHost;

    const WIDTH: f64 = 1000.0;
    const HEIGHT: f64 = 700.0;

    fn new_area(json: &str, config: GameConfig) -> GameArea {
        let levels = Levels::from_json(json).expect("valid levels");
        let mut area = GameArea::with_rng(
            levels,
            config,
            Box::new(MemoryHighScore::default()),
            StdRng::seed_from_u64(17),
        );
        area.resize(WIDTH, HEIGHT);
        area
    }

    fn rows_area() -> GameArea {
        new_area(
            r#"{"1": {"type": 1, "cats": 5}, "2": {"type": 1, "cats": 8}}"#,
            GameConfig::default(),
        )
    }

    fn ticks(area: &mut GameArea, host: &mut FakeHost, n: u32) {
        for _ in 0..n {
            let handle = host.current();
            area.tick(handle, host);
        }
    }

    /// Click on the half that collects the given parity.
    fn click_side(area: &mut GameArea, host: &mut FakeHost, side: Side) {
        let sides = area.round().expect("round").sides;
        let x = if sides.half_of(side) == 0 {
            WIDTH / 4.0
        } else {
            WIDTH * 0.75
        };
        area.pointer_motion(x, HEIGHT / 2.0, host);
        area.pointer_press(x, HEIGHT / 2.0, host);
        area.pointer_release(x, HEIGHT / 2.0, host);
    }

    #[test]
    fn test_rows_scenario() {
        let mut area = rows_area();
        let mut host = FakeHost::default();

        area.start(&mut host);
        assert_eq!(area.phase(), Phase::Countdown);
        assert_eq!(area.remaining_seconds(), Some(5));

        ticks(&mut area, &mut host, 5);
        assert_eq!(area.phase(), Phase::Playing);
        assert_eq!(area.round().expect("round").cats.len(), 5);
        assert_eq!(area.remaining_seconds(), Some(15));

        ticks(&mut area, &mut host, 2);
        click_side(&mut area, &mut host, Side::Odd);
        assert_eq!(
            area.round().expect("round").selected_choice,
            Some(Choice::Side(Side::Odd))
        );
        assert_eq!(area.reaction_bonus(), 13);
        assert_eq!(area.remaining_seconds(), Some(0));

        // The answer ends the puzzle at the next tick
        ticks(&mut area, &mut host, 1);
        assert_eq!(area.phase(), Phase::Result);
        assert_eq!(area.verdict(), Some(Verdict::SelectedRight));
        assert_eq!(area.score(), 20 + 13);
        assert_eq!(area.level(), 2);
        assert_eq!(area.remaining_seconds(), Some(3));

        // Result, then lead-in, then the next puzzle
        ticks(&mut area, &mut host, 3);
        assert_eq!(area.phase(), Phase::Countdown);
        assert!(area.round().is_none());
        ticks(&mut area, &mut host, 3);
        assert_eq!(area.phase(), Phase::Playing);
        assert_eq!(area.round().expect("round").cats.len(), 8);
        assert_eq!(area.puzzle_index(), 2);
    }

    #[test]
    fn test_loss_resets_level() {
        let mut area = rows_area();
        let mut host = FakeHost::default();

        area.start(&mut host);
        ticks(&mut area, &mut host, 5);
        click_side(&mut area, &mut host, Side::Odd);
        ticks(&mut area, &mut host, 1 + 3 + 3);
        assert_eq!(area.level(), 2);

        // 8 cats: odd is wrong
        click_side(&mut area, &mut host, Side::Odd);
        ticks(&mut area, &mut host, 1);
        assert_eq!(area.verdict(), Some(Verdict::SelectedWrong));
        assert_eq!(area.level(), 1);
        assert_eq!(area.score(), 20 + 15);
    }

    #[test]
    fn test_timeout_without_answer() {
        let mut area = rows_area();
        let mut host = FakeHost::default();

        area.start(&mut host);
        ticks(&mut area, &mut host, 5 + 15);
        assert_eq!(area.phase(), Phase::Result);
        assert_eq!(area.verdict(), Some(Verdict::NoSelection));
        assert_eq!(area.score(), 0);
        assert_eq!(area.level(), 1);
    }

    #[test]
    fn test_start_timeout_idempotent() {
        let mut area = rows_area();
        let mut host = FakeHost::default();

        area.start(&mut host);
        ticks(&mut area, &mut host, 2);
        let handle = host.current();

        assert!(!area.start_timeout(10, false, &mut host));
        assert_eq!(area.remaining_seconds(), Some(3));
        assert_eq!(host.current(), handle);
    }

    #[test]
    fn test_stop_from_any_phase() {
        // Number of ticks to reach Idle, Countdown, Playing, Result, and GameOver
        for n in [None, Some(0), Some(5), Some(20), Some(41)] {
            let config = GameConfig {
                max_puzzles: 2,
                ..Default::default()
            };
            let mut area = new_area(r#"{"1": {"type": 0, "cats": 3}}"#, config);
            let mut host = FakeHost::default();

            if let Some(n) = n {
                area.start(&mut host);
                ticks(&mut area, &mut host, n);
            }
            area.stop(&mut host);

            assert_eq!(area.phase(), Phase::Idle);
            assert!(area.round().is_none());
            assert_eq!(area.remaining_seconds(), None);
            assert!(host.active.is_empty());
        }
    }

    #[test]
    fn test_stale_tick_after_stop() {
        let mut area = rows_area();
        let mut host = FakeHost::default();

        area.start(&mut host);
        let handle = host.current();
        area.stop(&mut host);
        area.tick(handle, &mut host);
        assert_eq!(area.phase(), Phase::Idle);
    }

    #[test]
    fn test_game_over_penalty() {
        let config = GameConfig {
            max_puzzles: 2,
            ..Default::default()
        };
        let mut area = new_area(r#"{"1": {"type": 1, "cats": 5}}"#, config);
        let mut host = FakeHost::default();

        area.start(&mut host);
        // First puzzle won, second one lost by timeout
        ticks(&mut area, &mut host, 5);
        click_side(&mut area, &mut host, Side::Odd);
        ticks(&mut area, &mut host, 1 + 3 + 3);
        assert_eq!(area.score(), 35);
        ticks(&mut area, &mut host, 15);

        assert_eq!(area.phase(), Phase::GameOver);
        assert_eq!(area.score(), 35 - 20);
        assert_eq!(area.high_score(), 15);
        assert!(host.active.is_empty());
        assert!(!area.is_running());

        // Restart
        area.start(&mut host);
        assert_eq!(area.phase(), Phase::Countdown);
        assert_eq!(area.score(), 0);
        assert_eq!(area.puzzle_index(), 0);
    }

    #[test]
    fn test_divided_screen_drag() {
        let mut area = new_area(r#"{"1": {"type": 0, "cats": 2}}"#, GameConfig::default());
        let mut host = FakeHost::default();

        area.start(&mut host);
        ticks(&mut area, &mut host, 5);
        let cat = area.round().expect("round").cats[1].clone();
        let (x, y) = (cat.x + 1.0, cat.y + 1.0);

        area.pointer_motion(x, y, &mut host);
        area.pointer_press(x, y, &mut host);
        area.pointer_motion(100.0, 100.0, &mut host);
        area.pointer_release(100.0, 100.0, &mut host);

        let round = area.round().expect("round");
        let front = &round.cats[0];
        assert!(front.dragged);
        assert_eq!((front.x, front.y), (40.0, 40.0));
        assert_eq!(area.phase(), Phase::Playing);
    }

    #[test]
    fn test_input_outside_playing_is_ignored() {
        let mut area = rows_area();
        let mut host = FakeHost::default();

        area.pointer_motion(10.0, 10.0, &mut host);
        area.pointer_press(10.0, 10.0, &mut host);
        area.pointer_release(10.0, 10.0, &mut host);
        assert_eq!(area.phase(), Phase::Idle);
        assert_eq!(host.redraws, 0);

        area.start(&mut host);
        area.pointer_press(10.0, 10.0, &mut host);
        area.pointer_release(10.0, 10.0, &mut host);
        assert_eq!(area.remaining_seconds(), Some(5));
    }

    #[test]
    fn test_render_screens() {
        let mut area = rows_area();
        let mut host = FakeHost::default();

        let mut canvas = RecordingCanvas::default();
        area.render(&mut canvas);
        assert_eq!(canvas.texts()[0], "Click on the star to start the game.");

        area.start(&mut host);
        let mut canvas = RecordingCanvas::default();
        area.render(&mut canvas);
        assert_eq!(
            canvas.texts(),
            vec![
                "The game will start in 5 seconds",
                "Is the amount of cats on the screen even or odd?"
            ]
        );

        ticks(&mut area, &mut host, 5);
        let mut canvas = RecordingCanvas::default();
        area.render(&mut canvas);
        assert_eq!(canvas.cat_count(), 5);
    }
}
