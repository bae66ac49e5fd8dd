//! The engine: game state plus the timers that drive it.
//!
//! [`Engine`] owns a [`GameState`] and a [`Scheduler`]. It arms the movement
//! tick and the food spawner on construction, arms the rotation timer after
//! each accepted turn, and releases every timer handle it holds on
//! [`Engine::shutdown`] or drop.

use log::{debug, info, trace};

use crate::config::EngineConfig;
use crate::core::{GameSnapshot, GameState, TickOutcome};
use crate::scheduler::{Scheduler, TimerHandle, TimerKind};
use crate::types::{GameAction, FOOD_INTERVAL_MS, ROTATION_MS};

pub struct Engine<S: Scheduler> {
    state: GameState,
    scheduler: S,
    move_timer: Option<TimerHandle>,
    food_timer: Option<TimerHandle>,
    rotation_timer: Option<TimerHandle>,
}

impl<S: Scheduler> Engine<S> {
    /// Take ownership of `state` and start the movement and food timers.
    pub fn new(state: GameState, mut scheduler: S) -> Self {
        let move_timer = scheduler.schedule_once(TimerKind::Move, state.speed_ms());
        let food_timer = scheduler.schedule_every(TimerKind::Food, FOOD_INTERVAL_MS);

        info!(
            "engine started: {}x{} grid, seed {}, speed {}ms",
            state.cols(),
            state.rows(),
            state.seed(),
            state.speed_ms()
        );

        Self {
            state,
            scheduler,
            move_timer: Some(move_timer),
            food_timer: Some(food_timer),
            rotation_timer: None,
        }
    }

    /// Fresh game sized by `config`; an unset seed falls back to 1.
    pub fn with_config(config: &EngineConfig, scheduler: S) -> Self {
        let state = GameState::new(config.cols, config.rows, config.seed.unwrap_or(1));
        Self::new(state, scheduler)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.state.snapshot_into(out);
    }

    /// Deadline of the next timer, in scheduler milliseconds.
    pub fn next_deadline(&self) -> Option<u64> {
        self.scheduler.next_deadline()
    }

    /// True once [`Engine::shutdown`] ran.
    pub fn is_shut_down(&self) -> bool {
        self.move_timer.is_none() && self.food_timer.is_none() && self.rotation_timer.is_none()
    }

    /// Apply an input action.
    ///
    /// Returns whether the game state changed. Rejected input is silent.
    pub fn handle_action(&mut self, action: GameAction) -> bool {
        if !self.state.apply_action(action) {
            trace!("ignored {}", action.as_str());
            return false;
        }

        match action {
            GameAction::Turn(dir) => {
                debug!(
                    "turn {} -> {} (angle {})",
                    self.state.prev_dir().as_str(),
                    dir.as_str(),
                    self.state.dir_angle()
                );
                let handle = self.scheduler.schedule_once(TimerKind::Rotation, ROTATION_MS);
                if let Some(stale) = self.rotation_timer.replace(handle) {
                    self.scheduler.cancel(stale);
                }
            }
            GameAction::Restart => {
                // A rotation from the previous episode must not unlock the new one.
                if let Some(handle) = self.rotation_timer.take() {
                    self.scheduler.cancel(handle);
                }
                info!("restart: episode {}", self.state.episode_id());
            }
        }
        true
    }

    /// Fire the earliest timer due at or before `now_ms`.
    ///
    /// Returns `None` when nothing is due, otherwise whether the fired timer
    /// changed the game state.
    pub fn step(&mut self, now_ms: u64) -> Option<bool> {
        let kind = self.scheduler.next_due(now_ms)?;
        Some(self.fire(kind))
    }

    /// Fire every timer due at or before `now_ms`, in deadline order.
    pub fn advance_to(&mut self, now_ms: u64) -> bool {
        let mut changed = false;
        while let Some(c) = self.step(now_ms) {
            changed |= c;
        }
        changed
    }

    fn fire(&mut self, kind: TimerKind) -> bool {
        match kind {
            TimerKind::Move => {
                let outcome = self.state.tick();
                match outcome {
                    TickOutcome::Ate => debug!(
                        "burger {} eaten, speed now {}ms",
                        self.state.burgers(),
                        self.state.speed_ms()
                    ),
                    TickOutcome::Collided => info!(
                        "game over: {} burgers, length {}",
                        self.state.burgers(),
                        self.state.tail().len() + 1
                    ),
                    TickOutcome::Moved => {
                        let head = self.state.head();
                        trace!("head ({}, {})", head.x, head.y);
                    }
                    TickOutcome::Idle => {}
                }
                // Keep ticking through game over so a restart resumes at once.
                self.move_timer = Some(
                    self.scheduler
                        .schedule_once(TimerKind::Move, self.state.speed_ms()),
                );
                outcome != TickOutcome::Idle
            }
            TimerKind::Food => match self.state.spawn_food() {
                Some(pos) => {
                    debug!("food at ({}, {})", pos.x, pos.y);
                    true
                }
                None => false,
            },
            TimerKind::Rotation => {
                self.rotation_timer = None;
                self.state.finish_rotation()
            }
        }
    }

    /// Release every timer. Safe to call more than once.
    pub fn shutdown(&mut self) {
        let handles = [
            self.move_timer.take(),
            self.food_timer.take(),
            self.rotation_timer.take(),
        ];
        let mut released = 0;
        for handle in handles.into_iter().flatten() {
            self.scheduler.cancel(handle);
            released += 1;
        }
        if released > 0 {
            info!("engine stopped after {} episode(s)", self.state.episode_id() + 1);
        }
    }
}

impl<S: Scheduler> Drop for Engine<S> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::TimerQueue;
    use crate::types::{CellValue, Direction, Position};

    fn engine() -> Engine<TimerQueue> {
        Engine::new(GameState::new(15, 15, 12345), TimerQueue::new())
    }

    #[test]
    fn starts_move_and_food_timers() {
        let e = engine();
        assert_eq!(e.scheduler().active_count(), 2);
        assert_eq!(e.next_deadline(), Some(1000));
    }

    #[test]
    fn move_tick_fires_at_speed() {
        let mut e = engine();
        assert!(!e.advance_to(999));
        assert_eq!(e.state().head(), Position::new(7, 7));

        assert!(e.advance_to(1000));
        assert_eq!(e.state().head(), Position::new(7, 6));
        assert_eq!(e.next_deadline(), Some(2000));
    }

    #[test]
    fn food_attempt_every_three_seconds() {
        let mut e = engine();
        e.advance_to(2999);
        assert_eq!(e.state().grid().count(CellValue::Food), 0);

        // Ten attempts by 30s; each places at most one burger.
        e.advance_to(30_000);
        let placed = e.state().grid().count(CellValue::Food) as u32 + e.state().burgers();
        assert!(placed <= 10);
        assert!(!e.state().game_over());
    }

    #[test]
    fn accepted_turn_arms_rotation_timer() {
        let mut e = engine();
        assert!(e.handle_action(GameAction::Turn(Direction::Left)));
        assert!(e.state().is_rotating());
        assert_eq!(e.next_deadline(), Some(500));

        assert!(e.advance_to(500));
        assert!(!e.state().is_rotating());
        assert_eq!(e.state().dir_angle(), -90);
    }

    #[test]
    fn rejected_turn_arms_nothing() {
        let mut e = engine();
        assert!(!e.handle_action(GameAction::Turn(Direction::Down)));
        assert!(!e.handle_action(GameAction::Turn(Direction::Up)));
        assert_eq!(e.scheduler().active_count(), 2);
    }

    #[test]
    fn speed_change_applies_to_next_tick() {
        let mut state = GameState::new(15, 15, 1);
        state.place_food(Position::new(7, 6));
        let mut e = Engine::new(state, TimerQueue::new());

        e.advance_to(1000);
        assert_eq!(e.state().speed_ms(), 950);
        assert_eq!(e.next_deadline(), Some(1950));
    }

    /// 3x2 grid, head at (1,1). Eats three burgers along (1,0), (2,0), (2,1)
    /// and then turns left into its own tail end at t=3700, with the last
    /// turn's rotation still pending until t=3800.
    fn crash_with_pending_rotation() -> Engine<TimerQueue> {
        let mut state = GameState::new(3, 2, 1);
        for (x, y) in [(1, 0), (2, 0), (2, 1)] {
            assert!(state.place_food(Position::new(x, y)));
        }
        let mut e = Engine::new(state, TimerQueue::new());

        e.advance_to(1000);
        assert_eq!(e.state().head(), Position::new(1, 0));
        assert!(e.handle_action(GameAction::Turn(Direction::Right)));

        e.advance_to(1950);
        assert_eq!(e.state().head(), Position::new(2, 0));
        assert!(e.handle_action(GameAction::Turn(Direction::Down)));

        e.advance_to(2850);
        assert_eq!(e.state().head(), Position::new(2, 1));
        assert_eq!(e.state().speed_ms(), 850);

        e.advance_to(3300);
        assert!(e.handle_action(GameAction::Turn(Direction::Left)));

        assert!(e.advance_to(3700));
        e
    }

    #[test]
    fn crash_ends_the_game() {
        let mut e = crash_with_pending_rotation();
        assert!(e.state().game_over());
        assert_eq!(e.state().burgers(), 3);
        assert_eq!(e.state().head(), Position::new(2, 1));

        // Input other than restart is ignored; ticks are no-ops.
        assert!(!e.handle_action(GameAction::Turn(Direction::Up)));
        e.advance_to(10_000);
        assert_eq!(e.state().head(), Position::new(2, 1));
    }

    #[test]
    fn restart_cancels_pending_rotation() {
        let mut e = crash_with_pending_rotation();
        assert_eq!(e.scheduler().active_count(), 3);

        assert!(e.handle_action(GameAction::Restart));
        assert_eq!(e.scheduler().active_count(), 2);
        assert!(!e.state().game_over());
        assert!(!e.state().is_rotating());
        assert_eq!(e.state().burgers(), 0);
        assert_eq!(e.state().speed_ms(), 1000);
        assert_eq!(e.state().episode_id(), 1);

        assert!(!e.advance_to(3800));
        assert_eq!(e.state().dir(), Direction::Up);
    }

    #[test]
    fn restart_ignored_while_playing() {
        let mut e = engine();
        assert!(!e.handle_action(GameAction::Restart));
        assert_eq!(e.state().episode_id(), 0);
    }

    #[test]
    fn shutdown_releases_all_timers_once() {
        let mut e = engine();
        e.handle_action(GameAction::Turn(Direction::Right));
        assert_eq!(e.scheduler().active_count(), 3);

        e.shutdown();
        assert!(e.is_shut_down());
        assert_eq!(e.scheduler().active_count(), 0);

        e.shutdown();
        assert_eq!(e.scheduler().active_count(), 0);
        assert_eq!(e.step(1_000_000), None);
    }
}
