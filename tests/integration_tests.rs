//! Integration tests for the game loop, through the facade crate.

use std::collections::VecDeque;
use std::time::Duration;

use tui_snake::core::{GameSnapshot, GameState, TickOutcome};
use tui_snake::engine::{
    run, Engine, EngineConfig, InputEvent, InputSource, Scheduler, SnapshotSink, TimerQueue,
};
use tui_snake::types::{CellValue, Direction, GameAction, Position};

#[test]
fn test_first_tick_moves_up() {
    let mut state = GameState::new(15, 15, 12345);
    assert_eq!(state.head(), Position::new(7, 7));
    assert_eq!(state.dir(), Direction::Up);

    assert_eq!(state.tick(), TickOutcome::Moved);
    assert_eq!(state.head(), Position::new(7, 6));
    assert_eq!(state.grid().get(Position::new(7, 7)), CellValue::Empty);
    assert!(state.tail().is_empty());
}

#[test]
fn test_eating_keeps_old_head_as_first_segment() {
    let mut state = GameState::new(15, 15, 12345);
    assert!(state.place_food(Position::new(7, 6)));

    assert_eq!(state.tick(), TickOutcome::Ate);
    assert_eq!(state.head(), Position::new(7, 6));
    assert_eq!(state.tail().iter().copied().collect::<Vec<_>>(), vec![Position::new(7, 7)]);
    assert_eq!(state.speed_ms(), 950);
    assert_eq!(state.burgers(), 1);
}

#[test]
fn test_reverse_turn_is_ignored() {
    let mut state = GameState::new(15, 15, 12345);
    assert!(!state.apply_action(GameAction::Turn(Direction::Down)));
    assert_eq!(state.dir(), Direction::Up);
    assert!(!state.is_rotating());
}

#[test]
fn test_wraps_off_top_edge() {
    let mut state = GameState::new(15, 15, 12345);
    for _ in 0..8 {
        state.tick();
    }
    assert_eq!(state.head(), Position::new(7, 14));
}

/// Head at (1,1) on a 3x2 grid. After three burgers the body fills the rest
/// of the row it is about to turn into.
fn crashed_game() -> GameState {
    let mut state = GameState::new(3, 2, 7);
    for (x, y) in [(1, 0), (2, 0), (2, 1)] {
        assert!(state.place_food(Position::new(x, y)));
    }
    assert_eq!(state.tick(), TickOutcome::Ate);
    assert!(state.request_turn(Direction::Right));
    state.finish_rotation();
    assert_eq!(state.tick(), TickOutcome::Ate);
    assert!(state.request_turn(Direction::Down));
    state.finish_rotation();
    assert_eq!(state.tick(), TickOutcome::Ate);
    assert!(state.request_turn(Direction::Left));
    state.finish_rotation();
    assert_eq!(state.tick(), TickOutcome::Collided);
    state
}

#[test]
fn test_restart_after_game_over() {
    let mut state = crashed_game();
    assert!(state.game_over());
    assert_eq!(state.burgers(), 3);

    assert!(state.apply_action(GameAction::Restart));
    assert_eq!(state.burgers(), 0);
    assert_eq!(state.speed_ms(), 1000);
    assert!(!state.game_over());
    assert_eq!(state.head(), Position::new(1, 1));
    assert!(state.tail().is_empty());
    assert!(state.is_consistent());
}

#[test]
fn test_game_over_freezes_state() {
    let mut state = crashed_game();
    let frozen = state.snapshot();

    assert_eq!(state.tick(), TickOutcome::Idle);
    assert!(!state.apply_action(GameAction::Turn(Direction::Up)));
    assert_eq!(state.spawn_food(), None);
    assert_eq!(state.snapshot(), frozen);
}

#[test]
fn test_engine_timeline() {
    let config = EngineConfig {
        seed: Some(99),
        ..EngineConfig::default()
    };
    let mut engine = Engine::with_config(&config, TimerQueue::new());

    engine.handle_action(GameAction::Turn(Direction::Left));
    // A second turn inside the 500ms rotation window is dropped.
    assert!(!engine.handle_action(GameAction::Turn(Direction::Up)));

    engine.advance_to(500);
    assert!(engine.handle_action(GameAction::Turn(Direction::Down)));

    engine.advance_to(1000);
    assert_eq!(engine.state().head(), Position::new(7, 8));
    assert_eq!(engine.state().prev_dir(), Direction::Left);

    engine.advance_to(5000);
    assert_eq!(engine.scheduler().now_ms(), 5000);
}

struct Script(VecDeque<InputEvent>);

impl InputSource for Script {
    fn poll(&mut self, _timeout: Duration) -> anyhow::Result<Option<InputEvent>> {
        Ok(Some(self.0.pop_front().unwrap_or(InputEvent::Quit)))
    }
}

#[derive(Default)]
struct Frames(Vec<GameSnapshot>);

impl SnapshotSink for Frames {
    fn present(&mut self, snap: &GameSnapshot) -> anyhow::Result<()> {
        self.0.push(snap.clone());
        Ok(())
    }
}

#[test]
fn test_run_loop_quits_on_request() {
    let mut engine = Engine::new(GameState::new(15, 15, 3), TimerQueue::new());
    let mut input = Script(
        [
            InputEvent::Action(GameAction::Turn(Direction::Right)),
            InputEvent::Action(GameAction::Restart),
            InputEvent::Quit,
            InputEvent::Action(GameAction::Turn(Direction::Up)),
        ]
        .into(),
    );
    let mut frames = Frames::default();

    run(&mut engine, &mut input, &mut frames).unwrap();

    // The event after Quit is never read.
    assert_eq!(input.0.len(), 1);
    assert_eq!(frames.0.first().map(|s| s.dir), Some(Direction::Up));
    assert!(frames.0.iter().any(|s| s.dir == Direction::Right));
    assert!(frames.0.iter().all(|s| s.episode_id == 0));

    engine.shutdown();
    assert_eq!(engine.scheduler().active_count(), 0);
}
