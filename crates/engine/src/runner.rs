//! The cooperative game loop.
//!
//! One thread, three entry points: input, the movement tick and the food
//! spawner (plus the rotation timer). Each is handled to completion before
//! the next one starts, and the sink sees a snapshot after every change.

use std::time::{Duration, Instant};

use anyhow::Result;
use log::info;

use crate::core::GameSnapshot;
use crate::engine::Engine;
use crate::io::{InputEvent, InputSource, SnapshotSink};
use crate::scheduler::Scheduler;

/// Upper bound on a single input wait, so a stalled deadline can't hang the loop.
const MAX_POLL_MS: u64 = 250;

/// Run until the input source reports [`InputEvent::Quit`] or an I/O error occurs.
///
/// Scheduler time is wall-clock milliseconds since this call, offset by the
/// scheduler's clock at entry so an engine that already ran keeps its timeline.
pub fn run<S, I, R>(engine: &mut Engine<S>, input: &mut I, sink: &mut R) -> Result<()>
where
    S: Scheduler,
    I: InputSource,
    R: SnapshotSink,
{
    let origin = engine.scheduler().now_ms();
    let started = Instant::now();
    let now_ms = || origin + started.elapsed().as_millis() as u64;

    let mut snap = GameSnapshot::default();
    engine.snapshot_into(&mut snap);
    sink.present(&snap)?;

    loop {
        let now = now_ms();
        let wait = engine
            .next_deadline()
            .map(|d| d.saturating_sub(now))
            .unwrap_or(MAX_POLL_MS)
            .min(MAX_POLL_MS);

        match input.poll(Duration::from_millis(wait))? {
            Some(InputEvent::Quit) => {
                info!("quit requested");
                return Ok(());
            }
            Some(InputEvent::Action(action)) => {
                if engine.handle_action(action) {
                    engine.snapshot_into(&mut snap);
                    sink.present(&snap)?;
                }
            }
            Some(InputEvent::Redraw) => {
                sink.invalidate();
                sink.present(&snap)?;
            }
            None => {}
        }

        let now = now_ms();
        while let Some(changed) = engine.step(now) {
            if changed {
                engine.snapshot_into(&mut snap);
                sink.present(&snap)?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::core::GameState;
    use crate::scheduler::TimerQueue;
    use crate::types::{Direction, GameAction};

    struct Scripted(VecDeque<InputEvent>);

    impl InputSource for Scripted {
        fn poll(&mut self, _timeout: Duration) -> Result<Option<InputEvent>> {
            Ok(Some(self.0.pop_front().unwrap_or(InputEvent::Quit)))
        }
    }

    #[derive(Default)]
    struct Recorder {
        frames: Vec<GameSnapshot>,
        invalidations: usize,
    }

    impl SnapshotSink for Recorder {
        fn present(&mut self, snap: &GameSnapshot) -> Result<()> {
            self.frames.push(snap.clone());
            Ok(())
        }

        fn invalidate(&mut self) {
            self.invalidations += 1;
        }
    }

    #[test]
    fn presents_initial_frame_and_each_accepted_turn() {
        let mut engine = Engine::new(GameState::default(), TimerQueue::new());
        let mut input = Scripted(
            [
                InputEvent::Action(GameAction::Turn(Direction::Down)), // reversal, ignored
                InputEvent::Action(GameAction::Turn(Direction::Left)),
                InputEvent::Redraw,
            ]
            .into(),
        );
        let mut sink = Recorder::default();

        run(&mut engine, &mut input, &mut sink).unwrap();

        assert!(sink.frames.len() >= 3);
        assert_eq!(sink.frames[0].dir, Direction::Up);
        assert_eq!(sink.frames[1].dir, Direction::Left);
        assert!(sink.frames[1].is_rotating);
        assert_eq!(sink.invalidations, 1);
    }

    #[test]
    fn sink_errors_stop_the_loop() {
        struct Broken;
        impl SnapshotSink for Broken {
            fn present(&mut self, _snap: &GameSnapshot) -> Result<()> {
                anyhow::bail!("terminal gone")
            }
        }

        let mut engine = Engine::new(GameState::default(), TimerQueue::new());
        let mut input = Scripted(VecDeque::new());
        let err = run(&mut engine, &mut input, &mut Broken).unwrap_err();
        assert_eq!(err.to_string(), "terminal gone");
    }
}
