use std::cell::RefCell;
use std::rc::Rc;

use slot_core::{Clock, FrameEnv, GameConfig, GameEngine, GameState, ReelPhase};

fn single_reel_config() -> GameConfig {
    let mut config = GameConfig::default();
    config.reels.count = 1;
    config.reels.min_spin_duration_ms = 1000;
    config.reels.max_spin_duration_ms = 1000;
    config.reels.spin_speed = 1000.0;
    config
}

fn record_snapshots(engine: &mut GameEngine) -> Rc<RefCell<Vec<GameState>>> {
    let snapshots = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&snapshots);
    engine.subscribe(move |state: &GameState| sink.borrow_mut().push(state.clone()));
    snapshots
}

/// Frame deltas that are exact binary fractions, so frame time sums without error.
const DT_64HZ: f64 = 1.0 / 64.0;
const DT_128HZ: f64 = 1.0 / 128.0;
const DT_32HZ: f64 = 1.0 / 32.0;

/// Runs frames of `dt` seconds until every reel is idle, returning the frame count.
///
/// Fails if any reel is still moving once `ceil(max_duration / dt)` frames
/// have elapsed since the spin started.
fn run_until_idle(engine: &mut GameEngine, dt: f64) -> usize {
    let max_frames = (f64::from(engine.config().reels.max_spin_duration_ms) / (dt * 1000.0))
        .ceil() as usize;
    let mut frames = 0;
    while engine.state().is_spinning {
        assert!(frames < max_frames, "reels did not stop within their duration");
        engine.advance(dt);
        frames += 1;
    }
    frames
}

#[test]
fn single_reel_walks_through_every_phase() {
    let mut engine =
        GameEngine::new(single_reel_config(), FrameEnv::seeded(2024)).expect("valid config");

    // Spin request: reel moves, button disabled.
    assert!(engine.request_spin());
    let reel = &engine.state().reels[0];
    assert_eq!(reel.phase, ReelPhase::Spinning);
    assert_eq!(reel.spin_duration, 1000.0);
    let target = reel.target_offset;
    assert!(!engine.state().spin_button_enabled);

    // 50% progress: still spinning, offset accrued at constant speed.
    engine.advance(0.5);
    let reel = &engine.state().reels[0];
    assert_eq!(reel.phase, ReelPhase::Spinning);
    assert_eq!(reel.current_offset, 500.0);

    // 90% progress: labelled stopping, but speed is unchanged.
    engine.advance(0.4);
    let reel = &engine.state().reels[0];
    assert_eq!(reel.phase, ReelPhase::Stopping);
    assert_eq!(reel.current_offset, 900.0);
    assert!(engine.state().is_spinning);

    // Past 100%: snaps to the pre-drawn target.
    engine.advance(0.2);
    let state = engine.state();
    assert_eq!(state.reels[0].phase, ReelPhase::Idle);
    assert_eq!(state.reels[0].current_offset, target);
    assert!(!state.is_spinning);
    assert!(state.spin_button_enabled);
}

#[test]
fn reel_settles_on_the_frame_its_duration_elapses() {
    let mut engine =
        GameEngine::new(single_reel_config(), FrameEnv::seeded(8)).expect("valid config");
    engine.request_spin();

    for _ in 0..63 {
        engine.advance(DT_64HZ);
    }
    assert_eq!(engine.clock().now_ms(), 984.375);
    assert!(engine.state().is_spinning);

    engine.advance(DT_64HZ);
    assert_eq!(engine.clock().now_ms(), 1000.0);
    assert_eq!(engine.state().reels[0].phase, ReelPhase::Idle);
}

#[test]
fn sixty_hz_frames_settle_one_frame_late() {
    let mut engine =
        GameEngine::new(single_reel_config(), FrameEnv::seeded(8)).expect("valid config");
    engine.request_spin();

    for _ in 0..60 {
        engine.advance(1.0 / 60.0);
    }
    assert!(engine.clock().now_ms() < 1000.0);
    assert_eq!(engine.state().reels[0].phase, ReelPhase::Stopping);

    engine.advance(1.0 / 60.0);
    assert_eq!(engine.state().reels[0].phase, ReelPhase::Idle);
    assert!(!engine.state().is_spinning);
}

#[test]
fn initial_state_is_idle_with_overscan() {
    let config = GameConfig::default();
    let engine = GameEngine::new(config.clone(), FrameEnv::seeded(1)).expect("valid config");

    let state = engine.state();
    assert_eq!(state.reels.len(), config.reels.count);
    for reel in &state.reels {
        assert_eq!(reel.phase, ReelPhase::Idle);
        assert_eq!(reel.current_offset, 0.0);
        assert_eq!(reel.target_offset, 0.0);
        assert_eq!(reel.symbols.len(), config.reels.visible_symbols + 2);
    }
}

#[test]
fn spin_request_puts_every_reel_in_motion() {
    let config = GameConfig::default();
    let mut engine = GameEngine::new(config.clone(), FrameEnv::seeded(7)).expect("valid config");
    engine.advance(2.0);

    assert!(engine.request_spin());
    let state = engine.state();
    assert!(state.is_spinning);
    assert!(!state.spin_button_enabled);

    let min = f64::from(config.reels.min_spin_duration_ms);
    let max = f64::from(config.reels.max_spin_duration_ms);
    for reel in &state.reels {
        assert_eq!(reel.phase, ReelPhase::Spinning);
        assert!(reel.spin_duration >= min && reel.spin_duration <= max);
        assert_eq!(reel.start_time, 2000.0);
    }
}

#[test]
fn repeated_spin_request_is_ignored() {
    let mut engine =
        GameEngine::new(GameConfig::default(), FrameEnv::seeded(99)).expect("valid config");

    assert!(engine.request_spin());
    engine.advance(0.1);
    let before = engine.snapshot();

    assert!(!engine.request_spin());
    engine.advance(0.0);

    for (after, before) in engine.state().reels.iter().zip(&before.reels) {
        assert_eq!(after.start_time, before.start_time);
        assert_eq!(after.spin_duration, before.spin_duration);
        assert_eq!(after.target_offset, before.target_offset);
    }
}

#[test]
fn reels_settle_exactly_on_target() {
    for seed in 0..10 {
        let mut engine =
            GameEngine::new(GameConfig::default(), FrameEnv::seeded(seed)).expect("valid config");
        engine.request_spin();
        let targets: Vec<f64> = engine
            .state()
            .reels
            .iter()
            .map(|reel| reel.target_offset)
            .collect();

        run_until_idle(&mut engine, DT_64HZ);

        for (reel, target) in engine.state().reels.iter().zip(targets) {
            assert_eq!(reel.phase, ReelPhase::Idle);
            assert_eq!(reel.current_offset, target);
        }
    }
}

#[test]
fn every_snapshot_keeps_button_and_spin_flags_in_sync() {
    let mut engine =
        GameEngine::new(GameConfig::default(), FrameEnv::seeded(31)).expect("valid config");
    let snapshots = record_snapshots(&mut engine);

    for _ in 0..3 {
        engine.request_spin();
        run_until_idle(&mut engine, DT_32HZ);
    }

    let snapshots = snapshots.borrow();
    assert!(!snapshots.is_empty());
    for state in snapshots.iter() {
        assert_eq!(state.spin_button_enabled, !state.is_spinning);
        let any_moving = state.reels.iter().any(|reel| reel.phase != ReelPhase::Idle);
        assert_eq!(state.is_spinning, any_moving);
    }
    assert!(!snapshots.last().expect("at least one snapshot").is_spinning);
}

#[test]
fn reels_stop_independently() {
    let mut engine =
        GameEngine::new(GameConfig::default(), FrameEnv::seeded(5)).expect("valid config");
    let snapshots = record_snapshots(&mut engine);

    engine.request_spin();
    run_until_idle(&mut engine, DT_128HZ);

    let partially_stopped = snapshots.borrow().iter().any(|state| {
        let idle = state.reels.iter().filter(|reel| reel.phase.is_idle()).count();
        idle > 0 && idle < state.reels.len()
    });
    assert!(partially_stopped, "some frame should show a mix of idle and moving reels");
}

#[test]
fn spin_draws_are_not_degenerate() {
    let mut all_same_duration = 0;
    let mut all_same_target = 0;
    let runs = 20;

    for seed in 0..runs {
        let mut engine =
            GameEngine::new(GameConfig::default(), FrameEnv::seeded(seed)).expect("valid config");
        engine.request_spin();
        let reels = &engine.state().reels;

        if reels.iter().all(|reel| reel.spin_duration == reels[0].spin_duration) {
            all_same_duration += 1;
        }
        if reels.iter().all(|reel| reel.target_offset == reels[0].target_offset) {
            all_same_target += 1;
        }
    }

    assert_eq!(all_same_duration, 0);
    assert!(all_same_target < runs / 2);
}

#[test]
fn same_seed_replays_the_same_spin() {
    let spin = |seed| {
        let mut engine =
            GameEngine::new(GameConfig::default(), FrameEnv::seeded(seed)).expect("valid config");
        engine.request_spin();
        run_until_idle(&mut engine, DT_64HZ);
        engine.snapshot()
    };

    assert_eq!(spin(77), spin(77));
}
