//! Per-frame simulation step
//!
//! Core game loop that advances the session by one variable-length frame.

use super::state::{GameEvent, GamePhase, LossCause, Session};

/// Input edges for a single frame (true only on the frame the key went down)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Flap
    pub jump: bool,
    /// Start a new run (only honoured while lost)
    pub restart: bool,
    /// Host should shut down
    pub quit: bool,
}

/// Result of a tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickOutcome {
    pub events: Vec<GameEvent>,
    /// Echo of the quit request, so hosts can act on one value
    pub quit: bool,
}

/// Advance the session by `dt` seconds
///
/// `dt` is used as given; very large steps can tunnel the bird through a pipe.
pub fn tick(session: &mut Session, input: &TickInput, dt: f32) -> TickOutcome {
    let mut outcome = TickOutcome {
        events: Vec::new(),
        quit: input.quit,
    };

    match session.phase {
        GamePhase::Playing => step_playing(session, input, dt, &mut outcome.events),
        GamePhase::Lost => {
            if input.restart {
                session.reset();
                outcome.events.push(GameEvent::Restarted);
            }
        }
    }

    outcome
}

fn step_playing(session: &mut Session, input: &TickInput, dt: f32, events: &mut Vec<GameEvent>) {
    session.frame += 1;
    let config = &session.config;

    session.bird.update(dt, input.jump, config);

    session
        .pipes
        .advance(dt, config.pipe_velocity, config.collider_z_offset);
    for pair in session.pipes.recycle_if_needed(config, &mut session.rng) {
        log::debug!("Recycled pipe pair {}", pair);
        events.push(GameEvent::PipeRecycled { pair });
    }

    // All checks run every frame; the last one that fires names the cause
    let mut cause = None;
    let bird_box = session.bird.collider.bounds();

    if session.pipes.bodies().any(|body| bird_box.overlaps(&body.bounds())) {
        cause = Some(LossCause::PipeCollision);
    }

    for (gate_id, gate) in session.pipes.gates() {
        if !bird_box.overlaps(&gate.bounds()) {
            continue;
        }
        if session.score.credit(gate_id) {
            let score = session.score.score();
            log::debug!("Scored through pair {} (score {})", gate_id.0, score);
            events.push(GameEvent::Scored { score });
        }
    }

    if bird_box.overlaps(&session.ground.collider.bounds()) {
        cause = Some(LossCause::GroundCollision);
    }

    if session.bird.position().y >= config.ceiling_y {
        cause = Some(LossCause::Ceiling);
    }

    log::trace!(
        "frame {}: bird y={:.3} vy={:.3}",
        session.frame,
        session.bird.position().y,
        session.bird.velocity.y
    );

    if let Some(cause) = cause {
        let score = session.score.score();
        session.phase = GamePhase::Lost;
        log::info!("Run lost ({:?}) with score {}", cause, score);
        events.push(GameEvent::Lost { cause, score });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::HEADLESS_DT;
    use crate::tuning::SimConfig;
    use glam::Vec3;

    fn session() -> Session {
        Session::new(SimConfig::default(), 12345).unwrap()
    }

    /// Put pair 0 right on the bird with its gap centred on the bird
    fn pair_on_bird(session: &mut Session) {
        let config = session.config.clone();
        let bird = session.bird.position();
        session.pipes.set_pair(0, bird.x, bird.y, &config);
    }

    #[test]
    fn test_idle_frame_stays_playing() {
        let mut session = session();
        let outcome = tick(&mut session, &TickInput::default(), HEADLESS_DT);
        assert_eq!(session.phase, GamePhase::Playing);
        assert!(outcome.events.is_empty());
        assert_eq!(session.frame, 1);
    }

    #[test]
    fn test_ceiling_loses() {
        let mut session = session();
        session
            .bird
            .sprite
            .transform
            .set_position(Vec3::new(-5.0, 12.0, 2.0));

        let outcome = tick(&mut session, &TickInput::default(), 0.0);
        assert_eq!(session.phase, GamePhase::Lost);
        assert_eq!(
            outcome.events,
            vec![GameEvent::Lost {
                cause: LossCause::Ceiling,
                score: 0
            }]
        );
    }

    #[test]
    fn test_just_below_ceiling_survives() {
        let mut session = session();
        session
            .bird
            .sprite
            .transform
            .set_position(Vec3::new(-5.0, 11.9, 2.0));
        tick(&mut session, &TickInput::default(), 0.0);
        assert_eq!(session.phase, GamePhase::Playing);
    }

    #[test]
    fn test_ground_collision_loses() {
        let mut session = session();
        session
            .bird
            .sprite
            .transform
            .set_position(Vec3::new(-5.0, -8.0, 2.0));
        let outcome = tick(&mut session, &TickInput::default(), 0.0);
        assert_eq!(session.phase, GamePhase::Lost);
        assert!(outcome.events.contains(&GameEvent::Lost {
            cause: LossCause::GroundCollision,
            score: 0
        }));
    }

    fn lost_events(outcome: &TickOutcome) -> Vec<&GameEvent> {
        outcome
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::Lost { .. }))
            .collect()
    }

    #[test]
    fn test_ceiling_wins_over_pipe_collision() {
        let mut session = session();
        let config = session.config.clone();
        let bird = Vec3::new(-5.0, config.ceiling_y, 2.0);
        session.bird.sprite.transform.set_position(bird);
        session.bird.sync_collider(&config);
        // Bottom pipe body centred on the bird
        session.pipes.set_pair(0, bird.x, bird.y + config.pipe_center_offset(), &config);
        assert!(
            session
                .pipes
                .bodies()
                .any(|b| session.bird.collider.bounds().overlaps(&b.bounds()))
        );

        let outcome = tick(&mut session, &TickInput::default(), 0.0);
        assert_eq!(
            lost_events(&outcome),
            vec![&GameEvent::Lost {
                cause: LossCause::Ceiling,
                score: 0
            }]
        );
        assert_eq!(session.phase(), GamePhase::Lost);
    }

    #[test]
    fn test_ground_wins_over_pipe_collision() {
        let mut session = session();
        let config = session.config.clone();
        let bird = Vec3::new(-5.0, -8.0, 2.0);
        session.bird.sprite.transform.set_position(bird);
        session.bird.sync_collider(&config);
        session.pipes.set_pair(0, bird.x, bird.y + config.pipe_center_offset(), &config);

        let outcome = tick(&mut session, &TickInput::default(), 0.0);
        assert_eq!(
            lost_events(&outcome),
            vec![&GameEvent::Lost {
                cause: LossCause::GroundCollision,
                score: 0
            }]
        );
    }

    #[test]
    fn test_pipe_collision_freezes_until_restart() {
        let mut session = session();
        let config = session.config.clone();
        let bird = session.bird.position();
        // Bottom pipe body straddles the bird
        session.pipes.set_pair(0, bird.x, bird.y + config.pipe_center_offset(), &config);

        let outcome = tick(&mut session, &TickInput::default(), HEADLESS_DT);
        assert_eq!(session.phase, GamePhase::Lost);
        assert!(outcome.events.contains(&GameEvent::Lost {
            cause: LossCause::PipeCollision,
            score: 0
        }));

        let frozen_bird = session.bird.position();
        let frozen_pipes = session.pipes.pair_xs();
        for _ in 0..10 {
            tick(
                &mut session,
                &TickInput {
                    jump: true,
                    ..Default::default()
                },
                HEADLESS_DT,
            );
        }
        assert_eq!(session.bird.position(), frozen_bird);
        assert_eq!(session.pipes.pair_xs(), frozen_pipes);
        assert_eq!(session.phase, GamePhase::Lost);
    }

    #[test]
    fn test_gate_scores_once_while_overlapping() {
        let mut session = session();
        pair_on_bird(&mut session);

        let mut scored = 0;
        for _ in 0..5 {
            let outcome = tick(&mut session, &TickInput::default(), HEADLESS_DT);
            scored += outcome
                .events
                .iter()
                .filter(|e| matches!(e, GameEvent::Scored { .. }))
                .count();
            assert_eq!(session.phase, GamePhase::Playing);
        }
        assert_eq!(scored, 1);
        assert_eq!(session.current_score(), 1);
    }

    #[test]
    fn test_next_gate_scores_again() {
        let mut session = session();
        pair_on_bird(&mut session);
        tick(&mut session, &TickInput::default(), HEADLESS_DT);
        assert_eq!(session.current_score(), 1);

        // Move pair 0 away and bring pair 1 onto the bird
        let config = session.config.clone();
        let bird = session.bird.position();
        session.pipes.set_pair(0, 40.0, 0.0, &config);
        session.pipes.set_pair(1, bird.x, bird.y, &config);
        tick(&mut session, &TickInput::default(), HEADLESS_DT);
        assert_eq!(session.current_score(), 2);
        assert_eq!(session.score.last_gate().map(|g| g.0), Some(1));
    }

    #[test]
    fn test_restart_only_from_lost() {
        let mut session = session();
        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        let outcome = tick(&mut session, &restart, HEADLESS_DT);
        assert!(!outcome.events.contains(&GameEvent::Restarted));
        assert_eq!(session.frame, 1);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut session = session();
        let config = session.config.clone();
        pair_on_bird(&mut session);
        tick(&mut session, &TickInput::default(), HEADLESS_DT);
        assert_eq!(session.current_score(), 1);

        // Fly into the ceiling
        session
            .bird
            .sprite
            .transform
            .set_position(Vec3::new(-5.0, 20.0, 2.0));
        tick(&mut session, &TickInput::default(), HEADLESS_DT);
        assert!(session.is_lost());

        let outcome = tick(
            &mut session,
            &TickInput {
                restart: true,
                ..Default::default()
            },
            HEADLESS_DT,
        );
        assert_eq!(outcome.events, vec![GameEvent::Restarted]);
        assert_eq!(session.phase, GamePhase::Playing);
        assert_eq!(session.current_score(), 0);
        assert_eq!(session.score.last_gate(), None);
        assert_eq!(session.bird.position(), config.bird_spawn);
        assert_eq!(session.bird.velocity, Vec3::ZERO);
        for (i, x) in session.pipes.pair_xs().iter().enumerate() {
            assert_eq!(*x, config.pipe_start_x + i as f32 * config.pipe_x_spacing);
        }
    }

    #[test]
    fn test_quit_is_echoed_in_any_phase() {
        let mut session = session();
        let quit = TickInput {
            quit: true,
            ..Default::default()
        };
        assert!(tick(&mut session, &quit, HEADLESS_DT).quit);
        assert_eq!(session.phase, GamePhase::Playing);

        session.phase = GamePhase::Lost;
        assert!(tick(&mut session, &quit, HEADLESS_DT).quit);
        assert_eq!(session.phase, GamePhase::Lost);
    }

    #[test]
    fn test_recycle_event_reported() {
        let mut session = session();
        let config = session.config.clone();
        session.pipes.set_pair(0, config.pipe_recycle_x - 1.0, 0.0, &config);
        let outcome = tick(&mut session, &TickInput::default(), HEADLESS_DT);
        assert!(outcome.events.contains(&GameEvent::PipeRecycled { pair: 0 }));
    }

    #[test]
    fn test_determinism() {
        let mut a = Session::new(SimConfig::default(), 99999).unwrap();
        let mut b = Session::new(SimConfig::default(), 99999).unwrap();
        let inputs = [
            TickInput::default(),
            TickInput {
                jump: true,
                ..Default::default()
            },
            TickInput::default(),
        ];
        for i in 0..900 {
            let input = &inputs[i % inputs.len()];
            let ea = tick(&mut a, input, HEADLESS_DT);
            let eb = tick(&mut b, input, HEADLESS_DT);
            assert_eq!(ea, eb);
        }
        assert_eq!(a.bird.position(), b.bird.position());
        assert_eq!(a.pipes.pair_xs(), b.pipes.pair_xs());
        assert_eq!(a.phase, b.phase);
    }
}
