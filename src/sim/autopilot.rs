//! Demo controller that flies the bird through the gaps
//!
//! Used by the headless runner and for soak-testing the simulation.

use super::state::Session;

/// Decide whether to flap this frame
///
/// Targets the gap of the nearest pair not yet behind the bird and flaps
/// when the bird is falling below it.
pub fn decide_jump(session: &Session) -> bool {
    let bird = session.bird.position();
    let half_pipe = session.config.pipe_scale.x * 0.5;

    let target = (0..session.pipes.pair_count())
        .map(|pair| (pair, session.pipes.pair(pair).0.position().x))
        .filter(|&(_, x)| x + half_pipe >= bird.x)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(pair, _)| session.pipes.gap_center(pair))
        .unwrap_or(0.0);

    bird.y < target - 1.5 && session.bird.velocity.y <= 0.0
}
