//! Game state and core simulation types
//!
//! Everything a run mutates lives in one `Session`: the bird, the pipe pool,
//! the scenery, the score and the seeded RNG. Restarting resets the session
//! in place.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::bird::Bird;
use super::collider::{BoxCollider, Collider};
use super::pipes::PipePool;
use super::score::ScoreTracker;
use super::transform::Transform;
use crate::error::ConfigResult;
use crate::hud::ScoreHud;
use crate::scene::{DrawItem, SceneAssets, Sprite};
use crate::tuning::SimConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Bird flying, pipes scrolling
    Playing,
    /// Run ended, waiting for restart
    Lost,
}

/// What ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossCause {
    PipeCollision,
    GroundCollision,
    /// Flew at or above the ceiling
    Ceiling,
}

/// Things that happened during a tick, for audio/UI hooks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Scored { score: u32 },
    Lost { cause: LossCause, score: u32 },
    Restarted,
    PipeRecycled { pair: usize },
}

/// Solid floor the bird can crash into
#[derive(Debug, Clone)]
pub struct Ground {
    pub sprite: Sprite,
    pub collider: Collider,
}

/// One play session (all mutable simulation state)
#[derive(Debug, Clone)]
pub struct Session {
    pub config: SimConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub(crate) phase: GamePhase,
    pub bird: Bird,
    pub pipes: PipePool,
    pub ground: Ground,
    pub background: Sprite,
    pub score: ScoreTracker,
    pub hud: ScoreHud,
    /// Frames simulated while playing (across restarts)
    pub frame: u64,
}

impl Session {
    /// Create a session with placeholder asset handles
    pub fn new(config: SimConfig, seed: u64) -> ConfigResult<Self> {
        Self::with_assets(config, SceneAssets::default(), seed)
    }

    pub fn with_assets(config: SimConfig, assets: SceneAssets, seed: u64) -> ConfigResult<Self> {
        config.validate()?;

        let mut rng = Pcg32::seed_from_u64(seed);
        let pipes = PipePool::new(&config, assets.quad, assets.pipe, &mut rng)?;
        let bird = Bird::new(&config, assets.quad, assets.bird);

        let mut ground_sprite = Sprite::new(assets.quad, assets.ground);
        ground_sprite.transform.set_position(config.ground_position);
        ground_sprite.transform.set_scale(config.ground_scale);
        let mut ground_collider = Collider::new(BoxCollider::new(1.0, 1.0), Transform::new());
        ground_collider.follow_scaled(&ground_sprite.transform, config.collider_z_offset);

        let mut background = Sprite::new(assets.quad, assets.background);
        background.transform.set_scale(config.background_scale);

        let hud = ScoreHud::new(assets.quad, assets.digits);

        log::info!(
            "Session created: seed={}, {} pipe pairs",
            seed,
            config.pipe_pairs
        );

        Ok(Self {
            config,
            seed,
            rng,
            phase: GamePhase::Playing,
            bird,
            pipes,
            ground: Ground {
                sprite: ground_sprite,
                collider: ground_collider,
            },
            background,
            score: ScoreTracker::new(),
            hud,
            frame: 0,
        })
    }

    /// Back to the start of a run: score 0, bird at spawn, pipes on the ladder
    pub fn reset(&mut self) {
        self.score.reset();
        self.bird.respawn(&self.config);
        self.pipes.reseed(&self.config, &mut self.rng);
        self.phase = GamePhase::Playing;
        log::info!("Session restarted");
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[inline]
    pub fn current_score(&self) -> u32 {
        self.score.score()
    }

    #[inline]
    pub fn is_lost(&self) -> bool {
        self.phase == GamePhase::Lost
    }

    /// Everything to draw this frame, back to front
    ///
    /// Reads every model matrix, so stale caches are rebuilt here.
    pub fn draw_list(&mut self) -> Vec<DrawItem> {
        let mut items = Vec::with_capacity(self.pipes.pipes().len() + 16);
        items.push(self.background.draw_item());
        items.push(self.ground.sprite.draw_item());
        items.extend(self.pipes.draw_items());
        items.push(self.bird.sprite.draw_item());
        items.extend(self.hud.draw_items(self.score.score(), &self.config));
        items
    }
}
