//! Game state and level construction
//!
//! Everything the simulation mutates lives here: the entity registry, the
//! brick counter, lives, the extra paddle slot and the seeded RNG.

use std::collections::HashSet;
use std::rc::Rc;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::brick::{Brick, GridLayout};
use super::counter::{BrickCounter, Lives};
use super::entities::{Ball, Boundary, Paddle};
use super::extra_paddle::ExtraPaddleSlot;
use super::registry::{Entity, EntityId, EntityRegistry, Layer};
use super::strategy::{CollisionStrategy, StrategyMaker, StrategyTuning};
use crate::audio::SoundEffect;
use crate::consts::*;
use crate::settings::GameConfig;
use crate::DIAGONALS;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    /// All bricks cleared (or forced win)
    Won,
    /// Out of lives
    Lost,
}

/// Notifications for the presentation layer, in emission order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Sound(SoundEffect),
    BrickDestroyed { row: u32, col: u32 },
    BrickExploded { row: u32, col: u32 },
    HeartSpawned,
    ExtraBallsSpawned { count: usize },
    ExtraPaddleSpawned,
    ExtraPaddleExpired,
    LivesChanged { lives: u8 },
    LifeLost { remaining: u8 },
    GameOver { won: bool },
}

/// Complete simulation state for one session
#[derive(Debug)]
pub struct GameState {
    pub config: GameConfig,
    /// Seed actually used (drawn at startup if the config had none)
    pub seed: u64,
    pub field_size: Vec2,
    pub registry: EntityRegistry,
    pub bricks: BrickCounter,
    pub lives: Lives,
    pub extra_paddle: ExtraPaddleSlot,
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Simulation frame counter
    pub frame: u64,
    pub main_ball: EntityId,
    pub main_paddle: EntityId,
    /// Pairs in contact last frame (for enter-only reporting)
    pub(crate) contacts: HashSet<(EntityId, EntityId)>,
    layout: GridLayout,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Build a full level: field, paddle, ball and a randomised brick grid
    pub fn new(config: GameConfig) -> Self {
        let mut state = Self::empty(config);
        let maker = StrategyMaker::new(state.tuning());

        let cells: Vec<_> = state.layout.cells().collect();
        for (row, col) in cells {
            let strategy = maker.create(&mut state.rng);
            state.add_brick(row, col, strategy);
        }

        log::info!(
            "Level built: {}x{} bricks, seed {}",
            state.layout.bricks_per_row,
            state.layout.rows,
            state.seed
        );
        state
    }

    /// Field, main paddle and main ball without any bricks
    pub fn empty(config: GameConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        let field_size = FIELD_SIZE;
        let layout = GridLayout::new(config.bricks_per_row, config.rows, field_size.x);
        let mut registry = EntityRegistry::new();
        let mut rng = Pcg32::seed_from_u64(seed);

        add_boundaries(&mut registry, field_size);

        let paddle_center = Vec2::new(field_size.x / 2.0, field_size.y - PADDLE_Y_OFFSET);
        let main_paddle = registry.add(Entity::Paddle(Paddle::main(paddle_center)), Layer::Default);

        let ball_vel = random_diagonal(&mut rng);
        let main_ball = registry.add(
            Entity::Ball(Ball::main(field_size * 0.5, ball_vel)),
            Layer::Default,
        );

        Self {
            config,
            seed,
            field_size,
            registry,
            bricks: BrickCounter::new(),
            lives: Lives::default(),
            extra_paddle: ExtraPaddleSlot::new(),
            rng,
            phase: GamePhase::Playing,
            frame: 0,
            main_ball,
            main_paddle,
            contacts: HashSet::new(),
            layout,
            events: Vec::new(),
        }
    }

    /// Strategy parameters derived from the config
    pub fn tuning(&self) -> StrategyTuning {
        StrategyTuning {
            explosion_sound: self
                .config
                .explosion_sound
                .then_some(SoundEffect::Explosion),
            ..StrategyTuning::default()
        }
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Place a brick in its grid cell and count it
    pub fn add_brick(
        &mut self,
        row: u32,
        col: u32,
        strategy: Box<dyn CollisionStrategy>,
    ) -> EntityId {
        let body = self.layout.brick_body(row, col);
        let id = self.registry.add_with(Layer::StaticObjects, |id| {
            Entity::Brick(Rc::new(Brick::new(id, row, col, body, strategy)))
        });
        self.bricks.increment();
        id
    }

    /// Queue an event for the presentation layer
    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Pending events, oldest first
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_over(&self) -> bool {
        self.phase != GamePhase::Playing
    }

    /// Re-center the main ball with a fresh diagonal launch
    pub fn reset_main_ball(&mut self) {
        let center = self.field_size * 0.5;
        let vel = random_diagonal(&mut self.rng);
        if let Some(Entity::Ball(ball)) = self.registry.get_mut(self.main_ball) {
            ball.body.set_center(center);
            ball.body.vel = vel;
        }
    }

    /// Restore one life (capped)
    pub fn gain_life(&mut self) {
        if self.lives.gain() {
            let lives = self.lives.count();
            log::info!("Life restored ({} left)", lives);
            self.emit(GameEvent::LivesChanged { lives });
        }
    }

    /// Main ball reached the death zone
    pub fn lose_life(&mut self) {
        if self.is_over() {
            return;
        }
        let remaining = self.lives.lose();
        log::info!("Life lost ({} left)", remaining);
        self.emit(GameEvent::LifeLost { remaining });

        if self.lives.is_out() {
            self.finish(false);
        } else {
            self.reset_main_ball();
        }
    }

    /// Enter the terminal phase and notify once
    pub fn finish(&mut self, won: bool) {
        if self.is_over() {
            return;
        }
        self.phase = if won { GamePhase::Won } else { GamePhase::Lost };

        // The extra paddle does not outlive the session
        if let Some(id) = self.extra_paddle.occupant() {
            self.registry.remove(id);
        }
        self.extra_paddle.clear();

        log::info!(
            "Game over after {} frames: {}",
            self.frame,
            if won { "win" } else { "loss" }
        );
        self.emit(GameEvent::GameOver { won });
    }
}

fn random_diagonal(rng: &mut Pcg32) -> Vec2 {
    let dir = DIAGONALS[rng.random_range(0..DIAGONALS.len())];
    dir.normalize() * BALL_SPEED
}

/// Left, right and top walls plus the death zone below the field
fn add_boundaries(registry: &mut EntityRegistry, field: Vec2) {
    let walls = [
        Body::new(Vec2::ZERO, Vec2::new(WALL_THICKNESS, field.y)),
        Body::new(
            Vec2::new(field.x - WALL_THICKNESS, 0.0),
            Vec2::new(WALL_THICKNESS, field.y),
        ),
        Body::new(Vec2::ZERO, Vec2::new(field.x, WALL_THICKNESS)),
    ];
    for body in walls {
        registry.add(Entity::Boundary(Boundary::wall(body)), Layer::StaticObjects);
    }

    let death_zone = Body::new(
        Vec2::new(0.0, field.y),
        Vec2::new(field.x, DEATH_ZONE_HEIGHT),
    );
    registry.add(
        Entity::Boundary(Boundary::death_zone(death_zone)),
        Layer::StaticObjects,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::registry::EntityKind;
    use crate::sim::strategy::special_count;

    #[test]
    fn test_new_level_counts_every_brick() {
        let config = GameConfig::from_args(&["5", "4"]).unwrap().with_seed(8);
        let state = GameState::new(config);
        assert_eq!(state.layout().bricks_per_row, 5);
        assert_eq!(state.layout().rows, 4);
        assert_eq!(state.bricks.value(), 20);
        assert_eq!(state.registry.count_kind(EntityKind::Brick), 20);
        assert_eq!(state.registry.count_kind(EntityKind::Wall), 3);
        assert_eq!(state.registry.count_kind(EntityKind::DeathZone), 1);
        assert_eq!(state.registry.count_kind(EntityKind::MainPaddle), 1);
        assert_eq!(state.registry.count_kind(EntityKind::MainBall), 1);
        assert_eq!(state.lives.count(), INIT_LIVES);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_same_seed_same_level() {
        let describe = |state: &GameState| {
            state
                .registry
                .iter()
                .filter_map(|s| match &s.entity {
                    Entity::Brick(brick) => {
                        Some((brick.row(), brick.col(), special_count(brick.strategy())))
                    }
                    _ => None,
                })
                .collect::<Vec<_>>()
        };
        let a = GameState::new(GameConfig::default().with_seed(31));
        let b = GameState::new(GameConfig::default().with_seed(31));
        assert_eq!(describe(&a), describe(&b));
        assert_eq!(describe(&a).len(), 56);
    }

    #[test]
    fn test_main_ball_launch() {
        let state = GameState::empty(GameConfig::default().with_seed(12));
        let Some(Entity::Ball(ball)) = state.registry.get(state.main_ball) else {
            panic!("main ball missing");
        };
        assert_eq!(ball.body.center(), FIELD_SIZE * 0.5);
        assert!((ball.body.vel.length() - BALL_SPEED).abs() < 1e-3);
        assert!((ball.body.vel.x.abs() - ball.body.vel.y.abs()).abs() < 1e-3);
    }

    #[test]
    fn test_lives_until_game_over() {
        let mut state = GameState::empty(GameConfig::default().with_seed(12));
        for _ in 0..10 {
            state.lose_life();
        }
        assert_eq!(state.lives.count(), 0);
        assert!(state.lives.is_out());
        assert_eq!(state.phase, GamePhase::Lost);

        let events = state.drain_events();
        let losses = events
            .iter()
            .filter(|e| matches!(e, GameEvent::LifeLost { .. }))
            .count();
        assert_eq!(losses, INIT_LIVES as usize);
        assert_eq!(events.last(), Some(&GameEvent::GameOver { won: false }));
    }

    #[test]
    fn test_gain_life_capped() {
        let mut state = GameState::empty(GameConfig::default().with_seed(12));
        for _ in 0..5 {
            state.gain_life();
        }
        assert_eq!(state.lives.count(), MAX_LIVES);
        let changes = state
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::LivesChanged { .. }))
            .count();
        assert_eq!(changes, 1);
    }

    #[test]
    fn test_silent_explosions_config() {
        let config = GameConfig {
            explosion_sound: false,
            ..GameConfig::default().with_seed(1)
        };
        let state = GameState::empty(config);
        assert_eq!(state.tuning().explosion_sound, None);
    }

    #[test]
    fn test_finish_frees_extra_paddle() {
        use crate::sim::strategy::SpecialEffect;

        let mut state = GameState::empty(GameConfig::default().with_seed(3));
        let chain = StrategyMaker::default().build_chain(&[SpecialEffect::ExtraPaddle]);
        state.add_brick(0, 0, chain);
        let brick = state.registry.find_brick(0, 0).unwrap();
        brick.on_hit(None, &mut state);
        assert!(state.extra_paddle.exists());
        assert_eq!(
            state.events(),
            &[
                GameEvent::BrickDestroyed { row: 0, col: 0 },
                GameEvent::ExtraPaddleSpawned,
            ]
        );

        state.finish(true);
        assert!(!state.extra_paddle.exists());
        assert_eq!(state.registry.count_kind(EntityKind::ExtraPaddle), 0);
        assert_eq!(state.events().last(), Some(&GameEvent::GameOver { won: true }));
    }
}
