//! Strategy factory
//!
//! One roll per brick decides how many special effects it gets:
//! - roll <= 0.5: plain removal
//! - roll <= 0.9: one effect
//! - otherwise: two effects, drawn independently (repeats allowed)
//!
//! Each effect kind is drawn uniformly from the four specials.

use glam::Vec2;
use rand::Rng;

use super::{
    BasicRemoval, CollisionStrategy, ExplodingBrick, ExtraBalls, ExtraLife, ExtraPaddle,
    SpecialEffect,
};
use crate::audio::SoundEffect;
use crate::consts::*;

/// Parameters handed to the strategies the factory builds
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyTuning {
    pub disc_size: Vec2,
    pub disc_velocity: Vec2,
    pub extra_ball_count: usize,
    pub extra_ball_size: Vec2,
    pub extra_ball_speed: f32,
    pub paddle_size: Vec2,
    /// None = explosions are silent
    pub explosion_sound: Option<SoundEffect>,
}

impl Default for StrategyTuning {
    fn default() -> Self {
        Self {
            disc_size: HEART_DISC_SIZE,
            disc_velocity: HEART_DISC_VELOCITY,
            extra_ball_count: EXTRA_BALLS_PER_HIT,
            extra_ball_size: EXTRA_BALL_SIZE,
            extra_ball_speed: EXTRA_BALL_SPEED,
            paddle_size: PADDLE_SIZE,
            explosion_sound: Some(SoundEffect::Explosion),
        }
    }
}

/// Builds one strategy chain per brick
#[derive(Debug, Clone, Default)]
pub struct StrategyMaker {
    tuning: StrategyTuning,
}

impl StrategyMaker {
    pub fn new(tuning: StrategyTuning) -> Self {
        Self { tuning }
    }

    pub fn tuning(&self) -> &StrategyTuning {
        &self.tuning
    }

    /// Random chain following the 50/40/10 distribution
    pub fn create<R: Rng>(&self, rng: &mut R) -> Box<dyn CollisionStrategy> {
        let roll: f64 = rng.random();
        let basic: Box<dyn CollisionStrategy> = Box::new(BasicRemoval);

        if roll <= BASIC_STRATEGY_PROBABILITY {
            return basic;
        }

        let effects = if roll <= SINGLE_SPECIAL_PROBABILITY {
            1
        } else {
            DOUBLE_SPECIAL_EFFECTS
        };

        (0..effects).fold(basic, |inner, _| {
            let effect = Self::random_effect(rng);
            self.wrap(effect, inner)
        })
    }

    /// Uniform draw over the four specials
    pub fn random_effect<R: Rng>(rng: &mut R) -> SpecialEffect {
        SpecialEffect::ALL[rng.random_range(0..SpecialEffect::ALL.len())]
    }

    /// Wrap `inner` in one effect
    pub fn wrap(
        &self,
        effect: SpecialEffect,
        inner: Box<dyn CollisionStrategy>,
    ) -> Box<dyn CollisionStrategy> {
        let t = &self.tuning;
        match effect {
            SpecialEffect::ExtraLife => {
                Box::new(ExtraLife::new(inner, t.disc_size, t.disc_velocity))
            }
            SpecialEffect::ExtraBalls => Box::new(ExtraBalls::new(
                inner,
                t.extra_ball_count,
                t.extra_ball_size,
                t.extra_ball_speed,
            )),
            SpecialEffect::ExtraPaddle => Box::new(ExtraPaddle::new(inner, t.paddle_size)),
            SpecialEffect::ExplodingBrick => {
                Box::new(ExplodingBrick::new(inner, t.explosion_sound))
            }
        }
    }

    /// Chain from explicit effects; the first effect sits innermost
    pub fn build_chain(&self, effects: &[SpecialEffect]) -> Box<dyn CollisionStrategy> {
        let basic: Box<dyn CollisionStrategy> = Box::new(BasicRemoval);
        effects
            .iter()
            .fold(basic, |inner, &effect| self.wrap(effect, inner))
    }
}
