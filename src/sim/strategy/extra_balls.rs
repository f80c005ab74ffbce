//! Spawns extra balls flying off in random directions

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::{CollisionStrategy, SpecialEffect, StrategyKind};
use crate::polar_velocity;
use crate::sim::brick::Brick;
use crate::sim::entities::Ball;
use crate::sim::registry::{Collider, Entity, Layer};
use crate::sim::state::{GameEvent, GameState};

#[derive(Debug)]
pub struct ExtraBalls {
    inner: Box<dyn CollisionStrategy>,
    count: usize,
    ball_size: Vec2,
    speed: f32,
}

impl ExtraBalls {
    pub fn new(
        inner: Box<dyn CollisionStrategy>,
        count: usize,
        ball_size: Vec2,
        speed: f32,
    ) -> Self {
        Self {
            inner,
            count,
            ball_size,
            speed,
        }
    }
}

impl CollisionStrategy for ExtraBalls {
    fn on_collision(&self, brick: &Brick, collider: Option<Collider>, state: &mut GameState) {
        self.inner.on_collision(brick, collider, state);

        for _ in 0..self.count {
            // Uniform over the full circle
            let angle = state.rng.random_range(0.0..TAU);
            let vel = polar_velocity(angle, self.speed);
            let ball = Ball::extra(brick.center(), self.ball_size, vel);
            state.registry.add(Entity::Ball(ball), Layer::Default);
        }
        log::debug!(
            "{} extra balls from ({}, {})",
            self.count,
            brick.row(),
            brick.col()
        );
        state.emit(GameEvent::ExtraBallsSpawned { count: self.count });
    }

    fn kind(&self) -> StrategyKind {
        SpecialEffect::ExtraBalls.into()
    }

    fn inner(&self) -> Option<&dyn CollisionStrategy> {
        Some(self.inner.as_ref())
    }
}
