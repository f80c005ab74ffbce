//! Drops a heart disc that restores a life when caught

use glam::Vec2;

use super::{CollisionStrategy, SpecialEffect, StrategyKind};
use crate::sim::brick::Brick;
use crate::sim::entities::HeartDisc;
use crate::sim::registry::{Collider, Entity, Layer};
use crate::sim::state::{GameEvent, GameState};

#[derive(Debug)]
pub struct ExtraLife {
    inner: Box<dyn CollisionStrategy>,
    disc_size: Vec2,
    disc_velocity: Vec2,
}

impl ExtraLife {
    pub fn new(inner: Box<dyn CollisionStrategy>, disc_size: Vec2, disc_velocity: Vec2) -> Self {
        Self {
            inner,
            disc_size,
            disc_velocity,
        }
    }
}

impl CollisionStrategy for ExtraLife {
    fn on_collision(&self, brick: &Brick, collider: Option<Collider>, state: &mut GameState) {
        self.inner.on_collision(brick, collider, state);

        let disc = HeartDisc::new(brick.center(), self.disc_size, self.disc_velocity);
        let id = state.registry.add(Entity::HeartDisc(disc), Layer::Default);
        log::debug!("heart disc {} dropped from ({}, {})", id, brick.row(), brick.col());
        state.emit(GameEvent::HeartSpawned);
    }

    fn kind(&self) -> StrategyKind {
        SpecialEffect::ExtraLife.into()
    }

    fn inner(&self) -> Option<&dyn CollisionStrategy> {
        Some(self.inner.as_ref())
    }
}
