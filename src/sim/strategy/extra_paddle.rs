//! Puts a temporary second paddle in the middle of the field

use glam::Vec2;

use super::{CollisionStrategy, SpecialEffect, StrategyKind};
use crate::sim::brick::Brick;
use crate::sim::entities::Paddle;
use crate::sim::registry::Collider;
use crate::sim::state::{GameEvent, GameState};

/// Creates the extra paddle unless one is already alive
#[derive(Debug)]
pub struct ExtraPaddle {
    inner: Box<dyn CollisionStrategy>,
    paddle_size: Vec2,
}

impl ExtraPaddle {
    pub fn new(inner: Box<dyn CollisionStrategy>, paddle_size: Vec2) -> Self {
        Self { inner, paddle_size }
    }
}

impl CollisionStrategy for ExtraPaddle {
    fn on_collision(&self, brick: &Brick, collider: Option<Collider>, state: &mut GameState) {
        self.inner.on_collision(brick, collider, state);

        let center = state.field_size * 0.5;
        let size = self.paddle_size;
        let created = state
            .extra_paddle
            .try_create(&mut state.registry, || Paddle::extra(center, size));

        match created {
            Some(id) => {
                log::debug!("extra paddle {} created", id);
                state.emit(GameEvent::ExtraPaddleSpawned);
            }
            None => log::debug!("extra paddle already alive, skipping"),
        }
    }

    fn kind(&self) -> StrategyKind {
        SpecialEffect::ExtraPaddle.into()
    }

    fn inner(&self) -> Option<&dyn CollisionStrategy> {
        Some(self.inner.as_ref())
    }
}
