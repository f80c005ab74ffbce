//! Chain-reaction bricks
//!
//! Hitting an exploding brick hits its four orthogonal neighbours too. The
//! brick's `exploded` flag stops the recursion: each brick explodes once.

use super::{CollisionStrategy, SpecialEffect, StrategyKind};
use crate::audio::SoundEffect;
use crate::sim::brick::Brick;
use crate::sim::registry::Collider;
use crate::sim::state::{GameEvent, GameState};

#[derive(Debug)]
pub struct ExplodingBrick {
    inner: Box<dyn CollisionStrategy>,
    sound: Option<SoundEffect>,
}

impl ExplodingBrick {
    pub fn new(inner: Box<dyn CollisionStrategy>, sound: Option<SoundEffect>) -> Self {
        Self { inner, sound }
    }
}

impl CollisionStrategy for ExplodingBrick {
    fn on_collision(&self, brick: &Brick, collider: Option<Collider>, state: &mut GameState) {
        self.inner.on_collision(brick, collider, state);

        if !brick.mark_exploded() {
            return;
        }

        log::debug!("brick ({}, {}) exploded", brick.row(), brick.col());
        state.emit(GameEvent::BrickExploded {
            row: brick.row(),
            col: brick.col(),
        });
        if let Some(sound) = self.sound {
            state.emit(GameEvent::Sound(sound));
        }

        for (row, col) in brick.neighbors() {
            let Some(neighbor) = state.registry.find_brick(row, col) else {
                continue;
            };
            if !neighbor.has_exploded() {
                neighbor.on_hit(None, state);
            }
        }
    }

    fn kind(&self) -> StrategyKind {
        SpecialEffect::ExplodingBrick.into()
    }

    fn inner(&self) -> Option<&dyn CollisionStrategy> {
        Some(self.inner.as_ref())
    }
}
