//! Brick collision strategies
//!
//! A brick's behavior is a chain of strategies. Every special strategy owns
//! exactly one inner strategy and runs it before its own effect, so effects
//! fire innermost first. Every chain ends in `BasicRemoval`, the only step
//! that removes the brick and touches the brick counter.

mod basic;
mod exploding;
mod extra_balls;
mod extra_life;
mod extra_paddle;
mod maker;

pub use basic::BasicRemoval;
pub use exploding::ExplodingBrick;
pub use extra_balls::ExtraBalls;
pub use extra_life::ExtraLife;
pub use extra_paddle::ExtraPaddle;
pub use maker::{StrategyMaker, StrategyTuning};

use std::fmt;

use serde::{Deserialize, Serialize};

use super::brick::Brick;
use super::registry::Collider;
use super::state::GameState;

/// One behavior unit in a brick's chain
pub trait CollisionStrategy: fmt::Debug {
    /// React to `brick` being hit
    ///
    /// `collider` is None for programmatic hits (chain reactions).
    fn on_collision(&self, brick: &Brick, collider: Option<Collider>, state: &mut GameState);

    fn kind(&self) -> StrategyKind;

    /// Wrapped strategy (None only for the terminal step)
    fn inner(&self) -> Option<&dyn CollisionStrategy>;
}

/// The four stackable effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialEffect {
    ExtraLife,
    ExtraBalls,
    ExtraPaddle,
    ExplodingBrick,
}

impl SpecialEffect {
    pub const ALL: [SpecialEffect; 4] = [
        SpecialEffect::ExtraLife,
        SpecialEffect::ExtraBalls,
        SpecialEffect::ExtraPaddle,
        SpecialEffect::ExplodingBrick,
    ];
}

/// Kind of a single chain link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    BasicRemoval,
    Special(SpecialEffect),
}

impl From<SpecialEffect> for StrategyKind {
    fn from(effect: SpecialEffect) -> Self {
        StrategyKind::Special(effect)
    }
}

/// Chain links, outermost first
pub fn chain_kinds(strategy: &dyn CollisionStrategy) -> Vec<StrategyKind> {
    let mut kinds = Vec::new();
    let mut current = Some(strategy);
    while let Some(link) = current {
        kinds.push(link.kind());
        current = link.inner();
    }
    kinds
}

/// Number of special effects stacked on the terminal step
pub fn special_count(strategy: &dyn CollisionStrategy) -> usize {
    chain_kinds(strategy)
        .iter()
        .filter(|k| matches!(k, StrategyKind::Special(_)))
        .count()
}
