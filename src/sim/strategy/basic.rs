//! Terminal chain step: remove the brick, count it down

use super::{CollisionStrategy, StrategyKind};
use crate::sim::brick::Brick;
use crate::sim::registry::{Collider, Layer};
use crate::sim::state::{GameEvent, GameState};

/// Removes the brick and decrements the brick counter
///
/// The counter only moves when the removal actually happened, so repeated
/// hits on the same brick count it once.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicRemoval;

impl CollisionStrategy for BasicRemoval {
    fn on_collision(&self, brick: &Brick, _collider: Option<Collider>, state: &mut GameState) {
        if !state.registry.remove_from(brick.id(), Layer::StaticObjects) {
            return;
        }
        state.bricks.decrement();
        log::debug!(
            "brick ({}, {}) removed, {} left",
            brick.row(),
            brick.col(),
            state.bricks.value()
        );
        state.emit(GameEvent::BrickDestroyed {
            row: brick.row(),
            col: brick.col(),
        });
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::BasicRemoval
    }

    fn inner(&self) -> Option<&dyn CollisionStrategy> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::GameConfig;

    #[test]
    fn test_removal_counts_once() {
        let mut state = GameState::empty(GameConfig::default().with_seed(1));
        let id = state.add_brick(0, 0, Box::new(BasicRemoval));
        let brick = state.registry.find_brick(0, 0).unwrap();
        assert_eq!(brick.id(), id);
        assert_eq!(state.bricks.value(), 1);

        brick.on_hit(None, &mut state);
        assert!(!state.registry.contains(id));
        assert_eq!(state.bricks.value(), 0);

        brick.on_hit(None, &mut state);
        assert_eq!(state.bricks.value(), 0);

        let destroyed = state
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::BrickDestroyed { .. }))
            .count();
        assert_eq!(destroyed, 1);
    }

    #[test]
    fn test_does_not_touch_other_bricks_counter() {
        let mut state = GameState::empty(GameConfig::default().with_seed(1));
        state.add_brick(0, 0, Box::new(BasicRemoval));
        state.add_brick(0, 1, Box::new(BasicRemoval));

        let brick = state.registry.find_brick(0, 1).unwrap();
        brick.on_hit(None, &mut state);
        brick.on_hit(None, &mut state);
        assert_eq!(state.bricks.value(), 1);
        assert!(state.registry.find_brick(0, 0).is_some());
    }
}
