//! Entity registry
//!
//! The single authority on what currently exists in the simulation. Entities
//! are kept in registration order, which is also the update and collision
//! dispatch order.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::body::Body;
use super::brick::Brick;
use super::entities::{Ball, BallKind, Boundary, BoundaryKind, HeartDisc, Paddle, PaddleKind};

/// Stable entity handle (never reused within a session)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Collision/render layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layer {
    /// Moving objects: balls, paddles, pickups
    Default,
    /// Walls, death zone and bricks (never collide with each other)
    StaticObjects,
}

/// What an entity is, as seen by other entities' collision handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    MainBall,
    ExtraBall,
    MainPaddle,
    ExtraPaddle,
    Brick,
    HeartDisc,
    Wall,
    DeathZone,
}

impl EntityKind {
    /// Main ball and extra balls alike
    pub fn is_ball(self) -> bool {
        matches!(self, EntityKind::MainBall | EntityKind::ExtraBall)
    }
}

/// The other party of a collision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collider {
    pub id: EntityId,
    pub kind: EntityKind,
}

/// Anything that can live in the registry
#[derive(Debug, Clone)]
pub enum Entity {
    Ball(Ball),
    Paddle(Paddle),
    /// Shared so a brick's chain can keep running after the brick is removed
    Brick(Rc<Brick>),
    HeartDisc(HeartDisc),
    Boundary(Boundary),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Ball(ball) => match ball.kind {
                BallKind::Main => EntityKind::MainBall,
                BallKind::Extra => EntityKind::ExtraBall,
            },
            Entity::Paddle(paddle) => match paddle.kind {
                PaddleKind::Main => EntityKind::MainPaddle,
                PaddleKind::Extra { .. } => EntityKind::ExtraPaddle,
            },
            Entity::Brick(_) => EntityKind::Brick,
            Entity::HeartDisc(_) => EntityKind::HeartDisc,
            Entity::Boundary(boundary) => match boundary.kind {
                BoundaryKind::Wall => EntityKind::Wall,
                BoundaryKind::DeathZone => EntityKind::DeathZone,
            },
        }
    }

    pub fn body(&self) -> &Body {
        match self {
            Entity::Ball(ball) => &ball.body,
            Entity::Paddle(paddle) => &paddle.body,
            Entity::Brick(brick) => brick.body(),
            Entity::HeartDisc(disc) => &disc.body,
            Entity::Boundary(boundary) => &boundary.body,
        }
    }
}

/// A registered entity
#[derive(Debug, Clone)]
pub struct Slot {
    pub id: EntityId,
    pub layer: Layer,
    pub entity: Entity,
}

/// Registration-ordered entity collection
#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
    slots: Vec<Slot>,
    next_id: u32,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity to a layer
    pub fn add(&mut self, entity: Entity, layer: Layer) -> EntityId {
        self.add_with(layer, |_| entity)
    }

    /// Add an entity that needs to know its own id
    pub fn add_with<F>(&mut self, layer: Layer, make: F) -> EntityId
    where
        F: FnOnce(EntityId) -> Entity,
    {
        self.next_id += 1;
        let id = EntityId(self.next_id);
        let entity = make(id);
        self.slots.push(Slot { id, layer, entity });
        id
    }

    /// Remove an entity; returns whether it was present
    pub fn remove(&mut self, id: EntityId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.slots.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove an entity only if it lives on `layer`
    pub fn remove_from(&mut self, id: EntityId, layer: Layer) -> bool {
        match self.position(id) {
            Some(index) if self.slots[index].layer == layer => {
                self.slots.remove(index);
                true
            }
            _ => false,
        }
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.position(id).is_some()
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.slots.iter().find(|s| s.id == id).map(|s| &s.entity)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.slots
            .iter_mut()
            .find(|s| s.id == id)
            .map(|s| &mut s.entity)
    }

    /// Entities in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Slot> {
        self.slots.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Count entities matching a predicate
    pub fn count<P>(&self, predicate: P) -> usize
    where
        P: Fn(&Entity) -> bool,
    {
        self.slots.iter().filter(|s| predicate(&s.entity)).count()
    }

    pub fn count_kind(&self, kind: EntityKind) -> usize {
        self.count(|e| e.kind() == kind)
    }

    /// Live brick at an exact grid cell
    ///
    /// Linear scan over every entity.
    pub fn find_brick(&self, row: u32, col: u32) -> Option<Rc<Brick>> {
        self.slots.iter().find_map(|s| match &s.entity {
            Entity::Brick(brick) if brick.row() == row && brick.col() == col => {
                Some(Rc::clone(brick))
            }
            _ => None,
        })
    }

    fn position(&self, id: EntityId) -> Option<usize> {
        self.slots.iter().position(|s| s.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn wall() -> Entity {
        Entity::Boundary(Boundary::wall(Body::new(Vec2::ZERO, Vec2::splat(10.0))))
    }

    #[test]
    fn test_remove_reports_presence() {
        let mut registry = EntityRegistry::new();
        let id = registry.add(wall(), Layer::StaticObjects);
        assert!(registry.contains(id));
        assert!(registry.remove(id));
        assert!(!registry.remove(id));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_remove_from_wrong_layer() {
        let mut registry = EntityRegistry::new();
        let id = registry.add(wall(), Layer::StaticObjects);
        assert!(!registry.remove_from(id, Layer::Default));
        assert!(registry.contains(id));
        assert!(registry.remove_from(id, Layer::StaticObjects));
    }

    #[test]
    fn test_registration_order_and_ids() {
        let mut registry = EntityRegistry::new();
        let a = registry.add(wall(), Layer::StaticObjects);
        let b = registry.add(wall(), Layer::StaticObjects);
        let c = registry.add(wall(), Layer::StaticObjects);
        registry.remove(b);
        let d = registry.add(wall(), Layer::StaticObjects);

        let order: Vec<_> = registry.iter().map(|s| s.id).collect();
        assert_eq!(order, vec![a, c, d]);
        // Ids are never reused
        assert_ne!(d, b);
        assert_eq!(registry.count_kind(EntityKind::Wall), 3);
    }
}
