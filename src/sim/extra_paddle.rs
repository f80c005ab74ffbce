//! At-most-one extra paddle per session
//!
//! The slot is owned by the game state and handed to whoever may create or
//! retire the paddle. Checking and creating happen in one `&mut` call so no
//! second creation can interleave.

use serde::{Deserialize, Serialize};

use super::entities::Paddle;
use super::registry::{Entity, EntityId, EntityRegistry, Layer};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraPaddleSlot {
    occupant: Option<EntityId>,
}

impl ExtraPaddleSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exists(&self) -> bool {
        self.occupant.is_some()
    }

    pub fn occupant(&self) -> Option<EntityId> {
        self.occupant
    }

    /// Build and register a paddle if none is alive
    ///
    /// `make` only runs when the slot is free.
    pub fn try_create<F>(&mut self, registry: &mut EntityRegistry, make: F) -> Option<EntityId>
    where
        F: FnOnce() -> Paddle,
    {
        if self.occupant.is_some() {
            return None;
        }
        let id = registry.add(Entity::Paddle(make()), Layer::Default);
        self.occupant = Some(id);
        Some(id)
    }

    /// Free the slot if `id` is the current occupant
    pub fn release(&mut self, id: EntityId) -> bool {
        if self.occupant == Some(id) {
            self.occupant = None;
            true
        } else {
            false
        }
    }

    /// Forget the occupant without touching the registry
    pub fn clear(&mut self) {
        self.occupant = None;
    }
}
