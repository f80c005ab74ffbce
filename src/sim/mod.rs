//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by registration)
//! - No rendering or platform dependencies

pub mod body;
pub mod brick;
pub mod collision;
pub mod counter;
pub mod entities;
pub mod extra_paddle;
pub mod registry;
pub mod state;
pub mod strategy;
pub mod tick;

pub use body::Body;
pub use brick::{Brick, GridLayout};
pub use collision::{Contact, detect_contacts, reflect_velocity};
pub use counter::{BrickCounter, Lives};
pub use entities::{Ball, BallKind, Boundary, BoundaryKind, HeartDisc, Paddle, PaddleKind, Steering};
pub use extra_paddle::ExtraPaddleSlot;
pub use registry::{Collider, Entity, EntityId, EntityKind, EntityRegistry, Layer};
pub use state::{GameEvent, GamePhase, GameState};
pub use strategy::{
    CollisionStrategy, SpecialEffect, StrategyKind, StrategyMaker, StrategyTuning, chain_kinds,
};
pub use tick::{Key, TickInput, tick};
