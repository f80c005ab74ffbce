//! Moving entities and boundaries
//!
//! Each entity decides how it reacts to a contact; the frame step applies the
//! outcome to the shared state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::collision::reflect_velocity;
use super::registry::EntityKind;
use crate::consts::*;

/// Main ball or an extra ball spawned by a brick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallKind {
    Main,
    Extra,
}

/// What a ball contact resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallOutcome {
    /// Velocity reflected, play the collision sound
    Bounced,
    /// Touched the death zone
    FellOut,
}

/// A ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub body: Body,
    pub kind: BallKind,
}

impl Ball {
    pub fn main(center: Vec2, vel: Vec2) -> Self {
        let mut body = Body::centered(center, BALL_SIZE);
        body.vel = vel;
        Self {
            body,
            kind: BallKind::Main,
        }
    }

    pub fn extra(center: Vec2, size: Vec2, vel: Vec2) -> Self {
        let mut body = Body::centered(center, size);
        body.vel = vel;
        Self {
            body,
            kind: BallKind::Extra,
        }
    }

    /// React to a contact; `normal` points from the other object toward the ball
    pub fn on_collision_enter(&mut self, other: EntityKind, normal: Vec2) -> BallOutcome {
        if other == EntityKind::DeathZone {
            return BallOutcome::FellOut;
        }
        self.body.vel = reflect_velocity(self.body.vel, normal);
        BallOutcome::Bounced
    }
}

/// Horizontal steering read from input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Steering {
    pub left: bool,
    pub right: bool,
}

impl Steering {
    /// -1, 0 or +1 (both or neither pressed cancel out)
    pub fn direction(&self) -> f32 {
        match (self.left, self.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

/// Main paddle or the temporary extra paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaddleKind {
    Main,
    /// Counts ball contacts until it expires
    Extra { hits: u32 },
}

/// What a paddle contact resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleOutcome {
    Ignored,
    /// Extra paddle took a ball hit (running total)
    Hit(u32),
    /// Extra paddle reached its hit limit and must be removed
    Expired,
}

/// A player-controlled paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub body: Body,
    pub kind: PaddleKind,
    /// Horizontal speed (pixels/s)
    pub speed: f32,
}

impl Paddle {
    pub fn main(center: Vec2) -> Self {
        Self {
            body: Body::centered(center, PADDLE_SIZE),
            kind: PaddleKind::Main,
            speed: PADDLE_SPEED,
        }
    }

    pub fn extra(center: Vec2, size: Vec2) -> Self {
        Self {
            body: Body::centered(center, size),
            kind: PaddleKind::Extra { hits: 0 },
            speed: PADDLE_SPEED,
        }
    }

    /// Apply input-driven movement, then clamp inside the field
    ///
    /// The clamp is positional and runs every frame, input or not.
    pub fn steer(&mut self, steering: Steering, dt: f32, field_width: f32) {
        self.body.vel = Vec2::new(steering.direction() * self.speed, 0.0);
        self.body.integrate(dt);
        self.body.clamp_x(field_width);
    }

    /// Only ball contacts count toward the extra paddle's limit
    pub fn on_collision_enter(&mut self, other: EntityKind) -> PaddleOutcome {
        let PaddleKind::Extra { hits } = &mut self.kind else {
            return PaddleOutcome::Ignored;
        };
        if !other.is_ball() {
            return PaddleOutcome::Ignored;
        }
        *hits += 1;
        if *hits >= EXTRA_PADDLE_MAX_HITS {
            PaddleOutcome::Expired
        } else {
            PaddleOutcome::Hit(*hits)
        }
    }
}

/// How a heart disc contact resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscContact {
    /// Caught by the main paddle: restore a life
    Caught,
    /// Reached the death zone
    Missed,
}

/// Falling extra-life pickup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeartDisc {
    pub body: Body,
}

impl HeartDisc {
    pub fn new(center: Vec2, size: Vec2, vel: Vec2) -> Self {
        let mut body = Body::centered(center, size);
        body.vel = vel;
        Self { body }
    }

    /// The only contacts a disc takes part in
    pub fn contact(other: EntityKind) -> Option<DiscContact> {
        match other {
            EntityKind::MainPaddle => Some(DiscContact::Caught),
            EntityKind::DeathZone => Some(DiscContact::Missed),
            _ => None,
        }
    }

    pub fn should_collide_with(other: EntityKind) -> bool {
        Self::contact(other).is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundaryKind {
    Wall,
    DeathZone,
}

/// Static field boundary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boundary {
    pub body: Body,
    pub kind: BoundaryKind,
}

impl Boundary {
    pub fn wall(body: Body) -> Self {
        Self {
            body,
            kind: BoundaryKind::Wall,
        }
    }

    pub fn death_zone(body: Body) -> Self {
        Self {
            body,
            kind: BoundaryKind::DeathZone,
        }
    }
}
