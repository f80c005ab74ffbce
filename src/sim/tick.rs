//! Fixed timestep simulation tick
//!
//! One pass per frame: paddles, movement, contacts, win check. Every entity is
//! visited in registration order and contact reactions run synchronously,
//! including chain reactions started from inside a brick's strategy.

use std::collections::HashSet;
use std::rc::Rc;

use glam::Vec2;

use super::collision::detect_contacts;
use super::entities::{BallKind, BallOutcome, DiscContact, HeartDisc, PaddleOutcome, Steering};
use super::registry::{Collider, Entity, EntityId};
use super::state::{GameEvent, GameState};
use crate::audio::SoundEffect;

/// Keys the simulation reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    /// Debug: end the level as a win
    ForceWin,
}

/// Input state for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub force_win: bool,
}

impl TickInput {
    pub fn is_pressed(&self, key: Key) -> bool {
        match key {
            Key::Left => self.left,
            Key::Right => self.right,
            Key::ForceWin => self.force_win,
        }
    }

    pub fn steering(&self) -> Steering {
        Steering {
            left: self.is_pressed(Key::Left),
            right: self.is_pressed(Key::Right),
        }
    }

    /// Demo input: keep the main paddle under the main ball
    pub fn autopilot(state: &GameState) -> Self {
        let ball_x = match state.registry.get(state.main_ball) {
            Some(Entity::Ball(ball)) => ball.body.center().x,
            _ => return Self::default(),
        };
        let paddle_x = match state.registry.get(state.main_paddle) {
            Some(Entity::Paddle(paddle)) => paddle.body.center().x,
            _ => return Self::default(),
        };

        // Dead band so the paddle doesn't jitter
        let dead_band = 5.0;
        Self {
            left: ball_x < paddle_x - dead_band,
            right: ball_x > paddle_x + dead_band,
            force_win: false,
        }
    }
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.is_over() {
        return;
    }

    if input.is_pressed(Key::ForceWin) {
        log::info!("Forced win");
        state.finish(true);
        return;
    }

    state.frame += 1;

    let steering = input.steering();
    let field_width = state.field_size.x;
    for slot in state.registry.iter_mut() {
        match &mut slot.entity {
            Entity::Paddle(paddle) => paddle.steer(steering, dt, field_width),
            Entity::Ball(ball) => ball.body.integrate(dt),
            Entity::HeartDisc(disc) => disc.body.integrate(dt),
            Entity::Brick(_) | Entity::Boundary(_) => {}
        }
    }

    resolve_contacts(state);

    if state.bricks.is_cleared() {
        state.finish(true);
    }
}

/// Report contacts that started this frame to both participants
fn resolve_contacts(state: &mut GameState) {
    let contacts = detect_contacts(&state.registry);
    let current: HashSet<_> = contacts.iter().map(|c| c.key()).collect();
    let previous = std::mem::replace(&mut state.contacts, current);

    for contact in contacts {
        if previous.contains(&contact.key()) {
            continue;
        }
        let a = Collider {
            id: contact.a,
            kind: contact.a_kind,
        };
        let b = Collider {
            id: contact.b,
            kind: contact.b_kind,
        };
        on_collision_enter(state, contact.a, b, contact.normal);
        on_collision_enter(state, contact.b, a, -contact.normal);
    }
}

/// Deliver one contact to `target`
///
/// `normal` points from `other` toward `target`. Entities removed earlier in
/// the frame receive nothing.
pub fn on_collision_enter(state: &mut GameState, target: EntityId, other: Collider, normal: Vec2) {
    match state.registry.get_mut(target) {
        None => {}
        Some(Entity::Brick(brick)) => {
            let brick = Rc::clone(brick);
            brick.on_hit(Some(other), state);
        }
        Some(Entity::Ball(ball)) => {
            let kind = ball.kind;
            match (ball.on_collision_enter(other.kind, normal), kind) {
                (BallOutcome::Bounced, _) => {
                    state.emit(GameEvent::Sound(SoundEffect::BallCollision));
                }
                (BallOutcome::FellOut, BallKind::Main) => state.lose_life(),
                (BallOutcome::FellOut, BallKind::Extra) => {
                    state.registry.remove(target);
                    log::debug!("extra ball {} fell out", target);
                }
            }
        }
        Some(Entity::Paddle(paddle)) => match paddle.on_collision_enter(other.kind) {
            PaddleOutcome::Ignored => {}
            PaddleOutcome::Hit(hits) => log::debug!("extra paddle hit {} times", hits),
            PaddleOutcome::Expired => {
                state.registry.remove(target);
                state.extra_paddle.release(target);
                log::debug!("extra paddle {} expired", target);
                state.emit(GameEvent::ExtraPaddleExpired);
            }
        },
        Some(Entity::HeartDisc(_)) => {
            let Some(contact) = HeartDisc::contact(other.kind) else {
                log::warn!("heart disc {} got unfiltered contact {:?}", target, other.kind);
                return;
            };
            if contact == DiscContact::Caught {
                state.gain_life();
            }
            state.registry.remove(target);
        }
        Some(Entity::Boundary(_)) => {}
    }
}
