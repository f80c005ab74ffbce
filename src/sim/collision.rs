//! Contact detection and response
//!
//! Stands in for the physics engine: finds overlapping pairs, reports the
//! contact normal and leaves every reaction to the entities themselves.

use glam::Vec2;

use super::body::Body;
use super::entities::HeartDisc;
use super::registry::{EntityId, EntityKind, EntityRegistry, Layer};

/// Two entities that overlap this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Registered first
    pub a: EntityId,
    pub a_kind: EntityKind,
    pub b: EntityId,
    pub b_kind: EntityKind,
    /// Unit normal pointing from `b` toward `a`
    pub normal: Vec2,
}

impl Contact {
    /// Order-independent key for enter/stay tracking
    pub fn key(&self) -> (EntityId, EntityId) {
        if self.a <= self.b {
            (self.a, self.b)
        } else {
            (self.b, self.a)
        }
    }
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Collision filter between two registered entities
pub fn should_collide(a: (EntityKind, Layer), b: (EntityKind, Layer)) -> bool {
    if a.1 == Layer::StaticObjects && b.1 == Layer::StaticObjects {
        return false;
    }
    if a.0 == EntityKind::HeartDisc && !HeartDisc::should_collide_with(b.0) {
        return false;
    }
    if b.0 == EntityKind::HeartDisc && !HeartDisc::should_collide_with(a.0) {
        return false;
    }
    true
}

/// Normal of the axis with the smallest overlap, pointing from `b` toward `a`
pub fn contact_normal(a: &Body, b: &Body) -> Vec2 {
    let overlap_x = a.max().x.min(b.max().x) - a.min().x.max(b.min().x);
    let overlap_y = a.max().y.min(b.max().y) - a.min().y.max(b.min().y);
    let delta = a.center() - b.center();

    if overlap_x < overlap_y {
        Vec2::new(if delta.x >= 0.0 { 1.0 } else { -1.0 }, 0.0)
    } else {
        Vec2::new(0.0, if delta.y >= 0.0 { 1.0 } else { -1.0 })
    }
}

/// All overlapping pairs that pass the filter, in registration order
pub fn detect_contacts(registry: &EntityRegistry) -> Vec<Contact> {
    let slots: Vec<_> = registry.iter().collect();
    let mut contacts = Vec::new();

    for (i, a) in slots.iter().enumerate() {
        let a_kind = a.entity.kind();
        for b in &slots[i + 1..] {
            let b_kind = b.entity.kind();
            if !should_collide((a_kind, a.layer), (b_kind, b.layer)) {
                continue;
            }
            let (a_body, b_body) = (a.entity.body(), b.entity.body());
            if !a_body.overlaps(b_body) {
                continue;
            }
            contacts.push(Contact {
                a: a.id,
                a_kind,
                b: b.id,
                b_kind,
                normal: contact_normal(a_body, b_body),
            });
        }
    }

    contacts
}
