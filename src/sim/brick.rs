//! Grid bricks
//!
//! A brick knows its grid cell, owns exactly one strategy chain and carries an
//! `exploded` flag that only ever flips from false to true.

use std::cell::Cell;

use glam::Vec2;

use super::body::Body;
use super::registry::{Collider, EntityId};
use super::state::GameState;
use super::strategy::CollisionStrategy;
use crate::consts::{BRICK_HEIGHT, BRICK_SPACING, BRICKS_START_Y};

#[derive(Debug)]
pub struct Brick {
    id: EntityId,
    row: u32,
    col: u32,
    body: Body,
    exploded: Cell<bool>,
    strategy: Box<dyn CollisionStrategy>,
}

impl Brick {
    pub fn new(
        id: EntityId,
        row: u32,
        col: u32,
        body: Body,
        strategy: Box<dyn CollisionStrategy>,
    ) -> Self {
        Self {
            id,
            row,
            col,
            body,
            exploded: Cell::new(false),
            strategy,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn row(&self) -> u32 {
        self.row
    }

    pub fn col(&self) -> u32 {
        self.col
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn center(&self) -> Vec2 {
        self.body.center()
    }

    pub fn strategy(&self) -> &dyn CollisionStrategy {
        self.strategy.as_ref()
    }

    pub fn has_exploded(&self) -> bool {
        self.exploded.get()
    }

    /// Set the exploded flag; true only for the call that flipped it
    pub fn mark_exploded(&self) -> bool {
        !self.exploded.replace(true)
    }

    /// Run this brick's chain
    ///
    /// `collider` is None when the hit comes from a neighbour's explosion
    /// rather than a physical contact.
    pub fn on_hit(&self, collider: Option<Collider>, state: &mut GameState) {
        self.strategy.on_collision(self, collider, state);
    }

    /// Orthogonal neighbour cells: up, down, left, right
    pub fn neighbors(&self) -> impl Iterator<Item = (u32, u32)> + use<> {
        let (row, col) = (self.row, self.col);
        [
            row.checked_sub(1).map(|r| (r, col)),
            row.checked_add(1).map(|r| (r, col)),
            col.checked_sub(1).map(|c| (row, c)),
            col.checked_add(1).map(|c| (row, c)),
        ]
        .into_iter()
        .flatten()
    }
}

/// Placement of bricks across the top of the field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub bricks_per_row: u32,
    pub rows: u32,
    pub field_width: f32,
}

impl GridLayout {
    pub fn new(bricks_per_row: u32, rows: u32, field_width: f32) -> Self {
        Self {
            bricks_per_row,
            rows,
            field_width,
        }
    }

    /// Width that fits `bricks_per_row` bricks with equal spacing
    pub fn brick_width(&self) -> f32 {
        let n = self.bricks_per_row as f32;
        (self.field_width - BRICK_SPACING * (n + 1.0)) / n
    }

    pub fn brick_body(&self, row: u32, col: u32) -> Body {
        let width = self.brick_width();
        let x = BRICK_SPACING + col as f32 * (width + BRICK_SPACING);
        let y = BRICKS_START_Y + row as f32 * (BRICK_HEIGHT + BRICK_SPACING);
        Body::new(Vec2::new(x, y), Vec2::new(width, BRICK_HEIGHT))
    }

    /// Every cell, row by row
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32)> + use<> {
        let per_row = self.bricks_per_row;
        (0..self.rows).flat_map(move |row| (0..per_row).map(move |col| (row, col)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::strategy::BasicRemoval;

    fn brick(row: u32, col: u32) -> Brick {
        let body = Body::new(Vec2::ZERO, Vec2::new(80.0, BRICK_HEIGHT));
        Brick::new(EntityId(1), row, col, body, Box::new(BasicRemoval))
    }

    #[test]
    fn test_exploded_flag_is_monotonic() {
        let brick = brick(1, 1);
        assert!(!brick.has_exploded());
        assert!(brick.mark_exploded());
        assert!(!brick.mark_exploded());
        assert!(brick.has_exploded());
    }

    #[test]
    fn test_neighbors_order_and_edges() {
        let inner: Vec<_> = brick(2, 3).neighbors().collect();
        assert_eq!(inner, vec![(1, 3), (3, 3), (2, 2), (2, 4)]);

        let corner: Vec<_> = brick(0, 0).neighbors().collect();
        assert_eq!(corner, vec![(1, 0), (0, 1)]);
    }

    #[test]
    fn test_grid_layout() {
        let layout = GridLayout::new(8, 7, 700.0);
        // (700 - 5 * 9) / 8
        assert!((layout.brick_width() - 81.875).abs() < 1e-4);

        let first = layout.brick_body(0, 0);
        assert_eq!(first.pos, Vec2::new(5.0, 50.0));

        let last = layout.brick_body(6, 7);
        assert!((last.max().x - 695.0).abs() < 1e-3);
        assert_eq!(last.pos.y, 50.0 + 6.0 * 20.0);

        assert_eq!(layout.cells().count(), 56);
        assert_eq!(layout.cells().nth(9), Some((1, 1)));
    }
}
