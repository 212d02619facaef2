//! Destruction footprints.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::interval::Interval;

/// Footprint of a destructive action, anchored at a point.
///
/// Column `k` holds the rows (relative to the anchor row) destroyed at
/// horizontal offset `k` from the anchor. `height` bounds how far the world
/// walks vertically through chunks when applying a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    columns: Vec<Interval>,
    height: i32,
    outline: Color,
}

impl Shape {
    /// Creates a shape from its columns, vertical extent, and outline color.
    #[must_use]
    pub fn new(columns: Vec<Interval>, height: i32, outline: Color) -> Self {
        Self {
            columns,
            height,
            outline,
        }
    }

    /// Per-column row intervals, index = horizontal offset from the anchor.
    #[must_use]
    pub fn columns(&self) -> &[Interval] {
        &self.columns
    }

    /// Interval for column `k`, if the shape is that wide.
    #[must_use]
    pub fn column(&self, k: usize) -> Option<Interval> {
        self.columns.get(k).copied()
    }

    /// Horizontal footprint in pixels.
    #[must_use]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Vertical extent used to bound multi-chunk walks.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Color stamped on the rim by outline-drawing destruction.
    #[must_use]
    pub const fn outline(&self) -> Color {
        self.outline
    }
}
