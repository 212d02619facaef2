//! The chunked world: routes pixel operations to the chunks that own them.
//!
//! [`World`] is the only component that knows how chunks sit next to each
//! other. Every request arrives in global pixel coordinates, is resolved
//! through the [`ChunkGrid`], and is forwarded to one or more chunks in their
//! local coordinates. Requests that land outside the grid are silently
//! dropped; running destruction off the edge of the map is routine.

use dterrain_common::{Color, Interval, LocalCoord, PixelCoord, Shape, WorldError};
use glam::{IVec2, Vec2};
use tracing::{debug, info, trace};

use crate::chunk::Chunk;
use crate::grid::{ChunkGrid, Resolved};

/// A fixed grid of chunks forming one destructible surface.
///
/// The chunk list is built once and never grows, shrinks, or reorders.
#[derive(Debug)]
pub struct World<C> {
    /// Grid geometry
    grid: ChunkGrid,
    /// Chunks in column-major order
    chunks: Vec<C>,
    /// Pixels per scene unit
    pixels_per_unit: u32,
}

impl<C: Chunk> World<C> {
    /// Builds a world from a complete, column-major list of chunks.
    pub fn from_chunks(
        grid: ChunkGrid,
        chunks: Vec<C>,
        pixels_per_unit: u32,
    ) -> Result<Self, WorldError> {
        if chunks.len() != grid.chunk_count() {
            return Err(WorldError::ChunkCountMismatch {
                expected: grid.chunk_count(),
                actual: chunks.len(),
            });
        }
        let expected = (grid.chunk_size_x(), grid.chunk_size_y());
        if let Some((index, chunk)) = chunks
            .iter()
            .enumerate()
            .find(|(_, c)| c.size() != expected)
        {
            let (width, height) = chunk.size();
            return Err(WorldError::ChunkSizeMismatch {
                index,
                width,
                height,
                expected_width: expected.0,
                expected_height: expected.1,
            });
        }

        info!(
            "World created: {}x{} chunks of {}x{} px ({} ppu)",
            grid.chunks_x(),
            grid.chunks_y(),
            grid.chunk_size_x(),
            grid.chunk_size_y(),
            pixels_per_unit
        );

        Ok(Self {
            grid,
            chunks,
            pixels_per_unit: pixels_per_unit.max(1),
        })
    }

    /// Returns the grid geometry.
    #[must_use]
    pub const fn grid(&self) -> &ChunkGrid {
        &self.grid
    }

    /// Returns the pixels-per-unit scale.
    #[must_use]
    pub const fn pixels_per_unit(&self) -> u32 {
        self.pixels_per_unit
    }

    /// Returns a chunk by column-major index.
    #[must_use]
    pub fn chunk(&self, index: usize) -> Option<&C> {
        self.chunks.get(index)
    }

    /// All chunks, column-major.
    #[must_use]
    pub fn chunks(&self) -> &[C] {
        &self.chunks
    }

    /// Mutable access for the rendering side, which clears update flags.
    pub fn chunks_mut(&mut self) -> &mut [C] {
        &mut self.chunks
    }

    /// Indices of chunks waiting for a visual refresh.
    pub fn pending_updates(&self) -> impl Iterator<Item = usize> + '_ {
        self.chunks
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_update_pending())
            .map(|(i, _)| i)
    }

    /// Resolves a pixel to `(chunk index, local coordinate)`.
    fn locate(&self, pixel: PixelCoord) -> Option<(usize, LocalCoord)> {
        let Resolved { chunk, local } = self.grid.resolve(pixel);
        match self.grid.index_of(chunk) {
            Some(index) => Some((index, local)),
            None => {
                debug!("Pixel {:?} resolves to chunk {:?} outside the grid", pixel, chunk);
                None
            },
        }
    }

    /// Destroys a single pixel.
    ///
    /// The owning chunk is flagged for refresh even if the pixel was already
    /// empty. Returns the chunk's own answer, or false off the grid.
    pub fn destroy_pixel_at(&mut self, pixel: impl Into<PixelCoord>) -> bool {
        let Some((index, local)) = self.locate(pixel.into()) else {
            return false;
        };
        let Some(chunk) = self.chunks.get_mut(index) else {
            return false;
        };
        chunk.request_update();
        chunk.destroy_pixel_at(local)
    }

    /// Stamps one pixel with an outline color. No-op off the grid.
    pub fn make_outline(&mut self, pixel: impl Into<PixelCoord>, color: Color) {
        let Some((index, local)) = self.locate(pixel.into()) else {
            return;
        };
        if let Some(chunk) = self.chunks.get_mut(index) {
            chunk.request_update();
            chunk.make_outline(local, color);
        }
    }

    /// Occupancy query. False off the grid.
    #[must_use]
    pub fn filled_at(&self, pixel: impl Into<PixelCoord>) -> bool {
        self.locate(pixel.into())
            .and_then(|(index, local)| self.chunks.get(index).map(|c| c.filled_at(local)))
            .unwrap_or(false)
    }

    /// Chunk steps a ranged destruction at `pixel` would visit.
    ///
    /// See [`ColumnWalk`] for the stepping and termination rules.
    #[must_use]
    pub fn column_walk(&self, pixel: impl Into<PixelCoord>, height: i32) -> ColumnWalk {
        ColumnWalk::new(self.grid, pixel.into(), height)
    }

    /// Destroys one column of pixels, walking through as many vertically
    /// stacked chunks as the extent requires.
    ///
    /// Rows are `pixel.y + range`, restated in each visited chunk. A chunk is
    /// flagged for refresh only when it reports a change. Returns true if any
    /// chunk changed.
    pub fn destroy_range(
        &mut self,
        pixel: impl Into<PixelCoord>,
        range: Interval,
        height: i32,
    ) -> bool {
        let mut changed = false;
        for step in self.column_walk(pixel, height) {
            let Some(chunk) = self.chunks.get_mut(step.index) else {
                break;
            };
            trace!(
                "Range {:?} -> chunk {} at local {:?}",
                range,
                step.index,
                step.local
            );
            if chunk.destroy_range_at(step.local, range) {
                chunk.request_update();
                changed = true;
            }
        }
        changed
    }

    /// Destroys a whole shape anchored at `pixel`.
    ///
    /// Column `k` becomes a ranged destruction at `pixel.x + k`; each column
    /// resolves its own chunks. Returns true if any pixel changed.
    pub fn destroy_shape(&mut self, pixel: impl Into<PixelCoord>, shape: &Shape) -> bool {
        let anchor = pixel.into();
        let mut changed = false;
        for (k, range) in shape.columns().iter().enumerate() {
            // Columns past the end of the coordinate range are off the grid
            let Some(column) = anchor.checked_offset(k as i32, 0) else {
                break;
            };
            changed |= self.destroy_range(column, *range, shape.height());
        }
        changed
    }

    /// Pixel-by-pixel shape destruction that draws an outline rim.
    ///
    /// The first and last columns are stamped with the outline color, as are
    /// the top and bottom row of every column; everything else is destroyed.
    ///
    /// It touches the same pixels as [`World::destroy_shape`], but the
    /// occupancy afterwards differs on the rim: outlined pixels carry the
    /// shape's outline color and therefore stay filled. Only the interior
    /// ends up empty in both. Rows beyond the `i32` range are skipped.
    #[deprecated(note = "walks every pixel; use `destroy_shape`")]
    pub fn destroy_shape_per_pixel(&mut self, pixel: impl Into<PixelCoord>, shape: &Shape) {
        let anchor = pixel.into();
        let outline = shape.outline();
        let last = shape.width().saturating_sub(1);
        for (k, range) in shape.columns().iter().enumerate() {
            let Some(column) = anchor.checked_offset(k as i32, 0) else {
                break;
            };
            let rim_column = k == 0 || k == last;
            let at = |row: i32| column.checked_offset(0, row);

            if let Some(top) = at(range.min()) {
                self.make_outline(top, outline);
            }
            for row in range.min().saturating_add(1)..range.max() {
                let Some(p) = at(row) else {
                    continue;
                };
                if rim_column {
                    self.make_outline(p, outline);
                } else {
                    self.destroy_pixel_at(p);
                }
            }
            if let Some(bottom) = at(range.max()) {
                self.make_outline(bottom, outline);
            }
        }
    }

    /// Converts a scene-space coordinate into a pixel coordinate.
    #[must_use]
    pub fn scene_coord_to_world(&self, coord: f32) -> i32 {
        (coord * self.pixels_per_unit as f32) as i32
    }

    /// Converts a scene position into a pixel position.
    ///
    /// The world is assumed to sit at the scene origin.
    #[must_use]
    pub fn scene_to_world(&self, scene: Vec2) -> IVec2 {
        IVec2::new(
            self.scene_coord_to_world(scene.x),
            self.scene_coord_to_world(scene.y),
        )
    }

    /// Scene position of a chunk's centre (its pivot).
    #[must_use]
    pub fn chunk_scene_position(&self, index: usize) -> Option<Vec2> {
        let coord = self.grid.coord_of(index)?;
        let ppu = self.pixels_per_unit as f32;
        Some(Vec2::new(
            coord.x as f32 * self.grid.chunk_size_x() as f32 / ppu,
            coord.y as f32 * self.grid.chunk_size_y() as f32 / ppu,
        ))
    }

    /// Scene position a camera should look at to frame the whole surface.
    #[must_use]
    pub fn camera_focus(&self) -> Vec2 {
        let ppu = self.pixels_per_unit as f32;
        Vec2::new(
            self.grid.pixel_width() as f32 / ppu / 2.0,
            self.grid.pixel_height() as f32 / ppu / 2.0,
        )
    }
}

/// One chunk visited by a ranged destruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnStep {
    /// Column-major chunk index
    pub index: usize,
    /// Anchor restated in that chunk's local space
    pub local: LocalCoord,
}

/// Iterator over the chunks a vertical range destruction visits.
///
/// Step `k` addresses the chunk `k` rows further down the same grid column,
/// with the anchor row shifted up by `k` chunk heights. The walk stops at the
/// first step where the chunk leaves the grid, or where
/// `(k - 1) * chunk_size_y > height` (the covered span plus one chunk of
/// slack already reaches the requested height).
#[derive(Debug, Clone)]
pub struct ColumnWalk {
    grid: ChunkGrid,
    start: Resolved,
    height: i64,
    k: i32,
    done: bool,
}

impl ColumnWalk {
    fn new(grid: ChunkGrid, pixel: PixelCoord, height: i32) -> Self {
        Self {
            grid,
            start: grid.resolve(pixel),
            height: i64::from(height),
            k: 0,
            done: false,
        }
    }
}

impl Iterator for ColumnWalk {
    type Item = ColumnStep;

    fn next(&mut self) -> Option<ColumnStep> {
        if self.done {
            return None;
        }
        let sy = i64::from(self.grid.chunk_size_y());
        let k = self.k;

        let within_height = (i64::from(k) - 1) * sy <= self.height;
        let index = self.grid.index_of(self.start.chunk.step_down(k));

        match index {
            Some(index) if within_height => {
                self.k += 1;
                Some(ColumnStep {
                    index,
                    local: LocalCoord::new(
                        self.start.local.x,
                        self.start.local.y - k * sy as i32,
                    ),
                })
            },
            _ => {
                self.done = true;
                None
            },
        }
    }
}

impl std::iter::FusedIterator for ColumnWalk {}
