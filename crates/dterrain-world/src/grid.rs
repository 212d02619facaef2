//! Chunk grid geometry and global-to-local coordinate resolution.

use dterrain_common::{ChunkCoord, LocalCoord, PixelCoord, WorldError};

/// Result of resolving a global pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    /// Chunk that owns the pixel (may lie outside the grid)
    pub chunk: ChunkCoord,
    /// The pixel restated in that chunk's local space
    pub local: LocalCoord,
}

/// Dimensions of a fixed grid of equally sized chunks.
///
/// Chunks are stored column-major: index = `x * chunks_y + y`, so the index
/// grows fastest along the vertical axis.
///
/// Chunk `(i, j)` is centred on global pixel `(i * chunk_size_x, j * chunk_size_y)`
/// and owns `[i*sx - sx/2, i*sx - sx/2 + sx)` horizontally (likewise
/// vertically). This matches chunks placed with a centred pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkGrid {
    chunks_x: u32,
    chunks_y: u32,
    chunk_size_x: u32,
    chunk_size_y: u32,
}

impl ChunkGrid {
    /// Creates a grid description.
    ///
    /// The whole surface must fit in `i32` pixel coordinates along both axes.
    pub fn new(
        chunks_x: u32,
        chunks_y: u32,
        chunk_size_x: u32,
        chunk_size_y: u32,
    ) -> Result<Self, WorldError> {
        if chunks_x == 0 || chunks_y == 0 {
            return Err(WorldError::InvalidGrid { chunks_x, chunks_y });
        }
        if chunk_size_x == 0 || chunk_size_y == 0 {
            return Err(WorldError::InvalidChunkSize {
                width: chunk_size_x,
                height: chunk_size_y,
            });
        }
        let limit = i32::MAX as u64;
        if u64::from(chunks_x) * u64::from(chunk_size_x) > limit
            || u64::from(chunks_y) * u64::from(chunk_size_y) > limit
        {
            return Err(WorldError::GridTooLarge {
                chunks_x,
                chunks_y,
                chunk_size_x,
                chunk_size_y,
            });
        }
        Ok(Self {
            chunks_x,
            chunks_y,
            chunk_size_x,
            chunk_size_y,
        })
    }

    /// Chunks along X.
    #[must_use]
    pub const fn chunks_x(&self) -> u32 {
        self.chunks_x
    }

    /// Chunks along Y.
    #[must_use]
    pub const fn chunks_y(&self) -> u32 {
        self.chunks_y
    }

    /// Width of every chunk in pixels.
    #[must_use]
    pub const fn chunk_size_x(&self) -> u32 {
        self.chunk_size_x
    }

    /// Height of every chunk in pixels.
    #[must_use]
    pub const fn chunk_size_y(&self) -> u32 {
        self.chunk_size_y
    }

    /// Total number of chunks.
    #[must_use]
    pub const fn chunk_count(&self) -> usize {
        self.chunks_x as usize * self.chunks_y as usize
    }

    /// Width of the whole surface in pixels.
    #[must_use]
    pub const fn pixel_width(&self) -> u32 {
        self.chunks_x * self.chunk_size_x
    }

    /// Height of the whole surface in pixels.
    #[must_use]
    pub const fn pixel_height(&self) -> u32 {
        self.chunks_y * self.chunk_size_y
    }

    /// Resolves a global pixel into its owning chunk and local coordinate.
    ///
    /// Adds half a chunk before the floor division and compensates for it in
    /// the local offset, so the local coordinate always lands in
    /// `[0, chunk_size)`. Works for every `i32` coordinate: the biased sum is
    /// taken in `i64`, and both results fit back into `i32`.
    #[must_use]
    pub fn resolve(&self, pixel: PixelCoord) -> Resolved {
        let (xchunk, xlocal) = split_axis(pixel.x, self.chunk_size_x);
        let (ychunk, ylocal) = split_axis(pixel.y, self.chunk_size_y);
        Resolved {
            chunk: ChunkCoord::new(xchunk, ychunk),
            local: LocalCoord::new(xlocal, ylocal),
        }
    }

    /// Inverse of [`ChunkGrid::resolve`].
    ///
    /// `None` when the pixel would lie outside the `i32` coordinate range.
    #[must_use]
    pub fn to_global(&self, chunk: ChunkCoord, local: LocalCoord) -> Option<PixelCoord> {
        let x = join_axis(chunk.x, local.x, self.chunk_size_x)?;
        let y = join_axis(chunk.y, local.y, self.chunk_size_y)?;
        Some(PixelCoord::new(x, y))
    }

    /// Checks if a chunk coordinate lies inside the grid.
    #[must_use]
    pub const fn contains(&self, chunk: ChunkCoord) -> bool {
        chunk.x >= 0
            && chunk.y >= 0
            && (chunk.x as u32) < self.chunks_x
            && (chunk.y as u32) < self.chunks_y
    }

    /// Column-major index of a chunk, or `None` outside the grid.
    ///
    /// Both axes are checked separately, so a row past the bottom of one
    /// column never aliases into the top of the next column.
    #[must_use]
    pub const fn index_of(&self, chunk: ChunkCoord) -> Option<usize> {
        if !self.contains(chunk) {
            return None;
        }
        Some(chunk.x as usize * self.chunks_y as usize + chunk.y as usize)
    }

    /// Chunk coordinate for a column-major index.
    #[must_use]
    pub const fn coord_of(&self, index: usize) -> Option<ChunkCoord> {
        if index >= self.chunk_count() {
            return None;
        }
        let cy = self.chunks_y as usize;
        Some(ChunkCoord::new((index / cy) as i32, (index % cy) as i32))
    }
}

/// Biased floor split of one axis into `(chunk, local)`.
fn split_axis(p: i32, size: u32) -> (i32, i32) {
    let s = i64::from(size);
    let h = s / 2;
    let chunk = (i64::from(p) + h).div_euclid(s);
    let local = i64::from(p) - chunk * s + h;
    (chunk as i32, local as i32)
}

fn join_axis(chunk: i32, local: i32, size: u32) -> Option<i32> {
    let s = i64::from(size);
    i32::try_from(i64::from(chunk) * s + i64::from(local) - s / 2).ok()
}
