//! Error types for DTerrain.
//!
//! Only setup and configuration report errors. Pixel-level operations on a
//! built world answer with plain booleans; requests that fall off the grid are
//! expected and are not errors.

use thiserror::Error;

/// Top-level error type for DTerrain operations.
#[derive(Debug, Error)]
pub enum DTerrainError {
    /// World/chunk setup errors
    #[error("World error: {0}")]
    World(#[from] WorldError),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// World and chunk grid errors.
#[derive(Debug, Error)]
pub enum WorldError {
    /// Grid has no chunks along an axis
    #[error("Invalid grid dimensions {chunks_x}x{chunks_y}")]
    InvalidGrid {
        /// Chunks along X
        chunks_x: u32,
        /// Chunks along Y
        chunks_y: u32,
    },

    /// Chunk pixel size is zero along an axis
    #[error("Invalid chunk size {width}x{height}")]
    InvalidChunkSize {
        /// Chunk width in pixels
        width: u32,
        /// Chunk height in pixels
        height: u32,
    },

    /// Surface is wider or taller than `i32` pixel coordinates can address
    #[error(
        "Grid of {chunks_x}x{chunks_y} chunks of {chunk_size_x}x{chunk_size_y} px exceeds the pixel coordinate range"
    )]
    GridTooLarge {
        /// Chunks along X
        chunks_x: u32,
        /// Chunks along Y
        chunks_y: u32,
        /// Chunk width in pixels
        chunk_size_x: u32,
        /// Chunk height in pixels
        chunk_size_y: u32,
    },

    /// Source image cannot be split into the requested grid
    #[error("Image {width}x{height} is too small for a {chunks_x}x{chunks_y} grid")]
    ImageTooSmall {
        /// Image width
        width: u32,
        /// Image height
        height: u32,
        /// Chunks along X
        chunks_x: u32,
        /// Chunks along Y
        chunks_y: u32,
    },

    /// Supplied chunk list does not fill the grid
    #[error("Chunk count mismatch: expected {expected}, got {actual}")]
    ChunkCountMismatch {
        /// Chunks required by the grid
        expected: usize,
        /// Chunks supplied
        actual: usize,
    },

    /// Chunk does not have the grid's pixel dimensions
    #[error("Chunk {index} is {width}x{height}, expected {expected_width}x{expected_height}")]
    ChunkSizeMismatch {
        /// Column-major chunk index
        index: usize,
        /// Actual width
        width: u32,
        /// Actual height
        height: u32,
        /// Grid chunk width
        expected_width: u32,
        /// Grid chunk height
        expected_height: u32,
    },
}

/// Configuration loading/saving errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// TOML parse failure
    #[error("Failed to parse config: {0}")]
    Parse(String),

    /// TOML encode failure
    #[error("Failed to encode config: {0}")]
    Encode(String),

    /// Underlying file error
    #[error("Config IO error: {0}")]
    Io(#[from] std::io::Error),
}
