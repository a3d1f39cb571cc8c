pub mod chunk;
pub mod grid;

pub use chunk::Chunk;
pub use grid::{ChunkGrid, ChunkGridConfig, Face};

use surface_nets::SurfaceNetsError;
use thiserror::Error;

/// Errors raised while building or regenerating a chunk grid.
///
/// Configuration problems fail at construction, before any sampling.
#[derive(Debug, Error, PartialEq)]
pub enum ChunkGridError {
	#[error("chunk counts must be positive on every axis (got {x} x {y} x {z})")]
	EmptyGrid { x: u32, y: u32, z: u32 },

	#[error("chunk dimensions must be positive (size {size}, lod {lod})")]
	NonPositiveDimensions { size: u32, lod: u32 },

	#[error("chunk size {size} is not divisible by lod {lod}")]
	SizeNotDivisible { size: u32, lod: u32 },

	#[error(transparent)]
	Extraction(#[from] SurfaceNetsError),
}
