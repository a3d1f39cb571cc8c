pub mod extractor;
pub mod mesh;
pub mod tables;
pub mod voxel;

pub use extractor::{Cube, SurfaceExtractor};
pub use mesh::{SurfaceMesh, RENDER_INDEX_LIMIT};
pub use tables::{Edge, LookupTables, CORNER_OFFSETS, CUBE_EDGES};
pub use voxel::{Voxel, VoxelGrid};

use thiserror::Error;

/// Errors raised by grid sampling and surface extraction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SurfaceNetsError {
	#[error("voxel grid dimensions must be positive (size {size}, lod {lod})")]
	NonPositiveDimensions { size: u32, lod: u32 },

	#[error("voxel grid size {size} is not divisible by lod {lod}")]
	SizeNotDivisible { size: u32, lod: u32 },

	#[error("intersection table produced no crossings for corner mask {mask:#04x}")]
	CorruptIntersectionTable { mask: u8 },

	#[error("surface mesh requested before cube classification")]
	NotClassified,
}
