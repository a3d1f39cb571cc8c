use crate::chunk::Chunk;
use crate::ChunkGridError;
use bevy::prelude::*;
use rayon::prelude::*;
use sdf::Sdf;
use serde::{Deserialize, Serialize};
use surface_nets::{Cube, LookupTables, SurfaceMesh};

/// One of the six axis-aligned neighbor directions of a chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
	NegX,
	PosX,
	NegY,
	PosY,
	NegZ,
	PosZ,
}

impl Face {
	pub const ALL: [Face; 6] =
		[Face::NegX, Face::PosX, Face::NegY, Face::PosY, Face::NegZ, Face::PosZ];

	pub fn offset(self) -> IVec3 {
		match self {
			Face::NegX => IVec3::NEG_X,
			Face::PosX => IVec3::X,
			Face::NegY => IVec3::NEG_Y,
			Face::PosY => IVec3::Y,
			Face::NegZ => IVec3::NEG_Z,
			Face::PosZ => IVec3::Z,
		}
	}
}

/// Configuration for a chunk grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChunkGridConfig {
	/// Chunk counts per axis.
	pub chunks_x: u32,
	pub chunks_y: u32,
	pub chunks_z: u32,
	/// Voxel extent of one chunk; also the world-space chunk stride.
	pub chunk_size: u32,
	/// Sampling stride within a chunk. Must divide `chunk_size` evenly.
	pub lod: u32,
	/// Isosurface threshold.
	pub iso_level: f32,
}

impl Default for ChunkGridConfig {
	fn default() -> Self {
		Self { chunks_x: 3, chunks_y: 1, chunks_z: 3, chunk_size: 32, lod: 1, iso_level: 0.0 }
	}
}

impl ChunkGridConfig {
	pub fn validate(&self) -> Result<(), ChunkGridError> {
		if self.chunks_x == 0 || self.chunks_y == 0 || self.chunks_z == 0 {
			return Err(ChunkGridError::EmptyGrid {
				x: self.chunks_x,
				y: self.chunks_y,
				z: self.chunks_z,
			});
		}
		if self.chunk_size == 0 || self.lod == 0 {
			return Err(ChunkGridError::NonPositiveDimensions {
				size: self.chunk_size,
				lod: self.lod,
			});
		}
		if self.chunk_size % self.lod != 0 {
			return Err(ChunkGridError::SizeNotDivisible { size: self.chunk_size, lod: self.lod });
		}
		Ok(())
	}

	fn counts(&self) -> IVec3 {
		IVec3::new(self.chunks_x as i32, self.chunks_y as i32, self.chunks_z as i32)
	}
}

/// A 3D lattice of chunks covering the field, centered on the world origin.
///
/// Adjacent chunks are spaced one chunk size apart while each samples
/// `size/lod + 1` points per axis, so neighbors share exactly one layer of
/// coincident sample points; classification on both sides of a seam sees
/// identical values. Chunks are regenerated independently, so neighbor
/// access is index-based rather than by reference.
pub struct ChunkGrid {
	config: ChunkGridConfig,
	chunks: Vec<Chunk>,
}

impl ChunkGrid {
	/// Sample, classify and mesh every chunk of `field`.
	pub fn generate<S: Sdf + Sync + ?Sized>(
		config: ChunkGridConfig,
		field: &S,
	) -> Result<Self, ChunkGridError> {
		config.validate()?;

		let counts = config.counts();
		let half_extent = counts.as_vec3() * config.chunk_size as f32 / 2.0;

		let mut indices = Vec::with_capacity((counts.x * counts.y * counts.z) as usize);
		for x in 0..counts.x {
			for y in 0..counts.y {
				for z in 0..counts.z {
					indices.push(IVec3::new(x, y, z));
				}
			}
		}

		let chunks = indices
			.into_par_iter()
			.map(|index| {
				let position = index.as_vec3() * config.chunk_size as f32 - half_extent;
				Chunk::generate(
					field,
					index,
					position,
					config.chunk_size,
					config.lod,
					config.iso_level,
				)
			})
			.collect::<Result<Vec<_>, _>>()?;

		let mut grid = Self { config, chunks };
		grid.remesh()?;
		log::debug!(
			"generated {} chunks, {} vertices total",
			grid.chunks.len(),
			grid.chunks.iter().map(|c| c.extractor().vertices().len()).sum::<usize>()
		);
		Ok(grid)
	}

	pub fn config(&self) -> &ChunkGridConfig {
		&self.config
	}

	pub fn chunks(&self) -> &[Chunk] {
		&self.chunks
	}

	/// Resample every chunk from a (possibly changed) field, without
	/// re-extracting. Pair with `remesh` to rebuild surfaces.
	pub fn resample<S: Sdf + Sync + ?Sized>(&mut self, field: &S) -> Result<(), ChunkGridError> {
		self.chunks.par_iter_mut().try_for_each(|chunk| chunk.resample(field))
	}

	/// Re-run extraction against the existing samples: classify every chunk,
	/// then mesh. All chunks finish classification before any chunk meshes,
	/// so seam consumers always read settled neighbor cube data.
	pub fn remesh(&mut self) -> Result<(), ChunkGridError> {
		let tables = LookupTables::get();
		self.chunks.par_iter_mut().try_for_each(|chunk| chunk.classify(tables))?;
		self.chunks.par_iter_mut().try_for_each(|chunk| chunk.mesh())
	}

	/// Full rebuild: resample the field, then re-extract every chunk.
	pub fn regenerate<S: Sdf + Sync + ?Sized>(&mut self, field: &S) -> Result<(), ChunkGridError> {
		self.resample(field)?;
		self.remesh()
	}

	pub fn chunk(&self, index: IVec3) -> Option<&Chunk> {
		let counts = self.config.counts();
		if index.cmplt(IVec3::ZERO).any() || index.cmpge(counts).any() {
			return None;
		}
		let linear = (index.x * counts.y + index.y) * counts.z + index.z;
		self.chunks.get(linear as usize)
	}

	pub fn neighbor(&self, index: IVec3, face: Face) -> Option<&Chunk> {
		self.chunk(index + face.offset())
	}

	/// Extracted cube data of the chunk adjacent to `index` across `face`,
	/// for stitching faces that lie exactly on the shared boundary.
	pub fn neighbor_cubes(&self, index: IVec3, face: Face) -> Option<&[Cube]> {
		self.neighbor(index, face).map(Chunk::cubes)
	}

	/// Per-chunk meshes in lattice-local coordinates, in chunk scan order.
	pub fn surface_meshes(&self) -> Vec<SurfaceMesh> {
		self.chunks.iter().map(Chunk::surface_mesh).collect()
	}
}
