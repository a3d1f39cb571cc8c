use crate::ChunkGridError;
use bevy::prelude::*;
use sdf::Sdf;
use surface_nets::{Cube, LookupTables, SurfaceExtractor, SurfaceMesh, VoxelGrid};

/// One independently sampled and meshed sub-volume of the field.
///
/// A chunk owns its voxel samples and its extractor exclusively. It is
/// created whole at generation time and fully replaced on regeneration;
/// nothing is patched incrementally, so consumers never observe partial
/// state.
pub struct Chunk {
	position: Vec3,
	index: IVec3,
	size: u32,
	lod: u32,
	voxels: VoxelGrid,
	extractor: SurfaceExtractor,
}

impl Chunk {
	pub(crate) fn generate<S: Sdf + ?Sized>(
		field: &S,
		index: IVec3,
		position: Vec3,
		size: u32,
		lod: u32,
		iso_level: f32,
	) -> Result<Self, ChunkGridError> {
		let voxels = VoxelGrid::sample(field, position, size, lod)?;
		Ok(Self { position, index, size, lod, voxels, extractor: SurfaceExtractor::new(iso_level) })
	}

	/// World origin of the chunk volume.
	pub fn position(&self) -> Vec3 {
		self.position
	}

	/// Integer lattice coordinate within the owning grid.
	pub fn index(&self) -> IVec3 {
		self.index
	}

	pub fn size(&self) -> u32 {
		self.size
	}

	pub fn lod(&self) -> u32 {
		self.lod
	}

	pub fn voxels(&self) -> &VoxelGrid {
		&self.voxels
	}

	pub fn extractor(&self) -> &SurfaceExtractor {
		&self.extractor
	}

	/// Extracted cube data, for neighbor lookups during seam stitching.
	pub fn cubes(&self) -> &[Cube] {
		self.extractor.cubes()
	}

	/// Cube containing the given local voxel offset, accounting for lod.
	pub fn cube_at(&self, offset: UVec3) -> Option<&Cube> {
		let cell = offset / self.lod;
		let cells = self.extractor.cubes_per_axis() as u32;
		if cell.x >= cells || cell.y >= cells || cell.z >= cells {
			return None;
		}
		Some(self.extractor.cube(cell.x as usize, cell.y as usize, cell.z as usize))
	}

	/// Map a lattice-local point (mesh vertices, voxel positions) to world
	/// space.
	pub fn to_world(&self, lattice: Vec3) -> Vec3 {
		self.position + lattice * self.lod as f32
	}

	/// Replace the voxel samples from a (possibly changed) field. The
	/// extracted surface is stale afterwards until the next remesh.
	pub(crate) fn resample<S: Sdf + ?Sized>(&mut self, field: &S) -> Result<(), ChunkGridError> {
		self.voxels = VoxelGrid::sample(field, self.position, self.size, self.lod)?;
		Ok(())
	}

	pub(crate) fn classify(&mut self, tables: &LookupTables) -> Result<(), ChunkGridError> {
		self.extractor.classify(&self.voxels, tables)?;
		Ok(())
	}

	pub(crate) fn mesh(&mut self) -> Result<(), ChunkGridError> {
		self.extractor.mesh()?;
		Ok(())
	}

	/// The chunk's extracted mesh in lattice-local coordinates.
	pub fn surface_mesh(&self) -> SurfaceMesh {
		self.extractor.surface_mesh()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use sdf::{SdfExt, SphereSdf};

	fn test_chunk(lod: u32) -> Chunk {
		let field = SphereSdf::unit().scale(3.0);
		let mut chunk = Chunk::generate(
			&field,
			IVec3::ZERO,
			Vec3::new(-4.0, -4.0, -4.0),
			8,
			lod,
			0.0,
		)
		.unwrap();
		chunk.classify(LookupTables::get()).unwrap();
		chunk.mesh().unwrap();
		chunk
	}

	#[test]
	fn test_cube_lookup_accounts_for_lod() {
		let chunk = test_chunk(2);
		assert_eq!(chunk.extractor().cubes_per_axis(), 4);
		// Voxel offsets 0 and 1 land in cell 0; offset 2 in cell 1.
		assert_eq!(
			chunk.cube_at(UVec3::new(1, 1, 1)).map(|c| c.vertex_index),
			chunk.cube_at(UVec3::ZERO).map(|c| c.vertex_index)
		);
		assert!(chunk.cube_at(UVec3::new(8, 0, 0)).is_none());
	}

	#[test]
	fn test_to_world_applies_position_and_stride() {
		let chunk = test_chunk(2);
		assert_eq!(chunk.to_world(Vec3::ZERO), Vec3::new(-4.0, -4.0, -4.0));
		assert_eq!(chunk.to_world(Vec3::new(4.0, 0.0, 0.0)), Vec3::new(4.0, -4.0, -4.0));
	}

	#[test]
	fn test_chunk_meshes_a_contained_sphere() {
		let chunk = test_chunk(1);
		let mesh = chunk.surface_mesh();
		assert!(!mesh.is_empty());
		assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));
	}
}
