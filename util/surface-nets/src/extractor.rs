use crate::mesh::{SurfaceMesh, RENDER_INDEX_LIMIT};
use crate::tables::{LookupTables, CORNER_OFFSETS};
use crate::voxel::VoxelGrid;
use crate::SurfaceNetsError;
use bevy::prelude::*;

/// One classified unit cell of 8 adjacent voxels.
///
/// `vertex_index` is only meaningful when `on_surface` is true; cells the
/// field does not cross keep the zeroed default.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cube {
	pub corner_mask: u8,
	pub edge_mask: u16,
	pub on_surface: bool,
	pub vertex_position: Vec3,
	pub vertex_index: u32,
	/// The corner-0 sample, used for the winding-order decision.
	pub value: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
	Unclassified,
	Classified,
	Meshed,
}

/// Surface-nets extraction over one voxel grid.
///
/// The phase machine is `Unclassified -> Classified -> Meshed`; transitions
/// are one-way but each pass is safe to rerun in full. `classify` places one
/// dual vertex per surface-crossing cube at the centroid of its
/// edge-isosurface intersections; `mesh` connects dual vertices of
/// face-adjacent surface cubes into quads, split into two triangles each.
pub struct SurfaceExtractor {
	iso_level: f32,
	cubes: Vec<Cube>,
	cubes_per_axis: usize,
	vertices: Vec<Vec3>,
	triangles: Vec<u32>,
	phase: Phase,
}

impl SurfaceExtractor {
	pub fn new(iso_level: f32) -> Self {
		Self {
			iso_level,
			cubes: Vec::new(),
			cubes_per_axis: 0,
			vertices: Vec::new(),
			triangles: Vec::new(),
			phase: Phase::Unclassified,
		}
	}

	pub fn iso_level(&self) -> f32 {
		self.iso_level
	}

	pub fn cubes_per_axis(&self) -> usize {
		self.cubes_per_axis
	}

	pub fn cubes(&self) -> &[Cube] {
		&self.cubes
	}

	pub fn cube(&self, x: usize, y: usize, z: usize) -> &Cube {
		&self.cubes[self.cube_index(x, y, z)]
	}

	fn cube_index(&self, x: usize, y: usize, z: usize) -> usize {
		(x * self.cubes_per_axis + y) * self.cubes_per_axis + z
	}

	/// Dual vertices in discovery (scan) order.
	pub fn vertices(&self) -> &[Vec3] {
		&self.vertices
	}

	/// Flat triangle index triples into `vertices`.
	pub fn triangles(&self) -> &[u32] {
		&self.triangles
	}

	/// Whether the vertex buffer exceeds the 16-bit index range of a
	/// typical renderer. Advisory only; the mesh is still emitted in full.
	pub fn vertex_capacity_exceeded(&self) -> bool {
		self.vertices.len() > RENDER_INDEX_LIMIT
	}

	/// Classify every unit cell of the grid, assigning dual vertices to
	/// surface-crossing cells in scan order (x outer, y middle, z inner).
	pub fn classify(
		&mut self,
		grid: &VoxelGrid,
		tables: &LookupTables,
	) -> Result<(), SurfaceNetsError> {
		let cells = grid.cells_per_axis();
		self.cubes_per_axis = cells;
		self.cubes.clear();
		self.cubes.resize(cells * cells * cells, Cube::default());
		self.vertices.clear();
		self.triangles.clear();

		let mut vertex_index = 0u32;
		for x in 0..cells {
			for y in 0..cells {
				for z in 0..cells {
					let mut corner_voxels = [crate::Voxel { position: Vec3::ZERO, value: 0.0 }; 8];
					let mut corner_mask = 0u8;
					for (i, (cx, cy, cz)) in CORNER_OFFSETS.iter().enumerate() {
						let voxel = *grid.voxel(x + cx, y + cy, z + cz);
						corner_voxels[i] = voxel;
						if voxel.value >= self.iso_level {
							corner_mask |= 1 << i;
						}
					}

					// all corners inside or all outside: no surface here
					if corner_mask == 0 || corner_mask == 0xff {
						continue;
					}

					let edge_mask = tables.intersections[corner_mask as usize];

					let mut vertex = Vec3::ZERO;
					let mut crossings = 0u32;
					for (i, edge) in tables.edges.iter().enumerate() {
						if edge_mask & (1 << i) == 0 {
							continue;
						}
						crossings += 1;

						let a = corner_voxels[edge.i];
						let b = corner_voxels[edge.j];
						let t = (self.iso_level - a.value) / (b.value - a.value);
						vertex += a.position.lerp(b.position, t);
					}

					if crossings == 0 {
						return Err(SurfaceNetsError::CorruptIntersectionTable {
							mask: corner_mask,
						});
					}

					vertex /= crossings as f32;

					let index = self.cube_index(x, y, z);
					self.cubes[index] = Cube {
						corner_mask,
						edge_mask,
						on_surface: true,
						vertex_position: vertex,
						vertex_index,
						value: corner_voxels[0].value,
					};
					self.vertices.push(vertex);
					vertex_index += 1;
				}
			}
		}

		self.phase = Phase::Classified;
		Ok(())
	}

	/// Triangulate interior faces between face-adjacent surface cubes.
	///
	/// Cubes on the low-index boundary cannot look back to a previous
	/// neighbor and are skipped entirely; chunked callers sample a one-voxel
	/// overlap so those faces belong to the neighboring chunk's interior.
	pub fn mesh(&mut self) -> Result<(), SurfaceNetsError> {
		if self.phase == Phase::Unclassified {
			return Err(SurfaceNetsError::NotClassified);
		}

		self.triangles.clear();
		let cells = self.cubes_per_axis;
		for x in 1..cells {
			for y in 1..cells {
				for z in 1..cells {
					let cube = *self.cube(x, y, z);
					if !cube.on_surface {
						continue;
					}

					for i in 0..3 {
						if cube.edge_mask & (1 << i) == 0 {
							continue;
						}

						// The quad straddling the crossed corner-0 edge in
						// direction i, gathered from the three cubes one
						// step back along the orthogonal axes.
						let (v1, v2, v3) = match i {
							0 => (
								self.cube(x, y - 1, z).vertex_index,
								self.cube(x, y - 1, z - 1).vertex_index,
								self.cube(x, y, z - 1).vertex_index,
							),
							1 => (
								self.cube(x - 1, y, z).vertex_index,
								self.cube(x - 1, y - 1, z).vertex_index,
								self.cube(x, y - 1, z).vertex_index,
							),
							_ => (
								self.cube(x, y, z - 1).vertex_index,
								self.cube(x - 1, y, z - 1).vertex_index,
								self.cube(x - 1, y, z).vertex_index,
							),
						};
						let v0 = cube.vertex_index;

						// Winding follows the sign of this cube's corner-0
						// sample so recomputed normals face outward.
						if cube.value < self.iso_level {
							self.triangles.extend_from_slice(&[v0, v1, v2]);
							self.triangles.extend_from_slice(&[v0, v2, v3]);
						} else {
							self.triangles.extend_from_slice(&[v0, v2, v1]);
							self.triangles.extend_from_slice(&[v0, v3, v2]);
						}
					}
				}
			}
		}

		if self.vertex_capacity_exceeded() {
			log::warn!(
				"surface mesh has {} vertices, exceeding the 16-bit index limit of {}",
				self.vertices.len(),
				RENDER_INDEX_LIMIT
			);
		}

		self.phase = Phase::Meshed;
		Ok(())
	}

	/// Copy the extracted buffers into a standalone mesh.
	pub fn surface_mesh(&self) -> SurfaceMesh {
		SurfaceMesh::new(self.vertices.clone(), self.triangles.clone())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::VoxelGrid;
	use sdf::{PlaneSdf, SdfExt, SphereSdf};
	use std::collections::HashMap;

	fn sphere_grid() -> VoxelGrid {
		let field = SphereSdf::unit().scale(4.0);
		VoxelGrid::sample(&field, Vec3::new(-5.0, -5.0, -5.0), 10, 1).unwrap()
	}

	fn extract(grid: &VoxelGrid) -> SurfaceExtractor {
		let mut extractor = SurfaceExtractor::new(0.0);
		extractor.classify(grid, LookupTables::get()).unwrap();
		extractor.mesh().unwrap();
		extractor
	}

	/// Count how many triangles share each undirected vertex-pair edge.
	fn edge_counts(triangles: &[u32]) -> HashMap<(u32, u32), usize> {
		let mut counts = HashMap::new();
		for tri in triangles.chunks(3) {
			for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
				let key = (a.min(b), a.max(b));
				*counts.entry(key).or_insert(0) += 1;
			}
		}
		counts
	}

	#[test]
	fn test_sphere_mesh_is_closed() {
		let grid = sphere_grid();
		let extractor = extract(&grid);

		assert!(!extractor.vertices().is_empty());
		assert!(!extractor.triangles().is_empty());
		assert_eq!(extractor.triangles().len() % 6, 0);

		for (edge, count) in edge_counts(extractor.triangles()) {
			assert_eq!(count, 2, "edge {edge:?} is shared by {count} triangles");
		}
	}

	#[test]
	fn test_sphere_vertices_stay_near_the_surface() {
		let grid = sphere_grid();
		let extractor = extract(&grid);

		// Sphere center is lattice (5, 5, 5); radius 4 plus a cell diagonal.
		let center = Vec3::splat(5.0);
		let limit = 4.0 + 3.0_f32.sqrt();
		for v in extractor.vertices() {
			assert!((*v - center).length() <= limit, "vertex {v:?} outside {limit}");
		}
	}

	#[test]
	fn test_all_triangle_indices_are_in_range() {
		let grid = sphere_grid();
		let extractor = extract(&grid);
		let count = extractor.vertices().len() as u32;
		assert!(extractor.triangles().iter().all(|&i| i < count));
	}

	#[test]
	fn test_classify_and_mesh_are_idempotent() {
		let grid = sphere_grid();
		let tables = LookupTables::get();
		let mut extractor = SurfaceExtractor::new(0.0);

		extractor.classify(&grid, tables).unwrap();
		extractor.mesh().unwrap();
		let vertices = extractor.vertices().to_vec();
		let triangles = extractor.triangles().to_vec();

		extractor.classify(&grid, tables).unwrap();
		extractor.mesh().unwrap();
		assert_eq!(extractor.vertices(), vertices.as_slice());
		assert_eq!(extractor.triangles(), triangles.as_slice());
	}

	#[test]
	fn test_boundary_cubes_never_emit_triangles() {
		// A plane crossing only within the x = 0 cube layer: classification
		// finds surface cubes, but all of them sit on the low-index
		// boundary, so the mesh pass emits nothing.
		let field = PlaneSdf::new(Vec3::X).translate(Vec3::new(-4.5, 0.0, 0.0));
		let grid = VoxelGrid::sample(&field, Vec3::new(-5.0, -5.0, -5.0), 4, 1).unwrap();
		let extractor = extract(&grid);

		assert!(!extractor.vertices().is_empty());
		assert!(extractor.triangles().is_empty());
	}

	#[test]
	fn test_mesh_requires_classification() {
		let mut extractor = SurfaceExtractor::new(0.0);
		assert_eq!(extractor.mesh(), Err(SurfaceNetsError::NotClassified));
	}

	#[test]
	fn test_empty_field_produces_no_surface() {
		// Field is positive everywhere in the sampled volume.
		let field = SphereSdf::unit();
		let grid = VoxelGrid::sample(&field, Vec3::new(10.0, 10.0, 10.0), 4, 1).unwrap();
		let extractor = extract(&grid);
		assert!(extractor.vertices().is_empty());
		assert!(extractor.triangles().is_empty());
		assert!(extractor.cubes().iter().all(|c| !c.on_surface));
	}
}
