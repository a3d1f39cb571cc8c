use bevy::prelude::*;

/// Vertex count above which 16-bit mesh indices overflow.
pub const RENDER_INDEX_LIMIT: usize = 65536;

/// Terminal mesh output: dual vertices in discovery order and a flat list
/// of triangle index triples. Every index is less than the vertex count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurfaceMesh {
	pub vertices: Vec<Vec3>,
	pub indices: Vec<u32>,
}

impl SurfaceMesh {
	pub fn new(vertices: Vec<Vec3>, indices: Vec<u32>) -> Self {
		Self { vertices, indices }
	}

	pub fn is_empty(&self) -> bool {
		self.indices.is_empty()
	}

	pub fn triangle_count(&self) -> usize {
		self.indices.len() / 3
	}

	/// Whether a renderer restricted to 16-bit indices would overflow.
	/// Advisory: the mesh itself is always complete.
	pub fn exceeds_index_limit(&self) -> bool {
		self.vertices.len() > RENDER_INDEX_LIMIT
	}

	/// Build a renderable mesh with recomputed smooth normals.
	pub fn to_mesh(&self) -> Mesh {
		let positions: Vec<[f32; 3]> = self.vertices.iter().map(|v| v.to_array()).collect();
		let mut mesh = Mesh::new(
			bevy::mesh::PrimitiveTopology::TriangleList,
			bevy::asset::RenderAssetUsages::RENDER_WORLD,
		);
		mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
		mesh.insert_indices(bevy::mesh::Indices::U32(self.indices.clone()));
		mesh.compute_smooth_normals();
		mesh
	}
}
