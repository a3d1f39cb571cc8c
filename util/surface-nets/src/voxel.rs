use crate::SurfaceNetsError;
use bevy::prelude::*;
use sdf::Sdf;

/// One field sample: lattice-local position and the signed distance there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Voxel {
	pub position: Vec3,
	pub value: f32,
}

/// A cubic lattice of field samples over a chunk's local volume.
///
/// `sample` evaluates the field at `origin + lattice * lod` and stores the
/// unscaled lattice position, so extracted vertices come out in lattice
/// units; the consumer applies the chunk transform (translate by chunk
/// position, scale by lod).
#[derive(Debug, Clone, PartialEq)]
pub struct VoxelGrid {
	samples: Vec<Voxel>,
	samples_per_axis: usize,
}

impl VoxelGrid {
	/// Sample `field` over a `size`-unit volume at stride `lod`.
	///
	/// Produces `size / lod + 1` samples per axis: one extra layer beyond
	/// the cells so every cell has 8 corners. `size` must divide evenly by
	/// `lod`.
	pub fn sample<S: Sdf + ?Sized>(
		field: &S,
		origin: Vec3,
		size: u32,
		lod: u32,
	) -> Result<Self, SurfaceNetsError> {
		if size == 0 || lod == 0 {
			return Err(SurfaceNetsError::NonPositiveDimensions { size, lod });
		}
		if size % lod != 0 {
			return Err(SurfaceNetsError::SizeNotDivisible { size, lod });
		}

		let samples_per_axis = (size / lod) as usize + 1;
		let mut samples = Vec::with_capacity(samples_per_axis.pow(3));
		for x in 0..samples_per_axis {
			for y in 0..samples_per_axis {
				for z in 0..samples_per_axis {
					let lattice = Vec3::new(x as f32, y as f32, z as f32);
					let value = field.distance(origin + lattice * lod as f32);
					samples.push(Voxel { position: lattice, value });
				}
			}
		}

		Ok(Self { samples, samples_per_axis })
	}

	pub fn samples_per_axis(&self) -> usize {
		self.samples_per_axis
	}

	/// Unit cells per axis; one less than the sample count.
	pub fn cells_per_axis(&self) -> usize {
		self.samples_per_axis - 1
	}

	pub fn voxel(&self, x: usize, y: usize, z: usize) -> &Voxel {
		&self.samples[(x * self.samples_per_axis + y) * self.samples_per_axis + z]
	}
}
