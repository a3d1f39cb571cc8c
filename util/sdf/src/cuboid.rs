use crate::Sdf;
use bevy::prelude::*;

/// An axis-aligned box SDF, defined by its half extents.
pub struct CuboidSdf {
	pub half_extents: Vec3,
}

impl CuboidSdf {
	pub fn new(half_extents: Vec3) -> Self {
		Self { half_extents }
	}
}

impl Sdf for CuboidSdf {
	fn distance(&self, p: Vec3) -> f32 {
		let d = p.abs() - self.half_extents;
		d.max(Vec3::ZERO).length() + d.x.max(d.y.max(d.z)).min(0.0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_box_faces_and_interior() {
		let cuboid = CuboidSdf::new(Vec3::splat(1.0));
		assert_eq!(cuboid.distance(Vec3::new(3.0, 0.0, 0.0)), 2.0);
		assert_eq!(cuboid.distance(Vec3::ZERO), -1.0);
		assert_eq!(cuboid.distance(Vec3::new(1.0, 0.0, 0.0)), 0.0);
	}

	#[test]
	fn test_box_corner_distance() {
		let cuboid = CuboidSdf::new(Vec3::splat(1.0));
		let d = cuboid.distance(Vec3::new(2.0, 2.0, 2.0));
		assert!((d - 3.0_f32.sqrt()).abs() < 1e-6);
	}
}
