use crate::Sdf;
use bevy::prelude::*;

/// A half-space SDF: `dot(p, normal)`.
///
/// Points below the plane (against the normal) are inside.
pub struct PlaneSdf {
	pub normal: Vec3,
}

impl PlaneSdf {
	pub fn new(normal: Vec3) -> Self {
		Self { normal }
	}
}

impl Sdf for PlaneSdf {
	fn distance(&self, p: Vec3) -> f32 {
		p.dot(self.normal)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_plane_sides() {
		let plane = PlaneSdf::new(Vec3::Y);
		assert_eq!(plane.distance(Vec3::new(10.0, 2.0, -3.0)), 2.0);
		assert_eq!(plane.distance(Vec3::new(0.0, -2.0, 0.0)), -2.0);
	}
}
