use crate::Sdf;
use bevy::prelude::*;
use std::f32::consts::PI;

/// A regular polygon SDF in the XZ plane with unit circumradius, extended
/// infinitely along Y. Combine with `extrude` for a solid prism.
pub struct PolygonSdf {
	sides: u32,
	/// Half the angle subtended by one edge.
	sector: f32,
}

impl PolygonSdf {
	pub fn new(sides: u32) -> Self {
		let sides = sides.max(3);
		Self { sides, sector: PI / sides as f32 }
	}

	pub fn sides(&self) -> u32 {
		self.sides
	}
}

impl Sdf for PolygonSdf {
	fn distance(&self, p: Vec3) -> f32 {
		let q = Vec2::new(p.x, p.z);
		let len = q.length();
		// Fold the point into the first edge sector.
		let angle = q.y.atan2(q.x).rem_euclid(2.0 * self.sector) - self.sector;
		let local = Vec2::new(len * angle.cos(), (len * angle.sin()).abs());

		let apothem = self.sector.cos();
		let half_edge = self.sector.sin();
		if local.y > half_edge {
			// Past the edge endpoint: distance to the corner.
			(local - Vec2::new(apothem, half_edge)).length()
		} else {
			local.x - apothem
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_square_apothem() {
		// A 4-gon with unit circumradius has apothem cos(pi/4).
		let square = PolygonSdf::new(4);
		let apothem = (PI / 4.0).cos();
		assert!((square.distance(Vec3::ZERO) + apothem).abs() < 1e-6);
		assert!(square.distance(Vec3::new(2.0, 0.0, 0.0)) > 0.0);
	}

	#[test]
	fn test_corner_and_edge_midpoint_are_on_surface() {
		for sides in [3, 5, 6, 8] {
			let polygon = PolygonSdf::new(sides);
			// Corners sit on the +X axis at the circumradius.
			assert!(polygon.distance(Vec3::X).abs() < 1e-5);
			// Edge midpoints sit at the apothem, half a sector away.
			let a = PI / sides as f32;
			let mid = Vec3::new(a.cos(), 0.0, a.sin()) * a.cos();
			assert!(polygon.distance(mid).abs() < 1e-5);
		}
	}

	#[test]
	fn test_height_is_ignored() {
		let polygon = PolygonSdf::new(6);
		let p = Vec3::new(0.3, 0.0, -0.2);
		assert_eq!(polygon.distance(p), polygon.distance(p + Vec3::Y * 40.0));
	}
}
