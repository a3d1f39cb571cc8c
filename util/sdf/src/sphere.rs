use crate::Sdf;
use bevy::prelude::*;

/// A sphere SDF
pub struct SphereSdf {
	pub center: Vec3,
	pub radius: f32,
}

impl SphereSdf {
	pub fn new(center: Vec3, radius: f32) -> Self {
		Self { center, radius }
	}

	/// Unit sphere at the origin: `|p| - 1`.
	pub fn unit() -> Self {
		Self::new(Vec3::ZERO, 1.0)
	}
}

impl Sdf for SphereSdf {
	fn distance(&self, p: Vec3) -> f32 {
		(p - self.center).length() - self.radius
	}
}
