use crate::Sdf;
use bevy::prelude::*;

/// A torus SDF lying in the XZ plane, centered at the origin.
pub struct TorusSdf {
	pub major_radius: f32,
	pub minor_radius: f32,
}

impl TorusSdf {
	pub fn new(major_radius: f32, minor_radius: f32) -> Self {
		Self { major_radius, minor_radius }
	}
}

impl Sdf for TorusSdf {
	fn distance(&self, p: Vec3) -> f32 {
		let q = Vec2::new(Vec2::new(p.x, p.z).length() - self.major_radius, p.y);
		q.length() - self.minor_radius
	}
}
