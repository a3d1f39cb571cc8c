use crate::Sdf;
use bevy::prelude::*;
use noise::{NoiseFn, Perlin};

/// A smooth noise field built from six symmetric 2D Perlin samples.
///
/// Sampling every axis pair in both orders keeps the field symmetric under
/// coordinate swaps; the average is mapped to roughly [-0.5, 0.5).
pub struct PerlinSdf {
	perlin: Perlin,
	scale: f32,
}

impl PerlinSdf {
	pub fn new(seed: u32, scale: f32) -> Self {
		Self { perlin: Perlin::new(seed), scale }
	}

	/// One 2D sample remapped to [0, 1].
	fn sample(&self, a: f32, b: f32) -> f32 {
		self.perlin.get([a as f64, b as f64]) as f32 * 0.5 + 0.5
	}
}

impl Sdf for PerlinSdf {
	fn distance(&self, p: Vec3) -> f32 {
		let p = p / self.scale;
		let ab = self.sample(p.x, p.y);
		let bc = self.sample(p.y, p.z);
		let ac = self.sample(p.x, p.z);

		let ba = self.sample(p.y, p.x);
		let cb = self.sample(p.z, p.y);
		let ca = self.sample(p.z, p.x);

		(ab + bc + ac + ba + cb + ca) / 6.0 - 0.5
	}
}
