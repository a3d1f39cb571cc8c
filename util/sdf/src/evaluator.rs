use crate::Sdf;
use bevy::prelude::*;

/// Terminal evaluable form of a composed field.
///
/// By default `evaluate` returns the raw signed distance. `clamped()` opts
/// in to clamping the result to [-1, 1]; this changes step-size semantics
/// for any ray-marching consumer, so it is never applied implicitly.
pub struct Evaluator<S> {
	sdf: S,
	clamp: bool,
}

impl<S: Sdf> Evaluator<S> {
	pub fn new(sdf: S) -> Self {
		Self { sdf, clamp: false }
	}

	/// Clamp evaluated distances to [-1, 1].
	pub fn clamped(mut self) -> Self {
		self.clamp = true;
		self
	}

	pub fn is_clamped(&self) -> bool {
		self.clamp
	}

	pub fn evaluate(&self, p: Vec3) -> f32 {
		let d = self.sdf.distance(p);
		if self.clamp {
			d.clamp(-1.0, 1.0)
		} else {
			d
		}
	}
}

impl<S: Sdf> Sdf for Evaluator<S> {
	fn distance(&self, p: Vec3) -> f32 {
		self.evaluate(p)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{SdfExt, SphereSdf};

	#[test]
	fn test_unclamped_by_default() {
		let eval = SphereSdf::unit().evaluator();
		assert!(!eval.is_clamped());
		assert_eq!(eval.evaluate(Vec3::new(5.0, 0.0, 0.0)), 4.0);
	}

	#[test]
	fn test_clamped_restricts_range() {
		let eval = SphereSdf::new(Vec3::ZERO, 3.0).evaluator().clamped();
		assert_eq!(eval.evaluate(Vec3::new(10.0, 0.0, 0.0)), 1.0);
		assert_eq!(eval.evaluate(Vec3::ZERO), -1.0);
		assert_eq!(eval.evaluate(Vec3::new(3.5, 0.0, 0.0)), 0.5);
	}
}
