pub mod combinators;
pub mod cuboid;
pub mod evaluator;
pub mod perlin;
pub mod plane;
pub mod polygon;
pub mod sphere;
pub mod torus;

pub use combinators::{
	Add, Difference, Displace, Extrude, Intersection, Map, Negate, Remap, RepeatDomain, Revolve,
	Rotate, Round, Scale, Subtract, Translate, Union,
};
pub use cuboid::CuboidSdf;
pub use evaluator::Evaluator;
pub use perlin::PerlinSdf;
pub use plane::PlaneSdf;
pub use polygon::PolygonSdf;
pub use sphere::SphereSdf;
pub use torus::TorusSdf;

use bevy::prelude::*;

/// Trait for Signed Distance Fields
/// Returns the signed distance from a point to the surface:
/// - Negative: inside the surface
/// - Zero: on the surface
/// - Positive: outside the surface
pub trait Sdf: Send + Sync {
	fn distance(&self, p: Vec3) -> f32;
}

impl<S: Sdf + ?Sized> Sdf for &S {
	fn distance(&self, p: Vec3) -> f32 {
		(**self).distance(p)
	}
}

impl<S: Sdf + ?Sized> Sdf for Box<S> {
	fn distance(&self, p: Vec3) -> f32 {
		(**self).distance(p)
	}
}

impl<S: Sdf + ?Sized> Sdf for std::sync::Arc<S> {
	fn distance(&self, p: Vec3) -> f32 {
		(**self).distance(p)
	}
}

/// Chainable builder surface over [`Sdf`].
///
/// Every method wraps `self` in a new combinator and returns it; nothing is
/// mutated in place, so a field can be captured once and reused across many
/// sample points.
pub trait SdfExt: Sdf + Sized {
	/// Translate the field by `offset`.
	fn translate(self, offset: Vec3) -> Translate<Self> {
		Translate::new(self, offset)
	}

	/// Rotate the field by euler angles (radians).
	fn rotate(self, euler: Vec3) -> Rotate<Self> {
		Rotate::new(self, euler)
	}

	/// Scale the field uniformly. Preserves true distance under uniform scale.
	fn scale(self, factor: f32) -> Scale<Self> {
		Scale::new(self, factor)
	}

	/// Round the edges of the field by `radius`.
	fn round_edges(self, radius: f32) -> Round<Self> {
		Round::new(self, radius)
	}

	/// Extrude a field defined in the XZ plane to the given half-height.
	fn extrude(self, height: f32) -> Extrude<Self> {
		Extrude::new(self, height)
	}

	/// Revolve a field defined in the XZ half-plane around the Y axis.
	fn revolve(self, offset: f32) -> Revolve<Self> {
		Revolve::new(self, offset)
	}

	/// Flip inside and outside.
	fn negate(self) -> Negate<Self> {
		Negate::new(self)
	}

	/// Apply an arbitrary function to the evaluated distance.
	fn map<F: Fn(f32) -> f32 + Send + Sync>(self, f: F) -> Map<Self, F> {
		Map::new(self, f)
	}

	/// Repeat the field with the given period along every axis.
	fn repeat_domain(self, period: f32) -> RepeatDomain<Self> {
		RepeatDomain::new(self, period)
	}

	/// Remap sample coordinates with an arbitrary point transform.
	fn remap_domain<F: Fn(Vec3) -> Vec3 + Send + Sync>(self, f: F) -> Remap<Self, F> {
		Remap::new(self, f)
	}

	/// Perturb the field additively by another field.
	fn displace_by<B: Sdf>(self, other: B) -> Displace<Self, B> {
		Displace::new(self, other)
	}

	/// Terminal evaluable form of the field.
	fn evaluator(self) -> Evaluator<Self> {
		Evaluator::new(self)
	}
}

impl<S: Sdf + Sized> SdfExt for S {}
