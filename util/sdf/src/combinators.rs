use crate::Sdf;
use bevy::prelude::*;

/// Union of two SDFs - combines them using the minimum distance
pub struct Union<A, B> {
	a: A,
	b: B,
}

impl<A: Sdf, B: Sdf> Union<A, B> {
	pub fn new(a: A, b: B) -> Self {
		Self { a, b }
	}
}

impl<A: Sdf, B: Sdf> Sdf for Union<A, B> {
	fn distance(&self, p: Vec3) -> f32 {
		self.a.distance(p).min(self.b.distance(p))
	}
}

/// Intersection of two SDFs - takes the maximum distance
pub struct Intersection<A, B> {
	a: A,
	b: B,
}

impl<A: Sdf, B: Sdf> Intersection<A, B> {
	pub fn new(a: A, b: B) -> Self {
		Self { a, b }
	}
}

impl<A: Sdf, B: Sdf> Sdf for Intersection<A, B> {
	fn distance(&self, p: Vec3) -> f32 {
		self.a.distance(p).max(self.b.distance(p))
	}
}

/// Difference of two SDFs: `intersection(negate(a), b)`, i.e. B with A
/// carved out.
pub struct Difference<A, B> {
	a: A,
	b: B,
}

impl<A: Sdf, B: Sdf> Difference<A, B> {
	pub fn new(a: A, b: B) -> Self {
		Self { a, b }
	}
}

impl<A: Sdf, B: Sdf> Sdf for Difference<A, B> {
	fn distance(&self, p: Vec3) -> f32 {
		(-self.a.distance(p)).max(self.b.distance(p))
	}
}

/// Pointwise sum of two SDFs.
pub struct Add<A, B> {
	a: A,
	b: B,
}

impl<A: Sdf, B: Sdf> Add<A, B> {
	pub fn new(a: A, b: B) -> Self {
		Self { a, b }
	}
}

impl<A: Sdf, B: Sdf> Sdf for Add<A, B> {
	fn distance(&self, p: Vec3) -> f32 {
		self.a.distance(p) + self.b.distance(p)
	}
}

/// Pointwise difference of two SDFs, the sum analogue of [`Difference`].
pub struct Subtract<A, B> {
	a: A,
	b: B,
}

impl<A: Sdf, B: Sdf> Subtract<A, B> {
	pub fn new(a: A, b: B) -> Self {
		Self { a, b }
	}
}

impl<A: Sdf, B: Sdf> Sdf for Subtract<A, B> {
	fn distance(&self, p: Vec3) -> f32 {
		self.a.distance(p) - self.b.distance(p)
	}
}

/// Additive displacement of one field by another.
pub struct Displace<A, B> {
	field: A,
	displacement: B,
}

impl<A: Sdf, B: Sdf> Displace<A, B> {
	pub fn new(field: A, displacement: B) -> Self {
		Self { field, displacement }
	}
}

impl<A: Sdf, B: Sdf> Sdf for Displace<A, B> {
	fn distance(&self, p: Vec3) -> f32 {
		self.field.distance(p) + self.displacement.distance(p)
	}
}

/// Translate an SDF by a vector
pub struct Translate<A> {
	sdf: A,
	offset: Vec3,
}

impl<A: Sdf> Translate<A> {
	pub fn new(sdf: A, offset: Vec3) -> Self {
		Self { sdf, offset }
	}
}

impl<A: Sdf> Sdf for Translate<A> {
	fn distance(&self, p: Vec3) -> f32 {
		self.sdf.distance(p - self.offset)
	}
}

/// Scale an SDF uniformly
pub struct Scale<A> {
	sdf: A,
	scale: f32,
}

impl<A: Sdf> Scale<A> {
	pub fn new(sdf: A, scale: f32) -> Self {
		Self { sdf, scale }
	}
}

impl<A: Sdf> Sdf for Scale<A> {
	fn distance(&self, p: Vec3) -> f32 {
		// Scale the point, then scale the distance back
		self.sdf.distance(p / self.scale) * self.scale
	}
}

/// Rotate an SDF by euler angles (radians).
///
/// The quaternion is built once at construction and applied to each sample
/// point.
pub struct Rotate<A> {
	sdf: A,
	rotation: Quat,
}

impl<A: Sdf> Rotate<A> {
	pub fn new(sdf: A, euler: Vec3) -> Self {
		Self { sdf, rotation: Quat::from_euler(EulerRot::XYZ, euler.x, euler.y, euler.z) }
	}
}

impl<A: Sdf> Sdf for Rotate<A> {
	fn distance(&self, p: Vec3) -> f32 {
		self.sdf.distance(self.rotation * p)
	}
}

/// Round the edges of an SDF (chamfer)
pub struct Round<A> {
	sdf: A,
	radius: f32,
}

impl<A: Sdf> Round<A> {
	pub fn new(sdf: A, radius: f32) -> Self {
		Self { sdf, radius }
	}
}

impl<A: Sdf> Sdf for Round<A> {
	fn distance(&self, p: Vec3) -> f32 {
		self.sdf.distance(p) - self.radius
	}
}

/// Flip inside and outside.
pub struct Negate<A> {
	sdf: A,
}

impl<A: Sdf> Negate<A> {
	pub fn new(sdf: A) -> Self {
		Self { sdf }
	}
}

impl<A: Sdf> Sdf for Negate<A> {
	fn distance(&self, p: Vec3) -> f32 {
		-self.sdf.distance(p)
	}
}

/// Extrude a field defined in the XZ plane to a solid of half-height
/// `height` along Y.
pub struct Extrude<A> {
	sdf: A,
	height: f32,
}

impl<A: Sdf> Extrude<A> {
	pub fn new(sdf: A, height: f32) -> Self {
		Self { sdf, height }
	}
}

impl<A: Sdf> Sdf for Extrude<A> {
	fn distance(&self, p: Vec3) -> f32 {
		let d = self.sdf.distance(Vec3::new(p.x, 0.0, p.z));
		let w = Vec2::new(d, p.y.abs() - self.height);
		w.max(Vec2::ZERO).length() + w.x.max(w.y).min(0.0)
	}
}

/// Revolve a field defined in the XZ half-plane around the Y axis at
/// distance `offset`.
pub struct Revolve<A> {
	sdf: A,
	offset: f32,
}

impl<A: Sdf> Revolve<A> {
	pub fn new(sdf: A, offset: f32) -> Self {
		Self { sdf, offset }
	}
}

impl<A: Sdf> Sdf for Revolve<A> {
	fn distance(&self, p: Vec3) -> f32 {
		let q = Vec3::new(Vec2::new(p.x, p.z).length() - self.offset, p.y, 0.0);
		self.sdf.distance(q)
	}
}

/// Repeat the field with the given period along every axis.
///
/// Uses the raw `%` remainder: cells at negative coordinates wrap toward
/// zero instead of the cell origin, which mirrors the repeated shape there
/// rather than translating it.
pub struct RepeatDomain<A> {
	sdf: A,
	period: f32,
}

impl<A: Sdf> RepeatDomain<A> {
	pub fn new(sdf: A, period: f32) -> Self {
		Self { sdf, period }
	}
}

impl<A: Sdf> Sdf for RepeatDomain<A> {
	fn distance(&self, p: Vec3) -> f32 {
		let q = Vec3::new(p.x % self.period, p.y % self.period, p.z % self.period);
		self.sdf.distance(q)
	}
}

/// Remap sample coordinates with an arbitrary point transform.
pub struct Remap<A, F> {
	sdf: A,
	f: F,
}

impl<A: Sdf, F: Fn(Vec3) -> Vec3 + Send + Sync> Remap<A, F> {
	pub fn new(sdf: A, f: F) -> Self {
		Self { sdf, f }
	}
}

impl<A: Sdf, F: Fn(Vec3) -> Vec3 + Send + Sync> Sdf for Remap<A, F> {
	fn distance(&self, p: Vec3) -> f32 {
		self.sdf.distance((self.f)(p))
	}
}

/// Apply an arbitrary function to the evaluated distance.
pub struct Map<A, F> {
	sdf: A,
	f: F,
}

impl<A: Sdf, F: Fn(f32) -> f32 + Send + Sync> Map<A, F> {
	pub fn new(sdf: A, f: F) -> Self {
		Self { sdf, f }
	}
}

impl<A: Sdf, F: Fn(f32) -> f32 + Send + Sync> Sdf for Map<A, F> {
	fn distance(&self, p: Vec3) -> f32 {
		(self.f)(self.sdf.distance(p))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{PolygonSdf, SdfExt, SphereSdf};

	#[test]
	fn test_difference_carves_a_from_b() {
		let a = SphereSdf::unit();
		let b = SphereSdf::new(Vec3::ZERO, 2.0);
		let carved = Difference::new(&a, &b);
		// Center of A is removed.
		assert!(carved.distance(Vec3::ZERO) > 0.0);
		// The shell between the two radii stays inside.
		assert!(carved.distance(Vec3::new(1.5, 0.0, 0.0)) < 0.0);
	}

	#[test]
	fn test_add_and_subtract_are_pointwise() {
		let a = SphereSdf::unit();
		let b = SphereSdf::new(Vec3::ZERO, 2.0);
		let p = Vec3::new(3.0, -1.0, 0.5);
		assert_eq!(Add::new(&a, &b).distance(p), a.distance(p) + b.distance(p));
		assert_eq!(Subtract::new(&a, &b).distance(p), a.distance(p) - b.distance(p));
	}

	#[test]
	fn test_displace_matches_sum() {
		let a = SphereSdf::unit();
		let b = SphereSdf::new(Vec3::ZERO, 2.0);
		let p = Vec3::new(0.7, 0.7, 0.7);
		assert_eq!(Displace::new(&a, &b).distance(p), a.distance(p) + b.distance(p));
	}

	#[test]
	fn test_negate_flips_sign() {
		let inverted = SphereSdf::unit().negate();
		assert_eq!(inverted.distance(Vec3::ZERO), 1.0);
		assert_eq!(inverted.distance(Vec3::new(2.0, 0.0, 0.0)), -1.0);
	}

	#[test]
	fn test_rotate_identity_and_quarter_turn() {
		let still = SphereSdf::unit().translate(Vec3::new(2.0, 0.0, 0.0)).rotate(Vec3::ZERO);
		assert_eq!(still.distance(Vec3::new(2.0, 0.0, 0.0)), -1.0);

		let quarter = SphereSdf::unit()
			.translate(Vec3::new(2.0, 0.0, 0.0))
			.rotate(Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0));
		// The sample point is rotated into the translated sphere.
		let d = quarter.distance(Vec3::new(0.0, 0.0, 2.0));
		assert!(d < 0.0, "expected a point inside the rotated sphere, got {d}");
	}

	#[test]
	fn test_round_grows_the_surface() {
		let rounded = SphereSdf::unit().round_edges(0.5);
		assert_eq!(rounded.distance(Vec3::new(1.5, 0.0, 0.0)), 0.0);
	}

	#[test]
	fn test_extruded_polygon_is_bounded_in_y() {
		let prism = PolygonSdf::new(6).extrude(1.0);
		assert!(prism.distance(Vec3::ZERO) < 0.0);
		assert!(prism.distance(Vec3::new(0.0, 3.0, 0.0)) > 0.0);
	}

	#[test]
	fn test_revolved_sphere_is_a_torus() {
		// Revolving a unit sphere at offset 4 produces the (4, 1) torus.
		let revolved = SphereSdf::unit().revolve(4.0);
		let torus = crate::TorusSdf::new(4.0, 1.0);
		for p in [Vec3::new(4.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 6.0), Vec3::new(2.0, 1.0, 2.0)] {
			assert!((revolved.distance(p) - torus.distance(p)).abs() < 1e-5);
		}
	}

	#[test]
	fn test_repeat_domain_tiles_positive_space() {
		let tiled = SphereSdf::unit().translate(Vec3::splat(4.0)).repeat_domain(8.0);
		assert_eq!(tiled.distance(Vec3::splat(4.0)), tiled.distance(Vec3::splat(12.0)));
	}

	#[test]
	fn test_remap_domain_shears_samples() {
		let sheared = SphereSdf::unit().remap_domain(|p| Vec3::new(p.x + p.y, p.y, p.z));
		// (-1, 1, 0) shears onto (0, 1, 0), a point on the unit sphere.
		assert_eq!(sheared.distance(Vec3::new(-1.0, 1.0, 0.0)), 0.0);
		assert_eq!(sheared.distance(Vec3::ZERO), -1.0);
	}

	#[test]
	fn test_map_applies_to_distance() {
		let doubled = SphereSdf::unit().map(|d| d * 2.0);
		assert_eq!(doubled.distance(Vec3::new(2.0, 0.0, 0.0)), 2.0);
	}
}
