// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The 3-component vector.

#[cfg(feature = "serde")]
use bincode::{Decode, Encode};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{array_from_slice, scaled_length, Vec2, Vec4};
use crate::error::MathError;
use crate::scalar::{self, FLOAT_EPSILON};
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

/// A 3-dimensional vector with `f32` components.
///
/// Commonly used to represent points, directions or scale factors.
///
/// # Examples
///
/// ```
/// use linal_core::Vec3;
///
/// let mut v = Vec3::new(1.0, 2.0, 3.0);
/// v[2] = 4.0;
/// assert_eq!(v.z(), 4.0);
/// assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize, Encode, Decode),
    serde(transparent)
)]
#[repr(C)]
pub struct Vec3 {
    m: [f32; 3],
}

impl Vec3 {
    /// A vector with all components set to `0.0`.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// A vector with all components set to `1.0`.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    /// The unit vector pointing along the positive X-axis.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    /// The unit vector pointing along the positive Y-axis.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    /// The unit vector pointing along the positive Z-axis.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a new `Vec3` with the specified components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { m: [x, y, z] }
    }

    /// Creates a vector from `[x, y, z]`.
    #[inline]
    pub const fn from_array(m: [f32; 3]) -> Self {
        Self { m }
    }

    /// Returns the components as `[x, y, z]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        self.m
    }

    /// Borrows the flat component storage.
    #[inline]
    pub const fn as_array(&self) -> &[f32; 3] {
        &self.m
    }

    /// Mutably borrows the flat component storage.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [f32; 3] {
        &mut self.m
    }

    /// The x component.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.m[0]
    }

    /// The y component.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.m[1]
    }

    /// The z component.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.m[2]
    }

    /// Sets the x component.
    #[inline]
    pub fn set_x(&mut self, x: f32) {
        self.m[0] = x;
    }

    /// Sets the y component.
    #[inline]
    pub fn set_y(&mut self, y: f32) {
        self.m[1] = y;
    }

    /// Sets the z component.
    #[inline]
    pub fn set_z(&mut self, z: f32) {
        self.m[2] = z;
    }

    /// Overwrites all three components.
    #[inline]
    pub fn set(&mut self, x: f32, y: f32, z: f32) {
        self.m = [x, y, z];
    }

    /// Sets every component to `0.0`.
    #[inline]
    pub fn set_zero(&mut self) {
        *self = Self::ZERO;
    }

    /// Flips the sign of every component in place.
    #[inline]
    pub fn negate(&mut self) {
        for c in &mut self.m {
            *c = -*c;
        }
    }

    /// Replaces every component with its reciprocal. `1 / 0` yields infinity.
    #[inline]
    pub fn invert(&mut self) {
        for c in &mut self.m {
            *c = 1.0 / *c;
        }
    }

    /// Returns the component-wise reciprocal.
    #[inline]
    pub fn inverted(self) -> Self {
        let mut v = self;
        v.invert();
        v
    }

    /// Multiplies each component by the matching component of `s`, in place.
    #[inline]
    pub fn scale(&mut self, s: Self) {
        for (c, f) in self.m.iter_mut().zip(s.m) {
            *c *= f;
        }
    }

    /// Multiplies every component by `f`, in place.
    #[inline]
    pub fn scale_by(&mut self, f: f32) {
        for c in &mut self.m {
            *c *= f;
        }
    }

    /// Returns `true` if every component pair is IEEE-equal.
    #[inline]
    pub fn exact_eq(&self, other: Self) -> bool {
        self.m[0] == other.m[0] && self.m[1] == other.m[1] && self.m[2] == other.m[2]
    }

    /// Returns `false` only if some component differs from `other` by more than `eps`.
    ///
    /// NaN differences do not count, so the comparison stays reflexive for
    /// vectors holding infinities.
    #[inline]
    pub fn epsilon_eq(&self, other: Self, eps: f32) -> bool {
        !self
            .m
            .iter()
            .zip(other.m)
            .any(|(a, b)| scalar::abs(a - b) > eps)
    }

    /// Calculates the dot product of this vector and another.
    #[inline]
    pub fn dot(&self, rhs: Self) -> f32 {
        self.m[0] * rhs.m[0] + self.m[1] * rhs.m[1] + self.m[2] * rhs.m[2]
    }

    /// Computes the right-handed cross product of this vector and another.
    ///
    /// The result is perpendicular to both inputs.
    #[inline]
    pub fn cross(&self, rhs: Self) -> Self {
        Self::new(
            self.m[1] * rhs.m[2] - self.m[2] * rhs.m[1],
            self.m[2] * rhs.m[0] - self.m[0] * rhs.m[2],
            self.m[0] * rhs.m[1] - self.m[1] * rhs.m[0],
        )
    }

    /// Calculates the squared length (magnitude) of the vector.
    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.dot(*self)
    }

    /// Calculates the length (magnitude) of the vector.
    ///
    /// Stays finite for any finite components, even when `length_squared`
    /// overflows to infinity.
    #[inline]
    pub fn length(&self) -> f32 {
        scaled_length(&self.m)
    }

    /// Euclidean distance between this vector and `other`.
    #[inline]
    pub fn distance(&self, other: Self) -> f32 {
        (*self - other).length()
    }

    /// Returns `sqrt(distance(other))`, not the squared distance.
    #[inline]
    pub fn squared_distance(&self, other: Self) -> f32 {
        scalar::sqrt(self.distance(other))
    }

    /// Scales the vector to unit length in place and returns its original length.
    ///
    /// A vector of length exactly `0.0` becomes [`Vec3::X`] and `0.0` is returned.
    pub fn normalize(&mut self) -> f32 {
        let len = self.length();
        if len == 0.0 {
            log::trace!("normalize() on a zero-length Vec3, substituting {:?}", Self::X);
            *self = Self::X;
        } else {
            for c in &mut self.m {
                *c /= len;
            }
        }
        len
    }

    /// Returns a unit-length copy, see [`Vec3::normalize`].
    #[inline]
    pub fn normalized(self) -> Self {
        let mut v = self;
        v.normalize();
        v
    }

    /// Cosine of the angle between the two vectors. NaN for zero-length input.
    #[inline]
    pub fn cosine_angle(&self, other: Self) -> f32 {
        self.dot(other) / (self.length() * other.length())
    }

    /// Angle between the two vectors in radians, in `[0, π]`.
    #[inline]
    pub fn angle(&self, other: Self) -> f32 {
        scalar::acos(self.cosine_angle(other).clamp(-1.0, 1.0))
    }

    /// Clamps each component into `[min, max]` in place, lower bound first.
    pub fn clamp(&mut self, min: Self, max: Self) {
        for ((v, lo), hi) in self.m.iter_mut().zip(min.m).zip(max.m) {
            if *v < lo {
                *v = lo;
            }
            if *v > hi {
                *v = hi;
            }
        }
    }

    /// Performs an unclamped linear interpolation, `end * t + start * (1 - t)`.
    #[inline]
    pub fn lerp(start: Self, end: Self, t: f32) -> Self {
        end * t + start * (1.0 - t)
    }

    /// Drops `z`.
    #[inline]
    pub const fn to_vec2(self) -> Vec2 {
        Vec2::new(self.m[0], self.m[1])
    }

    /// Widens to a `Vec4` with `w = 0`.
    #[inline]
    pub const fn to_vec4(self) -> Vec4 {
        Vec4::new(self.m[0], self.m[1], self.m[2], 0.0)
    }
}

// --- Conversions ---

impl From<[f32; 3]> for Vec3 {
    #[inline]
    fn from(m: [f32; 3]) -> Self {
        Self::from_array(m)
    }
}

impl From<Vec3> for [f32; 3] {
    #[inline]
    fn from(v: Vec3) -> Self {
        v.m
    }
}

impl From<Vec2> for Vec3 {
    #[inline]
    fn from(v: Vec2) -> Self {
        v.to_vec3()
    }
}

impl TryFrom<&[f32]> for Vec3 {
    type Error = MathError;

    fn try_from(slice: &[f32]) -> Result<Self, Self::Error> {
        array_from_slice(slice).map(Self::from_array)
    }
}

impl approx::AbsDiffEq for Vec3 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        FLOAT_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.epsilon_eq(*other, epsilon)
    }
}

// --- Operator Overloads ---

impl Add for Vec3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(
            self.m[0] + rhs.m[0],
            self.m[1] + rhs.m[1],
            self.m[2] + rhs.m[2],
        )
    }
}

impl Sub for Vec3 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(
            self.m[0] - rhs.m[0],
            self.m[1] - rhs.m[1],
            self.m[2] - rhs.m[2],
        )
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        Self::new(self.m[0] * rhs, self.m[1] * rhs, self.m[2] * rhs)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: Vec3) -> Self::Output {
        rhs * self
    }
}

impl Mul<Vec3> for Vec3 {
    type Output = Self;
    /// Component-wise product.
    #[inline]
    fn mul(self, rhs: Vec3) -> Self::Output {
        Self::new(
            self.m[0] * rhs.m[0],
            self.m[1] * rhs.m[1],
            self.m[2] * rhs.m[2],
        )
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self::Output {
        Self::new(self.m[0] / rhs, self.m[1] / rhs, self.m[2] / rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.m[0], -self.m[1], -self.m[2])
    }
}

impl Index<usize> for Vec3 {
    type Output = f32;
    /// # Panics
    /// Panics if `index` is greater than 2.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.m[index]
    }
}

impl IndexMut<usize> for Vec3 {
    /// # Panics
    /// Panics if `index` is greater than 2.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.m[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::HALF_PI;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_vec3_named_and_indexed_views_alias() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v[0], v.x());
        assert_eq!(v[1], v.y());
        assert_eq!(v[2], v.z());
        v[2] = 9.0;
        assert_eq!(v.z(), 9.0);
        v.set_x(-4.0);
        assert_eq!(v.as_array(), &[-4.0, 2.0, 9.0]);
    }

    #[test]
    #[should_panic]
    fn test_vec3_index_out_of_bounds() {
        let v = Vec3::ZERO;
        let _ = v[3];
    }

    #[test]
    fn test_vec3_ops() {
        let v1 = Vec3::new(1.0, 2.0, 3.0);
        let v2 = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(v1 + v2, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(v2 - v1, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(v1 * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * v1, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(v1 * v2, Vec3::new(4.0, 10.0, 18.0));
        assert_eq!(-v1, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(v2 / 2.0, Vec3::new(2.0, 2.5, 3.0));
    }

    #[test]
    fn test_vec3_in_place_ops() {
        let mut v = Vec3::new(1.0, -2.0, 4.0);
        v.negate();
        assert_eq!(v, Vec3::new(-1.0, 2.0, -4.0));
        v.invert();
        assert_eq!(v, Vec3::new(-1.0, 0.5, -0.25));
        v.scale(Vec3::new(2.0, 2.0, -4.0));
        assert_eq!(v, Vec3::new(-2.0, 1.0, 1.0));
        v.scale_by(0.5);
        assert_eq!(v, Vec3::new(-1.0, 0.5, 0.5));
        v.set_zero();
        assert!(v.exact_eq(Vec3::ZERO));
    }

    #[test]
    fn test_vec3_dot_and_length() {
        let v1 = Vec3::new(1.0, 2.0, 3.0);
        let v2 = Vec3::new(4.0, -5.0, 6.0);
        assert_eq!(v1.dot(v2), 12.0);
        assert_eq!(Vec3::new(2.0, 3.0, 6.0).length(), 7.0);
        assert_eq!(Vec3::new(2.0, 3.0, 6.0).length_squared(), 49.0);
    }

    #[test]
    fn test_vec3_large_components_normalize() {
        let mut v = Vec3::new(3e19, -4e19, 1.2e20);
        assert_relative_eq!(v.length(), 1.3e20, max_relative = 1e-6);
        v.normalize();
        assert!(v.epsilon_eq(Vec3::new(3.0, -4.0, 12.0).normalized(), 1e-6));

        let inverted = Vec3::new(0.0, -0.0, 1.0).inverted();
        assert!(inverted.epsilon_eq(inverted, 0.0));
    }

    #[test]
    fn test_vec3_cross() {
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::Y.cross(Vec3::Z), Vec3::X);
        assert_eq!(Vec3::Z.cross(Vec3::X), Vec3::Y);
        assert_eq!(Vec3::Y.cross(Vec3::X), -Vec3::Z);

        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        let c = a.cross(b);
        assert_eq!(c, Vec3::new(-3.0, 6.0, -3.0));
        assert_eq!(c.dot(a), 0.0);
        assert_eq!(c.dot(b), 0.0);
    }

    #[test]
    fn test_vec3_distance() {
        let a = Vec3::new(1.0, 1.0, 1.0);
        let b = Vec3::new(3.0, 4.0, 7.0);
        assert_eq!(a.distance(b), 7.0);
        assert_relative_eq!(a.squared_distance(b), 7.0_f32.sqrt());
    }

    #[test]
    fn test_vec3_normalize() {
        let mut v = Vec3::new(0.0, 3.0, 4.0);
        assert_eq!(v.normalize(), 5.0);
        assert_abs_diff_eq!(v, Vec3::new(0.0, 0.6, 0.8), epsilon = FLOAT_EPSILON);

        // Each component is divided by the length, including z.
        let v = Vec3::new(0.0, 0.0, 9.0).normalized();
        assert_eq!(v, Vec3::Z);

        let mut zero = Vec3::ZERO;
        assert_eq!(zero.normalize(), 0.0);
        assert_eq!(zero, Vec3::X);
    }

    #[test]
    fn test_vec3_angles() {
        assert_relative_eq!(Vec3::X.angle(Vec3::Z), HALF_PI);
        assert_relative_eq!(
            Vec3::new(1.0, 1.0, 0.0).cosine_angle(Vec3::X),
            crate::scalar::SQRT_HALF,
            epsilon = 1e-6
        );
        assert!(Vec3::X.angle(Vec3::ZERO).is_nan());
    }

    #[test]
    fn test_vec3_clamp_and_lerp() {
        let mut v = Vec3::new(-1.0, 0.5, 2.0);
        v.clamp(Vec3::ZERO, Vec3::ONE);
        assert_eq!(v, Vec3::new(0.0, 0.5, 1.0));

        let start = Vec3::ZERO;
        let end = Vec3::new(2.0, 4.0, 8.0);
        assert_eq!(Vec3::lerp(start, end, 0.25), Vec3::new(0.5, 1.0, 2.0));
        assert_eq!(Vec3::lerp(start, end, -1.0), -end);
    }

    #[test]
    fn test_vec3_conversions() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.to_vec2(), Vec2::new(1.0, 2.0));
        assert_eq!(v.to_vec4(), Vec4::new(1.0, 2.0, 3.0, 0.0));
        assert_eq!(Vec3::from(Vec2::new(1.0, 2.0)), Vec3::new(1.0, 2.0, 0.0));
        assert_eq!(
            Vec3::try_from(&[1.0_f32][..]),
            Err(MathError::LengthMismatch {
                expected: 3,
                actual: 1
            })
        );
    }
}
