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

//! The 4-component vector.

#[cfg(feature = "serde")]
use bincode::{Decode, Encode};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{array_from_slice, scaled_length, Vec2, Vec3};
use crate::error::MathError;
use crate::scalar::{self, FLOAT_EPSILON};
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

/// A 4-dimensional vector with `f32` components.
///
/// Used for homogeneous coordinates and RGBA-like tuples.
#[derive(Debug, Default, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize, Encode, Decode),
    serde(transparent)
)]
#[repr(C)]
pub struct Vec4 {
    m: [f32; 4],
}

impl Vec4 {
    /// A vector with all components set to `0.0`.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    /// A vector with all components set to `1.0`.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// The unit vector along X.
    pub const X: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    /// The unit vector along Y.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    /// The unit vector along Z.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    /// The unit vector along W.
    pub const W: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a new `Vec4` with the specified components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { m: [x, y, z, w] }
    }

    /// Creates a vector from `[x, y, z, w]`.
    #[inline]
    pub const fn from_array(m: [f32; 4]) -> Self {
        Self { m }
    }

    /// Returns the components as `[x, y, z, w]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        self.m
    }

    /// Borrows the flat component storage.
    #[inline]
    pub const fn as_array(&self) -> &[f32; 4] {
        &self.m
    }

    /// Mutably borrows the flat component storage.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [f32; 4] {
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

    /// The w component.
    #[inline]
    pub const fn w(&self) -> f32 {
        self.m[3]
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

    /// Sets the w component.
    #[inline]
    pub fn set_w(&mut self, w: f32) {
        self.m[3] = w;
    }

    /// Overwrites all four components.
    #[inline]
    pub fn set(&mut self, x: f32, y: f32, z: f32, w: f32) {
        self.m = [x, y, z, w];
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

    /// Replaces every component with its reciprocal.
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

    /// Hadamard product with `s`, in place.
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
        self.m.iter().zip(other.m).all(|(a, b)| *a == b)
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
        self.m[0] * rhs.m[0] + self.m[1] * rhs.m[1] + self.m[2] * rhs.m[2] + self.m[3] * rhs.m[3]
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
    /// A vector of length exactly `0.0` becomes [`Vec4::X`] and `0.0` is returned.
    pub fn normalize(&mut self) -> f32 {
        let len = self.length();
        if len == 0.0 {
            log::trace!("normalize() on a zero-length Vec4, substituting {:?}", Self::X);
            *self = Self::X;
        } else {
            for c in &mut self.m {
                *c /= len;
            }
        }
        len
    }

    /// Returns a unit-length copy.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut v = self;
        v.normalize();
        v
    }

    /// Cosine of the angle between the two vectors.
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

    /// Drops `z` and `w`.
    #[inline]
    pub const fn to_vec2(self) -> Vec2 {
        Vec2::new(self.m[0], self.m[1])
    }

    /// Drops `w`.
    #[inline]
    pub const fn to_vec3(self) -> Vec3 {
        Vec3::new(self.m[0], self.m[1], self.m[2])
    }
}

// --- Conversions ---

impl From<[f32; 4]> for Vec4 {
    #[inline]
    fn from(m: [f32; 4]) -> Self {
        Self::from_array(m)
    }
}

impl From<Vec4> for [f32; 4] {
    #[inline]
    fn from(v: Vec4) -> Self {
        v.m
    }
}

impl From<Vec2> for Vec4 {
    #[inline]
    fn from(v: Vec2) -> Self {
        v.to_vec4()
    }
}

impl From<Vec3> for Vec4 {
    #[inline]
    fn from(v: Vec3) -> Self {
        v.to_vec4()
    }
}

impl TryFrom<&[f32]> for Vec4 {
    type Error = MathError;

    fn try_from(slice: &[f32]) -> Result<Self, Self::Error> {
        array_from_slice(slice).map(Self::from_array)
    }
}

impl approx::AbsDiffEq for Vec4 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        FLOAT_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.epsilon_eq(*other, epsilon)
    }
}

// --- Operator Overloads ---

impl Add for Vec4 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(
            self.m[0] + rhs.m[0],
            self.m[1] + rhs.m[1],
            self.m[2] + rhs.m[2],
            self.m[3] + rhs.m[3],
        )
    }
}

impl Sub for Vec4 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(
            self.m[0] - rhs.m[0],
            self.m[1] - rhs.m[1],
            self.m[2] - rhs.m[2],
            self.m[3] - rhs.m[3],
        )
    }
}

impl Mul<f32> for Vec4 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        Self::new(
            self.m[0] * rhs,
            self.m[1] * rhs,
            self.m[2] * rhs,
            self.m[3] * rhs,
        )
    }
}

impl Mul<Vec4> for f32 {
    type Output = Vec4;
    #[inline]
    fn mul(self, rhs: Vec4) -> Self::Output {
        rhs * self
    }
}

impl Mul<Vec4> for Vec4 {
    type Output = Self;
    /// Component-wise product.
    #[inline]
    fn mul(self, rhs: Vec4) -> Self::Output {
        Self::new(
            self.m[0] * rhs.m[0],
            self.m[1] * rhs.m[1],
            self.m[2] * rhs.m[2],
            self.m[3] * rhs.m[3],
        )
    }
}

impl Div<f32> for Vec4 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self::Output {
        Self::new(
            self.m[0] / rhs,
            self.m[1] / rhs,
            self.m[2] / rhs,
            self.m[3] / rhs,
        )
    }
}

impl Neg for Vec4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.m[0], -self.m[1], -self.m[2], -self.m[3])
    }
}

impl Index<usize> for Vec4 {
    type Output = f32;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.m[index]
    }
}

impl IndexMut<usize> for Vec4 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.m[index]
    }
}
