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

//! The 2-component vector.

#[cfg(feature = "serde")]
use bincode::{Decode, Encode};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{array_from_slice, scaled_length, Vec3, Vec4};
use crate::error::MathError;
use crate::scalar::{self, FLOAT_EPSILON};
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

/// A 2-dimensional vector with `f32` components.
#[derive(Debug, Default, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize, Encode, Decode),
    serde(transparent)
)]
#[repr(C)]
pub struct Vec2 {
    m: [f32; 2],
}

impl Vec2 {
    /// A vector with all components set to `0.0`.
    pub const ZERO: Self = Self::new(0.0, 0.0);
    /// A vector with all components set to `1.0`.
    pub const ONE: Self = Self::new(1.0, 1.0);
    /// The unit vector pointing along the positive X-axis.
    pub const X: Self = Self::new(1.0, 0.0);
    /// The unit vector pointing along the positive Y-axis.
    pub const Y: Self = Self::new(0.0, 1.0);

    /// Creates a new `Vec2` with the specified components.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { m: [x, y] }
    }

    /// Creates a vector from `[x, y]`.
    #[inline]
    pub const fn from_array(m: [f32; 2]) -> Self {
        Self { m }
    }

    /// Returns the components as `[x, y]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 2] {
        self.m
    }

    /// Borrows the flat component storage.
    #[inline]
    pub const fn as_array(&self) -> &[f32; 2] {
        &self.m
    }

    /// Mutably borrows the flat component storage.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [f32; 2] {
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

    /// Overwrites both components.
    #[inline]
    pub fn set(&mut self, x: f32, y: f32) {
        self.m = [x, y];
    }

    /// Sets every component to `0.0`.
    #[inline]
    pub fn set_zero(&mut self) {
        *self = Self::ZERO;
    }

    /// Flips the sign of every component in place.
    #[inline]
    pub fn negate(&mut self) {
        self.m[0] = -self.m[0];
        self.m[1] = -self.m[1];
    }

    /// Replaces every component with its reciprocal.
    ///
    /// A zero component becomes an IEEE infinity; nothing is guarded.
    #[inline]
    pub fn invert(&mut self) {
        self.m[0] = 1.0 / self.m[0];
        self.m[1] = 1.0 / self.m[1];
    }

    /// Returns the component-wise reciprocal, see [`Vec2::invert`].
    #[inline]
    pub fn inverted(self) -> Self {
        let mut v = self;
        v.invert();
        v
    }

    /// Multiplies each component by the matching component of `s`, in place.
    #[inline]
    pub fn scale(&mut self, s: Self) {
        self.m[0] *= s.m[0];
        self.m[1] *= s.m[1];
    }

    /// Multiplies every component by `f`, in place.
    #[inline]
    pub fn scale_by(&mut self, f: f32) {
        self.m[0] *= f;
        self.m[1] *= f;
    }

    /// Returns `true` if every component pair is IEEE-equal.
    #[inline]
    pub fn exact_eq(&self, other: Self) -> bool {
        self.m[0] == other.m[0] && self.m[1] == other.m[1]
    }

    /// Returns `false` only if some component differs from `other` by more than `eps`.
    ///
    /// The boundary is inclusive: a difference of exactly `eps` still compares equal.
    /// A NaN difference is never greater than `eps`, so a vector holding an
    /// infinity or NaN is epsilon-equal to itself.
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
        self.m[0] * rhs.m[0] + self.m[1] * rhs.m[1]
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

    /// Returns `sqrt(distance(other))`.
    ///
    /// Despite the name this is the square root of the distance, not its
    /// square. Use `distance(other).powi(2)` for the squared distance.
    #[inline]
    pub fn squared_distance(&self, other: Self) -> f32 {
        scalar::sqrt(self.distance(other))
    }

    /// Scales the vector to unit length in place and returns its original length.
    ///
    /// A vector of length exactly `0.0` becomes [`Vec2::X`] and `0.0` is returned.
    pub fn normalize(&mut self) -> f32 {
        let len = self.length();
        if len == 0.0 {
            log::trace!("normalize() on a zero-length Vec2, substituting {:?}", Self::X);
            *self = Self::X;
        } else {
            self.m[0] /= len;
            self.m[1] /= len;
        }
        len
    }

    /// Returns a unit-length copy, see [`Vec2::normalize`].
    #[inline]
    pub fn normalized(self) -> Self {
        let mut v = self;
        v.normalize();
        v
    }

    /// Cosine of the angle between the two vectors, `dot / (|a| * |b|)`.
    ///
    /// NaN if either vector has zero length.
    #[inline]
    pub fn cosine_angle(&self, other: Self) -> f32 {
        self.dot(other) / (self.length() * other.length())
    }

    /// Angle between the two vectors in radians, in `[0, π]`.
    ///
    /// NaN if either vector has zero length.
    #[inline]
    pub fn angle(&self, other: Self) -> f32 {
        scalar::acos(self.cosine_angle(other).clamp(-1.0, 1.0))
    }

    /// Clamps each component into `[min, max]` in place.
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

    /// Performs a linear interpolation, `end * t + start * (1 - t)`.
    ///
    /// `t` is not clamped, so values outside `[0, 1]` extrapolate.
    #[inline]
    pub fn lerp(start: Self, end: Self, t: f32) -> Self {
        Self::new(
            end.m[0] * t + start.m[0] * (1.0 - t),
            end.m[1] * t + start.m[1] * (1.0 - t),
        )
    }

    /// Widens to a `Vec3` with `z = 0`.
    #[inline]
    pub const fn to_vec3(self) -> Vec3 {
        Vec3::new(self.m[0], self.m[1], 0.0)
    }

    /// Widens to a `Vec4` with `z = 0` and `w = 0`.
    #[inline]
    pub const fn to_vec4(self) -> Vec4 {
        Vec4::new(self.m[0], self.m[1], 0.0, 0.0)
    }
}

// --- Conversions ---

impl From<[f32; 2]> for Vec2 {
    #[inline]
    fn from(m: [f32; 2]) -> Self {
        Self::from_array(m)
    }
}

impl From<Vec2> for [f32; 2] {
    #[inline]
    fn from(v: Vec2) -> Self {
        v.m
    }
}

impl TryFrom<&[f32]> for Vec2 {
    type Error = MathError;

    /// Builds a vector from exactly two scalars.
    fn try_from(slice: &[f32]) -> Result<Self, Self::Error> {
        array_from_slice(slice).map(Self::from_array)
    }
}

impl approx::AbsDiffEq for Vec2 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        FLOAT_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.epsilon_eq(*other, epsilon)
    }
}

// --- Operator Overloads ---

impl Add for Vec2 {
    type Output = Self;
    /// Adds two vectors component-wise.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.m[0] + rhs.m[0], self.m[1] + rhs.m[1])
    }
}

impl Sub for Vec2 {
    type Output = Self;
    /// Subtracts `rhs` from `self` component-wise.
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.m[0] - rhs.m[0], self.m[1] - rhs.m[1])
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    /// Multiplies the vector by a scalar.
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        Self::new(self.m[0] * rhs, self.m[1] * rhs)
    }
}

impl Mul<Vec2> for f32 {
    type Output = Vec2;
    /// Multiplies a scalar by a vector.
    #[inline]
    fn mul(self, rhs: Vec2) -> Self::Output {
        rhs * self
    }
}

impl Mul<Vec2> for Vec2 {
    type Output = Self;
    /// Multiplies two vectors component-wise.
    #[inline]
    fn mul(self, rhs: Vec2) -> Self::Output {
        Self::new(self.m[0] * rhs.m[0], self.m[1] * rhs.m[1])
    }
}

impl Div<f32> for Vec2 {
    type Output = Self;
    /// Divides every component by a scalar.
    #[inline]
    fn div(self, rhs: f32) -> Self::Output {
        Self::new(self.m[0] / rhs, self.m[1] / rhs)
    }
}

impl Neg for Vec2 {
    type Output = Self;
    /// Negates the vector.
    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.m[0], -self.m[1])
    }
}

impl Index<usize> for Vec2 {
    type Output = f32;
    /// Allows accessing a vector component by index (`v[0]`, `v[1]`).
    ///
    /// # Panics
    /// Panics if `index` is not 0 or 1.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.m[index]
    }
}

impl IndexMut<usize> for Vec2 {
    /// Allows mutably accessing a vector component by index (`v[0] = ...`).
    ///
    /// # Panics
    /// Panics if `index` is not 0 or 1.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.m[index]
    }
}
