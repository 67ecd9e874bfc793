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

//! The 3x3 matrix.

#[cfg(feature = "serde")]
use bincode::{Decode, Encode};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{det3, is_diagonal_flat, is_identity_flat, transpose_flat, Mat2, Mat4};
use crate::error::{MathError, Result};
use crate::scalar::FLOAT_EPSILON;
use crate::vector::{array_from_slice, Vec3, Vec4};
use std::ops::{Add, Index, IndexMut, Mul, Neg};

/// A 3x3 row-major matrix.
///
/// Rows are [`Vec3`]s; element `(r, c)` is also reachable as `as_flat()[r * 3 + c]`.
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize, Encode, Decode))]
#[repr(C)]
pub struct Mat3 {
    rows: [Vec3; 3],
}

impl Mat3 {
    /// The 3x3 identity matrix.
    pub const IDENTITY: Self = Self::from_rows(Vec3::X, Vec3::Y, Vec3::Z);

    /// A 3x3 matrix with all elements set to 0.
    pub const ZERO: Self = Self::from_rows(Vec3::ZERO, Vec3::ZERO, Vec3::ZERO);

    /// Creates a matrix from nine scalars given row by row.
    #[inline]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        m00: f32,
        m01: f32,
        m02: f32,
        m10: f32,
        m11: f32,
        m12: f32,
        m20: f32,
        m21: f32,
        m22: f32,
    ) -> Self {
        Self::from_rows(
            Vec3::new(m00, m01, m02),
            Vec3::new(m10, m11, m12),
            Vec3::new(m20, m21, m22),
        )
    }

    /// Creates a matrix from three row vectors.
    #[inline]
    pub const fn from_rows(r0: Vec3, r1: Vec3, r2: Vec3) -> Self {
        Self { rows: [r0, r1, r2] }
    }

    /// Creates a matrix from a flat row-major array.
    #[inline]
    pub const fn from_array(m: [f32; 9]) -> Self {
        Self::new(m[0], m[1], m[2], m[3], m[4], m[5], m[6], m[7], m[8])
    }

    /// Returns a copy of the flat row-major elements.
    #[inline]
    pub fn to_array(&self) -> [f32; 9] {
        *self.as_flat()
    }

    /// Borrows the elements as a flat row-major array aliasing the rows.
    #[inline]
    pub fn as_flat(&self) -> &[f32; 9] {
        bytemuck::cast_ref(&self.rows)
    }

    /// Mutably borrows the elements as a flat row-major array.
    #[inline]
    pub fn as_flat_mut(&mut self) -> &mut [f32; 9] {
        bytemuck::cast_mut(&mut self.rows)
    }

    /// Borrows the row vectors.
    #[inline]
    pub const fn rows(&self) -> &[Vec3; 3] {
        &self.rows
    }

    /// Returns row `index`. Panics if `index > 2`.
    #[inline]
    pub fn row(&self, index: usize) -> Vec3 {
        self.rows[index]
    }

    /// Overwrites row `index`. Panics if `index > 2`.
    #[inline]
    pub fn set_row(&mut self, index: usize, row: Vec3) {
        self.rows[index] = row;
    }

    /// Returns column `index`. Panics if `index > 2`.
    #[inline]
    pub fn col(&self, index: usize) -> Vec3 {
        Vec3::new(
            self.rows[0][index],
            self.rows[1][index],
            self.rows[2][index],
        )
    }

    /// Sets every element to `0.0`.
    #[inline]
    pub fn set_zero(&mut self) {
        *self = Self::ZERO;
    }

    /// Resets the matrix to the identity.
    #[inline]
    pub fn set_identity(&mut self) {
        *self = Self::IDENTITY;
    }

    /// Flips the sign of every element in place.
    #[inline]
    pub fn negate(&mut self) {
        for row in &mut self.rows {
            row.negate();
        }
    }

    /// Multiplies every element by `f`, in place.
    #[inline]
    pub fn scale(&mut self, f: f32) {
        for row in &mut self.rows {
            row.scale_by(f);
        }
    }

    /// Element-wise difference computed as **`b - a`**.
    #[inline]
    pub fn sub(a: Self, b: Self) -> Self {
        Self::from_rows(
            b.rows[0] - a.rows[0],
            b.rows[1] - a.rows[1],
            b.rows[2] - a.rows[2],
        )
    }

    /// Swaps rows and columns in place.
    #[inline]
    pub fn transpose(&mut self) {
        transpose_flat::<3>(self.as_flat_mut());
    }

    /// Returns the transpose of the matrix.
    #[inline]
    pub fn transposed(self) -> Self {
        let mut m = self;
        m.transpose();
        m
    }

    /// Element-wise (Hadamard) product.
    #[inline]
    pub fn hadamard(&self, rhs: Self) -> Self {
        Self::from_rows(
            self.rows[0] * rhs.rows[0],
            self.rows[1] * rhs.rows[1],
            self.rows[2] * rhs.rows[2],
        )
    }

    /// Algebraic matrix product, `self · rhs`.
    pub fn mul_mat(&self, rhs: Self) -> Self {
        let cols = [rhs.col(0), rhs.col(1), rhs.col(2)];
        Self {
            rows: self
                .rows
                .map(|row| Vec3::new(row.dot(cols[0]), row.dot(cols[1]), row.dot(cols[2]))),
        }
    }

    /// Multiplies the matrix by `v` taken as a column vector.
    #[inline]
    pub fn mul_vec(&self, v: Vec3) -> Vec3 {
        Vec3::new(self.rows[0].dot(v), self.rows[1].dot(v), self.rows[2].dot(v))
    }

    /// Multiplies `v`, taken as a row vector, by the matrix.
    #[inline]
    pub fn vec_mul(&self, v: Vec3) -> Vec3 {
        self.rows[0] * v.x() + self.rows[1] * v.y() + self.rows[2] * v.z()
    }

    /// Returns `true` if every element pair is IEEE-equal.
    #[inline]
    pub fn exact_eq(&self, other: Self) -> bool {
        self.rows
            .iter()
            .zip(other.rows)
            .all(|(a, b)| a.exact_eq(b))
    }

    /// Returns `true` if every element differs from `other` by at most `eps` (inclusive).
    #[inline]
    pub fn epsilon_eq(&self, other: Self, eps: f32) -> bool {
        self.rows
            .iter()
            .zip(other.rows)
            .all(|(a, b)| a.epsilon_eq(b, eps))
    }

    /// Diagonal within `1 ± FLOAT_EPSILON` and every other element exactly `0.0`.
    #[inline]
    pub fn is_identity(&self) -> bool {
        is_identity_flat::<3>(self.as_flat())
    }

    /// Every off-diagonal element is exactly `0.0`.
    #[inline]
    pub fn is_diagonal(&self) -> bool {
        is_diagonal_flat::<3>(self.as_flat())
    }

    /// Computes the determinant with the 6-term Leibniz expansion.
    #[inline]
    pub fn determinant(&self) -> f32 {
        let [m0, m1, m2, m3, m4, m5, m6, m7, m8] = self.to_array();
        det3(m0, m1, m2, m3, m4, m5, m6, m7, m8)
    }

    /// Computes the inverse of the matrix through its adjugate.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::SingularMatrix`] if the determinant is exactly `0.0`.
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if det == 0.0 {
            log::debug!("Mat3 inverse rejected, determinant is exactly zero: {:?}", self);
            return Err(MathError::SingularMatrix { dimension: 3 });
        }
        let inv_det = 1.0 / det;
        let [m0, m1, m2, m3, m4, m5, m6, m7, m8] = self.to_array();

        let cofactors = [
            m4 * m8 - m5 * m7,
            -(m3 * m8 - m5 * m6),
            m3 * m7 - m4 * m6,
            -(m1 * m8 - m2 * m7),
            m0 * m8 - m2 * m6,
            -(m0 * m7 - m1 * m6),
            m1 * m5 - m2 * m4,
            -(m0 * m5 - m2 * m3),
            m0 * m4 - m1 * m3,
        ];

        let mut adj = Self::from_array(cofactors.map(|c| c * inv_det));
        adj.transpose();
        Ok(adj)
    }

    /// Inverts the matrix in place. On error the matrix is left untouched.
    #[inline]
    pub fn invert(&mut self) -> Result<()> {
        *self = self.inverse()?;
        Ok(())
    }

    /// Keeps the top-left 2x2 block.
    #[inline]
    pub fn to_mat2(&self) -> Mat2 {
        Mat2::from_rows(self.rows[0].to_vec2(), self.rows[1].to_vec2())
    }

    /// Widens into the top-left block of a zero `Mat4`.
    #[inline]
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_rows(
            self.rows[0].to_vec4(),
            self.rows[1].to_vec4(),
            self.rows[2].to_vec4(),
            Vec4::ZERO,
        )
    }
}

impl Vec3 {
    /// Multiplies this row vector by `m`, see [`Mat3::vec_mul`].
    #[inline]
    pub fn mul_mat(self, m: Mat3) -> Vec3 {
        m.vec_mul(self)
    }
}

// --- Conversions ---

impl From<[f32; 9]> for Mat3 {
    #[inline]
    fn from(m: [f32; 9]) -> Self {
        Self::from_array(m)
    }
}

impl From<Mat3> for [f32; 9] {
    #[inline]
    fn from(m: Mat3) -> Self {
        m.to_array()
    }
}

impl From<Mat2> for Mat3 {
    #[inline]
    fn from(m: Mat2) -> Self {
        m.to_mat3()
    }
}

impl TryFrom<&[f32]> for Mat3 {
    type Error = MathError;

    fn try_from(slice: &[f32]) -> Result<Self> {
        array_from_slice(slice).map(Self::from_array)
    }
}

impl approx::AbsDiffEq for Mat3 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        FLOAT_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.epsilon_eq(*other, epsilon)
    }
}

// --- Operator Overloads ---

impl Default for Mat3 {
    /// Returns the 3x3 identity matrix.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Add for Mat3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::from_rows(
            self.rows[0] + rhs.rows[0],
            self.rows[1] + rhs.rows[1],
            self.rows[2] + rhs.rows[2],
        )
    }
}

impl Mul<Mat3> for Mat3 {
    type Output = Self;
    /// Element-wise product; see [`Mat3::mul_mat`] for the matrix product.
    #[inline]
    fn mul(self, rhs: Mat3) -> Self::Output {
        self.hadamard(rhs)
    }
}

impl Mul<f32> for Mat3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        let mut m = self;
        m.scale(rhs);
        m
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;
    /// Transforms a column vector.
    #[inline]
    fn mul(self, rhs: Vec3) -> Self::Output {
        self.mul_vec(rhs)
    }
}

impl Mul<Mat3> for Vec3 {
    type Output = Vec3;
    /// Multiplies a row vector by the matrix.
    #[inline]
    fn mul(self, rhs: Mat3) -> Self::Output {
        rhs.vec_mul(self)
    }
}

impl Neg for Mat3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            rows: self.rows.map(|r| -r),
        }
    }
}

impl Index<usize> for Mat3 {
    type Output = Vec3;
    /// Allows accessing a matrix row by index.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}

impl IndexMut<usize> for Mat3 {
    /// Allows mutably accessing a matrix row by index.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.rows[index]
    }
}

impl Index<(usize, usize)> for Mat3 {
    type Output = f32;
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.rows[row][col]
    }
}

impl IndexMut<(usize, usize)> for Mat3 {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.rows[row][col]
    }
}
