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

//! The 2x2 matrix.

#[cfg(feature = "serde")]
use bincode::{Decode, Encode};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{is_diagonal_flat, is_identity_flat, transpose_flat, Mat3, Mat4};
use crate::error::{MathError, Result};
use crate::scalar::FLOAT_EPSILON;
use crate::vector::{array_from_slice, Vec2};
use std::ops::{Add, Index, IndexMut, Mul, Neg};

/// A 2x2 row-major matrix.
///
/// # Examples
///
/// ```
/// use linal_core::{Mat2, Vec2};
///
/// let m = Mat2::new(4.0, 7.0, 2.0, 6.0);
/// assert_eq!(m[(0, 1)], 7.0);
/// assert_eq!(m.row(1), Vec2::new(2.0, 6.0));
/// assert_eq!(m.determinant(), 10.0);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize, Encode, Decode))]
#[repr(C)]
pub struct Mat2 {
    rows: [Vec2; 2],
}

impl Mat2 {
    /// The 2x2 identity matrix.
    pub const IDENTITY: Self = Self::from_rows(Vec2::X, Vec2::Y);

    /// A 2x2 matrix with all elements set to 0.
    pub const ZERO: Self = Self::from_rows(Vec2::ZERO, Vec2::ZERO);

    /// Creates a matrix from four scalars given row by row.
    #[inline]
    pub const fn new(m00: f32, m01: f32, m10: f32, m11: f32) -> Self {
        Self::from_rows(Vec2::new(m00, m01), Vec2::new(m10, m11))
    }

    /// Creates a matrix from two row vectors.
    #[inline]
    pub const fn from_rows(r0: Vec2, r1: Vec2) -> Self {
        Self { rows: [r0, r1] }
    }

    /// Creates a matrix from a flat row-major array.
    #[inline]
    pub const fn from_array(m: [f32; 4]) -> Self {
        Self::new(m[0], m[1], m[2], m[3])
    }

    /// Returns a copy of the flat row-major elements.
    #[inline]
    pub fn to_array(&self) -> [f32; 4] {
        *self.as_flat()
    }

    /// Borrows the elements as a flat row-major array.
    ///
    /// The array aliases the row storage: element `(r, c)` sits at `r * 2 + c`.
    #[inline]
    pub fn as_flat(&self) -> &[f32; 4] {
        bytemuck::cast_ref(&self.rows)
    }

    /// Mutably borrows the elements as a flat row-major array.
    #[inline]
    pub fn as_flat_mut(&mut self) -> &mut [f32; 4] {
        bytemuck::cast_mut(&mut self.rows)
    }

    /// Borrows the row vectors.
    #[inline]
    pub const fn rows(&self) -> &[Vec2; 2] {
        &self.rows
    }

    /// Returns row `index`.
    ///
    /// # Panics
    /// Panics if `index` is greater than 1.
    #[inline]
    pub fn row(&self, index: usize) -> Vec2 {
        self.rows[index]
    }

    /// Overwrites row `index`.
    ///
    /// # Panics
    /// Panics if `index` is greater than 1.
    #[inline]
    pub fn set_row(&mut self, index: usize, row: Vec2) {
        self.rows[index] = row;
    }

    /// Returns column `index`.
    ///
    /// # Panics
    /// Panics if `index` is greater than 1.
    #[inline]
    pub fn col(&self, index: usize) -> Vec2 {
        Vec2::new(self.rows[0][index], self.rows[1][index])
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
    ///
    /// The operand order is reversed with respect to the usual `a - b`.
    /// Matrices have no `Sub` impl.
    ///
    /// ```
    /// use linal_core::Mat2;
    ///
    /// let a = Mat2::new(1.0, 1.0, 1.0, 1.0);
    /// let b = Mat2::new(3.0, 4.0, 5.0, 6.0);
    /// assert_eq!(Mat2::sub(a, b), Mat2::new(2.0, 3.0, 4.0, 5.0));
    /// ```
    #[inline]
    pub fn sub(a: Self, b: Self) -> Self {
        Self::from_rows(b.rows[0] - a.rows[0], b.rows[1] - a.rows[1])
    }

    /// Swaps rows and columns in place.
    #[inline]
    pub fn transpose(&mut self) {
        transpose_flat::<2>(self.as_flat_mut());
    }

    /// Returns the transpose of the matrix.
    #[inline]
    pub fn transposed(self) -> Self {
        let mut m = self;
        m.transpose();
        m
    }

    /// Element-wise (Hadamard) product. This is what `*` between two matrices computes.
    #[inline]
    pub fn hadamard(&self, rhs: Self) -> Self {
        Self::from_rows(self.rows[0] * rhs.rows[0], self.rows[1] * rhs.rows[1])
    }

    /// Algebraic matrix product, `self · rhs`.
    pub fn mul_mat(&self, rhs: Self) -> Self {
        let c0 = rhs.col(0);
        let c1 = rhs.col(1);
        Self::new(
            self.rows[0].dot(c0),
            self.rows[0].dot(c1),
            self.rows[1].dot(c0),
            self.rows[1].dot(c1),
        )
    }

    /// Multiplies the matrix by `v` taken as a column vector.
    #[inline]
    pub fn mul_vec(&self, v: Vec2) -> Vec2 {
        Vec2::new(self.rows[0].dot(v), self.rows[1].dot(v))
    }

    /// Multiplies `v`, taken as a row vector, by the matrix.
    #[inline]
    pub fn vec_mul(&self, v: Vec2) -> Vec2 {
        self.rows[0] * v.x() + self.rows[1] * v.y()
    }

    /// Returns `true` if every element pair is IEEE-equal.
    #[inline]
    pub fn exact_eq(&self, other: Self) -> bool {
        self.rows[0].exact_eq(other.rows[0]) && self.rows[1].exact_eq(other.rows[1])
    }

    /// Returns `true` if every element differs from `other` by at most `eps` (inclusive).
    #[inline]
    pub fn epsilon_eq(&self, other: Self, eps: f32) -> bool {
        self.rows[0].epsilon_eq(other.rows[0], eps) && self.rows[1].epsilon_eq(other.rows[1], eps)
    }

    /// Diagonal within `1 ± FLOAT_EPSILON` and every other element exactly `0.0`.
    #[inline]
    pub fn is_identity(&self) -> bool {
        is_identity_flat::<2>(self.as_flat())
    }

    /// Every off-diagonal element is exactly `0.0`.
    #[inline]
    pub fn is_diagonal(&self) -> bool {
        is_diagonal_flat::<2>(self.as_flat())
    }

    /// Computes the determinant, `m00 * m11 - m01 * m10`.
    #[inline]
    pub fn determinant(&self) -> f32 {
        let [m00, m01, m10, m11] = self.to_array();
        m00 * m11 - m01 * m10
    }

    /// Computes the inverse of the matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::SingularMatrix`] if the determinant is exactly `0.0`.
    /// No tolerance is applied, so nearly singular matrices still invert.
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if det == 0.0 {
            log::debug!("Mat2 inverse rejected, determinant is exactly zero: {:?}", self);
            return Err(MathError::SingularMatrix { dimension: 2 });
        }
        let inv_det = 1.0 / det;
        let [m00, m01, m10, m11] = self.to_array();

        // Cofactors scaled by 1/det, then transposed.
        let mut adj = Self::new(m11 * inv_det, -m10 * inv_det, -m01 * inv_det, m00 * inv_det);
        adj.transpose();
        Ok(adj)
    }

    /// Inverts the matrix in place.
    ///
    /// On error the matrix is left untouched.
    #[inline]
    pub fn invert(&mut self) -> Result<()> {
        *self = self.inverse()?;
        Ok(())
    }

    /// Widens into the top-left block of a zero `Mat3`.
    #[inline]
    pub fn to_mat3(&self) -> Mat3 {
        Mat3::from_rows(
            self.rows[0].to_vec3(),
            self.rows[1].to_vec3(),
            crate::vector::Vec3::ZERO,
        )
    }

    /// Widens into the top-left block of a zero `Mat4`.
    #[inline]
    pub fn to_mat4(&self) -> Mat4 {
        self.to_mat3().to_mat4()
    }
}

impl Vec2 {
    /// Multiplies this row vector by `m`, see [`Mat2::vec_mul`].
    #[inline]
    pub fn mul_mat(self, m: Mat2) -> Vec2 {
        m.vec_mul(self)
    }
}

// --- Conversions ---

impl From<[f32; 4]> for Mat2 {
    #[inline]
    fn from(m: [f32; 4]) -> Self {
        Self::from_array(m)
    }
}

impl From<Mat2> for [f32; 4] {
    #[inline]
    fn from(m: Mat2) -> Self {
        m.to_array()
    }
}

impl TryFrom<&[f32]> for Mat2 {
    type Error = MathError;

    /// Builds a matrix from exactly four row-major scalars.
    fn try_from(slice: &[f32]) -> Result<Self> {
        array_from_slice(slice).map(Self::from_array)
    }
}

impl approx::AbsDiffEq for Mat2 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        FLOAT_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.epsilon_eq(*other, epsilon)
    }
}

// --- Operator Overloads ---

impl Default for Mat2 {
    /// Returns the 2x2 identity matrix.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Add for Mat2 {
    type Output = Self;
    /// Adds two matrices element-wise.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::from_rows(self.rows[0] + rhs.rows[0], self.rows[1] + rhs.rows[1])
    }
}

impl Mul<Mat2> for Mat2 {
    type Output = Self;
    /// Element-wise product; see [`Mat2::mul_mat`] for the matrix product.
    #[inline]
    fn mul(self, rhs: Mat2) -> Self::Output {
        self.hadamard(rhs)
    }
}

impl Mul<f32> for Mat2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        let mut m = self;
        m.scale(rhs);
        m
    }
}

impl Mul<Vec2> for Mat2 {
    type Output = Vec2;
    /// Transforms a column vector.
    #[inline]
    fn mul(self, rhs: Vec2) -> Self::Output {
        self.mul_vec(rhs)
    }
}

impl Mul<Mat2> for Vec2 {
    type Output = Vec2;
    /// Multiplies a row vector by the matrix.
    #[inline]
    fn mul(self, rhs: Mat2) -> Self::Output {
        rhs.vec_mul(self)
    }
}

impl Neg for Mat2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self::from_rows(-self.rows[0], -self.rows[1])
    }
}

impl Index<usize> for Mat2 {
    type Output = Vec2;
    /// Allows accessing a matrix row by index.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}

impl IndexMut<usize> for Mat2 {
    /// Allows mutably accessing a matrix row by index.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.rows[index]
    }
}

impl Index<(usize, usize)> for Mat2 {
    type Output = f32;
    /// Allows accessing the element at `(row, col)`.
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.rows[row][col]
    }
}

impl IndexMut<(usize, usize)> for Mat2 {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.rows[row][col]
    }
}
