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

//! The 4x4 matrix.

#[cfg(feature = "serde")]
use bincode::{Decode, Encode};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{det3, is_diagonal_flat, is_identity_flat, transpose_flat, Mat2, Mat3};
use crate::error::{MathError, Result};
use crate::scalar::FLOAT_EPSILON;
use crate::vector::{array_from_slice, Vec3, Vec4};
use std::ops::{Add, Index, IndexMut, Mul, Neg};

/// A 4x4 row-major matrix.
///
/// Element `(r, c)` is `self[r][c]`, `self[(r, c)]` and `as_flat()[r * 4 + c]`.
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize, Encode, Decode))]
#[repr(C)]
pub struct Mat4 {
    rows: [Vec4; 4],
}

impl Mat4 {
    /// The 4x4 identity matrix.
    pub const IDENTITY: Self = Self::from_rows(Vec4::X, Vec4::Y, Vec4::Z, Vec4::W);

    /// A 4x4 matrix with all elements set to 0.
    pub const ZERO: Self = Self::from_rows(Vec4::ZERO, Vec4::ZERO, Vec4::ZERO, Vec4::ZERO);

    /// Creates a matrix from sixteen scalars given row by row.
    #[inline]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        m00: f32,
        m01: f32,
        m02: f32,
        m03: f32,
        m10: f32,
        m11: f32,
        m12: f32,
        m13: f32,
        m20: f32,
        m21: f32,
        m22: f32,
        m23: f32,
        m30: f32,
        m31: f32,
        m32: f32,
        m33: f32,
    ) -> Self {
        Self::from_rows(
            Vec4::new(m00, m01, m02, m03),
            Vec4::new(m10, m11, m12, m13),
            Vec4::new(m20, m21, m22, m23),
            Vec4::new(m30, m31, m32, m33),
        )
    }

    /// Creates a matrix from four row vectors.
    #[inline]
    pub const fn from_rows(r0: Vec4, r1: Vec4, r2: Vec4, r3: Vec4) -> Self {
        Self {
            rows: [r0, r1, r2, r3],
        }
    }

    /// Creates a matrix from a flat row-major array.
    #[inline]
    pub const fn from_array(m: [f32; 16]) -> Self {
        Self::new(
            m[0], m[1], m[2], m[3], m[4], m[5], m[6], m[7], m[8], m[9], m[10], m[11], m[12],
            m[13], m[14], m[15],
        )
    }

    /// Returns a copy of the flat row-major elements.
    #[inline]
    pub fn to_array(&self) -> [f32; 16] {
        *self.as_flat()
    }

    /// Borrows the elements as a flat row-major array aliasing the rows.
    #[inline]
    pub fn as_flat(&self) -> &[f32; 16] {
        bytemuck::cast_ref(&self.rows)
    }

    /// Mutably borrows the elements as a flat row-major array.
    #[inline]
    pub fn as_flat_mut(&mut self) -> &mut [f32; 16] {
        bytemuck::cast_mut(&mut self.rows)
    }

    /// Borrows the row vectors.
    #[inline]
    pub const fn rows(&self) -> &[Vec4; 4] {
        &self.rows
    }

    /// Returns row `index`.
    #[inline]
    pub fn row(&self, index: usize) -> Vec4 {
        self.rows[index]
    }

    /// Overwrites row `index`.
    #[inline]
    pub fn set_row(&mut self, index: usize, row: Vec4) {
        self.rows[index] = row;
    }

    /// Returns column `index`.
    #[inline]
    pub fn col(&self, index: usize) -> Vec4 {
        Vec4::from_array(self.rows.map(|r| r[index]))
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
        let mut out = b;
        for (o, r) in out.rows.iter_mut().zip(a.rows) {
            *o = *o - r;
        }
        out
    }

    /// Swaps rows and columns in place.
    #[inline]
    pub fn transpose(&mut self) {
        transpose_flat::<4>(self.as_flat_mut());
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
        let mut out = *self;
        for (o, r) in out.rows.iter_mut().zip(rhs.rows) {
            *o = *o * r;
        }
        out
    }

    /// Algebraic matrix product, `self · rhs`.
    pub fn mul_mat(&self, rhs: Self) -> Self {
        let cols = [rhs.col(0), rhs.col(1), rhs.col(2), rhs.col(3)];
        Self {
            rows: self
                .rows
                .map(|row| Vec4::from_array(cols.map(|col| row.dot(col)))),
        }
    }

    /// Multiplies the matrix by `v` taken as a column vector.
    #[inline]
    pub fn mul_vec(&self, v: Vec4) -> Vec4 {
        Vec4::from_array(self.rows.map(|row| row.dot(v)))
    }

    /// Multiplies `v`, taken as a row vector, by the matrix.
    #[inline]
    pub fn vec_mul(&self, v: Vec4) -> Vec4 {
        self.rows[0] * v.x() + self.rows[1] * v.y() + self.rows[2] * v.z() + self.rows[3] * v.w()
    }

    /// Transforms the point `(x, y, z, 1)` as a column vector and drops `w`.
    ///
    /// No perspective divide is applied.
    ///
    /// # Examples
    ///
    /// ```
    /// use linal_core::{Mat4, Vec3, Vec4};
    ///
    /// let mut translate = Mat4::IDENTITY;
    /// translate.set_row(0, Vec4::new(1.0, 0.0, 0.0, 5.0));
    /// assert_eq!(translate.transform_point3(Vec3::ZERO), Vec3::new(5.0, 0.0, 0.0));
    /// ```
    #[inline]
    pub fn transform_point3(&self, v: Vec3) -> Vec3 {
        let p = Vec4::new(v.x(), v.y(), v.z(), 1.0);
        Vec3::new(self.rows[0].dot(p), self.rows[1].dot(p), self.rows[2].dot(p))
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
        is_identity_flat::<4>(self.as_flat())
    }

    /// Every off-diagonal element is exactly `0.0`.
    #[inline]
    pub fn is_diagonal(&self) -> bool {
        is_diagonal_flat::<4>(self.as_flat())
    }

    /// Computes the determinant by cofactor expansion along the third row.
    ///
    /// Each of the four cofactors is a signed 3x3 minor evaluated with the
    /// Leibniz formula; the determinant is the dot product of row 2 with them.
    pub fn determinant(&self) -> f32 {
        let [m0, m1, m2, m3, m4, m5, m6, m7, m8, m9, m10, m11, m12, m13, m14, m15] =
            self.to_array();

        let c20 = det3(m1, m2, m3, m5, m6, m7, m13, m14, m15);
        let c21 = -det3(m0, m2, m3, m4, m6, m7, m12, m14, m15);
        let c22 = det3(m0, m1, m3, m4, m5, m7, m12, m13, m15);
        let c23 = -det3(m0, m1, m2, m4, m5, m6, m12, m13, m14);

        m8 * c20 + m9 * c21 + m10 * c22 + m11 * c23
    }

    /// Computes the inverse of the matrix through its adjugate.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::SingularMatrix`] if the determinant is exactly `0.0`.
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if det == 0.0 {
            log::debug!("Mat4 inverse rejected, determinant is exactly zero: {:?}", self);
            return Err(MathError::SingularMatrix { dimension: 4 });
        }
        let inv_det = 1.0 / det;
        let [m0, m1, m2, m3, m4, m5, m6, m7, m8, m9, m10, m11, m12, m13, m14, m15] =
            self.to_array();

        // Cofactor (i, j): signed minor with row i and column j removed.
        let cofactors = [
            det3(m5, m6, m7, m9, m10, m11, m13, m14, m15),
            -det3(m4, m6, m7, m8, m10, m11, m12, m14, m15),
            det3(m4, m5, m7, m8, m9, m11, m12, m13, m15),
            -det3(m4, m5, m6, m8, m9, m10, m12, m13, m14),
            -det3(m1, m2, m3, m9, m10, m11, m13, m14, m15),
            det3(m0, m2, m3, m8, m10, m11, m12, m14, m15),
            -det3(m0, m1, m3, m8, m9, m11, m12, m13, m15),
            det3(m0, m1, m2, m8, m9, m10, m12, m13, m14),
            det3(m1, m2, m3, m5, m6, m7, m13, m14, m15),
            -det3(m0, m2, m3, m4, m6, m7, m12, m14, m15),
            det3(m0, m1, m3, m4, m5, m7, m12, m13, m15),
            -det3(m0, m1, m2, m4, m5, m6, m12, m13, m14),
            -det3(m1, m2, m3, m5, m6, m7, m9, m10, m11),
            det3(m0, m2, m3, m4, m6, m7, m8, m10, m11),
            -det3(m0, m1, m3, m4, m5, m7, m8, m9, m11),
            det3(m0, m1, m2, m4, m5, m6, m8, m9, m10),
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

    /// Keeps the top-left 3x3 block.
    #[inline]
    pub fn to_mat3(&self) -> Mat3 {
        Mat3::from_rows(
            self.rows[0].to_vec3(),
            self.rows[1].to_vec3(),
            self.rows[2].to_vec3(),
        )
    }
}

impl Vec4 {
    /// Multiplies this row vector by `m`, see [`Mat4::vec_mul`].
    #[inline]
    pub fn mul_mat(self, m: Mat4) -> Vec4 {
        m.vec_mul(self)
    }
}

// --- Conversions ---

impl From<[f32; 16]> for Mat4 {
    #[inline]
    fn from(m: [f32; 16]) -> Self {
        Self::from_array(m)
    }
}

impl From<Mat4> for [f32; 16] {
    #[inline]
    fn from(m: Mat4) -> Self {
        m.to_array()
    }
}

impl From<Mat2> for Mat4 {
    #[inline]
    fn from(m: Mat2) -> Self {
        m.to_mat4()
    }
}

impl From<Mat3> for Mat4 {
    #[inline]
    fn from(m: Mat3) -> Self {
        m.to_mat4()
    }
}

impl TryFrom<&[f32]> for Mat4 {
    type Error = MathError;

    fn try_from(slice: &[f32]) -> Result<Self> {
        array_from_slice(slice).map(Self::from_array)
    }
}

impl approx::AbsDiffEq for Mat4 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        FLOAT_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.epsilon_eq(*other, epsilon)
    }
}

// --- Operators Overloading ---

impl Default for Mat4 {
    /// Returns the 4x4 identity matrix.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Add for Mat4 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        let mut out = self;
        for (o, r) in out.rows.iter_mut().zip(rhs.rows) {
            *o = *o + r;
        }
        out
    }
}

impl Mul<Mat4> for Mat4 {
    type Output = Self;
    /// Element-wise product. Use [`Mat4::mul_mat`] to compose transforms.
    #[inline]
    fn mul(self, rhs: Mat4) -> Self::Output {
        self.hadamard(rhs)
    }
}

impl Mul<f32> for Mat4 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        let mut m = self;
        m.scale(rhs);
        m
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;
    /// Transforms a column vector.
    #[inline]
    fn mul(self, rhs: Vec4) -> Self::Output {
        self.mul_vec(rhs)
    }
}

impl Mul<Mat4> for Vec4 {
    type Output = Vec4;
    #[inline]
    fn mul(self, rhs: Mat4) -> Self::Output {
        rhs.vec_mul(self)
    }
}

impl Neg for Mat4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            rows: self.rows.map(|r| -r),
        }
    }
}

impl Index<usize> for Mat4 {
    type Output = Vec4;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}

impl IndexMut<usize> for Mat4 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.rows[index]
    }
}

impl Index<(usize, usize)> for Mat4 {
    type Output = f32;
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.rows[row][col]
    }
}

impl IndexMut<(usize, usize)> for Mat4 {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.rows[row][col]
    }
}

// --- Tests ---
