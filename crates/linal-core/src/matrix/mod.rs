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

//! Provides the 2x2, 3x3 and 4x4 row-major matrix types.
//!
//! A matrix is stored as `N` row vectors. The element at row `r`, column `c`
//! also lives at index `r * N + c` of the flat view returned by `as_flat()`,
//! which borrows the same memory as the rows.
//!
//! Determinants are evaluated in closed form: the 2x2 cross product, the
//! 6-term Leibniz expansion for 3x3, and a cofactor expansion along the third
//! row for 4x4. Inversion uses the adjugate and is rejected only when the
//! determinant is exactly `0.0`.
//!
//! The `*` operator between two matrices is the element-wise (Hadamard)
//! product, matching `*` between two vectors. The algebraic product is
//! `mul_mat`.

mod mat2;
mod mat3;
mod mat4;

pub use self::mat2::Mat2;
pub use self::mat3::Mat3;
pub use self::mat4::Mat4;

use crate::scalar::FLOAT_EPSILON;

/// Determinant of the 3x3 matrix given row by row.
#[inline]
#[allow(clippy::too_many_arguments)]
pub(crate) fn det3(
    m00: f32,
    m01: f32,
    m02: f32,
    m10: f32,
    m11: f32,
    m12: f32,
    m20: f32,
    m21: f32,
    m22: f32,
) -> f32 {
    m00 * m11 * m22 + m01 * m12 * m20 + m02 * m10 * m21
        - m02 * m11 * m20
        - m01 * m10 * m22
        - m00 * m12 * m21
}

/// Every off-diagonal entry of the `N`x`N` flat matrix is exactly zero.
pub(crate) fn is_diagonal_flat<const N: usize>(flat: &[f32]) -> bool {
    flat.iter()
        .enumerate()
        .all(|(i, &v)| i / N == i % N || v == 0.0)
}

/// Diagonal within `1 ± FLOAT_EPSILON`, everything else exactly zero.
pub(crate) fn is_identity_flat<const N: usize>(flat: &[f32]) -> bool {
    flat.iter().enumerate().all(|(i, &v)| {
        if i / N == i % N {
            (1.0 - FLOAT_EPSILON..=1.0 + FLOAT_EPSILON).contains(&v)
        } else {
            v == 0.0
        }
    })
}

/// Swaps every `(r, c)` entry of the `N`x`N` flat matrix with `(c, r)`.
pub(crate) fn transpose_flat<const N: usize>(flat: &mut [f32]) {
    for r in 0..N {
        for c in (r + 1)..N {
            flat.swap(r * N + c, c * N + r);
        }
    }
}
