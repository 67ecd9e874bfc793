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

//! Provides the 2D, 3D and 4D vector types and their associated operations.
//!
//! Each vector stores its components in one flat `[f32; N]`. The named
//! accessors (`x()`, `y()`, ...) and indexing (`v[0]`, ...) read the same
//! slot, so both views always agree.
//!
//! Operations come in two flavours:
//! - in-place methods on `&mut self` (`normalize`, `invert`, `negate`,
//!   `scale`, `clamp`), which mutate only the receiver;
//! - value methods and operator overloads, which return a fresh vector and
//!   never touch their inputs.

mod vec2;
mod vec3;
mod vec4;

pub use self::vec2::Vec2;
pub use self::vec3::Vec3;
pub use self::vec4::Vec4;

use crate::error::{MathError, Result};

/// Euclidean norm of `m` that stays finite when the sum of squares would overflow.
///
/// The plain `sqrt(dot)` is used whenever it is finite. Otherwise the components
/// are scaled by the largest magnitude first, which keeps the result finite for
/// any finite input up to `f32::MAX / sqrt(N)`.
pub(crate) fn scaled_length(m: &[f32]) -> f32 {
    let sq: f32 = m.iter().map(|c| c * c).sum();
    if sq.is_finite() {
        return sq.sqrt();
    }
    let max = m.iter().fold(0.0_f32, |acc, c| acc.max(c.abs()));
    if max == 0.0 || !max.is_finite() {
        return sq.sqrt();
    }
    let scaled: f32 = m.iter().map(|c| (c / max) * (c / max)).sum();
    max * scaled.sqrt()
}

/// Copies a slice into an `N`-component array, rejecting any other length.
pub(crate) fn array_from_slice<const N: usize>(slice: &[f32]) -> Result<[f32; N]> {
    <[f32; N]>::try_from(slice).map_err(|_| MathError::LengthMismatch {
        expected: N,
        actual: slice.len(),
    })
}
