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

//! # Linal Core
//!
//! A small-dimension linear-algebra kernel: fixed-size vectors with 2, 3 or 4
//! `f32` components and the matching square matrices, stored row-major.
//!
//! The interesting numerics live in [`matrix`]: closed-form cofactor expansion
//! for determinants, adjugate inverses with exact singularity detection, and
//! identity/diagonal classification. Everything else is total over IEEE floats,
//! so infinities and NaNs propagate instead of raising errors.
//!
//! All angular functions operate in **radians**.

#![warn(missing_docs)]

pub mod error;
pub mod format;
pub mod matrix;
pub mod scalar;
pub mod vector;

pub use self::error::{MathError, Result};
pub use self::format::ScalarRows;
pub use self::matrix::{Mat2, Mat3, Mat4};
pub use self::scalar::{
    E, FLOAT_EPSILON, FLOAT_INFINITY, HALF_PI, INV_PI, PI, SQRT_HALF, SQRT_THREE, SQRT_TWO,
    TWO_PI,
};
pub use self::vector::{Vec2, Vec3, Vec4};
