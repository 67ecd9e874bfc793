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

//! Error types reported by the kernel.
//!
//! Almost every operation is total, so the taxonomy is small: inverting a
//! singular matrix, and building a vector or matrix from a slice of the wrong
//! length.

use thiserror::Error;

/// An error produced by a fallible vector or matrix operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// The determinant was exactly `0.0`, so the matrix has no inverse.
    ///
    /// The matrix that was being inverted is left untouched.
    #[error("{dimension}x{dimension} matrix is singular (determinant is exactly zero)")]
    SingularMatrix {
        /// The order `N` of the `NxN` matrix.
        dimension: usize,
    },
    /// A flat scalar slice did not hold the number of components the target needs.
    #[error("expected {expected} scalars, got {actual}")]
    LengthMismatch {
        /// Number of scalars the target type is made of.
        expected: usize,
        /// Number of scalars that were supplied.
        actual: usize,
    },
}

/// Shorthand for results whose error is a [`MathError`].
pub type Result<T> = std::result::Result<T, MathError>;
