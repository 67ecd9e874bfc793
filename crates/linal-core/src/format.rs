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

//! Human-readable rendering of vectors and matrices.
//!
//! `Display` prints every scalar on one line, separated by single spaces, in
//! row-major order. The formatter's precision is honoured (`{:.3}`), and the
//! alternate flag (`{:#}`) breaks a matrix into one line per row.

use crate::matrix::{Mat2, Mat3, Mat4};
use crate::vector::{Vec2, Vec3, Vec4};
use std::fmt::{self, Write};

/// Read access to the scalars of a vector or matrix, in row-major order.
pub trait ScalarRows {
    /// Every scalar, row after row.
    fn scalars(&self) -> &[f32];

    /// How many scalars make up one printed row.
    fn row_len(&self) -> usize;

    /// Renders all scalars on one line with exactly `prec` decimal digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use linal_core::{ScalarRows, Vec3};
    ///
    /// assert_eq!(Vec3::new(1.0, -2.5, 0.2).to_string_prec(2), "1.00 -2.50 0.20");
    /// ```
    fn to_string_prec(&self, prec: usize) -> String {
        self.scalars()
            .iter()
            .map(|v| format!("{v:.prec$}"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Renders one row per line with `prec` decimal digits and no trailing newline.
    fn to_pretty_string(&self, prec: usize) -> String {
        self.scalars()
            .chunks(self.row_len())
            .map(|row| {
                row.iter()
                    .map(|v| format!("{v:.prec$}"))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn write_scalars(f: &mut fmt::Formatter<'_>, scalars: &[f32], row_len: usize) -> fmt::Result {
    let pretty = f.alternate();
    for (i, v) in scalars.iter().enumerate() {
        if i > 0 {
            f.write_char(if pretty && i % row_len == 0 { '\n' } else { ' ' })?;
        }
        match f.precision() {
            Some(prec) => write!(f, "{v:.prec$}")?,
            None => write!(f, "{v}")?,
        }
    }
    Ok(())
}

macro_rules! impl_scalar_rows {
    ($($ty:ty => $view:ident, $row_len:expr;)*) => {$(
        impl ScalarRows for $ty {
            #[inline]
            fn scalars(&self) -> &[f32] {
                self.$view()
            }

            #[inline]
            fn row_len(&self) -> usize {
                $row_len
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write_scalars(f, self.scalars(), self.row_len())
            }
        }
    )*};
}

impl_scalar_rows! {
    Vec2 => as_array, 2;
    Vec3 => as_array, 3;
    Vec4 => as_array, 4;
    Mat2 => as_flat, 2;
    Mat3 => as_flat, 3;
    Mat4 => as_flat, 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_display() {
        assert_eq!(Vec2::new(5.0, 3.0).to_string(), "5 3");
        assert_eq!(format!("{:.2}", Vec2::new(5.0, 3.0)), "5.00 3.00");
        assert_eq!(Vec3::new(0.5, -1.0, 2.0).to_string(), "0.5 -1 2");
        assert_eq!(format!("{:#}", Vec4::ONE), "1 1 1 1");
    }

    #[test]
    fn test_matrix_display() {
        assert_eq!(Mat2::IDENTITY.to_string(), "1 0 0 1");
        assert_eq!(format!("{:#}", Mat2::IDENTITY), "1 0\n0 1");
        assert_eq!(
            format!("{:#.1}", Mat3::IDENTITY),
            "1.0 0.0 0.0\n0.0 1.0 0.0\n0.0 0.0 1.0"
        );
        let shown = format!("{:#}", Mat4::IDENTITY);
        assert_eq!(shown.lines().count(), 4);
        assert!(!shown.ends_with('\n'));
    }

    #[test]
    fn test_to_string_prec() {
        let m = Mat2::new(1.0, -0.5, 0.25, 2.0);
        assert_eq!(m.to_string_prec(3), "1.000 -0.500 0.250 2.000");
        assert_eq!(Mat2::new(1.0, -2.0, 3.0, 4.0).to_string_prec(0), "1 -2 3 4");
        assert_eq!(Vec2::new(1.0, 2.0).to_string_prec(1), "1.0 2.0");
    }

    #[test]
    fn test_to_string_prec_matches_display_precision() {
        let m = Mat4::from_array(std::array::from_fn(|i| i as f32 * -0.5));
        assert_eq!(m.to_string_prec(2), format!("{m:.2}"));
        assert_eq!(m.to_string_prec(2).split(' ').count(), 16);
        assert_eq!(Vec4::ZERO.to_string_prec(0), "0 0 0 0");
    }

    #[test]
    fn test_to_pretty_string() {
        let m = Mat3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        assert_eq!(m.to_pretty_string(0), "1 2 3\n4 5 6\n7 8 9");
        assert_eq!(Vec3::ONE.to_pretty_string(1), "1.0 1.0 1.0");
    }

    #[test]
    fn test_scalars_are_row_major() {
        let m = Mat2::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(m.scalars(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.row_len(), 2);
        assert_eq!(Vec4::W.scalars(), &[0.0, 0.0, 0.0, 1.0]);
    }
}
