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

//! Dimension-independent scalar helpers and numeric constants.
//!
//! Every function here is a pure function of its arguments. The thin wrappers
//! around `f32` methods exist so that vector and matrix code, and callers that
//! mirror it, share one vocabulary.

// --- Fundamental Constants ---

/// Archimedes' constant (π).
pub const PI: f32 = std::f32::consts::PI;
/// π * 2.
pub const TWO_PI: f32 = std::f32::consts::TAU;
/// π / 2.
pub const HALF_PI: f32 = std::f32::consts::FRAC_PI_2;
/// 1 / π.
pub const INV_PI: f32 = std::f32::consts::FRAC_1_PI;
/// Euler's number (e).
pub const E: f32 = std::f32::consts::E;
/// √2.
pub const SQRT_TWO: f32 = std::f32::consts::SQRT_2;
/// √3.
pub const SQRT_THREE: f32 = 1.732_050_8;
/// √(1/2).
pub const SQRT_HALF: f32 = std::f32::consts::FRAC_1_SQRT_2;
/// A large finite sentinel used where "infinitely far" is meant.
///
/// Unlike `f32::INFINITY`, multiplying it by zero yields zero rather than NaN.
pub const FLOAT_INFINITY: f32 = 1e30;
/// The smallest `ε` for which `1.0 + ε != 1.0` in single precision.
pub const FLOAT_EPSILON: f32 = f32::EPSILON;

// --- Min / Max / Clamp ---

/// Returns the smaller of `a` and `b`.
#[inline]
pub fn min2(a: f32, b: f32) -> f32 {
    if a < b {
        a
    } else {
        b
    }
}

/// Returns the smaller of `a` and `b`.
#[inline]
pub fn min2i(a: i32, b: i32) -> i32 {
    if a < b {
        a
    } else {
        b
    }
}

/// Returns the larger of `a` and `b`.
#[inline]
pub fn max2(a: f32, b: f32) -> f32 {
    if a > b {
        a
    } else {
        b
    }
}

/// Returns the larger of `a` and `b`.
#[inline]
pub fn max2i(a: i32, b: i32) -> i32 {
    if a > b {
        a
    } else {
        b
    }
}

/// Clamps `val` into `[min, max]`.
///
/// The lower bound is checked first, so when `min > max` the result is `min`
/// for values below `min` and `max` for everything above `max`.
///
/// # Examples
///
/// ```
/// use linal_core::scalar::clamp3;
/// assert_eq!(clamp3(0.0, 1.0, 1.5), 1.0);
/// assert_eq!(clamp3(0.0, 1.0, -1.0), 0.0);
/// assert_eq!(clamp3(0.0, 1.0, 0.5), 0.5);
/// ```
#[inline]
pub fn clamp3(min: f32, max: f32, val: f32) -> f32 {
    if val < min {
        min
    } else if val > max {
        max
    } else {
        val
    }
}

/// Integer counterpart of [`clamp3`].
#[inline]
pub fn clamp3i(min: i32, max: i32, val: i32) -> i32 {
    if val < min {
        min
    } else if val > max {
        max
    } else {
        val
    }
}

// --- Interpolation ---

/// Scalar interpolation helper, computed as `t * a + b`.
///
/// This is not the affine `a + t * (b - a)`; callers that want a blend between
/// two values should use `Vec2::lerp` and friends, which are affine.
///
/// # Examples
///
/// ```
/// use linal_core::scalar::lerp;
/// assert_eq!(lerp(2.0, 1.0, 0.5), 2.0);
/// ```
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    t * a + b
}

/// Integer counterpart of [`lerp`]; the result is truncated toward zero.
#[inline]
pub fn lerpi(a: i32, b: i32, t: f32) -> i32 {
    (t * a as f32 + b as f32) as i32
}

// --- Roots and powers ---

/// Approximates `1 / sqrt(x)` with the bit-level magic-constant trick and one
/// Newton-Raphson step.
///
/// The relative error is below 0.2% for positive normal inputs. For `x == 0.0`
/// the result is a very large finite number rather than infinity.
#[inline]
pub fn fast_inverse_sqrt(x: f32) -> f32 {
    let half = x * 0.5;
    let y = f32::from_bits(0x5f37_59df_u32.wrapping_sub(x.to_bits() >> 1));
    y * (1.5 - half * y * y)
}

/// Square root.
#[inline]
pub fn sqrt(x: f32) -> f32 {
    x.sqrt()
}

/// Returns `x * x`.
#[inline]
pub fn sqr(x: f32) -> f32 {
    x * x
}

/// Raises `x` to the power `y`.
#[inline]
pub fn pow(x: f32, y: f32) -> f32 {
    x.powf(y)
}

/// Integer power computed through floating-point `pow` and truncated.
///
/// Results outside the `i32` range saturate.
///
/// # Examples
///
/// ```
/// use linal_core::scalar::pow2i;
/// assert_eq!(pow2i(2, 10), 1024);
/// assert_eq!(pow2i(3, 0), 1);
/// ```
#[inline]
pub fn pow2i(x: i32, y: i32) -> i32 {
    f64::from(x).powf(f64::from(y)) as i32
}

/// Returns `e^x`.
#[inline]
pub fn exp(x: f32) -> f32 {
    x.exp()
}

/// Natural logarithm.
#[inline]
pub fn ln(x: f32) -> f32 {
    x.ln()
}

// --- Trigonometry ---

/// Sine of `a` (radians), in `[-1, 1]`.
#[inline]
pub fn sin(a: f32) -> f32 {
    a.sin()
}

/// Cosine of `a` (radians), in `[-1, 1]`.
#[inline]
pub fn cos(a: f32) -> f32 {
    a.cos()
}

/// Returns `(sin(a), cos(a))`.
#[inline]
pub fn sin_cos(a: f32) -> (f32, f32) {
    (sin(a), cos(a))
}

/// Tangent of `a` (radians).
#[inline]
pub fn tan(a: f32) -> f32 {
    a.tan()
}

/// Arcsine, in `[-π/2, π/2]`. `a` must lie in `[-1, 1]`.
#[inline]
pub fn asin(a: f32) -> f32 {
    a.asin()
}

/// Arccosine, in `[0, π]`. `a` must lie in `[-1, 1]`.
#[inline]
pub fn acos(a: f32) -> f32 {
    a.acos()
}

/// Arctangent, in `[-π/2, π/2]`.
#[inline]
pub fn atan(a: f32) -> f32 {
    a.atan()
}

/// Four-quadrant arctangent of `y / x`, in `[-π, π]`.
#[inline]
pub fn atan2(y: f32, x: f32) -> f32 {
    y.atan2(x)
}

// --- Absolute value and rounding ---

/// Absolute value.
#[inline]
pub fn abs(x: f32) -> f32 {
    if x < 0.0 {
        -x
    } else {
        x
    }
}

/// Absolute value. Wraps for `i32::MIN`.
#[inline]
pub fn absi(x: i32) -> i32 {
    if x < 0 {
        x.wrapping_neg()
    } else {
        x
    }
}

/// Largest integer value not greater than `f`.
#[inline]
pub fn floor(f: f32) -> f32 {
    f.floor()
}

/// Smallest integer value not less than `f`.
#[inline]
pub fn ceil(f: f32) -> f32 {
    f.ceil()
}

/// Nearest integer value, halfway cases away from zero.
#[inline]
pub fn round(f: f32) -> f32 {
    f.round()
}

/// Integer part of `f`, rounding toward zero.
#[inline]
pub fn trunc(f: f32) -> f32 {
    f.trunc()
}

/// Fractional part measured from the floor: `f - floor(f)`, always in `[0, 1)`.
#[inline]
pub fn frac(f: f32) -> f32 {
    f - floor(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_constants() {
        assert_relative_eq!(TWO_PI, PI * 2.0);
        assert_relative_eq!(HALF_PI, PI / 2.0);
        assert_relative_eq!(INV_PI, 1.0 / PI);
        assert_relative_eq!(SQRT_THREE * SQRT_THREE, 3.0, epsilon = 1e-6);
        assert_relative_eq!(SQRT_HALF * SQRT_TWO, 1.0, epsilon = 1e-6);
        assert!(FLOAT_INFINITY.is_finite());
        assert_ne!(1.0 + FLOAT_EPSILON, 1.0);
        assert_eq!(1.0 + FLOAT_EPSILON / 2.0, 1.0);
    }

    #[test]
    fn test_min_max() {
        assert_eq!(min2(1.0, 2.0), 1.0);
        assert_eq!(max2(1.0, 2.0), 2.0);
        assert_eq!(min2i(-3, 4), -3);
        assert_eq!(max2i(-3, 4), 4);
    }

    #[test]
    fn test_clamp3() {
        assert_eq!(clamp3(-1.0, 1.0, 0.25), 0.25);
        assert_eq!(clamp3(-1.0, 1.0, -5.0), -1.0);
        assert_eq!(clamp3(-1.0, 1.0, 5.0), 1.0);
        assert_eq!(clamp3i(0, 10, 11), 10);
        assert_eq!(clamp3i(0, 10, -1), 0);
    }

    #[test]
    fn test_lerp_is_scaled_offset() {
        // t * a + b, not an affine blend.
        assert_eq!(lerp(4.0, 1.0, 0.5), 3.0);
        assert_eq!(lerp(4.0, 1.0, 0.0), 1.0);
        assert_eq!(lerpi(4, 1, 0.5), 3);
        assert_eq!(lerpi(3, 0, 0.5), 1);
    }

    #[test]
    fn test_fast_inverse_sqrt() {
        for x in [0.25_f32, 1.0, 2.0, 4.0, 100.0, 12345.0] {
            let exact = 1.0 / x.sqrt();
            assert_relative_eq!(fast_inverse_sqrt(x), exact, max_relative = 2e-3);
        }
        let at_zero = fast_inverse_sqrt(0.0);
        assert!(at_zero.is_finite());
        assert!(at_zero > 1e18);
    }

    #[test]
    fn test_powers_and_roots() {
        assert_eq!(sqr(3.0), 9.0);
        assert_eq!(sqrt(9.0), 3.0);
        assert_relative_eq!(pow(2.0, 0.5), SQRT_TWO);
        assert_eq!(pow2i(2, 8), 256);
        assert_eq!(pow2i(-2, 3), -8);
        assert_relative_eq!(exp(1.0), E);
        assert_relative_eq!(ln(E), 1.0);
    }

    #[test]
    fn test_trig() {
        let (s, c) = sin_cos(HALF_PI);
        assert_relative_eq!(s, 1.0);
        assert!(c.abs() < 1e-6);
        assert_relative_eq!(tan(PI / 4.0), 1.0, epsilon = 1e-6);
        assert_relative_eq!(asin(1.0), HALF_PI);
        assert_relative_eq!(acos(-1.0), PI);
        assert_relative_eq!(atan(1.0), PI / 4.0);
        assert_relative_eq!(atan2(1.0, -1.0), 3.0 * PI / 4.0);
    }

    #[test]
    fn test_abs_and_rounding() {
        assert_eq!(abs(-2.5), 2.5);
        assert_eq!(abs(2.5), 2.5);
        assert_eq!(absi(-7), 7);
        assert_eq!(floor(-1.5), -2.0);
        assert_eq!(ceil(-1.5), -1.0);
        assert_eq!(round(2.5), 3.0);
        assert_eq!(trunc(-1.7), -1.0);
        assert_relative_eq!(frac(1.25), 0.25);
        assert_relative_eq!(frac(-1.25), 0.75);
    }
}
