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

use anyhow::Result;
use approx::assert_abs_diff_eq;
use linal_core::{Mat2, Mat3, Mat4, MathError, Vec2, Vec3, Vec4, FLOAT_EPSILON};

// --- Reference helpers, independent of the library's own products ---

fn reference_product<const N: usize>(a: &[f32], b: &[f32]) -> Vec<f32> {
    let mut out = vec![0.0; N * N];
    for r in 0..N {
        for c in 0..N {
            let mut acc = 0.0_f64;
            for k in 0..N {
                acc += f64::from(a[r * N + k]) * f64::from(b[k * N + c]);
            }
            out[r * N + c] = acc as f32;
        }
    }
    out
}

fn assert_near_identity<const N: usize>(flat: &[f32], tolerance: f32) {
    for r in 0..N {
        for c in 0..N {
            let expected = if r == c { 1.0 } else { 0.0 };
            let got = flat[r * N + c];
            assert!(
                (got - expected).abs() <= tolerance,
                "element ({r}, {c}) = {got}, expected {expected}"
            );
        }
    }
}

fn scenario_matrix() -> Mat4 {
    Mat4::new(
        6.0, 8.0, 2.0, 9.0, //
        2.0, 3.0, 2.0, 1.0, //
        5.0, 7.0, 6.0, 8.0, //
        7.0, 3.0, 9.0, 4.0,
    )
}

fn invertible_samples() -> (Mat2, Mat3, Mat4) {
    (
        Mat2::new(4.0, 7.0, 2.0, 6.0),
        Mat3::new(2.0, 0.0, 1.0, 1.0, 3.0, 2.0, 1.0, 1.0, 2.0),
        scenario_matrix(),
    )
}

// --- Vector properties ---

#[test]
fn normalize_is_a_fixed_point() {
    let tolerance = 4.0 * FLOAT_EPSILON;
    let samples = [
        Vec3::new(3.0, -4.0, 12.0),
        Vec3::new(1e-3, 2e-3, -5e-4),
        Vec3::new(-250.0, 0.5, 1.0),
        Vec3::ZERO,
    ];
    for sample in samples {
        let mut v = sample;
        v.normalize();
        let once = v;
        let len = v.normalize();
        assert!((len - 1.0).abs() <= tolerance, "{sample:?} gave {len}");
        assert!(v.epsilon_eq(once, tolerance));
    }

    let mut v2 = Vec2::new(-7.0, 0.25);
    v2.normalize();
    assert!((v2.normalize() - 1.0).abs() <= tolerance);

    let mut v4 = Vec4::new(1.0, 2.0, 3.0, 4.0);
    v4.normalize();
    assert!((v4.normalize() - 1.0).abs() <= tolerance);
}

#[test]
fn epsilon_eq_is_reflexive_and_symmetric() {
    let a = Vec4::new(1.0, -2.0, 3.5, 0.0);
    let b = Vec4::new(1.1, -2.0, 3.4, 0.05);
    for eps in [0.0, 0.05, 0.1, 0.2, 1.0] {
        assert!(a.epsilon_eq(a, eps));
        assert_eq!(a.epsilon_eq(b, eps), b.epsilon_eq(a, eps));
    }

    let m = scenario_matrix();
    let n = m * 1.000_1;
    for eps in [0.0, 1e-4, 1e-3, 1e-2] {
        assert!(m.epsilon_eq(m, eps));
        assert_eq!(m.epsilon_eq(n, eps), n.epsilon_eq(m, eps));
    }
}

#[test]
fn copied_vector_compares_exactly() {
    let v = Vec2::new(5.0, 3.0);
    let v2 = v;
    assert!(v.exact_eq(v2));
    assert!(v2.exact_eq(v));
}

#[test]
fn epsilon_eq_stays_reflexive_for_non_finite_components() {
    let mut v = Vec2::new(0.0, 2.0);
    v.invert();
    assert!(v.epsilon_eq(v, 1.0));

    let nan = Vec3::new(f32::NAN, 0.0, 0.0);
    assert!(!nan.exact_eq(nan));
    for eps in [0.0, 1.0, f32::MAX] {
        assert!(nan.epsilon_eq(nan, eps));
    }

    let m = Mat2::from_rows(v, v);
    assert!(m.epsilon_eq(m, 1.0));
    assert!(!m.exact_eq(Mat2::IDENTITY));
    assert!(!m.epsilon_eq(Mat2::from_rows(v, Vec2::new(f32::INFINITY, 2.0)), 1.0));

    let m4 = Mat4::from_array([f32::INFINITY; 16]);
    assert!(m4.epsilon_eq(m4, 0.0));
}

#[test]
fn normalize_is_a_fixed_point_for_large_components() {
    let tolerance = 4.0 * FLOAT_EPSILON;
    let mut v2 = Vec2::new(1e20, 1e20);
    v2.normalize();
    assert!((v2.normalize() - 1.0).abs() <= tolerance);

    let mut v4 = Vec4::new(-2e38, 1e38, 1e38, 0.0);
    assert!(v4.length().is_finite());
    v4.normalize();
    assert!((v4.normalize() - 1.0).abs() <= tolerance);
}

// --- Matrix properties ---

#[test]
fn identity_determinant_is_exactly_one() {
    assert_eq!(Mat2::IDENTITY.determinant(), 1.0);
    assert_eq!(Mat3::IDENTITY.determinant(), 1.0);
    assert_eq!(Mat4::IDENTITY.determinant(), 1.0);
}

#[test]
fn double_transpose_is_exact() {
    let (m2, m3, m4) = invertible_samples();
    let odd = Mat4::from_array(std::array::from_fn(|i| (i as f32).sin() * 1e3));

    assert!(m2.transposed().transposed().exact_eq(m2));
    assert!(m3.transposed().transposed().exact_eq(m3));
    assert!(m4.transposed().transposed().exact_eq(m4));
    assert!(odd.transposed().transposed().exact_eq(odd));
}

#[test]
fn inverse_times_original_is_identity() {
    let (m2, m3, m4) = invertible_samples();

    let inv2 = m2.inverse().expect("invertible");
    assert_near_identity::<2>(&reference_product::<2>(m2.as_flat(), inv2.as_flat()), 1e-5);

    let inv3 = m3.inverse().expect("invertible");
    assert_near_identity::<3>(&reference_product::<3>(m3.as_flat(), inv3.as_flat()), 1e-5);

    let inv4 = m4.inverse().expect("invertible");
    assert_near_identity::<4>(&reference_product::<4>(m4.as_flat(), inv4.as_flat()), 1e-3);
}

#[test]
fn mul_mat_agrees_with_reference_product() {
    let a = scenario_matrix();
    let b = a.transposed() * 0.5;
    let ours = a.mul_mat(b);
    let reference = reference_product::<4>(a.as_flat(), b.as_flat());
    assert_eq!(ours.as_flat().as_slice(), reference.as_slice());
}

#[test]
fn double_inverse_recovers_original() -> Result<()> {
    let (m2, m3, m4) = invertible_samples();
    assert_abs_diff_eq!(m2.inverse()?.inverse()?, m2, epsilon = 1e-5);
    assert_abs_diff_eq!(m3.inverse()?.inverse()?, m3, epsilon = 1e-5);
    assert_abs_diff_eq!(m4.inverse()?.inverse()?, m4, epsilon = 1e-3);
    Ok(())
}

#[test]
fn is_identity_tolerates_machine_epsilon_on_the_diagonal() {
    let eps = FLOAT_EPSILON;
    assert!(Mat2::new(1.0, 0.0, 0.0, 1.0).is_identity());
    assert!(Mat2::new(1.0 + eps, 0.0, 0.0, 1.0 - eps).is_identity());
    assert!(Mat3::new(1.0 - eps, 0.0, 0.0, 0.0, 1.0 + eps, 0.0, 0.0, 0.0, 1.0).is_identity());

    let mut m4 = Mat4::IDENTITY;
    for i in 0..4 {
        m4[(i, i)] = if i % 2 == 0 { 1.0 + eps } else { 1.0 - eps };
    }
    assert!(m4.is_identity());

    for r in 0..4 {
        for c in 0..4 {
            if r == c {
                continue;
            }
            let mut off = Mat4::IDENTITY;
            off[(r, c)] = eps;
            assert!(!off.is_identity(), "({r}, {c}) should break identity");
        }
    }
}

// --- Scenarios ---

#[test]
fn mat2_identity_scenario() {
    let m = Mat2::new(1.0, 0.0, 0.0, 1.0);
    assert!(m.is_identity());
    assert_eq!(m.determinant(), 1.0);
    assert_eq!(m * Vec2::new(5.0, 3.0), Vec2::new(5.0, 3.0));
}

#[test]
fn scenario_matrix_inverts() -> Result<()> {
    let original = scenario_matrix();
    assert_ne!(original.determinant(), 0.0);

    let mut inverse = original;
    inverse.invert()?;
    assert_near_identity::<4>(
        &reference_product::<4>(original.as_flat(), inverse.as_flat()),
        1e-3,
    );
    assert_abs_diff_eq!(original.mul_mat(inverse), Mat4::IDENTITY, epsilon = 1e-3);
    Ok(())
}

#[test]
fn duplicate_rows_leave_matrix_untouched() {
    let mut m = scenario_matrix();
    m.set_row(2, m.row(0));
    let bits_before = m.to_array().map(f32::to_bits);

    let err = m.invert().unwrap_err();
    assert_eq!(err, MathError::SingularMatrix { dimension: 4 });
    assert_eq!(m.to_array().map(f32::to_bits), bits_before);

    let mut m3 = Mat3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 1.0, 2.0, 3.0);
    let before3 = m3.to_array().map(f32::to_bits);
    assert!(m3.invert().is_err());
    assert_eq!(m3.to_array().map(f32::to_bits), before3);
}

#[test]
fn slices_of_the_wrong_length_are_rejected() {
    let data = [0.0_f32; 16];
    assert!(Mat4::try_from(&data[..]).is_ok());
    assert_eq!(
        Mat3::try_from(&data[..]),
        Err(MathError::LengthMismatch {
            expected: 9,
            actual: 16
        })
    );
    assert!(Vec4::try_from(&data[..3]).is_err());
}

#[cfg(feature = "serde")]
#[test]
fn serde_json_round_trip() -> Result<()> {
    let v = Vec3::new(1.0, -2.0, 0.5);
    let json = serde_json::to_string(&v)?;
    assert_eq!(json, "[1.0,-2.0,0.5]");
    assert_eq!(serde_json::from_str::<Vec3>(&json)?, v);

    let m = scenario_matrix();
    let back: Mat4 = serde_json::from_str(&serde_json::to_string(&m)?)?;
    assert!(back.exact_eq(m));
    Ok(())
}

#[cfg(feature = "serde")]
#[test]
fn bincode_round_trip() -> Result<()> {
    let config = bincode::config::standard();
    let m = Mat2::new(1.0, 2.0, 3.0, 4.0);
    let bytes = bincode::encode_to_vec(m, config)?;
    assert_eq!(bytes.len(), 4 * std::mem::size_of::<f32>());
    let (decoded, read): (Mat2, usize) = bincode::decode_from_slice(&bytes, config)?;
    assert_eq!(read, bytes.len());
    assert_eq!(decoded, m);
    Ok(())
}
