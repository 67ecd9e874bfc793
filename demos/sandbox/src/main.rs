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

// Linal Sandbox
// Walks through the kernel: identity checks, tolerance, inversion.

use anyhow::Result;
use linal_core::{Mat2, Mat3, Mat4, ScalarRows, Vec2, FLOAT_EPSILON};

fn report_identity(name: &str, is_identity: bool) {
    if is_identity {
        log::info!("{name} is an identity matrix");
    } else {
        log::info!("{name} is not an identity matrix");
    }
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    // 2x2 identity against a vector.
    let m2 = Mat2::new(1.0, 0.0, 0.0, 1.0);
    report_identity("m2", m2.is_identity());
    let v = Vec2::new(5.0, 3.0);
    println!("v = {v}");
    println!("m2 =\n{m2:#}");
    println!("m2 * v = {}", m2 * v);

    // Diagonal nudged by machine epsilon still counts as identity.
    let m3 = Mat3::new(
        1.0 + FLOAT_EPSILON,
        0.0,
        0.0,
        0.0,
        1.0 - FLOAT_EPSILON,
        0.0,
        0.0,
        0.0,
        1.0,
    );
    report_identity("m3", m3.is_identity());

    let mut near = Mat4::IDENTITY;
    near[(1, 1)] = 1.0 - FLOAT_EPSILON;
    near[(3, 3)] = 1.0 + FLOAT_EPSILON;
    report_identity("m4", near.is_identity());

    let original = Mat4::new(
        6.0, 8.0, 2.0, 9.0, //
        2.0, 3.0, 2.0, 1.0, //
        5.0, 7.0, 6.0, 8.0, //
        7.0, 3.0, 9.0, 4.0,
    );
    println!("a =\n{:#}", original);
    log::info!("det(a) = {}", original.determinant());

    let mut inverse = original;
    inverse.invert()?;
    println!("inverse(a) =\n{}", inverse.to_pretty_string(5));

    let product = original.mul_mat(inverse);
    println!("a * inverse(a) =\n{:#.5}", product);
    log::info!(
        "a * inverse(a) is identity within 1e-3: {}",
        product.epsilon_eq(Mat4::IDENTITY, 1e-3)
    );

    Ok(())
}
