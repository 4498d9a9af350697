//! Reference model of the cooperative-matrix multiply-add
//!
//! Computes `R = A·B + c` in exact integer arithmetic and only then converts
//! to the accumulator type, so the golden values never depend on rounding.

use ndarray::{Array2, LinalgScalar};
use num_traits::ToPrimitive;
use std::fmt::Display;

use crate::constants::F64_EXACT_INTEGER_LIMIT;
use crate::error::{GenError, Result};

/// Expected output of `coopMatMulAdd(A, B, C)` with `C` filled with `acc_constant`
///
/// Fails if the shapes are not conformant or if any output element is not
/// exactly representable as an f32.
pub fn mul_add_constant<T>(a: &Array2<T>, b: &Array2<T>, acc_constant: f32) -> Result<Array2<f32>>
where
    T: LinalgScalar + ToPrimitive + Display,
{
    let (a_rows, a_cols) = a.dim();
    let (b_rows, b_cols) = b.dim();
    if a_cols != b_rows {
        return Err(GenError::ShapeMismatch {
            a_rows,
            a_cols,
            b_rows,
            b_cols,
        });
    }

    let product = a.dot(b);

    let mut result = Array2::<f32>::zeros((a_rows, b_cols));
    for (out, value) in result.iter_mut().zip(product.iter()) {
        *out = exact_f32_sum(value, acc_constant)?;
    }
    Ok(result)
}

/// `value + acc_constant` as an f32, or an error if that loses precision
fn exact_f32_sum<T: ToPrimitive + Display>(value: &T, acc_constant: f32) -> Result<f32> {
    let inexact = || GenError::InexactValue {
        value: format!("{} + {:?}", value, acc_constant),
        element: "float",
    };

    let integer = value.to_i64().ok_or_else(inexact)?;
    if integer.unsigned_abs() > F64_EXACT_INTEGER_LIMIT as u64 {
        return Err(inexact());
    }

    let wide = integer as f64 + f64::from(acc_constant);
    let narrow = wide as f32;
    if wide - integer as f64 != f64::from(acc_constant) || f64::from(narrow) != wide {
        return Err(inexact());
    }
    Ok(narrow)
}
