// Matrix formatting, exactness checks and the reference model

pub mod format;
pub mod reference;

use ndarray::Array2;

use crate::config::ElementType;
use crate::error::{GenError, Result};

pub use format::{matrix_literal, LiteralScalar, ROW_SEPARATOR};
pub use reference::mul_add_constant;

/// Input matrix as drawn by the sampler
pub type InputMatrix = Array2<i64>;

/// Output matrix in the accumulator type
pub type OutputMatrix = Array2<f32>;

/// Check that every input value survives a round trip through `element`
pub fn ensure_exact_inputs(matrix: &InputMatrix, element: ElementType) -> Result<()> {
    for &value in matrix.iter() {
        let wide = value as f64;
        let round_trip = match element {
            ElementType::Float16 => half::f16::from_f64(wide).to_f64(),
            ElementType::Float32 => f64::from(wide as f32),
        };
        if round_trip != wide {
            return Err(GenError::InexactValue {
                value: value.to_string(),
                element: element.glsl_name(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_small_integers_fit_float16() {
        let m = array![[0i64, 1, 2, 3], [2048, 3, 2, 1]];
        assert!(ensure_exact_inputs(&m, ElementType::Float16).is_ok());
    }

    #[test]
    fn test_float16_rejects_wide_integers() {
        // 2049 needs 12 mantissa bits
        let m = array![[2049i64]];
        assert!(matches!(
            ensure_exact_inputs(&m, ElementType::Float16),
            Err(GenError::InexactValue { element: "float16_t", .. })
        ));
        assert!(ensure_exact_inputs(&m, ElementType::Float32).is_ok());
    }
}
