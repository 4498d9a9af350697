//! Deterministic input sampling
//!
//! One [`Sampler`] owns the single generator stream of a batch. It is created
//! through [`Sampler::checked`], which refuses to hand out a stream whose
//! first draw does not match the known literal, and then advances strictly
//! in case order.

pub mod mt19937;

use ndarray::Array2;
use tracing::{debug, error};

use crate::config::GeneratorConfig;
use crate::error::{GenError, Result};
pub use mt19937::Mt19937;

/// Seeded, self-checked source of input matrices
#[derive(Debug, Clone)]
pub struct Sampler {
    rng: Mt19937,
    value_range: u32,
}

impl Sampler {
    /// Seed a generator, run the self-check draw on it and keep advancing the
    /// same stream afterwards.
    pub fn checked(config: &GeneratorConfig) -> Result<Self> {
        let mut rng = Mt19937::from_seed(config.seed);
        verify_stream(&mut rng, config.self_check_bound, config.self_check_value)?;
        debug!(seed = config.seed, "PRNG self-check passed");

        if config.value_range == 0 {
            return Err(GenError::Config("value range must be positive".into()));
        }
        Ok(Self {
            rng,
            value_range: config.value_range,
        })
    }

    /// Draw one input value in `[0, value_range)`.
    fn draw(&mut self) -> i64 {
        let scaled = self.rng.next_f64() * f64::from(self.value_range);
        scaled.floor() as i64
    }

    /// Draw `rows * cols` values and lay them out row-major.
    pub fn sample_matrix(&mut self, rows: usize, cols: usize) -> Result<Array2<i64>> {
        let values: Vec<i64> = (0..rows * cols).map(|_| self.draw()).collect();
        let matrix = Array2::from_shape_vec((rows, cols), values)
            .map_err(|e| GenError::Config(format!("cannot shape {rows}x{cols} matrix: {e}")))?;
        debug!(rows, cols, "sampled input matrix");
        Ok(matrix)
    }
}

/// Compare the first draw of `rng` against the expected literal.
pub fn verify_stream(rng: &mut Mt19937, bound: u32, expected: u32) -> Result<()> {
    let actual = rng
        .below(bound)
        .ok_or_else(|| GenError::Config("self-check bound must be positive".into()))?;
    if actual != expected {
        error!(expected, actual, "PRNG self-check failed");
        return Err(GenError::DeterminismViolation { expected, actual });
    }
    Ok(())
}
