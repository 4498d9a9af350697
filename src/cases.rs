//! Case enumeration
//!
//! Cases are the Cartesian product of the accumulator constants and the shape
//! triples, constants outermost. The order fixes which part of the sampler
//! stream each case consumes, so it must never change silently.

use crate::config::{ElementType, GeneratorConfig};
use crate::constants::FILE_EXTENSION;
use crate::matrix::LiteralScalar;

/// One fully specified fixture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestCaseSpec {
    pub m: usize,
    pub n: usize,
    pub k: usize,
    pub acc_constant: f32,
    pub input_type: ElementType,
    pub acc_type: ElementType,
}

impl TestCaseSpec {
    /// Byte size of the m×n output buffer
    pub fn output_size_bytes(&self) -> usize {
        self.m * self.n * self.acc_type.size_bytes()
    }

    /// Shape of A
    pub fn a_shape(&self) -> (usize, usize) {
        (self.m, self.k)
    }

    /// Shape of B
    pub fn b_shape(&self) -> (usize, usize) {
        (self.k, self.n)
    }

    /// Shape of R
    pub fn r_shape(&self) -> (usize, usize) {
        (self.m, self.n)
    }

    /// Accumulator constant as it appears in the kernel and the filename
    pub fn acc_literal(&self) -> String {
        self.acc_constant.literal()
    }

    /// Filename derived from the identifying parameters,
    /// e.g. `float16-float32-constant-8x8x16-acc-0.0.vk_shader_test`
    pub fn file_name(&self) -> String {
        format!(
            "{}-{}-constant-{}x{}x{}-acc-{}.{}",
            self.input_type.file_tag(),
            self.acc_type.file_tag(),
            self.m,
            self.n,
            self.k,
            self.acc_literal(),
            FILE_EXTENSION
        )
    }
}

/// Ordered, restartable sequence of the configured cases
pub fn enumerate_cases(config: &GeneratorConfig) -> impl Iterator<Item = TestCaseSpec> + '_ {
    config.acc_constants.iter().flat_map(move |&acc_constant| {
        config.shapes.iter().map(move |&(m, n, k)| TestCaseSpec {
            m,
            n,
            k,
            acc_constant,
            input_type: config.input_type,
            acc_type: config.acc_type,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_are_outer_axis() {
        let config = GeneratorConfig::default();
        let order: Vec<(f32, (usize, usize, usize))> = enumerate_cases(&config)
            .map(|c| (c.acc_constant, (c.m, c.n, c.k)))
            .collect();

        assert_eq!(
            order,
            vec![
                (0.0, (8, 8, 16)),
                (0.0, (8, 16, 16)),
                (0.5, (8, 8, 16)),
                (0.5, (8, 16, 16)),
            ]
        );
    }

    #[test]
    fn test_enumeration_is_restartable() {
        let config = GeneratorConfig::default();
        let first: Vec<_> = enumerate_cases(&config).collect();
        let second: Vec<_> = enumerate_cases(&config).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_derived_sizes_and_name() {
        let config = GeneratorConfig::default();
        let case = enumerate_cases(&config).next().unwrap();

        assert_eq!(case.output_size_bytes(), 256);
        assert_eq!(case.a_shape(), (8, 16));
        assert_eq!(case.b_shape(), (16, 8));
        assert_eq!(case.file_name(), "float16-float32-constant-8x8x16-acc-0.0.vk_shader_test");
    }
}
