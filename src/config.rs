//! Configuration for the fixture generator

use std::collections::HashSet;
use std::path::PathBuf;

use crate::constants::*;
use crate::error::{GenError, Result};

/// Element type of a cooperative-matrix operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    /// IEEE 754 binary16
    Float16,
    /// IEEE 754 binary32
    Float32,
}

impl ElementType {
    /// Type name in GLSL and in the test runner's ssbo commands
    pub fn glsl_name(&self) -> &'static str {
        match self {
            ElementType::Float16 => "float16_t",
            ElementType::Float32 => "float",
        }
    }

    /// Tag used in generated filenames
    pub fn file_tag(&self) -> &'static str {
        match self {
            ElementType::Float16 => "float16",
            ElementType::Float32 => "float32",
        }
    }

    /// Size of one element in bytes
    pub fn size_bytes(&self) -> usize {
        match self {
            ElementType::Float16 => 2,
            ElementType::Float32 => 4,
        }
    }
}

/// Full parameterization of one generation batch
///
/// The default reproduces the checked-in fixture set.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed of the single shared sampler stream
    pub seed: u64,

    /// Exclusive bound of the self-check draw
    pub self_check_bound: u32,

    /// Literal the self-check draw must equal
    pub self_check_value: u32,

    /// Input values are drawn from `0..value_range`
    pub value_range: u32,

    /// Outer enumeration axis
    pub acc_constants: Vec<f32>,

    /// Inner enumeration axis, `(m, n, k)`
    pub shapes: Vec<(usize, usize, usize)>,

    /// Element type of A and B
    pub input_type: ElementType,

    /// Element type of the accumulator and R
    pub acc_type: ElementType,

    /// Directory the files are written to
    pub output_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: CANONICAL_SEED,
            self_check_bound: SELF_CHECK_BOUND,
            self_check_value: SELF_CHECK_VALUE,
            value_range: INPUT_VALUE_RANGE,
            acc_constants: ACC_CONSTANTS.to_vec(),
            shapes: SHAPES.to_vec(),
            input_type: ElementType::Float16,
            acc_type: ElementType::Float32,
            output_dir: PathBuf::from(OUTPUT_DIR),
        }
    }
}

impl GeneratorConfig {
    /// Default configuration writing under `dir`
    pub fn with_output_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: dir.into(),
            ..Self::default()
        }
    }

    /// Reject configurations that would produce an empty, degenerate or
    /// colliding fixture set
    pub fn validate(&self) -> Result<()> {
        if self.acc_constants.is_empty() || self.shapes.is_empty() {
            return Err(GenError::Config("both case axes must be non-empty".into()));
        }
        // The [require] block of the template declares 16-bit storage and a float accumulator
        if self.input_type != ElementType::Float16 || self.acc_type != ElementType::Float32 {
            return Err(GenError::Config(format!(
                "unsupported element types {}/{}",
                self.input_type.file_tag(),
                self.acc_type.file_tag()
            )));
        }
        if self.value_range == 0 {
            return Err(GenError::Config("value range must be positive".into()));
        }
        if self.self_check_bound == 0 {
            return Err(GenError::Config("self-check bound must be positive".into()));
        }
        if let Some(&(m, n, k)) = self.shapes.iter().find(|&&(m, n, k)| m == 0 || n == 0 || k == 0) {
            return Err(GenError::Config(format!("degenerate shape {m}x{n}x{k}")));
        }
        if self.acc_constants.iter().any(|c| !c.is_finite()) {
            return Err(GenError::Config("accumulator constants must be finite".into()));
        }

        let unique_shapes: HashSet<_> = self.shapes.iter().collect();
        let unique_consts: HashSet<u32> = self.acc_constants.iter().map(|c| c.to_bits()).collect();
        if unique_shapes.len() != self.shapes.len() || unique_consts.len() != self.acc_constants.len() {
            return Err(GenError::Config(
                "duplicate axis entries would produce colliding filenames".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GeneratorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.seed, 1234);
        assert_eq!(config.self_check_value, 902);
        assert_eq!(config.acc_type.size_bytes(), 4);
    }

    #[test]
    fn test_rejects_duplicates() {
        let mut config = GeneratorConfig::default();
        config.shapes.push((8, 8, 16));
        assert!(matches!(config.validate(), Err(GenError::Config(_))));

        let mut config = GeneratorConfig::default();
        config.acc_constants = vec![0.5, 0.5];
        assert!(matches!(config.validate(), Err(GenError::Config(_))));
    }

    #[test]
    fn test_rejects_degenerate_axes() {
        let mut config = GeneratorConfig::default();
        config.shapes = vec![(8, 0, 16)];
        assert!(config.validate().is_err());

        let mut config = GeneratorConfig::default();
        config.acc_constants.clear();
        assert!(config.validate().is_err());

        let mut config = GeneratorConfig::default();
        config.value_range = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_unsupported_element_types() {
        let config = GeneratorConfig {
            input_type: ElementType::Float32,
            ..GeneratorConfig::default()
        };
        assert!(matches!(config.validate(), Err(GenError::Config(_))));
    }
}
