//! # cmatgen: cooperative-matrix mul-add fixture generator
//!
//! Generates Vulkan shader test fixtures for `coopMatMulAdd` with a
//! constant-initialized accumulator. Each fixture embeds the device
//! requirements, the compute shader, the input matrices and the expected
//! output as golden values that the test runner checks by exact equality.
//!
//! ## Pipeline
//!
//! 1. **Case enumeration**: accumulator constants × shape triples, constants
//!    outermost.
//!
//! 2. **Sampling**: one seeded MT19937 stream, self-checked at startup,
//!    draws A then B for every case in enumeration order.
//!
//! 3. **Reference model**: `R = A·B + c` in exact integer arithmetic.
//!
//! 4. **Rendering**: the case and its matrices are bound into the shader
//!    test template.
//!
//! 5. **Emission**: every case is rendered before the first file is
//!    written, and each written path is reported on stdout.
//!
//! ## Usage
//!
//! ```
//! use cmatgen::{build_artifacts, GeneratorConfig};
//!
//! let artifacts = build_artifacts(&GeneratorConfig::default()).unwrap();
//! assert_eq!(artifacts.len(), 4);
//! assert_eq!(
//!     artifacts[0].file_name,
//!     "float16-float32-constant-8x8x16-acc-0.0.vk_shader_test"
//! );
//! ```
//!
//! Writing the fixture set:
//!
//! ```no_run
//! use cmatgen::{run, GeneratorConfig};
//!
//! let written = run(&GeneratorConfig::default()).unwrap();
//! ```

pub mod cases;
pub mod config;
pub mod constants;
pub mod emit;
pub mod error;
pub mod matrix;
pub mod pipeline;
pub mod render;
pub mod sampler;

pub use cases::{enumerate_cases, TestCaseSpec};
pub use config::{ElementType, GeneratorConfig};
pub use emit::{check_artifacts, ensure_dir, CheckReport, Emitter};
pub use error::{GenError, Result};
pub use matrix::{matrix_literal, mul_add_constant, InputMatrix, OutputMatrix};
pub use pipeline::{
    build_artifacts, check, generate_cases, planned_paths, render_all, render_with, run,
    run_with_renderer, run_with_report, GeneratedCase,
};
pub use render::{Bindings, RenderedArtifact, Renderer};
pub use sampler::{Mt19937, Sampler};

/// Version information for the generator
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
