//! Batch pipeline: enumerate, sample, compute, render, emit
//!
//! Every stage finishes for all cases before the next begins, so a failure
//! anywhere before [`run`] starts writing leaves the output directory
//! untouched.

use std::io::Write;
use std::path::PathBuf;

use tracing::info;

use crate::cases::{enumerate_cases, TestCaseSpec};
use crate::config::GeneratorConfig;
use crate::emit::{check_artifacts, CheckReport, Emitter};
use crate::error::Result;
use crate::matrix::{ensure_exact_inputs, mul_add_constant, InputMatrix, OutputMatrix};
use crate::render::{RenderedArtifact, Renderer};
use crate::sampler::Sampler;

/// One case with its sampled inputs and expected output
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedCase {
    pub spec: TestCaseSpec,
    pub a: InputMatrix,
    pub b: InputMatrix,
    pub r: OutputMatrix,
}

/// Build every case from one self-checked sampler stream, in enumeration order
pub fn generate_cases(config: &GeneratorConfig) -> Result<Vec<GeneratedCase>> {
    config.validate()?;
    let mut sampler = Sampler::checked(config)?;

    let mut cases = Vec::new();
    for spec in enumerate_cases(config) {
        let (m, k) = spec.a_shape();
        let a = sampler.sample_matrix(m, k)?;
        let (k, n) = spec.b_shape();
        let b = sampler.sample_matrix(k, n)?;

        ensure_exact_inputs(&a, spec.input_type)?;
        ensure_exact_inputs(&b, spec.input_type)?;
        let r = mul_add_constant(&a, &b, spec.acc_constant)?;

        info!(case = %spec.file_name(), "generated case");
        cases.push(GeneratedCase { spec, a, b, r });
    }
    Ok(cases)
}

/// Render every case with the built-in template
pub fn render_all(cases: &[GeneratedCase]) -> Result<Vec<RenderedArtifact>> {
    let renderer = Renderer::new()?;
    render_with(&renderer, cases)
}

/// Render every case with `renderer`; stops at the first failure
pub fn render_with(renderer: &Renderer, cases: &[GeneratedCase]) -> Result<Vec<RenderedArtifact>> {
    cases
        .iter()
        .map(|case| renderer.render(&case.spec, &case.a, &case.b, &case.r))
        .collect()
}

/// Generate and render the full batch without touching the filesystem
pub fn build_artifacts(config: &GeneratorConfig) -> Result<Vec<RenderedArtifact>> {
    let cases = generate_cases(config)?;
    render_all(&cases)
}

/// Paths the batch would write
pub fn planned_paths(config: &GeneratorConfig) -> Result<Vec<PathBuf>> {
    config.validate()?;
    Ok(enumerate_cases(config)
        .map(|spec| config.output_dir.join(spec.file_name()))
        .collect())
}

/// Run the batch, reporting each written path on `report`
pub fn run_with_report<W: Write>(config: &GeneratorConfig, report: W) -> Result<Vec<PathBuf>> {
    run_with_renderer(config, &Renderer::new()?, report)
}

/// Run the batch with a specific renderer. Nothing is written unless every
/// case renders.
pub fn run_with_renderer<W: Write>(
    config: &GeneratorConfig,
    renderer: &Renderer,
    report: W,
) -> Result<Vec<PathBuf>> {
    let cases = generate_cases(config)?;
    let artifacts = render_with(renderer, &cases)?;
    let mut emitter = Emitter::new(&config.output_dir, report);
    emitter.emit_all(&artifacts)
}

/// Run the batch, reporting each written path on stdout
pub fn run(config: &GeneratorConfig) -> Result<Vec<PathBuf>> {
    run_with_report(config, std::io::stdout())
}

/// Compare the batch against the files already in the output directory
pub fn check(config: &GeneratorConfig) -> Result<CheckReport> {
    let artifacts = build_artifacts(config)?;
    let report = check_artifacts(&config.output_dir, &artifacts)?;
    info!(
        matching = report.matching.len(),
        drifted = report.drifted.len(),
        missing = report.missing.len(),
        "checked fixtures"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_count_and_shapes() {
        let cases = generate_cases(&GeneratorConfig::default()).unwrap();
        assert_eq!(cases.len(), 4);
        for case in &cases {
            assert_eq!(case.a.dim(), case.spec.a_shape());
            assert_eq!(case.b.dim(), case.spec.b_shape());
            assert_eq!(case.r.dim(), case.spec.r_shape());
        }
    }

    #[test]
    fn test_later_constant_draws_fresh_inputs() {
        let cases = generate_cases(&GeneratorConfig::default()).unwrap();
        // Same shape, different constant: the stream has advanced
        assert_eq!(cases[0].spec.a_shape(), cases[2].spec.a_shape());
        assert_ne!(cases[0].a, cases[2].a);
    }

    #[test]
    fn test_planned_paths_follow_output_dir() {
        let config = GeneratorConfig::with_output_dir("out");
        let paths = planned_paths(&config).unwrap();
        assert_eq!(paths.len(), 4);
        assert_eq!(
            paths[3],
            PathBuf::from("out").join("float16-float32-constant-8x16x16-acc-0.5.vk_shader_test")
        );
    }
}
