//! Template rendering of one case into shader test text
//!
//! Rendering is plain substitution: [`Bindings`] is the complete name to
//! value mapping handed to the template, and undefined names are errors.

use std::fs;
use std::path::Path;

use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde::Serialize;
use tracing::error;

use crate::cases::TestCaseSpec;
use crate::constants::LOCAL_SIZE_X;
use crate::error::{GenError, Result};
use crate::matrix::{matrix_literal, InputMatrix, OutputMatrix};

/// Name the built-in template is registered under
pub const TEMPLATE_NAME: &str = "cmat_muladd_constant.vk_shader_test";

/// Built-in shader test template
pub const SHADER_TEST_TEMPLATE: &str =
    include_str!("templates/cmat_muladd_constant.vk_shader_test.j2");

/// Values substituted into the template for one case
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bindings {
    pub m: usize,
    pub n: usize,
    pub k: usize,
    pub acc_constant: String,
    pub input_type: &'static str,
    pub acc_type: &'static str,
    pub local_size_x: usize,
    pub matrix_a: String,
    pub matrix_b: String,
    pub matrix_r: String,
    pub matrix_r_size_in_bytes: usize,
}

impl Bindings {
    /// Bind a case and its matrices, checking every shape against the case
    pub fn new(
        spec: &TestCaseSpec,
        a: &InputMatrix,
        b: &InputMatrix,
        r: &OutputMatrix,
    ) -> Result<Self> {
        check_shape("A", spec.a_shape(), a.dim())?;
        check_shape("B", spec.b_shape(), b.dim())?;
        check_shape("R", spec.r_shape(), r.dim())?;

        Ok(Self {
            m: spec.m,
            n: spec.n,
            k: spec.k,
            acc_constant: spec.acc_literal(),
            input_type: spec.input_type.glsl_name(),
            acc_type: spec.acc_type.glsl_name(),
            local_size_x: LOCAL_SIZE_X,
            matrix_a: matrix_literal(a),
            matrix_b: matrix_literal(b),
            matrix_r: matrix_literal(r),
            matrix_r_size_in_bytes: spec.output_size_bytes(),
        })
    }
}

fn check_shape(
    matrix: &'static str,
    expected: (usize, usize),
    actual: (usize, usize),
) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(GenError::UnexpectedShape {
            matrix,
            expected,
            actual,
        })
    }
}

/// Rendered text of one case together with its filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifact {
    pub file_name: String,
    pub text: String,
}

/// Strict template renderer
pub struct Renderer {
    env: Environment<'static>,
    name: String,
}

impl Renderer {
    /// Renderer for the built-in template
    pub fn new() -> Result<Self> {
        Self::with_template(TEMPLATE_NAME, SHADER_TEST_TEMPLATE)
    }

    /// Renderer for a custom template. Syntax errors surface here.
    pub fn with_template(name: impl Into<String>, source: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.add_template_owned(name.clone(), source.into())
            .map_err(|e| render_error(&name, &e))?;
        Ok(Self { env, name })
    }

    /// Renderer for a template file read at runtime, registered under its
    /// file name
    pub fn from_path(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|e| GenError::io(path, e))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::with_template(name, source)
    }

    /// Render `spec` with its input and expected output matrices
    pub fn render(
        &self,
        spec: &TestCaseSpec,
        a: &InputMatrix,
        b: &InputMatrix,
        r: &OutputMatrix,
    ) -> Result<RenderedArtifact> {
        let bindings = Bindings::new(spec, a, b, r)?;
        let file_name = spec.file_name();
        let text = self.render_bindings(&bindings).map_err(|e| render_error(&file_name, &e))?;
        Ok(RenderedArtifact { file_name, text })
    }

    fn render_bindings(&self, bindings: &Bindings) -> std::result::Result<String, minijinja::Error> {
        self.env.get_template(&self.name)?.render(bindings)
    }
}

/// Collect the full diagnostic of a template error, source context and
/// cause chain included
fn render_error(case: &str, err: &minijinja::Error) -> GenError {
    let mut diagnostic = format!("{}\n{}", err, err.display_debug_info());
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        diagnostic.push_str(&format!("\ncaused by: {}", cause));
        source = std::error::Error::source(cause);
    }
    error!(case, "template rendering failed");
    GenError::Render {
        case: case.to_string(),
        diagnostic,
    }
}
