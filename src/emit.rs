//! Writing rendered artifacts to disk

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{GenError, Result};
use crate::render::RenderedArtifact;

/// Create `dir` and any missing parents. Safe to call repeatedly.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| GenError::io(dir, e))
}

/// Temporary files are created owner-only; fixtures get ordinary file modes.
#[cfg(unix)]
fn set_fixture_permissions(file: &fs::File) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_fixture_permissions(_file: &fs::File) -> io::Result<()> {
    Ok(())
}

/// Writes artifacts under one base directory and reports each written path
/// on its report sink, one path per line.
pub struct Emitter<W: Write> {
    base_dir: PathBuf,
    report: W,
}

impl<W: Write> Emitter<W> {
    pub fn new(base_dir: impl Into<PathBuf>, report: W) -> Self {
        Self {
            base_dir: base_dir.into(),
            report,
        }
    }

    /// Write `text` to `<base_dir>/<file_name>` and report the path.
    ///
    /// The text goes to a temporary file in `base_dir` that is persisted
    /// over the target. If any step fails the temporary file is removed and
    /// nothing is reported, so neither a truncated fixture nor a staging file
    /// is left behind.
    pub fn emit(&mut self, file_name: &str, text: &str) -> Result<PathBuf> {
        ensure_dir(&self.base_dir)?;

        let path = self.base_dir.join(file_name);
        let mut staging = tempfile::Builder::new()
            .prefix(&format!(".{}.", file_name))
            .suffix(".partial")
            .tempfile_in(&self.base_dir)
            .map_err(|e| GenError::io(&self.base_dir, e))?;
        staging
            .write_all(text.as_bytes())
            .and_then(|()| staging.as_file().sync_all())
            .map_err(|e| GenError::io(staging.path(), e))?;
        set_fixture_permissions(staging.as_file()).map_err(|e| GenError::io(staging.path(), e))?;
        staging.persist(&path).map_err(|e| GenError::io(&path, e.error))?;

        writeln!(self.report, "{}", path.display()).map_err(|source| GenError::Report {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), bytes = text.len(), "wrote fixture");
        Ok(path)
    }

    /// Write every artifact in order
    pub fn emit_all(&mut self, artifacts: &[RenderedArtifact]) -> Result<Vec<PathBuf>> {
        ensure_dir(&self.base_dir)?;
        let written = artifacts
            .iter()
            .map(|artifact| self.emit(&artifact.file_name, &artifact.text))
            .collect::<Result<Vec<_>>>()?;
        info!(count = written.len(), dir = %self.base_dir.display(), "fixtures written");
        Ok(written)
    }

    pub fn into_report(self) -> W {
        self.report
    }
}

/// Result of comparing rendered artifacts against files already on disk
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub matching: Vec<PathBuf>,
    pub drifted: Vec<PathBuf>,
    pub missing: Vec<PathBuf>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.drifted.is_empty() && self.missing.is_empty()
    }
}

/// Compare each artifact with `<base_dir>/<file_name>` byte for byte
pub fn check_artifacts(base_dir: &Path, artifacts: &[RenderedArtifact]) -> Result<CheckReport> {
    let mut report = CheckReport::default();
    for artifact in artifacts {
        let path = base_dir.join(&artifact.file_name);
        match fs::read(&path) {
            Ok(bytes) if bytes == artifact.text.as_bytes() => report.matching.push(path),
            Ok(_) => report.drifted.push(path),
            Err(e) if e.kind() == io::ErrorKind::NotFound => report.missing.push(path),
            Err(e) => return Err(GenError::io(path, e)),
        }
    }
    Ok(report)
}
