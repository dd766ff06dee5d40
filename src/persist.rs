use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::Result;
use color_eyre::eyre::{WrapErr, eyre};

/// Where a report ended up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    Primary(PathBuf),
    Fallback(PathBuf),
}

impl SaveOutcome {
    pub fn path(&self) -> &Path {
        match self {
            SaveOutcome::Primary(path) | SaveOutcome::Fallback(path) => path,
        }
    }
}

pub fn report_path(outdir: &Path, timestamp: &str, ext: &str) -> PathBuf {
    outdir.join(format!("report_{timestamp}.{ext}"))
}

/// Write `contents` to `path`, retrying once under `fallback_dir` with the
/// same file name. A failed fallback is returned as the error.
pub fn save_with_fallback(path: &Path, contents: &str, fallback_dir: &Path) -> Result<SaveOutcome> {
    let primary_err = match fs::write(path, contents) {
        Ok(()) => return Ok(SaveOutcome::Primary(path.to_path_buf())),
        Err(err) => err,
    };

    let file_name = path
        .file_name()
        .ok_or_else(|| eyre!("report path {} has no file name", path.display()))?;
    let fallback = fallback_dir.join(file_name);
    tracing::warn!(
        path = %path.display(),
        fallback = %fallback.display(),
        error = %primary_err,
        "primary write failed, using fallback location"
    );

    fs::write(&fallback, contents).wrap_err_with(|| {
        format!(
            "failed to write {} ({primary_err}) and fallback {}",
            path.display(),
            fallback.display()
        )
    })?;
    Ok(SaveOutcome::Fallback(fallback))
}
