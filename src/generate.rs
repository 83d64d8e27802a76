//! `folio build`: write the rendered page and copy static assets.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::content::ContentStore;
use crate::render;
use crate::session::FilterSession;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What a build produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub index: PathBuf,
    pub assets_copied: usize,
}

/// Render `index.html` into `out_dir` with the default filter active, then
/// copy `public_dir` (if it exists) alongside it.
///
/// When `out_dir` lives inside `public_dir` (e.g. `--public . --out dist`),
/// that subtree is skipped so the copy never reads its own output.
pub fn build_site(
    store: &ContentStore,
    public_dir: &Path,
    out_dir: &Path,
) -> Result<BuildReport, BuildError> {
    fs::create_dir_all(out_dir).map_err(|source| BuildError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let assets_copied = if public_dir.is_dir() {
        let canonical = |path: &Path| {
            fs::canonicalize(path).map_err(|source| BuildError::Copy {
                from: public_dir.to_path_buf(),
                to: out_dir.to_path_buf(),
                source,
            })
        };
        let (from, skip) = (canonical(public_dir)?, canonical(out_dir)?);
        if from == skip {
            tracing::debug!("Output directory is the public directory, nothing to copy");
            0
        } else {
            copy_dir(&from, out_dir, &skip)?
        }
    } else {
        tracing::debug!("No public directory at {}, skipping assets", public_dir.display());
        0
    };

    let session = FilterSession::new(store);
    let index = out_dir.join("index.html");
    fs::write(&index, render::render_document(&session)).map_err(|source| BuildError::Write {
        path: index.clone(),
        source,
    })?;

    tracing::info!(
        "Wrote {} ({} assets copied)",
        index.display(),
        assets_copied
    );
    Ok(BuildReport {
        index,
        assets_copied,
    })
}

/// Recursively copy the contents of `from` into `to`, leaving out the
/// directory `skip`. `from` must be canonical. Returns the file count.
fn copy_dir(from: &Path, to: &Path, skip: &Path) -> Result<usize, BuildError> {
    let copy_err = |source| BuildError::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    };

    fs::create_dir_all(to).map_err(|source| BuildError::CreateDir {
        path: to.to_path_buf(),
        source,
    })?;

    let mut copied = 0;
    for entry in fs::read_dir(from).map_err(copy_err)? {
        let entry = entry.map_err(copy_err)?;
        let src = entry.path();
        let dst = to.join(entry.file_name());
        if entry.file_type().map_err(copy_err)?.is_dir() {
            if src == skip {
                tracing::debug!("Skipping output directory {} inside public assets", src.display());
                continue;
            }
            copied += copy_dir(&src, &dst, skip)?;
        } else {
            fs::copy(&src, &dst).map_err(|source| BuildError::Copy {
                from: src.clone(),
                to: dst.clone(),
                source,
            })?;
            copied += 1;
        }
    }
    Ok(copied)
}
