//! Writing the rendered site to disk.
//!
//! Layout of the output directory:
//! `{out_dir}/index.html`, `{out_dir}/perspective.html`,
//! `{out_dir}/static/style.css`, `{out_dir}/static/scroll.js`.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::models::PageVariant;
use crate::pages::{self, assets};

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("failed to create directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Paths written by a build, in write order.
pub struct BuildReport {
    pub written: Vec<PathBuf>,
}

/// Render the requested variants and write them plus the shared assets.
pub fn build_site(out_dir: &Path, variants: &[PageVariant]) -> Result<BuildReport, SiteError> {
    let static_dir = out_dir.join("static");
    fs::create_dir_all(&static_dir).map_err(|source| SiteError::CreateDir {
        path: static_dir.clone(),
        source,
    })?;

    let mut written = Vec::new();

    for &variant in variants {
        let path = out_dir.join(variant.output_file());
        write_file(&path, pages::render(variant).as_bytes())?;
        written.push(path);
    }

    for (name, contents) in [("style.css", assets::CSS), ("scroll.js", assets::SCROLL_JS)] {
        let path = static_dir.join(name);
        write_file(&path, contents.as_bytes())?;
        written.push(path);
    }

    info!(files = written.len(), out = %out_dir.display(), "site written");
    Ok(BuildReport { written })
}

fn write_file(path: &Path, contents: &[u8]) -> Result<(), SiteError> {
    debug!(path = %path.display(), bytes = contents.len(), "writing");
    fs::write(path, contents).map_err(|source| SiteError::Write {
        path: path.to_path_buf(),
        source,
    })
}
