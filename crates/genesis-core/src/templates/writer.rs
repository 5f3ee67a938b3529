//! Writing rendered artifacts into the project directory

use crate::error::{Error, Result};
use crate::templates::GeneratedArtifact;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Write artifacts below `target_dir`, creating parent directories and
/// overwriting existing files. Returns the written paths in order.
pub async fn write_artifacts(
    target_dir: &Path,
    artifacts: &[GeneratedArtifact],
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(artifacts.len());

    for artifact in artifacts {
        let target_path = target_dir.join(&artifact.relative_path);
        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| Error::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        fs::write(&target_path, &artifact.content)
            .await
            .map_err(|source| Error::Write {
                path: target_path.clone(),
                source,
            })?;
        tracing::debug!(path = %target_path.display(), bytes = artifact.content.len(), "wrote artifact");

        written.push(target_path);
    }

    Ok(written)
}
