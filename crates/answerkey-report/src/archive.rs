//! Zip packaging of written answer files.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::files::AnswerFile;

/// Pack answer files into a zip archive at `dest`, stored by file name.
pub fn write_archive(files: &[AnswerFile], dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }

    let out = File::create(dest)
        .with_context(|| format!("failed to create archive: {}", dest.display()))?;
    let mut zip = ZipWriter::new(out);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    for file in files {
        let content = std::fs::read(&file.path)
            .with_context(|| format!("failed to read answer file: {}", file.path.display()))?;
        zip.start_file(file.file_name(), options)
            .with_context(|| format!("failed to add {} to archive", file.path.display()))?;
        zip.write_all(&content)?;
    }

    zip.finish()
        .with_context(|| format!("failed to finish archive: {}", dest.display()))?;
    tracing::info!(files = files.len(), "wrote archive {}", dest.display());
    Ok(())
}
