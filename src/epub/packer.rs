//! Package assembly.
//!
//! Drives the whole pipeline: traversal, container validation, and archive
//! writing, producing one finished buffer per invocation.

use std::path::Path;

use futures::stream::{self, StreamExt, TryStreamExt};
use tokio::fs;

use crate::collect::collect_files;
use crate::error::{Error, Result};
use crate::options::PackOptions;
use crate::zip::{CompressionMethod, ZipWriter};

use super::container::{ContainerLayout, MIMETYPE_CONTENT, MIMETYPE_NAME};

/// Package the directory at `source_dir` into an in-memory EPUB container.
///
/// Equivalent to [`pack_with_options`] with [`PackOptions::default`].
pub async fn pack(source_dir: impl AsRef<Path>) -> Result<Vec<u8>> {
    pack_with_options(source_dir, &PackOptions::default()).await
}

/// Package the directory at `source_dir` using explicit options.
///
/// The source tree is walked, filtered, and validated, then every file is
/// written DEFLATE-compressed into the archive in traversal order, behind a
/// fabricated uncompressed `mimetype` entry that always comes first. The
/// canonical media type is written regardless of what a source-tree
/// `mimetype` file holds.
///
/// File contents are read with bounded concurrency; entries still land in
/// the archive in traversal order.
///
/// # Errors
///
/// * [`Error::SourceDirMissing`] if `source_dir` is the empty path
/// * [`Error::Scan`] if the source tree cannot be walked
/// * [`Error::MissingContainerEntry`] if `META-INF/container.xml` is absent
/// * [`Error::Read`] if any collected file cannot be read
///
/// Any failure aborts the whole run; no partial buffer is returned.
pub async fn pack_with_options(
    source_dir: impl AsRef<Path>,
    options: &PackOptions,
) -> Result<Vec<u8>> {
    let root = source_dir.as_ref();
    if root.as_os_str().is_empty() {
        return Err(Error::SourceDirMissing);
    }

    let files = collect_files(root, options).await?;
    let layout = ContainerLayout::validate(files)?;

    let mut writer = ZipWriter::new();
    writer.add_entry(MIMETYPE_NAME, MIMETYPE_CONTENT, CompressionMethod::Stored)?;

    // Reads complete in submission order, so the archive order matches the
    // validated list no matter how the individual reads interleave.
    let mut entries = stream::iter(layout.into_files())
        .map(|rel| {
            let path = root.join(&rel);
            async move {
                match fs::read(&path).await {
                    Ok(data) => Ok((rel, data)),
                    Err(source) => Err(Error::Read { path, source }),
                }
            }
        })
        .buffered(options.read_concurrency);

    while let Some((rel, data)) = entries.try_next().await? {
        writer.add_entry(&rel, &data, CompressionMethod::Deflate)?;
    }

    writer.finish()
}
