//! Source tree traversal.
//!
//! Walks the publication directory and produces the ordered list of files to
//! package, applying the artifact-exclusion set at every level.
//!
//! ## Traversal Strategy
//!
//! The walk is depth-first over an explicit worklist, so arbitrarily deep
//! trees cannot overflow the call stack. Entries are visited in directory
//! listing order; a directory's contents come before its later siblings,
//! the same order a recursive walk would produce.
//!
//! Symlinks are followed: a link to a directory is traversed, a link to a
//! file is collected. Cycles introduced through links are cut off by the
//! nesting limit in [`PackOptions`].

use std::io;
use std::path::Path;

use tokio::fs;

use crate::error::{Error, Result};
use crate::options::PackOptions;

/// Collect every regular file under `root` as root-relative slash paths.
///
/// Excluded base names are skipped wherever they appear in the tree; an
/// excluded directory is pruned whole. File contents are not read here.
///
/// # Arguments
///
/// * `root` - The source directory to walk
/// * `options` - Exclusion set and traversal limits
///
/// # Errors
///
/// Fails with [`Error::Scan`] if `root` is missing or not a directory, or if
/// any listing or metadata lookup below it fails. A failure anywhere aborts
/// the whole traversal; no partial list is returned.
pub async fn collect_files(root: &Path, options: &PackOptions) -> Result<Vec<String>> {
    let mut files = Vec::new();
    // Pending paths relative to the root, with their nesting depth. The root
    // itself is the empty relative path at depth zero.
    let mut pending: Vec<(String, usize)> = vec![(String::new(), 0)];

    while let Some((rel, depth)) = pending.pop() {
        let abs = if rel.is_empty() {
            root.to_path_buf()
        } else {
            root.join(&rel)
        };

        let meta = fs::metadata(&abs).await.map_err(|source| Error::Scan {
            path: abs.clone(),
            source,
        })?;

        if !meta.is_dir() {
            if rel.is_empty() {
                // The root must be a directory.
                return Err(Error::Scan {
                    path: abs,
                    source: io::Error::from(io::ErrorKind::NotADirectory),
                });
            }
            files.push(rel);
            continue;
        }

        // The root is not nested, so the limit never applies to it.
        if depth >= options.max_depth && !rel.is_empty() {
            return Err(Error::MaxDepthExceeded {
                path: abs,
                max_depth: options.max_depth,
            });
        }

        let mut listing = fs::read_dir(&abs).await.map_err(|source| Error::Scan {
            path: abs.clone(),
            source,
        })?;

        let mut children = Vec::new();
        while let Some(entry) = listing.next_entry().await.map_err(|source| Error::Scan {
            path: abs.clone(),
            source,
        })? {
            let name = entry
                .file_name()
                .into_string()
                .map_err(|_| Error::NonUtf8Name { path: entry.path() })?;

            if options.is_excluded(&name) {
                continue;
            }

            if rel.is_empty() {
                children.push(name);
            } else {
                children.push(format!("{rel}/{name}"));
            }
        }

        // Reversed so the stack pops children in listing order.
        children.reverse();
        for child in children {
            pending.push((child, depth + 1));
        }
    }

    Ok(files)
}
