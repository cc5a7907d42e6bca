//! Zip materialization of a composed tree
//!
//! Every entry lives under a single `<root>/` directory. Folder nodes become
//! directory entries (ancestors included, each written once) so empty
//! directories survive extraction. Nodes whose path cannot be placed safely
//! below the root are logged and skipped rather than failing the archive.

use crate::error::{Result, ScaffoldError};
use crate::tree::TreeNode;
use std::collections::HashSet;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Serialize `forest` into an in-memory zip rooted at `root/`
pub fn materialize(root: &str, forest: &[TreeNode]) -> Result<Vec<u8>> {
    let segments = safe_segments(root).filter(|s| s.len() == 1).ok_or_else(|| {
        ScaffoldError::Parameter {
            name: "project_name",
            reason: format!("'{}' cannot be used as the archive root directory", root),
        }
    })?;

    let mut zip_buffer = Vec::new();
    {
        let mut archive = ArchiveWriter {
            zip: ZipWriter::new(Cursor::new(&mut zip_buffer)),
            options: SimpleFileOptions::default()
                .compression_method(zip::CompressionMethod::Deflated),
            directories: HashSet::new(),
            files: 0,
        };

        archive.ensure_directories(&segments)?;
        for node in forest {
            archive.add_node(&segments, node)?;
        }

        debug!(
            files = archive.files,
            directories = archive.directories.len(),
            "archive entries written"
        );
        archive.zip.finish()?;
    }

    Ok(zip_buffer)
}

/// Write `<root>.zip` into `dir`, creating the directory if needed
pub async fn write_archive(dir: &Path, root: &str, bytes: &[u8]) -> Result<PathBuf> {
    fs::create_dir_all(dir).await?;
    let target = dir.join(format!("{}.zip", root));
    fs::write(&target, bytes).await?;
    info!(path = %target.display(), bytes = bytes.len(), "archive written");
    Ok(target)
}

struct ArchiveWriter<W: Write + std::io::Seek> {
    zip: ZipWriter<W>,
    options: SimpleFileOptions,
    directories: HashSet<String>,
    files: usize,
}

impl<W: Write + std::io::Seek> ArchiveWriter<W> {
    fn add_node(&mut self, scope: &[String], node: &TreeNode) -> Result<()> {
        let Some(relative) = safe_segments(node.path()) else {
            warn!(
                scope = %scope.join("/"),
                path = node.path(),
                "skipping tree node with a malformed path"
            );
            return Ok(());
        };

        let mut full = scope.to_vec();
        full.extend(relative);

        match node {
            TreeNode::Folder { children, .. } => {
                self.ensure_directories(&full)?;
                for child in children {
                    self.add_node(&full, child)?;
                }
            }
            TreeNode::File { content, .. } => {
                self.ensure_directories(&full[..full.len() - 1])?;
                self.zip.start_file(full.join("/"), self.options)?;
                self.zip.write_all(content.as_bytes())?;
                self.files += 1;
            }
        }
        Ok(())
    }

    /// Directory entries for every prefix of `segments` not yet written
    fn ensure_directories(&mut self, segments: &[String]) -> Result<()> {
        for depth in 1..=segments.len() {
            let name = format!("{}/", segments[..depth].join("/"));
            if self.directories.insert(name.clone()) {
                self.zip.add_directory(name, self.options)?;
            }
        }
        Ok(())
    }
}

/// Split a relative node path into segments, `None` if it is not a safe relative path
fn safe_segments(path: &str) -> Option<Vec<String>> {
    if path.is_empty() || path.starts_with('/') || path.contains('\\') {
        return None;
    }
    let segments: Vec<String> = path
        .split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    if segments.is_empty() || segments.iter().any(|s| s == "." || s == "..") {
        return None;
    }
    Some(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    fn entry_names(bytes: &[u8]) -> Vec<String> {
        let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        archive.file_names().map(str::to_string).collect::<Vec<_>>()
    }

    fn read_entry(bytes: &[u8], name: &str) -> Vec<u8> {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut contents = Vec::new();
        file.read_to_end(&mut contents).unwrap();
        contents
    }

    #[test]
    fn test_empty_forest_has_only_the_root() {
        let bytes = materialize("Demo", &[]).unwrap();
        assert_eq!(entry_names(&bytes), vec!["Demo/"]);
    }

    #[test]
    fn test_files_and_directories() {
        let forest = vec![
            TreeNode::file("README.md", "# Demo\n"),
            TreeNode::folder(
                "core",
                vec![
                    TreeNode::folder("api", vec![TreeNode::folder("empty", vec![])]),
                    TreeNode::file("lib/blob.bin", vec![0u8, 159, 146, 150]),
                ],
            ),
        ];
        let bytes = materialize("Demo", &forest).unwrap();

        let mut names = entry_names(&bytes);
        names.sort();
        assert_eq!(
            names,
            vec![
                "Demo/",
                "Demo/README.md",
                "Demo/core/",
                "Demo/core/api/",
                "Demo/core/api/empty/",
                "Demo/core/lib/",
                "Demo/core/lib/blob.bin",
            ]
        );
        assert_eq!(read_entry(&bytes, "Demo/README.md"), b"# Demo\n");
        assert_eq!(read_entry(&bytes, "Demo/core/lib/blob.bin"), vec![0u8, 159, 146, 150]);
    }

    #[test]
    fn test_malformed_nodes_are_skipped() {
        let forest = vec![
            TreeNode::file("", "nameless"),
            TreeNode::file("/etc/passwd", "absolute"),
            TreeNode::folder("..", vec![TreeNode::file("escape.txt", "x")]),
            TreeNode::file("a/./b.txt", "dot"),
            TreeNode::file("ok.txt", "fine"),
        ];
        let bytes = materialize("Demo", &forest).unwrap();
        assert_eq!(entry_names(&bytes).len(), 2);
        assert_eq!(read_entry(&bytes, "Demo/ok.txt"), b"fine");
    }

    #[test]
    fn test_invalid_root_is_rejected() {
        for root in ["", "a/b", "..", "/abs"] {
            assert!(matches!(
                materialize(root, &[]),
                Err(ScaffoldError::Parameter { name: "project_name", .. })
            ));
        }
    }

    #[tokio::test]
    async fn test_write_archive_creates_zip_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out");
        let bytes = materialize("Demo", &[TreeNode::file("a.txt", "a")]).unwrap();

        let path = write_archive(&output, "Demo", &bytes).await.unwrap();
        assert_eq!(path, output.join("Demo.zip"));
        assert_eq!(std::fs::read(&path).unwrap(), bytes);
    }
}
