use std::fs::FileType;
use std::io;
use std::path::Path;

use async_trait::async_trait;

/// Lists the entry names of a static asset directory (non-recursive).
#[async_trait]
pub trait AssetSource: Send + Sync {
    async fn list(&self, dir: &Path) -> io::Result<Vec<String>>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FsAssetSource;

#[async_trait]
impl AssetSource for FsAssetSource {
    async fn list(&self, dir: &Path) -> io::Result<Vec<String>> {
        let mut entries = tokio::fs::read_dir(dir).await?;
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            // An entry that vanished or can't be stat'ed mid-listing is skipped.
            if !is_listable(entry.file_type().await) {
                continue;
            }
            // Non UTF-8 names can never match the versioned PDF pattern.
            if let Ok(name) = entry.file_name().into_string() {
                names.push(name);
            }
        }
        Ok(names)
    }
}

fn is_listable(file_type: io::Result<FileType>) -> bool {
    matches!(file_type, Ok(t) if !t.is_dir())
}

#[cfg(test)]
pub use memory::MemoryAssetSource;
