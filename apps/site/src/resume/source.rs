use std::io;
use std::path::Path;

use async_trait::async_trait;

/// Where résumé documents are read from.
///
/// Production reads the filesystem; tests swap in an in-memory map so the
/// loader can be exercised without touching disk.
#[async_trait]
pub trait ResumeSource: Send + Sync {
    async fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FsResumeSource;

#[async_trait]
impl ResumeSource for FsResumeSource {
    async fn read_to_string(&self, path: &Path) -> io::Result<String> {
        tokio::fs::read_to_string(path).await
    }
}

#[cfg(test)]
pub use memory::MemoryResumeSource;
