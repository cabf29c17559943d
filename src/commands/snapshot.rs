use crate::error::Result;
use crate::foscam::FoscamCam;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

#[async_trait]
pub trait Snapshot: Send + Sync {
    /// Capture a still image, returning the raw JPEG bytes
    async fn snapshot(&self) -> Result<Vec<u8>>;

    /// Capture a still image and write it to `path`, returning the path
    async fn snapshot_to_file<P>(&self, path: P) -> Result<PathBuf>
    where
        P: AsRef<Path> + Send + Sync;
}

#[async_trait]
impl Snapshot for FoscamCam {
    async fn snapshot(&self) -> Result<Vec<u8>> {
        self.get_bytes("/snapshot.cgi").await
    }

    async fn snapshot_to_file<P>(&self, path: P) -> Result<PathBuf>
    where
        P: AsRef<Path> + Send + Sync,
    {
        let image = self.snapshot().await?;
        tokio::fs::write(&path, &image).await?;
        Ok(path.as_ref().to_path_buf())
    }
}
