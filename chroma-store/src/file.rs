use std::io::SeekFrom;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use chroma_common::{StoreError, VoteRecord, VoteStore};
use tokio::fs::{self, OpenOptions};
use tokio::io::{AsyncReadExt, AsyncSeekExt, AsyncWriteExt};
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Append-only JSON-lines file, one record per line.
///
/// A missing file reads as an empty store. Lines that do not parse are
/// skipped with a warning instead of failing the whole listing.
#[derive(Debug, Clone)]
pub struct FileVoteStore {
    path: PathBuf,
    // Serializes appends from clones sharing the same file.
    write_lock: Arc<Mutex<()>>,
}

impl FileVoteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True when the file ends in a partial line, e.g. after an interrupted
    /// append.
    async fn ends_mid_line(&self) -> Result<bool, StoreError> {
        let mut file = match fs::File::open(&self.path).await {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(e.into()),
        };
        if file.metadata().await?.len() == 0 {
            return Ok(false);
        }
        file.seek(SeekFrom::End(-1)).await?;
        let mut last = [0u8; 1];
        file.read_exact(&mut last).await?;
        Ok(last[0] != b'\n')
    }
}

#[async_trait]
impl VoteStore for FileVoteStore {
    async fn list(&self) -> Result<Vec<VoteRecord>, StoreError> {
        let data = match fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut records = Vec::new();
        for (line_no, line) in data.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match VoteRecord::from_json(line) {
                Ok(record) => records.push(record),
                Err(e) => warn!(
                    "Skipping unreadable record at {}:{}: {}",
                    self.path.display(),
                    line_no + 1,
                    e
                ),
            }
        }

        debug!("Loaded {} records from {}", records.len(), self.path.display());
        Ok(records)
    }

    async fn create(&self, record: VoteRecord) -> Result<VoteRecord, StoreError> {
        let json = record.to_json()?;

        let _guard = self.write_lock.lock().await;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let mut line = String::with_capacity(json.len() + 2);
        if self.ends_mid_line().await? {
            warn!("Terminating partial line at end of {}", self.path.display());
            line.push('\n');
        }
        line.push_str(&json);
        line.push('\n');
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        Ok(record)
    }
}
