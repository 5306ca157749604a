// Persisted command history
use crate::application::ports::HistoryRepository;
use crate::error::HistoryError;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

pub const HISTORY_KEY: &str = "command_history";

/// A named key-value store of strings, kept as one JSON object on disk.
#[derive(Debug, Clone)]
pub struct PreferencesFile {
    path: PathBuf,
}

impl PreferencesFile {
    pub fn open(directory: impl AsRef<Path>, name: &str) -> Self {
        Self {
            path: directory.as_ref().join(format!("{}.json", name)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Map<String, Value>, HistoryError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) if bytes.is_empty() => Ok(Map::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, values: &Map<String, Value>) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, serde_json::to_vec_pretty(values)?).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    pub async fn get_string(&self, key: &str) -> Result<Option<String>, HistoryError> {
        let values = self.load().await?;
        Ok(values.get(key).and_then(Value::as_str).map(str::to_string))
    }

    pub async fn put_string(&self, key: &str, value: String) -> Result<(), HistoryError> {
        let mut values = self.load().await?;
        values.insert(key.to_string(), Value::String(value));
        self.save(&values).await
    }

    pub async fn remove(&self, key: &str) -> Result<(), HistoryError> {
        let mut values = self.load().await?;
        if values.remove(key).is_some() {
            self.save(&values).await?;
        }
        Ok(())
    }
}

/// Command names joined by commas under a single preferences key.
///
/// Appends are serialized within this process. Separate processes sharing the
/// file still race, and the last writer wins.
#[derive(Debug)]
pub struct CommandHistoryStore {
    prefs: PreferencesFile,
    write_lock: Mutex<()>,
}

impl CommandHistoryStore {
    pub fn new(prefs: PreferencesFile) -> Self {
        Self {
            prefs,
            write_lock: Mutex::new(()),
        }
    }

    fn split(joined: &str) -> Vec<String> {
        if joined.is_empty() {
            Vec::new()
        } else {
            joined.split(',').map(str::to_string).collect()
        }
    }
}

#[async_trait]
impl HistoryRepository for CommandHistoryStore {
    async fn append(&self, command: &str) -> Result<(), HistoryError> {
        if command.is_empty() || command.contains(',') {
            return Err(HistoryError::InvalidName(command.to_string()));
        }

        let _guard = self.write_lock.lock().await;
        let mut history = self.read_all().await?;
        history.push(command.to_string());
        self.prefs.put_string(HISTORY_KEY, history.join(",")).await
    }

    async fn read_all(&self) -> Result<Vec<String>, HistoryError> {
        let joined = self.prefs.get_string(HISTORY_KEY).await?.unwrap_or_default();
        Ok(Self::split(&joined))
    }

    async fn clear(&self) -> Result<(), HistoryError> {
        let _guard = self.write_lock.lock().await;
        self.prefs.remove(HISTORY_KEY).await
    }
}
