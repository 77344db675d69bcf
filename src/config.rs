use crate::error::{MenuError, Result};
use crate::loader::DEFAULT_TIMEOUT;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// データソースを上書きする環境変数
pub const SOURCE_ENV: &str = "MESS_MENU_SOURCE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `http(s)://` で始まればHTTP、それ以外はローカルディレクトリ
    pub source: String,
    pub extension: String,
    pub timeout_seconds: u64,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| MenuError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("mess-menu").join("config.json"))
    }

    /// データソース（環境変数を優先）
    pub fn source(&self) -> String {
        match std::env::var(SOURCE_ENV) {
            Ok(source) if !source.trim().is_empty() => source,
            _ => self.source.clone(),
        }
    }

    /// 1食堂あたりのタイムアウト（0秒は既定値に戻す）
    pub fn timeout(&self) -> Duration {
        if self.timeout_seconds == 0 {
            tracing::warn!("timeout_seconds = 0 is invalid, using default");
            return DEFAULT_TIMEOUT;
        }
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn set_source(&mut self, source: String) -> Result<()> {
        if source.trim().is_empty() {
            return Err(MenuError::Config("データソースが空です".into()));
        }
        self.source = source;
        self.save()
    }

    pub fn set_timeout(&mut self, seconds: u64) -> Result<()> {
        if seconds == 0 {
            return Err(MenuError::Config("タイムアウトは1秒以上にしてください".into()));
        }
        self.timeout_seconds = seconds;
        self.save()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: "http://localhost:8080".into(),
            extension: "xlsx".into(),
            timeout_seconds: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}
