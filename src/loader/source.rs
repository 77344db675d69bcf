//! メニューファイルの取得元
//!
//! - HttpSource: `<base>/data/<location>.<ext>` をGET
//! - DirSource: ローカルディレクトリの `<location>.<ext>` を読む

use super::types::LoadError;
use crate::error::{MenuError, Result};
use mess_menu_common::Location;
use std::path::{Path, PathBuf};

/// 食堂ごとのスプレッドシートのバイト列を返す取得元
#[allow(async_fn_in_trait)]
pub trait MenuSource {
    /// ログ用の取得先表記（URLやパス）
    fn describe(&self, location: Location) -> String;

    async fn fetch(&self, location: Location) -> std::result::Result<Vec<u8>, LoadError>;
}

pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
    extension: String,
}

impl HttpSource {
    pub fn new(base_url: &str, extension: &str) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(MenuError::InvalidSource(format!(
                "http:// または https:// で始まるURLを指定してください: {}",
                base_url
            )));
        }

        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.to_string(),
            extension: extension.to_string(),
        })
    }

    pub fn url(&self, location: Location) -> String {
        format!("{}{}", self.base_url, location.resource_path(&self.extension))
    }
}

impl MenuSource for HttpSource {
    fn describe(&self, location: Location) -> String {
        self.url(location)
    }

    async fn fetch(&self, location: Location) -> std::result::Result<Vec<u8>, LoadError> {
        let response = self
            .client
            .get(self.url(location))
            .send()
            .await
            .map_err(|e| LoadError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LoadError::Transport(e.to_string()))?;
        Ok(body.to_vec())
    }
}

pub struct DirSource {
    root: PathBuf,
    extension: String,
}

impl DirSource {
    pub fn new(root: &Path, extension: &str) -> Result<Self> {
        if !root.is_dir() {
            return Err(MenuError::InvalidSource(format!(
                "ディレクトリが見つかりません: {}",
                root.display()
            )));
        }
        Ok(Self {
            root: root.to_path_buf(),
            extension: extension.to_string(),
        })
    }

    pub fn path(&self, location: Location) -> PathBuf {
        self.root.join(location.file_name(&self.extension))
    }
}

impl MenuSource for DirSource {
    fn describe(&self, location: Location) -> String {
        self.path(location).display().to_string()
    }

    async fn fetch(&self, location: Location) -> std::result::Result<Vec<u8>, LoadError> {
        let path = self.path(location);
        tokio::fs::read(&path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => LoadError::NotFound(path.display().to_string()),
            _ => LoadError::Transport(e.to_string()),
        })
    }
}

/// 設定文字列から選ばれる取得元
pub enum AnySource {
    Http(HttpSource),
    Dir(DirSource),
}

impl AnySource {
    /// `http(s)://` で始まればHTTP、それ以外はディレクトリとして解釈
    pub fn from_spec(spec: &str, extension: &str) -> Result<Self> {
        let spec = spec.trim();
        if spec.is_empty() {
            return Err(MenuError::InvalidSource("データソースが空です".into()));
        }
        if spec.starts_with("http://") || spec.starts_with("https://") {
            Ok(AnySource::Http(HttpSource::new(spec, extension)?))
        } else {
            Ok(AnySource::Dir(DirSource::new(Path::new(spec), extension)?))
        }
    }
}

impl MenuSource for AnySource {
    fn describe(&self, location: Location) -> String {
        match self {
            AnySource::Http(source) => source.describe(location),
            AnySource::Dir(source) => source.describe(location),
        }
    }

    async fn fetch(&self, location: Location) -> std::result::Result<Vec<u8>, LoadError> {
        match self {
            AnySource::Http(source) => source.fetch(location).await,
            AnySource::Dir(source) => source.fetch(location).await,
        }
    }
}
