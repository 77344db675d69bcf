use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("データソースが不正です: {0}")]
    InvalidSource(String),

    #[error("メニューの読み込みに失敗: {0}")]
    Orchestration(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("スプレッドシート解析エラー: {0}")]
    Menu(#[from] mess_menu_common::Error),

    #[error("HTTPクライアントエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MenuError>;
