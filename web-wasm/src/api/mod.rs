//! メニューファイルの取得

pub mod fetch;
