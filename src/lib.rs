//! Mess Menu CLI
//!
//! 4食堂のスプレッドシートを並行に読み込み、選択した曜日・食堂のメニューを表示する。

pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod loader;
pub mod render;
