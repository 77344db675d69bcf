use clap::{Parser, Subcommand};
use mess_menu_common::{Day, Location};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mess-menu")]
#[command(about = "食堂の週間メニューをスプレッドシートから読み込んで表示", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 4食堂のメニューを読み込んで表示
    Show {
        /// 曜日（省略時は今日）
        #[arg(short, long)]
        day: Option<Day>,

        /// 食堂 (yuktahaar/kadamba/north/south)
        #[arg(short, long)]
        location: Option<Location>,

        /// データソース（URLまたはディレクトリ、省略時は設定値）
        #[arg(short, long)]
        source: Option<String>,

        /// 出力形式 (text/json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// 1食堂あたりのタイムアウト秒数（1以上）
        #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
        timeout: Option<u64>,
    },

    /// 時計付きで表示し続ける（Ctrl-Cで終了）
    Watch {
        /// 曜日（省略時は今日）
        #[arg(short, long)]
        day: Option<Day>,

        /// 食堂 (yuktahaar/kadamba/north/south)
        #[arg(short, long)]
        location: Option<Location>,

        /// データソース（URLまたはディレクトリ）
        #[arg(short, long)]
        source: Option<String>,
    },

    /// スプレッドシート1ファイルをパースして表示
    Parse {
        /// 入力ファイル（xlsx/xls/ods）
        #[arg(required = true)]
        file: PathBuf,

        /// ヘッダーが見つからない場合にエラーにする
        #[arg(long)]
        strict: bool,

        /// 出力形式 (text/json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// 設定を表示/編集
    Config {
        /// データソースを設定
        #[arg(long)]
        set_source: Option<String>,

        /// タイムアウト秒数を設定
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use text or json", s)),
        }
    }
}
